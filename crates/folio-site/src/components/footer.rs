use folio_core::Footer as FooterContent;
use leptos::*;

#[component]
pub fn Footer(footer: FooterContent) -> impl IntoView {
    view! {
        <footer class="py-12 px-4 sm:px-6 lg:px-8 border-t border-purple-500/20">
            <div class="max-w-7xl mx-auto flex flex-col md:flex-row justify-between items-center">
                <p class="text-gray-500">{footer.copyright}</p>
                <div class="flex space-x-8 mt-6 md:mt-0">
                    {footer.socials.into_iter().map(|link| view! {
                        <a href=link.href class="text-gray-500 hover:text-purple-500 transition-colors">
                            {link.network.name()}
                        </a>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </footer>
    }
}
