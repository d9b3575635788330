//! Navigation bar and in-page anchors

use folio_core::{NavLink, SectionId};
use leptos::ev::MouseEvent;
use leptos::*;
use crate::components::{Icon, IconKind};
use crate::interaction::PageHandle;

/// Anchor to a section of the page. Clicks smooth-scroll instead of jumping
/// and close the mobile menu.
#[component]
pub fn NavAnchor(
    target: SectionId,
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let page = PageHandle::expect();
    let href = target.href();
    let click_href = href.clone();

    view! {
        <a
            href=href
            class=class
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                page.navigate_href(&click_href);
            }
        >
            {children()}
        </a>
    }
}

#[component]
pub fn NavLinks(links: Vec<NavLink>, class: &'static str) -> impl IntoView {
    links
        .into_iter()
        .map(|link| view! { <NavAnchor target=link.target class=class>{link.label}</NavAnchor> })
        .collect::<Vec<_>>()
}

#[component]
pub fn NavBar(brand: String, links: Vec<NavLink>) -> impl IntoView {
    let page = PageHandle::expect();
    let desktop_links = links.clone();

    view! {
        <nav class="fixed w-full floating-nav z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-20 items-center">
                    <div class="text-3xl font-bold text-purple-500">{brand}</div>

                    // Desktop Nav
                    <div class="hidden md:flex space-x-12">
                        <NavLinks links=desktop_links class="text-gray-300 hover:text-purple-500 font-medium"/>
                    </div>

                    // Mobile menu button
                    <button
                        class="md:hidden text-gray-300"
                        aria-label="Toggle navigation"
                        aria-expanded=move || page.menu().aria_expanded()
                        on:click=move |_| page.toggle_menu()
                    >
                        <Show
                            when=move || page.menu().is_open()
                            fallback=|| view! { <Icon kind=IconKind::Menu/> }
                        >
                            <Icon kind=IconKind::Close/>
                        </Show>
                    </button>
                </div>
            </div>

            // Mobile menu
            <Show when=move || page.menu().is_open()>
                <div class="md:hidden absolute w-full bg-black/95 backdrop-blur-lg" data-mobile-panel="">
                    <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3">
                        <NavLinks
                            links=links.clone()
                            class="block px-3 py-2 text-gray-300 hover:text-purple-500 font-medium"
                        />
                    </div>
                </div>
            </Show>
        </nav>
    }
}
