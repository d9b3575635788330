//! Main application component

use folio_core::SiteContent;
use leptos::*;
use leptos_meta::*;
use crate::interaction::PageHandle;
use crate::pages::*;

/// The whole site is one page; in-page anchors are handled by `NavAnchor`,
/// so there is no client-side router to intercept their clicks.
#[component]
pub fn App(content: SiteContent) -> impl IntoView {
    provide_meta_context();
    PageHandle::provide();

    let title = content.brand.clone();
    provide_context(content);

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text=title/>
        <HomePage/>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_app_renders_page_without_router() {
        let html = leptos::ssr::render_to_string(|| {
            view! { <App content=SiteContent::bundled().unwrap()/> }
        })
        .to_string();
        for id in ["work", "about", "contact"] {
            assert!(html.contains(&format!("id=\"{id}\"")), "section {id}");
        }
    }
}
