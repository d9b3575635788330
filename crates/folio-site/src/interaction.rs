//! Browser side of the page controller
//!
//! [`PageHandle`] puts a [`PageController`] in a reactive signal owned by the
//! `App` instance, so every component of the page shares one menu flag and
//! re-renders when it changes.

use folio_core::{MenuState, PageController, Scroller, SectionId};
use leptos::*;

/// Smooth-scrolls elements of the live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomScroller;

impl Scroller for DomScroller {
    #[cfg(feature = "hydrate")]
    fn scroll_into_view(&self, id: &SectionId) -> bool {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

        let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id.as_str()))
        else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    // No document to scroll outside the browser.
    #[cfg(not(feature = "hydrate"))]
    fn scroll_into_view(&self, _id: &SectionId) -> bool {
        false
    }
}

#[derive(Clone, Copy)]
pub struct PageHandle(RwSignal<PageController<DomScroller>>);

impl PageHandle {
    /// Create the page's controller and make it available to descendants.
    pub fn provide() -> Self {
        let handle = Self(create_rw_signal(PageController::new(DomScroller)));
        provide_context(handle);
        handle
    }

    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// Reactive read of the menu state.
    pub fn menu(&self) -> MenuState {
        self.0.with(|page| page.menu())
    }

    pub fn toggle_menu(&self) {
        self.0.update(|page| {
            let state = page.toggle_menu();
            tracing::debug!("Mobile menu {:?}", state);
        });
    }

    /// Navigate to the section named by an anchor `href` such as `#about`.
    pub fn navigate_href(&self, href: &str) {
        self.0.update(|page| {
            page.navigate_href(href);
        });
    }
}
