//! Page view controller
//!
//! Owns the mobile menu flag for one rendered page and mediates the two
//! interactive behaviours of the page: toggling the menu and in-page
//! navigation. Scrolling itself is delegated to a [`Scroller`], so the
//! controller runs the same in the browser and in tests.

use crate::menu::MenuState;
use crate::section::SectionId;

/// Brings a section of the current document into view.
pub trait Scroller {
    /// Smoothly scroll the element identified by `id` into view.
    ///
    /// Returns `false` when the document has no such element; nothing is
    /// scrolled in that case.
    fn scroll_into_view(&self, id: &SectionId) -> bool;
}

impl<F> Scroller for F
where
    F: Fn(&SectionId) -> bool,
{
    fn scroll_into_view(&self, id: &SectionId) -> bool {
        self(id)
    }
}

/// What a call to [`PageController::navigate`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// A scroll toward the section was requested.
    Scrolled(SectionId),
    /// No element carries the requested id; no scroll happened.
    MissingTarget,
}

impl NavOutcome {
    pub fn scrolled(&self) -> bool {
        matches!(self, NavOutcome::Scrolled(_))
    }
}

#[derive(Debug, Clone)]
pub struct PageController<S> {
    menu: MenuState,
    scroller: S,
}

impl<S: Scroller> PageController<S> {
    /// A controller for a freshly loaded page: menu closed.
    pub fn new(scroller: S) -> Self {
        Self {
            menu: MenuState::Closed,
            scroller,
        }
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn scroller(&self) -> &S {
        &self.scroller
    }

    /// Flip the mobile menu and return the new state.
    pub fn toggle_menu(&mut self) -> MenuState {
        self.menu.toggle();
        self.menu
    }

    /// Scroll to the section named `target` and close the menu.
    ///
    /// The menu closes whether or not the section exists. A missing or
    /// malformed target is not an error.
    pub fn navigate(&mut self, target: &str) -> NavOutcome {
        let outcome = match SectionId::new(target) {
            Ok(id) if self.scroller.scroll_into_view(&id) => NavOutcome::Scrolled(id),
            _ => NavOutcome::MissingTarget,
        };
        self.menu.close();
        outcome
    }

    /// [`navigate`](Self::navigate) driven by an anchor's `href`.
    pub fn navigate_href(&mut self, href: &str) -> NavOutcome {
        match SectionId::from_href(href) {
            Some(id) => self.navigate(id.as_str()),
            None => {
                self.menu.close();
                NavOutcome::MissingTarget
            }
        }
    }
}
