use folio_core::{MenuState, NavOutcome, PageController, SectionId, SiteContent};
use std::cell::RefCell;

/// Stand-in for the rendered document: knows the page's section ids and
/// records every scroll request.
struct RenderedPage {
    sections: Vec<SectionId>,
    scrolled: RefCell<Vec<SectionId>>,
}

impl RenderedPage {
    fn from_content(content: &SiteContent) -> Self {
        Self {
            sections: content.section_ids().into_iter().cloned().collect(),
            scrolled: RefCell::new(Vec::new()),
        }
    }

    fn scroll_into_view(&self, id: &SectionId) -> bool {
        if self.sections.contains(id) {
            self.scrolled.borrow_mut().push(id.clone());
            true
        } else {
            false
        }
    }
}

fn page() -> RenderedPage {
    RenderedPage::from_content(&SiteContent::bundled().unwrap())
}

#[test]
fn toggle_then_navigate_to_about() {
    let page = page();
    let mut controller = PageController::new(|id: &SectionId| page.scroll_into_view(id));
    assert_eq!(controller.menu(), MenuState::Closed);

    controller.toggle_menu();
    assert_eq!(controller.menu(), MenuState::Open);

    let outcome = controller.navigate("about");
    assert_eq!(outcome, NavOutcome::Scrolled(SectionId::about()));
    assert_eq!(controller.menu(), MenuState::Closed);
    assert_eq!(*page.scrolled.borrow(), vec![SectionId::about()]);
}

#[test]
fn navigate_to_contact_without_opening_menu() {
    let page = page();
    let mut controller = PageController::new(|id: &SectionId| page.scroll_into_view(id));

    controller.navigate("contact");
    assert_eq!(controller.menu(), MenuState::Closed);
    assert_eq!(*page.scrolled.borrow(), vec![SectionId::contact()]);
}

#[test]
fn unknown_target_closes_menu_without_scrolling() {
    let page = page();
    let mut controller = PageController::new(|id: &SectionId| page.scroll_into_view(id));

    controller.toggle_menu();
    assert_eq!(controller.navigate("nonexistent-id"), NavOutcome::MissingTarget);
    assert_eq!(controller.menu(), MenuState::Closed);
    assert!(page.scrolled.borrow().is_empty());
}

#[test]
fn every_nav_link_scrolls_to_its_section() {
    let content = SiteContent::bundled().unwrap();
    let page = RenderedPage::from_content(&content);
    let mut controller = PageController::new(|id: &SectionId| page.scroll_into_view(id));

    for link in &content.nav {
        controller.toggle_menu();
        assert!(controller.navigate_href(&link.target.href()).scrolled());
        assert!(!controller.is_menu_open());
    }
    let expected: Vec<_> = content.nav.iter().map(|l| l.target.clone()).collect();
    assert_eq!(*page.scrolled.borrow(), expected);
}

#[test]
fn repeated_navigation_restarts_scroll() {
    let page = page();
    let mut controller = PageController::new(|id: &SectionId| page.scroll_into_view(id));

    controller.navigate("work");
    controller.navigate("work");
    controller.navigate("contact");
    assert_eq!(
        *page.scrolled.borrow(),
        vec![SectionId::work(), SectionId::work(), SectionId::contact()]
    );
}
