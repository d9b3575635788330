//! Inline SVG glyphs

use folio_core::{ProjectIcon, SocialNetwork};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Menu,
    Close,
    ChevronDown,
    Mail,
    Palette,
    Layout,
    Package,
    Instagram,
    Twitter,
    Linkedin,
}

impl IconKind {
    /// Stroke paths on a 24x24 grid.
    fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            IconKind::Close => &["M18 6 6 18", "m6 6 12 12"],
            IconKind::ChevronDown => &["m6 9 6 6 6-6"],
            IconKind::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            IconKind::Palette => &[
                "M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.93 0 1.65-.75 1.65-1.69 0-.44-.18-.84-.44-1.13-.29-.29-.44-.65-.44-1.13a1.64 1.64 0 0 1 1.67-1.67h2c3.05 0 5.55-2.5 5.55-5.55C21.97 6.01 17.46 2 12 2z",
                "M13.5 6.5h.01",
                "M17.5 10.5h.01",
                "M8.5 7.5h.01",
                "M6.5 12.5h.01",
            ],
            IconKind::Layout => &[
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
                "M3 9h18",
                "M9 21V9",
            ],
            IconKind::Package => &[
                "m7.5 4.27 9 5.15",
                "M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z",
                "m3.3 7 8.7 5 8.7-5",
                "M12 22V12",
            ],
            IconKind::Instagram => &[
                "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
                "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
                "M17.5 6.5h.01",
            ],
            IconKind::Twitter => &[
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            ],
            IconKind::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M4 2a2 2 0 1 0 0 4 2 2 0 1 0 0-4z",
            ],
        }
    }
}

impl From<ProjectIcon> for IconKind {
    fn from(icon: ProjectIcon) -> Self {
        match icon {
            ProjectIcon::Palette => IconKind::Palette,
            ProjectIcon::Layout => IconKind::Layout,
            ProjectIcon::Package => IconKind::Package,
        }
    }
}

impl From<SocialNetwork> for IconKind {
    fn from(network: SocialNetwork) -> Self {
        match network {
            SocialNetwork::Instagram => IconKind::Instagram,
            SocialNetwork::Twitter => IconKind::Twitter,
            SocialNetwork::Linkedin => IconKind::Linkedin,
        }
    }
}

#[component]
pub fn Icon(
    kind: IconKind,
    #[prop(default = 24)] size: u32,
    #[prop(optional)] class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <svg
            class=class
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {kind.paths().iter().map(|d| view! { <path d=*d/> }).collect::<Vec<_>>()}
        </svg>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_class_attribute_only_when_given() {
        let bare = leptos::ssr::render_to_string(|| view! { <Icon kind=IconKind::Menu/> }).to_string();
        assert!(!bare.contains("class="));

        let styled = leptos::ssr::render_to_string(|| {
            view! { <Icon kind=IconKind::Palette class="w-6 h-6"/> }
        })
        .to_string();
        assert!(styled.contains("class=\"w-6 h-6\""));
    }

    #[test]
    fn test_project_and_social_glyphs() {
        assert_eq!(IconKind::from(ProjectIcon::Layout), IconKind::Layout);
        assert_eq!(IconKind::from(SocialNetwork::Linkedin), IconKind::Linkedin);
    }
}
