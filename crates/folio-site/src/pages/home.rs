//! The portfolio page

use folio_core::{AboutSection, ContactSection, Hero, SiteContent, WorkSection};
use leptos::*;
use crate::components::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let SiteContent {
        brand,
        nav,
        hero,
        work,
        about,
        contact,
        footer,
    } = expect_context::<SiteContent>();

    view! {
        <div class="min-h-screen bg-black">
            <NavBar brand=brand links=nav/>
            <HeroSection hero=hero/>
            <Work work=work/>
            <About about=about/>
            <Contact contact=contact/>
            <Footer footer=footer/>
        </div>
    }
}

#[component]
fn HeroSection(hero: Hero) -> impl IntoView {
    view! {
        <section class="min-h-screen flex items-center justify-center px-4 sm:px-6 lg:px-8 relative overflow-hidden">
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_center,_rgba(147,51,234,0.1)_0%,_transparent_70%)]"></div>
            <div class="max-w-7xl mx-auto text-center relative z-10">
                <div class="hero-text">
                    <h1 class="text-7xl md:text-9xl font-bold text-white mb-8 leading-none">
                        {hero.heading.lead}
                        <span class="text-purple-500">{hero.heading.accent}</span>
                        {hero.heading.trail}
                    </h1>
                    <p class="text-xl md:text-2xl text-gray-400 mb-12 max-w-2xl mx-auto leading-relaxed">
                        {hero.tagline}
                    </p>
                    <NavAnchor
                        target=hero.cta.target
                        class="inline-flex items-center text-purple-500 hover:text-purple-400 text-lg font-medium"
                    >
                        {hero.cta.label}
                        <Icon kind=IconKind::ChevronDown class="ml-2 animate-bounce"/>
                    </NavAnchor>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Work(work: WorkSection) -> impl IntoView {
    view! {
        <section id=work.id.to_string() class="py-32 px-4 sm:px-6 lg:px-8 diagonal-section">
            <div class="max-w-7xl mx-auto">
                <AccentHeading heading=work.heading class="text-4xl font-bold mb-24 text-center"/>
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-16">
                    {work.projects.into_iter().map(|project| view! {
                        <ProjectCard project=project/>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn About(about: AboutSection) -> impl IntoView {
    let last = about.paragraphs.len().saturating_sub(1);

    view! {
        <section id=about.id.to_string() class="py-32 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <div class="grid lg:grid-cols-2 gap-20 items-center">
                    <div class="order-2 lg:order-1">
                        <AccentHeading heading=about.heading class="text-4xl font-bold mb-8"/>
                        {about.paragraphs.into_iter().enumerate().map(|(i, paragraph)| {
                            // Wider gap before the social row.
                            let class = if i == last {
                                "text-gray-400 mb-12 text-lg leading-relaxed"
                            } else {
                                "text-gray-400 mb-8 text-lg leading-relaxed"
                            };
                            view! { <p class=class>{paragraph}</p> }
                        }).collect::<Vec<_>>()}
                        <SocialIcons links=about.socials/>
                    </div>
                    <div class="order-1 lg:order-2">
                        <div class="project-card overflow-hidden rounded-xl border border-purple-500/20 relative">
                            <div class="absolute inset-0 bg-purple-500/10 z-10"></div>
                            <img src=about.portrait.src alt=about.portrait.alt class="w-full h-full object-cover"/>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Contact(contact: ContactSection) -> impl IntoView {
    let mailto = contact.mailto();

    view! {
        <section id=contact.id.to_string() class="py-32 px-4 sm:px-6 lg:px-8 relative overflow-hidden">
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_center,_rgba(147,51,234,0.1)_0%,_transparent_70%)]"></div>
            <div class="max-w-7xl mx-auto relative z-10">
                <div class="text-center max-w-2xl mx-auto">
                    <AccentHeading heading=contact.heading class="text-4xl font-bold mb-8"/>
                    <p class="text-gray-400 mb-12 text-lg">{contact.body}</p>
                    <a
                        href=mailto
                        class="contact-button inline-flex items-center bg-purple-500 text-white px-8 py-4 rounded-lg hover:bg-purple-600 transition-colors text-lg font-medium"
                    >
                        <Icon kind=IconKind::Mail class="mr-3"/>
                        {contact.button_label}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::interaction::PageHandle;

    fn render_home() -> String {
        leptos::ssr::render_to_string(|| {
            provide_context(SiteContent::bundled().unwrap());
            PageHandle::provide();
            view! { <HomePage/> }
        })
        .to_string()
    }

    fn render_home_with_menu_open() -> String {
        leptos::ssr::render_to_string(|| {
            provide_context(SiteContent::bundled().unwrap());
            PageHandle::provide().toggle_menu();
            view! { <HomePage/> }
        })
        .to_string()
    }

    #[test]
    fn test_sections_rendered_with_ids() {
        let html = render_home();
        for id in ["work", "about", "contact"] {
            assert_eq!(html.matches(&format!("id=\"{id}\"")).count(), 1, "section {id}");
        }
    }

    #[test]
    fn test_projects_rendered_in_order() {
        let html = render_home();
        let content = SiteContent::bundled().unwrap();
        let positions: Vec<usize> = content
            .work
            .projects
            .iter()
            .map(|p| html.find(&p.title).expect("project title rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_menu_closed_on_load() {
        let html = render_home();
        assert!(!html.contains("data-mobile-panel"));
        assert!(html.contains("aria-expanded=\"false\""));
    }

    #[test]
    fn test_menu_open_renders_mobile_panel() {
        let html = render_home_with_menu_open();
        assert_eq!(html.matches("data-mobile-panel").count(), 1);
        assert!(html.contains("aria-expanded=\"true\""));
        // Close glyph replaces the menu glyph.
        assert!(html.contains("M18 6 6 18"));
        assert!(!html.contains("M4 6h16"));
        // Desktop bar and mobile panel each link every section; the hero
        // call-to-action adds one more link to work.
        assert_eq!(html.matches("href=\"#work\"").count(), 3);
        assert_eq!(html.matches("href=\"#about\"").count(), 2);
        assert_eq!(html.matches("href=\"#contact\"").count(), 2);
    }

    #[test]
    fn test_menu_closed_links_appear_once() {
        let html = render_home();
        assert!(html.contains("M4 6h16"));
        assert!(!html.contains("M18 6 6 18"));
        assert_eq!(html.matches("href=\"#about\"").count(), 1);
        assert_eq!(html.matches("href=\"#contact\"").count(), 1);
    }

    #[test]
    fn test_last_about_paragraph_has_wider_margin() {
        let html = render_home();
        assert_eq!(html.matches("text-gray-400 mb-8 text-lg leading-relaxed").count(), 1);
        assert_eq!(html.matches("text-gray-400 mb-12 text-lg leading-relaxed").count(), 1);
    }

    #[test]
    fn test_anchors_point_at_sections() {
        let html = render_home();
        assert!(html.contains("href=\"#work\""));
        assert!(html.contains("href=\"#about\""));
        assert!(html.contains("href=\"#contact\""));
        assert!(html.contains("href=\"mailto:hello@sarah.design\""));
    }
}
