//! Content blocks

use folio_core::{Heading, ProjectEntry, SocialLink};
use leptos::*;
use crate::components::{Icon, IconKind};

/// Section heading with its accent fragment highlighted.
#[component]
pub fn AccentHeading(heading: Heading, class: &'static str) -> impl IntoView {
    view! {
        <h2 class=class>
            {heading.lead}
            <span class="text-purple-500">{heading.accent}</span>
            {heading.trail}
        </h2>
    }
}

#[component]
pub fn TagPill(tag: String) -> impl IntoView {
    view! {
        <span class="text-sm bg-purple-500/10 text-purple-400 rounded-full px-4 py-1 font-medium border border-purple-500/20">
            {tag}
        </span>
    }
}

#[component]
pub fn ProjectCard(project: ProjectEntry) -> impl IntoView {
    let ProjectEntry {
        title,
        description,
        image,
        tags,
        icon,
    } = project;

    view! {
        <div class="project-card bg-black/50 backdrop-blur-sm rounded-xl overflow-hidden border border-purple-500/20">
            <div class="aspect-w-16 aspect-h-9">
                <img
                    src=image
                    alt=title.clone()
                    class="w-full h-[300px] object-cover opacity-80 hover:opacity-100 transition-opacity"
                />
            </div>
            <div class="p-8">
                <div class="flex items-center gap-3 mb-4">
                    <div class="text-purple-500">
                        <Icon kind=IconKind::from(icon) class="w-6 h-6"/>
                    </div>
                    <h3 class="text-xl font-semibold text-white">{title}</h3>
                </div>
                <p class="text-gray-400 mb-6">{description}</p>
                <div class="flex flex-wrap gap-2">
                    {tags.into_iter().map(|tag| view! { <TagPill tag=tag/> }).collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}

/// Row of profile icons. Links keep the browser's default behaviour.
#[component]
pub fn SocialIcons(links: Vec<SocialLink>) -> impl IntoView {
    view! {
        <div class="flex space-x-6">
            {links.into_iter().map(|link| view! {
                <a
                    href=link.href
                    class="social-icon text-purple-500 hover:text-purple-400"
                    aria-label=link.network.name()
                >
                    <Icon kind=IconKind::from(link.network) size=28/>
                </a>
            }).collect::<Vec<_>>()}
        </div>
    }
}
