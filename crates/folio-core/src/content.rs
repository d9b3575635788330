//! Site content payload
//!
//! Everything the page shows (copy, images, projects, links) lives here as
//! plain data. The payload is JSON; the default one ships in
//! `content/site.json` and is compiled into every build so the server render
//! and the hydrated client always agree.

use crate::section::SectionId;
use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

const BUNDLED: &str = include_str!("../content/site.json");

/// Heading with a highlighted fragment: `lead`, then `accent`, then `trail`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Heading {
    pub lead: String,
    pub accent: String,
    pub trail: String,
}

impl Heading {
    pub fn plain_text(&self) -> String {
        format!("{}{}{}", self.lead, self.accent, self.trail)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub target: SectionId,
}

/// Category glyph shown next to a project title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectIcon {
    Palette,
    Layout,
    Package,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialNetwork {
    Instagram,
    Twitter,
    Linkedin,
}

impl SocialNetwork {
    pub fn name(&self) -> &'static str {
        match self {
            SocialNetwork::Instagram => "Instagram",
            SocialNetwork::Twitter => "Twitter",
            SocialNetwork::Linkedin => "LinkedIn",
        }
    }
}

/// Outbound profile link. The `href` is rendered as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub icon: ProjectIcon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub heading: Heading,
    pub tagline: String,
    pub cta: NavLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSection {
    #[serde(default = "SectionId::work")]
    pub id: SectionId,
    pub heading: Heading,
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutSection {
    #[serde(default = "SectionId::about")]
    pub id: SectionId,
    pub heading: Heading,
    pub paragraphs: Vec<String>,
    pub portrait: Image,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSection {
    #[serde(default = "SectionId::contact")]
    pub id: SectionId,
    pub heading: Heading,
    pub body: String,
    pub email: String,
    pub button_label: String,
}

impl ContactSection {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub copyright: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

/// The complete page payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub brand: String,
    pub nav: Vec<NavLink>,
    pub hero: Hero,
    pub work: WorkSection,
    pub about: AboutSection,
    pub contact: ContactSection,
    pub footer: Footer,
}

impl SiteContent {
    /// The payload compiled into the crate.
    pub fn bundled() -> CoreResult<Self> {
        Self::from_json_str(BUNDLED)
    }

    /// Parse and validate a JSON payload.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Read, parse and validate a JSON payload from disk.
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        debug!("Loading site content from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Section ids in page order.
    pub fn section_ids(&self) -> [&SectionId; 3] {
        [&self.work.id, &self.about.id, &self.contact.id]
    }

    pub fn has_section(&self, id: &str) -> bool {
        self.section_ids().iter().any(|s| s.as_str() == id)
    }

    /// Navigation links targeting `id`.
    pub fn links_to<'a>(&'a self, id: &'a SectionId) -> impl Iterator<Item = &'a NavLink> + 'a {
        self.nav.iter().filter(move |link| &link.target == id)
    }

    pub fn validate(&self) -> CoreResult<()> {
        let mut seen = HashSet::new();
        for id in self.section_ids() {
            if !seen.insert(id.as_str()) {
                return Err(CoreError::DuplicateSection(id.to_string()));
            }
        }

        if self.nav.is_empty() {
            return Err(CoreError::EmptyNavigation);
        }
        for (i, link) in self.nav.iter().enumerate() {
            self.check_target(&format!("nav[{i}]"), &link.target)?;
        }
        self.check_target("hero.cta", &self.hero.cta.target)?;

        if self.work.projects.is_empty() {
            return Err(CoreError::EmptyProjects);
        }
        if let Some(i) = self
            .work
            .projects
            .iter()
            .position(|p| p.title.trim().is_empty())
        {
            return Err(CoreError::EmptyProjectTitle(i));
        }

        let email = self.contact.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(CoreError::InvalidEmail(self.contact.email.clone()));
        }

        debug!(
            "Validated site content: {} nav links, {} projects",
            self.nav.len(),
            self.work.projects.len()
        );
        Ok(())
    }

    fn check_target(&self, field: &str, target: &SectionId) -> CoreResult<()> {
        if self.has_section(target.as_str()) {
            Ok(())
        } else {
            Err(CoreError::UnknownTarget {
                field: field.to_string(),
                target: target.to_string(),
            })
        }
    }
}
