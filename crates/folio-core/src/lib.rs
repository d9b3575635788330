//! Folio Core
//!
//! The data and state behind the single-page portfolio: the content payload
//! rendered by the site, the section identifiers that in-page navigation
//! targets, and the page controller that owns the mobile menu flag.

pub mod content;
pub mod controller;
pub mod menu;
pub mod section;

use thiserror::Error;

pub use content::{
    AboutSection, ContactSection, Footer, Heading, Hero, Image, NavLink, ProjectEntry,
    ProjectIcon, SiteContent, SocialLink, SocialNetwork, WorkSection,
};
pub use controller::{NavOutcome, PageController, Scroller};
pub use menu::MenuState;
pub use section::SectionId;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid section id {0:?}")]
    InvalidSectionId(String),

    #[error("Section id {0:?} is used by more than one section")]
    DuplicateSection(String),

    #[error("{field} targets unknown section {target:?}")]
    UnknownTarget { field: String, target: String },

    #[error("Navigation has no links")]
    EmptyNavigation,

    #[error("Work section has no projects")]
    EmptyProjects,

    #[error("Project #{0} has an empty title")]
    EmptyProjectTitle(usize),

    #[error("Invalid contact email {0:?}")]
    InvalidEmail(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
