//! Section identifiers

use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const WORK: &str = "work";
pub const ABOUT: &str = "about";
pub const CONTACT: &str = "contact";

/// Identifier of a scrollable region of the page, the `id` attribute of its
/// `<section>` element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectionId(String);

impl SectionId {
    /// Non-empty, no whitespace and no `#`.
    pub fn new(id: impl Into<String>) -> CoreResult<Self> {
        let id = id.into();
        if id.is_empty() || id.contains('#') || id.chars().any(char::is_whitespace) {
            return Err(CoreError::InvalidSectionId(id));
        }
        Ok(Self(id))
    }

    /// Section named by an in-page anchor such as `#work`.
    ///
    /// Anything that is not a bare fragment (`mailto:`, absolute URLs, `#`
    /// on its own) names no section.
    pub fn from_href(href: &str) -> Option<Self> {
        href.strip_prefix('#').and_then(|fragment| Self::new(fragment).ok())
    }

    pub fn work() -> Self {
        Self(WORK.to_string())
    }

    pub fn about() -> Self {
        Self(ABOUT.to_string())
    }

    pub fn contact() -> Self {
        Self(CONTACT.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Anchor `href` pointing at this section.
    pub fn href(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SectionId {
    type Error = CoreError;

    fn try_from(value: String) -> CoreResult<Self> {
        Self::new(value)
    }
}

impl From<SectionId> for String {
    fn from(id: SectionId) -> Self {
        id.0
    }
}
