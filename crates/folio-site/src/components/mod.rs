//! Page components

mod cards;
mod footer;
mod icon;
mod nav;

pub use cards::*;
pub use footer::Footer;
pub use icon::{Icon, IconKind};
pub use nav::{NavAnchor, NavBar, NavLinks};
