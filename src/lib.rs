//! # laatste
//!
//! A terminal reader for the latest NOS.nl headlines.
//!
//! Two parts, composed top-down:
//!
//! - **Extractor** ([`scraper`]): fetches the listing and article pages and
//!   pulls structured data out with fixed CSS-selector lookups.
//! - **Interface** ([`ui`]): a keyboard-driven selection state machine with
//!   full-screen redraws over crossterm.

pub mod scraper;
pub mod ui;

pub use crate::scraper::{BlockKind, Headline, ScraperError, TextBlock};
pub use crate::ui::{App, RenderTheme};
