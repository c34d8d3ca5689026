//! Static site markup.
//!
//! Pages are plain functions of a [`SiteViewModel`](crate::presentation::view_models::SiteViewModel).
//! Every interpolated string goes through [`escape`]; no page carries inline
//! event handlers or scripts other than the JSON-LD block.

pub mod components;
pub mod escape;
pub mod layout;
pub mod pages;

pub use escape::escape;
pub use layout::STYLESHEET;
pub use pages::{agent_page, compare_page, directory_page, index};

pub const SITE_CSS: &str = include_str!("../../../../assets/site.css");
