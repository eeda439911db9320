//! Core data for the KataCore / `InnerBright` website.
//!
//! This crate holds everything the web server renders from but that knows
//! nothing about HTTP: the site metadata record, the navigation lists, the
//! placeholder product catalogue, accordion state, the session capability,
//! the render manifest, the PWA assets, and the shutdown signal both
//! binaries wait on.

pub mod accordion;
pub mod error;
pub mod manifest;
pub mod navigation;
pub mod products;
pub mod pwa;
pub mod session;
pub mod shutdown;
pub mod site;

pub use error::{SessionError, SiteConfigError};
