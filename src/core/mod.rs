//! Page content model, entrance animation state and the hosting server pieces

#[cfg(feature = "ssr")]
pub mod config;
mod content;
#[cfg(feature = "ssr")]
pub mod error;
pub mod reveal;
#[cfg(feature = "ssr")]
pub mod server;

pub use content::*;
pub use reveal::RevealOptions;
