pub mod icon;
pub mod pages;

pub use icon::Icon;
pub use pages::{LandingPage, NotFoundPage, SeoMeta};
