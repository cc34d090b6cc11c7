//! Configuration module

mod site;

pub use site::AuthorConfig;
pub use site::SiteConfig;
pub use site::TagColorMode;
