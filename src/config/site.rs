//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,

    // Author identity stamped into every new post record
    pub author: AuthorConfig,

    // Paths, relative to the site base directory
    pub store_file: String,
    pub posts_dir: String,

    // Writing
    pub tag_color: TagColorMode,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Site".to_string(),
            description: String::new(),

            author: AuthorConfig::default(),

            store_file: "src/lib/blogs.json".to_string(),
            posts_dir: "src/app/blogs".to_string(),

            tag_color: TagColorMode::Random,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// The site author, as referenced from post records and bylines
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
    pub name: String,
    /// Profile image asset path
    pub image: String,
    /// Profile page path
    pub slug: String,
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            image: "/authors/john.jpg".to_string(),
            slug: "/authors/john".to_string(),
        }
    }
}

/// How tag colors are picked from the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagColorMode {
    /// Uniform pick per tag occurrence; the same tag name may get a
    /// different color on different posts
    Random,
    /// Stable pick derived from the tag name
    Hash,
}
