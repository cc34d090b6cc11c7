//! Initialize a new site content tree

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::Folio;

/// Default site configuration written by `init`
const DEFAULT_CONFIG: &str = r#"# Site
title: My Site
description: ''

# Author stamped into every new post record
author:
  name: John Doe
  image: /authors/john.jpg
  slug: /authors/john

# Content layout
store_file: src/lib/blogs.json
posts_dir: src/app/blogs

# Tag colors: random (per occurrence) or hash (stable per tag name)
tag_color: random
"#;

/// Initialize the content tree in the given directory
///
/// An existing configuration or store file is left alone, so `init` is
/// safe to re-run on a site that already has content.
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;

    let config_path = target_dir.join("_config.yml");
    if !config_path.exists() {
        fs::write(&config_path, DEFAULT_CONFIG)?;
    }

    let folio = Folio::new(target_dir)?;

    if let Some(parent) = folio.store_path.parent() {
        fs::create_dir_all(parent)?;
    }
    if !folio.store_path.exists() {
        fs::write(&folio.store_path, "[]\n")?;
    }

    fs::create_dir_all(&folio.posts_dir)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_content_tree() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();

        assert!(dir.path().join("_config.yml").exists());
        assert!(dir.path().join("src/app/blogs").is_dir());

        let folio = Folio::new(dir.path()).unwrap();
        assert!(folio.store().load().unwrap().is_empty());
    }

    #[test]
    fn test_init_never_clobbers_an_existing_store() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();

        let store_path = dir.path().join("src/lib/blogs.json");
        let existing = "[\n  { \"title\": \"Kept\", \"description\": \"d\", \"author\": \"Jane\", \"image\": \"/i.webp\", \"slug\": \"/blogs/kept\" }\n]\n";
        fs::write(&store_path, existing).unwrap();

        init_site(dir.path()).unwrap();
        assert_eq!(fs::read_to_string(&store_path).unwrap(), existing);
    }
}
