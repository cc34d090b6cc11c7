//! List store content

use anyhow::Result;

use crate::helpers::format_timestamp_ms;
use crate::Folio;

/// List store content by type
pub fn run(folio: &Folio, content_type: &str) -> Result<()> {
    let store = folio.store();

    match content_type {
        "post" | "posts" => {
            let posts = store.load()?;
            println!("Posts ({}):", posts.len());
            for post in &posts {
                let date = post
                    .created_at
                    .and_then(|ms| format_timestamp_ms(ms, "%Y-%m-%d"))
                    .unwrap_or_else(|| "----------".to_string());
                println!("  {} - {} [{}]", date, post.title, post.slug);

                // Surface store/filesystem drift from hand edits
                let post_dir = folio.post_dir(post.dir_name());
                if !post_dir.exists() {
                    tracing::warn!("Missing content directory for {}: {:?}", post.slug, post_dir);
                }
            }
        }
        "tag" | "tags" => {
            let posts = store.load()?;
            let mut tags: std::collections::HashMap<String, usize> =
                std::collections::HashMap::new();
            for post in &posts {
                for tag in &post.tags {
                    *tags.entry(tag.name.clone()).or_insert(0) += 1;
                }
            }
            println!("Tags ({}):", tags.len());
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1));
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
    }

    Ok(())
}
