//! Create a new blog post

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::io::{self, BufRead, Write};

use crate::config::AuthorConfig;
use crate::content::{parse_tags, Author, BlogPost};
use crate::helpers::prompt::Prompter;
use crate::Folio;

lazy_static! {
    static ref SLUG_RE: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

/// Article body stub written next to each new post
const ARTICLE_STUB: &str = r#"import Image from "next/image"

# {{ title }}

![{{ title }}](/blogs/{{ slug }}/cover.jpg)

<div className="flex justify-between items-end gap-10 border-b border-slate-200 pb-4">
  <div className="flex items-center gap-2">
    <div className="relative w-12 h-12 rounded-full overflow-hidden">
      <Image
        src="{{ author_image }}"
        alt="{{ author_name }}"
        fill
        objectFit="cover"
      />
    </div>
    <div className="flex flex-col">
      <h2 className="font-bold">{{ author_name }}</h2>
      <span className="text-sm text-green-500">6 min read</span>
    </div>
  </div>
  <h2 className="font-mono font-medium text-sm">19 Jan 2025</h2>
</div>

{{ description }}

"#;

/// Page-metadata stub consumed by the rendering layer
const LAYOUT_STUB: &str = r#"import { Metadata } from "next"

export const metadata: Metadata = {
  title: "{{ title }}",
  description: "{{ description }}",
  openGraph: {
    images: "{{ image }}",
  },
}

export default function MdxLayout({ children }: { children: React.ReactNode }) {
  return (
    <div className="flex flex-col max-w-3xl mx-auto px-4 sm:px-6 xl:px-8 gap-6 text-xl py-10">
      {children}
    </div>
  )
}
"#;

/// Operator answers to the four authoring prompts
#[derive(Debug, Clone)]
pub struct PostAnswers {
    pub title: String,
    pub description: String,
    /// Comma-separated tag names
    pub tags: String,
    /// URL-safe identifier, operator-chosen
    pub slug: String,
}

/// Run the new command: collect answers on the terminal, then create
pub fn run(folio: &Folio) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
    let answers = collect_answers(&mut prompter)?;
    create_post(folio, &answers)
}

/// Ask the four authoring questions in order
///
/// The slug prompt offers a slugified form of the title as the default,
/// but whatever the operator types wins.
pub fn collect_answers<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<PostAnswers> {
    let title = prompter.ask("Enter the blog title:")?;
    let description = prompter.ask("Enter the blog description:")?;
    let tags = prompter.ask("Enter the tags (comma separated):")?;
    let slug = prompter.ask_with_default("Enter the blog slug:", &slug::slugify(&title))?;

    Ok(PostAnswers {
        title,
        description,
        tags,
        slug,
    })
}

/// Create the post record and its content files
///
/// Scaffolding happens before the store append: a failure part way
/// through leaves stray files at worst, never a record without content.
pub fn create_post(folio: &Folio, answers: &PostAnswers) -> Result<()> {
    validate(answers)?;

    let store = folio.store();
    let existing = store.load()?;
    let slug_path = crate::content::post_path(&answers.slug);
    if existing.iter().any(|post| post.slug == slug_path) {
        anyhow::bail!("A post with slug {:?} already exists in the store", answers.slug);
    }

    let post_dir = folio.post_dir(&answers.slug);
    if post_dir.exists() {
        anyhow::bail!("Post directory already exists: {:?}", post_dir);
    }

    let tags = parse_tags(&answers.tags, folio.config.tag_color);
    let author = Author::from(&folio.config.author);
    let post = BlogPost::new(&answers.title, &answers.description, &answers.slug, tags, author);

    fs::create_dir_all(&post_dir)
        .with_context(|| format!("Failed to create post directory {:?}", post_dir))?;

    let article_path = post_dir.join("page.mdx");
    let article = render_article_stub(
        &answers.title,
        &answers.description,
        &answers.slug,
        &folio.config.author,
    );
    fs::write(&article_path, article)
        .with_context(|| format!("Failed to write {:?}", article_path))?;

    let layout_path = post_dir.join("layout.tsx");
    let layout = render_layout_stub(&answers.title, &answers.description, &post.image);
    fs::write(&layout_path, layout).with_context(|| format!("Failed to write {:?}", layout_path))?;

    // Placeholder until the operator drops in a real cover
    let cover_path = post_dir.join("cover.jpg");
    fs::write(&cover_path, "").with_context(|| format!("Failed to write {:?}", cover_path))?;

    store.append(&post)?;

    tracing::info!("Appended {} to {:?}", post.slug, store.path());
    println!("Created: {:?}", post_dir);

    Ok(())
}

/// Reject answers the store or filesystem cannot take
fn validate(answers: &PostAnswers) -> Result<()> {
    if answers.title.trim().is_empty() {
        anyhow::bail!("Title must not be empty");
    }
    if answers.description.trim().is_empty() {
        anyhow::bail!("Description must not be empty");
    }
    if answers.slug.is_empty() {
        anyhow::bail!("Slug must not be empty");
    }
    if !SLUG_RE.is_match(&answers.slug) {
        anyhow::bail!(
            "Slug {:?} is not URL-safe (lowercase letters, digits and hyphens)",
            answers.slug
        );
    }
    Ok(())
}

/// Render the article body stub
fn render_article_stub(title: &str, description: &str, slug: &str, author: &AuthorConfig) -> String {
    ARTICLE_STUB
        .replace("{{ title }}", title)
        .replace("{{ description }}", description)
        .replace("{{ slug }}", slug)
        .replace("{{ author_name }}", &author.name)
        .replace("{{ author_image }}", &author.image)
}

/// Render the page-metadata stub
fn render_layout_stub(title: &str, description: &str, image: &str) -> String {
    LAYOUT_STUB
        .replace("{{ title }}", title)
        .replace("{{ description }}", description)
        .replace("{{ image }}", image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::path::Path;

    fn test_folio(base_dir: &Path) -> Folio {
        let config = SiteConfig::default();
        let store_path = base_dir.join(&config.store_file);
        let posts_dir = base_dir.join(&config.posts_dir);
        Folio {
            config,
            base_dir: base_dir.to_path_buf(),
            store_path,
            posts_dir,
        }
    }

    fn seed_store(folio: &Folio) {
        fs::create_dir_all(folio.store_path.parent().unwrap()).unwrap();
        fs::write(&folio.store_path, "[]\n").unwrap();
    }

    fn answers() -> PostAnswers {
        PostAnswers {
            title: "Hello".to_string(),
            description: "World".to_string(),
            tags: "A, B".to_string(),
            slug: "hello".to_string(),
        }
    }

    #[test]
    fn test_create_post_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let folio = test_folio(dir.path());
        seed_store(&folio);

        create_post(&folio, &answers()).unwrap();

        let posts = folio.store().load().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Hello");
        assert_eq!(posts[0].slug, "/blogs/hello");
        assert_eq!(posts[0].image, "/blogs/hello/cover.jpg");
        assert_eq!(posts[0].tags.len(), 2);
        assert!(posts[0].created_at.is_some());

        let post_dir = folio.post_dir("hello");
        let article = fs::read_to_string(post_dir.join("page.mdx")).unwrap();
        assert!(article.contains("Hello"));
        assert!(article.contains("World"));

        let layout = fs::read_to_string(post_dir.join("layout.tsx")).unwrap();
        assert!(layout.contains("Hello"));

        let cover = fs::metadata(post_dir.join("cover.jpg")).unwrap();
        assert_eq!(cover.len(), 0);
    }

    #[test]
    fn test_create_post_rejects_duplicate_slug() {
        let dir = tempfile::tempdir().unwrap();
        let folio = test_folio(dir.path());
        seed_store(&folio);

        create_post(&folio, &answers()).unwrap();

        let mut second = answers();
        second.title = "Hello again".to_string();
        assert!(create_post(&folio, &second).is_err());
        assert_eq!(folio.store().load().unwrap().len(), 1);
    }

    #[test]
    fn test_store_untouched_when_directory_collides() {
        let dir = tempfile::tempdir().unwrap();
        let folio = test_folio(dir.path());
        seed_store(&folio);

        fs::create_dir_all(folio.post_dir("hello")).unwrap();

        assert!(create_post(&folio, &answers()).is_err());
        assert!(folio.store().load().unwrap().is_empty());
    }

    #[test]
    fn test_validate_rejects_bad_answers() {
        let mut empty_title = answers();
        empty_title.title = "  ".to_string();
        assert!(validate(&empty_title).is_err());

        let mut empty_description = answers();
        empty_description.description = String::new();
        assert!(validate(&empty_description).is_err());

        let mut empty_slug = answers();
        empty_slug.slug = String::new();
        assert!(validate(&empty_slug).is_err());

        for bad in ["Hello World", "UPPER", "trailing-", "-leading", "sp ace"] {
            let mut bad_slug = answers();
            bad_slug.slug = bad.to_string();
            assert!(validate(&bad_slug).is_err(), "accepted {:?}", bad);
        }

        assert!(validate(&answers()).is_ok());
    }

    #[test]
    fn test_collect_answers_in_order() {
        let input = std::io::Cursor::new(b"My Post\nA description\nReact, Rust\ncustom-slug\n".to_vec());
        let mut output = Vec::new();
        let mut prompter = Prompter::new(input, &mut output);

        let answers = collect_answers(&mut prompter).unwrap();
        assert_eq!(answers.title, "My Post");
        assert_eq!(answers.description, "A description");
        assert_eq!(answers.tags, "React, Rust");
        assert_eq!(answers.slug, "custom-slug");

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Enter the blog title:"));
        assert!(transcript.contains("Enter the blog slug:"));
    }

    #[test]
    fn test_slug_prompt_defaults_to_slugified_title() {
        let input = std::io::Cursor::new(b"My Great Post\ndesc\n\n\n".to_vec());
        let mut output = Vec::new();
        let mut prompter = Prompter::new(input, &mut output);

        let answers = collect_answers(&mut prompter).unwrap();
        assert_eq!(answers.slug, "my-great-post");
    }

    #[test]
    fn test_article_stub_contents() {
        let author = AuthorConfig::default();
        let article = render_article_stub("Hello", "World", "hello", &author);
        assert!(article.contains("# Hello"));
        assert!(article.contains("![Hello](/blogs/hello/cover.jpg)"));
        assert!(article.contains("John Doe"));
        assert!(article.contains("6 min read"));
        assert!(article.ends_with("World\n\n"));
    }

    #[test]
    fn test_layout_stub_contents() {
        let layout = render_layout_stub("Hello", "World", "/blogs/hello/cover.jpg");
        assert!(layout.contains("title: \"Hello\""));
        assert!(layout.contains("description: \"World\""));
        assert!(layout.contains("images: \"/blogs/hello/cover.jpg\""));
    }
}
