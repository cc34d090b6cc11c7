//! Blog post model

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use crate::config::{AuthorConfig, TagColorMode};

/// Tag colors the rendering layer understands
pub const TAG_COLORS: [&str; 9] = [
    "text-violet-500",
    "text-blue-500",
    "text-green-500",
    "text-red-500",
    "text-yellow-500",
    "text-purple-500",
    "text-pink-500",
    "text-orange-500",
    "text-indigo-500",
];

/// Custom deserializer that handles both a bare author name and the
/// full author record (legacy store entries carry only the name)
fn string_or_author<'de, D>(deserializer: D) -> Result<Author, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, MapAccess, Visitor};
    use std::fmt;

    struct StringOrAuthor;

    impl<'de> Visitor<'de> for StringOrAuthor {
        type Value = Author;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an author name or an author record")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Author {
                name: value.to_string(),
                image: String::new(),
                slug: String::new(),
            })
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Author {
                name: value,
                image: String::new(),
                slug: String::new(),
            })
        }

        fn visit_map<M>(self, map: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            Author::deserialize(de::value::MapAccessDeserializer::new(map))
        }
    }

    deserializer.deserialize_any(StringOrAuthor)
}

/// A blog-post record as persisted in the content store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Post title
    pub title: String,

    /// Summary shown on the blog index, also the seed body text
    pub description: String,

    /// Post author
    #[serde(deserialize_with = "string_or_author")]
    pub author: Author,

    /// Cover asset path
    pub image: String,

    /// URL path of the post; doubles as the primary key
    pub slug: String,

    /// Tags in display order
    #[serde(default)]
    pub tags: Vec<Tag>,

    /// Creation time in epoch milliseconds; legacy records omit it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    /// Custom fields on hand-edited records
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl BlogPost {
    /// Build the record for a freshly authored post
    ///
    /// `slug` is the operator-chosen identifier; the record's URL path
    /// and cover path are derived from it.
    pub fn new(title: &str, description: &str, slug: &str, tags: Vec<Tag>, author: Author) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            author,
            image: cover_image_path(slug),
            slug: post_path(slug),
            tags,
            created_at: Some(Utc::now().timestamp_millis()),
            extra: HashMap::new(),
        }
    }

    /// Name of this post's content directory under the posts root
    pub fn dir_name(&self) -> &str {
        self.slug.rsplit('/').next().unwrap_or(&self.slug)
    }
}

/// A post author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    /// Profile image asset path
    #[serde(default)]
    pub image: String,
    /// Profile page path
    #[serde(default)]
    pub slug: String,
}

impl From<&AuthorConfig> for Author {
    fn from(config: &AuthorConfig) -> Self {
        Self {
            name: config.name.clone(),
            image: config.image.clone(),
            slug: config.slug.clone(),
        }
    }
}

/// A display tag on a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub slug: String,
    pub color: String,
}

impl Tag {
    pub fn new(name: &str, mode: TagColorMode) -> Self {
        Self {
            name: name.to_string(),
            slug: tag_path(name),
            color: pick_color(name, mode).to_string(),
        }
    }
}

/// Split a comma-separated answer into tag records, preserving order
///
/// Whitespace around each name is trimmed; empty names are dropped.
pub fn parse_tags(input: &str, mode: TagColorMode) -> Vec<Tag> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| Tag::new(name, mode))
        .collect()
}

/// Cover asset path for an operator-chosen slug
pub fn cover_image_path(slug: &str) -> String {
    format!("/blogs/{}/cover.jpg", slug)
}

/// URL path for an operator-chosen slug
pub fn post_path(slug: &str) -> String {
    format!("/blogs/{}", slug)
}

/// Tag page path: lowercased name with the first space hyphenated
fn tag_path(name: &str) -> String {
    format!("/tags/{}", name.to_lowercase().replacen(' ', "-", 1))
}

fn pick_color(name: &str, mode: TagColorMode) -> &'static str {
    let index = match mode {
        TagColorMode::Random => rand::rng().random_range(0..TAG_COLORS.len()),
        TagColorMode::Hash => palette_index(name),
    };
    TAG_COLORS[index]
}

/// Stable palette index for a tag name, identical across runs
fn palette_index(name: &str) -> usize {
    let hash = name
        .bytes()
        .fold(0usize, |acc, byte| acc.wrapping_mul(31).wrapping_add(byte as usize));
    hash % TAG_COLORS.len()
}
