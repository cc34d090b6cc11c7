//! Content module - the blog post model and its store

mod post;
mod store;

pub use post::{cover_image_path, parse_tags, post_path, Author, BlogPost, Tag, TAG_COLORS};
pub use store::{BlogStore, StoreError};
