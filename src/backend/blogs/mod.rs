//! Blogs
//!
//! CRUD and text search over the `blogs` collection. Creates and updates
//! arrive as multipart bodies carrying the preview image.
//!
//! - **`types`** - multipart field extraction and validation
//! - **`handlers`** - one handler per route

pub mod handlers;
pub mod types;

pub use handlers::{
    delete_blog, get_blog, list_blogs, list_user_blogs, search_blogs, store_blog, update_blog,
};
