//! # Postboard CLI
//!
//! HTTP client for the posts API and the list/form view driving it.

pub mod client;
pub mod view;

pub use client::{ClientError, PostsClient};
pub use view::{PostForm, PostsView};
