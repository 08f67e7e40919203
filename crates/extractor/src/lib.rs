// ABOUTME: Main library entry point for the readable-content extractor.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, Article, ExtractError, ErrorCode, ContentType, Options.

//! Extractor - fetch a web page and pull out its readable article content.
//!
//! The pipeline is fetch, decode, readability extraction (Mozilla's algorithm
//! as ported by `dom_smoothie`), then write. Each stage reports its own
//! [`ErrorCode`] so callers can tell an unreachable page from an empty one.
//!
//! # Example
//!
//! ```no_run
//! use extractor::{Client, ExtractError};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), ExtractError> {
//!     let client = Client::builder().build()?;
//!     let article = client.extract("https://example.com/article").await?;
//!     println!("{}", article.content);
//!     Ok(())
//! }
//! ```

pub mod article;
pub mod client;
pub mod error;
pub mod formats;
pub mod options;
pub mod output;
pub mod reader;
pub mod resource;

pub use crate::article::Article;
pub use crate::client::Client;
pub use crate::error::{ErrorCode, ExtractError};
pub use crate::options::{ClientBuilder, ContentType, Options};
pub use crate::output::write_output;
pub use crate::reader::extract_readable;
