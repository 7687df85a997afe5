//! Validation and marketplace submission of generated plugin directories.
//!
//! The converter only produces plugin directories. This crate checks that a
//! directory holds what a marketplace requires ([`validate_plugin_dir`]) and
//! submits it through a [`Publisher`]. Network access is behind the
//! [`PullRequestClient`] trait; no client implementation ships here.
//!
//! # Examples
//!
//! ```no_run
//! use assistantkit_publish::{ClaudeMarketplace, PublishOptions, Publisher, PullRequestClient};
//!
//! fn submit(client: impl PullRequestClient) -> Result<(), assistantkit_publish::PublishError> {
//!     let publisher = ClaudeMarketplace::new(client);
//!     let result = publisher.publish(&PublishOptions::new("./plugins/claude", "my-plugin"))?;
//!     println!("PR created: {}", result.pr_url.unwrap_or_default());
//!     Ok(())
//! }
//! ```

#![deny(unsafe_code)]

pub mod claude;
pub mod error;
pub mod publisher;
pub mod validate;

pub use claude::ClaudeMarketplace;
pub use error::{ClientError, PublishError};
pub use publisher::{
    FileChange, MarketplaceConfig, PublishOptions, PublishResult, Publisher, PullRequest,
    PullRequestClient, RepoRef,
};
pub use validate::validate_plugin_dir;
