//! Presentation adapters.
//!
//! - `MarkdownTableRenderer` - GitHub-flavoured markdown tables

mod markdown_table;

pub use markdown_table::MarkdownTableRenderer;
