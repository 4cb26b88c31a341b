//! Adapters - Implementations of port interfaces.
//!
//! - `directory` - In-memory user directory and its seed sources
//! - `presentation` - Benefit table rendering
//! - `referral` - Referral token sources

pub mod directory;
pub mod presentation;
pub mod referral;

pub use directory::{demo_seed, load_seed_file, seed_records, InMemoryUserDirectory};
pub use presentation::MarkdownTableRenderer;
pub use referral::{FixedTokenSource, RandomTokenSource};
