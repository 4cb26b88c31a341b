//! User Directory Adapters
//!
//! Implementations of the UserDirectory port.
//!
//! ## Available Adapters
//!
//! - **InMemoryUserDirectory** - Stores records in memory, seeded at construction
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::directory::{demo_seed, load_seed_file, InMemoryUserDirectory};
//!
//! // Demo dataset
//! let directory = InMemoryUserDirectory::with_seed(demo_seed()?)?;
//!
//! // Fixtures from disk
//! let directory = InMemoryUserDirectory::with_seed(load_seed_file("./seed.yaml")?)?;
//! ```

mod in_memory;
mod seed;

pub use in_memory::InMemoryUserDirectory;
pub use seed::{demo_seed, load_seed_file, seed_records};
