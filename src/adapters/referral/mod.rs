//! Referral token adapters.
//!
//! - `RandomTokenSource` - Random tokens from the thread RNG (production)
//! - `FixedTokenSource` - Replays a fixed sequence (testing/demos)

mod fixed_token_source;
mod random_token_source;

pub use fixed_token_source::FixedTokenSource;
pub use random_token_source::RandomTokenSource;
