//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `UserDirectory` - Subscriber record lookup and storage
//! - `ReferralTokenSource` - Random tokens for new referral codes
//! - `BenefitRenderer` - Human-readable plan benefit tables

mod benefit_renderer;
mod referral_token_source;
mod user_directory;

pub use benefit_renderer::BenefitRenderer;
pub use referral_token_source::ReferralTokenSource;
pub use user_directory::{DirectoryError, UserDirectory};
