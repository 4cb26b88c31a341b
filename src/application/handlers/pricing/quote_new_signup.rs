//! QuoteNewSignupHandler - Prices and commits a signup.
//!
//! This is the new-user context. Unlike an upgrade quote, a successful
//! signup quote is committed: the subscriber's record is (re)written with
//! the chosen plan, one month of history and a freshly generated referral
//! code.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::plan::{PlanCatalog, PlanId};
use crate::domain::pricing::{referral_discount, PriceBreakdown, PricingError, Quote};
use crate::domain::subscriber::{ReferralCode, UserRecord};
use crate::ports::{DirectoryError, ReferralTokenSource, UserDirectory};

/// Default number of referral codes tried before giving up on a signup.
pub const DEFAULT_MAX_GENERATION_ATTEMPTS: u32 = 16;

/// Command to quote and commit a signup.
#[derive(Debug, Clone)]
pub struct QuoteNewSignupCommand {
    pub username: String,
    /// Chosen plan name, e.g. "Standard Plan".
    pub new_plan: String,
    /// Another subscriber's referral code. Empty counts as absent.
    pub referral_code: Option<String>,
}

/// Result of a committed signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteNewSignupResult {
    pub quote: Quote,
    /// The record now stored for the subscriber.
    pub record: UserRecord,
    /// Username of the subscriber whose referral code was honoured.
    pub referred_by: Option<String>,
}

/// Handler for signup quotes.
pub struct QuoteNewSignupHandler {
    catalog: &'static PlanCatalog,
    directory: Arc<dyn UserDirectory>,
    token_source: Arc<dyn ReferralTokenSource>,
    max_generation_attempts: u32,
}

impl QuoteNewSignupHandler {
    pub fn new(
        catalog: &'static PlanCatalog,
        directory: Arc<dyn UserDirectory>,
        token_source: Arc<dyn ReferralTokenSource>,
    ) -> Self {
        Self {
            catalog,
            directory,
            token_source,
            max_generation_attempts: DEFAULT_MAX_GENERATION_ATTEMPTS,
        }
    }

    /// Sets how many referral codes are generated before giving up.
    ///
    /// At least one attempt is always made.
    pub fn with_max_generation_attempts(mut self, attempts: u32) -> Self {
        self.max_generation_attempts = attempts.max(1);
        self
    }

    /// Quotes the signup and stores the resulting record.
    ///
    /// # Errors
    ///
    /// - `InvalidReferralCode` if a code was given but nobody owns it
    /// - `UnknownPlan` if the plan name is not recognised
    /// - `DuplicateReferralCode` if no unique referral code could be generated
    ///
    /// On error the directory is left untouched.
    pub fn handle(&self, cmd: QuoteNewSignupCommand) -> Result<QuoteNewSignupResult, PricingError> {
        // 1. Validate the referral code, if one was presented
        let referred_by = match cmd.referral_code.as_deref().filter(|c| !c.is_empty()) {
            Some(code) => Some(self.resolve_referrer(code)?),
            None => None,
        };

        // 2. Resolve the chosen plan
        let plan = self.catalog.lookup(&cmd.new_plan)?;

        // 3. Price it
        let discount = referral_discount(referred_by.is_some());
        let breakdown = PriceBreakdown::compute(plan, discount);

        // 4-5. Generate a unique referral code and commit the record
        let record = self.commit_signup(&cmd.username, plan.plan)?;

        info!(
            username = %record.username,
            plan = %record.plan,
            price = %breakdown.price,
            referred_by = ?referred_by,
            "Signup committed"
        );

        Ok(QuoteNewSignupResult {
            quote: Quote::Priced(breakdown),
            record,
            referred_by,
        })
    }

    /// Returns the username owning `code`.
    fn resolve_referrer(&self, code: &str) -> Result<String, PricingError> {
        let owner = ReferralCode::try_new(code)
            .ok()
            .and_then(|code| self.directory.find_by_referral_code(&code));

        match owner {
            Some(record) => {
                debug!("Referral code {} belongs to {}", code, record.username);
                Ok(record.username)
            }
            None => {
                warn!("Rejected unknown referral code {}", code);
                Err(PricingError::invalid_referral_code(code))
            }
        }
    }

    /// Stores the signup record under a referral code nobody else holds.
    ///
    /// A code that collides with an existing one, whether seen before the
    /// write or reported by the directory during it, is discarded and a new
    /// one generated.
    fn commit_signup(&self, username: &str, plan: PlanId) -> Result<UserRecord, PricingError> {
        let mut last_collision = None;

        for attempt in 1..=self.max_generation_attempts {
            let token = self.token_source.next_token();
            let code = ReferralCode::for_user(username, &token).map_err(|e| {
                PricingError::infrastructure(format!("bad referral token '{}': {}", token, e))
            })?;

            if let Some(owner) = self.directory.find_by_referral_code(&code) {
                warn!(attempt, "Referral code {} already taken, regenerating", code);
                last_collision = Some((code.to_string(), owner.username));
                continue;
            }

            let record = UserRecord::signup(username, plan, code);
            match self.directory.put(record.clone()) {
                Ok(()) => return Ok(record),
                Err(DirectoryError::DuplicateReferralCode { code, owner }) => {
                    warn!(attempt, "Referral code {} claimed concurrently, regenerating", code);
                    last_collision = Some((code, owner));
                }
                Err(e) => return Err(e.into()),
            }
        }

        let (code, owner) = last_collision.unwrap_or_default();
        Err(PricingError::duplicate_referral_code(code, owner))
    }
}
