//! Random referral token source.

use rand::Rng;

use crate::domain::subscriber::REFERRAL_TOKEN_LENGTH;
use crate::ports::ReferralTokenSource;

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Draws tokens from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTokenSource;

impl RandomTokenSource {
    pub fn new() -> Self {
        Self
    }
}

impl ReferralTokenSource for RandomTokenSource {
    fn next_token(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..REFERRAL_TOKEN_LENGTH)
            .map(|_| {
                let idx = rng.gen_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }
}
