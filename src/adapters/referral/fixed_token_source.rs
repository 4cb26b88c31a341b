//! Deterministic referral token source.
//!
//! Replays a fixed list of tokens in order, then repeats the last one.
//! Used for tests and reproducible demos.

use std::sync::{Mutex, PoisonError};

use crate::ports::ReferralTokenSource;

/// Token source that hands out a predetermined sequence.
#[derive(Debug)]
pub struct FixedTokenSource {
    tokens: Vec<String>,
    next: Mutex<usize>,
}

impl FixedTokenSource {
    /// Create a source replaying `tokens`
    ///
    /// An empty list yields `"00000000"` forever.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            next: Mutex::new(0),
        }
    }
}

impl ReferralTokenSource for FixedTokenSource {
    fn next_token(&self) -> String {
        let mut next = self.next.lock().unwrap_or_else(PoisonError::into_inner);
        let index = (*next).min(self.tokens.len().saturating_sub(1));
        *next += 1;

        self.tokens
            .get(index)
            .cloned()
            .unwrap_or_else(|| "00000000".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_tokens_in_order() {
        let source = FixedTokenSource::new(["aaaaaaaa", "bbbbbbbb"]);
        assert_eq!(source.next_token(), "aaaaaaaa");
        assert_eq!(source.next_token(), "bbbbbbbb");
    }

    #[test]
    fn repeats_last_token_when_exhausted() {
        let source = FixedTokenSource::new(["aaaaaaaa"]);
        source.next_token();
        assert_eq!(source.next_token(), "aaaaaaaa");
        assert_eq!(source.next_token(), "aaaaaaaa");
    }

    #[test]
    fn empty_source_yields_zeros() {
        let source = FixedTokenSource::new(Vec::<String>::new());
        assert_eq!(source.next_token(), "00000000");
    }
}
