//! PacFlix - Subscription plans and pricing
//!
//! This crate holds the plan catalog of the PacFlix streaming service, a
//! directory of subscribers, and the pricing rules for upgrades (loyalty
//! discount) and new signups (referral discount).

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
