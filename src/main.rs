//! PacFlix demo driver.
//!
//! Prints the plan comparison and walks through the pricing rules against
//! the configured user directory.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pacflix::adapters::{
    seed_records, InMemoryUserDirectory, MarkdownTableRenderer, RandomTokenSource,
};
use pacflix::application::PricingEngine;
use pacflix::config::{AppConfig, LoggingConfig};
use pacflix::domain::pricing::PricingError;
use pacflix::ports::BenefitRenderer;

fn init_tracing(config: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    if config.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_signup(engine: &PricingEngine, username: &str, plan: &str, code: Option<&str>) {
    match engine.quote_new_signup(username, plan, code) {
        Ok(signup) => println!(
            "{} signs up for {} ({}): {}",
            username,
            signup.record.plan,
            signup.record.referral_code,
            signup.quote
        ),
        Err(e) => println!("{} cannot sign up for {}: {}", username, plan, e),
    }
}

fn print_upgrade(engine: &PricingEngine, username: &str, plan: &str) -> Result<(), PricingError> {
    let quote = engine.quote_upgrade(username, plan)?;
    println!("{} upgrading to {}: {}", username, plan, quote);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    let directory = Arc::new(InMemoryUserDirectory::with_seed(seed_records(
        &config.directory,
    )?)?);
    info!(subscribers = directory.len(), "User directory seeded");

    let engine = PricingEngine::new(directory, Arc::new(RandomTokenSource::new()))
        .with_max_generation_attempts(config.referral.max_generation_attempts);
    let renderer = MarkdownTableRenderer::new();

    println!("{}", renderer.render_matrix(&engine.benefit_matrix()));

    print_signup(&engine, "Yusril", "Premium Plan", Some("cahya-abcd"));
    print_signup(&engine, "Yusril", "Standard Plan", None);
    print_signup(&engine, "Yusril", "Basic Plan", Some("nobody-0000"));
    println!();

    let summary = engine.plan_summary("Cahya")?;
    println!(
        "{} has been on {} for {} months",
        summary.username,
        summary.plan.plan.display_name(),
        summary.duration_months
    );
    println!("{}", renderer.render_plan(&summary.plan));
    println!("{}", serde_json::to_string_pretty(&summary)?);
    println!();

    print_upgrade(&engine, "Cahya", "Premium Plan")?;
    print_upgrade(&engine, "Cahya", "Standard Plan")?;

    Ok(())
}
