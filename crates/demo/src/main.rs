//! `colearn-demo` -- prints the pod marketplace as one learner sees it.
//!
//! Builds an in-memory pod workflow (optionally seeded), applies the filter
//! criteria from the environment, ranks the visible pods against the
//! learner's skills, and writes the result to stdout as JSON. See
//! [`colearn_demo::config::DemoConfig`] for the environment variables.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use colearn_demo::config::DemoConfig;
use colearn_demo::report::{build_workflow, MarketplaceReport};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colearn_demo=info,colearn_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // --- Configuration ---
    let config = DemoConfig::from_env()?;
    tracing::info!(
        learner = %config.learner.name,
        skills = config.learner.skills.len(),
        seeded = config.seed_catalog,
        id_strategy = ?config.id_strategy,
        "Loaded demo configuration",
    );

    // --- Workflow ---
    let workflow = build_workflow(&config);
    let report = MarketplaceReport::collect(&workflow, &config);
    tracing::info!(
        visible = report.visible.len(),
        recommended = report.recommended.len(),
        "Marketplace snapshot ready",
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
