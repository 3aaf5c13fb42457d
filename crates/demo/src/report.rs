//! Marketplace snapshot for one learner.

use serde::Serialize;

use colearn_core::{LearnerProfile, Pod, PodCatalog, PodFilter, PodWorkflow};

use crate::config::DemoConfig;

/// Create the workflow described by the configuration.
pub fn build_workflow(config: &DemoConfig) -> PodWorkflow {
    let ids = config.id_strategy.generator();
    let catalog = if config.seed_catalog {
        PodCatalog::seeded(ids)
    } else {
        PodCatalog::new(ids)
    };
    tracing::debug!(pods = catalog.len(), seeded = config.seed_catalog, "Catalog ready");
    PodWorkflow::with_catalog(catalog)
}

#[derive(Debug, Serialize)]
pub struct Recommendation<'a> {
    pub score: usize,
    pub pod: &'a Pod,
}

#[derive(Debug, Serialize)]
pub struct MarketplaceReport<'a> {
    pub learner: &'a LearnerProfile,
    pub filter: &'a PodFilter,
    pub visible: Vec<&'a Pod>,
    pub recommended: Vec<Recommendation<'a>>,
}

impl<'a> MarketplaceReport<'a> {
    /// Snapshot the filtered and recommended pods. Nothing is cached.
    pub fn collect(workflow: &'a PodWorkflow, config: &'a DemoConfig) -> Self {
        let visible = workflow.visible_pods(&config.filter);
        let recommended = workflow
            .recommended_scored(&config.filter, &config.learner.skills)
            .into_iter()
            .map(|scored| Recommendation {
                score: scored.score,
                pod: scored.pod,
            })
            .collect();

        Self {
            learner: &config.learner,
            filter: &config.filter,
            visible,
            recommended,
        }
    }
}
