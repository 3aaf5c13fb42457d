//! The pod marketplace workflow for one learner session.
//!
//! [`PodWorkflow`] owns the catalog and the learner's applications and
//! bookmarks. Catalog changes go through [`PodWorkflow::create_pod`];
//! application changes go through the lifecycle operations. Derived views
//! (visible pods, recommendations) are recomputed on every call.

use crate::application::{
    Application, ApplicationForm, ApplicationStatus, ApplicationTracker, SavedSet,
};
use crate::catalog::PodCatalog;
use crate::error::CoreError;
use crate::filter::{filter_pods, PodFilter};
use crate::ids::IdGenerator;
use crate::pod::{Pod, PodDraft};
use crate::recommend::{recommend, top_ranked, ScoredPod};
use crate::types::PodId;

#[derive(Default)]
pub struct PodWorkflow {
    catalog: PodCatalog,
    tracker: ApplicationTracker,
}

impl PodWorkflow {
    /// Empty marketplace.
    pub fn new(ids: impl IdGenerator + 'static) -> Self {
        Self::with_catalog(PodCatalog::new(ids))
    }

    /// Marketplace pre-filled with the seed pods.
    pub fn seeded(ids: impl IdGenerator + 'static) -> Self {
        Self::with_catalog(PodCatalog::seeded(ids))
    }

    pub fn with_catalog(catalog: PodCatalog) -> Self {
        Self {
            catalog,
            tracker: ApplicationTracker::new(),
        }
    }

    // -- catalog --------------------------------------------------------------

    pub fn create_pod(&mut self, draft: PodDraft) -> &Pod {
        self.catalog.create_pod(draft)
    }

    pub fn catalog(&self) -> &PodCatalog {
        &self.catalog
    }

    pub fn pod(&self, id: &PodId) -> Result<&Pod, CoreError> {
        self.catalog.require(id)
    }

    // -- derived views --------------------------------------------------------

    /// Pods matching `criteria`, in catalog order.
    pub fn visible_pods(&self, criteria: &PodFilter) -> Vec<&Pod> {
        filter_pods(self.catalog.pods(), criteria)
    }

    /// Top matches among the visible pods for the given learner skills.
    pub fn recommended<S: AsRef<str>>(
        &self,
        criteria: &PodFilter,
        learner_skills: &[S],
    ) -> Vec<&Pod> {
        let visible = self.visible_pods(criteria);
        recommend(&visible, learner_skills)
    }

    /// Same ranking as [`recommended`](Self::recommended), keeping the scores.
    pub fn recommended_scored<S: AsRef<str>>(
        &self,
        criteria: &PodFilter,
        learner_skills: &[S],
    ) -> Vec<ScoredPod<'_>> {
        let visible = self.visible_pods(criteria);
        top_ranked(&visible, learner_skills)
    }

    // -- lifecycle ------------------------------------------------------------

    pub fn submit_application(
        &mut self,
        pod_id: &PodId,
        form: ApplicationForm,
    ) -> Option<&Application> {
        if !self.catalog.contains(pod_id) {
            tracing::debug!(pod_id = %pod_id, "Application for pod outside the catalog");
        }
        self.tracker.submit_application(pod_id, form)
    }

    pub fn change_status(&mut self, pod_id: &PodId, status: ApplicationStatus) -> &Application {
        self.tracker.change_status(pod_id, status)
    }

    pub fn toggle_save(&mut self, pod_id: &PodId) -> &SavedSet {
        self.tracker.toggle_save(pod_id)
    }

    // -- learner views --------------------------------------------------------

    pub fn application(&self, pod_id: &PodId) -> Option<&Application> {
        self.tracker.application(pod_id)
    }

    pub fn status_of(&self, pod_id: &PodId) -> Option<ApplicationStatus> {
        self.tracker.status_of(pod_id)
    }

    /// Applications in catalog order, then any for unknown pods by id.
    pub fn applications(&self) -> Vec<&Application> {
        let mut listed: Vec<&Application> = self
            .catalog
            .pods()
            .iter()
            .filter_map(|pod| self.tracker.application(&pod.id))
            .collect();

        let mut orphans: Vec<&Application> = self
            .tracker
            .applications()
            .filter(|app| !self.catalog.contains(&app.pod_id))
            .collect();
        orphans.sort_by(|a, b| a.pod_id.cmp(&b.pod_id));

        listed.extend(orphans);
        listed
    }

    pub fn saved(&self) -> &SavedSet {
        self.tracker.saved()
    }

    pub fn is_saved(&self, pod_id: &PodId) -> bool {
        self.tracker.is_saved(pod_id)
    }

    /// Bookmarked pods, in catalog order.
    pub fn saved_pods(&self) -> Vec<&Pod> {
        self.catalog
            .pods()
            .iter()
            .filter(|pod| self.tracker.is_saved(&pod.id))
            .collect()
    }

    /// Whether the reviewer should still see this applicant anonymously.
    ///
    /// Identity stays hidden while blind review applies (the pod requires it
    /// or the applicant opted in) and no decision has been recorded.
    pub fn is_identity_hidden(&self, pod_id: &PodId) -> bool {
        let Some(application) = self.tracker.application(pod_id) else {
            return false;
        };
        let pod_blind = self.catalog.get(pod_id).is_some_and(|pod| pod.blind_review);
        (pod_blind || application.blind) && !application.status.is_decision()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
