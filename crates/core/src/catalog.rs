//! The pod catalog: the ordered list of pods for the current session.
//!
//! Newest pods come first. Pods are never removed.

use chrono::Utc;

use crate::error::CoreError;
use crate::ids::{IdGenerator, RandomIds};
use crate::pod::{Pod, PodDraft};
use crate::seed::seed_pods;
use crate::types::PodId;

pub struct PodCatalog {
    pods: Vec<Pod>,
    ids: Box<dyn IdGenerator>,
}

impl PodCatalog {
    /// Empty catalog using the given id source.
    pub fn new(ids: impl IdGenerator + 'static) -> Self {
        Self {
            pods: Vec::new(),
            ids: Box::new(ids),
        }
    }

    /// Catalog pre-filled with the seed pods.
    pub fn seeded(ids: impl IdGenerator + 'static) -> Self {
        let mut catalog = Self::new(ids);
        catalog.pods = seed_pods(Utc::now());
        catalog
    }

    /// Normalize `draft` into a new pod and put it at the front.
    pub fn create_pod(&mut self, draft: PodDraft) -> &Pod {
        let id = self.fresh_id();
        let pod = Pod::from_draft(id, draft, Utc::now());
        tracing::debug!(
            pod_id = %pod.id,
            pod_type = pod.pod_type.as_str(),
            team_size = pod.team_size,
            "Pod created",
        );
        self.pods.insert(0, pod);
        &self.pods[0]
    }

    /// All pods, most recent first.
    pub fn pods(&self) -> &[Pod] {
        &self.pods
    }

    pub fn get(&self, id: &PodId) -> Option<&Pod> {
        self.pods.iter().find(|p| &p.id == id)
    }

    /// Lookup that reports a missing pod as [`CoreError::NotFound`].
    pub fn require(&self, id: &PodId) -> Result<&Pod, CoreError> {
        self.get(id).ok_or_else(|| CoreError::NotFound {
            entity: "pod",
            id: id.to_string(),
        })
    }

    pub fn contains(&self, id: &PodId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.pods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pods.is_empty()
    }

    /// Ask the generator for an id and suffix it until it is unused.
    fn fresh_id(&mut self) -> PodId {
        let candidate = self.ids.next_id();
        if !self.contains(&candidate) {
            return candidate;
        }
        tracing::warn!(pod_id = %candidate, "Generated pod id collides, adding suffix");
        let mut n = 2u64;
        loop {
            let suffixed = PodId::new(format!("{candidate}-{n}"));
            if !self.contains(&suffixed) {
                return suffixed;
            }
            n += 1;
        }
    }
}

impl Default for PodCatalog {
    fn default() -> Self {
        Self::new(RandomIds)
    }
}
