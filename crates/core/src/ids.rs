//! Pluggable pod id generation.
//!
//! The catalog asks an [`IdGenerator`] for a candidate id and resolves any
//! collision itself, so generators only need to be "usually unique".
//! [`SequentialIds`] gives deterministic ids for tests and demos;
//! [`RandomIds`] is the default for interactive sessions.

use uuid::Uuid;

use crate::types::PodId;

/// Prefix shared by every generated pod id.
pub const POD_ID_PREFIX: &str = "pod";

/// Source of candidate pod ids.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> PodId;
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&mut self) -> PodId {
        (**self).next_id()
    }
}

/// Monotonic counter ids: `pod-1`, `pod-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::with_prefix(POD_ID_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> PodId {
        let id = PodId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

/// UUID v4 ids in simple (hyphen-free) form: `pod-3f2a...`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> PodId {
        PodId::new(format!("{POD_ID_PREFIX}-{}", Uuid::new_v4().simple()))
    }
}
