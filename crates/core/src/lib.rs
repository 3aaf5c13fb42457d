//! CoLearn pod marketplace domain logic.
//!
//! Pure, in-memory building blocks for the pod workflow:
//!
//! - [`catalog`]: the pod catalog and draft normalization.
//! - [`filter`]: marketplace filtering.
//! - [`recommend`]: skill-overlap ranking.
//! - [`application`]: application lifecycle and bookmarks.
//! - [`workflow`]: the single store that owns all of the above for a session.

pub mod application;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod ids;
pub mod pod;
pub mod profile;
pub mod recommend;
pub mod seed;
pub mod types;
pub mod workflow;

pub use application::{Application, ApplicationForm, ApplicationStatus, SavedSet};
pub use catalog::PodCatalog;
pub use error::CoreError;
pub use filter::{filter_pods, PodFilter};
pub use pod::{Pod, PodDraft, PodType, Visibility};
pub use profile::LearnerProfile;
pub use recommend::recommend;
pub use types::PodId;
pub use workflow::PodWorkflow;
