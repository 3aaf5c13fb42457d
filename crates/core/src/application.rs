//! Application lifecycle for a single learner.
//!
//! One [`Application`] per pod, keyed by pod id. No record means the learner
//! has not applied. Status changes are unrestricted: `Accepted` and
//! `Rejected` can be reopened by a later change.
//!
//! ```text
//! (none) -> Submitted -> Interview -> Accepted | Rejected
//!                    \--------------> Accepted | Rejected
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{PodId, Timestamp};

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Attached automatically when an application is accepted.
pub const ACCEPTED_NOTICE: &str =
    "Congratulations! You have been accepted. The pod lead will reach out with next steps.";

/// Attached automatically when an application is rejected.
pub const REJECTED_NOTICE: &str =
    "Thanks for applying. The pod has moved forward with other applicants this time.";

/// Coffee chat slot used when the applicant does not propose one.
pub const COFFEE_CHAT_PLACEHOLDER: &str = "To be scheduled";

/* --------------------------------------------------------------------------
Status
-------------------------------------------------------------------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Submitted,
    Interview,
    Accepted,
    Rejected,
}

/// All statuses, in lifecycle order.
pub const ALL_STATUSES: &[ApplicationStatus] = &[
    ApplicationStatus::Submitted,
    ApplicationStatus::Interview,
    ApplicationStatus::Accepted,
    ApplicationStatus::Rejected,
];

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::Interview => "Interview",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }

    /// Accepted or rejected.
    pub fn is_decision(self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }

    /// The notice attached on entering this status, if any.
    pub fn auto_message(self) -> Option<&'static str> {
        match self {
            Self::Accepted => Some(ACCEPTED_NOTICE),
            Self::Rejected => Some(REJECTED_NOTICE),
            Self::Submitted | Self::Interview => None,
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ALL_STATUSES
            .iter()
            .copied()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid application status '{s}'. Must be one of: {}",
                    ALL_STATUSES
                        .iter()
                        .map(|status| status.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

/* --------------------------------------------------------------------------
Records
-------------------------------------------------------------------------- */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub pod_id: PodId,
    pub status: ApplicationStatus,
    pub note: String,
    pub experience: String,
    pub coffee_chat: String,
    pub blind: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_message: Option<String>,
    pub updated_at: Timestamp,
}

/// What the learner fills in on the "apply" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationForm {
    pub note: String,
    pub experience: String,
    pub coffee_chat: Option<String>,
    pub blind: bool,
}

impl ApplicationForm {
    pub fn new(note: impl Into<String>, experience: impl Into<String>) -> Self {
        Self {
            note: note.into(),
            experience: experience.into(),
            ..Default::default()
        }
    }

    pub fn with_coffee_chat(mut self, slot: impl Into<String>) -> Self {
        self.coffee_chat = Some(slot.into());
        self
    }

    pub fn blind(mut self, blind: bool) -> Self {
        self.blind = blind;
        self
    }

    /// Both the note and the experience level are filled in.
    pub fn is_complete(&self) -> bool {
        !self.note.trim().is_empty() && !self.experience.trim().is_empty()
    }
}

/// Bookmarked pod ids.
pub type SavedSet = HashSet<PodId>;

/* --------------------------------------------------------------------------
Tracker
-------------------------------------------------------------------------- */

/// Applications and bookmarks for the current learner.
#[derive(Debug, Clone, Default)]
pub struct ApplicationTracker {
    applications: HashMap<PodId, Application>,
    saved: SavedSet,
}

impl ApplicationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an application, replacing any earlier one for the pod.
    ///
    /// Returns `None` and leaves the tracker untouched when the form is
    /// incomplete; the caller should keep the form open.
    pub fn submit_application(
        &mut self,
        pod_id: &PodId,
        form: ApplicationForm,
    ) -> Option<&Application> {
        if !form.is_complete() {
            tracing::debug!(pod_id = %pod_id, "Incomplete application ignored");
            return None;
        }

        let coffee_chat = form
            .coffee_chat
            .map(|slot| slot.trim().to_string())
            .filter(|slot| !slot.is_empty())
            .unwrap_or_else(|| COFFEE_CHAT_PLACEHOLDER.to_string());

        let application = Application {
            pod_id: pod_id.clone(),
            status: ApplicationStatus::Submitted,
            note: form.note.trim().to_string(),
            experience: form.experience.trim().to_string(),
            coffee_chat,
            blind: form.blind,
            auto_message: None,
            updated_at: Utc::now(),
        };

        let replaced = self.applications.insert(pod_id.clone(), application).is_some();
        tracing::debug!(pod_id = %pod_id, replaced, blind = form.blind, "Application submitted");
        self.applications.get(pod_id)
    }

    /// Move an application to `status`, creating a bare record if needed.
    pub fn change_status(&mut self, pod_id: &PodId, status: ApplicationStatus) -> &Application {
        let now = Utc::now();
        let application = self
            .applications
            .entry(pod_id.clone())
            .or_insert_with(|| {
                tracing::debug!(pod_id = %pod_id, "Status change without prior application");
                Application {
                    pod_id: pod_id.clone(),
                    status,
                    note: String::new(),
                    experience: String::new(),
                    coffee_chat: COFFEE_CHAT_PLACEHOLDER.to_string(),
                    blind: false,
                    auto_message: None,
                    updated_at: now,
                }
            });

        let previous = application.status;
        application.status = status;
        application.auto_message = status.auto_message().map(str::to_string);
        application.updated_at = now;

        tracing::debug!(
            pod_id = %pod_id,
            from = previous.as_str(),
            to = status.as_str(),
            "Application status changed",
        );
        application
    }

    /// Flip bookmark membership for `pod_id`.
    pub fn toggle_save(&mut self, pod_id: &PodId) -> &SavedSet {
        let saved = if self.saved.remove(pod_id) {
            false
        } else {
            self.saved.insert(pod_id.clone());
            true
        };
        tracing::debug!(pod_id = %pod_id, saved, "Bookmark toggled");
        &self.saved
    }

    pub fn application(&self, pod_id: &PodId) -> Option<&Application> {
        self.applications.get(pod_id)
    }

    /// `None` means the learner has not applied.
    pub fn status_of(&self, pod_id: &PodId) -> Option<ApplicationStatus> {
        self.applications.get(pod_id).map(|a| a.status)
    }

    pub fn applications(&self) -> impl Iterator<Item = &Application> {
        self.applications.values()
    }

    pub fn application_count(&self) -> usize {
        self.applications.len()
    }

    pub fn saved(&self) -> &SavedSet {
        &self.saved
    }

    pub fn is_saved(&self, pod_id: &PodId) -> bool {
        self.saved.contains(pod_id)
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
