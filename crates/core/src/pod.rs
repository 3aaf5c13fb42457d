//! Pod domain types and draft normalization.
//!
//! A pod is created from a loosely-filled [`PodDraft`] coming straight from
//! the "create pod" form. Normalization never fails: blank or malformed
//! fields fall back to the defaults defined here.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{PodId, Timestamp};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Skill substituted when a draft lists no usable skills.
pub const GENERALIST_SKILL: &str = "Generalist";

/// Team size used when the draft value is absent or not a number.
pub const DEFAULT_TEAM_SIZE: u32 = 3;

/// Smallest team a pod can describe (the owner plus one member).
pub const MIN_TEAM_SIZE: u32 = 2;

pub const DEFAULT_POD_NAME: &str = "Untitled pod";
pub const DEFAULT_EXPERIENCE: &str = "All levels";
pub const DEFAULT_DURATION: &str = "Flexible";
pub const DEFAULT_OBJECTIVES: &str = "Collaborate and build together.";
pub const DEFAULT_SUCCESS: &str = "Ship something together.";

// ---------------------------------------------------------------------------
// Pod type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PodType {
    Hackathon,
    #[default]
    Project,
    Study,
}

impl PodType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hackathon => "hackathon",
            Self::Project => "project",
            Self::Study => "study",
        }
    }
}

impl FromStr for PodType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hackathon" => Ok(Self::Hackathon),
            "project" => Ok(Self::Project),
            "study" => Ok(Self::Study),
            _ => Err(CoreError::Validation(format!(
                "Invalid pod type '{s}'. Must be one of: hackathon, project, study"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Invite,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Invite => "invite",
        }
    }
}

impl FromStr for Visibility {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            "invite" => Ok(Self::Invite),
            _ => Err(CoreError::Validation(format!(
                "Invalid visibility '{s}'. Must be one of: public, private, invite"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Pod status
// ---------------------------------------------------------------------------

/// Pods are only ever open; there is no closing transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PodStatus {
    #[default]
    Open,
}

// ---------------------------------------------------------------------------
// Pod
// ---------------------------------------------------------------------------

/// A collaboration opportunity listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pod {
    pub id: PodId,
    pub name: String,
    pub pod_type: PodType,
    pub visibility: Visibility,
    /// Never empty; see [`GENERALIST_SKILL`].
    pub required_skills: Vec<String>,
    pub experience: String,
    pub duration: String,
    pub team_size: u32,
    pub objectives: String,
    pub success: String,
    /// Applicant identity stays hidden from the reviewer until a decision.
    pub blind_review: bool,
    pub status: PodStatus,
    /// `team_size - 1` at creation. Applications do not consume spots.
    pub spots_left: u32,
    pub created_at: Timestamp,
}

/// Raw "create pod" form input. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PodDraft {
    pub name: Option<String>,
    pub pod_type: Option<PodType>,
    pub visibility: Option<Visibility>,
    /// Comma-separated skill labels, e.g. `"React, TypeScript"`.
    pub required_skills: Option<String>,
    pub experience: Option<String>,
    pub duration: Option<String>,
    /// Free text; parsed leniently by [`parse_team_size`].
    pub team_size: Option<String>,
    pub objectives: Option<String>,
    pub success: Option<String>,
    pub blind_review: Option<bool>,
}

impl Pod {
    /// Build a pod from a draft, applying every default.
    pub fn from_draft(id: PodId, draft: PodDraft, created_at: Timestamp) -> Self {
        let team_size = parse_team_size(draft.team_size.as_deref());
        Self {
            id,
            name: text_or(draft.name, DEFAULT_POD_NAME),
            pod_type: draft.pod_type.unwrap_or_default(),
            visibility: draft.visibility.unwrap_or_default(),
            required_skills: normalize_required_skills(draft.required_skills.as_deref()),
            experience: text_or(draft.experience, DEFAULT_EXPERIENCE),
            duration: text_or(draft.duration, DEFAULT_DURATION),
            team_size,
            objectives: text_or(draft.objectives, DEFAULT_OBJECTIVES),
            success: text_or(draft.success, DEFAULT_SUCCESS),
            blind_review: draft.blind_review.unwrap_or(false),
            status: PodStatus::Open,
            spots_left: team_size - 1,
            created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Normalization helpers
// ---------------------------------------------------------------------------

/// Split comma-separated skill text, trimming entries and dropping empties.
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Like [`split_skills`], but never returns an empty list.
pub fn normalize_required_skills(raw: Option<&str>) -> Vec<String> {
    let skills = raw.map(split_skills).unwrap_or_default();
    if skills.is_empty() {
        vec![GENERALIST_SKILL.to_string()]
    } else {
        skills
    }
}

/// Parse a team size from form text.
///
/// Only whole numbers are accepted. Absent input, fractions such as `"4.5"`
/// and trailing text such as `"5 people"` all yield [`DEFAULT_TEAM_SIZE`];
/// numbers below [`MIN_TEAM_SIZE`] are raised to it.
pub fn parse_team_size(raw: Option<&str>) -> u32 {
    let parsed = raw
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(i64::from(DEFAULT_TEAM_SIZE));
    u32::try_from(parsed.max(i64::from(MIN_TEAM_SIZE))).unwrap_or(u32::MAX)
}

fn text_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => default.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
