//! Marketplace filtering.
//!
//! [`filter_pods`] is a pure function over a catalog snapshot. Each
//! criterion is independent and a blank criterion matches everything.

use serde::{Deserialize, Serialize};

use crate::pod::Pod;

/// Filter criteria as entered in the marketplace sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PodFilter {
    /// Case-insensitive substring of the name or objectives.
    pub search: Option<String>,
    /// Case-insensitive substring of any required skill.
    pub skill: Option<String>,
    /// Exact duration label.
    pub duration: Option<String>,
    /// Upper bound on team size, as typed. Any finite number is a bound, so
    /// a negative one matches nothing. Non-numeric text means no bound.
    pub max_team_size: Option<String>,
}

impl PodFilter {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skill = Some(skill.into());
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn with_max_team_size(mut self, max: impl Into<String>) -> Self {
        self.max_team_size = Some(max.into());
        self
    }

    /// True when no criterion constrains the result.
    pub fn is_empty(&self) -> bool {
        needle(&self.search).is_none()
            && needle(&self.skill).is_none()
            && needle(&self.duration).is_none()
            && self.team_size_limit().is_none()
    }

    /// The parsed team-size bound, if any.
    pub fn team_size_limit(&self) -> Option<f64> {
        needle(&self.max_team_size)
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|max| max.is_finite())
    }

    /// Whether a single pod passes every criterion.
    pub fn matches(&self, pod: &Pod) -> bool {
        self.matches_search(pod)
            && self.matches_skill(pod)
            && self.matches_duration(pod)
            && self.matches_team_size(pod)
    }

    fn matches_search(&self, pod: &Pod) -> bool {
        match needle(&self.search) {
            None => true,
            Some(term) => {
                let term = term.to_lowercase();
                pod.name.to_lowercase().contains(&term)
                    || pod.objectives.to_lowercase().contains(&term)
            }
        }
    }

    fn matches_skill(&self, pod: &Pod) -> bool {
        match needle(&self.skill) {
            None => true,
            Some(term) => {
                let term = term.to_lowercase();
                pod.required_skills.iter().any(|s| s.to_lowercase().contains(&term))
            }
        }
    }

    fn matches_duration(&self, pod: &Pod) -> bool {
        needle(&self.duration).is_none_or(|d| pod.duration == d)
    }

    fn matches_team_size(&self, pod: &Pod) -> bool {
        self.team_size_limit().is_none_or(|max| f64::from(pod.team_size) <= max)
    }
}

/// Keep the pods that satisfy `criteria`, preserving catalog order.
pub fn filter_pods<'a>(pods: &'a [Pod], criteria: &PodFilter) -> Vec<&'a Pod> {
    pods.iter().filter(|pod| criteria.matches(pod)).collect()
}

/// Trimmed criterion text, or `None` when blank.
fn needle(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{seed_pods, SEED_HACKATHON_ID, SEED_PROJECT_ID, SEED_STUDY_ID};

    fn ids(pods: &[&Pod]) -> Vec<String> {
        pods.iter().map(|p| p.id.to_string()).collect()
    }

    fn catalog() -> Vec<Pod> {
        seed_pods(chrono::Utc::now())
    }

    #[test]
    fn empty_filter_keeps_everything_in_order() {
        let pods = catalog();
        let result = filter_pods(&pods, &PodFilter::default());
        assert_eq!(ids(&result), [SEED_HACKATHON_ID, SEED_PROJECT_ID, SEED_STUDY_ID]);
        assert!(PodFilter::default().is_empty());
    }

    #[test]
    fn blank_strings_are_no_ops() {
        let pods = catalog();
        let filter = PodFilter::default()
            .with_search("  ")
            .with_skill("")
            .with_duration(" ")
            .with_max_team_size("");
        assert!(filter.is_empty());
        assert_eq!(filter_pods(&pods, &filter).len(), 3);
    }

    // -- search --------------------------------------------------------------

    #[test]
    fn search_matches_name_case_insensitively() {
        let pods = catalog();
        let result = filter_pods(&pods, &PodFilter::default().with_search("HACKATHON"));
        assert_eq!(ids(&result), [SEED_HACKATHON_ID]);
    }

    #[test]
    fn search_matches_objectives() {
        let pods = catalog();
        let result = filter_pods(&pods, &PodFilter::default().with_search("mentors"));
        assert_eq!(ids(&result), [SEED_PROJECT_ID]);
    }

    // -- skill ---------------------------------------------------------------

    #[test]
    fn skill_matches_any_required_skill_substring() {
        let pods = catalog();
        let result = filter_pods(&pods, &PodFilter::default().with_skill("react"));
        assert_eq!(ids(&result), [SEED_HACKATHON_ID, SEED_PROJECT_ID]);

        let result = filter_pods(&pods, &PodFilter::default().with_skill("base"));
        assert_eq!(ids(&result), [SEED_STUDY_ID]);
    }

    // -- duration ------------------------------------------------------------

    #[test]
    fn duration_requires_exact_label() {
        let pods = catalog();
        let result = filter_pods(&pods, &PodFilter::default().with_duration("6 weeks"));
        assert_eq!(ids(&result), [SEED_PROJECT_ID]);

        let result = filter_pods(&pods, &PodFilter::default().with_duration("6 week"));
        assert!(result.is_empty());
    }

    // -- team size -----------------------------------------------------------

    #[test]
    fn max_team_size_is_inclusive() {
        let pods = catalog();
        let result = filter_pods(&pods, &PodFilter::default().with_max_team_size("5"));
        assert_eq!(ids(&result), [SEED_HACKATHON_ID, SEED_PROJECT_ID]);
    }

    #[test]
    fn malformed_max_team_size_is_ignored() {
        let pods = catalog();
        for raw in ["five", "4 people", "NaN", "inf"] {
            let filter = PodFilter::default().with_max_team_size(raw);
            assert_eq!(filter.team_size_limit(), None, "value {raw}");
            assert_eq!(filter_pods(&pods, &filter).len(), 3, "value {raw}");
        }
    }

    #[test]
    fn negative_max_team_size_matches_nothing() {
        let pods = catalog();
        let filter = PodFilter::default().with_max_team_size("-1");
        assert_eq!(filter.team_size_limit(), Some(-1.0));
        assert!(!filter.is_empty());
        assert!(filter_pods(&pods, &filter).is_empty());
    }

    #[test]
    fn fractional_max_team_size_is_a_real_bound() {
        let pods = catalog();
        let result = filter_pods(&pods, &PodFilter::default().with_max_team_size("4.5"));
        assert_eq!(ids(&result), [SEED_HACKATHON_ID]);

        let result = filter_pods(&pods, &PodFilter::default().with_max_team_size("5.0"));
        assert_eq!(ids(&result), [SEED_HACKATHON_ID, SEED_PROJECT_ID]);
    }

    // -- combination ---------------------------------------------------------

    #[test]
    fn criteria_are_anded() {
        let pods = catalog();
        let filter = PodFilter::default()
            .with_skill("react")
            .with_max_team_size("4");
        assert_eq!(ids(&filter_pods(&pods, &filter)), [SEED_HACKATHON_ID]);

        let filter = filter.with_duration("Weekly");
        assert!(filter_pods(&pods, &filter).is_empty());
    }
}
