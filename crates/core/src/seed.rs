//! Starter pods shown before anyone has created one.

use crate::pod::{Pod, PodStatus, PodType, Visibility};
use crate::types::{PodId, Timestamp};

pub const SEED_HACKATHON_ID: &str = "pod-hack-1";
pub const SEED_PROJECT_ID: &str = "pod-proj-1";
pub const SEED_STUDY_ID: &str = "pod-study-1";

/// The three seed pods, in catalog order.
pub fn seed_pods(created_at: Timestamp) -> Vec<Pod> {
    vec![
        seed(
            SEED_HACKATHON_ID,
            "Weekend AI Hackathon",
            PodType::Hackathon,
            Visibility::Public,
            &["React", "TypeScript", "API Design"],
            "Intermediate",
            "48 hours",
            4,
            "Prototype an AI study buddy that quizzes learners on their notes.",
            "Working demo presented at the closing showcase.",
            false,
            created_at,
        ),
        seed(
            SEED_PROJECT_ID,
            "Community Mentoring Platform",
            PodType::Project,
            Visibility::Public,
            &["Node.js", "React", "UX"],
            "Beginner friendly",
            "6 weeks",
            5,
            "Build a matching app that pairs new developers with mentors.",
            "Pilot launched with ten mentor pairs.",
            true,
            created_at,
        ),
        seed(
            SEED_STUDY_ID,
            "Systems Design Study Circle",
            PodType::Study,
            Visibility::Invite,
            &["Architecture", "Databases"],
            "Advanced",
            "Weekly",
            6,
            "Work through one classic system design case study each week.",
            "Every member leads one session and publishes their notes.",
            false,
            created_at,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: &str,
    name: &str,
    pod_type: PodType,
    visibility: Visibility,
    skills: &[&str],
    experience: &str,
    duration: &str,
    team_size: u32,
    objectives: &str,
    success: &str,
    blind_review: bool,
    created_at: Timestamp,
) -> Pod {
    Pod {
        id: PodId::new(id),
        name: name.to_string(),
        pod_type,
        visibility,
        required_skills: skills.iter().map(|s| s.to_string()).collect(),
        experience: experience.to_string(),
        duration: duration.to_string(),
        team_size,
        objectives: objectives.to_string(),
        success: success.to_string(),
        blind_review,
        status: PodStatus::Open,
        spots_left: team_size - 1,
        created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_order_is_hackathon_project_study() {
        let ids: Vec<String> = seed_pods(chrono::Utc::now())
            .into_iter()
            .map(|p| p.id.to_string())
            .collect();
        assert_eq!(ids, [SEED_HACKATHON_ID, SEED_PROJECT_ID, SEED_STUDY_ID]);
    }

    #[test]
    fn seed_spots_follow_team_size() {
        for pod in seed_pods(chrono::Utc::now()) {
            assert_eq!(pod.spots_left, pod.team_size - 1);
            assert!(!pod.required_skills.is_empty());
        }
    }
}
