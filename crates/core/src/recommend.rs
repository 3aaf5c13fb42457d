//! Skill-overlap recommendations.
//!
//! A pod scores one point for every required skill that contains at least
//! one of the learner's skills (case-insensitive). Matching only runs in that
//! direction: the learner skill `"APIs"` does not match the pod skill
//! `"API Design"`.

use crate::pod::Pod;

/// Maximum number of recommended pods.
pub const MAX_RECOMMENDATIONS: usize = 3;

/// A pod paired with its skill-match score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredPod<'a> {
    pub pod: &'a Pod,
    pub score: usize,
}

/// Count the pod skills matched by any learner skill.
pub fn skill_match_score<S: AsRef<str>>(pod: &Pod, learner_skills: &[S]) -> usize {
    let learner: Vec<String> = learner_skills
        .iter()
        .map(|s| s.as_ref().to_lowercase())
        .collect();
    pod.required_skills
        .iter()
        .filter(|required| {
            let required = required.to_lowercase();
            learner.iter().any(|skill| required.contains(skill.as_str()))
        })
        .count()
}

/// Score every pod and order by score, highest first.
///
/// The sort is stable, so equally scored pods keep their input order.
pub fn rank_pods<'a, S: AsRef<str>>(
    pods: &[&'a Pod],
    learner_skills: &[S],
) -> Vec<ScoredPod<'a>> {
    let mut scored: Vec<ScoredPod<'a>> = pods
        .iter()
        .map(|&pod| ScoredPod {
            pod,
            score: skill_match_score(pod, learner_skills),
        })
        .collect();
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// The top [`MAX_RECOMMENDATIONS`] pods with their scores.
pub fn top_ranked<'a, S: AsRef<str>>(
    pods: &[&'a Pod],
    learner_skills: &[S],
) -> Vec<ScoredPod<'a>> {
    let mut ranked = rank_pods(pods, learner_skills);
    ranked.truncate(MAX_RECOMMENDATIONS);
    ranked
}

/// The top [`MAX_RECOMMENDATIONS`] pods for the learner.
pub fn recommend<'a, S: AsRef<str>>(pods: &[&'a Pod], learner_skills: &[S]) -> Vec<&'a Pod> {
    top_ranked(pods, learner_skills)
        .into_iter()
        .map(|scored| scored.pod)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pod::PodDraft;
    use crate::types::PodId;

    fn pod(id: &str, skills: &str) -> Pod {
        let draft = PodDraft {
            required_skills: Some(skills.to_string()),
            ..Default::default()
        };
        Pod::from_draft(PodId::new(id), draft, chrono::Utc::now())
    }

    fn ids(pods: &[&Pod]) -> Vec<String> {
        pods.iter().map(|p| p.id.to_string()).collect()
    }

    // -- skill_match_score ---------------------------------------------------

    #[test]
    fn score_counts_matching_pod_skills() {
        let p = pod("a", "React, TypeScript, API Design");
        assert_eq!(skill_match_score(&p, &["react", "api"]), 2);
    }

    #[test]
    fn score_matches_pod_skill_containing_learner_skill_only() {
        let p = pod("a", "API Design");
        assert_eq!(skill_match_score(&p, &["APIs"]), 0);
        assert_eq!(skill_match_score(&p, &["API"]), 1);
    }

    #[test]
    fn score_counts_each_pod_skill_once() {
        let p = pod("a", "React Native");
        assert_eq!(skill_match_score(&p, &["React", "Native"]), 1);
    }

    #[test]
    fn no_learner_skills_scores_zero() {
        let p = pod("a", "Rust");
        assert_eq!(skill_match_score::<&str>(&p, &[]), 0);
    }

    // -- rank / recommend ----------------------------------------------------

    #[test]
    fn ranking_is_score_descending() {
        let two = pod("two", "Rust, Go");
        let zero = pod("zero", "Haskell");
        let one = pod("one", "Rust");
        let input = [&two, &zero, &one];
        let ranked = rank_pods(&input, &["rust", "go"]);
        let scores: Vec<usize> = ranked.iter().map(|s| s.score).collect();
        assert_eq!(scores, [2, 1, 0]);
        assert_eq!(ids(&recommend(&input, &["rust", "go"])), ["two", "one", "zero"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let a = pod("a", "Rust");
        let b = pod("b", "Go");
        let c = pod("c", "Rust");
        let input = [&a, &b, &c];
        assert_eq!(ids(&recommend(&input, &["rust"])), ["a", "c", "b"]);
        assert_eq!(ids(&recommend::<&str>(&input, &[])), ["a", "b", "c"]);
    }

    #[test]
    fn recommendations_are_capped() {
        let pods: Vec<Pod> = (0..5).map(|i| pod(&format!("p{i}"), "Rust")).collect();
        let refs: Vec<&Pod> = pods.iter().collect();
        let result = recommend(&refs, &["rust"]);
        assert_eq!(result.len(), MAX_RECOMMENDATIONS);
        assert_eq!(ids(&result), ["p0", "p1", "p2"]);
    }

    #[test]
    fn top_ranked_keeps_scores_of_recommended_pods() {
        let pods: Vec<Pod> = ["Go", "Rust", "Rust, Go", "Rust"]
            .iter()
            .enumerate()
            .map(|(i, skills)| pod(&format!("p{i}"), skills))
            .collect();
        let refs: Vec<&Pod> = pods.iter().collect();
        let top = top_ranked(&refs, &["rust", "go"]);
        let pairs: Vec<(&str, usize)> = top.iter().map(|s| (s.pod.id.as_str(), s.score)).collect();
        assert_eq!(pairs, [("p2", 2), ("p0", 1), ("p1", 1)]);
        assert_eq!(ids(&recommend(&refs, &["rust", "go"])), ["p2", "p0", "p1"]);
    }

    #[test]
    fn empty_input_gives_empty_recommendations() {
        assert!(recommend(&[], &["rust"]).is_empty());
    }
}
