use colearn_core::ids::{IdGenerator, RandomIds, SequentialIds};
use colearn_core::{LearnerProfile, PodFilter};

/// Skills used when `COLEARN_LEARNER_SKILLS` is unset.
pub const DEFAULT_LEARNER_SKILLS: &str = "React, Node.js, UX, APIs";

/// Name used when `COLEARN_LEARNER_NAME` is unset.
pub const DEFAULT_LEARNER_NAME: &str = "Learner";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has invalid value '{value}': expected {expected}")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// How new pod ids are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    Random,
    Sequential,
}

impl IdStrategy {
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            Self::Random => Box::new(RandomIds),
            Self::Sequential => Box::new(SequentialIds::new()),
        }
    }
}

/// Demo configuration loaded from environment variables.
///
/// | Env Var                          | Default                     |
/// |----------------------------------|-----------------------------|
/// | `COLEARN_LEARNER_NAME`           | `Learner`                   |
/// | `COLEARN_LEARNER_SKILLS`         | `React, Node.js, UX, APIs`  |
/// | `COLEARN_SEED_CATALOG`           | `true`                      |
/// | `COLEARN_ID_STRATEGY`            | `random`                    |
/// | `COLEARN_FILTER_SEARCH`          | unset                       |
/// | `COLEARN_FILTER_SKILL`           | unset                       |
/// | `COLEARN_FILTER_DURATION`        | unset                       |
/// | `COLEARN_FILTER_MAX_TEAM_SIZE`   | unset                       |
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub learner: LearnerProfile,
    pub seed_catalog: bool,
    pub id_strategy: IdStrategy,
    pub filter: PodFilter,
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let name = lookup("COLEARN_LEARNER_NAME")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LEARNER_NAME.into());

        let skills =
            lookup("COLEARN_LEARNER_SKILLS").unwrap_or_else(|| DEFAULT_LEARNER_SKILLS.into());

        let seed_catalog = match lookup("COLEARN_SEED_CATALOG") {
            None => true,
            Some(v) => parse_bool("COLEARN_SEED_CATALOG", &v)?,
        };

        let id_strategy = match lookup("COLEARN_ID_STRATEGY") {
            None => IdStrategy::Random,
            Some(v) => match v.trim().to_ascii_lowercase().as_str() {
                "random" => IdStrategy::Random,
                "sequential" => IdStrategy::Sequential,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "COLEARN_ID_STRATEGY",
                        value: v,
                        expected: "random or sequential",
                    })
                }
            },
        };

        let filter = PodFilter {
            search: lookup("COLEARN_FILTER_SEARCH"),
            skill: lookup("COLEARN_FILTER_SKILL"),
            duration: lookup("COLEARN_FILTER_DURATION"),
            max_team_size: lookup("COLEARN_FILTER_MAX_TEAM_SIZE"),
        };

        Ok(Self {
            learner: LearnerProfile::from_skill_text(name, &skills),
            seed_catalog,
            id_strategy,
            filter,
        })
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: value.to_string(),
            expected: "true/false, 1/0 or yes/no",
        }),
    }
}
