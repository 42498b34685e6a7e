//! Engine configuration: search depths and the tie-break seed

use std::fmt;
use std::str::FromStr;

/// AI strength, mapped to a search depth by [`EngineConfig`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// The search depth this difficulty maps to under `config`
    pub fn depth(self, config: &EngineConfig) -> usize {
        match self {
            Difficulty::Easy => config.easy_depth,
            Difficulty::Medium => config.medium_depth,
            Difficulty::Hard => config.hard_depth,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "unknown difficulty '{}', expected easy, medium or hard",
                other
            )),
        }
    }
}

/// Immutable settings handed to the [`Engine`](crate::Engine)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    pub easy_depth: usize,
    pub medium_depth: usize,
    pub hard_depth: usize,
    /// Depth of the reply search run for every candidate column of a hint
    pub hint_depth: usize,
    /// Upper bound applied to every requested search depth
    pub max_depth: usize,
    /// Seed for the search's tie-break draw, `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            easy_depth: 3,
            medium_depth: 5,
            hard_depth: 7,
            hint_depth: 5,
            max_depth: 9,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_hint_depth(mut self, hint_depth: usize) -> Self {
        self.hint_depth = hint_depth;
        self
    }

    /// Clamps a requested depth into `1..=max_depth`
    pub fn clamp_depth(&self, depth: usize) -> usize {
        depth.max(1).min(self.max_depth.max(1))
    }
}
