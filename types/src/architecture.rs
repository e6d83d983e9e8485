//! The four word-embedding architecture presets.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::diagram::{self, Node};
use crate::step::{STEP_COUNT, Step};

/// Text shown in the step banner for one animation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    pub description: &'static str,
}

/// Fixed diagram presets, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Architecture {
    #[default]
    SkipGram,
    Cbow,
    FastText,
    Elmo,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown architecture '{0}' (expected skipgram, cbow, fasttext or elmo)")]
pub struct ParseArchitectureError(pub String);

const SKIP_GRAM_STEPS: [StepInfo; STEP_COUNT as usize] = [
    StepInfo {
        description: "Input word 'bank' is one-hot encoded",
    },
    StepInfo {
        description: "Projection layer creates word embedding",
    },
    StepInfo {
        description: "Output layer predicts context words",
    },
    StepInfo {
        description: "Multiple context words are predicted simultaneously",
    },
];

const CBOW_STEPS: [StepInfo; STEP_COUNT as usize] = [
    StepInfo {
        description: "Multiple context words are input",
    },
    StepInfo {
        description: "Context words are averaged in projection layer",
    },
    StepInfo {
        description: "Embedding is created from averaged context",
    },
    StepInfo {
        description: "Target word is predicted",
    },
];

const FAST_TEXT_STEPS: [StepInfo; STEP_COUNT as usize] = [
    StepInfo {
        description: "Word is split into character n-grams",
    },
    StepInfo {
        description: "Each n-gram gets its own embedding",
    },
    StepInfo {
        description: "N-gram embeddings are averaged",
    },
    StepInfo {
        description: "Final word representation is produced",
    },
];

const ELMO_STEPS: [StepInfo; STEP_COUNT as usize] = [
    StepInfo {
        description: "Input sequence of words",
    },
    StepInfo {
        description: "Bi-directional LSTM processes sequence",
    },
    StepInfo {
        description: "Multiple layer representations are computed",
    },
    StepInfo {
        description: "Final embedding combines all layers",
    },
];

impl Architecture {
    #[must_use]
    pub const fn all() -> &'static [Architecture] {
        &[
            Architecture::SkipGram,
            Architecture::Cbow,
            Architecture::FastText,
            Architecture::Elmo,
        ]
    }

    /// Stable lowercase identifier, as accepted in config and env.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Architecture::SkipGram => "skipgram",
            Architecture::Cbow => "cbow",
            Architecture::FastText => "fasttext",
            Architecture::Elmo => "elmo",
        }
    }

    #[must_use]
    pub const fn tab_label(self) -> &'static str {
        match self {
            Architecture::SkipGram => "SKIPGRAM",
            Architecture::Cbow => "CBOW",
            Architecture::FastText => "FASTTEXT",
            Architecture::Elmo => "ELMO",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Architecture::SkipGram => "Skip-gram Architecture",
            Architecture::Cbow => "CBOW Architecture",
            Architecture::FastText => "FastText Architecture",
            Architecture::Elmo => "ELMo Architecture",
        }
    }

    #[must_use]
    pub const fn steps(self) -> &'static [StepInfo; STEP_COUNT as usize] {
        match self {
            Architecture::SkipGram => &SKIP_GRAM_STEPS,
            Architecture::Cbow => &CBOW_STEPS,
            Architecture::FastText => &FAST_TEXT_STEPS,
            Architecture::Elmo => &ELMO_STEPS,
        }
    }

    #[must_use]
    pub const fn description(self, step: Step) -> &'static str {
        self.steps()[step.index()].description
    }

    /// Top-level nodes of this architecture's diagram, left to right.
    #[must_use]
    pub const fn layout(self) -> &'static [Node] {
        match self {
            Architecture::SkipGram => diagram::SKIP_GRAM,
            Architecture::Cbow => diagram::CBOW,
            Architecture::FastText => diagram::FAST_TEXT,
            Architecture::Elmo => diagram::ELMO,
        }
    }

    /// Position in tab order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Architecture::SkipGram => 0,
            Architecture::Cbow => 1,
            Architecture::FastText => 2,
            Architecture::Elmo => 3,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// Next tab, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    /// Previous tab, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Architecture {
    type Err = ParseArchitectureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|arch| arch.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseArchitectureError(wanted.to_string()))
    }
}
