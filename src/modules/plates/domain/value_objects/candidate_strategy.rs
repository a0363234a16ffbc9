use serde::{Deserialize, Serialize};

/// How candidates were pulled from the repository for one search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateStrategy {
    /// Every record in the corpus
    FullCorpus,
    /// Only records whose raw fields contain the query
    SubstringPrefilter,
}

impl CandidateStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            CandidateStrategy::FullCorpus => "full-corpus",
            CandidateStrategy::SubstringPrefilter => "substring-prefilter",
        }
    }
}
