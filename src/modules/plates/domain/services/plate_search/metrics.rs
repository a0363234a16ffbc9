use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::modules::plates::domain::value_objects::CandidateStrategy;

/// Metrics for a single plate search
///
/// Tracks how candidates were retrieved and how many survived each stage.
#[derive(Debug, Clone)]
pub struct SearchMetrics {
    /// Total duration of the search
    pub total_duration: Duration,

    /// Duration of each stage by name
    pub stage_durations: HashMap<String, Duration>,

    /// How candidates were fetched; `None` when the query normalized to empty
    pub strategy: Option<CandidateStrategy>,

    /// Maximum edit distance applied to this query
    pub max_distance: usize,

    /// Number of candidates fetched from the repository
    pub candidate_count: usize,

    /// Number of candidates that matched any tier
    pub match_count: usize,

    /// Number of matches that only qualified through edit distance
    pub fuzzy_match_count: usize,

    /// Number of plates on the returned page
    pub returned_count: usize,
}

impl SearchMetrics {
    /// Create empty metrics
    pub fn new() -> Self {
        Self {
            total_duration: Duration::ZERO,
            stage_durations: HashMap::new(),
            strategy: None,
            max_distance: 0,
            candidate_count: 0,
            match_count: 0,
            fuzzy_match_count: 0,
            returned_count: 0,
        }
    }

    /// Percentage of fetched candidates that matched
    pub fn match_rate(&self) -> f32 {
        if self.candidate_count == 0 {
            return 0.0;
        }

        (self.match_count as f32 / self.candidate_count as f32) * 100.0
    }

    /// Generate a human-readable report
    pub fn report(&self) -> String {
        let mut lines = vec![
            "=== Search Metrics ===".to_string(),
            format!("Total Duration: {}ms", self.total_duration.as_millis()),
            format!(
                "Strategy: {}",
                self.strategy.map(|s| s.name()).unwrap_or("none")
            ),
            format!("Max Edit Distance: {}", self.max_distance),
            format!("Candidates: {}", self.candidate_count),
            format!(
                "Matches: {} ({:.1}%)",
                self.match_count,
                self.match_rate()
            ),
            format!("Fuzzy Matches: {}", self.fuzzy_match_count),
            format!("Returned: {}", self.returned_count),
            "".to_string(),
            "Stage Durations:".to_string(),
        ];

        // Slowest stage first
        let mut stages: Vec<_> = self.stage_durations.iter().collect();
        stages.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        for (stage, duration) in stages {
            lines.push(format!("  {}: {}µs", stage, duration.as_micros()));
        }

        lines.join("\n")
    }
}

impl Default for SearchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper for timing search stages
pub struct StageTimer {
    stage_name: String,
    start: Instant,
}

impl StageTimer {
    /// Start timing a stage
    pub fn start(stage_name: impl Into<String>) -> Self {
        Self {
            stage_name: stage_name.into(),
            start: Instant::now(),
        }
    }

    /// Stop timing and record duration in metrics
    pub fn stop(self, metrics: &mut SearchMetrics) -> Duration {
        let duration = self.start.elapsed();
        metrics.stage_durations.insert(self.stage_name, duration);
        duration
    }
}
