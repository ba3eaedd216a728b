//! Simulation report generation.

use crate::core::error::DeathCause;
use serde::Serialize;
use std::fmt;

/// How a single run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunEnd {
    Died(DeathCause),
    TimedOut,
}

impl fmt::Display for RunEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Died(cause) => write!(f, "{}", cause),
            Self::TimedOut => write!(f, "timed out"),
        }
    }
}

/// Outcome of one episode. `score` is the run's fitness.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub score: u32,
    pub ticks: u64,
    pub jumps: u64,
    pub end: RunEnd,
}

/// Aggregated results from a batch of runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub max_ticks_per_run: u64,

    pub mean_score: f64,
    pub median_score: f64,
    pub min_score: u32,
    pub max_score: u32,
    pub mean_ticks: f64,

    pub pipe_deaths: u32,
    pub ground_deaths: u32,
    pub timed_out: u32,

    pub runs: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>, max_ticks_per_run: u64) -> Self {
        let num_runs = runs.len() as u32;
        let n = num_runs.max(1) as f64;

        let mut scores: Vec<u32> = runs.iter().map(|r| r.score).collect();
        scores.sort_unstable();
        let median_score = match scores.len() {
            0 => 0.0,
            len if len % 2 == 1 => scores[len / 2] as f64,
            len => (scores[len / 2 - 1] + scores[len / 2]) as f64 / 2.0,
        };

        let count = |end: RunEnd| runs.iter().filter(|r| r.end == end).count() as u32;

        Self {
            num_runs,
            max_ticks_per_run,
            mean_score: scores.iter().map(|&s| s as f64).sum::<f64>() / n,
            median_score,
            min_score: scores.first().copied().unwrap_or(0),
            max_score: scores.last().copied().unwrap_or(0),
            mean_ticks: runs.iter().map(|r| r.ticks as f64).sum::<f64>() / n,
            pipe_deaths: count(RunEnd::Died(DeathCause::Pipe)),
            ground_deaths: count(RunEnd::Died(DeathCause::Ground)),
            timed_out: count(RunEnd::TimedOut),
            runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, cap {} ticks per run\n\n",
            self.num_runs, self.max_ticks_per_run
        ));

        report.push_str("── SCORE ────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Mean:    {:.2}\n", self.mean_score));
        report.push_str(&format!("  Median:  {:.1}\n", self.median_score));
        report.push_str(&format!("  Min:     {}\n", self.min_score));
        report.push_str(&format!("  Max:     {}\n", self.max_score));
        report.push_str(&format!("  Avg Ticks Survived: {:.0}\n\n", self.mean_ticks));

        report.push_str("── OUTCOMES ─────────────────────────────────────────────────────\n");
        for (label, n) in [
            ("Pipe", self.pipe_deaths),
            ("Ground", self.ground_deaths),
            ("Timed out", self.timed_out),
        ] {
            let pct = n as f64 / self.num_runs.max(1) as f64 * 100.0;
            let bar = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  {:<10} {:>5.1}% {}\n", label, pct, bar));
        }

        report
    }

    /// Serialize the report to pretty JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
