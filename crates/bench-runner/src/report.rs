//! Partial-results report rendering.
//!
//! The harness hands raw per-invocation samples to whatever statistics
//! engine consumes them; this renderer is the minimal built-in view:
//! average time per (target, cost) pair, and the reason for every pair
//! that produced no result.

use std::time::Duration;

use bench_core::{PairStatus, TrialReport};

/// Render a trial report as a plain text table.
pub fn render(report: &TrialReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<22} {:>5} {:>8} {:>10} {:>10} {:>10}  {}\n",
        "target", "cost", "samples", "mean", "min", "max", "status"
    ));

    for failure in &report.setup_failures {
        out.push_str(&format!(
            "{:<22} {:>5} {:>8} {:>10} {:>10} {:>10}  {}: {}\n",
            failure.target, "-", 0, "-", "-", "-", failure.kind, failure.detail
        ));
    }

    for outcome in &report.outcomes {
        match (&outcome.status, outcome.summary()) {
            (PairStatus::Completed, Some(summary)) => {
                out.push_str(&format!(
                    "{:<22} {:>5} {:>8} {:>10} {:>10} {:>10}  ok\n",
                    outcome.target,
                    outcome.cost,
                    summary.count,
                    millis(summary.mean),
                    millis(summary.min),
                    millis(summary.max),
                ));
            }
            (PairStatus::Completed, None) => {
                out.push_str(&format!(
                    "{:<22} {:>5} {:>8} {:>10} {:>10} {:>10}  ok (no samples)\n",
                    outcome.target, outcome.cost, 0, "-", "-", "-",
                ));
            }
            (PairStatus::Failed(failure), _) => {
                out.push_str(&format!(
                    "{:<22} {:>5} {:>8} {:>10} {:>10} {:>10}  {}: {}\n",
                    outcome.target,
                    outcome.cost,
                    outcome.samples.len(),
                    "-",
                    "-",
                    "-",
                    failure.kind,
                    failure.detail,
                ));
            }
        }
    }

    out
}

fn millis(d: Duration) -> String {
    format!("{:.3}ms", d.as_secs_f64() * 1000.0)
}
