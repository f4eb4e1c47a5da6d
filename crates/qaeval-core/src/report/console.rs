use crate::model::{AggregateReport, QA_CORRECTNESS_KEY};
use crate::report::progress::{ProgressEvent, ProgressSink};
use std::sync::Arc;

const PROGRESS_QUESTION_CHARS: usize = 50;
const SUMMARY_QUESTION_CHARS: usize = 60;

/// First `max` characters of `s`, cut on a char boundary.
fn prefix(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[must_use]
pub fn format_progress_line(position: usize, total: usize, question: &str, score: f64) -> String {
    format!(
        "[{}/{}] Q: {}... → score: {:.2}",
        position,
        total,
        prefix(question, PROGRESS_QUESTION_CHARS),
        score
    )
}

#[must_use]
pub fn format_summary(report: &AggregateReport) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str("--- Summary (local evaluation) ---\n");
    out.push_str(&format!(
        "Mean {} score: {:.2}\n",
        QA_CORRECTNESS_KEY, report.mean_score
    ));
    for r in &report.records {
        out.push_str(&format!(
            "  [{:.2}] {}...\n",
            r.score,
            prefix(&r.question, SUMMARY_QUESTION_CHARS)
        ));
    }
    out
}

/// Sink printing one progress line per finished example to stdout.
pub fn default_progress_sink() -> ProgressSink {
    Arc::new(|ev: ProgressEvent| {
        println!(
            "{}",
            format_progress_line(ev.position, ev.total, &ev.question, ev.score)
        );
    })
}

pub fn print_summary(report: &AggregateReport) {
    print!("{}", format_summary(report));
}
