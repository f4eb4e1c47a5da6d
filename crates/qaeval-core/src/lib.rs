//! Local LLM-as-judge evaluation harness.
//!
//! Feeds fixed questions through an agent pipeline, scores each answer against a
//! reference answer with a judge model, and aggregates the scores into a report.

pub mod agent;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod errors;
pub mod judge;
pub mod model;
pub mod providers;
pub mod report;

#[cfg(test)]
pub(crate) mod test_support;
