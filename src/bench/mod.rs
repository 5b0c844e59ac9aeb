//! Bench Module - Remote benchmark results contract.
//!
//! A separate, read-only data path: the site displays precomputed benchmark
//! results fetched from a remote service. This module owns the wire shape
//! and a thin blocking client for the one remote operation,
//! `getLastBenchmarkRun`. There is no retry or backoff: a failed fetch is
//! fatal to that request and surfaces to the caller.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

// =============================================================================
// Wire types
// =============================================================================

/// Measured statistics for one benchmarked method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchStats {
    /// Operations per second.
    pub hz: f64,
    /// Total elapsed seconds for the run.
    pub elapsed: f64,
    /// Relative margin of error, percent.
    pub rme: f64,
    /// Mean time per operation, seconds.
    pub mean: f64,
}

/// Results keyed method name → stats.
pub type MethodStats = BTreeMap<String, BenchStats>;

/// Results keyed suite name → method results.
pub type SuiteStats = BTreeMap<String, MethodStats>;

/// One complete benchmark run:
/// file name → suite name → method name → stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRun {
    pub id: String,
    pub created: DateTime<Utc>,
    pub data: BTreeMap<String, SuiteStats>,
}

impl BenchmarkRun {
    /// Benchmarked file names, in map order.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Suites of one file, if the file exists in the run.
    pub fn suites(&self, file: &str) -> Option<&SuiteStats> {
        self.data.get(file)
    }

    /// Stats for one method, walking the nested maps in one step.
    pub fn stats(&self, file: &str, suite: &str, method: &str) -> Option<&BenchStats> {
        self.data.get(file)?.get(suite)?.get(method)
    }
}

// =============================================================================
// Client
// =============================================================================

/// Fetch the most recent benchmark run from the results service.
///
/// `base_url` is the service root; the operation lives at
/// `{base_url}/benchmarks/last`. Blocking, single attempt.
pub fn get_last_benchmark_run(base_url: &str) -> Result<BenchmarkRun> {
    let url = format!("{}/benchmarks/last", base_url.trim_end_matches('/'));

    let run: BenchmarkRun = reqwest::blocking::get(&url)
        .with_context(|| format!("failed to fetch {url}"))?
        .error_for_status()
        .context("benchmark service returned an error status")?
        .json()
        .context("failed to decode benchmark run")?;

    info!(id = %run.id, files = run.data.len(), "fetched last benchmark run");
    Ok(run)
}

// =============================================================================
// Tests
// =============================================================================
