// crates/claim-gate-guard/src/log.rs
// ============================================================================
// Module: Decision Log Sink
// Description: JSONL sink for diagnostic access-decision records.
// Purpose: Persist one structured record per evaluation without side channels.
// Dependencies: claim-gate-core, serde, serde_json, std
// ============================================================================

//! ## Overview
//! `DecisionLog` writes one JSON line per recorded evaluation. Logging is
//! optional diagnostics for the wrappers; the decision functions themselves
//! never log. Write failures surface as errors to the caller.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::sync::Mutex;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use claim_gate_core::AccessDecision;
use claim_gate_core::AccessEvaluation;
use claim_gate_core::AxisTraceEntry;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Log Errors
// ============================================================================

/// Decision log errors.
#[derive(Debug, Error)]
pub enum LogError {
    /// The log record could not be written.
    #[error("decision log write failed: {0}")]
    WriteFailed(String),
}

// ============================================================================
// SECTION: Record
// ============================================================================

/// One serialized decision record.
#[derive(Debug, Serialize)]
struct DecisionRecord<'a> {
    /// Monotonic in-process sequence number.
    seq: u64,
    /// Gate label supplied by the caller.
    gate: &'a str,
    /// Requested location, when the record came from a route gate.
    requested: Option<&'a str>,
    /// Final access decision.
    decision: AccessDecision,
    /// Per-axis evaluation trace.
    trace: &'a [AxisTraceEntry],
}

// ============================================================================
// SECTION: Decision Log
// ============================================================================

/// JSONL decision log sink.
///
/// # Invariants
/// - Records are written whole lines in sequence order under the writer lock.
pub struct DecisionLog<W: Write + Send> {
    /// Output writer for log records.
    writer: Mutex<W>,
    /// Monotonic sequence counter.
    sequence: AtomicU64,
}

impl<W: Write + Send> DecisionLog<W> {
    /// Creates a decision log over the given writer.
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            sequence: AtomicU64::new(0),
        }
    }

    /// Appends one record and returns its sequence number.
    ///
    /// # Errors
    ///
    /// Returns [`LogError`] when the writer lock is poisoned or the record
    /// cannot be serialized or written.
    pub fn record(
        &self,
        gate: &str,
        requested: Option<&str>,
        evaluation: &AccessEvaluation,
    ) -> Result<u64, LogError> {
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst);
        let record = DecisionRecord {
            seq,
            gate,
            requested,
            decision: evaluation.decision,
            trace: &evaluation.trace,
        };
        let mut guard = self
            .writer
            .lock()
            .map_err(|_| LogError::WriteFailed("log writer mutex poisoned".to_string()))?;
        serde_json::to_writer(&mut *guard, &record)
            .map_err(|err| LogError::WriteFailed(err.to_string()))?;
        guard.write_all(b"\n").map_err(|err| LogError::WriteFailed(err.to_string()))?;
        drop(guard);
        Ok(seq)
    }
}
