// crates/claim-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Claim Gate Interfaces
// Description: Backend-agnostic interfaces for claims sources and readers.
// Purpose: Define the contract surfaces between the evaluator and its sources.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how the evaluator observes claims without embedding
//! storage details. Implementations must be deterministic point-in-time reads
//! and fail closed on missing or invalid data: a legitimately absent payload
//! is an explicit "no data" value, never an error, so real faults stay
//! distinguishable from empty sources.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::claims::AuthState;
use crate::core::claims::ClaimsSnapshot;
use crate::core::claims::ClaimsSource;

// ============================================================================
// SECTION: Source Errors
// ============================================================================

/// Claims source errors.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Shared session state was poisoned or otherwise unreadable.
    #[error("claims source lock error: {0}")]
    Lock(String),
    /// Source I/O error.
    #[error("claims source io error: {0}")]
    Io(String),
    /// Persisted payload exists but is corrupt or fails validation.
    #[error("claims source corruption: {0}")]
    Corrupt(String),
}

// ============================================================================
// SECTION: Primary Source
// ============================================================================

/// Point-in-time read of the in-memory session source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimarySnapshot {
    /// Authentication flags at read time.
    pub auth: AuthState,
    /// Claims held by the principal at read time.
    pub claims: ClaimsSnapshot,
}

/// In-memory session claims source, preferred over the fallback.
pub trait PrimarySource {
    /// Returns a point-in-time snapshot of auth flags and claims.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the session state cannot be read.
    fn snapshot(&self) -> Result<PrimarySnapshot, SourceError>;
}

// ============================================================================
// SECTION: Fallback Source
// ============================================================================

/// Persisted local claims cache, consulted only when the primary has none.
pub trait FallbackSource {
    /// Loads the persisted snapshot, or `None` when nothing is persisted.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when a persisted payload exists but cannot be
    /// read or parsed. Callers fold this into "unavailable" rather than
    /// surfacing it as a denial of its own.
    fn load(&self) -> Result<Option<ClaimsSnapshot>, SourceError>;
}

// ============================================================================
// SECTION: Claims Reader
// ============================================================================

/// Ordered-source claims reader invoked once per evaluation.
pub trait ClaimsReader {
    /// Reads claims from the first available source.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] only for faults outside the documented
    /// empty-fallback fold (for example a poisoned primary lock); the
    /// evaluator maps such faults to an evaluation-error denial.
    fn read(&self) -> Result<ClaimsSource, SourceError>;
}
