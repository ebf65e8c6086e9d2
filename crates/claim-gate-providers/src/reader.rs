// crates/claim-gate-providers/src/reader.rs
// ============================================================================
// Module: Tiered Claims Reader
// Description: Ordered two-source claims reader with fail-closed folding.
// Purpose: Prefer the session source and fold fallback faults to unavailable.
// Dependencies: claim-gate-core
// ============================================================================

//! ## Overview
//! The tiered reader tries the primary session source first. When the primary
//! holds anything on either axis it is used in full for both axes; an axis
//! the primary lacks stays an empty set rather than triggering the fallback.
//! Only a primary with nothing on both axes consults the persisted cache,
//! and a cache that is empty, absent, or unreadable folds to `Unavailable`:
//! "explicitly zero claims" and "couldn't determine claims" are deliberately
//! not distinguished here, matching the upstream behavior this reader
//! preserves. Primary-side faults propagate instead of folding, so real
//! programming errors stay visible to the evaluator.

// ============================================================================
// SECTION: Imports
// ============================================================================

use claim_gate_core::AuthState;
use claim_gate_core::ClaimsReader;
use claim_gate_core::ClaimsSource;
use claim_gate_core::FallbackSource;
use claim_gate_core::PrimarySource;
use claim_gate_core::SourceError;

// ============================================================================
// SECTION: Tiered Reader
// ============================================================================

/// Ordered claims reader over a primary and a fallback source.
///
/// # Invariants
/// - The primary is always consulted first; sources are never merged.
/// - Fallback load failures fold to `Unavailable`, never to an error.
#[derive(Debug)]
pub struct TieredClaimsReader<P, F> {
    /// In-memory session source, preferred.
    primary: P,
    /// Persisted cache source, consulted when the primary is empty.
    fallback: F,
}

impl<P, F> TieredClaimsReader<P, F>
where
    P: PrimarySource,
    F: FallbackSource,
{
    /// Creates a reader over the given sources.
    #[must_use]
    pub const fn new(primary: P, fallback: F) -> Self {
        Self {
            primary,
            fallback,
        }
    }

    /// Returns the primary source.
    #[must_use]
    pub const fn primary(&self) -> &P {
        &self.primary
    }

    /// Returns the fallback source.
    #[must_use]
    pub const fn fallback(&self) -> &F {
        &self.fallback
    }

    /// Reads the point-in-time auth flags from the primary source.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the primary state cannot be read.
    pub fn auth_state(&self) -> Result<AuthState, SourceError> {
        Ok(self.primary.snapshot()?.auth)
    }
}

impl<P, F> ClaimsReader for TieredClaimsReader<P, F>
where
    P: PrimarySource,
    F: FallbackSource,
{
    fn read(&self) -> Result<ClaimsSource, SourceError> {
        let primary = self.primary.snapshot()?;
        if !primary.claims.is_empty() {
            return Ok(ClaimsSource::FromPrimary {
                snapshot: primary.claims,
            });
        }

        match self.fallback.load() {
            Ok(Some(snapshot)) if !snapshot.is_empty() => Ok(ClaimsSource::FromFallback {
                snapshot,
            }),
            // Empty payloads and load failures alike fold to unavailable.
            Ok(_) | Err(_) => Ok(ClaimsSource::Unavailable),
        }
    }
}
