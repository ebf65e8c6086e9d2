// crates/claim-gate-providers/src/session.rs
// ============================================================================
// Module: Session Claims Store
// Description: In-memory session-scoped claims source.
// Purpose: Hold the hydrated auth flags and claims for point-in-time reads.
// Dependencies: claim-gate-core, std::sync
// ============================================================================

//! ## Overview
//! `SessionStore` is the primary claims source: an in-memory, session-scoped
//! record of the authenticated principal's permission and role names plus the
//! auth bootstrap flags. The upstream fetch that populates it is outside this
//! crate; the store only offers mutators for hydration and a point-in-time
//! snapshot read. A poisoned lock surfaces as a source error, never a panic.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Mutex;

use claim_gate_core::AuthState;
use claim_gate_core::ClaimName;
use claim_gate_core::ClaimsSnapshot;
use claim_gate_core::PrimarySnapshot;
use claim_gate_core::PrimarySource;
use claim_gate_core::SourceError;

// ============================================================================
// SECTION: Session State
// ============================================================================

/// Mutable session state guarded by the store's lock.
#[derive(Debug, Default)]
struct SessionState {
    /// Authentication flags for the current principal.
    auth: AuthState,
    /// Granted permission names.
    permissions: Vec<ClaimName>,
    /// Granted role names.
    roles: Vec<ClaimName>,
}

// ============================================================================
// SECTION: Session Store
// ============================================================================

/// In-memory primary claims source.
///
/// # Invariants
/// - `hydrate` marks the store initialized; `reset` clears claims and flags.
/// - Reads are point-in-time copies; callers never observe partial updates.
#[derive(Debug, Default)]
pub struct SessionStore {
    /// Guarded session state.
    state: Mutex<SessionState>,
}

impl SessionStore {
    /// Creates an empty, uninitialized session store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the granted claims and marks the store initialized.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Lock`] when the session state is poisoned.
    pub fn hydrate<I, J, N, M>(&self, permissions: I, roles: J) -> Result<(), SourceError>
    where
        I: IntoIterator<Item = N>,
        J: IntoIterator<Item = M>,
        N: Into<ClaimName>,
        M: Into<ClaimName>,
    {
        let mut state = self.lock()?;
        state.permissions = permissions.into_iter().map(Into::into).collect();
        state.roles = roles.into_iter().map(Into::into).collect();
        state.auth.is_initialized = true;
        Ok(())
    }

    /// Sets the authenticated flag for the current principal.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Lock`] when the session state is poisoned.
    pub fn set_authenticated(&self, is_authenticated: bool) -> Result<(), SourceError> {
        let mut state = self.lock()?;
        state.auth.is_authenticated = is_authenticated;
        Ok(())
    }

    /// Marks the auth bootstrap complete without touching claims.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Lock`] when the session state is poisoned.
    pub fn mark_initialized(&self) -> Result<(), SourceError> {
        let mut state = self.lock()?;
        state.auth.is_initialized = true;
        Ok(())
    }

    /// Clears claims and auth flags, returning the store to its initial state.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Lock`] when the session state is poisoned.
    pub fn reset(&self) -> Result<(), SourceError> {
        let mut state = self.lock()?;
        *state = SessionState::default();
        Ok(())
    }

    /// Acquires the state lock, converting poisoning into a source error.
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, SessionState>, SourceError> {
        self.state
            .lock()
            .map_err(|_| SourceError::Lock("session state mutex poisoned".to_string()))
    }
}

impl PrimarySource for SessionStore {
    fn snapshot(&self) -> Result<PrimarySnapshot, SourceError> {
        let state = self.lock()?;
        Ok(PrimarySnapshot {
            auth: state.auth,
            claims: ClaimsSnapshot::from_names(
                state.permissions.iter().cloned(),
                state.roles.iter().cloned(),
            ),
        })
    }
}
