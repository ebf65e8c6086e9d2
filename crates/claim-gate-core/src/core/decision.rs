// crates/claim-gate-core/src/core/decision.rs
// ============================================================================
// Module: Access Decisions
// Description: Denial taxonomy, decision kinds, and the decision state machine.
// Purpose: Resolve requirement expressions against a claims source, fail closed.
// Dependencies: crate::core::{claims, requirement}, serde
// ============================================================================

//! ## Overview
//! The decision state machine runs `Start -> {Pending | CheckAuth} ->
//! {Denied | CheckRequirementPresence} -> {Denied | ReadClaims} ->
//! {Indeterminate | EvaluatePermissions} -> {Denied | EvaluateRoles} ->
//! {Denied | Granted}`; every state except `Start` is terminal. All failure
//! paths are deterministic re-derivations from the same inputs: the same
//! (auth state, requirements, source) triple always yields the same decision.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::claims::AuthState;
use crate::core::claims::ClaimsSource;
use crate::core::requirement::ClaimRequirement;

// ============================================================================
// SECTION: Denial Taxonomy
// ============================================================================

/// Terminal, non-retryable reasons an evaluation does not grant access.
///
/// # Invariants
/// - Variants are stable for serialization and caller-facing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// The principal is not authenticated.
    Unauthenticated,
    /// The permission requirement was not satisfied.
    InsufficientPermissions,
    /// The role requirement was not satisfied.
    InsufficientRoles,
    /// Neither a permission nor a role requirement was supplied.
    NoRequirementSpecified,
    /// Neither claims source had data for the principal.
    DataMissing,
    /// An internal fault occurred while reading claims.
    EvaluationError,
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated => f.write_str("principal is not authenticated"),
            Self::InsufficientPermissions => f.write_str("permission requirement not satisfied"),
            Self::InsufficientRoles => f.write_str("role requirement not satisfied"),
            Self::NoRequirementSpecified => f.write_str("no requirement specified"),
            Self::DataMissing => f.write_str("claims data unavailable"),
            Self::EvaluationError => f.write_str("claims evaluation fault"),
        }
    }
}

// ============================================================================
// SECTION: Access Decision
// ============================================================================

/// Outcome of one access evaluation.
///
/// # Invariants
/// - `Pending` is not terminal; callers must re-evaluate once the upstream
///   auth bootstrap completes.
/// - `Denied` and `Indeterminate` both carry a [`DenialReason`];
///   `Indeterminate` marks "could not tell" rather than "not allowed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AccessDecision {
    /// The upstream auth bootstrap has not completed; render nothing.
    Pending,
    /// Every supplied requirement was satisfied.
    Granted,
    /// Access is refused for the tagged reason.
    Denied {
        /// Why access was refused.
        reason: DenialReason,
    },
    /// Claims could not be determined; refusal is precautionary.
    Indeterminate {
        /// Why the evaluation could not complete.
        reason: DenialReason,
    },
}

impl AccessDecision {
    /// Returns true when access was granted.
    #[must_use]
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }

    /// Returns true when the decision is still pending initialization.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns the denial reason for non-granted terminal decisions.
    #[must_use]
    pub const fn denial_reason(&self) -> Option<DenialReason> {
        match self {
            Self::Denied {
                reason,
            }
            | Self::Indeterminate {
                reason,
            } => Some(*reason),
            Self::Pending | Self::Granted => None,
        }
    }
}

// ============================================================================
// SECTION: Decision State Machine
// ============================================================================

/// Resolves requirement expressions against an already-read claims source.
///
/// Authentication dominates authorization: the auth flags are checked before
/// any claims lookup, and the absence of a stated requirement on both axes
/// is itself a denial, never an implicit grant. Permissions are evaluated
/// before roles; when both axes are supplied, both must pass.
#[must_use]
pub fn decide_with_source(
    auth: AuthState,
    permission_requirement: Option<&ClaimRequirement>,
    role_requirement: Option<&ClaimRequirement>,
    source: &ClaimsSource,
) -> AccessDecision {
    if !auth.is_initialized {
        return AccessDecision::Pending;
    }
    if !auth.is_authenticated {
        return AccessDecision::Denied {
            reason: DenialReason::Unauthenticated,
        };
    }
    if permission_requirement.is_none() && role_requirement.is_none() {
        return AccessDecision::Denied {
            reason: DenialReason::NoRequirementSpecified,
        };
    }

    let Some(snapshot) = source.snapshot() else {
        return AccessDecision::Indeterminate {
            reason: DenialReason::DataMissing,
        };
    };

    if let Some(requirement) = permission_requirement
        && !requirement.is_satisfied_by(&snapshot.permissions)
    {
        return AccessDecision::Denied {
            reason: DenialReason::InsufficientPermissions,
        };
    }
    if let Some(requirement) = role_requirement
        && !requirement.is_satisfied_by(&snapshot.roles)
    {
        return AccessDecision::Denied {
            reason: DenialReason::InsufficientRoles,
        };
    }

    AccessDecision::Granted
}
