// crates/claim-gate-core/src/runtime/evaluator.rs
// ============================================================================
// Module: Access Evaluator
// Description: Evaluator runtime composing the claims reader with decisions.
// Purpose: Produce deterministic access decisions with per-axis trace entries.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! The evaluator bridges the pure decision state machine with a claims
//! reader. Claims are read fresh on every call; there is no memoization and
//! no cross-call state, so a decision computed for a given (auth state,
//! requirements, snapshot) triple is the same regardless of evaluation order.
//! Reader faults are downgraded to an evaluation-error denial rather than
//! propagated, so the evaluator itself never raises.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::claims::AuthState;
use crate::core::claims::ClaimsSource;
use crate::core::decision::AccessDecision;
use crate::core::decision::DenialReason;
use crate::core::decision::decide_with_source;
use crate::core::requirement::CheckMode;
use crate::core::requirement::ClaimRequirement;
use crate::interfaces::ClaimsReader;

// ============================================================================
// SECTION: Trace Entries
// ============================================================================

/// Requirement axis evaluated by the decision state machine.
///
/// # Invariants
/// - Variants are stable for serialization and trace records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementAxis {
    /// The permission-name axis.
    Permissions,
    /// The role-name axis.
    Roles,
}

impl fmt::Display for RequirementAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permissions => f.write_str("permissions"),
            Self::Roles => f.write_str("roles"),
        }
    }
}

/// Trace entry for one evaluated requirement axis.
///
/// # Invariants
/// - Entries exist only for axes that were actually evaluated, in
///   evaluation order (permissions before roles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTraceEntry {
    /// Axis the entry describes.
    pub axis: RequirementAxis,
    /// Number of required claim names on the axis.
    pub required: usize,
    /// Matching mode applied to the axis.
    pub mode: CheckMode,
    /// Whether the axis requirement was satisfied.
    pub satisfied: bool,
}

/// Decision plus the per-axis trace captured while deriving it.
///
/// # Invariants
/// - `trace` is empty for decisions reached before claims evaluation
///   (pending, unauthenticated, missing requirement, missing data).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessEvaluation {
    /// Final access decision.
    pub decision: AccessDecision,
    /// Per-axis evaluation trace.
    pub trace: Vec<AxisTraceEntry>,
}

impl AccessEvaluation {
    /// Creates an evaluation with an empty trace.
    #[must_use]
    pub const fn without_trace(decision: AccessDecision) -> Self {
        Self {
            decision,
            trace: Vec::new(),
        }
    }
}

// ============================================================================
// SECTION: Access Evaluator
// ============================================================================

/// Evaluates access requests against a claims reader.
pub struct AccessEvaluator<R> {
    /// Claims reader invoked once per evaluation.
    reader: R,
}

impl<R> AccessEvaluator<R>
where
    R: ClaimsReader,
{
    /// Creates a new evaluator over the given reader.
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
        }
    }

    /// Returns the underlying reader.
    #[must_use]
    pub const fn reader(&self) -> &R {
        &self.reader
    }

    /// Evaluates the supplied requirements for the current principal.
    ///
    /// Early states (pending, unauthenticated, no requirement) are decided
    /// before the reader is invoked, so authentication dominates
    /// authorization and a claims read never precedes the auth check.
    #[must_use]
    pub fn evaluate(
        &self,
        auth: AuthState,
        permission_requirement: Option<&ClaimRequirement>,
        role_requirement: Option<&ClaimRequirement>,
    ) -> AccessEvaluation {
        if !auth.is_initialized {
            return AccessEvaluation::without_trace(AccessDecision::Pending);
        }
        if !auth.is_authenticated {
            return AccessEvaluation::without_trace(AccessDecision::Denied {
                reason: DenialReason::Unauthenticated,
            });
        }
        if permission_requirement.is_none() && role_requirement.is_none() {
            return AccessEvaluation::without_trace(AccessDecision::Denied {
                reason: DenialReason::NoRequirementSpecified,
            });
        }

        let source = match self.reader.read() {
            Ok(source) => source,
            Err(_) => {
                return AccessEvaluation::without_trace(AccessDecision::Denied {
                    reason: DenialReason::EvaluationError,
                });
            }
        };

        let decision =
            decide_with_source(auth, permission_requirement, role_requirement, &source);
        let trace = collect_trace(permission_requirement, role_requirement, &source);

        AccessEvaluation {
            decision,
            trace,
        }
    }
}

// ============================================================================
// SECTION: Trace Collection
// ============================================================================

/// Rebuilds the per-axis trace for a decision derived from a source.
///
/// Mirrors the state machine's evaluation order: permissions first, and a
/// failed permission axis stops the walk before roles are examined.
fn collect_trace(
    permission_requirement: Option<&ClaimRequirement>,
    role_requirement: Option<&ClaimRequirement>,
    source: &ClaimsSource,
) -> Vec<AxisTraceEntry> {
    let Some(snapshot) = source.snapshot() else {
        return Vec::new();
    };

    let mut trace = Vec::new();
    if let Some(requirement) = permission_requirement {
        let satisfied = requirement.is_satisfied_by(&snapshot.permissions);
        trace.push(AxisTraceEntry {
            axis: RequirementAxis::Permissions,
            required: requirement.claims().len(),
            mode: requirement.mode(),
            satisfied,
        });
        if !satisfied {
            return trace;
        }
    }
    if let Some(requirement) = role_requirement {
        trace.push(AxisTraceEntry {
            axis: RequirementAxis::Roles,
            required: requirement.claims().len(),
            mode: requirement.mode(),
            satisfied: requirement.is_satisfied_by(&snapshot.roles),
        });
    }
    trace
}
