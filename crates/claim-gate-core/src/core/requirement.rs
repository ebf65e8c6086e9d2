// crates/claim-gate-core/src/core/requirement.rs
// ============================================================================
// Module: Claim Requirements
// Description: Canonical requirement expressions and set-membership evaluation.
// Purpose: Normalize single- and list-form inputs into one list-plus-mode shape.
// Dependencies: crate::core::claims, serde, smallvec
// ============================================================================

//! ## Overview
//! A requirement expression is a non-empty list of claim names plus a check
//! mode. Callers normalize their convenience inputs (a single name or a list)
//! into this one canonical shape at the boundary, so the evaluator never
//! duplicates ANY/ALL logic per input arity. The non-empty invariant is
//! enforced at construction; evaluation is pure and total.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use smallvec::SmallVec;
use smallvec::smallvec;

use crate::core::claims::ClaimName;
use crate::core::claims::ClaimSet;

// ============================================================================
// SECTION: Check Mode
// ============================================================================

/// Matching semantics for a requirement expression.
///
/// # Invariants
/// - Variants are stable for serialization and caller-facing options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckMode {
    /// At least one required name must be granted.
    #[default]
    Any,
    /// Every required name must be granted.
    All,
}

impl fmt::Display for CheckMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("any"),
            Self::All => f.write_str("all"),
        }
    }
}

// ============================================================================
// SECTION: Shape Errors
// ============================================================================

/// Errors raised while constructing a requirement expression.
///
/// # Invariants
/// - None. Variants capture structured construction failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementShapeError {
    /// The supplied claim list was empty.
    EmptyClaimList,
}

impl fmt::Display for RequirementShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyClaimList => f.write_str("requirement claim list must not be empty"),
        }
    }
}

impl std::error::Error for RequirementShapeError {}

// ============================================================================
// SECTION: Claim Requirement
// ============================================================================

/// Canonical requirement expression over one claim axis.
///
/// # Invariants
/// - `claims` is never empty; the invariant is enforced at construction.
/// - A one-element list evaluates identically under either mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRequirement {
    /// Required claim names, in caller-supplied order.
    claims: SmallVec<[ClaimName; 4]>,
    /// Matching semantics applied to the list.
    mode: CheckMode,
}

impl ClaimRequirement {
    /// Creates a requirement from a list of names and a mode.
    ///
    /// # Errors
    ///
    /// Returns [`RequirementShapeError::EmptyClaimList`] when `names` is empty.
    pub fn new<I, N>(names: I, mode: CheckMode) -> Result<Self, RequirementShapeError>
    where
        I: IntoIterator<Item = N>,
        N: Into<ClaimName>,
    {
        let claims: SmallVec<[ClaimName; 4]> = names.into_iter().map(Into::into).collect();
        if claims.is_empty() {
            return Err(RequirementShapeError::EmptyClaimList);
        }
        Ok(Self {
            claims,
            mode,
        })
    }

    /// Creates a single-claim requirement.
    ///
    /// The mode is immaterial for one element; `Any` is recorded.
    #[must_use]
    pub fn single(name: impl Into<ClaimName>) -> Self {
        Self {
            claims: smallvec![name.into()],
            mode: CheckMode::Any,
        }
    }

    /// Returns the required claim names.
    #[must_use]
    pub fn claims(&self) -> &[ClaimName] {
        &self.claims
    }

    /// Returns the matching mode.
    #[must_use]
    pub const fn mode(&self) -> CheckMode {
        self.mode
    }

    /// Evaluates the requirement against a granted-claim set.
    ///
    /// Pure and total: `Any` succeeds when at least one required name is a
    /// member of `granted`; `All` succeeds when every required name is.
    #[must_use]
    pub fn is_satisfied_by(&self, granted: &ClaimSet) -> bool {
        match self.mode {
            CheckMode::Any => self.claims.iter().any(|name| granted.contains(name)),
            CheckMode::All => self.claims.iter().all(|name| granted.contains(name)),
        }
    }
}
