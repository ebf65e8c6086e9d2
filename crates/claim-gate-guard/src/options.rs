// crates/claim-gate-guard/src/options.rs
// ============================================================================
// Module: Guard Options
// Description: Caller-facing guard configuration and normalization.
// Purpose: Collapse single- and list-form inputs into canonical requirements.
// Dependencies: claim-gate-core, serde
// ============================================================================

//! ## Overview
//! Guard options are the configuration surface exposed to the rendering and
//! routing layers. Normalization is strict and fail-closed: conflicting
//! shapes, explicitly empty lists, and oversized inputs are rejected with
//! structured errors rather than silently repaired, and the core evaluator
//! only ever sees the canonical list-plus-mode requirement shape.
//! Options are untrusted input; hard limits are enforced before any claim
//! name reaches the evaluator.

// ============================================================================
// SECTION: Imports
// ============================================================================

use claim_gate_core::CheckMode;
use claim_gate_core::ClaimRequirement;
use claim_gate_core::RequirementAxis;
use claim_gate_core::RequirementShapeError;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum length of a single claim name in bytes.
pub const MAX_CLAIM_NAME_BYTES: usize = 255;
/// Maximum number of claim names in one requirement list.
pub const MAX_CLAIMS_PER_LIST: usize = 64;
/// Default redirect path for the route gate.
pub const DEFAULT_REDIRECT_PATH: &str = "/unauthorized";

// ============================================================================
// SECTION: Options Errors
// ============================================================================

/// Errors raised while normalizing guard options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Both the single and list form were supplied for one axis.
    #[error("conflicting requirement shapes on {axis} axis")]
    ConflictingShapes {
        /// Axis carrying the conflicting shapes.
        axis: RequirementAxis,
    },
    /// An explicitly empty claim list was supplied.
    #[error("empty claim list on {axis} axis")]
    EmptyClaimList {
        /// Axis carrying the empty list.
        axis: RequirementAxis,
    },
    /// A claim name exceeded the size limit.
    #[error("claim name on {axis} axis exceeds {max_bytes} bytes ({actual_bytes})")]
    ClaimNameTooLong {
        /// Axis carrying the oversized name.
        axis: RequirementAxis,
        /// Actual name length in bytes.
        actual_bytes: usize,
        /// Maximum allowed length in bytes.
        max_bytes: usize,
    },
    /// A claim list exceeded the entry limit.
    #[error("claim list on {axis} axis exceeds {max} entries ({actual})")]
    TooManyClaims {
        /// Axis carrying the oversized list.
        axis: RequirementAxis,
        /// Actual number of entries.
        actual: usize,
        /// Maximum allowed entries.
        max: usize,
    },
}

// ============================================================================
// SECTION: Guard Options
// ============================================================================

/// Caller-facing guard configuration.
///
/// # Invariants
/// - Absent requirements stay absent; defaults never invent a requirement.
/// - `redirect_path` defaults to [`DEFAULT_REDIRECT_PATH`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuardOptions {
    /// Single required permission name.
    pub permission: Option<String>,
    /// Required permission name list.
    pub permissions: Option<Vec<String>>,
    /// Single required role name.
    pub role: Option<String>,
    /// Required role name list.
    pub roles: Option<Vec<String>>,
    /// Matching mode for the permission list.
    pub permission_check_mode: CheckMode,
    /// Matching mode for the role list.
    pub role_check_mode: CheckMode,
    /// Redirect path used by the route gate.
    pub redirect_path: String,
    /// Opt-in to a visible view for data-missing and evaluation-error states.
    pub surface_unavailable: bool,
}

impl Default for GuardOptions {
    fn default() -> Self {
        Self {
            permission: None,
            permissions: None,
            role: None,
            roles: None,
            permission_check_mode: CheckMode::Any,
            role_check_mode: CheckMode::Any,
            redirect_path: DEFAULT_REDIRECT_PATH.to_string(),
            surface_unavailable: false,
        }
    }
}

/// Canonical requirement pair produced by normalization.
///
/// # Invariants
/// - Each present requirement has a non-empty claim list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequirementPair {
    /// Requirement over the permission axis.
    pub permissions: Option<ClaimRequirement>,
    /// Requirement over the role axis.
    pub roles: Option<ClaimRequirement>,
}

impl GuardOptions {
    /// Normalizes the options into canonical per-axis requirements.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError`] on conflicting shapes, empty lists, or
    /// inputs over the hard limits. The absence of any requirement on both
    /// axes is not an options error; the decision state machine denies it.
    pub fn requirements(&self) -> Result<RequirementPair, OptionsError> {
        Ok(RequirementPair {
            permissions: normalize_axis(
                RequirementAxis::Permissions,
                self.permission.as_deref(),
                self.permissions.as_deref(),
                self.permission_check_mode,
            )?,
            roles: normalize_axis(
                RequirementAxis::Roles,
                self.role.as_deref(),
                self.roles.as_deref(),
                self.role_check_mode,
            )?,
        })
    }
}

// ============================================================================
// SECTION: Normalization
// ============================================================================

/// Collapses one axis's single- and list-form inputs into a requirement.
fn normalize_axis(
    axis: RequirementAxis,
    single: Option<&str>,
    list: Option<&[String]>,
    mode: CheckMode,
) -> Result<Option<ClaimRequirement>, OptionsError> {
    match (single, list) {
        (Some(_), Some(_)) => Err(OptionsError::ConflictingShapes {
            axis,
        }),
        (Some(name), None) => {
            check_name(axis, name)?;
            Ok(Some(ClaimRequirement::single(name)))
        }
        (None, Some(names)) => {
            if names.len() > MAX_CLAIMS_PER_LIST {
                return Err(OptionsError::TooManyClaims {
                    axis,
                    actual: names.len(),
                    max: MAX_CLAIMS_PER_LIST,
                });
            }
            for name in names {
                check_name(axis, name)?;
            }
            ClaimRequirement::new(names.iter().map(String::as_str), mode).map(Some).map_err(
                |RequirementShapeError::EmptyClaimList| OptionsError::EmptyClaimList {
                    axis,
                },
            )
        }
        (None, None) => Ok(None),
    }
}

/// Enforces the claim-name size limit.
fn check_name(axis: RequirementAxis, name: &str) -> Result<(), OptionsError> {
    if name.len() > MAX_CLAIM_NAME_BYTES {
        return Err(OptionsError::ClaimNameTooLong {
            axis,
            actual_bytes: name.len(),
            max_bytes: MAX_CLAIM_NAME_BYTES,
        });
    }
    Ok(())
}
