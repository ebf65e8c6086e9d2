// crates/claim-gate-guard/tests/options_validation.rs
// ============================================================================
// Module: Guard Options Tests
// Description: Tests for option defaults, deserialization, and normalization.
// Purpose: Validate fail-closed shape handling and hard input limits.
// Dependencies: claim_gate_core, claim_gate_guard, serde_json
// ============================================================================
//! ## Overview
//! Exercises the caller-facing options surface: defaults, JSON forms, and
//! the strict normalization into canonical requirements.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod support;

use claim_gate_core::CheckMode;
use claim_gate_core::RequirementAxis;
use claim_gate_guard::DEFAULT_REDIRECT_PATH;
use claim_gate_guard::GuardOptions;
use claim_gate_guard::MAX_CLAIMS_PER_LIST;
use claim_gate_guard::OptionsError;
use serde_json::json;
use support::TestResult;
use support::ensure;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Tests default option values.
#[test]
fn test_defaults() -> TestResult {
    let options = GuardOptions::default();
    ensure(options.permission_check_mode == CheckMode::Any, "Expected ANY permission default")?;
    ensure(options.role_check_mode == CheckMode::Any, "Expected ANY role default")?;
    ensure(
        options.redirect_path == DEFAULT_REDIRECT_PATH,
        "Expected the unauthorized redirect default",
    )?;
    ensure(!options.surface_unavailable, "Expected silent denial by default")?;

    let pair = options.requirements()?;
    ensure(
        pair.permissions.is_none() && pair.roles.is_none(),
        "Expected no requirement to be invented by defaults",
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Deserialization
// ============================================================================

/// Tests JSON form with defaults applied.
#[test]
fn test_json_form_applies_defaults() -> TestResult {
    let options: GuardOptions = serde_json::from_value(json!({
        "permissions": ["users.view", "users.edit"],
        "permission_check_mode": "all",
    }))?;
    ensure(options.permission_check_mode == CheckMode::All, "Expected the ALL mode")?;
    ensure(options.role_check_mode == CheckMode::Any, "Expected the defaulted role mode")?;
    ensure(options.redirect_path == DEFAULT_REDIRECT_PATH, "Expected the defaulted path")?;

    let pair = options.requirements()?;
    let permissions = pair.permissions.ok_or("expected a permission requirement")?;
    ensure(permissions.claims().len() == 2, "Expected both permission names")?;
    ensure(permissions.mode() == CheckMode::All, "Expected the requirement to carry ALL")?;
    Ok(())
}

/// Tests unknown fields are rejected.
#[test]
fn test_unknown_fields_are_rejected() -> TestResult {
    let result: Result<GuardOptions, _> = serde_json::from_value(json!({
        "permisson": "users.view",
    }));
    ensure(result.is_err(), "Expected a misspelled field to be rejected, not ignored")?;
    Ok(())
}

// ============================================================================
// SECTION: Shape Normalization
// ============================================================================

/// Tests single form normalization.
#[test]
fn test_single_form_normalizes_to_one_claim() -> TestResult {
    let options = GuardOptions {
        permission: Some("users.view".to_string()),
        ..GuardOptions::default()
    };
    let pair = options.requirements()?;
    let permissions = pair.permissions.ok_or("expected a permission requirement")?;
    ensure(permissions.claims().len() == 1, "Expected the single name")?;
    Ok(())
}

/// Tests conflicting shapes are rejected.
#[test]
fn test_conflicting_shapes_are_rejected() -> TestResult {
    let options = GuardOptions {
        role: Some("admin".to_string()),
        roles: Some(vec!["owner".to_string()]),
        ..GuardOptions::default()
    };
    ensure(
        options.requirements()
            == Err(OptionsError::ConflictingShapes {
                axis: RequirementAxis::Roles,
            }),
        "Expected simultaneous single and list forms to be rejected",
    )?;
    Ok(())
}

/// Tests empty list rejection.
#[test]
fn test_empty_list_is_rejected() -> TestResult {
    let options = GuardOptions {
        permissions: Some(Vec::new()),
        ..GuardOptions::default()
    };
    ensure(
        options.requirements()
            == Err(OptionsError::EmptyClaimList {
                axis: RequirementAxis::Permissions,
            }),
        "Expected an explicitly empty list to be rejected, not treated as absent",
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Tests list entry limit.
#[test]
fn test_too_many_claims_are_rejected() -> TestResult {
    let names: Vec<String> = (0 ..= MAX_CLAIMS_PER_LIST).map(|i| format!("claim-{i}")).collect();
    let options = GuardOptions {
        permissions: Some(names),
        ..GuardOptions::default()
    };
    ensure(
        matches!(options.requirements(), Err(OptionsError::TooManyClaims { .. })),
        "Expected a list over the entry limit to be rejected",
    )?;
    Ok(())
}

/// Tests claim name size limit.
#[test]
fn test_oversized_claim_name_is_rejected() -> TestResult {
    let options = GuardOptions {
        role: Some("r".repeat(256)),
        ..GuardOptions::default()
    };
    ensure(
        matches!(options.requirements(), Err(OptionsError::ClaimNameTooLong { .. })),
        "Expected a claim name over the size limit to be rejected",
    )?;
    Ok(())
}
