// crates/claim-gate-guard/tests/route_gate.rs
// ============================================================================
// Module: Route Gate Tests
// Description: Tests for the decision-consuming navigation gate.
// Purpose: Validate hold/render/redirect mapping and target preservation.
// Dependencies: claim_gate_core, claim_gate_guard
// ============================================================================
//! ## Overview
//! Exercises the route gate's directives: holding while pending, rendering
//! on grant, and redirecting with the original target preserved.

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

use std::sync::Arc;
use std::sync::Mutex;

use claim_gate_core::AccessDecision;
use claim_gate_core::DenialReason;
use claim_gate_guard::DEFAULT_REDIRECT_PATH;
use claim_gate_guard::GuardOptions;
use claim_gate_guard::RedirectTarget;
use claim_gate_guard::RouteDirective;
use claim_gate_guard::RouteGate;
use support::TestResult;
use support::ensure;

// ============================================================================
// SECTION: Hold and Render
// ============================================================================

/// Tests pending holds without redirecting.
#[test]
fn test_pending_holds_instead_of_redirecting() -> TestResult {
    let gate = RouteGate::new("/login");
    let directive = gate.direct(&AccessDecision::Pending, "/admin/users");
    ensure(
        directive == RouteDirective::Hold,
        "Expected a hold while pending; an early redirect would lose the target",
    )?;
    Ok(())
}

/// Tests granted renders the route.
#[test]
fn test_granted_renders_route() -> TestResult {
    let gate = RouteGate::new("/login");
    let directive = gate.direct(&AccessDecision::Granted, "/admin/users");
    ensure(directive == RouteDirective::Render, "Expected the routed content on grant")?;
    Ok(())
}

// ============================================================================
// SECTION: Redirects
// ============================================================================

/// Tests redirect preserves the requested location.
#[test]
fn test_redirect_preserves_requested_location() -> TestResult {
    let gate = RouteGate::new("/login");
    let decision = AccessDecision::Denied {
        reason: DenialReason::Unauthenticated,
    };
    let directive = gate.direct(&decision, "/admin/users");
    ensure(
        directive
            == RouteDirective::Redirect(RedirectTarget {
                to: "/login".to_string(),
                from: "/admin/users".to_string(),
            }),
        "Expected a redirect carrying the original target",
    )?;
    Ok(())
}

/// Tests indeterminate decisions also redirect.
#[test]
fn test_indeterminate_redirects_with_callback() -> TestResult {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let gate = RouteGate::new("/login").with_denial_handler(move |reason| {
        if let Ok(mut reasons) = sink.lock() {
            reasons.push(reason);
        }
    });

    let decision = AccessDecision::Indeterminate {
        reason: DenialReason::DataMissing,
    };
    let directive = gate.direct(&decision, "/reports");
    ensure(
        matches!(directive, RouteDirective::Redirect(_)),
        "Expected indeterminate decisions to redirect",
    )?;
    let reasons = seen.lock().map_err(|_| "poisoned")?;
    ensure(
        reasons.as_slice() == [DenialReason::DataMissing],
        "Expected the callback to receive the reason",
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Options Wiring
// ============================================================================

/// Tests gate built from options.
#[test]
fn test_gate_from_options_uses_configured_path() -> TestResult {
    let gate = RouteGate::from_options(&GuardOptions::default());
    ensure(
        gate.redirect_path() == DEFAULT_REDIRECT_PATH,
        "Expected the default unauthorized path",
    )?;

    let custom = GuardOptions {
        redirect_path: "/denied".to_string(),
        ..GuardOptions::default()
    };
    let custom_gate = RouteGate::from_options(&custom);
    ensure(custom_gate.redirect_path() == "/denied", "Expected the configured path")?;
    Ok(())
}
