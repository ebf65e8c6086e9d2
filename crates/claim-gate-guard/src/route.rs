// crates/claim-gate-guard/src/route.rs
// ============================================================================
// Module: Route Gate
// Description: Decision-consuming navigation gate for routed views.
// Purpose: Redirect denied navigation while preserving the requested target.
// Dependencies: claim-gate-core, crate::options
// ============================================================================

//! ## Overview
//! The route gate consumes the same access decisions as the render gate but
//! answers with a navigation directive instead of a view: hold while
//! pending (redirecting before initialization would lose the original
//! target), render on grant, and otherwise redirect to the configured path
//! carrying the originally requested location for post-auth redirect-back.

// ============================================================================
// SECTION: Imports
// ============================================================================

use claim_gate_core::AccessDecision;
use claim_gate_core::DenialReason;
use serde::Deserialize;
use serde::Serialize;

use crate::options::GuardOptions;

// ============================================================================
// SECTION: Callback Alias
// ============================================================================

/// Denial notification callback.
type DenialCallback = Box<dyn Fn(DenialReason) + Send + Sync>;

// ============================================================================
// SECTION: Directives
// ============================================================================

/// Redirect destination carrying the original navigation target.
///
/// # Invariants
/// - `from` preserves the requested location so the destination can
///   redirect back after successful authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectTarget {
    /// Path to navigate to.
    pub to: String,
    /// Originally requested location.
    pub from: String,
}

/// Navigation directive produced by the route gate.
///
/// # Invariants
/// - Variants are stable for serialization and host-router consumption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteDirective {
    /// Render the routed content.
    Render,
    /// Render nothing; initialization has not completed.
    Hold,
    /// Navigate away from the requested location.
    Redirect(RedirectTarget),
}

// ============================================================================
// SECTION: Route Gate
// ============================================================================

/// Gates a routed view behind an access decision.
pub struct RouteGate {
    /// Path redirected to on denial.
    redirect_path: String,
    /// Optional denial notification callback.
    on_denied: Option<DenialCallback>,
}

impl RouteGate {
    /// Creates a gate redirecting to the given path.
    #[must_use]
    pub fn new(redirect_path: impl Into<String>) -> Self {
        Self {
            redirect_path: redirect_path.into(),
            on_denied: None,
        }
    }

    /// Creates a gate from caller-facing options.
    #[must_use]
    pub fn from_options(options: &GuardOptions) -> Self {
        Self::new(options.redirect_path.clone())
    }

    /// Sets the denial notification callback.
    #[must_use]
    pub fn with_denial_handler(
        mut self,
        handler: impl Fn(DenialReason) + Send + Sync + 'static,
    ) -> Self {
        self.on_denied = Some(Box::new(handler));
        self
    }

    /// Returns the configured redirect path.
    #[must_use]
    pub fn redirect_path(&self) -> &str {
        &self.redirect_path
    }

    /// Produces the navigation directive for a decision.
    #[must_use]
    pub fn direct(&self, decision: &AccessDecision, requested: &str) -> RouteDirective {
        match decision {
            AccessDecision::Pending => RouteDirective::Hold,
            AccessDecision::Granted => RouteDirective::Render,
            AccessDecision::Denied {
                reason,
            }
            | AccessDecision::Indeterminate {
                reason,
            } => {
                if let Some(handler) = &self.on_denied {
                    handler(*reason);
                }
                RouteDirective::Redirect(RedirectTarget {
                    to: self.redirect_path.clone(),
                    from: requested.to_string(),
                })
            }
        }
    }
}
