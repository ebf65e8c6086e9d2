// crates/claim-gate-guard/src/render.rs
// ============================================================================
// Module: Render Gate
// Description: Decision-consuming render gate for conditional content.
// Purpose: Map access decisions to views, keeping side effects out of decide.
// Dependencies: claim-gate-core
// ============================================================================

//! ## Overview
//! The render gate consumes an access decision and produces a view: content
//! on grant, an empty view while pending, and a configurable fallback on
//! denial. The optional denial callback fires here, in the wrapper, never
//! inside the decision function, so decision logic stays independently
//! testable. Callers may opt into a visible view for the data-missing and
//! evaluation-error states to distinguish "not allowed" from "couldn't tell".

// ============================================================================
// SECTION: Imports
// ============================================================================

use claim_gate_core::AccessDecision;
use claim_gate_core::DenialReason;

use crate::options::GuardOptions;

// ============================================================================
// SECTION: Callback Aliases
// ============================================================================

/// Denial notification callback.
type DenialCallback = Box<dyn Fn(DenialReason) + Send + Sync>;

/// View factory parameterized by the denial reason.
type ViewFactory<V> = Box<dyn Fn(DenialReason) -> V + Send + Sync>;

// ============================================================================
// SECTION: Render Gate
// ============================================================================

/// Conditionally renders content based on an access decision.
///
/// # Invariants
/// - `Pending` renders the empty view and invokes no callback.
/// - The unavailable view is used only for data-missing and
///   evaluation-error reasons, and only when configured.
pub struct RenderGate<V> {
    /// Fallback view factory for denied and indeterminate decisions.
    fallback: Option<ViewFactory<V>>,
    /// Opt-in view factory for data-missing and evaluation-error states.
    unavailable_view: Option<ViewFactory<V>>,
    /// Optional denial notification callback.
    on_denied: Option<DenialCallback>,
}

impl<V> RenderGate<V>
where
    V: Default,
{
    /// Creates a gate that renders the empty view on every denial.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fallback: None,
            unavailable_view: None,
            on_denied: None,
        }
    }

    /// Creates a gate honoring the options' unavailable-surfacing opt-in.
    ///
    /// The supplied view is installed only when `surface_unavailable` is
    /// set; otherwise data-missing states render like any other denial.
    #[must_use]
    pub fn from_options(
        options: &GuardOptions,
        unavailable_view: impl Fn(DenialReason) -> V + Send + Sync + 'static,
    ) -> Self {
        let gate = Self::new();
        if options.surface_unavailable {
            gate.with_unavailable_view(unavailable_view)
        } else {
            gate
        }
    }

    /// Sets the fallback view factory for denials.
    #[must_use]
    pub fn with_fallback(
        mut self,
        fallback: impl Fn(DenialReason) -> V + Send + Sync + 'static,
    ) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Opts into a visible view for data-missing and evaluation-error states.
    #[must_use]
    pub fn with_unavailable_view(
        mut self,
        view: impl Fn(DenialReason) -> V + Send + Sync + 'static,
    ) -> Self {
        self.unavailable_view = Some(Box::new(view));
        self
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

    /// Renders the gated content for a decision.
    pub fn render(&self, decision: &AccessDecision, content: impl FnOnce() -> V) -> V {
        match decision {
            AccessDecision::Pending => V::default(),
            AccessDecision::Granted => content(),
            AccessDecision::Denied {
                reason,
            }
            | AccessDecision::Indeterminate {
                reason,
            } => {
                if let Some(handler) = &self.on_denied {
                    handler(*reason);
                }
                if matches!(reason, DenialReason::DataMissing | DenialReason::EvaluationError)
                    && let Some(view) = &self.unavailable_view
                {
                    return view(*reason);
                }
                self.fallback.as_ref().map_or_else(V::default, |fallback| fallback(*reason))
            }
        }
    }
}

impl<V> Default for RenderGate<V>
where
    V: Default,
{
    fn default() -> Self {
        Self::new()
    }
}
