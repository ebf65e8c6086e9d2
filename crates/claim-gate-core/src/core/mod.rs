// crates/claim-gate-core/src/core/mod.rs
// ============================================================================
// Module: Claim Gate Core Types
// Description: Canonical claims, requirement, and decision structures.
// Purpose: Provide stable, serializable types for access evaluation.
// Dependencies: serde, smallvec
// ============================================================================

//! ## Overview
//! Core types define the claims model, requirement expressions, and the
//! access decision taxonomy. These types are the canonical source of truth
//! for any derived surfaces (guards, routes, logs).

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod claims;
pub mod decision;
pub mod requirement;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use claims::AuthState;
pub use claims::ClaimName;
pub use claims::ClaimSet;
pub use claims::ClaimsSnapshot;
pub use claims::ClaimsSource;
pub use decision::AccessDecision;
pub use decision::DenialReason;
pub use decision::decide_with_source;
pub use requirement::CheckMode;
pub use requirement::ClaimRequirement;
pub use requirement::RequirementShapeError;
