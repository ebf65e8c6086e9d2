// crates/claim-gate-providers/src/lib.rs
// ============================================================================
// Module: Claim Gate Providers
// Description: Built-in claims sources and the tiered reader.
// Purpose: Provide the session store, persisted cache, and source composition.
// Dependencies: claim-gate-core, serde, serde_json
// ============================================================================

//! ## Overview
//! This crate ships the two claims sources consumed by the evaluator (the
//! in-memory session store and the persisted local cache) plus the tiered
//! reader that composes them in priority order. Sources are deterministic
//! point-in-time reads and fail closed on invalid input.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod cache;
pub mod reader;
pub mod session;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use cache::ClaimsCache;
pub use cache::ClaimsCacheConfig;
pub use cache::DEFAULT_MAX_CACHE_BYTES;
pub use reader::TieredClaimsReader;
pub use session::SessionStore;
