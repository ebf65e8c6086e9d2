// crates/claim-gate-providers/src/cache.rs
// ============================================================================
// Module: Persisted Claims Cache
// Description: Local file cache of claims keyed by the current session.
// Purpose: Provide the fallback claims source with fail-closed parsing.
// Dependencies: claim-gate-core, serde, serde_json
// ============================================================================

//! ## Overview
//! The claims cache persists the principal's permission and role names as a
//! small JSON payload keyed by a session identifier. Loading is fail-closed:
//! an absent file or a payload written by a different session is "nothing
//! persisted", while an oversized or unparseable payload is a corruption
//! error for the reader to fold. Cache payloads are untrusted input.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use claim_gate_core::ClaimsSnapshot;
use claim_gate_core::FallbackSource;
use claim_gate_core::SourceError;
use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Default maximum cache file size in bytes.
pub const DEFAULT_MAX_CACHE_BYTES: usize = 64 * 1024;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Configuration for the persisted claims cache.
///
/// # Invariants
/// - `max_file_bytes` is enforced as a hard upper bound before parsing.
/// - `session_key` scopes the payload to the current session; a mismatch
///   loads as "nothing persisted".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimsCacheConfig {
    /// Path of the cache file.
    pub path: PathBuf,
    /// Session identifier the payload must match.
    pub session_key: String,
    /// Maximum cache file size in bytes.
    pub max_file_bytes: usize,
}

impl ClaimsCacheConfig {
    /// Creates a config with the default size limit.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, session_key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            session_key: session_key.into(),
            max_file_bytes: DEFAULT_MAX_CACHE_BYTES,
        }
    }
}

// ============================================================================
// SECTION: Payload
// ============================================================================

/// On-disk cache payload.
#[derive(Debug, Serialize, Deserialize)]
struct CachePayload {
    /// Session identifier the payload was written under.
    session: String,
    /// Granted permission names.
    permissions: Vec<String>,
    /// Granted role names.
    roles: Vec<String>,
}

// ============================================================================
// SECTION: Claims Cache
// ============================================================================

/// Persisted local claims cache.
///
/// # Invariants
/// - Loads fail closed: invalid payloads become errors, never claims.
#[derive(Debug)]
pub struct ClaimsCache {
    /// Cache configuration, including path and session key.
    config: ClaimsCacheConfig,
}

impl ClaimsCache {
    /// Creates a cache over the given configuration.
    #[must_use]
    pub const fn new(config: ClaimsCacheConfig) -> Self {
        Self {
            config,
        }
    }

    /// Returns the cache configuration.
    #[must_use]
    pub const fn config(&self) -> &ClaimsCacheConfig {
        &self.config
    }

    /// Persists a snapshot under the configured session key.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Io`] when the payload cannot be written.
    pub fn store(&self, snapshot: &ClaimsSnapshot) -> Result<(), SourceError> {
        let payload = CachePayload {
            session: self.config.session_key.clone(),
            permissions: snapshot.permissions.iter().map(ToString::to_string).collect(),
            roles: snapshot.roles.iter().map(ToString::to_string).collect(),
        };
        let bytes = serde_json::to_vec(&payload).map_err(|err| SourceError::Io(err.to_string()))?;
        fs::write(&self.config.path, bytes).map_err(|err| SourceError::Io(err.to_string()))
    }

    /// Removes the persisted payload, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Io`] when removal fails for a reason other
    /// than the file being absent.
    pub fn clear(&self) -> Result<(), SourceError> {
        match fs::remove_file(&self.config.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SourceError::Io(err.to_string())),
        }
    }
}

impl FallbackSource for ClaimsCache {
    fn load(&self) -> Result<Option<ClaimsSnapshot>, SourceError> {
        let bytes = match fs::read(&self.config.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(SourceError::Io(err.to_string())),
        };
        if bytes.len() > self.config.max_file_bytes {
            return Err(SourceError::Corrupt(format!(
                "cache file exceeds size limit: {} bytes (max {})",
                bytes.len(),
                self.config.max_file_bytes
            )));
        }

        let payload: CachePayload = serde_json::from_slice(&bytes)
            .map_err(|err| SourceError::Corrupt(err.to_string()))?;
        if payload.session != self.config.session_key {
            return Ok(None);
        }

        Ok(Some(ClaimsSnapshot::from_names(payload.permissions, payload.roles)))
    }
}
