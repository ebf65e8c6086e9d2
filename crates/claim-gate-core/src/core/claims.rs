// crates/claim-gate-core/src/core/claims.rs
// ============================================================================
// Module: Claims Model
// Description: Claim names, granted-claim sets, and per-evaluation snapshots.
// Purpose: Provide stable, serializable claim types with exact-match semantics.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Claims are opaque permission or role names asserted to belong to the
//! current principal. Membership checks compare names byte-for-byte; no case
//! folding or whitespace normalization is applied. Snapshots are constructed
//! fresh for each evaluation and are never cached by the evaluator.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Claim Name
// ============================================================================

/// Opaque identifier for a single permission or role.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimName(String);

impl ClaimName {
    /// Creates a new claim name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the claim name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the claim name length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the claim name is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClaimName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ClaimName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ClaimName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Claim Set
// ============================================================================

/// Order- and duplicate-irrelevant set of granted claim names.
///
/// # Invariants
/// - Membership is exact string equality; a required name must match byte-for-byte.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimSet(BTreeSet<ClaimName>);

impl ClaimSet {
    /// Creates an empty claim set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Creates a claim set from any iterable of names.
    #[must_use]
    pub fn from_names<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<ClaimName>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Returns true when the set contains the given claim name.
    #[must_use]
    pub fn contains(&self, name: &ClaimName) -> bool {
        self.0.contains(name)
    }

    /// Returns true when the set holds no claims.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of distinct claims in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the claims in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &ClaimName> {
        self.0.iter()
    }
}

impl FromIterator<ClaimName> for ClaimSet {
    fn from_iter<I: IntoIterator<Item = ClaimName>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ============================================================================
// SECTION: Claims Snapshot
// ============================================================================

/// Point-in-time view of what the current principal holds.
///
/// # Invariants
/// - Both axes come from the same source; axes are never merged across sources.
/// - Snapshots are transient and reconstructed for every evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimsSnapshot {
    /// Granted permission names.
    pub permissions: ClaimSet,
    /// Granted role names.
    pub roles: ClaimSet,
}

impl ClaimsSnapshot {
    /// Creates a snapshot from permission and role name lists.
    #[must_use]
    pub fn from_names<I, J, N, M>(permissions: I, roles: J) -> Self
    where
        I: IntoIterator<Item = N>,
        J: IntoIterator<Item = M>,
        N: Into<ClaimName>,
        M: Into<ClaimName>,
    {
        Self {
            permissions: ClaimSet::from_names(permissions),
            roles: ClaimSet::from_names(roles),
        }
    }

    /// Returns true when both axes are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty() && self.roles.is_empty()
    }
}

// ============================================================================
// SECTION: Claims Source
// ============================================================================

/// Origin-tagged outcome of a claims read.
///
/// # Invariants
/// - The selected source supplies both axes in full; an axis the source lacks
///   is an empty set, not a reason to consult the other source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClaimsSource {
    /// Claims were read from the in-memory session source.
    FromPrimary {
        /// Snapshot read from the primary source.
        snapshot: ClaimsSnapshot,
    },
    /// Claims were read from the persisted local cache.
    FromFallback {
        /// Snapshot loaded from the fallback source.
        snapshot: ClaimsSnapshot,
    },
    /// Neither source had claims data.
    Unavailable,
}

impl ClaimsSource {
    /// Returns the snapshot when one is available.
    #[must_use]
    pub const fn snapshot(&self) -> Option<&ClaimsSnapshot> {
        match self {
            Self::FromPrimary {
                snapshot,
            }
            | Self::FromFallback {
                snapshot,
            } => Some(snapshot),
            Self::Unavailable => None,
        }
    }
}

// ============================================================================
// SECTION: Authentication State
// ============================================================================

/// Point-in-time authentication flags read from the primary source.
///
/// # Invariants
/// - `is_initialized` reflects whether the upstream auth bootstrap has
///   completed; decisions are not terminal until it is true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    /// True when the current principal is authenticated.
    pub is_authenticated: bool,
    /// True when the upstream auth bootstrap has completed.
    pub is_initialized: bool,
}

impl AuthState {
    /// Creates an authentication state from raw flags.
    #[must_use]
    pub const fn new(is_authenticated: bool, is_initialized: bool) -> Self {
        Self {
            is_authenticated,
            is_initialized,
        }
    }
}
