//! Off-chain allowlist tooling for the Genesis Pass mint.
//!
//! The Merkle tree built here must agree bit-exactly with the verifying
//! contract: Keccak-256 leaves over the raw address bytes and sorted-pair
//! hashing at every level.

/// Utilities to build the allowlist Merkle tree data structure. No chain interaction in here.
pub mod allowlist_tree;
