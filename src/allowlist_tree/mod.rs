//! Sorted-pair Keccak Merkle tree over an allowlist of addresses.
//!
//! The hashing convention is pinned by the verifying contract and must not
//! drift: each leaf is `keccak256` of the raw 20 address bytes, sibling
//! hashes are ordered ascending by byte value before being hashed together,
//! and an unpaired node at an odd-sized level is carried up unchanged.

mod entry;
mod error;
mod tree;
pub mod utils;

use ethers::types::H256;

/// Inclusion proof for a single allowlist entry.
///
/// `sibling_hashes` is ordered leaf to root and is sufficient to recompute
/// the root by repeated sorted-pair hashing starting from the entry leaf.
/// Valid only against the root of the tree it was derived from.
#[derive(Clone, Debug)]
pub struct MerkleProof {
    pub root_hash: H256,
    pub entry: Entry,
    pub sibling_hashes: Vec<H256>,
}

pub use entry::Entry;
pub use error::Error;
pub use tree::AllowlistMerkleTree;
