pub mod campaign;

use ethers::types::H256;
use genesis_pass::allowlist_tree::Entry;
use std::error::Error;

/// Leaf hash for an address as the verifying contract computes it
/// (`keccak256` of the raw 20 bytes), for cross-checking harness output
/// against on-chain expectations.
pub fn leaf_hash_from_address(address: &str) -> Result<H256, Box<dyn Error>> {
    let entry = Entry::new(address)?;

    Ok(entry.compute_leaf())
}
