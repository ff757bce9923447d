use crate::allowlist_tree::{Entry, Error, MerkleProof};
use ethers::types::H256;

/// Extracts the sibling path for the leaf at `index`, ordered leaf to root.
///
/// A node that was carried up from an odd-sized level has no sibling at
/// that level and contributes no proof element there.
pub fn create_proof(
    index: usize,
    entries: &[Entry],
    nodes: &[Vec<H256>],
    root: &H256,
) -> Result<MerkleProof, Error> {
    if index >= nodes[0].len() {
        return Err(Error::LeafNotFound(index));
    }

    let mut sibling_hashes = Vec::new();
    let mut current_index = index;

    // The last level only holds the root and contributes no sibling.
    for level in &nodes[..nodes.len() - 1] {
        if let Some(sibling) = level.get(current_index ^ 1) {
            sibling_hashes.push(*sibling);
        }
        current_index /= 2;
    }

    Ok(MerkleProof {
        root_hash: *root,
        entry: entries[index].clone(),
        sibling_hashes,
    })
}
