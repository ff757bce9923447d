use crate::allowlist_tree::utils::create_middle_node::create_middle_node;
use crate::allowlist_tree::MerkleProof;

/// Recomputes the root from the entry leaf and the sibling path.
///
/// This is the same folding the verifying contract performs: at each step
/// the running hash and the next sibling are sorted by byte value and hashed
/// together. After the last sibling the result must equal the root.
pub fn verify_proof(proof: &MerkleProof) -> bool {
    let mut node = proof.entry.compute_leaf();

    for sibling in &proof.sibling_hashes {
        node = create_middle_node(&node, sibling);
    }

    node == proof.root_hash
}
