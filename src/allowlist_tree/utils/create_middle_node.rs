use crate::allowlist_tree::utils::hash::keccak_pair;
use ethers::types::H256;

/// Builds a middle (non-leaf-level) node of the tree.
///
/// The children are ordered ascending by raw byte value before hashing, so
/// the parent does not depend on which side each child sat on. Proof
/// verification relies on this to stay position-free.
pub fn create_middle_node(child_l: &H256, child_r: &H256) -> H256 {
    if child_l <= child_r {
        keccak_pair(child_l, child_r)
    } else {
        keccak_pair(child_r, child_l)
    }
}
