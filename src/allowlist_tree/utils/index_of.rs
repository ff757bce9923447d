use crate::allowlist_tree::Entry;
use ethers::types::H256;

/// Returns the leaf index of `address` in the tree, or `None` if the
/// address does not normalize or its leaf is not present.
pub fn index_of(address: &str, nodes: &[Vec<H256>]) -> Option<usize> {
    let entry = Entry::new(address).ok()?;
    let leaf = entry.compute_leaf();

    nodes[0].iter().position(|node| *node == leaf)
}
