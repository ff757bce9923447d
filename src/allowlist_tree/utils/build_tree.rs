use crate::allowlist_tree::utils::create_middle_node::create_middle_node;
use crate::allowlist_tree::{Entry, Error};
use ethers::types::H256;

/// Builds the tree bottom-up and returns the root. All levels, leaves
/// first, are written to `nodes` so that proof queries can walk them later.
///
/// A level with an odd number of nodes carries its last node up unchanged.
/// The verifying contract expects carry-up proofs for odd-sized allowlists,
/// not duplicate-last.
pub fn build_merkle_tree_from_entries(
    entries: &[Entry],
    nodes: &mut Vec<Vec<H256>>,
) -> Result<H256, Error> {
    if entries.is_empty() {
        return Err(Error::InvalidAllowlist);
    }

    let leaves: Vec<H256> = entries.iter().map(|entry| entry.compute_leaf()).collect();

    let mut tree = vec![leaves];

    while tree.last().unwrap().len() > 1 {
        let previous_level = tree.last().unwrap();
        let mut level = Vec::with_capacity((previous_level.len() + 1) / 2);

        for pair in previous_level.chunks(2) {
            match pair {
                [left, right] => level.push(create_middle_node(left, right)),
                [lone] => level.push(*lone),
                _ => unreachable!(),
            }
        }

        tree.push(level);
    }

    let root = tree.last().unwrap()[0];
    *nodes = tree;
    Ok(root)
}
