use crate::allowlist_tree::utils::{
    build_merkle_tree_from_entries, create_proof, hash_to_hex, index_of, padded_allowlist,
    parse_csv_to_entries, verify_proof,
};
use crate::allowlist_tree::{Entry, Error, MerkleProof};
use ethers::types::H256;

/// Merkle tree over an allowlist snapshot.
///
/// Construction is deterministic and pure: the same address list in the
/// same order always yields the same root. The tree is never mutated; a new
/// snapshot means a new tree.
#[derive(Debug)]
pub struct AllowlistMerkleTree {
    root: H256,
    nodes: Vec<Vec<H256>>,
    depth: usize,
    entries: Vec<Entry>,
}

impl AllowlistMerkleTree {
    /// Filler entries added around the target by `padded_fixture`.
    pub const FIXTURE_PADDING: usize = 10;

    /// Builds the tree from an allowlist snapshot CSV with a single
    /// `address` column.
    pub fn from_csv(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let entries = parse_csv_to_entries(path)?;

        Ok(Self::from_entries(entries)?)
    }

    /// Production constructor: builds the tree from an explicit, ordered
    /// entry list. An empty list has no meaningful root and fails fast.
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self, Error> {
        let mut nodes = vec![];
        let root = build_merkle_tree_from_entries(&entries, &mut nodes)?;
        let depth = nodes.len() - 1;

        Ok(AllowlistMerkleTree {
            root,
            nodes,
            depth,
            entries,
        })
    }

    /// Normalizes each address into an entry, then builds the tree.
    pub fn from_addresses<I, S>(addresses: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = addresses
            .into_iter()
            .map(|address| Entry::new(address.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_entries(entries)
    }

    /// Test-fixture constructor: ten random filler addresses plus the
    /// target, so a minting wallet can be exercised without a real
    /// snapshot. Production trees always use the explicit constructors.
    pub fn padded_fixture(address: &str) -> Result<Self, Error> {
        Self::from_entries(padded_allowlist(address, Self::FIXTURE_PADDING)?)
    }

    pub fn root(&self) -> &H256 {
        &self.root
    }

    /// Root in the `0x`-prefixed hex form the verifying contract stores.
    pub fn root_hex(&self) -> String {
        hash_to_hex(&self.root)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn leaves(&self) -> &[H256] {
        &self.nodes[0]
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn index_of(&self, address: &str) -> Option<usize> {
        index_of(address, &self.nodes)
    }

    pub fn generate_proof(&self, index: usize) -> Result<MerkleProof, Error> {
        create_proof(index, &self.entries, &self.nodes, &self.root)
    }

    /// Proof for an address, normalized the same way as at construction.
    ///
    /// For an address whose leaf is not in the tree the returned proof has
    /// no siblings and cannot reconstruct the root; rejecting it is the
    /// verifier's job, not an error here. Only a malformed address fails.
    pub fn proof_for(&self, address: &str) -> Result<MerkleProof, Error> {
        let entry = Entry::new(address)?;

        match self.index_of(address) {
            Some(index) => self.generate_proof(index),
            None => Ok(MerkleProof {
                root_hash: self.root,
                entry,
                sibling_hashes: vec![],
            }),
        }
    }

    pub fn verify_proof(&self, proof: &MerkleProof) -> bool {
        verify_proof(proof)
    }
}
