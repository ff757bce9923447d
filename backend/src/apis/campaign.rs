use ethers::types::{H256, U256};
use serde::{Deserialize, Serialize};
use std::error::Error;

use crate::contracts::signer::MintPassSigner;
use genesis_pass::allowlist_tree::utils::hash_to_hex;
use genesis_pass::allowlist_tree::AllowlistMerkleTree;

/// Inclusion proof in the wire format handed to minting frontends:
/// `0x`-hex strings, ordered leaf to root, valid against `root` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MintProof {
    address: String,
    root: String,
    proof: Vec<String>,
}

impl MintProof {
    pub fn get_address(&self) -> &str {
        &self.address
    }

    pub fn get_root(&self) -> &str {
        &self.root
    }

    pub fn get_proof(&self) -> &[String] {
        &self.proof
    }

    /// Decodes the proof into the `bytes32[]` argument of the mint call.
    pub fn as_calldata(&self) -> Result<Vec<[u8; 32]>, Box<dyn Error>> {
        self.proof
            .iter()
            .map(|element| {
                let element = element.strip_prefix("0x").unwrap_or(element);
                let mut bytes = [0u8; 32];
                hex::decode_to_slice(element, &mut bytes)?;

                Ok(bytes)
            })
            .collect()
    }
}

/// One allowlist snapshot and the tree built from it. Rebuilt whenever the
/// allowlist changes; the tree itself is immutable.
pub struct AllowlistSnapshot {
    tree: AllowlistMerkleTree,
}

impl AllowlistSnapshot {
    pub fn new(allowlist_csv_path: &str) -> Result<Self, Box<dyn Error>> {
        Ok(AllowlistSnapshot {
            tree: AllowlistMerkleTree::from_csv(allowlist_csv_path)?,
        })
    }

    pub fn from_tree(tree: AllowlistMerkleTree) -> Self {
        AllowlistSnapshot { tree }
    }

    pub fn tree(&self) -> &AllowlistMerkleTree {
        &self.tree
    }

    pub fn merkle_root(&self) -> H256 {
        *self.tree.root()
    }

    pub fn generate_proof_of_inclusion(
        &self,
        address: &str,
    ) -> Result<MintProof, genesis_pass::allowlist_tree::Error> {
        let proof = self.tree.proof_for(address)?;

        Ok(MintProof {
            address: proof.entry.canonical().to_string(),
            root: self.tree.root_hex(),
            proof: proof.sibling_hashes.iter().map(hash_to_hex).collect(),
        })
    }
}

/// A mint campaign: an allowlist snapshot plus the mint window, bound to
/// the signer that pushes both on-chain.
pub struct MintCampaign<'a> {
    start_date: U256,
    end_date: U256,
    snapshot: AllowlistSnapshot,
    signer: &'a MintPassSigner,
}

impl MintCampaign<'_> {
    pub fn new<'a>(
        signer: &'a MintPassSigner,
        allowlist_csv_path: &str,
        start_date: u64,
        end_date: u64,
    ) -> Result<MintCampaign<'a>, Box<dyn Error>> {
        Ok(MintCampaign {
            start_date: U256::from(start_date),
            end_date: U256::from(end_date),
            snapshot: AllowlistSnapshot::new(allowlist_csv_path)?,
            signer,
        })
    }

    pub fn get_mint_window(&self) -> (U256, U256) {
        (self.start_date, self.end_date)
    }

    pub fn snapshot(&self) -> &AllowlistSnapshot {
        &self.snapshot
    }

    /// Pushes the snapshot root on-chain; minting is gated on proofs
    /// against this root from then on.
    pub async fn dispatch_merkle_root(&self) -> Result<(), Box<dyn Error>> {
        self.signer
            .submit_merkle_root(self.snapshot.merkle_root())
            .await?;

        Ok(())
    }

    /// Pushes the mint window on-chain.
    pub async fn dispatch_mint_config(&self) -> Result<(), Box<dyn Error>> {
        self.signer
            .submit_mint_config(self.start_date, self.end_date)
            .await?;

        Ok(())
    }

    pub fn get_proof_of_inclusion(&self, address: &str) -> Result<MintProof, Box<dyn Error>> {
        Ok(self.snapshot.generate_proof_of_inclusion(address)?)
    }
}
