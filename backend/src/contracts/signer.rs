use ethers::{
    prelude::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::{Address, H256, U256},
};
use serde_json::Value;
use std::{error::Error, fs::File, io::BufReader, path::Path, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use super::MintGenesisPass;

pub enum AddressInput {
    Address(Address),
    Path(String),
}

#[derive(Debug)]
pub struct MintPassSigner {
    nonce_lock: Mutex<()>, // To prevent running `submit` methods concurrently
    contract: MintGenesisPass<SignerMiddleware<Arc<Provider<Http>>, LocalWallet>>,
}

impl MintPassSigner {
    /// Creates a new MintPassSigner instance
    /// # Arguments
    /// * `signer_key` - The private key of the wallet that operates the mint on behalf of the project
    /// * `url` - The endpoint for connecting to the node
    /// * `address_input` - The proxy address, given directly or resolved from a deployments file
    pub async fn new(
        signer_key: &str,
        url: &str,
        address_input: AddressInput,
    ) -> Result<Self, Box<dyn Error>> {
        let wallet: LocalWallet = LocalWallet::from_str(signer_key)?;

        let provider = Arc::new(Provider::try_from(url)?);
        let chain_id = provider.get_chainid().await?.as_u64();
        let client = Arc::new(SignerMiddleware::new(
            provider,
            wallet.with_chain_id(chain_id),
        ));

        let address = match address_input {
            AddressInput::Address(address) => address,
            AddressInput::Path(path) => Self::get_deployment_address(path, chain_id)?,
        };

        Ok(Self {
            nonce_lock: Mutex::new(()),
            contract: MintGenesisPass::new(address, client),
        })
    }

    pub fn address(&self) -> Address {
        self.contract.address()
    }

    /// Resolves the proxy address for `chain_id` from a deployments file
    /// that maps each network to its deployed address.
    pub fn get_deployment_address<P: AsRef<Path>>(
        path: P,
        chain_id: u64,
    ) -> Result<Address, Box<dyn Error>> {
        // Open file in RO mode with buffer
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        // Read the JSON contents of the file
        let payload: Value = serde_json::from_reader(reader)?;

        // Retrieve the contract address for the chain we are connected to
        let deployment_address = payload
            .get(chain_id.to_string())
            .and_then(|deployment| deployment.get("address"))
            .and_then(|address| address.as_str())
            .ok_or_else(|| format!("No deployment address for chain id {chain_id}"))?;

        let address: Address = deployment_address.parse()?;

        Ok(address)
    }

    pub async fn submit_merkle_root(&self, root: H256) -> Result<(), Box<dyn Error>> {
        let lock_guard = self.nonce_lock.lock().await;

        let set_merkle_root = &self.contract.set_merkle_root(root.to_fixed_bytes());

        // To prevent nonce collision, we lock the nonce before sending the transaction
        let tx = set_merkle_root.send().await?;

        // Wait for the pending transaction to be mined
        tx.await?;

        drop(lock_guard);
        Ok(())
    }

    pub async fn submit_mint_config(
        &self,
        start_date: U256,
        end_date: U256,
    ) -> Result<(), Box<dyn Error>> {
        let lock_guard = self.nonce_lock.lock().await;

        let set_mint_config = &self.contract.set_mint_config(start_date, end_date);

        let tx = set_mint_config.send().await?;
        tx.await?;

        drop(lock_guard);
        Ok(())
    }

    pub async fn submit_royalty(&self, royalty: U256) -> Result<(), Box<dyn Error>> {
        let lock_guard = self.nonce_lock.lock().await;

        let set_royalty = &self.contract.set_royalty(royalty);

        let tx = set_royalty.send().await?;
        tx.await?;

        drop(lock_guard);
        Ok(())
    }

    /// Sweeps the mint proceeds held by the contract to the treasury
    /// address. Only the contract owner may call this on-chain.
    pub async fn submit_treasury_withdrawal(&self) -> Result<(), Box<dyn Error>> {
        let lock_guard = self.nonce_lock.lock().await;

        let withdraw = &self.contract.withdraw();

        let tx = withdraw.send().await?;
        tx.await?;

        drop(lock_guard);
        Ok(())
    }

    /// Mints with an inclusion proof from the signer's own wallet,
    /// optionally attaching ETH for a paid mint.
    pub async fn mint_with_proof(
        &self,
        proof: Vec<[u8; 32]>,
        value: U256,
    ) -> Result<(), Box<dyn Error>> {
        let lock_guard = self.nonce_lock.lock().await;

        let mint = self.contract.mint(proof).value(value);

        let tx = mint.send().await?;
        tx.await?;

        drop(lock_guard);
        Ok(())
    }
}
