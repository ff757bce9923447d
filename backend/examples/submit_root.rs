use std::time::{SystemTime, UNIX_EPOCH};

use genesis_pass_backend::apis::campaign::MintCampaign;
use genesis_pass_backend::contracts::signer::{AddressInput, MintPassSigner};

const DAY: u64 = 60 * 60 * 24;

#[tokio::main]
async fn main() {
    // Anvil account [0]; swap in the operator key and RPC URL for a real
    // network. The proxy address is resolved from the deployments file for
    // whatever chain the node reports.
    let signer = MintPassSigner::new(
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
        "http://localhost:8545",
        AddressInput::Path("src/contracts/deployments.json".to_string()),
    )
    .await
    .unwrap();

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();

    // A window that is already open, as the contract tests configure it.
    let campaign = MintCampaign::new(
        &signer,
        "../src/allowlist_tree/csv/allowlist_16.csv",
        now - DAY,
        now + DAY,
    )
    .unwrap();

    campaign.dispatch_merkle_root().await.unwrap();
    campaign.dispatch_mint_config().await.unwrap();

    println!("Merkle root and mint window are submitted successfully!");
}
