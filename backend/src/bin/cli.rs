use std::path::Path;

use dialoguer::{Input, Select};
use ethers::types::Address;

use genesis_pass_backend::apis::campaign::AllowlistSnapshot;
use genesis_pass_backend::contracts::signer::{AddressInput, MintPassSigner};
use genesis_pass_backend::save_to_file;

#[tokio::main]
async fn main() {
    // Prompt for the allowlist snapshot
    let allowlist_csv: String = Input::new()
        .with_prompt("Enter path to allowlist CSV file")
        .with_initial_text("allowlist.csv")
        .interact()
        .unwrap();

    if !Path::new(&allowlist_csv).exists() {
        eprintln!("File not found: {}", allowlist_csv);
        return;
    }

    let snapshot = match AllowlistSnapshot::new(&allowlist_csv) {
        Ok(snapshot) => snapshot,
        Err(error) => {
            eprintln!("Error building allowlist snapshot: {}", error);
            return;
        }
    };

    println!("Merkle root: {}", snapshot.tree().root_hex());

    loop {
        let actions = [
            "Export inclusion proof",
            "Submit merkle root on-chain",
            "Submit mint window on-chain",
            "Exit",
        ];
        let action = Select::new()
            .with_prompt("Select an action")
            .items(&actions)
            .default(0)
            .interact()
            .unwrap();

        match action {
            0 => {
                let address: String = Input::new()
                    .with_prompt("Enter minter address")
                    .interact()
                    .unwrap();

                let mint_proof = match snapshot.generate_proof_of_inclusion(&address) {
                    Ok(mint_proof) => mint_proof,
                    Err(error) => {
                        eprintln!("Error generating proof: {}", error);
                        continue;
                    }
                };

                let output_path: String = Input::new()
                    .with_prompt("Enter output path for the proof JSON")
                    .with_initial_text("mint_proof.json")
                    .interact()
                    .unwrap();

                if let Err(error) = save_to_file(&output_path, &mint_proof) {
                    eprintln!("Error exporting proof: {}", error);
                    continue;
                }

                println!("Proof exported to {}", output_path);
            }
            1 | 2 => {
                let rpc_url: String = Input::new()
                    .with_prompt("Enter RPC URL")
                    .with_initial_text("http://localhost:8545")
                    .interact()
                    .unwrap();

                let contract_address: String = Input::new()
                    .with_prompt("Enter MintGenesisPass proxy address")
                    .interact()
                    .unwrap();

                let address: Address = match contract_address.parse() {
                    Ok(address) => address,
                    Err(error) => {
                        eprintln!("Invalid contract address: {}", error);
                        continue;
                    }
                };

                let signer_key: String = Input::new()
                    .with_prompt("Enter private key for Signer")
                    .interact()
                    .unwrap();

                let signer =
                    match MintPassSigner::new(&signer_key, &rpc_url, AddressInput::Address(address))
                        .await
                    {
                        Ok(signer) => signer,
                        Err(error) => {
                            eprintln!("Error connecting signer: {}", error);
                            continue;
                        }
                    };

                let result = if action == 1 {
                    signer.submit_merkle_root(snapshot.merkle_root()).await
                } else {
                    let start_date: u64 = Input::new()
                        .with_prompt("Enter mint start timestamp")
                        .interact()
                        .unwrap();
                    let end_date: u64 = Input::new()
                        .with_prompt("Enter mint end timestamp")
                        .interact()
                        .unwrap();

                    signer
                        .submit_mint_config(start_date.into(), end_date.into())
                        .await
                };

                match result {
                    Ok(()) => println!("Transaction submitted successfully"),
                    Err(error) => eprintln!("Error submitting transaction: {}", error),
                }
            }
            _ => break,
        }
    }
}
