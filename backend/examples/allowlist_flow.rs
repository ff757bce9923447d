use genesis_pass::allowlist_tree::AllowlistMerkleTree;
use genesis_pass_backend::apis::campaign::AllowlistSnapshot;
use genesis_pass_backend::save_to_file;

fn main() {
    // 1. Build a fixture allowlist around the wallet under test, the same
    // shape the contract tests use: ten random fillers plus the target.
    let wl_user = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";
    let tree = AllowlistMerkleTree::padded_fixture(wl_user).unwrap();
    let snapshot = AllowlistSnapshot::from_tree(tree);

    println!(
        "1. Built allowlist snapshot with root {}",
        snapshot.tree().root_hex()
    );

    // 2. Generate the inclusion proof the wallet would attach to `mint`.
    let mint_proof = snapshot.generate_proof_of_inclusion(wl_user).unwrap();

    println!(
        "2. Generated inclusion proof with {} siblings",
        mint_proof.get_proof().len()
    );

    // 3. Verify locally, the same folding the contract performs.
    let merkle_proof = snapshot.tree().proof_for(wl_user).unwrap();
    assert!(snapshot.tree().verify_proof(&merkle_proof));

    println!("3. Proof verified against the root");

    // 4. Export for the minting frontend.
    save_to_file("mint_proof.json", &mint_proof).unwrap();

    println!("4. Proof exported to mint_proof.json");
}
