use ethers::types::{Address, H256};
use ethers::utils::keccak256;

/// Leaf hash of an address: Keccak-256 over the raw 20 bytes, matching
/// `keccak256(abi.encodePacked(addr))` on the verifier side.
pub fn keccak_address(address: &Address) -> H256 {
    H256::from(keccak256(address.as_bytes()))
}

/// Keccak-256 over the concatenation of two 32-byte nodes. Callers are
/// responsible for ordering the pair.
pub fn keccak_pair(left: &H256, right: &H256) -> H256 {
    let mut data = [0u8; 64];
    data[..32].copy_from_slice(left.as_bytes());
    data[32..].copy_from_slice(right.as_bytes());

    H256::from(keccak256(data))
}
