use crate::allowlist_tree::Error;
use ethers::types::{Address, H256};

/// Canonicalizes an address string and parses its 20 bytes.
///
/// Accepts an optional `0x`/`0X` prefix and any letter case; checksummed
/// spellings of the same identity map to the same canonical form. Returns
/// the parsed address together with the lowercase `0x`-prefixed string used
/// for hashing and exports.
pub fn normalize_address(address: &str) -> Result<(Address, String), Error> {
    let trimmed = address.trim();
    let hex_part = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if hex_part.len() != 40 {
        return Err(Error::InvalidAddress(address.to_string()));
    }

    let canonical = hex_part.to_ascii_lowercase();

    let mut bytes = [0u8; 20];
    hex::decode_to_slice(&canonical, &mut bytes)
        .map_err(|_| Error::InvalidAddress(address.to_string()))?;

    Ok((Address::from(bytes), format!("0x{canonical}")))
}

/// Formats a node hash the way the external verifier tooling expects it:
/// `0x`-prefixed lowercase hex of the raw 32 bytes.
pub fn hash_to_hex(hash: &H256) -> String {
    format!("0x{}", hex::encode(hash.as_bytes()))
}
