use crate::allowlist_tree::utils::{keccak_address, normalize_address};
use crate::allowlist_tree::Error;
use ethers::types::{Address, H256};

/// An entry in the allowlist Merkle tree.
///
/// Holds the address in the canonical lowercase form used on both sides of
/// the protocol, together with the parsed 20 bytes the leaf hash is computed
/// over. Checksummed and uppercase spellings of the same address normalize
/// to the same entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    address: Address,
    canonical: String,
}

impl Entry {
    pub fn new(address: &str) -> Result<Self, Error> {
        let (address, canonical) = normalize_address(address)?;

        Ok(Entry { address, canonical })
    }

    pub fn compute_leaf(&self) -> H256 {
        keccak_address(&self.address)
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// The lowercase `0x`-prefixed form fed to the hash on the JS side of
    /// the original harness; exports use this spelling.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

#[cfg(test)]
mod test {
    use super::Entry;
    use crate::allowlist_tree::Error;

    #[test]
    fn test_normalization() {
        let lower = Entry::new("0x8626f6940e2eb28930efb4cef49b2d1f2c9c1199").unwrap();
        let checksummed = Entry::new("0x8626f6940E2eb28930eFb4CeF49B2d1F2C9C1199").unwrap();
        let unprefixed = Entry::new("8626F6940E2EB28930EFB4CEF49B2D1F2C9C1199").unwrap();

        assert_eq!(lower, checksummed);
        assert_eq!(lower, unprefixed);
        assert_eq!(
            lower.canonical(),
            "0x8626f6940e2eb28930efb4cef49b2d1f2c9c1199"
        );
        assert_eq!(lower.compute_leaf(), checksummed.compute_leaf());
    }

    #[test]
    fn test_malformed_addresses() {
        for bad in [
            "",
            "0x",
            "0x8626f6940e2eb28930efb4cef49b2d1f2c9c11",   // too short
            "0x8626f6940e2eb28930efb4cef49b2d1f2c9c119900", // too long
            "0x8626f6940e2eb28930efb4cef49b2d1f2c9c11zz",   // not hex
        ] {
            assert_eq!(
                Entry::new(bad),
                Err(Error::InvalidAddress(bad.to_string()))
            );
        }
    }
}
