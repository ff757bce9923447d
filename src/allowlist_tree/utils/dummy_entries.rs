use crate::allowlist_tree::{Entry, Error};
use rand::Rng;

// This is for testing purposes; production allowlists always come from an
// explicit address list or CSV snapshot, never from random padding.

/// Generates `count` entries with random 20-byte addresses.
pub fn generate_dummy_entries(count: usize) -> Vec<Entry> {
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|_| {
            let bytes: [u8; 20] = rng.gen();
            let address = format!("0x{}", hex::encode(bytes));

            Entry::new(&address).expect("random address is always well-formed")
        })
        .collect()
}

/// Fixture allowlist around a target address: `padding` random filler
/// entries followed by the target itself, so the list has a deterministic
/// minimum size while still containing the member under test.
pub fn padded_allowlist(address: &str, padding: usize) -> Result<Vec<Entry>, Error> {
    let mut entries = generate_dummy_entries(padding);
    entries.push(Entry::new(address)?);

    Ok(entries)
}

#[cfg(test)]
mod test {
    use super::{generate_dummy_entries, padded_allowlist};

    #[test]
    fn test_generate_random_entries() {
        let entries = generate_dummy_entries(32);

        assert_eq!(entries.len(), 32);
        for entry in &entries {
            assert_eq!(entry.canonical().len(), 42);
        }
    }

    #[test]
    fn test_padded_allowlist_contains_target() {
        let target = "0x93236C72E827EF476c79d85CF1d03505cEc061Cd";
        let entries = padded_allowlist(target, 10).unwrap();

        assert_eq!(entries.len(), 11);
        assert_eq!(
            entries.last().unwrap().canonical(),
            "0x93236c72e827ef476c79d85cf1d03505cec061cd"
        );
    }

    #[test]
    fn test_padded_allowlist_rejects_bad_target() {
        assert!(padded_allowlist("not-an-address", 10).is_err());
    }
}
