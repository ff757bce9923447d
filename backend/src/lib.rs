pub mod apis;
pub mod contracts;

use serde::{Deserialize, Serialize};
use std::{error::Error, fs::File, path::Path};

/// Writes `data` as pretty-printed JSON, used for proof and root exports
/// handed to the frontend/minting tooling.
pub fn save_to_file<P: AsRef<Path>, T: Serialize>(path: P, data: &T) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, data)?;

    Ok(())
}

pub fn load_from_file<P: AsRef<Path>, T: for<'de> Deserialize<'de>>(
    path: P,
) -> Result<T, Box<dyn Error>> {
    let file = File::open(path)?;
    let data = serde_json::from_reader(file)?;

    Ok(data)
}
