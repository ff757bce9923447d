mod build_tree;
mod create_middle_node;
mod create_proof;
mod csv_parser;
mod dummy_entries;
mod hash;
mod index_of;
mod operation_helpers;
mod proof_verification;

pub use build_tree::build_merkle_tree_from_entries;
pub use create_middle_node::create_middle_node;
pub use create_proof::create_proof;
pub use csv_parser::parse_csv_to_entries;
pub use dummy_entries::{generate_dummy_entries, padded_allowlist};
pub use hash::{keccak_address, keccak_pair};
pub use index_of::index_of;
pub use operation_helpers::*;
pub use proof_verification::verify_proof;
