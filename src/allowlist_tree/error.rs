use thiserror::Error;

/// Errors raised while building an allowlist tree or querying proofs.
///
/// A proof requested for a well-formed address that is simply not in the
/// tree is not an error at this layer; the verifying contract rejects the
/// non-reconstructing proof instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The allowlist snapshot contains no addresses, so there is no
    /// meaningful tree or root.
    #[error("invalid allowlist: no addresses to build the tree from")]
    InvalidAllowlist,

    /// The input is not a 20-byte hex identity.
    #[error("invalid address {0:?}: expected 40 hex chars with an optional 0x prefix")]
    InvalidAddress(String),

    /// Proof requested for a leaf index outside the tree.
    #[error("no leaf at index {0} in this tree")]
    LeafNotFound(usize),
}
