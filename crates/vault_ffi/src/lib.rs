//! Flutter bridge crate for the ProofVault core.
//!
//! Functions in `api` are scanned by flutter_rust_bridge codegen.

pub mod api;
