//! Directory tree scanning
//!
//! Lists the regular files under a root, hashes each one and collects the
//! results into a [`crate::types::Snapshot`].

pub mod hasher;
pub mod path;
pub mod scanner;
pub mod walker;
