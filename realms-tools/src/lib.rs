// Copyright 2026, Battle Realms
// For licensing, see https://github.com/battle-realms/realms-deploy-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for deploying the Battle Realms NFT contract.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod ops;
pub mod utils;

pub use error::{Error, Result};
