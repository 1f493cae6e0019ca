// Copyright 2026, Battle Realms
// For licensing, see https://github.com/battle-realms/realms-deploy-rs/blob/main/licenses/COPYRIGHT.md

pub mod artifact;
pub mod config;
pub mod deployment;
pub mod network;
pub mod verification;
