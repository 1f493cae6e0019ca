// Copyright 2026, Battle Realms
// For licensing, see https://github.com/battle-realms/realms-deploy-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::RealmsDeployResult;

mod deploy;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Deploy the NFT contract to a selected network
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
}

pub async fn exec(cmd: Command) -> RealmsDeployResult {
    match cmd {
        Command::Deploy(args) => deploy::exec(args).await,
    }
}
