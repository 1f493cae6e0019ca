// Copyright 2026, Battle Realms
// For licensing, see https://github.com/battle-realms/realms-deploy-rs/blob/main/licenses/COPYRIGHT.md

/// Collection name the contract is constructed with.
pub const NAME: &str = "Battle Realms: PvP Legends";
/// Collection symbol.
pub const SYMBOL: &str = "BRPVP";
/// Base URI for token metadata. Replace before a real deployment.
pub const BASE_URI: &str = "ipfs://REPLACE_WITH_YOUR_IPFS_BASE_URI/";
/// Hard cap on minted tokens.
pub const MAX_SUPPLY: u64 = 50;
/// Royalty fee in basis points over a 10000 denominator: 5%.
pub const ROYALTY_FEE_NUMERATOR: u32 = 500;

/// Where the contract project's toolchain leaves the compiled artifact.
pub const DEFAULT_ARTIFACT_PATH: &str =
    "artifacts/contracts/BattleRealmsNFT.sol/BattleRealmsNFT.json";
