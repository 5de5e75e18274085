use std::str::FromStr;

use clap::Parser;
use slashwatch_beacon_api_client::block_id::BlockId;

use super::{beacon_api::BeaconApiArgs, scripts::ScriptArgs};

#[derive(Debug, Parser)]
pub struct TestBlockConfig {
    #[command(flatten)]
    pub beacon_api: BeaconApiArgs,

    #[command(flatten)]
    pub scripts: ScriptArgs,

    #[arg(
        long,
        env = "SLASHWATCH_TEST_BLOCK",
        help = "Block to process: head, genesis, finalized, justified, a slot or a 0x-prefixed root",
        value_parser = BlockId::from_str
    )]
    pub block: BlockId,
}
