use std::{fmt, str::FromStr};

use alloy_primitives::{B256, hex};
use slashwatch_consensus_beacon::Slot;

/// Block identifier accepted by `/eth/v2/beacon/blocks/{block_id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockId {
    Head,
    Genesis,
    Finalized,
    Justified,
    Slot(Slot),
    Root(B256), // expected to be a 0x-prefixed hex string
}

impl FromStr for BlockId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "head" => Ok(BlockId::Head),
            "genesis" => Ok(BlockId::Genesis),
            "finalized" => Ok(BlockId::Finalized),
            "justified" => Ok(BlockId::Justified),
            _ if s.starts_with("0x") => B256::from_str(s)
                .map(BlockId::Root)
                .map_err(|err| format!("Invalid hex root: {err}")),
            _ => s
                .parse::<u64>()
                .map(BlockId::Slot)
                .map_err(|err| format!("Invalid block id {s:?}: {err}")),
        }
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockId::Head => write!(f, "head"),
            BlockId::Genesis => write!(f, "genesis"),
            BlockId::Finalized => write!(f, "finalized"),
            BlockId::Justified => write!(f, "justified"),
            BlockId::Slot(slot) => write!(f, "{slot}"),
            BlockId::Root(root) => write!(f, "0x{}", hex::encode(root)),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("head", BlockId::Head)]
    #[case("genesis", BlockId::Genesis)]
    #[case("finalized", BlockId::Finalized)]
    #[case("justified", BlockId::Justified)]
    #[case("123456", BlockId::Slot(123456))]
    #[case(
        "0x9a2fefd2fdb57f74993c7780ea5b9030d2897b615b89f808011ca5aebed54eaf",
        BlockId::Root(B256::from_str("0x9a2fefd2fdb57f74993c7780ea5b9030d2897b615b89f808011ca5aebed54eaf").expect("valid root"))
    )]
    fn test_parse_and_display(#[case] raw: &str, #[case] expected: BlockId) {
        let block_id = BlockId::from_str(raw).expect("valid block id");
        assert_eq!(block_id, expected);
        assert_eq!(block_id.to_string(), raw);
    }

    #[rstest]
    #[case("latest")]
    #[case("-1")]
    #[case("0x1234")]
    #[case("")]
    fn test_reject_invalid(#[case] raw: &str) {
        assert!(BlockId::from_str(raw).is_err());
    }
}
