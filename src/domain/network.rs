//! Networks offered to the wallet provider.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// Network
// ============================================================================

/// Networks the wallet provider is initialized with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Network {
    /// Ethereum mainnet.
    #[default]
    Mainnet,
    /// Arbitrum One.
    Arbitrum,
}

impl Network {
    /// All supported networks, in selection order.
    pub const ALL: [Self; 2] = [Self::Mainnet, Self::Arbitrum];

    /// Returns the human-readable name of the network.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "Mainnet",
            Self::Arbitrum => "Arbitrum",
        }
    }

    /// Returns the EIP-155 chain id.
    #[must_use]
    pub const fn chain_id(&self) -> u64 {
        match self {
            Self::Mainnet => 1,
            Self::Arbitrum => 42161,
        }
    }

    /// Returns the next network in selection order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Mainnet => Self::Arbitrum,
            Self::Arbitrum => Self::Mainnet,
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Network {
    type Err = String;

    /// Accepts a network name (case-insensitive), `ethereum` for mainnet, or
    /// a chain id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let chain_id = input.parse::<u64>().ok();

        if input.eq_ignore_ascii_case("ethereum") {
            return Ok(Self::Mainnet);
        }

        Self::ALL
            .into_iter()
            .find(|network| {
                network.as_str().eq_ignore_ascii_case(input) || Some(network.chain_id()) == chain_id
            })
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(Self::as_str).collect();
                format!(
                    "unknown network '{input}' (expected one of: {})",
                    names.join(", ")
                )
            })
    }
}

// ============================================================================
// Tests
// ============================================================================
