use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CardanoError, Result};

/// Cardano network IDs
pub const MAINNET_NETWORK_ID: u8 = 1;
pub const TESTNET_NETWORK_ID: u8 = 0; // Preview/Preprod

/// Networks an address can be derived for.
///
/// Every network other than [`NetworkIdentifier::Mainnet`] shares the testnet
/// network id and therefore the testnet address prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkIdentifier {
    Mainnet,
    Testnet,
    Preview,
    Preprod,
}

impl NetworkIdentifier {
    /// Network id carried in the low nibble of an address header
    pub fn network_id(&self) -> u8 {
        match self {
            NetworkIdentifier::Mainnet => MAINNET_NETWORK_ID,
            NetworkIdentifier::Testnet
            | NetworkIdentifier::Preview
            | NetworkIdentifier::Preprod => TESTNET_NETWORK_ID,
        }
    }

    /// Check if mainnet
    pub fn is_mainnet(&self) -> bool {
        matches!(self, NetworkIdentifier::Mainnet)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkIdentifier::Mainnet => "mainnet",
            NetworkIdentifier::Testnet => "testnet",
            NetworkIdentifier::Preview => "preview",
            NetworkIdentifier::Preprod => "preprod",
        }
    }
}

impl fmt::Display for NetworkIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkIdentifier {
    type Err = CardanoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(NetworkIdentifier::Mainnet),
            "testnet" => Ok(NetworkIdentifier::Testnet),
            "preview" => Ok(NetworkIdentifier::Preview),
            "preprod" => Ok(NetworkIdentifier::Preprod),
            other => Err(CardanoError::UnknownNetwork(other.to_string())),
        }
    }
}

/// Cardano network configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub network: NetworkIdentifier,
    pub name: String,
    pub explorer: String,
}

impl NetworkConfig {
    /// Cardano Mainnet configuration
    pub fn mainnet() -> Self {
        NetworkConfig {
            network: NetworkIdentifier::Mainnet,
            name: "Cardano Mainnet".to_string(),
            explorer: "https://cardanoscan.io".to_string(),
        }
    }

    /// Cardano Preview Testnet configuration
    pub fn preview() -> Self {
        NetworkConfig {
            network: NetworkIdentifier::Preview,
            name: "Cardano Preview".to_string(),
            explorer: "https://preview.cardanoscan.io".to_string(),
        }
    }

    /// Cardano Preprod Testnet configuration
    pub fn preprod() -> Self {
        NetworkConfig {
            network: NetworkIdentifier::Preprod,
            name: "Cardano Preprod".to_string(),
            explorer: "https://preprod.cardanoscan.io".to_string(),
        }
    }

    /// Legacy testnet
    pub fn testnet() -> Self {
        NetworkConfig {
            network: NetworkIdentifier::Testnet,
            name: "Cardano Testnet".to_string(),
            explorer: "https://testnet.cardanoscan.io".to_string(),
        }
    }

    /// Preset configuration for a network
    pub fn for_network(network: NetworkIdentifier) -> Self {
        match network {
            NetworkIdentifier::Mainnet => Self::mainnet(),
            NetworkIdentifier::Testnet => Self::testnet(),
            NetworkIdentifier::Preview => Self::preview(),
            NetworkIdentifier::Preprod => Self::preprod(),
        }
    }

    /// Load a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check if mainnet
    pub fn is_mainnet(&self) -> bool {
        self.network.is_mainnet()
    }

    pub fn network_id(&self) -> u8 {
        self.network.network_id()
    }
}
