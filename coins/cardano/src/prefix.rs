//! Bech32 human-readable prefixes for Cardano addresses.
//!
//! Prefixes follow CIP-0005: reward addresses use the `stake` class, base and
//! enterprise addresses use the `addr` class.

use crate::config::NetworkIdentifier;

/// Mainnet/testnet prefix pair for one address category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressPrefix {
    pub main: &'static str,
    pub test: &'static str,
}

/// Prefixes for reward (stake) addresses
pub static STAKE_ADDRESS_PREFIX: AddressPrefix = AddressPrefix {
    main: "stake",
    test: "stake_test",
};

/// Prefixes for base and enterprise addresses
pub static NON_STAKE_ADDRESS_PREFIX: AddressPrefix = AddressPrefix {
    main: "addr",
    test: "addr_test",
};

impl AddressPrefix {
    pub fn resolve(&self, network: NetworkIdentifier) -> &'static str {
        if network.is_mainnet() {
            self.main
        } else {
            self.test
        }
    }
}

impl Default for AddressPrefix {
    fn default() -> Self {
        NON_STAKE_ADDRESS_PREFIX
    }
}

/// Resolve the prefix for `network` from the given prefix set
pub fn resolve_prefix(network: NetworkIdentifier, prefix: &AddressPrefix) -> &'static str {
    prefix.resolve(network)
}

/// Resolve the prefix for `network` from the non-stake prefix set
pub fn address_prefix(network: NetworkIdentifier) -> &'static str {
    resolve_prefix(network, &NON_STAKE_ADDRESS_PREFIX)
}
