//! # WalletD Cardano Address
//!
//! Cardano (ADA) address derivation for the WalletD SDK.
//!
//! ## Features
//!
//! - Reward, Base and Enterprise address generation
//! - CIP-0005 bech32 prefixes (`stake`, `stake_test`, `addr`, `addr_test`)
//! - Key-hash and script-hash credentials
//! - Decoding and validation of derived addresses
//! - Mainnet, Preview, and Preprod testnet support
//!
//! ## Example
//!
//! ```rust
//! use walletd_cardano_address::{build_base_address, Credential, NetworkIdentifier};
//!
//! let payment = Credential::from_public_key(&[1u8; 32]);
//! let stake = Credential::from_public_key(&[2u8; 32]);
//!
//! let address = build_base_address(NetworkIdentifier::Mainnet, &payment, &stake).unwrap();
//! assert!(address.starts_with("addr1"));
//! ```
//!
//! ## Address Types
//!
//! - **Base**: Payment + staking credential (can receive staking rewards)
//! - **Enterprise**: Payment credential only (no staking rights)
//! - **Reward**: Staking credential only, encoded with the `stake` prefixes
//!
//! Derivation is pure. [`AddressGenerator`] wraps the builders and reports
//! each derived address to an [`AddressObserver`]; the default observer
//! writes through the `log` facade.

pub mod address;
pub mod builder;
pub mod config;
pub mod credential;
pub mod error;
pub mod observer;
pub mod prefix;

pub use address::{AddressType, BaseAddress, EnterpriseAddress, RewardAddress, TypedAddress};
pub use builder::{
    build_base_address, build_enterprise_address, build_reward_address, AddressGenerator,
};
pub use config::{NetworkConfig, NetworkIdentifier, MAINNET_NETWORK_ID, TESTNET_NETWORK_ID};
pub use credential::{hash_key, Credential, CredentialKind, CREDENTIAL_HASH_LENGTH};
pub use error::{CardanoError, Result};
pub use observer::{AddressEvent, AddressObserver, LogObserver, NoopObserver};
pub use prefix::{
    address_prefix, resolve_prefix, AddressPrefix, NON_STAKE_ADDRESS_PREFIX, STAKE_ADDRESS_PREFIX,
};
