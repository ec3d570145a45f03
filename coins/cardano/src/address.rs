//! Shelley-era address layouts (CIP-0019) and their bech32 text form.
//!
//! Every layout starts with a header byte: the high nibble names the address
//! type and credential kinds, the low nibble carries the network id.

use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32, Hrp};

use crate::config::{NetworkIdentifier, MAINNET_NETWORK_ID, TESTNET_NETWORK_ID};
use crate::credential::{Credential, CredentialKind, CREDENTIAL_HASH_LENGTH};
use crate::error::{CardanoError, Result};
use crate::prefix::{resolve_prefix, NON_STAKE_ADDRESS_PREFIX, STAKE_ADDRESS_PREFIX};

/// Header byte + one credential hash
pub const SINGLE_CREDENTIAL_ADDRESS_LENGTH: usize = 1 + CREDENTIAL_HASH_LENGTH;
/// Header byte + payment hash + staking hash
pub const BASE_ADDRESS_LENGTH: usize = 1 + 2 * CREDENTIAL_HASH_LENGTH;

const BASE_TYPE: u8 = 0b0000;
const POINTER_TYPE: u8 = 0b0100;
const ENTERPRISE_TYPE: u8 = 0b0110;
const BYRON_TYPE: u8 = 0b1000;
const REWARD_TYPE: u8 = 0b1110;

/// Address types in Cardano
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    Base,       // Payment + staking key
    Enterprise, // Payment key only (no staking)
    Reward,     // Staking rewards address
}

fn header(address_type: u8, network: NetworkIdentifier) -> u8 {
    (address_type << 4) | (network.network_id() & 0x0F)
}

/// Reward (stake) address: staking credential only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RewardAddress {
    network: NetworkIdentifier,
    stake: Credential,
}

impl RewardAddress {
    pub fn new(network: NetworkIdentifier, stake: &Credential) -> Self {
        Self {
            network,
            stake: *stake,
        }
    }

    pub fn network(&self) -> NetworkIdentifier {
        self.network
    }

    pub fn stake_credential(&self) -> &Credential {
        &self.stake
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(SINGLE_CREDENTIAL_ADDRESS_LENGTH);
        data.push(header(REWARD_TYPE | self.stake.header_bit(), self.network));
        data.extend_from_slice(self.stake.hash());
        data
    }

    /// Reward addresses always use the stake prefix set
    pub fn prefix(&self) -> &'static str {
        resolve_prefix(self.network, &STAKE_ADDRESS_PREFIX)
    }

    pub fn to_bech32(&self) -> Result<String> {
        encode(self.prefix(), &self.to_bytes())
    }
}

/// Base address: payment credential followed by staking credential
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BaseAddress {
    network: NetworkIdentifier,
    payment: Credential,
    stake: Credential,
}

impl BaseAddress {
    pub fn new(network: NetworkIdentifier, payment: &Credential, stake: &Credential) -> Self {
        Self {
            network,
            payment: *payment,
            stake: *stake,
        }
    }

    pub fn network(&self) -> NetworkIdentifier {
        self.network
    }

    pub fn payment_credential(&self) -> &Credential {
        &self.payment
    }

    pub fn stake_credential(&self) -> &Credential {
        &self.stake
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        // 00SP: bit 4 marks a payment script, bit 5 a stake script
        let address_type =
            BASE_TYPE | (self.stake.header_bit() << 1) | self.payment.header_bit();

        let mut data = Vec::with_capacity(BASE_ADDRESS_LENGTH);
        data.push(header(address_type, self.network));
        data.extend_from_slice(self.payment.hash());
        data.extend_from_slice(self.stake.hash());
        data
    }

    pub fn prefix(&self) -> &'static str {
        resolve_prefix(self.network, &NON_STAKE_ADDRESS_PREFIX)
    }

    pub fn to_bech32(&self) -> Result<String> {
        encode(self.prefix(), &self.to_bytes())
    }
}

/// Enterprise address: payment credential, no staking rights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnterpriseAddress {
    network: NetworkIdentifier,
    payment: Credential,
}

impl EnterpriseAddress {
    pub fn new(network: NetworkIdentifier, payment: &Credential) -> Self {
        Self {
            network,
            payment: *payment,
        }
    }

    pub fn network(&self) -> NetworkIdentifier {
        self.network
    }

    pub fn payment_credential(&self) -> &Credential {
        &self.payment
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(SINGLE_CREDENTIAL_ADDRESS_LENGTH);
        data.push(header(ENTERPRISE_TYPE | self.payment.header_bit(), self.network));
        data.extend_from_slice(self.payment.hash());
        data
    }

    pub fn prefix(&self) -> &'static str {
        resolve_prefix(self.network, &NON_STAKE_ADDRESS_PREFIX)
    }

    pub fn to_bech32(&self) -> Result<String> {
        encode(self.prefix(), &self.to_bytes())
    }
}

/// Any address this crate can build or decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypedAddress {
    Reward(RewardAddress),
    Base(BaseAddress),
    Enterprise(EnterpriseAddress),
}

impl TypedAddress {
    pub fn address_type(&self) -> AddressType {
        match self {
            TypedAddress::Reward(_) => AddressType::Reward,
            TypedAddress::Base(_) => AddressType::Base,
            TypedAddress::Enterprise(_) => AddressType::Enterprise,
        }
    }

    pub fn network(&self) -> NetworkIdentifier {
        match self {
            TypedAddress::Reward(addr) => addr.network(),
            TypedAddress::Base(addr) => addr.network(),
            TypedAddress::Enterprise(addr) => addr.network(),
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            TypedAddress::Reward(addr) => addr.to_bytes(),
            TypedAddress::Base(addr) => addr.to_bytes(),
            TypedAddress::Enterprise(addr) => addr.to_bytes(),
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            TypedAddress::Reward(addr) => addr.prefix(),
            TypedAddress::Base(addr) => addr.prefix(),
            TypedAddress::Enterprise(addr) => addr.prefix(),
        }
    }

    /// Get the bech32 encoded address
    pub fn to_bech32(&self) -> Result<String> {
        encode(self.prefix(), &self.to_bytes())
    }

    /// Check if this is a mainnet address
    pub fn is_mainnet(&self) -> bool {
        self.network().is_mainnet()
    }

    /// Parse the binary address payload.
    ///
    /// A zero network id decodes as [`NetworkIdentifier::Testnet`]; the
    /// individual testnets share that id and cannot be told apart.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let header = *data
            .first()
            .ok_or_else(|| CardanoError::InvalidAddress("empty address payload".to_string()))?;

        let network = match header & 0x0F {
            MAINNET_NETWORK_ID => NetworkIdentifier::Mainnet,
            TESTNET_NETWORK_ID => NetworkIdentifier::Testnet,
            other => {
                return Err(CardanoError::InvalidAddress(format!(
                    "unsupported network id {other}"
                )))
            }
        };

        let address_type = header >> 4;
        match address_type {
            0b0000..=0b0011 => {
                expect_length(data, BASE_ADDRESS_LENGTH)?;
                let payment = credential_at(data, 1, address_type)?;
                let stake = credential_at(data, 1 + CREDENTIAL_HASH_LENGTH, address_type >> 1)?;
                Ok(TypedAddress::Base(BaseAddress::new(network, &payment, &stake)))
            }
            0b0110 | 0b0111 => {
                expect_length(data, SINGLE_CREDENTIAL_ADDRESS_LENGTH)?;
                let payment = credential_at(data, 1, address_type)?;
                Ok(TypedAddress::Enterprise(EnterpriseAddress::new(network, &payment)))
            }
            0b1110 | 0b1111 => {
                expect_length(data, SINGLE_CREDENTIAL_ADDRESS_LENGTH)?;
                let stake = credential_at(data, 1, address_type)?;
                Ok(TypedAddress::Reward(RewardAddress::new(network, &stake)))
            }
            t if t & 0b1110 == POINTER_TYPE => Err(CardanoError::InvalidAddress(
                "pointer addresses are not supported".to_string(),
            )),
            BYRON_TYPE => Err(CardanoError::InvalidAddress(
                "byron addresses are not supported".to_string(),
            )),
            other => Err(CardanoError::InvalidAddress(format!(
                "unknown address header {other:#06b}"
            ))),
        }
    }

    /// Decode a bech32 address.
    ///
    /// The human-readable part must be the exact prefix the decoded address
    /// would be encoded with, so a mainnet payload under `addr_test` or a
    /// reward payload under `addr` is rejected.
    pub fn from_bech32(address: &str) -> Result<Self> {
        let checked = CheckedHrpstring::new::<Bech32>(address)
            .map_err(|e| CardanoError::InvalidAddress(e.to_string()))?;
        let data: Vec<u8> = checked.byte_iter().collect();
        let typed = Self::from_bytes(&data)?;

        let hrp = checked.hrp().to_lowercase();
        if hrp != typed.prefix() {
            return Err(CardanoError::InvalidAddress(format!(
                "prefix '{hrp}' does not match {:?} address on {}",
                typed.address_type(),
                typed.network()
            )));
        }
        Ok(typed)
    }

    /// Validate a Cardano address string
    pub fn validate(address: &str) -> bool {
        Self::from_bech32(address).is_ok()
    }
}

impl From<RewardAddress> for TypedAddress {
    fn from(addr: RewardAddress) -> Self {
        TypedAddress::Reward(addr)
    }
}

impl From<BaseAddress> for TypedAddress {
    fn from(addr: BaseAddress) -> Self {
        TypedAddress::Base(addr)
    }
}

impl From<EnterpriseAddress> for TypedAddress {
    fn from(addr: EnterpriseAddress) -> Self {
        TypedAddress::Enterprise(addr)
    }
}

fn encode(prefix: &str, payload: &[u8]) -> Result<String> {
    let hrp = Hrp::parse(prefix)?;
    Ok(bech32::encode::<Bech32>(hrp, payload)?)
}

fn expect_length(data: &[u8], expected: usize) -> Result<()> {
    if data.len() != expected {
        return Err(CardanoError::InvalidAddress(format!(
            "expected {expected} byte payload, got {}",
            data.len()
        )));
    }
    Ok(())
}

fn credential_at(data: &[u8], offset: usize, kind_bit: u8) -> Result<Credential> {
    Credential::new(
        CredentialKind::from_header_bit(kind_bit),
        &data[offset..offset + CREDENTIAL_HASH_LENGTH],
    )
}
