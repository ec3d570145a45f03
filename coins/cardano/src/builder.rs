use crate::address::{AddressType, BaseAddress, EnterpriseAddress, RewardAddress};
use crate::config::NetworkIdentifier;
use crate::credential::Credential;
use crate::error::Result;
use crate::observer::{AddressEvent, AddressObserver, LogObserver, NoopObserver};

/// Reward address for a staking credential, using the stake prefix set
pub fn build_reward_address(network: NetworkIdentifier, stake: &Credential) -> Result<String> {
    RewardAddress::new(network, stake).to_bech32()
}

/// Base address for a payment and a staking credential, in that order
pub fn build_base_address(
    network: NetworkIdentifier,
    payment: &Credential,
    stake: &Credential,
) -> Result<String> {
    BaseAddress::new(network, payment, stake).to_bech32()
}

/// Enterprise address for a payment credential
pub fn build_enterprise_address(
    network: NetworkIdentifier,
    payment: &Credential,
) -> Result<String> {
    EnterpriseAddress::new(network, payment).to_bech32()
}

/// Address builders that report each derived address to an observer
#[derive(Debug, Clone, Default)]
pub struct AddressGenerator<O = LogObserver> {
    observer: O,
}

impl AddressGenerator<NoopObserver> {
    pub fn silent() -> Self {
        Self::new(NoopObserver)
    }
}

impl<O: AddressObserver> AddressGenerator<O> {
    pub fn new(observer: O) -> Self {
        Self { observer }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn reward(&self, network: NetworkIdentifier, stake: &Credential) -> Result<String> {
        log::debug!("deriving reward address from staking credential {stake}");
        let address = build_reward_address(network, stake)?;
        self.emit(AddressType::Reward, network, &address);
        Ok(address)
    }

    pub fn base(
        &self,
        network: NetworkIdentifier,
        payment: &Credential,
        stake: &Credential,
    ) -> Result<String> {
        log::debug!("deriving base address from payment credential {payment} and staking credential {stake}");
        let address = build_base_address(network, payment, stake)?;
        self.emit(AddressType::Base, network, &address);
        Ok(address)
    }

    pub fn enterprise(&self, network: NetworkIdentifier, payment: &Credential) -> Result<String> {
        log::debug!("deriving enterprise address from payment credential {payment}");
        let address = build_enterprise_address(network, payment)?;
        self.emit(AddressType::Enterprise, network, &address);
        Ok(address)
    }

    fn emit(&self, address_type: AddressType, network: NetworkIdentifier, address: &str) {
        self.observer.record(&AddressEvent {
            address_type,
            network,
            address: address.to_string(),
        });
    }
}
