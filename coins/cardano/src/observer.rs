//! Observability sink for address derivation.
//!
//! Observers only see an event after the address string has been produced,
//! and cannot alter it.

use crate::address::AddressType;
use crate::config::NetworkIdentifier;

/// A completed address derivation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressEvent {
    pub address_type: AddressType,
    pub network: NetworkIdentifier,
    pub address: String,
}

/// Receives derivation events
pub trait AddressObserver: Send + Sync {
    fn record(&self, event: &AddressEvent);
}

/// Writes events through the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl AddressObserver for LogObserver {
    fn record(&self, event: &AddressEvent) {
        log::info!(
            "derived {:?} address on {}: {}",
            event.address_type,
            event.network,
            event.address
        );
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl AddressObserver for NoopObserver {
    fn record(&self, _event: &AddressEvent) {}
}

impl<O: AddressObserver + ?Sized> AddressObserver for &O {
    fn record(&self, event: &AddressEvent) {
        (**self).record(event)
    }
}

impl<O: AddressObserver + ?Sized> AddressObserver for Box<O> {
    fn record(&self, event: &AddressEvent) {
        (**self).record(event)
    }
}

impl<O: AddressObserver + ?Sized> AddressObserver for std::sync::Arc<O> {
    fn record(&self, event: &AddressEvent) {
        (**self).record(event)
    }
}
