//! World-state traits.

use alloy_consensus::Header;
use alloy_primitives::{Address, U256};

use crate::PersistError;

/// Read-only view over account state.
pub trait WorldView {
    /// Balance of the account, zero if absent.
    fn balance(&self, address: Address) -> U256;

    /// Nonce of the account, zero if absent.
    fn nonce(&self, address: Address) -> u64;

    /// Whether the account exists in this view.
    fn contains(&self, address: Address) -> bool;
}

/// A staged, transactional view over world state.
///
/// Writes are buffered until [`commit`](WorldUpdater::commit); dropping an
/// updater without committing discards them.
pub trait WorldUpdater: WorldView {
    /// Set the account balance, creating the account if absent.
    fn set_balance(&mut self, address: Address, balance: U256);

    /// Set the account nonce, creating the account if absent.
    fn set_nonce(&mut self, address: Address, nonce: u64);

    /// Fold the staged writes into the backing world state.
    fn commit(&mut self);

    /// Credit `amount` to the account, saturating at the maximum balance.
    fn increment_balance(&mut self, address: Address, amount: U256) {
        let balance = self.balance(address).saturating_add(amount);
        self.set_balance(address, balance);
    }

    /// Debit `amount` from the account, saturating at zero.
    fn decrement_balance(&mut self, address: Address, amount: U256) {
        let balance = self.balance(address).saturating_sub(amount);
        self.set_balance(address, balance);
    }
}

/// Mutable world state that hands out staged updaters and persists under a
/// block identity.
pub trait WorldState: WorldView {
    /// Staged updater borrowed from this state.
    type Updater<'a>: WorldUpdater
    where
        Self: 'a;

    /// Obtain a fresh staged updater.
    ///
    /// The updater mutably borrows this state, so at most one can be live at
    /// a time; it must be committed or dropped before the next one is
    /// obtained.
    fn updater(&mut self) -> Self::Updater<'_>;

    /// Durably persist every committed change under the header's identity.
    fn persist(&mut self, header: &Header) -> Result<(), PersistError>;

    /// Whether this state keeps a resettable speculative diff.
    fn supports_rollback(&self) -> bool {
        false
    }

    /// Drop every committed-but-unpersisted change.
    ///
    /// No-op unless [`supports_rollback`](WorldState::supports_rollback)
    /// returns true.
    fn rollback(&mut self) {}
}
