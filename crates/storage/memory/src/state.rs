//! The in-memory world state and its staged updater.

use std::collections::BTreeMap;

use alloy_consensus::Header;
use alloy_primitives::{Address, B256, U256, keccak256};
use hearth_traits::{PersistError, WorldState, WorldUpdater, WorldView};

use crate::Account;

/// World state held entirely in memory.
///
/// Committed changes accumulate in a speculative overlay on top of the
/// durable map. [`persist`](WorldState::persist) folds the overlay down and
/// records the block identity; [`rollback`](WorldState::rollback) drops the
/// overlay wholesale, restoring the last persisted state.
#[derive(Clone, Debug, Default)]
pub struct InMemoryWorldState {
    durable: BTreeMap<Address, Account>,
    overlay: BTreeMap<Address, Account>,
    persisted: Option<(u64, B256)>,
}

impl InMemoryWorldState {
    /// Empty world state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an account directly into the durable map, bypassing the staging
    /// discipline. Genesis and test setup helper.
    pub fn insert_account(&mut self, address: Address, account: Account) {
        self.durable.insert(address, account);
    }

    /// Number and hash of the last persisted block, if any.
    pub fn persisted_block(&self) -> Option<(u64, B256)> {
        self.persisted
    }

    /// Deterministic digest of the effective account state.
    ///
    /// Not a Merkle-Patricia root: a keccak over the sorted account encoding,
    /// sufficient to compare two states for equality.
    pub fn state_root(&self) -> B256 {
        let mut preimage = Vec::new();
        for (address, account) in self.effective() {
            preimage.extend_from_slice(address.as_slice());
            preimage.extend_from_slice(&account.nonce.to_be_bytes());
            preimage.extend_from_slice(&account.balance.to_be_bytes::<32>());
        }
        keccak256(&preimage)
    }

    fn effective(&self) -> BTreeMap<Address, Account> {
        let mut merged = self.durable.clone();
        for (address, account) in &self.overlay {
            merged.insert(*address, account.clone());
        }
        merged
    }

    fn account(&self, address: Address) -> Option<&Account> {
        self.overlay.get(&address).or_else(|| self.durable.get(&address))
    }
}

impl WorldView for InMemoryWorldState {
    fn balance(&self, address: Address) -> U256 {
        self.account(address).map(|account| account.balance).unwrap_or_default()
    }

    fn nonce(&self, address: Address) -> u64 {
        self.account(address).map(|account| account.nonce).unwrap_or_default()
    }

    fn contains(&self, address: Address) -> bool {
        self.account(address).is_some()
    }
}

impl WorldState for InMemoryWorldState {
    type Updater<'a> = InMemoryUpdater<'a>;

    fn updater(&mut self) -> InMemoryUpdater<'_> {
        InMemoryUpdater { state: self, pending: BTreeMap::new() }
    }

    fn persist(&mut self, header: &Header) -> Result<(), PersistError> {
        for (address, account) in std::mem::take(&mut self.overlay) {
            self.durable.insert(address, account);
        }
        self.persisted = Some((header.number, header.hash_slow()));
        Ok(())
    }

    fn supports_rollback(&self) -> bool {
        true
    }

    fn rollback(&mut self) {
        self.overlay.clear();
    }
}

/// Staged updater over an [`InMemoryWorldState`].
///
/// Reads fall through pending writes to the overlay and the durable map;
/// [`commit`](WorldUpdater::commit) folds pending writes into the overlay.
#[derive(Debug)]
pub struct InMemoryUpdater<'a> {
    state: &'a mut InMemoryWorldState,
    pending: BTreeMap<Address, Account>,
}

impl InMemoryUpdater<'_> {
    fn staged(&mut self, address: Address) -> &mut Account {
        let base = self.state.account(address).cloned().unwrap_or_default();
        self.pending.entry(address).or_insert(base)
    }
}

impl WorldView for InMemoryUpdater<'_> {
    fn balance(&self, address: Address) -> U256 {
        self.pending
            .get(&address)
            .map(|account| account.balance)
            .unwrap_or_else(|| self.state.balance(address))
    }

    fn nonce(&self, address: Address) -> u64 {
        self.pending
            .get(&address)
            .map(|account| account.nonce)
            .unwrap_or_else(|| self.state.nonce(address))
    }

    fn contains(&self, address: Address) -> bool {
        self.pending.contains_key(&address) || self.state.contains(address)
    }
}

impl WorldUpdater for InMemoryUpdater<'_> {
    fn set_balance(&mut self, address: Address, balance: U256) {
        self.staged(address).balance = balance;
    }

    fn set_nonce(&mut self, address: Address, nonce: u64) {
        self.staged(address).nonce = nonce;
    }

    fn commit(&mut self) {
        for (address, account) in std::mem::take(&mut self.pending) {
            self.state.overlay.insert(address, account);
        }
    }
}
