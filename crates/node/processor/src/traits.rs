//! Core processing traits.

use alloy_consensus::{Header, TxEnvelope, TxType};
use alloy_eips::eip4895::Withdrawal;
use alloy_primitives::{Address, B256};
use hearth_traits::{TrieError, WorldState, WorldUpdater};

use crate::{BlockHashLookup, BlockProcessingResult, Deposit, TransactionExecutionResult};

/// Read-only access to ancestor headers.
///
/// The block processor needs this only to resolve BLOCKHASH lookups inside
/// the EVM; it never walks the chain itself.
pub trait ChainView {
    /// Header with the given hash, if the chain knows it.
    fn header_by_hash(&self, hash: &B256) -> Option<Header>;
}

/// Minimal view the block processor needs over a transaction.
///
/// The transaction body stays opaque; only the transaction processor
/// interprets it.
pub trait BlockTransaction {
    /// EIP-2718 type tag.
    fn tx_type(&self) -> TxType;

    /// Gas limit the sender paid for.
    fn gas_limit(&self) -> u64;

    /// Transaction hash.
    fn hash(&self) -> B256;
}

impl BlockTransaction for TxEnvelope {
    fn tx_type(&self) -> TxType {
        Self::tx_type(self)
    }

    fn gas_limit(&self) -> u64 {
        <Self as alloy_consensus::Transaction>::gas_limit(self)
    }

    fn hash(&self) -> B256 {
        *self.tx_hash()
    }
}

/// Observation seam over transaction execution.
///
/// Hooks default to no-ops so implementations override only what they
/// record.
pub trait OperationTracer {
    /// Called before a transaction starts executing.
    fn trace_start(&mut self, _transaction_hash: B256) {}

    /// Called after a transaction finishes, with the gas it consumed.
    fn trace_end(&mut self, _transaction_hash: B256, _gas_used: u64) {}
}

/// Tracer that records nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTracing;

impl OperationTracer for NoTracing {}

/// Validation toggles for transaction processing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransactionValidationParams {
    /// Accept nonces above the account's next expected nonce.
    pub allow_future_nonce: bool,
    /// Accept senders whose balance cannot cover the upfront cost.
    pub allow_exceeding_balance: bool,
    /// Consult on-chain permissioning contracts.
    pub check_onchain_permissions: bool,
}

impl TransactionValidationParams {
    /// Strict parameters for executing transactions inside a block.
    pub const fn processing_block() -> Self {
        Self {
            allow_future_nonce: false,
            allow_exceeding_balance: false,
            check_onchain_permissions: false,
        }
    }

    /// Parameters for building a block from the pool.
    pub const fn mining() -> Self {
        Self {
            allow_future_nonce: false,
            allow_exceeding_balance: false,
            check_onchain_permissions: true,
        }
    }

    /// Lenient parameters for call simulation.
    pub const fn transaction_simulator() -> Self {
        Self {
            allow_future_nonce: true,
            allow_exceeding_balance: true,
            check_onchain_permissions: false,
        }
    }
}

/// Executes one transaction against a staged updater.
///
/// Implementations wrap the EVM; the block processor only interprets the
/// returned [`TransactionExecutionResult`].
pub trait TransactionProcessor: Send + Sync {
    /// Transaction type accepted for execution.
    type Transaction: BlockTransaction;

    /// Opaque metadata forwarded by the caller and never interpreted by the
    /// block processor.
    type Metadata;

    /// Execute `transaction` through `updater`, leaving the commit-or-drop
    /// decision to the caller.
    #[allow(clippy::too_many_arguments)]
    fn process_transaction(
        &self,
        chain: &dyn ChainView,
        updater: &mut dyn WorldUpdater,
        header: &Header,
        transaction: &Self::Transaction,
        beneficiary: Address,
        tracer: &mut dyn OperationTracer,
        block_hashes: &mut BlockHashLookup<'_>,
        is_persisting_state: bool,
        params: &TransactionValidationParams,
        metadata: Option<&Self::Metadata>,
    ) -> TransactionExecutionResult;
}

/// Processes whole blocks against a mutable world state.
pub trait BlockProcessor {
    /// Transaction type carried by processed blocks.
    type Transaction;

    /// Opaque metadata forwarded to the transaction processor.
    type Metadata;

    /// Execute `transactions` and the block's post-transaction effects
    /// against `world_state`.
    ///
    /// Returns `Err` only for trie corruption surfaced during persistence;
    /// every block-validity verdict travels in the
    /// [`BlockProcessingResult`]. On success the world state has been
    /// persisted under `header`; on failure a snapshot-backed state has
    /// been rolled back.
    #[allow(clippy::too_many_arguments)]
    fn process_block<W: WorldState>(
        &self,
        chain: &dyn ChainView,
        world_state: &mut W,
        header: &Header,
        transactions: &[Self::Transaction],
        ommers: &[Header],
        withdrawals: Option<&[Withdrawal]>,
        deposits: Option<&[Deposit]>,
        metadata: Option<&Self::Metadata>,
    ) -> Result<BlockProcessingResult, TrieError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processing_block_params_are_strict() {
        let params = TransactionValidationParams::processing_block();
        assert!(!params.allow_future_nonce);
        assert!(!params.allow_exceeding_balance);
        assert!(!params.check_onchain_permissions);
    }

    #[test]
    fn simulator_params_are_lenient() {
        let params = TransactionValidationParams::transaction_simulator();
        assert!(params.allow_future_nonce);
        assert!(params.allow_exceeding_balance);
    }

    #[test]
    fn mining_params_check_permissions() {
        assert!(TransactionValidationParams::mining().check_onchain_permissions);
    }

    #[test]
    fn no_tracing_hooks_are_noops() {
        let mut tracer = NoTracing;
        tracer.trace_start(B256::ZERO);
        tracer.trace_end(B256::ZERO, 21_000);
    }
}
