//! Receipt construction.

use alloy_consensus::TxType;
use alloy_primitives::{Bloom, Log};
use hearth_traits::WorldView;

use crate::TransactionExecutionResult;

/// Receipt for one transaction inside a processed block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionReceipt {
    /// EIP-2718 type of the transaction.
    pub tx_type: TxType,
    /// Post-transaction status (EIP-658).
    pub success: bool,
    /// Gas used by the block up to and including this transaction.
    pub cumulative_gas_used: u64,
    /// Logs emitted during execution.
    pub logs: Vec<Log>,
    /// Bloom filter over the logs.
    pub bloom: Bloom,
}

/// Builds receipts from execution results.
///
/// A pure function of its arguments. The block processor guarantees that
/// `cumulative_gas_used` is the running total through this transaction and
/// that `world_view` reflects the committed post-transaction state.
pub trait ReceiptFactory: Send + Sync {
    /// Build the receipt for one executed transaction.
    fn create_receipt(
        &self,
        tx_type: TxType,
        result: &TransactionExecutionResult,
        world_view: &dyn WorldView,
        cumulative_gas_used: u64,
    ) -> TransactionReceipt;
}

impl<F> ReceiptFactory for F
where
    F: Fn(TxType, &TransactionExecutionResult, &dyn WorldView, u64) -> TransactionReceipt
        + Send
        + Sync,
{
    fn create_receipt(
        &self,
        tx_type: TxType,
        result: &TransactionExecutionResult,
        world_view: &dyn WorldView,
        cumulative_gas_used: u64,
    ) -> TransactionReceipt {
        self(tx_type, result, world_view, cumulative_gas_used)
    }
}

/// Post-Byzantium receipt factory: status flag plus log bloom.
#[derive(Clone, Copy, Debug, Default)]
pub struct StatusReceiptFactory;

impl ReceiptFactory for StatusReceiptFactory {
    fn create_receipt(
        &self,
        tx_type: TxType,
        result: &TransactionExecutionResult,
        _world_view: &dyn WorldView,
        cumulative_gas_used: u64,
    ) -> TransactionReceipt {
        let logs = result.logs().to_vec();
        let mut bloom = Bloom::ZERO;
        for log in &logs {
            bloom.accrue_log(log);
        }
        TransactionReceipt {
            tx_type,
            success: result.is_successful(),
            cumulative_gas_used,
            logs,
            bloom,
        }
    }
}
