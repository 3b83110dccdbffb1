//! Processing result types.

use alloy_primitives::{Bytes, Log};

use crate::{BlockProcessingError, InvalidTransaction, TransactionReceipt};

/// Outcome of executing one transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransactionExecutionResult {
    /// The transaction cannot be included at all.
    Invalid {
        /// Why validation rejected it.
        reason: InvalidTransaction,
    },
    /// Executed to completion.
    Successful {
        /// Gas left unconsumed out of the transaction's gas limit.
        gas_remaining: u64,
        /// Logs emitted during execution.
        logs: Vec<Log>,
        /// Return data of the outermost call.
        output: Bytes,
    },
    /// Executed but reverted. Still includable; the receipt carries a
    /// failure status.
    Reverted {
        /// Gas left unconsumed out of the transaction's gas limit.
        gas_remaining: u64,
        /// Revert data of the outermost call.
        output: Bytes,
    },
}

impl TransactionExecutionResult {
    /// Whether the transaction was rejected outright.
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }

    /// Whether execution completed without reverting.
    pub const fn is_successful(&self) -> bool {
        matches!(self, Self::Successful { .. })
    }

    /// Gas left unconsumed; zero for invalid transactions.
    pub const fn gas_remaining(&self) -> u64 {
        match self {
            Self::Invalid { .. } => 0,
            Self::Successful { gas_remaining, .. } | Self::Reverted { gas_remaining, .. } => {
                *gas_remaining
            }
        }
    }

    /// Logs emitted during execution; empty unless successful.
    pub fn logs(&self) -> &[Log] {
        match self {
            Self::Successful { logs, .. } => logs,
            Self::Invalid { .. } | Self::Reverted { .. } => &[],
        }
    }
}

/// Products of a successfully processed block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockOutputs {
    /// One receipt per transaction, in input order.
    pub receipts: Vec<TransactionReceipt>,
    /// Total gas consumed by the block's transactions.
    pub gas_used: u64,
}

/// Verdict of processing one block.
#[derive(Debug)]
pub enum BlockProcessingResult {
    /// The block executed and was persisted.
    Success(BlockOutputs),
    /// The block was rejected; a snapshot-backed world state has been
    /// rolled back.
    Failed(BlockProcessingError),
}

impl BlockProcessingResult {
    /// Whether the block was accepted.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Outputs of an accepted block.
    pub const fn outputs(&self) -> Option<&BlockOutputs> {
        match self {
            Self::Success(outputs) => Some(outputs),
            Self::Failed(_) => None,
        }
    }

    /// Rejection reason of a failed block.
    pub const fn failure(&self) -> Option<&BlockProcessingError> {
        match self {
            Self::Success(_) => None,
            Self::Failed(error) => Some(error),
        }
    }
}
