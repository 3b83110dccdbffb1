//! Block processing error types.

use alloy_primitives::{B256, U256};
use hearth_traits::PersistError;
use thiserror::Error;

/// Reasons a transaction fails validation before or during execution.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidTransaction {
    /// The sender's nonce is behind the account nonce.
    #[error("nonce too low: expected {expected}, got {actual}")]
    NonceTooLow {
        /// Next nonce the account would accept.
        expected: u64,
        /// Nonce carried by the transaction.
        actual: u64,
    },

    /// The sender cannot cover gas plus transferred value.
    #[error("upfront cost {cost} exceeds sender balance {balance}")]
    UpfrontCostExceedsBalance {
        /// Required upfront cost in wei.
        cost: U256,
        /// Sender balance in wei.
        balance: U256,
    },

    /// The gas limit does not cover the intrinsic cost.
    #[error("intrinsic gas exceeds gas limit")]
    IntrinsicGasExceedsLimit,

    /// Any other validation failure, carried verbatim.
    #[error("{0}")]
    Other(String),
}

/// Coinbase reward rejection.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RewardError {
    /// An ommer is older than the permitted generation window.
    #[error("ommer too old")]
    OmmerTooOld {
        /// Height of the offending ommer.
        ommer_number: u64,
        /// Height of the including block.
        block_number: u64,
    },
}

/// Failure raised by a withdrawals or deposits processor.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubProcessorError {
    /// Deposit indices must be strictly contiguous.
    #[error("deposit index not contiguous: expected {expected}, got {actual}")]
    NonContiguousDeposit {
        /// Index that should have come next.
        expected: u64,
        /// Index actually observed.
        actual: u64,
    },

    /// A deposit carries no value.
    #[error("deposit {index} has zero amount")]
    ZeroAmountDeposit {
        /// Queue index of the offending deposit.
        index: u64,
    },

    /// Any other sub-processor failure, carried verbatim.
    #[error("{0}")]
    Other(String),
}

/// Why a block was rejected.
#[derive(Debug, Error)]
pub enum BlockProcessingError {
    /// A transaction's gas limit does not fit the remaining block budget.
    #[error("provided gas insufficient")]
    GasBudgetExceeded,

    /// The transaction processor rejected a transaction.
    #[error(
        "Block processing error: transaction invalid {reason}. Block {block_hash} Transaction {transaction_hash}"
    )]
    TransactionInvalid {
        /// The validation verdict.
        reason: InvalidTransaction,
        /// Hash of the block being processed.
        block_hash: B256,
        /// Hash of the rejected transaction.
        transaction_hash: B256,
    },

    /// The withdrawals processor raised.
    #[error("failed processing withdrawals")]
    Withdrawals(#[source] SubProcessorError),

    /// The deposits processor raised.
    #[error("failed processing deposits")]
    Deposits(#[source] SubProcessorError),

    /// The coinbase reward was refused.
    #[error(transparent)]
    Reward(#[from] RewardError),

    /// Persistence failed for a reason other than trie corruption.
    #[error("failed persisting block")]
    Persist(#[source] PersistError),
}
