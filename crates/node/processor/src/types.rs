//! Auxiliary block body records.

use alloy_primitives::{B256, FixedBytes};

/// Deposit receipt surfaced by the deposit contract (EIP-6110).
///
/// Deposit receipts are consumed by the consensus layer; on the execution
/// layer they are carried in the block body and validated, nothing more.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deposit {
    /// Validator public key (BLS12-381 G1).
    pub pubkey: FixedBytes<48>,
    /// Commitment to the withdrawal address.
    pub withdrawal_credentials: B256,
    /// Deposited amount in gwei.
    pub amount: u64,
    /// BLS signature over the deposit message.
    pub signature: FixedBytes<96>,
    /// Position in the global deposit queue.
    pub index: u64,
}
