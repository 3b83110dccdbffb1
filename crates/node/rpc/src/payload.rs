//! The `engine_getPayload` result object.
//!
//! Field order, hex encodings, and the null-versus-absent policy are part of
//! the wire contract consensus clients parse; every struct here serializes
//! its fields in declaration order and keeps absent optionals as JSON null
//! rather than omitting them or emitting empty lists.

use alloy_eips::eip4895::Withdrawal;
use alloy_primitives::{Address, B256, Bloom, Bytes, FixedBytes, U64, U256};
use hearth_processor::Deposit;
use serde::Serialize;

/// Result object for the `engine_getPayload` family.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineGetPayloadResult {
    /// The execution payload itself.
    pub execution_payload: ExecutionPayloadResult,
    /// Fees accrued to the fee recipient, in wei.
    pub block_value: U256,
}

impl EngineGetPayloadResult {
    /// Pair a payload with its fee value.
    #[must_use]
    pub const fn new(execution_payload: ExecutionPayloadResult, block_value: U256) -> Self {
        Self { execution_payload, block_value }
    }
}

/// Execution payload as serialized on the engine API.
///
/// Quantities are minimal hex strings; hashes and the bloom are fixed-width
/// hex. `prev_randao` and `base_fee_per_gas` are null for blocks predating
/// their forks, and `withdrawals`/`deposits` are null (never an empty list)
/// when the fork does not carry them.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionPayloadResult {
    /// Hash of the executed block.
    pub block_hash: B256,
    /// Hash of the parent block.
    pub parent_hash: B256,
    /// Address credited with execution fees.
    pub fee_recipient: Address,
    /// State root after execution.
    pub state_root: B256,
    /// Root of the receipt trie.
    pub receipts_root: B256,
    /// Bloom over every receipt's logs.
    pub logs_bloom: Bloom,
    /// Randomness of the slot; null pre-merge.
    pub prev_randao: Option<B256>,
    /// Height of the block.
    pub block_number: U64,
    /// Gas limit of the block.
    pub gas_limit: U64,
    /// Gas consumed by the block's transactions.
    pub gas_used: U64,
    /// Timestamp of the block.
    pub timestamp: U64,
    /// Arbitrary proposer data.
    pub extra_data: Bytes,
    /// EIP-1559 base fee; null pre-London.
    pub base_fee_per_gas: Option<U256>,
    /// Raw signed transactions.
    pub transactions: Vec<Bytes>,
    /// Withdrawal operations; null before Shanghai.
    pub withdrawals: Option<Vec<PayloadWithdrawal>>,
    /// Deposit receipts; null before Prague.
    pub deposits: Option<Vec<PayloadDeposit>>,
}

/// Withdrawal operation as serialized on the engine API.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadWithdrawal {
    /// Position in the global withdrawal queue.
    pub index: U64,
    /// Validator the withdrawal drains.
    pub validator_index: U64,
    /// Address credited with the amount.
    pub address: Address,
    /// Amount in gwei.
    pub amount: U64,
}

impl From<&Withdrawal> for PayloadWithdrawal {
    fn from(withdrawal: &Withdrawal) -> Self {
        Self {
            index: U64::from(withdrawal.index),
            validator_index: U64::from(withdrawal.validator_index),
            address: withdrawal.address,
            amount: U64::from(withdrawal.amount),
        }
    }
}

/// Deposit receipt as serialized on the engine API.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadDeposit {
    /// Validator public key.
    pub pubkey: FixedBytes<48>,
    /// Commitment to the withdrawal address.
    pub withdrawal_credentials: B256,
    /// Amount in gwei.
    pub amount: U64,
    /// BLS signature over the deposit message.
    pub signature: FixedBytes<96>,
    /// Position in the global deposit queue.
    pub index: U64,
}

impl From<&Deposit> for PayloadDeposit {
    fn from(deposit: &Deposit) -> Self {
        Self {
            pubkey: deposit.pubkey,
            withdrawal_credentials: deposit.withdrawal_credentials,
            amount: U64::from(deposit.amount),
            signature: deposit.signature,
            index: U64::from(deposit.index),
        }
    }
}
