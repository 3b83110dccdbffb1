//! The mainnet block processor.

use std::sync::Arc;

use alloy_consensus::Header;
use alloy_eips::eip4895::Withdrawal;
use alloy_primitives::U256;
use hearth_traits::{PersistError, TrieError, WorldState, WorldUpdater};
use tracing::{error, info, trace};

use crate::{
    BlockHashLookup, BlockOutputs, BlockProcessingError, BlockProcessingResult, BlockProcessor,
    BlockTransaction, ChainView, Deposit, MiningBeneficiaryCalculator, NoTracing, ProtocolSchedule,
    ReceiptFactory, RewardPolicy, TransactionExecutionResult, TransactionProcessor,
    TransactionValidationParams,
};

/// Block processor for Ethereum mainnet semantics.
///
/// Strategies are injected once at construction and shared read-only across
/// calls; per-call state is local to
/// [`process_block`](BlockProcessor::process_block), so one instance may
/// serve concurrent callers as long as each call exclusively owns its world
/// state.
pub struct MainnetBlockProcessor<P> {
    transaction_processor: P,
    receipt_factory: Arc<dyn ReceiptFactory>,
    block_reward: U256,
    beneficiary_calculator: Arc<dyn MiningBeneficiaryCalculator>,
    skip_zero_block_rewards: bool,
    protocol_schedule: Arc<dyn ProtocolSchedule>,
    reward_policy: Arc<dyn RewardPolicy>,
}

impl<P> MainnetBlockProcessor<P> {
    /// Assemble a processor from its strategies.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        transaction_processor: P,
        receipt_factory: Arc<dyn ReceiptFactory>,
        block_reward: U256,
        beneficiary_calculator: Arc<dyn MiningBeneficiaryCalculator>,
        skip_zero_block_rewards: bool,
        protocol_schedule: Arc<dyn ProtocolSchedule>,
        reward_policy: Arc<dyn RewardPolicy>,
    ) -> Self {
        Self {
            transaction_processor,
            receipt_factory,
            block_reward,
            beneficiary_calculator,
            skip_zero_block_rewards,
            protocol_schedule,
            reward_policy,
        }
    }

    /// Configured base block reward in wei.
    pub const fn block_reward(&self) -> U256 {
        self.block_reward
    }
}

impl<P> core::fmt::Debug for MainnetBlockProcessor<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MainnetBlockProcessor")
            .field("block_reward", &self.block_reward)
            .field("skip_zero_block_rewards", &self.skip_zero_block_rewards)
            .finish_non_exhaustive()
    }
}

impl<P: TransactionProcessor> BlockProcessor for MainnetBlockProcessor<P> {
    type Transaction = P::Transaction;
    type Metadata = P::Metadata;

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
    ) -> Result<BlockProcessingResult, TrieError> {
        let block_hash = header.hash_slow();
        let mut receipts = Vec::with_capacity(transactions.len());
        let mut cumulative_gas_used = 0u64;

        for transaction in transactions {
            // Every transaction's full gas limit must fit the remaining
            // budget, whether or not it would all be consumed.
            let remaining_budget = header.gas_limit - cumulative_gas_used;
            if transaction.gas_limit() > remaining_budget {
                info!(
                    gas_limit = transaction.gas_limit(),
                    remaining_budget,
                    block = %block_hash,
                    transaction = %transaction.hash(),
                    "transaction gas limit exceeds remaining block budget"
                );
                return Ok(BlockProcessingResult::Failed(BlockProcessingError::GasBudgetExceeded));
            }

            let beneficiary = self.beneficiary_calculator.beneficiary(header);
            let mut block_hashes = BlockHashLookup::new(header, chain);
            let mut updater = world_state.updater();
            let result = self.transaction_processor.process_transaction(
                chain,
                &mut updater,
                header,
                transaction,
                beneficiary,
                &mut NoTracing,
                &mut block_hashes,
                true,
                &TransactionValidationParams::processing_block(),
                metadata,
            );

            match result {
                TransactionExecutionResult::Invalid { reason } => {
                    let failure = BlockProcessingError::TransactionInvalid {
                        reason,
                        block_hash,
                        transaction_hash: transaction.hash(),
                    };
                    info!(%failure, "rejecting block");
                    drop(updater);
                    world_state.rollback();
                    return Ok(BlockProcessingResult::Failed(failure));
                }
                result => {
                    updater.commit();
                    drop(updater);

                    cumulative_gas_used = cumulative_gas_used
                        .saturating_add(transaction.gas_limit().saturating_sub(result.gas_remaining()));
                    let receipt = self.receipt_factory.create_receipt(
                        transaction.tx_type(),
                        &result,
                        &*world_state,
                        cumulative_gas_used,
                    );
                    receipts.push(receipt);
                }
            }
        }

        if let Some(processor) = self.protocol_schedule.by_block_header(header).withdrawals_processor()
            && let Some(withdrawals) = withdrawals
        {
            let mut updater = world_state.updater();
            if let Err(source) = processor.process_withdrawals(withdrawals, &mut updater) {
                error!(error = %source, block = %block_hash, "failed processing withdrawals");
                drop(updater);
                world_state.rollback();
                return Ok(BlockProcessingResult::Failed(BlockProcessingError::Withdrawals(
                    source,
                )));
            }
        }

        if let Some(processor) = self.protocol_schedule.by_block_header(header).deposits_processor()
            && let Some(deposits) = deposits
        {
            let mut updater = world_state.updater();
            if let Err(source) = processor.process_deposits(deposits, &mut updater) {
                error!(error = %source, block = %block_hash, "failed processing deposits");
                drop(updater);
                world_state.rollback();
                return Ok(BlockProcessingResult::Failed(BlockProcessingError::Deposits(source)));
            }
        }

        let beneficiary = self.beneficiary_calculator.beneficiary(header);
        let mut updater = world_state.updater();
        match self.reward_policy.reward_coinbase(
            &mut updater,
            header,
            ommers,
            beneficiary,
            self.block_reward,
            self.skip_zero_block_rewards,
        ) {
            Ok(()) => {
                updater.commit();
                drop(updater);
            }
            Err(source) => {
                drop(updater);
                world_state.rollback();
                return Ok(BlockProcessingResult::Failed(BlockProcessingError::Reward(source)));
            }
        }

        if let Err(source) = world_state.persist(header) {
            return match source {
                PersistError::Trie(trie) => {
                    trace!(error = %trie, block = %block_hash, "merkle trie exception persisting block");
                    world_state.rollback();
                    Err(trie)
                }
                source => {
                    error!(error = %source, block = %block_hash, "failed persisting block");
                    Ok(BlockProcessingResult::Failed(BlockProcessingError::Persist(source)))
                }
            };
        }

        Ok(BlockProcessingResult::Success(BlockOutputs {
            receipts,
            gas_used: cumulative_gas_used,
        }))
    }
}
