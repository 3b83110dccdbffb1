//! Coinbase reward policies.

use alloy_consensus::Header;
use alloy_primitives::{Address, U256};
use hearth_traits::WorldUpdater;
use tracing::debug;

use crate::RewardError;

/// Maximum number of generations an ommer may lag behind the block that
/// includes it.
pub const MAX_GENERATION: u64 = 6;

/// Strategy crediting the beneficiary and eligible ommer beneficiaries.
///
/// The block processor commits the updater when this returns `Ok` and
/// discards it otherwise, so a rejection leaves no partial credits behind.
pub trait RewardPolicy: Send + Sync {
    /// Credit the block and ommer rewards through `updater`.
    fn reward_coinbase(
        &self,
        updater: &mut dyn WorldUpdater,
        header: &Header,
        ommers: &[Header],
        beneficiary: Address,
        block_reward: U256,
        skip_zero_block_rewards: bool,
    ) -> Result<(), RewardError>;
}

/// Pre-merge mainnet issuance.
///
/// The miner receives the full reward plus an inclusion bonus of a 32nd per
/// ommer; each ommer beneficiary receives a reward scaled down by its
/// distance from the including block.
#[derive(Clone, Copy, Debug, Default)]
pub struct PowRewardPolicy;

impl RewardPolicy for PowRewardPolicy {
    fn reward_coinbase(
        &self,
        updater: &mut dyn WorldUpdater,
        header: &Header,
        ommers: &[Header],
        beneficiary: Address,
        block_reward: U256,
        skip_zero_block_rewards: bool,
    ) -> Result<(), RewardError> {
        if skip_zero_block_rewards && block_reward.is_zero() {
            return Ok(());
        }

        let inclusion_bonus = block_reward * U256::from(ommers.len()) / U256::from(32);
        updater.increment_balance(beneficiary, block_reward.saturating_add(inclusion_bonus));

        for ommer in ommers {
            let distance = header.number.saturating_sub(ommer.number);
            if distance > MAX_GENERATION {
                debug!(
                    ommer_number = ommer.number,
                    block_number = header.number,
                    "ommer exceeds maximum generation"
                );
                return Err(RewardError::OmmerTooOld {
                    ommer_number: ommer.number,
                    block_number: header.number,
                });
            }
            let ommer_reward = block_reward * U256::from(8 - distance) / U256::from(8);
            updater.increment_balance(ommer.beneficiary, ommer_reward);
        }

        Ok(())
    }
}

/// Post-merge issuance: the execution layer mints nothing.
///
/// With `skip_zero_block_rewards` set and a zero reward this writes no
/// state at all; the beneficiary account is not even touched.
#[derive(Clone, Copy, Debug, Default)]
pub struct MergeRewardPolicy;

impl RewardPolicy for MergeRewardPolicy {
    fn reward_coinbase(
        &self,
        updater: &mut dyn WorldUpdater,
        _header: &Header,
        _ommers: &[Header],
        beneficiary: Address,
        block_reward: U256,
        skip_zero_block_rewards: bool,
    ) -> Result<(), RewardError> {
        if skip_zero_block_rewards && block_reward.is_zero() {
            return Ok(());
        }
        updater.increment_balance(beneficiary, block_reward);
        Ok(())
    }
}
