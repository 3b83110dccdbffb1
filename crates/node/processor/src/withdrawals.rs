//! Withdrawal application.

use alloy_eips::eip4895::Withdrawal;
use hearth_traits::WorldUpdater;
use tracing::trace;

use crate::SubProcessorError;

/// Applies a block's withdrawal operations to the world state.
pub trait WithdrawalsProcessor: Send + Sync {
    /// Apply `withdrawals` through `updater`, committing on success.
    fn process_withdrawals(
        &self,
        withdrawals: &[Withdrawal],
        updater: &mut dyn WorldUpdater,
    ) -> Result<(), SubProcessorError>;
}

/// EIP-4895 withdrawal crediting.
///
/// Each withdrawal mints its gwei amount to the target address; withdrawals
/// are system operations and never fail for account-level reasons.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShanghaiWithdrawalsProcessor;

impl WithdrawalsProcessor for ShanghaiWithdrawalsProcessor {
    fn process_withdrawals(
        &self,
        withdrawals: &[Withdrawal],
        updater: &mut dyn WorldUpdater,
    ) -> Result<(), SubProcessorError> {
        for withdrawal in withdrawals {
            trace!(
                index = withdrawal.index,
                address = %withdrawal.address,
                amount_gwei = withdrawal.amount,
                "crediting withdrawal"
            );
            updater.increment_balance(withdrawal.address, withdrawal.amount_wei());
        }
        updater.commit();
        Ok(())
    }
}
