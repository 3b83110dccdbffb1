//! Deposit receipt validation.

use hearth_traits::WorldUpdater;

use crate::{Deposit, SubProcessorError};

/// Validates a block's deposit receipts.
pub trait DepositsProcessor: Send + Sync {
    /// Validate `deposits`, committing the updater on success.
    fn process_deposits(
        &self,
        deposits: &[Deposit],
        updater: &mut dyn WorldUpdater,
    ) -> Result<(), SubProcessorError>;
}

/// EIP-6110 deposit receipt validation.
///
/// Deposit receipts are surfaced from the deposit contract's logs for the
/// consensus layer; they move no execution-layer balance. Indices must be
/// strictly contiguous and amounts nonzero.
#[derive(Clone, Copy, Debug, Default)]
pub struct PragueDepositsProcessor;

impl DepositsProcessor for PragueDepositsProcessor {
    fn process_deposits(
        &self,
        deposits: &[Deposit],
        updater: &mut dyn WorldUpdater,
    ) -> Result<(), SubProcessorError> {
        let mut next = None;
        for deposit in deposits {
            if let Some(expected) = next
                && expected != deposit.index
            {
                return Err(SubProcessorError::NonContiguousDeposit {
                    expected,
                    actual: deposit.index,
                });
            }
            if deposit.amount == 0 {
                return Err(SubProcessorError::ZeroAmountDeposit { index: deposit.index });
            }
            next = Some(deposit.index.saturating_add(1));
        }
        updater.commit();
        Ok(())
    }
}
