//! Fork-indexed processing capabilities.

use std::{fmt, sync::Arc};

use alloy_consensus::Header;

use crate::{
    DepositsProcessor, PragueDepositsProcessor, ShanghaiWithdrawalsProcessor, WithdrawalsProcessor,
};

/// Fork-indexed registry of per-header processing capabilities.
pub trait ProtocolSchedule: Send + Sync {
    /// Capabilities active for the given header.
    fn by_block_header(&self, header: &Header) -> &ProtocolSpec;
}

/// Point at which a fork becomes active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForkActivation {
    /// Activates at a block height (pre-merge forks).
    Block(u64),
    /// Activates at a block timestamp (post-merge forks).
    Timestamp(u64),
}

impl ForkActivation {
    /// Whether the fork is active for the header.
    pub const fn is_active(&self, header: &Header) -> bool {
        match self {
            Self::Block(number) => header.number >= *number,
            Self::Timestamp(timestamp) => header.timestamp >= *timestamp,
        }
    }
}

/// Capabilities a fork enables for block processing.
#[derive(Clone, Default)]
pub struct ProtocolSpec {
    name: &'static str,
    withdrawals_processor: Option<Arc<dyn WithdrawalsProcessor>>,
    deposits_processor: Option<Arc<dyn DepositsProcessor>>,
}

impl ProtocolSpec {
    /// Spec with no capabilities enabled.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self { name, withdrawals_processor: None, deposits_processor: None }
    }

    /// Enable withdrawal processing.
    #[must_use]
    pub fn with_withdrawals_processor(mut self, processor: Arc<dyn WithdrawalsProcessor>) -> Self {
        self.withdrawals_processor = Some(processor);
        self
    }

    /// Enable deposit processing.
    #[must_use]
    pub fn with_deposits_processor(mut self, processor: Arc<dyn DepositsProcessor>) -> Self {
        self.deposits_processor = Some(processor);
        self
    }

    /// Fork name, for diagnostics.
    pub const fn name(&self) -> &str {
        self.name
    }

    /// Withdrawals processor, if the fork enables one.
    pub fn withdrawals_processor(&self) -> Option<&dyn WithdrawalsProcessor> {
        self.withdrawals_processor.as_deref()
    }

    /// Deposits processor, if the fork enables one.
    pub fn deposits_processor(&self) -> Option<&dyn DepositsProcessor> {
        self.deposits_processor.as_deref()
    }
}

impl fmt::Debug for ProtocolSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProtocolSpec")
            .field("name", &self.name)
            .field("withdrawals", &self.withdrawals_processor.is_some())
            .field("deposits", &self.deposits_processor.is_some())
            .finish()
    }
}

/// Milestone-based schedule: the most recently activated milestone wins.
#[derive(Clone, Debug)]
pub struct MainnetProtocolSchedule {
    base: ProtocolSpec,
    milestones: Vec<(ForkActivation, ProtocolSpec)>,
}

impl MainnetProtocolSchedule {
    /// Schedule with only a base spec and no later milestones.
    #[must_use]
    pub const fn new(base: ProtocolSpec) -> Self {
        Self { base, milestones: Vec::new() }
    }

    /// Append a milestone. Milestones must be appended in activation order.
    #[must_use]
    pub fn with_milestone(mut self, activation: ForkActivation, spec: ProtocolSpec) -> Self {
        self.milestones.push((activation, spec));
        self
    }

    /// The Ethereum mainnet fork lineup.
    #[must_use]
    pub fn mainnet() -> Self {
        Self::new(ProtocolSpec::new("frontier"))
            .with_milestone(ForkActivation::Block(15_537_394), ProtocolSpec::new("paris"))
            .with_milestone(
                ForkActivation::Timestamp(1_681_338_455),
                ProtocolSpec::new("shanghai")
                    .with_withdrawals_processor(Arc::new(ShanghaiWithdrawalsProcessor)),
            )
            .with_milestone(
                ForkActivation::Timestamp(1_710_338_135),
                ProtocolSpec::new("cancun")
                    .with_withdrawals_processor(Arc::new(ShanghaiWithdrawalsProcessor)),
            )
            .with_milestone(
                ForkActivation::Timestamp(1_746_612_311),
                ProtocolSpec::new("prague")
                    .with_withdrawals_processor(Arc::new(ShanghaiWithdrawalsProcessor))
                    .with_deposits_processor(Arc::new(PragueDepositsProcessor)),
            )
    }
}

impl ProtocolSchedule for MainnetProtocolSchedule {
    fn by_block_header(&self, header: &Header) -> &ProtocolSpec {
        self.milestones
            .iter()
            .rev()
            .find(|(activation, _)| activation.is_active(header))
            .map(|(_, spec)| spec)
            .unwrap_or(&self.base)
    }
}
