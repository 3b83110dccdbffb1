//! Ethereum mainnet block processor.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hearth-eth/hearth/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod beneficiary;
pub use beneficiary::{CoinbaseBeneficiary, FixedBeneficiary, MiningBeneficiaryCalculator};

mod deposits;
pub use deposits::{DepositsProcessor, PragueDepositsProcessor};

mod error;
pub use error::{BlockProcessingError, InvalidTransaction, RewardError, SubProcessorError};

mod hashes;
pub use hashes::BlockHashLookup;

mod processor;
pub use processor::MainnetBlockProcessor;

mod receipts;
pub use receipts::{ReceiptFactory, StatusReceiptFactory, TransactionReceipt};

mod result;
pub use result::{BlockOutputs, BlockProcessingResult, TransactionExecutionResult};

mod rewards;
pub use rewards::{MAX_GENERATION, MergeRewardPolicy, PowRewardPolicy, RewardPolicy};

mod schedule;
pub use schedule::{ForkActivation, MainnetProtocolSchedule, ProtocolSchedule, ProtocolSpec};

mod traits;
pub use traits::{
    BlockProcessor, BlockTransaction, ChainView, NoTracing, OperationTracer, TransactionProcessor,
    TransactionValidationParams,
};

mod types;
pub use types::Deposit;

mod withdrawals;
pub use withdrawals::{ShanghaiWithdrawalsProcessor, WithdrawalsProcessor};
