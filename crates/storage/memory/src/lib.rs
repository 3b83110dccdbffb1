//! In-memory snapshot-backed world state.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hearth-eth/hearth/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod account;
pub use account::Account;

mod state;
pub use state::{InMemoryUpdater, InMemoryWorldState};
