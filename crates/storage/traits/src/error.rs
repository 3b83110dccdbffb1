//! Error types for world-state operations.

use alloy_primitives::B256;
use thiserror::Error;

/// Inconsistency detected in the state trie.
///
/// Unlike every other failure in block processing, trie errors indicate a
/// storage-layer fault rather than a block-validity verdict, and callers
/// handle them on a separate channel.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TrieError {
    /// A referenced trie node is absent from storage.
    #[error("missing trie node: {0}")]
    MissingNode(B256),

    /// A trie node failed to decode.
    #[error("corrupt trie node: {0}")]
    CorruptNode(String),
}

/// Error persisting a world state under a block identity.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PersistError {
    /// The trie backing the state is inconsistent.
    #[error(transparent)]
    Trie(#[from] TrieError),

    /// The storage backend rejected the write.
    #[error("storage backend error: {0}")]
    Backend(String),
}
