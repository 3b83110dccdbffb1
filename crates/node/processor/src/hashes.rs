//! Ancestor block-hash resolution for BLOCKHASH.

use std::collections::HashMap;
use std::fmt;

use alloy_consensus::Header;
use alloy_primitives::B256;

use crate::ChainView;

/// Lazily resolves ancestor hashes of the block being processed.
///
/// Parent headers are walked through the chain view on demand and each
/// number-to-hash pair is cached, so repeated lookups within one block pay
/// the walk once. Ancestors the chain view does not know resolve to the
/// zero hash.
pub struct BlockHashLookup<'a> {
    chain: &'a dyn ChainView,
    cache: HashMap<u64, B256>,
    search_head: Option<(u64, B256)>,
}

impl fmt::Debug for BlockHashLookup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockHashLookup")
            .field("cache", &self.cache)
            .field("search_head", &self.search_head)
            .finish()
    }
}

impl<'a> BlockHashLookup<'a> {
    /// Lookup rooted at the block being processed.
    pub fn new(header: &Header, chain: &'a dyn ChainView) -> Self {
        let mut cache = HashMap::new();
        let mut search_head = None;
        if header.number > 0 {
            cache.insert(header.number - 1, header.parent_hash);
            search_head = Some((header.number - 1, header.parent_hash));
        }
        Self { chain, cache, search_head }
    }

    /// Hash of the ancestor at `number`, or the zero hash when unknown.
    pub fn hash(&mut self, number: u64) -> B256 {
        while !self.cache.contains_key(&number) {
            let Some((head_number, head_hash)) = self.search_head else {
                break;
            };
            if number > head_number || head_number == 0 {
                break;
            }
            let Some(header) = self.chain.header_by_hash(&head_hash) else {
                self.search_head = None;
                break;
            };
            self.cache.insert(head_number - 1, header.parent_hash);
            self.search_head = Some((head_number - 1, header.parent_hash));
        }
        self.cache.get(&number).copied().unwrap_or(B256::ZERO)
    }
}
