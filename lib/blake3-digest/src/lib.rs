//! One-shot BLAKE3 hashing (unkeyed, 32 byte output).
//!
//! The input is split into 1KiB chunks of 64 byte blocks, every chunk is compressed on its own
//! and the chunk chaining values are merged into a binary tree whose root is the digest. The
//! scratch memory of a computation lives in an explicit [`Hasher`] workspace which can be reused
//! across calls, or shared between threads through a [`HasherPool`].
//!
//! ```
//! let hash = blake3_digest::hash(b"");
//! assert_eq!(hash, blake3_digest::Hash::EMPTY);
//!
//! let mut hasher = blake3_digest::Hasher::new();
//! assert_eq!(hasher.hash(b"hello"), blake3_digest::hash(b"hello"));
//! ```

pub mod chunk;
pub mod collector;
pub mod compress;
pub mod config;
pub mod errors;
pub mod hash;
pub mod hasher;
pub mod output;
pub mod pool;
pub mod tree;

/// A set of common utility functions.
pub mod utils;

/// Little-endian marshalling between bytes and words.
pub mod words;

pub use chunk::chunk_output;
pub use collector::{HashTreeCollector, NodeCounter, NodeKind};
pub use compress::{BLOCK_LEN, CHUNK_LEN, OUT_LEN};
pub use config::Config;
pub use errors::ParseHashError;
pub use hash::Hash;
pub use hasher::Hasher;
pub use output::{parent_output, Output};
pub use pool::{HasherPool, PooledHasher};
pub use tree::CvStack;

/// Hash the entire input with a fresh workspace.
pub fn hash(input: &[u8]) -> Hash {
    Hasher::new().hash(input)
}

/// Hash the entire input and feed every node of the hash tree to `tree`, see [`collector`].
pub fn hash_with_tree<T: HashTreeCollector>(input: &[u8], tree: T) -> Hash {
    Hasher::new().hash_with_tree(input, tree)
}
