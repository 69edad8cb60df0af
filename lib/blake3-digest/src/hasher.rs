use tracing::trace;

use crate::chunk::chunk_output;
use crate::collector::{HashTreeCollector, NodeKind};
use crate::compress::CHUNK_LEN;
use crate::config::Config;
use crate::hash::Hash;
use crate::tree::CvStack;
use crate::utils;

/// A reusable workspace for one-shot hashing.
///
/// The workspace owns the scratch memory of a hash computation. It carries no state from one
/// call to the next, hashing the same input always returns the same digest regardless of what
/// was hashed before. Every call takes `&mut self`, so a workspace can never be used by two
/// computations at once; use one workspace per thread or a [`HasherPool`](crate::HasherPool).
#[derive(Clone, Debug, Default)]
pub struct Hasher {
    config: Config,
    cv_stack: CvStack,
}

impl Hasher {
    /// Create a new [`Hasher`] with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            cv_stack: CvStack::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Hash the entire input and return its digest.
    pub fn hash(&mut self, input: &[u8]) -> Hash {
        self.hash_with_tree(input, ())
    }

    /// Like [`Self::hash`], but also feeds every node of the hash tree to `tree`.
    pub fn hash_with_tree<T: HashTreeCollector>(&mut self, input: &[u8], mut tree: T) -> Hash {
        let num_chunks = utils::chunk_count(input.len());
        trace!(len = input.len(), num_chunks, "hashing input");
        tree.reserve(2 * num_chunks - 1);

        // Scratch left behind by a call that panicked half way.
        self.cv_stack.clear();

        let fast_path = self.config.aligned_fast_path;
        let (body, last_chunk) = input.split_at((num_chunks - 1) * CHUNK_LEN);

        for chunk in body.chunks_exact(CHUNK_LEN) {
            let chunk_counter = self.cv_stack.chunk_counter();
            let cv = chunk_output(chunk, chunk_counter, fast_path).chaining_value();
            self.cv_stack.push_chunk_cv(cv, &mut tree);
        }

        debug_assert_eq!(self.cv_stack.chunk_counter(), (num_chunks - 1) as u64);
        let last_output = chunk_output(last_chunk, self.cv_stack.chunk_counter(), fast_path);
        let hash = self
            .cv_stack
            .finalize(last_output, &mut tree)
            .root_hash();
        tree.visit(NodeKind::Root, hash.as_bytes());

        debug_assert!(self.cv_stack.is_empty(), "cv stack must be drained");
        hash
    }
}

#[cfg(test)]
mod tests {
    use rand::{thread_rng, Rng};

    use super::*;

    fn random_input(len: usize) -> Vec<u8> {
        let mut data = vec![0; len];
        thread_rng().fill(data.as_mut_slice());
        data
    }

    #[test]
    fn reuse_is_independent_of_history() {
        let a = random_input(5 * CHUNK_LEN + 17);
        let b = random_input(2 * CHUNK_LEN);

        let expected_a = Hasher::new().hash(&a);
        let expected_b = Hasher::new().hash(&b);

        let mut hasher = Hasher::new();
        assert_eq!(hasher.hash(&a), expected_a);
        assert_eq!(hasher.hash(&b), expected_b);
        assert_eq!(hasher.hash(&a), expected_a);
        assert_eq!(hasher.hash(&[]), Hash::EMPTY);
        assert_eq!(hasher.hash(&b), expected_b);
    }

    #[test]
    fn fast_path_does_not_change_digest() {
        let data = random_input(9 * CHUNK_LEN + 3);
        let mut fast = Hasher::new();
        let mut slow = Hasher::with_config(Config {
            aligned_fast_path: false,
            ..Default::default()
        });
        for start in 0..4 {
            let input = &data[start..];
            assert_eq!(fast.hash(input), slow.hash(input), "start={start}");
        }
    }

    #[test]
    fn tree_has_every_node() {
        for num_chunks in 1..=20usize {
            let data = random_input(num_chunks * CHUNK_LEN);
            let mut tree = Vec::<[u8; 32]>::new();
            let hash = Hasher::new().hash_with_tree(&data, &mut tree);
            assert_eq!(tree.len(), 2 * num_chunks - 1);
            assert_eq!(tree.last(), Some(hash.as_bytes()));
        }
    }

    #[test]
    fn tree_nodes_carry_their_kind() {
        let mut tree = Vec::<(NodeKind, [u8; 32])>::new();
        let hash = Hasher::new().hash_with_tree(&random_input(5 * CHUNK_LEN), &mut tree);
        let kinds: Vec<NodeKind> = tree.iter().map(|(kind, _)| *kind).collect();
        use NodeKind::*;
        // c0 c1 p01 c2 c3 p23 p0123 c4 root
        assert_eq!(
            kinds,
            [Chunk, Chunk, Parent, Chunk, Chunk, Parent, Parent, Chunk, Root]
        );
        assert_eq!(tree.last().map(|(_, h)| h), Some(hash.as_bytes()));

        let mut single = Vec::<(NodeKind, [u8; 32])>::new();
        Hasher::new().hash_with_tree(b"abc", &mut single);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].0, Root);
    }

    #[test]
    fn tree_leaves_are_chunk_cvs() {
        let num_chunks = 13;
        let data = random_input(num_chunks * CHUNK_LEN - 100);
        let mut tree = Vec::<[u8; 32]>::new();
        Hasher::new().hash_with_tree(&data, &mut tree);

        for (i, chunk) in data.chunks(CHUNK_LEN).enumerate() {
            let cv = chunk_output(chunk, i as u64, true).chaining_value();
            assert_eq!(
                tree[utils::tree_index(i)],
                crate::words::le_bytes_from_words_32(&cv),
                "chunk={i}"
            );
        }
    }
}
