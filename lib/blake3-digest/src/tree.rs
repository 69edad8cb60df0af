use arrayvec::ArrayVec;

use crate::collector::{HashTreeCollector, NodeKind};
use crate::compress::{CVWords, MAX_DEPTH};
use crate::output::{parent_output, Output};
use crate::words;

/// The stack of pending subtree chaining values.
///
/// After `k` non-final chunks have been pushed, the stack holds exactly `k.count_ones()` entries,
/// one per set bit of `k`, the largest subtree at the bottom. Subtrees are merged as soon as they
/// are complete, which is safe because a non-final chunk is never part of the root's block.
#[derive(Clone, Debug, Default)]
pub struct CvStack {
    // one extra slot for the final chunk pushed by `finalize`.
    stack: ArrayVec<CVWords, { MAX_DEPTH + 1 }>,
    chunk_counter: u64,
}

impl CvStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// The number of chunks pushed since the stack was last cleared or finalized, which is also
    /// the counter the next chunk has to be compressed with.
    #[inline(always)]
    pub fn chunk_counter(&self) -> u64 {
        self.chunk_counter
    }

    #[inline(always)]
    pub fn clear(&mut self) {
        self.stack.clear();
        self.chunk_counter = 0;
    }

    /// Push the chaining value of a completed chunk that is known not to be the last one, and
    /// merge every subtree this chunk completes.
    pub fn push_chunk_cv<C: HashTreeCollector>(&mut self, cv: CVWords, tree: &mut C) {
        tree.visit(NodeKind::Chunk, &words::le_bytes_from_words_32(&cv));
        self.stack.push(cv);
        self.chunk_counter += 1;

        // Each trailing zero bit of the chunk count is one subtree that just became complete.
        for _ in 0..self.chunk_counter.trailing_zeros() {
            let parent_cv = self.merge_top().chaining_value();
            tree.visit(NodeKind::Parent, &words::le_bytes_from_words_32(&parent_cv));
            self.stack.push(parent_cv);
        }

        debug_assert_eq!(
            self.stack.len(),
            self.chunk_counter.count_ones() as usize,
            "cv stack does not match the chunk count"
        );
    }

    /// Consume the stack with the output of the final chunk and return the output of the root
    /// node. The stack is empty and the chunk counter is back to zero afterwards.
    ///
    /// If the stack is empty the final chunk is the only chunk and its output is the root.
    /// Otherwise the final chunk is pushed and the top two entries are merged until only two
    /// are left, which are returned unmerged as the root parent.
    pub fn finalize<C: HashTreeCollector>(&mut self, last_chunk: Output, tree: &mut C) -> Output {
        self.chunk_counter = 0;
        if self.stack.is_empty() {
            return last_chunk;
        }

        let cv = last_chunk.chaining_value();
        tree.visit(NodeKind::Chunk, &words::le_bytes_from_words_32(&cv));
        self.stack.push(cv);

        while self.stack.len() > 2 {
            let parent_cv = self.merge_top().chaining_value();
            tree.visit(NodeKind::Parent, &words::le_bytes_from_words_32(&parent_cv));
            self.stack.push(parent_cv);
        }

        let root = self.merge_top();
        debug_assert!(self.stack.is_empty());
        root
    }

    /// Pop the top two entries and return their parent.
    #[inline(always)]
    fn merge_top(&mut self) -> Output {
        assert!(self.stack.len() >= 2, "merging needs two subtrees on the stack");
        let right_child = self.stack.pop().unwrap();
        let left_child = self.stack.pop().unwrap();
        parent_output(&left_child, &right_child)
    }
}
