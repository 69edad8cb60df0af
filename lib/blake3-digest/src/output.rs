use crate::compress::{
    self,
    BlockWords,
    CVWords,
    BLOCK_LEN,
    CHUNK_END,
    CHUNK_START,
    IV,
    PARENT,
    ROOT,
};
use crate::hash::Hash;
use crate::words;

/// The inputs of a compression call that has not been issued yet.
///
/// Every node of the tree ends up as an [`Output`]. Whether it turns into a plain chaining value
/// or into the root digest is only known once the caller knows if more input follows, so the
/// call is deferred until then.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Output {
    pub(crate) input_chaining_value: CVWords,
    pub(crate) block: BlockWords,
    pub(crate) block_len: u32,
    pub(crate) counter: u64,
    pub(crate) flags: u8,
}

impl Output {
    /// The chaining value of this node, for when it is not the root.
    #[inline]
    pub fn chaining_value(&self) -> CVWords {
        compress::compress_cv(
            &self.input_chaining_value,
            &self.block,
            self.counter,
            self.block_len,
            self.flags,
        )
    }

    /// Finalize this node as the root of the tree and return the digest.
    #[inline]
    pub fn root_hash(&self) -> Hash {
        Hash::from_bytes(words::le_bytes_from_words_32(&self.root_words_cv()))
    }

    /// The first 64 bytes of root output. The first 32 bytes are the same as [`Self::root_hash`].
    pub fn root_output_block(&self) -> [u8; BLOCK_LEN] {
        let words = compress::compress(
            &self.input_chaining_value,
            &self.block,
            0,
            self.block_len,
            self.flags | ROOT,
        );
        words::le_bytes_from_words_64(&words)
    }

    /// Returns the flags this output will be compressed with.
    #[inline]
    pub fn flags(&self) -> u8 {
        self.flags
    }

    #[inline(always)]
    fn root_words_cv(&self) -> CVWords {
        debug_assert_eq!(self.flags & ROOT, 0, "output is already a root");
        // The root is the first block of output, the counter restarts at 0.
        compress::compress_cv(
            &self.input_chaining_value,
            &self.block,
            0,
            self.block_len,
            self.flags | ROOT,
        )
    }
}

/// Returns the (not yet compressed) parent node of two children.
#[inline]
pub fn parent_output(left_child_cv: &CVWords, right_child_cv: &CVWords) -> Output {
    let mut block = [0; 16];
    block[..8].copy_from_slice(left_child_cv);
    block[8..].copy_from_slice(right_child_cv);
    Output {
        input_chaining_value: *IV,
        block,
        block_len: BLOCK_LEN as u32,
        counter: 0,
        flags: PARENT,
    }
}

/// Return the digest of the empty input. This is a const-fn which allows us to use it in other
/// const-fn constructors.
pub(crate) const fn empty_hash() -> [u8; 32] {
    let state = compress::compress(IV, &[0; 16], 0, 0, CHUNK_START | CHUNK_END | ROOT);
    let cv = [
        state[0], state[1], state[2], state[3], state[4], state[5], state[6], state[7],
    ];
    words::le_bytes_from_words_32(&cv)
}
