use arrayref::array_ref;

use crate::compress::{self, BlockWords, BLOCK_LEN, CHUNK_END, CHUNK_LEN, CHUNK_START, IV};
use crate::output::Output;
use crate::words;

/// Hash every block of a chunk except the last one, and return the last one as an [`Output`]
/// so the caller can decide if this chunk is the root.
///
/// A chunk always has at least one block, an empty chunk is one zero-length block. The chunk
/// counter is the same for every block of the chunk.
///
/// # Panics
///
/// If the chunk is larger than [`CHUNK_LEN`].
pub fn chunk_output(chunk: &[u8], chunk_counter: u64, aligned_fast_path: bool) -> Output {
    assert!(chunk.len() <= CHUNK_LEN, "chunk is larger than 1KiB");

    let last_block_start = chunk.len().saturating_sub(1) / BLOCK_LEN * BLOCK_LEN;
    let (full_blocks, last_block) = chunk.split_at(last_block_start);

    let mut cv = *IV;
    let mut flags = CHUNK_START;
    for block in full_blocks.chunks_exact(BLOCK_LEN) {
        let block = array_ref!(block, 0, BLOCK_LEN);
        let owned: BlockWords;
        let block_words = match aligned_fast_path
            .then(|| words::aligned_block_words(block))
            .flatten()
        {
            Some(block_words) => block_words,
            None => {
                owned = words::words_from_le_bytes_64(block);
                &owned
            },
        };
        cv = compress::compress_cv(&cv, block_words, chunk_counter, BLOCK_LEN as u32, flags);
        flags = 0;
    }

    debug_assert!(last_block.len() <= BLOCK_LEN);
    Output {
        input_chaining_value: cv,
        block: words::block_words(last_block),
        block_len: last_block.len() as u32,
        counter: chunk_counter,
        flags: flags | CHUNK_END,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 251) as u8).collect()
    }

    #[test]
    fn single_block_has_start_and_end() {
        for len in [0, 1, 63, 64] {
            let output = chunk_output(&input(len), 0, true);
            assert_eq!(output.flags(), CHUNK_START | CHUNK_END, "len={len}");
            assert_eq!(output.block_len as usize, len);
            assert_eq!(output.input_chaining_value, *IV);
        }
    }

    #[test]
    fn last_block_of_many_has_only_end() {
        for len in [65, 128, 129, 1023, 1024] {
            let output = chunk_output(&input(len), 3, true);
            assert_eq!(output.flags(), CHUNK_END, "len={len}");
            assert_ne!(output.input_chaining_value, *IV);
            assert_eq!(output.counter, 3);
            let expected_len = if len % BLOCK_LEN == 0 {
                BLOCK_LEN
            } else {
                len % BLOCK_LEN
            };
            assert_eq!(output.block_len as usize, expected_len, "len={len}");
        }
    }

    #[test]
    fn chunk_counter_changes_cv() {
        let data = input(CHUNK_LEN);
        let a = chunk_output(&data, 0, true).chaining_value();
        let b = chunk_output(&data, 1, true).chaining_value();
        assert_ne!(a, b);
    }

    #[test]
    fn fast_path_does_not_change_output() {
        // Offset the slice by one byte so at least one of the two views is misaligned.
        let data = input(CHUNK_LEN + 1);
        for start in [0, 1] {
            let chunk = &data[start..start + CHUNK_LEN];
            assert_eq!(chunk_output(chunk, 5, true), chunk_output(chunk, 5, false));
        }
    }

    #[test]
    fn matches_reference_single_chunk() {
        for len in [0, 1, 63, 64, 65, 1000, 1024] {
            let data = input(len);
            let expected = blake3::hash(&data);
            let actual = chunk_output(&data, 0, true).root_hash();
            assert_eq!(actual.as_bytes(), expected.as_bytes(), "len={len}");
        }
    }

    #[test]
    #[should_panic]
    fn oversized_chunk_panics() {
        chunk_output(&[0; CHUNK_LEN + 1], 0, true);
    }
}
