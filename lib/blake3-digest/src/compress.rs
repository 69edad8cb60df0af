//! The BLAKE3 compression function and the constants it is defined over.

/// The number of bytes in a [`Hash`](crate::Hash).
pub const OUT_LEN: usize = 32;

/// The number of bytes in one message block.
pub const BLOCK_LEN: usize = 64;

/// The number of bytes in one chunk, i.e 16 blocks.
pub const CHUNK_LEN: usize = 1024;

/// The maximum depth of the tree, 2^54 chunks of 1KiB is 2^64 bytes.
pub const MAX_DEPTH: usize = 54;

pub type CVWords = [u32; 8];
pub type CVBytes = [u8; 32];
pub type BlockWords = [u32; 16];

pub const CHUNK_START: u8 = 1 << 0;
pub const CHUNK_END: u8 = 1 << 1;
pub const PARENT: u8 = 1 << 2;
pub const ROOT: u8 = 1 << 3;

pub const IV: &CVWords = &[
    0x6A09E667, 0xBB67AE85, 0x3C6EF372, 0xA54FF53A, 0x510E527F, 0x9B05688C, 0x1F83D9AB, 0x5BE0CD19,
];

const ROUNDS: usize = 7;

/// The order in which each round consumes the 16 message words. Row `r` is row `r - 1` passed
/// through [`MSG_PERMUTATION`].
pub const MSG_SCHEDULE: [[usize; 16]; ROUNDS] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [2, 6, 3, 10, 7, 0, 4, 13, 1, 11, 12, 5, 9, 14, 15, 8],
    [3, 4, 10, 12, 13, 2, 7, 14, 6, 5, 9, 0, 11, 15, 8, 1],
    [10, 7, 12, 9, 14, 3, 13, 15, 4, 0, 11, 2, 5, 8, 1, 6],
    [12, 13, 9, 11, 15, 10, 14, 8, 7, 2, 5, 3, 0, 1, 6, 4],
    [9, 14, 11, 5, 8, 12, 15, 1, 13, 3, 0, 10, 2, 6, 4, 7],
    [11, 15, 5, 0, 1, 9, 8, 6, 14, 10, 2, 12, 3, 4, 7, 13],
];

/// The BLAKE3 message permutation.
pub const MSG_PERMUTATION: [usize; 16] = [2, 6, 3, 10, 7, 0, 4, 13, 1, 11, 12, 5, 9, 14, 15, 8];

/// Run the compression function over one block.
///
/// The first 8 words of the result are the new chaining value, the last 8 words are the extended
/// output (`state[8 + i] ^ cv[i]`) which is only consumed when more than 32 bytes of root output
/// are needed.
///
/// # Panics
///
/// If `block_len` is larger than [`BLOCK_LEN`].
#[inline(always)]
pub const fn compress(
    cv: &CVWords,
    block: &BlockWords,
    counter: u64,
    block_len: u32,
    flags: u8,
) -> [u32; 16] {
    assert!(block_len as usize <= BLOCK_LEN, "block_len out of range");

    let mut state = [
        cv[0],
        cv[1],
        cv[2],
        cv[3],
        cv[4],
        cv[5],
        cv[6],
        cv[7],
        IV[0],
        IV[1],
        IV[2],
        IV[3],
        counter as u32,
        (counter >> 32) as u32,
        block_len,
        flags as u32,
    ];

    let mut r = 0;
    while r < ROUNDS {
        state = round(state, block, &MSG_SCHEDULE[r]);
        r += 1;
    }

    let mut i = 0;
    while i < 8 {
        state[i] ^= state[i + 8];
        state[i + 8] ^= cv[i];
        i += 1;
    }

    state
}

/// Like [`compress`] but only returns the chaining value half of the output.
#[inline(always)]
pub const fn compress_cv(
    cv: &CVWords,
    block: &BlockWords,
    counter: u64,
    block_len: u32,
    flags: u8,
) -> CVWords {
    let state = compress(cv, block, counter, block_len, flags);
    [
        state[0], state[1], state[2], state[3], state[4], state[5], state[6], state[7],
    ]
}

#[inline(always)]
const fn round(mut state: [u32; 16], m: &BlockWords, s: &[usize; 16]) -> [u32; 16] {
    // Mix the columns.
    state = g(state, 0, 4, 8, 12, m[s[0]], m[s[1]]);
    state = g(state, 1, 5, 9, 13, m[s[2]], m[s[3]]);
    state = g(state, 2, 6, 10, 14, m[s[4]], m[s[5]]);
    state = g(state, 3, 7, 11, 15, m[s[6]], m[s[7]]);
    // Mix the diagonals.
    state = g(state, 0, 5, 10, 15, m[s[8]], m[s[9]]);
    state = g(state, 1, 6, 11, 12, m[s[10]], m[s[11]]);
    state = g(state, 2, 7, 8, 13, m[s[12]], m[s[13]]);
    g(state, 3, 4, 9, 14, m[s[14]], m[s[15]])
}

#[allow(clippy::too_many_arguments)]
#[inline(always)]
const fn g(
    mut state: [u32; 16],
    a: usize,
    b: usize,
    c: usize,
    d: usize,
    mx: u32,
    my: u32,
) -> [u32; 16] {
    state[a] = state[a].wrapping_add(state[b]).wrapping_add(mx);
    state[d] = (state[d] ^ state[a]).rotate_right(16);
    state[c] = state[c].wrapping_add(state[d]);
    state[b] = (state[b] ^ state[c]).rotate_right(12);
    state[a] = state[a].wrapping_add(state[b]).wrapping_add(my);
    state[d] = (state[d] ^ state[a]).rotate_right(8);
    state[c] = state[c].wrapping_add(state[d]);
    state[b] = (state[b] ^ state[c]).rotate_right(7);
    state
}
