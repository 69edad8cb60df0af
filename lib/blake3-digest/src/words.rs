//! Conversions between little-endian bytes and the 32-bit words the compression function works
//! on.

use crate::compress::{BlockWords, BLOCK_LEN};

// const-fn implementation.
#[inline(always)]
pub const fn words_from_le_bytes_32(bytes: &[u8; 32]) -> [u32; 8] {
    let mut out = [0; 8];
    let mut i = 0;
    while i < 8 {
        out[i] = word(bytes, i * 4);
        i += 1;
    }
    out
}

// const-fn implementation.
#[inline(always)]
pub const fn words_from_le_bytes_64(bytes: &[u8; BLOCK_LEN]) -> BlockWords {
    let mut out = [0; 16];
    let mut i = 0;
    while i < 16 {
        out[i] = word(bytes, i * 4);
        i += 1;
    }
    out
}

#[inline(always)]
const fn word(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

// const-fn implementation.
#[inline(always)]
pub const fn le_bytes_from_words_32(words: &[u32; 8]) -> [u8; 32] {
    let mut out = [0; 32];
    let mut i = 0;
    let mut j = 0;
    while i < 8 {
        let bytes = words[i].to_le_bytes();
        out[j] = bytes[0];
        j += 1;
        out[j] = bytes[1];
        j += 1;
        out[j] = bytes[2];
        j += 1;
        out[j] = bytes[3];
        j += 1;
        i += 1;
    }
    out
}

#[inline(always)]
pub fn le_bytes_from_words_64(words: &BlockWords) -> [u8; BLOCK_LEN] {
    let mut out = [0; BLOCK_LEN];
    for (chunk, word) in out.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}

/// Decode a possibly short block, any byte past the end of `bytes` reads as zero.
///
/// # Panics
///
/// If `bytes` is longer than [`BLOCK_LEN`].
#[inline]
pub fn block_words(bytes: &[u8]) -> BlockWords {
    assert!(bytes.len() <= BLOCK_LEN, "block is longer than 64 bytes");
    let mut padded = [0; BLOCK_LEN];
    padded[..bytes.len()].copy_from_slice(bytes);
    words_from_le_bytes_64(&padded)
}

/// Returns the block as words without copying, this is only possible on little-endian hosts
/// and when the block starts at a 4 byte aligned address. Returns `None` otherwise.
#[cfg(target_endian = "little")]
#[inline(always)]
pub fn aligned_block_words(bytes: &[u8; BLOCK_LEN]) -> Option<&BlockWords> {
    if (bytes.as_ptr() as usize) % core::mem::align_of::<u32>() != 0 {
        return None;
    }
    // Safety: The pointer is aligned for u32 and covers exactly 64 initialized bytes, any bit
    // pattern is a valid u32 and the host order matches the little-endian decoding.
    Some(unsafe { &*(bytes.as_ptr() as *const BlockWords) })
}

#[cfg(not(target_endian = "little"))]
#[inline(always)]
pub fn aligned_block_words(_bytes: &[u8; BLOCK_LEN]) -> Option<&BlockWords> {
    None
}
