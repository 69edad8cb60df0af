use arrayvec::ArrayString;

use crate::compress::CVBytes;
use crate::errors::ParseHashError;

/// Lowercase hex encoding of a digest.
pub fn to_hex(bytes: &CVBytes) -> ArrayString<64> {
    let mut buf = [0; 64];
    // Both buffers have exactly the expected sizes, encoding can not fail.
    let _ = hex::encode_to_slice(bytes, &mut buf);
    ArrayString::from_byte_string(&buf).expect("hex digits are ascii")
}

/// Decode 64 hex characters, in either case, into a digest.
pub fn from_hex(input: &[u8]) -> Result<CVBytes, ParseHashError> {
    if input.len() != 64 {
        return Err(ParseHashError::InvalidLength(input.len()));
    }
    let mut out = [0; 32];
    hex::decode_to_slice(input, &mut out).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { index, .. } => {
            ParseHashError::InvalidHexCharacter {
                index,
                byte: input[index],
            }
        },
        // The length was checked above.
        _ => ParseHashError::InvalidLength(input.len()),
    })?;
    Ok(out)
}

/// Position of the chaining value of chunk `chunk_counter` among the nodes a
/// [`HashTreeCollector`](crate::HashTreeCollector) visits.
///
/// Every chunk before it is one node, and the `k` chunks before it are covered by
/// `k - popcount(k)` parents (one fewer parent than leaves per complete subtree).
#[inline(always)]
pub const fn tree_index(chunk_counter: usize) -> usize {
    (chunk_counter << 1) - chunk_counter.count_ones() as usize
}

/// Inverse of [`tree_index`]. Returns `None` when `index` is the position of a parent or the
/// root, or lies past any addressable tree.
pub const fn chunk_counter_from_tree_index(index: usize) -> Option<usize> {
    // tree_index(k) is strictly increasing and lies in [2k - BITS, 2k], so k can only be in
    // [index / 2, index / 2 + BITS / 2].
    let mut k = index / 2;
    let last = index / 2 + (usize::BITS as usize) / 2;
    while k <= last {
        let Some(doubled) = k.checked_mul(2) else {
            return None;
        };
        let position = doubled - k.count_ones() as usize;
        if position == index {
            return Some(k);
        }
        if position > index {
            return None;
        }
        k += 1;
    }
    None
}

/// Number of chunks an input of `len` bytes is split into, the empty input is one empty chunk.
#[inline(always)]
pub const fn chunk_count(len: usize) -> usize {
    if len == 0 {
        1
    } else {
        len.div_ceil(crate::CHUNK_LEN)
    }
}
