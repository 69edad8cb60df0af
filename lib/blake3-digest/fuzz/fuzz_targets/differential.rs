#![no_main]

use arbitrary::Arbitrary;
use blake3_digest::{Config, Hasher};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    offset: u8,
    fast_path: bool,
    data: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    // Shift the start of the slice to exercise both aligned and misaligned blocks.
    let offset = (input.offset as usize % 4).min(input.data.len());
    let data = &input.data[offset..];

    let mut hasher = Hasher::with_config(Config {
        aligned_fast_path: input.fast_path,
        ..Default::default()
    });
    let expected = blake3::hash(data);

    assert_eq!(
        hasher.hash(data).as_bytes(),
        expected.as_bytes(),
        "len={}",
        data.len()
    );
});
