//! Bit-packed fixed-width slots in 256-bit words.
//!
//! A word is a `BytesN<32>` read as a big-endian 256-bit integer. Slot `i`
//! of width `w` occupies bits `[i*w, (i+1)*w)` counted from the least
//! significant bit, so slot 0 sits in the last bytes of the array. A value
//! at position `n` of a compacted array lives in word `n / (256 / w)`, slot
//! `n % (256 / w)`.
//!
//! Widths must divide 128 so a slot never straddles the two `u128` halves.

use oracle_common::OracleError;
use soroban_sdk::{BytesN, Env, Vec};

pub const SIGNER_INDEX_BITS: u32 = 16;
pub const BLOCK_NUMBER_BITS: u32 = 64;
pub const TIMESTAMP_BITS: u32 = 64;
pub const DECIMALS_BITS: u32 = 8;
pub const PRICE_BITS: u32 = 32;

const WORD_BITS: u32 = 256;
const HALF_BITS: u32 = 128;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompactionError {
    UnsupportedWidth,
    SlotOutOfRange,
    WordOutOfRange,
    ValueTooWide,
    ScaleOverflow,
}

impl From<CompactionError> for OracleError {
    fn from(err: CompactionError) -> Self {
        match err {
            CompactionError::ScaleOverflow | CompactionError::ValueTooWide => {
                OracleError::PriceOverflow
            }
            _ => OracleError::CompactedArrayOutOfBounds,
        }
    }
}

pub const fn slots_per_word(width: u32) -> u32 {
    WORD_BITS / width
}

fn check_width(width: u32) -> Result<(), CompactionError> {
    match width {
        8 | 16 | 32 | 64 => Ok(()),
        _ => Err(CompactionError::UnsupportedWidth),
    }
}

fn split(word: &[u8; 32]) -> (u128, u128) {
    let mut hi = [0u8; 16];
    let mut lo = [0u8; 16];
    hi.copy_from_slice(&word[..16]);
    lo.copy_from_slice(&word[16..]);
    (u128::from_be_bytes(hi), u128::from_be_bytes(lo))
}

fn join(hi: u128, lo: u128) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[..16].copy_from_slice(&hi.to_be_bytes());
    word[16..].copy_from_slice(&lo.to_be_bytes());
    word
}

/// Reads slot `index` of `word`.
pub fn read_slot(word: &[u8; 32], width: u32, index: u32) -> Result<u128, CompactionError> {
    check_width(width)?;
    if index >= slots_per_word(width) {
        return Err(CompactionError::SlotOutOfRange);
    }

    let (hi, lo) = split(word);
    let offset = index * width;
    let half = if offset < HALF_BITS { lo } else { hi };
    let mask = (1u128 << width) - 1;

    Ok((half >> (offset % HALF_BITS)) & mask)
}

/// Overwrites slot `index` of `word` with `value`.
pub fn write_slot(
    word: &mut [u8; 32],
    width: u32,
    index: u32,
    value: u128,
) -> Result<(), CompactionError> {
    check_width(width)?;
    if index >= slots_per_word(width) {
        return Err(CompactionError::SlotOutOfRange);
    }
    let mask = (1u128 << width) - 1;
    if value > mask {
        return Err(CompactionError::ValueTooWide);
    }

    let (mut hi, mut lo) = split(word);
    let offset = index * width;
    let shift = offset % HALF_BITS;
    let half = if offset < HALF_BITS { &mut lo } else { &mut hi };
    *half = (*half & !(mask << shift)) | (value << shift);

    *word = join(hi, lo);
    Ok(())
}

/// Reads position `index` of a compacted array.
pub fn compacted_value(
    words: &Vec<BytesN<32>>,
    width: u32,
    index: u32,
) -> Result<u128, CompactionError> {
    check_width(width)?;
    let per_word = slots_per_word(width);
    let word = words
        .get(index / per_word)
        .ok_or(CompactionError::WordOutOfRange)?;
    read_slot(&word.to_array(), width, index % per_word)
}

/// Number of words needed to hold `count` values of `width` bits.
pub fn words_needed(count: u32, width: u32) -> u32 {
    count.div_ceil(slots_per_word(width))
}

/// Packs `values` into as few words as possible. The inverse of
/// [`compacted_value`].
pub fn compact(env: &Env, values: &[u128], width: u32) -> Result<Vec<BytesN<32>>, CompactionError> {
    check_width(width)?;
    let per_word = slots_per_word(width) as usize;
    let mut words = Vec::new(env);

    for chunk in values.chunks(per_word) {
        let mut word = [0u8; 32];
        for (slot, value) in chunk.iter().enumerate() {
            write_slot(&mut word, width, slot as u32, *value)?;
        }
        words.push_back(BytesN::from_array(env, &word));
    }
    Ok(words)
}

/// Packs a signer list: slot 0 holds the count, slots `1..=n` the roster
/// indices.
pub fn compact_signer_info(env: &Env, indices: &[u32]) -> Result<BytesN<32>, CompactionError> {
    if indices.len() as u32 >= slots_per_word(SIGNER_INDEX_BITS) {
        return Err(CompactionError::SlotOutOfRange);
    }

    let mut word = [0u8; 32];
    write_slot(&mut word, SIGNER_INDEX_BITS, 0, indices.len() as u128)?;
    for (i, index) in indices.iter().enumerate() {
        write_slot(&mut word, SIGNER_INDEX_BITS, i as u32 + 1, *index as u128)?;
    }
    Ok(BytesN::from_array(env, &word))
}

/// Scales a compacted price by its declared exponent to canonical precision:
/// `compacted * 10^decimals`, exactly.
pub fn rescale(compacted: u128, decimals: u32) -> Result<u128, CompactionError> {
    10u128
        .checked_pow(decimals)
        .and_then(|factor| compacted.checked_mul(factor))
        .ok_or(CompactionError::ScaleOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_layout_is_lsb_first() {
        let mut word = [0u8; 32];
        write_slot(&mut word, 8, 0, 0xab).unwrap();
        write_slot(&mut word, 8, 31, 0xcd).unwrap();

        assert_eq!(word[31], 0xab);
        assert_eq!(word[0], 0xcd);
        assert_eq!(read_slot(&word, 8, 0), Ok(0xab));
        assert_eq!(read_slot(&word, 8, 31), Ok(0xcd));
        assert_eq!(read_slot(&word, 8, 1), Ok(0));
    }

    #[test]
    fn test_slots_in_upper_half() {
        let mut word = [0u8; 32];
        write_slot(&mut word, 64, 2, u64::MAX as u128).unwrap();
        write_slot(&mut word, 64, 3, 42).unwrap();
        write_slot(&mut word, 64, 1, 7).unwrap();

        assert_eq!(read_slot(&word, 64, 0), Ok(0));
        assert_eq!(read_slot(&word, 64, 1), Ok(7));
        assert_eq!(read_slot(&word, 64, 2), Ok(u64::MAX as u128));
        assert_eq!(read_slot(&word, 64, 3), Ok(42));
    }

    #[test]
    fn test_write_replaces_only_its_slot() {
        let mut word = [0xffu8; 32];
        write_slot(&mut word, 32, 5, 0).unwrap();

        assert_eq!(read_slot(&word, 32, 5), Ok(0));
        assert_eq!(read_slot(&word, 32, 4), Ok(u32::MAX as u128));
        assert_eq!(read_slot(&word, 32, 6), Ok(u32::MAX as u128));
    }

    #[test]
    fn test_rejects_bad_arguments() {
        let mut word = [0u8; 32];
        assert_eq!(read_slot(&word, 24, 0), Err(CompactionError::UnsupportedWidth));
        assert_eq!(read_slot(&word, 32, 8), Err(CompactionError::SlotOutOfRange));
        assert_eq!(
            write_slot(&mut word, 8, 0, 256),
            Err(CompactionError::ValueTooWide)
        );
    }

    #[test]
    fn test_rescale_is_exact() {
        assert_eq!(rescale(1500, 30), Ok(1_500_000_000_000_000_000_000_000_000_000_000));
        assert_eq!(rescale(12345, 0), Ok(12345));
        assert_eq!(rescale(1, 39), Err(CompactionError::ScaleOverflow));
        assert_eq!(rescale(u32::MAX as u128, 30), Err(CompactionError::ScaleOverflow));
    }

    #[test]
    fn test_largest_quote_at_full_precision() {
        assert_eq!(
            rescale(340_282_366, 30),
            Ok(340_282_366 * 1_000_000_000_000_000_000_000_000_000_000)
        );
        assert_eq!(rescale(340_282_367, 30), Err(CompactionError::ScaleOverflow));
        assert_eq!(
            OracleError::from(CompactionError::ScaleOverflow),
            OracleError::PriceOverflow
        );
    }

    #[test]
    fn test_words_needed() {
        assert_eq!(words_needed(0, 32), 0);
        assert_eq!(words_needed(8, 32), 1);
        assert_eq!(words_needed(9, 32), 2);
        assert_eq!(words_needed(5, 64), 2);
    }
}
