/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Vectorized delimiter scanner.
//!
//! The input is consumed in 64-byte lanes. Each lane is compared against a
//! broadcast copy of the delimiter in one step, producing a 64-bit mask with
//! one bit per matching byte. Set bits are extracted lowest first, so offsets
//! come out in ascending order. Bytes past the last full lane are handed to
//! the scalar scanner.
//!
//! Two lane kernels build the mask:
//! - **AVX-512**: `_mm512_cmpeq_epi8_mask` on hosts where
//!   [`avx512_enabled`](crate::cpu::avx512_enabled) is true
//! - **Portable**: a fixed-width byte comparison the compiler can
//!   auto-vectorize, used everywhere else
//!
//! Both feed [`push_mask`], so the output is the same regardless of kernel.

use crate::scalar::{FIELD_WIDTH_HINT, Offsets, scan_bytes};

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::{_mm512_cmpeq_epi8_mask, _mm512_loadu_si512, _mm512_set1_epi8};

/// Number of bytes compared per vector step.
pub const LANE_WIDTH: usize = 64;

/// Finds all positions of `delimiter` in `data`, 64 bytes at a time.
///
/// Produces exactly the offsets [`find_delimiters_scalar`](crate::find_delimiters_scalar)
/// produces, on every host. Inputs shorter than one lane go entirely
/// through the scalar tail.
///
/// # Example
/// ```
/// use fixscan_tagvalue::{find_delimiters_scalar, find_delimiters_simd};
///
/// let data = b"8=FIX.4.4|35=D|49=SENDER|56=TARGET|55=AAPL|54=1|38=100|44=150.25|";
/// assert_eq!(find_delimiters_simd(data, b'|'), find_delimiters_scalar(data, b'|'));
/// ```
#[must_use]
pub fn find_delimiters_simd(data: &[u8], delimiter: u8) -> Offsets {
    let mut positions = Offsets::with_capacity(data.len() / FIELD_WIDTH_HINT);
    let bulk_len = data.len() - data.len() % LANE_WIDTH;
    let (bulk, tail) = data.split_at(bulk_len);

    scan_lanes(bulk, delimiter, &mut positions);
    scan_bytes(tail, bulk_len, delimiter, &mut positions);

    positions
}

#[cfg(target_arch = "x86_64")]
#[inline]
fn scan_lanes(bulk: &[u8], delimiter: u8, positions: &mut Offsets) {
    if crate::cpu::avx512_enabled() {
        // SAFETY: runtime detection confirmed AVX-512F/BW and OS support.
        unsafe { scan_lanes_avx512(bulk, delimiter, positions) }
    } else {
        scan_lanes_portable(bulk, delimiter, positions);
    }
}

#[cfg(not(target_arch = "x86_64"))]
#[inline]
fn scan_lanes(bulk: &[u8], delimiter: u8, positions: &mut Offsets) {
    scan_lanes_portable(bulk, delimiter, positions);
}

/// Scans full lanes with AVX-512BW.
///
/// # Safety
/// The caller must ensure the CPU supports AVX-512F and AVX-512BW.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx512f,avx512bw")]
unsafe fn scan_lanes_avx512(bulk: &[u8], delimiter: u8, positions: &mut Offsets) {
    // SAFETY: every lane from `chunks_exact` is LANE_WIDTH readable bytes and
    // the load is unaligned.
    unsafe {
        let needle = _mm512_set1_epi8(delimiter as i8);
        for (index, lane) in bulk.chunks_exact(LANE_WIDTH).enumerate() {
            let bytes = _mm512_loadu_si512(lane.as_ptr().cast());
            let mask = _mm512_cmpeq_epi8_mask(bytes, needle);
            push_mask(positions, index * LANE_WIDTH, mask);
        }
    }
}

/// Scans full lanes without target-specific instructions.
#[inline]
pub(crate) fn scan_lanes_portable(bulk: &[u8], delimiter: u8, positions: &mut Offsets) {
    for (index, lane) in bulk.chunks_exact(LANE_WIDTH).enumerate() {
        push_mask(positions, index * LANE_WIDTH, lane_mask(lane, delimiter));
    }
}

/// Builds the match mask for one lane: bit `i` is set when `lane[i] == delimiter`.
#[inline]
pub(crate) fn lane_mask(lane: &[u8], delimiter: u8) -> u64 {
    lane.iter()
        .take(LANE_WIDTH)
        .enumerate()
        .fold(0u64, |mask, (bit, &byte)| {
            mask | (u64::from(byte == delimiter) << bit)
        })
}

/// Appends `base + i` for every set bit `i` of `mask`, lowest first.
#[inline]
pub(crate) fn push_mask(positions: &mut Offsets, base: usize, mut mask: u64) {
    while mask != 0 {
        positions.push(base + mask.trailing_zeros() as usize);
        mask &= mask - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::find_delimiters_scalar;
    use proptest::prelude::*;

    fn pattern(len: usize, every: usize) -> Vec<u8> {
        let mut data = vec![b'X'; len];
        for slot in data.iter_mut().skip(every - 1).step_by(every) {
            *slot = b'|';
        }
        data
    }

    fn scan_portable(data: &[u8], delimiter: u8) -> Offsets {
        let bulk_len = data.len() - data.len() % LANE_WIDTH;
        let (bulk, tail) = data.split_at(bulk_len);
        let mut positions = Offsets::new();
        scan_lanes_portable(bulk, delimiter, &mut positions);
        scan_bytes(tail, bulk_len, delimiter, &mut positions);
        positions
    }

    #[test]
    fn test_push_mask_order() {
        let mut positions = Offsets::new();
        push_mask(&mut positions, 64, (1 << 63) | (1 << 5) | 1);
        assert_eq!(positions.as_slice(), &[64, 69, 127]);
    }

    #[test]
    fn test_push_mask_empty() {
        let mut positions = Offsets::new();
        push_mask(&mut positions, 0, 0);
        assert!(positions.is_empty());
    }

    #[test]
    fn test_lane_mask() {
        let mut lane = [b'a'; LANE_WIDTH];
        lane[0] = b'|';
        lane[7] = b'|';
        lane[63] = b'|';
        assert_eq!(lane_mask(&lane, b'|'), (1 << 63) | (1 << 7) | 1);
        assert_eq!(lane_mask(&[b'|'; LANE_WIDTH], b'|'), u64::MAX);
        assert_eq!(lane_mask(&lane, b','), 0);
    }

    #[test]
    fn test_lane_boundary_lengths() {
        for len in [0, 1, 63, 64, 65, 127, 128, 129, 192, 256, 1000] {
            for every in [1, 2, 7, 10, 64, 65] {
                let data = pattern(len, every);
                assert_eq!(
                    find_delimiters_simd(&data, b'|'),
                    find_delimiters_scalar(&data, b'|'),
                    "len {len} every {every}"
                );
            }
        }
    }

    #[test]
    fn test_delimiter_at_lane_edges() {
        let mut data = vec![b'X'; 130];
        for pos in [0, 63, 64, 127, 128, 129] {
            data[pos] = b'|';
        }
        assert_eq!(
            find_delimiters_simd(&data, b'|').as_slice(),
            &[0, 63, 64, 127, 128, 129]
        );
    }

    #[test]
    fn test_all_delimiters() {
        let data = vec![0x01u8; 200];
        let expected: Vec<usize> = (0..200).collect();
        assert_eq!(find_delimiters_simd(&data, 0x01).into_vec(), expected);
    }

    #[test]
    fn test_portable_kernel_matches_scalar() {
        let data = pattern(256, 3);
        let mut positions = Offsets::new();
        scan_lanes_portable(&data, b'|', &mut positions);
        assert_eq!(positions, find_delimiters_scalar(&data, b'|'));

        let data = pattern(250, 7);
        let expected = find_delimiters_scalar(&data, b'|');
        assert_eq!(scan_portable(&data, b'|'), expected);
    }

    #[test]
    fn test_high_bit_delimiter() {
        let mut data = vec![0x7Fu8; 100];
        data[10] = 0xFF;
        data[70] = 0xFF;
        assert_eq!(find_delimiters_simd(&data, 0xFF).as_slice(), &[10, 70]);
    }

    proptest! {
        #[test]
        fn prop_portable_kernel_matches_scalar(
            data in prop::collection::vec(any::<u8>(), 0..600),
            delimiter in any::<u8>(),
        ) {
            prop_assert_eq!(
                scan_portable(&data, delimiter),
                find_delimiters_scalar(&data, delimiter)
            );
        }

        #[test]
        fn prop_portable_kernel_matches_scalar_on_dense_input(
            data in prop::collection::vec(prop::sample::select(b"|=1A".to_vec()), 0..600),
        ) {
            prop_assert_eq!(
                scan_portable(&data, b'|'),
                find_delimiters_scalar(&data, b'|')
            );
        }
    }
}
