//! Per-worker hot loop
//!
//! One worker's share of a burst: a fixed number of rounds of 256-bit lane
//! additions over 32 packed 8-bit lanes, wrapping on overflow. The four
//! accumulators feed each other, so the loop cannot be reduced to a closed
//! form, and the final folded lane byte is returned so the arithmetic stays
//! observable.

/// 8-bit lanes packed into one 256-bit register.
pub const LANES_PER_REG: usize = 32;

/// Rounds per worker in a default burst. Each round issues eight lane
/// additions, sized so one burst is a short bounded slice of wall-clock time
/// (tens of milliseconds on contemporary hardware).
pub const DEFAULT_ROUNDS: u64 = 1 << 23;

/// Run one worker's hot loop for `rounds` rounds and return the folded
/// residual lane byte.
///
/// Dispatches to the AVX2 path when the CPU supports it. The burst layer
/// refuses to spawn workers on hosts without wide SIMD support, so the
/// single-byte fallback only runs when this function is called directly.
pub fn hot_lanes(rounds: u64) -> u8 {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            // Safety: AVX2 presence checked immediately above.
            return unsafe { avx2::hot_lanes_avx2(rounds) };
        }
    }

    scalar::hot_lanes_scalar(rounds)
}

// ---------------------------------------------------------------------------
// Scalar fallback implementation
// ---------------------------------------------------------------------------
mod scalar {
    /// Same coupled-accumulator recurrence on one byte per accumulator. All
    /// 32 lanes of the wide path hold identical values, so a single byte
    /// reproduces the exact result.
    pub fn hot_lanes_scalar(rounds: u64) -> u8 {
        let (mut a0, mut a1, mut a2, mut a3) = (0u8, 1u8, 2u8, 3u8);

        for _ in 0..rounds {
            a0 = a0.wrapping_add(a3);
            a1 = a1.wrapping_add(a0);
            a2 = a2.wrapping_add(a1);
            a3 = a3.wrapping_add(a2);
            a0 = a0.wrapping_add(a3);
            a1 = a1.wrapping_add(a0);
            a2 = a2.wrapping_add(a1);
            a3 = a3.wrapping_add(a2);
        }

        std::hint::black_box(a0.wrapping_add(a1).wrapping_add(a2).wrapping_add(a3))
    }
}

// ---------------------------------------------------------------------------
// AVX2 implementation (x86_64)
// ---------------------------------------------------------------------------
#[cfg(target_arch = "x86_64")]
mod avx2 {
    use std::arch::x86_64::*;

    /// AVX2 hot loop: four coupled 32-lane accumulators, eight lane
    /// additions per round.
    ///
    /// # Safety
    /// Caller must ensure AVX2 is available on the running CPU.
    #[target_feature(enable = "avx2")]
    pub unsafe fn hot_lanes_avx2(rounds: u64) -> u8 {
        let mut a0 = _mm256_set1_epi8(0);
        let mut a1 = _mm256_set1_epi8(1);
        let mut a2 = _mm256_set1_epi8(2);
        let mut a3 = _mm256_set1_epi8(3);

        for _ in 0..rounds {
            a0 = _mm256_add_epi8(a0, a3);
            a1 = _mm256_add_epi8(a1, a0);
            a2 = _mm256_add_epi8(a2, a1);
            a3 = _mm256_add_epi8(a3, a2);
            a0 = _mm256_add_epi8(a0, a3);
            a1 = _mm256_add_epi8(a1, a0);
            a2 = _mm256_add_epi8(a2, a1);
            a3 = _mm256_add_epi8(a3, a2);
        }

        let folded = _mm256_add_epi8(_mm256_add_epi8(a0, a1), _mm256_add_epi8(a2, a3));
        std::hint::black_box(_mm256_extract_epi8::<0>(folded) as u8)
    }
}
