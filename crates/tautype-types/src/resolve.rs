//! Range approximation
//!
//! Converts a caller's desired magnitude into the tightest covering tier.
//! Width requests map 1:1 onto the tier domain and are always exact. Length
//! requests cover a deliberately larger domain (0..=1023 chars): below the
//! approximation threshold every length is representable exactly; above it,
//! resolution walks a fixed ladder of rungs and returns the first rung that
//! covers the request, over-approximating by a small, bounded amount. The
//! asymmetry is intentional: short, common lengths get fine-grained bounds
//! while long, rare lengths get coarse but bounded ones.

use crate::tier::{LENGTH_CHARS, TIER_COUNT, Tier, WIDTH_BITS};
use serde::{Deserialize, Serialize};
use tautype_diagnostics::{Result, TT0001, TT0002, TT0003, TT0004, TautError};

/// Upper bound of the supported char-length domain
pub const LENGTH_DOMAIN_MAX: u16 = 1023;

/// Largest length that resolves exactly; above this the ladder applies
pub const LENGTH_EXACT_MAX: u16 = 479;

/// Largest length addressable with char precision
pub const CHAR_PRECISION_MAX: u8 = 64;

/// Resolve a width tier index to its tier.
///
/// The width domain equals the tier domain, so this is exact and total over
/// 0..=15; anything else is a domain error.
pub fn resolve_width_tier(index: u8) -> Result<Tier> {
    Tier::new(index).ok_or_else(|| {
        TautError::domain(
            TT0002,
            format!("width tier {} exceeds the supported 0..=15", index),
            index as u32,
        )
    })
}

/// Resolve a requested bit count to the smallest tier that covers it.
pub fn resolve_width_bits(bits: u32) -> Result<Tier> {
    match WIDTH_BITS.iter().position(|&w| w >= bits) {
        Some(index) => Ok(Tier(index as u8)),
        None => Err(TautError::domain(
            TT0003,
            format!("bit width {} exceeds the supported 0..=4096", bits),
            bits,
        )),
    }
}

/// The result of resolving a char-length request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LengthFit {
    bucket: Tier,
    magnitude: u16,
}

impl LengthFit {
    /// The coarse tier bucket the resolved capacity falls into
    pub const fn bucket(&self) -> Tier {
        self.bucket
    }

    /// The resolved capacity in chars. Equals the requested length in the
    /// exact region; above it, the smallest covering ladder rung.
    pub const fn magnitude(&self) -> u16 {
        self.magnitude
    }

    /// Char precision for short-string modeling: the exact fixed length,
    /// available for capacities of at most 64 chars.
    pub const fn precision(&self) -> Option<u8> {
        if self.magnitude <= CHAR_PRECISION_MAX as u16 {
            Some(self.magnitude as u8)
        } else {
            None
        }
    }

    /// Check if this is the zero fit reserved for empty/unset
    pub const fn is_zero(&self) -> bool {
        self.magnitude == 0
    }
}

/// Ladder rungs above the exact region. Each segment trades precision for a
/// smaller palette; the last rung caps the domain.
///
/// Over-approximation error per segment: at most 3 up to 512, 7 up to 640,
/// 15 up to 832, 31 up to 992, and 30 in the 993..=1023 tail.
fn ladder_rung(n: u16) -> u16 {
    debug_assert!(n > LENGTH_EXACT_MAX && n <= LENGTH_DOMAIN_MAX);
    if n <= 512 {
        n.div_ceil(4) * 4
    } else if n <= 640 {
        n.div_ceil(8) * 8
    } else if n <= 832 {
        n.div_ceil(16) * 16
    } else if n <= 992 {
        n.div_ceil(32) * 32
    } else {
        LENGTH_DOMAIN_MAX
    }
}

fn bucket_for(magnitude: u16) -> Tier {
    // LENGTH_CHARS tops out at the domain max, so a bucket always exists
    // for an in-domain magnitude.
    for index in 0..TIER_COUNT {
        if LENGTH_CHARS[index] >= magnitude {
            return Tier(index as u8);
        }
    }
    Tier(Tier::MAX_INDEX)
}

/// Resolve a char-length request to the tightest covering fit.
///
/// Zero maps to the dedicated zero tier reserved for signaling empty/unset.
/// Requests beyond the supported domain fail rather than clamp.
pub fn resolve_length(n: u16) -> Result<LengthFit> {
    if n > LENGTH_DOMAIN_MAX {
        return Err(TautError::domain(
            TT0001,
            format!("length {} exceeds the supported 0..=1023", n),
            n as u32,
        ));
    }
    let magnitude = if n <= LENGTH_EXACT_MAX {
        n
    } else {
        ladder_rung(n)
    };
    Ok(LengthFit {
        bucket: bucket_for(magnitude),
        magnitude,
    })
}

/// Resolve an exact fixed char length in the precision span 0..=64.
pub fn char_precision(n: u8) -> Result<u8> {
    if n <= CHAR_PRECISION_MAX {
        Ok(n)
    } else {
        Err(TautError::domain(
            TT0004,
            format!("char precision {} exceeds the supported 0..=64", n),
            n as u32,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_tier_exact() {
        for index in 0..=15u8 {
            let tier = resolve_width_tier(index).unwrap();
            assert_eq!(tier.index(), index);
        }
        assert!(resolve_width_tier(16).is_err());
    }

    #[test]
    fn test_width_bits_smallest_cover() {
        assert_eq!(resolve_width_bits(0).unwrap().index(), 0);
        assert_eq!(resolve_width_bits(1).unwrap().width_bits(), 8);
        assert_eq!(resolve_width_bits(8).unwrap().width_bits(), 8);
        assert_eq!(resolve_width_bits(9).unwrap().width_bits(), 16);
        assert_eq!(resolve_width_bits(53).unwrap().width_bits(), 54);
        assert_eq!(resolve_width_bits(55).unwrap().width_bits(), 64);
        assert_eq!(resolve_width_bits(4096).unwrap().width_bits(), 4096);
        assert!(resolve_width_bits(4097).is_err());
    }

    #[test]
    fn test_length_zero_tier() {
        let fit = resolve_length(0).unwrap();
        assert!(fit.is_zero());
        assert_eq!(fit.bucket(), Tier::ZERO);
        assert_eq!(fit.magnitude(), 0);
        assert_eq!(fit.precision(), Some(0));
    }

    #[test]
    fn test_length_exact_region() {
        for n in [1u16, 5, 64, 65, 300, 479] {
            let fit = resolve_length(n).unwrap();
            assert_eq!(fit.magnitude(), n, "length {} must resolve exactly", n);
        }
    }

    #[test]
    fn test_length_ladder_rungs() {
        assert_eq!(resolve_length(480).unwrap().magnitude(), 480);
        assert_eq!(resolve_length(481).unwrap().magnitude(), 484);
        assert_eq!(resolve_length(512).unwrap().magnitude(), 512);
        assert_eq!(resolve_length(513).unwrap().magnitude(), 520);
        assert_eq!(resolve_length(640).unwrap().magnitude(), 640);
        assert_eq!(resolve_length(641).unwrap().magnitude(), 656);
        assert_eq!(resolve_length(833).unwrap().magnitude(), 864);
        assert_eq!(resolve_length(992).unwrap().magnitude(), 992);
        assert_eq!(resolve_length(993).unwrap().magnitude(), 1023);
        assert_eq!(resolve_length(1023).unwrap().magnitude(), 1023);
    }

    #[test]
    fn test_length_domain_error() {
        assert!(resolve_length(1024).is_err());
        assert!(resolve_length(u16::MAX).is_err());
    }

    #[test]
    fn test_precision_span() {
        assert_eq!(resolve_length(64).unwrap().precision(), Some(64));
        assert_eq!(resolve_length(65).unwrap().precision(), None);
        assert_eq!(char_precision(64).unwrap(), 64);
        assert!(char_precision(65).is_err());
    }
}
