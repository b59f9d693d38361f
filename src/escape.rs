// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time kernel.  Iterates `z = z * z + c` from the origin
//! and reports how many steps it takes the orbit to leave the circle
//! of radius 2, or that it never left within the iteration cap.

use num::Complex;

/// The squared bailout radius.  A point whose orbit passes magnitude 2
/// is guaranteed to diverge, and squaring both sides of the comparison
/// saves a square root per step.
const BAILOUT_NORM_SQR: f64 = 4.0;

/// The outcome of iterating a single point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Escape {
    /// The orbit passed the bailout radius after this many steps
    /// (0-indexed: an immediate escape is `Escaped(0)`).
    Escaped(usize),
    /// The orbit stayed bounded through the whole iteration cap; the
    /// point is treated as interior to the set.
    Bounded,
}

impl Escape {
    /// The raw iteration count, with `limit` itself standing in for
    /// "never escaped".  This is the counts-buffer encoding for
    /// callers that defer color resolution.
    pub fn count(self, limit: usize) -> usize {
        match self {
            Escape::Escaped(n) => n,
            Escape::Bounded => limit,
        }
    }

    /// The palette slot for this outcome.  The palette has `limit`
    /// entries, so bounded points (and any count at the cap) clamp to
    /// the last one.
    pub fn palette_index(self, limit: usize) -> usize {
        match self {
            Escape::Escaped(n) => n.min(limit - 1),
            Escape::Bounded => limit - 1,
        }
    }
}

/// Iterate `c` for up to `limit` steps, checking the bailout after
/// every step.  Deterministic, allocation-free, and safe to call from
/// any number of threads at once.
pub fn escape_time(c: Complex<f64>, limit: usize) -> Escape {
    let mut z = Complex::new(0.0_f64, 0.0_f64);
    for i in 0..limit {
        z = z * z + c;
        if z.norm_sqr() > BAILOUT_NORM_SQR {
            return Escape::Escaped(i);
        }
    }
    Escape::Bounded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        for limit in &[1, 10, 1000] {
            assert_eq!(escape_time(Complex::new(0.0, 0.0), *limit), Escape::Bounded);
        }
    }

    #[test]
    fn far_point_escapes_immediately() {
        assert_eq!(escape_time(Complex::new(3.0, 0.0), 1), Escape::Escaped(0));
        assert_eq!(escape_time(Complex::new(3.0, 0.0), 500), Escape::Escaped(0));
    }

    #[test]
    fn real_axis_boundary_stays_bounded() {
        // z jumps from -2 to 2 and then sits there; norm_sqr is
        // exactly 4, which does not pass the strict bailout.
        assert_eq!(escape_time(Complex::new(-2.0, 0.0), 10), Escape::Bounded);
    }

    #[test]
    fn kernel_is_deterministic() {
        let c = Complex::new(-0.75, 0.1);
        let first = escape_time(c, 100);
        assert_eq!(first, Escape::Escaped(32));
        for _ in 0..10 {
            assert_eq!(escape_time(c, 100), first);
        }
    }

    #[test]
    fn near_boundary_point_escapes_late() {
        assert_eq!(escape_time(Complex::new(-1.0, 0.3), 200), Escape::Escaped(34));
    }

    #[test]
    fn count_uses_the_cap_as_sentinel() {
        assert_eq!(Escape::Escaped(7).count(100), 7);
        assert_eq!(Escape::Bounded.count(100), 100);
    }

    #[test]
    fn palette_index_clamps_to_the_last_entry() {
        assert_eq!(Escape::Escaped(7).palette_index(100), 7);
        assert_eq!(Escape::Escaped(99).palette_index(100), 99);
        assert_eq!(Escape::Bounded.palette_index(100), 99);
    }
}
