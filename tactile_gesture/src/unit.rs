// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unit-interval numeric helpers.

/// Clamps a ratio into `[0, 1]`, mapping NaN to `0.0`.
///
/// Ratios derived from degenerate geometry (zero-width tracks) can be NaN or
/// infinite; both are folded into the valid interval here so knob and
/// progress state always stores a finite fraction.
#[must_use]
pub fn clamp_unit(ratio: f64) -> f64 {
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.clamp(0.0, 1.0)
}

/// Converts a unit ratio into a percentage.
#[must_use]
pub fn percent(ratio: f64) -> f64 {
    ratio * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_unit_passes_interior_values() {
        assert_eq!(clamp_unit(0.25), 0.25);
        assert_eq!(clamp_unit(0.0), 0.0);
        assert_eq!(clamp_unit(1.0), 1.0);
    }

    #[test]
    fn clamp_unit_folds_out_of_range_values() {
        assert_eq!(clamp_unit(-0.5), 0.0);
        assert_eq!(clamp_unit(1.5), 1.0);
        assert_eq!(clamp_unit(f64::INFINITY), 1.0);
        assert_eq!(clamp_unit(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn clamp_unit_maps_nan_to_zero() {
        assert_eq!(clamp_unit(f64::NAN), 0.0);
    }

    #[test]
    fn percent_scales_by_one_hundred() {
        assert_eq!(percent(0.3), 30.0);
        assert_eq!(percent(1.0), 100.0);
    }
}
