//! Scales that map data values to pixel positions.
//!
//! These mirror the D3 scales the chart scripts draw with (`scaleBand`,
//! `scaleLinear`, `scaleTime`), so positions computed here line up with
//! what ends up on screen and brush pixels can be inverted in Rust.

use chrono::{NaiveDate, NaiveDateTime};
use hhc_utils::dates::{epoch_seconds, from_epoch_seconds, midnight};

/// A rounded band scale with inner padding only, centred in its range.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    keys: Vec<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new(keys: Vec<String>, range: (f64, f64), padding_inner: f64) -> Self {
        let (r0, r1) = range;
        let n = keys.len() as f64;
        let step = ((r1 - r0) / f64::max(1.0, n - padding_inner)).floor();
        let start = (r0 + (r1 - r0 - step * (n - padding_inner)) * 0.5).round();
        let bandwidth = (step * (1.0 - padding_inner)).round();
        Self {
            keys,
            start,
            step,
            bandwidth,
        }
    }

    /// Top edge of the band for `key`, or `None` if the key is not in the domain.
    pub fn position(&self, key: &str) -> Option<f64> {
        self.keys
            .iter()
            .position(|k| k == key)
            .map(|i| self.start + self.step * i as f64)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

/// Linear scale from `[0, max]` onto `[0, extent]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    max: f64,
    extent: f64,
}

impl LinearScale {
    pub fn new(max: f64, extent: f64) -> Self {
        Self { max, extent }
    }

    /// A zero (or negative) maximum maps every value to 0.
    pub fn apply(&self, value: f64) -> f64 {
        if self.max <= 0.0 {
            0.0
        } else {
            value / self.max * self.extent
        }
    }
}

/// Time scale over calendar dates (at midnight) onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain: (NaiveDate, NaiveDate),
    range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (NaiveDate, NaiveDate) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    fn seconds(&self) -> (f64, f64) {
        (
            epoch_seconds(&self.domain.0) as f64,
            epoch_seconds(&self.domain.1) as f64,
        )
    }

    /// Pixel position of midnight on `date`.
    /// A single-day domain puts every date in the middle of the range.
    pub fn apply(&self, date: &NaiveDate) -> f64 {
        let (t0, t1) = self.seconds();
        let (r0, r1) = self.range;
        if t1 == t0 {
            return (r0 + r1) / 2.0;
        }
        let t = epoch_seconds(date) as f64;
        r0 + (t - t0) / (t1 - t0) * (r1 - r0)
    }

    /// The instant under pixel `px` (not clamped).
    /// A single-day domain inverts every pixel to that day's midnight.
    pub fn invert(&self, px: f64) -> NaiveDateTime {
        let (t0, t1) = self.seconds();
        let (r0, r1) = self.range;
        if t1 == t0 || r1 == r0 {
            return midnight(&self.domain.0);
        }
        let t = t0 + (px - r0) / (r1 - r0) * (t1 - t0);
        from_epoch_seconds(t.round() as i64).unwrap_or_else(|| midnight(&self.domain.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_band_scale_matches_d3_layout() {
        // d3.scaleBand().domain(["a","b","c"]).rangeRound([0, 90]).paddingInner(0.2)
        let scale = BandScale::new(keys(&["a", "b", "c"]), (0.0, 90.0), 0.2);
        assert_eq!(scale.bandwidth(), 26.0);
        assert_eq!(scale.position("a"), Some(0.0));
        assert_eq!(scale.position("b"), Some(32.0));
        assert_eq!(scale.position("c"), Some(64.0));
        assert_eq!(scale.position("d"), None);
    }

    #[test]
    fn test_band_scale_single_key_is_centred() {
        let scale = BandScale::new(keys(&["only"]), (0.0, 90.0), 0.2);
        assert_eq!(scale.position("only"), Some(9.0));
        assert_eq!(scale.bandwidth(), 72.0);
    }

    #[test]
    fn test_band_scale_empty_domain() {
        let scale = BandScale::new(Vec::new(), (0.0, 90.0), 0.2);
        assert!(scale.keys().is_empty());
        assert_eq!(scale.position("a"), None);
    }

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new(10.0, 250.0);
        assert_eq!(scale.apply(10.0), 250.0);
        assert_eq!(scale.apply(4.0), 100.0);
        assert_eq!(LinearScale::new(0.0, 250.0).apply(0.0), 0.0);
    }

    #[test]
    fn test_time_scale_apply_and_invert() {
        let d0 = NaiveDate::from_ymd_opt(2016, 7, 1).unwrap();
        let d1 = NaiveDate::from_ymd_opt(2016, 7, 11).unwrap();
        let scale = TimeScale::new((d0, d1), (0.0, 460.0));
        assert_eq!(scale.apply(&d0), 0.0);
        assert_eq!(scale.apply(&d1), 460.0);
        let d6 = NaiveDate::from_ymd_opt(2016, 7, 6).unwrap();
        assert_eq!(scale.apply(&d6), 230.0);
        assert_eq!(scale.invert(230.0), midnight(&d6));
        assert_eq!(
            scale.invert(23.0),
            NaiveDate::from_ymd_opt(2016, 7, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_time_scale_single_day() {
        let d0 = NaiveDate::from_ymd_opt(2016, 7, 1).unwrap();
        let scale = TimeScale::new((d0, d0), (0.0, 460.0));
        assert_eq!(scale.apply(&d0), 230.0);
        assert_eq!(scale.invert(12.0), midnight(&d0));
    }
}
