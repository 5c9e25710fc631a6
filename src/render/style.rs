//! Figure geometry and panel axis ranges

use super::RenderError;
use std::ops::Range;

/// Fixed y-axis range of one panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Range with finite bounds and `min < max`
    pub fn new(min: f64, max: f64) -> Result<Self, RenderError> {
        if min.is_finite() && max.is_finite() && min < max {
            Ok(Self { min, max })
        } else {
            Err(RenderError::InvalidRange { min, max })
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn as_range(&self) -> Range<f64> {
        self.min..self.max
    }
}

/// Y ranges of the four panels
///
/// Defaults fit the Sod shock tube at the usual output times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelRanges {
    pub density: AxisRange,
    pub velocity: AxisRange,
    pub pressure: AxisRange,
    pub energy: AxisRange,
}

impl PanelRanges {
    /// Fails on the first range that `AxisRange::new` would reject
    pub fn validate(&self) -> Result<(), RenderError> {
        for range in [self.density, self.velocity, self.pressure, self.energy] {
            AxisRange::new(range.min, range.max)?;
        }
        Ok(())
    }
}

impl Default for PanelRanges {
    fn default() -> Self {
        Self {
            density: AxisRange { min: 0.0, max: 1.1 },
            velocity: AxisRange {
                min: -0.1,
                max: 1.1,
            },
            pressure: AxisRange { min: 0.0, max: 1.1 },
            energy: AxisRange { min: 1.5, max: 3.7 },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureStyle {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Marker radius in pixels
    pub marker_size: u32,
    /// Tick labels and axis titles; off needs no fonts
    pub labels: bool,
    pub ranges: PanelRanges,
}

impl Default for FigureStyle {
    /// 6x6 inches at 300 dpi
    fn default() -> Self {
        Self {
            width: 1800,
            height: 1800,
            marker_size: 4,
            labels: true,
            ranges: PanelRanges::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_range_validation() {
        assert!(AxisRange::new(0.0, 1.1).is_ok());
        assert!(AxisRange::new(1.0, 1.0).is_err());
        assert!(AxisRange::new(2.0, 1.0).is_err());
        assert!(AxisRange::new(f64::NEG_INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_panel_ranges_validate() {
        assert!(PanelRanges::default().validate().is_ok());

        let mut ranges = PanelRanges::default();
        ranges.pressure = AxisRange { min: 1.0, max: 1.0 };
        assert!(matches!(
            ranges.validate(),
            Err(RenderError::InvalidRange { min, max }) if min == 1.0 && max == 1.0
        ));

        ranges.pressure = PanelRanges::default().pressure;
        ranges.energy = AxisRange {
            min: f64::NAN,
            max: 3.7,
        };
        assert!(ranges.validate().is_err());
    }

    #[test]
    fn test_axis_range_contains_bounds() {
        let range = AxisRange::new(-0.1, 1.1).unwrap();
        assert!(range.contains(-0.1));
        assert!(range.contains(1.1));
        assert!(!range.contains(1.2));
        assert!(!range.contains(f64::NAN));
    }
}
