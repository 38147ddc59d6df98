//! View helpers for the focus timer: `mm:ss` labels and progress gauges.

use std::f64::consts::PI;

/// Format seconds as `mm:ss`. Minutes are not wrapped into hours.
pub fn format_mm_ss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Circular progress indicator drawn as an SVG stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressRing {
    pub radius: f64,
}

impl ProgressRing {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// `stroke-dashoffset` for the given progress; 0 draws the full ring.
    pub fn dash_offset(&self, progress: f64) -> f64 {
        self.circumference() * (1.0 - progress.clamp(0.0, 1.0))
    }
}

/// Text gauge such as `[#####-----]` for terminals.
pub fn render_bar(progress: f64, width: usize) -> String {
    let filled = (progress.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mm_ss_pads_and_keeps_long_minutes() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(65), "01:05");
        assert_eq!(format_mm_ss(25 * 60), "25:00");
        assert_eq!(format_mm_ss(90 * 60), "90:00");
    }

    #[test]
    fn ring_offsets() {
        let ring = ProgressRing::new(52.0);
        assert!((ring.dash_offset(0.0) - ring.circumference()).abs() < 1e-9);
        assert!(ring.dash_offset(1.0).abs() < 1e-9);
        assert!((ring.dash_offset(0.5) - ring.circumference() / 2.0).abs() < 1e-9);
        assert!(ring.dash_offset(1.7).abs() < 1e-9);
    }

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(render_bar(0.0, 4), "[----]");
        assert_eq!(render_bar(0.5, 4), "[##--]");
        assert_eq!(render_bar(1.0, 4), "[####]");
    }
}
