// src/geometry.rs
//! Pixel-offset arithmetic for the page behaviors, kept free of DOM types
//! so it can be tested natively.

/// The three resting offsets of the metadata panel, as `right` values.
///
/// `hidden <= hover_in <= open` holds for any non-negative widths: the panel
/// is parked furthest off-canvas, slides partially in on hover, and sits at
/// zero when pinned open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPositions {
    pub open: f64,
    pub hover_in: f64,
    pub hidden: f64,
}

impl PanelPositions {
    /// Compute the position triple from the panel's rendered width, the
    /// pull tab's rendered width, and the box-shadow bleed that must stay
    /// off-screen along with the panel body.
    pub fn compute(panel_width: f64, pull_tab_width: f64, shadow_allowance: f64) -> Self {
        let hover_in = -(panel_width + shadow_allowance);
        Self {
            open: 0.0,
            hover_in,
            hidden: hover_in - pull_tab_width,
        }
    }
}

/// Off-canvas offset for a navigation arrow: exactly one arrow-width
/// outside its edge.
pub fn arrow_out_pos(arrow_width: f64) -> f64 {
    -arrow_width
}

/// `top` offset that vertically centers an item inside a container.
pub fn centered_top(container_height: f64, item_height: f64) -> f64 {
    (container_height - item_height) / 2.0
}

/// First available measurement, for markup where only one arrow variant
/// exists. Both absent degrades to zero, which positions arrows as a
/// visual no-op rather than failing.
pub fn first_measure(a: Option<f64>, b: Option<f64>) -> f64 {
    a.or(b).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_positions_include_shadow_and_tab() {
        let pos = PanelPositions::compute(300.0, 40.0, 10.0);
        assert_eq!(pos.hover_in, -310.0);
        assert_eq!(pos.hidden, -350.0);
        assert_eq!(pos.open, 0.0);
    }

    #[test]
    fn panel_positions_are_ordered() {
        for &(w, p) in &[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (120.5, 32.25), (300.0, 40.0)] {
            let pos = PanelPositions::compute(w, p, 10.0);
            assert!(pos.hidden <= pos.hover_in, "hidden above hover_in for w={}, p={}", w, p);
            assert!(pos.hover_in <= pos.open, "hover_in above open for w={}, p={}", w, p);
            assert_eq!(pos.open, 0.0);
        }
    }

    #[test]
    fn arrow_out_is_negated_width() {
        assert_eq!(arrow_out_pos(48.0), -48.0);
        assert_eq!(arrow_out_pos(0.0), 0.0);
    }

    #[test]
    fn centering_tracks_container_height() {
        assert_eq!(centered_top(600.0, 40.0), 280.0);
        // Late responsive-image resize: the next poll tick recenters.
        assert_eq!(centered_top(800.0, 40.0), 380.0);
    }

    #[test]
    fn measurement_falls_back_across_arrow_variants() {
        assert_eq!(first_measure(Some(48.0), Some(32.0)), 48.0);
        assert_eq!(first_measure(None, Some(32.0)), 32.0);
        assert_eq!(first_measure(Some(48.0), None), 48.0);
        assert_eq!(first_measure(None, None), 0.0);
    }
}
