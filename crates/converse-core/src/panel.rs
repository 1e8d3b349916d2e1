//! Input panel geometry
//!
//! The chat input panel is resized by dragging its top edge. Height is
//! measured from the panel's bottom edge up to the pointer, and bounded
//! so the panel can neither collapse nor swallow the message list.

/// Smallest allowed input panel height, in pixels.
pub const MIN_INPUT_HEIGHT: f64 = 60.0;

/// Largest allowed input panel height, in pixels.
pub const MAX_INPUT_HEIGHT: f64 = 400.0;

/// Height before the user has ever dragged the handle.
pub const DEFAULT_INPUT_HEIGHT: f64 = 120.0;

/// Panel height for a drag pointer position.
///
/// `panel_bottom` is the y coordinate of the panel's bottom edge and
/// `pointer_y` the current pointer position, both in client pixels.
/// Returns `None` when the computed height falls outside
/// `[MIN_INPUT_HEIGHT, MAX_INPUT_HEIGHT]`; the caller skips the update
/// rather than clamping, so the handle does not stick to the bound
/// while the pointer keeps moving away.
pub fn resize_height(panel_bottom: f64, pointer_y: f64) -> Option<f64> {
    let height = panel_bottom - pointer_y;
    if (MIN_INPUT_HEIGHT..=MAX_INPUT_HEIGHT).contains(&height) {
        Some(height)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_within_bounds_applies() {
        assert_eq!(resize_height(900.0, 780.0), Some(120.0));
        assert_eq!(resize_height(900.0, 840.0), Some(60.0));
        assert_eq!(resize_height(900.0, 500.0), Some(400.0));
    }

    #[test]
    fn test_too_small_is_skipped() {
        assert_eq!(resize_height(900.0, 860.0), None);
        // Pointer below the panel bottom gives a negative height.
        assert_eq!(resize_height(900.0, 950.0), None);
    }

    #[test]
    fn test_too_large_is_skipped() {
        assert_eq!(resize_height(900.0, 400.0), None);
    }

    #[test]
    fn test_never_outside_bounds() {
        for y in (0..1200).map(f64::from) {
            if let Some(h) = resize_height(900.0, y) {
                assert!((MIN_INPUT_HEIGHT..=MAX_INPUT_HEIGHT).contains(&h));
            }
        }
    }
}
