use super::{ANCHOR_DEPTH, DEGREES_PER_ROW, ROW_COUNT, ROW_SPACING};

/// Angle of a row when the wheel is at rest, -72..=72 degrees. The centre row
/// faces the viewer at 0.
pub fn nominal_degrees(row: usize) -> f64 {
    (row + 1) as f64 * DEGREES_PER_ROW - 90.0
}

/// Wheel angle within the current 18 degree cell, keeping the sign of `degrees`.
pub fn cell_remainder(degrees: f64) -> f64 {
    degrees % DEGREES_PER_ROW
}

fn tilt(row: usize, degrees: f64) -> f64 {
    nominal_degrees(row) + cell_remainder(degrees)
}

pub fn rotation_degrees(row: usize, degrees: f64) -> f64 {
    (360.0 + tilt(row, degrees)) % 360.0
}

/// Rows flatten towards zero height as they tilt towards the horizon.
pub fn row_height(row: usize, degrees: f64, font_size: f64) -> f64 {
    let ratio = (90.0 - tilt(row, degrees).abs()) / 90.0;
    (font_size * ratio).max(0.0)
}

pub fn opacity(row: usize, degrees: f64) -> f64 {
    let tilt = tilt(row, degrees).abs();
    if tilt < 20.0 {
        1.0 - tilt / 40.0
    } else {
        ((90.0 - tilt) / 140.0).max(0.0)
    }
}

fn total_height(degrees: f64, font_size: f64) -> f64 {
    (0..ROW_COUNT)
        .map(|row| row_height(row, degrees, font_size))
        .sum()
}

/// Vertical shift that keeps the centre row centred while neighbouring rows
/// shrink or grow between stops.
pub fn layout_offset(translation: f64, degrees: f64, font_size: f64) -> f64 {
    let difference = total_height(0.0, font_size) - total_height(degrees, font_size);
    difference * if translation > 0.0 { 2.0 } else { -2.0 }
}

/// Everything needed to paint one of the nine visible rows.
#[derive(Debug, Clone, PartialEq)]
pub struct RowTransform<T> {
    pub row: usize,
    pub item: Option<T>,
    pub rotation_degrees: f64,
    pub height: f64,
    pub opacity: f64,
    /// Centre of the row's layout slot, in wheel coordinates.
    pub center_y: f64,
}

impl<T> RowTransform<T> {
    /// Orthographic projection of the row rotated about the horizontal axis.
    pub fn vertical_scale(&self) -> f64 {
        self.rotation_degrees.to_radians().cos()
    }

    /// How far the rotation about the recessed anchor moves the row's content.
    pub fn depth_shift(&self) -> f64 {
        ANCHOR_DEPTH * self.rotation_degrees.to_radians().sin()
    }

    pub fn contains(&self, y: f64) -> bool {
        (y - self.center_y).abs() <= (self.height + ROW_SPACING) / 2.0
    }
}

/// Stacks the nine rows vertically inside a wheel of `wheel_height`, centred
/// like a vertical stack in a fixed frame.
pub fn stack<T>(
    items: impl IntoIterator<Item = Option<T>>,
    translation: f64,
    degrees: f64,
    wheel_height: f64,
    font_size: f64,
) -> Vec<RowTransform<T>> {
    let heights: Vec<f64> = (0..ROW_COUNT)
        .map(|row| row_height(row, degrees, font_size))
        .collect();
    let content_height = heights.iter().sum::<f64>() + ROW_SPACING * (ROW_COUNT - 1) as f64;
    let mut top =
        (wheel_height - content_height) / 2.0 + layout_offset(translation, degrees, font_size);

    items
        .into_iter()
        .take(ROW_COUNT)
        .enumerate()
        .map(|(row, item)| {
            let height = heights[row];
            let transform = RowTransform {
                row,
                item,
                rotation_degrees: rotation_degrees(row, degrees),
                height,
                opacity: opacity(row, degrees),
                center_y: top + height / 2.0,
            };
            top += height + ROW_SPACING;
            transform
        })
        .collect()
}

pub fn row_at<T>(rows: &[RowTransform<T>], y: f64) -> Option<usize> {
    rows.iter()
        .filter(|r| r.contains(y))
        .min_by(|a, b| {
            (a.center_y - y)
                .abs()
                .total_cmp(&(b.center_y - y).abs())
        })
        .map(|r| r.row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::CENTER_ROW;

    const FONT: f64 = 40.0;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_nominal_angles_span_the_front_half() {
        assert_eq!(nominal_degrees(0), -72.0);
        assert_eq!(nominal_degrees(CENTER_ROW), 0.0);
        assert_eq!(nominal_degrees(8), 72.0);
    }

    #[test]
    fn test_center_row_at_rest() {
        assert_eq!(rotation_degrees(CENTER_ROW, 0.0), 0.0);
        assert_eq!(row_height(CENTER_ROW, 0.0, FONT), FONT);
        assert_eq!(opacity(CENTER_ROW, 0.0), 1.0);
    }

    #[test]
    fn test_edge_rows_compress_and_fade() {
        assert!(approx(row_height(0, 0.0, FONT), FONT * 0.2));
        assert!(approx(opacity(0, 0.0), 18.0 / 140.0));
        assert!(approx(rotation_degrees(0, 0.0), 288.0));
        // row 8 tilted to the horizon
        assert!(approx(row_height(8, 17.999_999_999, FONT), 0.0));
        assert!(opacity(8, 17.999_999_999) >= 0.0);
    }

    #[test]
    fn test_only_cell_remainder_affects_transforms() {
        for row in 0..ROW_COUNT {
            assert!(approx(
                rotation_degrees(row, 5.0),
                rotation_degrees(row, 5.0 + 3.0 * DEGREES_PER_ROW)
            ));
            assert!(approx(
                row_height(row, -7.0, FONT),
                row_height(row, -7.0 - DEGREES_PER_ROW, FONT)
            ));
        }
    }

    #[test]
    fn test_opacity_is_continuous_at_threshold() {
        let near = 1.0 - 20.0 / 40.0;
        let far = (90.0 - 20.0) / 140.0;
        assert!(approx(near, far));
    }

    #[test]
    fn test_stack_centres_middle_row_at_rest() {
        let rows = stack((0..ROW_COUNT).map(Some), 0.0, 0.0, 300.0, FONT);
        assert_eq!(rows.len(), ROW_COUNT);
        assert!(approx(rows[CENTER_ROW].center_y, 150.0));
        assert_eq!(row_at(&rows, 150.0), Some(CENTER_ROW));
        assert_eq!(row_at(&rows, rows[6].center_y), Some(6));
        assert_eq!(row_at(&rows, -500.0), None);
    }

    #[test]
    fn test_layout_offset_zero_at_rest() {
        assert_eq!(layout_offset(0.0, 0.0, FONT), 0.0);
        let down = layout_offset(10.0, 6.0, FONT);
        let up = layout_offset(-10.0, -6.0, FONT);
        assert!(down.is_finite() && up.is_finite());
    }
}
