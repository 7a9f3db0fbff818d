use super::{DIVIDER_WIDTH, HIGHLIGHT_ALPHA, HIGHLIGHT_PADDING, HIGHLIGHT_RADIUS, SIDE_MARGIN};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use palette::Srgba;
use spindle::WheelConfig;
use spindle::wheel::RowTransform;
use std::f64::consts::PI;

/// Where the wheel sits inside the widget allocation.
#[derive(Debug, Clone, Copy)]
pub struct WheelFrame {
    pub width: f64,
    pub top: f64,
    pub height: f64,
}

impl WheelFrame {
    pub fn new(width: f64, allocated_height: f64, wheel_height: f64) -> Self {
        Self {
            width,
            top: (allocated_height - wheel_height) / 2.0,
            height: wheel_height,
        }
    }

    /// Converts a widget y coordinate to wheel coordinates.
    pub fn to_wheel(&self, y: f64) -> f64 {
        y - self.top
    }

    fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

struct RowRenderer<'a, T> {
    row: &'a RowTransform<T>,
    text: String,
}

impl<'a, T> RowRenderer<'a, T> {
    fn new(row: &'a RowTransform<T>, text: String) -> Self {
        Self { row, text }
    }

    fn draw(
        &self,
        cr: &Context,
        frame: &WheelFrame,
        config: &WheelConfig,
        colors: &ThemeColors,
    ) -> Result<(), cairo::Error> {
        let scale = self.row.vertical_scale();
        if self.text.is_empty() || self.row.opacity <= 0.0 || scale <= 0.0 {
            return Ok(());
        }

        let weight = if config.font_weight.is_bold() {
            cairo::FontWeight::Bold
        } else {
            cairo::FontWeight::Normal
        };
        cr.select_font_face(&config.font_family, cairo::FontSlant::Normal, weight);
        cr.set_font_size(config.row_height);

        let ext = cr.text_extents(&self.text)?;
        let center_y = frame.top + self.row.center_y + self.row.depth_shift();

        cr.save()?;
        cr.translate(frame.width / 2.0, center_y);
        cr.scale(1.0, scale);
        set_source(cr, colors.text, self.row.opacity);
        cr.move_to(
            -ext.width() / 2.0 - ext.x_bearing(),
            -ext.y_bearing() - ext.height() / 2.0,
        );
        cr.show_text(&self.text)?;
        cr.restore()
    }
}

fn set_source(cr: &Context, color: Srgba<f64>, opacity: f64) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a * opacity);
}

fn rounded_rectangle(cr: &Context, x: f64, y: f64, width: f64, height: f64, radius: f64) {
    let radius = radius.min(width / 2.0).min(height / 2.0);
    cr.new_sub_path();
    cr.arc(x + width - radius, y + radius, radius, -PI / 2.0, 0.0);
    cr.arc(x + width - radius, y + height - radius, radius, 0.0, PI / 2.0);
    cr.arc(x + radius, y + height - radius, radius, PI / 2.0, PI);
    cr.arc(x + radius, y + radius, radius, PI, 3.0 * PI / 2.0);
    cr.close_path();
}

/// Rounded band behind the centre row marking the selected position.
pub fn draw_selected_background(
    cr: &Context,
    frame: &WheelFrame,
    config: &WheelConfig,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let height = config.row_height + HIGHLIGHT_PADDING;
    let y = frame.center_y() - height / 2.0;
    let width = (frame.width - SIDE_MARGIN * 2.0).max(0.0);

    set_source(cr, colors.selection, HIGHLIGHT_ALPHA);
    rounded_rectangle(cr, SIDE_MARGIN, y, width, height, HIGHLIGHT_RADIUS);
    cr.fill()?;

    if config.show_divider {
        set_source(cr, colors.divider, 1.0);
        cr.set_line_width(DIVIDER_WIDTH);
        for line_y in [y, y + height] {
            cr.move_to(SIDE_MARGIN, line_y);
            cr.line_to(SIDE_MARGIN + width, line_y);
        }
        cr.stroke()?;
    }
    Ok(())
}

pub fn draw<T>(
    cr: &Context,
    rows: &[RowTransform<T>],
    frame: &WheelFrame,
    config: &WheelConfig,
    colors: &ThemeColors,
    label: impl Fn(Option<&T>) -> String,
) -> Result<(), cairo::Error> {
    cr.save()?;
    cr.rectangle(0.0, frame.top, frame.width, frame.height);
    cr.clip();

    draw_selected_background(cr, frame, config, colors)?;
    for row in rows {
        RowRenderer::new(row, label(row.item.as_ref())).draw(cr, frame, config, colors)?;
    }
    cr.restore()
}
