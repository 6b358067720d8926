//! Element implementations built on top of `genpdf` primitives.
//!
//! This module adds the pieces the upstream crate does not ship with: a
//! full-width filled banner cell, and a helper that places the logo at a fixed
//! width while keeping its aspect ratio.

use image::GenericImageView;

use genpdf::elements::Image;
use genpdf::error::Error;
use genpdf::style::{Color, Style};
use genpdf::{render, Element, Mm, Position, RenderResult, Scale, Size};

const DEFAULT_IMAGE_DPI: f64 = 300.0;
const MM_PER_INCH: f64 = 25.4;
/// Vertical spacing of the strokes that build up the banner fill.
const FILL_STROKE_STEP_MM: f64 = 0.25;
/// Horizontal inset of the banner text from the left edge of the cell.
const BANNER_TEXT_INSET_MM: f64 = 2.0;

fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

fn mm_to_f64(value: Mm) -> f64 {
    let mm: printpdf::Mm = value.into();
    mm.0
}

fn estimated_image_size(image: &image::DynamicImage, dpi: f64) -> Size {
    let (px_width, px_height) = image.dimensions();
    let width_mm = MM_PER_INCH * (px_width as f64) / dpi;
    let height_mm = MM_PER_INCH * (px_height as f64) / dpi;
    Size::new(mm_from_f64(width_mm), mm_from_f64(height_mm))
}

/// Converts a decoded logo into a `genpdf` image scaled to `width_mm` while
/// preserving the aspect ratio.
pub fn scaled_logo(logo: image::DynamicImage, width_mm: f64) -> Result<Image, Error> {
    let natural = estimated_image_size(&logo, DEFAULT_IMAGE_DPI);
    let mut image = Image::from_dynamic_image(logo)?;
    let natural_width = mm_to_f64(natural.width);
    if natural_width > f64::EPSILON {
        let scale = width_mm / natural_width;
        image.set_scale(Scale::new(scale, scale));
    }
    Ok(image)
}

/// A full-width filled cell with a single line of text on top of the fill.
///
/// The cell always spans the complete width of the area it is rendered into,
/// which inside a page decorator is exactly the printable width (page width
/// minus the configured margins).  The fill is painted as a stack of closely
/// spaced horizontal strokes since the render area only exposes line drawing.
pub struct BannerCell {
    text: String,
    fill: Color,
    text_color: Color,
    height: Mm,
    font_size: u8,
}

impl BannerCell {
    /// Creates a banner with the given text and fill color.
    pub fn new(text: impl Into<String>, fill: Color, height_mm: f64) -> Self {
        Self {
            text: text.into(),
            fill,
            text_color: Color::Rgb(255, 255, 255),
            height: mm_from_f64(height_mm),
            font_size: 16,
        }
    }

    /// Sets the text color and returns the updated banner.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Sets the font size and returns the updated banner.
    pub fn with_font_size(mut self, font_size: u8) -> Self {
        self.font_size = font_size;
        self
    }

    /// Returns the text rendered inside the cell.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Element for BannerCell {
    fn render(
        &mut self,
        context: &genpdf::Context,
        mut area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let mut result = RenderResult::default();
        if self.height > area.size().height {
            result.has_more = true;
            return Ok(result);
        }

        let width = area.size().width;
        let fill_style = Style::new().with_color(self.fill);
        let height = mm_to_f64(self.height);
        let strokes = (height / FILL_STROKE_STEP_MM).ceil() as u32;
        for index in 0..=strokes {
            let y = mm_from_f64((index as f64 * FILL_STROKE_STEP_MM).min(height));
            area.draw_line(
                vec![Position::new(0, y), Position::new(width, y)],
                fill_style,
            );
        }

        let text_style = style.and(
            Style::new()
                .with_color(self.text_color)
                .with_font_size(self.font_size),
        );
        let line_height = text_style.line_height(&context.font_cache);
        let text_top = if line_height < self.height {
            (self.height - line_height) / 2.0
        } else {
            Mm::default()
        };
        let inset = mm_from_f64(BANNER_TEXT_INSET_MM);

        if let Some(mut section) =
            area.text_section(&context.font_cache, Position::new(inset, text_top), text_style)
        {
            section.print_str(&self.text, text_style)?;
        } else {
            result.has_more = true;
            return Ok(result);
        }

        result.size = Size::new(width, self.height);
        area.add_offset(Position::new(0, self.height));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_keeps_its_text_and_fill() {
        let banner = BannerCell::new("RED - infected", Color::Rgb(220, 53, 69), 10.0);
        assert_eq!(banner.text(), "RED - infected");
        assert_eq!(banner.fill, Color::Rgb(220, 53, 69));
        assert_eq!(banner.text_color, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn logo_scaling_survives_degenerate_input() {
        let logo = image::DynamicImage::new_rgb8(1, 1);
        assert!(scaled_logo(logo, 14.0).is_ok());
    }
}
