//! Rasterize a frame's display list to a PNG.
//!
//! A debugging aid for the headless demo: rectangles are filled and
//! outlined exactly; text is drawn as a placeholder bar of its measured
//! width, which is enough to eyeball layout and the scrollbar.

use std::path::Path;

use image::{Rgba, RgbaImage};
use opsdeck_ui::text_metrics::measure_text;
use opsdeck_ui::{Bounds, Color, DrawCommand};

use crate::error::AppError;

fn to_rgba(color: Color) -> Rgba<u8> {
    Rgba([
        (color.r.clamp(0.0, 1.0) * 255.0) as u8,
        (color.g.clamp(0.0, 1.0) * 255.0) as u8,
        (color.b.clamp(0.0, 1.0) * 255.0) as u8,
        255,
    ])
}

/// Alpha-blend `color` over the existing pixel.
fn blend(image: &mut RgbaImage, x: u32, y: u32, color: Color) {
    let Rgba([r, g, b, _]) = to_rgba(color);
    let under = image.get_pixel(x, y).0;
    let a = color.a.clamp(0.0, 1.0);
    let mix = |top: u8, bottom: u8| (top as f32 * a + bottom as f32 * (1.0 - a)) as u8;
    image.put_pixel(
        x,
        y,
        Rgba([mix(r, under[0]), mix(g, under[1]), mix(b, under[2]), 255]),
    );
}

fn fill(image: &mut RgbaImage, bounds: Bounds, color: Color) {
    let (width, height) = image.dimensions();
    let x0 = bounds.x.max(0.0) as u32;
    let y0 = bounds.y.max(0.0) as u32;
    let x1 = (bounds.right().max(0.0) as u32).min(width);
    let y1 = (bounds.bottom().max(0.0) as u32).min(height);
    for y in y0..y1 {
        for x in x0..x1 {
            blend(image, x, y, color);
        }
    }
}

fn stroke(image: &mut RgbaImage, bounds: Bounds, color: Color, width: f32) {
    let w = width.max(1.0);
    fill(image, Bounds::new(bounds.x, bounds.y, bounds.width, w), color);
    fill(
        image,
        Bounds::new(bounds.x, bounds.bottom() - w, bounds.width, w),
        color,
    );
    fill(image, Bounds::new(bounds.x, bounds.y, w, bounds.height), color);
    fill(
        image,
        Bounds::new(bounds.right() - w, bounds.y, w, bounds.height),
        color,
    );
}

/// Rasterize `commands` into an image of the given dimensions.
pub fn render_to_image(commands: &[DrawCommand], width: u32, height: u32) -> RgbaImage {
    let mut image = RgbaImage::new(width, height);
    for command in commands {
        match command {
            DrawCommand::FillRect { bounds, color } => fill(&mut image, *bounds, *color),
            DrawCommand::StrokeRect {
                bounds,
                color,
                width,
            } => stroke(&mut image, *bounds, *color, *width),
            DrawCommand::Text {
                content,
                position,
                size,
                color,
            } => {
                let measured = measure_text(content, *size);
                // Placeholder bar roughly where the glyphs would sit.
                let bar = Bounds::new(
                    position.x,
                    position.y + size * 0.35,
                    measured.width,
                    size * 0.45,
                );
                fill(&mut image, bar, color.with_alpha(color.a * 0.8));
            }
        }
    }
    image
}

/// Rasterize and write a PNG.
pub fn save_png(
    path: impl AsRef<Path>,
    commands: &[DrawCommand],
    width: u32,
    height: u32,
) -> Result<(), AppError> {
    let image = render_to_image(commands, width, height);
    image.save(path.as_ref())?;
    log::info!("wrote snapshot to {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsdeck_ui::Point;

    #[test]
    fn test_fill_rect_colors_pixels() {
        let commands = vec![DrawCommand::FillRect {
            bounds: Bounds::new(2.0, 2.0, 4.0, 4.0),
            color: Color::rgb(1.0, 0.0, 0.0),
        }];
        let image = render_to_image(&commands, 10, 10);
        assert_eq!(image.get_pixel(3, 3).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_out_of_bounds_rect_is_clipped() {
        let commands = vec![DrawCommand::FillRect {
            bounds: Bounds::new(-5.0, -5.0, 100.0, 100.0),
            color: Color::WHITE,
        }];
        let image = render_to_image(&commands, 8, 8);
        assert_eq!(image.get_pixel(7, 7).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_text_leaves_a_bar() {
        let commands = vec![DrawCommand::Text {
            content: "hello".to_string(),
            position: Point::new(0.0, 0.0),
            size: 14.0,
            color: Color::WHITE,
        }];
        let image = render_to_image(&commands, 50, 20);
        // Somewhere inside the bar region a pixel is lit.
        assert!(image.pixels().any(|p| p.0[0] > 0));
    }
}
