use crate::domain::model::{ReferenceDataset, ReferencePoint};
use crate::utils::error::{AppError, Result};
use base64::engine::general_purpose;
use base64::Engine;
use image::{ImageFormat, RgbImage};
use plotters::prelude::*;
use plotters::style::register_font;
use std::io::Cursor;
use std::ops::Range;
use std::sync::OnceLock;

pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 400;

// plotters cannot lay out mesh keys for axes wider than this.
const MAX_AXIS_SPAN: f64 = f64::MAX / 1e6;

const FONT_FAMILY: &str = "sans-serif";
static FONT_BYTES: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
static FONT_REGISTRATION: OnceLock<std::result::Result<(), String>> = OnceLock::new();

fn chart_error<E: std::fmt::Display>(err: E) -> AppError {
    AppError::ChartError {
        message: err.to_string(),
    }
}

// plotters keeps registered fonts in a process-wide table; register once.
fn ensure_font_registered() -> Result<()> {
    FONT_REGISTRATION
        .get_or_init(|| {
            register_font(FONT_FAMILY, FontStyle::Normal, FONT_BYTES)
                .map_err(|_| "bundled chart font could not be parsed".to_string())
        })
        .clone()
        .map_err(|message| AppError::ChartError { message })
}

/// Axis range covering every value with 10% padding on both sides.
///
/// Fails when a value or padded bound is not finite, or when the padded
/// span is too wide to draw.
fn padded_range(values: impl Iterator<Item = f64>) -> Result<Range<f64>> {
    let mut bounds: Option<(f64, f64)> = None;
    for v in values {
        if !v.is_finite() {
            return Err(chart_error(format!("axis value {v} is not finite")));
        }
        bounds = Some(match bounds {
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
            None => (v, v),
        });
    }
    let Some((min, max)) = bounds else {
        return Ok(0.0..1.0);
    };

    let span = max - min;
    let pad = if span > 0.0 {
        span * 0.1
    } else {
        (max.abs() * 0.1).max(1.0)
    };
    let (start, end) = (min - pad, max + pad);
    if !start.is_finite() || !end.is_finite() || end - start > MAX_AXIS_SPAN {
        return Err(chart_error(format!(
            "axis range {start:e}..{end:e} is too wide to draw"
        )));
    }
    Ok(start..end)
}

/// Scatter chart of the reference dataset with the new prediction highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartRenderer {
    width: u32,
    height: u32,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl ChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Renders the chart and returns the encoded PNG bytes.
    ///
    /// The pixel buffer is owned by this call and dropped once encoded, so
    /// concurrent renders never share drawing state.
    pub fn render_png(
        &self,
        dataset: &ReferenceDataset,
        prediction: ReferencePoint,
    ) -> Result<Vec<u8>> {
        let points = dataset.points();
        let x_range = padded_range(
            points
                .iter()
                .map(|p| p.area)
                .chain(std::iter::once(prediction.area)),
        )?;
        let y_range = padded_range(
            points
                .iter()
                .map(|p| p.price)
                .chain(std::iter::once(prediction.price)),
        )?;

        ensure_font_registered()?;

        let (width, height) = self.dimensions();
        let mut pixels = vec![0u8; width as usize * height as usize * 3];
        {
            let root =
                BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(chart_error)?;

            let mut chart = ChartBuilder::on(&root)
                .margin(15)
                .x_label_area_size(40)
                .y_label_area_size(80)
                .build_cartesian_2d(x_range, y_range)
                .map_err(chart_error)?;

            chart
                .configure_mesh()
                .x_desc("Area (sqft)")
                .y_desc("Price")
                .x_label_formatter(&|v| format!("{:.0}", v))
                .y_label_formatter(&|v| format!("{:.0}", v))
                .draw()
                .map_err(chart_error)?;

            chart
                .draw_series(
                    points
                        .iter()
                        .map(|p| Cross::new((p.area, p.price), 6, RED.stroke_width(2))),
                )
                .map_err(chart_error)?
                .label("Dataset")
                .legend(|(x, y)| Cross::new((x, y), 5, RED.stroke_width(2)));

            chart
                .draw_series(std::iter::once(Circle::new(
                    (prediction.area, prediction.price),
                    10,
                    BLUE.filled(),
                )))
                .map_err(chart_error)?
                .label("Your Prediction")
                .legend(|(x, y)| Circle::new((x, y), 5, BLUE.filled()));

            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()
                .map_err(chart_error)?;

            root.present().map_err(chart_error)?;
        }

        encode_png(pixels, width, height)
    }

    /// Same as [`render_png`](Self::render_png), base64-encoded for a `data:` URI.
    pub fn render_base64(
        &self,
        dataset: &ReferenceDataset,
        prediction: ReferencePoint,
    ) -> Result<String> {
        let png = self.render_png(dataset, prediction)?;
        Ok(general_purpose::STANDARD.encode(png))
    }
}

fn encode_png(pixels: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>> {
    let image = RgbImage::from_raw(width, height, pixels).ok_or_else(|| AppError::ChartError {
        message: "pixel buffer does not match chart dimensions".to_string(),
    })?;

    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(chart_error)?;
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> ReferenceDataset {
        ReferenceDataset::new(vec![
            ReferencePoint {
                area: 2600.0,
                price: 550000.0,
            },
            ReferencePoint {
                area: 3000.0,
                price: 565000.0,
            },
            ReferencePoint {
                area: 4100.0,
                price: 810000.0,
            },
        ])
    }

    fn count_pixels(chart: &RgbImage, predicate: impl Fn(&image::Rgb<u8>) -> bool) -> usize {
        chart.pixels().filter(|p| predicate(*p)).count()
    }

    #[test]
    fn test_padded_range() {
        let range = padded_range([100.0, 200.0].into_iter()).unwrap();
        assert_eq!(range, 90.0..210.0);

        let flat = padded_range([500.0].into_iter()).unwrap();
        assert_eq!(flat, 450.0..550.0);

        let empty = padded_range(std::iter::empty()).unwrap();
        assert_eq!(empty, 0.0..1.0);
    }

    #[test]
    fn test_padded_range_rejects_undrawable_axes() {
        let too_wide = padded_range([2600.0, 1.5e306].into_iter());
        assert!(matches!(too_wide, Err(AppError::ChartError { .. })));

        let overflow = padded_range([-1.7e308, 1.7e308].into_iter());
        assert!(matches!(overflow, Err(AppError::ChartError { .. })));

        let not_finite = padded_range([1.0, f64::NAN].into_iter());
        assert!(matches!(not_finite, Err(AppError::ChartError { .. })));

        assert!(padded_range([0.0, 1e12].into_iter()).is_ok());
    }

    #[test]
    fn test_huge_prediction_fails_instead_of_drawing() {
        let renderer = ChartRenderer::default();
        let prediction = ReferencePoint {
            area: 1.5e306,
            price: 1.68e308,
        };
        let result = renderer.render_png(&sample_dataset(), prediction);
        assert!(matches!(result, Err(AppError::ChartError { .. })));
    }

    #[test]
    fn test_render_png_has_both_series() {
        let renderer = ChartRenderer::default();
        let prediction = ReferencePoint {
            area: 3300.0,
            price: 640000.0,
        };
        let png = renderer.render_png(&sample_dataset(), prediction).unwrap();

        let decoded = image::load_from_memory_with_format(&png, ImageFormat::Png)
            .unwrap()
            .to_rgb8();
        assert_eq!(decoded.dimensions(), (DEFAULT_WIDTH, DEFAULT_HEIGHT));

        let red = count_pixels(&decoded, |p| p[0] > 200 && p[1] < 80 && p[2] < 80);
        let blue = count_pixels(&decoded, |p| p[2] > 200 && p[0] < 80 && p[1] < 80);
        assert!(red > 0, "dataset markers should be drawn in red");
        assert!(blue > 0, "prediction marker should be drawn in blue");
    }

    #[test]
    fn test_prediction_outside_dataset_range() {
        let renderer = ChartRenderer::new(320, 240);
        let prediction = ReferencePoint {
            area: 100.0,
            price: -50000.0,
        };
        let png = renderer.render_png(&sample_dataset(), prediction).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), 320);
        assert_eq!(decoded.height(), 240);
    }

    #[test]
    fn test_render_base64_decodes_to_png() {
        let renderer = ChartRenderer::default();
        let prediction = ReferencePoint {
            area: 3000.0,
            price: 600000.0,
        };
        let encoded = renderer.render_base64(&sample_dataset(), prediction).unwrap();
        let bytes = general_purpose::STANDARD.decode(encoded).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
