//! Drawing export to vector and raster formats.
//!
//! The SVG document is the single source of truth: PNG output is produced by
//! rasterizing it with resvg/tiny-skia.

use std::fmt::Write;

use signature_core::{Drawing, StyleConfig};

use crate::error::{ExportError, ExportResult};

/// Export output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// SVG vector graphics (returns the SVG XML string as UTF-8 bytes).
    Svg,
    /// PNG image. Requires the `png` feature.
    Png,
}

/// Configuration for drawing export.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Scale factor applied to the surface size (e.g. 2.0 for retina).
    pub scale: f32,
    /// Paint the style's background color behind the strokes.
    pub include_background: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            include_background: true,
        }
    }
}

/// Exports a [`Drawing`] with its [`StyleConfig`].
#[derive(Debug, Clone, Default)]
pub struct SignatureExporter {
    config: ExportConfig,
}

impl SignatureExporter {
    /// Create a new exporter with the given configuration.
    #[must_use]
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Create an exporter with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ExportConfig::default())
    }

    /// Export a drawing to the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or style is invalid, the format
    /// is not compiled in, or encoding fails.
    pub fn export(
        &self,
        drawing: &Drawing,
        style: &StyleConfig,
        format: ExportFormat,
    ) -> ExportResult<Vec<u8>> {
        match format {
            ExportFormat::Svg => {
                let svg = self.render_to_svg(drawing, style)?;
                Ok(svg.into_bytes())
            }
            #[cfg(feature = "png")]
            ExportFormat::Png => self.render_to_png(drawing, style),
            #[cfg(not(feature = "png"))]
            ExportFormat::Png => Err(ExportError::Unsupported(
                "PNG export requires the `png` feature".to_string(),
            )),
        }
    }

    /// Export the drawing to an SVG document.
    ///
    /// One `<path>` is written per stroke. Taps without movement have no
    /// visible extent and are left out.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or style is invalid.
    pub fn render_to_svg(&self, drawing: &Drawing, style: &StyleConfig) -> ExportResult<String> {
        style.validate()?;
        let (out_w, out_h) = self.output_dimensions(style)?;

        let mut svg = String::with_capacity(256 + drawing.stroke_count() * 128);
        let _ = write!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{out_w}\" height=\"{out_h}\" viewBox=\"0 0 {} {}\">",
            style.width, style.height,
        );

        if self.config.include_background {
            let _ = write!(
                svg,
                "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
                escape_xml(&style.background_color),
            );
        }

        let stroke = escape_xml(&style.stroke_color);
        for path in drawing.paths().iter().filter(|p| p.curve_count() > 0) {
            let _ = write!(
                svg,
                "<path d=\"{path}\" fill=\"none\" stroke=\"{stroke}\" stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>",
                style.stroke_width,
            );
        }

        svg.push_str("</svg>");
        tracing::debug!(
            "Rendered {} strokes to SVG ({out_w}x{out_h})",
            drawing.stroke_count()
        );
        Ok(svg)
    }

    /// Export the drawing to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or encoding fails.
    #[cfg(feature = "png")]
    pub fn render_to_png(&self, drawing: &Drawing, style: &StyleConfig) -> ExportResult<Vec<u8>> {
        let svg_string = self.render_to_svg(drawing, style)?;
        let pixmap = Self::rasterize_svg(&svg_string)?;

        pixmap
            .encode_png()
            .map_err(|e| ExportError::Export(format!("PNG encoding failed: {e}")))
    }

    /// Output size in pixels: the surface size times the scale factor.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn output_dimensions(&self, style: &StyleConfig) -> ExportResult<(u32, u32)> {
        let scale = self.config.scale;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ExportError::InvalidConfig(format!(
                "scale must be a positive number, got {scale}"
            )));
        }
        let out_w = (style.width * scale).round() as u32;
        let out_h = (style.height * scale).round() as u32;
        Ok((out_w.max(1), out_h.max(1)))
    }

    /// Rasterize an SVG string to a tiny-skia Pixmap.
    #[cfg(feature = "png")]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn rasterize_svg(svg_string: &str) -> ExportResult<tiny_skia::Pixmap> {
        let opt = usvg::Options::default();
        let tree = usvg::Tree::from_str(svg_string, &opt)
            .map_err(|e| ExportError::Export(format!("SVG parsing failed: {e}")))?;

        let px_w = tree.size().width().round() as u32;
        let px_h = tree.size().height().round() as u32;

        let mut pixmap = tiny_skia::Pixmap::new(px_w.max(1), px_h.max(1))
            .ok_or_else(|| ExportError::Export("Failed to create pixmap".to_string()))?;

        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        Ok(pixmap)
    }
}

/// Escape special XML characters.
fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use signature_core::{CurvePath, Point};

    fn line(points: &[(f32, f32)]) -> CurvePath {
        let points: Vec<Point> = points.iter().copied().map(Point::from).collect();
        CurvePath::from_points(&points)
    }

    #[test]
    fn test_escape_xml_special_chars() {
        assert_eq!(escape_xml("a<b>c&d\"e'f"), "a&lt;b&gt;c&amp;d&quot;e&apos;f");
    }

    #[test]
    fn test_empty_drawing_is_background_only() {
        let exporter = SignatureExporter::with_defaults();
        let svg = exporter
            .render_to_svg(&Drawing::default(), &StyleConfig::default())
            .expect("svg");
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"300\" height=\"200\" viewBox=\"0 0 300 200\">"));
        assert!(svg.contains("<rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>"));
        assert!(!svg.contains("<path"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_strokes_carry_style() {
        let drawing = Drawing::new(vec![line(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)])]);
        let style = StyleConfig::default()
            .with_stroke_color("#ff0000")
            .with_stroke_width(4.5);
        let svg = SignatureExporter::with_defaults()
            .render_to_svg(&drawing, &style)
            .expect("svg");
        assert!(svg.contains(
            "<path d=\"M0,0 Q0,0 5,0 Q10,0 10,5\" fill=\"none\" stroke=\"#ff0000\" stroke-width=\"4.5\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>"
        ));
    }

    #[test]
    fn test_taps_are_not_rendered() {
        let drawing = Drawing::new(vec![line(&[(1.0, 1.0)]), line(&[(0.0, 0.0), (2.0, 2.0)])]);
        let svg = SignatureExporter::with_defaults()
            .render_to_svg(&drawing, &StyleConfig::default())
            .expect("svg");
        assert_eq!(svg.matches("<path").count(), 1);
        assert!(!svg.contains("d=\"M1,1\""));
    }

    #[test]
    fn test_background_can_be_omitted() {
        let exporter = SignatureExporter::new(ExportConfig {
            include_background: false,
            ..ExportConfig::default()
        });
        let svg = exporter
            .render_to_svg(&Drawing::default(), &StyleConfig::default())
            .expect("svg");
        assert!(!svg.contains("<rect"));
    }

    #[test]
    fn test_scale_multiplies_output_size_only() {
        let exporter = SignatureExporter::new(ExportConfig {
            scale: 2.0,
            ..ExportConfig::default()
        });
        let svg = exporter
            .render_to_svg(&Drawing::default(), &StyleConfig::default())
            .expect("svg");
        assert!(svg.contains("width=\"600\" height=\"400\" viewBox=\"0 0 300 200\""));
    }

    #[test]
    fn test_invalid_scale_is_rejected() {
        let exporter = SignatureExporter::new(ExportConfig {
            scale: 0.0,
            ..ExportConfig::default()
        });
        let result = exporter.render_to_svg(&Drawing::default(), &StyleConfig::default());
        assert!(matches!(result, Err(ExportError::InvalidConfig(_))));
    }

    #[test]
    fn test_invalid_style_is_rejected() {
        let style = StyleConfig::default().with_stroke_width(0.0);
        let result = SignatureExporter::with_defaults().render_to_svg(&Drawing::default(), &style);
        assert!(matches!(result, Err(ExportError::Style(_))));
    }

    #[test]
    fn test_colors_are_escaped() {
        let style = StyleConfig::default().with_stroke_color("\"><script>");
        let drawing = Drawing::new(vec![line(&[(0.0, 0.0), (2.0, 2.0)])]);
        let svg = SignatureExporter::with_defaults()
            .render_to_svg(&drawing, &style)
            .expect("svg");
        assert!(!svg.contains("<script>"));
        assert!(svg.contains("stroke=\"&quot;&gt;&lt;script&gt;\""));
    }
}
