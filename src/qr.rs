use qrcode::render::svg;
use qrcode::QrCode;
use std::fmt;

/// Rendered code footprint in pixels, shared by real codes and placeholders
/// so a failed item occupies the same grid cell.
pub const CODE_SIZE: u32 = 150;

#[derive(Debug)]
pub struct RenderError(pub String);

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Narrow rendering capability: text in, scannable image out. Keeps the
/// handlers independent of the concrete QR library.
pub trait CodeRenderer {
    fn render(&self, text: &str) -> Result<String, RenderError>;
}

/// Production renderer backed by the `qrcode` crate, producing a fixed-size
/// black-on-white SVG document.
#[derive(Debug, Default)]
pub struct SvgRenderer;

impl CodeRenderer for SvgRenderer {
    fn render(&self, text: &str) -> Result<String, RenderError> {
        let code = QrCode::new(text.as_bytes()).map_err(|e| RenderError(e.to_string()))?;
        Ok(code
            .render::<svg::Color>()
            .min_dimensions(CODE_SIZE, CODE_SIZE)
            .dark_color(svg::Color("#000000"))
            .light_color(svg::Color("#ffffff"))
            .build())
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Visible inline substitute for a code that failed to render. Never leave a
/// blank region: the rest of the batch stays usable around it.
pub fn error_placeholder(message: &str) -> String {
    format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" ",
            "width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">",
            "<rect width=\"{size}\" height=\"{size}\" fill=\"#ffffff\"/>",
            "<text x=\"50%\" y=\"50%\" text-anchor=\"middle\" ",
            "dominant-baseline=\"middle\" fill=\"#ef4444\" font-size=\"12\">",
            "{msg}</text></svg>"
        ),
        size = CODE_SIZE,
        msg = xml_escape(message),
    )
}
