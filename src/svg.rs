//!`svg`
//!
//! Describes the logo as an SVG document and parses it into a renderable tree.
use std::sync::Arc;

use resvg::usvg::{self, fontdb};

use crate::{
    design::{Glyph, Outline, Shape, CANVAS_SIZE, FONT_SIZE},
    fonts::ResolvedFont,
};

/// Writes the SVG document for the logo.
///
/// # Arguments
/// * `shapes`: The shapes to paint, in order.
/// * `glyphs`: The characters to draw over the shapes.
/// * `font`: The font to draw the characters with.
///
/// # Returns
/// A standalone SVG document the size of the canvas.
pub fn logo_document(shapes: &[Shape], glyphs: &[Glyph], font: &ResolvedFont) -> String {
    let mut document = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CANVAS_SIZE}" height="{CANVAS_SIZE}" viewBox="0 0 {CANVAS_SIZE} {CANVAS_SIZE}">"#
    );

    for shape in shapes {
        document.push_str(&shape_element(shape));
    }

    for glyph in glyphs {
        document.push_str(&glyph_element(glyph, font.font_family()));
    }

    document.push_str("</svg>");
    document
}

/// Writes a single shape as an SVG element.
///
/// # Arguments
/// * `shape`: The shape to write.
///
/// # Returns
/// A `rect` or `ellipse` element.
fn shape_element(shape: &Shape) -> String {
    let bounds = &shape.bounds;
    let fill = shape.fill.svg_rgb();
    let opacity = shape.fill.svg_opacity();

    match shape.outline {
        Outline::RoundedRectangle { radius } => format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{radius}" ry="{radius}" fill="{fill}" fill-opacity="{opacity}"/>"#,
            bounds.left,
            bounds.top,
            bounds.width(),
            bounds.height(),
        ),
        Outline::Ellipse => {
            let rx = bounds.width() / 2.0;
            let ry = bounds.height() / 2.0;
            format!(
                r#"<ellipse cx="{}" cy="{}" rx="{rx}" ry="{ry}" fill="{fill}" fill-opacity="{opacity}"/>"#,
                bounds.left + rx,
                bounds.top + ry,
            )
        }
    }
}

/// Writes a single glyph as a centred SVG `text` element.
///
/// # Arguments
/// * `glyph`: The glyph to write.
/// * `font_family`: Value for the `font-family` attribute.
///
/// # Returns
/// A `text` element anchored on the glyph's centre.
fn glyph_element(glyph: &Glyph, font_family: &str) -> String {
    format!(
        r#"<text x="{}" y="{}" font-family="{}" font-size="{FONT_SIZE}" text-anchor="middle" dominant-baseline="central" fill="{}" fill-opacity="{}">{}</text>"#,
        glyph.centre_x,
        glyph.centre_y,
        escape(font_family),
        glyph.fill.svg_rgb(),
        glyph.fill.svg_opacity(),
        escape(&glyph.character.to_string()),
    )
}

/// Escapes text for use in XML content or attribute values.
///
/// # Arguments
/// * `text`: The text to escape.
///
/// # Returns
/// The escaped text.
fn escape(text: &str) -> String {
    text.chars()
        .fold(String::with_capacity(text.len()), |mut escaped, c| {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&apos;"),
                c => escaped.push(c),
            }
            escaped
        })
}

/// Parses the logo document into a tree.
///
/// # Arguments
/// * `document`: The SVG document to parse.
/// * `fontdb`: Fonts available to the text in the document.
///
/// # Returns
/// The parsed SVG if it was successfully parsed, otherwise an error.
///
/// # Errors
/// Parsing errors if a tree cannot be parsed from the provided `document`.
pub fn parse_logo(document: &str, fontdb: fontdb::Database) -> Result<usvg::Tree, usvg::Error> {
    let options = usvg::Options {
        dpi: 96.0,
        font_size: FONT_SIZE,
        languages: vec!["en-GB".to_string()],
        fontdb: Arc::new(fontdb),
        ..usvg::Options::default()
    };

    usvg::Tree::from_str(document, &options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{LOGO_GLYPHS, LOGO_SHAPES};

    fn fallback() -> ResolvedFont {
        ResolvedFont::Fallback { family: None }
    }

    #[test]
    fn backdrop_is_a_rounded_rect() {
        let element = shape_element(&LOGO_SHAPES[0]);
        assert_eq!(
            element,
            r#"<rect x="10" y="10" width="237" height="237" rx="50" ry="50" fill="rgb(15,23,42)" fill-opacity="1.000"/>"#
        );
    }

    #[test]
    fn ellipses_are_inscribed_in_their_bounds() {
        let element = shape_element(&LOGO_SHAPES[1]);
        assert_eq!(
            element,
            r#"<ellipse cx="80.5" cy="120.5" rx="40.5" ry="70.5" fill="rgb(99,102,241)" fill-opacity="0.784"/>"#
        );
    }

    #[test]
    fn glyphs_are_centred() {
        let element = glyph_element(&LOGO_GLYPHS[0], "Segoe UI");
        assert!(element.contains(r#"x="128" y="115""#), "{element}");
        assert!(element.contains(r#"text-anchor="middle""#), "{element}");
        assert!(element.contains(r#"dominant-baseline="central""#), "{element}");
        assert!(element.ends_with(">S</text>"), "{element}");
    }

    #[test]
    fn font_family_is_escaped() {
        let element = glyph_element(&LOGO_GLYPHS[1], r#"Bad "Font" & Co"#);
        assert!(
            element.contains(r#"font-family="Bad &quot;Font&quot; &amp; Co""#),
            "{element}"
        );
    }

    #[test]
    fn document_parses_without_fonts() {
        let document = logo_document(&LOGO_SHAPES, &LOGO_GLYPHS, &fallback());
        assert_eq!(document.matches("<ellipse").count(), 3);
        assert_eq!(document.matches("<text").count(), 2);

        let tree = parse_logo(&document, fontdb::Database::new()).expect("document should parse");
        assert_eq!(tree.size().width(), 256.0);
        assert_eq!(tree.size().height(), 256.0);
    }
}
