//! `design`
//!
//! The literal geometry and colours that make up the logo.

/// An RGBA colour, non-premultiplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colour(pub [u8; 4]);

impl Colour {
    /// Gets the colour as an SVG `rgb()` string, alpha is handled separately.
    ///
    /// # Returns
    /// The red, green and blue components formatted for an SVG paint attribute.
    pub fn svg_rgb(self) -> String {
        let [r, g, b, _] = self.0;
        format!("rgb({r},{g},{b})")
    }

    /// Gets the alpha of the colour as an SVG opacity in the range 0..=1.
    ///
    /// # Returns
    /// The opacity, rounded to three decimal places.
    pub fn svg_opacity(self) -> String {
        format!("{:.3}", f32::from(self.0[3]) / 255.0)
    }
}

/// An inclusive pixel bounding box, so `left: 10, right: 246` covers 237 pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Leftmost covered pixel column.
    pub left: f32,
    /// Topmost covered pixel row.
    pub top: f32,
    /// Rightmost covered pixel column.
    pub right: f32,
    /// Bottommost covered pixel row.
    pub bottom: f32,
}

impl Bounds {
    /// Width of the box in pixels.
    pub fn width(&self) -> f32 {
        self.right - self.left + 1.0
    }

    /// Height of the box in pixels.
    pub fn height(&self) -> f32 {
        self.bottom - self.top + 1.0
    }

    /// Checks the box lies entirely within a square canvas.
    ///
    /// # Arguments
    /// * `size`: The width and height of the canvas in pixels.
    ///
    /// # Returns
    /// `true` if every covered pixel is on the canvas.
    pub fn fits_within(&self, size: f32) -> bool {
        self.left >= 0.0
            && self.top >= 0.0
            && self.right < size
            && self.bottom < size
            && self.left <= self.right
            && self.top <= self.bottom
    }
}

/// The outline of a filled shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outline {
    /// A rectangle with arc-rounded corners.
    RoundedRectangle {
        /// Radius of each corner in pixels.
        radius: f32,
    },
    /// An ellipse inscribed in the bounding box.
    Ellipse,
}

/// A filled shape. Shapes are painted in order, later ones blended over earlier ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    /// What the shape looks like.
    pub outline: Outline,
    /// Where the shape is.
    pub bounds: Bounds,
    /// What the shape is filled with.
    pub fill: Colour,
}

/// A single character drawn centred on a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    /// The character to draw.
    pub character: char,
    /// Horizontal centre in pixels.
    pub centre_x: f32,
    /// Vertical centre in pixels, measured between ascender and descender.
    pub centre_y: f32,
    /// Text colour.
    pub fill: Colour,
}

/// Width and height of the canvas in pixels.
pub const CANVAS_SIZE: u32 = 256;

/// What unpainted pixels are left as. Slate 900, fully transparent.
pub const CANVAS_BASE_COLOUR: Colour = Colour([15, 23, 42, 0]);

/// Slate 900, the backdrop colour.
pub const BACKDROP_COLOUR: Colour = Colour([15, 23, 42, 255]);

/// Indigo, used for the left hemisphere.
const INDIGO: [u8; 3] = [99, 102, 241];
/// Pink, used for the right hemisphere.
const PINK: [u8; 3] = [236, 72, 153];
/// Opacity of the two hemispheres.
const HEMISPHERE_ALPHA: u8 = 200;
/// Opacity of the connector.
const CONNECTOR_ALPHA: u8 = 180;

/// Colour of the lettering.
pub const TEXT_COLOUR: Colour = Colour([255, 255, 255, 255]);

/// Point size the lettering is drawn at.
pub const FONT_SIZE: f32 = 130.0;

/// Every shape in the logo, in paint order.
pub const LOGO_SHAPES: [Shape; 4] = [
    // Backdrop
    Shape {
        outline: Outline::RoundedRectangle { radius: 50.0 },
        bounds: Bounds {
            left: 10.0,
            top: 10.0,
            right: 246.0,
            bottom: 246.0,
        },
        fill: BACKDROP_COLOUR,
    },
    // Left hemisphere
    Shape {
        outline: Outline::Ellipse,
        bounds: Bounds {
            left: 40.0,
            top: 50.0,
            right: 120.0,
            bottom: 190.0,
        },
        fill: Colour([INDIGO[0], INDIGO[1], INDIGO[2], HEMISPHERE_ALPHA]),
    },
    // Right hemisphere
    Shape {
        outline: Outline::Ellipse,
        bounds: Bounds {
            left: 136.0,
            top: 50.0,
            right: 216.0,
            bottom: 190.0,
        },
        fill: Colour([PINK[0], PINK[1], PINK[2], HEMISPHERE_ALPHA]),
    },
    // Connector
    Shape {
        outline: Outline::Ellipse,
        bounds: Bounds {
            left: 90.0,
            top: 40.0,
            right: 166.0,
            bottom: 210.0,
        },
        fill: Colour([INDIGO[0], INDIGO[1], INDIGO[2], CONNECTOR_ALPHA]),
    },
];

/// The "S" and "T" of `StudyTracker`.
pub const LOGO_GLYPHS: [Glyph; 2] = [
    Glyph {
        character: 'S',
        centre_x: 128.0,
        centre_y: 115.0,
        fill: TEXT_COLOUR,
    },
    Glyph {
        character: 'T',
        centre_x: 128.0,
        centre_y: 150.0,
        fill: TEXT_COLOUR,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let backdrop = LOGO_SHAPES[0].bounds;
        assert_eq!(backdrop.width(), 237.0);
        assert_eq!(backdrop.height(), 237.0);
    }

    #[test]
    fn everything_is_on_the_canvas() {
        #[allow(clippy::cast_precision_loss)]
        let size = CANVAS_SIZE as f32;
        for shape in &LOGO_SHAPES {
            assert!(shape.bounds.fits_within(size), "{shape:?} is off the canvas");
        }
        for glyph in &LOGO_GLYPHS {
            assert!(
                (0.0..size).contains(&glyph.centre_x) && (0.0..size).contains(&glyph.centre_y),
                "{glyph:?} is off the canvas"
            );
        }
    }

    #[test]
    fn backdrop_is_painted_first_and_opaque() {
        assert_eq!(LOGO_SHAPES[0].fill, BACKDROP_COLOUR);
        assert_eq!(BACKDROP_COLOUR.0[3], 255);
        assert!(
            LOGO_SHAPES[1..].iter().all(|shape| shape.fill.0[3] < 255),
            "hemispheres and connector should be translucent"
        );
    }

    #[test]
    fn svg_colour_strings() {
        let hemisphere = LOGO_SHAPES[1].fill;
        assert_eq!(hemisphere.svg_rgb(), "rgb(99,102,241)");
        assert_eq!(hemisphere.svg_opacity(), "0.784");
        assert_eq!(TEXT_COLOUR.svg_opacity(), "1.000");
    }
}
