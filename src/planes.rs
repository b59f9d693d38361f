//! Contains the PlaneMapper struct, which describes the relationship
//! between the picture's pixel grid, with its origin at 0,0, and the
//! viewport, a rectangle on the complex plane described by its
//! minimum (left-lower) and maximum (right-upper) corners.

use num::Complex;

use error::RenderError;

/// The x, y position of a pixel in the picture.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pixel(pub usize, pub usize);

/// Scales a pixel index on one axis to the corresponding coordinate
/// on the complex plane.  The divisor is the full pixel range, not
/// `range - 1`: index 0 lands exactly on `low`, and the last index
/// stops one pixel-width short of `high`.  Callers guarantee
/// `0 <= index < range` and `range > 0`.
pub fn scale(index: usize, low: f64, high: f64, range: usize) -> f64 {
    low + (index as f64) * (high - low) / (range as f64)
}

/// Maps pixels of a `width` x `height` picture onto the viewport
/// rectangle spanned by `min_corner` and `max_corner` on the complex
/// plane.  Validated at construction; every mapping operation after
/// that is total.
#[derive(Debug)]
pub struct PlaneMapper {
    /// Picture width in pixels.
    pub width: usize,
    /// Picture height in pixels.
    pub height: usize,
    /// Left-lower corner of the viewport.
    pub min_corner: Complex<f64>,
    /// Right-upper corner of the viewport.
    pub max_corner: Complex<f64>,
}

impl PlaneMapper {
    /// Constructor.  Takes the picture dimensions and the two corners
    /// of the viewport, and rejects pictures with nothing to draw,
    /// pictures too large to index, and viewports whose corners are
    /// swapped or collapsed.
    pub fn new(
        width: usize,
        height: usize,
        min_corner: Complex<f64>,
        max_corner: Complex<f64>,
    ) -> Result<PlaneMapper, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyPicture { width, height });
        }

        if width.checked_mul(height).is_none() {
            return Err(RenderError::PictureTooLarge { width, height });
        }

        if min_corner.re >= max_corner.re || min_corner.im >= max_corner.im {
            return Err(RenderError::DegenerateViewport {
                min_x: min_corner.re,
                min_y: min_corner.im,
                max_x: max_corner.re,
                max_y: max_corner.im,
            });
        }

        Ok(PlaneMapper {
            width,
            height,
            min_corner,
            max_corner,
        })
    }

    /// The total number of pixels in the picture.  Used to size the
    /// output buffer.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// True when the picture holds no pixels.  Unreachable through the
    /// constructor, which rejects zero dimensions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Given a pixel of the picture, return the point on the complex
    /// plane that it represents, treating the real part as the x axis
    /// and the imaginary part as the y axis.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            scale(pixel.0, self.min_corner.re, self.max_corner.re, self.width),
            scale(pixel.1, self.min_corner.im, self.max_corner.im, self.height),
        )
    }

    /// Given a linear offset into the row-major pixel buffer, return
    /// the pixel it belongs to.  Each offset names exactly one pixel,
    /// which is what lets workers share the buffer without locks.
    pub fn offset_to_pixel(&self, offset: usize) -> Pixel {
        Pixel(offset % self.width, offset / self.width)
    }
}
