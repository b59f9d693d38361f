// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors reported when render parameters fail validation.  The
//! renderer checks its arguments before any work is dispatched, so a
//! failed construction never leaves a partially written buffer behind.

/// Everything that can be wrong with a render request.  The mapper and
/// the kernel themselves are total functions; only the arguments can
/// fail.
#[derive(Debug, Fail, PartialEq)]
pub enum RenderError {
    /// The picture has a zero width or height, leaving nothing to draw.
    #[fail(display = "picture dimensions must be positive, got {}x{}", width, height)]
    EmptyPicture {
        /// Requested picture width in pixels.
        width: usize,
        /// Requested picture height in pixels.
        height: usize,
    },

    /// `width * height` does not fit the buffer index type.
    #[fail(display = "a {}x{} picture overflows the pixel buffer index", width, height)]
    PictureTooLarge {
        /// Requested picture width in pixels.
        width: usize,
        /// Requested picture height in pixels.
        height: usize,
    },

    /// The viewport's minimum corner is not strictly left of and below
    /// its maximum corner.
    #[fail(
        display = "viewport is degenerate: ({}, {}) is not strictly left of and below ({}, {})",
        min_x, min_y, max_x, max_y
    )]
    DegenerateViewport {
        /// x coordinate of the minimum corner.
        min_x: f64,
        /// y coordinate of the minimum corner.
        min_y: f64,
        /// x coordinate of the maximum corner.
        max_x: f64,
        /// y coordinate of the maximum corner.
        max_y: f64,
    },

    /// The iteration cap is zero, so no pixel could ever be classified
    /// and the palette would be empty.
    #[fail(display = "at least one iteration is required")]
    ZeroIterations,
}
