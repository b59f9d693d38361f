#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parallel Mandelbrot renderer
//!
//! The Mandelbrot set is drawn by taking each pixel of the target
//! picture, mapping it to a point `c` on the complex plane, and
//! repeatedly computing `z = z * z + c` until the magnitude of `z`
//! passes a bailout radius of 2.  The number of steps that takes is
//! the pixel's "escape time", and a precomputed palette turns that
//! count into a color.  Points that never pass the bailout within the
//! iteration cap belong to the set's interior.
//!
//! The pixel grid is embarrassingly parallel: no pixel depends on any
//! other, so the renderer forks the linear pixel index space into
//! contiguous chunks, hands each chunk to a scoped worker thread, and
//! joins when every slot of the output buffer has been written exactly
//! once.

extern crate crossbeam;
extern crate itertools;
#[macro_use]
extern crate failure;
extern crate num;
extern crate num_cpus;

pub mod error;
pub mod escape;
pub mod palette;
pub mod planes;
pub mod render;

pub use error::RenderError;
pub use escape::{escape_time, Escape};
pub use palette::{Palette, Rgb};
pub use planes::{Pixel, PlaneMapper};
pub use render::MandelbrotRenderer;
