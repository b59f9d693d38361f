// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The parallel generator.  Owns the validated render parameters and
//! produces the per-pixel output buffer by forking the linear pixel
//! index space across scoped worker threads.
//!
//! The buffer is allocated at full size up front and split with
//! `chunks_mut`, so every worker owns a disjoint contiguous slice and
//! derives each pixel position from its chunk base plus the slot
//! offset.  No slot is ever written twice and no lock is needed; the
//! finished buffer is identical for any worker count.

extern crate crossbeam;

use num::Complex;

use error::RenderError;
use escape::escape_time;
use palette::{Palette, Rgb};
use planes::PlaneMapper;

/// Renders the Mandelbrot set for one picture/viewport/iteration-cap
/// triple.  Construction validates the arguments; rendering cannot
/// fail after that.
#[derive(Debug)]
pub struct MandelbrotRenderer {
    plane: PlaneMapper,
    limit: usize,
}

impl MandelbrotRenderer {
    /// Requires the width and height of the picture, the left-lower
    /// and right-upper corners of the viewport on the complex plane,
    /// and the iteration cap.
    pub fn new(
        width: usize,
        height: usize,
        min_corner: Complex<f64>,
        max_corner: Complex<f64>,
        limit: usize,
    ) -> Result<Self, RenderError> {
        if limit == 0 {
            return Err(RenderError::ZeroIterations);
        }
        let plane = PlaneMapper::new(width, height, min_corner, max_corner)?;
        Ok(MandelbrotRenderer { plane, limit })
    }

    /// The pixel-to-point mapping this renderer was built with.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// The iteration cap this renderer was built with.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Fork-join driver shared by the color and count renders: size
    /// the buffer, split it into one contiguous chunk per worker, and
    /// let each worker fill its own slots.  Blocks until every worker
    /// has finished.
    fn generate<T, F>(&self, threads: usize, per_point: F) -> Vec<T>
    where
        T: Clone + Default + Send,
        F: Fn(Complex<f64>) -> T + Sync,
    {
        let mut buffer = vec![T::default(); self.plane.len()];
        let threads = threads.max(1);
        // Ceiling division keeps the chunk count at or below the
        // worker count while covering every slot.
        let chunk_size = (buffer.len() + threads - 1) / threads;
        {
            let plane = &self.plane;
            let per_point = &per_point;
            crossbeam::scope(|spawner| {
                for (chunk, region) in buffer.chunks_mut(chunk_size).enumerate() {
                    let base = chunk * chunk_size;
                    spawner.spawn(move |_| {
                        for (slot, out) in region.iter_mut().enumerate() {
                            let pixel = plane.offset_to_pixel(base + slot);
                            *out = per_point(plane.pixel_to_point(&pixel));
                        }
                    });
                }
            })
            .unwrap();
        }
        buffer
    }

    /// Renders the picture to colors, one `Rgb` per pixel in row-major
    /// order.  The palette is built once and shared read-only by all
    /// workers; capped counts clamp to its last entry.
    pub fn render(&self, threads: usize) -> Vec<Rgb> {
        let palette = Palette::new(self.limit);
        let limit = self.limit;
        self.generate(threads, |c| {
            palette.at(escape_time(c, limit).palette_index(limit))
        })
    }

    /// Renders raw escape counts instead of colors, for callers that
    /// resolve colors themselves.  A count equal to the iteration cap
    /// marks a point that never escaped.
    pub fn escape_counts(&self, threads: usize) -> Vec<usize> {
        let limit = self.limit;
        self.generate(threads, |c| escape_time(c, limit).count(limit))
    }
}
