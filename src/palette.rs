//! Precomputed iteration-count-to-color table.  Escape counts sweep a
//! hue from 0 to 240 degrees (red through green to blue) at full
//! saturation and half lightness, converted once to 8-bit RGB so the
//! render loop does a plain table lookup per pixel.

/// An 8-bit RGB triple.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// The piecewise hue helper of the standard HSL-to-RGB conversion.
/// `hue` is the normalized hue plus a per-channel offset; it is
/// wrapped back into [0, 1) before the four-region formula runs:
/// ramp up below 1/6, hold at `v2` below 1/2, ramp down below 2/3,
/// hold at `v1` otherwise.
fn hue_to_channel(v1: f64, v2: f64, hue: f64) -> f64 {
    let mut hue = hue;
    if hue < 0.0 {
        hue += 1.0;
    }
    if hue > 1.0 {
        hue -= 1.0;
    }

    if 6.0 * hue < 1.0 {
        v1 + (v2 - v1) * 6.0 * hue
    } else if 2.0 * hue < 1.0 {
        v2
    } else if 3.0 * hue < 2.0 {
        v1 + (v2 - v1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        v1
    }
}

/// Converts a hue (degrees), saturation and lightness (both in
/// [0, 1]) to an 8-bit RGB triple.  Zero saturation short-circuits to
/// the greyscale of the lightness; channels truncate after scaling
/// by 255.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    if saturation == 0.0 {
        let grey = (lightness * 255.0) as u8;
        return Rgb {
            r: grey,
            g: grey,
            b: grey,
        };
    }

    let v2 = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        (lightness + saturation) - (lightness * saturation)
    };
    let v1 = 2.0 * lightness - v2;
    let hue = hue / 360.0;

    Rgb {
        r: (255.0 * hue_to_channel(v1, v2, hue + 1.0 / 3.0)) as u8,
        g: (255.0 * hue_to_channel(v1, v2, hue)) as u8,
        b: (255.0 * hue_to_channel(v1, v2, hue - 1.0 / 3.0)) as u8,
    }
}

/// A color table with one entry per possible escape count in
/// `[0, size)`.  Built once per render and shared read-only by every
/// worker.
#[derive(Debug)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Builds the table for an iteration cap of `size`.  Entry `i`
    /// carries the hue `240 * i / size`, so the sweep approaches but
    /// never reaches 240 degrees (pure blue stays the limit color).
    pub fn new(size: usize) -> Palette {
        Palette {
            colors: (0..size)
                .map(|i| hsl_to_rgb(240.0 / (size as f64) * (i as f64), 1.0, 0.5))
                .collect(),
        }
    }

    /// The color for an escape count.  Panics if `index` is out of
    /// range; callers clamp capped counts to `size - 1` first.
    pub fn at(&self, index: usize) -> Rgb {
        self.colors[index]
    }

    /// The number of entries, equal to the iteration cap.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True for the zero-entry palette of a zero iteration cap.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_one_entry_per_count() {
        assert_eq!(Palette::new(10).len(), 10);
        assert_eq!(Palette::new(1000).len(), 1000);
        assert!(Palette::new(0).is_empty());
    }

    #[test]
    fn first_entry_is_pure_red() {
        // Hue 0 at full saturation, half lightness.
        assert_eq!(Palette::new(10).at(0), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(Palette::new(500).at(0), Rgb { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn known_entries_of_a_ten_color_table() {
        let palette = Palette::new(10);
        assert_eq!(palette.at(3), Rgb { r: 203, g: 255, b: 0 });
        assert_eq!(palette.at(5), Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(palette.at(9), Rgb { r: 0, g: 101, b: 255 });
    }

    #[test]
    fn entries_depend_on_the_table_size() {
        // The hue of entry i is 240 * i / size, so the same index in
        // differently sized tables lands on different colors.
        assert_ne!(Palette::new(10).at(5), Palette::new(20).at(5));
        assert_eq!(Palette::new(10).at(5), Palette::new(20).at(10));
    }

    #[test]
    fn zero_saturation_is_greyscale() {
        let grey = hsl_to_rgb(60.0, 0.0, 0.5);
        assert_eq!(grey, Rgb { r: 127, g: 127, b: 127 });
    }

    #[test]
    fn primary_hues_convert_exactly() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), Rgb { r: 0, g: 0, b: 255 });
    }
}
