//! Shade ramps and light/dark variants derived from a single color

use crate::color::Oklch;
use std::fmt;

/// Lightness added for the light variant
pub const LIGHT_DELTA: f64 = 10.0;
/// Upper bound for the light variant's lightness
pub const LIGHT_MAX: f64 = 95.0;
/// Lightness removed for the dark variant
pub const DARK_DELTA: f64 = 15.0;
/// Lower bound for the dark variant's lightness
pub const DARK_MIN: f64 = 20.0;

/// Shade keys of an eleven-step ramp, lightest first
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl Shade {
    pub const ALL: [Shade; 11] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
        Shade::S950,
    ];

    /// Numeric key used in token names (`50`, `100`, ... `950`)
    pub fn key(self) -> u16 {
        match self {
            Shade::S50 => 50,
            Shade::S100 => 100,
            Shade::S200 => 200,
            Shade::S300 => 300,
            Shade::S400 => 400,
            Shade::S500 => 500,
            Shade::S600 => 600,
            Shade::S700 => 700,
            Shade::S800 => 800,
            Shade::S900 => 900,
            Shade::S950 => 950,
        }
    }

    /// Target lightness (percent) and chroma multiplier for this step
    fn schedule(self) -> (f64, f64) {
        match self {
            Shade::S50 => (97.0, 0.1),
            Shade::S100 => (94.0, 0.2),
            Shade::S200 => (88.0, 0.4),
            Shade::S300 => (80.0, 0.6),
            Shade::S400 => (70.0, 0.8),
            Shade::S500 => (63.0, 1.0),
            Shade::S600 => (55.0, 1.0),
            Shade::S700 => (47.0, 0.95),
            Shade::S800 => (39.0, 0.9),
            Shade::S900 => (31.0, 0.8),
            Shade::S950 => (22.0, 0.7),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Eleven-step shade ramp, indexed by [`Shade`]
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    shades: [Oklch; 11],
}

impl Palette {
    /// Build the ramp for `base`: hue is held, chroma scaled per step and
    /// lightness taken from a fixed schedule.
    pub fn from_base(base: Oklch) -> Self {
        let shades = Shade::ALL.map(|shade| {
            let (lightness, chroma_scale) = shade.schedule();
            Oklch::new(lightness, base.c * chroma_scale, base.h)
        });
        Self { shades }
    }

    pub fn get(&self, shade: Shade) -> Oklch {
        self.shades[shade.index()]
    }

    /// Iterate `(shade, color)` pairs from lightest to darkest
    pub fn iter(&self) -> impl Iterator<Item = (Shade, Oklch)> + '_ {
        Shade::ALL.iter().map(move |&shade| (shade, self.get(shade)))
    }
}

/// Light and dark accents around a base color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorVariants {
    pub light: Oklch,
    pub dark: Oklch,
}

impl ColorVariants {
    pub fn from_base(base: Oklch) -> Self {
        Self {
            light: base.lighten(LIGHT_DELTA, LIGHT_MAX),
            dark: base.darken(DARK_DELTA, DARK_MIN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn red_variants_match_expected_lightness() {
        let red = Oklch::new(63.7, 0.237, 25.331);
        let variants = ColorVariants::from_base(red);

        assert!(close(variants.light.l, 73.7));
        assert!(close(variants.dark.l, 48.7));
        assert_eq!(variants.light.c, red.c);
        assert_eq!(variants.light.h, red.h);
        assert_eq!(variants.dark.c, red.c);
        assert_eq!(variants.dark.h, red.h);
    }

    #[test]
    fn variants_clamp_at_bounds() {
        let pale = ColorVariants::from_base(Oklch::new(90.0, 0.05, 100.0));
        assert_eq!(pale.light.l, LIGHT_MAX);

        let deep = ColorVariants::from_base(Oklch::new(25.0, 0.05, 100.0));
        assert_eq!(deep.dark.l, DARK_MIN);
    }

    #[test]
    fn palette_holds_hue_and_descends_in_lightness() {
        let base = Oklch::new(62.3, 0.214, 259.815);
        let palette = Palette::from_base(base);

        let lightness: Vec<f64> = palette.iter().map(|(_, c)| c.l).collect();
        assert!(lightness.windows(2).all(|w| w[0] > w[1]));
        assert!(palette.iter().all(|(_, c)| c.h == base.h));
        assert_eq!(palette.get(Shade::S500).c, base.c);
        assert!(close(palette.get(Shade::S50).c, base.c * 0.1));
        assert!(close(palette.get(Shade::S950).c, base.c * 0.7));
    }

    #[test]
    fn shade_keys_are_ordered() {
        let keys: Vec<u16> = Shade::ALL.iter().map(|s| s.key()).collect();
        assert_eq!(
            keys,
            vec![50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950]
        );
    }
}
