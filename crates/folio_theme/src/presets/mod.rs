//! Closed catalogs of user-selectable theme values.
//!
//! Every field of a [`ThemeConfig`](crate::ThemeConfig) is drawn from one of
//! these catalogs, so a configuration can never hold free-form data.

use crate::color::Oklch;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// A value outside a preset catalog was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownPreset {
    pub kind: &'static str,
    pub value: String,
}

/// Shared behaviour of the preset catalogs.
pub trait Preset: Copy + Sized + 'static {
    /// Catalog name used in diagnostics.
    const KIND: &'static str;

    /// Stable id for config/serialization.
    fn id(self) -> &'static str;

    /// User-facing display name.
    fn display_name(self) -> &'static str;

    /// Full catalog in presentation order.
    fn all() -> &'static [Self];

    /// Look up by id or display name, ignoring ASCII case.
    fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all().iter().copied().find(|p| {
            p.id().eq_ignore_ascii_case(name) || p.display_name().eq_ignore_ascii_case(name)
        })
    }

    fn unknown(value: &str) -> UnknownPreset {
        UnknownPreset {
            kind: Self::KIND,
            value: value.to_string(),
        }
    }
}

// ========== Primary color ==========

/// Accent swatches offered for the primary color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimaryColor {
    Red,
    Orange,
    Amber,
    Yellow,
    Lime,
    Green,
    Emerald,
    Teal,
    Cyan,
    Sky,
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Pink,
    Rose,
}

impl PrimaryColor {
    pub fn color(self) -> Oklch {
        match self {
            Self::Red => Oklch::new(63.7, 0.237, 25.331),
            Self::Orange => Oklch::new(70.5, 0.213, 47.604),
            Self::Amber => Oklch::new(76.9, 0.188, 70.08),
            Self::Yellow => Oklch::new(79.5, 0.184, 86.047),
            Self::Lime => Oklch::new(76.8, 0.233, 130.85),
            Self::Green => Oklch::new(72.3, 0.219, 149.579),
            Self::Emerald => Oklch::new(69.6, 0.17, 162.48),
            Self::Teal => Oklch::new(70.4, 0.14, 182.503),
            Self::Cyan => Oklch::new(71.5, 0.143, 215.221),
            Self::Sky => Oklch::new(68.5, 0.169, 237.323),
            Self::Blue => Oklch::new(62.3, 0.214, 259.815),
            Self::Indigo => Oklch::new(58.5, 0.233, 277.117),
            Self::Violet => Oklch::new(60.6, 0.25, 292.717),
            Self::Purple => Oklch::new(62.7, 0.265, 303.9),
            Self::Fuchsia => Oklch::new(66.7, 0.295, 322.15),
            Self::Pink => Oklch::new(65.6, 0.241, 354.308),
            Self::Rose => Oklch::new(64.5, 0.246, 16.439),
        }
    }

    /// Swatch whose color equals `color` exactly
    pub fn from_color(color: Oklch) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.color() == color)
    }
}

impl Preset for PrimaryColor {
    const KIND: &'static str = "primary color";

    fn id(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Amber => "amber",
            Self::Yellow => "yellow",
            Self::Lime => "lime",
            Self::Green => "green",
            Self::Emerald => "emerald",
            Self::Teal => "teal",
            Self::Cyan => "cyan",
            Self::Sky => "sky",
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Violet => "violet",
            Self::Purple => "purple",
            Self::Fuchsia => "fuchsia",
            Self::Pink => "pink",
            Self::Rose => "rose",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Orange => "Orange",
            Self::Amber => "Amber",
            Self::Yellow => "Yellow",
            Self::Lime => "Lime",
            Self::Green => "Green",
            Self::Emerald => "Emerald",
            Self::Teal => "Teal",
            Self::Cyan => "Cyan",
            Self::Sky => "Sky",
            Self::Blue => "Blue",
            Self::Indigo => "Indigo",
            Self::Violet => "Violet",
            Self::Purple => "Purple",
            Self::Fuchsia => "Fuchsia",
            Self::Pink => "Pink",
            Self::Rose => "Rose",
        }
    }

    fn all() -> &'static [Self] {
        const ALL: [PrimaryColor; 17] = [
            PrimaryColor::Red,
            PrimaryColor::Orange,
            PrimaryColor::Amber,
            PrimaryColor::Yellow,
            PrimaryColor::Lime,
            PrimaryColor::Green,
            PrimaryColor::Emerald,
            PrimaryColor::Teal,
            PrimaryColor::Cyan,
            PrimaryColor::Sky,
            PrimaryColor::Blue,
            PrimaryColor::Indigo,
            PrimaryColor::Violet,
            PrimaryColor::Purple,
            PrimaryColor::Fuchsia,
            PrimaryColor::Pink,
            PrimaryColor::Rose,
        ];
        &ALL
    }
}

/// Accepts an id, a display name or an `oklch(...)` value from the catalog.
impl FromStr for PrimaryColor {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .or_else(|| s.parse::<Oklch>().ok().and_then(Self::from_color))
            .ok_or_else(|| Self::unknown(s))
    }
}

// ========== Surface color ==========

/// Neutral bases for backgrounds and surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceColor {
    Slate,
    Gray,
    Zinc,
    Neutral,
    Stone,
}

impl SurfaceColor {
    pub fn color(self) -> Oklch {
        match self {
            Self::Slate => Oklch::new(54.61, 0.022, 252.89),
            Self::Gray => Oklch::new(55.01, 0.011, 258.34),
            Self::Zinc => Oklch::new(55.51, 0.016, 256.85),
            Self::Neutral => Oklch::new(55.46, 0.007, 77.65),
            Self::Stone => Oklch::new(54.77, 0.012, 56.35),
        }
    }

    /// sRGB approximation shown on the swatch
    pub fn preview_hex(self) -> u32 {
        match self {
            Self::Slate => 0x64748b,
            Self::Gray => 0x6b7280,
            Self::Zinc => 0x71717a,
            Self::Neutral => 0x737373,
            Self::Stone => 0x78716c,
        }
    }

    pub fn from_color(color: Oklch) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.color() == color)
    }
}

impl Preset for SurfaceColor {
    const KIND: &'static str = "surface color";

    fn id(self) -> &'static str {
        match self {
            Self::Slate => "slate",
            Self::Gray => "gray",
            Self::Zinc => "zinc",
            Self::Neutral => "neutral",
            Self::Stone => "stone",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Self::Slate => "Slate",
            Self::Gray => "Gray",
            Self::Zinc => "Zinc",
            Self::Neutral => "Neutral",
            Self::Stone => "Stone",
        }
    }

    fn all() -> &'static [Self] {
        const ALL: [SurfaceColor; 5] = [
            SurfaceColor::Slate,
            SurfaceColor::Gray,
            SurfaceColor::Zinc,
            SurfaceColor::Neutral,
            SurfaceColor::Stone,
        ];
        &ALL
    }
}

impl FromStr for SurfaceColor {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .or_else(|| s.parse::<Oklch>().ok().and_then(Self::from_color))
            .ok_or_else(|| Self::unknown(s))
    }
}

// ========== Font family ==========

/// Named font stacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Inter,
    Geist,
    JetBrainsMono,
}

impl FontFamily {
    /// CSS `font-family` value
    pub fn stack(self) -> &'static str {
        match self {
            Self::Inter => "\"Inter\", system-ui, sans-serif",
            Self::Geist => "\"Geist\", system-ui, sans-serif",
            Self::JetBrainsMono => "\"JetBrains Mono\", monospace",
        }
    }

    pub fn from_stack(stack: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.stack() == stack)
    }
}

impl Preset for FontFamily {
    const KIND: &'static str = "font family";

    fn id(self) -> &'static str {
        match self {
            Self::Inter => "inter",
            Self::Geist => "geist",
            Self::JetBrainsMono => "jetbrains-mono",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Self::Inter => "Inter",
            Self::Geist => "Geist",
            Self::JetBrainsMono => "JetBrains Mono",
        }
    }

    fn all() -> &'static [Self] {
        const ALL: [FontFamily; 3] = [
            FontFamily::Inter,
            FontFamily::Geist,
            FontFamily::JetBrainsMono,
        ];
        &ALL
    }
}

impl FromStr for FontFamily {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .or_else(|| Self::from_stack(s.trim()))
            .ok_or_else(|| Self::unknown(s))
    }
}

// ========== Text size ==========

/// Root typography scale presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextSize {
    Compact,
    Normal,
    Comfortable,
    Large,
}

impl TextSize {
    /// Scale factor applied to the 16px root font size
    pub fn scale(self) -> f64 {
        match self {
            Self::Compact => 0.875,
            Self::Normal => 1.0,
            Self::Comfortable => 1.125,
            Self::Large => 1.25,
        }
    }

    /// Preset with exactly this scale
    pub fn from_scale(scale: f64) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.scale() == scale)
    }
}

impl Preset for TextSize {
    const KIND: &'static str = "text size";

    fn id(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Normal => "normal",
            Self::Comfortable => "comfortable",
            Self::Large => "large",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Self::Compact => "Compact",
            Self::Normal => "Normal",
            Self::Comfortable => "Comfortable",
            Self::Large => "Large",
        }
    }

    fn all() -> &'static [Self] {
        const ALL: [TextSize; 4] = [
            TextSize::Compact,
            TextSize::Normal,
            TextSize::Comfortable,
            TextSize::Large,
        ];
        &ALL
    }
}

/// Accepts an id, a display name or the numeric scale (`"1.125"`).
impl FromStr for TextSize {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .or_else(|| s.trim().parse::<f64>().ok().and_then(Self::from_scale))
            .ok_or_else(|| Self::unknown(s))
    }
}

// ========== Background ==========

/// Decorative background renderer selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BackgroundType {
    DarkVeil,
    Plasma,
    ColorBends,
    None,
}

impl Preset for BackgroundType {
    const KIND: &'static str = "background type";

    fn id(self) -> &'static str {
        match self {
            Self::DarkVeil => "darkveil",
            Self::Plasma => "plasma",
            Self::ColorBends => "colorbends",
            Self::None => "none",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Self::DarkVeil => "Dark Veil",
            Self::Plasma => "Plasma",
            Self::ColorBends => "Color Bends",
            Self::None => "None",
        }
    }

    fn all() -> &'static [Self] {
        const ALL: [BackgroundType; 4] = [
            BackgroundType::DarkVeil,
            BackgroundType::Plasma,
            BackgroundType::ColorBends,
            BackgroundType::None,
        ];
        &ALL
    }
}

impl FromStr for BackgroundType {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| Self::unknown(s))
    }
}

macro_rules! display_by_name {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Display for $ty {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.display_name())
                }
            }
        )*
    };
}

display_by_name!(PrimaryColor, SurfaceColor, FontFamily, TextSize, BackgroundType);
