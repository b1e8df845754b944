//! Design tokens for theming
//!
//! Tokens are the values visual consumers read:
//! - Primary color with light/dark variants
//! - Eleven-step shade ramps for primary and surface colors
//! - Font family and typography scale

mod design;
mod palette;

pub use design::*;
pub use palette::*;
