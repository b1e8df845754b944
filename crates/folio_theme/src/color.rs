//! OKLCH color values
//!
//! User-selectable colors are stored in the perceptual OKLCH model so that
//! lightness can be shifted without moving hue or chroma. Values round-trip
//! through the CSS functional notation `oklch(L% C H)`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while parsing `oklch(...)` notation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    #[error("expected `oklch(L C H)`, got `{0}`")]
    Syntax(String),

    #[error("invalid {component} component `{value}`")]
    Component {
        component: &'static str,
        value: String,
    },

    #[error("{component} component {value} is out of range")]
    OutOfRange { component: &'static str, value: f64 },
}

/// A color in the OKLCH model.
///
/// `l` is lightness in percent (0 to 100), `c` is chroma (0 and up) and `h`
/// is hue in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Oklch {
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Return the same color with a different lightness
    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    /// Return the same color with a different chroma
    pub fn with_chroma(self, c: f64) -> Self {
        Self { c, ..self }
    }

    /// Raise lightness by `delta`, never exceeding `max`
    pub fn lighten(self, delta: f64, max: f64) -> Self {
        self.with_lightness((self.l + delta).min(max))
    }

    /// Lower lightness by `delta`, never going below `min`
    pub fn darken(self, delta: f64, min: f64) -> Self {
        self.with_lightness((self.l - delta).max(min))
    }

    /// CSS functional notation, e.g. `oklch(63.7% 0.237 25.331)`
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "oklch({}% {} {})",
            format_component(self.l),
            format_component(self.c),
            format_component(self.h)
        )
    }
}

/// Shortest decimal form that parses back to the same value.
fn format_component(value: f64) -> String {
    if value == 0.0 {
        // also covers -0
        return "0".to_string();
    }
    value.to_string()
}

impl FromStr for Oklch {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let body = input
            .strip_prefix("oklch(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ParseColorError::Syntax(input.to_string()))?;

        let parts: Vec<&str> = body.split_whitespace().collect();
        let [l, c, h] = parts.as_slice() else {
            return Err(ParseColorError::Syntax(input.to_string()));
        };

        // `L%` is a percentage; a bare number is the 0..1 form from CSS Color 4.
        let l = match l.strip_suffix('%') {
            Some(percent) => parse_component("lightness", percent)?,
            None => fraction_to_percent(l)?,
        };
        let c = parse_component("chroma", c)?;
        let h = parse_component("hue", h)?;

        if !(0.0..=100.0).contains(&l) {
            return Err(ParseColorError::OutOfRange {
                component: "lightness",
                value: l,
            });
        }
        if c < 0.0 {
            return Err(ParseColorError::OutOfRange {
                component: "chroma",
                value: c,
            });
        }

        Ok(Oklch { l, c, h })
    }
}

fn parse_component(component: &'static str, raw: &str) -> Result<f64, ParseColorError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseColorError::Component {
            component,
            value: raw.to_string(),
        })
}

/// Bare 0..1 lightness as percent. The decimal point is moved in text so
/// `0.5501` and `55.01%` land on the same float.
fn fraction_to_percent(raw: &str) -> Result<f64, ParseColorError> {
    let fraction = parse_component("lightness", raw)?;
    if raw.contains(['e', 'E']) {
        return Ok(fraction * 100.0);
    }
    Ok(format!("{raw}e2").parse().unwrap_or(fraction * 100.0))
}

impl Serialize for Oklch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Oklch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_percent_and_leading_dot() {
        let red: Oklch = "oklch(63.7% .237 25.331)".parse().unwrap();
        assert_eq!(red, Oklch::new(63.7, 0.237, 25.331));
    }

    #[test]
    fn parses_fractional_lightness() {
        let c: Oklch = "oklch(0.5 0.1 200)".parse().unwrap();
        assert_eq!(c.l, 50.0);
    }

    #[test]
    fn fractional_lightness_matches_percent_form() {
        // 0.5501 * 100.0 is not 55.01 in f64
        let fraction: Oklch = "oklch(0.5501 0.011 258.34)".parse().unwrap();
        let percent: Oklch = "oklch(55.01% 0.011 258.34)".parse().unwrap();
        assert_eq!(fraction, percent);
        assert_eq!(fraction.l, 55.01);

        let exponent: Oklch = "oklch(5e-1 0.1 10)".parse().unwrap();
        assert_eq!(exponent.l, 50.0);
        assert!(matches!(
            "oklch(abc 0.1 10)".parse::<Oklch>(),
            Err(ParseColorError::Component { component: "lightness", ref value }) if value == "abc"
        ));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            "rgb(1, 2, 3)".parse::<Oklch>(),
            Err(ParseColorError::Syntax(_))
        ));
        assert!(matches!(
            "oklch(50% 0.1)".parse::<Oklch>(),
            Err(ParseColorError::Syntax(_))
        ));
        assert!(matches!(
            "oklch(50% abc 10)".parse::<Oklch>(),
            Err(ParseColorError::Component { component: "chroma", .. })
        ));
        assert!(matches!(
            "oklch(150% 0.1 10)".parse::<Oklch>(),
            Err(ParseColorError::OutOfRange { component: "lightness", .. })
        ));
    }

    #[test]
    fn formats_without_trailing_zeros() {
        assert_eq!(
            Oklch::new(97.0, 0.0237, 25.331).to_css(),
            "oklch(97% 0.0237 25.331)"
        );
        assert_eq!(Oklch::new(20.0, 0.0, 0.0).to_css(), "oklch(20% 0 0)");
        assert_eq!(Oklch::new(20.0, -0.0, 0.0).to_css(), "oklch(20% 0 0)");
    }

    #[test]
    fn formats_derived_chroma_without_rounding() {
        let c = Oklch::new(47.0, 0.237 * 0.95, 25.331);
        assert_eq!(c.to_css(), "oklch(47% 0.22515 25.331)");
        assert_eq!(c.to_css().parse::<Oklch>().unwrap(), c);

        let neutral = Oklch::new(47.0, 0.007 * 0.95, 77.65);
        assert_eq!(neutral.to_css(), "oklch(47% 0.00665 77.65)");
    }

    #[test]
    fn lighten_and_darken_clamp() {
        let c = Oklch::new(90.0, 0.1, 10.0);
        assert_eq!(c.lighten(10.0, 95.0).l, 95.0);
        assert_eq!(Oklch::new(30.0, 0.1, 10.0).darken(15.0, 20.0).l, 20.0);
    }

    #[test]
    fn serde_uses_css_notation() {
        let json = serde_json::to_string(&Oklch::new(62.3, 0.214, 259.815)).unwrap();
        assert_eq!(json, "\"oklch(62.3% 0.214 259.815)\"");
        let back: Oklch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Oklch::new(62.3, 0.214, 259.815));
    }
}
