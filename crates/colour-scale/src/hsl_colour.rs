use std::fmt;

use palette::{FromColor, IntoColor, Mix, Okhsl, OklabHue, Srgb};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseColourError {
    #[error(r#"Invalid colour `{0}` found"#)]
    Invalid(String),
}

/// A colour held in the Okhsl perceptual space.
///
/// Isolates the rest of the crate from the underlying colour-math API: scale
/// and harmonisation code reads and writes hue/saturation/lightness through
/// the validated accessors here, and sRGB only appears when serialising out.
///
/// Hue lives in [0, 360) degrees; saturation and lightness in [0, 1]. Writes
/// through the setters are wrapped or clamped into those ranges. A non-finite
/// write is rejected with a warning and the previous value is kept, since
/// setters are often driven by transiently invalid UI input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslColour {
    colour: Okhsl<f32>,
}

impl HslColour {
    pub const HUE_MAX: f32 = 360.0;
    pub const HUE_MIN: f32 = 0.0;
    pub const LIGHTNESS_MAX: f32 = 1.0;
    pub const LIGHTNESS_MIN: f32 = 0.0;
    pub const SATURATION_MAX: f32 = 1.0;
    pub const SATURATION_MIN: f32 = 0.0;

    /// Parses a CSS colour string (hex included) and converts it into Okhsl.
    ///
    /// An unparseable string is a precondition violation with no sensible
    /// fallback, so it is a hard error rather than a warning.
    pub fn parse(input: &str) -> Result<Self, ParseColourError> {
        let c = csscolorparser::parse(input)
            .map_err(|_| ParseColourError::Invalid(input.to_string()))?;

        let srgb = Srgb::new(c.r as f32, c.g as f32, c.b as f32);
        Ok(Self {
            colour: Okhsl::from_color(srgb),
        })
    }

    pub fn from_okhsl(colour: Okhsl<f32>) -> Self {
        Self { colour }
    }

    /// Interprets the coordinates directly as Okhsl. No wrapping or clamping
    /// is applied; scale generation hands in values it already controls.
    pub fn from_coords(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            colour: Okhsl::new(hue, saturation, lightness),
        }
    }

    pub fn okhsl(&self) -> Okhsl<f32> {
        self.colour
    }

    /// Hue in degrees, always reported in [0, 360).
    pub fn h(&self) -> f32 {
        self.colour.hue.into_positive_degrees()
    }

    /// Sets the hue, wrapping into [0, 360); negative inputs wrap upward.
    pub fn set_h(&mut self, value: f32) {
        if !value.is_finite() {
            log::warn!(
                "HslColour: cannot set hue to invalid value {value}, keeping current value {}",
                self.h()
            );
            return;
        }
        let wrapped = ((value % Self::HUE_MAX) + Self::HUE_MAX) % Self::HUE_MAX;
        self.colour.hue = OklabHue::from_degrees(wrapped);
    }

    pub fn s(&self) -> f32 {
        self.colour.saturation
    }

    /// Sets the saturation, clamped into [0, 1].
    pub fn set_s(&mut self, value: f32) {
        if !value.is_finite() {
            log::warn!(
                "HslColour: cannot set saturation to invalid value {value}, keeping current value {}",
                self.s()
            );
            return;
        }
        self.colour.saturation = value.clamp(Self::SATURATION_MIN, Self::SATURATION_MAX);
    }

    pub fn l(&self) -> f32 {
        self.colour.lightness
    }

    /// Sets the lightness, clamped into [0, 1]. Lightness is not periodic, so
    /// it clamps where hue wraps.
    pub fn set_l(&mut self, value: f32) {
        if !value.is_finite() {
            log::warn!(
                "HslColour: cannot set lightness to invalid value {value}, keeping current value {}",
                self.l()
            );
            return;
        }
        self.colour.lightness = value.clamp(Self::LIGHTNESS_MIN, Self::LIGHTNESS_MAX);
    }

    /// Serialises to an sRGB hex string. This is the only place output
    /// colour-space conversion happens.
    pub fn hex(&self) -> String {
        let srgb: Srgb = self.colour.into_color();

        csscolorparser::Color::new(srgb.red as f64, srgb.green as f64, srgb.blue as f64, 1.0)
            .to_hex_string()
    }

    /// Perceptual interpolation within Okhsl; weight 0 returns `colour1`,
    /// weight 1 returns `colour2`.
    pub fn mix(colour1: &HslColour, colour2: &HslColour, weight: f32) -> HslColour {
        Self {
            colour: colour1.colour.mix(colour2.colour, weight),
        }
    }
}

impl fmt::Display for HslColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}
