use crate::hsl_colour::HslColour;
use crate::math;

/// Computes single points on a perceptually even tint/shade ramp.
///
/// Implements Matthew Ström's colour palette generation method:
/// <https://matthewstrom.com/writing/generating-color-palettes/>
///
/// All parameters are fixed at construction and `compute_colour` is a pure
/// function of its argument, so a generator is cheap enough to build fresh
/// per request. `max_scale_number` must be greater than zero; a zero value is
/// not validated and NaN flows through the result instead.
#[derive(Debug, Clone, Copy)]
pub struct ColourScaleGenerator {
    max_scale_number: f32,
    base_hue: f32,
    min_chroma: f32,
    max_chroma: f32,
    background_y: f32,
}

impl ColourScaleGenerator {
    /// `base_hue` is in degrees, `min_chroma`/`max_chroma` bound the ramp's
    /// chroma, and `background_y` is the CIE relative luminance (0..1) of the
    /// surface the ramp will be read against.
    pub fn new(
        max_scale_number: f32,
        base_hue: f32,
        min_chroma: f32,
        max_chroma: f32,
        background_y: f32,
    ) -> Self {
        Self {
            max_scale_number,
            base_hue,
            min_chroma,
            max_chroma,
            background_y,
        }
    }

    /// Colour at `scale_number` along the 0..`max_scale_number` ramp.
    ///
    /// Out-of-range scale numbers extrapolate rather than error.
    pub fn compute_colour(&self, scale_number: f32) -> HslColour {
        let scale_value = self.normalize_scale_number(scale_number);

        let raw_lightness = self.compute_scale_lightness(scale_value);
        let lightness = (raw_lightness / math::LIGHTNESS_SCALE_FACTOR)
            .clamp(math::LIGHTNESS_MIN, math::LIGHTNESS_MAX);

        let hue = self.compute_scale_hue(scale_value);
        let chroma = self.compute_scale_chroma(scale_value);

        HslColour::from_coords(hue, chroma, lightness)
    }

    // Downward parabola peaking at the mid-tones: chroma tapers toward both
    // the black and white ends of the ramp.
    fn compute_scale_chroma(&self, scale_value: f32) -> f32 {
        let chroma_difference = self.max_chroma - self.min_chroma;
        let parabola_factor = -math::CHROMA_CURVE_FACTOR * chroma_difference;
        let linear_factor = math::CHROMA_CURVE_FACTOR * chroma_difference;

        parabola_factor * scale_value.powi(2) + linear_factor * scale_value + self.min_chroma
    }

    // A small warm/cool drift instead of a flat hue across the ramp.
    fn compute_scale_hue(&self, scale_value: f32) -> f32 {
        self.base_hue + math::HUE_SHIFT_FACTOR * (1.0 - scale_value)
    }

    // Exponential contrast curve. The branch keeps the ramp moving away from
    // the background in the legible direction: foregrounds darken over light
    // backgrounds and lighten over dark ones.
    fn compute_scale_lightness(&self, scale_value: f32) -> f32 {
        let exponential_term = (math::LIGHTNESS_CONTRAST_EXPONENT * scale_value).exp();
        let adjusted_background = self.background_y + math::LIGHTNESS_CONTRAST_OFFSET;

        let foreground_y = if self.background_y > math::BACKGROUND_LIGHTNESS_THRESHOLD {
            adjusted_background / exponential_term - math::LIGHTNESS_CONTRAST_OFFSET
        } else {
            exponential_term * adjusted_background - math::LIGHTNESS_CONTRAST_OFFSET
        };

        math::apply_toe_curve(math::y_to_lightness(foreground_y))
    }

    fn normalize_scale_number(&self, scale_number: f32) -> f32 {
        scale_number / self.max_scale_number
    }
}
