use crate::hsl_colour::{HslColour, ParseColourError};
use crate::scale::ColourScaleGenerator;

/// Derives a self-consistent set of design colours from one base colour:
/// on-light/on-dark contrast anchors, tone-indexed tints, and harmonised
/// accent variants.
///
/// One instance per design theme. The anchors are computed exactly once at
/// construction; every call after that is a pure read, so a shared instance
/// can be used from multiple threads without synchronisation.
#[derive(Debug, Clone)]
pub struct ColourUtility {
    base_colour: HslColour,
    base_tint: f32,
    on_dark: HslColour,
    on_light: HslColour,
}

impl ColourUtility {
    pub const DEFAULT_BASE_TINT: f32 = 40.0;
    pub const DEFAULT_HARMONISATION_MIX: f32 = 80.0;
    pub const MAX_SATURATION: f32 = 0.25;
    pub const MAX_SATURATION_NEUTRAL: f32 = 0.2;
    pub const MAX_TONE: f32 = 100.0;
    pub const MIN_SATURATION: f32 = 0.0;
    pub const NEUTRAL_HARMONISATION_MIX: f32 = 0.0;
    pub const ON_DARK_BASE: &'static str = "#fff";
    pub const ON_DARK_MIX_AMOUNT: f32 = 5.0;
    pub const ON_LIGHT_BASE: &'static str = "#000";
    pub const ON_LIGHT_MIX_AMOUNT: f32 = 40.0;
    pub const PERCENTAGE_SCALE: f32 = 100.0;

    pub fn new(base_colour_hex: &str) -> Result<Self, ParseColourError> {
        Self::with_base_tint(base_colour_hex, Self::DEFAULT_BASE_TINT)
    }

    /// `base_tint` is the default tone index used by the convenience lookups,
    /// conventionally 0 = black and 100 = white.
    pub fn with_base_tint(base_colour_hex: &str, base_tint: f32) -> Result<Self, ParseColourError> {
        let base_colour = HslColour::parse(base_colour_hex)?;

        let on_dark = Self::harmonise(
            &base_colour,
            &HslColour::parse(Self::ON_DARK_BASE)?,
            Self::ON_DARK_MIX_AMOUNT,
        );
        let on_light = Self::harmonise(
            &base_colour,
            &HslColour::parse(Self::ON_LIGHT_BASE)?,
            Self::ON_LIGHT_MIX_AMOUNT,
        );

        Ok(Self {
            base_colour,
            base_tint,
            on_dark,
            on_light,
        })
    }

    pub fn base_tint(&self) -> f32 {
        self.base_tint
    }

    /// Contrast anchor for use on dark backgrounds, cached at construction.
    pub fn on_dark(&self) -> &HslColour {
        &self.on_dark
    }

    /// Contrast anchor for use on light backgrounds, cached at construction.
    pub fn on_light(&self) -> &HslColour {
        &self.on_light
    }

    /// Pulls `mix_colour` toward the base palette: the intermediate takes the
    /// target's hue but the base colour's saturation and lightness, then gets
    /// mixed with the target at weight `(100 - mix_amount)`. Higher
    /// `mix_amount` means closer to the target hue, lower means more branded.
    pub fn colour_mixin(&self, mix_colour: &HslColour, mix_amount: f32) -> HslColour {
        Self::harmonise(&self.base_colour, mix_colour, mix_amount)
    }

    /// [`Self::colour_mixin`] for a raw colour string.
    pub fn colour_mixin_hex(
        &self,
        mix_colour_hex: &str,
        mix_amount: f32,
    ) -> Result<HslColour, ParseColourError> {
        Ok(self.colour_mixin(&HslColour::parse(mix_colour_hex)?, mix_amount))
    }

    /// The principal tint lookup.
    ///
    /// The tone is inverted against [`Self::MAX_TONE`] so that higher tones
    /// mean lighter output while the generator's scale runs the other way.
    /// The chroma ceiling is never chosen below the input colour's own
    /// saturation, so vivid hues are not desaturated by the ramp; `neutral`
    /// caps it at [`Self::MAX_SATURATION_NEUTRAL`] instead.
    pub fn get_colour_at_tint(
        &self,
        tone: f32,
        colour: &HslColour,
        background: &HslColour,
        neutral: bool,
    ) -> HslColour {
        let inverted_tone = Self::MAX_TONE - tone;
        let hue = colour.h();
        let max_saturation = if neutral {
            Self::MAX_SATURATION_NEUTRAL
        } else {
            Self::MAX_SATURATION.max(colour.s())
        };
        // The generator branches on a luminance that grows toward white, so
        // the anchor's lightness is inverted before being handed over.
        let inverted_background_lightness = 1.0 - background.l();

        let generator = ColourScaleGenerator::new(
            Self::MAX_TONE,
            hue,
            Self::MIN_SATURATION,
            max_saturation,
            inverted_background_lightness,
        );
        generator.compute_colour(inverted_tone)
    }

    /// Tint lookup against the cached on-light anchor.
    pub fn get_tint(&self, colour: &HslColour, tone: f32) -> HslColour {
        self.get_tint_with_background(colour, tone, &self.on_light, false)
    }

    /// [`Self::get_tint`] with an explicit background anchor and neutral cap.
    pub fn get_tint_with_background(
        &self,
        colour: &HslColour,
        tone: f32,
        background: &HslColour,
        neutral: bool,
    ) -> HslColour {
        self.get_colour_at_tint(tone, colour, background, neutral)
    }

    /// Tint of a raw colour string at this instance's base tint.
    pub fn get_base_tinted_colour(&self, colour_hex: &str) -> Result<HslColour, ParseColourError> {
        Ok(self.get_tint(&HslColour::parse(colour_hex)?, self.base_tint))
    }

    /// Harmonises toward the base palette, then re-derives a tone-correct
    /// variant at the base tint. `mix_amount` defaults to
    /// [`Self::DEFAULT_HARMONISATION_MIX`].
    pub fn get_harmonised_colour(
        &self,
        colour_hex: &str,
        mix_amount: Option<f32>,
    ) -> Result<HslColour, ParseColourError> {
        let mix_amount = mix_amount.unwrap_or(Self::DEFAULT_HARMONISATION_MIX);
        let harmonised = self.colour_mixin(&HslColour::parse(colour_hex)?, mix_amount);
        Ok(self.get_tint(&harmonised, self.base_tint))
    }

    /// As [`Self::get_harmonised_colour`] with a full mix-in and the neutral
    /// saturation cap: a desaturated, base-tinted neutral.
    pub fn get_harmonised_colour_neutral(
        &self,
        colour_hex: &str,
    ) -> Result<HslColour, ParseColourError> {
        let harmonised = self.colour_mixin(
            &HslColour::parse(colour_hex)?,
            Self::NEUTRAL_HARMONISATION_MIX,
        );
        Ok(self.get_colour_at_tint(self.base_tint, &harmonised, &self.on_light, true))
    }

    /// [`HslColour::mix`] with a 0-100 percentage instead of a 0-1 weight.
    pub fn mix_colours(
        &self,
        colour1: &HslColour,
        colour2: &HslColour,
        weight_percentage: f32,
    ) -> HslColour {
        HslColour::mix(colour1, colour2, weight_percentage / Self::PERCENTAGE_SCALE)
    }

    fn harmonise(base_colour: &HslColour, target: &HslColour, mix_amount: f32) -> HslColour {
        let harmonised_base =
            HslColour::from_coords(target.h(), base_colour.s(), base_colour.l());
        let weight = (Self::PERCENTAGE_SCALE - mix_amount) / Self::PERCENTAGE_SCALE;

        HslColour::mix(&harmonised_base, target, weight)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn circular_hue_distance(a: f32, b: f32) -> f32 {
        let diff = (a - b).abs() % 360.0;
        diff.min(360.0 - diff)
    }

    #[test]
    fn base_tinted_colour_keeps_the_input_hue() {
        let utility = ColourUtility::new("#3366ff").unwrap();
        let tinted = utility.get_base_tinted_colour("#ff0000").unwrap();

        let red_hue = HslColour::parse("#ff0000").unwrap().h();
        let base_hue = HslColour::parse("#3366ff").unwrap().h();

        // The tint pipeline shifts hue by at most a few degrees; the output
        // must stay on the red side, not the base blue's.
        assert!(circular_hue_distance(tinted.h(), red_hue) < 10.0);
        assert!(circular_hue_distance(tinted.h(), 0.0) < circular_hue_distance(tinted.h(), base_hue));
    }

    #[test]
    fn anchors_are_cached_at_construction() {
        let utility = ColourUtility::new("#3366ff").unwrap();

        let on_light = utility
            .colour_mixin_hex(ColourUtility::ON_LIGHT_BASE, ColourUtility::ON_LIGHT_MIX_AMOUNT)
            .unwrap();
        let on_dark = utility
            .colour_mixin_hex(ColourUtility::ON_DARK_BASE, ColourUtility::ON_DARK_MIX_AMOUNT)
            .unwrap();

        assert_eq!(utility.on_light().hex(), on_light.hex());
        assert_eq!(utility.on_dark().hex(), on_dark.hex());

        // The light anchor mixes further from the base than the dark one.
        assert!(utility.on_light().l() < utility.on_dark().l());
    }

    #[test]
    fn neutral_harmonisation_caps_saturation() {
        let utility = ColourUtility::new("#3366ff").unwrap();
        let neutral = utility.get_harmonised_colour_neutral("#ff0000").unwrap();

        assert!(neutral.s() < ColourUtility::MAX_SATURATION_NEUTRAL);
    }

    #[test]
    fn vivid_inputs_are_not_desaturated_below_their_own_saturation_cap() {
        let utility = ColourUtility::new("#3366ff").unwrap();

        let vivid = HslColour::from_coords(200.0, 0.9, 0.5);
        let muted = HslColour::from_coords(200.0, 0.05, 0.5);

        // Mid-ramp chroma scales with the resolved ceiling, so the vivid
        // input must come out more saturated than the muted one.
        let vivid_tint = utility.get_tint(&vivid, 50.0);
        let muted_tint = utility.get_tint(&muted, 50.0);
        assert!(vivid_tint.s() > muted_tint.s());
    }

    #[test]
    fn harmonised_colour_sits_between_target_and_base() {
        let utility = ColourUtility::new("#3366ff").unwrap();

        let strongly_mixed = utility.get_harmonised_colour("#ff0000", Some(100.0)).unwrap();
        let weakly_mixed = utility.get_harmonised_colour("#ff0000", Some(0.0)).unwrap();

        let red_hue = HslColour::parse("#ff0000").unwrap().h();
        // A full mix amount leaves the target hue untouched; both variants
        // keep the target's hue since only saturation/lightness are borrowed.
        assert!(circular_hue_distance(strongly_mixed.h(), red_hue) < 10.0);
        assert!(circular_hue_distance(weakly_mixed.h(), red_hue) < 10.0);
    }

    #[test]
    fn mix_colours_takes_percentages() {
        let utility = ColourUtility::new("#3366ff").unwrap();
        let red = HslColour::parse("#ff0000").unwrap();
        let blue = HslColour::parse("#0000ff").unwrap();

        let fully_first = utility.mix_colours(&red, &blue, 0.0);
        let fully_second = utility.mix_colours(&red, &blue, 100.0);

        assert_eq!(fully_first.hex(), red.hex());
        assert_eq!(fully_second.hex(), blue.hex());
    }

    #[test]
    fn tint_background_and_neutral_cap_can_be_overridden() {
        let utility = ColourUtility::new("#3366ff").unwrap();
        let colour = HslColour::parse("#10b981").unwrap();

        // The default form is the on-light, non-neutral lookup.
        let default_tint = utility.get_tint(&colour, 50.0);
        let explicit = utility.get_tint_with_background(&colour, 50.0, utility.on_light(), false);
        assert_eq!(default_tint.hex(), explicit.hex());

        // A darker background anchor flips the contrast branch and lands on
        // a different lightness.
        let on_dark = *utility.on_dark();
        let against_dark = utility.get_tint_with_background(&colour, 50.0, &on_dark, false);
        assert!(against_dark.l() != default_tint.l());

        // The neutral override caps mid-ramp chroma.
        let neutral = utility.get_tint_with_background(&colour, 50.0, utility.on_light(), true);
        assert!(neutral.s() <= ColourUtility::MAX_SATURATION_NEUTRAL);
    }

    #[test]
    fn tint_lookups_are_deterministic() {
        let utility = ColourUtility::new("#3366ff").unwrap();
        let colour = HslColour::parse("#10b981").unwrap();

        let first = utility.get_tint(&colour, 70.0);
        let second = utility.get_tint(&colour, 70.0);
        assert_eq!(first.h().to_bits(), second.h().to_bits());
        assert_eq!(first.s().to_bits(), second.s().to_bits());
        assert_eq!(first.l().to_bits(), second.l().to_bits());
    }

    #[test]
    fn unparseable_base_colour_is_fatal() {
        assert!(ColourUtility::new("not-a-colour").is_err());
        assert!(ColourUtility::new("#xyz").is_err());
    }
}
