//! Numeric curves behind perceptually even tint ramps.
//!
//! Two non-linear functions make the ramps look uniform to the eye: the CIE
//! Y → L* conversion and the "toe" compression near black. The remaining
//! constants parametrise the ramp shape; they must be reproduced verbatim for
//! output compatibility, none of them is independently derived.

/// Relative luminance above which a background counts as "light".
pub const BACKGROUND_LIGHTNESS_THRESHOLD: f32 = 0.18;
/// Width factor of the chroma parabola across a ramp.
pub const CHROMA_CURVE_FACTOR: f32 = 4.0;

pub const CIE_EXPONENT: f32 = 1.0 / 3.0;
pub const CIE_MULTIPLIER_HIGH: f32 = 116.0;
pub const CIE_MULTIPLIER_LOW: f32 = 903.296_296_2;
pub const CIE_OFFSET: f32 = 16.0;
/// Boundary between the linear and cube-root branches of [`y_to_lightness`].
pub const CIE_THRESHOLD: f32 = 0.008_856_451_6;

/// Maximum extra hue rotation, in degrees, blended in toward the dark end of
/// a ramp.
pub const HUE_SHIFT_FACTOR: f32 = 5.0;

pub const LIGHTNESS_CONTRAST_EXPONENT: f32 = 3.04;
pub const LIGHTNESS_CONTRAST_OFFSET: f32 = 0.05;
pub const LIGHTNESS_MAX: f32 = 1.0;
pub const LIGHTNESS_MIN: f32 = 0.0;
/// L* runs 0..100; ramp lightness runs 0..1.
pub const LIGHTNESS_SCALE_FACTOR: f32 = 100.0;

// Toe coefficients from Ottosson's Okhsl reference implementation.
pub const TOE_K1: f32 = 0.206;
pub const TOE_K2: f32 = 0.03;
pub const TOE_K3: f32 = (1.0 + TOE_K1) / (1.0 + TOE_K2);

/// Converts a CIE relative luminance Y (roughly 0..1) to perceptual
/// lightness L* (0..100).
///
/// The linear branch at and below [`CIE_THRESHOLD`] avoids the cube root's
/// infinite slope at zero.
pub fn y_to_lightness(y: f32) -> f32 {
    if y <= CIE_THRESHOLD {
        y * CIE_MULTIPLIER_LOW
    } else {
        CIE_MULTIPLIER_HIGH * y.powf(CIE_EXPONENT) - CIE_OFFSET
    }
}

/// Compresses lightness near black so perceptual steps stay even.
///
/// Solves the quadratic built from [`TOE_K1`]/[`TOE_K2`]/[`TOE_K3`]. No
/// clamping happens here; bounding the result is the caller's job.
pub fn apply_toe_curve(lightness: f32) -> f32 {
    let term = TOE_K3 * lightness - TOE_K1;
    0.5 * (term + (term * term + 4.0 * TOE_K2 * TOE_K3 * lightness).sqrt())
}
