//! Perceptual colour-scale generation in the Okhsl colour space.
//!
//! Builds visually even tint/shade ramps and a self-consistent set of derived
//! design colours (on-light/on-dark contrast anchors, harmonised accents)
//! from a single base colour, following Matthew Ström's palette generation
//! method: <https://matthewstrom.com/writing/generating-color-palettes/>
//!
//! Everything is synchronous, allocation-light and side-effect free: the same
//! inputs always produce bit-identical outputs.
//!
//! ```
//! use colour_scale::ColourUtility;
//!
//! let utility = ColourUtility::new("#3366ff")?;
//! let tinted = utility.get_base_tinted_colour("#ff0000")?;
//! println!("{} on {}", tinted, utility.on_light());
//! # Ok::<(), colour_scale::ParseColourError>(())
//! ```

pub mod math;

mod hsl_colour;
mod scale;
mod utility;

pub use hsl_colour::{HslColour, ParseColourError};
pub use scale::ColourScaleGenerator;
pub use utility::ColourUtility;
