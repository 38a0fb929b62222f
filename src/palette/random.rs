//! Random swatch colors.

use rand::Rng;
use rand::distributions::Standard;

use crate::draw::HexColor;

/// Maps a uniform sample in `[0, 1)` to a color channel.
///
/// The sample is scaled by 256 and rounded, which can land on 256 for
/// samples close to 1; the result is clamped so every channel prints as
/// exactly two hex digits.
pub fn channel_from_unit(sample: f64) -> u8 {
    (sample * 256.0).round().clamp(0.0, 255.0) as u8
}

/// Draws one channel from `rng`.
pub fn random_channel<R: Rng>(rng: &mut R) -> u8 {
    let sample: f64 = rng.sample(Standard);
    channel_from_unit(sample)
}

/// Draws a color with three independent channels.
pub fn random_color<R: Rng>(rng: &mut R) -> HexColor {
    let r = random_channel(rng);
    let g = random_channel(rng);
    let b = random_channel(rng);
    HexColor::new(r, g, b)
}
