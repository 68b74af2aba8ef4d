use rand::Rng;

/// C major, C4..C5. One is picked uniformly per effect application.
pub const SCALE_HZ: [f32; 8] = [
    261.63, 293.66, 329.63, 349.23, 392.00, 440.00, 493.88, 523.25,
];

// Envelope: gain starts at TONE_GAIN and decays exponentially to TONE_FLOOR
// over TONE_DURATION_SEC.
pub const TONE_GAIN: f32 = 0.3;
pub const TONE_FLOOR: f32 = 0.001;
pub const TONE_DURATION_SEC: f64 = 0.8;

#[inline]
pub fn pick_frequency(rng: &mut impl Rng) -> f32 {
    SCALE_HZ[rng.gen_range(0..SCALE_HZ.len())]
}
