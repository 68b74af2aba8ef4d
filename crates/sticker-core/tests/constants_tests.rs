// Sanity checks on shared tuning constants and the tone table.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sticker_core::*;

#[test]
fn tone_table_is_the_eight_note_c_major_scale() {
    assert_eq!(SCALE_HZ.len(), 8);
    // C4 and C5 anchor the octave
    assert!((SCALE_HZ[0] - 261.63).abs() < 1e-2);
    assert!((SCALE_HZ[7] - 523.25).abs() < 1e-2);
    assert!((SCALE_HZ[7] / SCALE_HZ[0] - 2.0).abs() < 1e-3);
    // Strictly ascending
    for w in SCALE_HZ.windows(2) {
        assert!(w[1] > w[0]);
    }
}

#[test]
fn pick_frequency_only_returns_table_entries() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..500 {
        let f = pick_frequency(&mut rng);
        assert!(SCALE_HZ.contains(&f));
    }
}

#[test]
fn envelope_decays_from_audible_to_silence() {
    assert!(TONE_GAIN > TONE_FLOOR);
    assert!(TONE_FLOOR > 0.0); // exponential ramps cannot reach zero
    assert!(TONE_DURATION_SEC > 0.0);
}

#[test]
fn effect_timing_constants_are_positive() {
    assert!(COLOR_EFFECT_MS > 0);
    assert!(PARTICLE_LIFETIME_MS > 0);
    assert!(SPLIT_LIFETIME_MS > 0);
    // Clones expire before the original reappears check fires at the same
    // delay, so the two share one constant
    assert_eq!(SPLIT_LIFETIME_MS, 800);
}

#[test]
fn particle_distance_band_is_sane() {
    assert!(PARTICLE_MIN_DISTANCE > 0.0);
    assert!(PARTICLE_MAX_DISTANCE > PARTICLE_MIN_DISTANCE);
    assert_eq!(PARTICLE_COUNT, 15);
}

#[test]
fn item_footprint_fits_common_viewports() {
    assert!(ITEM_SIZE > 0.0);
    assert!(ITEM_SIZE < 768.0); // smallest tablet dimension
}
