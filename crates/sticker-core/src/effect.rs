use glam::Vec2;
use rand::Rng;

use crate::constants::{
    PARTICLE_COUNT, PARTICLE_MAX_DISTANCE, PARTICLE_MIN_DISTANCE, SPLIT_DISTANCE,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleStyle {
    Sparkle,
    Heart,
}

impl ParticleStyle {
    /// CSS class suffix on particle elements.
    pub fn class(self) -> &'static str {
        match self {
            ParticleStyle::Sparkle => "sparkle",
            ParticleStyle::Heart => "heart",
        }
    }
}

/// What applying an effect does to the released sticker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    /// CSS keyframe class, removed when its single playthrough ends.
    Animation,
    /// Transient color class, removed after a fixed delay instead (these
    /// classes have no animation to end).
    Color,
    /// Decorative burst around the sticker; the sticker itself is untouched.
    Particles(ParticleStyle),
    /// Hide the sticker and scatter this many short-lived clones.
    Split(u32),
}

/// One entry of the effect catalogue. `name` doubles as the CSS class.
#[derive(Clone, Copy, Debug)]
pub struct EffectSpec {
    pub name: &'static str,
    pub kind: EffectKind,
}

const fn anim(name: &'static str) -> EffectSpec {
    EffectSpec {
        name,
        kind: EffectKind::Animation,
    }
}

const fn color(name: &'static str) -> EffectSpec {
    EffectSpec {
        name,
        kind: EffectKind::Color,
    }
}

/// The full, fixed catalogue. Read-only; selection is uniform over all
/// entries with no de-duplication across consecutive draws.
pub const CATALOG: &[EffectSpec] = &[
    anim("rotate-cw"),
    anim("rotate-ccw"),
    anim("spin-fast"),
    anim("rotate-y"),
    anim("rotate-x"),
    anim("rotate-180"),
    anim("bow"),
    anim("swing"),
    anim("scale-up-2"),
    anim("scale-up-1.5"),
    anim("scale-down-0.5"),
    anim("scale-down-0.1"),
    anim("pulse"),
    anim("stretch-x"),
    anim("stretch-y"),
    anim("inflate"),
    anim("jump"),
    anim("high-jump"),
    anim("slide-right"),
    anim("slide-left"),
    anim("draw-circle"),
    anim("bounce-down"),
    anim("float"),
    anim("warp"),
    anim("blink-3"),
    anim("blink-slow"),
    anim("fade-out-in"),
    anim("outline"),
    anim("blur"),
    anim("add-shadow"),
    anim("sepia"),
    anim("grayscale"),
    EffectSpec {
        name: "particles-sparkle",
        kind: EffectKind::Particles(ParticleStyle::Sparkle),
    },
    EffectSpec {
        name: "particles-heart",
        kind: EffectKind::Particles(ParticleStyle::Heart),
    },
    EffectSpec {
        name: "split-2",
        kind: EffectKind::Split(2),
    },
    EffectSpec {
        name: "split-3",
        kind: EffectKind::Split(3),
    },
    color("color-red"),
    color("color-blue"),
    color("color-yellow"),
    color("color-green"),
    color("color-orange"),
    color("color-pink"),
    color("color-purple"),
    color("color-cyan"),
    color("color-gold"),
    anim("color-rainbow"),
];

/// Uniform draw from the catalogue. Every call is independent; immediate
/// repeats are possible and expected.
pub fn pick(rng: &mut impl Rng) -> &'static EffectSpec {
    &CATALOG[rng.gen_range(0..CATALOG.len())]
}

/// Offsets for one particle burst: `PARTICLE_COUNT` directions uniform over
/// the full circle, radial distance uniform in
/// [`PARTICLE_MIN_DISTANCE`, `PARTICLE_MAX_DISTANCE`).
pub fn particle_offsets(rng: &mut impl Rng) -> Vec<Vec2> {
    (0..PARTICLE_COUNT)
        .map(|_| {
            let angle = rng.gen_range(0.0f32..360.0).to_radians();
            let distance = rng.gen_range(PARTICLE_MIN_DISTANCE..PARTICLE_MAX_DISTANCE);
            Vec2::new(angle.cos(), angle.sin()) * distance
        })
        .collect()
}

/// Offsets for split clones: `count` directions evenly spaced around the
/// circle starting at 0°, all at `SPLIT_DISTANCE`.
pub fn split_offsets(count: u32) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let angle = (360.0 / count as f32 * i as f32).to_radians();
            Vec2::new(angle.cos(), angle.sin()) * SPLIT_DISTANCE
        })
        .collect()
}
