use rand::Rng;

/// Stroke fill color: a random hue at full saturation and 50% lightness.
///
/// Only the hue varies, so one `f32` is the whole state; the CSS string is
/// derived on demand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeColor {
    pub hue: f32,
}

impl StrokeColor {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            hue: rng.gen_range(0.0..360.0),
        }
    }

    pub fn css(&self) -> String {
        format!("hsl({:.1}, 100%, 50%)", self.hue)
    }
}
