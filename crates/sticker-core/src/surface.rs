use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    /// Exporting a blank surface is a caller error; the UI guards it with a
    /// user-visible prompt.
    #[error("drawing surface is blank")]
    Blank,
}

/// A drawing surface is blank iff no pixel differs from the fully
/// transparent initial state, i.e. every RGBA byte is zero.
#[inline]
pub fn is_blank(rgba: &[u8]) -> bool {
    rgba.iter().all(|&b| b == 0)
}

/// Backing-store size for a surface with the given CSS size and device
/// pixel ratio. Never collapses to zero on either axis.
#[inline]
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    let w = ((css_w * dpr) as u32).max(1);
    let h = ((css_h * dpr) as u32).max(1);
    (w, h)
}
