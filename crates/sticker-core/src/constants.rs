// Shared tuning constants used by both the core logic and the web frontend.

// Item footprint (CSS px): placement keeps the whole square on screen, drag
// clamping uses the live rendered size instead (scale effects change it).
pub const ITEM_SIZE: f32 = 200.0;

// Stroke rendering
pub const STROKE_WIDTH: f64 = 5.0;

// Effect timing
pub const COLOR_EFFECT_MS: i32 = 1000; // transient color classes have no animationend
pub const PARTICLE_LIFETIME_MS: i32 = 1000;
pub const SPLIT_LIFETIME_MS: i32 = 800;

// Particle burst shape
pub const PARTICLE_COUNT: usize = 15;
pub const PARTICLE_MIN_DISTANCE: f32 = 20.0;
pub const PARTICLE_MAX_DISTANCE: f32 = 100.0;

// Split clones travel a fixed radius
pub const SPLIT_DISTANCE: f32 = 60.0;
