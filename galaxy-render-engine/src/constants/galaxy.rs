/// Number of halo stars in the spherical star field.
pub const STAR_COUNT: usize = 5000;

/// Number of stars packed into the dense core.
pub const CORE_COUNT: usize = 1000;

/// Declared spiral arm count. The sampling maths does not use it yet; the
/// halo is a centre-biased sphere.
pub const GALAXY_ARMS: u32 = 5;

/// Radius of the halo sphere in world units.
pub const GALAXY_RADIUS: f32 = 20.0;

/// Radial exponent for halo sampling. Values above 1 pull stars toward the centre.
pub const HALO_DISTRIBUTION_SHAPE: f32 = 1.2;

/// Halo spin in radians per second of session time.
pub const STARS_ROTATION_SPEED: f64 = 0.05;

/// Core spin in radians per second of session time (twice the halo).
pub const CORE_ROTATION_SPEED: f64 = 0.1;

/// Scale applied to wall-clock milliseconds before the shimmer oscillators.
pub const SHIMMER_SPEED: f64 = 0.4;

pub const STAR_SHIMMER_FREQUENCY: f64 = 0.002;
pub const CORE_SHIMMER_FREQUENCY: f64 = 0.004;

/// Halo opacity = |sin| * swing + floor, giving [0.2, 1.0].
pub const STAR_OPACITY_FLOOR: f64 = 0.2;
pub const STAR_OPACITY_SWING: f64 = 0.8;

/// Core opacity = |sin| * swing + floor, giving [0.4, 1.0].
pub const CORE_OPACITY_FLOOR: f64 = 0.4;
pub const CORE_OPACITY_SWING: f64 = 0.6;
