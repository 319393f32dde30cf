use std::f64::consts::TAU;

use bevy::math::Vec3;
use rand::Rng;
use rand::distributions::Standard;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeneratorError {
    #[error("halo radius must be finite and positive, got {0}")]
    InvalidRadius(f32),
    #[error("halo distribution shape must be finite and positive, got {0}")]
    InvalidDistributionShape(f32),
}

/// Fixed-length point positions. Built once by a generator and consumed whole
/// when the point-set mesh is created.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionBuffer(Box<[Vec3]>);

impl PositionBuffer {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec3> {
        self.0.iter()
    }
}

impl FromIterator<Vec3> for PositionBuffer {
    fn from_iter<I: IntoIterator<Item = Vec3>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Sampling parameters for the spherical halo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HaloParams {
    count: usize,
    radius: f32,
    distribution_shape: f32,
}

impl HaloParams {
    pub fn new(count: usize, radius: f32, distribution_shape: f32) -> Result<Self, GeneratorError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeneratorError::InvalidRadius(radius));
        }
        if !distribution_shape.is_finite() || distribution_shape <= 0.0 {
            return Err(GeneratorError::InvalidDistributionShape(distribution_shape));
        }

        Ok(Self {
            count,
            radius,
            distribution_shape,
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

/// Sample `params.count` points inside a sphere of `params.radius`.
///
/// The radial draw is raised to `distribution_shape`, so shapes above 1 crowd
/// stars toward the centre. The polar angle comes from the inverse CDF of
/// `cos θ`, which keeps each spherical shell evenly covered instead of
/// clustering at the poles. Draw order per point is radius, azimuth, polar.
pub fn generate_halo<R: Rng + ?Sized>(params: &HaloParams, rng: &mut R) -> PositionBuffer {
    let radius = f64::from(params.radius);
    let shape = f64::from(params.distribution_shape);

    (0..params.count)
        .map(|_| {
            let radial: f64 = rng.sample(Standard);
            let azimuthal: f64 = rng.sample(Standard);
            let polar: f64 = rng.sample(Standard);

            let r = radial.powf(shape) * radius;
            let phi = azimuthal * TAU;
            let theta = (2.0 * polar - 1.0).acos();

            Vec3::new(
                (r * theta.sin() * phi.cos()) as f32,
                (r * theta.sin() * phi.sin()) as f32,
                (r * theta.cos()) as f32,
            )
        })
        .collect()
}

/// Sample `count` points uniformly inside the cube [-1, 1]^3.
pub fn generate_core<R: Rng + ?Sized>(count: usize, rng: &mut R) -> PositionBuffer {
    let mut axis = move || {
        let u: f64 = rng.sample(Standard);
        ((u - 0.5) * 2.0) as f32
    };

    (0..count)
        .map(|_| {
            let x = axis();
            let y = axis();
            let z = axis();
            Vec3::new(x, y, z)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::galaxy::{GALAXY_RADIUS, HALO_DISTRIBUTION_SHAPE, STAR_COUNT};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn galaxy_halo() -> HaloParams {
        HaloParams::new(STAR_COUNT, GALAXY_RADIUS, HALO_DISTRIBUTION_SHAPE).unwrap()
    }

    #[test]
    fn halo_stays_inside_galaxy_radius() {
        let mut rng = StdRng::seed_from_u64(7);
        let halo = generate_halo(&galaxy_halo(), &mut rng);

        assert_eq!(halo.len(), STAR_COUNT);
        for point in halo.iter() {
            assert!(point.length() <= 20.0001, "point {point} escaped the halo");
        }
    }

    #[test]
    fn halo_is_denser_toward_the_centre() {
        let mut rng = StdRng::seed_from_u64(11);
        let halo = generate_halo(&galaxy_halo(), &mut rng);

        let inner = halo.iter().filter(|p| p.length() < GALAXY_RADIUS * 0.5).count();
        // With shape 1.2, P(r < R/2) = 0.5^(1/1.2) ~ 0.56.
        assert!(inner > STAR_COUNT / 2, "only {inner} stars in the inner half");
    }

    #[test]
    fn zero_count_yields_empty_buffers() {
        let mut rng = StdRng::seed_from_u64(3);
        let params = HaloParams::new(0, GALAXY_RADIUS, HALO_DISTRIBUTION_SHAPE).unwrap();

        assert!(generate_halo(&params, &mut rng).is_empty());
        assert!(generate_core(0, &mut rng).is_empty());
    }

    #[test]
    fn invalid_params_are_rejected() {
        assert_eq!(
            HaloParams::new(10, 0.0, 1.2),
            Err(GeneratorError::InvalidRadius(0.0))
        );
        assert_eq!(
            HaloParams::new(10, 20.0, -1.0),
            Err(GeneratorError::InvalidDistributionShape(-1.0))
        );
        assert!(HaloParams::new(10, f32::NAN, 1.2).is_err());
    }

    #[test]
    fn same_seed_reproduces_identical_buffers() {
        let params = galaxy_halo();

        let mut first = StdRng::seed_from_u64(42);
        let halo_a = generate_halo(&params, &mut first);
        let core_a = generate_core(1000, &mut first);

        let mut second = StdRng::seed_from_u64(42);
        let halo_b = generate_halo(&params, &mut second);
        let core_b = generate_core(1000, &mut second);

        assert_eq!(halo_a, halo_b);
        assert_eq!(core_a, core_b);
    }

    #[test]
    fn different_seeds_diverge() {
        let params = galaxy_halo();
        let halo_a = generate_halo(&params, &mut StdRng::seed_from_u64(1));
        let halo_b = generate_halo(&params, &mut StdRng::seed_from_u64(2));

        assert_ne!(halo_a, halo_b);
    }

    proptest! {
        #[test]
        fn halo_points_respect_any_radius(
            seed in any::<u64>(),
            count in 0usize..512,
            radius in 0.1f32..100.0,
            shape in 0.25f32..4.0,
        ) {
            let params = HaloParams::new(count, radius, shape).unwrap();
            let halo = generate_halo(&params, &mut StdRng::seed_from_u64(seed));

            prop_assert_eq!(halo.len(), count);
            for point in halo.iter() {
                prop_assert!(point.length() <= radius * (1.0 + 1e-5));
            }
        }

        #[test]
        fn core_points_stay_in_unit_cube(seed in any::<u64>(), count in 0usize..512) {
            let core = generate_core(count, &mut StdRng::seed_from_u64(seed));

            prop_assert_eq!(core.len(), count);
            for point in core.iter() {
                prop_assert!(point.abs().max_element() <= 1.0);
            }
        }
    }
}
