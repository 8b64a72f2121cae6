//! Random triangle sampling
//!
//! Each triangle is built in a local frame from three normally distributed
//! magnitudes, then moved into world space by a random rigid transform:
//! a uniform translation inside the half-extent box composed with a chain
//! of random-axis, random-angle rotations.

use nalgebra::Vector3;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::TAU;

use crate::error::{GenError, Result};
use crate::geometry::{RigidTransform, ThirdVertex, Triangle, local_frame};

/// Number of random rotations composed per triangle
pub const DEFAULT_ROTATIONS: usize = 3;

/// Largest accepted half-extent and distance bound; keeps rotated and
/// translated coordinates finite
pub const MAX_MAGNITUDE: f64 = 1e100;

/// Standard deviations covered by the distance bound. The normal sampler
/// never strays further than this from the mean.
const STD_SPAN: f64 = 64.0;

/// Samples triangles sharing one distance distribution and bounding box
#[derive(Debug, Clone)]
pub struct TriangleSampler {
    distance: Normal<f64>,
    half_extent: Vector3<f64>,
    rotations: usize,
    third_vertex: ThirdVertex,
}

impl TriangleSampler {
    /// Create a sampler for vertex distances drawn from N(`mean`, `std`)
    /// and translations within `[-half_extent, +half_extent]` per axis.
    pub fn new(mean: f64, std: f64, half_extent: Vector3<f64>) -> Result<Self> {
        if !mean.is_finite() {
            return Err(invalid(format!("mean must be finite, got {mean}")));
        }
        if !std.is_finite() || std < 0.0 {
            return Err(invalid(format!(
                "std must be finite and non-negative, got {std}"
            )));
        }
        let reach = mean.abs() + STD_SPAN * std;
        if !reach.is_finite() || reach > MAX_MAGNITUDE {
            return Err(invalid(format!(
                "|mean| + {STD_SPAN} * std must not exceed {MAX_MAGNITUDE:e}, got {reach:e}"
            )));
        }
        if half_extent
            .iter()
            .any(|h| !h.is_finite() || *h < 0.0 || *h > MAX_MAGNITUDE)
        {
            return Err(invalid(format!(
                "half extent must be in [0, {MAX_MAGNITUDE:e}], got ({}, {}, {})",
                half_extent.x, half_extent.y, half_extent.z
            )));
        }
        let distance = Normal::new(mean, std).map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            distance,
            half_extent,
            rotations: DEFAULT_ROTATIONS,
            third_vertex: ThirdVertex::default(),
        })
    }

    /// Set how many random rotations are composed (0 fixes rotation to identity)
    pub fn with_rotations(mut self, rotations: usize) -> Self {
        self.rotations = rotations;
        self
    }

    pub fn with_third_vertex(mut self, third_vertex: ThirdVertex) -> Self {
        self.third_vertex = third_vertex;
        self
    }

    /// Draw the three vertex magnitudes, folded to be non-negative
    pub fn sample_lengths<R: Rng + ?Sized>(&self, rng: &mut R) -> [f64; 3] {
        [
            self.distance.sample(rng).abs(),
            self.distance.sample(rng).abs(),
            self.distance.sample(rng).abs(),
        ]
    }

    /// Draw a translation inside the box, then compose the random rotations
    pub fn sample_transform<R: Rng + ?Sized>(&self, rng: &mut R) -> RigidTransform {
        let offset = Vector3::new(
            uniform_symmetric(rng, self.half_extent.x),
            uniform_symmetric(rng, self.half_extent.y),
            uniform_symmetric(rng, self.half_extent.z),
        );

        let mut transform = RigidTransform::from_translation(offset);
        for _ in 0..self.rotations {
            let axis = Vector3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            let angle = rng.gen_range(0.0..TAU);
            transform = transform.rotate(axis, angle);
        }
        transform
    }

    /// Sample one triangle in world space
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Triangle {
        let lengths = self.sample_lengths(rng);
        let transform = self.sample_transform(rng);
        let [a, b, c] = local_frame(lengths, self.third_vertex).map(|p| transform.apply(&p));
        Triangle::new(a, b, c)
    }

    /// Sample `count` triangles
    pub fn sample_many<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Triangle> {
        (0..count).map(|_| self.sample(rng)).collect()
    }
}

fn uniform_symmetric<R: Rng + ?Sized>(rng: &mut R, half: f64) -> f64 {
    if half == 0.0 {
        0.0
    } else {
        half * rng.gen_range(-1.0_f64..=1.0)
    }
}

fn invalid(reason: String) -> GenError {
    GenError::InvalidParameters(reason)
}

/// Draw an integer from the half-open range `[min, max)`.
///
/// An empty range (`min == max`) yields `min`.
pub fn sample_count<R: Rng + ?Sized>(rng: &mut R, min: usize, max: usize) -> usize {
    if max <= min {
        min
    } else {
        rng.gen_range(min..max)
    }
}
