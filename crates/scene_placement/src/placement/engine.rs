//! Randomized placement search with a deterministic fallback

use rand::rngs::StdRng;

use crate::config::ConfigError;
use crate::core::config::PlacementConfig;
use crate::foundation::math::{component_max, Vec3};
use crate::physics::collision::BoundingSphere;

use super::random::{RandomSource, RngSource};

/// Anything the placement engine can position
///
/// The engine only looks at the effective radius and the current position
/// of an object. Objects without a position do not occupy space.
pub trait Placeable {
    /// Radius used for separation tests
    fn effective_radius(&self) -> f32;

    /// Current center, `None` until placed
    fn position(&self) -> Option<Vec3>;

    /// Assign the center
    fn set_position(&mut self, position: Vec3);

    /// Bounding sphere of a placed object
    fn bounding_sphere(&self) -> Option<BoundingSphere> {
        self.position()
            .map(|center| BoundingSphere::new(center, self.effective_radius()))
    }
}

/// How a position was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// A collision-free candidate was found after `shifts` shift attempts
    Free {
        /// Number of shifts applied to the initial candidate
        shifts: u32,
    },
    /// The retry budget ran out and the object was parked past the
    /// occupied region
    Fallback,
}

/// Result of placing one object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Assigned center
    pub position: Vec3,
    /// Whether the random search succeeded
    pub outcome: PlacementOutcome,
    /// Number of candidates tested against the existing objects
    pub collision_checks: u32,
}

impl Placement {
    /// True when the position came from the fallback rule
    pub fn is_fallback(&self) -> bool {
        self.outcome == PlacementOutcome::Fallback
    }
}

/// Placement engine driven by the standard `rand` generator
pub type DefaultPlacementEngine = PlacementEngine<RngSource<StdRng>>;

/// Finds positions for new objects that keep clear of existing ones
///
/// A candidate is drawn uniformly from a cube around the origin. While it
/// comes within `separation_margin` of any existing object it is shifted by
/// `shift_step` along every axis, each axis in a random direction. After
/// `max_retries` failed shifts the object is placed `fallback_offset` past the
/// per-axis maxima of all existing positions.
///
/// Previously placed objects are never moved.
#[derive(Debug, Clone)]
pub struct PlacementEngine<R> {
    config: PlacementConfig,
    random: R,
}

impl DefaultPlacementEngine {
    /// Engine with a generator seeded from entropy
    pub fn from_entropy(config: PlacementConfig) -> Result<Self, ConfigError> {
        Self::new(config, RngSource::from_entropy())
    }

    /// Engine with a reproducible generator
    pub fn seeded(config: PlacementConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, RngSource::seeded(seed))
    }
}

impl<R: RandomSource> PlacementEngine<R> {
    /// Create an engine using the given source of randomness
    ///
    /// The configuration is validated first, so a running engine never
    /// samples from an infinite range or shifts by a non-finite step.
    pub fn new(config: PlacementConfig, random: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, random })
    }

    /// Active configuration
    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Access the source of randomness
    pub fn random_mut(&mut self) -> &mut R {
        &mut self.random
    }

    /// Place `entity` clear of `existing` and assign its position
    pub fn place<E, P>(&mut self, entity: &mut E, existing: &[P]) -> Placement
    where
        E: Placeable + ?Sized,
        P: Placeable,
    {
        if let Some(previous) = entity.position() {
            log::warn!(
                "Re-placing an object that already sits at ({:.1}, {:.1}, {:.1})",
                previous.x, previous.y, previous.z
            );
        }

        let placement = self.find_position(entity.effective_radius(), existing);
        entity.set_position(placement.position);
        placement
    }

    /// Search for a position for an object of `radius` without assigning it
    pub fn find_position<P: Placeable>(&mut self, radius: f32, existing: &[P]) -> Placement {
        let obstacles: Vec<BoundingSphere> =
            existing.iter().filter_map(|object| object.bounding_sphere()).collect();

        let mut candidate = self.random_candidate();
        let mut checks = 1;
        let mut colliding = self.collides(candidate, radius, &obstacles);
        let mut retries = 0;
        let mut shifts = 0;

        while retries < self.config.max_retries && colliding {
            candidate = self.shift_candidate(candidate);
            shifts += 1;
            checks += 1;
            colliding = self.collides(candidate, radius, &obstacles);

            if !colliding {
                break;
            }

            retries += 1;
            log::trace!("Candidate still colliding after {} shifts", shifts);
        }

        if colliding {
            let position = self.fallback_position(&obstacles);
            log::warn!(
                "No free spot for radius {:.1} among {} objects after {} checks, \
                 falling back to ({:.1}, {:.1}, {:.1})",
                radius,
                obstacles.len(),
                checks,
                position.x,
                position.y,
                position.z
            );
            return Placement {
                position,
                outcome: PlacementOutcome::Fallback,
                collision_checks: checks,
            };
        }

        log::debug!(
            "Placed radius {:.1} at ({:.1}, {:.1}, {:.1}) after {} shifts",
            radius, candidate.x, candidate.y, candidate.z, shifts
        );
        Placement {
            position: candidate,
            outcome: PlacementOutcome::Free { shifts },
            collision_checks: checks,
        }
    }

    /// Deterministic position past everything in `obstacles`
    ///
    /// Each axis takes the maximum coordinate over all obstacles, possibly
    /// from different obstacles, plus the fallback offset. With no
    /// obstacles the maxima are taken as the origin.
    pub fn fallback_position(&self, obstacles: &[BoundingSphere]) -> Vec3 {
        let max = component_max(obstacles.iter().map(|sphere| &sphere.center))
            .unwrap_or_else(Vec3::zeros);
        max.add_scalar(self.config.fallback_offset)
    }

    /// Test a candidate center against every obstacle
    pub fn collides(&self, candidate: Vec3, radius: f32, obstacles: &[BoundingSphere]) -> bool {
        let probe = BoundingSphere::new(candidate, radius);
        obstacles
            .iter()
            .any(|other| probe.collides_with(other, self.config.separation_margin))
    }

    fn random_candidate(&mut self) -> Vec3 {
        let half_extent = self.config.half_extent;
        let x = self.random.coordinate(half_extent);
        let y = self.random.coordinate(half_extent);
        let z = self.random.coordinate(half_extent);
        Vec3::new(x, y, z)
    }

    fn shift_candidate(&mut self, candidate: Vec3) -> Vec3 {
        let step = self.config.shift_step;
        let mut shifted = candidate;
        for axis in 0..3 {
            shifted[axis] += if self.random.shift_positive() { step } else { -step };
        }
        shifted
    }
}
