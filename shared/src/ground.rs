//! Downward ground probing for the kart's spherical collision volume.
//!
//! The simulation step casts the (slightly shrunk) collider sphere straight
//! down each tick and reads the contact normal and surface friction off the
//! first hit. The cast runs against a list of static track surfaces via
//! parry time-of-impact queries; the `GroundQuery` trait is the seam where
//! a hosting physics engine can substitute its own cast.

use nalgebra as na;
use rapier3d::parry::{
    query::{self, ShapeCastOptions},
    shape as pshape,
};

/// Common math aliases for clarity and consistency.
pub type Vec3 = na::Vector3<f32>;
pub type Quat = na::UnitQuaternion<f32>;
pub type Iso = na::Isometry3<f32>;

/// Result of a successful downward probe.
#[derive(Clone, Copy, Debug)]
pub struct GroundContact {
    /// World-space contact point on the surface.
    pub point: Vec3,
    /// World-space surface normal at the contact, opposing the cast.
    pub normal: Vec3,
    /// Dynamic friction of the surface material. Drives the offroad check.
    pub friction: f32,
}

/// The ground-probe seam between the simulation step and collision.
///
/// A miss is a definite "no ground within range", never an error.
pub trait GroundQuery {
    fn cast_ground(&self, center: Vec3, radius: f32, max_distance: f32) -> Option<GroundContact>;
}

/// Static track surface geometry supported by the built-in world.
///
/// - Plane: infinite plane satisfying `normal ⋅ x = dist`.
/// - Cuboid: oriented box with local half-extents, placed by translation
///   and rotation.
#[derive(Clone, Copy, Debug)]
pub enum TrackShape {
    Plane {
        /// World-space unit normal of the plane.
        normal: Vec3,
        /// Plane offset along the normal, i.e. `normal ⋅ x = dist`.
        dist: f32,
    },
    Cuboid {
        /// Local-space half-extents (hx, hy, hz).
        half_extents: Vec3,
        /// World-space translation of the box center.
        translation: Vec3,
        /// World-space rotation of the box.
        rotation: Quat,
    },
}

/// One track surface: geometry plus its material's dynamic friction.
#[derive(Clone, Copy, Debug)]
pub struct TrackSurface {
    pub shape: TrackShape,
    pub friction: f32,
}

/// A list of static surfaces forming the drivable world.
#[derive(Clone, Debug, Default)]
pub struct TrackWorld {
    surfaces: Vec<TrackSurface>,
}

impl TrackWorld {
    pub fn new(surfaces: Vec<TrackSurface>) -> Self {
        Self { surfaces }
    }

    pub fn push(&mut self, surface: TrackSurface) {
        self.surfaces.push(surface);
    }

    pub fn surfaces(&self) -> &[TrackSurface] {
        &self.surfaces
    }
}

impl GroundQuery for TrackWorld {
    /// Finds the earliest downward hit across all surfaces.
    fn cast_ground(&self, center: Vec3, radius: f32, max_distance: f32) -> Option<GroundContact> {
        if max_distance <= 0.0 || radius <= 0.0 {
            return None;
        }

        let ball = pshape::Ball::new(radius);
        let ball_iso: Iso = Iso::from_parts(
            na::Translation3::new(center.x, center.y, center.z),
            na::UnitQuaternion::identity(),
        );
        let vel = Vec3::new(0.0, -max_distance, 0.0);

        let mut best: Option<(f32, GroundContact)> = None;
        for surface in &self.surfaces {
            if let Some((fraction, normal)) = cast_ball_against_surface(ball_iso, &ball, vel, surface)
            {
                if best.as_ref().map_or(true, |(f, _)| fraction < *f) {
                    // Impact center along the cast; contact point sits one
                    // radius further along the inverted normal.
                    let impact_center = center + vel * fraction;
                    best = Some((fraction, GroundContact {
                        point: impact_center - normal * radius,
                        normal,
                        friction: surface.friction,
                    }));
                }
            }
        }

        best.map(|(_, contact)| contact)
    }
}

/// Cast a moving ball against a single static surface and return the hit
/// fraction and impact normal (on the moving ball, opposing the motion).
fn cast_ball_against_surface(
    ball_iso: Iso,
    ball: &pshape::Ball,
    vel: Vec3,
    surface: &TrackSurface,
) -> Option<(f32, Vec3)> {
    let mut opts = ShapeCastOptions::with_max_time_of_impact(1.0);
    opts.stop_at_penetration = true;

    let hit = match surface.shape {
        TrackShape::Plane { normal, dist } => {
            // Represent as a parry HalfSpace positioned at normal * dist.
            let unit_n = na::Unit::new_normalize(normal);
            let plane = pshape::HalfSpace { normal: unit_n };
            let anchor = normal * dist;
            let plane_iso = Iso::from_parts(
                na::Translation3::new(anchor.x, anchor.y, anchor.z),
                na::UnitQuaternion::identity(),
            );
            query::cast_shapes(
                &ball_iso,
                &vel,
                ball as &dyn pshape::Shape,
                &plane_iso,
                &na::Vector3::zeros(),
                &plane as &dyn pshape::Shape,
                opts,
            )
        }
        TrackShape::Cuboid {
            half_extents,
            translation,
            rotation,
        } => {
            let cuboid = pshape::Cuboid::new(half_extents);
            let box_iso = Iso::from_parts(
                na::Translation3::new(translation.x, translation.y, translation.z),
                rotation,
            );
            query::cast_shapes(
                &ball_iso,
                &vel,
                ball as &dyn pshape::Shape,
                &box_iso,
                &na::Vector3::zeros(),
                &cuboid as &dyn pshape::Shape,
                opts,
            )
        }
    };

    if let Ok(Some(hit)) = hit {
        let mut n = Vec3::new(
            hit.normal1.into_inner().x,
            hit.normal1.into_inner().y,
            hit.normal1.into_inner().z,
        );
        // Ensure the normal opposes the motion.
        if n.dot(&vel) > 0.0 {
            n = -n;
        }
        return Some((hit.time_of_impact, n));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_track(friction: f32) -> TrackWorld {
        TrackWorld::new(vec![TrackSurface {
            shape: TrackShape::Plane {
                normal: Vec3::new(0.0, 1.0, 0.0),
                dist: 0.0,
            },
            friction,
        }])
    }

    #[test]
    fn probe_hits_the_plane_within_range() {
        let world = flat_track(0.05);
        // Ball bottom at 0.15 above the plane, probe range 0.3.
        let contact = world
            .cast_ground(Vec3::new(0.0, 0.5, 0.0), 0.35, 0.3)
            .expect("expected ground hit");
        assert!((contact.normal - Vec3::new(0.0, 1.0, 0.0)).norm() < 1.0e-4);
        assert!((contact.friction - 0.05).abs() < 1.0e-6);
        assert!(contact.point.y.abs() < 1.0e-3);
    }

    #[test]
    fn probe_misses_beyond_range() {
        let world = flat_track(0.05);
        // Ball bottom 0.65 above the plane, beyond the 0.3 probe range.
        assert!(world.cast_ground(Vec3::new(0.0, 1.0, 0.0), 0.35, 0.3).is_none());
    }

    #[test]
    fn nearest_surface_wins() {
        // An offroad pad sits on top of the road plane; a probe above the
        // pad must report the pad's friction.
        let mut world = flat_track(0.05);
        world.push(TrackSurface {
            shape: TrackShape::Cuboid {
                half_extents: Vec3::new(2.0, 0.1, 2.0),
                translation: Vec3::new(0.0, 0.1, 0.0),
                rotation: Quat::identity(),
            },
            friction: 0.9,
        });

        let contact = world
            .cast_ground(Vec3::new(0.0, 0.7, 0.0), 0.35, 0.3)
            .expect("expected pad hit");
        assert!((contact.friction - 0.9).abs() < 1.0e-6);
    }

    #[test]
    fn degenerate_probe_parameters_read_as_a_miss() {
        let world = flat_track(0.05);
        assert!(world.cast_ground(Vec3::new(0.0, 0.5, 0.0), 0.35, 0.0).is_none());
        assert!(world.cast_ground(Vec3::new(0.0, 0.5, 0.0), 0.0, 0.3).is_none());
    }
}
