//! Camera placement for a spherical viewpoint.
//!
//! World space is Z-up. A [`CameraPose`] sits at the Cartesian position of a
//! [`SphericalCoordinate`], looks at the origin down its local -Z axis, and is
//! then rolled about that view axis.

use glam::{DMat3, DMat4, DQuat, DVec3};
use serde::Serialize;

use viewsweep_core::SphericalCoordinate;

/// Below this squared cross-product length the view axis counts as vertical.
const VERTICAL_EPSILON: f64 = 1e-12;

/// Converts a spherical coordinate to a Z-up Cartesian position.
///
/// `x = r cos(el) sin(az)`, `y = r cos(el) cos(az)`, `z = r sin(el)`.
pub fn spherical_to_cartesian(coord: &SphericalCoordinate) -> DVec3 {
    let azimuth = coord.azimuth.to_radians();
    let elevation = coord.elevation.to_radians();
    DVec3::new(
        coord.radius * elevation.cos() * azimuth.sin(),
        coord.radius * elevation.cos() * azimuth.cos(),
        coord.radius * elevation.sin(),
    )
}

/// Camera position and orientation in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraPose {
    /// Camera position.
    pub position: DVec3,
    /// Camera-to-world rotation. The camera looks down its local -Z.
    pub rotation: DQuat,
}

impl CameraPose {
    /// Places a camera at `coord`, aimed at the origin and rolled by `coord.roll`.
    pub fn from_coordinate(coord: &SphericalCoordinate) -> Self {
        let position = spherical_to_cartesian(coord);
        let forward = (-position).normalize();

        // world up is undefined when looking straight up or down
        let up_hint = if forward.cross(DVec3::Z).length_squared() < VERTICAL_EPSILON {
            DVec3::Y
        } else {
            DVec3::Z
        };
        let right = forward.cross(up_hint).normalize();
        let up = right.cross(forward);

        let look = DQuat::from_mat3(&DMat3::from_cols(right, up, -forward));
        let rotation = (look * DQuat::from_rotation_z(coord.roll.to_radians())).normalize();

        Self { position, rotation }
    }

    /// Returns the viewing direction.
    pub fn forward(&self) -> DVec3 {
        self.rotation * DVec3::NEG_Z
    }

    /// Returns the camera's up direction.
    pub fn up(&self) -> DVec3 {
        self.rotation * DVec3::Y
    }

    /// Returns the camera's right direction.
    pub fn right(&self) -> DVec3 {
        self.rotation * DVec3::X
    }

    /// Returns the view matrix (world to camera space).
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.position, self.position + self.forward(), self.up())
    }

    /// Returns the camera-to-world transform.
    pub fn transform(&self) -> DMat4 {
        DMat4::from_rotation_translation(self.rotation, self.position)
    }
}

impl From<&SphericalCoordinate> for CameraPose {
    fn from(coord: &SphericalCoordinate) -> Self {
        Self::from_coordinate(coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_eq(a: DVec3, b: DVec3) {
        assert!(a.abs_diff_eq(b, 1e-9), "{a:?} != {b:?}");
    }

    #[test]
    fn test_spherical_to_cartesian_axes() {
        let front = SphericalCoordinate::new(2.0, 0.0, 0.0, 0.0);
        assert_vec_eq(spherical_to_cartesian(&front), DVec3::new(0.0, 2.0, 0.0));

        let right = SphericalCoordinate::new(1.0, 90.0, 0.0, 0.0);
        assert_vec_eq(spherical_to_cartesian(&right), DVec3::X);

        let top = SphericalCoordinate::new(1.0, 0.0, 90.0, 0.0);
        assert_vec_eq(spherical_to_cartesian(&top), DVec3::Z);
    }

    #[test]
    fn test_front_view_orientation() {
        let pose = CameraPose::from_coordinate(&SphericalCoordinate::new(1.0, 0.0, 0.0, 0.0));
        assert_vec_eq(pose.forward(), DVec3::NEG_Y);
        assert_vec_eq(pose.up(), DVec3::Z);
        assert_vec_eq(pose.right(), DVec3::NEG_X);
    }

    #[test]
    fn test_pole_views_are_well_defined() {
        for elevation in [90.0, -90.0] {
            let pose =
                CameraPose::from_coordinate(&SphericalCoordinate::new(1.0, 0.0, elevation, 0.0));
            assert!(pose.rotation.is_finite());
            assert_vec_eq(pose.forward(), -pose.position.normalize());
            assert!(pose.up().dot(pose.forward()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_roll_rotates_about_view_axis() {
        let level = CameraPose::from_coordinate(&SphericalCoordinate::new(1.0, 30.0, 20.0, 0.0));
        let rolled = CameraPose::from_coordinate(&SphericalCoordinate::new(1.0, 30.0, 20.0, 90.0));
        assert_vec_eq(rolled.forward(), level.forward());
        assert_vec_eq(rolled.up(), -level.right());
    }

    #[test]
    fn test_view_matrix_maps_origin_onto_view_axis() {
        let coord = SphericalCoordinate::new(3.0, 135.0, -40.0, 15.0);
        let pose = CameraPose::from_coordinate(&coord);
        let origin_in_view = pose.view_matrix().transform_point3(DVec3::ZERO);
        assert_vec_eq(origin_in_view, DVec3::new(0.0, 0.0, -3.0));
    }
}
