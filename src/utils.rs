// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! contains conversion functions between pose lists and isometries.
use nalgebra::{Isometry3, Translation3, UnitQuaternion, Vector3};

/// converts a position and intrinsic XYZ Euler angles to an Isometry
///
/// The resulting rotation is `Rx(rot_x) * Ry(rot_y) * Rz(rot_z)`.
pub fn xyz_euler_to_isometry(position: &[f64; 3], rotation: &[f64; 3]) -> Isometry3<f64> {
    let rot = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), rotation[0])
        * UnitQuaternion::from_axis_angle(&Vector3::y_axis(), rotation[1])
        * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), rotation[2]);
    Isometry3::from_parts(
        Translation3::new(position[0], position[1], position[2]),
        rot,
    )
}

/// converts an Isometry to a position and intrinsic XYZ Euler angles.
///
/// The second angle is in \[-pi/2, pi/2\].
pub fn isometry_to_xyz_euler(isometry: &Isometry3<f64>) -> ([f64; 3], [f64; 3]) {
    let t = isometry.translation.vector;
    let rot = isometry.rotation.to_rotation_matrix();
    let m = rot.matrix();
    let rot_y = f64::asin(m[(0, 2)].max(-1.).min(1.));
    let rot_x = f64::atan2(-m[(1, 2)], m[(2, 2)]);
    let rot_z = f64::atan2(-m[(0, 1)], m[(0, 0)]);
    ([t.x, t.y, t.z], [rot_x, rot_y, rot_z])
}

#[cfg(test)]
mod tests {
    use crate::utils::{isometry_to_xyz_euler, xyz_euler_to_isometry};
    use nalgebra::Vector3;
    use std::f64::consts::PI;

    #[test]
    fn rotation_order_is_xyz() {
        let iso = xyz_euler_to_isometry(&[0., 0., 0.], &[PI / 2., 0., PI / 2.]);
        // Rz first, then Rx: the x axis ends up on z.
        let x = iso.rotation * Vector3::x();
        assert!((x - Vector3::z()).norm() < 1e-9);
    }

    #[test]
    fn euler_angles_survive_conversion() {
        let position = [0.3, -0.2, 0.5];
        let rotation = [0.4, -0.7, 1.2];
        let (p, r) = isometry_to_xyz_euler(&xyz_euler_to_isometry(&position, &rotation));
        for i in 0..3 {
            assert!(f64::abs(p[i] - position[i]) < 1e-9);
            assert!(f64::abs(r[i] - rotation[i]) < 1e-9);
        }
    }
}
