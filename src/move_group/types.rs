// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains the value types exchanged with a move group.
use std::collections::BTreeMap;
use std::ops::{Index, IndexMut};

use nalgebra::Isometry3;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::exception::{CommanderException, CommanderResult};
use crate::utils::{isometry_to_xyz_euler, xyz_euler_to_isometry};

/// Selects one of the six values of a [`Pose`].
#[derive(Serialize_repr, Deserialize_repr, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Axis {
    X,
    Y,
    Z,
    RotX,
    RotY,
    RotZ,
}

impl Axis {
    /// All axes in pose order.
    pub const ALL: [Axis; 6] = [
        Axis::X,
        Axis::Y,
        Axis::Z,
        Axis::RotX,
        Axis::RotY,
        Axis::RotZ,
    ];
}

/// Pose of an end effector as `[x, y, z, rot_x, rot_y, rot_z]`.
///
/// Positions are in \[m\], rotations are intrinsic XYZ Euler angles in \[rad\].
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Default)]
pub struct Pose {
    pub values: [f64; 6],
}

impl Pose {
    pub fn new(position: [f64; 3], rotation: [f64; 3]) -> Self {
        Pose {
            values: [
                position[0],
                position[1],
                position[2],
                rotation[0],
                rotation[1],
                rotation[2],
            ],
        }
    }
    /// Creates a pose from a list of values.
    /// # Errors
    /// * [`InvalidPoseException`](`crate::exception::CommanderException::InvalidPoseException`)
    /// if `values` does not contain exactly 6 entries.
    pub fn from_slice(values: &[f64]) -> CommanderResult<Self> {
        if values.len() != 6 {
            return Err(CommanderException::InvalidPoseException {
                length: values.len(),
            });
        }
        let mut pose = Pose::default();
        pose.values.copy_from_slice(values);
        Ok(pose)
    }
    pub fn position(&self) -> [f64; 3] {
        [self.values[0], self.values[1], self.values[2]]
    }
    pub fn rotation(&self) -> [f64; 3] {
        [self.values[3], self.values[4], self.values[5]]
    }
    pub fn to_isometry(&self) -> Isometry3<f64> {
        xyz_euler_to_isometry(&self.position(), &self.rotation())
    }
    pub fn from_isometry(isometry: &Isometry3<f64>) -> Self {
        let (position, rotation) = isometry_to_xyz_euler(isometry);
        Pose::new(position, rotation)
    }
}

impl Index<Axis> for Pose {
    type Output = f64;

    fn index(&self, axis: Axis) -> &f64 {
        &self.values[axis as usize]
    }
}

impl IndexMut<Axis> for Pose {
    fn index_mut(&mut self, axis: Axis) -> &mut f64 {
        &mut self.values[axis as usize]
    }
}

/// A joint space goal for a move group.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum JointValueTarget {
    /// Values for all variables of the group, in the order of [`get_joints`](`crate::MoveGroup::get_joints`).
    Positions(Vec<f64>),
    /// Values for a subset of the variables, by name.
    Variables(BTreeMap<String, f64>),
    /// Values for the variables of a single joint.
    Joint { name: String, values: Vec<f64> },
}

impl From<Vec<f64>> for JointValueTarget {
    fn from(values: Vec<f64>) -> Self {
        JointValueTarget::Positions(values)
    }
}

impl From<&[f64]> for JointValueTarget {
    fn from(values: &[f64]) -> Self {
        JointValueTarget::Positions(values.to_vec())
    }
}

impl From<BTreeMap<String, f64>> for JointValueTarget {
    fn from(values: BTreeMap<String, f64>) -> Self {
        JointValueTarget::Variables(values)
    }
}

/// Result of planning without execution.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Plan {
    /// Joint values the trajectory starts from.
    pub start_state: Vec<f64>,
    /// Joint values of each waypoint.
    pub trajectory: Vec<Vec<f64>>,
}
