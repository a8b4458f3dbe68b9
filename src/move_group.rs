// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains the MoveGroup trait, the interface to a planning and execution backend.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::exception::CommanderResult;

pub mod error_code;
pub mod types;
pub mod virtual_group;

pub use error_code::MoveItErrorCode;
pub use types::{Axis, JointValueTarget, Plan, Pose};

/// Name of the parameter holding the robot description.
pub const ROBOT_DESCRIPTION: &str = "robot_description";

/// Options for connecting to a move group.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MoveGroupOptions {
    /// Name of the group of joints to control.
    pub group_name: String,
    /// Name of the parameter the robot description is loaded from.
    pub robot_description: String,
}

impl MoveGroupOptions {
    pub fn new(group_name: &str) -> Self {
        MoveGroupOptions {
            group_name: group_name.to_string(),
            robot_description: ROBOT_DESCRIPTION.to_string(),
        }
    }
}

/// A named, controllable set of robot joints.
///
/// Implementors plan and execute motions towards a target. The target is either a joint space
/// goal or a pose goal for the end-effector link; setting one kind of target replaces the other.
/// An empty end-effector link name means the group has no end effector.
#[cfg_attr(test, mockall::automock)]
pub trait MoveGroup {
    /// Name of the group.
    fn get_name(&self) -> String;

    /// Stops any trajectory execution, if one is active.
    fn stop(&mut self) -> CommanderResult<()>;

    /// Names of the joints of the group.
    fn get_joints(&self) -> Vec<String>;

    /// Name of the link that is considered to be the end effector, empty if there is none.
    fn get_end_effector_link(&self) -> String;

    /// Sets the link used for pose targets.
    fn set_end_effector_link(&mut self, link_name: &str);

    /// Frame pose targets are expressed in.
    fn get_pose_reference_frame(&self) -> String;

    fn set_pose_reference_frame(&mut self, frame: &str);

    /// Current values of all joint variables of the group.
    fn get_current_joint_values(&self) -> CommanderResult<Vec<f64>>;

    /// Current pose of the end-effector link.
    fn get_current_pose(&self) -> CommanderResult<Pose>;

    /// Random values for all joint variables, within the joint limits.
    fn get_random_joint_values(&self) -> Vec<f64>;

    /// Sets a joint space goal.
    fn set_joint_value_target(&mut self, target: JointValueTarget) -> CommanderResult<()>;

    /// Sets the orientation goal of the end effector as intrinsic XYZ Euler angles \[rad\].
    fn set_orientation_target(&mut self, x: f64, y: f64, z: f64) -> CommanderResult<()>;

    /// Sets the position goal of the end effector \[m\].
    fn set_position_target(&mut self, x: f64, y: f64, z: f64) -> CommanderResult<()>;

    fn set_pose_target(&mut self, pose: &Pose) -> CommanderResult<()>;

    /// Sets a joint space goal with random values.
    fn set_random_target(&mut self) -> CommanderResult<()>;

    /// Sets the joint space goal to a configuration known by name to the robot description.
    /// # Return
    /// False if the name is unknown.
    fn set_named_target(&mut self, name: &str) -> CommanderResult<bool>;

    /// Stores joint values under a name.
    fn remember_joint_values(&mut self, name: &str, values: &[f64]);

    fn get_remembered_joint_values(&self) -> BTreeMap<String, Vec<f64>>;

    fn forget_joint_values(&mut self, name: &str);

    fn get_goal_tolerance(&self) -> f64;

    fn set_goal_tolerance(&mut self, tolerance: f64);

    /// Computes a motion plan from the current state to the target without executing it.
    /// # Return
    /// None if planning failed.
    fn plan(&mut self) -> CommanderResult<Option<Plan>>;

    /// Plans and executes a motion to the target and waits until execution finished.
    fn move_to_target(&mut self) -> CommanderResult<MoveItErrorCode>;

    /// Plans and executes a motion to the target without waiting for the result.
    /// # Return
    /// True if the request was sent.
    fn async_move(&mut self) -> CommanderResult<bool>;
}
