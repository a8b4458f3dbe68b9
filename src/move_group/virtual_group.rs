// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains the VirtualMoveGroup type, a move group without a robot.
//!
//! A VirtualMoveGroup reaches every target instantly. It does not compute kinematics: a pose
//! target becomes the current pose of the end effector, a joint target becomes the current joint
//! state, and the two are not related to each other. It is meant for trying out commands and for
//! tests.
use std::collections::{BTreeMap, VecDeque};
use std::f64::consts::PI;

use rand::Rng;
use tracing::debug;

use crate::exception::{create_backend_exception, CommanderResult};
use crate::move_group::error_code::MoveItErrorCode;
use crate::move_group::types::{JointValueTarget, Plan, Pose};
use crate::move_group::MoveGroup;

/// Default goal tolerance of a VirtualMoveGroup.
pub const DEFAULT_GOAL_TOLERANCE: f64 = 1e-4;

/// A single-variable joint with position limits.
///
/// Limits may be infinite. Random values of a joint without finite limits are drawn from an
/// interval of width 2 pi next to the finite limit, or around zero.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualJoint {
    name: String,
    lower: f64,
    upper: f64,
}

impl VirtualJoint {
    /// Creates a joint. The limits are sorted; a NaN limit is replaced by the other one, or by
    /// zero if both are NaN.
    pub fn new(name: &str, lower: f64, upper: f64) -> Self {
        let lower = if lower.is_nan() { upper } else { lower };
        let upper = if upper.is_nan() { lower } else { upper };
        let (lower, upper) = if lower.is_nan() {
            (0., 0.)
        } else {
            (f64::min(lower, upper), f64::max(lower, upper))
        };
        VirtualJoint {
            name: name.to_string(),
            lower,
            upper,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn lower(&self) -> f64 {
        self.lower
    }
    pub fn upper(&self) -> f64 {
        self.upper
    }
    fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
    fn random_range(&self) -> (f64, f64) {
        match (self.lower.is_finite(), self.upper.is_finite()) {
            (true, true) => (self.lower, self.upper),
            (true, false) => (self.lower, self.lower + 2. * PI),
            (false, true) => (self.upper - 2. * PI, self.upper),
            (false, false) => (-PI, PI),
        }
    }
}

/// In-memory [`MoveGroup`] that executes every move instantly.
#[derive(Debug, Clone)]
pub struct VirtualMoveGroup {
    name: String,
    joints: Vec<VirtualJoint>,
    end_effector_link: String,
    pose_reference_frame: String,
    current_joint_values: Vec<f64>,
    current_pose: Pose,
    joint_target: Vec<f64>,
    pose_target: Option<Pose>,
    named_targets: BTreeMap<String, Vec<f64>>,
    remembered: BTreeMap<String, Vec<f64>>,
    goal_tolerance: f64,
    outcomes: VecDeque<MoveItErrorCode>,
}

impl VirtualMoveGroup {
    /// Creates a group without end effector. All joints start at the value closest to zero
    /// within their limits.
    pub fn new(name: &str, joints: Vec<VirtualJoint>) -> Self {
        let start: Vec<f64> = joints
            .iter()
            .map(|joint| 0_f64.max(joint.lower).min(joint.upper))
            .collect();
        VirtualMoveGroup {
            name: name.to_string(),
            joints,
            end_effector_link: String::new(),
            pose_reference_frame: "world".to_string(),
            current_joint_values: start.clone(),
            current_pose: Pose::default(),
            joint_target: start,
            pose_target: None,
            named_targets: BTreeMap::new(),
            remembered: BTreeMap::new(),
            goal_tolerance: DEFAULT_GOAL_TOLERANCE,
            outcomes: VecDeque::new(),
        }
    }
    pub fn with_end_effector_link(mut self, link_name: &str) -> Self {
        self.end_effector_link = link_name.to_string();
        self
    }
    /// Adds a configuration that [`set_named_target`](`MoveGroup::set_named_target`) knows.
    pub fn with_named_target(mut self, name: &str, values: Vec<f64>) -> Self {
        self.named_targets.insert(name.to_string(), values);
        self
    }
    /// Queues the result of the next move. Moves without a queued result succeed.
    pub fn push_outcome(&mut self, outcome: MoveItErrorCode) {
        self.outcomes.push_back(outcome);
    }
    /// Whether the current target is a pose target.
    pub fn has_pose_target(&self) -> bool {
        self.pose_target.is_some()
    }
    pub fn get_joint_value_target(&self) -> &[f64] {
        &self.joint_target
    }

    fn checked_positions(&self, values: Vec<f64>) -> CommanderResult<Vec<f64>> {
        if values.len() != self.joints.len() {
            return Err(create_backend_exception(format!(
                "Unable to set target: group '{}' has {} variables, got {} values",
                self.name,
                self.joints.len(),
                values.len()
            )));
        }
        for (joint, value) in self.joints.iter().zip(values.iter()) {
            if !joint.contains(*value) {
                return Err(create_backend_exception(format!(
                    "Unable to set target: {} is outside the limits of joint '{}'",
                    value, joint.name
                )));
            }
        }
        Ok(values)
    }
    fn joint_index(&self, name: &str) -> CommanderResult<usize> {
        self.joints
            .iter()
            .position(|joint| joint.name == name)
            .ok_or_else(|| {
                create_backend_exception(format!(
                    "Joint '{}' is not part of group '{}'",
                    name, self.name
                ))
            })
    }
    fn pose_goal(&mut self) -> CommanderResult<&mut Pose> {
        if self.end_effector_link.is_empty() {
            return Err(create_backend_exception(format!(
                "Group '{}' has no end effector",
                self.name
            )));
        }
        let current = self.current_pose;
        Ok(self.pose_target.get_or_insert(current))
    }
    fn execute(&mut self) -> MoveItErrorCode {
        let outcome = self.outcomes.pop_front().unwrap_or(MoveItErrorCode::Success);
        if outcome.is_success() {
            match self.pose_target {
                Some(pose) => self.current_pose = pose,
                None => self.current_joint_values = self.joint_target.clone(),
            }
        }
        debug!("virtual group '{}' finished move: {}", self.name, outcome);
        outcome
    }
}

impl MoveGroup for VirtualMoveGroup {
    fn get_name(&self) -> String {
        self.name.clone()
    }

    fn stop(&mut self) -> CommanderResult<()> {
        debug!("virtual group '{}' has nothing to stop", self.name);
        Ok(())
    }

    fn get_joints(&self) -> Vec<String> {
        self.joints.iter().map(|joint| joint.name.clone()).collect()
    }

    fn get_end_effector_link(&self) -> String {
        self.end_effector_link.clone()
    }

    fn set_end_effector_link(&mut self, link_name: &str) {
        self.end_effector_link = link_name.to_string();
    }

    fn get_pose_reference_frame(&self) -> String {
        self.pose_reference_frame.clone()
    }

    fn set_pose_reference_frame(&mut self, frame: &str) {
        self.pose_reference_frame = frame.to_string();
    }

    fn get_current_joint_values(&self) -> CommanderResult<Vec<f64>> {
        Ok(self.current_joint_values.clone())
    }

    fn get_current_pose(&self) -> CommanderResult<Pose> {
        if self.end_effector_link.is_empty() {
            return Err(create_backend_exception(format!(
                "Group '{}' has no end effector",
                self.name
            )));
        }
        Ok(self.current_pose)
    }

    fn get_random_joint_values(&self) -> Vec<f64> {
        let mut rng = rand::thread_rng();
        self.joints
            .iter()
            .map(|joint| {
                let (lower, upper) = joint.random_range();
                rng.gen_range(lower..=upper)
            })
            .collect()
    }

    fn set_joint_value_target(&mut self, target: JointValueTarget) -> CommanderResult<()> {
        let values = match target {
            JointValueTarget::Positions(values) => self.checked_positions(values)?,
            JointValueTarget::Variables(variables) => {
                let mut values = self.joint_target.clone();
                for (name, value) in variables {
                    values[self.joint_index(&name)?] = value;
                }
                self.checked_positions(values)?
            }
            JointValueTarget::Joint { name, values } => {
                if values.len() != 1 {
                    return Err(create_backend_exception(format!(
                        "Joint '{}' has 1 variable, got {} values",
                        name,
                        values.len()
                    )));
                }
                let mut target = self.joint_target.clone();
                target[self.joint_index(&name)?] = values[0];
                self.checked_positions(target)?
            }
        };
        self.joint_target = values;
        self.pose_target = None;
        Ok(())
    }

    fn set_orientation_target(&mut self, x: f64, y: f64, z: f64) -> CommanderResult<()> {
        let goal = self.pose_goal()?;
        goal.values[3..].copy_from_slice(&[x, y, z]);
        Ok(())
    }

    fn set_position_target(&mut self, x: f64, y: f64, z: f64) -> CommanderResult<()> {
        let goal = self.pose_goal()?;
        goal.values[..3].copy_from_slice(&[x, y, z]);
        Ok(())
    }

    fn set_pose_target(&mut self, pose: &Pose) -> CommanderResult<()> {
        *self.pose_goal()? = *pose;
        Ok(())
    }

    fn set_random_target(&mut self) -> CommanderResult<()> {
        self.joint_target = self.get_random_joint_values();
        self.pose_target = None;
        Ok(())
    }

    fn set_named_target(&mut self, name: &str) -> CommanderResult<bool> {
        match self.named_targets.get(name).cloned() {
            Some(values) => {
                self.set_joint_value_target(JointValueTarget::Positions(values))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remember_joint_values(&mut self, name: &str, values: &[f64]) {
        self.remembered.insert(name.to_string(), values.to_vec());
    }

    fn get_remembered_joint_values(&self) -> BTreeMap<String, Vec<f64>> {
        self.remembered.clone()
    }

    fn forget_joint_values(&mut self, name: &str) {
        self.remembered.remove(name);
    }

    fn get_goal_tolerance(&self) -> f64 {
        self.goal_tolerance
    }

    fn set_goal_tolerance(&mut self, tolerance: f64) {
        self.goal_tolerance = tolerance;
    }

    fn plan(&mut self) -> CommanderResult<Option<Plan>> {
        if let Some(outcome) = self.outcomes.front() {
            if !outcome.is_success() {
                return Ok(None);
            }
        }
        let mut trajectory = vec![self.current_joint_values.clone()];
        if self.pose_target.is_none() {
            trajectory.push(self.joint_target.clone());
        }
        Ok(Some(Plan {
            start_state: self.current_joint_values.clone(),
            trajectory,
        }))
    }

    fn move_to_target(&mut self) -> CommanderResult<MoveItErrorCode> {
        Ok(self.execute())
    }

    fn async_move(&mut self) -> CommanderResult<bool> {
        self.execute();
        Ok(true)
    }
}
