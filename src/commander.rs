// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains the MoveGroupCommander type.
use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::exception::{CommanderException, CommanderResult};
use crate::move_group::{Axis, JointValueTarget, MoveGroup, MoveItErrorCode, Plan, Pose};

/// Default number of attempts of [`go_with_attempts`](`MoveGroupCommander::go_with_attempts`).
pub const DEFAULT_MAX_MOVE_ATTEMPTS: u32 = 10;

/// What [`go`](`MoveGroupCommander::go`) should move to.
#[derive(Debug, Clone, PartialEq)]
pub enum GoTarget {
    /// Name of remembered joint values. If nothing is remembered under this name, the name
    /// itself is used as target: either as a list of joint values like `"0.1 -0.5 1.2"` or as a
    /// named target of the group.
    Name(String),
    /// Values for all joints of the group.
    Positions(Vec<f64>),
    /// Values for some joints of the group, by name.
    Variables(BTreeMap<String, f64>),
}

/// Arguments of [`go`](`MoveGroupCommander::go`).
///
/// Anything that describes a target converts into a request that waits for the motion to
/// finish. A bare `bool` converts into a request without target, using the value as wait flag:
/// ```
/// use moveit_commander::GoRequest;
/// let request = GoRequest::from(false);
/// assert!(request.target.is_none());
/// assert!(!request.wait);
/// let request = GoRequest::from("home").with_wait(false);
/// assert!(request.target.is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GoRequest {
    /// Target to set before moving. None keeps the current target.
    pub target: Option<GoTarget>,
    /// True to block until the motion finished.
    pub wait: bool,
}

impl GoRequest {
    pub fn with_wait(mut self, wait: bool) -> Self {
        self.wait = wait;
        self
    }
}

impl Default for GoRequest {
    fn default() -> Self {
        GoRequest {
            target: None,
            wait: true,
        }
    }
}

impl From<()> for GoRequest {
    fn from(_: ()) -> Self {
        GoRequest::default()
    }
}

impl From<bool> for GoRequest {
    fn from(wait: bool) -> Self {
        GoRequest { target: None, wait }
    }
}

impl From<GoTarget> for GoRequest {
    fn from(target: GoTarget) -> Self {
        GoRequest {
            target: Some(target),
            wait: true,
        }
    }
}

impl From<&str> for GoRequest {
    fn from(name: &str) -> Self {
        GoTarget::Name(name.to_string()).into()
    }
}

impl From<String> for GoRequest {
    fn from(name: String) -> Self {
        GoTarget::Name(name).into()
    }
}

impl From<Vec<f64>> for GoRequest {
    fn from(values: Vec<f64>) -> Self {
        GoTarget::Positions(values).into()
    }
}

impl From<&[f64]> for GoRequest {
    fn from(values: &[f64]) -> Self {
        GoTarget::Positions(values.to_vec()).into()
    }
}

impl From<BTreeMap<String, f64>> for GoRequest {
    fn from(values: BTreeMap<String, f64>) -> Self {
        GoTarget::Variables(values).into()
    }
}

/// Parses joint values written like `"0.1 -0.5 1.2"` or `"[0.1, -0.5, 1.2]"`.
/// Every value has to be finite, so names like `"inf"` are not read as joint values.
fn parse_joint_values(text: &str) -> Option<Vec<f64>> {
    let values: Option<Vec<f64>> = text
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<f64>().ok().filter(|value| value.is_finite()))
        .collect();
    values.filter(|values| !values.is_empty())
}

/// Execution of simple commands for a particular group.
///
/// Operations that need an end effector fail with
/// [`NoEndEffectorException`](`crate::exception::CommanderException::NoEndEffectorException`)
/// without contacting the group if the group has no end-effector link. Everything else is
/// forwarded to the [`MoveGroup`] and its errors are returned unchanged.
pub struct MoveGroupCommander<G: MoveGroup> {
    group: G,
    max_move_attempts: u32,
}

impl<G: MoveGroup> MoveGroupCommander<G> {
    /// Creates a commander for a connected move group.
    /// # Arguments
    /// * `group` - The move group to command.
    /// * `max_move_attempts` - Number of attempts [`go_with_attempts`](`Self::go_with_attempts`)
    /// makes if called without a limit. Default is [`DEFAULT_MAX_MOVE_ATTEMPTS`].
    pub fn new<A: Into<Option<u32>>>(group: G, max_move_attempts: A) -> Self {
        info!(
            "Ready to take MoveGroup commands for group {}.",
            group.get_name()
        );
        MoveGroupCommander {
            group,
            max_move_attempts: max_move_attempts
                .into()
                .unwrap_or(DEFAULT_MAX_MOVE_ATTEMPTS),
        }
    }

    /// Access to the commanded group.
    pub fn group(&self) -> &G {
        &self.group
    }

    pub fn group_mut(&mut self) -> &mut G {
        &mut self.group
    }

    /// Get the name of the group this instance was initialized for.
    pub fn get_name(&self) -> String {
        self.group.get_name()
    }

    /// Stop the current execution, if any.
    pub fn stop(&mut self) -> CommanderResult<()> {
        self.group.stop()
    }

    /// Get the joints of this group.
    pub fn get_joints(&self) -> Vec<String> {
        self.group.get_joints()
    }

    /// Check if this group has a link that is considered to be an end effector.
    pub fn has_end_effector_link(&self) -> bool {
        !self.group.get_end_effector_link().is_empty()
    }

    /// Get the name of the link that is considered to be an end effector.
    /// Empty if the group has none.
    pub fn get_end_effector_link(&self) -> String {
        self.group.get_end_effector_link()
    }

    pub fn set_end_effector_link(&mut self, link_name: &str) {
        self.group.set_end_effector_link(link_name)
    }

    pub fn get_pose_reference_frame(&self) -> String {
        self.group.get_pose_reference_frame()
    }

    pub fn set_pose_reference_frame(&mut self, frame: &str) {
        self.group.set_pose_reference_frame(frame)
    }

    pub fn get_current_joint_values(&self) -> CommanderResult<Vec<f64>> {
        self.group.get_current_joint_values()
    }

    /// Get the pose of the end effector.
    /// # Errors
    /// * [`NoEndEffectorException`](`crate::exception::CommanderException::NoEndEffectorException`)
    /// if the group has no end effector.
    pub fn get_current_pose(&self) -> CommanderResult<Pose> {
        self.require_end_effector("get the pose of")?;
        self.group.get_current_pose()
    }

    pub fn get_random_joint_values(&self) -> Vec<f64> {
        self.group.get_random_joint_values()
    }

    /// Set a joint space target. Accepts values for all joints (`Vec<f64>`, `&[f64]`),
    /// values by joint name (`BTreeMap<String, f64>`) or a [`JointValueTarget`].
    pub fn set_joint_value_target<T: Into<JointValueTarget>>(
        &mut self,
        target: T,
    ) -> CommanderResult<()> {
        self.group.set_joint_value_target(target.into())
    }

    /// Set the target of a single joint, keeping the targets of the other joints.
    pub fn set_joint_value_target_for_joint(
        &mut self,
        joint_name: &str,
        value: f64,
    ) -> CommanderResult<()> {
        self.group.set_joint_value_target(JointValueTarget::Joint {
            name: joint_name.to_string(),
            values: vec![value],
        })
    }

    /// Set the orientation of the end effector as `[rot_x, rot_y, rot_z]`.
    /// # Errors
    /// * [`NoEndEffectorException`](`crate::exception::CommanderException::NoEndEffectorException`)
    /// if the group has no end effector.
    pub fn set_orientation_target(&mut self, xyz: [f64; 3]) -> CommanderResult<()> {
        self.require_end_effector("set the orientation of")?;
        self.group.set_orientation_target(xyz[0], xyz[1], xyz[2])
    }

    /// Set the position of the end effector as `[x, y, z]`.
    /// # Errors
    /// * [`NoEndEffectorException`](`crate::exception::CommanderException::NoEndEffectorException`)
    /// if the group has no end effector.
    pub fn set_position_target(&mut self, xyz: [f64; 3]) -> CommanderResult<()> {
        self.require_end_effector("set the position of")?;
        self.group.set_position_target(xyz[0], xyz[1], xyz[2])
    }

    /// Set the pose of the end effector.
    /// # Errors
    /// * [`NoEndEffectorException`](`crate::exception::CommanderException::NoEndEffectorException`)
    /// if the group has no end effector.
    pub fn set_pose_target(&mut self, pose: &Pose) -> CommanderResult<()> {
        self.require_end_effector("set the pose of")?;
        self.group.set_pose_target(pose)
    }

    /// Set the pose of the end effector from a list of 6 values: `[x, y, z, rot_x, rot_y, rot_z]`.
    /// # Errors
    /// * [`NoEndEffectorException`](`crate::exception::CommanderException::NoEndEffectorException`)
    /// if the group has no end effector.
    /// * [`InvalidPoseException`](`crate::exception::CommanderException::InvalidPoseException`)
    /// if `values` does not contain 6 entries.
    pub fn set_pose_target_from_slice(&mut self, values: &[f64]) -> CommanderResult<()> {
        self.require_end_effector("set the pose of")?;
        let pose = Pose::from_slice(values)?;
        self.group.set_pose_target(&pose)
    }

    /// Get the current pose of the end effector, add `value` to the corresponding axis and set
    /// the new pose as the pose target.
    pub fn shift_pose_target(&mut self, axis: Axis, value: f64) -> CommanderResult<()> {
        let mut pose = self.get_current_pose()?;
        pose[axis] += value;
        self.set_pose_target(&pose)
    }

    pub fn set_random_target(&mut self) -> CommanderResult<()> {
        self.group.set_random_target()
    }

    /// Set a target known by name to the group.
    /// # Return
    /// False if the group does not know `name`.
    pub fn set_named_target(&mut self, name: &str) -> CommanderResult<bool> {
        self.group.set_named_target(name)
    }

    /// Remember joint values under `name`. Without values, the current joint values are
    /// remembered.
    pub fn remember_joint_values<'a, V: Into<Option<&'a [f64]>>>(
        &mut self,
        name: &str,
        values: V,
    ) -> CommanderResult<()> {
        match values.into() {
            Some(values) => self.group.remember_joint_values(name, values),
            None => {
                let current = self.group.get_current_joint_values()?;
                self.group.remember_joint_values(name, &current);
            }
        }
        Ok(())
    }

    pub fn get_remembered_joint_values(&self) -> BTreeMap<String, Vec<f64>> {
        self.group.get_remembered_joint_values()
    }

    pub fn forget_joint_values(&mut self, name: &str) {
        self.group.forget_joint_values(name)
    }

    pub fn get_goal_tolerance(&self) -> f64 {
        self.group.get_goal_tolerance()
    }

    pub fn set_goal_tolerance(&mut self, tolerance: f64) {
        self.group.set_goal_tolerance(tolerance)
    }

    /// Compute a plan to the current target without executing it.
    /// # Return
    /// None if no plan was found.
    pub fn plan(&mut self) -> CommanderResult<Option<Plan>> {
        self.group.plan()
    }

    /// Set the target of the group and then move the group to the specified target.
    ///
    /// ```no_run
    /// # use moveit_commander::{CommanderResult, MoveGroupCommander, VirtualMoveGroup};
    /// # fn main() -> CommanderResult<()> {
    /// # let mut commander = MoveGroupCommander::new(VirtualMoveGroup::new("arm", vec![]), None);
    /// commander.go(vec![0.0, -0.5, 1.2])?; // joint values, wait for the motion
    /// commander.go("home")?; // remembered joint values
    /// commander.go(false)?; // current target, do not wait
    /// # Ok(())
    /// # }
    /// ```
    /// # Errors
    /// * [`UnknownTargetException`](`crate::exception::CommanderException::UnknownTargetException`)
    /// if a target name is neither remembered, nor joint values, nor known to the group.
    /// # Return
    /// If waiting, true if the motion succeeded. Otherwise true if the motion was started.
    pub fn go<R: Into<GoRequest>>(&mut self, request: R) -> CommanderResult<bool> {
        let request = request.into();
        if let Some(target) = request.target {
            self.set_go_target(target)?;
        }
        if request.wait {
            let outcome = self.group.move_to_target()?;
            self.report(&outcome);
            Ok(outcome.is_success())
        } else {
            self.group.async_move()
        }
    }

    /// Move to the current target and wait, trying again as long as the failure is
    /// [recoverable](`MoveItErrorCode::is_recoverable`).
    /// # Arguments
    /// * `max_attempts` - Maximum number of attempts. Default is the value given to
    /// [`new`](`Self::new`).
    /// # Return
    /// True if one of the attempts succeeded.
    pub fn go_with_attempts<A: Into<Option<u32>>>(
        &mut self,
        max_attempts: A,
    ) -> CommanderResult<bool> {
        let max_attempts = max_attempts.into().unwrap_or(self.max_move_attempts);
        for attempt in 1..=max_attempts {
            let outcome = self.group.move_to_target()?;
            if outcome.is_success() {
                self.report(&outcome);
                return Ok(true);
            }
            if !outcome.is_recoverable() {
                self.report(&outcome);
                return Ok(false);
            }
            warn!("Attempt {} of {} failed: {}", attempt, max_attempts, outcome);
        }
        warn!("Unable to get to goal after {} attempts", max_attempts);
        Ok(false)
    }

    fn set_go_target(&mut self, target: GoTarget) -> CommanderResult<()> {
        match target {
            GoTarget::Name(name) => {
                if let Some(values) = self.group.get_remembered_joint_values().remove(&name) {
                    debug!("moving to remembered joint values '{}'", name);
                    return self.set_joint_value_target(values);
                }
                if let Some(values) = parse_joint_values(&name) {
                    debug!("'{}' is not remembered, using it as joint values", name);
                    return self.set_joint_value_target(values);
                }
                debug!("'{}' is not remembered, trying named target", name);
                if self.group.set_named_target(&name)? {
                    Ok(())
                } else {
                    Err(CommanderException::UnknownTargetException { name })
                }
            }
            GoTarget::Positions(values) => self.set_joint_value_target(values),
            GoTarget::Variables(values) => self.set_joint_value_target(values),
        }
    }

    fn report(&self, outcome: &MoveItErrorCode) {
        if outcome.is_success() {
            info!("group {} reached its target", self.group.get_name());
        } else {
            warn!("Fail: group {}: {}", self.group.get_name(), outcome);
        }
    }

    fn require_end_effector(&self, operation: &'static str) -> CommanderResult<()> {
        if self.has_end_effector_link() {
            Ok(())
        } else {
            Err(CommanderException::NoEndEffectorException { operation })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use mockall::predicate::*;

    use crate::commander::{parse_joint_values, GoRequest, GoTarget, MoveGroupCommander};
    use crate::exception::CommanderException;
    use crate::move_group::{Axis, JointValueTarget, MockMoveGroup, MoveItErrorCode, Pose};

    fn mock_group(end_effector_link: &str) -> MockMoveGroup {
        let mut mock = MockMoveGroup::new();
        mock.expect_get_name().return_const("arm".to_string());
        mock.expect_get_end_effector_link()
            .return_const(end_effector_link.to_string());
        mock
    }

    fn remembered() -> BTreeMap<String, Vec<f64>> {
        let mut values = BTreeMap::new();
        values.insert("home".to_string(), vec![0., -0.5, 1.2]);
        values
    }

    #[test]
    fn has_end_effector_link() {
        let commander = MoveGroupCommander::new(mock_group("tool0"), None);
        assert!(commander.has_end_effector_link());
        let commander = MoveGroupCommander::new(mock_group(""), None);
        assert!(!commander.has_end_effector_link());
    }

    #[test]
    fn pose_operations_need_an_end_effector() {
        let mut mock = mock_group("");
        mock.expect_get_current_pose().times(0);
        mock.expect_set_pose_target().times(0);
        mock.expect_set_position_target().times(0);
        mock.expect_set_orientation_target().times(0);
        let mut commander = MoveGroupCommander::new(mock, None);

        let is_no_end_effector = |result: Result<_, CommanderException>| {
            matches!(result, Err(CommanderException::NoEndEffectorException { .. }))
        };
        assert!(is_no_end_effector(commander.get_current_pose().map(|_| ())));
        assert!(is_no_end_effector(commander.set_pose_target(&Pose::default())));
        assert!(is_no_end_effector(
            commander.set_pose_target_from_slice(&[0.; 6])
        ));
        assert!(is_no_end_effector(commander.set_position_target([0.; 3])));
        assert!(is_no_end_effector(commander.set_orientation_target([0.; 3])));
        assert!(is_no_end_effector(commander.shift_pose_target(Axis::Z, 0.1)));
    }

    #[test]
    fn position_and_orientation_are_unpacked() {
        let mut mock = mock_group("tool0");
        mock.expect_set_position_target()
            .with(eq(0.1), eq(0.2), eq(0.3))
            .times(1)
            .returning(|_, _, _| Ok(()));
        mock.expect_set_orientation_target()
            .with(eq(1.), eq(2.), eq(3.))
            .times(1)
            .returning(|_, _, _| Ok(()));
        let mut commander = MoveGroupCommander::new(mock, None);
        commander.set_position_target([0.1, 0.2, 0.3]).unwrap();
        commander.set_orientation_target([1., 2., 3.]).unwrap();
    }

    #[test]
    fn pose_from_slice_needs_six_values() {
        let mut mock = mock_group("tool0");
        mock.expect_set_pose_target().times(0);
        let mut commander = MoveGroupCommander::new(mock, None);
        assert!(matches!(
            commander.set_pose_target_from_slice(&[0.; 5]),
            Err(CommanderException::InvalidPoseException { length: 5 })
        ));
    }

    #[test]
    fn shift_pose_target_adds_to_one_axis() {
        let mut mock = mock_group("tool0");
        mock.expect_get_current_pose()
            .returning(|| Ok(Pose::new([0.5, 0., 0.4], [0., 0., 0.])));
        mock.expect_set_pose_target()
            .withf(|pose: &Pose| *pose == Pose::new([0.5, 0., 0.5], [0., 0., 0.]))
            .times(1)
            .returning(|_| Ok(()));
        let mut commander = MoveGroupCommander::new(mock, None);
        commander.shift_pose_target(Axis::Z, 0.1).unwrap();
    }

    #[test]
    fn go_with_bool_only_sets_the_wait_flag() {
        let mut mock = mock_group("tool0");
        mock.expect_set_joint_value_target().times(0);
        mock.expect_get_remembered_joint_values().times(0);
        mock.expect_async_move().times(1).returning(|| Ok(true));
        mock.expect_move_to_target()
            .times(1)
            .returning(|| Ok(MoveItErrorCode::Success));
        let mut commander = MoveGroupCommander::new(mock, None);
        assert!(commander.go(false).unwrap());
        assert!(commander.go(true).unwrap());
    }

    #[test]
    fn go_reports_failed_motion() {
        let mut mock = mock_group("tool0");
        mock.expect_move_to_target()
            .times(1)
            .returning(|| Ok(MoveItErrorCode::ControlFailed));
        let mut commander = MoveGroupCommander::new(mock, None);
        assert!(!commander.go(()).unwrap());
    }

    #[test]
    fn go_to_remembered_joint_values() {
        let mut mock = mock_group("tool0");
        mock.expect_get_remembered_joint_values()
            .returning(remembered);
        mock.expect_set_joint_value_target()
            .withf(|target: &JointValueTarget| {
                *target == JointValueTarget::Positions(vec![0., -0.5, 1.2])
            })
            .times(1)
            .returning(|_| Ok(()));
        mock.expect_set_named_target().times(0);
        mock.expect_async_move().times(1).returning(|| Ok(true));
        let mut commander = MoveGroupCommander::new(mock, None);
        assert!(commander.go(GoRequest::from("home").with_wait(false)).unwrap());
    }

    #[test]
    fn go_falls_back_to_joint_values() {
        let mut mock = mock_group("tool0");
        mock.expect_get_remembered_joint_values()
            .returning(remembered);
        mock.expect_set_joint_value_target()
            .withf(|target: &JointValueTarget| {
                *target == JointValueTarget::Positions(vec![0.25, 1., -1.])
            })
            .times(1)
            .returning(|_| Ok(()));
        mock.expect_set_named_target().times(0);
        mock.expect_move_to_target()
            .times(1)
            .returning(|| Ok(MoveItErrorCode::Success));
        let mut commander = MoveGroupCommander::new(mock, None);
        assert!(commander.go("[0.25, 1, -1]").unwrap());
    }

    #[test]
    fn go_falls_back_to_named_target() {
        let mut mock = mock_group("tool0");
        mock.expect_get_remembered_joint_values()
            .returning(remembered);
        mock.expect_set_named_target()
            .with(eq("ready"))
            .times(1)
            .returning(|_| Ok(true));
        mock.expect_move_to_target()
            .times(1)
            .returning(|| Ok(MoveItErrorCode::Success));
        let mut commander = MoveGroupCommander::new(mock, None);
        assert!(commander.go("ready".to_string()).unwrap());
    }

    #[test]
    fn go_to_unknown_name_does_not_move() {
        let mut mock = mock_group("tool0");
        mock.expect_get_remembered_joint_values()
            .returning(BTreeMap::new);
        mock.expect_set_named_target().returning(|_| Ok(false));
        mock.expect_move_to_target().times(0);
        mock.expect_async_move().times(0);
        let mut commander = MoveGroupCommander::new(mock, None);
        match commander.go("nowhere") {
            Err(CommanderException::UnknownTargetException { name }) => assert_eq!(name, "nowhere"),
            _ => panic!("expected an UnknownTargetException"),
        }
    }

    #[test]
    fn go_with_joint_values_skips_lookup() {
        let mut mock = mock_group("tool0");
        mock.expect_get_remembered_joint_values().times(0);
        mock.expect_set_joint_value_target()
            .withf(|target: &JointValueTarget| *target == JointValueTarget::Positions(vec![1., 2.]))
            .times(1)
            .returning(|_| Ok(()));
        mock.expect_move_to_target()
            .times(1)
            .returning(|| Ok(MoveItErrorCode::Success));
        let mut commander = MoveGroupCommander::new(mock, None);
        assert!(commander.go(vec![1., 2.]).unwrap());
    }

    #[test]
    fn backend_errors_are_propagated() {
        let mut mock = mock_group("tool0");
        mock.expect_set_joint_value_target().returning(|_| {
            Err(CommanderException::BackendException {
                message: "Unable to set target".to_string(),
            })
        });
        mock.expect_move_to_target().times(0);
        let mut commander = MoveGroupCommander::new(mock, None);
        match commander.go(vec![1., 2.]) {
            Err(CommanderException::BackendException { message }) => {
                assert_eq!(message, "Unable to set target")
            }
            _ => panic!("expected a BackendException"),
        }
    }

    #[test]
    fn go_with_attempts_retries_recoverable_failures() {
        let mut mock = mock_group("tool0");
        let mut calls = 0;
        mock.expect_move_to_target().times(3).returning(move || {
            calls += 1;
            if calls < 3 {
                Ok(MoveItErrorCode::PlanningFailed)
            } else {
                Ok(MoveItErrorCode::Success)
            }
        });
        let mut commander = MoveGroupCommander::new(mock, None);
        assert!(commander.go_with_attempts(None).unwrap());
    }

    #[test]
    fn go_with_attempts_stops_at_limit() {
        let mut mock = mock_group("tool0");
        mock.expect_move_to_target()
            .times(4)
            .returning(|| Ok(MoveItErrorCode::MotionPlanInvalidatedByEnvironmentChange));
        let mut commander = MoveGroupCommander::new(mock, 4_u32);
        assert!(!commander.go_with_attempts(None).unwrap());
    }

    #[test]
    fn go_with_attempts_gives_up_on_fatal_failure() {
        let mut mock = mock_group("tool0");
        mock.expect_move_to_target()
            .times(1)
            .returning(|| Ok(MoveItErrorCode::ControlFailed));
        let mut commander = MoveGroupCommander::new(mock, None);
        assert!(!commander.go_with_attempts(5_u32).unwrap());
    }

    #[test]
    fn remember_current_joint_values() {
        let mut mock = mock_group("tool0");
        mock.expect_get_current_joint_values()
            .times(1)
            .returning(|| Ok(vec![0.1, 0.2]));
        mock.expect_remember_joint_values()
            .withf(|name: &str, values: &[f64]| name == "here" && values.to_vec() == vec![0.1, 0.2])
            .times(1)
            .return_const(());
        mock.expect_remember_joint_values()
            .withf(|name: &str, values: &[f64]| name == "there" && values.to_vec() == vec![1., 2.])
            .times(1)
            .return_const(());
        let mut commander = MoveGroupCommander::new(mock, None);
        commander.remember_joint_values("here", None).unwrap();
        commander
            .remember_joint_values("there", &[1., 2.][..])
            .unwrap();
    }

    #[test]
    fn single_joint_target() {
        let mut mock = mock_group("tool0");
        mock.expect_set_joint_value_target()
            .withf(|target: &JointValueTarget| {
                *target
                    == JointValueTarget::Joint {
                        name: "elbow".to_string(),
                        values: vec![0.7],
                    }
            })
            .times(1)
            .returning(|_| Ok(()));
        let mut commander = MoveGroupCommander::new(mock, None);
        commander
            .set_joint_value_target_for_joint("elbow", 0.7)
            .unwrap();
    }

    #[test]
    fn go_request_conversions() {
        assert_eq!(GoRequest::from(()), GoRequest::default());
        assert!(GoRequest::default().wait);
        let request = GoRequest::from(&[1., 2.][..]);
        assert_eq!(request.target, Some(GoTarget::Positions(vec![1., 2.])));
        assert!(request.wait);
    }

    #[test]
    fn joint_value_parsing() {
        assert_eq!(parse_joint_values("0.1 -0.5 1"), Some(vec![0.1, -0.5, 1.]));
        assert_eq!(parse_joint_values("[1,2]"), Some(vec![1., 2.]));
        assert_eq!(parse_joint_values("home"), None);
        assert_eq!(parse_joint_values(""), None);
        assert_eq!(parse_joint_values("1 two"), None);
        assert_eq!(parse_joint_values("inf"), None);
        assert_eq!(parse_joint_values("1 NaN"), None);
        assert_eq!(parse_joint_values("-infinity"), None);
    }

    #[test]
    fn go_treats_non_finite_names_as_named_targets() {
        let mut mock = mock_group("tool0");
        mock.expect_get_remembered_joint_values()
            .returning(BTreeMap::new);
        mock.expect_set_joint_value_target().times(0);
        mock.expect_set_named_target()
            .with(eq("inf"))
            .times(1)
            .returning(|_| Ok(true));
        mock.expect_move_to_target()
            .times(1)
            .returning(|| Ok(MoveItErrorCode::Success));
        let mut commander = MoveGroupCommander::new(mock, None);
        assert!(commander.go("inf").unwrap());
    }

    #[test]
    fn go_with_variables() {
        let mut variables = BTreeMap::new();
        variables.insert("elbow".to_string(), 1.5);
        let expected = JointValueTarget::Variables(variables.clone());
        let mut mock = mock_group("tool0");
        mock.expect_get_remembered_joint_values().times(0);
        mock.expect_set_joint_value_target()
            .withf(move |target: &JointValueTarget| *target == expected)
            .times(1)
            .returning(|_| Ok(()));
        mock.expect_move_to_target()
            .times(1)
            .returning(|| Ok(MoveItErrorCode::Success));
        let mut commander = MoveGroupCommander::new(mock, None);
        assert!(commander.go(variables).unwrap());
    }
}
