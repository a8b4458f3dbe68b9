// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! # moveit-commander-rs
//! moveit-commander-rs is a library for commanding groups of robot joints through a
//! [MoveIt](https://moveit.ros.org) style planning and execution backend.
//!
//! **ALWAYS HAVE THE USER STOP BUTTON AT
//! HAND WHILE MOVING THE ROBOT!**
//!
//! ## Design
//! The library does not plan, does not solve kinematics and does not talk to controllers.
//! Everything of that is done by a backend which implements the [`MoveGroup`] trait.
//! On top of it the library offers:
//! * [commander](`crate::commander`) - [`MoveGroupCommander`], convenience methods for setting
//! targets, remembering joint configurations and moving.
//! * [interpreter](`crate::interpreter`) - a text command interpreter for interactive use.
//! * [move_group](`crate::move_group`) - the [`MoveGroup`] trait, its value types and
//! [`VirtualMoveGroup`], a backend without a robot for dry runs.
//!
//! # Example:
//!```no_run
//! use moveit_commander::{
//!     Axis, CommanderResult, MoveGroupCommander, VirtualJoint, VirtualMoveGroup,
//! };
//! fn main() -> CommanderResult<()> {
//!     let group = VirtualMoveGroup::new(
//!         "arm",
//!         vec![
//!             VirtualJoint::new("shoulder", -2.9, 2.9),
//!             VirtualJoint::new("elbow", -1.8, 1.8),
//!         ],
//!     )
//!     .with_end_effector_link("tool0");
//!     let mut commander = MoveGroupCommander::new(group, None);
//!     commander.remember_joint_values("start", None)?;
//!     commander.go(vec![0.5, -0.3])?;
//!     commander.shift_pose_target(Axis::Z, 0.05)?;
//!     commander.go(true)?;
//!     commander.go("start")?;
//!     Ok(())
//! }
//!```
//! The main function returns a CommanderResult<()> which means that it returns either Ok(())
//! or an Error of type CommanderException.
//!
//! [`go`](`MoveGroupCommander::go`) takes whatever describes a target: joint values, the name of
//! remembered joint values, or just `true`/`false` to move to the current target with or without
//! waiting for the motion to finish.
pub mod commander;
pub mod exception;
pub mod interpreter;
pub mod move_group;
pub mod utils;

pub use commander::{GoRequest, GoTarget, MoveGroupCommander, DEFAULT_MAX_MOVE_ATTEMPTS};
pub use exception::{CommanderException, CommanderResult};
pub use interpreter::{InfoLevel, MoveGroupCommandInterpreter, MoveGroupConnector};
pub use move_group::virtual_group::{VirtualJoint, VirtualMoveGroup};
pub use move_group::{
    Axis, JointValueTarget, MoveGroup, MoveGroupOptions, MoveItErrorCode, Plan, Pose,
};
