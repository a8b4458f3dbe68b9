// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains the MoveItErrorCode type.
use std::fmt::{Display, Formatter};

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Outcome of a planning or execution request, as reported by the move group.
#[derive(Serialize_repr, Deserialize_repr, Debug, PartialEq, Eq, Copy, Clone)]
#[repr(i32)]
#[derive(FromPrimitive, ToPrimitive)]
pub enum MoveItErrorCode {
    Success = 1,
    Failure = 99999,
    PlanningFailed = -1,
    InvalidMotionPlan = -2,
    MotionPlanInvalidatedByEnvironmentChange = -3,
    ControlFailed = -4,
    UnableToAcquireSensorData = -5,
    TimedOut = -6,
    Preempted = -7,
}

impl MoveItErrorCode {
    /// Interprets a raw error code value. Unknown values map to [`Failure`](`Self::Failure`).
    pub fn from_code(code: i32) -> Self {
        MoveItErrorCode::from_i32(code).unwrap_or(MoveItErrorCode::Failure)
    }
    pub fn is_success(&self) -> bool {
        *self == MoveItErrorCode::Success
    }
    /// True if executing the same request again may succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MoveItErrorCode::PlanningFailed
                | MoveItErrorCode::InvalidMotionPlan
                | MoveItErrorCode::MotionPlanInvalidatedByEnvironmentChange
                | MoveItErrorCode::UnableToAcquireSensorData
        )
    }
}

impl Display for MoveItErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            MoveItErrorCode::Success => "success",
            MoveItErrorCode::Failure => "failure",
            MoveItErrorCode::PlanningFailed => "planning failed",
            MoveItErrorCode::InvalidMotionPlan => "invalid motion plan",
            MoveItErrorCode::MotionPlanInvalidatedByEnvironmentChange => {
                "motion plan invalidated by environment change"
            }
            MoveItErrorCode::ControlFailed => "control failed",
            MoveItErrorCode::UnableToAcquireSensorData => "unable to acquire sensor data",
            MoveItErrorCode::TimedOut => "timed out",
            MoveItErrorCode::Preempted => "preempted",
        };
        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use crate::move_group::error_code::MoveItErrorCode;
    use num_traits::FromPrimitive;

    #[test]
    fn from_wire_value() {
        assert_eq!(MoveItErrorCode::from_i32(1), Some(MoveItErrorCode::Success));
        assert_eq!(
            MoveItErrorCode::from_i32(-3),
            Some(MoveItErrorCode::MotionPlanInvalidatedByEnvironmentChange)
        );
        assert_eq!(MoveItErrorCode::from_i32(42), None);
        assert_eq!(MoveItErrorCode::from_code(42), MoveItErrorCode::Failure);
        assert_eq!(MoveItErrorCode::from_code(-6), MoveItErrorCode::TimedOut);
    }

    #[test]
    fn recoverable_codes() {
        assert!(MoveItErrorCode::PlanningFailed.is_recoverable());
        assert!(MoveItErrorCode::UnableToAcquireSensorData.is_recoverable());
        assert!(!MoveItErrorCode::ControlFailed.is_recoverable());
        assert!(!MoveItErrorCode::Preempted.is_recoverable());
        assert!(!MoveItErrorCode::Success.is_recoverable());
    }
}
