// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains exception and Result definitions
use thiserror::Error;

/// Represents all kind of errors a [`MoveGroupCommander`](`crate::MoveGroupCommander`) or a
/// [`MoveGroup`](`crate::MoveGroup`) backend can report.
#[derive(Error, Debug)]
pub enum CommanderException {
    /// NoEndEffectorException is returned if an operation that needs an end-effector link is
    /// called on a group that has none.
    #[error("There is no end effector to {operation}")]
    NoEndEffectorException {
        /// What the caller tried to do with the end effector.
        operation: &'static str,
    },

    /// InvalidPoseException is returned if a pose is not described by exactly 6 values.
    #[error("Pose description expected to consist of 6 values, got {length}")]
    InvalidPoseException { length: usize },

    /// UnknownTargetException is returned if a target name is neither remembered, nor a list of
    /// joint values, nor a named target of the group.
    #[error("'{name}' is unknown")]
    UnknownTargetException { name: String },

    /// UnknownGroupException is returned if no move group with the given name exists.
    #[error("Group '{name}' was not found")]
    UnknownGroupException { name: String },

    /// BackendException wraps any failure raised by the planning/execution backend.
    #[error("{message}")]
    BackendException { message: String },
}

/// creates a BackendException from anything printable
pub(crate) fn create_backend_exception<T: ToString>(message: T) -> CommanderException {
    CommanderException::BackendException {
        message: message.to_string(),
    }
}

/// Result type which can have CommanderException as Error
pub type CommanderResult<T> = Result<T, CommanderException>;
