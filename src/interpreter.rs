// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains the MoveGroupCommandInterpreter type, which executes text commands on move groups.
//!
//! ```no_run
//! use moveit_commander::interpreter::MoveGroupCommandInterpreter;
//! use moveit_commander::{CommanderResult, MoveGroupOptions, VirtualJoint, VirtualMoveGroup};
//! let mut interpreter = MoveGroupCommandInterpreter::new(
//!     |options: &MoveGroupOptions| -> CommanderResult<VirtualMoveGroup> {
//!         Ok(VirtualMoveGroup::new(
//!             &options.group_name,
//!             vec![VirtualJoint::new("joint_1", -1., 1.)],
//!         ))
//!     },
//! );
//! interpreter.execute("use arm");
//! interpreter.execute("set up 0.5");
//! let (level, message) = interpreter.execute("go up");
//! println!("{:?}: {}", level, message);
//! ```
use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::commander::MoveGroupCommander;
use crate::exception::{CommanderException, CommanderResult};
use crate::move_group::{MoveGroup, MoveGroupOptions};

pub mod completer;

use completer::SimpleCompleter;

/// Commands understood by [`MoveGroupCommandInterpreter::execute`].
pub const KEYWORDS: [&str; 16] = [
    "use",
    "help",
    "record",
    "set",
    "del",
    "show",
    "current",
    "joints",
    "eef",
    "tolerance",
    "rand",
    "go",
    "plan",
    "stop",
    "quit",
    "exit",
];

const HELP: &str = "Known commands:
  use <group name>        switch to (and connect to) a group
  record <name>           remember the current joint values under <name>
  set <name> <values>     remember the given joint values under <name>
  del <name>              forget the joint values remembered under <name>
  show                    list all remembered joint values
  <name>                  print the joint values remembered under <name>
  current                 print the current joint values (and end-effector pose)
  joints                  print the joints of the group
  eef                     print the end-effector link
  tolerance [<value>]     print or set the goal tolerance
  rand                    move to a random target
  go [<name>|rand]        move to a remembered or named target, or the current one
  plan                    plan to the current target without moving
  stop                    stop the current execution
  quit                    leave";

/// Severity of an interpreter response.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfoLevel {
    Fail,
    Warn,
    Success,
    Info,
    Debug,
}

impl InfoLevel {
    const ENDC: &'static str = "\x1b[0m";

    /// ANSI color code of the level, empty for plain output.
    pub fn color(&self) -> &'static str {
        match self {
            InfoLevel::Fail => "\x1b[91m",
            InfoLevel::Warn => "\x1b[93m",
            InfoLevel::Success => "\x1b[92m",
            InfoLevel::Debug => "\x1b[94m",
            InfoLevel::Info => "",
        }
    }

    /// Wraps `message` in the color of the level.
    pub fn paint(&self, message: &str) -> String {
        match self.color() {
            "" => message.to_string(),
            color => format!("{}{}{}", color, message, InfoLevel::ENDC),
        }
    }
}

/// Opens move groups by name for the interpreter.
pub trait MoveGroupConnector {
    type Group: MoveGroup;

    /// Connects to the group described by `options`.
    /// # Errors
    /// * [`UnknownGroupException`](`crate::exception::CommanderException::UnknownGroupException`)
    /// if there is no such group.
    fn connect(&mut self, options: &MoveGroupOptions) -> CommanderResult<Self::Group>;
}

impl<G, F> MoveGroupConnector for F
where
    G: MoveGroup,
    F: FnMut(&MoveGroupOptions) -> CommanderResult<G>,
{
    type Group = G;

    fn connect(&mut self, options: &MoveGroupOptions) -> CommanderResult<G> {
        self(options)
    }
}

fn format_values(values: &[f64]) -> String {
    let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[ {} ]", values.join(" "))
}

/// Executes text commands on a set of move groups, one of which is active.
pub struct MoveGroupCommandInterpreter<C: MoveGroupConnector> {
    connector: C,
    groups: BTreeMap<String, MoveGroupCommander<C::Group>>,
    active: Option<String>,
}

impl<C: MoveGroupConnector> MoveGroupCommandInterpreter<C> {
    pub fn new(connector: C) -> Self {
        MoveGroupCommandInterpreter {
            connector,
            groups: BTreeMap::new(),
            active: None,
        }
    }

    /// Name of the active group, empty if no group is in use.
    pub fn get_active_group(&self) -> &str {
        self.active.as_deref().unwrap_or("")
    }

    /// Commander of the active group.
    pub fn active_commander(&mut self) -> Option<&mut MoveGroupCommander<C::Group>> {
        let name = self.active.as_ref()?;
        self.groups.get_mut(name)
    }

    /// Words worth completing: commands, connected groups and the remembered names of the
    /// active group.
    pub fn get_keywords(&self) -> Vec<String> {
        let mut keywords: Vec<String> = KEYWORDS.iter().map(|k| k.to_string()).collect();
        keywords.extend(self.groups.keys().cloned());
        if let Some(commander) = self.active.as_ref().and_then(|name| self.groups.get(name)) {
            keywords.extend(commander.get_remembered_joint_values().into_keys());
        }
        keywords
    }

    /// Executes one command.
    /// # Return
    /// The severity and the text of the response. Errors are reported as [`InfoLevel::Fail`].
    pub fn execute(&mut self, cmd: &str) -> (InfoLevel, String) {
        match self.execute_command(cmd.trim()) {
            Ok(response) => response,
            Err(error) => (InfoLevel::Fail, error.to_string()),
        }
    }

    fn execute_command(&mut self, cmd: &str) -> CommanderResult<(InfoLevel, String)> {
        let (keyword, argument) = match cmd.find(char::is_whitespace) {
            Some(split) => (&cmd[..split], cmd[split..].trim()),
            None => (cmd, ""),
        };
        let keyword = keyword.to_lowercase();
        debug!("executing '{}' with argument '{}'", keyword, argument);
        match keyword.as_str() {
            "" => Ok((InfoLevel::Info, String::new())),
            "help" => Ok((InfoLevel::Info, HELP.to_string())),
            "use" => self.use_group(argument),
            "quit" | "exit" => Ok((
                InfoLevel::Info,
                "Use quit in the interactive loop to leave".to_string(),
            )),
            _ => {
                let commander = match self.active_commander() {
                    Some(commander) => commander,
                    None => {
                        return Ok((
                            InfoLevel::Fail,
                            "No active group. Select one with 'use <group name>'.".to_string(),
                        ))
                    }
                };
                if let Some(response) = execute_group_command(commander, &keyword, cmd, argument)? {
                    return Ok(response);
                }
                let mut message = format!("Unknown command: '{}'", cmd);
                let suggestions = self.suggestions(&keyword);
                if !suggestions.is_empty() {
                    message.push_str(&format!(". Did you mean: {}?", suggestions.join(", ")));
                }
                Ok((InfoLevel::Fail, message))
            }
        }
    }

    fn use_group(&mut self, name: &str) -> CommanderResult<(InfoLevel, String)> {
        if name.is_empty() {
            return Ok(match &self.active {
                Some(active) => (InfoLevel::Info, format!("Using group '{}'", active)),
                None => (InfoLevel::Fail, "Usage: use <group name>".to_string()),
            });
        }
        if !self.groups.contains_key(name) {
            let group = self.connector.connect(&MoveGroupOptions::new(name))?;
            self.groups
                .insert(name.to_string(), MoveGroupCommander::new(group, None));
        }
        self.active = Some(name.to_string());
        Ok((InfoLevel::Success, format!("Using group '{}'", name)))
    }

    fn suggestions(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        SimpleCompleter::new(self.get_keywords())
            .matches(text)
            .into_iter()
            .map(String::from)
            .collect()
    }
}

/// Executes a command on the active group. None if the command is not known.
fn execute_group_command<G: MoveGroup>(
    commander: &mut MoveGroupCommander<G>,
    keyword: &str,
    cmd: &str,
    argument: &str,
) -> CommanderResult<Option<(InfoLevel, String)>> {
    let response = match keyword {
        "record" if !argument.is_empty() => {
            commander.remember_joint_values(argument, None)?;
            Ok((
                InfoLevel::Success,
                format!(
                    "Remembered current joint values under the name '{}'.",
                    argument
                ),
            ))
        }
        "set" if !argument.is_empty() => {
            let mut parts = argument.split_whitespace();
            let name = parts.next().unwrap_or_default();
            let values: Result<Vec<f64>, _> = parts.map(str::parse::<f64>).collect();
            let values = match values {
                Ok(values) if values.is_empty() => {
                    return Ok(Some((
                        InfoLevel::Fail,
                        "Usage: set <name> <values>".to_string(),
                    )))
                }
                Ok(values) => values,
                Err(_) => {
                    return Ok(Some((
                        InfoLevel::Fail,
                        format!("Unable to parse joint values for '{}'", name),
                    )))
                }
            };
            commander.remember_joint_values(name, values.as_slice())?;
            Ok((
                InfoLevel::Success,
                format!(
                    "Remembered specified joint values {} under the name '{}'.",
                    format_values(&values),
                    name
                ),
            ))
        }
        "del" if !argument.is_empty() => {
            commander.forget_joint_values(argument);
            Ok((
                InfoLevel::Success,
                format!("Forgot joint values under the name '{}'.", argument),
            ))
        }
        "show" => {
            let remembered = commander.get_remembered_joint_values();
            if remembered.is_empty() {
                return Ok(Some((
                    InfoLevel::Info,
                    "There are no remembered joint values.".to_string(),
                )));
            }
            let lines: Vec<String> = remembered
                .iter()
                .map(|(name, values)| format!("{} = {}", name, format_values(values)))
                .collect();
            Ok((InfoLevel::Info, lines.join("\n")))
        }
        "current" => {
            let mut response = format!(
                "joints = {}",
                format_values(&commander.get_current_joint_values()?)
            );
            if commander.has_end_effector_link() {
                let pose = commander.get_current_pose()?;
                response.push_str(&format!(
                    "\n{} pose = {}",
                    commander.get_end_effector_link(),
                    format_values(&pose.values)
                ));
            }
            Ok((InfoLevel::Info, response))
        }
        "joints" => Ok((InfoLevel::Info, commander.get_joints().join(" "))),
        "eef" => Ok(if commander.has_end_effector_link() {
            (InfoLevel::Info, commander.get_end_effector_link())
        } else {
            (
                InfoLevel::Warn,
                format!("Group '{}' has no end effector", commander.get_name()),
            )
        }),
        "tolerance" if argument.is_empty() => Ok((
            InfoLevel::Info,
            commander.get_goal_tolerance().to_string(),
        )),
        "tolerance" => match argument.parse::<f64>() {
            Ok(tolerance) if tolerance > 0. => {
                commander.set_goal_tolerance(tolerance);
                Ok((
                    InfoLevel::Success,
                    format!("Goal tolerance set to {}", tolerance),
                ))
            }
            _ => Ok((
                InfoLevel::Fail,
                format!("'{}' is not a valid tolerance", argument),
            )),
        },
        "rand" => move_randomly(commander),
        "go" if argument == "rand" => move_randomly(commander),
        "go" if argument.is_empty() => Ok(if commander.go(())? {
            (InfoLevel::Success, "Moved to target".to_string())
        } else {
            (InfoLevel::Fail, "Failed while moving to target".to_string())
        }),
        "go" => match commander.go(argument) {
            Ok(true) => Ok((InfoLevel::Success, format!("Moved to '{}'", argument))),
            Ok(false) => Ok((
                InfoLevel::Fail,
                format!("Failed while moving to '{}'", argument),
            )),
            Err(error @ CommanderException::UnknownTargetException { .. }) => {
                Ok((InfoLevel::Fail, error.to_string()))
            }
            Err(error) => Err(error),
        },
        "plan" => Ok(match commander.plan()? {
            Some(plan) => (
                InfoLevel::Success,
                format!("Found a plan with {} waypoints", plan.trajectory.len()),
            ),
            None => (InfoLevel::Fail, "Unable to find a plan".to_string()),
        }),
        "stop" => {
            commander.stop()?;
            Ok((InfoLevel::Success, "Stopped".to_string()))
        }
        "record" | "set" | "del" => Ok((
            InfoLevel::Fail,
            format!("Usage: {} <name>{}", keyword, if keyword == "set" { " <values>" } else { "" }),
        )),
        _ => {
            return Ok(commander
                .get_remembered_joint_values()
                .get(cmd)
                .map(|values| (InfoLevel::Info, format_values(values))))
        }
    };
    response.map(Some)
}

fn move_randomly<G: MoveGroup>(
    commander: &mut MoveGroupCommander<G>,
) -> CommanderResult<(InfoLevel, String)> {
    commander.set_random_target()?;
    Ok(if commander.go(())? {
        (InfoLevel::Success, "Moved to random target".to_string())
    } else {
        (
            InfoLevel::Fail,
            "Failed while moving to random target.".to_string(),
        )
    })
}

/// Reads commands from `input` until it ends, an empty line is read or the user quits, and
/// writes the colored responses to `output`.
pub fn run_interactive<C, R, W>(
    interpreter: &mut MoveGroupCommandInterpreter<C>,
    mut input: R,
    mut output: W,
) -> std::io::Result<()>
where
    C: MoveGroupConnector,
    R: BufRead,
    W: Write,
{
    writeln!(output)?;
    writeln!(
        output,
        "{}",
        "\x1b[95mWaiting for commands. Type 'help' to get a list of known commands.\x1b[0m"
    )?;
    writeln!(output)?;
    loop {
        write!(
            output,
            "{}",
            InfoLevel::Debug.paint(&format!("{}> ", interpreter.get_active_group()))
        )?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        let cmd = line.trim().to_lowercase();
        if cmd.is_empty() || cmd == "q" || cmd == "quit" || cmd == "exit" {
            break;
        }
        let (level, message) = interpreter.execute(&cmd);
        writeln!(output, "{}", level.paint(&message))?;
    }
    writeln!(output, "Bye bye!")
}
