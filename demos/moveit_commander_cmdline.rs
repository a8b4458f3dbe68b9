// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

use std::f64::consts::PI;
use std::io;

use clap::Parser;
use moveit_commander::interpreter::run_interactive;
use moveit_commander::{
    CommanderException, CommanderResult, MoveGroupCommandInterpreter, MoveGroupOptions,
    VirtualJoint, VirtualMoveGroup,
};
use tracing_subscriber::EnvFilter;

/// Interactive command line for move groups.
///
/// Runs against virtual move groups which reach every target instantly, so commands can be
/// tried without a robot.
#[derive(Parser, Debug)]
#[clap(name = "moveit_commander_cmdline")]
struct CommandLineArguments {
    /// Groups to connect to at startup. The last one becomes the active group.
    pub group_names: Vec<String>,
    /// Print debug output of the commander
    #[clap(short, long)]
    pub verbose: bool,
}

fn connect(options: &MoveGroupOptions) -> CommanderResult<VirtualMoveGroup> {
    match options.group_name.as_str() {
        "panda_arm" => Ok(VirtualMoveGroup::new(
            "panda_arm",
            vec![
                VirtualJoint::new("panda_joint1", -2.8973, 2.8973),
                VirtualJoint::new("panda_joint2", -1.7628, 1.7628),
                VirtualJoint::new("panda_joint3", -2.8973, 2.8973),
                VirtualJoint::new("panda_joint4", -3.0718, -0.0698),
                VirtualJoint::new("panda_joint5", -2.8973, 2.8973),
                VirtualJoint::new("panda_joint6", -0.0175, 3.7525),
                VirtualJoint::new("panda_joint7", -2.8973, 2.8973),
            ],
        )
        .with_end_effector_link("panda_link8")
        .with_named_target(
            "ready",
            vec![0., -PI / 4., 0., -3. * PI / 4., 0., PI / 2., PI / 4.],
        )),
        "hand" => Ok(VirtualMoveGroup::new(
            "hand",
            vec![
                VirtualJoint::new("panda_finger_joint1", 0., 0.04),
                VirtualJoint::new("panda_finger_joint2", 0., 0.04),
            ],
        )
        .with_named_target("open", vec![0.04, 0.04])
        .with_named_target("close", vec![0., 0.])),
        name => Err(CommanderException::UnknownGroupException {
            name: name.to_string(),
        }),
    }
}

fn main() -> io::Result<()> {
    let args = CommandLineArguments::parse();
    let default_filter = if args.verbose {
        "moveit_commander=debug"
    } else {
        "moveit_commander=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .compact()
        .init();

    let mut interpreter = MoveGroupCommandInterpreter::new(connect);
    for group in &args.group_names {
        let (level, message) = interpreter.execute(&format!("use {}", group));
        println!("{}", level.paint(&message));
    }
    let stdin = io::stdin();
    run_interactive(&mut interpreter, stdin.lock(), io::stdout())
}
