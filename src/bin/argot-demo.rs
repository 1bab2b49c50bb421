//! Demo command line tool built on argot.
//!
//! A tiny project scaffolder showing nested dispatch, typed binders and
//! the default help/error handlers.
//!
//! Usage:
//!   argot-demo new `<name>` [--template `<template>`]  - Create a new project
//!   argot-demo open                                  - Open an existing project
//!   argot-demo build|yolo                            - Build the project
//!   argot-demo -d|--debug `<command>`                  - Report the exit code on stderr

use argot::{code, Command, Context, ErrorHandler, Flag, Group, Help, Opt};
use std::process;

fn main() {
    let mut debug = false;
    let mut context = Context::from_env()
        .with_help(Help::standard())
        .with_error(ErrorHandler::stderr());

    let status = Group::new()
        .command(
            Command::new()
                .name("new")
                .describe("Create a new project.")
                .action(new_project),
        )
        .command(
            Command::new()
                .name("open")
                .describe("Open an existing project.")
                .action(|_: &mut Context| {
                    println!("Opening project.");
                    code::SUCCESSFUL
                }),
        )
        .command(
            Command::new()
                .names(["build", "yolo"])
                .describe("Build the project.")
                .action(|_: &mut Context| {
                    println!("Building project.");
                    code::SUCCESSFUL
                }),
        )
        .flag(
            Flag::new(&mut debug)
                .names(["-d", "--debug"])
                .describe("Report the exit code on stderr."),
        )
        .parse(&mut context);

    if debug {
        eprintln!("parse finished with code {status}");
    }
    process::exit(normalize(status));
}

fn new_project(context: &mut Context) -> i32 {
    let mut name = String::new();
    let mut template: Option<String> = None;

    let status = Group::new()
        .option(
            Opt::required(&mut name)
                .name("name")
                .describe("Name of the project."),
        )
        .option(
            Opt::named(&mut template)
                .name("--template")
                .describe("Template to instantiate."),
        )
        .parse(context);
    if status != code::SUCCESSFUL {
        return normalize(status);
    }

    println!(
        "Creating project '{}' from template '{}'.",
        name,
        template.as_deref().unwrap_or("default")
    );
    code::SUCCESSFUL
}

/// Help output is a success from the process's point of view.
fn normalize(status: i32) -> i32 {
    if status == code::SUCCESSFUL_HELP {
        code::SUCCESSFUL
    } else {
        status
    }
}
