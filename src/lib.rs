//! # argot
//!
//! Declarative command line parsing and dispatch.
//!
//! A command line is described as a set of *fragments*: typed option
//! binders ([`Opt`]), boolean flags ([`Flag`]), subcommands ([`Command`])
//! and error/help handlers ([`ErrorHandler`], [`Help`]). Fragments compose
//! into a [`Group`], and a group consumes a token cursor ([`Context`]),
//! binding values into caller-owned storage and dispatching nested
//! subcommands until a terminal action runs or a failure is reported.
//!
//! ```console
//! $ demo new widget --template minimal
//! Creating project 'widget' from template 'minimal'.
//!
//! $ demo --help
//! Usage: demo [command] [command-options]
//!
//! Commands:
//!   -h|--help      Show command line help.
//!   new            Create a new project.
//! ```
//!
//! Parsing is fully synchronous; a `parse` call returns an `i32` result
//! code (see [`code`]) and never retains the caller's storage past its
//! return. Nested subcommands are handled by the command's action calling
//! `parse` again on the same [`Context`].

pub mod binder;
pub mod code;
pub mod command;
pub mod compose;
pub mod context;
pub mod group;
pub mod handler;
pub mod render;
pub mod synopsis;
pub mod value;

pub use binder::{Flag, Opt};
pub use code::ParseError;
pub use command::Command;
pub use compose::merge;
pub use context::Context;
pub use group::Group;
pub use handler::{ErrorHandler, Help};
pub use synopsis::{Entry, Synopsis};
pub use value::{Switch, Value};
