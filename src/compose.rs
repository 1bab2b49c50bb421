//! Composition of parser fragments into groups.
//!
//! Every fragment converts into a [`Group`], and groups merge by
//! concatenating their binder and command lists left-to-right. Handlers
//! attach only where the left side has none; the first handler
//! encountered wins, which keeps merging associative: however a chain of
//! fragments is parenthesized, the resulting aggregate lists the same rows
//! in the same order and keeps the same handlers.

use crate::binder::{Flag, Opt};
use crate::command::Command;
use crate::group::Group;
use crate::handler::{ErrorHandler, Help};

impl<'a> From<Opt<'a>> for Group<'a> {
    fn from(option: Opt<'a>) -> Self {
        Group::new().option(option)
    }
}

impl<'a> From<Flag<'a>> for Group<'a> {
    fn from(flag: Flag<'a>) -> Self {
        Group::new().flag(flag)
    }
}

impl<'a> From<Command<'a>> for Group<'a> {
    fn from(command: Command<'a>) -> Self {
        Group::new().command(command)
    }
}

impl<'a> From<ErrorHandler> for Group<'a> {
    fn from(handler: ErrorHandler) -> Self {
        Group::new().error(handler)
    }
}

impl<'a> From<Help> for Group<'a> {
    fn from(help: Help) -> Self {
        Group::new().help(help)
    }
}

impl<'a> Group<'a> {
    /// Merge another fragment or aggregate into this one.
    ///
    /// Binder and command lists concatenate in left-to-right order (the
    /// order is load-bearing for required binders, which match by
    /// position). A handler on the right side is taken only when this
    /// side has none.
    pub fn merge(mut self, other: impl Into<Group<'a>>) -> Self {
        let other = other.into();
        self.required.extend(other.required);
        self.optional.extend(other.optional);
        self.flags.extend(other.flags);
        self.commands.extend(other.commands);
        if self.error_handler.is_none() {
            self.error_handler = other.error_handler;
        }
        if self.help_handler.is_none() {
            self.help_handler = other.help_handler;
        }
        self
    }
}

/// Combine two fragments into an aggregate; `merge(a, b)` is
/// `a.into().merge(b)`.
pub fn merge<'a>(left: impl Into<Group<'a>>, right: impl Into<Group<'a>>) -> Group<'a> {
    left.into().merge(right)
}
