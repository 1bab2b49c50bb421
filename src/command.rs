//! Command declarations.
//!
//! A [`Command`] names a branch point: when the front token matches one of
//! its names, the group appends the token to the dispatch path, advances
//! the cursor and runs the command's action with the same context. An
//! action typically builds its own nested group and parses the remaining
//! tokens; a command without an action is a fallthrough success.

use crate::context::Context;

/// A named, described terminal action or nested dispatcher.
pub struct Command<'a> {
    pub(crate) names: Vec<String>,
    pub(crate) description: String,
    pub(crate) action: Option<Box<dyn FnOnce(&mut Context) -> i32 + 'a>>,
}

impl<'a> Command<'a> {
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            description: String::new(),
            action: None,
        }
    }

    /// Replace the name list with a single name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names = vec![name.into()];
        self
    }

    /// Replace the name list; every entry is a synonym for this command.
    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The callback run on dispatch. Its return code is authoritative and
    /// propagates out of `parse` unchanged.
    pub fn action(mut self, action: impl FnOnce(&mut Context) -> i32 + 'a) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    pub(crate) fn matches(&self, token: &str) -> bool {
        self.names.iter().any(|name| !name.is_empty() && name == token)
    }
}

impl Default for Command<'_> {
    fn default() -> Self {
        Self::new()
    }
}
