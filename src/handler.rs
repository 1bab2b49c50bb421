//! Error and help handler declarations.
//!
//! Handlers are fragments like any other: attach them to a group, or to
//! the [`Context`] to make them ambient for every nested group that does
//! not declare its own. Callbacks are reference-counted so a handler can
//! be shared between a context and the groups it flows through.

use std::rc::Rc;

use crate::code;
use crate::context::Context;
use crate::render;
use crate::synopsis::Entry;

/// Receives the context and a formatted diagnostic message immediately
/// before a failure code is returned. Side effects only; the code is
/// already fixed when the callback runs.
#[derive(Clone)]
pub struct ErrorHandler {
    callback: Rc<dyn Fn(&mut Context, &str)>,
}

impl ErrorHandler {
    pub fn new(callback: impl Fn(&mut Context, &str) + 'static) -> Self {
        Self {
            callback: Rc::new(callback),
        }
    }

    /// The default printer: one message per line on stderr.
    pub fn stderr() -> Self {
        Self::new(|_, message| eprintln!("{message}"))
    }

    pub(crate) fn report(&self, context: &mut Context, message: &str) {
        self.callback.as_ref()(context, message);
    }
}

/// A help interception point: a name set, a description for listings, and
/// an action returning the parse code to surface.
#[derive(Clone)]
pub struct Help {
    pub(crate) names: Vec<String>,
    pub(crate) description: String,
    pub(crate) action: Option<Rc<dyn Fn(&mut Context) -> i32>>,
}

impl Help {
    /// Help declaration with the default `-h`/`--help` names and no
    /// action. Without an action the names are not intercepted.
    pub fn new() -> Self {
        Self {
            names: vec!["-h".to_owned(), "--help".to_owned()],
            description: "Show command line help.".to_owned(),
            action: None,
        }
    }

    /// The default renderer: print the current group's usage text to
    /// stdout and return [`code::SUCCESSFUL_HELP`].
    pub fn standard() -> Self {
        Self::new().action(|context: &mut Context| {
            if let Some(synopsis) = context.synopsis() {
                print!("{}", render::usage(context.path(), synopsis));
            }
            code::SUCCESSFUL_HELP
        })
    }

    /// Replace the name set with a single name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names = vec![name.into()];
        self
    }

    /// Replace the name set.
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

    pub fn action(mut self, action: impl Fn(&mut Context) -> i32 + 'static) -> Self {
        self.action = Some(Rc::new(action));
        self
    }

    pub(crate) fn matches(&self, token: &str) -> bool {
        self.names.iter().any(|name| !name.is_empty() && name == token)
    }

    pub(crate) fn entry(&self) -> Entry {
        Entry {
            names: self.names.clone(),
            description: self.description.clone(),
        }
    }
}

impl Default for Help {
    fn default() -> Self {
        Self::new()
    }
}
