//! Token cursor threaded through nested parses.
//!
//! A [`Context`] owns the token vector for one top-level parse: the cursor
//! position, the dispatch path accumulated across nested groups, ambient
//! error/help handlers, and the synopsis of whichever group is currently
//! being parsed. Every group reads and advances the same context, so a
//! command's action can hand the remaining tokens straight to a nested
//! group.

use crate::handler::{ErrorHandler, Help};
use crate::synopsis::Synopsis;

/// Cursor over the remaining command line tokens.
pub struct Context {
    tokens: Vec<String>,
    cursor: usize,
    first_token_is_path: bool,
    pub(crate) error_handler: Option<ErrorHandler>,
    pub(crate) help_handler: Option<Help>,
    path: Vec<String>,
    scope: Option<Synopsis>,
}

impl Context {
    /// Build a context over an explicit token sequence.
    ///
    /// The first token is treated as the program's invocation path until
    /// [`first_token_is_path`](Self::first_token_is_path) says otherwise.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            cursor: 0,
            first_token_is_path: true,
            error_handler: None,
            help_handler: None,
            path: Vec::new(),
            scope: None,
        }
    }

    /// Build a context over the process argument vector.
    pub fn from_env() -> Self {
        Self::new(std::env::args())
    }

    /// Whether the leading token is the program path. Defaults to true.
    pub fn first_token_is_path(mut self, is_path: bool) -> Self {
        self.first_token_is_path = is_path;
        self
    }

    /// Attach the ambient error handler, used by any group that does not
    /// declare its own.
    pub fn with_error(mut self, handler: ErrorHandler) -> Self {
        self.error_handler = Some(handler);
        self
    }

    /// Attach the ambient help handler, used by any group that does not
    /// declare its own.
    pub fn with_help(mut self, help: Help) -> Self {
        self.help_handler = Some(help);
        self
    }

    /// Number of tokens left, counting the front one.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.cursor
    }

    /// The front token, if any.
    pub fn front(&self) -> Option<&str> {
        self.tokens.get(self.cursor).map(String::as_str)
    }

    /// Drop the front token and skip any empty-string placeholders after
    /// it. Clears the path flag; no-op when the stream is exhausted.
    pub fn advance(&mut self) {
        if self.cursor >= self.tokens.len() {
            return;
        }
        self.first_token_is_path = false;
        self.cursor += 1;
        while self.tokens.get(self.cursor).is_some_and(|token| token.is_empty()) {
            self.cursor += 1;
        }
    }

    /// The dispatch path so far: the program display name followed by each
    /// consumed command name.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Snapshot of the group currently being parsed, for help rendering.
    pub fn synopsis(&self) -> Option<&Synopsis> {
        self.scope.as_ref()
    }

    pub(crate) fn install_scope(&mut self, synopsis: Synopsis) {
        self.scope = Some(synopsis);
    }

    pub(crate) fn push_path(&mut self, name: String) {
        self.path.push(name);
    }

    /// Consume the leading path token if one is expected, recording its
    /// display name. False is the fatal missing-path precondition.
    pub(crate) fn consume_path_token(&mut self) -> bool {
        if !self.first_token_is_path {
            return true;
        }
        let Some(front) = self.tokens.get(self.cursor) else {
            return false;
        };
        let name = display_name(front).to_owned();
        if !name.is_empty() {
            self.path.push(name);
        }
        self.advance();
        true
    }
}

/// Program display name: the invocation path stripped of its directory
/// prefix (either separator style) and extension.
pub(crate) fn display_name(token: &str) -> &str {
    let file = match token.rfind(|c| c == '/' || c == '\\') {
        Some(index) => &token[index + 1..],
        None => token,
    };
    match file.rfind('.') {
        Some(index) => &file[..index],
        None => file,
    }
}
