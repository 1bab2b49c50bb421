//! Aggregate groups and the parse state machine.
//!
//! A [`Group`] is the unit of parsing: three binder lists (required,
//! optional, flag), a command list, and optional error/help handlers.
//! `parse` runs the hybrid state machine over one [`Context`]: help
//! interception, then the required phase, then an interleaved loop that
//! tries flags and named options before falling back to command dispatch.
//! Pure command groups and pure option groups are the degenerate cases of
//! the same machine.

use tracing::{debug, trace};

use crate::binder::{Flag, Opt};
use crate::code::{self, ParseError};
use crate::command::Command;
use crate::context::Context;
use crate::handler::{ErrorHandler, Help};
use crate::synopsis::{Entry, Synopsis};

/// An aggregate of parser fragments parsed together at one level.
#[derive(Default)]
pub struct Group<'a> {
    pub(crate) required: Vec<Opt<'a>>,
    pub(crate) optional: Vec<Opt<'a>>,
    pub(crate) flags: Vec<Flag<'a>>,
    pub(crate) commands: Vec<Command<'a>>,
    pub(crate) error_handler: Option<ErrorHandler>,
    pub(crate) help_handler: Option<Help>,
}

impl<'a> Group<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option binder; its entry point decided whether it is
    /// positional or named.
    pub fn option(mut self, option: Opt<'a>) -> Self {
        if option.required {
            self.required.push(option);
        } else {
            self.optional.push(option);
        }
        self
    }

    pub fn flag(mut self, flag: Flag<'a>) -> Self {
        self.flags.push(flag);
        self
    }

    pub fn command(mut self, command: Command<'a>) -> Self {
        self.commands.push(command);
        self
    }

    /// Set the group-local error handler, shadowing the ambient one.
    pub fn error(mut self, handler: ErrorHandler) -> Self {
        self.error_handler = Some(handler);
        self
    }

    /// Set the group-local help handler, shadowing the ambient one.
    pub fn help(mut self, help: Help) -> Self {
        self.help_handler = Some(help);
        self
    }

    /// Snapshot this group's rows for renderers. The help entry reflects
    /// the group-local handler only; `parse` swaps in the effective one.
    pub fn synopsis(&self) -> Synopsis {
        Synopsis {
            required: self.required.iter().map(binder_entry).collect(),
            optional: self.optional.iter().map(binder_entry).collect(),
            flags: self
                .flags
                .iter()
                .map(|flag| Entry {
                    names: flag.names.clone(),
                    description: flag.description.clone(),
                })
                .collect(),
            commands: self
                .commands
                .iter()
                .map(|command| Entry {
                    names: command.names.clone(),
                    description: command.description.clone(),
                })
                .collect(),
            help: self.help_handler.as_ref().map(Help::entry),
        }
    }

    /// Run the state machine over `context`, consuming the group.
    ///
    /// Consuming `self` ends the `&mut` borrows the binders hold, so the
    /// caller can read its storage as soon as this returns.
    pub fn parse(mut self, context: &mut Context) -> i32 {
        let help = self.help_handler.clone().or_else(|| context.help_handler.clone());
        let errors = self
            .error_handler
            .clone()
            .or_else(|| context.error_handler.clone());

        let mut synopsis = self.synopsis();
        synopsis.help = help.as_ref().map(Help::entry);
        context.install_scope(synopsis);

        if !context.consume_path_token() {
            return report(&errors, context, &ParseError::MissingPath);
        }

        // Help wins over everything else for the very first token.
        if let Some(outcome) = intercept_help(&help, context) {
            return outcome;
        }

        for option in &mut self.required {
            let name = option.display_name().to_owned();
            let Some(token) = context.front().map(str::to_owned) else {
                return report(&errors, context, &ParseError::MissingOption(name));
            };
            if !option.bind(&token) {
                let failure = ParseError::InvalidOptionValue {
                    value: token,
                    option: name,
                };
                return report(&errors, context, &failure);
            }
            trace!(option = %name, "bound required option");
            context.advance();
        }

        loop {
            let Some(token) = context.front().map(str::to_owned) else {
                if self.commands.is_empty() {
                    return code::SUCCESSFUL;
                }
                return report(&errors, context, &ParseError::MissingCommand);
            };

            if let Some(flag) = self.flags.iter_mut().find(|flag| flag.matches(&token)) {
                if !flag.set() {
                    let name = flag.display_name().to_owned();
                    return report(&errors, context, &ParseError::FlagRejected(name));
                }
                trace!(flag = %token, "set flag");
                context.advance();
                continue;
            }

            if let Some(option) = self.optional.iter_mut().find(|option| option.matches(&token)) {
                let name = option.display_name().to_owned();
                context.advance();
                let Some(value) = context.front().map(str::to_owned) else {
                    return report(&errors, context, &ParseError::MissingOptionValue(name));
                };
                if !option.bind(&value) {
                    let failure = ParseError::InvalidOptionValue {
                        value,
                        option: name,
                    };
                    return report(&errors, context, &failure);
                }
                trace!(option = %name, "bound named option");
                context.advance();
                continue;
            }

            if self.commands.is_empty() {
                return report(&errors, context, &ParseError::UnknownOption(token));
            }

            // First declared command wins; synonyms count as one command.
            if let Some(position) = self.commands.iter().position(|command| command.matches(&token)) {
                let command = self.commands.swap_remove(position);
                trace!(command = %token, "dispatching command");
                context.push_path(token);
                context.advance();
                return match command.action {
                    Some(action) => action(context),
                    None => code::SUCCESSFUL,
                };
            }

            if let Some(outcome) = intercept_help(&help, context) {
                return outcome;
            }

            return report(&errors, context, &ParseError::UnknownCommand(token));
        }
    }
}

fn binder_entry(option: &Opt<'_>) -> Entry {
    Entry {
        names: option.names.clone(),
        description: option.description.clone(),
    }
}

/// Run the help action if it exists and the front token names it.
fn intercept_help(help: &Option<Help>, context: &mut Context) -> Option<i32> {
    let help = help.as_ref()?;
    let action = help.action.as_ref()?;
    let front = context.front()?;
    if !help.matches(front) {
        return None;
    }
    debug!(token = %front, "help intercepted");
    Some(action.as_ref()(context))
}

/// Deliver the diagnostic to the active handler, then resolve the code.
fn report(errors: &Option<ErrorHandler>, context: &mut Context, error: &ParseError) -> i32 {
    debug!(code = error.code(), "parse failed: {error}");
    if let Some(handler) = errors {
        handler.report(context, &error.to_string());
    }
    error.code()
}
