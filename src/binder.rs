//! Type-erased value binders.
//!
//! An [`Opt`] or [`Flag`] closes over a caller-owned storage location at
//! construction time, erasing the storage type behind a boxed closure.
//! That lets heterogeneously-typed bindings sit in one group list; the
//! group only ever sees names, a description, and a `bind`/`set` call that
//! reports success. The borrow taken here must outlive one `parse` call;
//! `Group::parse` consumes the group, so the borrow ends when it returns.

use crate::value::{Switch, Value};

/// Placeholder used in diagnostics for binders declared without names.
const UNNAMED: &str = "opt";

/// A declared option binder, either required-positional or optional-named.
///
/// Required binders consume the next positional token unconditionally, in
/// declaration order. Named binders are matched by name anywhere in the
/// remaining stream and consume the following token as their value.
pub struct Opt<'a> {
    pub(crate) names: Vec<String>,
    pub(crate) description: String,
    pub(crate) required: bool,
    apply: Box<dyn FnMut(&str) -> bool + 'a>,
}

impl<'a> Opt<'a> {
    /// A required positional binder writing into `slot`.
    pub fn required<T: Value>(slot: &'a mut T) -> Self {
        Self {
            names: Vec::new(),
            description: String::new(),
            required: true,
            apply: Box::new(move |token| match T::parse_token(token) {
                Some(value) => {
                    *slot = value;
                    true
                }
                None => false,
            }),
        }
    }

    /// An optional named binder; presence is tracked by the `Option`.
    pub fn named<T: Value>(slot: &'a mut Option<T>) -> Self {
        Self {
            names: Vec::new(),
            description: String::new(),
            required: false,
            apply: Box::new(move |token| match T::parse_token(token) {
                Some(value) => {
                    *slot = Some(value);
                    true
                }
                None => false,
            }),
        }
    }

    /// Replace the name list with a single name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names = vec![name.into()];
        self
    }

    /// Replace the name list. Empty names are never matched.
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

    pub(crate) fn matches(&self, token: &str) -> bool {
        self.names.iter().any(|name| !name.is_empty() && name == token)
    }

    pub(crate) fn display_name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or(UNNAMED)
    }

    pub(crate) fn bind(&mut self, token: &str) -> bool {
        (self.apply)(token)
    }
}

/// A declared flag: no value token, presence alone sets the storage.
pub struct Flag<'a> {
    pub(crate) names: Vec<String>,
    pub(crate) description: String,
    switch: Box<dyn FnMut() -> bool + 'a>,
}

impl<'a> Flag<'a> {
    pub fn new<T: Switch>(slot: &'a mut T) -> Self {
        Self {
            names: Vec::new(),
            description: String::new(),
            switch: Box::new(move || slot.switch_on()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names = vec![name.into()];
        self
    }

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

    pub(crate) fn matches(&self, token: &str) -> bool {
        self.names.iter().any(|name| !name.is_empty() && name == token)
    }

    pub(crate) fn display_name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or(UNNAMED)
    }

    pub(crate) fn set(&mut self) -> bool {
        (self.switch)()
    }
}
