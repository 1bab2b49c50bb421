//! Command dispatch through flat and nested groups.

use argot::{code, Command, Context, Group};
use proptest::prelude::*;
use std::cell::{Cell, RefCell};

fn context(tokens: &[&str]) -> Context {
    Context::new(tokens.iter().copied())
}

#[test]
fn missing_path_when_no_tokens_exist() {
    let mut ctx = Context::new(Vec::<String>::new());
    let status = Group::new()
        .command(Command::new().name("new"))
        .parse(&mut ctx);
    assert_eq!(status, code::MISSING_PATH);
}

#[test]
fn a_command_group_requires_a_command() {
    let mut ctx = context(&["path/to/program"]);
    let status = Group::new()
        .command(Command::new().name("new"))
        .parse(&mut ctx);
    assert_eq!(status, code::MISSING_COMMAND);
}

#[test]
fn unmatched_tokens_are_unknown_commands() {
    let triggered = Cell::new(false);
    let mut ctx = context(&["path/to/program", "test"]);
    let status = Group::new()
        .command(Command::new().names(["yolo", "swag"]).action(|_| {
            triggered.set(true);
            123
        }))
        .parse(&mut ctx);
    assert_eq!(status, code::UNKNOWN_COMMAND);
    assert!(!triggered.get());
}

#[test]
fn synonyms_dispatch_the_same_command() {
    for token in ["yolo", "swag"] {
        let triggered = Cell::new(false);
        let mut ctx = context(&["path/to/program", token]);
        let status = Group::new()
            .command(Command::new().names(["yolo", "swag"]).action(|_| {
                triggered.set(true);
                123
            }))
            .parse(&mut ctx);
        assert_eq!(status, 123);
        assert!(triggered.get());
    }
}

#[test]
fn dispatch_consumes_the_command_and_records_the_path() {
    // The build command is reachable through its second name.
    let seen_path = RefCell::new(Vec::new());
    let seen_remaining = Cell::new(usize::MAX);
    let mut ctx = context(&["prog", "yolo"]);
    let status = Group::new()
        .command(Command::new().name("new"))
        .command(Command::new().name("open"))
        .command(
            Command::new()
                .names(["build", "yolo"])
                .action(|ctx: &mut Context| {
                    *seen_path.borrow_mut() = ctx.path().to_vec();
                    seen_remaining.set(ctx.remaining());
                    300
                }),
        )
        .parse(&mut ctx);
    assert_eq!(status, 300);
    assert_eq!(*seen_path.borrow(), ["prog", "yolo"]);
    assert_eq!(seen_remaining.get(), 0);
}

#[test]
fn the_first_declared_command_wins_duplicate_names() {
    let mut ctx = context(&["prog", "dup"]);
    let status = Group::new()
        .command(Command::new().name("dup").action(|_| 10))
        .command(Command::new().name("dup").action(|_| 20))
        .parse(&mut ctx);
    assert_eq!(status, 10);
}

#[test]
fn a_command_without_an_action_is_a_fallthrough_success() {
    let mut ctx = context(&["prog", "noop"]);
    let status = Group::new()
        .command(Command::new().name("noop"))
        .parse(&mut ctx);
    assert_eq!(status, code::SUCCESSFUL);
}

#[test]
fn callback_codes_propagate_unchanged() {
    let mut ctx = context(&["prog", "fail"]);
    let status = Group::new()
        .command(Command::new().name("fail").action(|_| 77))
        .parse(&mut ctx);
    assert_eq!(status, 77);
}

#[test]
fn empty_string_tokens_are_skipped_before_dispatch() {
    let mut ctx = context(&["prog", "", "swag"]);
    let status = Group::new()
        .command(Command::new().name("swag").action(|_| 123))
        .parse(&mut ctx);
    assert_eq!(status, 123);
}

#[test]
fn a_stream_of_placeholders_is_an_exhausted_stream() {
    let mut ctx = context(&["prog", "", ""]);
    let status = Group::new()
        .command(Command::new().name("swag"))
        .parse(&mut ctx);
    assert_eq!(status, code::MISSING_COMMAND);
}

#[test]
fn an_empty_group_imposes_no_dispatch_requirement() {
    let mut ctx = context(&["prog"]);
    assert_eq!(Group::new().parse(&mut ctx), code::SUCCESSFUL);

    // With no commands to fall back to, a leftover token is an option error.
    let mut ctx = context(&["prog", "x"]);
    assert_eq!(Group::new().parse(&mut ctx), code::UNKNOWN_OPTION);
}

#[test]
fn nested_groups_recurse_through_command_actions() {
    let seen_path = RefCell::new(Vec::new());
    let mut ctx = context(&["prog", "remote", "add"]);
    let status = Group::new()
        .command(Command::new().name("remote").action(|ctx: &mut Context| {
            Group::new()
                .command(Command::new().name("add").action(|ctx: &mut Context| {
                    *seen_path.borrow_mut() = ctx.path().to_vec();
                    7
                }))
                .parse(ctx)
        }))
        .parse(&mut ctx);
    assert_eq!(status, 7);
    assert_eq!(*seen_path.borrow(), ["prog", "remote", "add"]);
}

#[test]
fn nested_failures_propagate_to_the_top() {
    let mut ctx = context(&["prog", "remote", "bogus"]);
    let status = Group::new()
        .command(Command::new().name("remote").action(|ctx: &mut Context| {
            Group::new()
                .command(Command::new().name("add"))
                .parse(ctx)
        }))
        .parse(&mut ctx);
    assert_eq!(status, code::UNKNOWN_COMMAND);
}

proptest! {
    /// Empty tokens anywhere after the path token never change the outcome.
    #[test]
    fn placeholder_tokens_never_affect_dispatch(
        before in 0usize..3,
        after in 0usize..3,
    ) {
        let mut tokens = vec!["prog".to_owned()];
        tokens.extend(std::iter::repeat(String::new()).take(before));
        tokens.push("swag".to_owned());
        tokens.extend(std::iter::repeat(String::new()).take(after));

        let remaining = Cell::new(usize::MAX);
        let mut ctx = Context::new(tokens);
        let status = Group::new()
            .command(Command::new().name("swag").action(|ctx: &mut Context| {
                remaining.set(ctx.remaining());
                123
            }))
            .parse(&mut ctx);
        prop_assert_eq!(status, 123);
        prop_assert_eq!(remaining.get(), 0);
    }
}
