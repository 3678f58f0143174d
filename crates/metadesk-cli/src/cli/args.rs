//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Metadesk file to read (positional).
pub fn input_path_arg() -> Arg {
    Arg::new("input_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Metadesk file (use \"-\" for stdin)")
}

/// Inline source text (-s/--source).
pub fn input_text_arg() -> Arg {
    Arg::new("input_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .conflicts_with("input_path")
        .help("Inline Metadesk text")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Logging verbosity (-v).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Log parser events to stderr (-v for debug, -vv for trace)")
}

/// Annotated source snippets instead of the plain report (--pretty).
pub fn pretty_arg() -> Arg {
    Arg::new("pretty")
        .long("pretty")
        .action(ArgAction::SetTrue)
        .help("Render errors as annotated source snippets")
}

/// Omit tags (--no-tags).
pub fn no_tags_arg() -> Arg {
    Arg::new("no_tags")
        .long("no-tags")
        .action(ArgAction::SetTrue)
        .help("Omit tags")
}

/// Omit tag arguments (--no-tag-args).
pub fn no_tag_args_arg() -> Arg {
    Arg::new("no_tag_args")
        .long("no-tag-args")
        .action(ArgAction::SetTrue)
        .help("Omit tag arguments")
}

/// Include comments (--comments).
pub fn comments_arg() -> Arg {
    Arg::new("comments")
        .long("comments")
        .action(ArgAction::SetTrue)
        .help("Include attached comments")
}

/// Annotate node kinds (--kinds).
pub fn kinds_arg() -> Arg {
    Arg::new("kinds")
        .long("kinds")
        .action(ArgAction::SetTrue)
        .help("Annotate each node with its kind")
}

/// Annotate node flags (--flags).
pub fn flags_arg() -> Arg {
    Arg::new("flags")
        .long("flags")
        .action(ArgAction::SetTrue)
        .help("Annotate each node with its flags")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Output JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .conflicts_with_all(["no_tags", "no_tag_args", "comments", "kinds", "flags", "spans"])
        .help("Print the tree as JSON")
}

/// Include whitespace, newlines and comments (--trivia).
pub fn trivia_arg() -> Arg {
    Arg::new("trivia")
        .long("trivia")
        .action(ArgAction::SetTrue)
        .help("Include whitespace, newline and comment tokens")
}
