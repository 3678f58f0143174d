//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Input and verbosity args shared by every command.
fn with_common_args(cmd: Command) -> Command {
    cmd.arg(input_path_arg())
        .arg(input_text_arg())
        .arg(verbose_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("mdesk")
        .about("Tokenize, parse and inspect Metadesk files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(tokens_command())
}

/// Parse a file and report errors.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Parse a file and report errors")
        .override_usage(
            "\
  mdesk check <FILE>
  mdesk check -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  mdesk check types.mdesk             # plain error report
  mdesk check types.mdesk --pretty    # annotated snippets
  mdesk check -s '{a b'               # inline text
  cat types.mdesk | mdesk check -     # stdin"#,
        )
        .arg(pretty_arg())
        .arg(color_arg());

    with_common_args(cmd)
}

/// Print the parsed tree.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Print the parsed tree")
        .override_usage(
            "\
  mdesk dump <FILE> [FLAGS]
  mdesk dump -s <TEXT> [FLAGS]",
        )
        .after_help(
            r#"EXAMPLES:
  mdesk dump types.mdesk                    # re-serialized tree
  mdesk dump types.mdesk --kinds --flags    # with node metadata
  mdesk dump types.mdesk --no-tags          # children only
  mdesk dump -s 'a: b c' --json             # JSON"#,
        )
        .arg(no_tags_arg())
        .arg(no_tag_args_arg())
        .arg(comments_arg())
        .arg(kinds_arg())
        .arg(flags_arg())
        .arg(spans_arg())
        .arg(json_arg())
        .arg(color_arg());

    with_common_args(cmd)
}

/// Print the token stream.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("Print the token stream")
        .override_usage(
            "\
  mdesk tokens <FILE>
  mdesk tokens -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  mdesk tokens types.mdesk            # significant tokens
  mdesk tokens types.mdesk --trivia   # whitespace and comments too
  mdesk tokens -s 'a: 1' --spans      # with byte ranges"#,
        )
        .arg(trivia_arg())
        .arg(spans_arg());

    with_common_args(cmd)
}
