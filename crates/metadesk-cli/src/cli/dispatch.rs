//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::tokens::TokensArgs;

pub struct CheckParams {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub pretty: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),
            pretty: m.get_flag("pretty"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input_path: p.input_path,
            input_text: p.input_text,
            pretty: p.pretty,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub tags: bool,
    pub tag_args: bool,
    pub comments: bool,
    pub kinds: bool,
    pub flags: bool,
    pub spans: bool,
    pub json: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),
            tags: !m.get_flag("no_tags"),
            tag_args: !m.get_flag("no_tag_args"),
            comments: m.get_flag("comments"),
            kinds: m.get_flag("kinds"),
            flags: m.get_flag("flags"),
            spans: m.get_flag("spans"),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            input_path: p.input_path,
            input_text: p.input_text,
            tags: p.tags,
            tag_args: p.tag_args,
            comments: p.comments,
            kinds: p.kinds,
            flags: p.flags,
            spans: p.spans,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TokensParams {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub trivia: bool,
    pub spans: bool,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),
            trivia: m.get_flag("trivia"),
            spans: m.get_flag("spans"),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            input_path: p.input_path,
            input_text: p.input_text,
            trivia: p.trivia,
            spans: p.spans,
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
