use std::fmt::Write;
use std::path::PathBuf;

use metadesk_lib::lexer::lex;

use super::input::load_input_or_exit;

pub struct TokensArgs {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub trivia: bool,
    pub spans: bool,
}

pub fn run(args: TokensArgs) {
    let input = load_input_or_exit(args.input_path.as_deref(), args.input_text.as_deref());
    print!("{}", format_tokens(&input.text, args.trivia, args.spans));
}

/// One line per token: `[start..end ]Kind "raw"`.
pub fn format_tokens(source: &str, trivia: bool, spans: bool) -> String {
    let mut out = String::new();
    for spanned in lex(source) {
        let token = spanned.token;
        if !trivia && token.kind.is_trivia() {
            continue;
        }
        if spans {
            let (start, end) = (
                u32::from(spanned.range.start()),
                u32::from(spanned.range.end()),
            );
            write!(out, "{start}..{end} ").expect("String write never fails");
        }
        writeln!(out, "{:?} {:?}", token.kind, token.raw).expect("String write never fails");
    }
    out
}
