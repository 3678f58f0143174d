use std::path::PathBuf;

use metadesk_lib::parse;

use super::input::load_input_or_exit;

pub struct CheckArgs {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub pretty: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let input = load_input_or_exit(args.input_path.as_deref(), args.input_text.as_deref());
    let result = parse(&input.text);

    if result.is_valid() {
        // Silent on success
        return;
    }

    if args.pretty {
        let mut printer = result
            .diagnostics
            .printer(&input.text)
            .colored(args.color);
        if let Some(name) = &input.name {
            printer = printer.path(name);
        }
        eprintln!("{}", printer.render());
    } else {
        eprint!("{}", result.diagnostics.report_text(&input.text));
    }
    std::process::exit(1);
}
