use std::path::PathBuf;

use metadesk_lib::tree::to_json_pretty;
use metadesk_lib::{GenerateFlags, TreePrinter, parse};

use super::input::load_input_or_exit;

pub struct DumpArgs {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub tags: bool,
    pub tag_args: bool,
    pub comments: bool,
    pub kinds: bool,
    pub flags: bool,
    pub spans: bool,
    pub json: bool,
    pub color: bool,
}

impl DumpArgs {
    fn generate_flags(&self) -> GenerateFlags {
        let mut flags = GenerateFlags::CHILDREN;
        flags.set(GenerateFlags::TAGS, self.tags);
        flags.set(GenerateFlags::TAG_ARGUMENTS, self.tag_args);
        flags.set(GenerateFlags::COMMENTS, self.comments);
        flags.set(GenerateFlags::NODE_KIND, self.kinds);
        flags.set(GenerateFlags::NODE_FLAGS, self.flags);
        flags.set(GenerateFlags::LOCATION, self.spans);
        flags
    }
}

pub fn run(args: DumpArgs) {
    let input = load_input_or_exit(args.input_path.as_deref(), args.input_text.as_deref());
    let result = parse(&input.text);

    if args.json {
        match to_json_pretty(&result.tree) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        let printer = TreePrinter::new(&result.tree).flags(args.generate_flags());
        print!("{}", printer.dump());
    }

    // The tree is still printed for malformed input, but the exit code says so.
    if !result.is_valid() {
        eprintln!(
            "{}",
            result.diagnostics.render_colored(&input.text, args.color)
        );
        std::process::exit(1);
    }
}
