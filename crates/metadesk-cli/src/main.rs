mod cli;
mod commands;

use cli::{CheckParams, DumpParams, TokensParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    let Some((name, m)) = matches.subcommand() else {
        unreachable!("clap should have caught this");
    };

    init_tracing(m.get_count("verbose"));

    match name {
        "check" => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        "dump" => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        "tokens" => {
            let params = TokensParams::from_matches(m);
            commands::tokens::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Logs go to stderr. `-v` enables parser debug events, `-vv` traces
/// everything; otherwise `RUST_LOG` decides, and nothing is installed if
/// it is unset.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = match verbose {
        0 if std::env::var_os("RUST_LOG").is_none() => return,
        0 => EnvFilter::from_default_env(),
        1 => EnvFilter::new("metadesk_lib=debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}
