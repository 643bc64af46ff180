// SPDX-License-Identifier: MPL-2.0
use iced_dragbox::app::{self, paths, Flags};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_dragbox

USAGE:
  iced_dragbox [OPTIONS]

OPTIONS:
  --lang LOCALE        UI language (e.g. en-US, fr)
  --max-files N        Maximum number of selected files (0 = unbounded)
  --accept LIST        Accepted types, e.g. \"image/*,.pdf\"
  --config-dir PATH    Directory holding settings.toml
  -h, --help           Print this help
";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "iced_dragbox=info,warn".into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        max_files: args.opt_value_from_str("--max-files")?,
        accept: args.opt_value_from_str("--accept")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn main() -> ExitCode {
    init_tracing();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_override(flags.config_dir.clone());

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "iced_dragbox exited with an error");
            ExitCode::FAILURE
        }
    }
}
