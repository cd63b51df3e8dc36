// SPDX-License-Identifier: MPL-2.0
use skysight::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SKYSIGHT_LOG";
const DEFAULT_LOG_FILTER: &str = "skysight=info";

const HELP: &str = "\
SkySight - drone image segmentation showcase

USAGE:
  skysight [OPTIONS]

OPTIONS:
  -h, --help               Print this help
  --lang <LOCALE>          UI language (e.g. en-US, fr)
  --config-dir <PATH>      Directory holding settings.toml
  --select <ID>            Open the detail view of a sample on startup

ENVIRONMENT:
  SKYSIGHT_LOG             Log filter (default: skysight=info)
  SKYSIGHT_CONFIG_DIR      Directory holding settings.toml
";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        select: args.opt_value_from_str("--select")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    init_tracing();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting SkySight");
    app::run(flags)
}
