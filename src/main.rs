// SPDX-License-Identifier: MPL-2.0
use iced_grid::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_grid - photo collage composer

USAGE:
  iced_grid [OPTIONS]

OPTIONS:
  -h, --help               Print this help and exit
  --lang <LOCALE>          Interface language (e.g. en-US, fr)
  --config-dir <PATH>      Directory holding settings.toml
  --data-dir <PATH>        Directory holding state.cbor

ENVIRONMENT:
  ICED_GRID_CONFIG_DIR     Same as --config-dir
  ICED_GRID_DATA_DIR       Same as --data-dir
  RUST_LOG                 Log filter (default: info)
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --lang");
            None
        }),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --config-dir");
            None
        }),
        data_dir: args.opt_value_from_str("--data-dir").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --data-dir");
            None
        }),
    };

    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "unrecognized arguments");
    }

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}
