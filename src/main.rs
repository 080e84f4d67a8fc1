// SPDX-License-Identifier: MPL-2.0
use nuvo_ui::app::{self, Flags};
use nuvo_ui::config::ENV_CONFIG_DIR;
use std::path::PathBuf;

const HELP: &str = "\
nuvo-showcase

USAGE:
  nuvo-showcase [OPTIONS]

OPTIONS:
  --lang <code>        Persist this language (en, tr, et) before startup
  --path <route>       Initial route, e.g. /tr/blog
  --config-dir <dir>   Directory holding settings.toml and storage.toml
  -h, --help           Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir: Option<PathBuf> = option_arg(&mut args, "--config-dir");
    if let Some(dir) = config_dir {
        // Read by config::config_dir(); set before anything loads
        std::env::set_var(ENV_CONFIG_DIR, dir);
    }

    let flags = Flags {
        lang: option_arg(&mut args, "--lang"),
        path: option_arg(&mut args, "--path"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    tracing::info!("starting showcase");
    app::run(flags)
}

fn option_arg<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    args.opt_value_from_str(key).unwrap_or_else(|error| {
        tracing::warn!(%error, key, "invalid argument");
        None
    })
}
