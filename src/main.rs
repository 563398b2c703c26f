// SPDX-License-Identifier: MPL-2.0
use coming_soon::app::{self, Flags};
use coming_soon::config::{self, paths};
use coming_soon::headless::{self, Pacing};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

const HELP: &str = "\
coming_soon

USAGE:
  coming_soon [OPTIONS]

OPTIONS:
  --config-dir <PATH>   Directory holding settings.toml
  --headless <SECONDS>  Run without a window, logging each caption and toast
  --email <ADDRESS>     Address to submit at startup (headless mode)
  -h, --help            Print this help
";

struct Args {
    config_dir: Option<String>,
    headless: Option<u64>,
    email: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    let parsed = Args {
        config_dir: args.opt_value_from_str("--config-dir")?,
        headless: args.opt_value_from_str("--headless")?,
        email: args.opt_value_from_str("--email")?,
    };
    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(parsed))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,coming_soon=debug,wgpu=warn,naga=warn"));
    fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> ExitCode {
    init_tracing();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            tracing::error!(error = %err, "invalid arguments");
            eprint!("{HELP}");
            return ExitCode::from(2);
        }
    };

    paths::init_cli_override(args.config_dir);
    let (config, config_warning) = config::load();
    if let Some(warning) = &config_warning {
        tracing::warn!(%warning, "configuration");
    }

    if let Some(seconds) = args.headless {
        let summary = headless::run(
            &config,
            Duration::from_secs(seconds),
            args.email.as_deref(),
            Pacing::RealTime,
        );
        return if summary.config_errors == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    match app::run(Flags {
        config,
        config_warning,
    }) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application error");
            ExitCode::FAILURE
        }
    }
}
