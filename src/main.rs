use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use decaf_core::config::Config;

#[derive(Parser)]
#[command(
    name = "decaf",
    version,
    about = "Clear has_caffeine on drinks whose caffeine content is unknown (-1)"
)]
struct Cli {
    /// Drinks JSON document to rewrite. Defaults to `data.path` from the config.
    path: Option<PathBuf>,

    /// Config file (TOML). Defaults to ./decaf.toml when present.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Truncate and write the document directly instead of temp file + rename.
    #[arg(long)]
    in_place: bool,

    /// Exit with status 1 when the run fails.
    #[arg(long)]
    strict: bool,

    /// Debug logs on stderr (RUST_LOG overrides).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config = Config::load(cli.config.as_deref())?;
    let path = cli.path.unwrap_or_else(|| config.data.path.clone());
    let mut options = config.patch_options();
    if cli.in_place {
        options.write_mode = decaf_core::WriteMode::InPlace;
    }
    let strict = cli.strict || config.run.strict_exit;

    tracing::debug!(path = %path.display(), ?options, strict, "starting run");

    match decaf_core::normalize_with(&path, &options) {
        Ok(report) => {
            println!("{report}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!("{}", err.console_line());
            Ok(if strict {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
    }
}
