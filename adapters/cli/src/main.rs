#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that opens the Proxy Defense sprite showcase.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use proxy_defense_rendering_macroquad::{ShowcaseBackend, ShowcaseConfig};

/// Animated gallery of every Proxy Defense tower, enemy and attack effect.
#[derive(Parser, Debug)]
#[command(name = "proxy-defense", version)]
struct Args {
    /// Showcase configuration file (defaults to assets/showcase.toml when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed the jitter source for reproducible animation
    #[arg(long, value_name = "U64")]
    seed: Option<u64>,

    /// Override the configured vsync setting
    #[arg(long, value_name = "BOOL")]
    vsync: Option<bool>,

    /// Log frame timing once per second
    #[arg(long)]
    show_fps: bool,

    /// Raise the default log filter to debug
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn backend(&self) -> ShowcaseBackend {
        let backend = ShowcaseBackend::new()
            .with_show_fps(self.show_fps)
            .with_seed(self.seed);
        match self.vsync {
            Some(enabled) => backend.with_vsync(enabled),
            None => backend,
        }
    }
}

/// Entry point for the Proxy Defense command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = ShowcaseConfig::load(args.config.as_deref())
        .context("failed to load showcase configuration")?;
    log::debug!("showcase configuration: {config:?}");

    args.backend().run(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_configuration_in_charge() {
        let args = Args::try_parse_from(["proxy-defense"]).expect("no flags should parse");

        assert_eq!(args.config, None);
        assert_eq!(args.seed, None);
        assert_eq!(args.vsync, None);
        assert!(!args.show_fps);
        assert!(!args.verbose);
    }

    #[test]
    fn parses_every_flag() {
        let args = Args::try_parse_from([
            "proxy-defense",
            "--config",
            "custom.toml",
            "--seed",
            "42",
            "--vsync",
            "false",
            "--show-fps",
            "-v",
        ])
        .expect("flags should parse");

        assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.vsync, Some(false));
        assert!(args.show_fps);
        assert!(args.verbose);
    }

    #[test]
    fn rejects_non_numeric_seed() {
        assert!(Args::try_parse_from(["proxy-defense", "--seed", "abc"]).is_err());
    }
}
