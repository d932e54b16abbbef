#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod host;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use impcton_core::RewardsConfig;

use crate::context::Settings;

/// Global settings, resolved once from the command line and config file
static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Get the resolved settings (defaults if startup has not set them)
pub fn get_settings() -> Settings {
    SETTINGS.get().cloned().unwrap_or_default()
}

/// IMPCTON Rewards - token farming mini app
#[derive(Parser, Debug)]
#[command(name = "impcton-rewards")]
#[command(about = "IMPCTON Rewards - farm tokens, upgrade, invite friends")]
struct Args {
    /// JSON config file (defaults to <config dir>/impcton/config.json when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the profile endpoint
    #[arg(long)]
    profile_url: Option<String>,

    /// Use a built-in demo profile instead of the network
    #[arg(long)]
    offline: bool,

    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Default config file location, if one exists
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("impcton").join("config.json"))
        .filter(|path| path.exists())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<RewardsConfig> {
    match path {
        Some(path) => RewardsConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(RewardsConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config_path = args.config.clone().or_else(default_config_path);
    let mut config = load_config(config_path.as_deref())?;
    if let Some(url) = args.profile_url {
        config.profile_url = url;
    }
    config.validate().context("invalid configuration")?;

    tracing::info!(
        profile_url = %config.profile_url,
        offline = args.offline,
        farm_interval_ms = config.farm_interval_ms,
        "Starting IMPCTON Rewards"
    );

    let _ = SETTINGS.set(Settings {
        config,
        offline: args.offline,
    });

    // Phone-sized window, matching the Telegram mini app viewport
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("IMPCTON Rewards")
            .with_inner_size(dioxus::desktop::LogicalSize::new(420.0, 760.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse_overrides() {
        let args = Args::parse_from([
            "impcton-rewards",
            "--profile-url",
            "http://localhost:8080/user-data",
            "--offline",
            "-vv",
        ]);
        assert_eq!(
            args.profile_url.as_deref(),
            Some("http://localhost:8080/user-data")
        );
        assert!(args.offline);
        assert_eq!(args.verbose, 2);
        assert!(args.config.is_none());
    }

    #[test]
    fn no_config_path_uses_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, RewardsConfig::default());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let err = load_config(Some(Path::new("/no/such/impcton.json"))).unwrap_err();
        assert!(err.to_string().contains("/no/such/impcton.json"));
    }
}
