use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use tally_server::{ServerConfig, TallyServer};

use crate::cli::{Cli, Command, ConfigArgs, OutputFormat, ServeArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Config(args) => cmd_config(args, &cli.format),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ServerConfig> {
    match path {
        Some(path) => ServerConfig::from_toml_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => Ok(ServerConfig::default()),
    }
}

/// Apply command-line overrides on top of the file configuration.
fn effective_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if args.no_seed {
        config.seed_sample_data = false;
    }
    Ok(config)
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = effective_config(&args)?;
    let data = if config.seed_sample_data {
        "sample data"
    } else {
        "empty stores"
    };
    println!(
        "{} Tally server on {} ({})",
        "✓".green().bold(),
        config.bind_addr.to_string().bold(),
        data.dimmed()
    );

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime
        .block_on(TallyServer::new(config).serve())
        .context("server terminated")
}

fn cmd_config(args: ConfigArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    match format {
        OutputFormat::Text => print!("{}", config.to_toml_string()?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn serve_args(bind: Option<&str>, no_seed: bool) -> ServeArgs {
        ServeArgs {
            config: None,
            bind: bind.map(|b| b.parse().unwrap()),
            no_seed,
        }
    }

    #[test]
    fn defaults_without_overrides() {
        let config = effective_config(&serve_args(None, false)).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let config = effective_config(&serve_args(Some("0.0.0.0:9999"), true)).unwrap();
        assert_eq!(config.bind_addr.port(), 9999);
        assert!(!config.seed_sample_data);
    }

    #[test]
    fn missing_config_file_names_the_path() {
        let err = load_config(Some(&PathBuf::from("/nonexistent/tally.toml"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/tally.toml"));
    }
}
