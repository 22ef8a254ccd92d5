mod cli;
mod config;
mod core;
mod error;
mod utils;

use std::io::{self, ErrorKind};

use anyhow::Context;
use clap::Parser;

use crate::cli::Cli;
use crate::config::Config;
use crate::core::table_generator::TableGenerator;
use crate::error::GeneratorError;
use crate::utils::encoding::EncodingResolver;

/// Fatal before any output if the backend can't do the conversion.
fn open_resolver(config: &Config) -> anyhow::Result<EncodingResolver> {
    EncodingResolver::open(&config.source_encoding)
        .map_err(|e| {
            log::error!("{}", e);
            e
        })
        .context("failed to open code-point resolver")
}

fn run(config: &Config) -> anyhow::Result<()> {
    let resolver = open_resolver(config)?;

    let mut generator = TableGenerator::new(resolver, config);
    let stdout = io::stdout();
    match generator.generate(stdout.lock()) {
        Ok(summary) => {
            log::debug!(
                "attempted {} sequences, emitted {}, skipped {}",
                summary.attempted,
                summary.emitted,
                summary.skipped()
            );
        }
        Err(GeneratorError::Output(e)) if e.kind() == ErrorKind::BrokenPipe => {
            log::debug!("stdout closed, stopping early");
        }
        Err(e) => return Err(e).context("failed to write table"),
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.to_config();
    log::info!(
        "generating {} table with indent {}",
        config.source_encoding,
        config.indent
    );

    run(&config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_resolver_unknown_encoding() {
        let config = Config {
            source_encoding: "x-no-such-encoding".to_string(),
            ..Config::default()
        };
        let err = open_resolver(&config).unwrap_err();
        assert_eq!(err.to_string(), "failed to open code-point resolver");
        assert!(matches!(
            err.downcast_ref::<GeneratorError>(),
            Some(GeneratorError::UnsupportedEncoding { label }) if label == "x-no-such-encoding"
        ));
    }

    #[test]
    fn test_run_fails_without_resolver() {
        let config = Config {
            source_encoding: "x-no-such-encoding".to_string(),
            ..Config::default()
        };
        assert!(run(&config).is_err());
    }

    #[test]
    fn test_open_resolver_default() {
        assert!(open_resolver(&Config::default()).is_ok());
    }
}
