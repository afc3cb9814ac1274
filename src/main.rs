use anyhow::{Context, Result};
use clap::Parser;
use gotags::cli::{configure_thread_pool, init_logging, Cli};
use gotags::config::{load_config, load_config_from_path, TagsConfig};
use gotags::extraction::extract_files;
use gotags::io::{create_writer, TagWriter};
use std::fs::File;
use std::io::{self, BufWriter};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = resolve_config(&cli)?;
    configure_thread_pool(config.jobs);

    let report = extract_files(&cli.files, &config.extract_options())
        .context("Tag extraction failed")?;

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            create_writer(config.format, BufWriter::new(file)).write_tags(&report.tags)?;
        }
        None => {
            let stdout = io::stdout();
            create_writer(config.format, stdout.lock()).write_tags(&report.tags)?;
        }
    }

    if !report.is_clean() {
        tracing::info!("{} file(s) skipped", report.failures.len());
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<TagsConfig> {
    let file_config = match &cli.config {
        Some(path) => load_config_from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => load_config(),
    };
    Ok(cli.apply_to(file_config))
}
