use anyhow::{Context, Result};
use clap::Parser;
use pore_plotting::cli::{Args, Commands};
use pore_plotting::commands;
use pore_plotting::config::Config;
use std::path::Path;

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(Config::load()),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let result = match args.command {
        Commands::Plot {
            input,
            output,
            format,
            quality_column,
            id_column,
            row,
            width,
            height,
            point_size,
        } => load_config(args.config.as_deref()).and_then(|mut config| {
            if let Some(quality_column) = quality_column {
                config.quality_column = quality_column;
            }
            if id_column.is_some() {
                config.id_column = id_column;
            }
            config.width = width.unwrap_or(config.width);
            config.height = height.unwrap_or(config.height);
            config.point_size = point_size.unwrap_or(config.point_size);
            commands::plot::run(input, output, format, row, &config)
        }),
        Commands::Decode { quality } => commands::decode::run(quality),
        Commands::InitConfig => commands::init_config::run(args.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
