//! Binary entry point for shopsight.
//!
//! This binary provides the CLI interface for the product search core.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stdout/print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use shopsight::config::ShopsightConfig;
use shopsight::models::ImageUpload;
use shopsight::nlp::{GoogleLanguageClient, GoogleVisionClient};
use shopsight::observability::{LoggingConfig, init_logging};
use shopsight::{Error, InMemoryCatalog, Result, SearchInput, SearchService};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

/// Shopsight - AI-assisted product search for furniture catalogs.
#[derive(Parser)]
#[command(name = "shopsight")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the JSON catalog file (overrides configuration).
    #[arg(long, global = true, env = "SHOPSIGHT_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Search the catalog with a free-text prompt.
    Search {
        /// The search prompt, e.g. "white couch under 2000".
        prompt: String,

        /// Maximum number of results.
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Search the catalog with a photo.
    Image {
        /// Path to the image file.
        path: PathBuf,
    },

    /// Show catalog and service status.
    Status,
}

fn main() -> ExitCode {
    // Load .env if present; ignore absence.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(&LoggingConfig::from_env(cli.verbose));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            match err {
                Error::InvalidInput(_) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match cli.config {
        Some(ref path) => ShopsightConfig::load_from_file(path)?,
        None => ShopsightConfig::load()?,
    };
    if let Some(catalog) = cli.catalog {
        config.catalog_path = catalog;
    }

    match cli.command {
        Commands::Search { prompt, limit } => {
            if let Some(limit) = limit {
                config.search.max_results = limit;
            }
            let service = build_service(&config)?;
            let response = service.search(SearchInput::Text(prompt))?;
            print_json(&response)
        },
        Commands::Image { path } => {
            let service = build_service(&config)?;
            let upload = read_upload(&path)?;
            let response = service.search(SearchInput::Image(upload))?;
            print_json(&response)
        },
        Commands::Status => {
            let catalog = InMemoryCatalog::from_json_file(&config.catalog_path)?;
            println!("catalog: {} ({} products)", config.catalog_path.display(), catalog.len());
            println!(
                "nlp: {}",
                if config.nlp.api_key.is_some() { "configured" } else { "not configured" }
            );
            println!(
                "vision: {}",
                if config.vision.api_key.is_some() { "configured" } else { "not configured" }
            );
            Ok(())
        },
    }
}

/// Builds the search service from configuration: catalog plus whichever AI
/// services have credentials.
fn build_service(config: &ShopsightConfig) -> Result<SearchService> {
    let catalog = InMemoryCatalog::from_json_file(&config.catalog_path)?;
    let mut service = SearchService::new(Arc::new(catalog)).with_config(config.search);

    if let Some(ref key) = config.nlp.api_key {
        let mut client = GoogleLanguageClient::new().with_api_key(key);
        if let Some(ref endpoint) = config.nlp.endpoint {
            client = client.with_endpoint(endpoint);
        }
        service = service.with_entity_analyzer(Arc::new(client));
    }

    if let Some(ref key) = config.vision.api_key {
        let mut client = GoogleVisionClient::new().with_api_key(key);
        if let Some(ref endpoint) = config.vision.endpoint {
            client = client.with_endpoint(endpoint);
        }
        service = service.with_vision_analyzer(Arc::new(client));
    }

    Ok(service)
}

/// Reads an image file into an upload, inferring the MIME type from the
/// extension.
fn read_upload(path: &Path) -> Result<ImageUpload> {
    let bytes = std::fs::read(path).map_err(|e| Error::OperationFailed {
        operation: "read_image_file".to_string(),
        cause: format!("{}: {e}", path.display()),
    })?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    Ok(ImageUpload::new(bytes, mime_for_path(path)).with_file_name(file_name))
}

/// Renders a response as pretty JSON on stdout.
fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).map_err(|e| Error::OperationFailed {
        operation: "render_response".to_string(),
        cause: e.to_string(),
    })?;
    println!("{rendered}");
    Ok(())
}

/// Maps a file extension to a MIME type. Unknown extensions map to a
/// non-image type and are rejected by upload validation.
fn mime_for_path(path: &Path) -> String {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("sofa.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("sofa.png")), "image/png");
        assert_eq!(
            mime_for_path(Path::new("notes.txt")),
            "application/octet-stream"
        );
        assert_eq!(
            mime_for_path(Path::new("no_extension")),
            "application/octet-stream"
        );
    }
}
