use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vernissage::{config, generate, load, output};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "vernissage")]
#[command(about = "Static site generator for design gallery portfolios")]
#[command(long_about = "\
Static site generator for design gallery portfolios

Your content directory is the data source: TOML records describe projects
(exhibitions) and designers with their works; each build renders project
pages, designer pages, and a year-grouped index.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── images/
  │   └── works/                   # Work images, referenced by filename
  ├── projects/
  │   ├── glasswork.toml           # One project per file
  │   └── 2018/north-light.toml    # Subdirectories are organizational only
  └── designers/
      └── mira-nakamura.toml       # One designer per file, works inline

Collection order is sorted file-path order; it fixes the relative order of
projects within a year on the index and selector.

Run 'vernissage gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for the intermediate manifest
    #[arg(long, default_value = ".vernissage-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load and validate content into a manifest
    Load,
    /// Produce the HTML site from an existing manifest
    Generate,
    /// Run the full pipeline: load → generate
    Build,
    /// Validate content without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Load => {
            let manifest = load::load(&cli.source)?;
            write_manifest(&manifest, &cli.temp_dir)?;
            output::print_load_output(&manifest);
        }
        Command::Generate => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            let manifest_content = std::fs::read_to_string(&manifest_path)?;
            let manifest: vernissage::types::Manifest = serde_json::from_str(&manifest_content)?;
            init_thread_pool(&manifest.config.rendering);
            generate::generate(&manifest_path, &cli.source, &cli.output)?;
            output::print_generate_output(&manifest);
        }
        Command::Build => {
            println!("==> Stage 1: Loading {}", cli.source.display());
            let manifest = load::load(&cli.source)?;
            let manifest_path = write_manifest(&manifest, &cli.temp_dir)?;
            output::print_load_output(&manifest);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            init_thread_pool(&manifest.config.rendering);
            generate::generate(&manifest_path, &cli.source, &cli.output)?;
            output::print_generate_output(&manifest);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = load::load(&cli.source)?;
            output::print_load_output(&manifest);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Serialize the manifest into the temp dir; returns its path.
fn write_manifest(
    manifest: &vernissage::types::Manifest,
    temp_dir: &std::path::Path,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(temp_dir)?;
    let manifest_path = temp_dir.join("manifest.json");
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(&manifest_path, json)?;
    Ok(manifest_path)
}

/// Initialize the rayon thread pool from rendering config.
///
/// Caps at the number of available CPU cores — user can constrain down,
/// not up.
fn init_thread_pool(rendering: &config::RenderingConfig) {
    let workers = config::effective_workers(rendering);
    rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build_global()
        .ok();
}
