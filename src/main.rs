use clap::{Parser, Subcommand};
use photomine::config::{self, SiteConfig, SitePaths, Theme};
use photomine::imaging::RustBackend;
use photomine::pipeline::{self, BuildSettings};
use photomine::render::{BuiltinRenderer, LiquidRenderer, Renderer, STARTER_TEMPLATES};
use photomine::{fs_tree, output};
use std::path::{Path, PathBuf};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "photomine")]
#[command(about = "Static photo gallery generator")]
#[command(long_about = "\
Static photo gallery generator

Every directory in the album root becomes an album; every image in it gets a
thumbnail and a page linked to its neighbours.

Site structure:

  site/
  ├── config.toml          # Optional, see 'photomine gen-config'
  ├── _albums/             # Input
  │   ├── beach/
  │   │   ├── a.jpg
  │   │   └── b.png
  │   └── city/
  ├── _templates/          # index/album/photo .html.liquid
  └── _build/              # Output, safe to delete

Run 'photomine gen-templates' to write starter templates.")]
#[command(version)]
struct Cli {
    /// Site root; relative directories in the config resolve against it
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Config file [default: <root>/config.toml]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Build the site (default)
    Build,
    /// List albums and photos without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Write the starter liquid templates
    GenTemplates {
        /// Target directory [default: the configured template_dir]
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let (site_config, paths) = load_site(&cli.root, cli.config.as_deref())?;
            let renderer = load_renderer(&site_config, &paths.template_dir)?;
            let settings = BuildSettings::from_config(&site_config, &paths);
            let report = pipeline::build(&settings, renderer.as_ref(), &RustBackend::new())?;
            output::print_build_output(&report, &paths.build_dir);
        }
        Command::Check => {
            let (site_config, paths) = load_site(&cli.root, cli.config.as_deref())?;
            let settings = BuildSettings::from_config(&site_config, &paths);
            let report = pipeline::check(&settings)?;
            output::print_check_output(&report);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenTemplates { dir } => {
            let dir = match dir {
                Some(dir) => dir,
                None => load_site(&cli.root, cli.config.as_deref())?.1.template_dir,
            };
            write_starter_templates(&dir)?;
        }
    }

    Ok(())
}

/// Load the config and resolve the site directories against `root`.
fn load_site(
    root: &Path,
    config_path: Option<&Path>,
) -> Result<(SiteConfig, SitePaths), config::ConfigError> {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.join("config.toml"));
    info!("Using config file at {}", config_path.display());
    let site_config = config::load_config(&config_path)?;
    let paths = site_config.resolve_paths(root);
    info!("Using album dir {}", paths.album_dir.display());
    info!("Using build dir {}", paths.build_dir.display());
    info!("Using template dir {}", paths.template_dir.display());
    Ok((site_config, paths))
}

fn init_tracing(log_level: &str) -> Result<(), Box<dyn std::error::Error>> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    // Logs go to stderr; stdout carries the command's output
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Pick the renderer for the configured theme, parsing templates up front.
fn load_renderer(
    site_config: &SiteConfig,
    template_dir: &Path,
) -> Result<Box<dyn Renderer>, Box<dyn std::error::Error>> {
    let renderer: Box<dyn Renderer> = match site_config.theme {
        Theme::Templates => Box::new(LiquidRenderer::load(template_dir)?),
        Theme::Builtin => Box::new(BuiltinRenderer::new()),
    };
    Ok(renderer)
}

/// Write the starter templates into `dir`, leaving existing files alone.
fn write_starter_templates(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    fs_tree::create_dir_all(dir)?;
    for (name, content) in STARTER_TEMPLATES {
        let path = dir.join(name);
        if path.exists() {
            println!("Skipping existing {}", path.display());
            continue;
        }
        std::fs::write(&path, content)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}
