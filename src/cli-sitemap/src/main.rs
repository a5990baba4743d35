use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use core_sitemap::config::SitemapOptionsBuilder;
use core_sitemap::logging::setup_logging;
use core_sitemap::{Sitemap, SitemapOptions};

mod input;

use input::{parse_entry_lines, read_entry_list};

#[derive(Parser)]
#[command(name = "sitemap")]
#[command(about = "Generate sitemap and sitemap index files", long_about = None)]
struct SitemapCli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate sitemap files (and an index, when needed) from an entry list
    Generate(GenerateArgs),

    /// Validate an entry list and print the normalized entries without writing anything
    Check {
        /// Base URL prefixed to every location (env: SITEMAP_BASE_URL)
        #[arg(short, long)]
        base_url: Option<String>,
        /// Tab-separated entry list; stdin when omitted or `-`
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Base URL prefixed to every location and index reference (env: SITEMAP_BASE_URL)
    #[arg(short, long)]
    base_url: Option<String>,
    /// Directory to clean and write sitemap files into (env: SITEMAP_TARGET)
    #[arg(short, long, value_parser = validate_target_dir)]
    target: Option<PathBuf>,
    /// Maximum entries per sitemap file (env: SITEMAP_LIMIT)
    #[arg(short, long)]
    limit: Option<usize>,
    /// Tab-separated entry list; stdin when omitted or `-`
    #[arg(short, long)]
    input: Option<PathBuf>,
}

fn validate_target_dir(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if !path.exists() {
        return Err(format!("Target directory does not exist: {}", path.display()));
    }

    if !path.is_dir() {
        return Err(format!("Target is not a directory: {}", path.display()));
    }

    Ok(path)
}

/// Environment values first, explicit flags override them.
fn options(base_url: Option<String>, target: Option<PathBuf>, limit: Option<usize>) -> anyhow::Result<SitemapOptions> {
    let mut builder = SitemapOptionsBuilder::from_env()?;
    if let Some(base_url) = base_url {
        builder = builder.base_url(base_url);
    }
    if let Some(target) = target {
        builder = builder.target(target);
    }
    if let Some(limit) = limit {
        builder = builder.limit(limit);
    }
    Ok(builder.build()?)
}

fn collect(options: SitemapOptions, input: Option<PathBuf>) -> anyhow::Result<Sitemap> {
    let content = read_entry_list(input.as_deref())?;
    let lines = parse_entry_lines(&content)?;

    let mut sitemap = Sitemap::new(options);
    let mut rejected = 0;
    for line in &lines {
        let added = sitemap.add(
            &line.location,
            line.lastmod.as_deref(),
            line.changefreq.as_deref(),
            line.priority,
        );
        if !added {
            rejected += 1;
        }
    }
    tracing::info!("Read {} entries ({} rejected for an empty location)", lines.len(), rejected);
    Ok(sitemap)
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file., if it exists
    dotenvy::dotenv().ok();
    setup_logging("sitemap=info,core_sitemap=info");

    let cli = SitemapCli::parse();

    match cli.command {
        Commands::Generate(args) => {
            let options = options(args.base_url, args.target, args.limit)?;
            let sitemap = collect(options, args.input)?;
            let report = sitemap.generate()?;

            for path in &report.sitemaps {
                println!("sitemap: {}", path.display());
            }
            if let Some(index) = &report.index {
                println!("index:   {}", index.display());
            }
        }

        Commands::Check { base_url, input } => {
            let options = options(base_url, None, None)?;
            let sitemap = collect(options, input)?;

            for entry in sitemap.entries() {
                println!(
                    "{}\t{}\t{}\t{}",
                    entry.loc(),
                    entry.lastmod().map(|l| l.to_string()).unwrap_or_default(),
                    entry.changefreq().map(|c| c.to_string()).unwrap_or_default(),
                    entry.priority().map(|p| p.to_string()).unwrap_or_default(),
                );
            }
        }
    }

    Ok(())
}
