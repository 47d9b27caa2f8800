//! CLI entry point for folio-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_rs::content::MarkdownRenderer;
use folio_rs::{views, Site};

#[derive(Parser)]
#[command(name = "folio-rs")]
#[command(version = "0.1.0")]
#[command(about = "A content index for MDX-based personal sites", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all entries of a category in display order
    List {
        /// Category to list (post, project)
        #[arg(default_value = "post")]
        category: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show a single entry with its rendered body
    Show {
        /// Category of the entry (post, project)
        category: String,

        /// Slug of the entry
        slug: String,
    },

    /// Show the most recent posts as home-page cards
    Recent {
        /// Number of cards (defaults to the configured limit)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show highlighted projects as home-page cards
    Highlights {
        /// Number of cards (defaults to the configured limit)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List { category, format } => {
            let site = Site::new(&base_dir)?;
            list(&site, &category, &format)?;
        }

        Commands::Show { category, slug } => {
            let site = Site::new(&base_dir)?;
            show(&site, &category, &slug)?;
        }

        Commands::Recent { limit, format } => {
            let site = Site::new(&base_dir)?;
            let posts = site.loader().load_posts()?;
            let limit = limit.unwrap_or(site.config.recent_limit);
            print_cards(&views::recent_posts(&posts, limit), &format)?;
        }

        Commands::Highlights { limit, format } => {
            let site = Site::new(&base_dir)?;
            let projects = site.loader().load_projects()?;
            let limit = limit.unwrap_or(site.config.highlight_limit);
            print_cards(&views::highlighted_projects(&projects, limit), &format)?;
        }

        Commands::Version => {
            println!("folio-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// List entries of a category in display order
fn list(site: &Site, category: &str, format: &str) -> Result<()> {
    let loader = site.loader();

    match category {
        "post" | "posts" => {
            let posts = loader.load_posts()?;
            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&posts)?);
                return Ok(());
            }
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!("  {} - {} [{}]", post.date, post.title, post.slug);
            }
        }
        "project" | "projects" => {
            let projects = loader.load_projects()?;
            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&projects)?);
                return Ok(());
            }
            println!("Projects ({}):", projects.len());
            for project in projects {
                let marker = if project.featured { " *" } else { "" };
                println!(
                    "  {} - {} [{}]{}",
                    project.date, project.title, project.slug, marker
                );
            }
        }
        _ => {
            anyhow::bail!("Unknown category: {}. Available: post, project", category);
        }
    }

    Ok(())
}

/// Show a single entry with its metadata and rendered body
fn show(site: &Site, category: &str, slug: &str) -> Result<()> {
    let loader = site.loader();
    let renderer = MarkdownRenderer::new();

    match category {
        "post" | "posts" => {
            let post = loader.load_post(slug)?;
            println!("{}", post.title);
            if !post.date.is_empty() {
                println!("Date: {}", post.date);
            }
            if !post.tags.is_empty() {
                println!("Tags: {}", post.tags.join(", "));
            }
            println!();
            println!("{}", renderer.render(&post.body));
        }
        "project" | "projects" => {
            let project = loader.load_project(slug)?;
            println!("{}", project.title);
            if project.featured {
                println!("Featured");
            }
            if !project.date.is_empty() {
                println!("Date: {}", project.date);
            }
            if !project.tags.is_empty() {
                println!("Tags: {}", project.tags.join(", "));
            }
            for (label, link) in [
                ("GitHub", &project.github),
                ("Demo", &project.demo),
                ("Paper", &project.paper),
            ] {
                if let Some(url) = link {
                    println!("{}: {}", label, url);
                }
            }
            println!();
            println!("{}", renderer.render(&project.body));
        }
        _ => {
            anyhow::bail!("Unknown category: {}. Available: post, project", category);
        }
    }

    Ok(())
}

/// Print view cards as text or JSON
fn print_cards(cards: &[views::Card], format: &str) -> Result<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(cards)?);
        return Ok(());
    }

    for card in cards {
        println!("{} - {} ({})", card.meta, card.title, card.href);
        if !card.description.is_empty() {
            println!("    {}", card.description);
        }
    }

    Ok(())
}
