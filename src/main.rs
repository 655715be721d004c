//! Command line driver: builds a tree from city names, applies removals and
//! lookups, then prints what is left.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use citybst::Tree;
use clap::{ArgAction, Parser, ValueHint};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Build a binary search tree of city names and report on it
#[derive(Parser, Debug)]
#[command(name = "citybst")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Cities to insert, in order
    cities: Vec<String>,

    /// Also insert the cities listed in a file, one per line (`-` reads stdin)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    file: Option<PathBuf>,

    /// Remove a city once everything is inserted
    #[arg(short, long = "remove", value_name = "CITY")]
    remove: Vec<String>,

    /// Look up a city once removals are done
    #[arg(short, long = "search", value_name = "CITY")]
    search: Vec<String>,

    /// Also print the tree rotated 90°, root on the left
    #[arg(long)]
    rotated: bool,

    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count)]
    debug: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let mut tree: Tree = cli.cities.iter().collect();
    if let Some(path) = &cli.file {
        tree.extend(read_cities(path)?);
    }
    tracing::info!(count = tree.count_nodes(), "tree built");

    for city in &cli.remove {
        if tree.take(city).is_none() {
            tracing::warn!(city = %city, "cannot remove a city that is not in the tree");
        }
    }

    for city in &cli.search {
        let verdict = if tree.contains(city) {
            "found"
        } else {
            "not found"
        };
        println!("{city}: {verdict}");
    }

    tree.print_inorder()?;
    if cli.rotated {
        tree.print_rotated(0)?;
        println!();
    }
    println!("height: {}", tree.height());
    println!("count: {}", tree.count_nodes());

    tree.delete_tree();
    Ok(())
}

/// Reads the non-blank lines of `path`, trimmed. `-` means stdin.
fn read_cities(path: &Path) -> io::Result<Vec<String>> {
    let reader: Box<dyn BufRead> = if path == Path::new("-") {
        Box::new(io::stdin().lock())
    } else {
        Box::new(BufReader::new(File::open(path)?))
    };

    let mut cities = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let city = line.trim();
        if !city.is_empty() {
            cities.push(city.to_owned());
        }
    }
    tracing::debug!(path = %path.display(), count = cities.len(), "read cities");

    Ok(cities)
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG still wins over the -d flags.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();
}
