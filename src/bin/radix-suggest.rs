use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use radix_suggest::{Config, RadixTree};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Line-delimited word list
    #[arg(short, long, default_value = radix_suggest::dictionary::SYSTEM_DICTIONARY)]
    dict: PathBuf,

    /// Worker threads for batch suggestions (default: one per core)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Print whether each query is a stored word instead of suggestions
    #[arg(short, long)]
    exact: bool,

    /// Queries to complete
    #[arg(required = true)]
    queries: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let Args {
        dict,
        threads,
        exact,
        queries,
    } = Args::parse();

    let config = Config {
        dictionary: dict,
        worker_threads: threads,
    };

    let tree = RadixTree::from_source(&config.dictionary())
        .with_context(|| format!("loading words from {}", config.dictionary.display()))?;
    info!("loaded {} words", tree.len());

    let mut out = BufWriter::new(io::stdout().lock());
    if exact {
        for query in &queries {
            writeln!(out, "{}\t{}", query, tree.contains(query))?;
        }
    } else {
        let pool = config
            .thread_pool()
            .context("building suggestion thread pool")?;
        for word in tree.suggest_batch_in(&pool, &queries) {
            writeln!(out, "{}", word)?;
        }
    }
    out.flush()?;

    Ok(())
}
