//! Offline Hand Tables
//!
//! Precomputes the lookup tables consulted when rendering odds:
//! - `hands`: strength, envido and combined score of every 3-card hand
//! - `pairs`: hand table rows grouped by their two strongest ranks

use clap::Parser;
use std::path::PathBuf;
use truco::cards::Card;
use truco::envido::Constraint;
use truco::gameplay::Filter;
use truco::stats;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
enum Command {
    #[command(about = "Evaluate every 3-card hand into a CSV table", alias = "h")]
    Hands {
        #[arg(long, required = true)]
        output: PathBuf,
        #[arg(long, default_value_t = num_cpus::get())]
        workers: usize,
    },
    #[command(about = "Summarize a hand table by strongest pair", alias = "p")]
    Pairs {
        #[arg(long, required = true)]
        input: PathBuf,
        #[arg(long, required = true)]
        output: PathBuf,
        /// split each pair by envido of 20 or more
        #[arg(long)]
        envido: bool,
        /// cards the hands cannot hold, space separated
        #[arg(long, default_value = "")]
        known: String,
        /// cards the hands must hold, space separated
        #[arg(long, default_value = "")]
        mine: String,
        /// envido declaration as stored by a match, 255 for none
        #[arg(long, default_value_t = truco::UNKNOWN_ENVIDO)]
        declared: u8,
    },
}

fn cards(s: &str) -> anyhow::Result<Vec<Card>> {
    s.split_whitespace().map(Card::try_from).collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    truco::log()?;
    match Command::parse() {
        Command::Hands { output, workers } => {
            let rows = stats::evaluate(stats::all_hands(), workers).await?;
            stats::write_table(&output, rows)
        }
        Command::Pairs {
            input,
            output,
            envido,
            known,
            mine,
            declared,
        } => {
            let filter = Filter {
                known: cards(&known)?,
                mine: cards(&mine)?,
                envido: Constraint::from(declared),
            };
            log::info!("filtering hands by {}", filter);
            let rows = stats::read_table(&input)?;
            let pairs = stats::aggregate(&rows, &filter, envido);
            stats::write_pairs(&output, &pairs)
        }
    }
}
