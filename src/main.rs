//! Wordle Arena - CLI
//!
//! Interactive play and automated solver simulation over the same engine.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_arena::{
    commands::{run_play, run_simulate, SimulateConfig},
    core::Word,
    output::{print_sim_statistics, Renderer},
    session::GameRules,
    words::{
        EmbeddedVocabulary, FileVocabulary, FixedSecret, RandomSecret, SecretProvider, Vocabulary,
        VocabularyProvider,
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_arena",
    about = "Wordle game engine with a pluggable-solver simulation harness",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Fix the secret word instead of drawing one at random
    #[arg(long, global = true)]
    secret: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive round (default)
    Play,

    /// Drive rounds automatically with a solver
    Simulate {
        /// Number of rounds to run
        #[arg(short = 'n', long, default_value = "100")]
        trials: usize,

        /// Solver: first, random
        #[arg(short, long, default_value = "first")]
        solver: String,

        /// Fan rounds out across worker threads
        #[arg(short, long)]
        parallel: bool,
    },
}

/// Load the vocabulary selected by the -w flag
fn load_vocabulary(wordlist_mode: &str) -> Result<Vocabulary> {
    let provider: Box<dyn VocabularyProvider> = match wordlist_mode {
        "embedded" => Box::new(EmbeddedVocabulary),
        path => Box::new(FileVocabulary::new(path)),
    };

    let vocabulary = provider
        .load()
        .with_context(|| format!("failed to load word list '{wordlist_mode}'"))?;
    anyhow::ensure!(!vocabulary.is_empty(), "word list '{wordlist_mode}' is empty");

    Ok(vocabulary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let vocabulary = load_vocabulary(&cli.wordlist)?;
    let rules = GameRules::default();
    let fixed_secret = cli
        .secret
        .as_deref()
        .map(Word::new)
        .transpose()
        .context("invalid secret word")?;

    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let secret = match fixed_secret {
                Some(word) => word,
                None => RandomSecret::from_vocabulary(&vocabulary)
                    .context("word list is empty")?
                    .choose(),
            };
            let renderer = Renderer::new(!cli.no_color);
            run_play(&vocabulary, secret, rules, &renderer)?;
        }
        Commands::Simulate {
            trials,
            solver,
            parallel,
        } => {
            let config = SimulateConfig {
                trials,
                solver,
                parallel,
            };
            let stats = match fixed_secret {
                Some(word) => {
                    run_simulate(&vocabulary, FixedSecret::new(word), rules, &config)?
                }
                None => {
                    let secrets = RandomSecret::from_vocabulary(&vocabulary)
                        .context("word list is empty")?;
                    run_simulate(&vocabulary, secrets, rules, &config)?
                }
            };
            print_sim_statistics(&stats);
        }
    }

    Ok(())
}
