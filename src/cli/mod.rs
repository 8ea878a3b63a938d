//! Command line interface.
//!
//! ```text
//! artofmemory words 15 23 --naive
//! artofmemory words --summary
//! artofmemory encode basketball office
//! artofmemory quiz --letters
//! artofmemory pao --quiz
//! artofmemory missing --bible --say
//! artofmemory card
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io;
use std::path::PathBuf;

use crate::cards::random_card;
use crate::config::Config;
use crate::data::bible;
use crate::major::{self, EncoderKind, MajorSystem};
use crate::pronounce::sample;
use crate::quiz::{self, major_quiz, pao_quiz, quiz_missing, QuizMode, ReadlinePrompter};

#[derive(Parser, Debug)]
#[command(name = "artofmemory")]
#[command(about = "Memory techniques: Major System, PAO and recall drills", long_about = None)]
pub struct Cli {
    /// Configuration file (default: ~/.artofmemory.toml)
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// CMU-format pronouncing dictionary, overrides the configured one
    #[arg(long, global = true)]
    pub dict: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List words that encode each number
    Words {
        /// Numbers to look up
        numbers: Vec<String>,

        /// Look up 0-9 and 00-99
        #[arg(long)]
        summary: bool,

        /// Print the Major System table first
        #[arg(long)]
        explain: bool,

        /// Use spelling instead of pronunciation
        #[arg(long)]
        naive: bool,
    },

    /// Print the digits each word encodes
    Encode {
        words: Vec<String>,

        /// Use spelling instead of pronunciation
        #[arg(long)]
        naive: bool,
    },

    /// Quiz Major System conversions until Ctrl-C
    Quiz {
        /// Ask for single letter sounds instead of words
        #[arg(long)]
        letters: bool,

        /// Use spelling instead of pronunciation
        #[arg(long)]
        naive: bool,
    },

    /// Person-Action-Object drills from the [pao] config section
    Pao {
        #[arg(long)]
        quiz: bool,

        #[arg(long)]
        explain: bool,
    },

    /// Show all items but one and ask which is missing
    Missing {
        /// Items to drill
        choices: Vec<String>,

        /// Drill the books of the Bible
        #[arg(long)]
        bible: bool,

        /// Speak each item (macOS)
        #[arg(long)]
        say: bool,

        #[arg(long)]
        explain: bool,
    },

    /// Draw a random playing card
    Card,
}

/// Execute a parsed command line
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;

    match cli.command {
        Command::Words {
            numbers,
            summary,
            explain,
            naive,
        } => cmd_words(&config, numbers, summary, explain, naive),
        Command::Encode { words, naive } => cmd_encode(&config, &words, naive),
        Command::Quiz { letters, naive } => cmd_quiz(&config, letters, naive),
        Command::Pao { quiz, explain } => cmd_pao(&config, quiz, explain),
        Command::Missing {
            choices,
            bible,
            say,
            explain,
        } => cmd_missing(&config, choices, bible, say, explain),
        Command::Card => {
            println!("{}", random_card(&mut rand::thread_rng()));
            Ok(())
        }
    }
}

/// Config file, then environment, then command line flags.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = cli.config_file.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load(&path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    if let Some(dict) = &cli.dict {
        config.dictionary = Some(dict.clone());
    }
    Ok(config)
}

/// Build the requested encoder. Only the phonetic one loads a dictionary.
fn encoder(config: &Config, naive: bool) -> anyhow::Result<Box<dyn MajorSystem>> {
    let kind = EncoderKind::from_naive_flag(naive);
    tracing::debug!("Using {} encoder", kind);
    let system = match kind {
        EncoderKind::Naive => kind.build(sample()),
        EncoderKind::Phonetic => kind.build(config.pronunciations()?),
    };
    Ok(system)
}

fn cmd_words(
    config: &Config,
    numbers: Vec<String>,
    summary: bool,
    explain: bool,
    naive: bool,
) -> anyhow::Result<()> {
    if explain {
        println!("{}", major::explain());
    }

    let numbers = if summary {
        major::summary_numbers()
    } else {
        numbers
    };
    if numbers.is_empty() {
        if explain {
            return Ok(());
        }
        anyhow::bail!("Give at least one number, or use --summary");
    }

    let system = encoder(config, naive)?;
    for entry in major::number_report(&system, &numbers) {
        if entry.words.is_empty() {
            println!("{}: {}", entry.number.bold(), "(no matches)".dimmed());
        } else {
            println!("{}: {}", entry.number.bold(), entry.words.join(", "));
        }
    }
    Ok(())
}

fn cmd_encode(config: &Config, words: &[String], naive: bool) -> anyhow::Result<()> {
    if words.is_empty() {
        anyhow::bail!("Give at least one word to encode");
    }

    let system = encoder(config, naive)?;
    for word in words {
        let digits = system.word_to_major(word);
        if digits.is_empty() {
            println!("{} => {}", word, "-".dimmed());
        } else {
            println!("{} => {}", word, digits.green());
        }
    }
    Ok(())
}

fn cmd_quiz(config: &Config, letters: bool, naive: bool) -> anyhow::Result<()> {
    let mode = QuizMode::from_letters_flag(letters);
    // Letter questions come from the naive table whatever the encoder.
    let system = encoder(config, naive || mode == QuizMode::Letters)?;

    println!("{}", "Press Ctrl-C or Ctrl-D to stop.".dimmed());
    let mut prompter = ReadlinePrompter::new()?;
    major_quiz(
        &*system,
        mode,
        &mut prompter,
        &mut io::stdout(),
        &mut rand::thread_rng(),
    )?;
    Ok(())
}

fn cmd_pao(config: &Config, run_quiz: bool, explain: bool) -> anyhow::Result<()> {
    if explain {
        println!("{}", quiz::pao::explain());
    }

    if run_quiz {
        let entries = config.pao_entries()?;
        println!("{}", "Press Ctrl-C or Ctrl-D to stop.".dimmed());
        let mut prompter = ReadlinePrompter::new()?;
        pao_quiz(
            entries,
            &mut prompter,
            &mut io::stdout(),
            &mut rand::thread_rng(),
        )?;
    } else if !explain {
        for (number, item) in quiz::flatten_pao(config.pao_entries()?)? {
            println!("{}: {}", number.bold(), item);
        }
    }
    Ok(())
}

fn cmd_missing(
    config: &Config,
    choices: Vec<String>,
    bible: bool,
    say: bool,
    explain: bool,
) -> anyhow::Result<()> {
    if explain {
        println!("{}", quiz::missing::explain());
    }

    let items = if bible { bible::books() } else { choices };
    if items.is_empty() && explain {
        return Ok(());
    }

    let voice = say.then_some(config.voice.as_str());
    let mut prompter = ReadlinePrompter::new()?;
    quiz_missing(
        &items,
        voice,
        &mut prompter,
        &mut io::stdout(),
        &mut rand::thread_rng(),
    )?;
    Ok(())
}
