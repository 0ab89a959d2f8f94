//! Command-line front end for the Solitaire cipher.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use solrs::{CipherOptions, Deck, Session, codec, load_deck};
use tracing::{Level, info};

/// Solitaire hand cipher.
#[derive(Parser, Debug)]
#[command(name = "solrs", version, about = "Bruce Schneier's Solitaire cipher")]
struct Cli {
    /// Log level (error, warn, info, debug, trace).
    #[arg(short, long, global = true, default_value = "warn")]
    verbosity: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Format and encrypt a plaintext message.
    Encrypt(CipherArgs),
    /// Decrypt a ciphertext message.
    Decrypt(CipherArgs),
    /// Print a deck, optionally keyed and shuffled.
    Generate {
        /// Initial deck serialization, or a path to a file holding one.
        /// Defaults to a bridge-order deck with both jokers at the end.
        #[arg(short, long)]
        deck: Option<String>,
        /// Passphrase to key the deck with.
        #[arg(short, long)]
        key: Option<String>,
        /// Shuffle the deck after keying.
        #[arg(long)]
        shuffle: bool,
        /// Print the deck as JSON instead of one card per line.
        #[arg(long)]
        json: bool,
    },
    /// Add two values (numbers, letters, or cards) modulo 26.
    Add {
        /// The first term.
        n: String,
        /// The second term.
        m: String,
    },
    /// Subtract two values (numbers, letters, or cards) modulo 26.
    Subtract {
        /// The first term.
        n: String,
        /// The second term.
        m: String,
    },
}

#[derive(Args, Debug)]
struct CipherArgs {
    /// Deck serialization, or a path to a file holding one.
    #[arg(short, long)]
    deck: String,
    /// Passphrase to key the deck with.
    #[arg(short, long)]
    key: Option<String>,
    /// The message.
    message: String,
}

impl CipherArgs {
    fn session(&self) -> Result<Session> {
        let deck = load_deck(&self.deck).context("failed to load deck")?;
        info!("Initial deck state\n{}", deck.to_newline_delimited_str());

        let mut options = CipherOptions::default();
        if let Some(key) = &self.key {
            options = options.with_key(key.as_str());
        }
        let session = Session::new(deck, options);
        if self.key.is_some() {
            info!("Keyed deck state\n{}", session.deck().to_newline_delimited_str());
        }
        Ok(session)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .with_writer(io::stderr)
        .init();

    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Encrypt(args) => {
            let ciphertext = args.session()?.encrypt(&args.message);
            writeln!(stdout, "{ciphertext}")?;
        }
        Command::Decrypt(args) => {
            let plaintext = args.session()?.decrypt(&args.message);
            writeln!(stdout, "{plaintext}")?;
        }
        Command::Generate {
            deck,
            key,
            shuffle,
            json,
        } => {
            let mut deck = match deck {
                Some(source) => load_deck(&source).context("failed to load deck")?,
                None => Deck::new(),
            };
            if let Some(key) = key {
                deck.key(&key);
            }
            if shuffle {
                deck.shuffle();
            }
            let listing = if json {
                deck.to_json_str()?
            } else {
                deck.to_newline_delimited_str()
            };
            writeln!(stdout, "{listing}")?;
        }
        Command::Add { n, m } => {
            let (n_value, m_value) = (codec::parse_value(&n)?, codec::parse_value(&m)?);
            writeln!(stdout, "{n_value} + {m_value}")?;
            writeln!(stdout, "{}", codec::add_values(&n, &m)?)?;
        }
        Command::Subtract { n, m } => {
            let (n_value, m_value) = (codec::parse_value(&n)?, codec::parse_value(&m)?);
            writeln!(stdout, "{n_value} - {m_value}")?;
            writeln!(stdout, "{}", codec::subtract_values(&n, &m)?)?;
        }
    }

    Ok(())
}
