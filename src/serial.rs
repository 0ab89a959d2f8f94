//! Reading and writing decks as text and files.
//!
//! Two formats are supported, both listing card identifiers from top to
//! bottom: a JSON array of strings and one identifier per line.

use core::fmt;
use std::fs;
use std::path::Path;

use alloc::string::String;
use alloc::vec::Vec;

use crate::deck::Deck;
use crate::error::LoadError;

/// A textual deck format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeckFormat {
    /// A JSON array of card identifiers.
    Json,
    /// One card identifier per line.
    NewlineDelimited,
}

impl DeckFormat {
    /// Reads a deck from text in this format.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not in this format or does not describe
    /// a complete deck.
    pub fn parse(self, text: &str) -> Result<Deck, LoadError> {
        match self {
            Self::Json => {
                let identifiers: Vec<String> = serde_json::from_str(text)?;
                Ok(Deck::from_identifiers(identifiers)?)
            }
            Self::NewlineDelimited => Ok(Deck::from_identifiers(
                text.trim_end_matches(['\n', '\r']).lines(),
            )?),
        }
    }

    /// Writes a deck as text in this format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON encoding fails.
    pub fn render(self, deck: &Deck) -> Result<String, LoadError> {
        match self {
            Self::Json => Ok(serde_json::to_string(deck)?),
            Self::NewlineDelimited => Ok(deck.to_identifiers().join("\n")),
        }
    }
}

/// Where [`load_deck`] looked for a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeckSource {
    /// The source text itself, as JSON.
    JsonText,
    /// The source text itself, one identifier per line.
    NewlineText,
    /// A file at the source path, as JSON.
    JsonFile,
    /// A file at the source path, one identifier per line.
    NewlineFile,
}

impl DeckSource {
    /// Sources in the order [`load_deck`] tries them.
    pub const LOAD_ORDER: [Self; 4] = [
        Self::JsonText,
        Self::NewlineText,
        Self::JsonFile,
        Self::NewlineFile,
    ];

    /// Returns the format read from this source.
    #[must_use]
    pub const fn format(self) -> DeckFormat {
        match self {
            Self::JsonText | Self::JsonFile => DeckFormat::Json,
            Self::NewlineText | Self::NewlineFile => DeckFormat::NewlineDelimited,
        }
    }

    /// Reads a deck from this source.
    ///
    /// # Errors
    ///
    /// Returns an error if a file source cannot be read or the contents are not
    /// a valid deck in this source's format.
    pub fn load(self, source: &str) -> Result<Deck, LoadError> {
        match self {
            Self::JsonText | Self::NewlineText => self.format().parse(source),
            Self::JsonFile | Self::NewlineFile => Deck::from_file(source, self.format()),
        }
    }
}

impl fmt::Display for DeckSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::JsonText => "json text",
            Self::NewlineText => "newline-delimited text",
            Self::JsonFile => "json file",
            Self::NewlineFile => "newline-delimited file",
        })
    }
}

/// Reads a deck given either its serialization or the path of a file holding
/// one.
///
/// Sources are tried in [`DeckSource::LOAD_ORDER`] and the first that yields
/// a valid deck wins.
///
/// # Errors
///
/// Returns [`LoadError::Unrecognized`] with every source's failure if none of
/// them yields a valid deck.
///
/// # Example
///
/// ```
/// use solrs::{Deck, serial::load_deck};
///
/// let listing = Deck::new().to_newline_delimited_str();
/// assert_eq!(load_deck(&listing).unwrap(), Deck::new());
/// ```
pub fn load_deck(source: &str) -> Result<Deck, LoadError> {
    let mut attempts = Vec::new();

    for kind in DeckSource::LOAD_ORDER {
        match kind.load(source) {
            Ok(deck) => {
                tracing::debug!(source = %kind, "loaded deck");
                return Ok(deck);
            }
            Err(err) => {
                tracing::trace!(source = %kind, %err, "deck source rejected");
                attempts.push((kind, err));
            }
        }
    }

    Err(LoadError::Unrecognized { attempts })
}

impl Deck {
    /// Reads a deck from a JSON array of card identifiers.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or does not describe a
    /// complete deck.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        DeckFormat::Json.parse(json)
    }

    /// Writes the deck as a JSON array of card identifiers.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON encoding fails.
    pub fn to_json_str(&self) -> Result<String, LoadError> {
        DeckFormat::Json.render(self)
    }

    /// Reads a deck from one card identifier per line.
    ///
    /// # Errors
    ///
    /// Returns an error if the lines do not describe a complete deck.
    pub fn from_newline_delimited_str(text: &str) -> Result<Self, LoadError> {
        DeckFormat::NewlineDelimited.parse(text)
    }

    /// Writes the deck as one card identifier per line.
    #[must_use]
    pub fn to_newline_delimited_str(&self) -> String {
        self.to_identifiers().join("\n")
    }

    /// Reads a deck from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are not a
    /// valid deck in `format`.
    pub fn from_file(path: impl AsRef<Path>, format: DeckFormat) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path)?;
        format.parse(&text)
    }

    /// Writes the deck to a file, replacing any existing contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot be encoded or the file cannot be
    /// written.
    pub fn to_file(&self, path: impl AsRef<Path>, format: DeckFormat) -> Result<(), LoadError> {
        fs::write(path, format.render(self)?)?;
        Ok(())
    }
}
