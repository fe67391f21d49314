//! Word sources used to seed a tree.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Location of the system word list on most Unix-like systems.
pub const SYSTEM_DICTIONARY: &str = "/usr/share/dict/words";

/// Something that can produce a finite, ordered list of words.
///
/// The source is consumed, so an owned list hands over its words without a
/// copy. Borrow a source to keep it around.
pub trait WordSource {
    fn into_words(self) -> Result<Vec<String>, DictionaryError>;
}

impl WordSource for Vec<String> {
    fn into_words(self) -> Result<Vec<String>, DictionaryError> {
        Ok(self)
    }
}

impl WordSource for &[String] {
    fn into_words(self) -> Result<Vec<String>, DictionaryError> {
        Ok(self.to_vec())
    }
}

impl WordSource for &[&str] {
    fn into_words(self) -> Result<Vec<String>, DictionaryError> {
        Ok(self.iter().map(|w| (*w).to_owned()).collect())
    }
}

/// A line-delimited word file. Each line is one word; the line terminator is
/// stripped and nothing else is trimmed.
#[derive(Clone, Debug)]
pub struct FileDictionary {
    path: PathBuf,
}

impl FileDictionary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The system word list at [`SYSTEM_DICTIONARY`].
    pub fn system() -> Self {
        Self::new(SYSTEM_DICTIONARY)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every line of the file.
    pub fn read_words(&self) -> Result<Vec<String>, DictionaryError> {
        let file = File::open(&self.path).map_err(|source| DictionaryError::Open {
            path: self.path.clone(),
            source,
        })?;

        BufReader::new(file)
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .map_err(|source| DictionaryError::Read {
                path: self.path.clone(),
                source,
            })
    }
}

impl WordSource for FileDictionary {
    fn into_words(self) -> Result<Vec<String>, DictionaryError> {
        self.read_words()
    }
}

impl WordSource for &FileDictionary {
    fn into_words(self) -> Result<Vec<String>, DictionaryError> {
        self.read_words()
    }
}

/// Failure to obtain words from a source.
#[derive(Debug)]
pub enum DictionaryError {
    /// The word list could not be opened.
    Open { path: PathBuf, source: io::Error },
    /// The word list was opened but reading it failed part way.
    Read { path: PathBuf, source: io::Error },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, .. } => {
                write!(f, "could not open dictionary {}", path.display())
            }
            Self::Read { path, .. } => {
                write!(f, "could not read dictionary {}", path.display())
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Read { source, .. } => Some(source),
        }
    }
}
