use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::rc::Rc;

use fst::{Set, SetBuilder};
use tracing::{debug, instrument};

use crate::error::DictionaryError;

/// Anything that can answer whether an uppercase A-Z string is a word
pub trait Dictionary {
    fn is_valid(&self, word: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_valid(&self, word: &str) -> bool {
        (**self).is_valid(word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Rc<D> {
    fn is_valid(&self, word: &str) -> bool {
        self.as_ref().is_valid(word)
    }
}

impl<D: AsRef<[u8]>> Dictionary for Set<D> {
    fn is_valid(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl Dictionary for HashSet<String> {
    fn is_valid(&self, word: &str) -> bool {
        self.contains(word)
    }
}

/// Word list stored as an fst set. Words are uppercased on the way in and anything
/// containing characters outside A-Z is dropped
pub struct WordList {
    words: Set<Vec<u8>>,
}

impl WordList {
    pub fn from_words<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_ascii_uppercase())
            .filter(|w| !w.is_empty() && w.bytes().all(|b| b.is_ascii_uppercase()))
            .collect::<Vec<_>>();

        // The fst builder requires lexicographic order with no duplicates
        words.sort_unstable();
        words.dedup();

        let mut build = SetBuilder::memory();
        build.extend_iter(words)?;
        let words = build.into_set();
        Ok(Self { words })
    }

    /// Reads a newline delimited word file
    #[instrument]
    pub fn from_file<P: AsRef<Path> + std::fmt::Debug>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let read_err = |source| DictionaryError::Read {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(read_err)?;
        let reader = BufReader::new(file);
        let lines = reader.lines().collect::<Result<Vec<_>, _>>().map_err(read_err)?;

        let list = Self::from_words(lines)?;
        if list.is_empty() {
            return Err(DictionaryError::Empty(path.to_path_buf()));
        }
        debug!(words = list.len(), "loaded word list");
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn is_valid(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_dictionary_lookup() {
        let dict = WordList::from_words(["cat", "Dog", "MOUSE", "cat", "o'clock", ""]).unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.is_valid("CAT"));
        assert!(dict.is_valid("DOG"));
        assert!(!dict.is_valid("cat"));
        assert!(!dict.is_valid("CA"));
        assert!(!dict.is_valid("OCLOCK"));
    }

    #[test]
    fn test_fst_set_is_a_dictionary() {
        let mut build = SetBuilder::memory();
        build.extend_iter(["A", "AN", "ANT"]).unwrap();
        let set = build.into_set();
        assert!(set.is_valid("AN"));
        assert!(!(&set).is_valid("ANTS"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "apple\nbanana\n  cherry  ").unwrap();
        let dict = WordList::from_file(file.path()).unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.is_valid("CHERRY"));
    }

    #[test]
    fn test_from_file_errors() {
        let missing = WordList::from_file("/definitely/not/here.txt");
        assert!(matches!(missing, Err(DictionaryError::Read { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "123\n---").unwrap();
        let empty = WordList::from_file(file.path());
        assert!(matches!(empty, Err(DictionaryError::Empty(_))));
    }
}
