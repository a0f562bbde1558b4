use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use thiserror::Error;
use typed_builder::TypedBuilder;

use crate::alphabet::normalize;
use crate::wordlist::tst::TernarySearchTree;

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: no column {column}")]
    BadLine { line: usize, column: usize },
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A dictionary loaded from a word file. Every word goes through
/// [`normalize`] on the way in, and every query argument goes through the
/// same function, so lookups are case- and whitespace-insensitive across
/// the board.
pub struct Wordlist {
    tst: TernarySearchTree,
}

#[derive(TypedBuilder)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str, lineno: usize) -> Result<&'a str, WordlistError> {
        match self.delimiter {
            None => Ok(line),
            Some(delimiter) => {
                let column = self.word_column.unwrap_or(0);
                line.split(delimiter)
                    .nth(column)
                    .ok_or(WordlistError::BadLine { line: lineno, column })
            }
        }
    }
}

/// Snapshot of a wordlist for the `words` dump; the format belongs to
/// this layer, the tree itself has no persisted form.
#[derive(Serialize)]
struct WordsDump<'a> {
    count: usize,
    height: usize,
    words: &'a [String],
}

impl Wordlist {
    pub fn from_file<P: AsRef<Path>>(path: P, format: FileFormat) -> Result<Wordlist, WordlistError> {
        let path = path.as_ref();
        println!("Reading words from {:#?}", path);

        let file = File::open(path)?;
        let buf_reader = BufReader::new(file);

        let mut tst = TernarySearchTree::new();
        let mut count: usize = 0;
        let mut skipped: usize = 0;

        let start = Instant::now();
        for (lineno, line) in buf_reader.lines().enumerate() {
            let line = line?;
            let word = normalize(format.parse_line(&line, lineno + 1)?);
            if word.is_empty() {
                skipped += 1;
                continue;
            }
            tst.insert(&word);
            count += 1;
        }
        let elapsed = start.elapsed();
        println!(
            "Read {} words in {}s ({:.0} kwps) [{} blank lines skipped]",
            count,
            elapsed.as_millis() as f64 / 1000.0,
            count as f64 / elapsed.as_millis().max(1) as f64,
            skipped
        );

        Ok(Wordlist { tst })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.tst.search(&normalize(word), true)
    }

    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.tst.search(&normalize(prefix), false)
    }

    pub fn remove(&mut self, word: &str) -> bool {
        self.tst.delete(&normalize(word))
    }

    pub fn len(&self) -> usize {
        self.tst.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tst.is_empty()
    }

    pub fn height(&self) -> usize {
        self.tst.height()
    }

    pub fn words(&self) -> &[String] {
        self.tst.all_words()
    }

    pub fn save_words<P: AsRef<Path>>(&self, path: P) -> Result<(), WordlistError> {
        let dump = WordsDump {
            count: self.tst.len(),
            height: self.tst.height(),
            words: self.tst.all_words(),
        };
        std::fs::write(path, serde_json::to_string_pretty(&dump)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::Value;
    use tempfile::NamedTempFile;

    use crate::wordlist::wordlist::{FileFormat, Wordlist};

    fn wordlist_from(contents: &str, format: FileFormat) -> Wordlist {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        Wordlist::from_file(file.path(), format).unwrap()
    }

    #[test]
    fn loads_newline_delimited_words() {
        let wl = wordlist_from("cat\ncats\nup\nbug\n", FileFormat::builder().build());
        assert_eq!(wl.len(), 4);
        assert!(wl.contains("cat"));
        assert!(wl.contains_prefix("ca"));
        assert!(!wl.contains("ca"));
    }

    #[test]
    fn normalizes_on_load_and_on_query() {
        let wl = wordlist_from("  Hello  \n\tWORLD\n\n", FileFormat::builder().build());
        assert_eq!(wl.len(), 2);
        assert!(wl.contains("hello"));
        assert!(wl.contains("HELLO"));
        assert!(wl.contains(" World "));
    }

    #[test]
    fn removal_uses_the_same_normalization() {
        let mut wl = wordlist_from("Hello\n", FileFormat::builder().build());
        assert!(wl.remove("HELLO"));
        assert!(wl.is_empty());
    }

    #[test]
    fn delimited_format_picks_the_word_column() {
        let wl = wordlist_from(
            "1\tcat\n2\tbug\n",
            FileFormat::builder().delimiter('\t').word_column(1).build(),
        );
        assert_eq!(wl.len(), 2);
        assert!(wl.contains("cat"));
        assert!(!wl.contains("1"));
    }

    #[test]
    fn missing_column_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "loneword\n").unwrap();
        let result = Wordlist::from_file(
            file.path(),
            FileFormat::builder().delimiter(',').word_column(3).build(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn save_words_writes_json() {
        let wl = wordlist_from("cat\nbug\n", FileFormat::builder().build());
        let out = NamedTempFile::new().unwrap();
        wl.save_words(out.path()).unwrap();

        let dump: Value = serde_json::from_str(&std::fs::read_to_string(out.path()).unwrap()).unwrap();
        assert_eq!(dump["count"], 2);
        assert_eq!(dump["words"].as_array().unwrap().len(), 2);
    }
}
