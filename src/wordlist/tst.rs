use std::fmt::{self, Display, Formatter};

use crate::wordlist::index::Index;
use crate::wordlist::node::Node;

/// A ternary search tree: one character per node, three ordered children
/// (less/mid/greater) instead of a per-alphabet child array.
///
/// Characters are compared raw; any normalization (case folding,
/// whitespace trimming) is the caller's business and must be applied
/// consistently before insert, search and delete alike. The empty string
/// is never stored: inserting it is a no-op and searching for it is
/// always false.
///
/// All walks are recursive, so depth is bounded by the longest stored
/// word plus the less/greater chains an unlucky insertion order builds
/// up (sorted input degenerates into a linked list). Adversarial inputs
/// can exhaust the call stack; that is a known limitation, not a
/// handled error.
#[derive(Default)]
pub struct TernarySearchTree {
    root: Option<Box<Node>>,
    count: usize,
    words: Vec<String>,
}

impl TernarySearchTree {
    pub fn new() -> TernarySearchTree {
        Default::default()
    }

    /// Adds `word` to the tree. Duplicates and the empty string change
    /// nothing.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        if self.words.iter().any(|w| w == word) {
            return;
        }
        let chars: Vec<char> = word.chars().collect();
        self.root = Some(Node::insert(self.root.take(), &chars, 0));
        self.words.push(word.to_string());
        self.count += 1;
    }

    /// With `exact`, answers full-word membership; without it, answers
    /// whether some stored word starts with `word` (the reached node need
    /// not be terminal — every retained node lies on the path of at least
    /// one stored word).
    pub fn search(&self, word: &str, exact: bool) -> bool {
        if word.is_empty() {
            return false;
        }
        let chars: Vec<char> = word.chars().collect();
        match Node::find(self.root.as_deref(), &chars, 0) {
            Some(node) => !exact || node.terminal,
            None => false,
        }
    }

    /// Removes `word`, pruning nodes that end up childless and
    /// non-terminal. Returns false when the word was not present.
    pub fn delete(&mut self, word: &str) -> bool {
        if !self.search(word, true) {
            return false;
        }
        let chars: Vec<char> = word.chars().collect();
        self.root = Node::remove(self.root.take(), &chars, 0);
        self.words.retain(|w| w != word);
        self.count -= 1;
        true
    }

    /// Longest root-to-leaf chain counting all three edge kinds; 0 when
    /// empty.
    pub fn height(&self) -> usize {
        Node::height(self.root.as_deref())
    }

    /// Number of distinct words currently stored.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Stored words in insertion order. Not sorted; callers wanting
    /// alphabetical output must sort themselves.
    pub fn all_words(&self) -> &[String] {
        &self.words
    }

    /// Resets to the empty state: tree, counter and word list together,
    /// so duplicate detection can never disagree with the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.count = 0;
        self.words.clear();
    }
}

impl Index for TernarySearchTree {
    fn add(&mut self, word: &str) {
        self.insert(word);
    }

    fn contains(&self, word: &str) -> bool {
        self.search(word, true)
    }

    fn contains_prefix(&self, prefix: &str) -> bool {
        self.search(prefix, false)
    }

    fn remove(&mut self, word: &str) -> bool {
        self.delete(word)
    }
}

impl Display for TernarySearchTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.root {
            None => Ok(()),
            Some(root) => root.render(f, 0, "root"),
        }
    }
}

impl fmt::Debug for TernarySearchTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TernarySearchTree")
            .field("words", &self.count)
            .field("height", &self.height())
            .finish()
    }
}
