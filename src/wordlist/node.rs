use std::fmt::{self, Formatter};

use derive_new::new;

/// One character position along one or more stored words.
///
/// `less`/`greater` link to siblings holding a strictly smaller/greater
/// symbol at the same character position; `mid` advances to the next
/// character of the word. Each child is owned by exactly one parent, so
/// dropping a subtree frees it wholesale.
#[derive(new, Debug)]
pub(crate) struct Node {
    pub(crate) symbol: char,
    #[new(default)]
    pub(crate) terminal: bool,
    #[new(default)]
    pub(crate) less: Option<Box<Node>>,
    #[new(default)]
    pub(crate) mid: Option<Box<Node>>,
    #[new(default)]
    pub(crate) greater: Option<Box<Node>>,
}

impl Node {
    /// Walks the subtree for `word[index..]`, creating nodes along the way,
    /// and returns the (possibly fresh) subtree root. The node reached by
    /// consuming the last character via the `mid` spine is marked terminal.
    pub(crate) fn insert(node: Option<Box<Node>>, word: &[char], index: usize) -> Box<Node> {
        let symbol = word[index];
        let mut node = node.unwrap_or_else(|| Box::new(Node::new(symbol)));

        if symbol < node.symbol {
            node.less = Some(Node::insert(node.less.take(), word, index));
        } else if symbol > node.symbol {
            node.greater = Some(Node::insert(node.greater.take(), word, index));
        } else if index + 1 == word.len() {
            node.terminal = true;
        } else {
            node.mid = Some(Node::insert(node.mid.take(), word, index + 1));
        }
        node
    }

    /// Returns the node at which `word` ends, or `None` when some required
    /// child is absent. Callers decide what the reached node means: its mere
    /// existence answers a prefix query, its `terminal` flag a full-word one.
    pub(crate) fn find<'a>(
        node: Option<&'a Node>,
        word: &[char],
        index: usize,
    ) -> Option<&'a Node> {
        let node = node?;
        let symbol = word[index];

        if symbol < node.symbol {
            Node::find(node.less.as_deref(), word, index)
        } else if symbol > node.symbol {
            Node::find(node.greater.as_deref(), word, index)
        } else if index + 1 == word.len() {
            Some(node)
        } else {
            Node::find(node.mid.as_deref(), word, index + 1)
        }
    }

    /// Unmarks the terminal node for `word` and prunes on the way back up:
    /// a node that is neither terminal nor a parent after the removal is
    /// dropped, which collapses chains of now-useless nodes bottom-up.
    ///
    /// The caller must have checked that `word` is present; this walk
    /// assumes every required child exists.
    pub(crate) fn remove(node: Option<Box<Node>>, word: &[char], index: usize) -> Option<Box<Node>> {
        let mut node = node?;
        let symbol = word[index];

        if symbol < node.symbol {
            node.less = Node::remove(node.less.take(), word, index);
        } else if symbol > node.symbol {
            node.greater = Node::remove(node.greater.take(), word, index);
        } else if index + 1 == word.len() {
            node.terminal = false;
        } else {
            node.mid = Node::remove(node.mid.take(), word, index + 1);
        }

        if !node.terminal && node.less.is_none() && node.mid.is_none() && node.greater.is_none() {
            None
        } else {
            Some(node)
        }
    }

    pub(crate) fn height(node: Option<&Node>) -> usize {
        match node {
            None => 0,
            Some(node) => {
                1 + Node::height(node.less.as_deref())
                    .max(Node::height(node.mid.as_deref()))
                    .max(Node::height(node.greater.as_deref()))
            }
        }
    }

    /// One line per node, children indented under their parent with the
    /// edge that reached them.
    pub(crate) fn render(&self, f: &mut Formatter<'_>, depth: usize, edge: &str) -> fmt::Result {
        writeln!(
            f,
            "{:indent$}{}: {:?}, terminal: {}",
            "",
            edge,
            self.symbol,
            self.terminal,
            indent = depth * 2
        )?;
        if let Some(less) = &self.less {
            less.render(f, depth + 1, "less")?;
        }
        if let Some(mid) = &self.mid {
            mid.render(f, depth + 1, "mid")?;
        }
        if let Some(greater) = &self.greater {
            greater.render(f, depth + 1, "greater")?;
        }
        Ok(())
    }
}
