//! Prefix tree for exact-word lookup
//!
//! Nodes live in a single arena and refer to their children by index, so the
//! tree owns every node and no node ever points back up.

/// Index of a node inside the arena
type NodeId = u32;

const ROOT: usize = 0;

/// Trie node
#[derive(Debug, Default, Clone)]
struct TrieNode {
    /// Children sorted by character
    children: Vec<(char, NodeId)>,
    is_word: bool,
}

impl TrieNode {
    fn child(&self, ch: char) -> Option<NodeId> {
        self.children
            .binary_search_by(|(c, _)| c.cmp(&ch))
            .ok()
            .map(|pos| self.children[pos].1)
    }
}

/// Character-indexed prefix tree
///
/// Lookups are exact and case-sensitive: callers normalize words before
/// inserting them. Once built the tree is only read, so it can be shared
/// between threads without locking.
#[derive(Debug, Clone)]
pub struct PrefixTree {
    nodes: Vec<TrieNode>,
}

impl Default for PrefixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Inserts a word; inserting it again leaves the tree unchanged
    pub fn insert(&mut self, word: &str) {
        let mut current = ROOT;

        for ch in word.chars() {
            current = match self.nodes[current].child(ch) {
                Some(next) => next as usize,
                None => self.push_child(current, ch),
            };
        }

        self.nodes[current].is_word = true;
    }

    fn push_child(&mut self, parent: usize, ch: char) -> usize {
        let id = self.nodes.len();
        self.nodes.push(TrieNode::default());

        let children = &mut self.nodes[parent].children;
        let pos = children.partition_point(|(c, _)| *c < ch);
        children.insert(pos, (ch, id as NodeId));
        id
    }

    /// Checks whether `word` was inserted verbatim
    pub fn contains(&self, word: &str) -> bool {
        let mut current = ROOT;

        for ch in word.chars() {
            match self.nodes[current].child(ch) {
                Some(next) => current = next as usize,
                None => return false,
            }
        }

        self.nodes[current].is_word
    }

    /// Number of distinct words stored
    pub fn count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_word).count()
    }

    /// Number of nodes in the arena, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixTree {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tree = PrefixTree::new();
        for word in iter {
            tree.insert(word.as_ref());
        }
        tree
    }
}
