//! A Directed Acyclic Word Graph (DAWG)
//!
//! Specialized for the English lowercase alphabet only - no spaces, numbers,
//! or punctuation.
//!
//! The built representation is a flat array of 16-bit integers. Each row is
//! 27 elements wide and represents one node of the graph: the first 26
//! elements identify the successor node for each letter (0 meaning none),
//! and the final element is an end-of-word bit. Row 0 is the null node.
//!
//! This is more expensive to build than a trie or a set, but has great
//! memory locality and is very fast to query.

use anyhow::{bail, ensure, Result};
use std::collections::HashMap;

const ALPHABET: usize = 26;
const ROW: usize = ALPHABET + 1;

/// Successor table plus end-of-word flag for one canonical node
type NodeKey = (bool, [u16; ALPHABET]);

/// A built word graph. Query with [`Dawg::contains`], or walk nodes directly
/// with [`Dawg::root`] / [`Dawg::next`] / [`Dawg::is_end_of_word`].
pub struct Dawg {
    table: Vec<u16>,
    root: u16,
}

impl Dawg {
    /// True if the word is in the set. Case-insensitive; any non-alphabetic
    /// character makes the word a miss.
    pub fn contains(&self, word: &str) -> bool {
        let mut node = self.root;
        for c in word.bytes() {
            if !c.is_ascii_alphabetic() {
                return false;
            }
            node = self.next(node, c);
            if node == 0 {
                return false;
            }
        }
        self.is_end_of_word(node)
    }

    /// The root node of the graph - queries start here
    pub fn root(&self) -> u16 {
        self.root
    }

    /// The successor node for the given node and letter, 0 if none
    pub fn next(&self, node: u16, c: u8) -> u16 {
        let ix = (c.to_ascii_lowercase() - b'a') as usize;
        self.table[node as usize * ROW + ix]
    }

    /// True if the given node is an end-of-word node
    pub fn is_end_of_word(&self, node: u16) -> bool {
        self.table[node as usize * ROW + ALPHABET] == 1
    }

    /// Number of nodes in the graph, null node excluded
    pub fn num_nodes(&self) -> usize {
        self.table.len() / ROW - 1
    }
}

/// Arena trie node used during construction
struct TrieNode {
    children: [u32; ALPHABET],
    eow: bool,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: [0; ALPHABET],
            eow: false,
        }
    }
}

/// Incremental builder: add words, then canonicalize into a [`Dawg`].
pub struct DawgBuilder {
    // nodes[0] is the trie root; child index 0 means absent
    nodes: Vec<TrieNode>,
}

impl DawgBuilder {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new()],
        }
    }

    /// Insert a word into the trie. Case-insensitive.
    pub fn add(&mut self, word: &str) -> Result<()> {
        ensure!(!word.is_empty(), "empty word");
        let mut node = 0usize;
        for c in word.bytes() {
            ensure!(c.is_ascii_alphabetic(), "word {word:?} is not alphabetic");
            let ix = (c.to_ascii_lowercase() - b'a') as usize;
            let child = self.nodes[node].children[ix];
            node = if child == 0 {
                self.nodes.push(TrieNode::new());
                let new = self.nodes.len() - 1;
                self.nodes[node].children[ix] = new as u32;
                new
            } else {
                child as usize
            };
        }
        self.nodes[node].eow = true;
        Ok(())
    }

    /// Canonicalize the trie into a DAWG by sharing common suffixes:
    /// nodes are interned bottom-up on (end-of-word, successor ids), so any
    /// two subtrees spelling the same word set collapse to one node.
    pub fn build(self) -> Result<Dawg> {
        let mut canon: HashMap<NodeKey, u16> = HashMap::new();
        let mut keys_by_id: Vec<NodeKey> = Vec::new();

        let root = self.canonicalize(0, &mut canon, &mut keys_by_id)?;

        let mut table = vec![0u16; ROW * (keys_by_id.len() + 1)];
        for (ix, (eow, children)) in keys_by_id.iter().enumerate() {
            let row = (ix + 1) * ROW;
            table[row..row + ALPHABET].copy_from_slice(children);
            table[row + ALPHABET] = u16::from(*eow);
        }

        Ok(Dawg { table, root })
    }

    fn canonicalize(
        &self,
        node: usize,
        canon: &mut HashMap<NodeKey, u16>,
        keys_by_id: &mut Vec<NodeKey>,
    ) -> Result<u16> {
        let mut children = [0u16; ALPHABET];
        for ix in 0..ALPHABET {
            let child = self.nodes[node].children[ix];
            if child != 0 {
                children[ix] = self.canonicalize(child as usize, canon, keys_by_id)?;
            }
        }

        let key = (self.nodes[node].eow, children);
        if let Some(&id) = canon.get(&key) {
            return Ok(id);
        }

        if keys_by_id.len() + 1 > u16::MAX as usize {
            bail!("word set too large for 16-bit node ids");
        }
        keys_by_id.push(key);
        let id = keys_by_id.len() as u16;
        canon.insert(key, id);
        Ok(id)
    }
}

impl Default for DawgBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a DAWG from a word list
pub fn build_dawg<I, S>(words: I) -> Result<Dawg>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = DawgBuilder::new();
    for word in words {
        builder.add(word.as_ref())?;
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn membership() {
        let dawg = build_dawg(["cat", "cats", "car", "dog"]).unwrap();

        for word in ["cat", "cats", "car", "dog"] {
            assert!(dawg.contains(word), "{word} should be present");
        }
        for word in ["ca", "cart", "do", "dogs", "", "c4t"] {
            assert!(!dawg.contains(word), "{word} should be absent");
        }
    }

    #[test]
    fn case_insensitive() {
        let dawg = build_dawg(["Hello"]).unwrap();
        assert!(dawg.contains("hello"));
        assert!(dawg.contains("HELLO"));
    }

    #[test]
    fn low_level_walk() {
        let dawg = build_dawg(["hi"]).unwrap();
        let node = dawg.next(dawg.root(), b'h');
        assert_ne!(node, 0);
        assert!(!dawg.is_end_of_word(node));
        let node = dawg.next(node, b'i');
        assert_ne!(node, 0);
        assert!(dawg.is_end_of_word(node));
    }

    #[test]
    fn shares_common_suffixes() {
        // "stopping" and "topping" share the "opping" tail, so the DAWG must
        // come out smaller than the plain trie (15 nodes vs 8 + shared tail).
        let dawg = build_dawg(["stopping", "topping"]).unwrap();
        assert!(dawg.contains("stopping"));
        assert!(dawg.contains("topping"));
        assert!(dawg.num_nodes() < 15, "got {} nodes", dawg.num_nodes());
    }

    #[test]
    fn rejects_bad_words() {
        assert!(build_dawg(["with space"]).is_err());
        assert!(build_dawg([""]).is_err());
    }

    proptest! {
        #[test]
        fn agrees_with_hash_set(
            words in prop::collection::vec("[a-z]{1,8}", 1..40),
            probes in prop::collection::vec("[a-z]{1,8}", 0..40),
        ) {
            let dawg = build_dawg(&words).unwrap();
            let set: HashSet<&str> = words.iter().map(String::as_str).collect();

            for word in words.iter().chain(probes.iter()) {
                prop_assert_eq!(dawg.contains(word), set.contains(word.as_str()));
            }
        }
    }
}
