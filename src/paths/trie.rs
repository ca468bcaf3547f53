//! Segment trie over registered path templates.
//!
//! The trie is only an index for rejecting ambiguous templates: it never
//! matches requests and never shrinks. Every template accepted by the
//! registry is inserted segment by segment; concrete segments (`users`) go
//! into `children`, parameterized segments (`:id`, `{id}`, `{id}.json`) into
//! `param_children`.
//!
//! ## Ambiguity rule
//!
//! While walking a candidate root to leaf, a parameterized candidate segment
//! that is not indexed yet is rejected when the node it would hang from
//! already has a concrete child. Parameterized segments that are already
//! indexed are walked through, so another method can still be added to a
//! known template.
//!
//! ```text
//! registered   /path/extension
//! candidate    /path/:value      -> rejected, `:value` would shadow `extension`
//! ```
//!
//! The check is one-directional. A concrete segment registered after a
//! parameterized sibling is accepted:
//!
//! ```text
//! registered   /path/:value
//! candidate    /path/extension   -> accepted
//! ```

use smallvec::SmallVec;

use super::error::PathsError;

type Segments<'a> = SmallVec<[&'a str; 8]>;

/// Split a template into its non-empty segments.
fn segments(path: &str) -> Segments<'_> {
    path.trim_start_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect()
}

/// `true` when the segment carries a parameter marker anywhere: a `:` or a
/// `{...}` pair (`:id`, `file:id`, `{id}`, `{id}.json`).
#[must_use]
pub fn is_wildcard(segment: &str) -> bool {
    segment.contains(':') || (segment.contains('{') && segment.contains('}'))
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    segment: String,
    /// First template inserted through this node
    resource: String,
    children: Vec<TrieNode>,
    param_children: Vec<TrieNode>,
}

impl TrieNode {
    fn new(segment: &str, resource: &str) -> Self {
        Self {
            segment: segment.to_string(),
            resource: resource.to_string(),
            children: Vec::new(),
            param_children: Vec::new(),
        }
    }

    fn insert(&mut self, segments: &[&str], resource: &str) {
        let Some((&segment, remaining)) = segments.split_first() else {
            return;
        };

        let siblings = if is_wildcard(segment) {
            &mut self.param_children
        } else {
            &mut self.children
        };

        let index = match siblings.iter().position(|c| c.segment == segment) {
            Some(index) => index,
            None => {
                siblings.push(TrieNode::new(segment, resource));
                siblings.len() - 1
            }
        };
        siblings[index].insert(remaining, resource);
    }

    fn child(&self, segment: &str) -> Option<&TrieNode> {
        let siblings = if is_wildcard(segment) {
            &self.param_children
        } else {
            &self.children
        };
        siblings.iter().find(|c| c.segment == segment)
    }

    fn count(&self) -> usize {
        1 + self
            .children
            .iter()
            .chain(&self.param_children)
            .map(TrieNode::count)
            .sum::<usize>()
    }
}

/// Incrementally built index of every registered path template.
#[derive(Debug, Clone, Default)]
pub struct PathTrie {
    root: TrieNode,
}

impl PathTrie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every segment of `path`. Inserting a known template is a no-op.
    pub fn insert(&mut self, path: &str) {
        let segments = segments(path);
        self.root.insert(&segments, path);
    }

    /// Registered template that `candidate` would shadow, if any.
    #[must_use]
    pub fn find_conflict(&self, candidate: &str) -> Option<&str> {
        let mut node = &self.root;
        for segment in segments(candidate) {
            match node.child(segment) {
                Some(child) => node = child,
                None if is_wildcard(segment) => {
                    return node.children.first().map(|c| c.resource.as_str());
                }
                None => return None,
            }
        }
        None
    }

    /// Fail with [`PathsError::AmbiguousPath`] when `candidate` would shadow
    /// a registered concrete sibling.
    pub fn check(&self, candidate: &str) -> Result<(), PathsError> {
        match self.find_conflict(candidate) {
            Some(resource) => Err(PathsError::AmbiguousPath {
                resource: resource.to_string(),
                sub_resource: candidate.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// `true` when every segment of `path` is already indexed.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        let mut node = &self.root;
        for segment in segments(path) {
            match node.child(segment) {
                Some(child) => node = child,
                None => return false,
            }
        }
        true
    }

    /// Number of segment nodes, root excluded.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.count() - 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    pub fn clear(&mut self) {
        self.root = TrieNode::default();
    }
}
