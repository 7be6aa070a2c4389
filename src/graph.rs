//! Core DAG (Directed Acyclic Graph) data structure.
//!
//! Nodes live in an arena in insertion order and edges are kept as
//! index-based adjacency lists in both directions. Insertion order is also
//! the tie-break the layering uses, so building the same graph the same way
//! always yields the same diagram.
//!
//! ## Performance Characteristics
//!
//! - **Node Insertion**: O(1) amortized with HashMap id→index mapping
//! - **Edge Insertion**: O(out-degree) because duplicate edges are dropped
//! - **Child/Parent Lookups**: O(1) via cached adjacency lists

use core::hash::Hash;
use std::collections::HashMap;

/// Glyph used for the corner that ends a trunk at its farthest successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerStyle {
    /// Square corner: `└`
    Square,

    /// Rounded corner: `╰`
    Round,
}

impl CornerStyle {
    /// Map the `round_angle` flag onto a style.
    ///
    /// ```
    /// use termdag::CornerStyle;
    ///
    /// assert_eq!(CornerStyle::from_round_angle(true), CornerStyle::Round);
    /// assert_eq!(CornerStyle::from_round_angle(false), CornerStyle::Square);
    /// ```
    pub fn from_round_angle(round_angle: bool) -> Self {
        if round_angle {
            CornerStyle::Round
        } else {
            CornerStyle::Square
        }
    }
}

impl Default for CornerStyle {
    fn default() -> Self {
        CornerStyle::Square
    }
}

/// A Directed Acyclic Graph (DAG) with staircase text rendering.
///
/// `N` is the caller's node identifier. It only needs equality, hashing and
/// cloning to build a graph; rendering additionally uses its `Display` form
/// as the node's text.
///
/// # Examples
///
/// ```
/// use termdag::DAG;
///
/// let mut dag = DAG::new();
/// dag.add_node("Start");
/// dag.add_node("End");
/// dag.add_edge("Start", "End");
///
/// let output = dag.render().unwrap();
/// assert_eq!(output, "• Start\n└─• End");
/// ```
#[derive(Debug, Clone)]
pub struct DAG<N> {
    pub(crate) nodes: Vec<N>,
    pub(crate) id_to_index: HashMap<N, usize>, // Cache id→index mapping (O(1) lookups)
    pub(crate) children: Vec<Vec<usize>>,      // Adjacency list: children[idx] = child indices
    pub(crate) parents: Vec<Vec<usize>>,       // Adjacency list: parents[idx] = parent indices
    pub(crate) edge_count: usize,
    pub(crate) corner_style: CornerStyle,
}

impl<N> Default for DAG<N> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            id_to_index: HashMap::new(),
            children: Vec::new(),
            parents: Vec::new(),
            edge_count: 0,
            corner_style: CornerStyle::default(),
        }
    }
}

impl<N: Eq + Hash + Clone> DAG<N> {
    /// Create a new empty DAG.
    ///
    /// # Examples
    ///
    /// ```
    /// use termdag::DAG;
    /// let dag: DAG<u32> = DAG::new();
    /// assert!(dag.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a DAG from pre-defined nodes and edges (batch construction).
    ///
    /// Listed nodes keep their order; edge endpoints that were not listed are
    /// appended in the order the edges mention them.
    ///
    /// # Examples
    ///
    /// ```
    /// use termdag::DAG;
    ///
    /// let dag = DAG::from_edges(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
    /// assert_eq!(dag.node_count(), 3);
    /// assert_eq!(dag.edge_count(), 2);
    /// ```
    pub fn from_edges(nodes: &[N], edges: &[(N, N)]) -> Self {
        let mut dag = Self::new();
        for id in nodes {
            dag.add_node(id.clone());
        }
        for (from, to) in edges {
            dag.add_edge(from.clone(), to.clone());
        }
        dag
    }

    /// Create an empty DAG that renders with the given corner style.
    ///
    /// ```
    /// use termdag::{CornerStyle, DAG};
    ///
    /// let mut dag = DAG::with_style(CornerStyle::Round);
    /// dag.add_edge(1, 2);
    /// assert_eq!(dag.render().unwrap(), "• 1\n╰─• 2");
    /// ```
    pub fn with_style(style: CornerStyle) -> Self {
        Self {
            corner_style: style,
            ..Self::default()
        }
    }

    /// Set the corner style used by [`render`](Self::render).
    pub fn set_corner_style(&mut self, style: CornerStyle) {
        self.corner_style = style;
    }

    /// The corner style used by [`render`](Self::render).
    pub fn corner_style(&self) -> CornerStyle {
        self.corner_style
    }

    /// Add a node to the DAG.
    ///
    /// Adding a node that is already present (explicitly or through
    /// [`add_edge`](Self::add_edge)) leaves it at its original position.
    pub fn add_node(&mut self, id: N) {
        self.ensure_node_exists(id);
    }

    /// Add an edge from one node to another.
    ///
    /// Missing endpoints are created on the fly, `from` before `to`.
    /// Repeating an edge has no effect.
    ///
    /// # Examples
    ///
    /// ```
    /// use termdag::DAG;
    ///
    /// let mut dag = DAG::new();
    /// dag.add_edge('a', 'b');
    /// dag.add_edge('a', 'b');
    /// assert_eq!(dag.node_count(), 2);
    /// assert_eq!(dag.edge_count(), 1);
    /// ```
    pub fn add_edge(&mut self, from: N, to: N) {
        let from_idx = self.ensure_node_exists(from);
        let to_idx = self.ensure_node_exists(to);

        if self.children[from_idx].contains(&to_idx) {
            return;
        }
        self.children[from_idx].push(to_idx);
        self.parents[to_idx].push(from_idx);
        self.edge_count += 1;
    }

    /// Return the arena index of `id`, creating the node if it is missing.
    fn ensure_node_exists(&mut self, id: N) -> usize {
        if let Some(&idx) = self.id_to_index.get(&id) {
            return idx;
        }

        let idx = self.nodes.len();
        self.nodes.push(id.clone());
        self.id_to_index.insert(id, idx);
        // Extend adjacency lists
        self.children.push(Vec::new());
        self.parents.push(Vec::new());
        idx
    }

    /// Whether `id` is a node of this graph.
    pub fn contains_node(&self, id: &N) -> bool {
        self.id_to_index.contains_key(id)
    }

    /// Direct successors of `id`, in the order their edges were added.
    /// Unknown nodes have none.
    pub fn successors(&self, id: &N) -> Vec<&N> {
        self.node_index(id)
            .map(|idx| self.children[idx].iter().map(|&c| &self.nodes[c]).collect())
            .unwrap_or_default()
    }

    /// Direct predecessors of `id`, in the order their edges were added.
    /// Unknown nodes have none.
    pub fn predecessors(&self, id: &N) -> Vec<&N> {
        self.node_index(id)
            .map(|idx| self.parents[idx].iter().map(|&p| &self.nodes[p]).collect())
            .unwrap_or_default()
    }

    /// Get node index from ID using O(1) HashMap lookup
    #[inline]
    pub(crate) fn node_index(&self, id: &N) -> Option<usize> {
        self.id_to_index.get(id).copied()
    }
}

impl<N> DAG<N> {
    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    /// Edges as `(from, to)` pairs, grouped by source in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> {
        self.children.iter().enumerate().flat_map(move |(from, targets)| {
            targets
                .iter()
                .map(move |&to| (&self.nodes[from], &self.nodes[to]))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{CornerStyle, DAG};

    #[test]
    fn test_insertion_order_is_kept() {
        let dag = DAG::from_edges(&["c", "a"], &[("b", "a"), ("c", "d")]);
        let order: Vec<_> = dag.nodes().copied().collect();
        assert_eq!(order, vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn test_add_node_twice_keeps_position() {
        let mut dag = DAG::new();
        dag.add_node(1);
        dag.add_node(2);
        dag.add_node(1);
        assert_eq!(dag.nodes().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_duplicate_edges_are_dropped() {
        let mut dag = DAG::new();
        dag.add_edge(1, 2);
        dag.add_edge(1, 2);
        dag.add_edge(2, 3);
        assert_eq!(dag.edge_count(), 2);
        assert_eq!(dag.successors(&1), vec![&2]);
        assert_eq!(dag.predecessors(&2), vec![&1]);
    }

    #[test]
    fn test_edges_listing() {
        let dag = DAG::from_edges(&[], &[(1, 2), (1, 3), (2, 3)]);
        let edges: Vec<_> = dag.edges().map(|(a, b)| (*a, *b)).collect();
        assert_eq!(edges, vec![(1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn test_unknown_node_queries() {
        let dag = DAG::from_edges(&["a"], &[]);
        assert!(dag.contains_node(&"a"));
        assert!(!dag.contains_node(&"z"));
        assert!(dag.successors(&"z").is_empty());
        assert!(dag.predecessors(&"z").is_empty());
    }

    #[test]
    fn test_corner_style_setting() {
        let mut dag: DAG<u8> = DAG::new();
        assert_eq!(dag.corner_style(), CornerStyle::Square);
        dag.set_corner_style(CornerStyle::Round);
        assert_eq!(dag.corner_style(), CornerStyle::Round);
    }
}
