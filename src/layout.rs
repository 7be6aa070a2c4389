//! Row and indent assignment by recursive source peeling.
//!
//! Each weakly-connected component is handled on its own, starting from a
//! shared baseline indent. The component's current sources take the next
//! rows with indents `baseline, baseline + 1, ...`; they are then removed and
//! whatever is left is split into components again, one staircase step
//! further right. A component and everything nested inside it is finished
//! before its next sibling starts, so every component occupies a contiguous
//! block of rows.
//!
//! Ties are broken by insertion order: components are visited by their
//! earliest-inserted node, and sources are emitted in insertion order.
//!
//! Removal is tracked with in-degree counters and a removed flag per arena
//! index rather than by copying subgraphs.

use crate::error::Result;
use crate::graph::DAG;
use core::fmt::Display;
use tracing::{debug, trace};

/// Where a node ended up: its output line and staircase depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement<'g, N> {
    /// The node identifier.
    pub node: &'g N,
    /// Output line, `0..node_count`.
    pub row: usize,
    /// Horizontal depth in 2-character column units.
    pub indent: usize,
}

/// Rows and indents for every arena index, computed once per render.
#[derive(Debug, Clone, Default)]
pub(crate) struct Layering {
    /// Arena index of the node on each row.
    pub(crate) order: Vec<usize>,
    /// Indent of each row.
    pub(crate) indents: Vec<usize>,
    /// Row of each arena index.
    pub(crate) row_of: Vec<usize>,
    /// Number of source layers peeled.
    pub(crate) layers: usize,
}

impl Layering {
    fn with_len(len: usize) -> Self {
        Self {
            order: Vec::with_capacity(len),
            indents: Vec::with_capacity(len),
            row_of: vec![0; len],
            layers: 0,
        }
    }

    fn place(&mut self, idx: usize, indent: usize) {
        let row = self.order.len();
        trace!(row, indent, "placed node");
        self.row_of[idx] = row;
        self.order.push(idx);
        self.indents.push(indent);
    }
}

/// Mutable view of the shrinking subgraph.
struct Peeler<'g, N> {
    dag: &'g DAG<N>,
    in_degree: Vec<usize>,
    removed: Vec<bool>,
    // Component membership stamps, one generation per split.
    stamp: Vec<usize>,
    generation: usize,
}

impl<'g, N> Peeler<'g, N> {
    fn new(dag: &'g DAG<N>) -> Self {
        let len = dag.nodes.len();
        Self {
            dag,
            in_degree: dag.parents.iter().map(Vec::len).collect(),
            removed: vec![false; len],
            stamp: vec![0; len],
            generation: 0,
        }
    }

    /// Split `nodes` (ascending arena indices, closed under the remaining
    /// edges) into weakly-connected components, each in ascending order.
    fn split_components(&mut self, nodes: &[usize]) -> Vec<Vec<usize>> {
        let dag = self.dag;
        self.generation += 1;
        let generation = self.generation;
        let mut components = Vec::new();

        for &seed in nodes {
            if self.stamp[seed] == generation {
                continue;
            }
            self.stamp[seed] = generation;
            let mut component = vec![seed];
            let mut cursor = 0;

            // Follow edges in both directions
            while let Some(&idx) = component.get(cursor) {
                cursor += 1;
                let neighbours = dag.children[idx].iter().chain(&dag.parents[idx]);
                for &next in neighbours {
                    if !self.removed[next] && self.stamp[next] != generation {
                        self.stamp[next] = generation;
                        component.push(next);
                    }
                }
            }

            component.sort_unstable();
            components.push(component);
        }

        components
    }

    /// Take the current sources of `component` off the graph and return them.
    fn peel_sources(&mut self, component: &[usize]) -> Vec<usize> {
        let sources: Vec<usize> = component
            .iter()
            .copied()
            .filter(|&idx| self.in_degree[idx] == 0)
            .collect();

        for &idx in &sources {
            self.removed[idx] = true;
            for &child in &self.dag.children[idx] {
                self.in_degree[child] -= 1;
            }
        }
        sources
    }
}

impl<N> DAG<N> {
    /// Assign rows and indents. The graph must already be known to be acyclic.
    pub(crate) fn layering(&self) -> Layering {
        let mut layering = Layering::with_len(self.nodes.len());
        let mut peeler = Peeler::new(self);

        let all: Vec<usize> = (0..self.nodes.len()).collect();
        let mut pending: Vec<(Vec<usize>, usize)> = peeler
            .split_components(&all)
            .into_iter()
            .rev()
            .map(|component| (component, 0))
            .collect();

        while let Some((component, baseline)) = pending.pop() {
            let sources = peeler.peel_sources(&component);
            debug_assert!(!sources.is_empty(), "acyclic component without a source");
            if sources.is_empty() {
                continue;
            }

            layering.layers += 1;
            for (rank, &idx) in sources.iter().enumerate() {
                layering.place(idx, baseline + rank);
            }

            let remainder: Vec<usize> = component
                .into_iter()
                .filter(|&idx| !peeler.removed[idx])
                .collect();
            let next_baseline = baseline + sources.len();
            // Reversed so the earliest component is popped first.
            for sub in peeler.split_components(&remainder).into_iter().rev() {
                pending.push((sub, next_baseline));
            }
        }

        debug!(
            rows = layering.order.len(),
            layers = layering.layers,
            "layering complete"
        );
        layering
    }

    /// Compute the row and indent of every node, in row order.
    ///
    /// Row order is topological: for every edge `u → v`, `u` gets the lower row.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`](crate::Error::InvalidInput) if the graph has a cycle.
    ///
    /// # Examples
    ///
    /// ```
    /// use termdag::DAG;
    ///
    /// let dag = DAG::from_edges(&["a", "b", "c"], &[("a", "b"), ("a", "c")]);
    /// let placed: Vec<_> = dag
    ///     .layout()
    ///     .unwrap()
    ///     .into_iter()
    ///     .map(|p| (*p.node, p.row, p.indent))
    ///     .collect();
    ///
    /// assert_eq!(placed, vec![("a", 0, 0), ("b", 1, 1), ("c", 2, 1)]);
    /// ```
    pub fn layout(&self) -> Result<Vec<Placement<'_, N>>>
    where
        N: Display,
    {
        debug!(nodes = self.node_count(), edges = self.edge_count(), "laying out graph");
        self.ensure_acyclic()?;

        let layering = self.layering();
        Ok(layering
            .order
            .iter()
            .zip(&layering.indents)
            .enumerate()
            .map(|(row, (&idx, &indent))| Placement {
                node: &self.nodes[idx],
                row,
                indent,
            })
            .collect())
    }
}
