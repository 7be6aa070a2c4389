//! Cycle detection for directed graphs.
//!
//! Layout and rendering only accept acyclic input, so both run
//! [`DAG::find_cycle`] once before touching any row. The search is an
//! iterative depth-first walk with on-stack marks; deep chains do not grow
//! the call stack.
//!
//! ```
//! use termdag::DAG;
//!
//! let mut dag = DAG::new();
//! dag.add_edge("parse", "check");
//! dag.add_edge("check", "emit");
//! assert!(!dag.has_cycle());
//!
//! dag.add_edge("emit", "parse");
//! assert_eq!(dag.find_cycle(), Some(vec![&"parse", &"check", &"emit"]));
//! ```

use crate::error::{Error, Result};
use crate::graph::DAG;
use core::fmt::Display;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

impl<N> DAG<N> {
    /// Check if the graph contains cycles (making it not a valid DAG).
    ///
    /// # Examples
    ///
    /// ```
    /// use termdag::DAG;
    ///
    /// let mut dag = DAG::new();
    /// dag.add_edge(1, 2);
    /// dag.add_edge(2, 1);  // Creates a cycle!
    ///
    /// assert!(dag.has_cycle());
    /// ```
    pub fn has_cycle(&self) -> bool {
        self.find_cycle_path().is_some()
    }

    /// Nodes of one cycle in traversal order, or `None` for a DAG.
    pub fn find_cycle(&self) -> Option<Vec<&N>> {
        self.find_cycle_path()
            .map(|path| path.into_iter().map(|idx| &self.nodes[idx]).collect())
    }

    /// Find a cycle path as arena indices.
    pub(crate) fn find_cycle_path(&self) -> Option<Vec<usize>> {
        let mut marks = vec![Mark::Unvisited; self.nodes.len()];
        // (node, position of the next child to visit)
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for start in 0..self.nodes.len() {
            if marks[start] != Mark::Unvisited {
                continue;
            }
            marks[start] = Mark::OnStack;
            stack.push((start, 0));

            while let Some(frame) = stack.last_mut() {
                let (idx, next) = *frame;
                let Some(&child) = self.children[idx].get(next) else {
                    marks[idx] = Mark::Done;
                    stack.pop();
                    continue;
                };
                frame.1 += 1;

                match marks[child] {
                    Mark::Unvisited => {
                        marks[child] = Mark::OnStack;
                        stack.push((child, 0));
                    }
                    Mark::OnStack => {
                        if let Some(cycle_start) = stack.iter().position(|&(i, _)| i == child) {
                            return Some(stack[cycle_start..].iter().map(|&(i, _)| i).collect());
                        }
                    }
                    Mark::Done => {}
                }
            }
        }
        None
    }

    /// Fail with [`Error::InvalidInput`] if the graph has a cycle.
    pub(crate) fn ensure_acyclic(&self) -> Result<()>
    where
        N: Display,
    {
        match self.find_cycle_path() {
            None => Ok(()),
            Some(path) => {
                debug!(length = path.len(), "rejecting cyclic graph");
                Err(Error::InvalidInput {
                    cycle: path.into_iter().map(|idx| self.nodes[idx].to_string()).collect(),
                })
            }
        }
    }
}
