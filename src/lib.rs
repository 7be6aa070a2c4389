//! # termdag
//!
//! Staircase renderer for directed acyclic graphs: one terminal line per
//! node, with box-drawing connectors from each node down to its successors.
//!
//! ## Features
//!
//! - **Deterministic**: layout depends only on node and edge insertion order
//! - **Total**: every acyclic graph renders; cycles are rejected up front
//! - **Pure**: no global state, nothing kept between calls
//!
//! ## Quick Start
//!
//! ```rust
//! use termdag::DAG;
//!
//! let dag = DAG::from_edges(
//!     &["fetch", "compile", "test", "lint"],
//!     &[("fetch", "compile"), ("compile", "test"), ("fetch", "lint")],
//! );
//!
//! println!("{}", dag.render().unwrap());
//! ```
//!
//! Output:
//!
//! ```text
//! • fetch
//! ├─• compile
//! │ └─• test
//! └─• lint
//! ```
//!
//! ## Layout
//!
//! Each weakly-connected component is peeled one layer of sources at a time.
//! Sources in a layer take consecutive rows and step one indent further right
//! each; whatever remains is split into components again and continues from
//! the next indent. See [`DAG::layout`].

pub mod cycles;
pub mod error;
pub mod graph;
pub mod layout;
mod render;

pub use error::{Error, Result};
pub use graph::{CornerStyle, DAG};
pub use layout::Placement;

use core::fmt::Display;

/// Render `dag`, using `╰` instead of `└` for trunk ends when `round_angle` is set.
///
/// # Errors
///
/// [`Error::InvalidInput`] if the graph has a cycle.
///
/// # Examples
///
/// ```
/// use termdag::DAG;
///
/// let dag = DAG::from_edges(&["a", "b"], &[("a", "b")]);
/// assert_eq!(termdag::render(&dag, true).unwrap(), "• a\n╰─• b");
///
/// let cyclic = DAG::from_edges(&["a", "b"], &[("a", "b"), ("b", "a")]);
/// assert!(termdag::render(&cyclic, false).unwrap_err().is_invalid_input());
/// ```
pub fn render<N: Display>(dag: &DAG<N>, round_angle: bool) -> Result<String> {
    let mut buf = String::with_capacity(dag.estimate_size());
    dag.render_styled_to(&mut buf, CornerStyle::from_round_angle(round_angle))?;
    Ok(buf)
}
