//! Staircase text rendering for DAG visualization.
//!
//! The connector pass walks rows top to bottom. Every node with successors
//! drops a trunk from its own column to its farthest successor's row and
//! branches right into each successor's line.

mod canvas;
mod connectors;

// Box drawing characters (Unicode)
pub(crate) const V_LINE: char = '│';
pub(crate) const H_LINE: char = '─';
pub(crate) const TEE_RIGHT: char = '├'; // Branch off a trunk
pub(crate) const CROSS: char = '┼'; // Branch crossing another branch's dash run
pub(crate) const TEE_UP: char = '┴'; // Trunk end meeting another dash run
pub(crate) const CORNER_UR: char = '└'; // Up-Right corner
pub(crate) const ROUND_UR: char = '╰'; // Rounded Up-Right corner

/// Marker written before each node's text.
pub(crate) const BULLET: &str = "• ";
