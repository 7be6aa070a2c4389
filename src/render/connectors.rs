//! Connector painting and line assembly.

use super::canvas::Canvas;
use super::{BULLET, CORNER_UR, CROSS, H_LINE, ROUND_UR, TEE_RIGHT, TEE_UP, V_LINE};
use crate::error::Result;
use crate::graph::{CornerStyle, DAG};
use crate::layout::Layering;
use core::fmt::{Display, Write};
use tracing::debug;

impl CornerStyle {
    fn corner(self) -> char {
        match self {
            CornerStyle::Square => CORNER_UR,
            CornerStyle::Round => ROUND_UR,
        }
    }
}

impl<N: Display> DAG<N> {
    /// Render the DAG with its configured [`CornerStyle`].
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
    ///
    /// assert_eq!(dag.render().unwrap(), "• a\n├─• b\n└─• c");
    /// ```
    pub fn render(&self) -> Result<String> {
        let mut buf = String::with_capacity(self.estimate_size());
        self.render_to(&mut buf)?;
        Ok(buf)
    }

    /// Render the DAG into a provided buffer.
    ///
    /// Nothing is written when the graph is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use termdag::DAG;
    ///
    /// let dag = DAG::from_edges(&["A"], &[]);
    ///
    /// let mut buffer = String::new();
    /// dag.render_to(&mut buffer).unwrap();
    /// assert_eq!(buffer, "• A");
    /// ```
    pub fn render_to(&self, output: &mut String) -> Result<()> {
        self.render_styled_to(output, self.corner_style)
    }

    pub(crate) fn render_styled_to(&self, output: &mut String, style: CornerStyle) -> Result<()> {
        debug!(nodes = self.node_count(), edges = self.edge_count(), ?style, "rendering graph");
        self.ensure_acyclic()?;

        let layering = self.layering();
        let canvas = self.paint(&layering, style);

        for (row, &idx) in layering.order.iter().enumerate() {
            if row > 0 {
                output.push('\n');
            }
            canvas.write_row(row, output);
            output.push_str(BULLET);
            write_label(output, &self.nodes[idx]);
        }
        Ok(())
    }
}

impl<N> DAG<N> {
    /// Estimate the buffer size needed for rendering.
    ///
    /// Use this to pre-allocate a buffer for [`render_to`](Self::render_to).
    pub fn estimate_size(&self) -> usize {
        // Rough estimate: nodes * (label + bullet) + edges * connector run
        self.nodes.len() * 24 + self.edge_count * 12
    }

    /// Draw every node's trunk and branches onto a fresh canvas.
    fn paint(&self, layering: &Layering, style: CornerStyle) -> Canvas {
        let mut canvas = Canvas::new(layering.indents.iter().map(|indent| indent * 2));

        for (row, &idx) in layering.order.iter().enumerate() {
            let mut targets: Vec<usize> = self.children[idx]
                .iter()
                .map(|&child| layering.row_of[child])
                .collect();
            targets.sort_unstable();

            let Some((&last, branches)) = targets.split_last() else {
                continue;
            };
            let col = layering.indents[row] * 2;

            for between in row + 1..last {
                canvas.set(between, col, V_LINE);
            }

            for &target in branches {
                let glyph = match canvas.left_of(target, col) {
                    Some(H_LINE) => CROSS,
                    _ => TEE_RIGHT,
                };
                canvas.set(target, col, glyph);
                canvas.fill(target, col + 1..layering.indents[target] * 2, H_LINE);
            }

            let glyph = match canvas.left_of(last, col) {
                Some(H_LINE) => TEE_UP,
                _ => style.corner(),
            };
            canvas.set(last, col, glyph);
            canvas.fill(last, col + 1..layering.indents[last] * 2, H_LINE);
        }

        canvas
    }
}

/// Write a node's text with embedded newlines flattened to spaces.
fn write_label<N: Display>(output: &mut String, node: &N) {
    let start = output.len();
    write!(output, "{node}").ok();
    if output[start..].contains('\n') {
        let flattened = output[start..].replace('\n', " ");
        output.truncate(start);
        output.push_str(&flattened);
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{CornerStyle, DAG};

    #[test]
    fn test_empty_dag() {
        let dag: DAG<&str> = DAG::new();
        assert_eq!(dag.render().unwrap(), "");
    }

    #[test]
    fn test_single_edge() {
        let dag = DAG::from_edges(&["a", "b"], &[("a", "b")]);
        assert_eq!(dag.render().unwrap(), "• a\n└─• b");
    }

    #[test]
    fn test_single_edge_round() {
        let mut dag = DAG::from_edges(&["a", "b"], &[("a", "b")]);
        dag.set_corner_style(CornerStyle::Round);
        assert_eq!(dag.render().unwrap(), "• a\n╰─• b");
    }

    #[test]
    fn test_two_successors() {
        let dag = DAG::from_edges(&["a", "b", "c"], &[("a", "b"), ("a", "c")]);
        assert_eq!(dag.render().unwrap(), "• a\n├─• b\n└─• c");
    }

    #[test]
    fn test_isolated_nodes() {
        let dag = DAG::from_edges(&["x", "y"], &[]);
        assert_eq!(dag.render().unwrap(), "• x\n• y");
    }

    #[test]
    fn test_simple_chain() {
        let dag = DAG::from_edges(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        assert_eq!(dag.render().unwrap(), "• a\n└─• b\n  └─• c");
    }

    #[test]
    fn test_convergence_uses_tee_up() {
        let dag = DAG::from_edges(&["a", "b", "c"], &[("a", "c"), ("b", "c")]);
        let expected = ["• a", "│ • b", "└─┴─• c"].join("\n");
        assert_eq!(dag.render().unwrap(), expected);
    }

    #[test]
    fn test_branch_crossing_uses_cross() {
        let dag = DAG::from_edges(
            &["a", "b", "c", "d"],
            &[("a", "c"), ("a", "d"), ("b", "c"), ("b", "d")],
        );
        let expected = ["• a", "│ • b", "├─┼─• c", "└─┴───• d"].join("\n");
        assert_eq!(dag.render().unwrap(), expected);
    }

    #[test]
    fn test_diamond_trunk_overwrites_dash() {
        let dag = DAG::from_edges(
            &["top", "left", "right", "bottom"],
            &[("top", "left"), ("top", "right"), ("left", "bottom"), ("right", "bottom")],
        );
        let expected = ["• top", "├─• left", "└─│─• right", "  └─┴─• bottom"].join("\n");
        assert_eq!(dag.render().unwrap(), expected);
    }

    #[test]
    fn test_column_zero_never_crosses() {
        // Every glyph at column 0 belongs to a root; none may be a crossing form.
        let dag = DAG::from_edges(
            &["r", "s"],
            &[("r", "x"), ("r", "y"), ("s", "x"), ("s", "y"), ("r", "z")],
        );
        let output = dag.render().unwrap();
        for line in output.lines() {
            let first = line.chars().next().unwrap();
            assert!(first != '┼' && first != '┴', "{line:?}");
        }
    }

    #[test]
    fn test_component_rows_are_contiguous() {
        let dag = DAG::from_edges(&["r", "a", "b", "a2"], &[("r", "a"), ("r", "b"), ("a", "a2")]);
        let expected = ["• r", "├─• a", "│ └─• a2", "└─• b"].join("\n");
        assert_eq!(dag.render().unwrap(), expected);
    }

    #[test]
    fn test_newlines_in_labels_are_flattened() {
        let dag = DAG::from_edges(&["first\nline", "second"], &[("first\nline", "second")]);
        assert_eq!(dag.render().unwrap(), "• first line\n└─• second");
    }

    #[test]
    fn test_round_flips_only_corners() {
        let mut dag = DAG::from_edges(
            &[1, 2, 3, 4, 5],
            &[(1, 3), (1, 4), (2, 3), (2, 5), (3, 5), (4, 5)],
        );
        let square = dag.render().unwrap();
        dag.set_corner_style(CornerStyle::Round);
        let round = dag.render().unwrap();

        assert_eq!(square.chars().count(), round.chars().count());
        for (s, r) in square.chars().zip(round.chars()) {
            match s {
                '└' => assert_eq!(r, '╰'),
                _ => assert_eq!(r, s),
            }
        }
        assert!(round.contains('╰'));
    }

    #[test]
    fn test_render_is_idempotent() {
        let dag = DAG::from_edges(&[], &[(1, 2), (1, 3), (3, 4), (2, 4), (5, 4)]);
        assert_eq!(dag.render().unwrap(), dag.render().unwrap());
    }

    #[test]
    fn test_one_line_per_node() {
        let dag = DAG::from_edges(
            &["n0", "n1", "n2", "n3", "n4", "n5"],
            &[("n0", "n2"), ("n1", "n2"), ("n2", "n3"), ("n0", "n4"), ("n5", "n5x")],
        );
        let output = dag.render().unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), dag.node_count());
        for node in dag.nodes() {
            let suffix = format!("• {node}");
            assert_eq!(lines.iter().filter(|l| l.ends_with(&suffix)).count(), 1, "{node}");
        }
    }

    #[test]
    fn test_cycle_writes_nothing() {
        let dag = DAG::from_edges(&["a", "b"], &[("a", "b"), ("b", "a")]);
        let mut buffer = String::new();

        let err = dag.render_to(&mut buffer).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(buffer.is_empty());
    }
}
