//! Renders a crate build graph with owned node labels, then shows the
//! placements the layout picked.

use std::fmt;
use termdag::DAG;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Step {
    name: &'static str,
    secs: u32,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}s)", self.name, self.secs)
    }
}

fn step(name: &'static str, secs: u32) -> Step {
    Step { name, secs }
}

fn main() -> Result<(), termdag::Error> {
    tracing_subscriber::fmt::init();

    let fetch = step("fetch", 3);
    let codegen = step("codegen", 2);
    let core = step("build core", 41);
    let cli = step("build cli", 12);
    let docs = step("docs", 9);
    let test = step("test", 30);
    let package = step("package", 4);

    let mut dag = DAG::new();
    dag.add_edge(fetch.clone(), core.clone());
    dag.add_edge(codegen.clone(), core.clone());
    dag.add_edge(core.clone(), cli.clone());
    dag.add_edge(core.clone(), docs.clone());
    dag.add_edge(core.clone(), test.clone());
    dag.add_edge(cli.clone(), package.clone());
    dag.add_edge(test, package);
    dag.add_node(step("lint", 5));

    println!("{}\n", termdag::render(&dag, true)?);

    for placement in dag.layout()? {
        println!(
            "row {:>2}  indent {:>2}  {}",
            placement.row, placement.indent, placement.node
        );
    }
    Ok(())
}
