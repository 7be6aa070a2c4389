use termdag::{CornerStyle, DAG};

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Basic Usage Examples ===\n");

    // Example 1: Simple chain
    println!("1. Simple Chain (A -> B -> C):");
    let dag = DAG::from_edges(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
    print_dag(&dag);

    // Example 2: Diamond pattern
    println!("2. Diamond Pattern:");
    let dag = DAG::from_edges(
        &["Root", "Left", "Right", "Merge"],
        &[("Root", "Left"), ("Root", "Right"), ("Left", "Merge"), ("Right", "Merge")],
    );
    print_dag(&dag);

    // Example 3: Builder API with rounded corners
    println!("3. Builder API (rounded corners):");
    let mut dag = DAG::with_style(CornerStyle::Round);
    dag.add_node("Parse");
    dag.add_node("Compile");
    dag.add_node("Link");
    dag.add_edge("Parse", "Compile");
    dag.add_edge("Compile", "Link");
    print_dag(&dag);

    // Example 4: Multi-convergence
    println!("4. Multi-Convergence:");
    let dag = DAG::from_edges(
        &["E1", "E2", "E3", "Final"],
        &[("E1", "Final"), ("E2", "Final"), ("E3", "Final")],
    );
    print_dag(&dag);

    // Example 5: Cycles are rejected
    println!("5. Cycle:");
    let dag = DAG::from_edges(&["A", "B"], &[("A", "B"), ("B", "A")]);
    print_dag(&dag);
}

fn print_dag(dag: &DAG<&str>) {
    match dag.render() {
        Ok(text) => println!("{text}\n"),
        Err(e) => println!("error: {e}\n"),
    }
}
