use atc_core::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Create the graph with the built-in routes
    let g = RouteGraph::with_default_routes()?;

    let service = PathQueryService::new(&g);

    for (start, end) in [("A", "F"), ("A", "D"), ("B", "B"), ("Z", "A")] {
        let result = service.query(start, end);
        println!("[{}]\n{}\n", result.title(), result);
    }

    let routes = g.list_routes();
    let listing = RouteListing(&routes);
    println!("[{}]\n{}", listing.title(), listing);

    Ok(())
}
