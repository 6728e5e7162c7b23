/// Fuzzes both solvers on many random grids. Completeness is checked against the connected
/// components of the grid and breadth-first optimality against petgraph's Dijkstra.
use grid_traversal::{run_traversal, Algorithm, CellType, Grid, RowCol, TraversalResult};
use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use itertools::Itertools;
use petgraph::algo::dijkstra;
use petgraph::graph::{NodeIndex, UnGraph};
use rand::prelude::*;

const ALGORITHMS: [Algorithm; 2] = [Algorithm::BreadthFirst, Algorithm::DepthFirst];

fn random_grid(rows: usize, cols: usize, rng: &mut StdRng, wall_chance: f64) -> Grid {
    let mut grid = Grid::new(rows, cols);
    for coord in grid.coords().collect::<Vec<_>>() {
        if rng.gen_bool(wall_chance) {
            grid.set_point(coord, CellType::Wall);
        }
    }
    grid
}

fn corners(grid: &Grid) -> (Point, Point) {
    (
        Point::at(0, 0),
        Point::at(grid.rows() as i32 - 1, grid.cols() as i32 - 1),
    )
}

fn with_endpoints(mut grid: Grid, start: Point, end: Point) -> Grid {
    grid.set_point(start, CellType::Start);
    grid.set_point(end, CellType::End);
    grid
}

fn visualize_grid(grid: &Grid, result: &TraversalResult) {
    let mut grid = grid.clone();
    for p in result.path() {
        if !grid.get_point(*p).is_endpoint() {
            grid.set_point(*p, CellType::Path);
        }
    }
    println!("{}", grid);
}

/// Graph distance between `start` and `end`, computed on an explicit graph of the grid.
fn oracle_distance(grid: &Grid, start: Point, end: Point) -> Option<usize> {
    let mut graph: UnGraph<Point, ()> = UnGraph::new_undirected();
    let nodes = grid
        .coords()
        .map(|c| graph.add_node(c))
        .collect::<Vec<NodeIndex>>();
    let ix = |c: Point| c.y as usize * grid.cols() + c.x as usize;
    for c in grid.coords().filter(|c| grid.is_passable(*c)) {
        for n in [Point::new(c.x + 1, c.y), Point::new(c.x, c.y + 1)] {
            if grid.is_passable(n) {
                graph.add_edge(nodes[ix(c)], nodes[ix(n)], ());
            }
        }
    }
    let distances = dijkstra(&graph, nodes[ix(start)], Some(nodes[ix(end)]), |_| 1usize);
    distances.get(&nodes[ix(end)]).copied()
}

fn assert_sound(grid: &Grid, result: &TraversalResult, start: Point, end: Point) {
    let path = result.path();
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&end));
    assert!(path
        .iter()
        .tuple_windows()
        .all(|(a, b)| a.manhattan_distance(b) == 1));
    assert!(path.iter().all(|p| grid.get_point(*p) != CellType::Wall));
    assert!(path.iter().all_unique());
}

#[test]
fn fuzz() {
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for (rows, cols) in [(5, 5), (10, 10), (8, 20)] {
        for _ in 0..N_GRIDS {
            let grid = random_grid(rows, cols, &mut rng, 0.35);
            let (start, end) = corners(&grid);
            let grid = with_endpoints(grid, start, end);
            let reachable = grid.components().reachable(&start, &end);
            for algorithm in ALGORITHMS {
                let result = run_traversal(&grid, start, end, algorithm);
                // Show the grid if the search disagrees with the components
                if result.found() != reachable {
                    visualize_grid(&grid, &result);
                }
                assert_eq!(result.found(), reachable);
                if result.found() {
                    assert_sound(&grid, &result, start, end);
                } else {
                    assert!(result.path().is_empty());
                }
                assert!(!result.visited().contains(&start));
                assert!(result.visited().iter().all_unique());
                assert!(result
                    .visited()
                    .iter()
                    .all(|c| grid.get_point(*c) != CellType::Wall));
            }
        }
    }
}

#[test]
fn fuzz_distance() {
    const N_GRIDS: usize = 5000;
    let mut rng = StdRng::seed_from_u64(0);
    for n in [5, 6] {
        for _ in 0..N_GRIDS {
            let grid = random_grid(n, n, &mut rng, 0.3);
            let start = Point::at(rng.gen_range(0..n as i32), rng.gen_range(0..n as i32));
            let end = Point::at(rng.gen_range(0..n as i32), rng.gen_range(0..n as i32));
            let mut grid = grid;
            grid.set_point(start, CellType::Empty);
            grid.set_point(end, CellType::Empty);
            let expected = oracle_distance(&grid, start, end);
            let result = run_traversal(&grid, start, end, Algorithm::BreadthFirst);
            if result.edge_count() != expected {
                println!("Oracle distance: {expected:?}; BFS: {:?}", result.edge_count());
                visualize_grid(&grid, &result);
            }
            assert_eq!(result.edge_count(), expected);

            let depth_first = run_traversal(&grid, start, end, Algorithm::DepthFirst);
            assert_eq!(depth_first.found(), expected.is_some());
            if let (Some(dfs), Some(shortest)) = (depth_first.edge_count(), expected) {
                assert!(dfs >= shortest);
            }
        }
    }
}

#[test]
fn fuzz_determinism() {
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..N_GRIDS {
        let grid = random_grid(12, 16, &mut rng, 0.3);
        let (start, end) = corners(&grid);
        let grid = with_endpoints(grid, start, end);
        for algorithm in ALGORITHMS {
            let first = run_traversal(&grid, start, end, algorithm);
            let second = run_traversal(&grid.clone(), start, end, algorithm);
            assert_eq!(first, second);
        }
    }
}
