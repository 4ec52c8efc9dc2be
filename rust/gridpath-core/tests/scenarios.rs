use gridpath_core::{run, run_all, Coord, Grid, GridError, SearchOptions, Strategy, TerminationReason};

fn grid(rows: Vec<Vec<u32>>, start: (usize, usize), goal: (usize, usize)) -> Grid {
    Grid::from_rows(rows, Coord::from(start), Coord::from(goal)).expect("grid")
}

#[test]
fn open_three_by_three_reaches_goal_in_five_cells() {
    let g = grid(vec![vec![1; 3]; 3], (0, 0), (2, 2));
    for r in run_all(&g, &SearchOptions::default()).unwrap() {
        assert_eq!(r.termination, TerminationReason::GoalReached, "{}", r.strategy);
        assert!(r.path_found);
        assert_eq!(r.path.len(), 5, "{}", r.strategy);
        assert_eq!(r.path.first(), Some(&Coord::new(0, 0)));
        assert_eq!(r.path.last(), Some(&Coord::new(2, 2)));
        assert_eq!(r.total_cost, 5, "{}", r.strategy);
    }
}

#[test]
fn impassable_middle_row_exhausts_every_strategy() {
    let g = grid(vec![vec![1, 1, 1], vec![0, 0, 0], vec![1, 1, 1]], (0, 0), (2, 2));
    for r in run_all(&g, &SearchOptions::default()).unwrap() {
        assert_eq!(r.termination, TerminationReason::FrontierExhausted, "{}", r.strategy);
        assert!(!r.path_found);
        assert!(r.path.is_empty());
        assert_eq!(r.total_cost, 0);
    }
}

#[test]
fn zero_budget_expires_after_the_start_node() {
    let g = grid(vec![vec![1; 3]; 3], (0, 0), (2, 2));
    let opts = SearchOptions { budget_ms: 0, ..Default::default() };
    for strategy in Strategy::ALL {
        let r = run(&g, strategy, &opts).unwrap();
        assert_eq!(r.termination, TerminationReason::DeadlineExceeded, "{strategy}");
        assert_eq!(r.nodes_expanded, 1, "{strategy}");
        assert!(r.path.is_empty());
    }
}

#[test]
fn impassable_start_or_goal_exhausts_immediately() {
    let blocked_start = grid(vec![vec![0, 1], vec![1, 1]], (0, 0), (1, 1));
    let blocked_goal = grid(vec![vec![1, 1], vec![1, 0]], (0, 0), (1, 1));
    for g in [blocked_start, blocked_goal] {
        for r in run_all(&g, &SearchOptions::default()).unwrap() {
            assert_eq!(r.termination, TerminationReason::FrontierExhausted, "{}", r.strategy);
            assert_eq!(r.nodes_expanded, 0);
        }
    }
}

#[test]
fn start_equal_to_goal_is_a_one_cell_route() {
    let g = grid(vec![vec![4, 1], vec![1, 1]], (0, 0), (0, 0));
    for r in run_all(&g, &SearchOptions::default()).unwrap() {
        assert!(r.reached_goal());
        assert_eq!(r.path, vec![Coord::new(0, 0)]);
        assert_eq!(r.total_cost, 4);
        assert_eq!(r.nodes_expanded, 1);
    }
}

#[test]
fn weighted_costs_are_summed_along_the_route() {
    let g = grid(vec![vec![1, 5], vec![2, 3]], (0, 0), (1, 1));
    for r in run_all(&g, &SearchOptions::default()).unwrap() {
        assert!(r.reached_goal());
        let expected: u64 = r.path.iter().map(|&c| u64::from(g.terrain_cost(c).unwrap())).sum();
        assert_eq!(r.total_cost, expected);
    }
}

#[test]
fn best_first_takes_the_cheap_side() {
    let g = grid(vec![vec![1, 5], vec![2, 3]], (0, 0), (1, 1));
    let r = run(&g, Strategy::BestFirst, &SearchOptions::default()).unwrap();
    assert_eq!(r.path, vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(1, 1)]);
    assert_eq!(r.total_cost, 6);
}

#[test]
fn out_of_bounds_endpoints_are_rejected_at_construction() {
    let err = Grid::from_rows(vec![vec![1; 2]; 2], Coord::new(0, 0), Coord::new(0, 5)).unwrap_err();
    assert_eq!(err, GridError::OutOfBounds { coord: Coord::new(0, 5), rows: 2, cols: 2 });
}
