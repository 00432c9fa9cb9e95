//! Property tests for the grid engine invariants.

use proptest::prelude::*;

use rust_match3::{
    detect_matches, generate_grid, resolve_cascade, validate_swap, Cell, CycleSource, Detection,
    EngineConfig, GameRng, Grid, Position, Resolver, TileKind,
};

/// Square grid of basic tiles drawn from `kinds` kinds.
fn arb_grid(kinds: u8) -> impl Strategy<Value = Grid> {
    (3usize..=8).prop_flat_map(move |size| {
        prop::collection::vec(0..kinds, size * size).prop_map(move |cells| {
            Grid::from_fn(size, |pos| Cell::basic(cells[pos.row * size + pos.col]))
        })
    })
}

/// A position and a direction (right or down) whose neighbour is in bounds.
fn arb_adjacent_pair(size: usize) -> impl Strategy<Value = (Position, Position)> {
    (0..size, 0..size, any::<bool>()).prop_map(move |(row, col, horizontal)| {
        let a = Position::new(row, col);
        let b = if horizontal {
            Position::new(row, if col + 1 < size { col + 1 } else { col - 1 })
        } else {
            Position::new(if row + 1 < size { row + 1 } else { row - 1 }, col)
        };
        (a, b)
    })
}

proptest! {
    #[test]
    fn prop_generated_grids_have_no_matches(seed in any::<u64>(), size in 3usize..=10) {
        let config = EngineConfig::default().with_grid_size(size);
        let grid = generate_grid(&config, &mut GameRng::new(seed)).unwrap();
        prop_assert_eq!(grid.size(), size);
        prop_assert!(detect_matches(&grid).is_empty());
    }

    #[test]
    fn prop_detection_is_idempotent(grid in arb_grid(3)) {
        let first = detect_matches(&grid);
        let second = detect_matches(&grid);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_directives_anchor_on_matched_cells(grid in arb_grid(2)) {
        let detection = detect_matches(&grid);
        for directive in &detection.directives {
            prop_assert!(detection.matched.contains(directive.position));
        }
    }

    #[test]
    fn prop_rejected_swap_restores_grid(
        (grid, (a, b)) in arb_grid(4).prop_flat_map(|g| {
            let size = g.size();
            (Just(g), arb_adjacent_pair(size))
        })
    ) {
        let mut working = grid.clone();
        let accepted = validate_swap(&mut working, a, b).unwrap();
        if accepted {
            prop_assert!(!detect_matches(&working).is_empty());
        } else {
            prop_assert_eq!(working, grid);
        }
    }

    #[test]
    fn prop_single_pass_keeps_survivor_order(grid in arb_grid(3), seed in any::<u64>()) {
        let detection = Detection {
            matched: detect_matches(&grid).matched,
            directives: Default::default(),
        };
        let resolver = Resolver::new(&EngineConfig::default());
        let mut after = grid.clone();
        resolver
            .remove_and_refill(&mut after, &detection, &mut GameRng::new(seed))
            .unwrap();

        prop_assert!(!after.has_empty());
        for col in 0..grid.size() {
            let survivors: Vec<Cell> = (0..grid.size())
                .map(|row| Position::new(row, col))
                .filter(|pos| !detection.matched.contains(*pos))
                .map(|pos| grid[pos])
                .collect();
            let settled: Vec<Cell> = after.column(col).skip(grid.size() - survivors.len()).collect();
            prop_assert_eq!(settled, survivors);
        }
    }

    #[test]
    fn prop_cascade_reaches_fixed_point(grid in arb_grid(5), seed in any::<u64>()) {
        let config = EngineConfig::default();
        let mut working = grid;
        let detection = detect_matches(&working);
        let first = detection.match_count();

        let report = resolve_cascade(&mut working, detection, &config, &mut GameRng::new(seed)).unwrap();

        prop_assert!(!working.has_empty());
        prop_assert!(detect_matches(&working).is_empty());
        prop_assert!(report.total_matched >= first);
        prop_assert_eq!(
            report.total_matched,
            report.passes.iter().map(|p| p.matched).sum::<usize>()
        );
    }

    #[test]
    fn prop_scripted_refill_is_reproducible(grid in arb_grid(3)) {
        let config = EngineConfig::default().with_max_cascade_passes(1_000);
        let script: Vec<TileKind> = (0..7u8).map(TileKind).collect();

        let mut a = grid.clone();
        let mut b = grid;
        let ma = detect_matches(&a);
        let ra = resolve_cascade(&mut a, ma, &config, &mut CycleSource::new(script.clone()));
        let mb = detect_matches(&b);
        let rb = resolve_cascade(&mut b, mb, &config, &mut CycleSource::new(script));

        prop_assert_eq!(ra, rb);
        prop_assert_eq!(a, b);
    }
}
