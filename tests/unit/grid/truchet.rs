//! Tests for grid configuration, construction and tile access

#[cfg(test)]
mod tests {
    use truchet::geometry::Orientation;
    use truchet::grid::{GridConfig, PathId, TruchetGrid};
    use truchet::io::configuration::{DEFAULT_HEIGHT, DEFAULT_SEED_LABEL, DEFAULT_WIDTH};
    use truchet::random::{ScriptedSource, SeededRandom};

    fn path_table(grid: &TruchetGrid) -> Vec<Vec<[u64; 2]>> {
        grid.columns()
            .map(|column| {
                column
                    .iter()
                    .map(|tile| tile.paths().map(PathId::get))
                    .collect()
            })
            .collect()
    }

    // Tests the hand-traced 3x3 all-LeftDown grid
    // Verified by tracing forward only from each origin
    #[test]
    fn test_all_left_down_3x3_labels() {
        let mut rng = ScriptedSource::minimum();
        let grid = TruchetGrid::new(GridConfig::new(3, 3, false), &mut rng);

        assert!(
            grid.tiles()
                .iter()
                .all(|tile| tile.orientation() == Orientation::LeftDown)
        );
        assert_eq!(
            path_table(&grid),
            vec![
                vec![[1, 2], [5, 1], [9, 5]],
                vec![[2, 14], [1, 2], [5, 1]],
                vec![[14, 26], [2, 14], [1, 2]],
            ]
        );
    }

    // Tests straight tiles in a row share the horizontal path
    // Verified by ignoring the crossing orientation draw
    #[test]
    fn test_crossing_row_labels() {
        let mut rng = ScriptedSource::new([2]);
        let grid = TruchetGrid::new(GridConfig::new(3, 1, true), &mut rng);

        assert_eq!(
            path_table(&grid),
            vec![vec![[1, 2]], vec![[1, 6]], vec![[1, 10]]]
        );
    }

    // Tests a zero dimension yields an empty grid without any draws
    // Verified by drawing orientations before checking dimensions
    #[test]
    fn test_zero_dimension_is_empty() {
        for (width, height) in [(0, 0), (0, 5), (5, 0)] {
            let mut rng = ScriptedSource::minimum();
            let grid = TruchetGrid::new(GridConfig::new(width, height, true), &mut rng);

            assert!(grid.is_empty());
            assert_eq!(rng.served(), 0);
            assert!(grid.tile(0, 0).is_none());
            assert_eq!(grid.path_count(), 0);
            assert_eq!(grid.columns().filter(|column| !column.is_empty()).count(), 0);
        }
    }

    // Tests crossing tiles never appear when crossings are disabled
    // Verified by drawing from 0..=2 regardless of the flag
    #[test]
    fn test_cross_disabled_never_draws_crossing() {
        let mut rng = ScriptedSource::new([2, 5, 0, 1, 9, 2]);
        let grid = TruchetGrid::new(GridConfig::new(6, 6, false), &mut rng);

        assert!(
            grid.tiles()
                .iter()
                .all(|tile| !tile.orientation().is_crossing())
        );
        assert_eq!(rng.served(), 36);
    }

    // Tests orientations are drawn column by column
    // Verified by drawing rows in the outer loop
    #[test]
    fn test_draw_order_is_column_major() {
        let mut rng = ScriptedSource::new([0, 1, 0, 0]);
        let grid = TruchetGrid::new(GridConfig::new(2, 2, false), &mut rng);

        assert_eq!(
            grid.tile(0, 1).map(|tile| tile.orientation()),
            Some(Orientation::LeftUp)
        );
        assert_eq!(
            grid.tile(1, 0).map(|tile| tile.orientation()),
            Some(Orientation::LeftDown)
        );
        assert_eq!(
            grid.orientations().get((0, 1)),
            Some(&Orientation::LeftUp)
        );
    }

    // Tests identical sources build identical grids
    // Verified by seeding the default source from a counter
    #[test]
    fn test_construction_is_deterministic() {
        let config = GridConfig::new(9, 7, true);

        let first = TruchetGrid::new(config, &mut SeededRandom::new("same"));
        let second = TruchetGrid::new(config, &mut SeededRandom::new("same"));
        assert_eq!(first.tiles(), second.tiles());
        assert_eq!(first.orientations(), second.orientations());

        let draws = [1, 0, 2, 2, 1, 0, 1];
        let scripted_first = TruchetGrid::new(config, &mut ScriptedSource::new(draws));
        let scripted_second = TruchetGrid::new(config, &mut ScriptedSource::new(draws));
        assert_eq!(scripted_first.tiles(), scripted_second.tiles());
    }

    // Tests tile and column lookups respect the grid bounds
    // Verified by omitting the column bound check
    #[test]
    fn test_tile_lookup_bounds() {
        let grid = TruchetGrid::new(GridConfig::new(4, 3, false), &mut ScriptedSource::minimum());

        assert_eq!((grid.width(), grid.height()), (4, 3));
        assert_eq!(grid.tiles().len(), 12);
        assert_eq!(grid.column(1).map(<[_]>::len), Some(3));
        assert!(grid.column(4).is_none());
        assert!(grid.tile(4, 0).is_none());
        assert!(grid.tile(0, 3).is_none());
        assert_eq!(grid.tile(3, 2).map(|tile| (tile.x(), tile.y())), Some((3, 2)));
        assert_eq!(grid.columns().count(), 4);
        assert_eq!(grid.orientations().dim(), (4, 3));
    }

    // Tests every tile agrees with the orientation array
    // Verified by transposing the orientation array
    #[test]
    fn test_orientation_array_matches_tiles() {
        let grid = TruchetGrid::new(GridConfig::new(5, 3, true), &mut SeededRandom::from_seed(3));

        for tile in grid.tiles() {
            assert_eq!(
                grid.orientations().get((tile.x(), tile.y())),
                Some(&tile.orientation())
            );
        }
    }

    // Tests defaults for configuration and the default source
    // Verified by seeding the default source from a different label
    #[test]
    fn test_defaults() {
        let config = GridConfig::default();
        assert_eq!(config, GridConfig::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, false));
        assert_eq!(config.tile_count(), DEFAULT_WIDTH * DEFAULT_HEIGHT);

        let default_grid = TruchetGrid::with_default_source(config);
        let labeled = TruchetGrid::new(config, &mut SeededRandom::new(DEFAULT_SEED_LABEL));
        assert_eq!(default_grid.tiles(), labeled.tiles());
        assert_eq!(default_grid.config(), config);
        assert!(!default_grid.allow_cross());
    }
}
