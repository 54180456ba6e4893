//! Tests for path identifiers and completed tiles

#[cfg(test)]
mod tests {
    use truchet::geometry::{Orientation, PathSlot, Side};
    use truchet::grid::{GridConfig, PathId, TruchetGrid};
    use truchet::random::ScriptedSource;

    fn id(value: u64) -> Option<PathId> {
        PathId::new(value)
    }

    // Tests zero is not a valid path identifier
    // Verified by wrapping zero without the check
    #[test]
    fn test_path_id_rejects_zero() {
        assert!(PathId::new(0).is_none());
        assert_eq!(PathId::new(7).map(PathId::get), Some(7));
        assert_eq!(PathId::FIRST.get(), 1);
    }

    // Tests identifiers order and display numerically
    // Verified by displaying the debug form
    #[test]
    fn test_path_id_ordering_and_display() {
        assert!(id(2) < id(10));
        assert_eq!(id(42).map(|path| path.to_string()), Some("42".to_string()));
    }

    // Tests tile accessors on a single LeftUp tile
    // Verified by reading the second slot from the first path
    #[test]
    fn test_tile_accessors() {
        let mut rng = ScriptedSource::new([1]);
        let grid = TruchetGrid::new(GridConfig::new(1, 1, false), &mut rng);
        let Some(tile) = grid.tile(0, 0) else {
            unreachable!("1x1 grid must contain tile (0, 0)");
        };

        assert_eq!((tile.x(), tile.y()), (0, 0));
        assert_eq!(tile.orientation(), Orientation::LeftUp);
        assert_eq!(tile.paths().map(PathId::get), [1, 3]);
        assert_eq!(Some(tile.path(PathSlot::First)), id(1));
        assert_eq!(Some(tile.path(PathSlot::Second)), id(3));
    }

    // Tests side lookup resolves through the slot table
    // Verified by always answering with the first slot
    #[test]
    fn test_path_for_side() {
        let mut rng = ScriptedSource::new([1]);
        let grid = TruchetGrid::new(GridConfig::new(1, 1, false), &mut rng);
        let Some(tile) = grid.tile(0, 0) else {
            unreachable!("1x1 grid must contain tile (0, 0)");
        };

        assert_eq!(Some(tile.path_for_side(Side::Left)), id(1));
        assert_eq!(Some(tile.path_for_side(Side::Top)), id(1));
        assert_eq!(Some(tile.path_for_side(Side::Right)), id(3));
        assert_eq!(Some(tile.path_for_side(Side::Bottom)), id(3));
        assert_eq!(tile.sides(PathSlot::Second), [Side::Right, Side::Bottom]);
    }
}
