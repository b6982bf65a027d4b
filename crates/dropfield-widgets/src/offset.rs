//! Circular keyboard navigation over the dropdown.

/// Direction of a highlight move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// The index highlighted after moving one step from `current` over `count`
/// options.
///
/// Wraps only at the exact ends of the list: up from the first row (or from
/// no selection) lands on the last, down from the last lands on the first.
/// Down from no selection lands on the first row. An empty list has nothing
/// to highlight.
pub fn offset(current: Option<usize>, direction: Direction, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    let next = match (direction, current) {
        (Direction::Up, None | Some(0)) => last,
        (Direction::Up, Some(c)) => c.min(count) - 1,
        (Direction::Down, Some(c)) if c >= last => 0,
        (Direction::Down, Some(c)) => c + 1,
        (Direction::Down, None) => 0,
    };
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn down_from_nothing_is_first() {
        assert_eq!(offset(None, Direction::Down, 3), Some(0));
    }

    #[test]
    fn up_from_nothing_is_last() {
        assert_eq!(offset(None, Direction::Up, 3), Some(2));
    }

    #[test]
    fn wraps_at_exact_bounds() {
        assert_eq!(offset(Some(0), Direction::Up, 3), Some(2));
        assert_eq!(offset(Some(2), Direction::Down, 3), Some(0));
    }

    #[test]
    fn steps_inside_the_list() {
        assert_eq!(offset(Some(0), Direction::Down, 3), Some(1));
        assert_eq!(offset(Some(1), Direction::Down, 3), Some(2));
        assert_eq!(offset(Some(2), Direction::Up, 3), Some(1));
    }

    #[test]
    fn single_option_stays_put() {
        assert_eq!(offset(Some(0), Direction::Down, 1), Some(0));
        assert_eq!(offset(Some(0), Direction::Up, 1), Some(0));
        assert_eq!(offset(None, Direction::Down, 1), Some(0));
    }

    #[test]
    fn empty_list_has_no_highlight() {
        assert_eq!(offset(None, Direction::Down, 0), None);
        assert_eq!(offset(Some(4), Direction::Up, 0), None);
    }

    #[test]
    fn stale_index_lands_back_in_range() {
        // List shrank from 10 to 3 options while index 7 was highlighted.
        assert_eq!(offset(Some(7), Direction::Up, 3), Some(2));
        assert_eq!(offset(Some(7), Direction::Down, 3), Some(0));
    }

    proptest! {
        #[test]
        fn full_cycle_returns_to_start(count in 1usize..64, start_seed in any::<usize>(), down in any::<bool>()) {
            let start = start_seed % count;
            let direction = if down { Direction::Down } else { Direction::Up };
            let mut idx = Some(start);
            for _ in 0..count {
                idx = offset(idx, direction, count);
                prop_assert!(idx.is_some_and(|i| i < count));
            }
            prop_assert_eq!(idx, Some(start));
        }
    }
}
