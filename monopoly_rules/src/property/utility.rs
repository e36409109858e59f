//! Utility rent: a multiplier applied to the visitor's dice total.

use crate::board::Board;
use crate::player::PlayerId;

/// The dice multiplier for a utility held by `owner`.
///
/// Holding every utility on the board (both, on the standard board) earns the
/// higher factor.
pub(crate) fn factor(owner: PlayerId, board: &Board) -> u32 {
    let (owned, total) = board.utilities().fold((0usize, 0usize), |(owned, total), p| {
        (owned + usize::from(p.is_owned_by(owner)), total + 1)
    });

    let rules = board.rent_rules();
    if total > 1 && owned == total {
        rules.utility_monopoly_factor
    } else {
        rules.utility_single_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_for_one_and_both() {
        let mut board = Board::standard();
        let owner = PlayerId::new();

        let electric = board.id_of("Electric Company").unwrap();
        let water = board.id_of("Water Works").unwrap();

        board.get_mut(electric).unwrap().set_owner(Some(owner)).unwrap();
        assert_eq!(factor(owner, &board), 4);

        board.get_mut(water).unwrap().set_owner(Some(owner)).unwrap();
        assert_eq!(factor(owner, &board), 10);
    }

    #[test]
    fn test_split_utilities() {
        let mut board = Board::standard();
        let alice = PlayerId::new();
        let bob = PlayerId::new();

        let electric = board.id_of("Electric Company").unwrap();
        let water = board.id_of("Water Works").unwrap();
        board.get_mut(electric).unwrap().set_owner(Some(alice)).unwrap();
        board.get_mut(water).unwrap().set_owner(Some(bob)).unwrap();

        assert_eq!(factor(alice, &board), 4);
        assert_eq!(factor(bob, &board), 4);
    }
}
