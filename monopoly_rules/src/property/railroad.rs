//! Railroad rent: the base rent doubles for each further railroad the owner holds.

use crate::board::Board;
use crate::player::PlayerId;

/// `base * 2^(n-1)` where `n` is the number of railroads `owner` holds.
pub(crate) fn rent(owner: PlayerId, board: &Board) -> u32 {
    let owned = board.railroads().filter(|p| p.is_owned_by(owner)).count();
    let doublings = u32::try_from(owned.saturating_sub(1)).unwrap_or(u32::MAX);
    board
        .rent_rules()
        .railroad_base_rent
        .saturating_mul(2u32.saturating_pow(doublings))
}
