//! Attack detection by pseudo-legal reach.
//!
//! A square is attacked by a side when it lies in the union of that side's
//! pieces' shape-legal destinations (castling excluded). Empty-square reach
//! and capture reach both count; a pawn therefore "attacks" the squares it
//! could advance to but not an empty diagonal.

use crate::game_state::chess_types::{Position, Side, Square};
use crate::moves::piece_catalog::reach_into;

/// Set of squares reached by one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackMap {
    squares: [bool; 64],
}

impl AttackMap {
    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        self.squares[square.index()]
    }

    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(|sq| self.contains(*sq))
    }

    pub fn len(&self) -> usize {
        self.squares.iter().filter(|x| **x).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn attack_map(position: &Position, attacker: Side) -> AttackMap {
    let mut squares = [false; 64];
    let mut buffer = Vec::with_capacity(32);
    for id in position.roster(attacker) {
        buffer.clear();
        reach_into(position, *id, &mut buffer);
        for sq in &buffer {
            squares[sq.index()] = true;
        }
    }
    AttackMap { squares }
}

pub fn is_square_attacked(position: &Position, square: Square, attacker: Side) -> bool {
    let mut buffer = Vec::with_capacity(32);
    position.roster(attacker).iter().any(|id| {
        buffer.clear();
        reach_into(position, *id, &mut buffer);
        buffer.contains(&square)
    })
}

#[inline]
pub fn is_king_in_check(position: &Position, side: Side) -> bool {
    is_square_attacked(position, position.king_square(side), side.opposite())
}

impl Position {
    /// Whether `side`'s king stands on a square the opponent reaches.
    #[inline]
    pub fn in_check(&self, side: Side) -> bool {
        is_king_in_check(self, side)
    }
}
