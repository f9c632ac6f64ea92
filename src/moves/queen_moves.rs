use crate::moves::bishop_moves::BISHOP_RAYS;
use crate::moves::rook_moves::ROOK_RAYS;

pub const QUEEN_RAYS: [(i8, i8); 8] = [
    ROOK_RAYS[0],
    ROOK_RAYS[1],
    ROOK_RAYS[2],
    ROOK_RAYS[3],
    BISHOP_RAYS[0],
    BISHOP_RAYS[1],
    BISHOP_RAYS[2],
    BISHOP_RAYS[3],
];
