#![allow(dead_code)]

use indexmap::IndexMap;

pub const CHESS_PIECES: &str = "KING QUEEN ROOK BISHOP KNIGHT PAWN";

pub fn chess_pieces() -> Vec<String> {
    CHESS_PIECES.split_whitespace().map(str::to_owned).collect()
}

pub fn piece_values() -> IndexMap<String, i64> {
    [
        ("KING", 0),
        ("QUEEN", 9),
        ("ROOK", 5),
        ("BISHOP", 3),
        ("KNIGHT", 3),
        ("PAWN", 1),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value))
    .collect()
}
