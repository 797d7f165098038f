//! Castling rights and the fixed squares each castle uses.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;
use crate::square::Square;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Column the rook starts on.
    pub const fn rook_from_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column the rook lands on, next to the king.
    pub const fn rook_to_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Column the king lands on.
    pub const fn king_to_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// Side implied by a king move two columns toward `to_col`.
    pub const fn from_king_target(to_col: u8) -> CastleSide {
        if to_col > 4 {
            CastleSide::KingSide
        } else {
            CastleSide::QueenSide
        }
    }

    /// The corner square holding this side's rook for `color`.
    pub const fn rook_corner(self, color: Color) -> Square {
        Square::at(color.back_row(), self.rook_from_col())
    }
}

/// Castling rights as a 4-bit field: bit 0 = WK, 1 = WQ, 2 = BK, 3 = BQ.
///
/// Rights are only ever removed during play.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    pub const NONE: CastleRights = CastleRights(0);
    pub const ALL: CastleRights = CastleRights(0b1111);

    pub const WHITE_KING: CastleRights = CastleRights(0b0001);
    pub const WHITE_QUEEN: CastleRights = CastleRights(0b0010);
    pub const BLACK_KING: CastleRights = CastleRights(0b0100);
    pub const BLACK_QUEEN: CastleRights = CastleRights(0b1000);

    pub const WHITE_BOTH: CastleRights = CastleRights(0b0011);
    pub const BLACK_BOTH: CastleRights = CastleRights(0b1100);

    /// Return `true` if no castling rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: CastleRights) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn insert(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }

    #[inline]
    pub const fn remove(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    /// Check whether `color` may still castle toward `side`.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.contains(Self::flag(color, side))
    }

    /// Remove both rights of `color`.
    #[inline]
    pub const fn remove_color(self, color: Color) -> CastleRights {
        match color {
            Color::White => self.remove(Self::WHITE_BOTH),
            Color::Black => self.remove(Self::BLACK_BOTH),
        }
    }

    /// The single-bit flag for a color and side.
    #[inline]
    pub const fn flag(color: Color, side: CastleSide) -> CastleRights {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => Self::WHITE_KING,
            (Color::White, CastleSide::QueenSide) => Self::WHITE_QUEEN,
            (Color::Black, CastleSide::KingSide) => Self::BLACK_KING,
            (Color::Black, CastleSide::QueenSide) => Self::BLACK_QUEEN,
        }
    }

    /// The right tied to a rook corner, if `sq` is one of the four corners.
    pub fn for_corner(sq: Square) -> CastleRights {
        Color::ALL
            .into_iter()
            .flat_map(|color| CastleSide::ALL.map(|side| (color, side)))
            .find(|&(color, side)| side.rook_corner(color) == sq)
            .map_or(CastleRights::NONE, |(color, side)| Self::flag(color, side))
    }

    /// Parse the FEN castling field (e.g. "KQkq", "Kq", "-").
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }

        s.chars().try_fold(CastleRights::NONE, |rights, c| {
            let flag = match c {
                'K' => Self::WHITE_KING,
                'Q' => Self::WHITE_QUEEN,
                'k' => Self::BLACK_KING,
                'q' => Self::BLACK_QUEEN,
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
            Ok(rights.insert(flag))
        })
    }

    /// Serialize to the FEN castling field.
    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }

        [
            (Self::WHITE_KING, 'K'),
            (Self::WHITE_QUEEN, 'Q'),
            (Self::BLACK_KING, 'k'),
            (Self::BLACK_QUEEN, 'q'),
        ]
        .into_iter()
        .filter(|&(flag, _)| self.contains(flag))
        .map(|(_, c)| c)
        .collect()
    }
}

impl Default for CastleRights {
    fn default() -> Self {
        CastleRights::ALL
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({})", self.to_fen())
    }
}

#[cfg(test)]
mod tests {
    use super::{CastleRights, CastleSide};
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn from_fen_to_fen_roundtrip() {
        for fen in ["KQkq", "Kq", "k", "-", "KQ", "kq"] {
            let rights = CastleRights::from_fen(fen).unwrap();
            assert_eq!(rights.to_fen(), fen);
        }
    }

    #[test]
    fn from_fen_normalizes_order() {
        assert_eq!(CastleRights::from_fen("qK").unwrap().to_fen(), "Kq");
    }

    #[test]
    fn from_fen_invalid() {
        assert!(CastleRights::from_fen("KQxq").is_err());
        assert!(CastleRights::from_fen("1").is_err());
    }

    #[test]
    fn has_color_side() {
        let rights = CastleRights::from_fen("Kq").unwrap();
        assert!(rights.has(Color::White, CastleSide::KingSide));
        assert!(!rights.has(Color::White, CastleSide::QueenSide));
        assert!(!rights.has(Color::Black, CastleSide::KingSide));
        assert!(rights.has(Color::Black, CastleSide::QueenSide));
    }

    #[test]
    fn remove_color_keeps_other_side() {
        assert_eq!(CastleRights::ALL.remove_color(Color::White), CastleRights::BLACK_BOTH);
        assert_eq!(CastleRights::ALL.remove_color(Color::Black), CastleRights::WHITE_BOTH);
    }

    #[test]
    fn rook_corners() {
        assert_eq!(CastleSide::KingSide.rook_corner(Color::White), Square::H1);
        assert_eq!(CastleSide::QueenSide.rook_corner(Color::White), Square::A1);
        assert_eq!(CastleSide::KingSide.rook_corner(Color::Black), Square::H8);
        assert_eq!(CastleSide::QueenSide.rook_corner(Color::Black), Square::A8);
    }

    #[test]
    fn for_corner_maps_each_corner() {
        assert_eq!(CastleRights::for_corner(Square::H1), CastleRights::WHITE_KING);
        assert_eq!(CastleRights::for_corner(Square::A1), CastleRights::WHITE_QUEEN);
        assert_eq!(CastleRights::for_corner(Square::H8), CastleRights::BLACK_KING);
        assert_eq!(CastleRights::for_corner(Square::A8), CastleRights::BLACK_QUEEN);
        assert_eq!(CastleRights::for_corner(Square::E1), CastleRights::NONE);
    }

    #[test]
    fn king_target_decides_side() {
        assert_eq!(CastleSide::from_king_target(6), CastleSide::KingSide);
        assert_eq!(CastleSide::from_king_target(2), CastleSide::QueenSide);
    }
}
