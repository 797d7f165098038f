//! Piece placement on an 8x8 grid.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-rank layout from column a to h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement: one optional piece per square.
///
/// Boards are small `Copy` values, so scratch copies for legality checks
/// are a plain assignment.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// A board with no pieces.
    pub const fn empty() -> Board {
        Board {
            cells: [None; Square::COUNT],
        }
    }

    /// Return the standard starting placement.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (col, kind) in BACK_RANK.into_iter().enumerate() {
                board.set(Square::at(color.back_row(), col as u8), Piece::new(kind, color));
                board.set(
                    Square::at(color.pawn_row(), col as u8),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }
        board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_some()
    }

    /// Return the color of the piece on the given square, if any.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(Piece::color)
    }

    /// Place a piece, replacing whatever stood there.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.index()] = Some(piece);
    }

    /// Empty a square, returning what stood there.
    #[inline]
    pub fn clear(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()].take()
    }

    /// Move whatever stands on `from` to `to`, overwriting `to`.
    ///
    /// Returns the piece previously on `to`.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.clear(from);
        std::mem::replace(&mut self.cells[to.index()], moving)
    }

    /// Iterate over the occupied squares holding pieces of `color`.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.color() == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Find the king of the given color, if present.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        Square::all().find(|&sq| self.piece_at(sq) == Some(king))
    }

    /// Return the square of the king for the given side.
    ///
    /// # Panics
    ///
    /// Panics if the board has no king for the given color (invalid board state).
    pub fn king_square(&self, color: Color) -> Square {
        self.find_king(color)
            .expect("board must have a king for each side")
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self
                .pieces(color)
                .filter(|(_, piece)| piece.kind() == PieceKind::King)
                .count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount {
                    color: color.name(),
                    count,
                });
            }
        }

        let pawn_on_back_rank = Square::all()
            .filter(|sq| sq.row() == 0 || sq.row() == 7)
            .any(|sq| matches!(self.piece_at(sq), Some(p) if p.kind() == PieceKind::Pawn));
        if pawn_on_back_rank {
            return Err(BoardError::PawnsOnBackRank);
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard {
            board: self,
            marks: &[],
        }
    }

    /// Like [`Board::pretty`], drawing `*` on the given empty squares and
    /// bracketing the given occupied ones.
    pub fn pretty_marked<'a>(&'a self, marks: &'a [Square]) -> PrettyBoard<'a> {
        PrettyBoard { board: self, marks }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\n{}\n)", self.pretty())
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, rank 8 on top.
pub struct PrettyBoard<'a> {
    board: &'a Board,
    marks: &'a [Square],
}

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0u8..8 {
                let sq = Square::at(row, col);
                let marked = self.marks.contains(&sq);
                let cell = match (self.board.piece_at(sq), marked) {
                    (Some(piece), true) => format!("[{piece}]"),
                    (Some(piece), false) => format!(" {piece} "),
                    (None, true) => " * ".to_string(),
                    (None, false) => " . ".to_string(),
                };
                f.write_str(&cell)?;
            }
            writeln!(f)?;
        }
        write!(f, "    a  b  c  d  e  f  g  h")
    }
}
