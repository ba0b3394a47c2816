//! Board state machine with reversible moves
//!
//! The board owns the authoritative game state: piece placement, whose turn
//! it is, and the move and jump counters. Mutation happens only through
//! `make_move`, `undo`, `set_block` and `clear`; every cell write during a
//! move goes through an undo-recording path so search can apply and reverse
//! moves cheaply at depth.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{GameError, GameResult};

use super::moves::Move;
use super::{
    neighbor, GameOutcome, PieceColor, Square, JUMP_LIMIT, OPEN_SQUARES, SIDE, TOTAL_CELLS,
};

/// Callback fired after every state-changing operation.
///
/// Fire-and-forget: the callback must not mutate the board, and its absence
/// changes no game semantics.
pub type Notifier = Box<dyn FnMut(&Board)>;

/// One entry in the undo log.
///
/// A single move may change several cells (the destination plus any flipped
/// neighbors, plus a vacated source). `GroupStart` delimits the changes
/// belonging to one move and snapshots the jump counter so undo restores it
/// exactly, extends included.
#[derive(Debug, Clone, Copy)]
enum UndoEntry {
    GroupStart { jumps: u32 },
    CellChange { square: usize, prior: PieceColor },
}

/// An Ataxx board.
///
/// The playing area is addressed by [`Square`] (columns `a`-`g`, rows
/// `1`-`7`) or by linearized index into the 11x11 backing store, whose
/// outer two rows and columns are permanently [`PieceColor::Blocked`].
/// Offset arithmetic from any playable square stays inside the store, so
/// neighbor and jump computations are branch-free.
///
/// Red always moves first from the initial position: red pieces at `a7`
/// and `g1`, blue pieces at `a1` and `g7`.
pub struct Board {
    grid: [PieceColor; TOTAL_CELLS],
    /// Player that is next to move.
    whose_move: PieceColor,
    /// Cell counts indexed by color; the four entries sum to `TOTAL_CELLS`.
    num_pieces: [u32; 4],
    /// Unblocked squares remaining; only decreases, and only before the
    /// first move.
    total_open: u32,
    /// Consecutive jumps since the last extend or the start of the game.
    num_jumps: u32,
    /// Moves and passes since the last clear.
    num_moves: u32,
    /// All moves (passes included) applied and not undone.
    all_moves: Vec<Move>,
    undo_log: Vec<UndoEntry>,
    notifier: Option<Notifier>,
}

impl Board {
    /// A new board in the initial configuration, red to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self {
            grid: [PieceColor::Blocked; TOTAL_CELLS],
            whose_move: PieceColor::Red,
            num_pieces: [0, 0, 0, TOTAL_CELLS as u32],
            total_open: OPEN_SQUARES,
            num_jumps: 0,
            num_moves: 0,
            all_moves: Vec::new(),
            undo_log: Vec::new(),
            notifier: None,
        };
        board.clear();
        board
    }

    /// Reset to the starting state: initial pieces, no blocks, empty
    /// history, red to move.
    pub fn clear(&mut self) {
        self.whose_move = PieceColor::Red;
        self.grid = [PieceColor::Blocked; TOTAL_CELLS];
        for row in 0..SIDE as u8 {
            for col in 0..SIDE as u8 {
                self.grid[Square::new(col, row).index()] = PieceColor::Empty;
            }
        }
        self.grid[Square::new(0, 6).index()] = PieceColor::Red; // a7
        self.grid[Square::new(6, 0).index()] = PieceColor::Red; // g1
        self.grid[Square::new(0, 0).index()] = PieceColor::Blue; // a1
        self.grid[Square::new(6, 6).index()] = PieceColor::Blue; // g7
        self.num_pieces = [0; 4];
        for &cell in self.grid.iter() {
            self.num_pieces[cell as usize] += 1;
        }
        self.total_open = OPEN_SQUARES;
        self.num_jumps = 0;
        self.num_moves = 0;
        self.all_moves.clear();
        self.undo_log.clear();
        self.announce();
    }

    /// Contents of a playable square.
    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> PieceColor {
        self.grid[sq.index()]
    }

    /// Contents by linearized index, border cells included.
    #[inline]
    #[must_use]
    pub fn get_index(&self, sq: usize) -> PieceColor {
        self.grid[sq]
    }

    /// Color of the player who moves next. Arbitrary once the game is over.
    #[inline]
    #[must_use]
    pub fn whose_move(&self) -> PieceColor {
        self.whose_move
    }

    /// Number of cells holding `color`.
    #[inline]
    #[must_use]
    pub fn num_pieces(&self, color: PieceColor) -> u32 {
        self.num_pieces[color as usize]
    }

    #[inline]
    #[must_use]
    pub fn red_pieces(&self) -> u32 {
        self.num_pieces(PieceColor::Red)
    }

    #[inline]
    #[must_use]
    pub fn blue_pieces(&self) -> u32 {
        self.num_pieces(PieceColor::Blue)
    }

    /// Moves and passes made since the last clear.
    #[inline]
    #[must_use]
    pub fn num_moves(&self) -> u32 {
        self.num_moves
    }

    /// Consecutive jumps since the last extend (or the start of the game).
    /// Reaching [`JUMP_LIMIT`] forces the game to end.
    #[inline]
    #[must_use]
    pub fn num_jumps(&self) -> u32 {
        self.num_jumps
    }

    /// Total unblocked squares.
    #[inline]
    #[must_use]
    pub fn total_open(&self) -> u32 {
        self.total_open
    }

    /// All moves applied since the last clear, oldest first.
    #[inline]
    #[must_use]
    pub fn all_moves(&self) -> &[Move] {
        &self.all_moves
    }

    /// Return true iff `mv` is legal on the current board: a pass is legal
    /// exactly when the mover has no step available; a step is legal when
    /// its source holds the mover's color, its shape is an extend or a
    /// jump, and its destination is empty.
    #[must_use]
    pub fn legal_move(&self, mv: Move) -> bool {
        match mv {
            Move::Pass => !self.can_move(self.whose_move),
            Move::Step { from, to } => {
                self.grid[from.index()] == self.whose_move
                    && (mv.is_extend() || mv.is_jump())
                    && self.grid[to.index()] == PieceColor::Empty
            }
        }
    }

    /// Return true iff `who` has at least one step available, ignoring
    /// whose turn it is. Exhaustive scan of every playable square and every
    /// offset within jump range.
    #[must_use]
    pub fn can_move(&self, who: PieceColor) -> bool {
        for col in 0..SIDE as u8 {
            for row in 0..SIDE as u8 {
                let sq = Square::new(col, row).index();
                if self.grid[sq] != who {
                    continue;
                }
                for dc in -2..=2 {
                    for dr in -2..=2 {
                        if self.grid[neighbor(sq, dc, dr)] == PieceColor::Empty {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }

    /// Make `mv`, or report an error if it is illegal; an illegal move is
    /// never partially applied.
    ///
    /// A pass only advances the turn. A step places the mover's color at
    /// the destination (vacating the source for a jump) and flips every
    /// opposing piece adjacent to the destination. An extend resets the
    /// consecutive-jump counter to zero; a jump increments it.
    pub fn make_move(&mut self, mv: Move) -> GameResult<()> {
        if !self.legal_move(mv) {
            return Err(GameError::IllegalMove { mv });
        }
        self.all_moves.push(mv);
        self.undo_log.push(UndoEntry::GroupStart {
            jumps: self.num_jumps,
        });
        if let Move::Step { from, to } = mv {
            let mover = self.whose_move;
            let opponent = mover.opposite();
            if mv.is_jump() {
                self.set(from.index(), PieceColor::Empty);
                self.num_jumps += 1;
            } else {
                self.num_jumps = 0;
            }
            let dest = to.index();
            self.set(dest, mover);
            for dr in -1..=1 {
                for dc in -1..=1 {
                    let sq = neighbor(dest, dc, dr);
                    if self.grid[sq] == opponent {
                        self.set(sq, mover);
                    }
                }
            }
        }
        self.num_moves += 1;
        self.whose_move = self.whose_move.opposite();
        self.announce();
        Ok(())
    }

    /// Parse `"c0r0-c1r1"` or `"-"` and make the denoted move.
    pub fn make_text_move(&mut self, text: &str) -> GameResult<()> {
        let mv: Move = text.parse()?;
        self.make_move(mv)
    }

    /// Undo the last move, restoring every cell, counter and the turn to
    /// their exact prior values.
    ///
    /// # Panics
    ///
    /// Undoing with no moves recorded is a programming error and panics.
    pub fn undo(&mut self) {
        self.all_moves.pop().expect("undo with no moves recorded");
        loop {
            match self
                .undo_log
                .pop()
                .expect("undo log out of sync with move log")
            {
                UndoEntry::GroupStart { jumps } => {
                    self.num_jumps = jumps;
                    break;
                }
                UndoEntry::CellChange { square, prior } => self.unrecorded_set(square, prior),
            }
        }
        self.whose_move = self.whose_move.opposite();
        self.num_moves -= 1;
        self.announce();
    }

    /// Return true iff a block may be placed at `sq`: no move has been
    /// made yet and the square is empty.
    #[must_use]
    pub fn legal_block(&self, sq: Square) -> bool {
        self.all_moves.is_empty() && self.get(sq) == PieceColor::Empty
    }

    /// Block `sq` and its mirror images across the board's horizontal and
    /// vertical center lines (up to four squares, fewer when mirrors
    /// coincide), decrementing the open-square count for each square newly
    /// blocked.
    pub fn set_block(&mut self, sq: Square) -> GameResult<()> {
        if !self.legal_block(sq) {
            return Err(GameError::IllegalBlock { square: sq });
        }
        let last = (SIDE - 1) as u8;
        for col in [sq.col, last - sq.col] {
            for row in [sq.row, last - sq.row] {
                let mirror = Square::new(col, row).index();
                if self.grid[mirror] == PieceColor::Empty {
                    self.unrecorded_set(mirror, PieceColor::Blocked);
                    self.total_open -= 1;
                }
            }
        }
        self.announce();
        Ok(())
    }

    /// The winner, if the game is decided.
    ///
    /// A side with no pieces loses outright. Otherwise, once the jump
    /// limit is reached or neither side can move, whichever side holds
    /// strictly more pieces wins, equal counts being a draw. `None` while
    /// the game is still in progress.
    #[must_use]
    pub fn winner(&self) -> Option<GameOutcome> {
        use std::cmp::Ordering;

        if self.red_pieces() == 0 {
            return Some(GameOutcome::Winner(PieceColor::Blue));
        }
        if self.blue_pieces() == 0 {
            return Some(GameOutcome::Winner(PieceColor::Red));
        }
        if self.num_jumps >= JUMP_LIMIT
            || (!self.can_move(PieceColor::Red) && !self.can_move(PieceColor::Blue))
        {
            return Some(match self.red_pieces().cmp(&self.blue_pieces()) {
                Ordering::Greater => GameOutcome::Winner(PieceColor::Red),
                Ordering::Less => GameOutcome::Winner(PieceColor::Blue),
                Ordering::Equal => GameOutcome::Draw,
            });
        }
        None
    }

    /// Register `notify` to run after every state-changing operation.
    /// It fires once immediately on registration.
    pub fn set_notifier(&mut self, notify: Notifier) {
        self.notifier = Some(notify);
        self.announce();
    }

    /// Text depiction of the board, row `7` first. With `legend`, row and
    /// column labels are added around the edges.
    #[must_use]
    pub fn render(&self, legend: bool) -> String {
        let mut out = String::new();
        for row in (0..SIDE as u8).rev() {
            if legend {
                out.push((b'1' + row) as char);
            }
            out.push(' ');
            for col in 0..SIDE as u8 {
                out.push(' ');
                out.push(match self.grid[Square::new(col, row).index()] {
                    PieceColor::Red => 'r',
                    PieceColor::Blue => 'b',
                    PieceColor::Empty => '-',
                    PieceColor::Blocked => 'X',
                });
            }
            out.push('\n');
        }
        if legend {
            out.push_str("   a b c d e f g");
        }
        out
    }

    /// Write a cell through the undo-recording path.
    fn set(&mut self, sq: usize, v: PieceColor) {
        self.undo_log.push(UndoEntry::CellChange {
            square: sq,
            prior: self.grid[sq],
        });
        self.unrecorded_set(sq, v);
    }

    /// Write a cell and maintain the per-color counts, bypassing the undo
    /// log. Used by undo itself and by pre-game block placement.
    fn unrecorded_set(&mut self, sq: usize, v: PieceColor) {
        self.num_pieces[self.grid[sq] as usize] -= 1;
        self.num_pieces[v as usize] += 1;
        self.grid[sq] = v;
    }

    /// Run the registered notifier, if any.
    fn announce(&mut self) {
        if let Some(mut notify) = self.notifier.take() {
            notify(self);
            self.notifier = Some(notify);
        }
    }
}

impl Clone for Board {
    /// Scratch copy for search: grid, turn, counters and move log carry
    /// over; the undo history and the notifier do not.
    fn clone(&self) -> Self {
        Self {
            grid: self.grid,
            whose_move: self.whose_move,
            num_pieces: self.num_pieces,
            total_open: self.total_open,
            num_jumps: self.num_jumps,
            num_moves: self.num_moves,
            all_moves: self.all_moves.clone(),
            undo_log: Vec::new(),
            notifier: None,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Position equality: grid contents only, independent of turn, counters
/// and history. Used to detect repeated positions.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grid.hash(state);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{ to_move: {:?}, moves: {}, jumps: {} }}\n{}",
            self.whose_move,
            self.num_moves,
            self.num_jumps,
            self.render(true)
        )
    }
}
