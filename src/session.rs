//! One round of play: the player walks the field one step at a time.

use log::info;

use crate::error::SessionError;
use crate::field::{Dir, Field, Pos, Tile};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    LostOffGrid,
    LostInHole,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}

/// The generated terrain is kept untouched; trail and position markers go
/// on a separate board that the renderer draws.
pub struct Session {
    terrain: Field,
    board: Field,
    pos: Pos,
    outcome: Outcome,
    moves: usize,
}

impl Session {
    pub fn new(terrain: Field) -> Self {
        let mut board = terrain.clone();
        if let Some(tile) = board.get_mut(Pos::START) {
            // A hat on the start cell stays visible.
            if *tile != Tile::Hat {
                *tile = Tile::Current;
            }
        }
        Self {
            terrain,
            board,
            pos: Pos::START,
            outcome: Outcome::InProgress,
            moves: 0,
        }
    }

    pub fn board(&self) -> &Field {
        &self.board
    }

    pub fn terrain(&self) -> &Field {
        &self.terrain
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn apply(&mut self, dir: Dir) -> Result<Outcome, SessionError> {
        if self.outcome.is_over() {
            return Err(SessionError {
                outcome: self.outcome,
            });
        }
        if let Some(tile) = self.board.get_mut(self.pos) {
            if *tile != Tile::Hat {
                *tile = Tile::Trail;
            }
        }
        self.moves += 1;

        let next = self.pos.step(dir).filter(|next| self.terrain.contains(*next));
        self.outcome = match next {
            None => Outcome::LostOffGrid,
            Some(next) => {
                self.pos = next;
                match self.terrain.get(next) {
                    Some(Tile::Hole) => Outcome::LostInHole,
                    terrain => {
                        if let Some(tile) = self.board.get_mut(next) {
                            *tile = Tile::Current;
                        }
                        if terrain == Some(Tile::Hat) {
                            Outcome::Won
                        } else {
                            Outcome::InProgress
                        }
                    }
                }
            }
        };
        if self.outcome.is_over() {
            info!("Round ended after {} moves: {:?}", self.moves, self.outcome);
        }
        Ok(self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(s: &str) -> Session {
        Session::new(s.parse().unwrap())
    }

    #[test]
    fn starts_in_progress_at_origin() {
        let s = session("░░^");
        assert_eq!(s.outcome(), Outcome::InProgress);
        assert_eq!(s.pos(), Pos::START);
        assert_eq!(s.board().get(Pos::START), Some(Tile::Current));
        assert_eq!(s.terrain().get(Pos::START), Some(Tile::Empty));
    }

    #[test]
    fn hole_ends_the_round() {
        let mut s = session("░O^");
        assert_eq!(s.apply(Dir::Right), Ok(Outcome::LostInHole));
    }

    #[test]
    fn walking_to_the_hat_wins() {
        let mut s = session("░░^");
        assert_eq!(s.apply(Dir::Right), Ok(Outcome::InProgress));
        assert_eq!(s.board().to_string(), "*@^\n");
        assert_eq!(s.apply(Dir::Right), Ok(Outcome::Won));
        assert_eq!(s.moves(), 2);
        assert_eq!(s.board().to_string(), "**@\n");
    }

    #[test]
    fn hat_on_the_start_cell_stays_on_the_board() {
        let mut s = session("^░");
        assert_eq!(s.board().positions_of(Tile::Hat).len(), 1);
        assert_eq!(s.board().to_string(), "^░\n");
        assert_eq!(s.apply(Dir::Right), Ok(Outcome::InProgress));
        assert_eq!(s.board().to_string(), "^@\n");
        assert_eq!(s.apply(Dir::Left), Ok(Outcome::Won));
        assert_eq!(s.board().to_string(), "@*\n");
    }

    #[test]
    fn walking_off_any_edge_loses() {
        let mut s = session("░^");
        assert_eq!(s.apply(Dir::Left), Ok(Outcome::LostOffGrid));

        for dir in Dir::ALL {
            let mut s = session("^");
            assert_eq!(s.apply(dir), Ok(Outcome::LostOffGrid), "{dir:?}");
        }

        let mut s = session("░░\n░^");
        assert_eq!(s.apply(Dir::Right), Ok(Outcome::InProgress));
        assert_eq!(s.apply(Dir::Right), Ok(Outcome::LostOffGrid));
        assert_eq!(s.pos(), Pos::new(1, 0));
    }

    #[test]
    fn no_moves_after_the_round_ends() {
        let mut s = session("░O^");
        s.apply(Dir::Right).unwrap();
        let board = s.board().clone();
        assert_eq!(
            s.apply(Dir::Left),
            Err(SessionError {
                outcome: Outcome::LostInHole
            })
        );
        assert_eq!(s.board(), &board);
        assert_eq!(s.moves(), 1);
    }

    #[test]
    fn backtracking_leaves_a_trail() {
        let mut s = session("░░\n░^");
        s.apply(Dir::Right).unwrap();
        s.apply(Dir::Left).unwrap();
        assert_eq!(s.board().to_string(), "@*\n░^\n");
        assert_eq!(s.apply(Dir::Down), Ok(Outcome::InProgress));
        assert_eq!(s.apply(Dir::Right), Ok(Outcome::Won));
    }
}
