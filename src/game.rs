use std::io::{BufRead, Write};

use log::info;
use rand::Rng;

use crate::error::GameError;
use crate::generator::{generate_solvable, FieldConfig};
use crate::input::{read_move, read_play_again};
use crate::render::{Renderer, Tone};
use crate::session::{Outcome, Session};

pub struct Game<R, I, W> {
    rng: R,
    input: I,
    out: W,
    config: FieldConfig,
    renderer: Renderer,
}

impl<R: Rng, I: BufRead, W: Write> Game<R, I, W> {
    pub fn new(rng: R, input: I, out: W, config: FieldConfig, renderer: Renderer) -> Self {
        Self {
            rng,
            input,
            out,
            config,
            renderer,
        }
    }

    /// Plays rounds until the player declines another one or input runs out.
    /// Returns the outcome of every finished round.
    pub fn run(&mut self) -> Result<Vec<Outcome>, GameError> {
        self.config.validate()?;
        self.renderer.banner(&mut self.out)?;

        let mut results = Vec::new();
        loop {
            let outcome = self.play_round()?;
            if !outcome.is_over() {
                break;
            }
            results.push(outcome);
            if !read_play_again(&mut self.input, &mut self.out)? {
                break;
            }
            self.renderer
                .message(&mut self.out, Tone::Note, "\nCreating a new board!\n")?;
        }
        self.renderer.message(&mut self.out, Tone::Plain, "\nBye!\n")?;
        info!("Session finished after {} rounds", results.len());
        Ok(results)
    }

    /// `Outcome::InProgress` means the input ended mid-round.
    pub fn play_round(&mut self) -> Result<Outcome, GameError> {
        let field = generate_solvable(&mut self.rng, &self.config)?;
        let mut session = Session::new(field);
        self.renderer.draw_field(&mut self.out, session.board())?;

        while !session.outcome().is_over() {
            let Some(dir) = read_move(&mut self.input, &mut self.out)? else {
                return Ok(Outcome::InProgress);
            };
            let outcome = session.apply(dir)?;
            if matches!(outcome, Outcome::InProgress | Outcome::Won) {
                writeln!(self.out)?;
                self.renderer.draw_field(&mut self.out, session.board())?;
            }
        }
        self.renderer.outcome(&mut self.out, session.outcome())?;
        Ok(session.outcome())
    }

    pub fn into_output(self) -> W {
        self.out
    }
}
