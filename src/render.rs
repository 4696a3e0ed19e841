use std::io::{self, Write};

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::QueueableCommand;
use unicode_width::UnicodeWidthChar;

use crate::field::{Field, Tile};
use crate::session::Outcome;

const CELL_W: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Good,
    Bad,
    Note,
}

#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn draw_field(&self, out: &mut impl Write, field: &Field) -> io::Result<()> {
        for row in field.rows() {
            for (x, tile) in row.iter().enumerate() {
                let last = x + 1 == row.len();
                self.draw_tile(out, *tile, last)?;
            }
            out.queue(Print('\n'))?;
        }
        out.flush()
    }

    fn draw_tile(&self, out: &mut impl Write, tile: Tile, last: bool) -> io::Result<()> {
        let glyph = tile.glyph();
        let color = match tile {
            Tile::Empty => Color::DarkGrey,
            Tile::Hole => Color::Red,
            Tile::Hat => Color::Yellow,
            Tile::Trail => Color::Cyan,
            Tile::Current => Color::Green,
        };
        self.paint(out, color, glyph)?;
        if !last {
            let w = glyph.width().unwrap_or(1);
            for _ in w..CELL_W {
                out.queue(Print(' '))?;
            }
        }
        Ok(())
    }

    pub fn message(&self, out: &mut impl Write, tone: Tone, text: &str) -> io::Result<()> {
        let color = match tone {
            Tone::Plain => Color::Reset,
            Tone::Good => Color::Green,
            Tone::Bad => Color::Red,
            Tone::Note => Color::Cyan,
        };
        self.paint(out, color, text)?;
        out.queue(Print('\n'))?;
        out.flush()
    }

    pub fn outcome(&self, out: &mut impl Write, outcome: Outcome) -> io::Result<()> {
        match outcome {
            Outcome::Won => self.message(out, Tone::Good, "Found the hat! You win!"),
            Outcome::LostOffGrid => self.message(out, Tone::Bad, "Moved off field. You lose."),
            Outcome::LostInHole => self.message(out, Tone::Bad, "Stepped in a hole. You lose."),
            Outcome::InProgress => Ok(()),
        }
    }

    pub fn banner(&self, out: &mut impl Write) -> io::Result<()> {
        self.message(out, Tone::Note, "\nWelcome to Find My Hat!")?;
        let lines = [
            format!(
                "I've lost my hat and need help finding it. It looks like this: {}",
                Tile::Hat.glyph()
            ),
            format!(
                "You are the {} symbol and leave a trail of {}. Use the keys to navigate to get my hat.",
                Tile::Current.glyph(),
                Tile::Trail.glyph()
            ),
            format!(
                "But don't fall down a hole ({}) or off the field!\n",
                Tile::Hole.glyph()
            ),
            "Press ctrl + c to quit at any time.".to_string(),
        ];
        for line in &lines {
            self.message(out, Tone::Plain, line)?;
        }
        Ok(())
    }

    fn paint(
        &self,
        out: &mut impl Write,
        color: Color,
        text: impl std::fmt::Display,
    ) -> io::Result<()> {
        if self.color && color != Color::Reset {
            out.queue(SetForegroundColor(color))?;
            out.queue(Print(text))?;
            out.queue(ResetColor)?;
        } else {
            out.queue(Print(text))?;
        }
        Ok(())
    }
}
