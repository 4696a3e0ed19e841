use std::io::{self, BufRead, Write};

use log::debug;

use crate::field::Dir;

pub const MOVE_PROMPT: &str = "Make a move (U, D, L, or R): ";
pub const INVALID_MOVE: &str = "Invalid entry. Please try again.";
pub const PLAY_AGAIN_PROMPT: &str = "End of game. Play again? (Y/N): ";

pub fn parse_move(token: &str) -> Option<Dir> {
    match token.trim().to_ascii_uppercase().as_str() {
        "U" => Some(Dir::Up),
        "D" => Some(Dir::Down),
        "L" => Some(Dir::Left),
        "R" => Some(Dir::Right),
        _ => None,
    }
}

/// `Ok(None)` once the input is exhausted.
fn prompt_line(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Asks until a valid direction is given. Rejected tokens never leave this function.
pub fn read_move(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<Option<Dir>> {
    while let Some(line) = prompt_line(input, out, MOVE_PROMPT)? {
        if let Some(dir) = parse_move(&line) {
            return Ok(Some(dir));
        }
        debug!("Rejected move token {:?}", line.trim());
        writeln!(out, "{INVALID_MOVE}")?;
    }
    Ok(None)
}

pub fn read_play_again(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<bool> {
    let answer = prompt_line(input, out, PLAY_AGAIN_PROMPT)?;
    Ok(answer.is_some_and(|a| a.trim().eq_ignore_ascii_case("y")))
}
