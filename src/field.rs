use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty,
    Hole,
    Hat,
    Trail,
    Current,
}

impl Tile {
    pub fn glyph(self) -> char {
        match self {
            Tile::Empty => '░',
            Tile::Hole => 'O',
            Tile::Hat => '^',
            Tile::Trail => '*',
            Tile::Current => '@',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Tile> {
        match glyph {
            '░' | '.' => Some(Tile::Empty),
            'O' => Some(Tile::Hole),
            '^' => Some(Tile::Hat),
            '*' => Some(Tile::Trail),
            '@' => Some(Tile::Current),
            _ => None,
        }
    }

    /// Only holes block movement; trail and current markers are terrain like any other.
    pub fn is_passable(self) -> bool {
        self != Tile::Hole
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub const START: Pos = Pos { x: 0, y: 0 };

    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Moves one cell. `None` when the move would cross the top or left edge;
    /// the bottom and right edges are the field's business.
    pub fn step(self, dir: Dir) -> Option<Pos> {
        let (dx, dy) = dir.delta();
        Some(Pos {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    width: usize,
    height: usize,
    tiles: Vec<Vec<Tile>>,
}

impl Field {
    pub fn filled(width: usize, height: usize, tile: Tile) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        Ok(Self {
            width,
            height,
            tiles: vec![vec![tile; width]; height],
        })
    }

    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, ConfigError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return Err(ConfigError::Ragged);
        }
        Ok(Self {
            width,
            height,
            tiles: rows,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn get(&self, pos: Pos) -> Option<Tile> {
        self.tiles.get(pos.y)?.get(pos.x).copied()
    }

    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut Tile> {
        self.tiles.get_mut(pos.y)?.get_mut(pos.x)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.iter().map(Vec::as_slice)
    }

    /// Orthogonal neighbours that lie inside the field.
    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        Dir::ALL
            .into_iter()
            .filter_map(move |dir| pos.step(dir))
            .filter(move |next| self.contains(*next))
    }

    pub fn positions_of(&self, tile: Tile) -> Vec<Pos> {
        let mut found = Vec::new();
        for (y, row) in self.tiles.iter().enumerate() {
            for (x, t) in row.iter().enumerate() {
                if *t == tile {
                    found.push(Pos { x, y });
                }
            }
        }
        found
    }

    pub fn hat(&self) -> Option<Pos> {
        self.positions_of(Tile::Hat).into_iter().next()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.tiles {
            let line: String = row.iter().map(|t| t.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl FromStr for Field {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for line in s.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let row = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|glyph| Tile::from_glyph(glyph).ok_or(ConfigError::Glyph { glyph }))
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Field::from_rows(rows)
    }
}
