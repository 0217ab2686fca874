//! Turn input parser.
//!
//! Reads the game referee's line-oriented input: a one-off header with the
//! grid size, then per turn the scores, one line per grid row, a line with
//! the entity count and cooldowns, and one line per entity.

use std::io::BufRead;

use crate::board::{CellReport, EntityKind, EntityReport, Item, Position, TurnReport};

/// Errors that can occur while reading turn input.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),

    #[error("expected {expected} fields in {what}, got {got}: '{line}'")]
    FieldCount {
        what: &'static str,
        expected: usize,
        got: usize,
        line: String,
    },

    #[error("invalid integer '{0}'")]
    InvalidInteger(String),

    #[error("invalid ore amount '{0}'")]
    InvalidOre(String),

    #[error("invalid hole flag '{0}'")]
    InvalidHole(String),

    #[error("unknown entity type {0}")]
    UnknownEntityType(u32),

    #[error("unknown item code {0}")]
    UnknownItem(i32),

    #[error("invalid grid size {0}x{1}")]
    InvalidGridSize(i32, i32),

    #[error("entity {id} at ({x}, {y}) lies outside the grid")]
    OutOfBounds { id: u32, x: i32, y: i32 },
}

/// Parses the header line `width height`.
pub fn parse_header(line: &str) -> Result<(i32, i32), ProtocolError> {
    let fields = split_exact(line, 2, "header")?;
    let width: i32 = parse_int(fields[0])?;
    let height: i32 = parse_int(fields[1])?;
    if width <= 0 || height <= 0 {
        return Err(ProtocolError::InvalidGridSize(width, height));
    }
    Ok((width, height))
}

/// Parses one grid row of `ore hole` pairs. `?` means unknown ore.
pub fn parse_row(line: &str, width: usize) -> Result<Vec<CellReport>, ProtocolError> {
    let fields = split_exact(line, width * 2, "grid row")?;
    fields
        .chunks_exact(2)
        .map(|pair| -> Result<CellReport, ProtocolError> {
            let ore = match pair[0] {
                "?" => None,
                s => Some(s.parse::<u32>().map_err(|_| ProtocolError::InvalidOre(s.to_string()))?),
            };
            let hole = match pair[1] {
                "0" => false,
                "1" => true,
                s => return Err(ProtocolError::InvalidHole(s.to_string())),
            };
            Ok(CellReport { ore, hole })
        })
        .collect()
}

/// Parses an entity line `id type x y item`.
pub fn parse_entity(line: &str) -> Result<EntityReport, ProtocolError> {
    let fields = split_exact(line, 5, "entity")?;
    let id: u32 = parse_int(fields[0])?;
    let kind_code: u32 = parse_int(fields[1])?;
    let x: i32 = parse_int(fields[2])?;
    let y: i32 = parse_int(fields[3])?;
    let item_code: i32 = parse_int(fields[4])?;

    let kind = EntityKind::from_code(kind_code).ok_or(ProtocolError::UnknownEntityType(kind_code))?;
    let item = Item::from_code(item_code).ok_or(ProtocolError::UnknownItem(item_code))?;

    Ok(EntityReport { id, kind, pos: Position::new(x, y), item })
}

/// Reads whole turns from a line source.
pub struct TurnReader<R> {
    input: R,
    width: usize,
    height: usize,
    line: String,
}

impl<R: BufRead> TurnReader<R> {
    /// Reads the header line and prepares to read turns.
    ///
    /// Returns the reader and the grid size.
    pub fn from_header(mut input: R) -> Result<(Self, i32, i32), ProtocolError> {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(ProtocolError::UnexpectedEof("header"));
        }
        let (width, height) = parse_header(&line)?;
        let reader = TurnReader {
            input,
            width: width as usize,
            height: height as usize,
            line,
        };
        Ok((reader, width, height))
    }

    /// Reads the next turn, or `None` when the input ends cleanly before it.
    pub fn next_turn(&mut self) -> Result<Option<TurnReport>, ProtocolError> {
        if !self.read_line()? {
            return Ok(None);
        }
        let scores = split_exact(&self.line, 2, "scores")?;
        let my_score: u32 = parse_int(scores[0])?;
        let opponent_score: u32 = parse_int(scores[1])?;

        let mut cells = Vec::with_capacity(self.height);
        for _ in 0..self.height {
            self.expect_line("grid row")?;
            cells.push(parse_row(&self.line, self.width)?);
        }

        self.expect_line("entity header")?;
        let header = split_exact(&self.line, 3, "entity header")?;
        let entity_count: usize = parse_int(header[0])?;
        let radar_cooldown: u32 = parse_int(header[1])?;
        let trap_cooldown: u32 = parse_int(header[2])?;

        let mut entities = Vec::with_capacity(entity_count);
        for _ in 0..entity_count {
            self.expect_line("entity")?;
            let entity = parse_entity(&self.line)?;
            self.check_bounds(&entity)?;
            entities.push(entity);
        }

        Ok(Some(TurnReport {
            my_score,
            opponent_score,
            cells,
            radar_cooldown,
            trap_cooldown,
            entities,
        }))
    }

    /// Reads a non-empty line into the buffer. Returns false at end of input.
    fn read_line(&mut self) -> Result<bool, ProtocolError> {
        loop {
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Ok(false);
            }
            if !self.line.trim().is_empty() {
                return Ok(true);
            }
        }
    }

    /// Entities are either on the grid or at the dead sentinel.
    fn check_bounds(&self, entity: &EntityReport) -> Result<(), ProtocolError> {
        let (x, y) = (entity.pos.x(), entity.pos.y());
        let on_grid = (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y);
        if on_grid || entity.pos.is_dead() {
            Ok(())
        } else {
            Err(ProtocolError::OutOfBounds { id: entity.id, x, y })
        }
    }

    fn expect_line(&mut self, what: &'static str) -> Result<(), ProtocolError> {
        if self.read_line()? {
            Ok(())
        } else {
            Err(ProtocolError::UnexpectedEof(what))
        }
    }
}

fn split_exact<'a>(
    line: &'a str,
    expected: usize,
    what: &'static str,
) -> Result<Vec<&'a str>, ProtocolError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != expected {
        return Err(ProtocolError::FieldCount {
            what,
            expected,
            got: fields.len(),
            line: line.trim().to_string(),
        });
    }
    Ok(fields)
}

fn parse_int<T: std::str::FromStr>(s: &str) -> Result<T, ProtocolError> {
    s.parse::<T>()
        .map_err(|_| ProtocolError::InvalidInteger(s.to_string()))
}
