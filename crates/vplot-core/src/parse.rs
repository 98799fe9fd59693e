//! Parser for the path-data mini-grammar.
//!
//! The grammar is the straight-line subset of SVG path data, as
//! whitespace-separated tokens:
//!
//! | Token   | Meaning                                              |
//! |---------|------------------------------------------------------|
//! | `M`     | begin a subpath, absolute mode; emits `PenUp`        |
//! | `m`     | begin a subpath, relative mode; emits `PenUp`        |
//! | `L`     | continue the subpath, absolute mode; emits `PenDown` |
//! | `l`     | continue the subpath, relative mode; emits `PenDown` |
//! | `Z`/`z` | close the subpath back to its first point            |
//! | `x,y`   | a signed decimal coordinate pair                     |
//!
//! No curves, arcs, shorthand commands, or coordinate runs attached to a
//! command letter. Parsing is a single pass: each resolved point updates
//! the running extent, so no second traversal is needed. The same input
//! always yields the same stream; the parser holds no state across calls.

use crate::error::ParseError;
use crate::path::{ParsedPath, PathCommand};
use crate::types::{Extent, Point};

/// Active coordinate mode, set by the most recent command letter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Mode {
    Absolute,
    Relative,
}

/// Parse a path description into a command stream.
///
/// The returned stream begins with `PenUp` (the leading moveto) and ends
/// with a trailing `PenUp`, appended unconditionally so the head is lifted
/// however the source path terminated. Coordinates keep full `f64`
/// precision; integral device coordinates are produced later, at the
/// replay boundary.
///
/// # Errors
///
/// Returns [`ParseError::MalformedToken`] for a token matching no
/// recognized form, [`ParseError::MissingMoveTo`] if the data does not
/// open with `M`/`m`, and [`ParseError::CloseBeforePoint`] for a close
/// command in a subpath with no points yet. No partial path is returned.
pub fn parse(description: &str) -> Result<ParsedPath, ParseError> {
    let mut parser = Parser::new();
    for token in description.split_whitespace() {
        parser.token(token)?;
    }
    Ok(parser.finish())
}

/// Single-pass parser state.
struct Parser {
    commands: Vec<PathCommand>,
    extent: Option<Extent>,
    mode: Option<Mode>,
    /// Most recently resolved absolute point; base for relative pairs.
    last: Point,
    /// First point of the current subpath, reset by every `M`/`m`.
    subpath_start: Option<Point>,
}

impl Parser {
    fn new() -> Self {
        Self {
            commands: Vec::new(),
            extent: None,
            mode: None,
            last: Point::ZERO,
            subpath_start: None,
        }
    }

    fn token(&mut self, token: &str) -> Result<(), ParseError> {
        match token {
            "M" => self.begin_subpath(Mode::Absolute),
            "m" => self.begin_subpath(Mode::Relative),
            "L" => self.continue_subpath(Mode::Absolute, token),
            "l" => self.continue_subpath(Mode::Relative, token),
            "Z" | "z" => self.close_subpath(token),
            pair => self.coordinate_pair(pair),
        }
    }

    /// `M`/`m`: new subpath. The remembered subpath start is cleared so a
    /// later close resolves to the first point of *this* subpath.
    fn begin_subpath(&mut self, mode: Mode) -> Result<(), ParseError> {
        self.mode = Some(mode);
        self.subpath_start = None;
        self.commands.push(PathCommand::PenUp);
        Ok(())
    }

    /// `L`/`l`: continue drawing. Not valid as the opening command.
    fn continue_subpath(&mut self, mode: Mode, token: &str) -> Result<(), ParseError> {
        if self.mode.is_none() {
            return Err(ParseError::MissingMoveTo(token.to_string()));
        }
        self.mode = Some(mode);
        self.commands.push(PathCommand::PenDown);
        Ok(())
    }

    /// `Z`/`z`: emit a synthetic point equal to the subpath's first point.
    /// The coordinate mode is left unchanged.
    fn close_subpath(&mut self, token: &str) -> Result<(), ParseError> {
        if self.mode.is_none() {
            return Err(ParseError::MissingMoveTo(token.to_string()));
        }
        let first = self.subpath_start.ok_or(ParseError::CloseBeforePoint)?;
        self.commands.push(PathCommand::MoveTo(first));
        self.last = first;
        Ok(())
    }

    fn coordinate_pair(&mut self, token: &str) -> Result<(), ParseError> {
        let (x, y) = split_pair(token).ok_or_else(|| {
            ParseError::MalformedToken(token.to_string())
        })?;
        let Some(mode) = self.mode else {
            return Err(ParseError::MissingMoveTo(token.to_string()));
        };

        let p = match mode {
            Mode::Absolute => Point::new(x, y),
            Mode::Relative => Point::new(self.last.x + x, self.last.y + y),
        };

        match &mut self.extent {
            Some(extent) => extent.include(p),
            None => self.extent = Some(Extent::from_point(p)),
        }

        self.last = p;
        if self.subpath_start.is_none() {
            self.subpath_start = Some(p);
        }
        self.commands.push(PathCommand::MoveTo(p));
        Ok(())
    }

    fn finish(mut self) -> ParsedPath {
        // Trailing pen lift, regardless of how the source terminated.
        self.commands.push(PathCommand::PenUp);
        ParsedPath {
            commands: self.commands,
            extent: self.extent,
        }
    }
}

/// Split a `<number>,<number>` token, or `None` if it has any other shape.
fn split_pair(token: &str) -> Option<(f64, f64)> {
    let (x, y) = token.split_once(',')?;
    Some((parse_number(x)?, parse_number(y)?))
}

/// Parse `<sign?><digits>[.<digits>]`. Stricter than `f64::from_str`:
/// exponents, leading/trailing dots, and non-finite spellings are not part
/// of the grammar and are rejected.
fn parse_number(text: &str) -> Option<f64> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Some(frac) = frac_part {
        if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}
