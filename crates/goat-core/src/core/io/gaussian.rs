use crate::core::elements;
use crate::core::io::traits::GeometrySource;
use crate::core::models::molecule::Molecule;
use nalgebra::Point3;
use serde::Deserialize;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

const STANDARD_ORIENTATION_HEADER: &str = "Standard orientation:";
const INPUT_ORIENTATION_HEADER: &str = "Input orientation:";
const SEPARATOR: &str =
    " ---------------------------------------------------------------------";

/// Which coordinate tables of the log are eligible for extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrientationPreference {
    /// Either "Standard orientation" or "Input orientation" tables.
    #[default]
    Any,
    Standard,
    Input,
}

impl OrientationPreference {
    fn matches(&self, line: &str) -> Option<OrientationKind> {
        let kind = if line.contains(STANDARD_ORIENTATION_HEADER) {
            OrientationKind::Standard
        } else if line.contains(INPUT_ORIENTATION_HEADER) {
            OrientationKind::Input
        } else {
            return None;
        };
        match (self, kind) {
            (Self::Any, _)
            | (Self::Standard, OrientationKind::Standard)
            | (Self::Input, OrientationKind::Input) => Some(kind),
            _ => None,
        }
    }
}

impl fmt::Display for OrientationPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Any => "standard or input orientation",
                Self::Standard => "standard orientation",
                Self::Input => "input orientation",
            }
        )
    }
}

#[derive(Debug, Error)]
#[error("Invalid orientation '{0}'. Expected 'any', 'standard' or 'input'.")]
pub struct ParseOrientationError(String);

impl FromStr for OrientationPreference {
    type Err = ParseOrientationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" => Ok(Self::Any),
            "standard" => Ok(Self::Standard),
            "input" => Ok(Self::Input),
            _ => Err(ParseOrientationError(s.to_string())),
        }
    }
}

/// The kind of table a geometry was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationKind {
    Standard,
    Input,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaussianMetadata {
    /// Number of eligible coordinate tables seen in the file (one per optimization step).
    pub blocks_found: usize,
    /// The kind of the table the geometry was taken from.
    pub orientation: OrientationKind,
    /// 1-based line number of the selected table's header.
    pub header_line: usize,
    /// Rows inside the selected table that were dropped because a column failed to parse.
    pub rows_discarded: usize,
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed input: no {0} coordinate block found")]
    MalformedInput(OrientationPreference),
    #[error("Empty geometry: the last coordinate block (line {line}) contains no valid atom rows")]
    EmptyGeometry { line: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    Outside,
    Header { separators: u8 },
    Rows,
}

#[derive(Debug)]
struct Block {
    kind: OrientationKind,
    header_line: usize,
    atoms: Vec<(String, Point3<f64>)>,
    rows_discarded: usize,
}

fn is_separator(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c == '-')
}

fn element_from_token(token: &str) -> Option<String> {
    if let Ok(number) = token.parse::<i32>() {
        let symbol = u8::try_from(number)
            .ok()
            .and_then(elements::lookup_by_atomic_number)
            .map_or_else(|| token.to_string(), |e| e.symbol.to_string());
        return Some(symbol);
    }
    if token.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(elements::normalize_symbol(token))
    } else {
        None
    }
}

/// Parses one coordinate row.
///
/// Accepts `center, atomic_number_or_symbol, atomic_type, x, y, z` as well as the five-column
/// layout without the atomic-type column.
fn parse_row(line: &str) -> Option<(String, Point3<f64>)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let coords = match tokens.len() {
        6 => {
            tokens[2].parse::<i32>().ok()?;
            &tokens[3..6]
        }
        5 => &tokens[2..5],
        _ => return None,
    };
    tokens[0].parse::<usize>().ok()?;
    let element = element_from_token(tokens[1])?;
    let x: f64 = coords[0].parse().ok()?;
    let y: f64 = coords[1].parse().ok()?;
    let z: f64 = coords[2].parse().ok()?;
    if !(x.is_finite() && y.is_finite() && z.is_finite()) {
        return None;
    }
    Some((element, Point3::new(x, y, z)))
}

pub struct GaussianLog;

impl GeometrySource for GaussianLog {
    type Options = OrientationPreference;
    type Metadata = GaussianMetadata;
    type Error = ExtractError;

    fn read_from(
        reader: &mut impl BufRead,
        options: &Self::Options,
    ) -> Result<(Molecule, Self::Metadata), Self::Error> {
        let mut state = BlockState::Outside;
        let mut current: Option<Block> = None;
        let mut last: Option<Block> = None;
        let mut blocks_found = 0;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            if let Some(kind) = options.matches(&line) {
                if let Some(done) = current.take() {
                    last = Some(done);
                }
                blocks_found += 1;
                current = Some(Block {
                    kind,
                    header_line: line_num,
                    atoms: Vec::new(),
                    rows_discarded: 0,
                });
                state = BlockState::Header { separators: 0 };
                continue;
            }

            let Some(block) = current.as_mut() else {
                continue;
            };

            match state {
                BlockState::Outside => {}
                BlockState::Header { separators } => {
                    if is_separator(&line) {
                        state = if separators + 1 >= 2 {
                            BlockState::Rows
                        } else {
                            BlockState::Header {
                                separators: separators + 1,
                            }
                        };
                    } else if let Some(atom) = parse_row(&line) {
                        block.atoms.push(atom);
                        state = BlockState::Rows;
                    }
                }
                BlockState::Rows => {
                    if is_separator(&line) || line.trim().is_empty() {
                        last = current.take();
                        state = BlockState::Outside;
                    } else if let Some(atom) = parse_row(&line) {
                        block.atoms.push(atom);
                    } else {
                        debug!(line = line_num, "Discarding unparsable coordinate row.");
                        block.rows_discarded += 1;
                    }
                }
            }
        }

        if let Some(unterminated) = current.take() {
            last = Some(unterminated);
        }

        let block = last.ok_or(ExtractError::MalformedInput(*options))?;
        if block.atoms.is_empty() {
            return Err(ExtractError::EmptyGeometry {
                line: block.header_line,
            });
        }

        let metadata = GaussianMetadata {
            blocks_found,
            orientation: block.kind,
            header_line: block.header_line,
            rows_discarded: block.rows_discarded,
        };
        Ok((Molecule::from_atoms(block.atoms), metadata))
    }

    fn write_to(molecule: &Molecule, writer: &mut impl Write) -> Result<(), Self::Error> {
        writeln!(
            writer,
            "                         Standard orientation:                         "
        )?;
        writeln!(writer, "{}", SEPARATOR)?;
        writeln!(
            writer,
            " Center     Atomic      Atomic             Coordinates (Angstroms)"
        )?;
        writeln!(
            writer,
            " Number     Number       Type             X           Y           Z"
        )?;
        writeln!(writer, "{}", SEPARATOR)?;
        for atom in molecule.atoms() {
            let element_column = elements::lookup(&atom.element)
                .map_or_else(|| atom.element.clone(), |e| e.atomic_number.to_string());
            writeln!(
                writer,
                "{:>7}{:>11}{:>12}{:>16.6}{:>12.6}{:>12.6}",
                atom.index,
                element_column,
                0,
                atom.position.x,
                atom.position.y,
                atom.position.z
            )?;
        }
        writeln!(writer, "{}", SEPARATOR)?;
        Ok(())
    }
}
