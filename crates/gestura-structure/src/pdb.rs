//! PDB coordinate records
//!
//! Only `ATOM` and `HETATM` records are read; every other record type is
//! skipped. Fields are fixed columns (1-based, inclusive):
//!
//! | Field    | Columns |
//! |----------|---------|
//! | serial   | 7-11    |
//! | name     | 13-16   |
//! | residue  | 18-20   |
//! | resSeq   | 23-26   |
//! | x, y, z  | 31-38, 39-46, 47-54 |
//! | element  | 77-78   |

use gestura_core::{GesturaError, GesturaResult, Vec3};
use tracing::{debug, trace};

use crate::{Atom, Structure};

/// Parse a PDB document into a centered structure.
///
/// Unparseable coordinates are an error. A missing element symbol falls back
/// to the first character of the atom name; an unparseable serial number
/// falls back to the record's ordinal.
pub fn parse_pdb(text: &str) -> GesturaResult<Structure> {
    let mut atoms = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if !is_coordinate_record(line) {
            continue;
        }
        let ordinal = atoms.len() as u32 + 1;
        atoms.push(parse_atom_record(line, idx + 1, ordinal)?);
    }

    debug!("Parsed {} atom records", atoms.len());
    Ok(Structure::from_atoms(atoms))
}

fn is_coordinate_record(line: &str) -> bool {
    line.starts_with("ATOM") || line.starts_with("HETATM")
}

/// Parse a single `ATOM`/`HETATM` line
pub fn parse_atom_record(line: &str, line_no: usize, ordinal: u32) -> GesturaResult<Atom> {
    let coordinate = |start: usize, end: usize, axis: &str| -> GesturaResult<f32> {
        let raw = column(line, start, end);
        match raw.parse::<f32>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(GesturaError::PdbRecord {
                line: line_no,
                reason: format!("invalid {axis} coordinate {raw:?}"),
            }),
        }
    };

    let x = coordinate(30, 38, "x")?;
    let y = coordinate(38, 46, "y")?;
    let z = coordinate(46, 54, "z")?;

    let name = column(line, 12, 16).to_string();
    let element = match column(line, 76, 78) {
        "" => name.chars().next().map(String::from).unwrap_or_default(),
        symbol => symbol.to_string(),
    }
    .to_ascii_uppercase();

    let id = column(line, 6, 11).parse::<u32>().unwrap_or_else(|_| {
        trace!(line = line_no, "serial number unreadable, using ordinal");
        ordinal
    });
    let res_seq = column(line, 22, 26).parse::<i32>().unwrap_or(0);

    Ok(Atom {
        id,
        name,
        element,
        residue: column(line, 17, 20).to_string(),
        res_seq,
        position: Vec3::new(x, y, z),
    })
}

/// Trimmed fixed-width column, empty when the line is too short
fn column(line: &str, start: usize, end: usize) -> &str {
    let end = end.min(line.len());
    if start >= end {
        return "";
    }
    line.get(start..end).map(str::trim).unwrap_or("")
}
