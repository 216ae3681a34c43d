use crate::core::models::molecule::Molecule;
use crate::core::models::report::StructuralReport;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    #[default]
    Text,
    Csv,
}

#[derive(Debug, Error)]
#[error("Invalid report format '{0}'. Expected 'text' or 'csv'.")]
pub struct ParseReportFormatError(String);

impl FromStr for ReportFormat {
    type Err = ParseReportFormatError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "csv" => Ok(Self::Csv),
            _ => Err(ParseReportFormatError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Report references atom {0}, which is not part of the molecule")]
    UnknownAtom(usize),
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    kind: &'a str,
    atoms: String,
    value: f64,
    detail: String,
}

fn label(molecule: &Molecule, index: usize) -> Result<String, ReportError> {
    molecule
        .atom(index)
        .map(|a| a.label())
        .ok_or(ReportError::UnknownAtom(index))
}

fn join_labels(molecule: &Molecule, indices: &[usize], sep: &str) -> Result<String, ReportError> {
    let labels = indices
        .iter()
        .map(|&i| label(molecule, i))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(labels.join(sep))
}

/// Writes the report in the requested format.
///
/// # Errors
///
/// Returns an error if writing fails or a record refers to an atom outside the molecule.
pub fn write_report(
    report: &StructuralReport,
    format: ReportFormat,
    writer: &mut impl Write,
) -> Result<(), ReportError> {
    match format {
        ReportFormat::Text => write_text(report, writer),
        ReportFormat::Csv => write_csv(report, writer),
    }
}

fn write_text(report: &StructuralReport, writer: &mut impl Write) -> Result<(), ReportError> {
    let molecule = &report.molecule;

    writeln!(writer, "Gaussian Optimization Analytical Tool - Structural Report")?;
    writeln!(writer, "Atoms: {}", molecule.len())?;
    writeln!(writer)?;

    writeln!(writer, "Element assignments")?;
    for atom in molecule.atoms() {
        writeln!(
            writer,
            "{:>6}  {:<3}{:>12.6}{:>12.6}{:>12.6}",
            atom.index, atom.element, atom.position.x, atom.position.y, atom.position.z
        )?;
    }
    writeln!(writer)?;

    writeln!(writer, "Total mass of model: {:.6e} amu", report.total_mass)?;
    let com = &report.center_of_mass;
    writeln!(
        writer,
        "Center of mass: {:>12.6}{:>12.6}{:>12.6}",
        com.x, com.y, com.z
    )?;
    writeln!(writer)?;

    writeln!(writer, "Bond lengths ({})", report.bonds.len())?;
    for bond in &report.bonds {
        writeln!(
            writer,
            "  {:<16}{:>10.4} A  {}",
            join_labels(molecule, &[bond.atom_a, bond.atom_b], " - ")?,
            bond.distance,
            bond.order
        )?;
    }
    writeln!(writer)?;

    writeln!(writer, "Bond angles ({})", report.angles.len())?;
    for angle in &report.angles {
        writeln!(
            writer,
            "  {:<24}{:>10.2}",
            join_labels(
                molecule,
                &[angle.neighbor_a, angle.center, angle.neighbor_b],
                " - "
            )?,
            angle.angle_degrees
        )?;
    }
    writeln!(writer)?;

    writeln!(writer, "Dihedral angles ({})", report.dihedrals.len())?;
    for dihedral in &report.dihedrals {
        writeln!(
            writer,
            "  {:<32}{:>10.2}",
            join_labels(molecule, &dihedral.atoms(), " - ")?,
            dihedral.angle_degrees
        )?;
    }

    if report.skipped_degenerate > 0 {
        writeln!(writer)?;
        writeln!(
            writer,
            "Skipped {} degenerate angle/dihedral computation(s).",
            report.skipped_degenerate
        )?;
    }
    Ok(())
}

fn write_csv(report: &StructuralReport, writer: &mut impl Write) -> Result<(), ReportError> {
    let molecule = &report.molecule;
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.serialize(CsvRow {
        kind: "total_mass",
        atoms: String::new(),
        value: report.total_mass,
        detail: "amu".to_string(),
    })?;
    let com = &report.center_of_mass;
    for (axis, value) in [("x", com.x), ("y", com.y), ("z", com.z)] {
        csv_writer.serialize(CsvRow {
            kind: "center_of_mass",
            atoms: String::new(),
            value,
            detail: axis.to_string(),
        })?;
    }
    for bond in &report.bonds {
        csv_writer.serialize(CsvRow {
            kind: "bond",
            atoms: join_labels(molecule, &[bond.atom_a, bond.atom_b], "-")?,
            value: bond.distance,
            detail: bond.order.to_string(),
        })?;
    }
    for angle in &report.angles {
        csv_writer.serialize(CsvRow {
            kind: "angle",
            atoms: join_labels(
                molecule,
                &[angle.neighbor_a, angle.center, angle.neighbor_b],
                "-",
            )?,
            value: angle.angle_degrees,
            detail: String::new(),
        })?;
    }
    for dihedral in &report.dihedrals {
        csv_writer.serialize(CsvRow {
            kind: "dihedral",
            atoms: join_labels(molecule, &dihedral.atoms(), "-")?,
            value: dihedral.angle_degrees,
            detail: String::new(),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
