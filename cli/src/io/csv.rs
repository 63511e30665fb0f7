//! CSV export of a selection.

use std::{fs::File, io::Write, path::Path};

use anyhow::{Context, Result};
use cellpick::Pick;
use polars::{frame::DataFrame, io::SerWriter, prelude::{Column, CsvWriter}};

/// Build the export table: one row per selected shape, in group then selection order.
///
/// `CellID` is the shape's 1-based position in the input file and `Rank` is
/// its 1-based position in its group's selection.
fn selection_frame(pick: &Pick) -> Result<DataFrame> {
    let mut cell_ids = Vec::new();
    let mut groups = Vec::new();
    let mut ranks = Vec::new();

    for group in pick.groups() {
        for (rank, shape) in group.selected().enumerate() {
            cell_ids.push(shape as u64 + 1);
            groups.push(group.name().to_string());
            ranks.push(rank as u32 + 1);
        }
    }

    Ok(DataFrame::new(vec![
        Column::new("CellID".into(), cell_ids),
        Column::new("Group".into(), groups),
        Column::new("Rank".into(), ranks),
    ])?)
}

/// Write the selection as CSV to any writer.
pub(crate) fn write_selection<W: Write>(pick: &Pick, writer: W) -> Result<()> {
    let mut df = selection_frame(pick)?;
    CsvWriter::new(writer)
        .finish(&mut df)
        .context("[io::csv] Failed to write selection CSV")
}

/// Write the selection as CSV to `path`.
pub(crate) fn write_selection_csv(pick: &Pick, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[io::csv] Failed to create CSV file: {}", path.display()))?;
    write_selection(pick, file)
        .with_context(|| format!("[io::csv] Failed to write CSV to {}", path.display()))
}
