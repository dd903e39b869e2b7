use std::path::Path;

use crate::domain::dataset::{
    common_columns, is_missing, ColumnMapping, LabeledDataset, TrainingRecord,
};
use crate::domain::error::{AppError, Result};
use crate::domain::features::{FeatureVector, FEATURE_COUNT};
use crate::infrastructure::csv::{CsvParser, CsvTable};

/// Aligns the secondary dataset's schema with the primary one, concatenates
/// both and drops every incomplete row.
pub struct DatasetMergeUseCase {
    parser: CsvParser,
    secondary_mapping: ColumnMapping,
}

impl Default for DatasetMergeUseCase {
    fn default() -> Self {
        Self::new(CsvParser::new(), ColumnMapping::secondary_dataset())
    }
}

impl DatasetMergeUseCase {
    pub fn new(parser: CsvParser, secondary_mapping: ColumnMapping) -> Self {
        Self {
            parser,
            secondary_mapping,
        }
    }

    pub fn execute(&self, primary: &Path, secondary: &Path) -> Result<LabeledDataset> {
        let primary = self.parser.parse_file(primary)?;
        let secondary = self.parser.parse_file(secondary)?;
        self.merge(primary, secondary)
    }

    pub fn merge(&self, primary: CsvTable, secondary: CsvTable) -> Result<LabeledDataset> {
        let columns = common_columns();

        let primary = primary.select(&columns)?;
        let secondary = secondary
            .rename_columns(&self.secondary_mapping)
            .select(&columns)?;

        let raw_rows = primary.len() + secondary.len();
        let mut records = Vec::with_capacity(raw_rows);
        for table in [&primary, &secondary] {
            for (index, row) in table.rows.iter().enumerate() {
                if let Some(record) = parse_record(row, &table.source, index)? {
                    records.push(record);
                }
            }
        }

        tracing::info!(
            primary_rows = primary.len(),
            secondary_rows = secondary.len(),
            kept_rows = records.len(),
            dropped_rows = raw_rows - records.len(),
            "Merged training datasets"
        );

        Ok(LabeledDataset::new(records))
    }
}

/// Parse one projected row (8 features then `Outcome`).
///
/// Returns `None` when any cell is missing.
fn parse_record(row: &[String], source: &str, index: usize) -> Result<Option<TrainingRecord>> {
    if row.iter().any(|cell| is_missing(cell)) {
        return Ok(None);
    }

    let columns = common_columns();
    let parse_cell = |col: usize| -> Result<f64> {
        row[col].trim().parse::<f64>().map_err(|_| {
            AppError::ParseError(format!(
                "{} row {}: column '{}' has non-numeric value '{}'",
                source,
                index + 1,
                columns[col],
                row[col]
            ))
        })
    };

    let mut values = [0.0; FEATURE_COUNT];
    for (col, slot) in values.iter_mut().enumerate() {
        *slot = parse_cell(col)?;
    }

    let outcome = parse_cell(FEATURE_COUNT)?;
    if outcome != 0.0 && outcome != 1.0 {
        return Err(AppError::ParseError(format!(
            "{} row {}: Outcome must be 0 or 1, got '{}'",
            source,
            index + 1,
            row[FEATURE_COUNT]
        )));
    }

    Ok(Some(TrainingRecord::new(
        FeatureVector::new(values),
        outcome as i32,
    )))
}
