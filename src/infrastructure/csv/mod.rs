// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV parsing for the training datasets

mod csv_parser;

pub use csv_parser::{CsvParser, CsvTable};
