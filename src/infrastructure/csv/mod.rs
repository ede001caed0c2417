// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV text parsing

mod csv_parser;

pub use csv_parser::CsvParser;
