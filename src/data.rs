//! Input table: rows, records, and the deviation color scale.

pub mod palette;
pub mod record;
pub mod table;

pub use palette::{ColorScale, DEFAULT_BASELINE, DEFAULT_PALETTE};
pub use record::{FileName, Record};
pub use table::{read_records, read_records_path};
