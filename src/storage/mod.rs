mod csv_file;

pub use csv_file::write_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written { rows: usize },
    NothingToWrite,
}
