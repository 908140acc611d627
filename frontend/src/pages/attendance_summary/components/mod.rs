pub mod filter;
pub mod table;

pub use filter::FilterSection;
pub use table::RecordsTable;
