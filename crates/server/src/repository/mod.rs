pub mod sheet_repository;

pub use sheet_repository::{SeaOrmSheetRepository, SheetRepository};
