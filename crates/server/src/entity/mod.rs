pub mod sheet_row;
