//! `GET /export.csv`: the raw sheet with its header row.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;
use csv::Writer;
use rsvp_core::sheet::{HEADERS, SheetRow};

use super::error::ApiError;
use super::state::AppState;

pub async fn export_csv(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = state.sheet.rows().await?;
    let body = render(&rows)?;

    Ok((
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8"),
            (CONTENT_DISPOSITION, "attachment; filename=\"submissions.csv\""),
        ],
        body,
    ))
}

pub fn render(rows: &[SheetRow]) -> Result<String, ApiError> {
    let mut wtr = Writer::from_writer(vec![]);

    wtr.write_record(HEADERS)?;
    for row in rows {
        wtr.write_record(row.cells())?;
    }

    let data = wtr
        .into_inner()
        .map_err(|err| ApiError::internal(err.to_string()))?;
    String::from_utf8(data).map_err(|err| ApiError::internal(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_then_rows_in_order() {
        let first = SheetRow::from_cells(["a", "Mr.", "John, Jr."]);
        let second = SheetRow::from_cells(["b"]);

        let csv = render(&[first, second]).expect("csv renders");
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("id,parent1_title,parent1_fullName,parent1_phone,"));
        assert!(lines[0].ends_with(",attendance,submissionDate"));
        assert!(lines[1].starts_with("a,Mr.,\"John, Jr.\","));
        assert!(lines[2].starts_with("b,"));
        assert_eq!(lines[2].matches(',').count(), 23);
    }
}
