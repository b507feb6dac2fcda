//! Database query functions for well data.
//!
//! One fixed query: the wells/stimulation left join. Decoding happens
//! here, once per row, so that type errors surface at the database
//! boundary instead of scattering through the GeoJSON assembly.

use moosicbox_json_utils::database::ToValue as _;
use switchy_database::{Database, Row};
use well_map_database_models::WellStimRow;

use crate::DbError;

/// The fixed wells/stimulation join.
///
/// Ordered by API number then stage number so the GeoJSON collector sees
/// each well's rows grouped together and its stages in ascending order.
const WELL_STIM_SQL: &str = "SELECT w.api, w.well_name, w.latitude, w.longitude, w.status, \
            w.well_type, w.closest_city, w.barrels_oil, w.barrels_gas, \
            w.raw_text, w.notes, \
            s.id AS stim_id, s.stage, s.fluid_vol, s.proppant_lbs, \
            s.chemicals, s.other_fields \
     FROM wells w \
     LEFT JOIN stimulation s ON s.well_api = w.api \
     ORDER BY w.api, s.stage";

/// Fetches and decodes every row of the wells/stimulation join.
///
/// # Errors
///
/// Returns [`DbError`] if the query fails or any row fails to decode.
/// A single bad row fails the whole request; there is no partial-result
/// mode.
pub async fn well_stimulation_rows(db: &dyn Database) -> Result<Vec<WellStimRow>, DbError> {
    let rows = db.query_raw_params(WELL_STIM_SQL, &[]).await?;
    log::debug!("Fetched {} well/stimulation rows", rows.len());
    rows.iter().map(decode_row).collect()
}

fn decode_row(row: &Row) -> Result<WellStimRow, DbError> {
    Ok(WellStimRow {
        api: req_string(row, "api")?,
        well_name: opt_string(row, "well_name")?,
        latitude: opt_f64(row, "latitude")?,
        longitude: opt_f64(row, "longitude")?,
        status: opt_string(row, "status")?,
        well_type: opt_string(row, "well_type")?,
        closest_city: opt_string(row, "closest_city")?,
        barrels_oil: opt_f64(row, "barrels_oil")?,
        barrels_gas: opt_f64(row, "barrels_gas")?,
        raw_text: decode_document("raw_text", opt_string(row, "raw_text")?)?,
        notes: opt_string(row, "notes")?,
        stim_id: opt_i64(row, "stim_id")?,
        stage: opt_i64(row, "stage")?,
        fluid_vol: opt_f64(row, "fluid_vol")?,
        proppant_lbs: opt_f64(row, "proppant_lbs")?,
        chemicals: opt_string(row, "chemicals")?,
        other_fields: decode_document("other_fields", opt_string(row, "other_fields")?)?,
    })
}

fn conversion(col: &str, detail: &str) -> DbError {
    DbError::Conversion {
        message: format!("Failed to decode column {col}: {detail}"),
    }
}

fn req_string(row: &Row, col: &str) -> Result<String, DbError> {
    row.to_value(col).map_err(|e| conversion(col, &e.to_string()))
}

fn opt_string(row: &Row, col: &str) -> Result<Option<String>, DbError> {
    row.to_value(col).map_err(|e| conversion(col, &e.to_string()))
}

fn opt_f64(row: &Row, col: &str) -> Result<Option<f64>, DbError> {
    let direct: Result<Option<f64>, _> = row.to_value(col);
    match direct {
        Ok(v) => Ok(v),
        // Scraped numeric columns occasionally land as text. Parse those
        // instead of failing, but a value that is neither is fatal.
        Err(_) => {
            let text: Option<String> = row
                .to_value(col)
                .map_err(|e| conversion(col, &e.to_string()))?;
            text.map(|s| parse_numeric(col, &s)).transpose()
        }
    }
}

fn opt_i64(row: &Row, col: &str) -> Result<Option<i64>, DbError> {
    let direct: Result<Option<i64>, _> = row.to_value(col);
    match direct {
        Ok(v) => Ok(v),
        Err(_) => {
            let text: Option<String> = row
                .to_value(col)
                .map_err(|e| conversion(col, &e.to_string()))?;
            text.map(|s| parse_integer(col, &s)).transpose()
        }
    }
}

fn parse_numeric(col: &str, text: &str) -> Result<f64, DbError> {
    text.trim()
        .parse()
        .map_err(|_| conversion(col, &format!("invalid numeric value {text:?}")))
}

fn parse_integer(col: &str, text: &str) -> Result<i64, DbError> {
    text.trim()
        .parse()
        .map_err(|_| conversion(col, &format!("invalid integer value {text:?}")))
}

/// Decodes a JSON-text document column.
///
/// Null and empty string both map to `None`; the ingest pipeline
/// historically wrote `""` for blank blobs. Anything else must parse as
/// JSON or the whole request fails.
fn decode_document(col: &str, raw: Option<String>) -> Result<Option<serde_json::Value>, DbError> {
    match raw {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => serde_json::from_str(&s)
            .map(Some)
            .map_err(|e| conversion(col, &format!("invalid JSON: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_document_object() {
        let doc = decode_document("raw_text", Some("{\"a\":1}".to_string())).unwrap();
        assert_eq!(doc, Some(serde_json::json!({"a": 1})));
    }

    #[test]
    fn empty_document_string_is_absent() {
        let doc = decode_document("raw_text", Some(String::new())).unwrap();
        assert_eq!(doc, None);
    }

    #[test]
    fn null_document_is_absent() {
        let doc = decode_document("other_fields", None).unwrap();
        assert_eq!(doc, None);
    }

    #[test]
    fn malformed_document_is_an_error() {
        let result = decode_document("raw_text", Some("{not json".to_string()));
        assert!(matches!(result, Err(DbError::Conversion { .. })));
    }

    #[test]
    fn parses_textual_numeric() {
        let v = parse_numeric("barrels_oil", " 1234.5 ").unwrap();
        assert!((v - 1234.5).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_non_numeric_text() {
        let result = parse_numeric("barrels_oil", "not_a_number");
        assert!(matches!(result, Err(DbError::Conversion { .. })));
    }

    #[test]
    fn parses_textual_integer() {
        assert_eq!(parse_integer("stage", "7").unwrap(), 7);
    }

    #[test]
    fn rejects_fractional_integer_text() {
        let result = parse_integer("stage", "7.5");
        assert!(matches!(result, Err(DbError::Conversion { .. })));
    }
}
