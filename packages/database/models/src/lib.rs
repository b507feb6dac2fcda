#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Database row types for the wells/stimulation join.
//!
//! These types represent the shape of data as retrieved from the
//! database, decoded once at the query boundary into explicit optional
//! fields. They are distinct from the domain types in
//! `well_map_wells_models`, which describe the collapsed per-well output.

use serde::{Deserialize, Serialize};

/// One row of the `wells LEFT JOIN stimulation` query.
///
/// The join fans out to one row per well/stage pair. A well with no
/// stimulation records appears exactly once, with `stim_id` null and
/// every stage-level field null.
///
/// Document columns (`raw_text`, `other_fields`) are stored as JSON text
/// and arrive here already decoded; empty strings in storage are treated
/// the same as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellStimRow {
    /// API well number (primary join key, never null).
    pub api: String,
    /// Well name.
    pub well_name: Option<String>,
    /// Latitude (WGS84).
    pub latitude: Option<f64>,
    /// Longitude (WGS84).
    pub longitude: Option<f64>,
    /// Operational status.
    pub status: Option<String>,
    /// Well type.
    pub well_type: Option<String>,
    /// Nearest city.
    pub closest_city: Option<String>,
    /// Cumulative oil production, in barrels.
    pub barrels_oil: Option<f64>,
    /// Cumulative gas production, in barrels.
    pub barrels_gas: Option<f64>,
    /// Original scraped record, decoded from JSON text.
    pub raw_text: Option<serde_json::Value>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Stimulation row primary key; null when the well has no
    /// stimulation records.
    pub stim_id: Option<i64>,
    /// Stage number.
    pub stage: Option<i64>,
    /// Fluid volume pumped.
    pub fluid_vol: Option<f64>,
    /// Proppant mass, in pounds.
    pub proppant_lbs: Option<f64>,
    /// Chemicals description.
    pub chemicals: Option<String>,
    /// Extra per-stage fields, decoded from JSON text.
    pub other_fields: Option<serde_json::Value>,
}
