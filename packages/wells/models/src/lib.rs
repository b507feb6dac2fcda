#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Well and stimulation-stage domain types.
//!
//! These are the entities produced by collapsing the denormalized
//! wells/stimulation join: one well per distinct API number, owning its
//! stimulation stages as an ordered sequence. They serialize directly as
//! the `properties` half of the GeoJSON output, so every optional field
//! keeps an explicit `null` rather than being omitted.

use serde::{Deserialize, Serialize};

/// One stimulation treatment stage belonging to a well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StimulationStage {
    /// Primary key of the stimulation row.
    pub id: i64,
    /// Stage number within the well's treatment program.
    pub stage: Option<i64>,
    /// Fluid volume pumped.
    pub fluid_vol: Option<f64>,
    /// Proppant mass, in pounds.
    pub proppant_lbs: Option<f64>,
    /// Free-form chemicals description.
    pub chemicals: Option<String>,
    /// Extra per-stage fields captured at ingest, decoded from their
    /// stored JSON form.
    pub other_fields: Option<serde_json::Value>,
}

/// Well attributes as flattened into GeoJSON `properties`, with the
/// well's stimulation stages nested as an array.
///
/// Exactly one of these exists per distinct API number regardless of the
/// join fan-out that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellProperties {
    /// API well number (the join/grouping key).
    pub api: String,
    /// Well name as recorded by the state.
    pub well_name: Option<String>,
    /// Operational status (e.g. active, plugged).
    pub status: Option<String>,
    /// Well type (e.g. oil, gas, injection).
    pub well_type: Option<String>,
    /// Nearest city.
    pub closest_city: Option<String>,
    /// Cumulative oil production, in barrels.
    pub barrels_oil: Option<f64>,
    /// Cumulative gas production, in barrels.
    pub barrels_gas: Option<f64>,
    /// Original scraped record, decoded from its stored JSON form.
    pub raw_text: Option<serde_json::Value>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Stages in the order the join returned them (ascending stage
    /// number for well-ordered input).
    pub stimulation: Vec<StimulationStage>,
}
