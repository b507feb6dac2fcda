#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! GeoJSON assembly for the wells API.
//!
//! Collapses the denormalized wells/stimulation join into a
//! `FeatureCollection`: one `Feature` per distinct API number, with the
//! well's stimulation stages nested under `properties.stimulation`. The
//! collapse is a single forward pass over the rows, O(rows) time,
//! O(wells + stages) space, and performs no I/O.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::Serialize;
use well_map_database_models::WellStimRow;
use well_map_wells_models::{StimulationStage, WellProperties};

/// A GeoJSON Point whose coordinates may be partially unknown.
///
/// Wells that were never geocoded keep `null` in place of the missing
/// longitude or latitude rather than dropping the geometry, which is
/// what the map frontend expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointGeometry {
    /// Always `"Point"`.
    #[serde(rename = "type")]
    pub geometry_type: &'static str,
    /// Longitude first, then latitude.
    pub coordinates: [Option<f64>; 2],
}

impl PointGeometry {
    /// Creates a Point at the given coordinates.
    #[must_use]
    pub const fn new(longitude: Option<f64>, latitude: Option<f64>) -> Self {
        Self {
            geometry_type: "Point",
            coordinates: [longitude, latitude],
        }
    }
}

/// A GeoJSON Feature wrapping exactly one well.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    /// Always `"Feature"`.
    #[serde(rename = "type")]
    pub feature_type: &'static str,
    /// Point geometry from the well's longitude/latitude.
    pub geometry: PointGeometry,
    /// Well attributes, with stimulation stages nested as an array.
    pub properties: WellProperties,
}

/// A GeoJSON `FeatureCollection` of wells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCollection {
    /// Always `"FeatureCollection"`.
    #[serde(rename = "type")]
    pub collection_type: &'static str,
    /// Features in first-appearance order of their API numbers.
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Creates a collection from already-built features.
    #[must_use]
    pub const fn new(features: Vec<Feature>) -> Self {
        Self {
            collection_type: "FeatureCollection",
            features,
        }
    }
}

/// Collapses ordered join rows into a [`FeatureCollection`].
///
/// One `Feature` is created per distinct API number, in first-appearance
/// order. Well-level fields come from the first row seen for that well;
/// later rows for the same well only contribute stimulation stages, so
/// inconsistent upstream data cannot overwrite an already-built feature.
/// Rows with a null `stim_id` mark wells with no stimulation records and
/// add no stage.
///
/// Callers are expected to supply rows ordered by API then stage so that
/// stages land in ascending stage order, but correctness does not depend
/// on grouping: the index tolerates interleaved wells.
#[must_use]
pub fn collect_features(rows: &[WellStimRow]) -> FeatureCollection {
    let mut features: Vec<Feature> = Vec::new();
    // api -> position in `features`
    let mut index: BTreeMap<&str, usize> = BTreeMap::new();

    for row in rows {
        let slot = match index.entry(row.api.as_str()) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                features.push(feature_from_row(row));
                *entry.insert(features.len() - 1)
            }
        };

        if let Some(stim_id) = row.stim_id {
            features[slot].properties.stimulation.push(StimulationStage {
                id: stim_id,
                stage: row.stage,
                fluid_vol: row.fluid_vol,
                proppant_lbs: row.proppant_lbs,
                chemicals: row.chemicals.clone(),
                other_fields: row.other_fields.clone(),
            });
        }
    }

    FeatureCollection::new(features)
}

fn feature_from_row(row: &WellStimRow) -> Feature {
    Feature {
        feature_type: "Feature",
        geometry: PointGeometry::new(row.longitude, row.latitude),
        properties: WellProperties {
            api: row.api.clone(),
            well_name: row.well_name.clone(),
            status: row.status.clone(),
            well_type: row.well_type.clone(),
            closest_city: row.closest_city.clone(),
            barrels_oil: row.barrels_oil,
            barrels_gas: row.barrels_gas,
            raw_text: row.raw_text.clone(),
            notes: row.notes.clone(),
            stimulation: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(api: &str) -> WellStimRow {
        WellStimRow {
            api: api.to_string(),
            well_name: None,
            latitude: None,
            longitude: None,
            status: None,
            well_type: None,
            closest_city: None,
            barrels_oil: None,
            barrels_gas: None,
            raw_text: None,
            notes: None,
            stim_id: None,
            stage: None,
            fluid_vol: None,
            proppant_lbs: None,
            chemicals: None,
            other_fields: None,
        }
    }

    fn stim_row(api: &str, stim_id: i64, stage: i64) -> WellStimRow {
        WellStimRow {
            stim_id: Some(stim_id),
            stage: Some(stage),
            ..row(api)
        }
    }

    #[test]
    fn empty_input_yields_empty_collection() {
        let fc = collect_features(&[]);
        let value = serde_json::to_value(&fc).unwrap();
        assert_eq!(value, json!({"type": "FeatureCollection", "features": []}));
    }

    #[test]
    fn single_well_without_stimulation() {
        let fc = collect_features(&[WellStimRow {
            latitude: Some(34.0),
            longitude: Some(-118.0),
            ..row("API1")
        }]);

        assert_eq!(fc.features.len(), 1);
        let feature = &fc.features[0];
        assert_eq!(feature.geometry.coordinates, [Some(-118.0), Some(34.0)]);
        assert!(feature.properties.stimulation.is_empty());
    }

    #[test]
    fn stages_collect_in_row_order() {
        let fc = collect_features(&[stim_row("API1", 1, 1), stim_row("API1", 2, 2)]);

        assert_eq!(fc.features.len(), 1);
        let stages = &fc.features[0].properties.stimulation;
        assert_eq!(stages.len(), 2);
        assert_eq!(stages[0].id, 1);
        assert_eq!(stages[0].stage, Some(1));
        assert_eq!(stages[1].id, 2);
        assert_eq!(stages[1].stage, Some(2));
    }

    #[test]
    fn one_feature_per_distinct_well() {
        let rows = vec![
            stim_row("API1", 1, 1),
            stim_row("API1", 2, 2),
            stim_row("API1", 3, 3),
            row("API2"),
            stim_row("API3", 4, 1),
        ];
        let fc = collect_features(&rows);

        assert_eq!(fc.features.len(), 3);
        assert_eq!(fc.features[0].properties.stimulation.len(), 3);
        assert_eq!(fc.features[1].properties.stimulation.len(), 0);
        assert_eq!(fc.features[2].properties.stimulation.len(), 1);
    }

    #[test]
    fn first_seen_well_fields_win() {
        let first = WellStimRow {
            well_name: Some("Smith 1".to_string()),
            ..stim_row("API1", 1, 1)
        };
        let second = WellStimRow {
            well_name: Some("Smith 1 (renamed)".to_string()),
            ..stim_row("API1", 2, 2)
        };
        let fc = collect_features(&[first, second]);

        assert_eq!(fc.features.len(), 1);
        assert_eq!(
            fc.features[0].properties.well_name.as_deref(),
            Some("Smith 1")
        );
        assert_eq!(fc.features[0].properties.stimulation.len(), 2);
    }

    #[test]
    fn features_keep_first_appearance_order() {
        // Ungrouped input: API1 rows interleaved around API2.
        let rows = vec![
            stim_row("API1", 1, 1),
            stim_row("API2", 2, 1),
            stim_row("API1", 3, 2),
        ];
        let fc = collect_features(&rows);

        let apis: Vec<&str> = fc
            .features
            .iter()
            .map(|f| f.properties.api.as_str())
            .collect();
        assert_eq!(apis, ["API1", "API2"]);
        assert_eq!(fc.features[0].properties.stimulation.len(), 2);
    }

    #[test]
    fn null_fields_serialize_as_null() {
        let fc = collect_features(&[row("API1")]);
        let value = serde_json::to_value(&fc).unwrap();

        let props = &value["features"][0]["properties"];
        assert!(props["barrels_oil"].is_null());
        assert!(props["barrels_gas"].is_null());
        assert!(props["raw_text"].is_null());
        assert!(props["notes"].is_null());
        let coords = &value["features"][0]["geometry"]["coordinates"];
        assert_eq!(*coords, json!([null, null]));
    }

    #[test]
    fn decoded_documents_embed_as_objects() {
        let fc = collect_features(&[WellStimRow {
            raw_text: Some(json!({"a": 1})),
            ..row("API2")
        }]);
        let value = serde_json::to_value(&fc).unwrap();

        assert_eq!(
            value["features"][0]["properties"]["raw_text"],
            json!({"a": 1})
        );
    }

    #[test]
    fn stage_documents_pass_through() {
        let fc = collect_features(&[WellStimRow {
            other_fields: Some(json!({"stim_volume": 100})),
            fluid_vol: Some(5000.0),
            ..stim_row("API1", 9, 1)
        }]);

        let stage = &fc.features[0].properties.stimulation[0];
        assert_eq!(stage.other_fields, Some(json!({"stim_volume": 100})));
        assert_eq!(stage.fluid_vol, Some(5000.0));
    }

    #[test]
    fn aggregation_is_pure() {
        let rows = vec![
            stim_row("API1", 1, 1),
            stim_row("API2", 2, 1),
            row("API3"),
        ];
        assert_eq!(collect_features(&rows), collect_features(&rows));
    }

    #[test]
    fn output_parses_as_geojson() {
        let fc = collect_features(&[WellStimRow {
            latitude: Some(48.1),
            longitude: Some(-103.6),
            well_name: Some("Bakken 7".to_string()),
            ..stim_row("API1", 1, 1)
        }]);
        let text = serde_json::to_string(&fc).unwrap();

        let parsed: geojson::GeoJson = text.parse().unwrap();
        match parsed {
            geojson::GeoJson::FeatureCollection(collection) => {
                assert_eq!(collection.features.len(), 1);
                assert!(collection.features[0].geometry.is_some());
            }
            other => panic!("expected a FeatureCollection, got {other:?}"),
        }
    }
}
