use usdm_overlay::{DmCategory, OverlayData, OverlayError, dataset_url};

// Shape of a real (truncated) usdm_YYYYMMDD.json payload: one feature per
// severity level, geometry retained verbatim.
const PAYLOAD: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "properties": {"OBJECTID": 1, "DM": -1},
         "geometry": {"type": "MultiPolygon", "coordinates": [[[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]]}},
        {"type": "Feature", "properties": {"OBJECTID": 2, "DM": 0},
         "geometry": {"type": "MultiPolygon", "coordinates": [[[[2.0, 0.0], [3.0, 0.0], [3.0, 1.0], [2.0, 0.0]]]]}},
        {"type": "Feature", "properties": {"OBJECTID": 3, "DM": 1},
         "geometry": {"type": "MultiPolygon", "coordinates": []}},
        {"type": "Feature", "properties": {"OBJECTID": 4, "DM": 2},
         "geometry": {"type": "MultiPolygon", "coordinates": []}},
        {"type": "Feature", "properties": {"OBJECTID": 5, "DM": 3},
         "geometry": {"type": "MultiPolygon", "coordinates": []}},
        {"type": "Feature", "properties": {"OBJECTID": 6, "DM": 4},
         "geometry": {"type": "MultiPolygon", "coordinates": []}}
    ]
}"#;

#[test]
fn full_severity_range_decodes() {
    let data = OverlayData::from_json(PAYLOAD).unwrap();
    assert_eq!(data.len(), 6);
    assert_eq!(data.unclassified_count(), 0);
    let categories: Vec<_> = data
        .features()
        .iter()
        .map(|f| f.category.unwrap())
        .collect();
    assert_eq!(categories, DmCategory::ALL.to_vec());
}

#[test]
fn counts_cover_every_category_once() {
    let data = OverlayData::from_json(PAYLOAD).unwrap();
    let counts = data.category_counts();
    assert_eq!(counts.len(), 6);
    assert!(counts.iter().all(|&(_, n)| n == 1));
}

#[test]
fn geometry_is_retained_for_rendering() {
    let data = OverlayData::from_json(PAYLOAD).unwrap();
    assert_eq!(data.features()[0].geometry["type"], "MultiPolygon");
}

#[test]
fn extra_properties_are_ignored() {
    // OBJECTID and friends beyond DM must not break decoding.
    let data = OverlayData::from_json(PAYLOAD).unwrap();
    assert_eq!(data.features()[5].category, Some(DmCategory::ExceptionalDrought));
}

#[test]
fn truncated_payload_reports_decode_error() {
    let err = OverlayData::from_json(&PAYLOAD[..40]).unwrap_err();
    assert!(matches!(err, OverlayError::Decode(_)));
}

#[test]
fn url_matches_upstream_naming() {
    let date = jiff::civil::date(2024, 11, 5);
    assert_eq!(
        dataset_url(date),
        "https://droughtmonitor.unl.edu/data/json/usdm_20241105.json"
    );
}
