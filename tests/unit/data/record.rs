use super::*;

fn record(fields: [&str; 6]) -> HeatmapResult<Record> {
    Record::from_fields(fields, 2, &ColorScale::default())
}

#[test]
fn explicit_row_parses_and_resolves_color() {
    let r = record(["0001.png", "2016-10-01", "33", "-80", "0.5", "2.57"]).unwrap();
    assert_eq!(r.file_name, FileName::Explicit("0001.png".to_string()));
    assert_eq!(r.label.as_deref(), Some("2016-10-01"));
    assert_eq!(r.latitude, 33.0);
    assert_eq!(r.longitude, -80.0);
    assert_eq!(r.width, 0.5);
    assert_eq!(r.color, Some(Rgba8::opaque(0, 0, 255)));
    assert_eq!(r.frame_key(), "0001.png");
}

#[test]
fn below_baseline_row_is_kept_without_color() {
    let r = record(["0001.png", "2016-10-01", "33", "-80.5", "0.5", "1.6"]).unwrap();
    assert_eq!(r.color, None);
}

#[test]
fn auto_rows_key_by_label() {
    let r = record(["auto", "2016-10-02", "33", "-80", "0.5", "3"]).unwrap();
    assert!(r.file_name.is_auto());
    assert_eq!(r.frame_key(), "2016-10-02");

    let unlabeled = record(["auto", "", "33", "-80", "0.5", "3"]).unwrap();
    assert_eq!(unlabeled.label, None);
    assert_eq!(unlabeled.frame_key(), "");
}

#[test]
fn numeric_fields_are_trimmed() {
    let r = record(["a.png", "x", " 41.5 ", "-87.0625 ", " 0.0625", "4.2 "]).unwrap();
    assert_eq!(r.latitude, 41.5);
    assert_eq!(r.width, 0.0625);
}

#[test]
fn malformed_numbers_are_data_errors_with_line() {
    let err = record(["a.png", "x", "north", "-80", "0.5", "3"]).unwrap_err();
    assert!(matches!(err, HeatmapError::DataParse(_)));
    assert!(err.to_string().contains("line 2"));
    assert!(err.to_string().contains("latitude"));

    assert!(matches!(
        record(["a.png", "x", "33", "-80", "0.5", "NaN"]).unwrap_err(),
        HeatmapError::DataParse(_)
    ));
}

#[test]
fn zero_and_negative_widths_are_accepted() {
    assert_eq!(record(["a.png", "x", "33", "-80", "0", "3"]).unwrap().width, 0.0);
    assert_eq!(record(["a.png", "x", "33", "-80", "-1.5", "3"]).unwrap().width, -1.5);
}

#[test]
fn unsafe_file_names_are_config_errors() {
    for name in ["../escape.png", "dir/0001.png", "..", "", "a\\b.png"] {
        let err = record([name, "x", "33", "-80", "0.5", "3"]).unwrap_err();
        assert!(err.is_config(), "{name}: {err}");
    }
    let err = record(["..", "x", "33", "-80", "0.5", "3"]).unwrap_err();
    assert_eq!(err.to_string().matches("config error:").count(), 1);
}
