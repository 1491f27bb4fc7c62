use super::*;
use crate::data::palette::ColorScale;

fn rec(file_name: &str, label: &str, lat: f64, dev: f64) -> Record {
    Record::from_fields(
        [
            file_name,
            label,
            &lat.to_string(),
            "-80",
            "0.5",
            &dev.to_string(),
        ],
        1,
        &ColorScale::default(),
    )
    .unwrap()
}

#[test]
fn auto_frames_number_in_sorted_label_order() {
    let index = FrameIndex::load([
        rec("auto", "2016-10-02", 33.0, 3.0),
        rec("auto", "2016-10-01", 33.0, 3.0),
        rec("auto", "2016-10-03", 33.0, 3.0),
    ])
    .unwrap();
    assert_eq!(index.naming(), FrameNaming::AutoNumbered);

    let plan = index.plan(Path::new("out"));
    let got: Vec<_> = plan
        .iter()
        .map(|p| (p.seq, p.path.clone(), p.frame.label().unwrap().to_string()))
        .collect();
    assert_eq!(
        got,
        vec![
            (0, PathBuf::from("out/0000.png"), "2016-10-01".to_string()),
            (1, PathBuf::from("out/0001.png"), "2016-10-02".to_string()),
            (2, PathBuf::from("out/0002.png"), "2016-10-03".to_string()),
        ]
    );
}

#[test]
fn explicit_file_names_pass_through() {
    let index = FrameIndex::load([
        rec("0001.png", "2016-10-09", 33.0, 3.0),
        rec("0001.png", "2016-10-09", 34.0, 3.0),
        rec("0000.png", "2016-10-10", 33.0, 3.0),
    ])
    .unwrap();
    assert_eq!(index.naming(), FrameNaming::Explicit);
    assert_eq!(index.len(), 2);

    let plan = index.plan(Path::new("frames"));
    assert_eq!(plan[0].path, PathBuf::from("frames/0000.png"));
    assert_eq!(plan[1].path, PathBuf::from("frames/0001.png"));
    assert_eq!(plan[1].frame.label(), Some("2016-10-09"));
}

#[test]
fn records_keep_source_order_within_a_frame() {
    let index = FrameIndex::load([
        rec("a.png", "first", 3.0, 3.0),
        rec("b.png", "other", 9.0, 3.0),
        rec("a.png", "second", 1.0, 3.0),
        rec("a.png", "third", 2.0, 3.0),
    ])
    .unwrap();
    let a = index.get("a.png").unwrap();
    let lats: Vec<f64> = a.records().iter().map(|r| r.latitude).collect();
    assert_eq!(lats, vec![3.0, 1.0, 2.0]);
    assert_eq!(a.label(), Some("first"));
    assert_eq!(a.key(), "a.png");
}

#[test]
fn keys_sort_as_strings_not_numbers() {
    let index = FrameIndex::load([
        rec("9.png", "x", 1.0, 3.0),
        rec("10.png", "x", 1.0, 3.0),
    ])
    .unwrap();
    let keys: Vec<&str> = index.frames().map(Frame::key).collect();
    assert_eq!(keys, vec!["10.png", "9.png"]);
}

#[test]
fn mixing_auto_and_explicit_is_rejected() {
    let err = FrameIndex::load([
        rec("0001.png", "2016-10-01", 33.0, 3.0),
        rec("auto", "2016-10-02", 33.0, 3.0),
    ])
    .unwrap_err();
    assert!(err.is_config());
}

#[test]
fn explicit_names_are_used_verbatim() {
    let index = FrameIndex::load([
        rec("frame01", "x", 1.0, 3.0),
        rec("0001.dat", "y", 1.0, 3.0),
    ])
    .unwrap();
    let paths: Vec<PathBuf> = index.plan(Path::new("out")).into_iter().map(|p| p.path).collect();
    assert_eq!(
        paths,
        vec![Path::new("out").join("0001.dat"), Path::new("out").join("frame01")]
    );
}

#[test]
fn uncolored_records_stay_in_their_frame() {
    let index = FrameIndex::load([
        rec("a.png", "x", 1.0, 0.5),
        rec("a.png", "x", 2.0, 4.0),
    ])
    .unwrap();
    let frame = index.get("a.png").unwrap();
    assert_eq!(frame.records().len(), 2);
    assert!(frame.records()[0].color.is_none());
    assert!(frame.records()[1].color.is_some());
}

#[test]
fn empty_input_gives_empty_index() {
    let index = FrameIndex::load(Vec::new()).unwrap();
    assert!(index.is_empty());
    assert!(index.plan(Path::new("out")).is_empty());
}

#[test]
fn auto_names_are_zero_padded() {
    assert_eq!(auto_file_name(0), "0000.png");
    assert_eq!(auto_file_name(42), "0042.png");
    assert_eq!(auto_file_name(12345), "12345.png");
}
