use serde_json::json;

use super::*;

#[test]
fn stroke_rejects_mismatched_lengths() {
    assert!(Stroke::new(vec![0.0, 1.0], vec![0.0]).is_err());
    let s = Stroke::new(vec![0.0, 1.0], vec![2.0, 3.0]).unwrap();
    assert_eq!(s.points().collect::<Vec<_>>(), vec![(0.0, 2.0), (1.0, 3.0)]);
}

#[test]
fn record_decodes_simplified_format_and_ignores_extra_fields() {
    let v = json!({
        "word": "cat",
        "countrycode": "US",
        "recognized": true,
        "key_id": "5066306953592832",
        "drawing": [[[0, 10, 20], [0, 10, 0]], [[], []]]
    });
    let rec = DrawingRecord::from_value(v).unwrap();
    assert_eq!(rec.word, "cat");
    assert_eq!(rec.drawing.strokes.len(), 2);
    assert_eq!(rec.drawing.strokes[0].len(), 3);
    assert!(rec.drawing.strokes[1].is_empty());
}

#[test]
fn record_accepts_raw_format_timing_array() {
    let v = json!({
        "word": "line",
        "drawing": [[[0, 5], [1, 6], [0, 120]]]
    });
    let rec = DrawingRecord::from_value(v).unwrap();
    assert_eq!(
        rec.drawing.strokes[0].points().collect::<Vec<_>>(),
        vec![(0.0, 1.0), (5.0, 6.0)]
    );
}

#[test]
fn malformed_drawing_is_a_record_decode_error() {
    let cases = [
        json!({"word": "x", "drawing": "not-strokes"}),
        json!({"word": "x", "drawing": [[[0, 1]]]}),
        json!({"word": "x", "drawing": [[[0, 1], [0]]]}),
        json!({"drawing": []}),
    ];
    for v in cases {
        let err = DrawingRecord::from_value(v).unwrap_err();
        assert!(matches!(err, StrokeGridError::RecordDecode(_)), "{err}");
    }
}

#[test]
fn labeled_record_serializes_expected_keys() {
    let rec = LabeledRecord {
        id: 3,
        word: "dot".to_string(),
        pixels: BinaryGrid::from_rows(&[vec![1u8, 0]]).unwrap(),
    };
    let v = serde_json::to_value(&rec).unwrap();
    assert_eq!(v, json!({"id": 3, "word": "dot", "pixels": [[1, 0]]}));
}
