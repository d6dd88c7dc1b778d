use super::*;

#[test]
fn empty_object_is_all_defaults() {
    let opts: DatasetOpts = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, DatasetOpts::default());
    assert_eq!(opts.input_dir, PathBuf::from("data"));
    assert_eq!(opts.output_dir, PathBuf::from("new-data"));
    assert_eq!(opts.record_limit, 50_000);
    assert_eq!(opts.padding, PaddingRange::new(30, 85).unwrap());
}

#[test]
fn partial_config_overrides_selected_fields() {
    let opts: DatasetOpts = serde_json::from_str(
        r#"{"seed": 5, "padding": {"min": 10, "max": 20}, "threading": {"threads": 2}}"#,
    )
    .unwrap();
    assert_eq!(opts.seed, Some(5));
    assert_eq!(opts.padding.min(), 10);
    assert_eq!(opts.threading.threads, Some(2));
    assert!(opts.threading.parallel);
    assert_eq!(opts.threading.chunk_size, 1024);
}

#[test]
fn inverted_padding_is_rejected_at_parse() {
    assert!(serde_json::from_str::<DatasetOpts>(r#"{"padding": {"min": 9, "max": 1}}"#).is_err());
}

#[test]
fn validate_rejects_zero_sizes() {
    let mut opts = DatasetOpts {
        combine: Some(0),
        ..DatasetOpts::default()
    };
    assert!(opts.validate().is_err());
    opts.combine = Some(2);
    assert!(opts.validate().is_ok());
    opts.threading.threads = Some(0);
    assert!(opts.validate().is_err());
}

#[test]
fn from_path_reports_missing_file() {
    let err = DatasetOpts::from_path("target/missing-config.json").unwrap_err();
    assert!(err.to_string().contains("missing-config.json"));
}

#[test]
fn assemble_opts_carries_seed_and_limits() {
    let opts = DatasetOpts {
        record_limit: 7,
        ..DatasetOpts::default()
    };
    let a = opts.assemble_opts(99);
    assert_eq!(a.seed, 99);
    assert_eq!(a.record_limit, 7);
    assert_eq!(a.padding, opts.padding);
}
