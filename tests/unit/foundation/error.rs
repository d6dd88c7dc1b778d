use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StrokeGridError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        StrokeGridError::shard_read("x")
            .to_string()
            .contains("shard read error:")
    );
    assert!(
        StrokeGridError::record_decode("x")
            .to_string()
            .contains("record decode error:")
    );
    assert!(
        StrokeGridError::output_write("x")
            .to_string()
            .contains("output write error:")
    );
}

#[test]
fn errors_convert_into_anyhow_at_the_binary_edge() {
    fn fails() -> anyhow::Result<()> {
        Err(StrokeGridError::shard_read("line 3: invalid JSON"))?;
        Ok(())
    }
    let err = fails().unwrap_err();
    assert!(err.to_string().contains("line 3"));
    assert!(matches!(
        err.downcast_ref::<StrokeGridError>(),
        Some(StrokeGridError::ShardRead(_))
    ));
}
