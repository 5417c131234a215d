use eyre::Result;
use inflammation::prelude::*;

/// Test reading the settings fixture
#[test]
fn test_read_settings() -> Result<()> {
    let settings = read_settings("tests/data/settings.toml")?;

    assert_eq!(settings.paths.data, "tests/data/inflammation.csv");
    assert_eq!(settings.analysis.threshold, 2.0);
    assert_eq!(
        settings.analysis.names,
        Some(vec![
            "Alice".to_string(),
            "Bob".to_string(),
            "Carol".to_string(),
            "Dave".to_string()
        ])
    );
    assert_eq!(settings.log.level, "debug");

    Ok(())
}

/// Test the analysis of the fixture without installing a logger
#[test]
fn test_analyse_internal() -> Result<()> {
    let settings = read_settings("tests/data/settings.toml")?;
    let matrix = load_matrix(&settings.paths.data)?;
    let report = inflammation::analyse_internal(&matrix, &settings)?;

    assert_eq!(report.threshold, 2.0);
    assert_eq!(report.summary.ndays(), 8);

    let counts: Vec<(&str, usize)> = report
        .patients
        .iter()
        .map(|patient| (patient.name.as_str(), patient.above_threshold))
        .collect();
    assert_eq!(
        counts,
        vec![("Alice", 3), ("Bob", 1), ("Carol", 3), ("Dave", 1)]
    );

    Ok(())
}

/// Test the default patient names
#[test]
fn test_analyse_default_names() -> Result<()> {
    let settings = parse_settings("[paths]\ndata = \"unused.csv\"\n")?;
    let matrix = Matrix::from(ndarray::array![[1.0, 2.0], [3.0, 4.0]]);
    let report = inflammation::analyse_internal(&matrix, &settings)?;

    assert!(report.patient("Patient 1").is_some());
    assert!(report.patient("Patient 2").is_some());

    Ok(())
}

/// Test that a names list of the wrong length is reported
#[test]
fn test_analyse_name_mismatch() -> Result<()> {
    let settings = parse_settings("[paths]\ndata = \"unused.csv\"\n[analysis]\nnames = [\"Alice\"]\n")?;
    let matrix = Matrix::from(ndarray::array![[1.0, 2.0], [3.0, 4.0]]);

    assert!(inflammation::analyse_internal(&matrix, &settings).is_err());

    Ok(())
}
