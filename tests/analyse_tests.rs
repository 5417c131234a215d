use eyre::Result;
use inflammation::prelude::*;

/// Test a full run from the settings fixture, including the log file
///
/// `analyse` installs the global log subscriber, so this binary holds a single test.
#[test]
fn test_analyse() -> Result<()> {
    let log_file = std::env::temp_dir().join(format!("inflammation-{}.log", std::process::id()));

    let mut settings = read_settings("tests/data/settings.toml")?;
    settings.log.file = Some(log_file.to_string_lossy().into_owned());

    let report = inflammation::analyse(settings)?;

    assert_eq!(report.threshold, 2.0);
    assert_eq!(report.summary.ndays(), 8);
    assert_eq!(report.summary.max[7], Some(7.0));

    let counts: Vec<usize> = report
        .patients
        .iter()
        .map(|patient| patient.above_threshold)
        .collect();
    assert_eq!(counts, vec![3, 1, 3, 1]);

    let alice = report.patient("Alice").expect("Alice is in the report");
    assert_eq!(alice.normalised[7], 1.0);

    let log = std::fs::read_to_string(&log_file)?;
    assert!(log.contains("Starting inflammation analysis"));
    assert!(log.contains("Analysis complete"));
    std::fs::remove_file(&log_file)?;

    Ok(())
}
