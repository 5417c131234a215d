use crate::prelude::*;

use eyre::{Result, WrapErr};
use std::time::Instant;

/// Primary entrypoint for an inflammation analysis
///
/// Sets up logging, reads the datafile named in the settings and analyses it.
/// See [settings::Settings] for the configuration file format.
pub fn analyse(settings: Settings) -> Result<Report> {
    let now = Instant::now();

    logger::setup_log(&settings)?;
    tracing::info!("Starting inflammation analysis");

    // Read input data
    let matrix = load_matrix(&settings.paths.data)
        .wrap_err_with(|| format!("Failed to load inflammation data from {}", settings.paths.data))?;

    let report = analyse_internal(&matrix, &settings)?;

    tracing::info!("Analysis complete after {:.2?}", now.elapsed());
    Ok(report)
}

/// Alternative entrypoint, primarily meant for embedding the analysis in other programs
///
/// Analyses an already loaded [Matrix]. It does not set up logging.
pub fn analyse_internal(matrix: &Matrix, settings: &Settings) -> Result<Report> {
    // Provide information of the input data
    tracing::info!(
        "Datafile contains {} patients observed over {} days",
        matrix.npatients(),
        matrix.ndays()
    );
    if matrix.has_missing() {
        tracing::warn!(
            "Datafile contains missing readings; they normalise to 0 and leave their day without statistics"
        );
    }

    let names = match &settings.analysis.names {
        Some(names) => names.clone(),
        None => (1..=matrix.npatients())
            .map(|index| format!("Patient {index}"))
            .collect(),
    };

    let report = Report::new(matrix, names.as_slice(), settings.analysis.threshold)
        .wrap_err("Failed to analyse inflammation data")?;

    tracing::info!(
        "{} patients have readings above {}",
        report
            .patients
            .iter()
            .filter(|patient| patient.above_threshold > 0)
            .count(),
        settings.analysis.threshold
    );
    Ok(report)
}
