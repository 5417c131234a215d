use crate::error::InflammationError;
use crate::routines::names::attach_names;
use crate::routines::normalisation::patient_normalise;
use crate::routines::statistics::DailySummary;
use crate::routines::threshold::daily_above_threshold;
use crate::structs::matrix::Matrix;
use serde_derive::Serialize;

/// Defines the result of an analysis run
///
/// A [Report] holds everything a reporting or plotting front end needs: the daily statistics
/// of the cohort and, per patient, the normalised readings and the number of days above the threshold.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub summary: DailySummary,
    pub threshold: f64,
    pub patients: Vec<PatientReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientReport {
    pub name: String,
    pub above_threshold: usize,
    pub normalised: Vec<f64>,
}

impl Report {
    /// Analyse `matrix`, naming its rows after `names`
    pub fn new<S: AsRef<str>>(
        matrix: &Matrix,
        names: &[S],
        threshold: f64,
    ) -> Result<Self, InflammationError> {
        let records = attach_names(matrix, names)?;
        let normalised = patient_normalise(matrix)?;

        let patients = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| -> Result<PatientReport, InflammationError> {
                Ok(PatientReport {
                    name: record.name,
                    above_threshold: daily_above_threshold(index, matrix, threshold)?,
                    normalised: normalised
                        .row(index)
                        .map(|row| row.iter().map(|cell| cell.unwrap_or(0.0)).collect())
                        .unwrap_or_default(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Report {
            summary: DailySummary::new(matrix),
            threshold,
            patients,
        })
    }

    pub fn patient(&self, name: &str) -> Option<&PatientReport> {
        self.patients.iter().find(|patient| patient.name == name)
    }

    /// Render the report as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use ndarray::array;

    #[test]
    fn test_report() {
        let matrix = Matrix::from(array![[1.0, 5.0, 10.0], [2.0, 2.0, 4.0]]);
        let report = Report::new(&matrix, &["Alice", "Bob"], 3.0).unwrap();

        assert_eq!(report.summary.ndays(), 3);
        assert_eq!(report.patients.len(), 2);

        let alice = report.patient("Alice").unwrap();
        assert_eq!(alice.above_threshold, 2);
        assert_eq!(alice.normalised, vec![0.1, 0.5, 1.0]);

        let bob = report.patient("Bob").unwrap();
        assert_eq!(bob.above_threshold, 1);
        assert_eq!(bob.normalised, vec![0.5, 0.5, 1.0]);
    }

    #[test]
    fn test_report_rejects_negative_readings() {
        let matrix = Matrix::from(array![[1.0, -5.0]]);
        let err = Report::new(&matrix, &["Alice"], 0.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvariantViolation);
    }

    #[test]
    fn test_report_json() {
        let matrix = Matrix::new(array![[Some(1.0), None]]);
        let json = Report::new(&matrix, &["Alice"], 0.0)
            .unwrap()
            .to_json()
            .unwrap();

        assert!(json.contains("\"name\": \"Alice\""));
        assert!(json.contains("null"));
    }
}
