use crate::error::InflammationError;
use crate::structs::matrix::Matrix;

/// Count the days on which a patient's reading is strictly above `threshold`.
///
/// Missing readings never count.
pub fn daily_above_threshold(
    patient_row: usize,
    matrix: &Matrix,
    threshold: f64,
) -> Result<usize, InflammationError> {
    let row = matrix
        .row(patient_row)
        .ok_or(InflammationError::PatientOutOfRange {
            row: patient_row,
            npatients: matrix.npatients(),
        })?;

    Ok(row
        .iter()
        .flatten()
        .fold(0, |count, &value| if value > threshold { count + 1 } else { count }))
}
