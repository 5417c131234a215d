use crate::error::InflammationError;
use crate::structs::matrix::Matrix;
use ndarray::{Array2, Zip};

/// Normalise each patient's readings against that patient's own peak.
///
/// Every reading of a row is divided by the row maximum, ignoring missing readings when
/// finding the maximum. A missing reading, a row without any reading, or a row whose peak is
/// zero normalises to 0, as does any ratio that is not a non-negative number. The returned
/// matrix has no missing cells.
///
/// Fails before any row is processed if a reading anywhere in the matrix is negative.
pub fn patient_normalise(matrix: &Matrix) -> Result<Matrix, InflammationError> {
    if let Some(((patient, day), _)) = matrix
        .view()
        .indexed_iter()
        .find(|(_, cell)| cell.is_some_and(|value| value < 0.0))
    {
        return Err(InflammationError::NegativeValue { patient, day });
    }

    let mut normalised = Array2::<f64>::zeros((matrix.npatients(), matrix.ndays()));
    Zip::from(normalised.rows_mut())
        .and(matrix.view().rows())
        .for_each(|mut out, row| {
            let peak = row.iter().flatten().copied().reduce(f64::max);
            out.zip_mut_with(&row, |out, cell| *out = ratio(*cell, peak));
        });

    Ok(Matrix::from(normalised))
}

fn ratio(reading: Option<f64>, peak: Option<f64>) -> f64 {
    match (reading, peak) {
        (Some(value), Some(peak)) if peak != 0.0 => {
            let ratio = value / peak;
            if ratio.is_nan() || ratio <= 0.0 {
                0.0
            } else {
                ratio
            }
        }
        _ => 0.0,
    }
}
