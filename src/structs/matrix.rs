use crate::error::InflammationError;
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A table of daily inflammation readings.
///
/// Each row holds the readings of one patient and each column one day of the study.
/// Missing readings are stored as `None`; a present reading is never NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Array2<Option<f64>>,
}

impl Matrix {
    pub fn new(data: Array2<Option<f64>>) -> Self {
        let data = data.mapv(|cell| cell.filter(|value| !value.is_nan()));
        Matrix { data }
    }

    /// Build a matrix from rows of readings, failing if the rows differ in length
    pub fn from_rows(rows: Vec<Vec<Option<f64>>>) -> Result<Self, InflammationError> {
        let npatients = rows.len();
        let ndays = rows.first().map_or(0, |row| row.len());
        let mut cells = Vec::with_capacity(npatients * ndays);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != ndays {
                return Err(InflammationError::RaggedRow {
                    line: index + 1,
                    expected: ndays,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Matrix::new(Array2::from_shape_vec((npatients, ndays), cells)?))
    }

    /// Parse comma separated readings, one patient per line and no header row.
    ///
    /// Blank lines and lines starting with `#` are skipped. An empty field or a `nan`
    /// token is read as a missing value.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self, InflammationError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut cells = Vec::new();
        let mut ndays: Option<usize> = None;
        let mut npatients = 0;

        for (index, result) in reader.records().enumerate() {
            let record = result?;
            let line = record
                .position()
                .map_or(index + 1, |position| position.line() as usize);

            let expected = *ndays.get_or_insert(record.len());
            if record.len() != expected {
                return Err(InflammationError::RaggedRow {
                    line,
                    expected,
                    found: record.len(),
                });
            }

            for (column, token) in record.iter().enumerate() {
                let reading = parse_reading(token).map_err(|_| InflammationError::InvalidToken {
                    line,
                    column: column + 1,
                    token: token.to_string(),
                })?;
                cells.push(reading);
            }
            npatients += 1;
        }

        let shape = (npatients, ndays.unwrap_or(0));
        Ok(Matrix::new(Array2::from_shape_vec(shape, cells)?))
    }

    /// Number of patients, equal to the number of rows
    pub fn npatients(&self) -> usize {
        self.data.nrows()
    }

    /// Number of days, equal to the number of columns
    pub fn ndays(&self) -> usize {
        self.data.ncols()
    }

    pub fn view(&self) -> ArrayView2<'_, Option<f64>> {
        self.data.view()
    }

    /// The readings of a single patient, if the row exists
    pub fn row(&self, patient: usize) -> Option<ArrayView1<'_, Option<f64>>> {
        (patient < self.npatients()).then(|| self.data.row(patient))
    }

    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, Option<f64>>> + '_ {
        self.data.axis_iter(Axis(0))
    }

    pub fn days(&self) -> impl Iterator<Item = ArrayView1<'_, Option<f64>>> + '_ {
        self.data.axis_iter(Axis(1))
    }

    /// The reading of `patient` on `day`; `None` when missing or out of bounds
    pub fn get(&self, patient: usize, day: usize) -> Option<f64> {
        self.data.get((patient, day)).copied().flatten()
    }

    pub fn has_missing(&self) -> bool {
        self.data.iter().any(Option::is_none)
    }

    /// The readings as plain floats, available only when no reading is missing
    pub fn to_dense(&self) -> Option<Array2<f64>> {
        if self.has_missing() {
            return None;
        }
        Some(self.data.mapv(|cell| cell.unwrap_or_default()))
    }
}

impl From<Array2<f64>> for Matrix {
    fn from(array: Array2<f64>) -> Self {
        Matrix::new(array.mapv(Some))
    }
}

impl From<&Array2<f64>> for Matrix {
    fn from(array: &Array2<f64>) -> Self {
        Matrix::new(array.mapv(Some))
    }
}

impl From<Array2<Option<f64>>> for Matrix {
    fn from(array: Array2<Option<f64>>) -> Self {
        Matrix::new(array)
    }
}

/// Load an inflammation table from a comma separated file, see [Matrix::from_csv]
pub fn load_matrix(path: impl AsRef<Path>) -> Result<Matrix, InflammationError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| InflammationError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let matrix = Matrix::from_csv(file)?;
    tracing::debug!(
        "Loaded {} patients over {} days from {}",
        matrix.npatients(),
        matrix.ndays(),
        path.display()
    );
    Ok(matrix)
}

fn parse_reading(token: &str) -> Result<Option<f64>, std::num::ParseFloatError> {
    if token.is_empty() {
        return Ok(None);
    }
    let value: f64 = token.parse()?;
    Ok((!value.is_nan()).then_some(value))
}
