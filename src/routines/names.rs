use crate::error::InflammationError;
use crate::structs::matrix::Matrix;
use ndarray::ArrayView1;

/// A row of a [Matrix] paired with the name of the patient it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct NamedRow<'a> {
    pub name: String,
    pub data: ArrayView1<'a, Option<f64>>,
}

/// Pair each row of `matrix` with the name at the same position in `names`
///
/// The records borrow the matrix rows, so the matrix cannot be changed through them.
pub fn attach_names<'a, S: AsRef<str>>(
    matrix: &'a Matrix,
    names: &[S],
) -> Result<Vec<NamedRow<'a>>, InflammationError> {
    if names.len() != matrix.npatients() {
        return Err(InflammationError::NameCountMismatch {
            expected: matrix.npatients(),
            found: names.len(),
        });
    }

    Ok(names
        .iter()
        .zip(matrix.rows())
        .map(|(name, data)| NamedRow {
            name: name.as_ref().to_string(),
            data,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use ndarray::array;

    #[test]
    fn test_attach_names() {
        let matrix = Matrix::from(array![[1.0, 2.0], [3.0, 4.0]]);
        let records = attach_names(&matrix, &["Alice", "Bob"]).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Alice");
        assert_eq!(records[0].data, array![Some(1.0), Some(2.0)]);
        assert_eq!(records[1].name, "Bob");
        assert_eq!(records[1].data, array![Some(3.0), Some(4.0)]);
    }

    #[test]
    fn test_attach_names_mismatch() {
        let matrix = Matrix::from(array![[1.0, 2.0], [3.0, 4.0]]);
        let err = attach_names(&matrix, &["Alice", "Bob", "Carol"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::PreconditionFailure);
        assert!(matches!(
            err,
            InflammationError::NameCountMismatch {
                expected: 2,
                found: 3
            }
        ));
    }
}
