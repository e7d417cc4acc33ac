use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use logit_core::{Float, LogitError, Matrix, Result, RowVector, Vector};
use tracing::debug;

use crate::preprocessors::standardize;

/// Options controlling how a delimited dataset is turned into a [`Dataset`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadOptions {
    /// Standardize feature columns before the bias column is added.
    pub standardize: bool,
    /// Fields per row: the features followed by the label.
    pub expected_columns: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            standardize: false,
            expected_columns: 3,
        }
    }
}

/// A labeled training set ready for gradient descent.
///
/// - `x`: `(m, n + 1)` design matrix, column 0 is the bias term `1.0`
/// - `y`: `m` binary labels in the same row order
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub x: Matrix,
    pub y: Vector,
}

impl Dataset {
    /// Number of samples `m`.
    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    /// Number of raw features `n`, bias column excluded.
    pub fn n_features(&self) -> usize {
        self.x.ncols().saturating_sub(1)
    }

    /// The all-zero starting parameters, one per column of `x`.
    pub fn theta0(&self) -> RowVector {
        RowVector::zeros(self.x.ncols())
    }
}

/// Returns a copy of `features` with a leading column of ones.
pub fn add_bias_column(features: &Matrix) -> Matrix {
    features.clone().insert_column(0, 1.0)
}

/// Loads a headerless comma-delimited dataset from `path`.
///
/// Each row holds the feature values followed by a `0`/`1` label.
///
/// # Errors
///
/// - [`LogitError::Io`] if the file cannot be opened or read.
/// - See [`read_dataset`] for parsing errors.
pub fn load_dataset<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Dataset> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| LogitError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let dataset = read_dataset(file, options)?;
    debug!(
        path = %path.display(),
        samples = dataset.n_samples(),
        features = dataset.n_features(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Parses a headerless comma-delimited dataset from any reader.
///
/// Fields are trimmed and empty lines are skipped.
///
/// # Errors
///
/// - [`LogitError::InvalidHyperparameter`] if `expected_columns < 2`.
/// - [`LogitError::MalformedRow`] for a row with the wrong number of fields,
///   a field that is not a finite number, or a label other than `0`/`1`.
/// - [`LogitError::Csv`] for reader failures without a row position.
/// - [`LogitError::EmptyTrainingData`] if there are no rows.
/// - Any error from [`standardize`] when `options.standardize` is set.
pub fn read_dataset<R: Read>(mut reader: R, options: &LoadOptions) -> Result<Dataset> {
    let columns = options.expected_columns;
    if columns < 2 {
        return Err(LogitError::InvalidHyperparameter {
            name: "expected_columns".into(),
            value: columns.to_string(),
        });
    }
    let n_features = columns - 1;

    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    let lines = LineIndex::new(&buf);

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(buf.as_slice());

    let mut features: Vec<Float> = Vec::new();
    let mut labels: Vec<Float> = Vec::new();

    for result in rdr.records() {
        let record = result.map_err(|e| match e.position() {
            Some(pos) => LogitError::MalformedRow {
                line: lines.line_of(pos.byte()),
                message: e.to_string(),
            },
            None => LogitError::Csv(e.to_string()),
        })?;
        let line = record
            .position()
            .map(|pos| lines.line_of(pos.byte()))
            .unwrap_or(0);

        if record.len() != columns {
            return Err(LogitError::MalformedRow {
                line,
                message: format!("expected {} fields, found {}", columns, record.len()),
            });
        }

        let mut row = Vec::with_capacity(columns);
        for (idx, field) in record.iter().enumerate() {
            let value: Float = field.parse().map_err(|_| LogitError::MalformedRow {
                line,
                message: format!("field {} is not a number: {:?}", idx + 1, field),
            })?;
            if !value.is_finite() {
                return Err(LogitError::MalformedRow {
                    line,
                    message: format!("field {} is not finite: {:?}", idx + 1, field),
                });
            }
            row.push(value);
        }

        let label = row[n_features];
        if label != 0.0 && label != 1.0 {
            return Err(LogitError::MalformedRow {
                line,
                message: format!("label must be 0 or 1, found {}", label),
            });
        }

        features.extend_from_slice(&row[..n_features]);
        labels.push(label);
    }

    if labels.is_empty() {
        return Err(LogitError::EmptyTrainingData);
    }

    let mut raw = Matrix::from_row_slice(labels.len(), n_features, &features);
    if options.standardize {
        raw = standardize(&raw)?;
    }

    Ok(Dataset {
        x: add_bias_column(&raw),
        y: Vector::from_vec(labels),
    })
}

/// Maps byte offsets of the raw input to 1-based physical line numbers.
///
/// A record position may point at the empty lines the reader skipped
/// before the record, so those are stepped over first.
struct LineIndex<'a> {
    data: &'a [u8],
    newlines: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    fn new(data: &'a [u8]) -> Self {
        let newlines = data
            .iter()
            .enumerate()
            .filter(|(_, &b)| b == b'\n')
            .map(|(i, _)| i)
            .collect();
        Self { data, newlines }
    }

    fn line_of(&self, byte: u64) -> usize {
        let mut start = byte as usize;
        while start < self.data.len() && matches!(self.data[start], b'\n' | b'\r') {
            start += 1;
        }
        self.newlines.partition_point(|&nl| nl < start) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "34.62365962451697,78.0246928153624,0\n\
                          30.28671076822607,43.89499752400101,0\n\
                          35.84740876993872,72.90219802708364,0\n\
                          60.18259938620976,86.30855209546826,1\n";

    #[test]
    fn test_read_dataset_adds_bias_column() {
        let ds = read_dataset(SAMPLE.as_bytes(), &LoadOptions::default()).unwrap();
        assert_eq!(ds.n_samples(), 4);
        assert_eq!(ds.n_features(), 2);
        assert_eq!(ds.x.ncols(), 3);
        assert!(ds.x.column(0).iter().all(|&v| v == 1.0));
        assert_eq!(ds.x[(3, 1)], 60.18259938620976);
        assert_eq!(ds.y.as_slice(), &[0.0, 0.0, 0.0, 1.0]);
        assert_eq!(ds.theta0(), RowVector::zeros(3));
    }

    #[test]
    fn test_read_dataset_trims_and_skips_blank_lines() {
        let data = "1, 2, 0\n\n2 ,3,1\n3,1 , 1\n";
        let ds = read_dataset(data.as_bytes(), &LoadOptions::default()).unwrap();
        assert_eq!(ds.n_samples(), 3);
        assert_eq!(ds.x.row(1).iter().copied().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_read_dataset_wrong_column_count() {
        let data = "1,2,0\n2,3\n";
        let result = read_dataset(data.as_bytes(), &LoadOptions::default());
        assert!(matches!(result, Err(LogitError::MalformedRow { line: 2, .. })));
    }

    #[test]
    fn test_read_dataset_line_number_counts_blank_lines() {
        let data = "1,2,0\n\n2,abc,1\n";
        let result = read_dataset(data.as_bytes(), &LoadOptions::default());
        assert!(matches!(result, Err(LogitError::MalformedRow { line: 3, .. })));

        let data = "1,2,0\r\n\r\n\r\n3,1,1\r\n2,3\r\n";
        let result = read_dataset(data.as_bytes(), &LoadOptions::default());
        assert!(matches!(result, Err(LogitError::MalformedRow { line: 5, .. })));
    }

    #[test]
    fn test_read_dataset_non_numeric_field() {
        let data = "1,2,0\n2,abc,1\n";
        let result = read_dataset(data.as_bytes(), &LoadOptions::default());
        assert!(matches!(result, Err(LogitError::MalformedRow { line: 2, .. })));
    }

    #[test]
    fn test_read_dataset_header_row_is_malformed() {
        let data = "exam1,exam2,admitted\n1,2,0\n";
        let result = read_dataset(data.as_bytes(), &LoadOptions::default());
        assert!(matches!(result, Err(LogitError::MalformedRow { line: 1, .. })));
    }

    #[test]
    fn test_read_dataset_rejects_non_binary_label() {
        let data = "1,2,0\n2,3,0.5\n";
        let result = read_dataset(data.as_bytes(), &LoadOptions::default());
        assert!(matches!(result, Err(LogitError::MalformedRow { line: 2, .. })));
    }

    #[test]
    fn test_read_dataset_rejects_nan() {
        let data = "NaN,2,0\n";
        let result = read_dataset(data.as_bytes(), &LoadOptions::default());
        assert!(matches!(result, Err(LogitError::MalformedRow { line: 1, .. })));
    }

    #[test]
    fn test_read_dataset_empty() {
        let result = read_dataset("".as_bytes(), &LoadOptions::default());
        assert!(matches!(result, Err(LogitError::EmptyTrainingData)));
    }

    #[test]
    fn test_read_dataset_invalid_column_option() {
        let options = LoadOptions {
            expected_columns: 1,
            ..LoadOptions::default()
        };
        let result = read_dataset("1\n".as_bytes(), &options);
        assert!(matches!(
            result,
            Err(LogitError::InvalidHyperparameter { .. })
        ));
    }

    #[test]
    fn test_read_dataset_standardized() {
        let options = LoadOptions {
            standardize: true,
            ..LoadOptions::default()
        };
        let ds = read_dataset(SAMPLE.as_bytes(), &options).unwrap();
        assert!(ds.x.column(0).iter().all(|&v| v == 1.0));
        for j in 1..3 {
            let mean = ds.x.column(j).sum() / 4.0;
            assert!(mean.abs() < 1e-12);
        }
    }

    #[test]
    fn test_load_dataset_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE).unwrap();
        let ds = load_dataset(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(ds.n_samples(), 4);
    }

    #[test]
    fn test_load_dataset_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_dataset(dir.path().join("missing.txt"), &LoadOptions::default());
        assert!(matches!(result, Err(LogitError::Io(_))));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn test_read_dataset_reader_failure_is_io_error() {
        let result = read_dataset(FailingReader, &LoadOptions::default());
        match result {
            Err(LogitError::Io(message)) => assert!(message.contains("disk on fire")),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_add_bias_column() {
        let features = Matrix::from_row_slice(2, 1, &[4.0, 5.0]);
        let x = add_bias_column(&features);
        assert_eq!(x, Matrix::from_row_slice(2, 2, &[1.0, 4.0, 1.0, 5.0]));
    }
}
