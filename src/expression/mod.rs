//! Loading of Dream4 expression data and its conversion to BEELINE `ExpressionData.csv`
//! and `PseudoTime.csv` tables.

use crate::ExpressionMatrix;
use serde::Deserialize;
use serde_json::Number;
use std::path::Path;

/// **(internal)** Writing and reading of the BEELINE `.csv` expression tables.
mod _impl_beeline_csv;

pub use _impl_beeline_csv::ExpressionTable;

/// Prefix of the synthetic cell names. Cell `i` is the `i`-th sample of the Dream4 data.
pub const CELL_PREFIX: &str = "Cell_";

/// Name of the only column of `PseudoTime.csv`.
pub const PSEUDO_TIME_COLUMN: &str = "PseudoTime1";

/// Name of the `i`-th cell (sample).
pub fn cell_name(index: usize) -> String {
    format!("{}{}", CELL_PREFIX, index)
}

/// **(internal)** The relevant part of a Dream4 JSON document. Values stay as JSON
/// numbers until we know whether all of them are integers.
#[derive(Deserialize)]
struct Dream4Json {
    gene_names: Vec<String>,
    data: Vec<Vec<Number>>,
}

impl ExpressionMatrix {
    /// Create a new expression matrix, checking that every sample (row) has exactly one
    /// value per gene.
    pub fn new(gene_names: Vec<String>, data: Vec<Vec<f64>>) -> Result<ExpressionMatrix, String> {
        let matrix = ExpressionMatrix {
            gene_names,
            data,
            integral: false,
        };
        matrix.check_shape()?;
        Ok(matrix)
    }

    /// Parse a Dream4 JSON document with keys `gene_names` and `data`.
    ///
    /// Other keys are ignored. The matrix is integral if every value is written as
    /// an integer (`1`, not `1.0`) and there is at least one value.
    pub fn try_from_json(json: &str) -> Result<ExpressionMatrix, String> {
        let raw: Dream4Json = serde_json::from_str(json)
            .map_err(|e| format!("Invalid expression data JSON: {}", e))?;
        let values = || raw.data.iter().flatten();
        let integral =
            values().next().is_some() && values().all(|n| n.is_i64() || n.is_u64());
        let data = raw
            .data
            .iter()
            .map(|row| row.iter().map(json_value).collect::<Result<Vec<f64>, String>>())
            .collect::<Result<Vec<_>, String>>()?;
        let matrix = ExpressionMatrix {
            gene_names: raw.gene_names,
            data,
            integral,
        };
        matrix.check_shape()?;
        Ok(matrix)
    }

    pub fn try_from_json_file<P: AsRef<Path>>(path: P) -> Result<ExpressionMatrix, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read expression data `{}`: {}", path.display(), e))?;
        ExpressionMatrix::try_from_json(&json)
    }

    pub fn get_gene_names(&self) -> &[String] {
        &self.gene_names
    }

    /// The raw data, one row per sample.
    pub fn get_data(&self) -> &[Vec<f64>] {
        &self.data
    }

    pub fn num_genes(&self) -> usize {
        self.gene_names.len()
    }

    pub fn num_samples(&self) -> usize {
        self.data.len()
    }

    /// Names of all cells (samples), in row order.
    pub fn cell_names(&self) -> Vec<String> {
        (0..self.num_samples()).map(cell_name).collect()
    }

    /// True if the matrix came from JSON with integer values only.
    pub fn is_integral(&self) -> bool {
        self.integral
    }

    /// Expression of one gene across all samples (one column of the data), or `None`
    /// if the gene index is out of range.
    pub fn gene_profile(&self, gene: usize) -> Option<Vec<f64>> {
        if gene >= self.num_genes() {
            return None;
        }
        self.data.iter().map(|row| row.get(gene).copied()).collect()
    }

    fn check_shape(&self) -> Result<(), String> {
        let expected = self.gene_names.len();
        for (i, row) in self.data.iter().enumerate() {
            if row.len() != expected {
                return Err(format!(
                    "Sample {} has {} values, but there are {} genes.",
                    i,
                    row.len(),
                    expected
                ));
            }
        }
        Ok(())
    }
}

fn json_value(number: &Number) -> Result<f64, String> {
    number
        .as_f64()
        .ok_or_else(|| format!("Expression value `{}` is not representable.", number))
}

#[cfg(test)]
mod tests {
    use crate::expression::cell_name;
    use crate::ExpressionMatrix;
    use pretty_assertions::assert_eq;

    #[test]
    fn load_json() {
        let json = r#"{
            "gene_names": ["G1", "G2"],
            "data": [[0.5, 1], [0.25, 0.0], [1e-3, 2.5]],
            "perturbations": []
        }"#;
        let matrix = ExpressionMatrix::try_from_json(json).unwrap();
        assert_eq!(vec!["G1", "G2"], matrix.get_gene_names().to_vec());
        assert_eq!(3, matrix.num_samples());
        assert_eq!(2, matrix.num_genes());
        assert_eq!(Some(vec![1.0, 0.0, 2.5]), matrix.gene_profile(1));
        assert_eq!(None, matrix.gene_profile(2));
        assert!(!matrix.is_integral());
        assert_eq!(vec!["Cell_0", "Cell_1", "Cell_2"], matrix.cell_names());
    }

    #[test]
    fn load_json_file() {
        let matrix = ExpressionMatrix::try_from_json_file("test_models/dream4_small.json").unwrap();
        assert_eq!(5, matrix.num_genes());
        assert_eq!(3, matrix.num_samples());
        assert!(ExpressionMatrix::try_from_json_file("test_models/missing.json").is_err());
    }

    #[test]
    fn reject_invalid_json() {
        assert!(ExpressionMatrix::try_from_json("{}").is_err());
        assert!(ExpressionMatrix::try_from_json(r#"{"gene_names": ["A"]}"#).is_err());
        assert!(ExpressionMatrix::try_from_json(r#"{"gene_names": ["A"], "data": [["x"]]}"#).is_err());
    }

    #[test]
    fn reject_ragged_data() {
        let json = r#"{"gene_names": ["A", "B"], "data": [[1.0, 2.0], [3.0]]}"#;
        assert!(ExpressionMatrix::try_from_json(json).is_err());
        let result = ExpressionMatrix::new(vec!["A".to_string()], vec![vec![1.0, 2.0]]);
        assert!(result.is_err());
    }

    #[test]
    fn integer_only_json_is_integral() {
        let json = r#"{"gene_names": ["A", "B"], "data": [[1, 0], [-3, 2]]}"#;
        let matrix = ExpressionMatrix::try_from_json(json).unwrap();
        assert!(matrix.is_integral());
        assert_eq!(Some(vec![0.0, 2.0]), matrix.gene_profile(1));

        let mixed = r#"{"gene_names": ["A", "B"], "data": [[1, 0], [3, 2.0]]}"#;
        assert!(!ExpressionMatrix::try_from_json(mixed).unwrap().is_integral());
        let empty = r#"{"gene_names": ["A"], "data": []}"#;
        assert!(!ExpressionMatrix::try_from_json(empty).unwrap().is_integral());
    }

    #[test]
    fn cell_names() {
        assert_eq!("Cell_0", cell_name(0));
        assert_eq!("Cell_17", cell_name(17));
    }
}
