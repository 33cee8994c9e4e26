use crate::expression::{cell_name, PSEUDO_TIME_COLUMN};
use crate::util::{format_decimal, quote_field, split_record};
use crate::ExpressionMatrix;
use std::io::Write;

/// A genes × cells expression table, as stored in a BEELINE `ExpressionData.csv` file.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpressionTable {
    pub genes: Vec<String>,
    pub cells: Vec<String>,
    /// One row per gene, one column per cell.
    pub values: Vec<Vec<f64>>,
}

impl ExpressionMatrix {
    /// Transpose this matrix into a genes × cells table with `Cell_<i>` column labels.
    pub fn to_expression_table(&self) -> ExpressionTable {
        ExpressionTable {
            genes: self.gene_names.clone(),
            cells: self.cell_names(),
            values: (0..self.num_genes())
                .filter_map(|gene| self.gene_profile(gene))
                .collect(),
        }
    }

    /// Export this matrix as a BEELINE `ExpressionData.csv` string.
    pub fn to_expression_csv(&self) -> String {
        let mut buffer: Vec<u8> = Vec::new();
        self.write_expression_csv(&mut buffer)
            .expect("I/O error converting `ExpressionMatrix` to `.csv`.");
        String::from_utf8(buffer).expect("Invalid UTF formatting in .csv string.")
    }

    /// Write the genes × cells table. The first header cell is empty (it labels the
    /// gene name column), missing values (`NaN`) are written as empty fields.
    /// Values of an integral matrix are written without a fractional part.
    pub fn write_expression_csv(&self, out: &mut dyn Write) -> Result<(), std::io::Error> {
        for i in 0..self.num_samples() {
            write!(out, ",{}", cell_name(i))?;
        }
        writeln!(out)?;
        for (gene, name) in self.gene_names.iter().enumerate() {
            write!(out, "{}", quote_field(name, ','))?;
            for sample in &self.data {
                let value = sample[gene];
                if value.is_nan() {
                    write!(out, ",")?;
                } else if self.integral {
                    write!(out, ",{}", value as i64)?;
                } else {
                    write!(out, ",{}", format_decimal(value))?;
                }
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Export the pseudo-time table as a BEELINE `PseudoTime.csv` string.
    pub fn to_pseudo_time_csv(&self) -> String {
        let mut buffer: Vec<u8> = Vec::new();
        self.write_pseudo_time_csv(&mut buffer)
            .expect("I/O error converting `ExpressionMatrix` to `.csv`.");
        String::from_utf8(buffer).expect("Invalid UTF formatting in .csv string.")
    }

    /// Dream4 steady-state samples have no time information, so the pseudo-time of
    /// every cell is simply its row index.
    pub fn write_pseudo_time_csv(&self, out: &mut dyn Write) -> Result<(), std::io::Error> {
        writeln!(out, ",{}", PSEUDO_TIME_COLUMN)?;
        for i in 0..self.num_samples() {
            writeln!(out, "{},{}", cell_name(i), i)?;
        }
        Ok(())
    }
}

impl ExpressionTable {
    /// Parse the content of an `ExpressionData.csv` file.
    pub fn try_from_csv(csv: &str) -> Result<ExpressionTable, String> {
        let mut lines = csv.lines().filter(|line| !line.trim().is_empty());
        let header = lines
            .next()
            .ok_or_else(|| "Expression table is empty.".to_string())?;
        let mut header = split_record(header, ',');
        if !header.remove(0).is_empty() {
            return Err("The first header field of an expression table must be empty.".into());
        }

        let mut genes = Vec::new();
        let mut values = Vec::new();
        for line in lines {
            let mut fields = split_record(line, ',');
            if fields.len() != header.len() + 1 {
                return Err(format!(
                    "Expected {} fields on line `{}`, found {}.",
                    header.len() + 1,
                    line,
                    fields.len()
                ));
            }
            genes.push(fields.remove(0));
            let row = fields
                .iter()
                .map(|value| parse_value(value))
                .collect::<Result<Vec<f64>, String>>()?;
            values.push(row);
        }

        Ok(ExpressionTable {
            genes,
            cells: header,
            values,
        })
    }

    /// Transpose the table back into a samples × genes `ExpressionMatrix`.
    pub fn into_expression_matrix(self) -> Result<ExpressionMatrix, String> {
        let data = (0..self.cells.len())
            .map(|cell| self.values.iter().map(|row| row[cell]).collect())
            .collect();
        ExpressionMatrix::new(self.genes, data)
    }
}

fn parse_value(value: &str) -> Result<f64, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(f64::NAN);
    }
    value
        .parse::<f64>()
        .map_err(|_| format!("Invalid expression value `{}`.", value))
}

#[cfg(test)]
mod tests {
    use crate::expression::ExpressionTable;
    use crate::ExpressionMatrix;
    use pretty_assertions::assert_eq;

    fn matrix() -> ExpressionMatrix {
        ExpressionMatrix::new(
            vec!["G1".to_string(), "G2".to_string()],
            vec![vec![0.5, 1.0], vec![0.00001, 0.25], vec![0.0001, 2.0]],
        )
        .unwrap()
    }

    #[test]
    fn expression_csv_layout() {
        let expected = ",Cell_0,Cell_1,Cell_2\nG1,0.5,1e-05,0.0001\nG2,1.0,0.25,2.0\n";
        assert_eq!(expected, matrix().to_expression_csv());
    }

    #[test]
    fn integral_matrix_has_no_fractions() {
        let json = r#"{"gene_names": ["G1", "G2"], "data": [[1, 0], [-2, 7]]}"#;
        let matrix = ExpressionMatrix::try_from_json(json).unwrap();
        let expected = ",Cell_0,Cell_1\nG1,1,-2\nG2,0,7\n";
        assert_eq!(expected, matrix.to_expression_csv());

        let json = r#"{"gene_names": ["G1", "G2"], "data": [[1, 0], [-2, 7.5]]}"#;
        let matrix = ExpressionMatrix::try_from_json(json).unwrap();
        let expected = ",Cell_0,Cell_1\nG1,1.0,-2.0\nG2,0.0,7.5\n";
        assert_eq!(expected, matrix.to_expression_csv());
    }

    #[test]
    fn pseudo_time_csv_layout() {
        let expected = ",PseudoTime1\nCell_0,0\nCell_1,1\nCell_2,2\n";
        assert_eq!(expected, matrix().to_pseudo_time_csv());
    }

    #[test]
    fn expression_csv_round_trip() {
        let matrix = matrix();
        let table = ExpressionTable::try_from_csv(&matrix.to_expression_csv()).unwrap();
        assert_eq!(matrix.to_expression_table(), table);
        assert_eq!(vec!["G1", "G2"], table.genes);
        assert_eq!(vec!["Cell_0", "Cell_1", "Cell_2"], table.cells);
        assert_eq!(vec![0.5, 0.00001, 0.0001], table.values[0]);
        assert_eq!(matrix, table.into_expression_matrix().unwrap());
    }

    #[test]
    fn missing_values_are_empty() {
        let matrix =
            ExpressionMatrix::new(vec!["G,1".to_string()], vec![vec![f64::NAN], vec![1.5]])
                .unwrap();
        let csv = matrix.to_expression_csv();
        assert_eq!(",Cell_0,Cell_1\n\"G,1\",,1.5\n", csv);
        let table = ExpressionTable::try_from_csv(&csv).unwrap();
        assert_eq!(vec!["G,1"], table.genes);
        assert!(table.values[0][0].is_nan());
    }

    #[test]
    fn invalid_tables() {
        assert!(ExpressionTable::try_from_csv("").is_err());
        assert!(ExpressionTable::try_from_csv("x,Cell_0\nG1,1.0\n").is_err());
        assert!(ExpressionTable::try_from_csv(",Cell_0\nG1,1.0,2.0\n").is_err());
        assert!(ExpressionTable::try_from_csv(",Cell_0\nG1,abc\n").is_err());
    }
}
