use crate::util::quote_field;
use crate::GroundTruthNetwork;
use std::io::Write;

impl GroundTruthNetwork {
    /// Export the binary adjacency matrix as a tab-separated table with gene names
    /// as row and column labels (the top-left cell is empty).
    pub fn to_adjacency_tsv(&self) -> String {
        let mut buffer: Vec<u8> = Vec::new();
        self.write_adjacency_tsv(&mut buffer)
            .expect("I/O error converting `GroundTruthNetwork` to `.tsv`.");
        String::from_utf8(buffer).expect("Invalid UTF formatting in .tsv string.")
    }

    pub fn write_adjacency_tsv(&self, out: &mut dyn Write) -> Result<(), std::io::Error> {
        for gene in &self.genes {
            write!(out, "\t{}", quote_field(gene, '\t'))?;
        }
        writeln!(out)?;
        for (gene, row) in self.genes.iter().zip(self.adjacency_matrix()) {
            write!(out, "{}", quote_field(gene, '\t'))?;
            for cell in row {
                write!(out, "\t{}", cell)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
