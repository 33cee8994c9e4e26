use crate::util::quote_field;
use crate::GroundTruthNetwork;
use std::io::Write;

impl GroundTruthNetwork {
    /// Export the edges as a signed, tab-separated edge list (`Gene1 Gene2 Type`).
    pub fn to_signed_edge_list(&self) -> String {
        let mut buffer: Vec<u8> = Vec::new();
        self.write_signed_edge_list(&mut buffer)
            .expect("I/O error converting `GroundTruthNetwork` to `.tsv`.");
        String::from_utf8(buffer).expect("Invalid UTF formatting in .tsv string.")
    }

    pub fn write_signed_edge_list(&self, out: &mut dyn Write) -> Result<(), std::io::Error> {
        writeln!(out, "Gene1\tGene2\tType")?;
        for edge in &self.edges {
            writeln!(
                out,
                "{}\t{}\t{}",
                edge.get_source(),
                edge.get_target(),
                edge.get_sign()
            )?;
        }
        Ok(())
    }

    /// Export the edges as an unsigned, tab-separated edge list (`Gene1 Gene2 Edge`), where
    /// every edge has weight `1`.
    ///
    /// Duplicate edges are kept, exactly like in the signed list.
    pub fn to_unsigned_edge_list(&self) -> String {
        let mut buffer: Vec<u8> = Vec::new();
        self.write_unsigned_edge_list(&mut buffer)
            .expect("I/O error converting `GroundTruthNetwork` to `.tsv`.");
        String::from_utf8(buffer).expect("Invalid UTF formatting in .tsv string.")
    }

    pub fn write_unsigned_edge_list(&self, out: &mut dyn Write) -> Result<(), std::io::Error> {
        writeln!(out, "Gene1\tGene2\tEdge")?;
        for edge in &self.edges {
            writeln!(out, "{}\t{}\t1", edge.get_source(), edge.get_target())?;
        }
        Ok(())
    }

    /// Export the edges as a BEELINE `refNetwork.csv` table (`Gene1,Gene2,Type`).
    pub fn to_ref_network_csv(&self) -> String {
        let mut buffer: Vec<u8> = Vec::new();
        self.write_ref_network_csv(&mut buffer)
            .expect("I/O error converting `GroundTruthNetwork` to `.csv`.");
        String::from_utf8(buffer).expect("Invalid UTF formatting in .csv string.")
    }

    pub fn write_ref_network_csv(&self, out: &mut dyn Write) -> Result<(), std::io::Error> {
        writeln!(out, "Gene1,Gene2,Type")?;
        for edge in &self.edges {
            writeln!(
                out,
                "{},{},{}",
                quote_field(edge.get_source(), ','),
                quote_field(edge.get_target(), ','),
                edge.get_sign()
            )?;
        }
        Ok(())
    }
}
