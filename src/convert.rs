//! Conversion of one Dream4 network into a BEELINE input directory.

use crate::export::{write_file, EXPRESSION_DATA_FILE, PSEUDO_TIME_FILE, REF_NETWORK_FILE};
use crate::sbml::import::read_model_file;
use crate::{ExpressionMatrix, GroundTruthNetwork};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// What a conversion produced.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionReport {
    pub output_dir: PathBuf,
    pub num_samples: usize,
    pub num_genes: usize,
    /// Number of edges written to `refNetwork.csv`, `None` when the file was not written.
    pub num_edges: Option<usize>,
}

/// Convert the Dream4 expression data at `json_path` (and optionally the SBML network at
/// `xml_path`) into `ExpressionData.csv`, `PseudoTime.csv` and `refNetwork.csv`
/// inside `output_dir`.
///
/// A missing SBML file or a network without edges is not an error: `refNetwork.csv` is
/// skipped with a warning.
pub fn convert_json_to_beeline(
    json_path: &Path,
    xml_path: Option<&Path>,
    output_dir: &Path,
) -> Result<ConversionReport, String> {
    std::fs::create_dir_all(output_dir).map_err(|e| {
        format!(
            "Cannot create output directory `{}`: {}",
            output_dir.display(),
            e
        )
    })?;

    let matrix = ExpressionMatrix::try_from_json_file(json_path)?;
    info!(
        samples = matrix.num_samples(),
        genes = matrix.num_genes(),
        "Expression data loaded"
    );

    let path = output_dir.join(EXPRESSION_DATA_FILE);
    write_file(&path, |out| matrix.write_expression_csv(out))?;
    info!(path = %path.display(), "Expression data written");

    let path = output_dir.join(PSEUDO_TIME_FILE);
    write_file(&path, |out| matrix.write_pseudo_time_csv(out))?;
    info!(path = %path.display(), "Pseudo-time written");

    let num_edges = match xml_path {
        Some(xml_path) if xml_path.exists() => {
            let network = GroundTruthNetwork::try_from_sbml(&read_model_file(xml_path)?)?;
            if network.num_edges() == 0 {
                warn!(path = %xml_path.display(), "No edges found in network, refNetwork skipped");
                None
            } else {
                let path = output_dir.join(REF_NETWORK_FILE);
                write_file(&path, |out| network.write_ref_network_csv(out))?;
                info!(path = %path.display(), edges = network.num_edges(), "Reference network written");
                Some(network.num_edges())
            }
        }
        Some(xml_path) => {
            warn!(path = %xml_path.display(), "XML file not found, refNetwork skipped");
            None
        }
        None => {
            warn!("No XML file given, refNetwork skipped");
            None
        }
    };

    Ok(ConversionReport {
        output_dir: output_dir.to_path_buf(),
        num_samples: matrix.num_samples(),
        num_genes: matrix.num_genes(),
        num_edges,
    })
}

#[cfg(test)]
mod tests {
    use crate::convert::convert_json_to_beeline;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    const JSON: &str = "test_models/dream4_small.json";
    const XML: &str = "test_models/dream4_small.xml";

    #[test]
    fn full_conversion() {
        let output = tempfile::tempdir().unwrap();
        let report =
            convert_json_to_beeline(Path::new(JSON), Some(Path::new(XML)), output.path()).unwrap();
        assert_eq!(3, report.num_samples);
        assert_eq!(5, report.num_genes);
        assert_eq!(Some(8), report.num_edges);

        let expression = std::fs::read_to_string(output.path().join("ExpressionData.csv")).unwrap();
        let expected = "\
,Cell_0,Cell_1,Cell_2
G1,0.5,0.375,1.0
G2,0.25,0.0001,0.5
G3,1.0,0.75,0.625
G4,0.0,1e-05,0.25
G5,0.125,0.5,0.875
";
        assert_eq!(expected, expression);

        let pseudo_time = std::fs::read_to_string(output.path().join("PseudoTime.csv")).unwrap();
        assert_eq!(",PseudoTime1\nCell_0,0\nCell_1,1\nCell_2,2\n", pseudo_time);

        let ref_network = std::fs::read_to_string(output.path().join("refNetwork.csv")).unwrap();
        assert!(ref_network.starts_with("Gene1,Gene2,Type\nG3,G1,+\nG1,G2,-\n"));
        assert_eq!(9, ref_network.lines().count());
    }

    #[test]
    fn missing_network_is_skipped() {
        let output = tempfile::tempdir().unwrap();
        let missing = output.path().join("missing.xml");
        let report =
            convert_json_to_beeline(Path::new(JSON), Some(&missing), output.path()).unwrap();
        assert_eq!(None, report.num_edges);
        assert!(output.path().join("ExpressionData.csv").exists());
        assert!(!output.path().join("refNetwork.csv").exists());

        let report = convert_json_to_beeline(Path::new(JSON), None, output.path()).unwrap();
        assert_eq!(None, report.num_edges);
    }

    #[test]
    fn network_without_edges_is_skipped() {
        let output = tempfile::tempdir().unwrap();
        let xml = output.path().join("empty.xml");
        std::fs::write(
            &xml,
            r#"<sbml xmlns="http://www.sbml.org/sbml/level2"><model id="empty"/></sbml>"#,
        )
        .unwrap();
        let target = output.path().join("beeline");
        let report = convert_json_to_beeline(Path::new(JSON), Some(&xml), &target).unwrap();
        assert_eq!(None, report.num_edges);
        assert!(!target.join("refNetwork.csv").exists());
    }

    #[test]
    fn invalid_json_is_fatal() {
        let output = tempfile::tempdir().unwrap();
        let json = output.path().join("broken.json");
        std::fs::write(&json, r#"{"gene_names": ["A"], "data": [[1.0, 2.0]]}"#).unwrap();
        assert!(convert_json_to_beeline(&json, None, output.path()).is_err());
    }
}
