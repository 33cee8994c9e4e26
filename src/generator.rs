//! Batch generation of ground truth files for the Dream4 networks.

use crate::config::GeneratorConfig;
use crate::export::{
    adjacency_matrix_file, signed_edge_list_file, statistics_file, unsigned_edge_list_file,
    write_file, REF_NETWORK_FILE,
};
use crate::sbml::import::read_model_file;
use crate::statistics::NetworkStatistics;
use crate::summary::generate_summary_report;
use crate::GroundTruthNetwork;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{info, warn};

/// Outcome of processing a list of networks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchReport {
    /// Statistics of all successfully processed networks, in processing order.
    pub processed: Vec<NetworkStatistics>,
    /// Networks that were skipped because their SBML file does not exist.
    pub skipped: Vec<String>,
    /// Path to the generated `SUMMARY.md`, if it was generated.
    pub summary: Option<PathBuf>,
}

/// Generates the gold standard files of Dream4 networks according to a `GeneratorConfig`.
pub struct GroundTruthGenerator {
    config: GeneratorConfig,
}

impl GroundTruthGenerator {
    /// Create a new generator and prepare its output directory.
    ///
    /// Unless disabled in the configuration, this first checks that a Java runtime can be
    /// started and that the GeneNetWeaver archive exists. Both are fatal errors.
    pub fn new(config: GeneratorConfig) -> Result<GroundTruthGenerator, String> {
        if config.check_environment {
            check_java()?;
            if !config.gnw_jar.exists() {
                return Err(format!(
                    "GeneNetWeaver archive not found: `{}`.",
                    config.gnw_jar.display()
                ));
            }
            info!(jar = %config.gnw_jar.display(), "GeneNetWeaver archive found");
        }
        std::fs::create_dir_all(&config.output_base).map_err(|e| {
            format!(
                "Cannot create output directory `{}`: {}",
                config.output_base.display(),
                e
            )
        })?;
        Ok(GroundTruthGenerator { config })
    }

    pub fn get_config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Path of the SBML file of the given network.
    pub fn network_path(&self, network_name: &str) -> PathBuf {
        self.config
            .dream4_dir
            .join(format!("{}.xml", network_name))
    }

    /// Directory with the output files of the given network.
    pub fn output_dir(&self, network_name: &str) -> PathBuf {
        self.config.output_base.join(network_name)
    }

    /// Generate all ground truth files of one network.
    ///
    /// Returns `None` (and logs a warning) when the SBML file of the network does not exist.
    /// Any other problem is an error.
    pub fn process_network(&self, network_name: &str) -> Result<Option<NetworkStatistics>, String> {
        info!(network = network_name, "Processing network");
        let xml_path = self.network_path(network_name);
        if !xml_path.exists() {
            warn!(path = %xml_path.display(), "XML file not found, network skipped");
            return Ok(None);
        }

        let output_dir = self.output_dir(network_name);
        std::fs::create_dir_all(&output_dir).map_err(|e| {
            format!(
                "Cannot create output directory `{}`: {}",
                output_dir.display(),
                e
            )
        })?;

        let model_file = read_model_file(&xml_path)?;
        let network = GroundTruthNetwork::try_from_sbml(&model_file)?;
        info!(
            edges = network.num_edges(),
            genes = network.num_genes(),
            "Network extracted from XML"
        );

        let statistics = write_ground_truth(network_name, &network, &output_dir)?;
        Ok(Some(statistics))
    }

    /// Process every configured network, skipping the ones without an SBML file.
    pub fn process_networks(&self) -> Result<BatchReport, String> {
        let mut report = BatchReport::default();
        for network_name in &self.config.networks {
            match self.process_network(network_name)? {
                Some(statistics) => report.processed.push(statistics),
                None => report.skipped.push(network_name.clone()),
            }
        }
        Ok(report)
    }

    /// Write `SUMMARY.md` into the output directory.
    pub fn generate_summary_report(&self) -> Result<PathBuf, String> {
        generate_summary_report(&self.config.output_base)
    }

    /// Process every configured network and then generate the summary report.
    pub fn run(&self) -> Result<BatchReport, String> {
        let mut report = self.process_networks()?;
        report.summary = Some(self.generate_summary_report()?);
        Ok(report)
    }
}

/// Write all gold standard files of a network into `output_dir` and return its statistics.
///
/// The files are: the signed and unsigned edge lists, the adjacency matrix,
/// `refNetwork.csv` and the statistics JSON.
pub fn write_ground_truth(
    network_name: &str,
    network: &GroundTruthNetwork,
    output_dir: &Path,
) -> Result<NetworkStatistics, String> {
    let path = output_dir.join(signed_edge_list_file(network_name));
    write_file(&path, |out| network.write_signed_edge_list(out))?;
    info!(path = %path.display(), "Signed edge list written");

    let path = output_dir.join(unsigned_edge_list_file(network_name));
    write_file(&path, |out| network.write_unsigned_edge_list(out))?;
    info!(path = %path.display(), "Unsigned edge list written");

    let path = output_dir.join(adjacency_matrix_file(network_name));
    write_file(&path, |out| network.write_adjacency_tsv(out))?;
    info!(path = %path.display(), "Adjacency matrix written");

    let path = output_dir.join(REF_NETWORK_FILE);
    write_file(&path, |out| network.write_ref_network_csv(out))?;
    info!(path = %path.display(), "BEELINE refNetwork written");

    let statistics = NetworkStatistics::compute(network_name, network)?;
    let path = output_dir.join(statistics_file(network_name));
    write_file(&path, |out| statistics.write_json(out))?;
    info!(path = %path.display(), "Statistics written");

    Ok(statistics)
}

/// Check that `java -version` can be executed successfully.
pub fn check_java() -> Result<(), String> {
    let output = Command::new("java")
        .arg("-version")
        .output()
        .map_err(|e| format!("Java not found. Please install Java ({}).", e))?;
    if output.status.success() {
        info!("Java is available");
        Ok(())
    } else {
        Err(format!(
            "Java not found. Please install Java (`java -version` exited with {}).",
            output.status
        ))
    }
}
