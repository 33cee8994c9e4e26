//! Summary statistics of a ground truth network, stored as `<name>_statistics.json`.

use crate::util::build_index_map;
use crate::{GroundTruthNetwork, Sign};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::path::Path;

/// Basic structural properties of a `GroundTruthNetwork`.
///
/// Degrees are computed per distinct gene name. Field order matches the key order
/// of the JSON file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NetworkStatistics {
    pub network_name: String,
    pub num_genes: usize,
    pub num_edges: usize,
    pub num_activation_edges: usize,
    pub num_repression_edges: usize,
    /// `edges / (n * (n - 1))`, i.e. relative to a directed graph without self-loops.
    pub edge_density: f64,
    pub avg_in_degree: f64,
    pub avg_out_degree: f64,
    pub max_in_degree: usize,
    pub max_out_degree: usize,
}

impl NetworkStatistics {
    /// Compute the statistics of the given network.
    ///
    /// Fails when the network has fewer than two genes (the edge density is undefined)
    /// or when an edge references a gene that is not part of the network.
    pub fn compute(
        network_name: &str,
        network: &GroundTruthNetwork,
    ) -> Result<NetworkStatistics, String> {
        let num_genes = network.num_genes();
        if num_genes <= 1 {
            return Err(format!(
                "Cannot compute edge density of `{}`: the network has {} gene(s).",
                network_name, num_genes
            ));
        }

        let index = build_index_map(network.get_genes(), |_, i| i);
        // A repeated gene name counts once: only its last occurrence carries a degree.
        let mut in_degree = vec![0usize; num_genes];
        let mut out_degree = vec![0usize; num_genes];
        for edge in network.get_edges() {
            let source = gene_index(&index, edge.get_source())?;
            let target = gene_index(&index, edge.get_target())?;
            out_degree[source] += 1;
            in_degree[target] += 1;
        }
        let distinct: Vec<usize> = {
            let mut values: Vec<usize> = index.values().copied().collect();
            values.sort_unstable();
            values
        };
        let in_degree: Vec<usize> = distinct.iter().map(|i| in_degree[*i]).collect();
        let out_degree: Vec<usize> = distinct.iter().map(|i| out_degree[*i]).collect();

        let num_edges = network.num_edges();
        Ok(NetworkStatistics {
            network_name: network_name.to_string(),
            num_genes,
            num_edges,
            num_activation_edges: network.count_edges(Sign::Activation),
            num_repression_edges: network.count_edges(Sign::Repression),
            edge_density: num_edges as f64 / (num_genes * (num_genes - 1)) as f64,
            avg_in_degree: mean(&in_degree),
            avg_out_degree: mean(&out_degree),
            max_in_degree: in_degree.iter().copied().max().unwrap_or(0),
            max_out_degree: out_degree.iter().copied().max().unwrap_or(0),
        })
    }

    /// Serialize as a JSON object indented by two spaces.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("Statistics are always serializable.")
    }

    pub fn write_json(&self, out: &mut dyn Write) -> Result<(), std::io::Error> {
        out.write_all(self.to_json().as_bytes())
    }

    pub fn try_from_json(json: &str) -> Result<NetworkStatistics, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid statistics JSON: {}", e))
    }

    pub fn try_from_json_file<P: AsRef<Path>>(path: P) -> Result<NetworkStatistics, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read statistics `{}`: {}", path.display(), e))?;
        NetworkStatistics::try_from_json(&json)
    }
}

impl Display for NetworkStatistics {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Summary for {}:", self.network_name)?;
        writeln!(f, "  Genes: {}", self.num_genes)?;
        writeln!(
            f,
            "  Edges: {} (Activation: {}, Repression: {})",
            self.num_edges, self.num_activation_edges, self.num_repression_edges
        )?;
        writeln!(f, "  Density: {:.4}", self.edge_density)?;
        writeln!(f, "  Avg in-degree: {:.2}", self.avg_in_degree)?;
        write!(f, "  Avg out-degree: {:.2}", self.avg_out_degree)
    }
}

fn gene_index(index: &fxhash::FxHashMap<String, usize>, gene: &str) -> Result<usize, String> {
    index
        .get(gene)
        .copied()
        .ok_or_else(|| format!("Gene `{}` is not part of the network.", gene))
}

fn mean(values: &[usize]) -> f64 {
    values.iter().sum::<usize>() as f64 / values.len() as f64
}
