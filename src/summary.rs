//! Markdown summary (`SUMMARY.md`) over all networks in a ground truth directory.

use crate::export::{statistics_file, write_file, SUMMARY_FILE};
use crate::statistics::NetworkStatistics;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Everything the summary reports about one network directory.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkSummary {
    pub statistics: NetworkStatistics,
    /// Names of all regular files in the network directory, sorted.
    pub files: Vec<String>,
}

/// Scan `output_base` for network directories.
///
/// A sub-directory `<name>` is a network directory when it contains `<name>_statistics.json`.
/// Other entries are ignored. The result is sorted by directory name.
pub fn collect_network_summaries(output_base: &Path) -> Result<Vec<NetworkSummary>, String> {
    let mut summaries = Vec::new();
    for network_dir in sorted_entries(output_base)? {
        if !network_dir.is_dir() {
            continue;
        }
        let Some(name) = network_dir.file_name().and_then(|it| it.to_str()) else {
            continue;
        };
        let stats_path = network_dir.join(statistics_file(name));
        if !stats_path.exists() {
            continue;
        }

        let statistics = NetworkStatistics::try_from_json_file(&stats_path)?;
        let files = sorted_entries(&network_dir)?
            .into_iter()
            .filter(|path| path.is_file())
            .filter_map(|path| {
                path.file_name()
                    .and_then(|it| it.to_str())
                    .map(|it| it.to_string())
            })
            .collect();
        summaries.push(NetworkSummary { statistics, files });
    }
    Ok(summaries)
}

/// Write the Markdown summary. `generated` is the timestamp shown in the header.
pub fn write_summary(
    out: &mut dyn Write,
    generated: &str,
    summaries: &[NetworkSummary],
) -> Result<(), std::io::Error> {
    writeln!(out, "# Dream4 Ground Truth Summary")?;
    writeln!(out)?;
    writeln!(out, "**Generated**: {}", generated)?;
    writeln!(out)?;
    writeln!(out, "## Networks Processed")?;
    writeln!(out)?;
    for summary in summaries {
        let stats = &summary.statistics;
        writeln!(out, "### {}", stats.network_name)?;
        writeln!(out)?;
        writeln!(out, "- **Genes**: {}", stats.num_genes)?;
        writeln!(out, "- **Edges**: {}", stats.num_edges)?;
        writeln!(out, "  - Activation: {}", stats.num_activation_edges)?;
        writeln!(out, "  - Repression: {}", stats.num_repression_edges)?;
        writeln!(out, "- **Edge Density**: {:.4}", stats.edge_density)?;
        writeln!(out, "- **Avg In-Degree**: {:.2}", stats.avg_in_degree)?;
        writeln!(out, "- **Avg Out-Degree**: {:.2}", stats.avg_out_degree)?;
        writeln!(out)?;
        writeln!(out, "**Files generated**:")?;
        for file in &summary.files {
            writeln!(out, "- `{}`", file)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Collect all network summaries in `output_base` and write them into
/// `<output_base>/SUMMARY.md`, stamped with the current local time.
pub fn generate_summary_report(output_base: &Path) -> Result<PathBuf, String> {
    let summaries = collect_network_summaries(output_base)?;
    let generated = chrono::Local::now()
        .format("%Y-%m-%d %H:%M:%S%.6f")
        .to_string();
    let path = output_base.join(SUMMARY_FILE);
    write_file(&path, |out| write_summary(out, &generated, &summaries))?;
    tracing::info!(
        path = %path.display(),
        networks = summaries.len(),
        "Summary report written"
    );
    Ok(path)
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let error = |e: std::io::Error| format!("Cannot list `{}`: {}", dir.display(), e);
    let mut entries = std::fs::read_dir(dir)
        .map_err(error)?
        .map(|entry| entry.map(|it| it.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(error)?;
    entries.sort();
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use crate::statistics::NetworkStatistics;
    use crate::summary::{
        collect_network_summaries, generate_summary_report, write_summary, NetworkSummary,
    };
    use pretty_assertions::assert_eq;

    fn statistics(name: &str) -> NetworkStatistics {
        NetworkStatistics {
            network_name: name.to_string(),
            num_genes: 10,
            num_edges: 15,
            num_activation_edges: 9,
            num_repression_edges: 6,
            edge_density: 15.0 / 90.0,
            avg_in_degree: 1.5,
            avg_out_degree: 1.5,
            max_in_degree: 3,
            max_out_degree: 5,
        }
    }

    #[test]
    fn summary_layout() {
        let summaries = vec![NetworkSummary {
            statistics: statistics("insilico_size10_1"),
            files: vec![
                "insilico_size10_1_statistics.json".to_string(),
                "refNetwork.csv".to_string(),
            ],
        }];
        let mut buffer: Vec<u8> = Vec::new();
        write_summary(&mut buffer, "2024-01-01 00:00:00.000000", &summaries).unwrap();
        let expected = "\
# Dream4 Ground Truth Summary

**Generated**: 2024-01-01 00:00:00.000000

## Networks Processed

### insilico_size10_1

- **Genes**: 10
- **Edges**: 15
  - Activation: 9
  - Repression: 6
- **Edge Density**: 0.1667
- **Avg In-Degree**: 1.50
- **Avg Out-Degree**: 1.50

**Files generated**:
- `insilico_size10_1_statistics.json`
- `refNetwork.csv`

";
        assert_eq!(expected, String::from_utf8(buffer).unwrap());
    }

    #[test]
    fn collect_skips_unrelated_entries() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path();
        for name in ["net_b", "net_a"] {
            let network_dir = base.join(name);
            std::fs::create_dir(&network_dir).unwrap();
            std::fs::write(
                network_dir.join(format!("{}_statistics.json", name)),
                statistics(name).to_json(),
            )
            .unwrap();
            std::fs::write(network_dir.join("refNetwork.csv"), "Gene1,Gene2,Type\n").unwrap();
        }
        std::fs::create_dir(base.join("net_a").join("nested")).unwrap();
        std::fs::create_dir(base.join("no_statistics")).unwrap();
        std::fs::write(base.join("notes.txt"), "not a network").unwrap();

        let summaries = collect_network_summaries(base).unwrap();
        assert_eq!(2, summaries.len());
        assert_eq!("net_a", summaries[0].statistics.network_name);
        assert_eq!("net_b", summaries[1].statistics.network_name);
        assert_eq!(
            vec!["net_a_statistics.json", "refNetwork.csv"],
            summaries[0].files
        );

        let path = generate_summary_report(base).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("### net_a"));
        assert!(content.contains("### net_b"));
        assert!(!content.contains("no_statistics"));
    }

    #[test]
    fn invalid_statistics_are_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let network_dir = dir.path().join("broken");
        std::fs::create_dir(&network_dir).unwrap();
        std::fs::write(network_dir.join("broken_statistics.json"), "{").unwrap();
        assert!(collect_network_summaries(dir.path()).is_err());
    }
}
