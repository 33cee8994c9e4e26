/*
   Generate the gold standard files (signed and unsigned edge lists, adjacency matrix,
   BEELINE refNetwork and statistics) of every Dream4 network found in a directory,
   followed by a `SUMMARY.md` overview.

   Usage: generate-ground-truth --dream4-dir dream4/ --output ground_truth/ --size 10
*/

use clap::{Arg, ArgAction, Command};
use dream4_beeline::config::{dream4_network_names, Dream4Size, GeneratorConfig};
use dream4_beeline::generator::GroundTruthGenerator;
use dream4_beeline::logging::init_tracing;
use std::convert::TryFrom;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("generate-ground-truth")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate ground truth networks for the Dream4 benchmark")
        .arg(
            Arg::new("dream4-dir")
                .short('d')
                .long("dream4-dir")
                .value_name("DIR")
                .required(true)
                .help("Directory with the Dream4 SBML files (<network>.xml)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("DIR")
                .default_value("ground_truth")
                .help("Output directory"),
        )
        .arg(
            Arg::new("gnw-jar")
                .long("gnw-jar")
                .value_name("FILE")
                .default_value("gnw-3.1.2b.jar")
                .help("GeneNetWeaver archive checked before processing"),
        )
        .arg(
            Arg::new("size")
                .short('s')
                .long("size")
                .value_name("SIZE")
                .action(ArgAction::Append)
                .help("Network size to process: 10 or 100 (default: both)"),
        )
        .arg(
            Arg::new("skip-environment-check")
                .long("skip-environment-check")
                .action(ArgAction::SetTrue)
                .help("Do not check for Java and the GeneNetWeaver archive"),
        )
        .get_matches();

    init_tracing();

    let mut config = GeneratorConfig {
        check_environment: !matches.get_flag("skip-environment-check"),
        ..Default::default()
    };
    if let Some(dir) = matches.get_one::<String>("dream4-dir") {
        config.dream4_dir = PathBuf::from(dir);
    }
    if let Some(dir) = matches.get_one::<String>("output") {
        config.output_base = PathBuf::from(dir);
    }
    if let Some(jar) = matches.get_one::<String>("gnw-jar") {
        config.gnw_jar = PathBuf::from(jar);
    }
    if let Some(sizes) = matches.get_many::<String>("size") {
        let sizes = sizes
            .map(|it| Dream4Size::try_from(it.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        config.networks = dream4_network_names(&sizes);
    }

    let generator = GroundTruthGenerator::new(config)?;
    let report = generator.run()?;

    for statistics in &report.processed {
        println!("{}", statistics);
        println!();
    }
    for network in &report.skipped {
        println!("Skipped {} (no XML file).", network);
    }
    println!(
        "Ground truth generated for {} network(s) in {}.",
        report.processed.len(),
        generator.get_config().output_base.display()
    );
    if let Some(summary) = &report.summary {
        println!("Summary report: {}", summary.display());
    }
    Ok(())
}
