/*
   Convert one Dream4 network (JSON expression data and, optionally, its SBML topology)
   into a BEELINE input directory with `ExpressionData.csv`, `PseudoTime.csv` and
   `refNetwork.csv`.

   Usage: dream4-to-beeline --json insilico_size10_1.json --xml insilico_size10_1.xml --output out/
*/

use clap::{Arg, Command};
use dream4_beeline::convert::convert_json_to_beeline;
use dream4_beeline::logging::init_tracing;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("dream4-to-beeline")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Dream4 expression data and network to BEELINE input files")
        .arg(
            Arg::new("json")
                .short('j')
                .long("json")
                .value_name("FILE")
                .required(true)
                .help("Dream4 JSON file with `gene_names` and `data`"),
        )
        .arg(
            Arg::new("xml")
                .short('x')
                .long("xml")
                .value_name("FILE")
                .help("Dream4 SBML network (refNetwork.csv is skipped without it)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("DIR")
                .required(true)
                .help("Output directory"),
        )
        .get_matches();

    init_tracing();

    let json = matches
        .get_one::<String>("json")
        .map(PathBuf::from)
        .ok_or("Missing --json argument.")?;
    let xml = matches.get_one::<String>("xml").map(PathBuf::from);
    let output = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .ok_or("Missing --output argument.")?;

    let report = convert_json_to_beeline(&json, xml.as_deref(), &output)?;

    println!("Conversion complete: {}", report.output_dir.display());
    println!("  Cells: {}", report.num_samples);
    println!("  Genes: {}", report.num_genes);
    match report.num_edges {
        Some(edges) => println!("  Reference edges: {}", edges),
        None => println!("  Reference network: not written"),
    }
    Ok(())
}
