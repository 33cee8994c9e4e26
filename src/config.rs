//! Configuration of the ground truth generator.

use std::convert::TryFrom;
use std::path::PathBuf;

/// Every Dream4 network size comes in this many replicates (`insilico_size10_1` to `_5`).
pub const DREAM4_REPLICATES: usize = 5;

/// The two network sizes of the Dream4 in-silico challenge.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Dream4Size {
    Size10,
    Size100,
}

impl Dream4Size {
    pub fn num_genes(&self) -> usize {
        match self {
            Dream4Size::Size10 => 10,
            Dream4Size::Size100 => 100,
        }
    }

    /// Names of all networks of this size, e.g. `insilico_size10_1` to `insilico_size10_5`.
    pub fn network_names(&self) -> Vec<String> {
        (1..=DREAM4_REPLICATES)
            .map(|i| format!("insilico_size{}_{}", self.num_genes(), i))
            .collect()
    }
}

impl TryFrom<&str> for Dream4Size {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "10" => Ok(Dream4Size::Size10),
            "100" => Ok(Dream4Size::Size100),
            _ => Err(format!(
                "Invalid Dream4 network size `{}`. Expected 10 or 100.",
                value
            )),
        }
    }
}

/// Names of all networks of the given sizes, in the order of the sizes.
pub fn dream4_network_names(sizes: &[Dream4Size]) -> Vec<String> {
    sizes.iter().flat_map(|size| size.network_names()).collect()
}

/// Settings of a `GroundTruthGenerator` run.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Directory with the Dream4 SBML files (`<network>.xml`).
    pub dream4_dir: PathBuf,
    /// Directory where one sub-directory per network and `SUMMARY.md` are created.
    pub output_base: PathBuf,
    /// The GeneNetWeaver archive which must be present when `check_environment` is set.
    pub gnw_jar: PathBuf,
    /// Verify that Java and the GeneNetWeaver archive are available before doing anything.
    pub check_environment: bool,
    /// Networks to process, in order.
    pub networks: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            dream4_dir: PathBuf::from("dream4"),
            output_base: PathBuf::from("ground_truth"),
            gnw_jar: PathBuf::from("gnw-3.1.2b.jar"),
            check_environment: true,
            networks: dream4_network_names(&[Dream4Size::Size10, Dream4Size::Size100]),
        }
    }
}
