//! Adds support for reading GeneNetWeaver (Dream4) SBML files into a `GroundTruthNetwork`.

/// Contains code for parsing SBML level-2 models produced by GeneNetWeaver using the
/// `roxmltree` library. Only the parts relevant for the regulatory structure are read:
/// species, synthesis reactions, their modifiers and kinetic law parameters.
pub mod import;
