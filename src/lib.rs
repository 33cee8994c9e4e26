//! Converts Dream4 benchmark networks (JSON expression data and SBML level-2 topology)
//! into the input and ground-truth file conventions of the BEELINE benchmarking suite.
//!
//! The crate is organised around two plain data types: a [GroundTruthNetwork] (a list of
//! gene names together with a list of [SignedEdge]s) and an [ExpressionMatrix]. The
//! [sbml] module builds the former from Dream4 SBML files, while the [expression],
//! [export], [statistics] and [summary] modules serialise both into BEELINE files.
//! The [convert] and [generator] modules tie everything together into the pipelines
//! used by the binaries.

pub mod config;
pub mod convert;
pub mod export;
pub mod expression;
pub mod generator;
pub mod logging;
pub mod sbml;
pub mod statistics;
pub mod summary;
pub mod util;

/// **(internal)** Utility methods for `Sign`.
mod _impl_sign;
/// **(internal)** Utility methods for `SignedEdge`.
mod _impl_signed_edge;
/// **(internal)** Utility methods for `GroundTruthNetwork`.
mod _impl_ground_truth_network;

/// The name of the SBML species that GeneNetWeaver uses as a placeholder for
/// "no regulator" (and as the source of synthesis reactions).
pub const VOID_SPECIES: &str = "_void_";

/// Possible effects of a regulator on its target gene.
///
/// In all BEELINE files, activation is written as `+` and repression as `-`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Sign {
    Activation,
    Repression,
}

/// A single directed and signed regulation `source -> target`.
///
/// Edges are identified only by their position in a list. Two edges with the same source
/// and target can coexist (GeneNetWeaver never produces them, but a malformed SBML file can).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SignedEdge {
    source: String,
    target: String,
    sign: Sign,
}

/// A gold standard network: an ordered list of gene names and a list of signed edges.
///
/// The gene ordering is significant, since it determines the row/column ordering of
/// the adjacency matrix. Edges are not validated against the gene list; the individual
/// writers decide what to do with unknown genes.
#[derive(Clone, Debug, PartialEq)]
pub struct GroundTruthNetwork {
    genes: Vec<String>,
    edges: Vec<SignedEdge>,
}

/// Gene expression data as stored in Dream4 JSON files: one row per sample (cell),
/// one column per gene.
///
/// A matrix loaded from JSON where every value is an integer literal is marked as
/// integral and its values are exported without a fractional part.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpressionMatrix {
    gene_names: Vec<String>,
    data: Vec<Vec<f64>>,
    integral: bool,
}
