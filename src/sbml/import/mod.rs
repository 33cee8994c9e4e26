use crate::sbml::import::_infer_signs::assign_signs;
use crate::sbml::import::_read_reactions::read_reactions;
use crate::sbml::import::_read_species::read_species;
use crate::{GroundTruthNetwork, SignedEdge};
use fxhash::FxHashSet;
use roxmltree::{Document, ExpandedName, Node};
use std::path::Path;

pub use crate::sbml::import::_infer_signs::{infer_signed_edges, RegulatoryModule};
pub use crate::sbml::import::_read_reactions::{KineticLaw, SbmlReaction};

const SBML: &str = "http://www.sbml.org/sbml/level2";

mod _infer_signs;
mod _read_reactions;
mod _read_species;

impl GroundTruthNetwork {
    /// Try to read a `GroundTruthNetwork` from a GeneNetWeaver SBML string.
    ///
    /// Genes are all declared species (sorted, without `_void_`), edges are inferred
    /// from the synthesis reactions (see [read_signed_edges]).
    pub fn try_from_sbml(model_file: &str) -> Result<GroundTruthNetwork, String> {
        GroundTruthNetwork::try_from_sbml_strict(model_file, &mut Vec::new())
    }

    /// The same as `try_from_sbml`, but provides access to all warnings generated during
    /// parsing.
    ///
    /// Warnings never change the result. They report documents that do not look like
    /// GeneNetWeaver output, regulations between undeclared species and regulators whose
    /// sign was not decided by any kinetic law module.
    pub fn try_from_sbml_strict(
        model_file: &str,
        warnings: &mut Vec<String>,
    ) -> Result<GroundTruthNetwork, String> {
        let document = parse_document(model_file)?;
        let root = document.root();
        check_sbml_root(root, warnings);

        let genes = read_species(root);
        let edges = read_edges(root, warnings)?;

        let declared: FxHashSet<&str> = genes.iter().map(|g| g.as_str()).collect();
        for edge in &edges {
            for gene in [edge.get_source(), edge.get_target()] {
                if !declared.contains(gene) {
                    warnings.push(format!(
                        "Regulation `{}` uses species `{}` which is not declared.",
                        edge, gene
                    ));
                }
            }
        }

        Ok(GroundTruthNetwork::new(genes, edges))
    }

    /// Read a `GroundTruthNetwork` from an SBML file.
    pub fn try_from_sbml_file<P: AsRef<Path>>(path: P) -> Result<GroundTruthNetwork, String> {
        let model_file = read_model_file(path.as_ref())?;
        GroundTruthNetwork::try_from_sbml(&model_file)
    }
}

/// Extract the signed regulations of all synthesis reactions in the given SBML string,
/// in document order.
pub fn read_signed_edges(model_file: &str) -> Result<Vec<SignedEdge>, String> {
    let document = parse_document(model_file)?;
    read_edges(document.root(), &mut Vec::new())
}

/// Extract the names of all genes declared in the given SBML string, sorted.
pub fn read_gene_names(model_file: &str) -> Result<Vec<String>, String> {
    let document = parse_document(model_file)?;
    Ok(read_species(document.root()))
}

/// Read the content of an SBML file into a string.
pub fn read_model_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path)
        .map_err(|e| format!("Cannot read SBML file `{}`: {}", path.display(), e))
}

fn parse_document(model_file: &str) -> Result<Document, String> {
    Document::parse(model_file).map_err(|e| format!("XML Error: {:?}", e))
}

/// **(internal)** Dream4 files are SBML level 2, but the edges are read from any document,
/// so a different root is only reported.
fn check_sbml_root(root: Node, warnings: &mut Vec<String>) {
    let sbml = root.children().find(|it| it.is_element());
    match sbml {
        Some(sbml) if sbml.tag_name() == ExpandedName::from((SBML, "sbml")) => {}
        Some(other) => warnings.push(format!(
            "Root element `{}` is not an SBML level 2 <sbml> tag.",
            other.tag_name().name()
        )),
        None => warnings.push("Document is empty.".to_string()),
    }
}

fn read_edges(root: Node, warnings: &mut Vec<String>) -> Result<Vec<SignedEdge>, String> {
    let mut edges = Vec::new();
    for reaction in read_reactions(root)? {
        let Some(target) = reaction.synthesis_target() else {
            continue;
        };
        let regulators = &reaction.modifiers;
        if regulators.is_empty() {
            continue;
        }
        let modules = reaction
            .kinetic_law
            .as_ref()
            .map(|law| law.modules())
            .transpose()?;
        if let Some(modules) = &modules {
            let covered = modules
                .iter()
                .fold(0usize, |sum, m| sum.saturating_add(m.size()));
            if covered < regulators.len() {
                warnings.push(format!(
                    "Modules of `{}` cover {} of {} regulator(s) of `{}`. The rest defaults to activation.",
                    reaction.id,
                    covered,
                    regulators.len(),
                    target
                ));
            }
        }
        edges.append(&mut assign_signs(target, regulators, modules.as_deref()));
    }
    Ok(edges)
}

/// **(internal)** Find all descendants of `parent` (including `parent`) that have
/// a given name, in document order.
fn descendant_tags<'a, 'input: 'a>(
    parent: Node<'a, 'input>,
    name: (&'static str, &'static str),
) -> Vec<Node<'a, 'input>> {
    let name = ExpandedName::from(name);
    parent
        .descendants()
        .filter(|n| n.tag_name() == name)
        .collect()
}

/// **(internal)** Find the first descendant of `parent` with the given name (document order).
fn first_descendant<'a, 'input: 'a>(
    parent: Node<'a, 'input>,
    name: (&'static str, &'static str),
) -> Option<Node<'a, 'input>> {
    let name = ExpandedName::from(name);
    parent.descendants().find(|n| n.tag_name() == name)
}
