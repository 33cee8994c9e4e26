use crate::sbml::import::{descendant_tags, SBML};
use crate::VOID_SPECIES;
use roxmltree::Node;

/// Read the names of all genes declared as `species` anywhere in the document.
///
/// Species without an ID and the `_void_` placeholder are skipped. The result is sorted.
pub fn read_species(root: Node) -> Vec<String> {
    let mut genes: Vec<String> = descendant_tags(root, (SBML, "species"))
        .into_iter()
        .filter_map(|specie| specie.attribute("id"))
        .filter(|id| !id.is_empty() && *id != VOID_SPECIES)
        .map(|id| id.to_string())
        .collect();
    genes.sort();
    genes
}
