use crate::sbml::import::{descendant_tags, first_descendant, SBML};
use crate::VOID_SPECIES;
use fxhash::FxHashMap;
use roxmltree::Node;

/// The subset of an SBML reaction that matters for the regulatory structure.
#[derive(Clone, Debug, PartialEq)]
pub struct SbmlReaction {
    /// Missing IDs are read as empty strings.
    pub id: String,
    /// Species of all modifier references in document order, without `_void_`
    /// and without empty references.
    pub modifiers: Vec<String>,
    pub kinetic_law: Option<KineticLaw>,
}

/// Parameters of a reaction kinetic law, indexed by their IDs.
///
/// When an ID repeats, the last value wins.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KineticLaw {
    pub parameters: FxHashMap<String, f64>,
}

impl SbmlReaction {
    /// Returns the name of the synthesised gene if this is a synthesis reaction.
    ///
    /// GeneNetWeaver names reactions `<gene>_synthesis` and `<gene>_degradation`. Everything
    /// that mentions `degradation` or has no `_` separator is ignored. The gene is the part
    /// of the ID before the first `_`.
    pub fn synthesis_target(&self) -> Option<&str> {
        if self.id.contains("degradation") {
            return None;
        }
        let (target, _) = self.id.split_once('_')?;
        if target.is_empty() {
            None
        } else {
            Some(target)
        }
    }
}

/// Read all `reaction` elements of the document in document order.
pub fn read_reactions(root: Node) -> Result<Vec<SbmlReaction>, String> {
    descendant_tags(root, (SBML, "reaction"))
        .into_iter()
        .map(read_reaction)
        .collect()
}

pub fn read_reaction(reaction: Node) -> Result<SbmlReaction, String> {
    let id = reaction.attribute("id").unwrap_or_default().to_string();

    let modifiers = descendant_tags(reaction, (SBML, "modifierSpeciesReference"))
        .into_iter()
        .map(|modifier| modifier.attribute("species").unwrap_or_default())
        .filter(|species| !species.is_empty() && *species != VOID_SPECIES)
        .map(|species| species.to_string())
        .collect();

    let kinetic_law = first_descendant(reaction, (SBML, "kineticLaw"))
        .map(|law| read_kinetic_law(law, &id))
        .transpose()?;

    Ok(SbmlReaction {
        id,
        modifiers,
        kinetic_law,
    })
}

fn read_kinetic_law(law: Node, reaction_id: &str) -> Result<KineticLaw, String> {
    let mut parameters = FxHashMap::default();
    for parameter in descendant_tags(law, (SBML, "parameter")) {
        let id = parameter.attribute("id").unwrap_or_default();
        let value = match parameter.attribute("value") {
            None => 0.0,
            Some(value) => value.trim().parse::<f64>().map_err(|_| {
                format!(
                    "Parameter `{}` in reaction `{}` has an invalid value `{}`.",
                    id, reaction_id, value
                )
            })?,
        };
        parameters.insert(id.to_string(), value);
    }
    Ok(KineticLaw { parameters })
}
