use crate::sbml::import::_read_reactions::{KineticLaw, SbmlReaction};
use crate::{Sign, SignedEdge};
use fxhash::{FxHashMap, FxHashSet};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches the IDs of kinetic law parameters which declare the number of
    /// activators/deactivators of a regulatory module, e.g. `numActivators_2`.
    static ref MODULE_PARAMETER: Regex =
        Regex::new(r"^num(Activators|Deactivators)_([1-9][0-9]*)$").unwrap();
}

/// Number of activators and deactivators declared for one regulatory module.
///
/// Counts are truncated towards zero and can be negative if the file says so.
/// Counts beyond the range of `i64` saturate.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RegulatoryModule {
    pub activators: i64,
    pub deactivators: i64,
}

impl RegulatoryModule {
    /// Number of regulators this module claims, i.e. `activators + deactivators`,
    /// or zero if that sum is negative.
    pub fn size(&self) -> usize {
        let total = self.activators.saturating_add(self.deactivators).max(0);
        usize::try_from(total).unwrap_or(usize::MAX)
    }
}

/// Raw values of `numActivators_k` and `numDeactivators_k` of one module index.
type DeclaredCounts<'a> = (Option<(&'a str, f64)>, Option<(&'a str, f64)>);

impl KineticLaw {
    /// Extract the regulatory modules declared by this kinetic law.
    ///
    /// Module `k` (starting at `1`) exists if at least one of `numActivators_k` and
    /// `numDeactivators_k` is declared. Modules are read until the first missing index,
    /// later modules are ignored (including their values). A missing count of an
    /// existing module is zero.
    pub fn modules(&self) -> Result<Vec<RegulatoryModule>, String> {
        let mut declared: FxHashMap<usize, DeclaredCounts> = FxHashMap::default();
        for (id, value) in &self.parameters {
            let Some(captures) = MODULE_PARAMETER.captures(id) else {
                continue;
            };
            let Ok(index) = captures[2].parse::<usize>() else {
                continue;
            };
            let counts = declared.entry(index).or_default();
            if &captures[1] == "Activators" {
                counts.0 = Some((id.as_str(), *value));
            } else {
                counts.1 = Some((id.as_str(), *value));
            }
        }

        let mut modules = Vec::new();
        let mut index = 1;
        while let Some((activators, deactivators)) = declared.get(&index) {
            modules.push(RegulatoryModule {
                activators: module_count(*activators)?,
                deactivators: module_count(*deactivators)?,
            });
            index += 1;
        }
        Ok(modules)
    }
}

fn module_count(parameter: Option<(&str, f64)>) -> Result<i64, String> {
    match parameter {
        None => Ok(0),
        // Float to int casts saturate at the bounds of `i64`.
        Some((_, value)) if value.is_finite() => Ok(value.trunc() as i64),
        Some((id, value)) => Err(format!(
            "Module parameter `{}` must be a finite number, but is {}.",
            id, value
        )),
    }
}

/// Compute the signed regulations encoded by one SBML reaction.
///
/// Non-synthesis reactions and reactions without regulators produce no edges.
///
/// The sign of a regulator is decided purely by its position: the regulators are handed
/// out to the modules of the kinetic law in document order. Every module takes
/// `activators + deactivators` of the not yet assigned regulators (or fewer, if there
/// are not enough of them left) and the first `activators` of those are activating,
/// the rest are repressing. Regulators that no module claims are activating, and so are
/// all regulators of a reaction without a kinetic law.
///
/// Regulators are identified by name, so a regulator listed twice is claimed (and emitted)
/// twice by the same module, but never by two different modules.
pub fn infer_signed_edges(reaction: &SbmlReaction) -> Result<Vec<SignedEdge>, String> {
    let Some(target) = reaction.synthesis_target() else {
        return Ok(Vec::new());
    };
    let modules = match &reaction.kinetic_law {
        Some(kinetic_law) if !reaction.modifiers.is_empty() => Some(kinetic_law.modules()?),
        _ => None,
    };
    Ok(assign_signs(target, &reaction.modifiers, modules.as_deref()))
}

/// Sign the `regulators -> target` edges using already extracted modules.
///
/// `None` means the reaction has no kinetic law, so every regulator is activating.
pub fn assign_signs(
    target: &str,
    regulators: &[String],
    modules: Option<&[RegulatoryModule]>,
) -> Vec<SignedEdge> {
    let Some(modules) = modules else {
        return regulators
            .iter()
            .map(|r| SignedEdge::activation(r, target))
            .collect();
    };

    let mut edges = Vec::new();
    let mut used: FxHashSet<&str> = FxHashSet::default();
    for module in modules {
        let available: Vec<&str> = regulators
            .iter()
            .map(|r| r.as_str())
            .filter(|r| !used.contains(r))
            .collect();
        for (i, regulator) in available.iter().take(module.size()).enumerate() {
            let sign = if (i as i64) < module.activators {
                Sign::Activation
            } else {
                Sign::Repression
            };
            edges.push(SignedEdge::new(regulator, target, sign));
            used.insert(*regulator);
        }
    }

    for regulator in regulators {
        if !used.contains(regulator.as_str()) {
            edges.push(SignedEdge::activation(regulator, target));
        }
    }

    edges
}
