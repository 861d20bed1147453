use std::collections::{BTreeSet, HashMap};

use configuration::Configuration;
use rule::Rule;
use thiserror::Error;

pub mod configuration;
pub mod rule;

/// Errors surfaced while building a network from rule text
#[derive(Debug, Error, Eq, PartialEq, Clone)]
pub enum NetworkBuildError {
    #[error("malformed rule on line {line}: {reason}")]
    MalformedRule { line: usize, reason: String },
    #[error("duplicate rule on line {line}: reactant pair `{first} + {second}` is already defined")]
    DuplicateRule {
        line: usize,
        first: String,
        second: String,
    },
}

/// Data structure representing a population protocol's reaction network.
/// - species
///     - every identifier appearing in the rule text, deduplicated and
///       sorted; the canonical index order for every vector this network
///       produces
/// - rules
///     - maps each ordered reactant pair to the state change its reaction
///       applies, expressed over the full species vector space
/// - minimal_reactants
///     - per rule, the counts that must be present for its reactant pair to
///       be drawable; consulted only by the stability test
///
/// Immutable once built, so it may be shared read-only across any number of
/// concurrent simulation runs.
#[derive(Debug, Clone)]
pub struct ReactionNetwork {
    species: Vec<String>,
    species_indices: HashMap<String, usize>,
    rules: HashMap<(usize, usize), Configuration>,
    minimal_reactants: Vec<Configuration>,
}

impl ReactionNetwork {
    /// Builds a network from rule text, one reaction per non-blank line.
    pub fn from_rules(rule_text: &str) -> Result<Self, NetworkBuildError> {
        let mut parsed_rules = Vec::new();
        for (line_number, line) in rule_text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
        {
            parsed_rules.push(Rule::parse(line, line_number + 1)?);
        }

        // fix the canonical species order before any vector is built
        let mut species_set = BTreeSet::new();
        for rule in &parsed_rules {
            let (first, second) = rule.get_reactants();
            species_set.insert(first.to_string());
            species_set.insert(second.to_string());
            for product in rule.get_products() {
                species_set.insert(product.clone());
            }
        }
        let species: Vec<String> = species_set.into_iter().collect();
        let species_indices: HashMap<String, usize> = species
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), index))
            .collect();

        let mut rules = HashMap::new();
        let mut minimal_reactants = Vec::new();
        for rule in &parsed_rules {
            let (first, second) = rule.get_reactants();
            let pair = (species_indices[first], species_indices[second]);

            let mut required = Configuration::zero(species.len());
            required.increment(pair.0);
            required.increment(pair.1);

            let mut produced = Configuration::zero(species.len());
            for product in rule.get_products() {
                produced.increment(species_indices[product]);
            }

            if rules.insert(pair, &produced - &required).is_some() {
                return Err(NetworkBuildError::DuplicateRule {
                    line: rule.get_line_number(),
                    first: first.to_string(),
                    second: second.to_string(),
                });
            }
            minimal_reactants.push(required);
        }

        return Ok(Self {
            species,
            species_indices,
            rules,
            minimal_reactants,
        });
    }

    /// Returns the species identifiers in canonical index order
    pub fn get_species(&self) -> &Vec<String> {
        return &self.species;
    }

    /// Returns the canonical vector index for a species identifier
    pub fn get_species_index(&self, name: &str) -> Option<usize> {
        return self.species_indices.get(name).copied();
    }

    /// Returns the number of species in the network
    pub fn num_species(&self) -> usize {
        return self.species.len();
    }

    /// Returns the state change for an ordered reactant pair, or None when
    /// the network defines no reaction for that pair
    pub fn get_delta(&self, first: usize, second: usize) -> Option<&Configuration> {
        return self.rules.get(&(first, second));
    }

    /// Returns the number of defined rules
    pub fn num_rules(&self) -> usize {
        return self.rules.len();
    }

    /// A configuration is stable when no reaction is applicable: for every
    /// rule's minimal reactant counts, at least one species is under
    /// supplied. The outer loop must range over all rules and the inner test
    /// must look for a single strictly short species; inverting the nesting
    /// inverts stability.
    pub fn is_stable(&self, config: &Configuration) -> bool {
        return self.minimal_reactants.iter().all(|required| {
            config
                .get_counts()
                .iter()
                .zip(required.get_counts().iter())
                .any(|(count, required_count)| count < required_count)
        });
    }
}
