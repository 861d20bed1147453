//! # Description
//! This is the core simulation engine for population protocols. It takes a
//! textual set of pairwise reaction rules as well as a set of initial species
//! counts. It uses these to stochastically drive a population of anonymous
//! agents to a stable state, measuring convergence time as the number of
//! random pairwise interactions normalized by population size.
//!
//! Each line of rule text is one reaction of the form
//! `R1 + R2 -> P1 [+ P2 ...]`: two ordered reactant species on the left and
//! the species they become on the right. Every simulation step draws two
//! distinct individuals uniformly at random from the population, applies the
//! rule defined for that ordered species pair (or nothing, when no rule
//! matches), and repeats until no rule's reactants can be drawn.
//!
//! Experiment sweeps, repeated-trial averaging, and plotting are left to the
//! caller; they consume this crate through [`build_network`] and
//! [`run_simulation`], or through [`Simulation`] when per-step control or
//! seeding is needed.

pub mod reaction_network;
pub mod simulation;

pub use reaction_network::{NetworkBuildError, ReactionNetwork};
pub use simulation::{Simulation, SimulationError};

/// Parses rule text into a reaction network, one reaction per non-blank
/// line. Fails on a malformed line or a duplicated ordered reactant pair.
pub fn build_network(rule_text: &str) -> Result<ReactionNetwork, NetworkBuildError> {
    return ReactionNetwork::from_rules(rule_text);
}

/// Runs one simulation from the given initial configuration (counts in the
/// network's canonical species order, shorter vectors zero padded) and
/// returns the convergence time: interactions executed divided by the
/// initial population size (or by 1 for an empty population).
pub fn run_simulation(
    network: &ReactionNetwork,
    initial_config: &[i64],
) -> Result<f64, SimulationError> {
    let mut simulation = Simulation::new(network, initial_config)?;
    return simulation.run();
}
