use rand::{rngs::StdRng, Rng, SeedableRng};
use thiserror::Error;

use crate::reaction_network::{configuration::Configuration, ReactionNetwork};

/// Errors surfaced while setting up or running a simulation
#[derive(Debug, Error, Eq, PartialEq, Clone)]
pub enum SimulationError {
    #[error("invalid initial configuration: {0}")]
    InvalidConfiguration(String),
    #[error("no stable configuration reached within {0} interactions")]
    StepLimitExceeded(usize),
}

/// The runtime environment for a single simulation run. Owns a private
/// working configuration and random number stream, so any number of runs may
/// execute concurrently against one shared network.
pub struct Simulation<'network> {
    network: &'network ReactionNetwork,
    configuration: Configuration,
    initial_population: i64,
    interactions: usize,
    step_limit: Option<usize>,
    prng: StdRng,
    seed: [u8; 32],
}

impl<'network> Simulation<'network> {
    /// Builds a run from an initial configuration given in the network's
    /// canonical species order. Shorter vectors are padded with zeros;
    /// longer vectors and negative counts are caller contract violations
    /// and fail fast.
    pub fn new(
        network: &'network ReactionNetwork,
        initial_config: &[i64],
    ) -> Result<Self, SimulationError> {
        if initial_config.len() > network.num_species() {
            return Err(SimulationError::InvalidConfiguration(format!(
                "{} counts supplied but the network only has {} species",
                initial_config.len(),
                network.num_species()
            )));
        }
        for (index, &count) in initial_config.iter().enumerate() {
            if count < 0 {
                return Err(SimulationError::InvalidConfiguration(format!(
                    "negative count {} for species `{}`",
                    count,
                    network.get_species()[index]
                )));
            }
        }

        let mut counts = initial_config.to_vec();
        counts.resize(network.num_species(), 0);
        let configuration = Configuration::from_counts(counts);
        let initial_population = configuration.get_total();

        let seed: [u8; 32] = rand::random();
        let prng = StdRng::from_seed(seed);

        return Ok(Self {
            network,
            configuration,
            initial_population,
            interactions: 0,
            step_limit: None,
            prng,
            seed,
        });
    }

    /// Sets prng to some prng based on seed
    pub fn with_seed(mut self, seed: [u8; 32]) -> Self {
        self.seed = seed;
        self.prng = StdRng::from_seed(seed);
        self
    }

    /// Caps the number of interactions a run may execute. The model does not
    /// guarantee termination for arbitrary rule sets; without a cap the run
    /// loops until stable.
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Returns a reference to the current seed value
    pub fn get_seed(&self) -> &[u8; 32] {
        return &self.seed;
    }

    /// Returns a reference to the current working configuration
    pub fn get_configuration(&self) -> &Configuration {
        return &self.configuration;
    }

    /// Returns the number of interactions executed so far
    pub fn get_interactions(&self) -> usize {
        return self.interactions;
    }

    /// Executes one interaction: draws two distinct individuals, applies the
    /// matching reaction's state change, and counts the step. Returns false
    /// without drawing when the configuration is already stable.
    pub fn step(&mut self) -> bool {
        if self.network.is_stable(&self.configuration) {
            return false;
        }

        let (first, second) = self.draw_pair();
        match self.network.get_delta(first, second) {
            Some(delta) => self.configuration.apply(delta),
            // no rule for this ordered pair: the agents part unchanged, but
            // the interaction still counts toward convergence time
            None => (),
        }
        self.interactions += 1;
        return true;
    }

    /// Runs interactions until the configuration is stable and returns the
    /// interaction count normalized by the initial population size.
    pub fn run(&mut self) -> Result<f64, SimulationError> {
        while self.step() {
            if let Some(limit) = self.step_limit {
                if self.interactions >= limit && !self.network.is_stable(&self.configuration) {
                    return Err(SimulationError::StepLimitExceeded(limit));
                }
            }
        }
        return Ok(self.interactions as f64 / std::cmp::max(1, self.initial_population) as f64);
    }

    /// Draws an ordered pair of two distinct individuals uniformly at random
    /// from the population, weighted by per species counts. The second draw
    /// excludes the first individual, not its species, so a species with a
    /// single member can never react with itself.
    fn draw_pair(&mut self) -> (usize, usize) {
        let total = self.configuration.get_total();
        // an applicable rule implies at least two individuals are present
        let first_pick = self.prng.gen_range(0..total);
        let mut second_pick = self.prng.gen_range(0..total - 1);

        let counts = self.configuration.get_counts();
        let first = Self::species_at(counts, first_pick);

        for (index, &count) in counts.iter().enumerate() {
            let available = if index == first { count - 1 } else { count };
            if second_pick < available {
                return (first, index);
            }
            second_pick -= available;
        }
        unreachable!("second individual index exceeded population");
    }

    /// Maps a uniform index over `0..sum(counts)` to a species via prefix
    /// sum walk
    fn species_at(counts: &[i64], mut index: i64) -> usize {
        for (species, &count) in counts.iter().enumerate() {
            if index < count {
                return species;
            }
            index -= count;
        }
        unreachable!("individual index exceeded population");
    }
}
