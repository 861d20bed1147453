use std::fmt::Display;
use std::ops::{Add, Sub};

/// A vector of per species counts indexed against a reaction network's
/// canonical species order. Represents either a population state (all entries
/// non negative) or a state change produced by a reaction (entries may be
/// negative, products minus reactants).
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Configuration {
    counts: Vec<i64>,
}

impl Configuration {
    /// Builds a configuration holding zero of every species
    pub fn zero(num_species: usize) -> Self {
        return Self { counts: vec![0; num_species] };
    }

    pub fn from_counts(counts: Vec<i64>) -> Self {
        return Self { counts };
    }

    /// Returns a reference to the per species counts in canonical order
    pub fn get_counts(&self) -> &[i64] {
        return &self.counts;
    }

    /// Returns the number of species slots in this configuration
    pub fn len(&self) -> usize {
        return self.counts.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.counts.is_empty();
    }

    /// Returns the total population across all species
    pub fn get_total(&self) -> i64 {
        return self.counts.iter().sum();
    }

    /// Adds one unit of the species at `index`
    pub fn increment(&mut self, index: usize) {
        self.counts[index] += 1;
    }

    /// Mutates the configuration in place to reflect the effects of a
    /// reaction's delta vector
    pub fn apply(&mut self, delta: &Configuration) {
        assert_eq!(self.counts.len(), delta.counts.len());
        for (count, change) in self.counts.iter_mut().zip(delta.counts.iter()) {
            *count += change;
        }
    }
}

impl<'a, 'b> Add<&'b Configuration> for &'a Configuration {
    type Output = Configuration;

    fn add(self, other: &'b Configuration) -> Configuration {
        assert_eq!(self.counts.len(), other.counts.len());
        let counts = self
            .counts
            .iter()
            .zip(other.counts.iter())
            .map(|(a, b)| a + b)
            .collect();
        return Configuration { counts };
    }
}

impl<'a, 'b> Sub<&'b Configuration> for &'a Configuration {
    type Output = Configuration;

    fn sub(self, other: &'b Configuration) -> Configuration {
        assert_eq!(self.counts.len(), other.counts.len());
        let counts = self
            .counts
            .iter()
            .zip(other.counts.iter())
            .map(|(a, b)| a - b)
            .collect();
        return Configuration { counts };
    }
}

impl Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatted_string = String::new();
        for count in &self.counts {
            formatted_string.push_str(&format!("{},", count));
        }

        write!(f, "{}", formatted_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_sub_round_trips() {
        let c1 = Configuration::from_counts(vec![3, 0, 7, 1]);
        let c2 = Configuration::from_counts(vec![1, 5, 0, 2]);

        assert_eq!(&(&c1 + &c2) - &c2, c1);
    }

    #[test]
    fn apply_matches_operator_add() {
        let mut config = Configuration::from_counts(vec![4, 4, 0]);
        let delta = Configuration::from_counts(vec![0, -1, 1]);

        let expected = &config + &delta;
        config.apply(&delta);

        assert_eq!(config, expected);
        assert_eq!(config.get_counts(), &[4, 3, 1]);
    }

    #[test]
    fn total_sums_all_species() {
        let config = Configuration::from_counts(vec![10, 10, 0]);
        assert_eq!(config.get_total(), 20);

        assert_eq!(Configuration::zero(5).get_total(), 0);
    }
}
