use super::NetworkBuildError;

/// A single parsed reaction line. The reactant pair is ordered exactly as
/// written, so `A + B` and `B + A` parse to distinct rules.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Rule {
    reactants: (String, String),
    products: Vec<String>,
    line_number: usize,
}

impl Rule {
    /// Parses one line of the form `R1 + R2 -> P1 [+ P2 ...]`.
    /// Whitespace around identifiers, `+`, and `->` is insignificant.
    pub fn parse(line: &str, line_number: usize) -> Result<Self, NetworkBuildError> {
        let sides: Vec<&str> = line.split("->").collect();
        if sides.len() != 2 {
            return Err(NetworkBuildError::MalformedRule {
                line: line_number,
                reason: format!("expected exactly one `->`, found {}", sides.len() - 1),
            });
        }

        let reactants = Self::split_side(sides[0], line_number)?;
        if reactants.len() != 2 {
            return Err(NetworkBuildError::MalformedRule {
                line: line_number,
                reason: format!("expected exactly two reactants, found {}", reactants.len()),
            });
        }

        let products = Self::split_side(sides[1], line_number)?;
        if products.is_empty() {
            return Err(NetworkBuildError::MalformedRule {
                line: line_number,
                reason: "expected at least one product".to_string(),
            });
        }

        return Ok(Self {
            reactants: (reactants[0].clone(), reactants[1].clone()),
            products,
            line_number,
        });
    }

    /// Splits one side of a rule on `+` into trimmed species identifiers
    fn split_side(side: &str, line_number: usize) -> Result<Vec<String>, NetworkBuildError> {
        let mut identifiers = Vec::new();
        for token in side.split('+') {
            let identifier = token.trim();
            if identifier.is_empty() {
                return Err(NetworkBuildError::MalformedRule {
                    line: line_number,
                    reason: "empty species identifier".to_string(),
                });
            }
            identifiers.push(identifier.to_string());
        }
        return Ok(identifiers);
    }

    /// Returns the ordered reactant pair for this rule
    pub fn get_reactants(&self) -> (&str, &str) {
        return (&self.reactants.0, &self.reactants.1);
    }

    /// Returns the list of product species for this rule
    pub fn get_products(&self) -> &Vec<String> {
        return &self.products;
    }

    /// Returns the 1-based source line this rule was parsed from
    pub fn get_line_number(&self) -> usize {
        return self.line_number;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_reactants_and_products() {
        let rule = Rule::parse("A + B -> A + U", 1).unwrap();
        assert_eq!(rule.get_reactants(), ("A", "B"));
        assert_eq!(rule.get_products(), &vec!["A".to_string(), "U".to_string()]);
        assert_eq!(rule.get_line_number(), 1);
    }

    #[test]
    fn parses_single_product() {
        let rule = Rule::parse("X+X->Y", 3).unwrap();
        assert_eq!(rule.get_reactants(), ("X", "X"));
        assert_eq!(rule.get_products(), &vec!["Y".to_string()]);
    }

    #[test]
    fn ignores_surrounding_whitespace() {
        let rule = Rule::parse("   A   +  B ->   B + B  ", 2).unwrap();
        assert_eq!(rule.get_reactants(), ("A", "B"));
        assert_eq!(rule.get_products(), &vec!["B".to_string(), "B".to_string()]);
    }

    #[test]
    fn rejects_missing_arrow() {
        let result = Rule::parse("A + B", 4);
        assert!(matches!(
            result,
            Err(NetworkBuildError::MalformedRule { line: 4, .. })
        ));
    }

    #[test]
    fn rejects_double_arrow() {
        let result = Rule::parse("A + B -> C -> D", 1);
        assert!(matches!(
            result,
            Err(NetworkBuildError::MalformedRule { line: 1, .. })
        ));
    }

    #[test]
    fn rejects_three_reactants() {
        let result = Rule::parse("A + B + C -> D + E", 7);
        assert!(matches!(
            result,
            Err(NetworkBuildError::MalformedRule { line: 7, .. })
        ));
    }

    #[test]
    fn rejects_single_reactant() {
        let result = Rule::parse("A -> B + C", 1);
        assert!(matches!(
            result,
            Err(NetworkBuildError::MalformedRule { line: 1, .. })
        ));
    }

    #[test]
    fn rejects_empty_product_side() {
        let result = Rule::parse("A + B -> ", 1);
        assert!(matches!(
            result,
            Err(NetworkBuildError::MalformedRule { line: 1, .. })
        ));
    }

    #[test]
    fn rejects_empty_identifier_between_plus_signs() {
        let result = Rule::parse("A + -> B + C", 5);
        assert!(matches!(
            result,
            Err(NetworkBuildError::MalformedRule { line: 5, .. })
        ));
    }
}
