use crate::error::SyntaxError;
use num_bigint::BigUint;
use num_traits::One;
use std::collections::BTreeMap;

/// One node of a parsed chemical formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element symbol with its subscript count (1 when absent).
    Atom { symbol: String, count: u64 },
    /// A parenthesized sub-formula with its trailing multiplier (1 when
    /// absent).
    Group { children: Vec<Node>, multiplier: u64 },
}

/// An immutable parse tree for a single chemical formula.
///
/// The tree mirrors the source text: a sequence of atoms and parenthesized
/// groups, with groups nesting recursively. Atom counts are only computed on
/// demand by [`Formula::atom_counts`], so the structure of the source is never
/// lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    nodes: Vec<Node>,
    source: String,
}

impl Formula {
    /// Returns the text this formula was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the top-level nodes of the parse tree.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Folds the tree into a sorted atom-to-count mapping.
    ///
    /// Group multipliers distribute over every atom inside the group,
    /// including atoms in nested groups. Counts are accumulated in `BigUint`:
    /// nested multipliers compound multiplicatively, so products can exceed
    /// any fixed-width integer even though each individual subscript fits.
    ///
    /// # Examples
    ///
    /// ```
    /// use baleq::parser::parse_formula;
    /// use num_bigint::BigUint;
    ///
    /// let counts = parse_formula("(NH4)3PO4").unwrap().atom_counts();
    /// assert_eq!(counts["N"], BigUint::from(3u64));
    /// assert_eq!(counts["H"], BigUint::from(12u64));
    /// assert_eq!(counts["P"], BigUint::from(1u64));
    /// assert_eq!(counts["O"], BigUint::from(4u64));
    /// ```
    pub fn atom_counts(&self) -> BTreeMap<String, BigUint> {
        let mut counts = BTreeMap::new();
        accumulate(&self.nodes, &BigUint::one(), &mut counts);
        counts
    }
}

fn accumulate(nodes: &[Node], multiplier: &BigUint, counts: &mut BTreeMap<String, BigUint>) {
    for node in nodes {
        match node {
            Node::Atom { symbol, count } => {
                *counts.entry(symbol.clone()).or_default() += BigUint::from(*count) * multiplier;
            }
            Node::Group {
                children,
                multiplier: group_multiplier,
            } => {
                accumulate(children, &(multiplier * BigUint::from(*group_multiplier)), counts);
            }
        }
    }
}

/// Parses a single chemical formula into a [`Formula`] tree.
///
/// An atom token is an uppercase letter followed by any lowercase letters and
/// an optional digit run; a group is a balanced parenthesis pair followed by
/// an optional digit run. Counts default to 1 when no digits are present.
///
/// # Errors
///
/// Returns a [`SyntaxError`] for empty input, unbalanced parentheses, or a
/// character that cannot start an atom or group (such as a leading digit).
///
/// # Examples
///
/// ```
/// use baleq::parser::parse_formula;
/// use num_bigint::BigUint;
///
/// let water = parse_formula("H2O").unwrap();
/// let counts = water.atom_counts();
/// assert_eq!(counts["H"], BigUint::from(2u64));
/// assert_eq!(counts["O"], BigUint::from(1u64));
/// ```
pub fn parse_formula(term: &str) -> Result<Formula, SyntaxError> {
    if term.is_empty() {
        return Err(SyntaxError::EmptyFormula);
    }

    let mut parser = Parser {
        term,
        chars: term.chars().collect(),
        pos: 0,
    };
    let nodes = parser.sequence()?;

    // The sequence only stops early on a ')' that no '(' opened.
    if parser.pos != parser.chars.len() {
        return Err(SyntaxError::UnbalancedParentheses {
            term: term.to_string(),
        });
    }

    Ok(Formula {
        nodes,
        source: term.to_string(),
    })
}

struct Parser<'a> {
    term: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn sequence(&mut self) -> Result<Vec<Node>, SyntaxError> {
        let mut nodes = Vec::new();
        while let Some(character) = self.peek() {
            if character == ')' {
                break;
            }
            if character == '(' {
                self.pos += 1;
                let children = self.sequence()?;
                if self.peek() != Some(')') {
                    return Err(SyntaxError::UnbalancedParentheses {
                        term: self.term.to_string(),
                    });
                }
                self.pos += 1;
                let multiplier = self.count()?;
                nodes.push(Node::Group {
                    children,
                    multiplier,
                });
            } else if character.is_ascii_uppercase() {
                let mut symbol = String::new();
                symbol.push(character);
                self.pos += 1;
                while let Some(lower) = self.peek() {
                    if lower.is_ascii_lowercase() {
                        symbol.push(lower);
                        self.pos += 1;
                    } else {
                        break;
                    }
                }
                let count = self.count()?;
                nodes.push(Node::Atom { symbol, count });
            } else {
                return Err(SyntaxError::UnexpectedToken {
                    term: self.term.to_string(),
                    character,
                    index: self.pos,
                });
            }
        }
        Ok(nodes)
    }

    /// Reads a digit run as a count, defaulting to 1 when no digits follow.
    fn count(&mut self) -> Result<u64, SyntaxError> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        if start == self.pos {
            return Ok(1);
        }
        let digits: String = self.chars[start..self.pos].iter().collect();
        digits.parse().map_err(|_| SyntaxError::CountOutOfRange {
            term: self.term.to_string(),
            index: start,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(term: &str) -> BTreeMap<String, BigUint> {
        parse_formula(term).unwrap().atom_counts()
    }

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_single_atoms_and_subscripts() {
        let expected = BTreeMap::from([("H".to_string(), big(2)), ("O".to_string(), big(1))]);
        assert_eq!(counts("H2O"), expected);
        assert_eq!(counts("C57H110O6").get("H"), Some(&big(110)));
    }

    #[test]
    fn test_two_letter_symbols_do_not_shadow_one_letter() {
        let cobalt = counts("Co");
        assert_eq!(cobalt.get("Co"), Some(&big(1)));
        assert_eq!(cobalt.get("C"), None);

        let carbon_monoxide = counts("CO");
        assert_eq!(carbon_monoxide.get("C"), Some(&big(1)));
        assert_eq!(carbon_monoxide.get("O"), Some(&big(1)));
    }

    #[test]
    fn test_group_multiplier_distributes() {
        let phosphate = counts("(NH4)3PO4");
        assert_eq!(phosphate["N"], big(3));
        assert_eq!(phosphate["H"], big(12));
        assert_eq!(phosphate["P"], big(1));
        assert_eq!(phosphate["O"], big(4));
    }

    #[test]
    fn test_nested_groups_multiply_through() {
        let aluminate = counts("Mg(Al(OH)4)2");
        assert_eq!(aluminate["Mg"], big(1));
        assert_eq!(aluminate["Al"], big(2));
        assert_eq!(aluminate["O"], big(8));
        assert_eq!(aluminate["H"], big(8));
    }

    #[test]
    fn test_prefix_and_suffix_around_group() {
        let sulfate = counts("Fe2(SO4)3");
        assert_eq!(sulfate["Fe"], big(2));
        assert_eq!(sulfate["S"], big(3));
        assert_eq!(sulfate["O"], big(12));
    }

    #[test]
    fn test_group_without_multiplier_defaults_to_one() {
        let nitrate = counts("Ag(NO3)");
        assert_eq!(nitrate["Ag"], big(1));
        assert_eq!(nitrate["N"], big(1));
        assert_eq!(nitrate["O"], big(3));
    }

    #[test]
    fn test_counts_exceeding_u64_stay_exact() {
        // 4294967296 squared is 2^64, one past what u64 can hold.
        let huge = counts("(H4294967296)4294967296");
        assert_eq!(huge["H"], BigUint::from(1u128 << 64));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(parse_formula(""), Err(SyntaxError::EmptyFormula));
    }

    #[test]
    fn test_unbalanced_parentheses_are_rejected() {
        assert_eq!(
            parse_formula("Ca(OH2"),
            Err(SyntaxError::UnbalancedParentheses {
                term: "Ca(OH2".to_string()
            })
        );
        assert_eq!(
            parse_formula("CaOH)2"),
            Err(SyntaxError::UnbalancedParentheses {
                term: "CaOH)2".to_string()
            })
        );
    }

    #[test]
    fn test_leading_digit_is_rejected() {
        assert_eq!(
            parse_formula("2H"),
            Err(SyntaxError::UnexpectedToken {
                term: "2H".to_string(),
                character: '2',
                index: 0
            })
        );
    }

    #[test]
    fn test_bare_lowercase_is_rejected() {
        assert_eq!(
            parse_formula("h2"),
            Err(SyntaxError::UnexpectedToken {
                term: "h2".to_string(),
                character: 'h',
                index: 0
            })
        );
    }
}
