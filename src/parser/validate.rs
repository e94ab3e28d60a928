use crate::error::SyntaxError;
use crate::types::SIDE_SEPARATOR;

/// Checks a raw equation string against the equation grammar.
///
/// Rules are applied in order and validation halts at the first violation:
///
/// 1. every character is a letter, digit, space, `+`, `:`, or parenthesis;
/// 2. exactly one `:` occurs, producing two non-empty trimmed sides;
/// 3. each side splits on `+` into contiguous terms (a term containing
///    internal whitespace is rejected);
/// 4. each term starts with an uppercase letter or `(`;
/// 5. each term has balanced parentheses;
/// 6. every lowercase run, traced back to the nearest preceding uppercase
///    letter, consists solely of alphabetic characters.
///
/// Higher-level conditions, such as whether the equation is actually
/// balanceable, require numeric processing and are caught later in the
/// pipeline.
///
/// # Errors
///
/// Returns the [`SyntaxError`] describing the first rule violated.
///
/// # Examples
///
/// ```
/// use baleq::error::SyntaxError;
/// use baleq::parser::validate_equation;
///
/// assert!(validate_equation("NH3 + H3PO4 : (NH4)3PO4").is_ok());
/// assert_eq!(
///     validate_equation("A::B"),
///     Err(SyntaxError::SeparatorCount { count: 2 })
/// );
/// ```
pub fn validate_equation(raw: &str) -> Result<(), SyntaxError> {
    for (index, character) in raw.chars().enumerate() {
        let legal = character.is_ascii_alphanumeric()
            || character == ' '
            || character == '+'
            || character == SIDE_SEPARATOR
            || character == '('
            || character == ')';
        if !legal {
            return Err(SyntaxError::IllegalCharacter { character, index });
        }
    }

    let sides: Vec<&str> = raw.split(SIDE_SEPARATOR).collect();
    if sides.len() != 2 {
        return Err(SyntaxError::SeparatorCount {
            count: sides.len() - 1,
        });
    }

    for (side, name) in sides.iter().zip(["reactant", "product"]) {
        let side = side.trim();
        if side.is_empty() {
            return Err(SyntaxError::EmptySide { side: name });
        }
        validate_side(side)?;
    }

    Ok(())
}

fn validate_side(side: &str) -> Result<(), SyntaxError> {
    // Empty fragments from stray '+' signs are ignored, matching the split
    // performed when the equation is parsed into terms.
    for term in side.split('+').map(str::trim).filter(|t| !t.is_empty()) {
        if term.contains(' ') {
            return Err(SyntaxError::UnjoinedTerms {
                term: term.to_string(),
            });
        }
        validate_term(term)?;
    }
    Ok(())
}

fn validate_term(term: &str) -> Result<(), SyntaxError> {
    let first = term
        .chars()
        .next()
        .expect("empty fragments are filtered before term validation");
    if !(first.is_ascii_uppercase() || first == '(') {
        return Err(SyntaxError::BadTermStart {
            term: term.to_string(),
        });
    }

    let opening = term.chars().filter(|&c| c == '(').count();
    let closing = term.chars().filter(|&c| c == ')').count();
    if opening != closing {
        return Err(SyntaxError::UnbalancedParentheses {
            term: term.to_string(),
        });
    }

    validate_symbol_runs(term)
}

/// Scans the term from the end backward: every lowercase character must be
/// connected to the nearest preceding uppercase letter by alphabetic
/// characters only. This guards against a stray digit breaking an element
/// symbol, e.g. `C2a`.
fn validate_symbol_runs(term: &str) -> Result<(), SyntaxError> {
    let chars: Vec<char> = term.chars().collect();
    let upper_indices: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_ascii_uppercase())
        .map(|(i, _)| i)
        .collect();

    let mut i = chars.len();
    while i > 0 {
        i -= 1;
        if chars[i].is_ascii_lowercase() {
            let nearest = upper_indices
                .iter()
                .copied()
                .filter(|&u| u < i)
                .next_back()
                .unwrap_or(0);
            let fragment: String = chars[nearest..=i].iter().collect();
            if !fragment.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(SyntaxError::InvalidSymbolRun {
                    term: term.to_string(),
                    fragment,
                });
            }
            i = nearest;
        }
    }

    Ok(())
}
