use baleq::{BalanceError, StructuralError, SyntaxError, balance_equation};

fn syntax_error(equation: &str) -> SyntaxError {
    match balance_equation(equation).unwrap_err() {
        BalanceError::Syntax(e) => e,
        other => panic!("expected a syntax error for {:?}, got {:?}", equation, other),
    }
}

fn structural_error(equation: &str) -> StructuralError {
    match balance_equation(equation).unwrap_err() {
        BalanceError::Structural(e) => e,
        other => panic!(
            "expected a structural error for {:?}, got {:?}",
            equation, other
        ),
    }
}

#[test]
fn test_rejects_illegal_arrow_notation() {
    assert_eq!(
        syntax_error("H2 + O2 = H2O"),
        SyntaxError::IllegalCharacter {
            character: '=',
            index: 8
        }
    );
}

#[test]
fn test_rejects_missing_separator() {
    assert_eq!(
        syntax_error("H2 + O2"),
        SyntaxError::SeparatorCount { count: 0 }
    );
}

#[test]
fn test_rejects_two_separators() {
    assert_eq!(
        syntax_error("H2 : O2 : H2O"),
        SyntaxError::SeparatorCount { count: 2 }
    );
}

#[test]
fn test_rejects_empty_reactant_side() {
    assert_eq!(
        syntax_error(" : H2O"),
        SyntaxError::EmptySide { side: "reactant" }
    );
}

#[test]
fn test_rejects_empty_product_side() {
    assert_eq!(
        syntax_error("H2 + O2 : "),
        SyntaxError::EmptySide { side: "product" }
    );
}

#[test]
fn test_rejects_terms_without_plus() {
    assert_eq!(
        syntax_error("H2 O2 : H2O"),
        SyntaxError::UnjoinedTerms {
            term: "H2 O2".to_string()
        }
    );
}

#[test]
fn test_rejects_lowercase_term_start() {
    assert_eq!(
        syntax_error("h2 + O2 : H2O"),
        SyntaxError::BadTermStart {
            term: "h2".to_string()
        }
    );
}

#[test]
fn test_rejects_unbalanced_parentheses() {
    assert_eq!(
        syntax_error("Ca(OH2 : CaO + H2O"),
        SyntaxError::UnbalancedParentheses {
            term: "Ca(OH2".to_string()
        }
    );
}

#[test]
fn test_rejects_digit_inside_element_symbol() {
    assert_eq!(
        syntax_error("C2a + O2 : CO2"),
        SyntaxError::InvalidSymbolRun {
            term: "C2a".to_string(),
            fragment: "C2a".to_string()
        }
    );
}

#[test]
fn test_rejects_disjoint_species() {
    // No shared atoms: each row of the reduced system pins one variable to
    // zero instead of relating it to the free variable.
    assert_eq!(
        structural_error("H2 : O2"),
        StructuralError::RowShape { row: 0 }
    );
}

#[test]
fn test_rejects_atom_on_one_side_only() {
    // Nitrogen appears only among the products, so its coefficient is forced
    // to zero.
    assert_eq!(
        structural_error("H2 + O2 : H2O2 + N2"),
        StructuralError::RowShape { row: 2 }
    );
}

#[test]
fn test_rejects_pivot_coupled_to_interior_column() {
    // Reduces to [[1, 0, -1, 0], [0, 2, 0, -3]]: the first row relates H2 to
    // the product H2, not to the free variable, so no unique positive
    // solution exists. Must come back as an error, never a panic.
    assert_eq!(
        structural_error("H2 + O2 : H2 + O3"),
        StructuralError::RowShape { row: 0 }
    );
}

#[test]
fn test_rejects_equation_repeated_on_both_sides() {
    assert_eq!(
        structural_error("H2 + O2 : H2 + O2"),
        StructuralError::RowShape { row: 0 }
    );
}

#[test]
fn test_rejects_merged_independent_reactions() {
    // Carbon combustion and water synthesis written as one equation have a
    // two-dimensional solution space.
    assert_eq!(
        structural_error("C + O2 + H2 : CO2 + H2O"),
        StructuralError::RowShape { row: 1 }
    );
}
