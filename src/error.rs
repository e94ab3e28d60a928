use thiserror::Error;

/// Errors raised while checking or parsing the textual form of an equation.
///
/// Every variant carries the offending substring and, where meaningful, the
/// index at which the problem was detected. A syntax error is always fatal to
/// the current call; no partial result is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// The raw equation contains a character outside the grammar's alphabet
    /// (letters, digits, spaces, `+`, `:`, and parentheses).
    #[error("illegal character '{character}' at index {index}")]
    IllegalCharacter { character: char, index: usize },

    /// The equation does not contain exactly one `:` separator, so it cannot
    /// be split into a reactant and a product side. `count` is the number of
    /// separators actually found.
    #[error("expected exactly one ':' separating reactants and products, found {count}")]
    SeparatorCount { count: usize },

    /// One side of the equation is empty after trimming.
    #[error("the {side} side of the equation is empty")]
    EmptySide { side: &'static str },

    /// A term contains internal whitespace, meaning two terms are adjacent
    /// without a joining `+`.
    #[error("terms '{term}' are not properly joined")]
    UnjoinedTerms { term: String },

    /// A term does not begin with an uppercase letter or an opening
    /// parenthesis.
    #[error("term '{term}' does not begin with an uppercase letter or '('")]
    BadTermStart { term: String },

    /// A term's parentheses do not balance.
    #[error("term '{term}' has unbalanced parentheses")]
    UnbalancedParentheses { term: String },

    /// A lowercase run inside a term is not attached to a preceding uppercase
    /// letter by alphabetic characters only, e.g. a digit splitting an
    /// element symbol.
    #[error("term '{term}' has an invalid element symbol in '{fragment}'")]
    InvalidSymbolRun { term: String, fragment: String },

    /// An empty string was given where a chemical formula was expected.
    #[error("empty chemical formula")]
    EmptyFormula,

    /// The formula parser met a character it cannot start a group or atom
    /// with, such as a leading digit or a stray symbol.
    #[error("unexpected character '{character}' at index {index} of term '{term}'")]
    UnexpectedToken {
        term: String,
        character: char,
        index: usize,
    },

    /// A subscript or group multiplier does not fit the supported integer
    /// range.
    #[error("count at index {index} of term '{term}' is out of range")]
    CountOutOfRange { term: String, index: usize },
}

/// Errors raised when the reduced matrix does not have the shape of a single
/// well-posed reaction.
///
/// The input was syntactically valid, but the system it encodes is
/// contradictory, underdetermined, or overdetermined, so no unique smallest
/// positive solution exists. Row and column indices refer to the reduced
/// matrix after zero rows have been pruned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// The reduced matrix has no rows left, so nothing constrains the
    /// coefficients.
    #[error("reduced matrix is empty; the system is unconstrained")]
    EmptySystem,

    /// A retained row does not relate exactly one pivot variable to the free
    /// variable in the last column.
    #[error("row {row} of the reduced matrix does not pair one pivot with the free variable")]
    RowShape { row: usize },

    /// A column other than the last has a number of nonzero entries other
    /// than one, so that variable is not uniquely determined.
    #[error("column {column} of the reduced matrix is not uniquely determined")]
    ColumnShape { column: usize },

    /// Pivot columns do not strictly increase row over row.
    #[error("pivots are not in echelon order at row {row}")]
    EchelonOrder { row: usize },

    /// A row's pivot (first nonzero entry) is negative.
    #[error("pivot of row {row} is negative")]
    NegativePivot { row: usize },

    /// Extraction produced a coefficient that is not a positive integer, so
    /// the equation as written has no physical balancing.
    #[error("coefficient for term column {column} is not positive")]
    NonPositiveCoefficient { column: usize },
}

/// The primary error type for all fallible operations in the `baleq` library.
///
/// Exactly one of the two stages can fail for a given input: either the text
/// never passes validation/parsing (`Syntax`), or the text is well formed but
/// the linear system it encodes is not a single solvable reaction
/// (`Structural`). The distinction is preserved so callers can tell a typo
/// from an unbalanceable equation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BalanceError {
    /// The equation text violates the grammar.
    #[error("invalid equation: {0}")]
    Syntax(#[from] SyntaxError),

    /// The equation is well formed but not balanceable as one reaction.
    #[error("equation is not a single well-posed reaction: {0}")]
    Structural(#[from] StructuralError),
}
