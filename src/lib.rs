pub mod balance;
pub mod error;
pub mod format;
pub mod math;
pub mod parser;
pub mod types;

pub use crate::balance::{
    balance_equation, balance_trace, find_balancing_coefficients, solution_coefficients,
};
pub use crate::error::{BalanceError, StructuralError, SyntaxError};
pub use crate::types::{BalanceTrace, ChemicalEquation, Solution};
