//! Deposit-protection validation engine.
//!
//! Given a deposit, an account type, a number of banks and one or more
//! jurisdictions, computes how much of the deposit each jurisdiction's
//! deposit-guarantee scheme protects, and what to do about the rest.

pub mod comparison;
pub mod config;
pub mod error;
pub mod money;
pub mod registry;
pub mod rules;
pub mod scenario;
pub mod scheme;
pub mod types;
pub mod validator;

pub use comparison::ComparisonSummary;
pub use config::ValidatorConfig;
pub use error::{ValidatorError, ValidatorResult};
pub use registry::SchemeRegistry;
pub use scenario::{ValidationRequest, ValidationScenario};
pub use scheme::DepositProtectionScheme;
pub use validator::{CoverageLevel, ProtectionValidator, ValidationResult};
