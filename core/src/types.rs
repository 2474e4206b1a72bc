//! Shared primitive types used across the engine.

/// A jurisdiction identifier as stored in the registry, e.g. "DE".
/// Lookups are exact and case-sensitive.
pub type JurisdictionCode = String;

/// A monetary amount in a scheme's own currency.
/// No FX conversion happens anywhere in the engine.
pub type Amount = f64;

/// An ISO-like currency code, e.g. "EUR".
pub type CurrencyCode = String;
