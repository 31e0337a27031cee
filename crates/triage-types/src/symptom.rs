//! Canonical symptom token type.
//!
//! This module provides a type alias for canonical symptom tokens.
//! A token is a lowercase string identifier drawn from the fixed
//! symptom vocabulary, e.g. `"fever"` or `"high bp"`.

/// A canonical symptom token.
///
/// Tokens are lowercase string identifiers drawn from the static symptom
/// vocabulary. Free-text input is normalized into a set of tokens before
/// any scoring takes place; the engine never compares raw surface forms.
///
/// # Examples
///
/// ```
/// use triage_types::{tokens, SymptomToken};
///
/// let token: SymptomToken = tokens::FEVER.to_string();
/// assert_eq!(token, "fever");
/// ```
pub type SymptomToken = String;
