//! Symptom normalizer.
//!
//! Maps free-text symptom descriptions to the set of canonical tokens
//! whose synonym phrases occur in the input.
//!
//! Matching is case-insensitive substring containment with no word-boundary
//! enforcement. That makes partial-word false positives possible (e.g.
//! "scold" contains "cold"); downstream ranking tolerates the noise, so the
//! limitation is documented here rather than fixed.

use std::collections::BTreeSet;

use triage_types::SymptomToken;

use crate::kb::KnowledgeBase;

impl KnowledgeBase {
    /// Extracts canonical symptom tokens from free text.
    ///
    /// A token is included if any of its synonym phrases occurs as a
    /// substring of the lower-cased input; multiple phrase hits for the
    /// same token collapse to one entry. Empty or whitespace-only input
    /// yields an empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use triage_engine::KnowledgeBase;
    ///
    /// let kb = KnowledgeBase::builtin();
    /// let symptoms = kb.extract_symptoms("High fever, shivering and my body aches");
    /// assert!(symptoms.contains("fever"));
    /// assert!(symptoms.contains("chills"));
    /// assert!(symptoms.contains("body pain"));
    /// ```
    pub fn extract_symptoms(&self, text: &str) -> BTreeSet<SymptomToken> {
        let text = text.to_lowercase();
        let mut detected = BTreeSet::new();

        if text.trim().is_empty() {
            return detected;
        }

        for entry in self.synonyms() {
            if entry.phrases.iter().any(|phrase| text.contains(phrase.as_str())) {
                detected.insert(entry.token.clone());
            }
        }

        detected
    }
}
