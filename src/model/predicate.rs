//! Filters over persons for the model's filtered view.

use super::Person;

/// A pure boolean test over a person.
pub trait PersonPredicate {
    fn test(&self, person: &Person) -> bool;
}

/// Returns true if `sentence` contains `word` as a whole word, ignoring case.
fn contains_word_ignore_case(sentence: &str, word: &str) -> bool {
    let word = word.trim().to_lowercase();
    !word.is_empty()
        && sentence
            .split_whitespace()
            .any(|candidate| candidate.to_lowercase() == word)
}

fn name_matches_any(person: &Person, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|keyword| contains_word_ignore_case(person.name().as_str(), keyword))
}

/// Matches doctors whose name contains any of the keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindDoctorPredicate {
    keywords: Vec<String>,
}

impl FindDoctorPredicate {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl PersonPredicate for FindDoctorPredicate {
    fn test(&self, person: &Person) -> bool {
        person.is_doctor() && name_matches_any(person, &self.keywords)
    }
}

/// Matches patients whose name contains any of the keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindPatientPredicate {
    keywords: Vec<String>,
}

impl FindPatientPredicate {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl PersonPredicate for FindPatientPredicate {
    fn test(&self, person: &Person) -> bool {
        person.is_patient() && name_matches_any(person, &self.keywords)
    }
}

/// The filter currently applied to the model's person list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersonFilter {
    #[default]
    All,
    Doctors,
    Patients,
    FindDoctor(FindDoctorPredicate),
    FindPatient(FindPatientPredicate),
}

impl PersonPredicate for PersonFilter {
    fn test(&self, person: &Person) -> bool {
        match self {
            Self::All => true,
            Self::Doctors => person.is_doctor(),
            Self::Patients => person.is_patient(),
            Self::FindDoctor(predicate) => predicate.test(person),
            Self::FindPatient(predicate) => predicate.test(person),
        }
    }
}
