// Subject-verb agreement and complement case assignment.

use crate::clause::Constituent;
use crate::features::{Case, DiscourseFunction, NumberAgr, Person, Position};
use crate::phrase::Phrases;

/// Person and number the finite verb agrees with.
///
/// A single noun-like subject passes on its own person and number. A
/// coordination, a plural-marked text phrase or more than one subject
/// makes the verb plural. Everything else is third person singular.
pub(crate) fn compute_agreement(phrases: &Phrases, subjects: &[Constituent]) -> (Person, NumberAgr) {
    match subjects {
        [only] => (person_of(phrases, only), number_of(phrases, only)),
        [] => (Person::Third, NumberAgr::Singular),
        _ => (Person::Third, NumberAgr::Plural),
    }
}

fn person_of(phrases: &Phrases, subject: &Constituent) -> Person {
    match subject {
        Constituent::Given(id) => phrases.person(*id).unwrap_or(Person::Third),
        _ => Person::Third,
    }
}

fn number_of(phrases: &Phrases, subject: &Constituent) -> NumberAgr {
    match subject {
        Constituent::Given(id) => phrases.number(*id).unwrap_or(NumberAgr::Singular),
        _ => NumberAgr::Singular,
    }
}

/// Case of the phrases in a complement slot.
pub fn complement_case(position: Position) -> Option<Case> {
    position.map_to_function().and_then(DiscourseFunction::case_value)
}

/// Case of the surface subject: accusative when the whole verb phrase is
/// itself an object (an accusative-with-infinitive), nominative otherwise.
pub fn surface_subject_case(vp_function: Option<DiscourseFunction>) -> Case {
    match vp_function {
        Some(DiscourseFunction::Object) => Case::Accusative,
        _ => Case::Nominative,
    }
}
