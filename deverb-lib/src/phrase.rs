// Arena of the dependent phrases a verb phrase arranges.
//
// These nodes carry only what clause realisation needs: person, number and
// gender for agreement, and a surface string under an assigned case.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::features::{Case, Gender, InterrogativeType, NumberAgr, Person};
use crate::output::join_words;

/// Handle to a node in a [`Phrases`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PhraseId(usize);

impl fmt::Display for PhraseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Determiner {
    #[default]
    None,
    Definite,
    Indefinite,
}

/// A noun with its determiner. Noun forms are given, not declined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounPhrase {
    pub determiner: Determiner,
    pub singular: String,
    /// Empty means identical to the singular.
    pub plural: String,
    pub gender: Gender,
    pub number: NumberAgr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PronounPhrase {
    pub person: Person,
    pub number: NumberAgr,
    pub gender: Gender,
    /// Polite "Sie"; agrees as third person plural.
    pub honorific: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepPhrase {
    pub preposition: String,
    /// Case the preposition governs on its complements.
    pub case: Case,
    pub complements: Vec<PhraseId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Phrase {
    Noun(NounPhrase),
    Pronoun(PronounPhrase),
    Prep(PrepPhrase),
    /// "und"-coordination; always plural.
    Coordinate { parts: Vec<PhraseId> },
    /// Literal text, optionally marked plural for agreement.
    Text { text: String, plural: bool },
}

// ---------------------------------------------------------------------------
// Case tables (nominative, accusative, genitive, dative)
// ---------------------------------------------------------------------------

const DEF_MASCULINE: [&str; 4] = ["der", "den", "des", "dem"];
const DEF_FEMININE: [&str; 4] = ["die", "die", "der", "der"];
const DEF_NEUTER: [&str; 4] = ["das", "das", "des", "dem"];
const DEF_PLURAL: [&str; 4] = ["die", "die", "der", "den"];

const INDEF_MASCULINE: [&str; 4] = ["ein", "einen", "eines", "einem"];
const INDEF_FEMININE: [&str; 4] = ["eine", "eine", "einer", "einer"];
const INDEF_NEUTER: [&str; 4] = ["ein", "ein", "eines", "einem"];
const INDEF_PLURAL: [&str; 4] = ["einige", "einige", "einiger", "einigen"];

const PRO_1SG: [&str; 4] = ["ich", "mich", "meiner", "mir"];
const PRO_2SG: [&str; 4] = ["du", "dich", "deiner", "dir"];
const PRO_3SG_MASCULINE: [&str; 4] = ["er", "ihn", "seiner", "ihm"];
const PRO_3SG_FEMININE: [&str; 4] = ["sie", "sie", "ihrer", "ihr"];
const PRO_3SG_NEUTER: [&str; 4] = ["es", "es", "seiner", "ihm"];
const PRO_1PL: [&str; 4] = ["wir", "uns", "unser", "uns"];
const PRO_2PL: [&str; 4] = ["ihr", "euch", "euer", "euch"];
const PRO_3PL: [&str; 4] = ["sie", "sie", "ihrer", "ihnen"];
const PRO_HONORIFIC: [&str; 4] = ["Sie", "Sie", "Ihrer", "Ihnen"];

const INTERROGATIVE_PERSON: [&str; 4] = ["wer", "wen", "wessen", "wem"];
const INTERROGATIVE_THING: [&str; 4] = ["was", "was", "wessen", "was"];

/// Preposition heading the agent phrase of a passive clause.
pub const PASSIVE_VON: &str = "von";
pub const PASSIVE_VON_CASE: Case = Case::Dative;

/// Expletive subject of an impersonal passive.
pub const EXPLETIVE: &str = "es";

impl PronounPhrase {
    fn table(&self) -> &'static [&'static str; 4] {
        if self.honorific {
            return &PRO_HONORIFIC;
        }
        match (self.person, self.number) {
            (Person::First, NumberAgr::Singular) => &PRO_1SG,
            (Person::Second, NumberAgr::Singular) => &PRO_2SG,
            (Person::Third, NumberAgr::Singular) => match self.gender {
                Gender::Masculine => &PRO_3SG_MASCULINE,
                Gender::Feminine => &PRO_3SG_FEMININE,
                Gender::Neuter => &PRO_3SG_NEUTER,
            },
            (Person::First, NumberAgr::Plural) => &PRO_1PL,
            (Person::Second, NumberAgr::Plural) => &PRO_2PL,
            (Person::Third, NumberAgr::Plural) => &PRO_3PL,
        }
    }
}

impl NounPhrase {
    fn determiner_form(&self, case: Case) -> Option<&'static str> {
        let table = match (self.determiner, self.number) {
            (Determiner::None, _) => return None,
            (Determiner::Definite, NumberAgr::Plural) => &DEF_PLURAL,
            (Determiner::Indefinite, NumberAgr::Plural) => &INDEF_PLURAL,
            (Determiner::Definite, NumberAgr::Singular) => match self.gender {
                Gender::Masculine => &DEF_MASCULINE,
                Gender::Feminine => &DEF_FEMININE,
                Gender::Neuter => &DEF_NEUTER,
            },
            (Determiner::Indefinite, NumberAgr::Singular) => match self.gender {
                Gender::Masculine => &INDEF_MASCULINE,
                Gender::Feminine => &INDEF_FEMININE,
                Gender::Neuter => &INDEF_NEUTER,
            },
        };
        Some(table[case.index()])
    }

    fn noun_form(&self) -> &str {
        match self.number {
            NumberAgr::Plural if !self.plural.is_empty() => &self.plural,
            _ => &self.singular,
        }
    }
}

/// Interrogative pronoun for a question type under a case. Types without a
/// pronoun of their own fall back to "was".
pub fn interrogative_pronoun(kind: InterrogativeType, case: Case) -> &'static str {
    match kind {
        InterrogativeType::Wer => INTERROGATIVE_PERSON[case.index()],
        InterrogativeType::Was | InterrogativeType::JaNein | InterrogativeType::WhElement => {
            INTERROGATIVE_THING[case.index()]
        }
    }
}

// ---------------------------------------------------------------------------
// Arena
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Phrases {
    nodes: Vec<Phrase>,
}

impl Phrases {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, phrase: Phrase) -> PhraseId {
        self.nodes.push(phrase);
        PhraseId(self.nodes.len() - 1)
    }

    pub fn noun(
        &mut self,
        determiner: Determiner,
        singular: &str,
        plural: &str,
        gender: Gender,
        number: NumberAgr,
    ) -> PhraseId {
        self.add(Phrase::Noun(NounPhrase {
            determiner,
            singular: singular.to_string(),
            plural: plural.to_string(),
            gender,
            number,
        }))
    }

    pub fn pronoun(&mut self, person: Person, number: NumberAgr, gender: Gender) -> PhraseId {
        self.add(Phrase::Pronoun(PronounPhrase {
            person,
            number,
            gender,
            honorific: false,
        }))
    }

    /// Polite "Sie".
    pub fn honorific_pronoun(&mut self) -> PhraseId {
        self.add(Phrase::Pronoun(PronounPhrase {
            person: Person::Third,
            number: NumberAgr::Plural,
            gender: Gender::default(),
            honorific: true,
        }))
    }

    pub fn prep(&mut self, preposition: &str, case: Case, complements: Vec<PhraseId>) -> PhraseId {
        self.add(Phrase::Prep(PrepPhrase {
            preposition: preposition.to_string(),
            case,
            complements,
        }))
    }

    pub fn coordinate(&mut self, parts: Vec<PhraseId>) -> PhraseId {
        self.add(Phrase::Coordinate { parts })
    }

    pub fn text(&mut self, text: &str, plural: bool) -> PhraseId {
        self.add(Phrase::Text {
            text: text.to_string(),
            plural,
        })
    }

    pub fn get(&self, id: PhraseId) -> Option<&Phrase> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Verify that `id` and every phrase it contains belong to this arena.
    /// Children are always added before their parent, so a child handle that
    /// is not smaller than its parent's came from somewhere else.
    pub fn check(&self, id: PhraseId) -> Result<()> {
        let children = match self.get(id) {
            None => return Err(Error::UnknownPhrase(id)),
            Some(Phrase::Prep(pp)) => &pp.complements,
            Some(Phrase::Coordinate { parts }) => parts,
            Some(_) => return Ok(()),
        };
        for &child in children {
            if child >= id {
                return Err(Error::UnknownPhrase(child));
            }
            self.check(child)?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Agreement features
    // -----------------------------------------------------------------------

    /// Explicit person, for noun-like phrases only.
    pub fn person(&self, id: PhraseId) -> Option<Person> {
        match self.get(id)? {
            Phrase::Noun(_) => Some(Person::Third),
            Phrase::Pronoun(p) if p.honorific => Some(Person::Third),
            Phrase::Pronoun(p) => Some(p.person),
            _ => None,
        }
    }

    pub fn number(&self, id: PhraseId) -> Option<NumberAgr> {
        match self.get(id)? {
            Phrase::Noun(np) => Some(np.number),
            Phrase::Pronoun(p) if p.honorific => Some(NumberAgr::Plural),
            Phrase::Pronoun(p) => Some(p.number),
            Phrase::Coordinate { .. } => Some(NumberAgr::Plural),
            Phrase::Text { plural: true, .. } => Some(NumberAgr::Plural),
            Phrase::Text { .. } | Phrase::Prep(_) => None,
        }
    }

    pub fn gender(&self, id: PhraseId) -> Option<Gender> {
        match self.get(id)? {
            Phrase::Noun(np) => Some(np.gender),
            Phrase::Pronoun(p) => Some(p.gender),
            _ => None,
        }
    }

    pub fn is_noun_like(&self, id: PhraseId) -> bool {
        matches!(self.get(id), Some(Phrase::Noun(_) | Phrase::Pronoun(_)))
    }

    /// Complements of a prepositional phrase, if `id` is one.
    pub fn prep_complements(&self, id: PhraseId) -> Option<&[PhraseId]> {
        match self.get(id)? {
            Phrase::Prep(pp) => Some(&pp.complements),
            _ => None,
        }
    }

    // -----------------------------------------------------------------------
    // Realisation
    // -----------------------------------------------------------------------

    /// Surface string of a phrase under `case`. Prepositional phrases impose
    /// their own case on their complements.
    pub fn realise(&self, id: PhraseId, case: Case) -> String {
        let Some(phrase) = self.get(id) else {
            return String::new();
        };
        match phrase {
            Phrase::Noun(np) => match np.determiner_form(case) {
                Some(det) => format!("{det} {}", np.noun_form()),
                None => np.noun_form().to_string(),
            },
            Phrase::Pronoun(p) => p.table()[case.index()].to_string(),
            Phrase::Prep(pp) => {
                let complements = self.realise_and_list(&pp.complements, pp.case);
                join_words(&[pp.preposition.as_str(), complements.as_str()])
            }
            Phrase::Coordinate { parts } => self.realise_and_list(parts, case),
            Phrase::Text { text, .. } => text.clone(),
        }
    }

    /// "A", "A und B", "A, B und C".
    pub fn realise_and_list(&self, ids: &[PhraseId], case: Case) -> String {
        let parts: Vec<String> = ids
            .iter()
            .map(|&id| self.realise(id, case))
            .filter(|s| !s.is_empty())
            .collect();
        and_list(&parts)
    }
}

pub(crate) fn and_list(parts: &[String]) -> String {
    match parts {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} und {last}", init.join(", ")),
    }
}
