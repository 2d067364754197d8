// Closed grammatical feature sets shared by every realisation stage.

use serde::{Deserialize, Serialize};

/// Grammatical case. Declaration order matches the column order of the
/// pronoun and determiner tables (nominative, accusative, genitive, dative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    Nominative,
    Accusative,
    Genitive,
    Dative,
}

impl Case {
    pub const ALL: [Case; 4] = [
        Case::Nominative,
        Case::Accusative,
        Case::Genitive,
        Case::Dative,
    ];

    /// Column index into four-slot case tables.
    pub fn index(self) -> usize {
        match self {
            Case::Nominative => 0,
            Case::Accusative => 1,
            Case::Genitive => 2,
            Case::Dative => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Masculine,
    Feminine,
    Neuter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberAgr {
    #[default]
    Singular,
    Plural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Person {
    First,
    Second,
    #[default]
    Third,
}

impl Person {
    pub const ALL: [Person; 3] = [Person::First, Person::Second, Person::Third];
}

impl NumberAgr {
    pub const ALL: [NumberAgr; 2] = [NumberAgr::Singular, NumberAgr::Plural];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    Past,
    #[default]
    Present,
    Future,
}

impl Tense {
    pub const ALL: [Tense; 3] = [Tense::Past, Tense::Present, Tense::Future];
}

/// Verb form / mood of a verb phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Form {
    #[default]
    Normal,
    /// Konjunktiv I.
    Subjunctive,
    /// Konjunktiv II, built on the subjunctive stem.
    #[serde(rename = "subjunctive_ii")]
    SubjunctiveII,
    Imperative,
    Infinitive,
    BareInfinitive,
    ZuInfinitive,
}

impl Form {
    pub const ALL: [Form; 7] = [
        Form::Normal,
        Form::Subjunctive,
        Form::SubjunctiveII,
        Form::Imperative,
        Form::Infinitive,
        Form::BareInfinitive,
        Form::ZuInfinitive,
    ];

    /// Forms that have no finite verb slot.
    pub fn is_non_finite(self) -> bool {
        matches!(
            self,
            Form::Infinitive | Form::BareInfinitive | Form::ZuInfinitive
        )
    }
}

/// Perfect auxiliary selected by a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuxType {
    #[default]
    Haben,
    Sein,
    /// Verbs that allow both; realised with *haben*.
    HabenSein,
}

impl AuxType {
    /// Parse the lexicon spelling ("haben", "sein", "haben/sein").
    /// Anything unrecognised selects *haben*.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "sein" => AuxType::Sein,
            "haben/sein" | "sein/haben" => AuxType::HabenSein,
            _ => AuxType::Haben,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbType {
    #[default]
    Main,
    Modal,
    Aux,
}

impl VerbType {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "modal" => VerbType::Modal,
            "aux" | "auxiliary" => VerbType::Aux,
            _ => VerbType::Main,
        }
    }
}

/// Function a constituent fulfils within its clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscourseFunction {
    Subject,
    Object,
    IndirectObject,
    GenitiveObject,
    FrontModifier,
    PreModifier,
    PostModifier,
    PrepObject,
}

impl DiscourseFunction {
    /// Functions a verb phrase accepts as complements.
    pub fn is_complement_function(self) -> bool {
        matches!(
            self,
            DiscourseFunction::Subject
                | DiscourseFunction::Object
                | DiscourseFunction::IndirectObject
                | DiscourseFunction::GenitiveObject
        )
    }

    pub fn map_to_position(self) -> Position {
        match self {
            DiscourseFunction::Subject => Position::Subject,
            DiscourseFunction::Object => Position::Object,
            DiscourseFunction::IndirectObject => Position::IndirectObject,
            DiscourseFunction::GenitiveObject => Position::GenitiveObject,
            DiscourseFunction::FrontModifier => Position::Front,
            DiscourseFunction::PreModifier
            | DiscourseFunction::PostModifier
            | DiscourseFunction::PrepObject => Position::Default,
        }
    }

    /// Case governed by a complement function.
    pub fn case_value(self) -> Option<Case> {
        match self {
            DiscourseFunction::Subject => Some(Case::Nominative),
            DiscourseFunction::Object => Some(Case::Accusative),
            DiscourseFunction::IndirectObject => Some(Case::Dative),
            DiscourseFunction::GenitiveObject => Some(Case::Genitive),
            _ => None,
        }
    }
}

/// Kind of question a clause asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterrogativeType {
    /// Yes/no question: empty Vorfeld, finite verb first.
    JaNein,
    /// "wer" question.
    Wer,
    /// "was" question.
    Was,
    /// The questioned element is supplied as a constituent.
    WhElement,
}

impl InterrogativeType {
    pub fn is_wh_question(self) -> bool {
        !matches!(self, InterrogativeType::JaNein)
    }
}

/// Topological clause positions, in default linear order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Vorfeld,
    Front,
    PreSubject,
    Subject,
    PostSubject,
    PreObject,
    GenitiveObject,
    Object,
    PostObject,
    PreIndirectObject,
    IndirectObject,
    PostIndirectObject,
    Default,
}

impl Position {
    pub const COMPLEMENT_POSITIONS: [Position; 4] = [
        Position::Subject,
        Position::Object,
        Position::IndirectObject,
        Position::GenitiveObject,
    ];

    pub fn map_to_function(self) -> Option<DiscourseFunction> {
        match self {
            Position::Subject => Some(DiscourseFunction::Subject),
            Position::Object => Some(DiscourseFunction::Object),
            Position::GenitiveObject => Some(DiscourseFunction::GenitiveObject),
            Position::IndirectObject => Some(DiscourseFunction::IndirectObject),
            Position::Front => Some(DiscourseFunction::FrontModifier),
            _ => None,
        }
    }

    pub fn is_complement_position(self) -> bool {
        Self::COMPLEMENT_POSITIONS.contains(&self)
    }
}
