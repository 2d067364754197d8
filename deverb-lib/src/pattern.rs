// Conjugation classes: suffix tables plus morphological feature flags.
//
// A pattern holds one six-slot table per (mood, tense) cell, ordered
// 1sg, 2sg, 3sg, 1pl, 2pl, 3pl, and a two-slot imperative table (sg, pl).
// Patterns are immutable once built; variants are derived by cloning.

use serde::{Deserialize, Serialize};

use crate::features::{Form, NumberAgr, Person, Tense};

/// Morphological switches carried by a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PatternFlags {
    /// Table entries are complete word forms; the stem is ignored.
    pub full_forms: bool,
    /// A vowel-initial suffix removes the last "e" of the stem ("wandre").
    pub stem_e_elision: bool,
    /// The singular imperative uses the alternate present stem ("sprich").
    pub alternate_imperative: bool,
    /// The alternate present stem also covers 1sg ("ich kann").
    pub modal_inflection: bool,
}

/// A single switch, used when deriving a variant of an existing pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternFeature {
    FullForms,
    StemEElision,
    AlternateImperative,
    ModalInflection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflectionPattern {
    name: String,
    present_indicative: [String; 6],
    past_indicative: [String; 6],
    present_subjunctive: [String; 6],
    past_subjunctive: [String; 6],
    imperative: [String; 2],
    flags: PatternFlags,
}

// ---------------------------------------------------------------------------
// Built-in tables
// ---------------------------------------------------------------------------

pub const DEFAULT: &str = "default";
pub const NO_IMPERATIVE_E: &str = "no imperative-e";
pub const ALT_IMPERATIVE: &str = "alt. imperative";
pub const ERN: &str = "ern/eln";
pub const ERN_ELISION: &str = "ern/eln elision";
pub const EPENTHESIS: &str = "epenthesis";
pub const WEAK_EPENTHESIS: &str = "weak epenthesis";
pub const MODAL: &str = "modal";
pub const TUN: &str = "tun";
pub const WERDEN: &str = "werden";
pub const SEIN: &str = "sein";

const SUBJUNCTIVE: [&str; 6] = ["e", "est", "e", "en", "et", "en"];
const WEAK_PAST: [&str; 6] = ["", "st", "", "en", "t", "en"];
const STRONG_PAST: [&str; 6] = ["", "st", "", "en", "et", "en"];

impl InflectionPattern {
    pub fn new(
        name: &str,
        present_indicative: [&str; 6],
        past_indicative: [&str; 6],
        present_subjunctive: [&str; 6],
        past_subjunctive: [&str; 6],
        imperative: [&str; 2],
        flags: PatternFlags,
    ) -> Self {
        Self {
            name: name.to_string(),
            present_indicative: present_indicative.map(String::from),
            past_indicative: past_indicative.map(String::from),
            present_subjunctive: present_subjunctive.map(String::from),
            past_subjunctive: past_subjunctive.map(String::from),
            imperative: imperative.map(String::from),
            flags,
        }
    }

    /// The regular weak paradigm.
    pub fn default_pattern() -> Self {
        Self::new(
            DEFAULT,
            ["e", "st", "t", "en", "t", "en"],
            WEAK_PAST,
            SUBJUNCTIVE,
            SUBJUNCTIVE,
            ["e", "t"],
            PatternFlags::default(),
        )
    }

    /// All built-in conjugation classes.
    pub fn builtin() -> Vec<InflectionPattern> {
        let default = Self::default_pattern();
        let no_imp_e = default.with_imperative(NO_IMPERATIVE_E, ["", "t"]);
        let alt_imp = no_imp_e.with_feature(ALT_IMPERATIVE, PatternFeature::AlternateImperative);

        let ern = Self::new(
            ERN,
            ["e", "st", "t", "n", "t", "n"],
            WEAK_PAST,
            ["e", "st", "e", "n", "t", "n"],
            SUBJUNCTIVE,
            ["e", "t"],
            PatternFlags::default(),
        );
        let ern_elision = ern.with_feature(ERN_ELISION, PatternFeature::StemEElision);

        // Vowel-changing stems ("hält", "gilt") take -st/-t in the singular
        // and the inserted e only where the plain stem is used.
        let epenthesis = Self::new(
            EPENTHESIS,
            ["e", "st", "t", "en", "et", "en"],
            STRONG_PAST,
            SUBJUNCTIVE,
            SUBJUNCTIVE,
            ["e", "et"],
            PatternFlags::default(),
        );
        // Dental stems without a vowel change ("arbeit", "wart").
        let weak_epenthesis = Self::new(
            WEAK_EPENTHESIS,
            ["e", "est", "et", "en", "et", "en"],
            WEAK_PAST,
            SUBJUNCTIVE,
            SUBJUNCTIVE,
            ["e", "et"],
            PatternFlags::default(),
        );

        let modal = Self::new(
            MODAL,
            ["", "st", "", "en", "t", "en"],
            WEAK_PAST,
            SUBJUNCTIVE,
            SUBJUNCTIVE,
            ["e", "t"],
            PatternFlags {
                modal_inflection: true,
                ..PatternFlags::default()
            },
        );
        let tun = Self::new(
            TUN,
            ["e", "st", "t", "n", "t", "n"],
            STRONG_PAST,
            SUBJUNCTIVE,
            SUBJUNCTIVE,
            ["e", "t"],
            PatternFlags::default(),
        );
        let werden = Self::new(
            WERDEN,
            ["e", "st", "d", "en", "et", "en"],
            STRONG_PAST,
            SUBJUNCTIVE,
            SUBJUNCTIVE,
            ["e", "et"],
            PatternFlags::default(),
        );
        let sein = Self::new(
            SEIN,
            ["bin", "bist", "ist", "sind", "seid", "sind"],
            ["war", "warst", "war", "waren", "wart", "waren"],
            ["sei", "seist", "sei", "seien", "seiet", "seien"],
            ["wäre", "wärst", "wäre", "wären", "wärt", "wären"],
            ["sei", "seid"],
            PatternFlags {
                full_forms: true,
                ..PatternFlags::default()
            },
        );

        vec![
            default,
            no_imp_e,
            alt_imp,
            ern,
            ern_elision,
            epenthesis,
            weak_epenthesis,
            modal,
            tun,
            werden,
            sein,
        ]
    }

    // -----------------------------------------------------------------------
    // Derivation
    // -----------------------------------------------------------------------

    /// Clone under a new name with a replaced imperative table.
    pub fn with_imperative(&self, name: &str, imperative: [&str; 2]) -> Self {
        Self {
            name: name.to_string(),
            imperative: imperative.map(String::from),
            ..self.clone()
        }
    }

    /// Clone under a new name with one more feature switched on.
    pub fn with_feature(&self, name: &str, feature: PatternFeature) -> Self {
        let mut flags = self.flags;
        match feature {
            PatternFeature::FullForms => flags.full_forms = true,
            PatternFeature::StemEElision => flags.stem_e_elision = true,
            PatternFeature::AlternateImperative => flags.alternate_imperative = true,
            PatternFeature::ModalInflection => flags.modal_inflection = true,
        }
        Self {
            name: name.to_string(),
            flags,
            ..self.clone()
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    pub fn has_feature(&self, feature: PatternFeature) -> bool {
        match feature {
            PatternFeature::FullForms => self.flags.full_forms,
            PatternFeature::StemEElision => self.flags.stem_e_elision,
            PatternFeature::AlternateImperative => self.flags.alternate_imperative,
            PatternFeature::ModalInflection => self.flags.modal_inflection,
        }
    }

    /// Suffix table for a (tense, form) cell. Non-finite forms and FUTURE
    /// read the indicative/present tables.
    fn table(&self, tense: Tense, form: Form) -> &[String] {
        match form {
            Form::Imperative => &self.imperative,
            Form::SubjunctiveII => &self.past_subjunctive,
            Form::Subjunctive => match tense {
                Tense::Past => &self.past_subjunctive,
                Tense::Present | Tense::Future => &self.present_subjunctive,
            },
            Form::Normal | Form::Infinitive | Form::BareInfinitive | Form::ZuInfinitive => {
                match tense {
                    Tense::Past => &self.past_indicative,
                    Tense::Present | Tense::Future => &self.present_indicative,
                }
            }
        }
    }

    /// The suffix (or full form) for one paradigm cell.
    pub fn suffix(&self, person: Person, number: NumberAgr, tense: Tense, form: Form) -> &str {
        let index = match form {
            Form::Imperative => match number {
                NumberAgr::Singular => 0,
                NumberAgr::Plural => 1,
            },
            _ => slot(person, number),
        };
        &self.table(tense, form)[index]
    }
}

impl Default for InflectionPattern {
    fn default() -> Self {
        Self::default_pattern()
    }
}

/// Six-slot table index.
fn slot(person: Person, number: NumberAgr) -> usize {
    let base = match number {
        NumberAgr::Singular => 0,
        NumberAgr::Plural => 3,
    };
    base + match person {
        Person::First => 0,
        Person::Second => 1,
        Person::Third => 2,
    }
}
