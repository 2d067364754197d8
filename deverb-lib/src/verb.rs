// Verb lexical entries: stems, participles and the non-finite forms.

use serde::{Deserialize, Serialize};

use crate::features::{AuxType, Form, NumberAgr, Person, Tense, VerbType};
use crate::inflect::apply_form;
use crate::pattern::{self, InflectionPattern, PatternFeature};
use crate::stem::{detect_stem, parse_baseform};

/// Explicitly stored irregular forms. Empty strings mean "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrregularForms {
    /// Past stem ("sprach", "wurde").
    pub past: String,
    /// Perfect participle without the separable prefix ("gesprochen").
    pub participle: String,
    /// Alternate present stem for 2sg/3sg ("sprich").
    pub alternate_singular: String,
    /// Subjunctive II stem ("spräch"); falls back to the past stem.
    pub subjunctive: String,
    /// Present participle; defaults to baseform + "d".
    pub present_participle: String,
}

/// A verb as stored in the lexicon. Stems are fixed at construction; only
/// the pattern, prefix and auxiliary type may be replaced afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verb {
    base_form: String,
    prefix: String,
    present_stem: String,
    past_stem: String,
    subjunctive_stem: String,
    alternate_stem: Option<String>,
    perfect_participle: String,
    present_participle: String,
    aux_type: AuxType,
    verb_type: VerbType,
    pattern: InflectionPattern,
}

impl Verb {
    /// A regular weak verb.
    pub fn new(baseform: &str) -> Self {
        Self::with_pattern(baseform, InflectionPattern::default_pattern())
    }

    /// A verb whose forms all derive from its stem under `pattern`.
    pub fn with_pattern(baseform: &str, pattern: InflectionPattern) -> Self {
        Self::build(
            baseform,
            &IrregularForms::default(),
            AuxType::Haben,
            VerbType::Main,
            pattern,
        )
    }

    /// A regular verb of the given class. Modals get modal inflection.
    pub fn with_type(baseform: &str, verb_type: VerbType) -> Self {
        Self::build(
            baseform,
            &IrregularForms::default(),
            AuxType::Haben,
            verb_type,
            InflectionPattern::default_pattern(),
        )
    }

    /// A verb with stored irregular forms.
    pub fn irregular(
        baseform: &str,
        forms: &IrregularForms,
        aux_type: AuxType,
        verb_type: VerbType,
        pattern: InflectionPattern,
    ) -> Self {
        Self::build(baseform, forms, aux_type, verb_type, pattern)
    }

    fn build(
        baseform: &str,
        forms: &IrregularForms,
        aux_type: AuxType,
        verb_type: VerbType,
        pattern: InflectionPattern,
    ) -> Self {
        let (prefix, base_form) = parse_baseform(baseform);
        let present_stem = detect_stem(&base_form);

        let past_stem = non_empty(&forms.past).unwrap_or_else(|| format!("{present_stem}te"));
        let subjunctive_stem = non_empty(&forms.subjunctive).unwrap_or_else(|| past_stem.clone());
        let perfect_participle =
            non_empty(&forms.participle).unwrap_or_else(|| format!("ge{present_stem}t"));
        let present_participle =
            non_empty(&forms.present_participle).unwrap_or_else(|| format!("{base_form}d"));

        let pattern = match verb_type {
            VerbType::Modal if !pattern.has_feature(PatternFeature::ModalInflection) => {
                let name = pattern.name().to_string();
                pattern.with_feature(&name, PatternFeature::ModalInflection)
            }
            VerbType::Main | VerbType::Modal | VerbType::Aux => pattern,
        };

        Self {
            base_form,
            prefix,
            present_stem,
            past_stem,
            subjunctive_stem,
            alternate_stem: non_empty(&forms.alternate_singular),
            perfect_participle,
            present_participle,
            aux_type,
            verb_type,
            pattern,
        }
    }

    // -----------------------------------------------------------------------
    // Stems and lexical properties
    // -----------------------------------------------------------------------

    /// Core baseform without the separable prefix.
    pub fn base_form(&self) -> &str {
        &self.base_form
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn has_prefix(&self) -> bool {
        !self.prefix.is_empty()
    }

    pub fn present_stem(&self) -> &str {
        &self.present_stem
    }

    pub fn past_stem(&self) -> &str {
        &self.past_stem
    }

    pub fn subjunctive_stem(&self) -> &str {
        &self.subjunctive_stem
    }

    pub fn has_alternate_stem(&self) -> bool {
        self.alternate_stem.is_some()
    }

    /// Alternate present stem, or the present stem when none is stored.
    pub fn alternate_stem(&self) -> &str {
        self.alternate_stem.as_deref().unwrap_or(&self.present_stem)
    }

    pub fn aux_type(&self) -> AuxType {
        self.aux_type
    }

    pub fn verb_type(&self) -> VerbType {
        self.verb_type
    }

    pub fn is_modal(&self) -> bool {
        matches!(self.verb_type, VerbType::Modal)
    }

    pub fn pattern(&self) -> &InflectionPattern {
        &self.pattern
    }

    pub fn set_pattern(&mut self, pattern: InflectionPattern) {
        self.pattern = pattern;
    }

    pub fn set_prefix(&mut self, prefix: &str) {
        self.prefix = prefix.to_string();
    }

    pub fn set_aux_type(&mut self, aux_type: AuxType) {
        self.aux_type = aux_type;
    }

    // -----------------------------------------------------------------------
    // Forms
    // -----------------------------------------------------------------------

    fn render(&self, form: &str) -> String {
        format!("{}{}", self.prefix, form)
    }

    /// Inflected form without the separable prefix.
    pub fn form(&self, person: Person, number: NumberAgr, tense: Tense, form: Form) -> String {
        apply_form(self, person, number, tense, form)
    }

    pub fn infinitive(&self) -> String {
        self.render(&self.base_form)
    }

    /// "zu" goes between a fused prefix and the verb ("aufzuhören") and
    /// stands alone otherwise ("zu glauben", "Gassi zu gehen").
    pub fn zu_infinitive(&self) -> String {
        let zu = if self.prefix.is_empty() || self.prefix.ends_with(' ') {
            "zu "
        } else {
            "zu"
        };
        format!("{}{}{}", self.prefix, zu, self.base_form)
    }

    pub fn perfect_participle(&self) -> String {
        self.render(&self.perfect_participle)
    }

    pub fn present_participle(&self) -> String {
        self.render(&self.present_participle)
    }

    /// Imperative without the separable prefix.
    pub fn imperative(&self, number: NumberAgr) -> String {
        self.form(Person::Second, number, Tense::Present, Form::Imperative)
    }

    /// Polite imperative ("gehen Sie", "seien Sie"). The tun class keeps
    /// the infinitive ("tun Sie").
    pub fn honorific_imperative(&self) -> String {
        let form = if self.pattern.name() == pattern::TUN {
            self.base_form.clone()
        } else {
            self.form(Person::Third, NumberAgr::Plural, Tense::Present, Form::Subjunctive)
        };
        format!("{form} Sie")
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
