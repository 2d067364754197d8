use std::borrow::Cow;
use std::collections::HashMap;

use log::debug;
use serde::Deserialize;

use crate::features::{AuxType, VerbType};
use crate::pattern::{self, InflectionPattern};
use crate::stem::parse_baseform;
use crate::verb::{IrregularForms, Verb};

const EMBEDDED_JSON: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/verbs.json"));

/// Seed verb entry as written by build.rs.
#[derive(Debug, Clone, Deserialize)]
struct VerbRecord {
    stem: String,
    #[serde(default)]
    past: String,
    #[serde(default)]
    part: String,
    #[serde(default)]
    alt_sg: String,
    #[serde(default)]
    subj2: String,
    #[serde(default)]
    pres_part: String,
    #[serde(default)]
    aux: String,
    #[serde(default)]
    inflection: String,
    #[serde(default)]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct EmbeddedLexicon {
    verbs: Vec<VerbRecord>,
}

/// Verbs and inflection patterns available to realisation.
///
/// Built once and passed by reference; independent lexicons can coexist.
/// Lookups never fail: unknown verbs are synthesised as regular weak verbs
/// and unknown pattern names resolve to the default pattern.
#[derive(Debug, Clone)]
pub struct Lexicon {
    verbs: HashMap<String, Verb>,
    /// Keyed by lowercased name.
    patterns: HashMap<String, InflectionPattern>,
    haben: Verb,
    sein: Verb,
    werden: Verb,
}

impl Lexicon {
    /// Built-in patterns and auxiliaries plus the embedded seed verbs.
    pub fn new() -> Self {
        let data: EmbeddedLexicon =
            serde_json::from_slice(EMBEDDED_JSON).expect("embedded verb lexicon JSON is invalid");

        let mut lexicon = Self::empty();
        for record in &data.verbs {
            let verb = lexicon.build_verb(record);
            lexicon.verbs.insert(record.stem.clone(), verb);
        }
        debug!("lexicon loaded with {} seed verbs", lexicon.verbs.len());
        lexicon
    }

    /// Built-in patterns and the auxiliaries *haben*, *sein* and *werden*.
    pub fn empty() -> Self {
        let patterns: HashMap<String, InflectionPattern> = InflectionPattern::builtin()
            .into_iter()
            .map(|p| (p.name().to_lowercase(), p))
            .collect();
        let by_name = |name: &str| patterns[name].clone();

        let werden = Verb::irregular(
            "werden",
            &IrregularForms {
                past: "wurde".into(),
                participle: "geworden".into(),
                alternate_singular: "wir".into(),
                subjunctive: "würde".into(),
                ..Default::default()
            },
            AuxType::Sein,
            VerbType::Aux,
            by_name(pattern::WERDEN),
        );
        let haben = Verb::irregular(
            "haben",
            &IrregularForms {
                past: "hatte".into(),
                participle: "gehabt".into(),
                alternate_singular: "ha".into(),
                subjunctive: "hätte".into(),
                ..Default::default()
            },
            AuxType::Haben,
            VerbType::Aux,
            by_name(pattern::DEFAULT),
        );
        let sein = Verb::irregular(
            "sein",
            &IrregularForms {
                past: "war".into(),
                participle: "gewesen".into(),
                subjunctive: "wär".into(),
                present_participle: "seiend".into(),
                ..Default::default()
            },
            AuxType::Sein,
            VerbType::Aux,
            by_name(pattern::SEIN),
        );

        Self {
            verbs: HashMap::new(),
            patterns,
            haben,
            sein,
            werden,
        }
    }

    /// Entries with an empty past or participle are regular under their
    /// pattern; all others carry the stored irregular forms.
    fn build_verb(&self, record: &VerbRecord) -> Verb {
        let pattern = self.pattern(&record.inflection).clone();
        let aux_type = AuxType::from_name(&record.aux);
        let verb_type = VerbType::from_name(&record.kind);

        let forms = if record.past.is_empty() || record.part.is_empty() {
            IrregularForms {
                present_participle: record.pres_part.clone(),
                ..Default::default()
            }
        } else {
            IrregularForms {
                past: record.past.clone(),
                participle: record.part.clone(),
                alternate_singular: record.alt_sg.clone(),
                subjunctive: record.subj2.clone(),
                present_participle: record.pres_part.clone(),
            }
        };
        Verb::irregular(&record.stem, &forms, aux_type, verb_type, pattern)
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    /// Add or replace a verb, keyed by its raw baseform (prefix included).
    pub fn add_verb(&mut self, verb: Verb) {
        let key = raw_baseform(&verb);
        self.verbs.insert(key, verb);
    }

    /// Add or replace a pattern; names are case-insensitive.
    pub fn add_pattern(&mut self, pattern: InflectionPattern) {
        self.patterns.insert(pattern.name().to_lowercase(), pattern);
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Look up a verb by baseform, synthesising a regular weak verb when the
    /// lexicon has no entry.
    ///
    /// A prefixed baseform without its own entry ("weg|fahren", "Rad
    /// fahren") inflects like its stored core verb with the prefix set.
    pub fn verb(&self, baseform: &str) -> Cow<'_, Verb> {
        if let Some(verb) = self.stored(baseform) {
            return Cow::Borrowed(verb);
        }
        let (prefix, core) = parse_baseform(baseform);
        if !prefix.is_empty() {
            if let Some(verb) = self.stored(&core) {
                debug!("{baseform:?} inflects like {core:?} with prefix {prefix:?}");
                let mut verb = verb.clone();
                verb.set_prefix(&prefix);
                return Cow::Owned(verb);
            }
        }
        debug!("no lexicon entry for {baseform:?}, using the weak paradigm");
        Cow::Owned(Verb::with_pattern(baseform, self.default_pattern().clone()))
    }

    fn stored(&self, baseform: &str) -> Option<&Verb> {
        match baseform {
            "haben" => Some(&self.haben),
            "sein" => Some(&self.sein),
            "werden" => Some(&self.werden),
            _ => self.verbs.get(baseform),
        }
    }

    /// True if the verb is stored (not synthesised).
    pub fn contains(&self, baseform: &str) -> bool {
        self.stored(baseform).is_some()
    }

    /// A modal verb, matched case-insensitively. Unknown names become
    /// regular verbs of class MODAL.
    pub fn modal(&self, baseform: &str) -> Cow<'_, Verb> {
        match self.verbs.get(&baseform.to_lowercase()) {
            Some(verb) if verb.is_modal() => Cow::Borrowed(verb),
            _ => {
                debug!("{baseform:?} is not a known modal, building one");
                Cow::Owned(Verb::with_type(baseform, VerbType::Modal))
            }
        }
    }

    /// Perfect auxiliary for an aux type; anything but SEIN selects *haben*.
    pub fn auxiliary(&self, aux_type: AuxType) -> &Verb {
        match aux_type {
            AuxType::Sein => &self.sein,
            AuxType::Haben | AuxType::HabenSein => &self.haben,
        }
    }

    pub fn werden(&self) -> &Verb {
        &self.werden
    }

    /// Pattern by case-insensitive name, falling back to the default pattern.
    pub fn pattern(&self, name: &str) -> &InflectionPattern {
        match self.patterns.get(&name.to_lowercase()) {
            Some(p) => p,
            None => {
                if !name.is_empty() {
                    debug!("unknown inflection pattern {name:?}, using default");
                }
                self.default_pattern()
            }
        }
    }

    fn default_pattern(&self) -> &InflectionPattern {
        &self.patterns[pattern::DEFAULT]
    }

    /// Stored verbs (auxiliaries excluded).
    pub fn verbs(&self) -> impl Iterator<Item = &Verb> {
        self.verbs.values()
    }

    pub fn patterns(&self) -> impl Iterator<Item = &InflectionPattern> {
        self.patterns.values()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

/// Reconstruct the lookup key of a verb: "auf|hören", "Gassi gehen".
fn raw_baseform(verb: &Verb) -> String {
    let prefix = verb.prefix();
    if prefix.is_empty() || prefix.ends_with(' ') {
        format!("{prefix}{}", verb.base_form())
    } else {
        format!("{prefix}|{}", verb.base_form())
    }
}
