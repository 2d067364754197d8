// Verb phrase features and clause realisation.
//
// Realisation runs four passes over a read-only verb phrase: surface
// arguments (passive raising, questioned arguments), agreement, the verb
// group, and constituent placement into Vorfeld and Mittelfeld. All
// intermediate state lives in locals, so a phrase can be realised any number
// of times.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::agreement::{complement_case, compute_agreement, surface_subject_case};
use crate::cluster::{build_verb_group, GroupFeatures, VerbGroup};
use crate::error::{Error, Result};
use crate::features::{
    Case, DiscourseFunction, Form, InterrogativeType, NumberAgr, Person, Position, Tense,
};
use crate::lexicon::Lexicon;
use crate::order::WordOrder;
use crate::output::join_words;
use crate::phrase::{
    and_list, interrogative_pronoun, PhraseId, Phrases, EXPLETIVE, PASSIVE_VON, PASSIVE_VON_CASE,
};
use crate::verb::Verb;

/// Appended to the Mittelfeld of a negated clause.
pub const NEGATION: &str = "nicht";

/// Something placed in a clause slot during realisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Constituent {
    Given(PhraseId),
    /// "es" standing in for a missing passive subject.
    Expletive,
    /// Interrogative pronoun under a case.
    Interrogative(InterrogativeType, Case),
    /// "von" + the demoted subjects of a passive clause.
    Agent(Vec<PhraseId>),
    /// "von wem" / "von was".
    AgentInterrogative(InterrogativeType),
}

/// Case the clause assigned to one of its phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseAssignment {
    pub phrase: PhraseId,
    pub case: Case,
}

/// A realised clause, split into the pieces a sentence realiser arranges.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RealisedClause {
    /// Empty for infinitive clauses.
    pub finite_verb: String,
    pub verb_cluster: Vec<String>,
    pub vorfeld: String,
    pub mittelfeld: Vec<String>,
    /// Agreement features the finite verb was inflected for.
    pub person: Person,
    pub number: NumberAgr,
    pub cases: Vec<CaseAssignment>,
    pub text: String,
}

impl RealisedClause {
    pub fn verb_cluster_form(&self) -> String {
        self.verb_cluster.join(" ")
    }

    /// Constituent strings in linear order, Vorfeld first.
    pub fn constituents(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.vorfeld.as_str())
            .filter(|s| !s.is_empty())
            .chain(self.mittelfeld.iter().map(String::as_str))
    }

    pub fn case_of(&self, phrase: PhraseId) -> Option<Case> {
        self.cases.iter().find(|c| c.phrase == phrase).map(|c| c.case)
    }
}

// ---------------------------------------------------------------------------
// Verb phrase
// ---------------------------------------------------------------------------

/// A verb phrase under construction: the lexical verb, its modal chain,
/// grammatical features, and dependent phrases keyed by clause position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbPhrase {
    verb: String,
    modals: Vec<String>,
    tense: Tense,
    perfect: bool,
    main_verb_perfect: bool,
    progressive: bool,
    passive: bool,
    negated: bool,
    form: Form,
    honorific: bool,
    person: Person,
    number: NumberAgr,
    word_order: WordOrder,
    discourse_function: Option<DiscourseFunction>,
    interrogative: Option<InterrogativeType>,
    wh_argument: Option<DiscourseFunction>,
    suppress_vorfeld: bool,
    passive_complement_position: Position,
    passive_complement_realisation: bool,
    slots: BTreeMap<Position, Vec<PhraseId>>,
}

impl VerbPhrase {
    /// A phrase headed by `verb` (a baseform as the lexicon knows it, e.g.
    /// "auf|hören").
    pub fn new(verb: &str) -> Self {
        Self {
            verb: verb.to_string(),
            modals: Vec::new(),
            tense: Tense::default(),
            perfect: false,
            main_verb_perfect: false,
            progressive: false,
            passive: false,
            negated: false,
            form: Form::default(),
            honorific: false,
            person: Person::default(),
            number: NumberAgr::default(),
            word_order: WordOrder::default(),
            discourse_function: None,
            interrogative: None,
            wh_argument: None,
            suppress_vorfeld: false,
            passive_complement_position: Position::Default,
            passive_complement_realisation: true,
            slots: BTreeMap::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Features
    // -----------------------------------------------------------------------

    pub fn set_tense(&mut self, tense: Tense) -> &mut Self {
        self.tense = tense;
        self
    }

    pub fn set_perfect(&mut self, perfect: bool) -> &mut Self {
        self.perfect = perfect;
        self
    }

    /// Perfect on the lexical verb itself, below the modals.
    pub fn set_main_verb_perfect(&mut self, perfect: bool) -> &mut Self {
        self.main_verb_perfect = perfect;
        self
    }

    /// Carried for callers; German has no progressive verb form.
    pub fn set_progressive(&mut self, progressive: bool) -> &mut Self {
        self.progressive = progressive;
        self
    }

    pub fn set_passive(&mut self, passive: bool) -> &mut Self {
        self.passive = passive;
        self
    }

    pub fn set_negated(&mut self, negated: bool) -> &mut Self {
        self.negated = negated;
        self
    }

    pub fn set_form(&mut self, form: Form) -> &mut Self {
        self.form = form;
        self
    }

    pub fn set_honorific(&mut self, honorific: bool) -> &mut Self {
        self.honorific = honorific;
        self
    }

    /// Only read by imperative clauses; others agree with their subject.
    pub fn set_person(&mut self, person: Person) -> &mut Self {
        self.person = person;
        self
    }

    /// Only read by imperative clauses; others agree with their subject.
    pub fn set_number(&mut self, number: NumberAgr) -> &mut Self {
        self.number = number;
        self
    }

    pub fn set_word_order(&mut self, order: WordOrder) -> &mut Self {
        self.word_order = order;
        self
    }

    /// Function of this phrase inside a larger clause, if embedded.
    pub fn set_discourse_function(&mut self, function: Option<DiscourseFunction>) -> &mut Self {
        self.discourse_function = function;
        self
    }

    pub fn set_suppress_vorfeld(&mut self, suppress: bool) -> &mut Self {
        self.suppress_vorfeld = suppress;
        self
    }

    /// Slot of the "von" agent phrase in passive clauses.
    pub fn set_passive_complement_position(&mut self, position: Position) -> &mut Self {
        self.passive_complement_position = position;
        self
    }

    /// Whether a passive clause mentions its agent at all.
    pub fn set_passive_complement_realisation(&mut self, realise: bool) -> &mut Self {
        self.passive_complement_realisation = realise;
        self
    }

    pub fn add_modal(&mut self, modal: &str) -> &mut Self {
        self.modals.push(modal.to_string());
        self
    }

    pub fn verb(&self) -> &str {
        &self.verb
    }

    pub fn modals(&self) -> &[String] {
        &self.modals
    }

    pub fn tense(&self) -> Tense {
        self.tense
    }

    pub fn form(&self) -> Form {
        self.form
    }

    pub fn is_perfect(&self) -> bool {
        self.perfect
    }

    pub fn is_passive(&self) -> bool {
        self.passive
    }

    pub fn is_progressive(&self) -> bool {
        self.progressive
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn word_order(&self) -> WordOrder {
        self.word_order
    }

    pub fn interrogative(&self) -> Option<InterrogativeType> {
        self.interrogative
    }

    // -----------------------------------------------------------------------
    // Constituents
    // -----------------------------------------------------------------------

    /// Add a subject, object, indirect object or genitive object.
    pub fn add_complement(&mut self, phrase: PhraseId, function: DiscourseFunction) -> Result<()> {
        if !function.is_complement_function() {
            return Err(Error::UnsupportedFunction(function));
        }
        self.add_modifier(function.map_to_position(), phrase);
        Ok(())
    }

    /// Place a phrase at any clause position.
    pub fn add_modifier(&mut self, position: Position, phrase: PhraseId) -> &mut Self {
        self.slots.entry(position).or_default().push(phrase);
        self
    }

    pub fn complements(&self, function: DiscourseFunction) -> &[PhraseId] {
        self.modifiers(function.map_to_position())
    }

    pub fn modifiers(&self, position: Position) -> &[PhraseId] {
        self.slots.get(&position).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Make this a question. `wh_argument` names the questioned argument of
    /// a WER or WAS question and is ignored for JA_NEIN.
    pub fn set_interrogative(
        &mut self,
        kind: InterrogativeType,
        wh_argument: Option<DiscourseFunction>,
    ) -> &mut Self {
        self.interrogative = Some(kind);
        self.wh_argument = match kind {
            InterrogativeType::JaNein => None,
            _ => wh_argument,
        };
        self
    }

    /// Make this a question whose questioned element is the given phrase
    /// ("welches Buch"). A fronted complement switches the word order so its
    /// slot comes first; a fronted non-complement goes to FRONT.
    pub fn set_interrogative_element(
        &mut self,
        phrase: PhraseId,
        function: DiscourseFunction,
        fronted: bool,
    ) -> Result<()> {
        self.interrogative = Some(InterrogativeType::WhElement);
        if function.is_complement_function() {
            self.add_complement(phrase, function)?;
            if fronted {
                self.word_order = self.word_order.fronted_variant(function.map_to_position());
            }
        } else if fronted {
            self.add_modifier(Position::Front, phrase);
        } else {
            self.add_modifier(function.map_to_position(), phrase);
        }
        Ok(())
    }

    pub fn clear_interrogative(&mut self) -> &mut Self {
        self.interrogative = None;
        self.wh_argument = None;
        self
    }

    // -----------------------------------------------------------------------
    // Realisation
    // -----------------------------------------------------------------------

    /// Realise as a main clause (verb second) or a subordinate clause (verb
    /// final).
    pub fn realise(
        &self,
        lexicon: &Lexicon,
        phrases: &Phrases,
        subordinate: bool,
    ) -> Result<RealisedClause> {
        for &id in self.slots.values().flatten() {
            phrases.check(id)?;
        }

        let form = self.effective_form();
        let surface = self.compute_surface_args(phrases);

        let (person, number) = match form {
            Form::Imperative => (self.person, self.number),
            _ => compute_agreement(phrases, &surface.subject),
        };

        let head = lexicon.verb(&self.verb);
        let modals: Vec<Verb> = self
            .modals
            .iter()
            .map(|m| lexicon.modal(m).into_owned())
            .collect();
        let group = build_verb_group(
            lexicon,
            &head,
            &modals,
            &GroupFeatures {
                tense: self.tense,
                perfect: self.perfect,
                main_verb_perfect: self.main_verb_perfect,
                passive: self.passive,
                form,
                person,
                number,
                honorific: self.honorific,
                subordinate,
            },
        );

        let mut cases = Vec::new();
        let mut constituents = self
            .realise_constituents(phrases, &surface, &mut cases)
            .into_iter();

        let vorfeld = if surface.suppress_vorfeld || form == Form::Imperative {
            String::new()
        } else {
            constituents.next().unwrap_or_default()
        };
        let mut mittelfeld: Vec<String> = constituents.collect();
        if self.negated {
            mittelfeld.push(NEGATION.to_string());
        }

        let text = self.assemble(&vorfeld, &mittelfeld, &group, subordinate);
        debug!(
            "realised {:?}: finite {:?}, cluster {:?} -> {:?}",
            self.verb, group.finite, group.cluster, text
        );

        Ok(RealisedClause {
            finite_verb: group.finite,
            verb_cluster: group.cluster,
            vorfeld,
            mittelfeld,
            person,
            number,
            cases,
            text,
        })
    }

    /// An embedded NORMAL phrase becomes an infinitive: zu-infinitive as a
    /// subject, bare infinitive otherwise.
    fn effective_form(&self) -> Form {
        match (self.discourse_function, self.form) {
            (Some(DiscourseFunction::Subject), Form::Normal) => Form::ZuInfinitive,
            (Some(_), Form::Normal) => Form::BareInfinitive,
            (_, form) => form,
        }
    }

    /// Questioned argument of a WH question, if any.
    fn wh_question(&self) -> Option<(InterrogativeType, DiscourseFunction)> {
        match (self.interrogative, self.wh_argument) {
            (Some(kind), Some(function)) if kind.is_wh_question() => Some((kind, function)),
            _ => None,
        }
    }

    fn compute_surface_args(&self, phrases: &Phrases) -> SurfaceArgs {
        let mut args = SurfaceArgs {
            subject: Vec::new(),
            slots: self
                .slots
                .iter()
                .map(|(&pos, ids)| (pos, ids.iter().map(|&id| Constituent::Given(id)).collect()))
                .collect(),
            suppressed: Vec::new(),
            suppress_vorfeld: self.suppress_vorfeld,
        };
        let subjects = self.complements(DiscourseFunction::Subject);
        let mut kind = self.interrogative;
        let mut wh_function = self.wh_question().map(|(_, f)| f);
        let mut agent = None;

        if self.passive {
            let (raised, removed) = self.passive_raising(phrases);
            match self.wh_question() {
                Some((wh_kind, DiscourseFunction::Subject)) => {
                    args.push(Position::Front, Constituent::AgentInterrogative(wh_kind));
                    kind = Some(InterrogativeType::WhElement);
                    args.subject = raised;
                }
                Some((_, DiscourseFunction::IndirectObject)) => {
                    args.suppressed.push(DiscourseFunction::IndirectObject);
                    args.subject = raised;
                    agent = agent_of(subjects);
                }
                Some(_) => {
                    // The questioned object is the passive subject.
                    agent = agent_of(subjects);
                    wh_function = Some(DiscourseFunction::Subject);
                }
                None => {
                    args.subject = raised;
                    agent = agent_of(subjects);
                }
            }
            for slot in args.slots.values_mut() {
                slot.retain(|c| !matches!(c, Constituent::Given(id) if removed.contains(id)));
            }
        } else {
            match self.wh_question() {
                Some((_, DiscourseFunction::Subject)) => {}
                Some((_, function)) => {
                    args.suppressed.push(function);
                    args.subject = given(subjects);
                }
                None => args.subject = given(subjects),
            }
        }

        if let Some(agent) = agent {
            if self.passive_complement_realisation {
                args.push(self.passive_complement_position, agent);
            }
        }

        match kind {
            None | Some(InterrogativeType::WhElement) => {}
            Some(InterrogativeType::JaNein) => args.suppress_vorfeld = true,
            Some(kind) => {
                let case = wh_function
                    .and_then(DiscourseFunction::case_value)
                    .unwrap_or(Case::Nominative);
                args.push(Position::Front, Constituent::Interrogative(kind, case));
            }
        }
        args
    }

    /// Complements promoted to subject under passive, and the phrase ids
    /// they displace. Direct objects first; failing those, indirect objects
    /// (a prepositional one contributes its complements); failing both, the
    /// expletive.
    fn passive_raising(&self, phrases: &Phrases) -> (Vec<Constituent>, Vec<PhraseId>) {
        let objects = self.complements(DiscourseFunction::Object);
        if !objects.is_empty() {
            return (given(objects), objects.to_vec());
        }

        let mut raised = Vec::new();
        let mut removed = Vec::new();
        for &id in self.complements(DiscourseFunction::IndirectObject) {
            match phrases.prep_complements(id) {
                Some(inner) => raised.extend_from_slice(inner),
                None => raised.push(id),
            }
            removed.push(id);
        }
        if raised.is_empty() {
            (vec![Constituent::Expletive], removed)
        } else {
            (given(&raised), removed)
        }
    }

    fn realise_constituents(
        &self,
        phrases: &Phrases,
        args: &SurfaceArgs,
        cases: &mut Vec<CaseAssignment>,
    ) -> Vec<String> {
        let mut out = Vec::new();
        for &position in self.word_order.positions() {
            if position == Position::Subject {
                if !args.is_suppressed(DiscourseFunction::Subject) {
                    let case = surface_subject_case(self.discourse_function);
                    out.push(realise_and_list(phrases, &args.subject, case, cases));
                }
                continue;
            }
            let Some(items) = args.slots.get(&position) else {
                continue;
            };
            match position {
                Position::Object => {
                    if !args.is_suppressed(DiscourseFunction::Object) {
                        out.push(realise_and_list(phrases, items, Case::Accusative, cases));
                    }
                }
                Position::IndirectObject => {
                    if !args.is_suppressed(DiscourseFunction::IndirectObject) {
                        out.extend(realise_indirect_objects(phrases, items, cases));
                    }
                }
                _ => {
                    let case = complement_case(position);
                    for item in items {
                        out.push(realise_constituent(phrases, item, case, cases));
                    }
                }
            }
        }
        out.retain(|s| !s.is_empty());
        out
    }

    fn assemble(
        &self,
        vorfeld: &str,
        mittelfeld: &[String],
        group: &VerbGroup,
        subordinate: bool,
    ) -> String {
        let mittelfeld = join_words(mittelfeld);
        let cluster = group.cluster_form();
        let (mittelfeld, cluster) = (mittelfeld.as_str(), cluster.as_str());
        let finite = group.finite.as_str();
        if !subordinate {
            join_words(&[vorfeld, finite, mittelfeld, cluster])
        } else if !self.modals.is_empty() && self.perfect {
            join_words(&[vorfeld, mittelfeld, finite, cluster])
        } else {
            join_words(&[vorfeld, mittelfeld, cluster, finite])
        }
    }
}

// ---------------------------------------------------------------------------
// Surface arguments
// ---------------------------------------------------------------------------

/// Working copy of the clause slots for one realisation.
struct SurfaceArgs {
    subject: Vec<Constituent>,
    slots: BTreeMap<Position, Vec<Constituent>>,
    suppressed: Vec<DiscourseFunction>,
    suppress_vorfeld: bool,
}

impl SurfaceArgs {
    fn push(&mut self, position: Position, constituent: Constituent) {
        self.slots.entry(position).or_default().push(constituent);
    }

    fn is_suppressed(&self, function: DiscourseFunction) -> bool {
        self.suppressed.contains(&function)
    }
}

fn given(ids: &[PhraseId]) -> Vec<Constituent> {
    ids.iter().map(|&id| Constituent::Given(id)).collect()
}

fn agent_of(subjects: &[PhraseId]) -> Option<Constituent> {
    if subjects.is_empty() {
        None
    } else {
        Some(Constituent::Agent(subjects.to_vec()))
    }
}

/// Realise one constituent. Given phrases in a case-governing slot have
/// the case recorded; others are realised as nominatives.
fn realise_constituent(
    phrases: &Phrases,
    constituent: &Constituent,
    case: Option<Case>,
    cases: &mut Vec<CaseAssignment>,
) -> String {
    match constituent {
        Constituent::Given(id) => {
            if let Some(case) = case {
                cases.push(CaseAssignment { phrase: *id, case });
            }
            phrases.realise(*id, case.unwrap_or(Case::Nominative))
        }
        Constituent::Expletive => EXPLETIVE.to_string(),
        Constituent::Interrogative(kind, case) => interrogative_pronoun(*kind, *case).to_string(),
        Constituent::Agent(ids) => {
            cases.extend(ids.iter().map(|&phrase| CaseAssignment {
                phrase,
                case: PASSIVE_VON_CASE,
            }));
            let agents = phrases.realise_and_list(ids, PASSIVE_VON_CASE);
            join_words(&[PASSIVE_VON, agents.as_str()])
        }
        Constituent::AgentInterrogative(kind) => {
            join_words(&[PASSIVE_VON, interrogative_pronoun(*kind, PASSIVE_VON_CASE)])
        }
    }
}

fn realise_and_list(
    phrases: &Phrases,
    items: &[Constituent],
    case: Case,
    cases: &mut Vec<CaseAssignment>,
) -> String {
    let parts: Vec<String> = items
        .iter()
        .map(|item| realise_constituent(phrases, item, Some(case), cases))
        .filter(|s| !s.is_empty())
        .collect();
    and_list(&parts)
}

/// Noun-like indirect objects are coordinated into one phrase, placed where
/// the first of them stood; prepositional ones stay separate.
fn realise_indirect_objects(
    phrases: &Phrases,
    items: &[Constituent],
    cases: &mut Vec<CaseAssignment>,
) -> Vec<String> {
    let mut out = Vec::new();
    let mut nouns = Vec::new();
    let mut noun_slot = None;
    for item in items {
        let text = realise_constituent(phrases, item, Some(Case::Dative), cases);
        match item {
            Constituent::Given(id) if phrases.is_noun_like(*id) => {
                if noun_slot.is_none() {
                    noun_slot = Some(out.len());
                    out.push(String::new());
                }
                nouns.push(text);
            }
            _ => out.push(text),
        }
    }
    if let Some(slot) = noun_slot {
        out[slot] = and_list(&nouns);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Gender;
    use crate::phrase::Determiner;

    fn lexicon() -> Lexicon {
        Lexicon::new()
    }

    fn er(p: &mut Phrases) -> PhraseId {
        p.pronoun(Person::Third, NumberAgr::Singular, Gender::Masculine)
    }

    #[test]
    fn test_simple_main_clause() {
        let lex = lexicon();
        let mut p = Phrases::new();
        let subj = er(&mut p);
        let obj = p.text("das", false);
        let mut vp = VerbPhrase::new("glauben");
        vp.add_complement(subj, DiscourseFunction::Subject).unwrap();
        vp.add_complement(obj, DiscourseFunction::Object).unwrap();

        let clause = vp.realise(&lex, &p, false).unwrap();
        assert_eq!(clause.vorfeld, "er");
        assert_eq!(clause.finite_verb, "glaubt");
        assert_eq!(clause.mittelfeld, vec!["das"]);
        assert_eq!(clause.text, "er glaubt das");
        assert_eq!(clause.case_of(subj), Some(Case::Nominative));
        assert_eq!(clause.case_of(obj), Some(Case::Accusative));
    }

    #[test]
    fn test_unsupported_complement_function() {
        let mut p = Phrases::new();
        let id = p.text("heute", false);
        let mut vp = VerbPhrase::new("glauben");
        let err = vp.add_complement(id, DiscourseFunction::FrontModifier).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFunction(DiscourseFunction::FrontModifier)));
        assert!(err.to_string().contains("INDIRECT_OBJECT"));
        assert!(vp.modifiers(Position::Front).is_empty());
    }

    #[test]
    fn test_foreign_phrase_id_is_rejected() {
        let lex = lexicon();
        let mut big = Phrases::new();
        big.text("a", false);
        let far = big.text("b", false);
        let mut small = Phrases::new();
        small.text("c", false);

        let mut vp = VerbPhrase::new("glauben");
        vp.add_complement(far, DiscourseFunction::Subject).unwrap();
        assert!(matches!(vp.realise(&lex, &small, false), Err(Error::UnknownPhrase(_))));
    }

    #[test]
    fn test_realise_twice_is_identical() {
        let lex = lexicon();
        let mut p = Phrases::new();
        let frau = p.noun(Determiner::Definite, "Frau", "Frauen", Gender::Feminine, NumberAgr::Singular);
        let buch = p.noun(Determiner::Definite, "Buch", "Bücher", Gender::Neuter, NumberAgr::Singular);
        let mut vp = VerbPhrase::new("schenken");
        vp.add_complement(frau, DiscourseFunction::Subject).unwrap();
        vp.add_complement(buch, DiscourseFunction::Object).unwrap();
        vp.set_passive(true).set_perfect(true);

        let first = vp.realise(&lex, &p, false).unwrap();
        let second = vp.realise(&lex, &p, false).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.text, "das Buch ist von der Frau geschenkt worden");
        // The phrase itself is untouched.
        assert_eq!(vp.complements(DiscourseFunction::Object), &[buch]);
    }

    #[test]
    fn test_expletive_passive() {
        let lex = lexicon();
        let p = Phrases::new();
        let mut vp = VerbPhrase::new("arbeiten");
        vp.set_passive(true);
        let clause = vp.realise(&lex, &p, false).unwrap();
        assert_eq!(clause.text, "es wird gearbeitet");
        assert_eq!(clause.number, NumberAgr::Singular);
    }

    #[test]
    fn test_passive_raises_indirect_object_from_prepositional_phrase() {
        let lex = lexicon();
        let mut p = Phrases::new();
        let kinder = p.noun(Determiner::Definite, "Kind", "Kinder", Gender::Neuter, NumberAgr::Plural);
        let pp = p.prep("an", Case::Accusative, vec![kinder]);
        let mut vp = VerbPhrase::new("denken");
        vp.add_complement(pp, DiscourseFunction::IndirectObject).unwrap();
        vp.set_passive(true);

        let clause = vp.realise(&lex, &p, false).unwrap();
        assert_eq!(clause.vorfeld, "die Kinder");
        assert_eq!(clause.finite_verb, "werden");
        assert!(clause.mittelfeld.is_empty(), "{:?}", clause.mittelfeld);
    }

    #[test]
    fn test_agent_position_and_suppression() {
        let lex = lexicon();
        let mut p = Phrases::new();
        let frau = p.noun(Determiner::Definite, "Frau", "Frauen", Gender::Feminine, NumberAgr::Singular);
        let buch = p.noun(Determiner::Definite, "Buch", "Bücher", Gender::Neuter, NumberAgr::Singular);
        let mut vp = VerbPhrase::new("schenken");
        vp.add_complement(frau, DiscourseFunction::Subject).unwrap();
        vp.add_complement(buch, DiscourseFunction::Object).unwrap();
        vp.set_passive(true).set_passive_complement_position(Position::Front);
        assert_eq!(vp.realise(&lex, &p, false).unwrap().text, "von der Frau wird das Buch geschenkt");

        vp.set_passive_complement_realisation(false);
        assert_eq!(vp.realise(&lex, &p, false).unwrap().text, "das Buch wird geschenkt");
    }

    #[test]
    fn test_interrogative_element_fronts_word_order() {
        let lex = lexicon();
        let mut p = Phrases::new();
        let subj = er(&mut p);
        let which = p.text("welches Buch", false);
        let mut vp = VerbPhrase::new("lesen");
        vp.add_complement(subj, DiscourseFunction::Subject).unwrap();
        vp.set_interrogative_element(which, DiscourseFunction::Object, true).unwrap();
        assert_eq!(vp.word_order(), WordOrder::Osi);
        assert_eq!(vp.realise(&lex, &p, false).unwrap().text, "welches Buch liest er");
    }

    #[test]
    fn test_clear_interrogative() {
        let lex = lexicon();
        let mut p = Phrases::new();
        let subj = er(&mut p);
        let mut vp = VerbPhrase::new("kommen");
        vp.add_complement(subj, DiscourseFunction::Subject).unwrap();
        vp.set_interrogative(InterrogativeType::JaNein, Some(DiscourseFunction::Subject));
        assert_eq!(vp.realise(&lex, &p, false).unwrap().text, "kommt er");
        vp.clear_interrogative();
        assert_eq!(vp.realise(&lex, &p, false).unwrap().text, "er kommt");
    }

    #[test]
    fn test_embedded_object_clause_takes_accusative_subject() {
        let lex = lexicon();
        let mut p = Phrases::new();
        let subj = er(&mut p);
        let mut vp = VerbPhrase::new("kommen");
        vp.add_complement(subj, DiscourseFunction::Subject).unwrap();
        vp.set_discourse_function(Some(DiscourseFunction::Object));

        let clause = vp.realise(&lex, &p, false).unwrap();
        assert_eq!(clause.finite_verb, "");
        assert_eq!(clause.text, "ihn kommen");
        assert_eq!(clause.case_of(subj), Some(Case::Accusative));
    }

    #[test]
    fn test_coordinated_indirect_objects() {
        let lex = lexicon();
        let mut p = Phrases::new();
        let subj = er(&mut p);
        let anna = p.noun(Determiner::None, "Anna", "", Gender::Feminine, NumberAgr::Singular);
        let kind = p.noun(Determiner::Definite, "Kind", "Kinder", Gender::Neuter, NumberAgr::Singular);
        let obj = p.text("Blumen", true);
        let mut vp = VerbPhrase::new("schenken");
        vp.add_complement(subj, DiscourseFunction::Subject).unwrap();
        vp.add_complement(anna, DiscourseFunction::IndirectObject).unwrap();
        vp.add_complement(kind, DiscourseFunction::IndirectObject).unwrap();
        vp.add_complement(obj, DiscourseFunction::Object).unwrap();
        assert_eq!(
            vp.realise(&lex, &p, false).unwrap().text,
            "er schenkt Anna und dem Kind Blumen"
        );
    }

    #[test]
    fn test_constituents_iterator() {
        let clause = RealisedClause {
            vorfeld: "er".into(),
            mittelfeld: vec!["es".into(), "nicht".into()],
            ..Default::default()
        };
        assert_eq!(clause.constituents().collect::<Vec<_>>(), vec!["er", "es", "nicht"]);
        let question = RealisedClause {
            mittelfeld: vec!["er".into()],
            ..Default::default()
        };
        assert_eq!(question.constituents().collect::<Vec<_>>(), vec!["er"]);
    }
}
