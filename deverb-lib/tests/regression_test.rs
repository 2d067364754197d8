// Regression tests for clause realisation scenarios.

use deverb_lib::output::to_sentence;
use deverb_lib::{
    Case, Determiner, DiscourseFunction, Error, Form, Gender, InterrogativeType, Lexicon,
    NumberAgr, Person, PhraseId, Phrases, Position, Tense, VerbPhrase,
};

fn lexicon() -> Lexicon {
    let _ = env_logger::builder().is_test(true).try_init();
    Lexicon::new()
}

/// "er" as subject of `verb`.
fn with_er(phrases: &mut Phrases, verb: &str) -> VerbPhrase {
    let er = phrases.pronoun(Person::Third, NumberAgr::Singular, Gender::Masculine);
    let mut vp = VerbPhrase::new(verb);
    vp.add_complement(er, DiscourseFunction::Subject).unwrap();
    vp
}

fn text(vp: &VerbPhrase, lex: &Lexicon, phrases: &Phrases, subordinate: bool) -> String {
    vp.realise(lex, phrases, subordinate).unwrap().text
}

/// "die Frau" (subject), "das Buch" or "die Bücher" (object), "dem Kind"
/// (indirect object) under "schenken".
struct Gift {
    phrases: Phrases,
    frau: PhraseId,
    buch: PhraseId,
    kind: PhraseId,
}

impl Gift {
    fn new(books: NumberAgr) -> Self {
        let mut phrases = Phrases::new();
        let frau = phrases.noun(Determiner::Definite, "Frau", "Frauen", Gender::Feminine, NumberAgr::Singular);
        let buch = phrases.noun(Determiner::Definite, "Buch", "Bücher", Gender::Neuter, books);
        let kind = phrases.noun(Determiner::Definite, "Kind", "Kinder", Gender::Neuter, NumberAgr::Singular);
        Self { phrases, frau, buch, kind }
    }

    fn verb_phrase(&self) -> VerbPhrase {
        let mut vp = VerbPhrase::new("schenken");
        vp.add_complement(self.frau, DiscourseFunction::Subject).unwrap();
        vp.add_complement(self.buch, DiscourseFunction::Object).unwrap();
        vp.add_complement(self.kind, DiscourseFunction::IndirectObject).unwrap();
        vp
    }
}

// ---------------------------------------------------------------------------
// Basic inflection and prefixes
// ---------------------------------------------------------------------------

#[test]
fn weak_verb_third_singular() {
    let lex = lexicon();
    let mut p = Phrases::new();
    let vp = with_er(&mut p, "glauben");
    let clause = vp.realise(&lex, &p, false).unwrap();
    assert_eq!(clause.finite_verb, "glaubt");
    assert_eq!((clause.person, clause.number), (Person::Third, NumberAgr::Singular));
}

#[test]
fn zu_infinitive_fuses_separable_prefix() {
    let lex = lexicon();
    assert_eq!(lex.verb("auf|hören").zu_infinitive(), "aufzuhören");

    let p = Phrases::new();
    let mut vp = VerbPhrase::new("auf|hören");
    vp.set_form(Form::ZuInfinitive);
    let clause = vp.realise(&lex, &p, false).unwrap();
    assert_eq!(clause.finite_verb, "");
    assert_eq!(clause.text, "aufzuhören");
}

#[test]
fn separable_prefix_main_vs_subordinate() {
    let lex = lexicon();
    let mut p = Phrases::new();
    let damit = p.text("damit", false);
    let mut vp = with_er(&mut p, "auf|hören");
    vp.add_modifier(Position::Default, damit);

    let main = vp.realise(&lex, &p, false).unwrap();
    assert_eq!(main.finite_verb, "hört");
    assert_eq!(main.verb_cluster.last().map(String::as_str), Some("auf"));
    assert_eq!(main.text, "er hört damit auf");

    let sub = vp.realise(&lex, &p, true).unwrap();
    assert_eq!(sub.finite_verb, "aufhört");
    assert_eq!(sub.text, "er damit aufhört");
}

#[test]
fn multi_word_verb_keeps_its_space() {
    let lex = lexicon();
    let mut p = Phrases::new();
    let vp = with_er(&mut p, "Gassi gehen");
    assert_eq!(text(&vp, &lex, &p, false), "er geht Gassi");
    assert_eq!(text(&vp, &lex, &p, true), "er Gassi geht");
}

#[test]
fn prefixed_verb_inflects_like_stored_core() {
    let lex = lexicon();
    let mut p = Phrases::new();
    let mut vp = with_er(&mut p, "weg|fahren");
    assert_eq!(text(&vp, &lex, &p, false), "er fährt weg");
    assert_eq!(text(&vp, &lex, &p, true), "er wegfährt");

    vp.set_perfect(true);
    assert_eq!(text(&vp, &lex, &p, false), "er ist weggefahren");
    assert_eq!(text(&vp, &lex, &p, true), "er weggefahren ist");

    let mut vp = with_er(&mut p, "vor|lesen");
    vp.set_tense(Tense::Past);
    assert_eq!(text(&vp, &lex, &p, false), "er las vor");

    let mut vp = with_er(&mut p, "zurück|kommen");
    vp.set_perfect(true);
    assert_eq!(text(&vp, &lex, &p, false), "er ist zurückgekommen");
}

#[test]
fn capitalised_modal_name() {
    let lex = lexicon();
    let mut p = Phrases::new();
    let mut vp = with_er(&mut p, "kommen");
    vp.add_modal("Müssen");
    assert_eq!(text(&vp, &lex, &p, false), "er muss kommen");
}

#[test]
fn strong_past_and_sein_perfect() {
    let lex = lexicon();
    let mut p = Phrases::new();
    let mut vp = with_er(&mut p, "sprechen");
    vp.set_tense(Tense::Past);
    assert_eq!(text(&vp, &lex, &p, false), "er sprach");

    let mut vp = with_er(&mut p, "gehen");
    vp.set_perfect(true);
    assert_eq!(text(&vp, &lex, &p, false), "er ist gegangen");
    assert_eq!(text(&vp, &lex, &p, true), "er gegangen ist");
}

#[test]
fn subjunctive_perfect() {
    let lex = lexicon();
    let mut p = Phrases::new();
    let mut vp = with_er(&mut p, "gehen");
    vp.set_perfect(true).set_form(Form::SubjunctiveII);
    assert_eq!(text(&vp, &lex, &p, false), "er wäre gegangen");
    vp.set_form(Form::Subjunctive);
    assert_eq!(text(&vp, &lex, &p, false), "er sei gegangen");
}

// ---------------------------------------------------------------------------
// Modals
// ---------------------------------------------------------------------------

#[test]
fn modal_perfect_cluster_order() {
    let lex = lexicon();
    let mut p = Phrases::new();
    let es = p.pronoun(Person::Third, NumberAgr::Singular, Gender::Neuter);
    let mut vp = with_er(&mut p, "verstehen");
    vp.add_complement(es, DiscourseFunction::Object).unwrap();
    vp.add_modal("dürfen").set_perfect(true);

    let main = vp.realise(&lex, &p, false).unwrap();
    assert_eq!(main.verb_cluster, vec!["verstehen", "dürfen"]);
    assert_eq!(main.finite_verb, "hat");
    assert_eq!(main.text, "er hat es verstehen dürfen");

    // The finite auxiliary precedes the cluster in the subordinate clause.
    let sub = vp.realise(&lex, &p, true).unwrap();
    assert_eq!(sub.text, "er es hat verstehen dürfen");
}

#[test]
fn modal_without_perfect_is_verb_final() {
    let lex = lexicon();
    let mut p = Phrases::new();
    let es = p.pronoun(Person::Third, NumberAgr::Singular, Gender::Neuter);
    let mut vp = with_er(&mut p, "verstehen");
    vp.add_complement(es, DiscourseFunction::Object).unwrap();
    vp.add_modal("dürfen");
    assert_eq!(text(&vp, &lex, &p, false), "er darf es verstehen");
    assert_eq!(text(&vp, &lex, &p, true), "er es verstehen darf");
}

#[test]
fn main_verb_perfect_under_modal() {
    let lex = lexicon();
    let mut p = Phrases::new();
    let es = p.pronoun(Person::Third, NumberAgr::Singular, Gender::Neuter);
    let mut vp = with_er(&mut p, "verstehen");
    vp.add_complement(es, DiscourseFunction::Object).unwrap();
    vp.add_modal("müssen").set_main_verb_perfect(true);
    assert_eq!(text(&vp, &lex, &p, false), "er muss es verstanden haben");
}

#[test]
fn future_with_modal() {
    let lex = lexicon();
    let mut p = Phrases::new();
    let mut vp = with_er(&mut p, "kommen");
    vp.add_modal("müssen").set_tense(Tense::Future);
    assert_eq!(text(&vp, &lex, &p, false), "er wird kommen müssen");
    assert_eq!(text(&vp, &lex, &p, true), "er kommen müssen wird");
}

// ---------------------------------------------------------------------------
// Passive
// ---------------------------------------------------------------------------

#[test]
fn passive_agrees_with_plural_object() {
    let lex = lexicon();
    let gift = Gift::new(NumberAgr::Plural);
    let mut vp = gift.verb_phrase();
    vp.set_passive(true);

    let clause = vp.realise(&lex, &gift.phrases, false).unwrap();
    assert_eq!(clause.finite_verb, "werden");
    assert_eq!(clause.number, NumberAgr::Plural);
    assert_eq!(clause.vorfeld, "die Bücher");
    assert!(clause.mittelfeld.contains(&"von der Frau".to_string()), "{:?}", clause.mittelfeld);
    assert_eq!(clause.text, "die Bücher werden dem Kind von der Frau geschenkt");
    assert_eq!(clause.case_of(gift.buch), Some(Case::Nominative));
    assert_eq!(clause.case_of(gift.frau), Some(Case::Dative));
}

#[test]
fn passive_perfect_and_modal_chains() {
    let lex = lexicon();
    let gift = Gift::new(NumberAgr::Singular);
    let mut vp = gift.verb_phrase();
    vp.set_passive(true).set_passive_complement_realisation(false);

    vp.set_perfect(true);
    assert_eq!(text(&vp, &lex, &gift.phrases, false), "das Buch ist dem Kind geschenkt worden");

    vp.add_modal("müssen");
    assert_eq!(
        text(&vp, &lex, &gift.phrases, false),
        "das Buch hat dem Kind geschenkt werden müssen"
    );

    vp.set_perfect(false).set_main_verb_perfect(true);
    assert_eq!(
        text(&vp, &lex, &gift.phrases, false),
        "das Buch muss dem Kind geschenkt worden sein"
    );
}

// ---------------------------------------------------------------------------
// Interrogatives
// ---------------------------------------------------------------------------

#[test]
fn yes_no_question_has_empty_vorfeld() {
    let lex = lexicon();
    let mut p = Phrases::new();
    let das = p.text("das", false);
    let mut vp = with_er(&mut p, "glauben");
    vp.add_complement(das, DiscourseFunction::Object).unwrap();
    vp.set_interrogative(InterrogativeType::JaNein, None);

    let clause = vp.realise(&lex, &p, false).unwrap();
    assert_eq!(clause.vorfeld, "");
    assert_eq!(clause.text, "glaubt er das");
    assert_eq!(to_sentence(&clause, true), "Glaubt er das?");
}

#[test]
fn wh_questions_active() {
    let lex = lexicon();
    let mut p = Phrases::new();
    let das = p.text("das", false);
    let mut vp = with_er(&mut p, "glauben");
    vp.add_complement(das, DiscourseFunction::Object).unwrap();

    vp.set_interrogative(InterrogativeType::Wer, Some(DiscourseFunction::Subject));
    assert_eq!(text(&vp, &lex, &p, false), "wer glaubt das");

    vp.set_interrogative(InterrogativeType::Was, Some(DiscourseFunction::Object));
    assert_eq!(text(&vp, &lex, &p, false), "was glaubt er");
}

#[test]
fn wh_question_about_indirect_object() {
    let lex = lexicon();
    let gift = Gift::new(NumberAgr::Singular);
    let mut vp = gift.verb_phrase();
    vp.set_interrogative(InterrogativeType::Wer, Some(DiscourseFunction::IndirectObject));
    assert_eq!(text(&vp, &lex, &gift.phrases, false), "wem schenkt die Frau das Buch");
}

#[test]
fn wh_questions_passive() {
    let lex = lexicon();
    let gift = Gift::new(NumberAgr::Singular);
    let mut vp = gift.verb_phrase();
    vp.set_passive(true);

    vp.set_interrogative(InterrogativeType::Wer, Some(DiscourseFunction::Subject));
    assert_eq!(text(&vp, &lex, &gift.phrases, false), "von wem wird das Buch dem Kind geschenkt");

    vp.set_interrogative(InterrogativeType::Was, Some(DiscourseFunction::Object));
    assert_eq!(text(&vp, &lex, &gift.phrases, false), "was wird dem Kind von der Frau geschenkt");

    vp.set_interrogative(InterrogativeType::Wer, Some(DiscourseFunction::IndirectObject));
    assert_eq!(text(&vp, &lex, &gift.phrases, false), "wem wird das Buch von der Frau geschenkt");
}

// ---------------------------------------------------------------------------
// Imperative, future, negation
// ---------------------------------------------------------------------------

#[test]
fn imperative_puts_prefix_last() {
    let lex = lexicon();
    let p = Phrases::new();
    let mut vp = VerbPhrase::new("auf|hören");
    vp.set_form(Form::Imperative);
    assert_eq!(text(&vp, &lex, &p, false), "hör auf");
    vp.set_number(NumberAgr::Plural);
    assert_eq!(text(&vp, &lex, &p, false), "hört auf");
}

#[test]
fn imperative_alternate_stem_and_honorific() {
    let lex = lexicon();
    let mut p = Phrases::new();
    let lauter = p.text("lauter", false);
    let mut vp = VerbPhrase::new("sprechen");
    vp.set_form(Form::Imperative).add_modifier(Position::Default, lauter);
    assert_eq!(text(&vp, &lex, &p, false), "sprich lauter");

    let ruhig = p.text("ruhig", false);
    let mut vp = VerbPhrase::new("sein");
    vp.set_form(Form::Imperative)
        .set_honorific(true)
        .add_modifier(Position::Default, ruhig);
    assert_eq!(text(&vp, &lex, &p, false), "seien Sie ruhig");
}

#[test]
fn future_and_future_perfect() {
    let lex = lexicon();
    let mut p = Phrases::new();
    let wir = p.pronoun(Person::First, NumberAgr::Plural, Gender::Masculine);
    let das = p.text("das", false);
    let mut vp = VerbPhrase::new("glauben");
    vp.add_complement(wir, DiscourseFunction::Subject).unwrap();
    vp.add_complement(das, DiscourseFunction::Object).unwrap();
    vp.set_tense(Tense::Future);
    assert_eq!(text(&vp, &lex, &p, false), "wir werden das glauben");
    vp.set_perfect(true);
    assert_eq!(text(&vp, &lex, &p, false), "wir werden das geglaubt haben");
}

#[test]
fn negation_goes_to_end_of_mittelfeld() {
    let lex = lexicon();
    let mut p = Phrases::new();
    let das = p.text("das", false);
    let mut vp = with_er(&mut p, "glauben");
    vp.add_complement(das, DiscourseFunction::Object).unwrap();
    vp.set_negated(true);
    assert_eq!(text(&vp, &lex, &p, false), "er glaubt das nicht");
    assert_eq!(text(&vp, &lex, &p, true), "er das nicht glaubt");
}

// ---------------------------------------------------------------------------
// Agreement
// ---------------------------------------------------------------------------

#[test]
fn honorific_and_coordinated_subjects_are_plural() {
    let lex = lexicon();
    let mut p = Phrases::new();
    let sie = p.honorific_pronoun();
    let mut vp = VerbPhrase::new("gehen");
    vp.add_complement(sie, DiscourseFunction::Subject).unwrap();
    assert_eq!(text(&vp, &lex, &p, false), "Sie gehen");

    let anna = p.text("Anna", false);
    let max = p.text("Max", false);
    let both = p.coordinate(vec![anna, max]);
    let mut vp = VerbPhrase::new("kommen");
    vp.add_complement(both, DiscourseFunction::Subject).unwrap();
    assert_eq!(text(&vp, &lex, &p, false), "Anna und Max kommen");
}

// ---------------------------------------------------------------------------
// Errors and determinism
// ---------------------------------------------------------------------------

#[test]
fn modifier_function_rejected_as_complement() {
    let mut p = Phrases::new();
    let heute = p.text("heute", false);
    let mut vp = VerbPhrase::new("kommen");
    for function in [
        DiscourseFunction::FrontModifier,
        DiscourseFunction::PreModifier,
        DiscourseFunction::PostModifier,
        DiscourseFunction::PrepObject,
    ] {
        assert!(
            matches!(vp.add_complement(heute, function), Err(Error::UnsupportedFunction(f)) if f == function),
            "{function:?} accepted"
        );
    }
}

#[test]
fn repeated_realisation_is_byte_identical() {
    let lex = lexicon();
    let gift = Gift::new(NumberAgr::Plural);
    let mut vp = gift.verb_phrase();
    vp.set_passive(true)
        .set_tense(Tense::Past)
        .add_modal("sollen")
        .set_perfect(true)
        .set_interrogative(InterrogativeType::Wer, Some(DiscourseFunction::Subject));

    let first = vp.realise(&lex, &gift.phrases, true).unwrap();
    for _ in 0..3 {
        assert_eq!(vp.realise(&lex, &gift.phrases, true).unwrap(), first);
    }
    let json = serde_json::to_string(&first).unwrap();
    assert!(json.contains("\"finite_verb\":\"hatten\""), "{json}");
}
