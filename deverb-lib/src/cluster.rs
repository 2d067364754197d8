// Verb cluster builder.
//
// Walks outward from the lexical verb. Each step either pushes a non-finite
// form onto the cluster and hands the finite role to another verb (werden,
// haben/sein, a modal), or stops. Whatever verb holds the finite role at the
// end is inflected for person, number, tense and mood.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::features::{Form, NumberAgr, Person, Tense};
use crate::lexicon::Lexicon;
use crate::verb::Verb;

/// Participle of *werden* inside a perfect passive ("ist geschenkt worden").
pub const PASSIVE_PERFECT_PARTICIPLE: &str = "worden";

/// Features the cluster builder consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GroupFeatures {
    pub tense: Tense,
    pub perfect: bool,
    /// Perfect on the lexical verb below any modals ("muss verstanden haben").
    pub main_verb_perfect: bool,
    pub passive: bool,
    pub form: Form,
    pub person: Person,
    pub number: NumberAgr,
    pub honorific: bool,
    pub subordinate: bool,
}

/// The finite verb and the non-finite verb cluster, in clause order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VerbGroup {
    /// Empty for infinitive forms.
    pub finite: String,
    pub cluster: Vec<String>,
}

impl VerbGroup {
    pub fn cluster_form(&self) -> String {
        self.cluster.join(" ")
    }
}

/// Build the verb group for `head` under a chain of `modals`.
pub fn build_verb_group(
    lexicon: &Lexicon,
    head: &Verb,
    modals: &[Verb],
    features: &GroupFeatures,
) -> VerbGroup {
    let mut cluster: Vec<String> = Vec::new();
    let mut finite: &Verb = head;

    if features.passive {
        push(&mut cluster, head.perfect_participle());
        finite = lexicon.werden();
        trace!("passive: werden takes over from {:?}", head.base_form());
    }

    if modals.is_empty() {
        if features.perfect || features.main_verb_perfect {
            finite = demote_to_perfect(lexicon, finite, features.passive, &mut cluster);
        }
    } else {
        if features.main_verb_perfect {
            finite = demote_to_perfect(lexicon, finite, features.passive, &mut cluster);
        }
        // Modals have no imperative; the chain is dropped.
        if features.form != Form::Imperative {
            for modal in modals {
                push(&mut cluster, finite.infinitive());
                trace!("modal {:?} takes over from {:?}", modal.base_form(), finite.base_form());
                finite = modal;
            }
            if features.perfect {
                // Ersatzinfinitiv: the modal appears as an infinitive.
                push(&mut cluster, finite.infinitive());
                finite = perfect_auxiliary(lexicon, finite);
            }
        }
    }

    if features.tense == Tense::Future && features.form != Form::Imperative {
        push(&mut cluster, finite.infinitive());
        finite = lexicon.werden();
        trace!("future: werden takes over");
    }

    let mut group = VerbGroup {
        finite: String::new(),
        cluster,
    };
    realise_finite(finite, features, &mut group);
    group
}

/// Push the perfect participle of `verb` ("worden" when `verb` is the passive
/// werden) and return the perfect auxiliary `verb` selects.
fn demote_to_perfect<'a>(
    lexicon: &'a Lexicon,
    verb: &'a Verb,
    passive: bool,
    cluster: &mut Vec<String>,
) -> &'a Verb {
    let participle = if passive {
        PASSIVE_PERFECT_PARTICIPLE.to_string()
    } else {
        verb.perfect_participle()
    };
    push(cluster, participle);
    perfect_auxiliary(lexicon, verb)
}

fn perfect_auxiliary<'a>(lexicon: &'a Lexicon, verb: &Verb) -> &'a Verb {
    let aux = lexicon.auxiliary(verb.aux_type());
    trace!("perfect: {:?} takes over from {:?}", aux.base_form(), verb.base_form());
    aux
}

fn push(cluster: &mut Vec<String>, form: String) {
    trace!("cluster += {form:?}");
    cluster.push(form);
}

/// Final step: fill the finite slot, or add the last non-finite form, and
/// place a separable prefix.
fn realise_finite(verb: &Verb, features: &GroupFeatures, group: &mut VerbGroup) {
    match features.form {
        Form::Infinitive | Form::BareInfinitive => group.cluster.push(verb.infinitive()),
        Form::ZuInfinitive => group.cluster.push(verb.zu_infinitive()),
        Form::Imperative => {
            group.finite = if features.honorific {
                verb.honorific_imperative()
            } else {
                verb.imperative(features.number)
            };
            if verb.has_prefix() {
                group.cluster.insert(0, verb.prefix().trim().to_string());
            }
        }
        Form::Normal | Form::Subjunctive | Form::SubjunctiveII => {
            // Future is periphrastic; werden itself is inflected for present.
            let tense = match features.tense {
                Tense::Future => Tense::Present,
                other => other,
            };
            group.finite = verb.form(features.person, features.number, tense, features.form);
            if verb.has_prefix() {
                if features.subordinate {
                    group.finite = format!("{}{}", verb.prefix(), group.finite);
                } else {
                    group.cluster.push(verb.prefix().trim().to_string());
                }
            }
        }
    }
}
