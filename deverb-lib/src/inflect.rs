// Pattern application: stem selection plus stem/suffix merging.

use crate::features::{Form, NumberAgr, Person, Tense};
use crate::pattern::InflectionPattern;
use crate::verb::Verb;

/// Inflect `verb` for one paradigm cell. Total over the feature domain; the
/// separable prefix is not attached.
pub fn apply_form(verb: &Verb, person: Person, number: NumberAgr, tense: Tense, form: Form) -> String {
    let pattern = verb.pattern();
    let suffix = pattern.suffix(person, number, tense, form);
    if pattern.flags().full_forms {
        return suffix.to_string();
    }
    let stem = select_stem(verb, pattern, person, number, tense, form);
    merge_suffix(stem, suffix, pattern.flags().stem_e_elision)
}

/// Pick the stem variant a paradigm cell is built on.
fn select_stem<'a>(
    verb: &'a Verb,
    pattern: &InflectionPattern,
    person: Person,
    number: NumberAgr,
    tense: Tense,
    form: Form,
) -> &'a str {
    let flags = pattern.flags();
    match form {
        Form::Imperative => match number {
            NumberAgr::Singular if flags.alternate_imperative => verb.alternate_stem(),
            _ => verb.present_stem(),
        },
        Form::SubjunctiveII => verb.subjunctive_stem(),
        _ => match tense {
            Tense::Present | Tense::Future => {
                let uses_alternate = verb.has_alternate_stem()
                    && number == NumberAgr::Singular
                    && form == Form::Normal
                    && (person != Person::First || flags.modal_inflection);
                if uses_alternate {
                    verb.alternate_stem()
                } else {
                    verb.present_stem()
                }
            }
            Tense::Past if form == Form::Subjunctive => verb.subjunctive_stem(),
            Tense::Past => verb.past_stem(),
        },
    }
}

/// Join stem and suffix, contracting at the boundary:
///
/// - "s"-suffix after a sibilant loses its "s" ("reis" + "st" → "reist")
/// - "e"-suffix after a stem-final "e" loses its "e" ("glaubte" + "en")
/// - with e-elision, an "e"-suffix removes the stem's last "e" ("wander" + "e" → "wandre")
/// - "t"-suffix after a stem-final "t" loses its "t" ("hält" + "t" → "hält")
pub fn merge_suffix(stem: &str, suffix: &str, e_elision: bool) -> String {
    if suffix.starts_with('s') && stem.ends_with(['s', 'ß', 'z', 'x']) {
        format!("{stem}{}", &suffix[1..])
    } else if suffix.starts_with('e') && stem.ends_with('e') {
        format!("{stem}{}", &suffix[1..])
    } else if suffix.starts_with('e') && e_elision {
        match stem.rfind('e') {
            Some(idx) => format!("{}{}{suffix}", &stem[..idx], &stem[idx + 1..]),
            None => format!("{stem}{suffix}"),
        }
    } else if suffix.starts_with('t') && stem.ends_with('t') {
        format!("{stem}{}", &suffix[1..])
    } else {
        format!("{stem}{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_plain_concat() {
        assert_eq!(merge_suffix("glaub", "t", false), "glaubt");
        assert_eq!(merge_suffix("glaub", "", false), "glaub");
    }

    #[test]
    fn test_merge_sibilant_drops_s() {
        assert_eq!(merge_suffix("reis", "st", false), "reist");
        assert_eq!(merge_suffix("heiß", "st", false), "heißt");
        assert_eq!(merge_suffix("sitz", "st", false), "sitzt");
        assert_eq!(merge_suffix("box", "st", false), "boxt");
    }

    #[test]
    fn test_merge_double_e() {
        assert_eq!(merge_suffix("glaubte", "en", false), "glaubten");
        assert_eq!(merge_suffix("hätte", "est", false), "hättest");
    }

    #[test]
    fn test_merge_e_elision_removes_last_e() {
        assert_eq!(merge_suffix("wander", "e", true), "wandre");
        assert_eq!(merge_suffix("sammel", "e", true), "sammle");
        // Only vowel-initial suffixes trigger elision.
        assert_eq!(merge_suffix("wander", "st", true), "wanderst");
    }

    #[test]
    fn test_merge_dental_t() {
        // Never tripled, never doubled.
        assert_eq!(merge_suffix("hält", "t", false), "hält");
        assert_eq!(merge_suffix("arbeit", "et", false), "arbeitet");
        assert_ne!(merge_suffix("arbeit", "t", false), "arbeitt");
    }

    #[test]
    fn test_merge_sibilant_rule_precedes_others() {
        // "s"-initial suffix is checked first even when e-elision is on.
        assert_eq!(merge_suffix("lies", "st", true), "liest");
    }
}
