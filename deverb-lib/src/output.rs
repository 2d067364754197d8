// Output formatting for realised clauses.

use crate::clause::RealisedClause;

/// Join words with single spaces, skipping empty ones.
pub fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a clause as a sentence: first letter capitalised, closed with a
/// question mark or a period.
pub fn to_sentence(clause: &RealisedClause, question: bool) -> String {
    let mut chars = clause.text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let end = if question { '?' } else { '.' };
    format!("{}{}{end}", first.to_uppercase(), chars.as_str())
}

/// Clause pieces in bracketed form, for debugging: `[Vorfeld] finite
/// [Mittelfeld] {cluster}`.
pub fn to_bracketed(clause: &RealisedClause) -> String {
    let mittelfeld = clause
        .mittelfeld
        .iter()
        .map(|c| format!("[{c}]"))
        .collect::<Vec<_>>()
        .join(" ");
    let vorfeld = if clause.vorfeld.is_empty() {
        String::new()
    } else {
        format!("[{}]", clause.vorfeld)
    };
    let cluster = if clause.verb_cluster.is_empty() {
        String::new()
    } else {
        format!("{{{}}}", clause.verb_cluster_form())
    };
    join_words(&[
        vorfeld.as_str(),
        clause.finite_verb.as_str(),
        mittelfeld.as_str(),
        cluster.as_str(),
    ])
}
