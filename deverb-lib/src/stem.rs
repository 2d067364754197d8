// Baseform parsing, stem detection and umlaut.

use std::sync::LazyLock;

use regex::Regex;

/// Marks the boundary between a separable prefix and the verb ("auf|hören").
pub const PREFIX_DELIMITER: char = '|';

// Last a/o/u nucleus (diphthong au and long aa first) with nothing but
// non-back-vowels after it.
static UMLAUT_NUCLEUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(Au|Aa|au|aa|[aouAOU])[^aouAOU]*$").unwrap());

/// Split a raw baseform into `(prefix, core)`.
///
/// The rightmost `|` wins: "auf|hören" gives ("auf", "hören"). Without a `|`,
/// everything up to and including the last space is the prefix, so a
/// multi-word verb keeps its separator: "Gassi gehen" gives ("Gassi ", "gehen").
pub fn parse_baseform(raw: &str) -> (String, String) {
    if let Some(idx) = raw.rfind(PREFIX_DELIMITER) {
        let prefix = &raw[..idx];
        let core = &raw[idx + PREFIX_DELIMITER.len_utf8()..];
        return (prefix.to_string(), core.to_string());
    }
    if let Some(idx) = raw.rfind(' ') {
        return (raw[..=idx].to_string(), raw[idx + 1..].to_string());
    }
    (String::new(), raw.to_string())
}

/// Present stem: the core form with a trailing "-en" or "-n" removed.
pub fn detect_stem(core: &str) -> String {
    if let Some(stem) = core.strip_suffix("en") {
        stem.to_string()
    } else if let Some(stem) = core.strip_suffix('n') {
        stem.to_string()
    } else {
        core.to_string()
    }
}

/// Umlaut the last a/o/u/au/aa nucleus. Strings without one are returned
/// unchanged. Callers apply this exactly once.
pub fn umlaut(word: &str) -> String {
    let Some(m) = UMLAUT_NUCLEUS.captures(word).and_then(|c| c.get(1)) else {
        return word.to_string();
    };
    let replacement = match m.as_str() {
        "a" | "aa" => "ä",
        "A" | "Aa" => "Ä",
        "o" => "ö",
        "O" => "Ö",
        "u" => "ü",
        "U" => "Ü",
        "au" => "äu",
        "Au" => "Äu",
        other => other,
    };
    format!("{}{}{}", &word[..m.start()], replacement, &word[m.end()..])
}

/// Replace a word-final "ß" with "s".
pub fn convert_final_eszett(word: &str) -> String {
    match word.strip_suffix('ß') {
        Some(rest) => format!("{rest}s"),
        None => word.to_string(),
    }
}
