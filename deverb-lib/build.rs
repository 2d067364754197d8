// Parses the seed verb lexicon XML and embeds it as JSON at compile time.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Serialize)]
struct EmbeddedLexicon {
    verbs: Vec<VerbRaw>,
}

#[derive(Serialize, Default)]
struct VerbRaw {
    stem: String,
    past: String,
    part: String,
    alt_sg: String,
    subj2: String,
    pres_part: String,
    /// "haben" or "sein".
    aux: String,
    /// Inflection pattern name; empty selects the default pattern.
    inflection: String,
    /// "main", "modal" or "aux".
    kind: String,
}

fn main() {
    let data_path = Path::new("../data/verbs.xml");
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir).join("verbs.json");

    println!("cargo:rerun-if-changed={}", data_path.display());
    let content = fs::read_to_string(data_path).expect("cannot read data/verbs.xml");
    let verbs = process_xml(&content);

    let json = serde_json::to_string(&EmbeddedLexicon { verbs }).expect("JSON serialization failed");
    fs::write(&out_path, json).expect("cannot write verbs.json");

    println!("cargo:rerun-if-changed=build.rs");
}

fn process_xml(xml: &str) -> Vec<VerbRaw> {
    let mut reader = Reader::from_str(xml);
    let mut verbs = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"verb" => {
                let mut verb = read_verb_attributes(e);
                read_verb_fields(&mut reader, &mut verb);
                if verb.stem.is_empty() {
                    panic!("verb entry without <stem>");
                }
                verbs.push(verb);
            }
            Ok(Event::Eof) => break,
            Err(e) => panic!("XML parse error: {e}"),
            _ => {}
        }
    }

    verbs
}

fn read_verb_attributes(e: &BytesStart) -> VerbRaw {
    let mut verb = VerbRaw::default();
    for attr in e.attributes().filter_map(|a| a.ok()) {
        let value = String::from_utf8_lossy(&attr.value).to_string();
        match attr.key.as_ref() {
            b"aux" => verb.aux = value,
            b"inflection" => verb.inflection = value,
            b"type" => verb.kind = value,
            _ => {}
        }
    }
    verb
}

/// Read the children of the current <verb> element up to its end tag.
fn read_verb_fields(reader: &mut Reader<&[u8]>, verb: &mut VerbRaw) {
    let mut current_field: Option<Vec<u8>> = None;
    let mut current_text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                current_field = Some(e.name().as_ref().to_vec());
                current_text.clear();
            }
            Ok(Event::Text(ref e)) => {
                if current_field.is_some() {
                    current_text.push_str(&e.unescape().unwrap_or_default());
                }
            }
            Ok(Event::End(ref e)) => {
                if e.name().as_ref() == b"verb" {
                    break;
                }
                if let Some(field) = current_field.take() {
                    let value = current_text.trim().to_string();
                    match field.as_slice() {
                        b"stem" => verb.stem = value,
                        b"past" => verb.past = value,
                        b"part" => verb.part = value,
                        b"alt-sg" => verb.alt_sg = value,
                        b"subj2" => verb.subj2 = value,
                        b"pres-part" => verb.pres_part = value,
                        other => panic!("unknown verb field <{}>", String::from_utf8_lossy(other)),
                    }
                }
                current_text.clear();
            }
            Ok(Event::Eof) => panic!("unterminated <verb> element"),
            Err(e) => panic!("XML parse error in verb: {e}"),
            _ => {}
        }
    }
}
