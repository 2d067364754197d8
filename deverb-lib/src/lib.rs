pub mod features;
pub mod error;
pub mod stem;
pub mod pattern;
pub mod inflect;
pub mod verb;
pub mod lexicon;
pub mod phrase;
pub mod order;
pub mod agreement;
pub mod cluster;
pub mod clause;
pub mod output;

pub use clause::{CaseAssignment, RealisedClause, VerbPhrase};
pub use cluster::{build_verb_group, GroupFeatures, VerbGroup};
pub use error::{Error, Result};
pub use features::{
    AuxType, Case, DiscourseFunction, Form, Gender, InterrogativeType, NumberAgr, Person,
    Position, Tense, VerbType,
};
pub use lexicon::Lexicon;
pub use order::WordOrder;
pub use pattern::InflectionPattern;
pub use phrase::{Determiner, PhraseId, Phrases};
pub use verb::{IrregularForms, Verb};
