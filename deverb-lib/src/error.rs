// Errors reported to callers that misconfigure a verb phrase.

use crate::features::DiscourseFunction;
use crate::phrase::PhraseId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "complements of a verb phrase can only be assigned the functions \
         OBJECT, GENITIVE_OBJECT, INDIRECT_OBJECT, SUBJECT (got {0:?})"
    )]
    UnsupportedFunction(DiscourseFunction),

    #[error("phrase {0} is not part of the phrase arena")]
    UnknownPhrase(PhraseId),
}

pub type Result<T> = std::result::Result<T, Error>;
