// Mittelfeld word-order permutations.

use serde::{Deserialize, Serialize};

use crate::features::Position;

/// Order of the subject (S), object (O) and indirect object (I) slot groups.
/// Every order starts with VORFELD, FRONT and ends with DEFAULT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WordOrder {
    #[default]
    Sio,
    Soi,
    Osi,
    Ois,
    Ios,
    Iso,
}

const S: [Position; 3] = [Position::PreSubject, Position::Subject, Position::PostSubject];
const O: [Position; 4] = [Position::PreObject, Position::GenitiveObject, Position::Object, Position::PostObject];
const I: [Position; 3] = [Position::PreIndirectObject, Position::IndirectObject, Position::PostIndirectObject];

const fn order(a: &[Position], b: &[Position], c: &[Position]) -> [Position; 13] {
    let mut out = [Position::Default; 13];
    out[0] = Position::Vorfeld;
    out[1] = Position::Front;
    let mut n = 2;
    let groups = [a, b, c];
    let mut g = 0;
    while g < groups.len() {
        let mut i = 0;
        while i < groups[g].len() {
            out[n] = groups[g][i];
            n += 1;
            i += 1;
        }
        g += 1;
    }
    out[12] = Position::Default;
    out
}

const SIO: [Position; 13] = order(&S, &I, &O);
const SOI: [Position; 13] = order(&S, &O, &I);
const OSI: [Position; 13] = order(&O, &S, &I);
const OIS: [Position; 13] = order(&O, &I, &S);
const IOS: [Position; 13] = order(&I, &O, &S);
const ISO: [Position; 13] = order(&I, &S, &O);

impl WordOrder {
    pub fn positions(self) -> &'static [Position] {
        match self {
            WordOrder::Sio => &SIO,
            WordOrder::Soi => &SOI,
            WordOrder::Osi => &OSI,
            WordOrder::Ois => &OIS,
            WordOrder::Ios => &IOS,
            WordOrder::Iso => &ISO,
        }
    }

    /// The order that puts `position`'s group first while keeping the
    /// relative order of the other two where possible. Non-complement
    /// positions leave the order unchanged.
    pub fn fronted_variant(self, position: Position) -> WordOrder {
        use WordOrder::*;
        match (position, self) {
            (Position::Subject, Ios | Iso) => Sio,
            (Position::Subject, Osi | Ois) => Soi,
            (Position::Object, Soi | Sio) => Osi,
            (Position::Object, Ios | Iso) => Ois,
            (Position::IndirectObject, Ois | Osi) => Ios,
            (Position::IndirectObject, Sio | Soi) => Iso,
            _ => self,
        }
    }
}
