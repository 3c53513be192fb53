pub mod candidate;
pub mod code;
pub mod symbology;

pub use candidate::{ParsedCandidate, ValidCode};
pub use code::{NormalizedCode, ShapeClass};
pub use symbology::{CheckRule, Symbology};
