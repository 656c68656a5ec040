pub mod types;

pub use types::{
    Command, DefinitionEntry, ErrorKind, ImageResult, LookupResult, LookupState, Meaning,
    PartOfSpeechGroup, Snapshot,
};
