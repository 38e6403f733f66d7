// Service exports
pub mod source;

pub use source::{merge_pages, parse_roster, HeroSource, JsonFileSource, SourceError, StaticSource};
