use crate::models::{Hero, HeroId};
use serde_json::Value;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading heroes
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read hero roster: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse hero roster: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Producer of a finite, already de-duplicated hero sequence
///
/// Fetching, pagination and retries live behind this trait; the ranking
/// engine only ever sees the finished list.
pub trait HeroSource {
    fn load(&self) -> Result<Vec<Hero>, SourceError>;
}

/// Heroes already held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticSource(pub Vec<Hero>);

impl HeroSource for StaticSource {
    fn load(&self) -> Result<Vec<Hero>, SourceError> {
        Ok(self.0.clone())
    }
}

/// Roster snapshot stored as JSON on disk
///
/// Accepts a bare array of heroes, a list query envelope
/// (`{"data": {"heroes": [...]}}`) or a single hero envelope
/// (`{"data": {"hero": {...}}}`).
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HeroSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Hero>, SourceError> {
        let raw = std::fs::read_to_string(&self.path)?;
        let heroes = parse_roster(&raw)?;

        tracing::debug!("Loaded {} heroes from {}", heroes.len(), self.path.display());

        Ok(heroes)
    }
}

/// Parse a roster document in any of the accepted shapes
pub fn parse_roster(raw: &str) -> Result<Vec<Hero>, SourceError> {
    let value: Value = serde_json::from_str(raw)?;

    let heroes = match value {
        Value::Array(_) => serde_json::from_value(value)?,
        Value::Object(mut root) => {
            let mut data = match root.remove("data") {
                Some(Value::Object(data)) => data,
                _ => {
                    return Err(SourceError::InvalidResponse(
                        "Missing data object".into(),
                    ))
                }
            };

            if let Some(list) = data.remove("heroes") {
                serde_json::from_value(list)?
            } else if let Some(single) = data.remove("hero") {
                match single {
                    Value::Null => Vec::new(),
                    hero => vec![serde_json::from_value(hero)?],
                }
            } else {
                return Err(SourceError::InvalidResponse(
                    "Missing heroes array".into(),
                ));
            }
        }
        _ => {
            return Err(SourceError::InvalidResponse(
                "Expected an array or object at the top level".into(),
            ))
        }
    };

    Ok(heroes)
}

/// Concatenate result pages, keeping the first occurrence of each hero id
pub fn merge_pages<I>(pages: I) -> Vec<Hero>
where
    I: IntoIterator<Item = Vec<Hero>>,
{
    let mut seen: HashSet<HeroId> = HashSet::new();
    let mut merged = Vec::new();
    let mut dropped = 0usize;

    for page in pages {
        for hero in page {
            if seen.insert(hero.id.clone()) {
                merged.push(hero);
            } else {
                dropped += 1;
            }
        }
    }

    if dropped > 0 {
        tracing::debug!("Dropped {} duplicate heroes while merging pages", dropped);
    }

    merged
}
