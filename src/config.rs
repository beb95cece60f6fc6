use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, FuzzyMatcher, Matcher, Result, SubstringMatcher, WordsMatcher};

/// Which of the built-in matchers to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatcherKind {
    #[default]
    Substring,
    Words,
    Fuzzy,
}

impl MatcherKind {
    pub fn build(self) -> Box<dyn Matcher> {
        match self {
            MatcherKind::Substring => Box::new(SubstringMatcher),
            MatcherKind::Words => Box::new(WordsMatcher),
            MatcherKind::Fuzzy => Box::new(FuzzyMatcher::skim()),
        }
    }
}

impl FromStr for MatcherKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "substring" => Ok(MatcherKind::Substring),
            "words" => Ok(MatcherKind::Words),
            "fuzzy" => Ok(MatcherKind::Fuzzy),
            _ => Err(Error::UnknownMatcher(s.to_owned())),
        }
    }
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MatcherKind::Substring => "substring",
            MatcherKind::Words => "words",
            MatcherKind::Fuzzy => "fuzzy",
        })
    }
}

/// Order of the completion results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ranking {
    /// Keep the order of the candidate list.
    #[default]
    Stable,

    /// Best score first, ties keep the order of the candidate list.
    Score,
}

impl FromStr for Ranking {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "stable" => Ok(Ranking::Stable),
            "score" => Ok(Ranking::Score),
            _ => Err(Error::UnknownRanking(s.to_owned())),
        }
    }
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Ranking::Stable => "stable",
            Ranking::Score => "score",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub matcher: MatcherKind,
    pub ranking: Ranking,

    /// Maximum number of results, unlimited if not set.
    pub limit: Option<usize>,
}

impl Config {
    /// Reads a configuration from a JSON file. Missing fields take their default.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let fp = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(fp))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitive() {
        assert_eq!("Fuzzy".parse::<MatcherKind>().unwrap(), MatcherKind::Fuzzy);
        assert_eq!("words".parse::<MatcherKind>().unwrap(), MatcherKind::Words);
        assert_eq!("SCORE".parse::<Ranking>().unwrap(), Ranking::Score);
        assert!(matches!("regex".parse::<MatcherKind>(), Err(Error::UnknownMatcher(_))));
        assert!(matches!("random".parse::<Ranking>(), Err(Error::UnknownRanking(_))));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for kind in [MatcherKind::Substring, MatcherKind::Words, MatcherKind::Fuzzy] {
            assert_eq!(kind.to_string().parse::<MatcherKind>().unwrap(), kind);
        }
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: Config = serde_json::from_str(r#"{ "matcher": "fuzzy" }"#).unwrap();
        assert_eq!(config, Config { matcher: MatcherKind::Fuzzy, ranking: Ranking::Stable, limit: None });
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(serde_json::from_str::<Config>(r#"{ "matcher": "fuzzy", "minify": true }"#).is_err());
    }

    #[test]
    fn reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("autocomplete.json");
        std::fs::write(&path, r#"{ "ranking": "score", "limit": 5 }"#).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.ranking, Ranking::Score);
        assert_eq!(config.limit, Some(5));
    }
}
