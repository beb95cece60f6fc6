use std::cmp::Reverse;

use itertools::Itertools;
use log::debug;
use rayon::prelude::*;

use crate::{Config, Item, MatchResult, Matcher, Ranking, Result, ResultListItem};

/// Applies a [`Matcher`] to a list of items and produces the results a renderer shows.
pub struct Completer {
    matcher: Box<dyn Matcher>,
    ranking: Ranking,
    limit: Option<usize>,
}

impl Completer {
    pub fn new(matcher: impl Matcher + 'static) -> Self {
        Self {
            matcher: Box::new(matcher),
            ranking: Ranking::default(),
            limit: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            matcher: config.matcher.build(),
            ranking: config.ranking,
            limit: config.limit,
        }
    }

    pub fn with_ranking(self, ranking: Ranking) -> Self {
        Self { ranking, ..self }
    }

    pub fn with_limit(self, limit: Option<usize>) -> Self {
        Self { limit, ..self }
    }

    /// Evaluates the search against every item, returning one result per item in list order.
    ///
    /// The search is compiled once and the items are evaluated in parallel. Results are
    /// checked and normalized, so a matcher reporting ranges outside of the item text fails
    /// the whole evaluation.
    pub fn evaluate<V: Sync>(&self, search: &str, items: &[Item<V>]) -> Result<Vec<MatchResult>> {
        let compiled = self.matcher.compile(search);

        let results: Vec<MatchResult> = items.par_iter()
            .map(|item| compiled.evaluate(item.key()).checked(item.key()))
            .collect::<Result<_>>()?;

        debug!(
            "search {:?} matched {} of {} items",
            search,
            results.iter().filter(|result| result.matches).count(),
            items.len(),
        );

        Ok(results)
    }

    /// Returns the matching items, ranked and limited according to this completer.
    pub fn complete<'a, V: Sync>(&self, search: &str, items: &'a [Item<V>]) -> Result<Vec<ResultListItem<'a, V>>> {
        let results = self.evaluate(search, items)?;

        let matched = items.iter()
            .zip(results)
            .filter(|(_item, result)| result.matches);

        let ranked = match self.ranking {
            Ranking::Stable => matched.collect_vec(),

            // stable sort, equal scores keep their list order
            Ranking::Score => matched
                .sorted_by_key(|(_item, result)| Reverse(result.score))
                .collect_vec(),
        };

        Ok(ranked.into_iter()
            .take(self.limit.unwrap_or(usize::MAX))
            .enumerate()
            .map(|(index, (item, result))| ResultListItem::new(index, item, result.highlights))
            .collect())
    }
}

impl Default for Completer {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
