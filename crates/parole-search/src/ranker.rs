use parole_config::search::SearchConfig;
use parole_core::{Morphology, normalize};
use parole_types::{Level, QuestionRecord, QuestionType};

use crate::cache::RelatedWordsCache;
use crate::fuzzy::{FuzzyMatcher, MatchError};

/// Morphology-aware ranked search over a question corpus
pub struct SearchRanker<M: Morphology> {
    morphology: M,
    matcher: FuzzyMatcher,
    related: RelatedWordsCache,
    max_related_words: usize,
    related_depth: usize,
}

impl<M: Morphology> SearchRanker<M> {
    pub fn new(morphology: M, config: &SearchConfig) -> Self {
        Self {
            morphology,
            matcher: FuzzyMatcher::new(config),
            related: RelatedWordsCache::new(config.cache_capacity),
            max_related_words: config.max_related_words,
            related_depth: config.related_depth,
        }
    }

    pub fn morphology(&self) -> &M {
        &self.morphology
    }

    /// Drop every memoized related-word expansion
    pub fn clear_cache(&self) {
        self.related.clear();
    }

    /// Search `corpus` for `query`, then keep records matching the filters.
    ///
    /// An empty query returns the filtered corpus in corpus order. Otherwise
    /// records are fuzzy-matched against the normalized query and re-sorted so
    /// those literally containing the query or one of its candidate terms come
    /// first; the fuzzy order is kept inside each group. If fuzzy matching
    /// fails the filtered corpus is returned unranked.
    pub fn perform_search<'c>(
        &self,
        corpus: &'c [QuestionRecord],
        query: &str,
        type_filter: Option<QuestionType>,
        level_filter: Option<Level>,
    ) -> Vec<&'c QuestionRecord> {
        if query.trim().is_empty() {
            return filter_by_type_and_level(corpus, type_filter, level_filter);
        }

        let normalized_query = normalize(query);
        let terms = self.candidate_terms(query);
        tracing::debug!(
            "Searching '{}' with {} candidate terms",
            normalized_query,
            terms.len()
        );

        let mut results = match self.fuzzy_rank(corpus, &normalized_query) {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!("Fuzzy matching failed for '{}': {}", query, e);
                return filter_by_type_and_level(corpus, type_filter, level_filter);
            }
        };

        // Stable: fuzzy order survives inside each tier
        results.sort_by_key(|record| !contains_any(record, &terms));

        filter_by_type_and_level(results, type_filter, level_filter)
    }

    /// Normalized query, its variations and its related words, without
    /// duplicates or empty strings. The query comes first.
    pub fn candidate_terms(&self, query: &str) -> Vec<String> {
        let normalized_query = normalize(query);
        let mut terms = vec![normalized_query];

        let variations = self.morphology.variations(query);
        let related = self.related_terms(query);

        for term in variations
            .into_iter()
            .chain(related.iter().map(|r| normalize(r)))
        {
            if !term.is_empty() && !terms.contains(&term) {
                terms.push(term);
            }
        }

        terms
    }

    /// Related words expanded `related_depth` levels deep, capped at
    /// `max_related_words`. Never includes the query itself.
    pub fn related_terms(&self, query: &str) -> Vec<String> {
        if let Some(cached) = self.related.get(query) {
            return cached;
        }

        let mut found: Vec<String> = Vec::new();
        let mut frontier = vec![query.to_string()];

        for _ in 0..self.related_depth {
            let mut next = Vec::new();
            for word in &frontier {
                for related in self.morphology.related_words(word) {
                    if related != query && !found.contains(&related) {
                        found.push(related.clone());
                        next.push(related);
                    }
                }
            }

            if next.is_empty() {
                break;
            }
            frontier = next;
        }

        found.truncate(self.max_related_words);
        self.related.insert(query.to_string(), found.clone());
        found
    }

    fn fuzzy_rank<'c>(
        &self,
        corpus: &'c [QuestionRecord],
        normalized_query: &str,
    ) -> Result<Vec<&'c QuestionRecord>, MatchError> {
        let pattern = self.matcher.pattern(normalized_query)?;

        let mut scored: Vec<(f64, usize, &QuestionRecord)> = corpus
            .iter()
            .enumerate()
            .filter_map(|(idx, record)| {
                [
                    record.content.as_str(),
                    record.choices_text(),
                    record.normalized_content.as_str(),
                ]
                .into_iter()
                .filter_map(|field| self.matcher.match_field(&pattern, field))
                .map(|found| found.score)
                .min_by(f64::total_cmp)
                .map(|score| (score, idx, record))
            })
            .collect();

        scored.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        tracing::trace!("{} fuzzy matches for '{}'", scored.len(), normalized_query);

        Ok(scored.into_iter().map(|(_, _, record)| record).collect())
    }
}

fn contains_any(record: &QuestionRecord, terms: &[String]) -> bool {
    terms
        .iter()
        .any(|term| record.normalized_content.contains(term.as_str()))
}

/// Exact-match filters on type and level; `None` lets everything through
pub fn filter_by_type_and_level<'c, I>(
    records: I,
    type_filter: Option<QuestionType>,
    level_filter: Option<Level>,
) -> Vec<&'c QuestionRecord>
where
    I: IntoIterator<Item = &'c QuestionRecord>,
{
    records
        .into_iter()
        .filter(|record| type_filter.is_none_or(|t| record.question_type == t))
        .filter(|record| level_filter.is_none_or(|l| record.level == l))
        .collect()
}
