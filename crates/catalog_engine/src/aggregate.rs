use std::collections::HashSet;

use engine_logging::{engine_debug, engine_warn};

use crate::GameRecord;

/// Keep the first record per slug, in input order. Records without a usable
/// slug are dropped.
pub fn dedupe_by_slug(records: Vec<GameRecord>) -> Vec<GameRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| match record.key() {
            Some(key) => seen.insert(key.to_owned()),
            None => false,
        })
        .collect()
}

/// Collects records across fetch attempts.
#[derive(Debug, Default)]
pub struct Aggregator {
    raw: Vec<GameRecord>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, batch: Vec<GameRecord>) {
        self.raw.extend(batch);
    }

    /// Records received so far, duplicates included.
    pub fn raw_len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Deduplicated result set. If every record lacked a slug the raw input
    /// is returned as-is rather than nothing.
    pub fn finish(self) -> Vec<GameRecord> {
        let raw_len = self.raw.len();
        if raw_len == 0 {
            return Vec::new();
        }
        let deduped = dedupe_by_slug(self.raw.clone());
        if deduped.is_empty() {
            engine_warn!(
                "None of {} records had a slug; keeping them without deduplication",
                raw_len
            );
            return self.raw;
        }
        engine_debug!("Deduplicated {} records into {}", raw_len, deduped.len());
        deduped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_occurrence_wins() {
        let input = vec![
            GameRecord::new("a").with_rating(4.5),
            GameRecord::new("b").with_rating(3.0),
            GameRecord::new("a").with_rating(1.0),
        ];
        assert_eq!(
            dedupe_by_slug(input),
            vec![
                GameRecord::new("a").with_rating(4.5),
                GameRecord::new("b").with_rating(3.0),
            ]
        );
    }

    #[test]
    fn keyless_records_are_dropped() {
        let input = vec![
            GameRecord::default(),
            GameRecord::new("  "),
            GameRecord::new("c"),
        ];
        assert_eq!(dedupe_by_slug(input), vec![GameRecord::new("c")]);
    }

    #[test]
    fn all_keyless_falls_back_to_raw() {
        let raw = vec![GameRecord::default().with_rating(2.0), GameRecord::default()];
        let mut aggregator = Aggregator::new();
        aggregator.extend(raw.clone());
        assert_eq!(aggregator.finish(), raw);
    }

    #[test]
    fn batches_merge_across_attempts() {
        let mut aggregator = Aggregator::new();
        aggregator.extend(vec![GameRecord::new("a"), GameRecord::new("b")]);
        aggregator.extend(vec![GameRecord::new("b"), GameRecord::new("c")]);
        assert_eq!(aggregator.raw_len(), 4);
        let slugs: Vec<_> = aggregator
            .finish()
            .into_iter()
            .filter_map(|record| record.slug)
            .collect();
        assert_eq!(slugs, vec!["a", "b", "c"]);
    }

    proptest! {
        #[test]
        fn one_entry_per_distinct_slug(keys in proptest::collection::vec(0u8..8, 0..40)) {
            let input: Vec<GameRecord> = keys
                .iter()
                .enumerate()
                .map(|(position, key)| GameRecord::new(format!("s{key}")).with_rating(position as f64))
                .collect();

            let output = dedupe_by_slug(input.clone());

            let mut expected: Vec<GameRecord> = Vec::new();
            for record in input {
                if !expected.iter().any(|kept| kept.slug == record.slug) {
                    expected.push(record);
                }
            }
            prop_assert_eq!(output, expected);
        }
    }
}
