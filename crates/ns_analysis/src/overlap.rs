use std::collections::{BTreeMap, BTreeSet};

use ns_core::TopicOverlap;

/// Splits topic sets into those shared by all articles and those left over per article.
///
/// An empty input yields empty common topics. Articles with nothing beyond the
/// common topics are left out of the per-article map.
pub fn analyze(topic_sets: &[BTreeSet<String>]) -> TopicOverlap {
    let common_topics = match topic_sets.split_first() {
        Some((first, rest)) => rest.iter().fold(first.clone(), |common, topics| {
            common.intersection(topics).cloned().collect()
        }),
        None => BTreeSet::new(),
    };

    let unique_topics: BTreeMap<usize, BTreeSet<String>> = topic_sets
        .iter()
        .enumerate()
        .filter_map(|(index, topics)| {
            let unique: BTreeSet<String> = topics.difference(&common_topics).cloned().collect();
            (!unique.is_empty()).then_some((index, unique))
        })
        .collect();

    TopicOverlap {
        common_topics,
        unique_topics,
    }
}
