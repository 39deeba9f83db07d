//! Property-based tests for language aggregation and slug resolution

use proptest::prelude::*;

use repolens::domain::{LanguageBreakdown, RepositorySlug};

fn language_pairs() -> impl Strategy<Value = Vec<(String, u64)>> {
    prop::collection::vec(("[A-Za-z+#]{1,12}", 0u64..1_000_000), 0..12)
}

proptest! {
    #[test]
    fn output_sum_equals_input_sum(pairs in language_pairs()) {
        let input_sum: u64 = pairs.iter().map(|(_, b)| b).sum();
        let breakdown = LanguageBreakdown::aggregate(pairs);

        let output_sum: u64 = breakdown.entries.iter().map(|e| e.bytes).sum();
        prop_assert_eq!(output_sum, input_sum);
        prop_assert_eq!(breakdown.total_bytes, input_sum);
    }

    #[test]
    fn output_length_is_bounded(pairs in language_pairs()) {
        let len = pairs.len();
        let breakdown = LanguageBreakdown::aggregate(pairs);

        let expected = if len > 4 { 5 } else { len };
        prop_assert_eq!(breakdown.len(), expected);
    }

    #[test]
    fn aggregation_is_idempotent(pairs in language_pairs()) {
        let first = LanguageBreakdown::aggregate(pairs.clone());
        let second = LanguageBreakdown::aggregate(pairs);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn kept_entries_are_the_input_prefix_in_order(pairs in language_pairs()) {
        let breakdown = LanguageBreakdown::aggregate(pairs.clone());

        let kept = breakdown.entries.len().min(pairs.len().min(4));
        for i in 0..kept {
            prop_assert_eq!(&breakdown.entries[i].name, &pairs[i].0);
            prop_assert_eq!(breakdown.entries[i].bytes, pairs[i].1);
        }
    }

    #[test]
    fn two_segment_urls_resolve_to_their_tail(
        owner in "[a-z][a-z0-9-]{0,14}",
        repo in "[a-z][a-z0-9-]{0,14}",
    ) {
        let url = format!("https://github.com/{owner}/{repo}");
        let slug = RepositorySlug::resolve(&url).unwrap();
        prop_assert_eq!(slug.owner, owner);
        prop_assert_eq!(slug.repo, repo);
    }

    #[test]
    fn deep_paths_resolve_to_the_last_two_segments(
        prefix in "[a-z]{1,8}",
        owner in "[a-z][a-z0-9-]{0,14}",
        repo in "[a-z][a-z0-9-]{0,14}",
    ) {
        let url = format!("https://example.com/{prefix}/{owner}/{repo}");
        let slug = RepositorySlug::resolve(&url).unwrap();
        prop_assert_eq!(slug.to_string(), format!("{owner}/{repo}"));
    }

    #[test]
    fn single_segment_urls_never_resolve(owner in "[a-z][a-z0-9-]{0,14}") {
        let url = format!("https://github.com/{owner}");
        prop_assert_eq!(RepositorySlug::resolve(&url), None);
    }
}
