//! Integration tests for seqdiff
//!
//! These tests verify end-to-end behavior of the comparison session:
//! matching blocks, edit-script assembly, and the popularity heuristic.

use seqdiff::{Match, SequenceDiff, Span, SpanTag};

fn span(tag: SpanTag, a: std::ops::Range<usize>, b: std::ops::Range<usize>) -> Span {
    Span {
        tag,
        a_start: a.start,
        a_end: a.end,
        b_start: b.start,
        b_end: b.end,
    }
}

// ============================================================================
// Edit-script scenarios
// ============================================================================

mod span_scenarios {
    use super::*;

    #[test]
    fn test_poem_replace_equal_replace() {
        let a = [
            "Tulips are yellow,",
            "Violets are blue,",
            "Agar is sweet,",
            "As are you.",
        ];
        let b = [
            "Roses are red,",
            "Violets are blue,",
            "Sugar is sweet,",
            "And so are you.",
        ];

        let diff = SequenceDiff::new(&a, &b);
        let spans: Vec<Span> = diff.spans(false).collect();

        assert_eq!(
            spans,
            vec![
                span(SpanTag::Replace, 0..1, 0..1),
                span(SpanTag::Equal, 1..2, 1..2),
                span(SpanTag::Replace, 2..4, 2..4),
            ]
        );
    }

    #[test]
    fn test_empty_a_is_single_insert() {
        let a: [&str; 0] = [];
        let b = ["x"];

        let diff = SequenceDiff::new(&a, &b);
        let spans: Vec<Span> = diff.spans(false).collect();

        assert_eq!(spans, vec![span(SpanTag::Insert, 0..0, 0..1)]);
    }

    #[test]
    fn test_empty_b_is_single_delete() {
        let a = ["x"];
        let b: [&str; 0] = [];

        let diff = SequenceDiff::new(&a, &b);
        let spans: Vec<Span> = diff.spans(false).collect();

        assert_eq!(spans, vec![span(SpanTag::Delete, 0..1, 0..0)]);
    }

    #[test]
    fn test_both_empty_is_empty_script() {
        let a: [&str; 0] = [];
        let diff = SequenceDiff::new(&a, &a);
        assert_eq!(diff.spans(false).count(), 0);
    }

    #[test]
    fn test_self_diff_is_single_equal_span() {
        let a = ["alpha", "beta", "gamma"];
        let diff = SequenceDiff::new(&a, &a);
        let spans: Vec<Span> = diff.spans(false).collect();

        assert_eq!(spans, vec![span(SpanTag::Equal, 0..3, 0..3)]);
        assert_eq!(diff.spans(true).count(), 0);
    }

    #[test]
    fn test_interleaved_edits_cover_both_sequences() {
        let a: Vec<char> = "qabxcd".chars().collect();
        let b: Vec<char> = "abycdf".chars().collect();

        let diff = SequenceDiff::new(&a, &b);
        let spans: Vec<Span> = diff.spans(false).collect();

        assert_eq!(
            spans,
            vec![
                span(SpanTag::Delete, 0..1, 0..0),
                span(SpanTag::Equal, 1..3, 0..2),
                span(SpanTag::Replace, 3..4, 2..3),
                span(SpanTag::Equal, 4..6, 3..5),
                span(SpanTag::Insert, 6..6, 5..6),
            ]
        );
    }

    #[test]
    fn test_span_slices_match_span_bounds() {
        let a: Vec<char> = "qabxcd".chars().collect();
        let b: Vec<char> = "abycdf".chars().collect();
        let diff = SequenceDiff::new(&a, &b);

        let spans: Vec<Span> = diff.spans(false).collect();
        let slices: Vec<_> = diff.span_slices(false).collect();
        assert_eq!(spans.len(), slices.len());
        for (s, sl) in spans.iter().zip(&slices) {
            assert_eq!(s.tag, sl.tag);
            assert_eq!(sl.a, &a[s.a_range()]);
            assert_eq!(sl.b, &b[s.b_range()]);
        }
    }
}

// ============================================================================
// Matching blocks
// ============================================================================

mod block_tests {
    use super::*;

    #[test]
    fn test_blocks_end_with_sentinel() {
        let a: Vec<char> = "private Thread currentThread;".chars().collect();
        let b: Vec<char> = "private volatile Thread currentThread;".chars().collect();

        let diff = SequenceDiff::new(&a, &b);
        let blocks = diff.matching_blocks();

        let sentinel = blocks.last().copied().unwrap();
        assert_eq!(
            sentinel,
            Match {
                a_start: a.len(),
                b_start: b.len(),
                len: 0
            }
        );
        // everything before the sentinel is a real match
        assert!(blocks[..blocks.len() - 1].iter().all(|m| m.len > 0));
    }

    #[test]
    fn test_blocks_are_ordered_and_disjoint() {
        let a: Vec<char> = "qabxcdex".chars().collect();
        let b: Vec<char> = "abycdfxe".chars().collect();

        let diff = SequenceDiff::new(&a, &b);
        let blocks = diff.matching_blocks();

        for pair in blocks.windows(2) {
            assert!(pair[0].a_start + pair[0].len <= pair[1].a_start);
            assert!(pair[0].b_start + pair[0].len <= pair[1].b_start);
        }
    }

    #[test]
    fn test_bounded_query_restricts_the_search() {
        let a: Vec<char> = "abcabc".chars().collect();
        let b: Vec<char> = "abcabc".chars().collect();
        let diff = SequenceDiff::new(&a, &b);

        // restricted to the second half of B, the match must land there
        let m = diff.longest_match(0, 3, 3, 6).unwrap();
        assert_eq!(
            m,
            Match {
                a_start: 0,
                b_start: 3,
                len: 3
            }
        );
    }
}

// ============================================================================
// Popularity heuristic
// ============================================================================

mod popularity_tests {
    use super::*;

    #[test]
    fn test_popular_item_excluded_from_index() {
        // n = 250, threshold = 250/100 + 1 = 3; one item repeated throughout
        let b = vec!["blank"; 250];
        let a = vec!["blank"; 10];
        let diff = SequenceDiff::new(&a, &b);

        assert_eq!(diff.index_stats().popular_items, 1);
        assert_eq!(diff.index_stats().distinct_items, 0);

        // a window containing only the popular item finds no match
        let m = diff.longest_match(0, a.len(), 0, b.len()).unwrap();
        assert_eq!(m.len, 0);
    }

    #[test]
    fn test_short_sequences_are_never_filtered() {
        let b = vec!["blank"; 200];
        let a = vec!["blank"; 10];
        let diff = SequenceDiff::new(&a, &b);

        assert_eq!(diff.index_stats().popular_items, 0);
        let m = diff.longest_match(0, a.len(), 0, b.len()).unwrap();
        assert_eq!(m.len, 10);
    }

    #[test]
    fn test_popular_items_recovered_next_to_anchor() {
        // blank lines around a unique line still diff as equal, because the
        // extension step grows the anchor through unindexed items
        let mut a = vec![""; 150];
        a.push("unique marker");
        a.extend(vec![""; 150]);
        let b = a.clone();

        let diff = SequenceDiff::new(&a, &b);
        let spans: Vec<Span> = diff.spans(false).collect();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].tag, SpanTag::Equal);
        assert_eq!(spans[0].a_range(), 0..a.len());
    }
}

// ============================================================================
// Serialization surface
// ============================================================================

mod serde_tests {
    use super::*;

    #[test]
    fn test_edit_script_round_trips_as_json() {
        let a = ["one", "two"];
        let b = ["one", "2"];
        let diff = SequenceDiff::new(&a, &b);

        let spans: Vec<Span> = diff.spans(false).collect();
        let json = serde_json::to_string(&spans).expect("serialize spans");
        assert!(json.contains("\"equal\""));
        assert!(json.contains("\"replace\""));

        let back: Vec<Span> = serde_json::from_str(&json).expect("deserialize spans");
        assert_eq!(back, spans);
    }
}
