//! Property tests for slicing, overlap, rendering and excerpts

use gazette_core::{
    annotate_all, excerpt, group_hierarchy, overlaps, render_to_string, slice_at_splitpoints,
    Annotation, ExcerptOptions, Node, Span,
};
use proptest::prelude::*;
use regex::Regex;

fn text_and_splitpoints() -> impl Strategy<Value = (String, Vec<usize>)> {
    "[a-zé ,.]{0,40}".prop_flat_map(|text| {
        let len = text.chars().count();
        let points = prop::collection::vec(0..=len, 0..8).prop_map(|mut points| {
            points.sort_unstable();
            points.dedup();
            points
        });
        (Just(text), points)
    })
}

fn text_splitpoints_and_spans() -> impl Strategy<Value = (String, Vec<usize>, Vec<Span>)> {
    text_and_splitpoints().prop_flat_map(|(text, points)| {
        let len = text.chars().count();
        let spans = prop::collection::vec(
            (0..=len).prop_flat_map(move |left| (Just(left), left..=len)),
            0..5,
        )
        .prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(left, right)| Span::new(left, right))
                .collect::<Vec<_>>()
        });
        (Just(text), Just(points), spans)
    })
}

fn strip_markup(rendered: &str) -> String {
    let markup = Regex::new(r#"<span [a-z]+="[^"]*">|</span>"#).unwrap();
    markup.replace_all(rendered, "").into_owned()
}

proptest! {
    #[test]
    fn slicing_round_trips((text, points) in text_and_splitpoints()) {
        let chunks = slice_at_splitpoints(&text, &points, 0);

        prop_assert_eq!(chunks.len(), points.len() + 1);
        let joined: String = chunks.iter().map(|c| c.text.as_str()).collect();
        prop_assert_eq!(joined, text);

        for pair in chunks.windows(2) {
            prop_assert_eq!(pair[0].right(), pair[1].left());
        }
        for chunk in &chunks {
            prop_assert_eq!(chunk.text.chars().count(), chunk.span.len());
        }
    }

    #[test]
    fn overlap_matches_range_intersection(a in 0usize..20, b in 0usize..20, c in 0usize..20, d in 0usize..20) {
        let first = Span::new(a.min(b), a.max(b));
        let second = Span::new(c.min(d), c.max(d));

        prop_assert_eq!(overlaps(&first, &second), overlaps(&second, &first));
        if !first.is_empty() && !second.is_empty() {
            let shared = (first.left..first.right).any(|i| (second.left..second.right).contains(&i));
            prop_assert_eq!(overlaps(&first, &second), shared);
        }
    }

    #[test]
    fn rendering_unannotated_chunks_is_identity((text, points) in text_and_splitpoints()) {
        let chunks = slice_at_splitpoints(&text, &points, 0);
        let groups = group_hierarchy(chunks, &points, &[]);
        let nodes: Vec<Node> = groups.into_iter().map(Node::Branch).collect();

        prop_assert_eq!(render_to_string(&nodes), text);
    }

    #[test]
    fn rendering_never_loses_text((text, points, spans) in text_splitpoints_and_spans()) {
        let annotations = spans
            .iter()
            .enumerate()
            .map(|(i, span)| Annotation::new(format!("e{i}"), *span, "ref"));
        let chunks = annotate_all(slice_at_splitpoints(&text, &points, 0), annotations);
        let nodes: Vec<Node> = chunks.into_iter().map(Node::Leaf).collect();

        prop_assert_eq!(strip_markup(&render_to_string(&nodes)), text);
    }

    #[test]
    fn group_hierarchy_without_splitpoints_keeps_chunks((text, points) in text_and_splitpoints()) {
        let chunks = slice_at_splitpoints(&text, &points, 0);
        let groups = group_hierarchy(chunks.clone(), &[], &[]);

        prop_assert_eq!(groups.len(), 1);
        let expected: Vec<Node> = chunks.into_iter().map(Node::Leaf).collect();
        prop_assert_eq!(&groups[0].children, &expected);
    }

    #[test]
    fn word_excerpts_respect_max_length(words in prop::collection::vec("[a-z<>]{1,30}", 0..80)) {
        let text = words.join(" ");
        let options = ExcerptOptions {
            truncate_length: 50,
            max_length: 120,
            ..Default::default()
        };

        let result = excerpt(&text, &options);
        let body = result.strip_suffix(options.suffix.as_str()).unwrap_or(&result);
        prop_assert!(body.chars().count() <= 120, "body too long: {}", body);
    }
}
