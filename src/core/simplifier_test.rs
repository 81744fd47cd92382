// Tests for the simplifier
// Test cases:
// - Mixed-case token with a punctuated neighbour is replaced and traced by surface form
// - Strip set only touches token edges
// - Repeated tokens share one trace entry but count every occurrence
// - Blank input yields the empty result
// - Empty definitions are treated as absent

use super::*;

fn glossary(pairs: &[(&str, &str)]) -> Glossary {
    pairs.iter().copied().collect()
}

#[test]
fn test_replaces_case_insensitively_and_reports_confidence() {
    let g = glossary(&[("rapid", "fast")]);

    let result = simplify("This is a RAPID test.", &g);

    assert_eq!(result.simplified_text, "This is a fast test.");
    assert_eq!(result.trace.len(), 1);
    assert_eq!(result.trace.get("RAPID"), Some("fast"));
    assert_eq!(result.confidence, 20.0);
}

#[test]
fn test_trace_keeps_original_punctuation() {
    let g = glossary(&[("rapid", "fast")]);

    let result = simplify("It was RAPID.", &g);

    // The period is stripped for lookup only; it is lost from the output
    // because the whole token is replaced by the definition.
    assert_eq!(result.simplified_text, "It was fast");
    assert_eq!(result.trace.get("RAPID."), Some("fast"));
    assert_eq!(result.confidence, 33.3);
}

#[test]
fn test_lookup_key_strips_edges_only() {
    assert_eq!(lookup_key("(Latency),"), "latency");
    assert_eq!(lookup_key("e.g."), "e.g");
    assert_eq!(lookup_key("a(b)c"), "a(b)c");
    assert_eq!(lookup_key("!rapid!"), "!rapid!");
}

#[test]
fn test_punctuation_outside_strip_set_blocks_match() {
    let g = glossary(&[("rapid", "fast")]);

    let result = simplify("rapid! rapid;", &g);

    assert_eq!(result.simplified_text, "rapid! rapid;");
    assert!(result.trace.is_empty());
    assert_eq!(result.confidence, 0.0);
}

#[test]
fn test_repeated_token_counts_each_occurrence() {
    let g = glossary(&[("utilize", "use"), ("commence", "start")]);

    let result = simplify("utilize commence utilize utilize", &g);

    assert_eq!(result.simplified_text, "use start use use");
    let traced: Vec<(&str, &str)> = result.trace.iter().collect();
    assert_eq!(traced, vec![("utilize", "use"), ("commence", "start")]);
    assert_eq!(result.confidence, 100.0);
}

#[test]
fn test_distinct_surface_forms_get_distinct_trace_entries() {
    let g = glossary(&[("utilize", "use")]);

    let result = simplify("Utilize utilize, UTILIZE", &g);

    assert_eq!(result.trace.len(), 3);
    assert_eq!(
        result.trace.lines(),
        vec!["Utilize → use", "utilize, → use", "UTILIZE → use"]
    );
}

#[test]
fn test_blank_input_yields_empty_result() {
    let g = glossary(&[("rapid", "fast")]);

    for text in ["", "   ", "\n\t "] {
        let result = simplify(text, &g);
        assert_eq!(result, SimplificationResult::empty());
    }
}

#[test]
fn test_whitespace_is_collapsed_to_single_spaces() {
    let g = Glossary::new();

    let result = simplify("  one\ttwo\n\nthree  ", &g);

    assert_eq!(result.simplified_text, "one two three");
}

#[test]
fn test_token_count_is_preserved_for_single_word_definitions() {
    let g = glossary(&[("approximately", "about"), ("terminate", "end")]);
    let text = "We will terminate at approximately noon (approximately).";

    let result = simplify(text, &g);

    assert_eq!(
        result.simplified_text.split(' ').count(),
        text.split_whitespace().count()
    );
}

#[test]
fn test_empty_definition_is_treated_as_absent() {
    let g = glossary(&[("rapid", "")]);

    let result = simplify("rapid", &g);

    assert_eq!(result.simplified_text, "rapid");
    assert!(result.trace.is_empty());
    assert_eq!(result.confidence, 0.0);
}

#[test]
fn test_uppercase_glossary_key_never_matches() {
    let g = glossary(&[("API", "interface")]);

    let result = simplify("api API", &g);

    assert_eq!(result.simplified_text, "api API");
}

#[test]
fn test_glossary_is_not_mutated() {
    let g = glossary(&[("rapid", "fast")]);
    let before = g.clone();

    let _ = simplify("rapid rapid", &g);

    assert_eq!(g, before);
}

#[test]
fn test_confidence_rounding() {
    assert_eq!(confidence(0, 0), 0.0);
    assert_eq!(confidence(1, 3), 33.3);
    assert_eq!(confidence(2, 3), 66.7);
    assert_eq!(confidence(1, 7), 14.3);
    // 6.25 is exact in binary; ties go to even.
    assert_eq!(confidence(1, 16), 6.2);
    assert_eq!(confidence(5, 5), 100.0);
}

#[test]
fn test_confidence_rounds_exact_value_not_scaled_value() {
    // 0.05, 0.95 and 1.15 sit just above or below the tie in binary.
    assert_eq!(confidence(1, 2000), 0.1);
    assert_eq!(confidence(19, 2000), 0.9);
    assert_eq!(confidence(23, 2000), 1.1);
}

#[test]
fn test_single_hit_in_long_text_is_not_rounded_away() {
    let g = glossary(&[("rapid", "fast")]);
    let text = format!("rapid{}", " x".repeat(1999));

    let result = simplify(&text, &g);

    assert_eq!(result.token_count, 2000);
    assert_eq!(result.confidence, 0.1);
    assert_eq!(result.confidence_line(), "Simplification Confidence: 0.1%");
}

#[test]
fn test_information_separators_split_tokens() {
    let g = glossary(&[("rapid", "fast")]);

    let result = simplify("a\u{1c}rapid\u{1d}b\u{1e}c\u{1f}rapid", &g);

    assert_eq!(result.simplified_text, "a fast b c fast");
    assert_eq!(result.token_count, 5);
    assert_eq!(tokenize("\u{1f}\u{1c}"), Vec::<&str>::new());
}

#[test]
fn test_trace_index_tracks_many_surface_forms() {
    let g = glossary(&[("rapid", "fast")]);
    let text = "rapid (rapid ((rapid rapid, (rapid rapid";

    let result = simplify(text, &g);

    let traced: Vec<&str> = result.trace.iter().map(|(k, _)| k).collect();
    assert_eq!(traced, vec!["rapid", "(rapid", "((rapid", "rapid,"]);
    assert_eq!(result.trace.get("((rapid"), Some("fast"));
    assert_eq!(result.trace.get("rapid."), None);
    assert_eq!(result.confidence, 100.0);
}

#[test]
fn test_trace_overwrite_keeps_first_position() {
    let mut trace = Trace::new();

    trace.record("a", "1");
    trace.record("b", "2");
    trace.record("a", "3");

    let entries: Vec<(&str, &str)> = trace.iter().collect();
    assert_eq!(entries, vec![("a", "3"), ("b", "2")]);
    assert_eq!(trace.len(), 2);
}

#[test]
fn test_zero_tokens_display_as_integer_zero() {
    let g = glossary(&[("rapid", "fast")]);

    let empty = simplify(" \t ", &g);
    let none_matched = simplify("slow", &g);

    assert_eq!(empty.confidence_line(), "Simplification Confidence: 0%");
    assert_eq!(none_matched.confidence_line(), "Simplification Confidence: 0.0%");
}
