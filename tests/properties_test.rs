use autocomplete::{
    matcher_fn, Completer, FuzzyMatcher, Highlight, Item, MatchResult, Matcher, SubstringMatcher,
    WordsMatcher,
};
use proptest::prelude::*;

fn matchers() -> Vec<(&'static str, Box<dyn Matcher>)> {
    vec![
        ("substring", Box::new(SubstringMatcher) as Box<dyn Matcher>),
        ("words", Box::new(WordsMatcher) as Box<dyn Matcher>),
        ("fuzzy", Box::new(FuzzyMatcher::skim()) as Box<dyn Matcher>),
    ]
}

fn check_well_formed(name: &str, text: &str, result: &MatchResult) {
    if !result.matches {
        assert!(result.highlights.is_empty(), "{name}: highlights without match for {text:?}");
    }

    for hl in &result.highlights {
        assert!(hl.start < hl.end, "{name}: empty range {hl:?} for {text:?}");
        assert!(hl.end <= text.len(), "{name}: {hl:?} out of bounds for {text:?}");
        assert!(text.is_char_boundary(hl.start) && text.is_char_boundary(hl.end), "{name}: {hl:?} splits a char of {text:?}");
    }

    for pair in result.highlights.windows(2) {
        assert!(pair[0].end < pair[1].start, "{name}: {:?} and {:?} are not disjoint and sorted", pair[0], pair[1]);
    }
}

proptest! {
    #[test]
    fn results_are_well_formed(search in "[a-cA-CäÄİΣσς ]{0,4}", text in "[a-cA-CäÄİΣσς _]{0,12}") {
        for (name, matcher) in matchers() {
            let result = matcher.compile(&search).evaluate(&text);
            check_well_formed(name, &text, &result);
        }
    }

    #[test]
    fn every_text_matches_itself(text in "[a-cA-CäÄİΣσς _]{0,12}") {
        prop_assume!(!text.trim().is_empty());

        for (name, matcher) in matchers() {
            let result = matcher.compile(&text).evaluate(&text);
            prop_assert!(result.matches, "{} does not match {:?} against itself", name, text);
            check_well_formed(name, &text, &result);
        }
    }

    #[test]
    fn completer_normalizes_or_rejects_custom_ranges(
        text in "[a-cäΣ ]{0,8}",
        ranges in prop::collection::vec((0usize..20, 0usize..20), 0..6),
    ) {
        let highlights = ranges.iter()
            .map(|&(start, end)| Highlight::new(start, end))
            .collect::<Vec<_>>();

        let reported = highlights.clone();
        let completer = Completer::new(matcher_fn(move |_search: &str| {
            let reported = reported.clone();
            move |_text: &str| MatchResult::matched(reported.clone())
        }));

        let items: Vec<Item> = vec![Item::plain(text.clone())];
        let all_valid = highlights.iter().all(|hl| hl.validate(&text).is_ok());

        match completer.evaluate("any", &items) {
            Ok(results) => {
                prop_assert!(all_valid, "accepted invalid ranges {:?} for {:?}", highlights, text);
                prop_assert_eq!(results.len(), 1);
                prop_assert!(results[0].matches);
                check_well_formed("custom", &text, &results[0]);
            }

            Err(_) => prop_assert!(!all_valid, "rejected valid ranges {:?} for {:?}", highlights, text),
        }
    }

    #[test]
    fn evaluation_is_idempotent(search in "[a-z ]{0,4}", text in "[a-zA-Z ]{0,16}") {
        for (_name, matcher) in matchers() {
            let compiled = matcher.compile(&search);
            prop_assert_eq!(compiled.evaluate(&text), compiled.evaluate(&text));
        }
    }

    #[test]
    fn substring_highlight_spells_the_search(prefix in "[a-z]{0,5}", needle in "[a-z]{1,4}", suffix in "[a-z]{0,5}") {
        let text = format!("{prefix}{}{suffix}", needle.to_uppercase());
        let result = SubstringMatcher.compile(&needle).evaluate(&text);

        prop_assert!(result.matches);
        prop_assert_eq!(result.highlights.len(), 1);
        prop_assert_eq!(text[result.highlights[0].range()].to_lowercase(), needle);
    }
}
