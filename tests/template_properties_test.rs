//! Structural properties of template composition against the built-in store.

use promptsmith::compose::{compose, fill_template, template_tokens};
use promptsmith::rng::{SeededRandom, ThreadRandom};
use promptsmith::store::{Category, Strategy, TemplateSet};
use promptsmith::{Controls, Store};
use regex::Regex;
use std::collections::BTreeMap;

fn template_set(name: &str) -> &'static TemplateSet {
    match &Store::builtin().get(name).unwrap().strategy {
        Strategy::Template(set) => set,
        other => panic!("{} is not a template category: {}", name, other.kind()),
    }
}

/// Anchored regex matching `template` with each token replaced by an
/// alternation of its dictionary's exact values.
fn skeleton_regex(set: &TemplateSet, template: &str) -> Regex {
    let token = Regex::new(r"\{(\w+)\}").unwrap();
    let mut pattern = String::from("^");
    let mut last = 0;
    for caps in token.captures_iter(template) {
        let whole = caps.get(0).unwrap();
        pattern.push_str(&regex::escape(&template[last..whole.start()]));
        let values = &set.dictionaries[&caps[1]];
        let alternation: Vec<String> = values.iter().map(|v| regex::escape(v)).collect();
        pattern.push_str(&format!("(?:{})", alternation.join("|")));
        last = whole.end();
    }
    pattern.push_str(&regex::escape(&template[last..]));
    pattern.push('$');
    Regex::new(&pattern).unwrap()
}

#[test]
fn test_every_token_resolves_in_every_template_category() {
    for category in Store::builtin().categories() {
        let Strategy::Template(set) = &category.strategy else {
            continue;
        };
        assert!(!set.templates.is_empty(), "{} has no templates", category.name);
        for template in &set.templates {
            for token in template_tokens(template) {
                assert!(
                    set.dictionaries.contains_key(token),
                    "{}: {{{}}} in {:?} has no dictionary",
                    category.name,
                    token,
                    template
                );
            }
        }
        for (name, values) in &set.dictionaries {
            assert!(!values.is_empty(), "{}.{} is empty", category.name, name);
        }
    }
}

#[test]
fn test_fixed_template_keeps_its_skeleton() {
    let mut rng = ThreadRandom::new();
    for name in ["writing", "aiArt", "blog", "fantasy"] {
        let set = template_set(name);
        let template = &set.templates[0];
        let skeleton = skeleton_regex(set, template);
        for _ in 0..1000 {
            let out = fill_template(set, template, name, &mut rng).unwrap();
            assert!(skeleton.is_match(&out), "{}: {:?} broke {:?}", name, out, template);
        }
    }
}

#[test]
fn test_composed_output_matches_some_template() {
    let mut rng = SeededRandom::new(2024);
    for name in ["writing", "aiArt", "blog", "fantasy"] {
        let set = template_set(name);
        let skeletons: Vec<Regex> = set
            .templates
            .iter()
            .map(|t| skeleton_regex(set, t))
            .collect();
        // compose() does not enhance, so the output is bare template text
        let category = Store::builtin().get(name).unwrap();
        for _ in 0..300 {
            let out = compose(category, &Controls::new(), &mut rng).unwrap();
            assert!(!out.is_multiple);
            assert!(
                skeletons.iter().any(|s| s.is_match(&out.text)),
                "{}: {:?} matches no template",
                name,
                out.text
            );
        }
    }
}

#[test]
fn test_two_element_dictionary_reaches_both_values() {
    let mut dictionaries = BTreeMap::new();
    dictionaries.insert(
        "side".to_string(),
        vec!["heads".to_string(), "tails".to_string()],
    );
    let set = TemplateSet {
        dictionaries,
        templates: vec!["The coin shows {side}.".to_string()],
    };
    let mut rng = ThreadRandom::new();
    let mut heads = 0;
    let mut tails = 0;
    for _ in 0..500 {
        match fill_template(&set, &set.templates[0], "coin", &mut rng)
            .unwrap()
            .as_str()
        {
            "The coin shows heads." => heads += 1,
            "The coin shows tails." => tails += 1,
            other => panic!("value outside dictionary: {}", other),
        }
    }
    assert!(heads > 0 && tails > 0);
}

#[test]
fn test_unknown_token_passes_through_inside_a_builtin_category() {
    let set = template_set("writing");
    let mut rng = SeededRandom::new(1);
    let out = fill_template(set, "start {unknownToken} end", "writing", &mut rng).unwrap();
    assert_eq!(out, "start {unknownToken} end");
}

#[test]
fn test_controls_do_not_change_template_output() {
    let category = Store::builtin().get("writing").unwrap();
    let styled = Controls::new()
        .with("genre", "horror")
        .with("tone", "comic")
        .with("type", "house");
    for seed in 0..20 {
        let plain = compose(category, &Controls::new(), &mut SeededRandom::new(seed)).unwrap();
        let with = compose(category, &styled, &mut SeededRandom::new(seed)).unwrap();
        assert_eq!(plain, with);
    }
}

#[test]
fn test_overlay_category_composes_like_builtin() {
    let mut dictionaries = BTreeMap::new();
    dictionaries.insert("animal".to_string(), vec!["owl".to_string()]);
    let category = Category::new(
        "haiku",
        Strategy::Template(TemplateSet {
            dictionaries,
            templates: vec!["an {animal} at {time}".to_string()],
        }),
    );
    let out = compose(&category, &Controls::new(), &mut SeededRandom::new(0)).unwrap();
    assert_eq!(out.text, "an owl at {time}");
}
