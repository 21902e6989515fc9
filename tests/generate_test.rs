use std::thread;

use promptsmith::generate::Generated;
use promptsmith::rng::{SeededRandom, ThreadRandom};
use promptsmith::{generate, Controls, GenerateError, Generator, Store};

#[test]
fn test_single_count_returns_bare_prompt() {
    for category in ["writing", "aiArt", "blog", "fantasy", "persuasive"] {
        let mut rng = ThreadRandom::new();
        let out = generate(Store::builtin(), category, 1, &Controls::new(), &mut rng).unwrap();
        match out {
            Generated::Single(p) => {
                assert_eq!(p.category(), category);
                assert!(!p.text().is_empty());
                assert!(!p.is_multiple());
            }
            Generated::Batch(_) => panic!("{} returned a list for count 1", category),
        }
    }
}

#[test]
fn test_batch_has_requested_length() {
    let mut rng = ThreadRandom::new();
    for n in [2, 5, 25] {
        let out = generate(Store::builtin(), "fantasy", n, &Controls::new(), &mut rng).unwrap();
        assert!(matches!(out, Generated::Batch(_)));
        assert_eq!(out.len(), n);
        assert!(out.prompts().iter().all(|p| p.category() == "fantasy"));
    }
}

#[test]
fn test_duplicates_are_allowed() {
    // persuasive has twelve entries; fifty draws must repeat one
    let mut rng = ThreadRandom::new();
    let out = generate(Store::builtin(), "persuasive", 50, &Controls::new(), &mut rng).unwrap();
    let mut texts: Vec<&str> = out.prompts().iter().map(|p| p.text()).collect();
    texts.sort_unstable();
    texts.dedup();
    assert!(texts.len() < 50);
}

#[test]
fn test_template_output_has_no_raw_tokens() {
    let mut rng = ThreadRandom::new();
    for category in ["writing", "aiArt", "blog", "fantasy"] {
        let out = generate(Store::builtin(), category, 200, &Controls::new(), &mut rng).unwrap();
        for p in out.prompts() {
            assert!(!p.text().contains('{'), "{}: {}", category, p.text());
        }
    }
}

#[test]
fn test_unknown_category_is_reported() {
    let mut rng = SeededRandom::new(1);
    let err = generate(Store::builtin(), "recipes", 3, &Controls::new(), &mut rng).unwrap_err();
    assert_eq!(err, GenerateError::UnknownCategory("recipes".to_string()));
    assert_eq!(err.to_string(), "unknown category: recipes");
}

#[test]
fn test_seeded_generators_agree() {
    let run = || {
        let mut gen = Generator::builtin().with_seed(123);
        gen.generate("aiArt", 10, &Controls::new())
            .unwrap()
            .into_vec()
            .into_iter()
            .map(|p| p.text().to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_concurrent_generation_shares_the_store() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let mut gen = Generator::builtin();
                let category = ["writing", "names", "persuasive", "blog"][i % 4];
                gen.generate(category, 20, &Controls::new()).map(|g| g.len())
            })
        })
        .collect();
    for h in handles {
        let len = h.join().unwrap().unwrap();
        assert!(len == 20 || len == 1);
    }
}

#[test]
fn test_ids_are_distinct_within_a_batch() {
    let mut gen = Generator::builtin().with_seed(8);
    let out = gen.generate("writing", 30, &Controls::new()).unwrap();
    let mut ids: Vec<&str> = out.prompts().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 30);
}
