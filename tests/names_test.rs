use promptsmith::generate::Generated;
use promptsmith::rng::ThreadRandom;
use promptsmith::store::{Culture, NameBank, Strategy};
use promptsmith::{generate, Controls, Store};

fn bank() -> &'static NameBank {
    match &Store::builtin().get("names").unwrap().strategy {
        Strategy::Names(bank) => bank,
        _ => panic!("names must use the names strategy"),
    }
}

fn culture(key: &str) -> &'static Culture {
    bank().culture(key).unwrap()
}

fn names_text(controls: &Controls) -> (String, bool) {
    let mut rng = ThreadRandom::new();
    match generate(Store::builtin(), "names", 1, controls, &mut rng).unwrap() {
        Generated::Single(p) => (p.text().to_string(), p.is_multiple()),
        Generated::Batch(_) => panic!("names always return one record"),
    }
}

#[test]
fn test_dwarven_origin_never_mixes_cultures() {
    let dwarven = culture("dwarven");
    let controls = Controls::new().with("origin", "dwarven");
    for _ in 0..200 {
        let (text, _) = names_text(&controls);
        let (first, last) = text.split_once(' ').unwrap();
        assert!(dwarven.first.iter().any(|f| f == first), "{}", text);
        assert!(dwarven.last.iter().any(|l| l == last), "{}", text);
    }
}

#[test]
fn test_random_culture_pairs_stay_within_one_culture() {
    let controls = Controls::new().with("origin", "any").with("count", "batch");
    for _ in 0..50 {
        let (text, _) = names_text(&controls);
        for line in text.lines() {
            let (first, last) = line.split_once(' ').unwrap();
            let owner = bank()
                .cultures
                .iter()
                .find(|c| c.first.iter().any(|f| f == first))
                .unwrap();
            assert!(
                owner.last.iter().any(|l| l == last),
                "{} mixes cultures",
                line
            );
        }
    }
}

#[test]
fn test_batch_sizes() {
    let cases = [
        (Some("batch"), 10),
        (Some("multiple"), 5),
        (Some("single"), 1),
        (Some("dozens"), 1),
        (None, 1),
    ];
    for (count, expected) in cases {
        let mut controls = Controls::new();
        if let Some(c) = count {
            controls.set("count", c);
        }
        for _ in 0..20 {
            let (text, is_multiple) = names_text(&controls);
            assert_eq!(text.split('\n').count(), expected, "count {:?}", count);
            assert_eq!(is_multiple, expected > 1);
        }
    }
}

#[test]
fn test_house_format() {
    for key in ["elvish", "dwarven", "human", "exotic"] {
        let c = culture(key);
        let controls = Controls::new().with("origin", key).with("type", "house");
        for _ in 0..50 {
            let (text, _) = names_text(&controls);
            let (first, last) = text.split_once(" of House ").unwrap();
            assert!(c.first.iter().any(|f| f == first), "{}", text);
            assert!(c.last.iter().any(|l| l == last), "{}", text);
        }
    }
}

#[test]
fn test_title_format_uses_shared_titles() {
    let controls = Controls::new().with("origin", "human").with("type", "title");
    let human = culture("human");
    for _ in 0..50 {
        let (text, _) = names_text(&controls);
        let (first, title) = text.split_once(' ').unwrap();
        assert!(human.first.iter().any(|f| f == first));
        assert!(bank().titles.iter().any(|t| t == title), "{}", text);
    }
}

#[test]
fn test_first_format_is_bare_first_name() {
    let controls = Controls::new().with("origin", "elvish").with("type", "first");
    let elvish = culture("elvish");
    for _ in 0..50 {
        let (text, _) = names_text(&controls);
        assert!(elvish.first.iter().any(|f| *f == text));
    }
}

#[test]
fn test_unrecognized_type_falls_back_to_full() {
    let controls = Controls::new().with("origin", "exotic").with("type", "bogus");
    let exotic = culture("exotic");
    let (text, _) = names_text(&controls);
    let (first, last) = text.split_once(' ').unwrap();
    assert!(exotic.first.iter().any(|f| f == first));
    assert!(exotic.last.iter().any(|l| l == last));
}

#[test]
fn test_names_ignore_count_argument() {
    let mut rng = ThreadRandom::new();
    let out = generate(Store::builtin(), "names", 10, &Controls::new(), &mut rng).unwrap();
    assert_eq!(out.len(), 1);
    assert!(!out.prompts()[0].is_multiple());
}
