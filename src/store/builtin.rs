use std::collections::BTreeMap;

use super::{Category, Culture, NameBank, PersuasiveBank, Store, Strategy, TemplateSet};
use crate::enhance::{EnhanceMode, Enhancer};

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn template_set(dictionaries: &[(&str, &[&str])], templates: &[&str]) -> Strategy {
    let dictionaries: BTreeMap<String, Vec<String>> = dictionaries
        .iter()
        .map(|(name, items)| (name.to_string(), list(items)))
        .collect();
    Strategy::Template(TemplateSet {
        dictionaries,
        templates: list(templates),
    })
}

pub(super) fn store() -> Store {
    Store::new(vec![
        writing(),
        ai_art(),
        blog(),
        fantasy(),
        persuasive(),
        names(),
    ])
}

fn writing() -> Category {
    let strategy = template_set(
        &[
            (
                "openings",
                &[
                    "The letter arrived three days after the funeral",
                    "Nobody in town remembered the lighthouse keeper's name",
                    "The last train out of the city was running late",
                    "On the morning of her fortieth birthday, the mirror stopped showing her reflection",
                    "The power went out at exactly 3:17 a.m.",
                    "Every Sunday, the same stranger sat in the back pew",
                    "The map had one island that did not exist",
                ],
            ),
            (
                "protagonists",
                &[
                    "a retired detective",
                    "a night-shift nurse",
                    "an estranged twin",
                    "a disgraced chef",
                    "a teenage radio operator",
                    "a widowed beekeeper",
                    "a forger with a conscience",
                ],
            ),
            (
                "settings",
                &[
                    "a coastal village slowly sinking into the sea",
                    "a space station orbiting a dying star",
                    "a 1920s jazz club in Chicago",
                    "an abandoned amusement park",
                    "a monastery high in the Himalayas",
                    "a city where it never stops raining",
                    "a generation ship halfway to its destination",
                ],
            ),
            (
                "conflicts",
                &[
                    "must choose between loyalty and the truth",
                    "is being blackmailed by someone they trusted",
                    "has one night to undo a terrible mistake",
                    "discovers their memories have been altered",
                    "must protect a secret that could start a war",
                    "is hunted for a crime they have not yet committed",
                ],
            ),
            (
                "revelations",
                &[
                    "the narrator has been dead all along",
                    "the villain is trying to prevent a greater catastrophe",
                    "the mentor orchestrated every hardship",
                    "the town itself is alive",
                    "the stolen object was never real",
                    "two rival families share a single ancestor",
                ],
            ),
        ],
        &[
            "{openings}. Write a story about {protagonists} in {settings} who {conflicts}.",
            "Set your story in {settings}. Your main character, {protagonists}, {conflicts}.",
            "Begin with: \"{openings}.\" Then reveal that {revelations}.",
            "Write about {protagonists} who {conflicts}, ending with the revelation that {revelations}.",
            "In {settings}, {protagonists} {conflicts}. Midway through, the reader learns that {revelations}.",
        ],
    );
    Category::new("writing", strategy).with_enhancer(Enhancer::new(
        EnhanceMode::WithProbability(0.3),
        list(&[
            " Focus on the internal conflict.",
            " Tell it from an unexpected point of view.",
            " Use a non-linear timeline.",
            " Keep it under 1,000 words.",
            " Let the setting act as a character.",
        ]),
    ))
}

fn ai_art() -> Category {
    let strategy = template_set(
        &[
            (
                "subjects",
                &[
                    "a lone astronaut",
                    "an ancient oak tree",
                    "a mechanical owl",
                    "a fox wearing a scarf",
                    "a floating city",
                    "a samurai at rest",
                    "a lighthouse in a storm",
                ],
            ),
            (
                "styles",
                &[
                    "watercolor",
                    "cyberpunk",
                    "art nouveau",
                    "studio ghibli style",
                    "oil painting",
                    "low-poly 3D render",
                    "ukiyo-e woodblock print",
                ],
            ),
            (
                "settings",
                &[
                    "a neon-lit alley",
                    "a misty mountain valley",
                    "the surface of Mars",
                    "an overgrown cathedral",
                    "a frozen lake at dawn",
                    "a bustling night market",
                ],
            ),
            (
                "lighting",
                &[
                    "golden hour lighting",
                    "dramatic rim light",
                    "soft volumetric fog",
                    "bioluminescent glow",
                    "harsh noon sun",
                    "candlelight",
                ],
            ),
            (
                "moods",
                &[
                    "melancholic",
                    "serene",
                    "ominous",
                    "whimsical",
                    "triumphant",
                    "dreamlike",
                ],
            ),
        ],
        &[
            "{subjects} in {settings}, {styles}, {lighting}",
            "{styles} painting of {subjects}, {moods} atmosphere, {lighting}",
            "{moods} scene of {subjects} in {settings}, {styles}",
            "portrait of {subjects}, {lighting}, {styles}, {moods} mood",
        ],
    );
    Category::new("aiArt", strategy).with_enhancer(Enhancer::new(
        EnhanceMode::Always,
        list(&[
            ", ultra detailed, 8k resolution",
            ", trending on artstation",
            ", cinematic composition, sharp focus",
            ", highly detailed, octane render",
            ", masterpiece, award-winning",
        ]),
    ))
}

fn blog() -> Category {
    let strategy = template_set(
        &[
            (
                "topics",
                &[
                    "remote work",
                    "personal finance",
                    "home composting",
                    "learning a second language",
                    "minimalist travel",
                    "building a morning routine",
                    "starting a side business",
                ],
            ),
            (
                "audiences",
                &[
                    "complete beginners",
                    "busy parents",
                    "college students",
                    "small business owners",
                    "retirees",
                    "freelancers",
                ],
            ),
            (
                "angles",
                &[
                    "the mistakes nobody talks about",
                    "what the research actually says",
                    "a 30-day experiment",
                    "lessons from failure",
                    "the myths worth ignoring",
                    "how to start with zero budget",
                ],
            ),
            (
                "formats",
                &[
                    "a step-by-step guide",
                    "a listicle",
                    "a personal essay",
                    "a case study",
                    "an expert roundup",
                    "a myth-busting FAQ",
                ],
            ),
        ],
        &[
            "Write {formats} about {topics} for {audiences}, focusing on {angles}.",
            "{topics} for {audiences}: {angles}",
            "Create {formats} exploring {angles} in {topics}.",
            "Explain {topics} to {audiences} through {formats}.",
        ],
    );
    Category::new("blog", strategy).with_enhancer(Enhancer::new(
        EnhanceMode::WithProbability(0.4),
        list(&[
            " Include a compelling call-to-action at the end.",
            " Optimize it for a long-tail keyword.",
            " Open with a surprising statistic.",
            " Add at least three actionable takeaways.",
            " End with a question to spark comments.",
        ]),
    ))
}

fn fantasy() -> Category {
    let strategy = template_set(
        &[
            (
                "races",
                &[
                    "an exiled elven prince",
                    "a dwarven runesmith",
                    "a half-orc scholar",
                    "a goblin merchant",
                    "a dragonborn paladin",
                    "a halfling thief",
                ],
            ),
            (
                "locations",
                &[
                    "the Sunken Citadel",
                    "a floating archipelago",
                    "the Whispering Woods",
                    "a city carved into a glacier",
                    "the ruins of a god's tomb",
                    "the Ashen Wastes",
                ],
            ),
            (
                "artifacts",
                &[
                    "a crown that whispers",
                    "a map drawn in blood",
                    "a sword that cannot be sheathed",
                    "a lantern holding a trapped star",
                    "a book with no final page",
                    "a key to a door that was never built",
                ],
            ),
            (
                "quests",
                &[
                    "must return a stolen heirloom before the new moon",
                    "seeks the cure for a spreading curse",
                    "is sworn to escort a prisoner across enemy lands",
                    "must broker peace between rival clans",
                    "hunts the one who betrayed their order",
                ],
            ),
            (
                "threats",
                &[
                    "an awakening lich",
                    "a plague of living shadows",
                    "a zealous inquisition",
                    "a dragon that has forgotten its name",
                    "a rift leaking wild magic",
                ],
            ),
        ],
        &[
            "In {locations}, {races} {quests}, but {threats} stands in the way.",
            "{races} discovers {artifacts} hidden within {locations}.",
            "Write a tale where {races} {quests}, armed only with {artifacts}.",
            "{threats} has risen near {locations}. Only {races} carrying {artifacts} can stop it.",
        ],
    );
    Category::new("fantasy", strategy).with_enhancer(Enhancer::new(
        EnhanceMode::WithProbability(0.3),
        list(&[
            " Describe the magic system's cost.",
            " Include a prophecy that is misinterpreted.",
            " Give the world a distinctive religion or mythology.",
            " Show how ordinary people survive in this world.",
            " Introduce a political faction with its own agenda.",
        ]),
    ))
}

fn persuasive() -> Category {
    Category::new(
        "persuasive",
        Strategy::Persuasive(PersuasiveBank {
            topics: list(&[
                "Should homework be banned in elementary schools?",
                "Should the voting age be lowered to 16?",
                "Is social media doing more harm than good?",
                "Should cities ban cars from their downtown cores?",
                "Should a four-day work week become standard?",
                "Should college be tuition-free?",
            ]),
            titles: list(&[
                "Why Every School Needs a Later Start Time",
                "The Case for Universal Basic Income",
                "Why Public Libraries Matter More Than Ever",
                "The Hidden Cost of Fast Fashion",
                "Why Remote Work Is Here to Stay",
                "Stop Ignoring the Benefits of Nuclear Energy",
            ]),
        }),
    )
}

fn names() -> Category {
    let culture = |key: &str, first: &[&str], last: &[&str]| Culture {
        key: key.to_string(),
        first: list(first),
        last: list(last),
    };
    Category::new(
        "names",
        Strategy::Names(NameBank {
            cultures: vec![
                culture(
                    "elvish",
                    &["Aelar", "Thalia", "Erevan", "Sylvara", "Galinndan", "Naivara"],
                    &["Moonwhisper", "Silverleaf", "Starbloom", "Amakiir", "Galanodel"],
                ),
                culture(
                    "dwarven",
                    &["Thorin", "Dagna", "Bruenor", "Helja", "Rurik", "Vistra"],
                    &["Ironfist", "Stonehelm", "Battlehammer", "Deepdelver", "Goldvein"],
                ),
                culture(
                    "human",
                    &["Aldric", "Rowena", "Cedric", "Isolde", "Gareth", "Elena"],
                    &["Ashford", "Blackwood", "Hartley", "Thornton", "Whitmore"],
                ),
                culture(
                    "exotic",
                    &["Zephyra", "Kaelith", "Xandros", "Nyxara", "Orrin", "Solenne"],
                    &["Vael'thas", "Dusksong", "Ember-Tide", "Qir'amon", "Veilwalker"],
                ),
            ],
            titles: list(&[
                "the Brave",
                "the Wise",
                "Shadowbane",
                "the Wanderer",
                "Dragonheart",
                "the Unbroken",
            ]),
        }),
    )
}
