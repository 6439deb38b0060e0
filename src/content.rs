//! Read-only content tables
//!
//! The engine never interprets these strings; it only indexes into them and
//! substitutes the recipient's name for the `{{name}}` token.

use serde::{Deserialize, Serialize};

/// Placeholder replaced with the recipient's name
pub const NAME_TOKEN: &str = "{{name}}";

/// The eight days of Valentine's week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Rose,
    Propose,
    Chocolate,
    Teddy,
    Promise,
    Hug,
    Kiss,
    Valentine,
}

impl Day {
    pub const ALL: [Day; 8] = [
        Day::Rose,
        Day::Propose,
        Day::Chocolate,
        Day::Teddy,
        Day::Promise,
        Day::Hug,
        Day::Kiss,
        Day::Valentine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Rose => "rose",
            Day::Propose => "propose",
            Day::Chocolate => "chocolate",
            Day::Teddy => "teddy",
            Day::Promise => "promise",
            Day::Hug => "hug",
            Day::Kiss => "kiss",
            Day::Valentine => "valentine",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Day::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

/// Which message list a screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKey {
    Day(Day),
    Completion,
}

/// Menu tile for a day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayInfo {
    pub day: Day,
    pub date: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub tagline: &'static str,
}

/// Supplies display strings to the screen flow
pub trait ContentProvider {
    /// Ordered message templates (may contain the name token)
    fn messages(&self, key: ContentKey) -> &[&str];

    /// Activity ideas for a day
    fn activities(&self, _day: Day) -> &[&str] {
        &[]
    }

    /// Quote shown under a day's title
    fn quote(&self, _day: Day) -> &str {
        ""
    }

    /// Token substituted with the recipient's name
    fn name_token(&self) -> &str {
        NAME_TOKEN
    }
}

/// Replace every occurrence of `token` in `template` with `name`
pub fn format_message(template: &str, token: &str, name: &str) -> String {
    if token.is_empty() {
        return template.to_string();
    }
    template.replace(token, name)
}

/// Built-in Valentine's week tables
#[derive(Debug, Clone, Copy, Default)]
pub struct ValentineContent;

impl ValentineContent {
    pub fn days(&self) -> &'static [DayInfo] {
        &VALENTINE_DAYS
    }

    pub fn day_info(&self, day: Day) -> &'static DayInfo {
        &VALENTINE_DAYS[day_index(day)]
    }
}

impl ContentProvider for ValentineContent {
    fn messages(&self, key: ContentKey) -> &[&str] {
        match key {
            ContentKey::Day(day) => DAY_MESSAGES[day_index(day)],
            ContentKey::Completion => &COMPLETION_MESSAGES,
        }
    }

    fn activities(&self, day: Day) -> &[&str] {
        DAY_ACTIVITIES[day_index(day)]
    }

    fn quote(&self, day: Day) -> &str {
        DAY_QUOTES[day_index(day)]
    }
}

fn day_index(day: Day) -> usize {
    day as usize
}

static VALENTINE_DAYS: [DayInfo; 8] = [
    DayInfo {
        day: Day::Rose,
        date: "Feb 7",
        name: "Rose Day",
        emoji: "🌹",
        tagline: "Express your love with roses",
    },
    DayInfo {
        day: Day::Propose,
        date: "Feb 8",
        name: "Propose Day",
        emoji: "💍",
        tagline: "Pop the question",
    },
    DayInfo {
        day: Day::Chocolate,
        date: "Feb 9",
        name: "Chocolate Day",
        emoji: "🍫",
        tagline: "Sweeten the moment",
    },
    DayInfo {
        day: Day::Teddy,
        date: "Feb 10",
        name: "Teddy Day",
        emoji: "🧸",
        tagline: "Cuddles & comfort",
    },
    DayInfo {
        day: Day::Promise,
        date: "Feb 11",
        name: "Promise Day",
        emoji: "🤞",
        tagline: "Pledge your heart",
    },
    DayInfo {
        day: Day::Hug,
        date: "Feb 12",
        name: "Hug Day",
        emoji: "🤗",
        tagline: "Warm embraces",
    },
    DayInfo {
        day: Day::Kiss,
        date: "Feb 13",
        name: "Kiss Day",
        emoji: "💋",
        tagline: "Sealed with a kiss",
    },
    DayInfo {
        day: Day::Valentine,
        date: "Feb 14",
        name: "Valentine's Day",
        emoji: "💝",
        tagline: "Celebrate your love",
    },
];

static DAY_MESSAGES: [&[&str]; 8] = [
    &[
        "A single rose can be my garden... a single friend, my world {{name}} 🌹",
        "{{name}}, you're the most beautiful bloom in my garden of life ✨",
        "Every petal whispers how much I love you {{name}} 🌸",
    ],
    &[
        "{{name}}, will you be my forever? 💍",
        "I want to grow old with you {{name}}, will you let me? ✨",
        "My heart has been searching, and it found you {{name}} 💕",
    ],
    &[
        "{{name}}, you're sweeter than the finest chocolate 🍫",
        "You melt my heart like chocolate melts on my tongue {{name}} ✨",
        "Sweet moments with you, {{name}}, are my favorite treats 🍬",
    ],
    &[
        "{{name}}, you're as huggable as the cutest teddy bear 🧸",
        "Hold this teddy {{name}} when I'm not there, it carries my love 💕",
        "My teddy for my teddy bear {{name}} 🤗",
    ],
    &[
        "I promise to love you in every version of yourself {{name}} 💚",
        "My promise {{name}}: to stand by you through every storm 🌟",
        "Pinky promise to be your forever partner {{name}} 🤞",
    ],
    &[
        "A hug from you, {{name}}, makes everything better 🤗",
        "In your embrace, {{name}}, I find my happy place 💕",
        "Every hug from you {{name}} heals my soul 💖",
    ],
    &[
        "{{name}}, your kisses are my favorite addiction 💋",
        "Every kiss tells a story of how much I love you {{name}} 💕",
        "Sealed with a kiss, forever in my heart {{name}} ✨",
    ],
    &[
        "You're my today, tomorrow, and forever {{name}} 💝",
        "Every day is Valentine's Day when I'm with you {{name}} ✨",
        "{{name}}, you're the love story I always wanted to live 💕",
    ],
];

static DAY_ACTIVITIES: [&[&str]; 8] = [
    &[
        "Gift a red rose 🌹",
        "Write a love poem 📝",
        "Take romantic photos 📸",
    ],
    &[
        "Express your feelings 💌",
        "Plan a surprise proposal 🎁",
        "Write a heartfelt letter 📝",
    ],
    &[
        "Gift chocolates 🍫",
        "Bake chocolate treats together 🧁",
        "Create a sweet care package 🎁",
    ],
    &[
        "Gift a teddy bear 🧸",
        "Plan a cozy movie night 🎬",
        "Share childhood memories 📖",
    ],
    &[
        "Make meaningful promises 💍",
        "Write a promise letter 📝",
        "Create a future bucket list 📋",
    ],
    &[
        "Give a long warm hug 🤗",
        "Surprise with a back hug 💕",
        "Create a hug coupon book 🎟️",
    ],
    &[
        "Steal a sweet kiss 💋",
        "Watch a romantic movie 🎬",
        "Create a kissing booth 💕",
    ],
    &[
        "Exchange heartfelt gifts 🎁",
        "Go on a romantic date 🍽️",
        "Create lasting memories 📸",
    ],
];

static DAY_QUOTES: [&str; 8] = [
    "Where flowers bloom, so does hope.",
    "The best thing to hold onto in life is each other.",
    "All you need is love and a little chocolate.",
    "Some things don't need to be perfect; they just need to be cuddly.",
    "A promise made is a debt unpaid.",
    "A hug is a handshake from the heart.",
    "A kiss is a lovely trick designed by nature.",
    "You are my Valentine every day of the year.",
];

static COMPLETION_MESSAGES: [&str; 5] = [
    "{{name}}, you're the reason my heart beats faster 💓",
    "Every love story is beautiful, but ours is my favorite 💝",
    "In a sea of people, my eyes will always search for you 🌹",
    "You had me at hello... and every moment since ✨",
    "{{name}}, my heart is, and always will be, yours 💘",
];
