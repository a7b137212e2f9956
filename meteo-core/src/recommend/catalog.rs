//! Hand-authored suggestion pools.

use crate::model::Recommendation;

// Greeting / wellness pools.

pub const OUTDOORS: &[Recommendation] = &[Recommendation::new("🌳", "Nice day to spend time outdoors!")];

pub const COZY: &[Recommendation] = &[
    Recommendation::new("🎬", "Perfect time for a cozy movie day!"),
    Recommendation::new("☕", "Great day for a hot chocolate!"),
    Recommendation::new("📚", "Curl up with a good book!"),
];

pub const LIGHT_ACTIVITY: &[Recommendation] = &[
    Recommendation::new("🏃", "Great weather for a light jog!"),
    Recommendation::new("🚶", "Perfect for a nature walk!"),
];

pub const MILD_OUTDOORS: &[Recommendation] = &[
    Recommendation::new("🧺", "Perfect weather for a picnic!"),
    Recommendation::new("🚴", "Great day for cycling!"),
    Recommendation::new("📸", "Take some outdoor photos!"),
];

pub const HEAT: &[Recommendation] = &[
    Recommendation::new("🏊", "Perfect day for swimming!"),
    Recommendation::new("🍦", "Time for ice cream!"),
    Recommendation::new("⛱️", "Beach day weather!"),
];

pub const RAINY_DAY: &[Recommendation] = &[
    Recommendation::new("🎮", "Perfect for indoor gaming!"),
    Recommendation::new("🍵", "Enjoy a warm cup of tea!"),
    Recommendation::new("🎨", "Try some indoor crafts!"),
];

pub const WINTER: &[Recommendation] = &[
    Recommendation::new("⛄", "Build a snowman!"),
    Recommendation::new("🎿", "Great day for winter sports!"),
    Recommendation::new("🧤", "Bundle up and play in the snow!"),
];

pub const STARGAZING: &[Recommendation] = &[Recommendation::new("✨", "Perfect night for stargazing!")];

// Activity pools.

pub const INDOOR_RELAXING: &[Recommendation] = &[
    Recommendation::new("🎬", "Time for a cozy movie marathon!"),
    Recommendation::new("📚", "Perfect day to catch up on your reading!"),
    Recommendation::new("🧘", "How about some indoor yoga or meditation?"),
    Recommendation::new("🧩", "Great time to start that puzzle!"),
    Recommendation::new("🍲", "Cook something warm and comforting!"),
];

pub const INDOOR_ACTIVE: &[Recommendation] = &[
    Recommendation::new("💪", "Try an indoor workout session!"),
    Recommendation::new("💃", "Perfect time for some dancing!"),
    Recommendation::new("🧗", "How about indoor rock climbing?"),
    Recommendation::new("🏛️", "Visit a local museum or art gallery!"),
];

pub const OUTDOOR_RELAXING: &[Recommendation] = &[
    Recommendation::new("🧺", "Perfect weather for a picnic!"),
    Recommendation::new("🌿", "Take a peaceful nature walk!"),
    Recommendation::new("📸", "Great day for photography!"),
    Recommendation::new("🌱", "Try some gardening!"),
];

pub const OUTDOOR_ACTIVE: &[Recommendation] = &[
    Recommendation::new("🏃", "Perfect weather to go for a run!"),
    Recommendation::new("🚴", "Great conditions for cycling!"),
    Recommendation::new("⛰️", "How about a hiking adventure?"),
    Recommendation::new("🧘", "Perfect day for outdoor yoga!"),
];

/// The first two outdoor-active entries, offered on chilly days.
pub const OUTDOOR_ACTIVE_SHORT: &[Recommendation] = &[OUTDOOR_ACTIVE[0], OUTDOOR_ACTIVE[1]];

pub const WATER: &[Recommendation] = &[
    Recommendation::new("🏊", "Perfect day for swimming!"),
    Recommendation::new("🏄", "Go surfing or paddleboarding!"),
    Recommendation::new("🏖️", "Visit the beach!"),
    Recommendation::new("🛶", "Try some kayaking!"),
];

pub const SNOW: &[Recommendation] = &[
    Recommendation::new("⛷️", "Perfect day for skiing!"),
    Recommendation::new("⛄", "Build a snowman!"),
    Recommendation::new("🛷", "Go sledding!"),
    Recommendation::new("❄️", "Have a snowball fight!"),
];

pub const WARM_RAIN: &[Recommendation] = &[Recommendation::new("🌧️", "Dance in the warm rain!")];

pub const BREEZY: &[Recommendation] = &[
    Recommendation::new("🪁", "Great day for flying a kite!"),
    Recommendation::new("⛵", "Perfect conditions for sailing!"),
];
