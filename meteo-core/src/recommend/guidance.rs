use serde::Serialize;

use crate::{
    condition::{ConditionCategory, coarse},
    model::CurrentWeather,
};

/// Longer-form wellness notes for one kind of weather.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuidanceNotes {
    pub ocean: &'static str,
    pub body: &'static str,
    pub mind: &'static str,
    pub activities: [&'static str; 4],
}

/// Notes plus any temperature or humidity advisories that apply right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guidance {
    pub category: ConditionCategory,
    pub notes: &'static GuidanceNotes,
    pub temperature_advisory: Option<&'static str>,
    pub humidity_advisory: Option<&'static str>,
}

static NOTES: [(ConditionCategory, GuidanceNotes); 5] = [
    (
        ConditionCategory::Clear,
        GuidanceNotes {
            ocean: "Perfect day for ocean activities! The clear sky makes it ideal for swimming, surfing, or beach yoga.",
            body: "Great conditions for outdoor exercise. Remember to stay hydrated and use sun protection.",
            mind: "Practice mindful breathing in the fresh air. The ocean breeze is naturally calming.",
            activities: ["Beach Yoga", "Swimming", "Surfing", "Meditation by the Ocean"],
        },
    ),
    (
        ConditionCategory::Rain,
        GuidanceNotes {
            ocean: "The rain replenishes our oceans. Watch the beautiful interaction between rain and sea.",
            body: "Indoor exercises recommended. Focus on flexibility and strength training.",
            mind: "Rain has a natural calming effect. Perfect for indoor meditation.",
            activities: ["Indoor Yoga", "Deep Breathing", "Stretching", "Mindfulness"],
        },
    ),
    (
        ConditionCategory::Clouds,
        GuidanceNotes {
            ocean: "Moderate ocean conditions. Good for gentle water activities.",
            body: "Ideal temperature for outdoor workouts. Cloud cover provides natural protection.",
            mind: "Practice grounding exercises connecting with nature.",
            activities: ["Light Swimming", "Beach Walking", "Tai Chi", "Ocean Meditation"],
        },
    ),
    (
        ConditionCategory::Snow,
        GuidanceNotes {
            ocean: "Observe the ocean's winter beauty. Cold water has unique health benefits.",
            body: "Focus on warming exercises. Consider indoor pool activities.",
            mind: "Practice winter wellness routines. Cold exposure can boost immunity.",
            activities: ["Hot Yoga", "Indoor Swimming", "Breathing Exercises", "Wellness Rituals"],
        },
    ),
    (
        ConditionCategory::Thunderstorm,
        GuidanceNotes {
            ocean: "Appreciate ocean power from a safe distance. Watch the majestic waves.",
            body: "Indoor exercises recommended. Focus on gentle movement and stretching.",
            mind: "Practice indoor meditation. Use the storm's energy for deep relaxation.",
            activities: ["Indoor Meditation", "Gentle Stretching", "Deep Breathing", "Relaxation"],
        },
    ),
];

/// Which notes apply to a condition code. Atmosphere and unknown codes read as clear.
pub fn guidance_category(code: i32) -> ConditionCategory {
    match coarse(code) {
        Some(ConditionCategory::Atmosphere) | None => ConditionCategory::Clear,
        Some(category) => category,
    }
}

pub fn notes(category: ConditionCategory) -> &'static GuidanceNotes {
    NOTES
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, n)| n)
        .unwrap_or(&NOTES[0].1)
}

pub fn temperature_advisory(temperature: f64) -> Option<&'static str> {
    if temperature > 30.0 {
        Some("High temperature alert! Stay hydrated and limit sun exposure.")
    } else if temperature < 10.0 {
        Some("Cold conditions. Warm up properly before any activity.")
    } else {
        None
    }
}

pub fn humidity_advisory(humidity: u8) -> Option<&'static str> {
    if humidity > 70 {
        Some("High humidity. Take breaks and hydrate frequently.")
    } else if humidity < 30 {
        Some("Low humidity. Stay hydrated and moisturize.")
    } else {
        None
    }
}

pub fn guidance(code: i32, temperature: f64, humidity: u8) -> Guidance {
    let category = guidance_category(code);
    Guidance {
        category,
        notes: notes(category),
        temperature_advisory: temperature_advisory(temperature),
        humidity_advisory: humidity_advisory(humidity),
    }
}

/// Guidance for an optional reading; no weather means nothing to show.
pub fn guidance_for(weather: Option<&CurrentWeather>) -> Option<Guidance> {
    weather.map(|w| guidance(w.condition_code, w.temperature, w.humidity))
}
