use super::round_half_up;
use crate::model::CurrentWeather;

pub fn salutation(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

/// One-line description of the current weather at `weather.name`.
pub fn weather_message(weather: &CurrentWeather) -> String {
    let temp = round_half_up(weather.temperature);
    let place = &weather.name;

    if weather.condition.eq_ignore_ascii_case("clear") {
        format!("it's a beautiful sunny day in {place}!")
    } else if temp <= 5.0 {
        format!("bundle up, it's {temp}°C in {place}.")
    } else if temp >= 25.0 {
        format!("it's a warm {temp}°C in {place}.")
    } else {
        format!("it's {temp}°C in {place} with {}.", weather.condition.to_lowercase())
    }
}

/// Full greeting line; without weather only the salutation remains.
pub fn greeting(weather: Option<&CurrentWeather>, hour: u32) -> String {
    match weather {
        Some(w) => format!("{}! {}", salutation(hour), weather_message(w)),
        None => format!("{}!", salutation(hour)),
    }
}
