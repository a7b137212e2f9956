//! Plain-text rendering of core results.

use chrono::Timelike;
use meteo_core::{
    CurrentWeather, DailySummary, Forecast, Place, Recommendation, ThemeMode, TimeRange,
    recommend::{Guidance, round_half_up},
    theme::palette_for_code,
    theme_for,
};

/// Daily rows summarise a whole day, so they use the daytime glyph.
const MIDDAY: u32 = 12;

/// `hour` is the place's local hour, used to pick a day or night glyph.
fn headline(weather: &CurrentWeather, hour: u32) -> String {
    format!("{} {}", weather.category().icon(hour), weather.location_name())
}

pub fn current(weather: &CurrentWeather, mode: ThemeMode, hour: u32) {
    let theme = theme_for(weather.condition_code);
    let palette = palette_for_code(weather.condition_code, mode);

    println!();
    println!("{}", headline(weather, hour));
    println!("  {:.0}°C (feels like {:.0}°C), {}", weather.temperature, weather.feels_like, weather.description);
    println!(
        "  Humidity {}%  Wind {:.1} m/s  Pressure {} hPa",
        weather.humidity, weather.wind_speed, weather.pressure
    );
    println!("  Theme: {theme} ({mode}, primary {}, accent {})", palette.primary, palette.secondary);
}

pub fn recommendations(recs: &[Recommendation]) {
    println!();
    if recs.is_empty() {
        println!("No recommendations right now.");
        return;
    }

    println!("Today's Recommendations");
    for rec in recs {
        println!("  {rec}");
    }
}

pub fn guidance(guidance: &Guidance) {
    println!();
    println!("Wellness");
    println!("  Ocean: {}", guidance.notes.ocean);
    println!("  Body:  {}", guidance.notes.body);
    if let Some(advice) = guidance.temperature_advisory {
        println!("         {advice}");
    }
    println!("  Mind:  {}", guidance.notes.mind);
    if let Some(advice) = guidance.humidity_advisory {
        println!("         {advice}");
    }
    println!("  Try:   {}", guidance.notes.activities.join(", "));
}

pub fn forecast(city: &str, days: &[DailySummary], range: TimeRange) {
    println!();
    if days.is_empty() {
        println!("No forecast data available for {city}.");
        return;
    }

    println!("Forecast for {city} ({range})");
    for day in days {
        println!(
            "  {} {:<3} {:>3.0}°  H:{:.0}° L:{:.0}°  {:<18} {:>3}%  {:>4.0} m/s  rain {:>3.0}%",
            day.category().icon(MIDDAY),
            day.day_label,
            day.current_temperature,
            day.max_temperature,
            day.min_temperature,
            day.description,
            day.humidity,
            day.wind.speed,
            day.precipitation_chance * 100.0,
        );
    }
}

pub fn hourly(forecast: &Forecast) {
    println!();
    if forecast.samples.is_empty() {
        println!("No hourly data available for {}.", forecast.city);
        return;
    }

    println!("Hourly forecast for {}", forecast.city);
    let offset = forecast.offset();
    for sample in &forecast.samples {
        let Some(local) = sample.local_time(offset) else {
            continue;
        };
        println!(
            "  {}  {} {:>3.0}°  {}",
            local.format("%a %I:%M %p"),
            sample.category().icon(local.hour()),
            round_half_up(sample.temperature),
            sample.description,
        );
    }
}

pub fn places(places: &[Place]) {
    if places.is_empty() {
        println!("No matching places.");
        return;
    }

    for (i, place) in places.iter().enumerate() {
        println!("{:>2}. {}  ({:.4}, {:.4})", i + 1, place.label(), place.lat, place.lon);
    }
}
