use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use daylight::config::Settings;
use daylight::constants::PLACEHOLDER;
use daylight::display::{JsonSink, MemorySink, Slot};
use daylight::geo::{DayTimes, Location, SunTimesProvider, SunriseProvider};
use daylight::time_source::FixedTimeSource;
use daylight::Renderer;

/// No sunrise or sunset on any day.
struct PolarNight;

impl SunTimesProvider for PolarNight {
    fn sun_times(&self, _reference: DateTime<Utc>, _location: &Location) -> DayTimes {
        DayTimes::undefined()
    }
}

fn fixed(y: i32, m: u32, d: u32, h: u32, min: u32) -> FixedTimeSource {
    FixedTimeSource::new(Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap())
}

#[test]
fn test_wassenberg_in_december() {
    let settings = Settings::default();
    let clock = fixed(2026, 12, 21, 11, 0);
    let renderer = Renderer::new(&settings, &SunriseProvider, &clock);

    let mut sink = MemorySink::new();
    renderer.initialize(&mut sink).unwrap();

    assert_eq!(sink.get(Slot::Date), Some("Montag, 21.12.2026"));
    let sunrise = sink.get(Slot::Sunrise).unwrap();
    let sunset = sink.get(Slot::Sunset).unwrap();
    assert!(sunrise.starts_with("08:"), "sunrise {sunrise}");
    assert!(sunset.starts_with("16:"), "sunset {sunset}");

    let day_length = sink.get(Slot::DayLength).unwrap();
    assert!(day_length.starts_with("7:"), "day length {day_length}");

    // The solstice itself is the shortest day or within a minute of it
    let diff = sink.get(Slot::Difference).unwrap();
    assert!(diff == "+0:00 h" || diff == "+0:01 h", "difference {diff}");
}

#[test]
fn test_repeated_renders_are_identical() {
    let settings = Settings::default();
    let clock = fixed(2026, 6, 1, 17, 45);
    let renderer = Renderer::new(&settings, &SunriseProvider, &clock);

    let mut first = MemorySink::new();
    let mut second = MemorySink::new();
    renderer.initialize(&mut first).unwrap();
    renderer.refresh(&mut second).unwrap();
    renderer.refresh(&mut second).unwrap();

    assert_eq!(first.values(), second.values());
}

#[test]
fn test_polar_night_renders_placeholders() {
    let settings = Settings::default();
    let clock = fixed(2026, 1, 10, 12, 0);
    let renderer = Renderer::new(&settings, &PolarNight, &clock);

    let mut sink = MemorySink::new();
    renderer.render(&mut sink).unwrap();

    assert_eq!(sink.get(Slot::ShortestDate), Some(PLACEHOLDER));
    assert_eq!(sink.get(Slot::ShortestLength), Some(PLACEHOLDER));
    assert_eq!(sink.get(Slot::Difference), Some(PLACEHOLDER));
    assert_eq!(sink.get(Slot::Date), Some("Samstag, 10.01.2026"));
}

#[test]
fn test_json_output_has_every_slot() {
    let settings = Settings::default();
    let clock = fixed(2026, 10, 16, 6, 0);
    let renderer = Renderer::new(&settings, &SunriseProvider, &clock);

    let mut sink = JsonSink::new(Vec::new());
    renderer.render(&mut sink).unwrap();

    let output = String::from_utf8(sink.into_inner()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    for slot in Slot::ALL {
        assert!(parsed[slot.id()].is_string(), "missing {}", slot.id());
    }
    assert_eq!(parsed["date"], "Freitag, 16.10.2026");
    assert_eq!(
        parsed["meta"],
        "Wassenberg (DE) · Lat 51.1013, Lon 6.1555 · Zeitzone Europe/Berlin"
    );
}

#[test]
fn test_english_locale_and_southern_hemisphere() {
    let settings = Settings {
        location: Location::new("Sydney (AU)", -33.8688, 151.2093, Tz::Australia__Sydney),
        locale: chrono::Locale::en_US,
        locale_name: "en_US".to_string(),
    };
    let clock = fixed(2026, 3, 1, 0, 0);
    let renderer = Renderer::new(&settings, &SunriseProvider, &clock);

    let mut sink = MemorySink::new();
    renderer.render(&mut sink).unwrap();

    assert_eq!(sink.get(Slot::Date), Some("Sunday, 01.03.2026"));
    let shortest = sink.get(Slot::ShortestDate).unwrap();
    assert!(shortest.ends_with(".06.2026"), "shortest {shortest}");
    assert_eq!(
        sink.get(Slot::Meta),
        Some("Sydney (AU) · Lat -33.8688, Lon 151.2093 · Time zone Australia/Sydney")
    );
}
