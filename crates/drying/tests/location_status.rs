use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rockdry_drying::{
    DryingCondition, DryingConfig, DryingStatus, LocationInput, MAX_CONFIDENCE, MIN_CONFIDENCE,
    RockType, compute_location_status,
};
use rockdry_sun::SunExposureProfile;
use rockdry_weather::WeatherSample;

fn start(month: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, month, 1, 0, 0, 0).unwrap()
}

fn rock(name: &str, base: f64, porosity: f64, sensitive: bool) -> RockType {
    RockType {
        name: name.to_string(),
        base_drying_hours: base,
        porosity_percent: porosity,
        is_wet_sensitive: sensitive,
        group_name: String::new(),
    }
}

/// Hourly series with random showers.
fn synthetic_history(n_hours: usize, seed: u64) -> Vec<WeatherSample> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n_hours)
        .map(|h| {
            let precip = if rng.random_bool(0.15) {
                rng.random_range(0.02..0.5)
            } else {
                0.0
            };
            WeatherSample::new(
                start(5) + Duration::hours(h as i64),
                rng.random_range(25.0..85.0),
                precip,
                rng.random_range(20.0..100.0),
                rng.random_range(0.0..30.0),
                rng.random_range(0.0..100.0),
            )
        })
        .collect()
}

/// Neutral hourly series with `rain` inches spread over `rain_hours` hours,
/// ending `dry_hours` before the end of the series.
fn rain_then_dry(month: u32, rain: f64, rain_hours: usize, dry_hours: usize) -> Vec<WeatherSample> {
    let lead = 24;
    let n = lead + rain_hours + dry_hours;
    (0..n)
        .map(|h| {
            let precip = if (lead..lead + rain_hours).contains(&h) {
                rain / rain_hours as f64
            } else {
                0.0
            };
            WeatherSample::new(
                start(month) + Duration::hours(h as i64),
                60.0,
                precip,
                60.0,
                4.0,
                60.0,
            )
        })
        .collect()
}

fn current_after(history: &[WeatherSample]) -> WeatherSample {
    let mut c = *history.last().expect("non-empty history");
    c.timestamp += Duration::hours(1);
    c.precipitation = 0.0;
    c
}

// ---------------------------------------------------------------------------
// 1. verdict invariants hold on arbitrary weather
// ---------------------------------------------------------------------------
#[test]
fn invariants_hold_on_random_weather() {
    let rocks = [rock("Sandstone", 36.0, 15.0, true), rock("Granite", 6.0, 1.0, false)];
    let profile = SunExposureProfile {
        south_facing_percent: 60.0,
        east_facing_percent: 40.0,
        tree_coverage_percent: 20.0,
        ..Default::default()
    };
    let config = DryingConfig::new();

    for seed in 0..40 {
        let history = synthetic_history(120, seed);
        let mut rng = StdRng::seed_from_u64(seed + 1000);
        let mut current = current_after(&history);
        current.precipitation = if rng.random_bool(0.2) { 0.05 } else { 0.0 };
        let snow = rng.random_bool(0.2).then(|| rng.random_range(0.0..6.0));

        for (rock_types, sun) in [(&rocks[..], Some(&profile)), (&rocks[1..], None)] {
            let input = LocationInput {
                rock_types,
                current: &current,
                history: &history,
                sun_profile: sun,
                has_seepage_risk: seed % 3 == 0,
                snow_depth_in: snow,
            };
            let s = compute_location_status(&input, &config).unwrap();

            assert_eq!(s.hours_until_dry == 0.0, !s.is_wet, "seed {seed}: {s:?}");
            assert!(s.hours_until_dry >= 0.0);
            assert!((MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&s.confidence_score));
            if s.is_wet && s.is_wet_sensitive {
                assert_eq!(s.status, DryingStatus::Critical);
                assert!(!s.is_safe);
                assert!(s.message.starts_with("DO NOT CLIMB"));
            }
            if !s.is_wet {
                assert_eq!(s.status, DryingStatus::Good);
                assert!(s.is_safe);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 2. more porous rock never dries sooner
// ---------------------------------------------------------------------------
#[test]
fn hours_until_dry_monotone_in_porosity() {
    let history = rain_then_dry(6, 0.5, 4, 3);
    let current = current_after(&history);
    let config = DryingConfig::new();

    let mut previous = 0.0;
    for porosity in [0.5, 5.0, 12.0, 25.0, 40.0, 60.0] {
        let rocks = [rock("Sandstone", 48.0, porosity, false)];
        let input = LocationInput {
            rock_types: &rocks,
            current: &current,
            history: &history,
            sun_profile: None,
            has_seepage_risk: false,
            snow_depth_in: None,
        };
        let s = compute_location_status(&input, &config).unwrap();
        assert_eq!(s.condition, DryingCondition::Drying);
        assert!(
            s.hours_until_dry >= previous,
            "porosity {porosity}: {} < {previous}",
            s.hours_until_dry
        );
        previous = s.hours_until_dry;
    }
}

// ---------------------------------------------------------------------------
// 3. drying time shrinks as dry hours accumulate
// ---------------------------------------------------------------------------
#[test]
fn drying_progresses_over_time() {
    let rocks = [rock("Limestone", 24.0, 5.0, false)];
    let config = DryingConfig::new();

    let mut previous = f64::INFINITY;
    let mut became_dry = false;
    for dry_hours in [1, 6, 12, 24, 48, 72] {
        let history = rain_then_dry(7, 0.3, 3, dry_hours);
        let current = current_after(&history);
        let input = LocationInput {
            rock_types: &rocks,
            current: &current,
            history: &history,
            sun_profile: None,
            has_seepage_risk: false,
            snow_depth_in: None,
        };
        let s = compute_location_status(&input, &config).unwrap();
        assert!(s.hours_until_dry <= previous);
        previous = s.hours_until_dry;
        became_dry |= s.condition == DryingCondition::Dry;
    }
    assert!(became_dry, "72 dry hours should dry 0.3in on limestone");
}

// ---------------------------------------------------------------------------
// 4. frozen January snow without warming takes more than eleven days
// ---------------------------------------------------------------------------
#[test]
fn frozen_snow_uses_seasonal_estimate() {
    let history: Vec<_> = (0..72)
        .map(|h| WeatherSample::new(start(1) + Duration::hours(h), 30.0, 0.0, 70.0, 3.0, 80.0))
        .collect();
    let current = current_after(&history);
    let rocks = [rock("Granite", 6.0, 1.0, false)];
    let input = LocationInput {
        rock_types: &rocks,
        current: &current,
        history: &history,
        sun_profile: None,
        has_seepage_risk: false,
        snow_depth_in: Some(3.0),
    };
    let s = compute_location_status(&input, &DryingConfig::new()).unwrap();
    assert_eq!(s.condition, DryingCondition::Snow);
    assert_eq!(s.status, DryingStatus::Poor);
    assert!(!s.is_safe);
    assert!(s.hours_until_dry >= 276.0, "{}", s.hours_until_dry);
}

// ---------------------------------------------------------------------------
// 5. a shallow dusting below the threshold is ignored
// ---------------------------------------------------------------------------
#[test]
fn shallow_snow_is_ignored() {
    let history = rain_then_dry(6, 0.0, 1, 48);
    let current = current_after(&history);
    let rocks = [rock("Granite", 6.0, 1.0, false)];
    let input = LocationInput {
        rock_types: &rocks,
        current: &current,
        history: &history,
        sun_profile: None,
        has_seepage_risk: false,
        snow_depth_in: Some(0.4),
    };
    let s = compute_location_status(&input, &DryingConfig::new()).unwrap();
    assert_eq!(s.condition, DryingCondition::Dry);
}

// ---------------------------------------------------------------------------
// 6. wet-sensitive rock after rain is critical
// ---------------------------------------------------------------------------
#[test]
fn wet_sandstone_is_critical() {
    let history = rain_then_dry(6, 0.4, 3, 2);
    let current = current_after(&history);
    let rocks = [rock("Granite", 6.0, 1.0, false), rock("Sandstone", 36.0, 15.0, true)];
    let input = LocationInput {
        rock_types: &rocks,
        current: &current,
        history: &history,
        sun_profile: None,
        has_seepage_risk: true,
        snow_depth_in: None,
    };
    let s = compute_location_status(&input, &DryingConfig::new()).unwrap();
    assert!(s.is_wet);
    assert!(s.is_wet_sensitive);
    assert_eq!(s.status, DryingStatus::Critical);
    assert!(!s.is_safe);
    assert_eq!(s.primary_rock_type.as_deref(), Some("Sandstone"));
    assert_eq!(s.rock_types, vec!["Granite", "Sandstone"]);
}

// ---------------------------------------------------------------------------
// 7. a sunny profile shortens drying
// ---------------------------------------------------------------------------
#[test]
fn sunny_profile_dries_faster() {
    let history = rain_then_dry(6, 0.5, 4, 4);
    let current = current_after(&history);
    let rocks = [rock("Sandstone", 48.0, 10.0, false)];
    let south = SunExposureProfile {
        south_facing_percent: 100.0,
        slab_percent: 50.0,
        ..Default::default()
    };
    let north = SunExposureProfile {
        north_facing_percent: 100.0,
        tree_coverage_percent: 80.0,
        ..Default::default()
    };
    let hours = |profile| {
        let input = LocationInput {
            rock_types: &rocks,
            current: &current,
            history: &history,
            sun_profile: Some(profile),
            has_seepage_risk: false,
            snow_depth_in: None,
        };
        compute_location_status(&input, &DryingConfig::new())
            .unwrap()
            .hours_until_dry
    };
    assert!(hours(&south) < hours(&north));
}

// ---------------------------------------------------------------------------
// 8. non-sensitive rock is poor before the halfway point and fair after it
// ---------------------------------------------------------------------------
#[test]
fn granite_is_poor_then_fair() {
    // base 10h, 5% porosity, 0.1in of rain, neutral weather: 10h required
    let rocks = [rock("Granite", 10.0, 5.0, false)];
    let config = DryingConfig::new();
    let status_after = |dry_hours| {
        let history = rain_then_dry(6, 0.1, 1, dry_hours);
        let current = current_after(&history);
        let input = LocationInput {
            rock_types: &rocks,
            current: &current,
            history: &history,
            sun_profile: None,
            has_seepage_risk: false,
            snow_depth_in: None,
        };
        compute_location_status(&input, &config).unwrap()
    };

    let early = status_after(2);
    assert_eq!(early.condition, DryingCondition::Drying);
    assert_eq!(early.status, DryingStatus::Poor);
    assert!((early.hours_until_dry - 8.0).abs() < 1e-9, "{}", early.hours_until_dry);
    assert!(early.is_safe);

    let late = status_after(7);
    assert_eq!(late.condition, DryingCondition::Drying);
    assert_eq!(late.status, DryingStatus::Fair);
    assert!((late.hours_until_dry - 3.0).abs() < 1e-9, "{}", late.hours_until_dry);
    assert!(late.is_wet);
}
