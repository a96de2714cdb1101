use chrono::{DateTime, TimeZone, Utc};
use rockdry_sun::{Aspect, ExposureConfig, SunExposureProfile, direct_sun_hours};

const LAT: f64 = 39.95;
const LON: f64 = -105.3;

fn midnight(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 7, 0, 0).unwrap()
}

fn six_day_hours(aspect: Aspect, start: DateTime<Utc>) -> f64 {
    direct_sun_hours(LAT, LON, aspect, start, 6, 0.0, &ExposureConfig::new()).unwrap()
}

// ---------------------------------------------------------------------------
// 1. north faces get almost nothing in winter
// ---------------------------------------------------------------------------
#[test]
fn winter_north_face_is_shaded() {
    let hours = six_day_hours(Aspect::N, midnight(2024, 12, 18));
    assert!(hours < 1.0, "north face winter hours: {hours}");
}

// ---------------------------------------------------------------------------
// 2. south faces get most of the winter day
// ---------------------------------------------------------------------------
#[test]
fn winter_south_face_is_sunny() {
    let daily = six_day_hours(Aspect::S, midnight(2024, 12, 18)) / 6.0;
    assert!(daily > 6.0 && daily < 10.0, "south face winter daily: {daily}");
}

// ---------------------------------------------------------------------------
// 3. east and west faces are near mirror images
// ---------------------------------------------------------------------------
#[test]
fn east_and_west_are_balanced() {
    let start = midnight(2024, 3, 18);
    let east = six_day_hours(Aspect::E, start);
    let west = six_day_hours(Aspect::W, start);
    assert!((east - west).abs() < 2.0, "east {east} vs west {west}");
}

// ---------------------------------------------------------------------------
// 4. every aspect stays within physical bounds
// ---------------------------------------------------------------------------
#[test]
fn hours_are_bounded_by_daylight() {
    let start = midnight(2024, 6, 18);
    for aspect in Aspect::ALL {
        let h = six_day_hours(aspect, start);
        assert!((0.0..=6.0 * 16.0).contains(&h), "{aspect}: {h}");
    }
}

// ---------------------------------------------------------------------------
// 5. profile factor ordering matches face ordering
// ---------------------------------------------------------------------------
#[test]
fn sunnier_profiles_dry_faster() {
    let south = SunExposureProfile {
        south_facing_percent: 100.0,
        ..Default::default()
    };
    let north = SunExposureProfile {
        north_facing_percent: 100.0,
        ..Default::default()
    };
    assert!(south.exposure_factor() > 1.0);
    assert!(north.exposure_factor() < 1.0);
}
