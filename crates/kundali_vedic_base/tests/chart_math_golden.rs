//! Golden values for sign, nakshatra, varga and KP lookups.

use kundali_vedic_base::{
    Graha, KpLords, Nakshatra, Rashi, SHODASHAVARGA, Varga, kp_lords, nakshatra_from_longitude,
    opposite_longitude, rashi_from_longitude, varga_position,
};

#[test]
fn sign_is_periodic() {
    for k in -3i32..=3 {
        for lon in [0.0, 29.999, 45.5, 254.0, 359.5] {
            let a = rashi_from_longitude(lon);
            let b = rashi_from_longitude(lon + 360.0 * k as f64);
            assert_eq!(a.rashi, b.rashi, "{lon} + 360*{k}");
        }
    }
}

#[test]
fn d1_matches_sign_lookup() {
    let mut lon = 0.25;
    while lon < 360.0 {
        let v = varga_position(lon, Varga::D1);
        let r = rashi_from_longitude(lon);
        assert_eq!(v.rashi, r.rashi);
        assert!((v.degrees_in_rashi - r.degrees_in_rashi).abs() < 1e-9);
        lon += 7.3;
    }
}

#[test]
fn navamsha_golden() {
    let p = varga_position(254.0, Varga::D9);
    assert_eq!(p.rashi, Rashi::Simha);
    assert!((p.degrees_in_rashi - 6.0).abs() < 1e-9);
}

#[test]
fn every_varga_degree_in_range_on_a_fine_grid() {
    for step in 0..36_000 {
        let lon = step as f64 * 0.01;
        for v in SHODASHAVARGA {
            let d = varga_position(lon, v).degrees_in_rashi;
            assert!((0.0..30.0).contains(&d), "{v} at {lon}: {d}");
        }
    }
}

#[test]
fn kp_bharani_golden() {
    assert_eq!(
        kp_lords(19.32),
        KpLords {
            sign_lord: Graha::Mangal,
            nakshatra_lord: Graha::Shukra,
            sub_lord: Graha::Rahu,
            sub_sub_lord: Graha::Ketu,
        }
    );
}

#[test]
fn kp_first_nakshatra_lord_is_ketu() {
    for lon in [0.0, 3.0, 9.9, 13.3] {
        assert_eq!(kp_lords(lon).nakshatra_lord, Graha::Ketu, "{lon}");
    }
}

#[test]
fn kp_lords_serialize_by_english_name() {
    let json = serde_json::to_value(kp_lords(19.32)).unwrap();
    assert_eq!(json["sub_lord"], "Rahu");
    assert_eq!(json["nakshatra_lord"], "Venus");
}

#[test]
fn punarvasu_reference_moon() {
    let n = nakshatra_from_longitude(85.2);
    assert_eq!(n.nakshatra, Nakshatra::Punarvasu);
    assert_eq!(n.pada, 2);
}

#[test]
fn descending_node_opposite_ascending() {
    for rahu in [0.0, 78.2, 179.5, 300.0] {
        let ketu = opposite_longitude(rahu);
        let gap = (ketu - rahu).rem_euclid(360.0);
        assert!((gap - 180.0).abs() < 1e-9, "rahu {rahu} ketu {ketu}");
    }
}
