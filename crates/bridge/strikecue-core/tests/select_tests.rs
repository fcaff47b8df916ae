use strikecue_core::{bucket_for, select_animation, Bucket, KeywordSet};

fn keywords(words: &[&str]) -> KeywordSet {
    words.into()
}

/// it should classify any set without "strike" as on-token, whatever else is present
#[test]
fn no_strike_is_always_on_token() {
    for set in [
        &[] as &[&str],
        &["ranged"],
        &["melee", "ranged", "fire"],
        &["Magic", "Weapon", "Area"],
    ] {
        assert_eq!(bucket_for(&keywords(set)), Bucket::OnToken, "set: {set:?}");
    }
}

#[test]
fn strike_with_ranged_is_range() {
    assert_eq!(bucket_for(&keywords(&["strike", "ranged"])), Bucket::Range);
    // ranged wins when both delivery tags are present
    assert_eq!(
        bucket_for(&keywords(&["strike", "melee", "ranged"])),
        Bucket::Range
    );
}

#[test]
fn strike_defaults_to_melee() {
    assert_eq!(bucket_for(&keywords(&["strike", "melee"])), Bucket::Melee);
    // bare strike falls back to melee
    assert_eq!(bucket_for(&keywords(&["strike"])), Bucket::Melee);
}

#[test]
fn bucket_check_is_case_insensitive() {
    assert_eq!(bucket_for(&keywords(&["Strike", "Ranged"])), Bucket::Range);
}

/// it should pick the qualifier by element-list order, not input order
#[test]
fn qualifier_is_element_list_order_stable() {
    let set = keywords(&["strike", "ranged", "cold", "fire"]);
    assert_eq!(select_animation(&set, None), "[DS] Range + Fire");

    let set = keywords(&["cold", "fire"]);
    assert_eq!(select_animation(&set, None), "[DS] On Token + Fire");
}

#[test]
fn damage_type_fallback_recapitalizes() {
    let set = keywords(&[]);
    assert_eq!(
        select_animation(&set, Some("Necrotic")),
        "[DS] On Token + Necrotic"
    );
    assert_eq!(
        select_animation(&set, Some("none")),
        "[DS] On Token + None"
    );
}

#[test]
fn element_keyword_beats_damage_type() {
    let set = keywords(&["strike", "fire"]);
    assert_eq!(select_animation(&set, Some("cold")), "[DS] Melee + Fire");
}

#[test]
fn no_element_no_damage_type_is_none() {
    let set = keywords(&["strike", "melee"]);
    assert_eq!(select_animation(&set, None), "[DS] Melee + None");
}

#[test]
fn unknown_damage_type_is_none() {
    let set = keywords(&["strike"]);
    assert_eq!(
        select_animation(&set, Some("bludgeoning")),
        "[DS] Melee + None"
    );
}

/// it should be a pure function: identical input, identical output
#[test]
fn selection_is_idempotent() {
    let set = keywords(&["Strike", "Ranged", "Lightning"]);
    let first = select_animation(&set, Some("fire"));
    let second = select_animation(&set, Some("fire"));
    assert_eq!(first, "[DS] Range + Lightning");
    assert_eq!(first, second);
}
