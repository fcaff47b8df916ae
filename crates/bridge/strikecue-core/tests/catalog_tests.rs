use strikecue_core::{Bridge, CatalogCategory, HostCapabilities, EXPECTED_TOTAL};
use strikecue_fixtures::{FakeEffects, FakeNotifier, FakePlayback, FakeWorld};

fn bridge_labels(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("[DS] Entry {i}")).collect()
}

fn seeded_playback(melee: usize, range: usize, on_token: usize) -> FakePlayback {
    FakePlayback::new()
        .with_category(CatalogCategory::Melee, bridge_labels(melee))
        .with_category(CatalogCategory::Range, bridge_labels(range))
        .with_category(CatalogCategory::OnToken, bridge_labels(on_token))
}

#[test]
fn complete_catalog_passes_quietly() {
    let world = FakeWorld::new().as_gm();
    let mut playback = seeded_playback(9, 9, 9);
    let mut effects = FakeEffects::new();
    let mut notifier = FakeNotifier::new();
    let mut bridge = Bridge::default();

    let report = bridge
        .verify_catalog(&mut HostCapabilities {
            world: &world,
            playback: &mut playback,
            effects: &mut effects,
            notifier: &mut notifier,
        })
        .unwrap();

    assert_eq!(report.total(), EXPECTED_TOTAL);
    assert!(report.is_complete());
    assert!(notifier.messages.is_empty());
}

#[test]
fn empty_catalog_raises_one_advisory() {
    let world = FakeWorld::new().as_gm();
    let mut playback = FakePlayback::new();
    let mut effects = FakeEffects::new();
    let mut notifier = FakeNotifier::new();
    let mut bridge = Bridge::default();

    let report = bridge
        .verify_catalog(&mut HostCapabilities {
            world: &world,
            playback: &mut playback,
            effects: &mut effects,
            notifier: &mut notifier,
        })
        .unwrap();

    assert_eq!(report.total(), 0);
    assert_eq!(notifier.messages.len(), 1);
    assert!(notifier.messages[0].0.contains("No fallback animations"));
}

#[test]
fn partial_catalog_reports_counts() {
    let world = FakeWorld::new().as_gm();
    let mut playback = seeded_playback(9, 9, 3);
    let mut effects = FakeEffects::new();
    let mut notifier = FakeNotifier::new();
    let mut bridge = Bridge::default();

    let report = bridge
        .verify_catalog(&mut HostCapabilities {
            world: &world,
            playback: &mut playback,
            effects: &mut effects,
            notifier: &mut notifier,
        })
        .unwrap();

    assert!(report.is_partial());
    assert!(notifier.messages[0].0.contains("21/27"));
}

#[test]
fn missing_category_is_flagged_even_at_full_total() {
    let world = FakeWorld::new().as_gm();
    // pile everything into melee; range and on-token stay empty
    let mut playback =
        FakePlayback::new().with_category(CatalogCategory::Melee, bridge_labels(EXPECTED_TOTAL));
    let mut effects = FakeEffects::new();
    let mut notifier = FakeNotifier::new();
    let mut bridge = Bridge::default();

    let report = bridge
        .verify_catalog(&mut HostCapabilities {
            world: &world,
            playback: &mut playback,
            effects: &mut effects,
            notifier: &mut notifier,
        })
        .unwrap();

    assert_eq!(report.total(), EXPECTED_TOTAL);
    assert!(report.missing_category());
    assert_eq!(notifier.messages.len(), 1);
}

/// it should run at most once per session; ineligible calls do not consume it
#[test]
fn verification_runs_once_per_session() {
    let gm_world = FakeWorld::new().as_gm();
    let player_world = FakeWorld::new();
    let mut playback = seeded_playback(9, 9, 9);
    let mut inactive = FakePlayback::inactive();
    let mut effects = FakeEffects::new();
    let mut notifier = FakeNotifier::new();
    let mut bridge = Bridge::default();

    // non-GM invoker: skipped, flag untouched
    assert!(bridge
        .verify_catalog(&mut HostCapabilities {
            world: &player_world,
            playback: &mut playback,
            effects: &mut effects,
            notifier: &mut notifier,
        })
        .is_none());

    // inactive playback: skipped, flag untouched
    assert!(bridge
        .verify_catalog(&mut HostCapabilities {
            world: &gm_world,
            playback: &mut inactive,
            effects: &mut effects,
            notifier: &mut notifier,
        })
        .is_none());

    // first real run
    assert!(bridge
        .verify_catalog(&mut HostCapabilities {
            world: &gm_world,
            playback: &mut playback,
            effects: &mut effects,
            notifier: &mut notifier,
        })
        .is_some());

    // the timeout safety-net call is free
    assert!(bridge
        .verify_catalog(&mut HostCapabilities {
            world: &gm_world,
            playback: &mut playback,
            effects: &mut effects,
            notifier: &mut notifier,
        })
        .is_none());
}
