// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Integration tests that drive the public API end to end, the way a front end would.

use pretty_assertions::assert_eq;
use r3bl_emoji_picker::{CATALOG_BRACKETS, ChooseOutcome, EmojiCategoryType, EmojiEntry,
                        InMemoryToneStore, IndexPath, KvToneStore, PickerConfig,
                        PickerSession, SharedToneStore, SkinTone, SkinTonePrefs,
                        UnicodeVersion, resolve_catalog,
                        test_fixtures::try_create_temp_tone_store_dir};
use serial_test::serial;
use std::ptr;
use strum::{EnumCount, IntoEnumIterator};
use test_case::test_case;

fn new_session(platform_version: f64) -> PickerSession<InMemoryToneStore> {
    PickerSession::new(
        platform_version,
        InMemoryToneStore::default(),
        PickerConfig::default(),
    )
}

fn first_hit<S: r3bl_emoji_picker::ToneStore>(
    session: &PickerSession<S>,
    query: &str,
) -> IndexPath {
    session.search(query)[0]
}

#[test_case(13.2, 13.3 ; "12.1 bracket")]
#[test_case(14.2, 14.4 ; "13.0 bracket")]
#[test_case(14.2, 14.3 ; "13.0 bracket inner")]
#[test_case(99.0, 15.4 ; "newest bracket is open ended")]
#[test_case(0.0, 12.0 ; "floor bracket")]
fn test_versions_in_one_bracket_share_a_catalog(lhs: f64, rhs: f64) {
    assert!(ptr::eq(resolve_catalog(lhs), resolve_catalog(rhs)));
}

/// Walks every bracket in steps of `0.01`, from its lower bound up to just below the
/// next one. The floor bracket starts at `0.0`, and the newest one stops at `20.0`.
#[test]
fn test_every_version_in_a_bracket_resolves_to_its_lower_bound_catalog() {
    const STEP: f64 = 0.01;

    for (index, bracket) in CATALOG_BRACKETS.iter().enumerate() {
        let lower = bracket.min_platform_version.max(0.0);
        let upper = CATALOG_BRACKETS
            .get(index + 1)
            .map_or(20.0, |next| next.min_platform_version);
        let expected = resolve_catalog(lower);

        let mut steps: u16 = 0;
        loop {
            let platform_version = lower + f64::from(steps) * STEP;
            if platform_version >= upper {
                break;
            }
            assert!(
                ptr::eq(resolve_catalog(platform_version), expected),
                "{platform_version} should resolve like {lower}"
            );
            steps += 1;
        }
        assert!(steps > 0);

        // The next bound starts a different catalog.
        if index + 1 < CATALOG_BRACKETS.len() {
            assert!(!ptr::eq(resolve_catalog(upper), expected));
        }
    }
}

#[test]
fn test_every_catalog_has_eight_ordered_categories() {
    for platform_version in [0.0, 12.1, 13.2, 14.2, 14.5, 15.4, 99.0] {
        let catalog = resolve_catalog(platform_version);
        assert_eq!(catalog.categories().len(), EmojiCategoryType::COUNT);

        let actual: Vec<EmojiCategoryType> = catalog
            .categories()
            .iter()
            .map(|it| it.category_type)
            .collect();
        let expected: Vec<EmojiCategoryType> = EmojiCategoryType::iter().collect();
        assert_eq!(actual, expected);

        assert!(catalog.categories().iter().all(|it| !it.is_empty()));
    }
}

#[test]
fn test_newer_platforms_only_add_emoji() {
    let old = resolve_catalog(14.2);
    let new = resolve_catalog(15.4);
    assert!(old.emoji_version() < new.emoji_version());
    assert!(new.len() > old.len());
    for (lhs, rhs) in old.categories().iter().zip(new.categories()) {
        assert_eq!(lhs.entries.as_slice(), &rhs.entries[..lhs.len()]);
    }
}

#[test]
fn test_thumbs_up_with_medium_tone_end_to_end() {
    let mut session = new_session(15.4);
    let index_path = first_hit(&session, "thumbs up");

    assert_eq!(session.rendered_at(index_path).as_deref(), Some("👍"));
    match session.choose(index_path) {
        ChooseOutcome::NeedsSkinTone { base, .. } => assert_eq!(base, "👍"),
        it => panic!("Expected NeedsSkinTone, but got {it:?}"),
    }

    let variants = session.tone_variants(index_path);
    assert_eq!(variants.len(), SkinTone::COUNT);
    assert_eq!(variants[3], (SkinTone::Medium, "👍🏽".to_string()));

    let outcome = session.choose_with_tone(index_path, SkinTone::Medium);
    assert_eq!(outcome.picked().map(|it| it.emoji.as_str()), Some("👍🏽"));
    assert_eq!(
        session.last_picked().map(|it| it.category_type),
        Some(EmojiCategoryType::People)
    );
    assert_eq!(session.rendered_at(index_path).as_deref(), Some("👍🏽"));
}

#[test]
fn test_modifier_goes_after_first_code_point() {
    let mut prefs = SkinTonePrefs::new(InMemoryToneStore::default());
    let entry = EmojiEntry::with_skin_tone(
        &[0x1F469, 0x200D, 0x1F4BB],
        "woman technologist",
        UnicodeVersion::new(4, 0),
    );

    prefs.set_tone(&entry, SkinTone::Dark);
    let actual: Vec<u32> = prefs.render(&entry).chars().map(u32::from).collect();
    assert_eq!(actual, vec![0x1F469, 0x1F3FF, 0x200D, 0x1F4BB]);

    prefs.set_tone(&entry, SkinTone::None);
    assert_eq!(prefs.render(&entry), entry.base_string());
}

#[test]
fn test_grinning_face_ignores_every_tone() {
    let mut session = new_session(15.4);
    let index_path = first_hit(&session, "grinning face");

    for tone in SkinTone::iter() {
        let outcome = session.choose_with_tone(index_path, tone);
        assert_eq!(outcome.picked().map(|it| it.emoji.as_str()), Some("😀"));
        assert!(!session.prefs().has_chosen_tone_before(session.entry_at(index_path).unwrap()));
    }
    assert!(session.tone_variants(index_path).is_empty());
}

#[test]
fn test_sessions_sharing_a_store_share_tones() {
    let store = SharedToneStore::new(InMemoryToneStore::default());
    let mut first =
        PickerSession::new(15.4, store.clone(), PickerConfig::default());
    let second = PickerSession::new(13.0, store, PickerConfig::default());

    let index_path = first_hit(&first, "waving hand");
    assert!(!second.prefs().has_chosen_tone_before(second.entry_at(index_path).unwrap()));

    first.choose_with_tone(index_path, SkinTone::Light);

    // Same glyph in an older catalog, same tone.
    assert!(second.prefs().has_chosen_tone_before(second.entry_at(index_path).unwrap()));
    assert_eq!(second.rendered_at(index_path).as_deref(), Some("👋🏻"));
}

#[test]
#[serial]
fn test_tones_persist_across_sessions_on_disk() -> miette::Result<()> {
    let dir = try_create_temp_tone_store_dir()?;
    let config = dir.picker_config();

    {
        let store = KvToneStore::try_open(&config.tone_store)?;
        assert_eq!(store.bucket_name(), "skin_tones");
        let mut session = PickerSession::new(15.4, store, config.clone());
        let index_path = first_hit(&session, "thumbs up");
        session.choose_with_tone(index_path, SkinTone::MediumLight);
    }

    let store = KvToneStore::try_open(&config.tone_store)?;
    let mut session = PickerSession::new(15.4, store, config);
    let index_path = first_hit(&session, "thumbs up");
    assert_eq!(
        session.choose(index_path).picked().map(|it| it.emoji.clone()),
        Some("👍🏼".to_string())
    );

    Ok(())
}
