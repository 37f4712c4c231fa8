use std::sync::Arc;

use progression_core::{
    CatalogHandle, Catalogs, Companion, EngineConfig, EntityId, EquippedItem, ItemCategory,
    PetAbility, PetAbilityKind, PetAbilityRegistry, PetRarity, ProgressionEvent,
    ProgressionService, Rarity, RecordingListener, Reforge, ReforgeCatalog, SkillCurve,
    SkillCurves, SkillType, StatBag, StatKind, XpSourceTable,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const PLAYER: EntityId = EntityId(1);
const EPS: f64 = 1e-9;

fn catalogs() -> Catalogs {
    Catalogs {
        config: EngineConfig::new().with_disabled(SkillType::Social),
        reforges: ReforgeCatalog::new()
            .with(
                Reforge::new("sharp", ItemCategory::Weapon)
                    .with_stats(Rarity::Legendary, StatBag::new().with(StatKind::CritChance, 10.0)),
            )
            .with(
                Reforge::new("clean", ItemCategory::Armor)
                    .with_stats(Rarity::Epic, StatBag::new().with(StatKind::Health, 8.0)),
            ),
        pets: PetAbilityRegistry::new()
            .with("tiger", vec![PetAbilityKind::Combat.into()])
            .with(
                "golem",
                vec![PetAbility::with_coefficients(PetAbilityKind::Mining, 2.0, 0.01)],
            ),
        curves: SkillCurves::new(SkillCurve::from_level_costs(&[50, 125, 200, 300, 500])),
        sources: XpSourceTable::new()
            .with(SkillType::Mining, "coal_ore", 5.0)
            .with(SkillType::Combat, "zombie", 40.0),
    }
}

/// Full session: gear, reforges, a summoned pet and skill XP all feed one
/// cached stat bag that is refreshed exactly when something changes.
#[test]
fn test_session_progression() {
    let listener = Arc::new(RecordingListener::new());
    let handle = CatalogHandle::new(catalogs());
    let mut service = ProgressionService::new(handle.clone(), listener.clone());

    // ================================================================
    // PHASE 1: Gear
    // ================================================================
    service.equip(
        PLAYER,
        EquippedItem::new("hyperion", ItemCategory::Weapon, Rarity::Legendary)
            .with_base(StatBag::new().with(StatKind::Damage, 260.0))
            .with_reforge("sharp"),
    );
    service.equip(
        PLAYER,
        EquippedItem::new("chestplate", ItemCategory::Armor, Rarity::Epic)
            .with_base(StatBag::new().with(StatKind::Defense, 120.0))
            .with_reforge("clean"),
    );

    let gear_only = service.effective_stats(PLAYER);
    assert_eq!(gear_only.get(StatKind::Damage), 260.0);
    assert_eq!(gear_only.get(StatKind::CritChance), 10.0);
    assert_eq!(gear_only.get(StatKind::Health), 8.0);
    assert!(Arc::ptr_eq(&gear_only, &service.effective_stats(PLAYER)));

    // ================================================================
    // PHASE 2: Companions
    // ================================================================
    service.add_companion(PLAYER, Companion::new("tiger", 10, PetRarity::Rare));
    service.add_companion(PLAYER, Companion::new("golem", 50, PetRarity::Legendary));
    assert!(service.summon(PLAYER, 1));

    let with_pet = service.effective_stats(PLAYER);
    // golem: 2.0 × 50 × 2.0 mining speed, 0.01 × 50 × 100 × 2.0 mining fortune
    assert!((with_pet.get(StatKind::MiningSpeed) - 200.0).abs() < EPS);
    assert!((with_pet.get(StatKind::MiningFortune) - 100.0).abs() < EPS);
    assert_eq!(with_pet.get(StatKind::Strength), 0.0);

    // ================================================================
    // PHASE 3: Skills
    // ================================================================
    let outcomes = service.record_action(PLAYER, "coal_ore", 40.0);
    assert_eq!(outcomes.len(), 1);
    assert_eq!(service.profile(PLAYER).map(|p| p.skills.level(SkillType::Mining)), Some(2));

    service.add_xp(PLAYER, SkillType::Social, 1_000.0);
    assert_eq!(service.profile(PLAYER).map(|p| p.skills.xp(SkillType::Social)), Some(0.0));

    let skilled = service.effective_stats(PLAYER);
    // mining passive: 4 fortune and 1 defense per level
    assert!((skilled.get(StatKind::MiningFortune) - 108.0).abs() < EPS);
    assert_eq!(skilled.get(StatKind::Defense), 122.0);

    let level_ups: Vec<_> = listener
        .events()
        .into_iter()
        .filter(ProgressionEvent::is_level_up)
        .collect();
    assert_eq!(
        level_ups,
        vec![ProgressionEvent::LevelUp {
            entity: PLAYER,
            skill: SkillType::Mining,
            old_level: 0,
            new_level: 2,
        }]
    );

    // ================================================================
    // PHASE 4: Reforge roll
    // ================================================================
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let roll = service.reforge_item(PLAYER, "hyperion", &mut rng).unwrap();
    assert_eq!(roll.reforge, "SHARP");
    assert_eq!(roll.cost, Rarity::Legendary.reforge_cost());

    // ================================================================
    // PHASE 5: Catalog reload
    // ================================================================
    let held = handle.current();
    service.reload(Catalogs::default());
    assert_eq!(held.reforges.len(), 2);

    let reloaded = service.effective_stats(PLAYER);
    assert_eq!(reloaded.get(StatKind::CritChance), 0.0);
    assert_eq!(reloaded.get(StatKind::MiningSpeed), 0.0);
    assert_eq!(reloaded.get(StatKind::Damage), 260.0);
}

#[test]
fn test_replay_from_stored_xp() {
    let catalogs = catalogs();
    let curve = catalogs.curves.curve_for(SkillType::Combat);
    let mut service = ProgressionService::new(
        CatalogHandle::new(catalogs.clone()),
        Arc::new(RecordingListener::new()),
    );

    for _ in 0..9 {
        service.record_action(PLAYER, "zombie", 1.0);
    }
    let live = service.profile(PLAYER).map(|p| p.skills.get(SkillType::Combat));

    let restored = progression_core::SkillProgress::restore(360.0, curve, SkillType::Combat.max_level());
    assert_eq!(live, Some(restored));
    assert_eq!(restored.level(), 2);
}
