use token_geometry::{
    can_flank, flankers_of, is_flanking, measure_distance, on_opposite_corners,
    on_opposite_sides, ActorCategory, Combatant, CombatantId, CombatantSnapshot, DiagonalRule,
    FlankContext, FlankingSettings, GridContext, GridKind, Rect, SceneConfig, SceneError,
    Skirmish,
};

/// Square grid with 5px cells worth 5 feet each.
fn small_grid() -> GridContext {
    GridContext::square(5.0, 5.0)
}

fn token(id: u32, category: ActorCategory, x: f64, y: f64, size: f64) -> CombatantSnapshot {
    CombatantSnapshot::new(id, category, Rect::new(x, y, size, size))
}

fn hero(id: u32, x: f64, y: f64) -> CombatantSnapshot {
    token(id, ActorCategory::Character, x, y, 5.0).player_allied()
}

fn brute(id: u32, x: f64, y: f64) -> CombatantSnapshot {
    token(id, ActorCategory::Npc, x, y, 5.0)
}

#[test]
fn diagonal_pincer_flanks_through_opposite_corners() {
    let grid = small_grid();
    let ctx = FlankContext::new(Some(&grid));
    let flankee = brute(9, 5.0, 5.0);
    let scene = vec![hero(1, 0.0, 0.0), hero(2, 10.0, 10.0), flankee.clone()];

    assert_eq!(
        measure_distance(&scene[0].bounds(), &flankee.bounds(), Some(&grid), Some(5.0)),
        Some(5.0)
    );
    assert!(on_opposite_corners(&scene[0], &scene[1], &flankee));
    assert!(is_flanking(&scene[0], &flankee, &scene, &ctx));
    assert!(is_flanking(&scene[1], &flankee, &scene, &ctx));
}

#[test]
fn left_and_right_flank_through_opposite_sides() {
    let grid = small_grid();
    let ctx = FlankContext::new(Some(&grid));
    let flankee = brute(9, 5.0, 5.0);
    let scene = vec![hero(1, 0.0, 5.0), hero(2, 10.0, 5.0)];

    assert!(on_opposite_sides(&scene[0], &scene[1], &flankee));
    assert!(is_flanking(&scene[0], &flankee, &scene, &ctx));
}

#[test]
fn shared_allegiance_never_flanks() {
    let grid = small_grid();
    let ctx = FlankContext::new(Some(&grid));

    let friendly = token(9, ActorCategory::Npc, 5.0, 5.0, 5.0).player_allied();
    let party = vec![hero(1, 0.0, 0.0), hero(2, 10.0, 10.0)];
    assert!(!can_flank(&party[0], &friendly, &ctx, None));
    assert!(!can_flank(&party[1], &friendly, &ctx, None));
    assert!(!is_flanking(&party[0], &friendly, &party, &ctx));

    // three unowned tokens are one side
    let monster = brute(9, 5.0, 5.0);
    let gang = vec![brute(1, 0.0, 0.0), brute(2, 10.0, 10.0)];
    assert!(!is_flanking(&gang[0], &monster, &gang, &ctx));
}

#[test]
fn no_grid_means_no_flanking() {
    let ctx = FlankContext::new(None);
    let flankee = brute(9, 5.0, 5.0);
    let scene = vec![hero(1, 0.0, 0.0), hero(2, 10.0, 10.0)];

    assert_eq!(measure_distance(&scene[0].bounds(), &flankee.bounds(), None, None), None);
    assert!(!can_flank(&scene[0], &flankee, &ctx, Some(1000.0)));
    assert!(!is_flanking(&scene[0], &flankee, &scene, &ctx));
}

#[test]
fn hex_grid_ignores_footprints() {
    let grid = GridContext::square(100.0, 5.0).with_kind(GridKind::HexRows);
    let huge = Rect::new(0.0, 0.0, 300.0, 300.0);
    let small = Rect::new(400.0, 100.0, 100.0, 100.0);
    // centers (150,150) and (450,150)
    let d = measure_distance(&huge, &small, Some(&grid), None).unwrap();
    assert!((d - 15.0).abs() < 1e-9);

    // the same footprints on a square grid measure edge to edge
    let square = GridContext::square(100.0, 5.0);
    assert_eq!(measure_distance(&huge, &small, Some(&square), None), Some(10.0));
}

#[test]
fn large_flankee_between_reach_weapons() {
    let grid = GridContext::square(100.0, 5.0).with_diagonals(DiagonalRule::Equidistant);
    let ctx = FlankContext::new(Some(&grid));
    let dragon = token(9, ActorCategory::Npc, 200.0, 200.0, 300.0);
    let scene = vec![
        token(1, ActorCategory::Character, 0.0, 300.0, 100.0).player_allied().with_reach(10.0),
        token(2, ActorCategory::Character, 500.0, 300.0, 100.0).player_allied(),
    ];

    assert!(can_flank(&scene[0], &dragon, &ctx, None));
    assert!(can_flank(&scene[1], &dragon, &ctx, None));
    assert!(is_flanking(&scene[0], &dragon, &scene, &ctx));
    assert_eq!(flankers_of(&dragon, &scene, &ctx), vec![CombatantId(1), CombatantId(2)]);
}

#[test]
fn disabled_detection_turns_off_every_flank() {
    let config = SceneConfig {
        grid: Some(small_grid()),
        settings: FlankingSettings {
            detection_enabled: false,
        },
        combatants: vec![hero(1, 0.0, 5.0), hero(2, 10.0, 5.0), brute(9, 5.0, 5.0)],
    };
    let skirmish = Skirmish::from_config(config).unwrap();
    assert!(skirmish.flank_report().is_empty());
    assert!(!skirmish.is_flanking(CombatantId(1), CombatantId(9)));
}

#[test]
fn scene_file_drives_the_report() {
    let text = r#"{
        "grid": {"size": 100, "distance": 5},
        "combatants": [
            {"id": 1, "name": "Seelah", "category": "character", "player_allied": true,
             "x": 0, "y": 100, "width": 100, "height": 100},
            {"id": 2, "name": "Harsk", "category": "character", "player_allied": true,
             "x": 200, "y": 100, "width": 100, "height": 100},
            {"id": 3, "name": "Bugbear", "x": 100, "y": 100, "width": 100, "height": 100},
            {"id": 4, "name": "Chest", "category": "loot", "x": 500, "y": 500, "width": 100, "height": 100}
        ]
    }"#;
    let config = token_geometry::io::parse_scene(text).unwrap();
    let skirmish = Skirmish::from_config(config).unwrap();

    let report = skirmish.flank_report();
    assert_eq!(report.len(), 2);
    assert!(report.iter().all(|entry| entry.flankee == CombatantId(3)));
    assert_eq!(skirmish.distance(CombatantId(1), CombatantId(2)), Some(10.0));
}

#[test]
fn undersized_footprint_is_rejected() {
    let config = SceneConfig {
        grid: Some(GridContext::square(100.0, 5.0)),
        settings: FlankingSettings::default(),
        combatants: vec![token(1, ActorCategory::Npc, 0.0, 0.0, 40.0)],
    };
    let err = Skirmish::from_config(config).unwrap_err();
    assert!(matches!(err, SceneError::DegenerateFootprint { id: CombatantId(1), .. }));
}
