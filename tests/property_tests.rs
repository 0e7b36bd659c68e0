use proptest::prelude::*;
use token_geometry::{
    can_flank, is_flanking, measure_distance, ActorCategory, Combatant, CombatantSnapshot,
    FlankContext, GridContext, GridKind, Rect, Skirmish,
};

const CELL: f64 = 100.0;

fn category() -> impl Strategy<Value = ActorCategory> {
    prop_oneof![
        Just(ActorCategory::Character),
        Just(ActorCategory::Npc),
        Just(ActorCategory::Familiar),
        Just(ActorCategory::Hazard),
    ]
}

/// Footprints at whole-pixel positions, one to three cells square.
fn footprint() -> impl Strategy<Value = Rect> {
    (0i32..2000, 0i32..2000, 1i32..=3)
        .prop_map(|(x, y, cells)| Rect::new(x as f64, y as f64, cells as f64 * CELL, cells as f64 * CELL))
}

fn combatant(id: u32) -> impl Strategy<Value = CombatantSnapshot> {
    (footprint(), category(), any::<bool>(), prop_oneof![Just(5.0), Just(10.0), Just(15.0)]).prop_map(
        move |(rect, category, allied, reach)| {
            let c = CombatantSnapshot::new(id, category, rect).with_reach(reach);
            if allied {
                c.player_allied()
            } else {
                c
            }
        },
    )
}

proptest! {
    /// Property: Nobody flanks themselves
    #[test]
    fn self_flank_impossible(a in combatant(1), reach in 0.0f64..1000.0) {
        let grid = GridContext::square(CELL, 5.0);
        let ctx = FlankContext::new(Some(&grid));
        prop_assert!(!can_flank(&a, &a, &ctx, None));
        prop_assert!(!can_flank(&a, &a, &ctx, Some(reach)));
    }

    /// Property: Equal allegiance flags never flank, whatever the reach
    #[test]
    fn allies_never_flank(
        a in combatant(1),
        b in combatant(2),
        allied in any::<bool>(),
        reach in 0.0f64..1000.0
    ) {
        let (mut a, mut b) = (a, b);
        a.player_allied = allied;
        b.player_allied = allied;
        let grid = GridContext::square(CELL, 5.0);
        let ctx = FlankContext::new(Some(&grid));
        prop_assert!(!can_flank(&a, &b, &ctx, Some(reach)));
        prop_assert!(!can_flank(&b, &a, &ctx, Some(reach)));
    }

    /// Property: Distance is symmetric and non-negative
    #[test]
    fn distance_is_symmetric(a in footprint(), b in footprint()) {
        let grid = GridContext::square(CELL, 5.0);
        let ab = measure_distance(&a, &b, Some(&grid), None).unwrap();
        let ba = measure_distance(&b, &a, Some(&grid), None).unwrap();
        prop_assert_eq!(ab, ba);
        prop_assert!(ab >= 0.0);
    }

    /// Property: Occupied cells that overlap are zero apart, disjoint ones are not
    #[test]
    fn overlap_is_zero_and_disjoint_is_positive(a in footprint(), b in footprint()) {
        let grid = GridContext::square(CELL, 5.0);
        let d = measure_distance(&a, &b, Some(&grid), None).unwrap();
        let overlapping = a.inset(CELL / 2.0).intersects(&b.inset(CELL / 2.0));
        if overlapping {
            prop_assert_eq!(d, 0.0);
        } else {
            prop_assert!(d > 0.0, "disjoint footprints measured {}", d);
        }
    }

    /// Property: Without a grid every distance is undefined and nobody flanks
    #[test]
    fn no_grid_is_undefined(a in combatant(1), b in combatant(2)) {
        prop_assert_eq!(measure_distance(&a.bounds(), &b.bounds(), None, Some(a.reach)), None);
        let ctx = FlankContext::new(None);
        prop_assert!(!can_flank(&a, &b, &ctx, Some(1.0e9)));
    }

    /// Property: Non-square grids measure center to center
    #[test]
    fn non_square_measures_centers(a in footprint(), b in footprint()) {
        let grid = GridContext::square(CELL, 5.0).with_kind(GridKind::HexColumns);
        let d = measure_distance(&a, &b, Some(&grid), None).unwrap();
        let expected = grid.measure_points(a.center(), b.center());
        prop_assert!((d - expected).abs() < 1e-9);
    }

    /// Property: A flanker alone on the scene has no partner
    #[test]
    fn lone_flanker_never_flanks(a in combatant(1), target in combatant(2)) {
        let grid = GridContext::square(CELL, 5.0);
        let ctx = FlankContext::new(Some(&grid));
        prop_assert!(!is_flanking(&a, &target, std::slice::from_ref(&a), &ctx));
    }

    /// Property: Flank partners are mutual in generated skirmishes
    #[test]
    fn flank_partners_are_mutual(seed in any::<u64>(), count in 2usize..16) {
        let skirmish = Skirmish::generate(seed, count);
        let report = skirmish.flank_report();
        for entry in &report {
            for buddy in &entry.buddies {
                let mirrored = report.iter().any(|other| {
                    other.flanker == *buddy
                        && other.flankee == entry.flankee
                        && other.buddies.contains(&entry.flanker)
                });
                prop_assert!(mirrored, "{} flanks {} with {} but not the reverse", entry.flanker, entry.flankee, buddy);
            }
        }
    }
}
