use crate::engine::{FlankEntry, Skirmish};
use crate::io::OutputWriter;
use crate::models::combatant::{Combatant, CombatantId};

pub struct SkirmishPresenter;

impl SkirmishPresenter {
    pub fn show_grid(skirmish: &Skirmish, output: &mut dyn OutputWriter) {
        match skirmish.grid() {
            Some(grid) => output.writeln(&format!("GRID: {}", grid)),
            None => output.writeln("GRID: NOT READY (distances undefined)"),
        }
        if !skirmish.settings().detection_enabled {
            output.writeln("FLANKING DETECTION DISABLED");
        }
    }

    pub fn show_roster(skirmish: &Skirmish, output: &mut dyn OutputWriter) {
        output.writeln(&format!(
            "{:<22}{:<11}{:<8}{:<14}{}",
            "COMBATANT", "TYPE", "SIDE", "POSITION", "REACH"
        ));
        for c in skirmish.combatants() {
            let side = if c.has_player_allegiance() { "party" } else { "foes" };
            let center = c.center();
            output.writeln(&format!(
                "{:<22}{:<11}{:<8}{:<14}{}",
                c.label(),
                c.category.label(),
                side,
                format!("{:.0},{:.0}", center.x, center.y),
                c.attack_reach()
            ));
        }
    }

    pub fn show_distances(skirmish: &Skirmish, output: &mut dyn OutputWriter) {
        let combatants = skirmish.combatants();
        for (i, a) in combatants.iter().enumerate() {
            for b in &combatants[i + 1..] {
                let distance = match skirmish.distance(a.id, b.id) {
                    Some(d) => format!("{}", d),
                    None => "undefined".to_string(),
                };
                output.writeln(&format!("{} <-> {}: {}", a.label(), b.label(), distance));
            }
        }
    }

    pub fn show_flanks(skirmish: &Skirmish, report: &[FlankEntry], output: &mut dyn OutputWriter) {
        if report.is_empty() {
            output.writeln("NO FLANKS");
            return;
        }
        let name = |id: CombatantId| {
            skirmish
                .combatant(id)
                .map(|c| c.label())
                .unwrap_or_else(|| id.to_string())
        };
        for entry in report {
            let buddies: Vec<String> = entry.buddies.iter().map(|id| name(*id)).collect();
            output.writeln(&format!(
                "{} FLANKS {} WITH {}",
                name(entry.flanker),
                name(entry.flankee),
                buddies.join(", ")
            ));
        }
    }
}
