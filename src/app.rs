// src/app.rs
//
// Module App (racine)
// -------------------
// - Sous-modules : etat.rs (état + routage), evenement.rs, vue.rs (egui)
// - Ré-export d’AppCalc pour main.rs
// - impl eframe::App (natif + web) : clavier, thème, panneaux, dialogue

pub mod etat;
pub mod evenement;
pub mod vue;

pub use etat::AppCalc;
pub use evenement::Evenement;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for ev in evenements_clavier(ctx, self.dialogue_visible) {
            self.traiter(ev);
        }

        ctx.set_visuals(if self.theme_sombre {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        egui::TopBottomPanel::top("barre_haut").show(ctx, |ui| {
            self.ui_barre(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });

        self.ui_dialogue(ctx);
    }
}

/// Clavier (natif + web) :
/// - texte tapé : chiffres, + - * /, =, c
/// - Enter = "=" ; Escape = "C"
/// - dialogue ouvert : seul Escape passe (il ferme le dialogue)
fn evenements_clavier(ctx: &egui::Context, dialogue_visible: bool) -> Vec<Evenement> {
    ctx.input(|i| traduire_clavier(&i.events, dialogue_visible))
}

fn traduire_clavier(events: &[egui::Event], dialogue_visible: bool) -> Vec<Evenement> {
    let mut out = Vec::new();
    for e in events {
        match e {
            egui::Event::Key {
                key: egui::Key::Escape,
                pressed: true,
                ..
            } => out.push(if dialogue_visible {
                Evenement::FermerDialogue
            } else {
                Evenement::Effacer
            }),
            _ if dialogue_visible => {}
            egui::Event::Text(t) => out.extend(t.chars().filter_map(Evenement::depuis_texte)),
            egui::Event::Key {
                key: egui::Key::Enter,
                pressed: true,
                ..
            } => out.push(Evenement::Egal),
            _ => {}
        }
    }
    out
}
