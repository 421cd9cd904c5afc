// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// La vue ne calcule rien : elle dessine l’état et transforme chaque clic en
// `Evenement`, passé à `AppCalc::traiter`.
//
// Disposition :
// - barre du haut : menu (ouvre le dialogue) + bascule de thème
// - écran : affichage du moteur, verbatim
// - pavé 1 2 3 / 4 5 6 / 7 8 9 / 0 C =
// - rangée d’opérateurs + - * /

use eframe::egui;

use super::etat::{AppCalc, DIALOGUE_TEXTE, DIALOGUE_TITRE};
use super::evenement::Evenement;
use crate::noyau::Operateur;

/// Taille des touches (pouce-friendly).
const TOUCHE: [f32; 2] = [64.0, 56.0];

const PAVE: [[&str; 3]; 4] = [
    ["1", "2", "3"],
    ["4", "5", "6"],
    ["7", "8", "9"],
    ["0", "C", "="],
];

impl AppCalc {
    pub fn ui_barre(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("☰").on_hover_text("Menu").clicked() {
                self.traiter(Evenement::OuvrirDialogue);
            }
            ui.label("Calculatrice");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (icone, tip) = if self.theme_sombre {
                    ("☀", "Passer en mode clair")
                } else {
                    ("🌙", "Passer en mode sombre")
                };
                if ui.button(icone).on_hover_text(tip).clicked() {
                    self.traiter(Evenement::BasculerTheme);
                }
            });
        });
    }

    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);

        ui.add_space(12.0);
        self.ui_pave(ui);

        ui.add_space(12.0);
        self.ui_operateurs(ui);
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        // Lecture seule : pas de TextEdit, un cadre + label monospace.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(
                    egui::RichText::new(self.affichage())
                        .monospace()
                        .size(28.0),
                );
            });

        if !self.message.is_empty() {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.message);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(3)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for label in rangee {
                        let ev = match label {
                            "C" => Evenement::Effacer,
                            "=" => Evenement::Egal,
                            _ => Evenement::Chiffre(label.chars().next().unwrap_or('0')),
                        };
                        self.touche(ui, label, ev);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_operateurs(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for op in Operateur::TOUS {
                let c = op.symbole();
                self.touche(ui, &c.to_string(), Evenement::Operateur(c));
            }
        });
    }

    /// Dialogue d’information, modal : bloque le pavé, fermé par OK,
    /// Escape ou un clic à l’extérieur.
    pub fn ui_dialogue(&mut self, ctx: &egui::Context) {
        if !self.dialogue_visible {
            return;
        }

        let reponse = egui::Modal::new(egui::Id::new("dialogue_info")).show(ctx, |ui| {
            ui.set_width(260.0);
            ui.heading(DIALOGUE_TITRE);
            ui.add_space(8.0);
            ui.label(DIALOGUE_TEXTE);
            ui.add_space(12.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.button("OK").clicked()
            })
            .inner
        });

        if reponse.inner || reponse.should_close() {
            self.traiter(Evenement::FermerDialogue);
        }
    }

    fn touche(&mut self, ui: &mut egui::Ui, label: &str, ev: Evenement) {
        let texte = egui::RichText::new(label).size(22.0);
        if ui.add_sized(TOUCHE, egui::Button::new(texte)).clicked() {
            self.traiter(ev);
        }
    }
}
