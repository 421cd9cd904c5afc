//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le moteur + les tranches UI indépendantes (thème, dialogue,
//! message transitoire) et router chaque événement au bon endroit.
//!
//! Contrats :
//! - Thème et dialogue ne touchent jamais l’état du moteur.
//! - Une erreur du moteur ne corrompt rien : elle devient un message.
//! - Le message disparaît au prochain événement arithmétique.
//! - Dialogue ouvert (modal) : les événements arithmétiques sont ignorés.

use crate::noyau::{ErreurCalc, MoteurCalc};
use crate::reglages::Reglages;

use super::evenement::Evenement;

/// Contenu du dialogue d’information.
pub const DIALOGUE_TITRE: &str = "Popup";
pub const DIALOGUE_TEXTE: &str = "Ceci est une simple fenêtre !";

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- noyau ---
    pub moteur: MoteurCalc,

    // --- tranches UI ---
    pub theme_sombre: bool,
    pub dialogue_visible: bool,
    pub message: String, // erreur visible (vide si rien à signaler)
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: &Reglages) -> Self {
        Self {
            moteur: MoteurCalc::new(reglages.chiffres_max),
            theme_sombre: reglages.theme_sombre,
            dialogue_visible: false,
            message: String::new(),
        }
    }

    pub fn affichage(&self) -> &str {
        self.moteur.affichage()
    }

    /// Point d’entrée unique : un événement, traité jusqu’au bout.
    pub fn traiter(&mut self, ev: Evenement) {
        tracing::debug!(?ev, "événement");

        if self.dialogue_visible && ev.est_arithmetique() {
            tracing::debug!(?ev, "dialogue ouvert, ignoré");
            return;
        }

        if ev.est_arithmetique() {
            self.message.clear();
        }

        match ev {
            Evenement::Chiffre(c) => {
                let r = self.moteur.chiffre(c);
                self.noter(r);
            }
            Evenement::Operateur(c) => {
                let r = self.moteur.operateur(c);
                self.noter(r);
            }
            Evenement::Effacer => self.moteur.effacer(),
            Evenement::Egal => {
                let r = self.moteur.egal().map(|_| ());
                self.noter(r);
            }
            Evenement::BasculerTheme => self.theme_sombre = !self.theme_sombre,
            Evenement::OuvrirDialogue => self.dialogue_visible = true,
            Evenement::FermerDialogue => self.dialogue_visible = false,
        }
    }

    /// Erreur visible => message ; silencieuse => rien.
    fn noter(&mut self, r: Result<(), ErreurCalc>) {
        if let Err(e) = r {
            if !e.est_silencieuse() {
                self.message = e.to_string();
            }
        }
    }
}
