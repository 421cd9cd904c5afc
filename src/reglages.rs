//! Réglages de l’application (valeurs par défaut compilées).
//!
//! Pas de fichier, pas de variable d’environnement : seul `RUST_LOG`
//! (filtre de journalisation, natif) est lu au démarrage.

use crate::noyau::moteur::{CHIFFRES_MAX_BORNE, CHIFFRES_MAX_DEFAUT};

/// Titre unique (natif + web).
pub const TITRE_APP: &str = "Calculatrice";

/// Filtre de journalisation si `RUST_LOG` est absent.
pub const FILTRE_JOURNAL_DEFAUT: &str = "info";

#[derive(Clone, Debug, PartialEq)]
pub struct Reglages {
    pub titre: &'static str,
    pub taille_fenetre: [f32; 2],
    pub taille_min: [f32; 2],

    // --- noyau ---
    pub chiffres_max: usize,

    // --- UI ---
    pub theme_sombre: bool, // sombre au démarrage
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            titre: TITRE_APP,
            taille_fenetre: [360.0, 560.0],
            taille_min: [300.0, 480.0],
            chiffres_max: CHIFFRES_MAX_DEFAUT,
            theme_sombre: true,
        }
    }
}

impl Reglages {
    /// Garde-fou : la limite est bornée comme dans le moteur.
    pub fn avec_chiffres_max(mut self, chiffres_max: usize) -> Self {
        self.chiffres_max = chiffres_max.clamp(1, CHIFFRES_MAX_BORNE);
        self
    }

    pub fn avec_theme_sombre(mut self, sombre: bool) -> Self {
        self.theme_sombre = sombre;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defauts() {
        let r = Reglages::default();
        assert_eq!(r.titre, TITRE_APP);
        assert_eq!(r.chiffres_max, CHIFFRES_MAX_DEFAUT);
        assert!(r.theme_sombre);
    }

    #[test]
    fn chiffres_max_borne() {
        assert_eq!(Reglages::default().avec_chiffres_max(0).chiffres_max, 1);
        assert_eq!(
            Reglages::default().avec_chiffres_max(usize::MAX).chiffres_max,
            CHIFFRES_MAX_BORNE
        );
        assert_eq!(Reglages::default().avec_chiffres_max(12).chiffres_max, 12);
    }
}
