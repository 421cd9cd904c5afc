// src/app/evenement.rs
//
// Événements envoyés par la vue (boutons, clavier) à l’état de l’app.
// - Chiffre / Operateur / Effacer / Egal : vont au moteur
// - BasculerTheme / OuvrirDialogue / FermerDialogue : tranches UI indépendantes

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evenement {
    Chiffre(char),
    Operateur(char),
    Effacer,
    Egal,
    BasculerTheme,
    OuvrirDialogue,
    FermerDialogue,
}

impl Evenement {
    /// Traduction d’un caractère tapé au clavier (None = ignoré).
    pub fn depuis_texte(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Evenement::Chiffre(c)),
            '+' | '-' | '*' | '/' => Some(Evenement::Operateur(c)),
            '=' => Some(Evenement::Egal),
            'c' | 'C' => Some(Evenement::Effacer),
            _ => None,
        }
    }

    /// Vrai si l’événement passe par le moteur.
    pub fn est_arithmetique(&self) -> bool {
        matches!(
            self,
            Evenement::Chiffre(_) | Evenement::Operateur(_) | Evenement::Effacer | Evenement::Egal
        )
    }
}
