// src/noyau/erreur.rs
//
// Erreurs du noyau : toutes locales, toutes récupérables.
// Contrat : quand une opération renvoie Err, l’état du moteur n’a PAS bougé.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    /// "=" sans opérateur ou sans second opérande : ignoré sans bruit.
    #[error("expression incomplète")]
    ExpressionIncomplete,

    #[error("Division par zéro")]
    DivisionParZero,

    /// Texte d’opérande non entier (ex: opérateur pressé avant tout chiffre).
    #[error("Opérande invalide : «{0}»")]
    OperandeMalforme(String),

    #[error("Opérande trop long (max {max} chiffres)")]
    OperandeTropLong { max: usize },

    #[error("Touche non reconnue : '{0}'")]
    ChiffreInvalide(char),

    #[error("Opérateur non reconnu : '{0}'")]
    OperateurInvalide(char),
}

impl ErreurCalc {
    /// Vrai si l’erreur ne doit rien afficher à l’utilisateur.
    pub fn est_silencieuse(&self) -> bool {
        matches!(self, ErreurCalc::ExpressionIncomplete)
    }
}
