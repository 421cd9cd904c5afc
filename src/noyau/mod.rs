//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - moteur.rs : état (op1, op2, opérateur, affichage) + 4 transitions
//! - erreur.rs : erreurs typées, toutes récupérables

pub mod erreur;
pub mod moteur;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::ErreurCalc;
pub use moteur::{EtatMoteur, MoteurCalc, Operateur};
