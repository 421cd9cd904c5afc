//! Noyau — moteur de la calculatrice (machine à états)
//!
//! État : opérande gauche, opérande droit, opérateur en attente, affichage.
//! Quatre transitions seulement : chiffre, opérateur, effacer, égal.
//!
//! Contrats :
//! - L’affichage est recalculé à chaque transition, jamais modifié à part.
//! - L’opérande droit ne grandit que si un opérateur est choisi.
//! - Une transition qui échoue (Err) laisse l’état intact.
//! - Aucun panic : division par zéro et opérandes invalides sont des erreurs.

use std::fmt;

use num_bigint::BigInt;
use num_traits::Zero;

use super::erreur::ErreurCalc;

/// Nombre max de chiffres par opérande (par défaut).
pub const CHIFFRES_MAX_DEFAUT: usize = 30;

/// Garde-fou : borne haute de la limite configurable.
pub const CHIFFRES_MAX_BORNE: usize = 200;

/// Affichage de l’état initial (et après "C").
pub const AFFICHAGE_INITIAL: &str = "0";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Les quatre opérateurs, dans l’ordre de la rangée de boutons.
    pub const TOUS: [Operateur; 4] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
    ];

    pub fn depuis_char(c: char) -> Result<Self, ErreurCalc> {
        match c {
            '+' => Ok(Operateur::Plus),
            '-' => Ok(Operateur::Moins),
            '*' => Ok(Operateur::Fois),
            '/' => Ok(Operateur::Divise),
            _ => Err(ErreurCalc::OperateurInvalide(c)),
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }

    /// `/` tronque vers zéro (comme la division entière de BigInt).
    fn appliquer(self, a: &BigInt, b: &BigInt) -> Result<BigInt, ErreurCalc> {
        match self {
            Operateur::Plus => Ok(a + b),
            Operateur::Moins => Ok(a - b),
            Operateur::Fois => Ok(a * b),
            Operateur::Divise => {
                if b.is_zero() {
                    return Err(ErreurCalc::DivisionParZero);
                }
                Ok(a / b)
            }
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EtatMoteur {
    pub operande1: String,
    pub operande2: String,
    pub operateur: Option<Operateur>,
    pub affichage: String,
}

impl Default for EtatMoteur {
    fn default() -> Self {
        Self {
            operande1: String::new(),
            operande2: String::new(),
            operateur: None,
            affichage: AFFICHAGE_INITIAL.to_string(),
        }
    }
}

impl EtatMoteur {
    /// "op1" sans opérateur, "op1 op" tant que op2 est vide, sinon "op1 op op2".
    fn expression(&self) -> String {
        match self.operateur {
            None => self.operande1.clone(),
            Some(op) if self.operande2.is_empty() => format!("{} {op}", self.operande1),
            Some(op) => format!("{} {op} {}", self.operande1, self.operande2),
        }
    }
}

#[derive(Clone, Debug)]
pub struct MoteurCalc {
    etat: EtatMoteur,
    chiffres_max: usize,
}

impl Default for MoteurCalc {
    fn default() -> Self {
        Self::new(CHIFFRES_MAX_DEFAUT)
    }
}

impl MoteurCalc {
    /// `chiffres_max` est borné dans [1, CHIFFRES_MAX_BORNE].
    pub fn new(chiffres_max: usize) -> Self {
        Self {
            etat: EtatMoteur::default(),
            chiffres_max: chiffres_max.clamp(1, CHIFFRES_MAX_BORNE),
        }
    }

    pub fn etat(&self) -> &EtatMoteur {
        &self.etat
    }

    pub fn affichage(&self) -> &str {
        &self.etat.affichage
    }

    pub fn chiffres_max(&self) -> usize {
        self.chiffres_max
    }

    /* ------------------------ Transitions ------------------------ */

    /// Ajoute un chiffre à l’opérande courant (gauche sans opérateur, droit sinon).
    pub fn chiffre(&mut self, c: char) -> Result<(), ErreurCalc> {
        if !c.is_ascii_digit() {
            return Err(ErreurCalc::ChiffreInvalide(c));
        }

        let max = self.chiffres_max;
        let cible = match self.etat.operateur {
            None => &mut self.etat.operande1,
            Some(_) => &mut self.etat.operande2,
        };

        // le signe d’un résultat négatif ne compte pas
        if cible.chars().filter(char::is_ascii_digit).count() >= max {
            tracing::debug!(max, "opérande plein, chiffre refusé");
            return Err(ErreurCalc::OperandeTropLong { max });
        }
        cible.push(c);

        self.etat.affichage = self.etat.expression();
        tracing::debug!(chiffre = %c, affichage = %self.etat.affichage, "chiffre");
        Ok(())
    }

    /// Choisit (ou remplace) l’opérateur. Un second opérande déjà tapé est abandonné.
    pub fn operateur(&mut self, c: char) -> Result<(), ErreurCalc> {
        let op = Operateur::depuis_char(c)?;

        if !self.etat.operande2.is_empty() {
            tracing::debug!(abandonne = %self.etat.operande2, "second opérande abandonné");
        }
        self.etat.operateur = Some(op);
        self.etat.operande2.clear();

        self.etat.affichage = self.etat.expression();
        tracing::debug!(operateur = %op, affichage = %self.etat.affichage, "opérateur");
        Ok(())
    }

    /// "C" : retour à l’état initial, sans condition.
    pub fn effacer(&mut self) {
        self.etat = EtatMoteur::default();
        tracing::debug!("effacer");
    }

    /// "=" : évalue `op1 op op2`, puis le résultat devient l’opérande gauche.
    ///
    /// Erreurs (état intact) :
    /// - pas d’opérateur ou op2 vide => ExpressionIncomplete (silencieuse)
    /// - op1/op2 non entier          => OperandeMalforme
    /// - division par 0              => DivisionParZero
    pub fn egal(&mut self) -> Result<BigInt, ErreurCalc> {
        let op = match self.etat.operateur {
            Some(op) if !self.etat.operande2.is_empty() => op,
            _ => return Err(ErreurCalc::ExpressionIncomplete),
        };

        let resultat = lire_operande(&self.etat.operande1)
            .and_then(|a| {
                let b = lire_operande(&self.etat.operande2)?;
                op.appliquer(&a, &b)
            })
            .inspect_err(|e| {
                tracing::warn!(expression = %self.etat.expression(), "évaluation refusée: {e}");
            })?;

        // Tout est calculé : on peut muter.
        self.etat.affichage = format!("{} = {resultat}", self.etat.expression());
        self.etat.operande1 = resultat.to_string();
        self.etat.operande2.clear();
        self.etat.operateur = None;

        tracing::debug!(affichage = %self.etat.affichage, "égal");
        Ok(resultat)
    }
}

fn lire_operande(s: &str) -> Result<BigInt, ErreurCalc> {
    s.parse::<BigInt>()
        .map_err(|_| ErreurCalc::OperandeMalforme(s.to_string()))
}
