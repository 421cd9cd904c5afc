//! Tests de propriétés : séquences de touches aléatoires (proptest).
//!
//! Invariants vérifiés :
//! - sans opérateur, affichage == opérande gauche == concaténation des chiffres
//! - "C" ramène toujours l’état initial
//! - "=" incomplet ne touche à rien
//! - arithmétique exacte (+ - *) et division tronquée vers zéro
//! - aucune séquence de touches ne fait paniquer le moteur
//! - une transition en erreur laisse l’état intact

use num_bigint::BigInt;
use proptest::prelude::*;

use super::erreur::ErreurCalc;
use super::moteur::{EtatMoteur, MoteurCalc};

#[derive(Clone, Debug)]
enum Touche {
    Chiffre(char),
    Operateur(char),
    Effacer,
    Egal,
}

fn chiffre() -> impl Strategy<Value = char> {
    (0u32..=9).prop_map(|d| char::from_digit(d, 10).unwrap_or('0'))
}

fn operateur() -> impl Strategy<Value = char> {
    prop_oneof![Just('+'), Just('-'), Just('*'), Just('/')]
}

fn touche() -> impl Strategy<Value = Touche> {
    prop_oneof![
        4 => chiffre().prop_map(Touche::Chiffre),
        2 => operateur().prop_map(Touche::Operateur),
        1 => Just(Touche::Effacer),
        2 => Just(Touche::Egal),
    ]
}

fn appuie(m: &mut MoteurCalc, t: &Touche) -> Result<(), ErreurCalc> {
    match *t {
        Touche::Chiffre(c) => m.chiffre(c),
        Touche::Operateur(c) => m.operateur(c),
        Touche::Effacer => {
            m.effacer();
            Ok(())
        }
        Touche::Egal => m.egal().map(|_| ()),
    }
}

fn saisir_nombre(m: &mut MoteurCalc, n: u64) {
    for c in n.to_string().chars() {
        m.chiffre(c).unwrap();
    }
}

proptest! {
    #[test]
    fn prop_chiffres_sans_operateur(chiffres in prop::collection::vec(chiffre(), 1..30)) {
        let mut m = MoteurCalc::default();
        for &c in &chiffres {
            m.chiffre(c).unwrap();
        }
        let attendu: String = chiffres.iter().collect();
        prop_assert_eq!(&m.etat().operande1, &attendu);
        prop_assert_eq!(m.affichage(), attendu.as_str());
    }

    #[test]
    fn prop_effacer_revient_a_l_initial(touches in prop::collection::vec(touche(), 0..40)) {
        let mut m = MoteurCalc::default();
        for t in &touches {
            let _ = appuie(&mut m, t);
        }
        m.effacer();
        prop_assert_eq!(m.etat(), &EtatMoteur::default());
    }

    #[test]
    fn prop_erreur_laisse_l_etat_intact(touches in prop::collection::vec(touche(), 0..60)) {
        let mut m = MoteurCalc::new(6);
        for t in &touches {
            let avant = m.etat().clone();
            if appuie(&mut m, t).is_err() {
                prop_assert_eq!(m.etat(), &avant);
            }
        }
    }

    #[test]
    fn prop_operande2_vide_sans_operateur(touches in prop::collection::vec(touche(), 0..60)) {
        let mut m = MoteurCalc::default();
        for t in &touches {
            let _ = appuie(&mut m, t);
            if m.etat().operateur.is_none() {
                prop_assert!(m.etat().operande2.is_empty());
            }
        }
    }

    #[test]
    fn prop_egal_incomplet_sans_effet(a in 0u64..1_000_000, op in operateur()) {
        let mut m = MoteurCalc::default();
        saisir_nombre(&mut m, a);

        let avant = m.etat().clone();
        prop_assert_eq!(m.egal(), Err(ErreurCalc::ExpressionIncomplete));
        prop_assert_eq!(m.etat(), &avant);

        m.operateur(op).unwrap();
        let avant = m.etat().clone();
        prop_assert_eq!(m.egal(), Err(ErreurCalc::ExpressionIncomplete));
        prop_assert_eq!(m.etat(), &avant);
    }

    #[test]
    fn prop_arithmetique_exacte(a in 0u64..10_000_000_000, b in 0u64..10_000_000_000, op in operateur()) {
        let mut m = MoteurCalc::default();
        saisir_nombre(&mut m, a);
        m.operateur(op).unwrap();
        saisir_nombre(&mut m, b);

        let (a, b) = (i128::from(a), i128::from(b));
        let attendu = match op {
            '+' => Some(a + b),
            '-' => Some(a - b),
            '*' => Some(a * b),
            _ if b == 0 => None,
            _ => Some(a / b),
        };

        match attendu {
            Some(r) => {
                prop_assert_eq!(m.egal(), Ok(BigInt::from(r)));
                prop_assert_eq!(&m.etat().operande1, &r.to_string());
                prop_assert!(m.etat().operande2.is_empty());
                prop_assert!(m.etat().operateur.is_none());
                let suffixe = format!(" = {r}");
                prop_assert!(m.affichage().ends_with(&suffixe));
            }
            None => {
                let avant = m.etat().clone();
                prop_assert_eq!(m.egal(), Err(ErreurCalc::DivisionParZero));
                prop_assert_eq!(m.etat(), &avant);
            }
        }
    }

    #[test]
    fn prop_division_tronquee_sur_negatifs(a in 0u64..1000, b in 1u64..2000, d in 1u64..50) {
        // (a - b) / d avec a - b souvent négatif : troncature vers zéro
        let mut m = MoteurCalc::default();
        saisir_nombre(&mut m, a);
        m.operateur('-').unwrap();
        saisir_nombre(&mut m, b);
        m.egal().unwrap();

        m.operateur('/').unwrap();
        saisir_nombre(&mut m, d);

        let attendu = (a as i64 - b as i64) / d as i64;
        prop_assert_eq!(m.egal(), Ok(BigInt::from(attendu)));
    }
}
