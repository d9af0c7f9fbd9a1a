//! Tests de propriétés (proptest) : invariants du moteur sur des piles générées.
//!
//! - piles complètes : évaluation == repli manuel de l’arbre (op2 <sym> op1)
//! - aller-retour du programme vers un moteur neuf
//! - annuler = retrait strict du sommet
//! - affichage total, même sur pile incomplète
//!
//! Les noms de variables générés sont en majuscules : "sin" ou "cos" comme nom
//! de variable redeviendraient des opérations à la relecture du programme.

use proptest::prelude::*;

use super::registre::{COS, DIVISE, FOIS, MOINS, OPPOSE, PI_SYMBOLE, PLUS, RACINE, SIN};
use super::Moteur;

const BINAIRES: [&str; 4] = [PLUS, MOINS, FOIS, DIVISE];
const UNAIRES: [&str; 4] = [OPPOSE, RACINE, SIN, COS];

/// Arbre d’expression complet, pour générer des piles bien formées.
#[derive(Clone, Debug)]
enum Arbre {
    Nombre(f64),
    Pi,
    Unaire(&'static str, Box<Arbre>),
    /// (symbole, poussé avant, poussé après)
    Binaire(&'static str, Box<Arbre>, Box<Arbre>),
}

impl Arbre {
    fn jetons(&self, out: &mut Vec<Jeton>) {
        match self {
            Arbre::Nombre(v) => out.push(Jeton::Nombre(*v)),
            Arbre::Pi => out.push(Jeton::Operation(PI_SYMBOLE)),
            Arbre::Unaire(s, x) => {
                x.jetons(out);
                out.push(Jeton::Operation(*s));
            }
            Arbre::Binaire(s, avant, apres) => {
                avant.jetons(out);
                apres.jetons(out);
                out.push(Jeton::Operation(*s));
            }
        }
    }

    fn valeur(&self) -> f64 {
        match self {
            Arbre::Nombre(v) => *v,
            Arbre::Pi => std::f64::consts::PI,
            Arbre::Unaire(s, x) => {
                let x = x.valeur();
                match *s {
                    OPPOSE => -x,
                    RACINE => x.sqrt(),
                    SIN => x.sin(),
                    _ => x.cos(),
                }
            }
            Arbre::Binaire(s, avant, apres) => {
                let (a, b) = (avant.valeur(), apres.valeur());
                match *s {
                    PLUS => a + b,
                    MOINS => a - b,
                    FOIS => a * b,
                    _ => a / b,
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
enum Jeton {
    Nombre(f64),
    Variable(String),
    Operation(&'static str),
}

fn pousser(m: &mut Moteur, jeton: &Jeton) {
    match jeton {
        Jeton::Nombre(v) => {
            m.push_operande(*v);
        }
        Jeton::Variable(nom) => {
            m.push_variable(nom.clone());
        }
        Jeton::Operation(s) => {
            m.appliquer_operation(s);
        }
    }
}

fn meme_valeur(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (Some(x), Some(y)) => x == y || (x.is_nan() && y.is_nan()),
        (None, None) => true,
        _ => false,
    }
}

/* ------------------------ Stratégies ------------------------ */

fn arbre_strategy() -> impl Strategy<Value = Arbre> {
    let feuille = prop_oneof![
        4 => (-50i32..50).prop_map(|n| Arbre::Nombre(f64::from(n))),
        1 => Just(Arbre::Pi),
    ];
    feuille.prop_recursive(5, 32, 2, |interne| {
        prop_oneof![
            (prop::sample::select(UNAIRES.to_vec()), interne.clone())
                .prop_map(|(s, x)| Arbre::Unaire(s, Box::new(x))),
            (
                prop::sample::select(BINAIRES.to_vec()),
                interne.clone(),
                interne
            )
                .prop_map(|(s, a, b)| Arbre::Binaire(s, Box::new(a), Box::new(b))),
        ]
    })
}

/// Jetons quelconques : la pile obtenue peut être incomplète.
fn jeton_strategy() -> impl Strategy<Value = Jeton> {
    let operations: Vec<&'static str> = BINAIRES
        .iter()
        .chain(UNAIRES.iter())
        .copied()
        .chain(std::iter::once(PI_SYMBOLE))
        .collect();
    prop_oneof![
        3 => any::<f64>().prop_map(Jeton::Nombre),
        1 => "[A-Z]{1,2}".prop_map(Jeton::Variable),
        3 => prop::sample::select(operations).prop_map(Jeton::Operation),
    ]
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #[test]
    fn pile_complete_evaluee_comme_l_arbre(arbre in arbre_strategy()) {
        let mut jetons = Vec::new();
        arbre.jetons(&mut jetons);

        let mut m = Moteur::new();
        let mut dernier = None;
        for j in &jetons {
            dernier = Some(match j {
                Jeton::Nombre(v) => m.push_operande(*v),
                Jeton::Operation(s) => m.appliquer_operation(s),
                Jeton::Variable(nom) => m.push_variable(nom.clone()),
            });
        }

        let attendu = Some(arbre.valeur());
        prop_assert!(meme_valeur(m.evaluer(), attendu), "{} != {:?}", m.description(), attendu);
        prop_assert!(meme_valeur(dernier.flatten(), attendu));
    }

    #[test]
    fn aller_retour_du_programme(jetons in prop::collection::vec(jeton_strategy(), 0..24),
                                 m_valeur in -10.0f64..10.0) {
        let mut source = Moteur::new();
        for j in &jetons {
            pousser(&mut source, j);
        }
        source.set_variable("M", m_valeur);

        let mut copie = Moteur::new();
        copie.set_variable("M", m_valeur);
        copie.set_programme(&source.programme());

        prop_assert_eq!(copie.programme(), source.programme());
        prop_assert_eq!(copie.description(), source.description());
        prop_assert_eq!(copie.description_courte(), source.description_courte());
        prop_assert!(meme_valeur(copie.evaluer(), source.evaluer()));

        // Même chose en passant par le transport JSON.
        let mut via_json = Moteur::new();
        via_json.set_variable("M", m_valeur);
        prop_assert!(via_json.set_programme_json(&source.programme().to_json()).is_ok());
        prop_assert_eq!(via_json.programme(), source.programme());
    }

    #[test]
    fn annuler_retire_exactement_le_sommet(jetons in prop::collection::vec(jeton_strategy(), 1..16)) {
        let mut m = Moteur::new();
        for j in &jetons {
            pousser(&mut m, j);
        }
        let avant = m.programme().0;

        let r = m.annuler();
        let apres = m.programme().0;

        prop_assert_eq!(apres.len() + 1, avant.len());
        prop_assert_eq!(&apres[..], &avant[..apres.len()]);
        prop_assert!(meme_valeur(r, m.evaluer()));
    }

    #[test]
    fn affichage_total(jetons in prop::collection::vec(jeton_strategy(), 0..24)) {
        let mut m = Moteur::new();
        for j in &jetons {
            pousser(&mut m, j);
        }
        let d = m.description();
        let c = m.description_courte();
        prop_assert!(!d.is_empty());
        prop_assert!(!c.is_empty());
        if m.est_vide() {
            prop_assert_eq!(d, "Empty");
            prop_assert_eq!(c, "Empty");
        } else {
            // la dernière expression termine toujours l’historique
            prop_assert!(d.trim_end_matches('=').ends_with(&c));
        }
    }

    #[test]
    fn clear_puis_rien(jetons in prop::collection::vec(jeton_strategy(), 0..16)) {
        let mut m = Moteur::new();
        for j in &jetons {
            pousser(&mut m, j);
        }
        m.clear();
        prop_assert_eq!(m.evaluer(), None);
        prop_assert_eq!(m.description(), "Empty");
        prop_assert_eq!(m.description_courte(), "Empty");
    }
}
