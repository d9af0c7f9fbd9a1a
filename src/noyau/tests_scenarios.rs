//! Tests de scénarios : le moteur vu par son appelant (boutons -> moteur -> affichage).
//!
//! Convention vérifiée partout : op1 = poussé en dernier, op2 = poussé avant,
//! binaire = op2 <sym> op1, à l’évaluation comme à l’affichage.

use pretty_assertions::assert_eq;

use super::registre::{COS, DIVISE, FOIS, MOINS, OPPOSE, PI_SYMBOLE, PLUS, RACINE, SIN};
use super::programme::Programme;
use super::Moteur;

fn moteur_avec(jetons: &[&str]) -> Moteur {
    let programme: Programme = jetons.iter().collect();
    let mut m = Moteur::new();
    m.set_programme(&programme);
    m
}

fn assert_proche(a: Option<f64>, b: f64) {
    let a = a.unwrap_or_else(|| panic!("résultat absent, attendu {b}"));
    assert!((a - b).abs() < 1e-12, "a={a} b={b}");
}

/* ------------------------ Ordre des opérandes ------------------------ */

#[test]
fn scenario_neuf_trois_divise() {
    let mut m = Moteur::new();
    m.push_operande(9.0);
    m.push_operande(3.0);
    assert_eq!(m.appliquer_operation(DIVISE), Some(3.0));
    assert_eq!(m.description_courte(), "9÷3");
    assert_eq!(m.description(), "9÷3=");
}

#[test]
fn scenario_soustraction() {
    let m = moteur_avec(&["2", "10", MOINS]);
    assert_eq!(m.evaluer(), Some(-8.0));
    assert_eq!(m.description_courte(), "2−10");
}

/* ------------------------ Précédence ------------------------ */

#[test]
fn scenario_cinq_quatre_fois_trois_plus() {
    let mut m = Moteur::new();
    for v in [5.0, 4.0] {
        m.push_operande(v);
    }
    m.appliquer_operation(FOIS);
    m.push_operande(3.0);
    assert_eq!(m.appliquer_operation(PLUS), Some(23.0));
    assert_eq!(m.description_courte(), "5×4+3");
}

#[test]
fn scenario_somme_protegee() {
    let m = moteur_avec(&["3", "4", PLUS, "5", FOIS]);
    assert_eq!(m.evaluer(), Some(35.0));
    assert_eq!(m.description_courte(), "(3+4)×5");
}

#[test]
fn scenario_deux_cotes_proteges() {
    let m = moteur_avec(&["1", "2", PLUS, "3", "4", MOINS, DIVISE]);
    assert_eq!(m.evaluer(), Some(-3.0));
    assert_eq!(m.description_courte(), "(1+2)÷(3−4)");
}

/* ------------------------ Unaires / constantes ------------------------ */

#[test]
fn scenario_pythagore() {
    // √(3×3+4×4) = 5
    let m = moteur_avec(&["3", "3", FOIS, "4", "4", FOIS, PLUS, RACINE]);
    assert_eq!(m.evaluer(), Some(5.0));
    assert_eq!(m.description(), "√(3×3+4×4)=");
}

#[test]
fn scenario_trig() {
    let m = moteur_avec(&[PI_SYMBOLE, COS, OPPOSE]);
    assert_proche(m.evaluer(), 1.0);
    assert_eq!(m.description_courte(), "⁺/₋(cos(π))");

    let m = moteur_avec(&[PI_SYMBOLE, "6", DIVISE, SIN]);
    assert_proche(m.evaluer(), 0.5);
    assert_eq!(m.description(), "sin(π÷6)=");
}

#[test]
fn scenario_racine_negative() {
    let m = moteur_avec(&["4", OPPOSE, RACINE]);
    assert!(m.evaluer().is_some_and(f64::is_nan), "√(-4) donne NaN, pas absent");
}

/* ------------------------ Historique ------------------------ */

#[test]
fn scenario_historique() {
    let mut m = Moteur::new();
    m.push_operande(5.0);
    m.push_operande(3.0);
    m.appliquer_operation(PLUS);
    assert_eq!(m.push_operande(2.0), Some(2.0));
    assert_eq!(m.description(), "5+3 , 2");

    m.appliquer_operation(FOIS);
    assert_eq!(m.evaluer(), Some(16.0));
    assert_eq!(m.description(), "(5+3)×2=");
}

#[test]
fn scenario_pile_incomplete() {
    let m = moteur_avec(&[PLUS, "7", RACINE]);
    assert_eq!(m.description(), "?+? , √(7)=");
    assert_proche(m.evaluer(), 7f64.sqrt());

    let m = moteur_avec(&["7", FOIS]);
    assert_eq!(m.evaluer(), None);
    assert_eq!(m.description(), "?×7=");
}

/* ------------------------ Variables ------------------------ */

#[test]
fn scenario_memoire() {
    let mut m = Moteur::new();
    assert_eq!(m.push_variable("M"), None);
    assert_eq!(m.description(), "M=");

    m.set_variable("M", 7.0);
    assert_eq!(m.evaluer(), Some(7.0));

    m.push_operande(2.0);
    m.appliquer_operation(MOINS);
    assert_eq!(m.evaluer(), Some(5.0));
    assert_eq!(m.description(), "M−2=");
}

/* ------------------------ Undo / clear ------------------------ */

#[test]
fn scenario_undo_strict() {
    let mut m = moteur_avec(&["1", "2", PLUS, "4", FOIS]);
    let mut attendu = m.programme().0;

    while !m.est_vide() {
        attendu.pop();
        m.annuler();
        assert_eq!(m.programme().0, attendu);
    }
    assert_eq!(m.annuler(), None);
    assert_eq!(m.description(), "Empty");
}

#[test]
fn scenario_clear() {
    let mut m = moteur_avec(&["1", "2", PLUS]);
    m.clear();
    assert_eq!(m.evaluer(), None);
    assert_eq!(m.description(), "Empty");
    assert_eq!(m.description_courte(), "Empty");
}

/* ------------------------ Transfert édition -> tracé ------------------------ */

#[test]
fn scenario_transfert_vers_un_autre_moteur() {
    let mut edition = Moteur::new();
    edition.push_variable("M");
    edition.appliquer_operation(SIN);
    edition.push_operande(0.5);
    edition.appliquer_operation(FOIS);

    let doc = edition.programme().to_json();

    let mut affichage = Moteur::new();
    affichage
        .set_programme_json(&doc)
        .unwrap_or_else(|e| panic!("transfert refusé: {e}"));

    assert_eq!(affichage.programme(), edition.programme());
    assert_eq!(affichage.description(), edition.description());

    for x in [-1.0_f64, 0.0, 0.25, 2.0] {
        affichage.set_variable("M", x);
        assert_proche(affichage.evaluer(), x.sin() * 0.5);
    }
}
