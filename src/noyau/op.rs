// src/noyau/op.rs
//
// Éléments de la pile RPN.
// - Operande : nombre littéral
// - Variable : nom résolu au moment de l’évaluation
// - Constante / Unaire / Binaire : opérations connues du registre
//
// Les opérations portent des `fn` simples (pas de closures capturantes) :
// un Op se clone sans surprise et le registre reste immuable.

use std::fmt;

/// Précédence maximale : un élément qui n’a jamais besoin de parenthèses.
pub const PRECEDENCE_MAX: i32 = i32::MAX;

#[derive(Clone, Debug)]
pub enum Op {
    Operande(f64),
    Variable(String),

    Constante {
        symbole: &'static str,
        valeur: fn() -> f64,
    },
    Unaire {
        symbole: &'static str,
        f: fn(f64) -> f64,
    },
    /// `f(op1, op2)` : op1 est l’élément le plus proche du sommet (poussé en dernier).
    Binaire {
        symbole: &'static str,
        precedence: i32,
        f: fn(f64, f64) -> f64,
    },
}

impl Op {
    pub fn precedence(&self) -> i32 {
        match self {
            Op::Binaire { precedence, .. } => *precedence,
            _ => PRECEDENCE_MAX,
        }
    }

    /// Symbole du registre, si l’élément est une opération.
    pub fn symbole(&self) -> Option<&'static str> {
        match self {
            Op::Constante { symbole, .. }
            | Op::Unaire { symbole, .. }
            | Op::Binaire { symbole, .. } => Some(*symbole),
            Op::Operande(_) | Op::Variable(_) => None,
        }
    }
}

/// Texte canonique : nombre, nom de variable ou symbole.
/// C’est aussi le jeton du programme sérialisé.
impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Operande(v) => f.write_str(&format_nombre(*v)),
            Op::Variable(nom) => f.write_str(nom),
            Op::Constante { symbole, .. }
            | Op::Unaire { symbole, .. }
            | Op::Binaire { symbole, .. } => f.write_str(symbole),
        }
    }
}

/// Égalité structurelle : les fonctions sont identifiées par leur symbole
/// (le registre garantit un symbole = une fonction).
impl PartialEq for Op {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Op::Operande(a), Op::Operande(b)) => a.to_bits() == b.to_bits(),
            (Op::Variable(a), Op::Variable(b)) => a == b,
            (Op::Constante { symbole: a, .. }, Op::Constante { symbole: b, .. })
            | (Op::Unaire { symbole: a, .. }, Op::Unaire { symbole: b, .. })
            | (Op::Binaire { symbole: a, .. }, Op::Binaire { symbole: b, .. }) => a == b,
            _ => false,
        }
    }
}

/// Texte d’un nombre :
/// - entier fini -> sans partie décimale ("9", "-4")
/// - autre fini  -> forme décimale la plus courte qui relit la même valeur ("0.1")
/// - très grand ou très petit -> notation exponentielle ("1e20", "5e-9")
/// - non fini    -> "inf", "-inf", "NaN" (relus tels quels par le programme)
pub fn format_nombre(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let a = v.abs();
    if a >= EXPOSANT_AU_DELA || (a != 0.0 && a < EXPOSANT_EN_DECA) {
        return format!("{v:e}");
    }
    // -0.0 s’affiche "-0" : on garde le signe, il survit à l’aller-retour.
    format!("{v}")
}

/// Bornes de la notation exponentielle.
const EXPOSANT_AU_DELA: f64 = 1e16;
const EXPOSANT_EN_DECA: f64 = 1e-6;
