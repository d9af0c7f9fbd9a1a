// src/noyau/registre.rs
//
// Registre des opérations connues (symbole -> Op).
// Construit une fois par moteur, jamais modifié ensuite.
//
// Convention d’ordre des opérandes (binaire) :
//   f(op1, op2) avec op1 = poussé en dernier, op2 = poussé avant.
//   "9 3 ÷" => 9 ÷ 3 ; "9 3 −" => 9 − 3.

use std::collections::HashMap;
use std::f64::consts::PI;

use super::op::Op;

pub const FOIS: &str = "×";
pub const DIVISE: &str = "÷";
pub const PLUS: &str = "+";
pub const MOINS: &str = "−";
pub const OPPOSE: &str = "⁺/₋";
pub const RACINE: &str = "√";
pub const SIN: &str = "sin";
pub const COS: &str = "cos";
pub const PI_SYMBOLE: &str = "π";

#[derive(Clone, Debug)]
pub struct Registre {
    ops: HashMap<&'static str, Op>,
}

impl Registre {
    /// Jeu d’opérations intégré.
    pub fn standard() -> Self {
        let mut registre = Self {
            ops: HashMap::new(),
        };

        registre.apprendre(Op::Binaire {
            symbole: FOIS,
            precedence: 2,
            f: |op1, op2| op2 * op1,
        });
        registre.apprendre(Op::Binaire {
            symbole: DIVISE,
            precedence: 2,
            f: |op1, op2| op2 / op1,
        });
        registre.apprendre(Op::Binaire {
            symbole: PLUS,
            precedence: 1,
            f: |op1, op2| op2 + op1,
        });
        registre.apprendre(Op::Binaire {
            symbole: MOINS,
            precedence: 1,
            f: |op1, op2| op2 - op1,
        });
        registre.apprendre(Op::Unaire {
            symbole: OPPOSE,
            f: |x| -x,
        });
        registre.apprendre(Op::Unaire {
            symbole: RACINE,
            f: f64::sqrt,
        });
        registre.apprendre(Op::Unaire {
            symbole: SIN,
            f: f64::sin,
        });
        registre.apprendre(Op::Unaire {
            symbole: COS,
            f: f64::cos,
        });
        registre.apprendre(Op::Constante {
            symbole: PI_SYMBOLE,
            valeur: || PI,
        });

        registre
    }

    fn apprendre(&mut self, op: Op) {
        if let Some(symbole) = op.symbole() {
            self.ops.insert(symbole, op);
        }
    }

    /// Recherche exacte par symbole.
    pub fn get(&self, symbole: &str) -> Option<&Op> {
        self.ops.get(symbole)
    }
}

impl Default for Registre {
    fn default() -> Self {
        Self::standard()
    }
}
