// src/noyau/format.rs
//
// Affichage infixe de la pile RPN.
// Même forme récursive que l’évaluation, mais on produit (texte, précédence, reste).
//
// Règles:
// - feuille (nombre / variable / constante) : texte brut, précédence max
// - unaire : "sym(x)", précédence max
// - binaire : "op2 sym op1", chaque côté entre parenthèses ssi sa précédence
//   est STRICTEMENT inférieure à celle de l’opérateur
// - pile épuisée en cours de route : "?" (l’affichage ne peut pas échouer)

use super::op::{Op, PRECEDENCE_MAX};

/// Texte d’une pile vide.
pub const VIDE: &str = "Empty";

/// Placeholder pour une opérande manquante.
pub const MANQUANT: &str = "?";

/// Séparateur de l’historique complet.
pub const SEPARATEUR: &str = " , ";

#[derive(Clone, Debug)]
pub struct Rendu<'a> {
    pub texte: String,
    pub precedence: i32,
    pub reste: &'a [Op],
}

/// Rend la sous-expression enracinée au sommet de `pile`.
pub fn rendre(pile: &[Op]) -> Rendu<'_> {
    let Some((sommet, reste)) = pile.split_last() else {
        return Rendu {
            texte: MANQUANT.to_string(),
            precedence: PRECEDENCE_MAX,
            reste: pile,
        };
    };

    let precedence = sommet.precedence();
    match sommet {
        Op::Operande(_) | Op::Variable(_) | Op::Constante { .. } => Rendu {
            texte: sommet.to_string(),
            precedence,
            reste,
        },

        Op::Unaire { symbole, .. } => {
            let x = rendre(reste);
            Rendu {
                texte: format!("{symbole}({})", x.texte),
                precedence,
                reste: x.reste,
            }
        }

        Op::Binaire { symbole, .. } => {
            let op1 = rendre(reste);
            let op2 = rendre(op1.reste);
            Rendu {
                texte: format!(
                    "{}{symbole}{}",
                    protege(&op2, precedence),
                    protege(&op1, precedence)
                ),
                precedence,
                reste: op2.reste,
            }
        }
    }
}

/// Parenthèses seulement si la sous-expression lie moins fort que l’opérateur.
fn protege(r: &Rendu<'_>, precedence: i32) -> String {
    if r.precedence < precedence {
        format!("({})", r.texte)
    } else {
        r.texte.clone()
    }
}

/// Historique complet : toutes les sous-expressions, la plus ancienne d’abord,
/// "=" final si le dernier élément est un calcul (binaire, unaire, variable).
pub fn description(pile: &[Op]) -> String {
    let Some(dernier) = pile.last() else {
        return VIDE.to_string();
    };

    let mut morceaux: Vec<String> = Vec::new();
    let mut reste = pile;
    while !reste.is_empty() {
        let r = rendre(reste);
        morceaux.push(r.texte);
        reste = r.reste;
    }
    morceaux.reverse();

    let mut texte = morceaux.join(SEPARATEUR);
    if matches!(
        dernier,
        Op::Binaire { .. } | Op::Unaire { .. } | Op::Variable(_)
    ) {
        texte.push('=');
    }
    texte
}

/// Dernière expression seulement (pas d’historique, pas de "=").
pub fn description_courte(pile: &[Op]) -> String {
    if pile.is_empty() {
        return VIDE.to_string();
    }
    rendre(pile).texte
}
