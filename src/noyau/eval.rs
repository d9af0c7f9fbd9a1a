//! Noyau — évaluation récursive de la pile RPN
//!
//! On consomme depuis le sommet (fin du slice) :
//! - Operande / Variable / Constante : 0 élément dessous
//! - Unaire : 1 sous-expression
//! - Binaire : 2 sous-expressions (op1 = la plus proche du sommet)
//!
//! La pile n’est jamais modifiée : chaque appel reçoit une vue (`&[Op]`)
//! et rend le reste non consommé.

use std::collections::HashMap;

use super::op::Op;

/// Résultat d’une étape : valeur (absente si impossible) + reste de la pile.
pub type Etape<'a> = (Option<f64>, &'a [Op]);

/// Évalue la sous-expression enracinée au sommet de `pile`.
///
/// Absent si : pile vide, variable non liée, opérandes manquantes.
/// En cas d’absence, le reste rendu est `pile` elle-même.
pub fn evaluer_pile<'a>(pile: &'a [Op], variables: &HashMap<String, f64>) -> Etape<'a> {
    let Some((sommet, reste)) = pile.split_last() else {
        return (None, pile);
    };

    let etape = match sommet {
        Op::Operande(v) => Some((*v, reste)),
        Op::Variable(nom) => variables.get(nom).map(|v| (*v, reste)),
        Op::Constante { valeur, .. } => Some((valeur(), reste)),
        Op::Unaire { f, .. } => operande(reste, variables).map(|(op1, reste1)| (f(op1), reste1)),
        Op::Binaire { f, .. } => operande(reste, variables).and_then(|(op1, reste1)| {
            operande(reste1, variables).map(|(op2, reste2)| (f(op1, op2), reste2))
        }),
    };

    match etape {
        Some((v, reste)) => (Some(v), reste),
        None => (None, pile),
    }
}

/// Variante `Option` pour chaîner avec `?` / `and_then`.
fn operande<'a>(pile: &'a [Op], variables: &HashMap<String, f64>) -> Option<(f64, &'a [Op])> {
    match evaluer_pile(pile, variables) {
        (Some(v), reste) => Some((v, reste)),
        (None, _) => None,
    }
}

/// Évaluation « publique » : le reste non consommé est ignoré.
pub fn evaluer(pile: &[Op], variables: &HashMap<String, f64>) -> Option<f64> {
    evaluer_pile(pile, variables).0
}
