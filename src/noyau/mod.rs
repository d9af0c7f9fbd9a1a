//! Noyau RPN
//!
//! Organisation interne :
//! - op.rs        : éléments de la pile (opérande, variable, opérations)
//! - registre.rs  : opérations connues (symbole -> Op)
//! - eval.rs      : évaluation récursive depuis le sommet
//! - format.rs    : affichage infixe (parenthèses minimales, historique)
//! - programme.rs : sérialisation (jetons texte) + transport JSON
//! - moteur.rs    : Moteur (pile + variables), API pour l’appelant
//! - trace.rs     : échantillonnage d’un programme pour le tracé

pub mod eval;
pub mod format;
pub mod moteur;
pub mod op;
pub mod programme;
pub mod registre;
pub mod trace;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use moteur::Moteur;
pub use trace::Trace;
