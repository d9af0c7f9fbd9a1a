//! Moteur d’expressions RPN
//!
//! Contient la pile (append-only au sommet), le registre des opérations et
//! les valeurs des variables. Tout le reste (évaluer, annuler, afficher,
//! sérialiser) est une fonction pure de la pile + variables.
//!
//! Contrats :
//! - Chaque mutation renvoie l’évaluation complète de la pile (pas de cache).
//! - Symbole inconnu : ignoré (pile inchangée), jamais une erreur.
//! - Programme mal formé : refusé en bloc, pile d’origine conservée.
//! - Les variables ne sont jamais modifiées par l’évaluation.

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use super::eval::evaluer;
use super::format;
use super::op::Op;
use super::programme::{ErreurProgramme, Programme};
use super::registre::Registre;

#[derive(Clone, Debug, Default)]
pub struct Moteur {
    pile: Vec<Op>,
    registre: Registre,
    variables: HashMap<String, f64>,
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Entrées ------------------------ */

    pub fn push_operande(&mut self, valeur: f64) -> Option<f64> {
        self.pile.push(Op::Operande(valeur));
        trace!(valeur, taille = self.pile.len(), "opérande empilée");
        self.evaluer()
    }

    /// Le nom n’a pas besoin d’être lié maintenant.
    pub fn push_variable(&mut self, nom: impl Into<String>) -> Option<f64> {
        let nom = nom.into();
        trace!(%nom, taille = self.pile.len() + 1, "variable empilée");
        self.pile.push(Op::Variable(nom));
        self.evaluer()
    }

    /// Empile l’opération si le symbole est connu ; sinon, pile inchangée.
    pub fn appliquer_operation(&mut self, symbole: &str) -> Option<f64> {
        match self.registre.get(symbole) {
            Some(op) => {
                self.pile.push(op.clone());
                trace!(symbole, taille = self.pile.len(), "opération empilée");
            }
            None => debug!(symbole, "symbole inconnu ignoré"),
        }
        self.evaluer()
    }

    /// Retire le dernier élément (no-op sur pile vide).
    pub fn annuler(&mut self) -> Option<f64> {
        if let Some(op) = self.pile.pop() {
            trace!(%op, taille = self.pile.len(), "annulation");
        }
        self.evaluer()
    }

    /// Vide la pile. Les variables restent (c’est à l’appelant de les effacer).
    pub fn clear(&mut self) {
        self.pile.clear();
        trace!("pile vidée");
    }

    /* ------------------------ Sorties ------------------------ */

    pub fn evaluer(&self) -> Option<f64> {
        evaluer(&self.pile, &self.variables)
    }

    /// Historique complet : "a , b , c=" ; "Empty" si vide.
    pub fn description(&self) -> String {
        format::description(&self.pile)
    }

    /// Dernière expression seulement ; "Empty" si vide.
    pub fn description_courte(&self) -> String {
        format::description_courte(&self.pile)
    }

    pub fn est_vide(&self) -> bool {
        self.pile.is_empty()
    }

    /* ------------------------ Programme ------------------------ */

    pub fn programme(&self) -> Programme {
        Programme::depuis_pile(&self.pile)
    }

    /// Remplace la pile par le programme donné (reconstruction complète).
    pub fn set_programme(&mut self, programme: &Programme) {
        self.pile = programme.vers_pile(&self.registre);
        trace!(taille = self.pile.len(), "programme chargé");
    }

    /// Variante transport : un document d’une autre forme est refusé,
    /// la pile reste celle d’avant.
    pub fn set_programme_json(&mut self, doc: &str) -> Result<(), ErreurProgramme> {
        match Programme::from_json(doc) {
            Ok(programme) => {
                self.set_programme(&programme);
                Ok(())
            }
            Err(e) => {
                warn!(erreur = %e, "programme refusé");
                Err(e)
            }
        }
    }

    /* ------------------------ Variables ------------------------ */

    pub fn variables(&self) -> &HashMap<String, f64> {
        &self.variables
    }

    pub fn variables_mut(&mut self) -> &mut HashMap<String, f64> {
        &mut self.variables
    }

    pub fn set_variable(&mut self, nom: impl Into<String>, valeur: f64) {
        self.variables.insert(nom.into(), valeur);
    }
}
