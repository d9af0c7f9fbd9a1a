//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : l’appelant du moteur RPN. Il gère l’affichage en cours de saisie,
//! pousse les opérandes / opérations / variable mémoire, et relit le résultat
//! et l’historique après chaque action.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par le Moteur.
//! - Après chaque action qui touche la pile, `historique` == `moteur.description()`.
//! - Résultat absent => affichage vide (pas d’erreur).

use crate::noyau::op::format_nombre;
use crate::noyau::programme::lire_nombre;
use crate::noyau::registre::OPPOSE;
use crate::noyau::{Moteur, Trace};
use crate::reglages::VARIABLE_MEMOIRE;

/// Affichage au repos.
const AFFICHAGE_ZERO: &str = "0";

/// Séparateur décimal saisi au clavier.
const POINT: char = '.';

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- affichage ---
    pub affichage: String,
    pub historique: String,
    pub saisie_en_cours: bool,

    // --- transport du programme (JSON) ---
    pub programme_json: String,
    pub erreur: String,

    // --- tracé ---
    pub trace: Trace,
    pub trace_visible: bool,

    moteur: Moteur,
}

impl Default for AppCalc {
    fn default() -> Self {
        let moteur = Moteur::new();
        Self {
            affichage: AFFICHAGE_ZERO.to_string(),
            historique: moteur.description(),
            saisie_en_cours: false,
            programme_json: String::new(),
            erreur: String::new(),
            trace: Trace::new(),
            trace_visible: false,
            moteur,
        }
    }
}

impl AppCalc {
    pub fn moteur(&self) -> &Moteur {
        &self.moteur
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn ajouter_chiffre(&mut self, chiffre: char) {
        if self.saisie_en_cours {
            self.affichage.push(chiffre);
        } else {
            self.affichage = chiffre.to_string();
            self.saisie_en_cours = true;
        }
    }

    /// Un seul point par nombre ; en début de saisie on affiche "0.".
    pub fn ajouter_point(&mut self) {
        if self.saisie_en_cours {
            if !self.affichage.contains(POINT) {
                self.affichage.push(POINT);
            }
        } else {
            self.affichage = format!("{AFFICHAGE_ZERO}{POINT}");
            self.saisie_en_cours = true;
        }
    }

    /// Pousse la valeur affichée (ignoré si l’affichage n’est pas un nombre).
    pub fn entrer(&mut self) {
        let Some(v) = self.valeur_affichee() else {
            return;
        };
        self.saisie_en_cours = false;
        let r = self.moteur.push_operande(v);
        self.set_valeur_affichee(r);
        self.maj_historique();
    }

    /// ⁺/₋ pendant la saisie : change le signe du texte, sans toucher à la pile.
    /// Sinon : valide la saisie en cours puis applique l’opération.
    pub fn operer(&mut self, symbole: &str) {
        if self.saisie_en_cours {
            if symbole == OPPOSE {
                self.inverser_signe_saisie();
                return;
            }
            self.entrer();
        }

        let r = self.moteur.appliquer_operation(symbole);
        self.set_valeur_affichee(r);
        self.maj_historique();
    }

    fn inverser_signe_saisie(&mut self) {
        let Some(v) = self.valeur_affichee() else {
            return;
        };
        if let Some(sans_signe) = self.affichage.strip_prefix('-') {
            self.affichage = sans_signe.to_string();
        } else if v != 0.0 {
            self.affichage.insert(0, '-');
        }
    }

    /* ------------------------ Effacements ------------------------ */

    /// C : pile + variables + affichage.
    pub fn effacer(&mut self) {
        self.moteur.clear();
        self.moteur.variables_mut().clear();
        self.affichage = AFFICHAGE_ZERO.to_string();
        self.saisie_en_cours = false;
        self.erreur.clear();
        self.maj_historique();
    }

    /// ⌫ : pendant la saisie, retire un caractère ; sinon annule le dernier élément.
    pub fn retour(&mut self) {
        if !self.saisie_en_cours {
            let r = self.moteur.annuler();
            self.set_valeur_affichee(r);
            self.maj_historique();
            return;
        }

        if self.affichage.chars().count() > 1 {
            self.affichage.pop();
        } else {
            self.affichage = AFFICHAGE_ZERO.to_string();
            self.saisie_en_cours = false;
        }
    }

    /* ------------------------ Mémoire (variable M) ------------------------ */

    /// M : pousse la variable mémoire.
    pub fn push_memoire(&mut self) {
        self.saisie_en_cours = false;
        let r = self.moteur.push_variable(VARIABLE_MEMOIRE);
        self.set_valeur_affichee(r);
        self.maj_historique();
    }

    /// →M : lie M à la valeur affichée puis réévalue.
    pub fn set_memoire(&mut self) {
        let Some(v) = self.valeur_affichee() else {
            return;
        };
        self.saisie_en_cours = false;
        self.moteur.set_variable(VARIABLE_MEMOIRE, v);
        let r = self.moteur.evaluer();
        self.set_valeur_affichee(r);
        self.maj_historique();
    }

    /* ------------------------ Programme / tracé ------------------------ */

    /// Exporte le programme courant (JSON) dans le champ de transport.
    pub fn exporter_programme(&mut self) {
        self.programme_json = self.moteur.programme().to_json();
        self.erreur.clear();
    }

    /// Remplace la pile par le programme du champ de transport.
    /// Document mal formé : erreur affichée, pile inchangée.
    pub fn importer_programme(&mut self) {
        match self.moteur.set_programme_json(&self.programme_json) {
            Ok(()) => {
                self.erreur.clear();
                let r = self.moteur.evaluer();
                self.set_valeur_affichee(r);
                self.maj_historique();
            }
            Err(e) => self.erreur = e.to_string(),
        }
    }

    /// Envoie le programme courant à la surface de tracé.
    pub fn tracer(&mut self) {
        self.trace.charger(&self.moteur.programme());
        self.trace_visible = true;
    }

    /* ------------------------ Affichage ------------------------ */

    /// Valeur du texte affiché (None si vide / pas un nombre).
    pub fn valeur_affichee(&self) -> Option<f64> {
        lire_nombre(self.affichage.trim())
    }

    /// Résultat du moteur -> affichage (absent => vide).
    fn set_valeur_affichee(&mut self, valeur: Option<f64>) {
        self.affichage = valeur.map(format_nombre).unwrap_or_default();
        self.saisie_en_cours = false;
    }

    fn maj_historique(&mut self) {
        self.historique = self.moteur.description();
    }
}
