// src/noyau/programme.rs
//
// Programme sérialisé : suite ordonnée de jetons texte (postfixe, sans structure).
// - lecture d’un jeton : symbole du registre > nombre (séparateur '.' ou ',') > variable
// - transport JSON : tableau de chaînes, tout autre document est refusé en bloc

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::op::Op;
use super::registre::Registre;

/// Programme transportable (même forme que `Moteur::programme()`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Programme(pub Vec<String>);

#[derive(Debug, Error)]
pub enum ErreurProgramme {
    #[error("programme illisible: {0}")]
    Json(#[source] serde_json::Error),

    #[error("programme mal formé: une suite de chaînes est attendue ({0})")]
    Forme(#[source] serde_json::Error),
}

impl Programme {
    /// Pile -> jetons.
    pub fn depuis_pile(pile: &[Op]) -> Self {
        Self(pile.iter().map(Op::to_string).collect())
    }

    /// Jetons -> pile (jamais d’échec : un jeton inconnu devient une variable).
    pub fn vers_pile(&self, registre: &Registre) -> Vec<Op> {
        self.0.iter().map(|j| lire_jeton(j, registre)).collect()
    }

    pub fn to_json(&self) -> String {
        // Vec<String> -> JSON n’échoue pas en pratique.
        serde_json::to_string(self).unwrap_or_else(|_| "[]".to_string())
    }

    /// Décode un document JSON.
    /// - pas du JSON            -> ErreurProgramme::Json
    /// - JSON d’une autre forme -> ErreurProgramme::Forme
    pub fn from_json(doc: &str) -> Result<Self, ErreurProgramme> {
        let valeur: serde_json::Value = serde_json::from_str(doc).map_err(ErreurProgramme::Json)?;
        serde_json::from_value(valeur).map_err(ErreurProgramme::Forme)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Programme {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(|s| s.as_ref().to_string()).collect())
    }
}

/// Un jeton, dans l’ordre de priorité: opération connue, nombre, variable.
pub fn lire_jeton(jeton: &str, registre: &Registre) -> Op {
    if let Some(op) = registre.get(jeton) {
        return op.clone();
    }
    if let Some(v) = lire_nombre(jeton) {
        return Op::Operande(v);
    }
    Op::Variable(jeton.to_string())
}

/// Lecture d’un nombre, tolérante au séparateur décimal ',' (saisie localisée).
///
/// Un jeton est numérique s’il commence par un chiffre, un signe ou un séparateur,
/// ou s’il vaut exactement "inf", "-inf" ou "NaN" (texte des non-finis).
/// Ainsi "e", "nan" ou "infinity" restent des noms de variables.
pub fn lire_nombre(jeton: &str) -> Option<f64> {
    match jeton {
        "inf" => return Some(f64::INFINITY),
        "-inf" => return Some(f64::NEG_INFINITY),
        "NaN" => return Some(f64::NAN),
        _ => {}
    }

    let premier = jeton.chars().next()?;
    if !(premier.is_ascii_digit() || matches!(premier, '+' | '-' | '.' | ',')) {
        return None;
    }
    // Après le signe, il faut un chiffre ou un séparateur ("-inf" est déjà traité).
    let corps = jeton.trim_start_matches(['+', '-']);
    if !corps.starts_with(|c: char| c.is_ascii_digit() || c == '.' || c == ',') {
        return None;
    }

    let normalise = match (jeton.contains('.'), jeton.matches(',').count()) {
        (false, 1) => jeton.replacen(',', ".", 1),
        (_, 0) => jeton.to_string(),
        _ => return None,
    };
    normalise.parse::<f64>().ok()
}
