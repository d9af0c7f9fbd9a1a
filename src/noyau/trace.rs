// src/noyau/trace.rs
//
// Tracé d’un programme : y = f(M) échantillonné une fois par colonne de pixels.
// - le programme arrive sérialisé (Programme) dans un moteur dédié
// - pour chaque colonne : M <- x (unités), puis évaluation
// - absent ou non fini => trou dans la courbe
//
// Repère: x = (px - centre.x) / échelle ; py = centre.y - échelle * y

use crate::reglages::{ECHELLE_DEFAUT, ECHELLE_MAX, ECHELLE_MIN, TAILLE_TRACE, VARIABLE_MEMOIRE};

use super::moteur::Moteur;
use super::programme::Programme;

#[derive(Clone, Debug)]
pub struct Trace {
    moteur: Moteur,
    echelle: f32,
    taille: [f32; 2],
    // None => milieu de la surface
    centre: Option<[f32; 2]>,
}

impl Default for Trace {
    fn default() -> Self {
        Self {
            moteur: Moteur::new(),
            echelle: ECHELLE_DEFAUT,
            taille: TAILLE_TRACE,
            centre: None,
        }
    }
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remplace la fonction tracée.
    pub fn charger(&mut self, programme: &Programme) {
        self.moteur.set_programme(programme);
    }

    /// Texte de la fonction tracée ("Empty" si rien).
    pub fn description(&self) -> String {
        self.moteur.description_courte()
    }

    pub fn echelle(&self) -> f32 {
        self.echelle
    }

    /// Garde-fou : échelle bornée à [ECHELLE_MIN, ECHELLE_MAX].
    pub fn set_echelle(&mut self, echelle: f32) {
        self.echelle = if echelle.is_nan() {
            ECHELLE_DEFAUT
        } else {
            echelle.clamp(ECHELLE_MIN, ECHELLE_MAX)
        };
    }

    pub fn taille(&self) -> [f32; 2] {
        self.taille
    }

    /// Nouvelle taille de surface : un centre explicite suit le milieu
    /// (décalé de la moitié de la variation).
    pub fn set_taille(&mut self, taille: [f32; 2]) {
        if let Some(c) = self.centre.as_mut() {
            c[0] += (taille[0] - self.taille[0]) / 2.0;
            c[1] += (taille[1] - self.taille[1]) / 2.0;
        }
        self.taille = taille;
    }

    pub fn centre(&self) -> [f32; 2] {
        self.centre
            .unwrap_or([self.taille[0] / 2.0, self.taille[1] / 2.0])
    }

    /// Double-clic : l’origine passe sous le pointeur.
    pub fn set_centre(&mut self, centre: [f32; 2]) {
        self.centre = Some(centre);
    }

    /// Glisser : l’origine suit le pointeur.
    pub fn deplacer(&mut self, delta: [f32; 2]) {
        let [cx, cy] = self.centre();
        self.centre = Some([cx + delta[0], cy + delta[1]]);
    }

    /// Pincer / molette : échelle multipliée, toujours bornée.
    pub fn zoomer(&mut self, facteur: f32) {
        self.set_echelle(self.echelle * facteur);
    }

    pub fn x_unite(&self, px: f32) -> f64 {
        f64::from((px - self.centre()[0]) / self.echelle)
    }

    pub fn y_pixel(&self, y: f64) -> f32 {
        self.centre()[1] - self.echelle * y as f32
    }

    /// f(x) avec M lié à x ; None si absent ou non fini.
    pub fn valeur(&mut self, x: f64) -> Option<f64> {
        self.moteur.set_variable(VARIABLE_MEMOIRE, x);
        self.moteur.evaluer().filter(|y| y.is_finite())
    }

    /// Un point (px, py) par colonne de pixels, None là où la courbe est coupée.
    pub fn echantillons(&mut self) -> Vec<Option<[f32; 2]>> {
        let colonnes = self.taille[0].max(0.0) as usize;
        (0..=colonnes)
            .map(|i| {
                let px = i as f32;
                let x = self.x_unite(px);
                self.valeur(x).map(|y| [px, self.y_pixel(y)])
            })
            .collect()
    }

    /// Segments continus de la courbe (au moins deux points chacun).
    pub fn segments(&mut self) -> Vec<Vec<[f32; 2]>> {
        let mut segments = Vec::new();
        let mut courant: Vec<[f32; 2]> = Vec::new();

        for point in self.echantillons() {
            match point {
                Some(p) => courant.push(p),
                None => {
                    if courant.len() > 1 {
                        segments.push(std::mem::take(&mut courant));
                    } else {
                        courant.clear();
                    }
                }
            }
        }
        if courant.len() > 1 {
            segments.push(courant);
        }
        segments
    }
}
