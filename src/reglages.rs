// src/reglages.rs
//
// Réglages de l’application (constantes + garde-fous).
// Pas de fichier de configuration : tout est fixé à la compilation.

/// Titre unique (natif + web).
pub const TITRE_APP: &str = "Calculatrice RPN";

/// Taille initiale / minimale de la fenêtre native.
pub const TAILLE_FENETRE: [f32; 2] = [420.0, 720.0];
pub const TAILLE_FENETRE_MIN: [f32; 2] = [360.0, 600.0];

/// Variable mémoire (boutons "M" et "→M") ; c’est aussi la variable balayée par le tracé.
pub const VARIABLE_MEMOIRE: &str = "M";

/// Échelle du tracé (pixels par unité).
pub const ECHELLE_DEFAUT: f32 = 50.0;

/// Garde-fou : bornes de l’échelle.
pub const ECHELLE_MIN: f32 = 1.0;
pub const ECHELLE_MAX: f32 = 10_000.0;

/// Surface de tracé par défaut (pixels).
pub const TAILLE_TRACE: [f32; 2] = [360.0, 240.0];
