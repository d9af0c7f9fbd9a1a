// src/app.rs
//
// Calculatrice RPN — module App (racine)
// --------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourcis clavier globaux minimaux (safe natif + web) :
        // chiffres / point / Enter / Backspace / ESC.
        // Ignorés quand un champ texte (programme JSON) a le focus.
        let touches = if ctx.wants_keyboard_input() {
            Vec::new()
        } else {
            ctx.input(|i| {
                i.events
                    .iter()
                    .filter_map(|e| match e {
                        egui::Event::Text(t) => Some(Touche::Texte(t.clone())),
                        egui::Event::Key {
                            key, pressed: true, ..
                        } => match key {
                            egui::Key::Enter => Some(Touche::Entrer),
                            egui::Key::Backspace => Some(Touche::Retour),
                            egui::Key::Escape => Some(Touche::Effacer),
                            _ => None,
                        },
                        _ => None,
                    })
                    .collect::<Vec<_>>()
            })
        };
        for touche in touches {
            self.touche(touche);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}

enum Touche {
    Texte(String),
    Entrer,
    Retour,
    Effacer,
}

impl AppCalc {
    fn touche(&mut self, touche: Touche) {
        match touche {
            Touche::Texte(t) => {
                for c in t.chars() {
                    match c {
                        '0'..='9' => self.ajouter_chiffre(c),
                        '.' | ',' => self.ajouter_point(),
                        _ => {}
                    }
                }
            }
            Touche::Entrer => self.entrer(),
            Touche::Retour => self.retour(),
            Touche::Effacer => self.effacer(),
        }
    }
}
