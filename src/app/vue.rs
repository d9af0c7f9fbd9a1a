// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Gros boutons (tactile), aucune logique de calcul ici
// - Panneau "Tracé" : courbe du programme courant en fonction de M (sans axes)
//   glisser = déplacer, double-clic = recentrer, pincer / ctrl+molette = zoom

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::op::format_nombre;
use crate::noyau::registre::{COS, DIVISE, FOIS, MOINS, OPPOSE, PI_SYMBOLE, PLUS, RACINE, SIN};
use crate::reglages::{ECHELLE_MAX, ECHELLE_MIN, VARIABLE_MEMOIRE};

const TAILLE_BOUTON: [f32; 2] = [64.0, 36.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_affichage(ui);

                ui.add_space(8.0);
                self.ui_clavier(ui);

                ui.add_space(8.0);
                ui.separator();
                self.ui_programme(ui);

                if self.trace_visible {
                    ui.add_space(8.0);
                    ui.separator();
                    self.ui_trace(ui);
                }
            });
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.small(&self.historique);
                    if let Some(m) = self.moteur().variables().get(VARIABLE_MEMOIRE) {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.small(format!("{VARIABLE_MEMOIRE} = {}", format_nombre(*m)));
                        });
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.heading(egui::RichText::new(&self.affichage).monospace());
                });
            });
    }

    fn ui_clavier(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("clavier_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_op(ui, SIN);
                self.bouton_op(ui, COS);
                self.bouton_op(ui, RACINE);
                self.bouton_op(ui, PI_SYMBOLE);
                ui.end_row();

                self.bouton_chiffre(ui, '7');
                self.bouton_chiffre(ui, '8');
                self.bouton_chiffre(ui, '9');
                self.bouton_op(ui, DIVISE);
                ui.end_row();

                self.bouton_chiffre(ui, '4');
                self.bouton_chiffre(ui, '5');
                self.bouton_chiffre(ui, '6');
                self.bouton_op(ui, FOIS);
                ui.end_row();

                self.bouton_chiffre(ui, '1');
                self.bouton_chiffre(ui, '2');
                self.bouton_chiffre(ui, '3');
                self.bouton_op(ui, MOINS);
                ui.end_row();

                self.bouton_chiffre(ui, '0');
                self.bouton_action(ui, ".", Action::Point);
                self.bouton_op(ui, OPPOSE);
                self.bouton_op(ui, PLUS);
                ui.end_row();

                self.bouton_action(ui, "M", Action::PushMemoire);
                self.bouton_action(ui, "→M", Action::SetMemoire);
                self.bouton_action(ui, "C", Action::Effacer);
                self.bouton_action(ui, "⌫", Action::Retour);
                ui.end_row();

                self.bouton_action(ui, "Enter", Action::Entrer);
                let programme_vide = self.moteur().est_vide();
                ui.add_enabled_ui(!programme_vide, |ui| {
                    self.bouton_action(ui, "Tracé", Action::Tracer);
                });
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    fn ui_programme(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Programme")
            .default_open(false)
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.programme_json)
                        .desired_width(ui.available_width())
                        .desired_rows(2)
                        .hint_text(r#"["3","4","+"]"#)
                        .code_editor(),
                );
                ui.horizontal(|ui| {
                    if ui.button("Exporter").clicked() {
                        self.exporter_programme();
                    }
                    if ui.button("Importer").clicked() {
                        self.importer_programme();
                    }
                });
                if !self.erreur.is_empty() {
                    ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
                }
            });
    }

    fn ui_trace(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("Tracé : {}", self.trace.description()));
            if ui.button("Fermer").clicked() {
                self.trace_visible = false;
            }
        });

        let mut echelle = self.trace.echelle();
        let resp = ui.add(
            egui::Slider::new(&mut echelle, ECHELLE_MIN..=ECHELLE_MAX)
                .logarithmic(true)
                .text("px/unité"),
        );
        if resp.changed() {
            self.trace.set_echelle(echelle);
        }

        let largeur = ui.available_width();
        let hauteur = self.trace.taille()[1];
        let (resp, painter) =
            ui.allocate_painter(egui::vec2(largeur, hauteur), egui::Sense::click_and_drag());
        let zone = resp.rect;

        self.trace.set_taille([zone.width(), zone.height()]);

        // glisser : déplace l’origine ; double-clic : origine sous le pointeur
        if resp.dragged() {
            let d = resp.drag_delta();
            self.trace.deplacer([d.x, d.y]);
        }
        if resp.double_clicked() {
            if let Some(pos) = resp.interact_pointer_pos() {
                let p = pos - zone.min;
                self.trace.set_centre([p.x, p.y]);
            }
        }
        if resp.hovered() {
            let zoom = ui.input(|i| i.zoom_delta());
            if zoom != 1.0 {
                self.trace.zoomer(zoom);
            }
        }

        painter.rect_filled(zone, 0.0, ui.visuals().extreme_bg_color);
        let trait_courbe = egui::Stroke::new(1.5, ui.visuals().strong_text_color());

        for segment in self.trace.segments() {
            for paire in segment.windows(2) {
                let a = zone.min + egui::vec2(paire[0][0], paire[0][1]);
                let b = zone.min + egui::vec2(paire[1][0], paire[1][1]);
                if zone.contains(a) || zone.contains(b) {
                    painter.line_segment([a, b], trait_courbe);
                }
            }
        }
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, chiffre: char) {
        let texte = chiffre.to_string();
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(texte.as_str()));
        if resp.clicked() {
            self.ajouter_chiffre(chiffre);
        }
    }

    fn bouton_op(&mut self, ui: &mut egui::Ui, symbole: &str) {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(symbole));
        if resp.clicked() {
            self.operer(symbole);
        }
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, action: Action) {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(label));
        if resp.clicked() {
            match action {
                Action::Point => self.ajouter_point(),
                Action::Entrer => self.entrer(),
                Action::Effacer => self.effacer(),
                Action::Retour => self.retour(),
                Action::PushMemoire => self.push_memoire(),
                Action::SetMemoire => self.set_memoire(),
                Action::Tracer => self.tracer(),
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Point,
    Entrer,
    Effacer,
    Retour,
    PushMemoire,
    SetMemoire,
    Tracer,
}
