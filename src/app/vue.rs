// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran + pavé (chiffres, opérateurs, parenthèses, C, DEL, =)
// - Clavier : Enter évalue, Backspace efface le dernier symbole (Escape est géré dans app.rs)
// - Réglages du noyau modifiables à chaud (lexique, politique, arithmétique)

use eframe::egui;

use super::etat::AppCalc;
use crate::reglages::{Arithmetique, Lexique, Politique};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice OPN");
        ui.add_space(6.0);

        self.ui_clavier_physique(ui);
        self.ui_ecran(ui);

        ui.add_space(8.0);
        self.ui_pave(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_reglages(ui);

        ui.add_space(8.0);
        self.ui_demarche(ui);
    }

    fn ui_clavier_physique(&mut self, ui: &mut egui::Ui) {
        let (enter, backspace, saisis) = ui.input(|i| {
            let saisis: Vec<char> = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.chars().collect::<Vec<_>>()),
                    _ => None,
                })
                .flatten()
                .filter(|c| c.is_ascii_digit() || "+-*/().".contains(*c))
                .collect();
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
                saisis,
            )
        });

        for c in saisis {
            self.saisir(c);
        }
        if enter {
            self.calculer();
        }
        if backspace {
            self.retour_arriere();
        }
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        // Affichage lecture seule, cadre visuel + monospace (pas de TextEdit : la saisie passe par AppCalc)
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(egui::RichText::new(&self.ecran).monospace().size(26.0));
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_opn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in [['7', '8', '9', '/'], ['4', '5', '6', '*'], ['1', '2', '3', '-']] {
                    for c in rangee {
                        self.bouton_symbole(ui, c);
                    }
                    ui.end_row();
                }

                for c in ['0', '.', '(', ')'] {
                    self.bouton_symbole(ui, c);
                }
                ui.end_row();

                self.bouton_action(ui, "C", "Efface tout", Action::Effacer);
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::RetourArriere);
                self.bouton_symbole(ui, '+');
                self.bouton_action(ui, "=", "Calcule", Action::Calculer);
                ui.end_row();
            });
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Réglages")
            .default_open(false)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Lexique :");
                    ui.selectable_value(&mut self.reglages.lexique, Lexique::Permissif, "permissif");
                    ui.selectable_value(&mut self.reglages.lexique, Lexique::Strict, "strict");
                });
                ui.horizontal(|ui| {
                    ui.label("Évaluation :");
                    ui.selectable_value(
                        &mut self.reglages.politique,
                        Politique::Tolerante,
                        "tolérante",
                    );
                    ui.selectable_value(&mut self.reglages.politique, Politique::Stricte, "stricte");
                });
                ui.horizontal(|ui| {
                    ui.label("Arithmétique :");
                    ui.selectable_value(
                        &mut self.reglages.arithmetique,
                        Arithmetique::Flottante,
                        "flottante",
                    );
                    ui.selectable_value(
                        &mut self.reglages.arithmetique,
                        Arithmetique::Exacte,
                        "exacte",
                    );
                });
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "OPN", &self.demarche.postfixe);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.monospace(contenu);
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([64.0, 44.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::Effacer => self.effacer(),
                Action::RetourArriere => self.retour_arriere(),
                Action::Calculer => self.calculer(),
            }
        }
    }

    fn bouton_symbole(&mut self, ui: &mut egui::Ui, c: char) {
        let resp = ui.add_sized([64.0, 44.0], egui::Button::new(c.to_string()));
        if resp.clicked() {
            self.saisir(c);
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Effacer,
    RetourArriere,
    Calculer,
}
