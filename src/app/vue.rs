// src/app/vue.rs
//
// Vue (UI egui): natif + web
// ---------------------------
// Objectifs :
// - Sélecteur de mode (Standard / Programmeur)
// - Écran : principal (gros, aligné à droite) + secondaire (DEC / Sorted)
// - Pavé 4 colonnes (standard) ou 6 colonnes (programmeur, lettres A–F)
//
// La vue ne calcule rien : chaque bouton devient une `Touche` pour la session.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Mode, Touche};

/// Case de pavé : libellé + touche (None = case vide).
type Case = Option<(&'static str, Touche)>;

const fn car(label: &'static str, c: char) -> Case {
    Some((label, Touche::Car(c)))
}

const AC: Case = Some(("AC", Touche::Clear));
const DEL: Case = Some(("DEL", Touche::Retour));
const TRI: Case = Some(("Tri", Touche::Trier));
const EGAL: Case = Some(("=", Touche::Egal));

const PAVE_STANDARD: [[Case; 4]; 5] = [
    [AC, DEL, TRI, car("/", '/')],
    [car("7", '7'), car("8", '8'), car("9", '9'), car("*", '*')],
    [car("4", '4'), car("5", '5'), car("6", '6'), car("-", '-')],
    [car("1", '1'), car("2", '2'), car("3", '3'), car("+", '+')],
    [car("0", '0'), car(",", ','), car(".", '.'), EGAL],
];

const PAVE_PROGRAMMEUR: [[Case; 6]; 5] = [
    [car("A", 'A'), car("B", 'B'), AC, DEL, TRI, car("/", '/')],
    [car("C", 'C'), car("D", 'D'), car("7", '7'), car("8", '8'), car("9", '9'), car("*", '*')],
    [car("E", 'E'), car("F", 'F'), car("4", '4'), car("5", '5'), car("6", '6'), car("-", '-')],
    [car("(", '('), car(")", ')'), car("1", '1'), car("2", '2'), car("3", '3'), car("+", '+')],
    [car(",", ','), None, car("0", '0'), None, None, EGAL],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_modes(ui);
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        match self.session.mode() {
            Mode::Standard => self.ui_pave(ui, "pave_standard", &PAVE_STANDARD[..]),
            Mode::Programmer => self.ui_pave(ui, "pave_programmeur", &PAVE_PROGRAMMEUR[..]),
        }
    }

    fn ui_modes(&mut self, ui: &mut egui::Ui) {
        let mut mode = self.session.mode();
        ui.horizontal(|ui| {
            ui.selectable_value(&mut mode, Mode::Standard, "Standard");
            ui.selectable_value(&mut mode, Mode::Programmer, "Programmeur");
        });
        self.changer_mode(mode);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(
                        egui::RichText::new(self.session.principal())
                            .monospace()
                            .size(32.0)
                            .strong(),
                    );
                    // hauteur stable même si le secondaire est vide
                    let sec = self.session.secondaire();
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(if sec.is_empty() { " " } else { sec })
                                .monospace()
                                .size(12.0)
                                .weak(),
                        );
                        // "=" rejouera ce pas tant que le résultat est à l'écran
                        if let Some(r) = self.session.repetition() {
                            if self.session.resultat_affiche() {
                                ui.label(
                                    egui::RichText::new(format!(
                                        "= {}{}",
                                        r.operateur.symbole(),
                                        r.operande
                                    ))
                                    .monospace()
                                    .size(12.0)
                                    .weak(),
                                );
                            }
                        }
                    });
                });
            });
    }

    fn ui_pave<const N: usize>(&mut self, ui: &mut egui::Ui, id: &str, pave: &[[Case; N]]) {
        let largeur = ((ui.available_width() - 6.0 * (N as f32 - 1.0)) / N as f32).max(40.0);

        egui::Grid::new(id)
            .num_columns(N)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in pave {
                    for case in ligne {
                        match case {
                            Some((label, touche)) => {
                                let resp = ui.add_sized(
                                    [largeur, 52.0],
                                    egui::Button::new(egui::RichText::new(*label).size(18.0)),
                                );
                                if resp.clicked() {
                                    self.appuyer(*touche);
                                }
                            }
                            None => {
                                ui.label("");
                            }
                        }
                    }
                    ui.end_row();
                }
            });
    }
}
