// src/app.rs
//
// Calculatrice hexa: module App (racine)
// --------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (global, une seule fois par frame) :
// - caractères du pavé (0-9, A-F, + - * / . ( ) , =)
// - Enter = "=", Backspace = DEL, Escape = AC

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Touche;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for touche in touches_clavier(ctx) {
            self.appuyer(touche);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });

        // après la vue : le sélecteur de mode a pu demander une autre taille
        if let Some([w, h]) = self.prendre_redimension() {
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(w, h)));
        }
    }
}

/// Événements clavier de la frame -> touches, dans l’ordre de frappe.
fn touches_clavier(ctx: &egui::Context) -> Vec<Touche> {
    ctx.input(|i| {
        let mut out = Vec::new();
        for ev in &i.events {
            match ev {
                egui::Event::Text(texte) => out.extend(texte.chars().filter_map(Touche::depuis_char)),
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => out.push(Touche::Egal),
                    egui::Key::Backspace => out.push(Touche::Retour),
                    egui::Key::Escape => out.push(Touche::Clear),
                    _ => {}
                },
                _ => {}
            }
        }
        out
    })
}
