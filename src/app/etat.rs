//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : envelopper la session du noyau et ce que l’écran doit appliquer
//! à la frame suivante (redimensionnement au changement de mode).
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Session::touche`.
//! - Une demande de redimensionnement n’est consommée qu’une fois.

use crate::noyau::{Mode, Session, Touche};

/// Taille de fenêtre en mode standard (pavé 4 colonnes).
pub const TAILLE_STANDARD: [f32; 2] = [340.0, 520.0];

/// Taille de fenêtre en mode programmeur (pavé 6 colonnes).
pub const TAILLE_PROGRAMMEUR: [f32; 2] = [500.0, 520.0];

pub fn taille_fenetre(mode: Mode) -> [f32; 2] {
    match mode {
        Mode::Standard => TAILLE_STANDARD,
        Mode::Programmer => TAILLE_PROGRAMMEUR,
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub session: Session,

    // Taille demandée au viewport, appliquée puis oubliée par app.rs.
    redimension: Option<[f32; 2]>,
}

impl AppCalc {
    /// Une touche (bouton ou clavier).
    pub fn appuyer(&mut self, touche: Touche) {
        self.session.touche(touche);
    }

    /// Bascule de mode ; même mode = rien (pas de remise à zéro involontaire).
    pub fn changer_mode(&mut self, mode: Mode) {
        if mode == self.session.mode() {
            return;
        }
        tracing::debug!(?mode, "changement de mode");
        self.session.changer_mode(mode);
        self.redimension = Some(taille_fenetre(mode));
    }

    pub fn prendre_redimension(&mut self) -> Option<[f32; 2]> {
        self.redimension.take()
    }
}
