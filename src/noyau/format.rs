// src/noyau/format.rs

use super::erreur::ErreurCalc;
use super::expr::Nombre;
use super::{Mode, DECIMALES_STANDARD, PREFIXE_DEC};

/// Paire rendue par l’écran : `principal` fait foi (et redevient l’entrée),
/// `secondaire` est indicatif (DEC, "Sorted", ou vide).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Affichage {
    pub principal: String,
    pub secondaire: String,
}

impl Affichage {
    pub fn new(principal: impl Into<String>, secondaire: impl Into<String>) -> Self {
        Self {
            principal: principal.into(),
            secondaire: secondaire.into(),
        }
    }

    pub fn erreur(e: &ErreurCalc) -> Self {
        Self::new(e.message_affiche(), "")
    }
}

/// Valeur -> paire d’affichage selon le mode.
///
/// - Programmeur : hexa majuscule sans préfixe (négatif : "-F"), secondaire "DEC: n".
///   Un réel n’y a pas de forme : écran d’erreur, jamais de troncature.
/// - Standard    : arrondi à 10 décimales puis forme minimale ("33", pas "33.0")
pub fn format(valeur: Nombre, mode: Mode) -> Affichage {
    match (mode, valeur) {
        (Mode::Programmer, Nombre::Entier(n)) => {
            Affichage::new(format_hex(n), format!("{PREFIXE_DEC}{n}"))
        }
        (Mode::Programmer, Nombre::Reel(r)) => Affichage::erreur(
            &ErreurCalc::ExpressionNonSupportee(format!("réel {r} en mode programmeur")),
        ),
        (Mode::Standard, _) => Affichage::new(format_decimal(valeur), ""),
    }
}

/// Hexa majuscule, signe explicite pour les négatifs (pas de complément à deux).
pub fn format_hex(n: i64) -> String {
    if n.is_negative() {
        format!("-{:X}", n.unsigned_abs())
    } else {
        format!("{n:X}")
    }
}

/// Forme décimale affichée en mode standard (avec arrondi anti-bruit).
pub fn format_decimal(valeur: Nombre) -> String {
    match valeur {
        Nombre::Entier(n) => n.to_string(),
        Nombre::Reel(r) => format_reel(arrondi(r, DECIMALES_STANDARD)),
    }
}

/// Arrondi décimal exact à `decimales` chiffres (passage par l’écriture décimale).
pub fn arrondi(x: f64, decimales: usize) -> f64 {
    if !x.is_finite() {
        return x;
    }
    format!("{x:.decimales$}").parse().unwrap_or(x)
}

/// Forme minimale : entier sans ".0" si pas de partie fractionnaire, "-0" -> "0".
pub fn format_reel(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    if x.fract() == 0.0 {
        format!("{x:.0}")
    } else {
        format!("{x}")
    }
}
