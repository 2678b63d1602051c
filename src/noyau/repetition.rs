// src/noyau/repetition.rs
//
// "=" répété : mémorise le dernier couple (opérateur, opérande) d’une expression
// évaluée, pour le ré-appliquer à la valeur affichée ("5+3" = 8, = 11, = 14…).

use lazy_static::lazy_static;
use regex::Regex;

use super::expr::Op;

lazy_static! {
    /// "opérande opérateur opérande" ancré en fin de texte.
    /// Les opérandes couvrent les deux alphabets (décimal et hexa).
    static ref MOTIF_FIN: Regex = Regex::new(
        r"([0-9A-Fa-f.]+)\s*([-+*/])\s*([0-9A-Fa-f.]+)\s*$"
    ).unwrap();
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Repetition {
    pub operateur: Op,
    pub operande: String,
}

impl Repetition {
    /// Expression à évaluer pour un nouveau "=" : affiché + opérateur + opérande.
    pub fn expression_depuis(&self, affiche: &str) -> String {
        format!("{affiche}{}{}", self.operateur.symbole(), self.operande)
    }
}

/// Cherche le motif final ; None si l’expression ne se termine pas par "a op b".
pub fn extract_repeat_state(expression: &str) -> Option<Repetition> {
    let caps = MOTIF_FIN.captures(expression)?;
    let operateur = caps.get(2)?.as_str().chars().next().and_then(Op::depuis_char)?;
    let operande = caps.get(3)?.as_str().to_string();
    Some(Repetition {
        operateur,
        operande,
    })
}
