// src/noyau/apercu.rs
//
// Aperçu décimal pendant la saisie en mode programmeur.
// Appelé à chaque touche : une seule lecture, pas d’arbre, jamais d’erreur.

use super::PREFIXE_DEC;

/// "DEC: n" si le texte entier est une suite non vide de chiffres hexa, sinon "".
pub fn preview_hex(texte: &str) -> String {
    if texte.is_empty() || !texte.chars().all(|c| c.is_ascii_hexdigit()) {
        return String::new();
    }
    match i64::from_str_radix(texte, 16) {
        Ok(v) => format!("{PREFIXE_DEC}{v}"),
        // trop de chiffres pour i64 : pas d’aperçu
        Err(_) => String::new(),
    }
}
