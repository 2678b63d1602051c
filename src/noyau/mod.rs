//! Noyau calculatrice (standard décimal + programmeur hexa)
//!
//! Organisation interne :
//! - erreur.rs     : taxonomie d’erreurs (jamais visible telle quelle)
//! - jetons.rs     : tokenisation selon le mode
//! - rpn.rs        : shunting-yard + construction Expr
//! - expr.rs       : arbre fermé (Lit / Unaire / Binaire) + Nombre
//! - eval.rs       : parcours de l’arbre + frontière `evaluate`
//! - format.rs     : paire d’affichage (principal, secondaire)
//! - tri.rs        : tri d’une liste "a,b,c"
//! - apercu.rs     : aperçu DEC pendant la saisie hexa
//! - repetition.rs : dernier (opérateur, opérande) pour "=" répété
//! - session.rs    : contrôleur touche par touche (mode + répétition)

pub mod apercu;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod repetition;
pub mod rpn;
pub mod session;
pub mod tri;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

/// Entrée spéciale : court-circuite toute évaluation, quel que soit le mode.
pub const EASTER_EGG: &str = "233";

/// Texte affiché à la place d’un résultat pour l’easter egg.
pub const TEXTE_EASTER_EGG: &str = "哈哈哈";

/// Précision d’arrondi en mode standard (bruit flottant).
pub const DECIMALES_STANDARD: usize = 10;

/// Profondeur maximale de l’arbre (une chaîne "1+1+…" a autant de niveaux que de termes).
pub const PROFONDEUR_MAX: usize = 1000;

/// Préfixe de l’indication décimale (résultat hexa, aperçu).
pub const PREFIXE_DEC: &str = "DEC: ";

/// Marqueur secondaire d’un tri réussi.
pub const MARQUE_TRI: &str = "Sorted";

pub const MSG_ERREUR: &str = "Error";
pub const MSG_DIV_ZERO: &str = "Error: Div 0";
pub const MSG_TRI: &str = "Error: Sort";

/// Mode de calcul, possédé par la session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Décimal, arithmétique réelle.
    #[default]
    Standard,
    /// Hexadécimal, arithmétique entière (+ indication DEC).
    Programmer,
}

// API publique minimale (la vue ne passe que par la session)
pub use session::{Session, Touche};
