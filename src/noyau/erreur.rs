// src/noyau/erreur.rs
//
// Taxonomie d’erreurs du noyau.
// Le détail reste interne (traces) : l’utilisateur ne voit que
// "Error", "Error: Div 0" ou "Error: Sort".

use thiserror::Error;

use super::{MSG_DIV_ZERO, MSG_ERREUR, MSG_TRI};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalc {
    /// Caractère hors alphabet, parenthèses déséquilibrées, grammaire violée.
    #[error("syntaxe : {0}")]
    Syntaxe(String),

    #[error("division par zéro")]
    DivisionParZero,

    /// Noeud que le mode courant ne sait pas réduire.
    #[error("expression non supportée : {0}")]
    ExpressionNonSupportee(String),

    /// Élément de liste illisible (tri).
    #[error("tri : élément illisible {0:?}")]
    Tri(String),

    /// Suite de chiffres hexa non représentable.
    #[error("radix : {0}")]
    Radix(String),

    /// Entier hors i64 ou résultat réel non fini.
    #[error("dépassement de capacité")]
    Depassement,

    /// Arbre plus profond que `PROFONDEUR_MAX`.
    #[error("expression trop profonde ({0} niveaux)")]
    TropProfond(usize),
}

impl ErreurCalc {
    pub(crate) fn syntaxe(msg: impl Into<String>) -> Self {
        ErreurCalc::Syntaxe(msg.into())
    }

    /// Texte visible : division par zéro et tri ont leur marqueur, le reste est générique.
    pub fn message_affiche(&self) -> &'static str {
        match self {
            ErreurCalc::DivisionParZero => MSG_DIV_ZERO,
            ErreurCalc::Tri(_) => MSG_TRI,
            ErreurCalc::Syntaxe(_)
            | ErreurCalc::ExpressionNonSupportee(_)
            | ErreurCalc::Radix(_)
            | ErreurCalc::Depassement
            | ErreurCalc::TropProfond(_) => MSG_ERREUR,
        }
    }
}

pub type Resultat<T> = Result<T, ErreurCalc>;
