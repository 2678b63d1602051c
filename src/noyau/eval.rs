//! Noyau: évaluation (pipeline réel)
//!
//! texte -> jetons -> RPN -> Expr -> parcours (réel ou entier) -> Affichage
//!
//! La frontière `evaluate` ne laisse jamais sortir d’erreur : tout échec devient
//! une paire d’affichage, le détail part dans les traces.

use num_traits::Zero;

use super::erreur::{ErreurCalc, Resultat};
use super::expr::{Expr, Nombre, Op, Signe};
use super::format::{format, Affichage};
use super::rpn::parse;
use super::{Mode, EASTER_EGG, TEXTE_EASTER_EGG};

/// API publique : évalue une expression et retourne (principal, secondaire).
///
/// - "233" : easter egg, avant toute analyse
/// - vide  : ("", "")
/// - division par zéro : ("Error: Div 0", "")
/// - tout autre échec  : ("Error", "")
pub fn evaluate(expression: &str, mode: Mode) -> Affichage {
    if expression == EASTER_EGG {
        return Affichage::new(TEXTE_EASTER_EGG, "");
    }
    if expression.is_empty() {
        return Affichage::default();
    }

    match calculer(expression, mode) {
        Ok(valeur) => format(valeur, mode),
        Err(e) => {
            tracing::debug!(expression, ?mode, erreur = %e, "évaluation refusée");
            Affichage::erreur(&e)
        }
    }
}

/// Pipeline complet sans la frontière d’affichage (erreurs typées).
pub fn calculer(expression: &str, mode: Mode) -> Resultat<Nombre> {
    let arbre = parse(expression, mode)?;
    tracing::debug!(%arbre, "arbre construit");
    evaluer_arbre(&arbre, mode)
}

/// Réduit l’arbre de bas en haut selon le mode.
pub fn evaluer_arbre(arbre: &Expr, mode: Mode) -> Resultat<Nombre> {
    match mode {
        Mode::Standard => evaluer_reel(arbre).map(Nombre::Reel),
        Mode::Programmer => evaluer_entier(arbre).map(Nombre::Entier),
    }
}

/* ------------------------ Standard : réels ------------------------ */

fn evaluer_reel(e: &Expr) -> Resultat<f64> {
    match e {
        Expr::Lit(n) => Ok(n.en_reel()),
        Expr::Unaire(s, x) => {
            let v = evaluer_reel(x)?;
            Ok(match s {
                Signe::Plus => v,
                Signe::Moins => -v,
            })
        }
        Expr::Binaire(op, a, b) => {
            let a = evaluer_reel(a)?;
            let b = evaluer_reel(b)?;
            appliquer_reel(*op, a, b)
        }
    }
}

fn appliquer_reel(op: Op, a: f64, b: f64) -> Resultat<f64> {
    let r = match op {
        Op::Add => a + b,
        Op::Sub => a - b,
        Op::Mul => a * b,
        Op::Div => {
            if b.is_zero() {
                return Err(ErreurCalc::DivisionParZero);
            }
            a / b
        }
    };
    if !r.is_finite() {
        return Err(ErreurCalc::Depassement);
    }
    Ok(r)
}

/* ------------------------ Programmeur : entiers ------------------------ */

fn evaluer_entier(e: &Expr) -> Resultat<i64> {
    match e {
        Expr::Lit(Nombre::Entier(n)) => Ok(*n),
        Expr::Lit(Nombre::Reel(r)) => Err(ErreurCalc::ExpressionNonSupportee(format!(
            "littéral réel {r} en mode programmeur"
        ))),
        Expr::Unaire(s, x) => {
            let v = evaluer_entier(x)?;
            match s {
                Signe::Plus => Ok(v),
                Signe::Moins => v.checked_neg().ok_or(ErreurCalc::Depassement),
            }
        }
        Expr::Binaire(op, a, b) => {
            let a = evaluer_entier(a)?;
            let b = evaluer_entier(b)?;
            appliquer_entier(*op, a, b)
        }
    }
}

fn appliquer_entier(op: Op, a: i64, b: i64) -> Resultat<i64> {
    match op {
        Op::Add => a.checked_add(b).ok_or(ErreurCalc::Depassement),
        Op::Sub => a.checked_sub(b).ok_or(ErreurCalc::Depassement),
        Op::Mul => a.checked_mul(b).ok_or(ErreurCalc::Depassement),
        Op::Div => {
            if b.is_zero() {
                return Err(ErreurCalc::DivisionParZero);
            }
            division_plancher(a, b)
        }
    }
}

/// Division entière arrondie vers -∞ (7/-2 = -4, -7/2 = -4).
fn division_plancher(a: i64, b: i64) -> Resultat<i64> {
    // seul cas restant hors i64 : i64::MIN / -1
    let q = a.checked_div(b).ok_or(ErreurCalc::Depassement)?;
    let r = a - q * b;
    if r != 0 && ((r < 0) != (b < 0)) {
        Ok(q - 1)
    } else {
        Ok(q)
    }
}
