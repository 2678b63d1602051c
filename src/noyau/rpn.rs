// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix) en validant la grammaire
// - Puis reconstruire Expr
//
// Grammaire acceptée :
//   expr   := term (('+'|'-') term)*
//   term   := factor (('*'|'/') factor)*
//   factor := ['+'|'-'] (NUMBER | '(' expr ')')
//
// Règles:
// - un + ou - arrivant quand on ATTEND un opérande est un signe unaire
//   (un seul signe par facteur : "--5" est refusé, "5--3" est accepté)
// - le signe unaire lie plus fort que * et /
// - chaque niveau est associatif à gauche

use super::erreur::{ErreurCalc, Resultat};
use super::expr::{Expr, Op, Signe};
use super::jetons::{format_tokens, tokenize, Tok};
use super::{Mode, PROFONDEUR_MAX};

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Unaire(_) => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Minus, Num(2), Star, LPar, Num(3), Plus, Num(4), RPar]
///   rpn:    [Num(2), Unaire(Moins), Num(3), Num(4), Plus, Star]
pub fn to_rpn(tokens: &[Tok]) -> Resultat<Vec<Tok>> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // vrai tant qu’il manque un opérande (début, après opérateur, après '(')
    let mut attend_valeur = true;
    // vrai juste après un signe unaire (interdit d’en enchaîner un second)
    let mut apres_signe = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if !attend_valeur {
                    return Err(ErreurCalc::syntaxe("deux nombres consécutifs"));
                }
                out.push(tok);
                attend_valeur = false;
                apres_signe = false;
            }

            Tok::LPar => {
                if !attend_valeur {
                    return Err(ErreurCalc::syntaxe("'(' juste après une valeur"));
                }
                ops.push(tok);
                apres_signe = false;
            }

            Tok::RPar => {
                if attend_valeur {
                    return Err(ErreurCalc::syntaxe("opérande manquant avant ')'"));
                }
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(ErreurCalc::syntaxe("')' sans '(' correspondante")),
                    }
                }
            }

            Tok::Plus | Tok::Minus if attend_valeur => {
                if apres_signe {
                    return Err(ErreurCalc::syntaxe("deux signes consécutifs"));
                }
                let signe = if tok == Tok::Plus {
                    Signe::Plus
                } else {
                    Signe::Moins
                };
                // préfixe : rien à dépiler, il sortira après son opérande
                ops.push(Tok::Unaire(signe));
                apres_signe = true;
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if attend_valeur {
                    return Err(ErreurCalc::syntaxe("opérateur sans opérande gauche"));
                }
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < precedence(&tok) {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }
                ops.push(tok);
                attend_valeur = true;
                apres_signe = false;
            }

            Tok::Unaire(_) => return Err(ErreurCalc::syntaxe("signe unaire inattendu en entrée")),
        }
    }

    if attend_valeur {
        return Err(if tokens.is_empty() {
            ErreurCalc::syntaxe("expression vide")
        } else {
            ErreurCalc::syntaxe("opérande manquant en fin d’expression")
        });
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalc::syntaxe("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN.
///
/// Chaque entrée de pile garde sa profondeur : au-delà de `PROFONDEUR_MAX`,
/// l’arbre est refusé avant d’exister (parcours et libération restent récursifs).
pub fn from_rpn(rpn: &[Tok]) -> Resultat<Expr> {
    let mut st: Vec<(Expr, usize)> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(n) => st.push((Expr::Lit(n), 1)),

            Tok::Unaire(s) => {
                let (x, p) = st
                    .pop()
                    .ok_or_else(|| ErreurCalc::syntaxe("signe sans opérande"))?;
                st.push((Expr::unaire(s, x), verifier_profondeur(p + 1)?));
            }

            Tok::Plus => empile_binaire(&mut st, Op::Add)?,
            Tok::Minus => empile_binaire(&mut st, Op::Sub)?,
            Tok::Star => empile_binaire(&mut st, Op::Mul)?,
            Tok::Slash => empile_binaire(&mut st, Op::Div)?,

            Tok::LPar | Tok::RPar => {
                return Err(ErreurCalc::syntaxe("parenthèse inattendue en RPN"))
            }
        }
    }

    if st.len() != 1 {
        return Err(ErreurCalc::syntaxe("expression invalide"));
    }
    st.pop()
        .map(|(e, _)| e)
        .ok_or_else(|| ErreurCalc::syntaxe("expression invalide"))
}

fn empile_binaire(st: &mut Vec<(Expr, usize)>, op: Op) -> Resultat<()> {
    let (b, pb) = st
        .pop()
        .ok_or_else(|| ErreurCalc::syntaxe("expression invalide"))?;
    let (a, pa) = st
        .pop()
        .ok_or_else(|| ErreurCalc::syntaxe("expression invalide"))?;
    let p = verifier_profondeur(pa.max(pb) + 1)?;
    st.push((Expr::binaire(op, a, b), p));
    Ok(())
}

fn verifier_profondeur(p: usize) -> Resultat<usize> {
    if p > PROFONDEUR_MAX {
        return Err(ErreurCalc::TropProfond(p));
    }
    Ok(p)
}

/// Texte -> arbre, selon le mode (alphabet décimal ou hexa).
pub fn parse(texte: &str, mode: Mode) -> Resultat<Expr> {
    // 1) Jetons
    let jetons = tokenize(texte, mode)?;
    tracing::trace!(jetons = %format_tokens(&jetons), "tokenisation");

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    tracing::trace!(rpn = %format_tokens(&rpn), "shunting-yard");

    // 3) AST
    from_rpn(&rpn)
}
