// src/noyau/jetons.rs

use super::erreur::{ErreurCalc, Resultat};
use super::expr::{Nombre, Signe};
use super::Mode;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(Nombre),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,

    // Signe unaire : jamais produit par tokenize(), seulement par to_rpn()
    // (un + ou - rencontré là où on attend un opérande).
    Unaire(Signe),
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - mode standard : suites de chiffres avec au plus un point (12, 2.5, .5, 5.)
/// - mode programmeur : suites maximales de chiffres hexa (1A, ff, 0)
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces ignorés entre jetons
///
/// Tout autre caractère est une erreur de syntaxe ; le point est refusé en programmeur.
pub fn tokenize(s: &str, mode: Mode) -> Resultat<Vec<Tok>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        match mode {
            Mode::Programmer if c.is_ascii_hexdigit() => {
                let start = i;
                while i < chars.len() && chars[i].is_ascii_hexdigit() {
                    i += 1;
                }
                let txt: String = chars[start..i].iter().collect();
                let v = lire_hexa(&txt)?;
                match i64::try_from(v) {
                    Ok(n) => out.push(Tok::Num(Nombre::Entier(n))),
                    // 8000000000000000 n’existe qu’en "-8000000000000000" (i64::MIN)
                    Err(_) if v == i64::MIN.unsigned_abs() && moins_unaire_en_queue(&out) => {
                        out.pop();
                        out.push(Tok::Num(Nombre::Entier(i64::MIN)));
                    }
                    Err(_) => {
                        return Err(ErreurCalc::Radix(format!("{txt} ne tient pas sur 64 bits")))
                    }
                }
            }

            Mode::Standard if c.is_ascii_digit() || c == '.' => {
                let start = i;
                let mut point = false;
                while i < chars.len() {
                    let d = chars[i];
                    if d.is_ascii_digit() {
                        i += 1;
                    } else if d == '.' && !point {
                        point = true;
                        i += 1;
                    } else {
                        break;
                    }
                }
                let txt: String = chars[start..i].iter().collect();
                if txt == "." {
                    return Err(ErreurCalc::syntaxe("point décimal sans chiffre"));
                }
                let v: f64 = txt
                    .parse()
                    .map_err(|_| ErreurCalc::syntaxe(format!("nombre invalide: {txt}")))?;
                out.push(Tok::Num(Nombre::Reel(v)));
            }

            _ => return Err(ErreurCalc::syntaxe(format!("caractère inattendu: '{c}'"))),
        }
    }

    Ok(out)
}

/// Suite de chiffres hexa -> u64 (seul échec possible : trop de chiffres).
fn lire_hexa(txt: &str) -> Resultat<u64> {
    u64::from_str_radix(txt, 16)
        .map_err(|_| ErreurCalc::Radix(format!("{txt} ne tient pas sur 64 bits")))
}

/// Le dernier jeton est un '-' en position de signe (début, après opérateur ou '(').
fn moins_unaire_en_queue(out: &[Tok]) -> bool {
    match out {
        [] => false,
        [.., avant, Tok::Minus] => matches!(
            avant,
            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::LPar
        ),
        [Tok::Minus] => true,
        _ => false,
    }
}

/// Format utilitaire (traces) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(n) => n.to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),

            Tok::Unaire(Signe::Plus) => "u+".to_string(),
            Tok::Unaire(Signe::Moins) => "u-".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
