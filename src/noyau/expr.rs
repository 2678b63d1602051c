// src/noyau/expr.rs
//
// Arbre syntaxique fermé :
// - Lit     : valeur numérique (entier en programmeur, réel en standard)
// - Unaire  : signe + opérande
// - Binaire : opérateur + gauche + droite
//
// Construit une fois par évaluation, parcouru une fois, jamais muté.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nombre {
    Entier(i64),
    Reel(f64),
}

impl Nombre {
    pub fn en_reel(self) -> f64 {
        match self {
            Nombre::Entier(n) => n as f64,
            Nombre::Reel(r) => r,
        }
    }
}

impl fmt::Display for Nombre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nombre::Entier(n) => write!(f, "{n}"),
            Nombre::Reel(r) => write!(f, "{r}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signe {
    Plus,
    Moins,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub fn symbole(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    pub fn depuis_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            '*' => Some(Op::Mul),
            '/' => Some(Op::Div),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Lit(Nombre),
    Unaire(Signe, Box<Expr>),
    Binaire(Op, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn binaire(op: Op, a: Expr, b: Expr) -> Expr {
        Expr::Binaire(op, Box::new(a), Box::new(b))
    }

    pub fn unaire(s: Signe, x: Expr) -> Expr {
        Expr::Unaire(s, Box::new(x))
    }
}

/// Forme entièrement parenthésée (traces de diagnostic).
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Lit(n) => write!(f, "{n}"),
            Expr::Unaire(Signe::Plus, x) => write!(f, "+{x}"),
            Expr::Unaire(Signe::Moins, x) => write!(f, "-{x}"),
            Expr::Binaire(op, a, b) => write!(f, "({a}{}{b})", op.symbole()),
        }
    }
}
