//! Tests de propriétés (campagne) : ce que l’écran doit toujours montrer.
//!
//! But : fixer les comportements observables de bout en bout.
//! - précédence et associativité décimales
//! - division par zéro dans les deux modes
//! - hexa : résultat + indication DEC
//! - arrondi stable (10 décimales)
//! - tri : ordre total, idempotence
//! - easter egg prioritaire
//! - "=" répété
//! - aperçu jamais en échec

use super::apercu::preview_hex;
use super::eval::evaluate;
use super::format::{arrondi, format_reel, Affichage};
use super::session::{Session, Touche};
use super::tri::sort_numbers;
use super::Mode;

fn eval_std(expr: &str) -> Affichage {
    evaluate(expr, Mode::Standard)
}

fn eval_prog(expr: &str) -> Affichage {
    evaluate(expr, Mode::Programmer)
}

fn assert_affiche(a: Affichage, principal: &str, secondaire: &str, expr: &str) {
    assert_eq!(
        a,
        Affichage::new(principal, secondaire),
        "expr={expr:?}"
    );
}

/* ------------------------ Arithmétique décimale ------------------------ */

#[test]
fn prop_precedence_standard() {
    let cas = [
        ("2+3*4", "14"),
        ("2*3+4", "10"),
        ("2*(3+4)", "14"),
        ("20-5-5", "10"),
        ("2-3*4", "-10"),
        ("-2*-3", "6"),
        ("(((7)))", "7"),
        ("1.5+1.5", "3"),
        ("100/8", "12.5"),
    ];
    for (expr, attendu) in cas {
        assert_affiche(eval_std(expr), attendu, "", expr);
    }
}

#[test]
fn prop_div_zero_deux_modes() {
    for expr in ["5/0", "1/(2-2)", "0/0", "3*4/0+1"] {
        assert_affiche(eval_std(expr), "Error: Div 0", "", expr);
    }
    for expr in ["5/0", "A/(F-F)", "0/0"] {
        assert_affiche(eval_prog(expr), "Error: Div 0", "", expr);
    }
}

/* ------------------------ Hexa ------------------------ */

#[test]
fn prop_hexa_aller_retour() {
    assert_affiche(eval_prog("A+5"), "F", "DEC: 15", "A+5");
    assert_affiche(eval_prog("FF+1"), "100", "DEC: 256", "FF+1");
    assert_affiche(eval_prog("(1+2)*a"), "1E", "DEC: 30", "(1+2)*a");
    assert_affiche(eval_prog("-(2)"), "-2", "DEC: -2", "-(2)");
}

#[test]
fn prop_hexa_resultat_relu() {
    // le principal affiché, ré-évalué tel quel, redonne la même paire
    for expr in ["1A*3", "FFFF-1", "7/2", "C0FFEE", "1-8", "F-7FFFFFFFFFFFFFFF-10"] {
        let a = eval_prog(expr);
        let b = eval_prog(&a.principal);
        assert_eq!(a, b, "expr={expr:?}");
    }
}

/* ------------------------ Arrondi ------------------------ */

#[test]
fn prop_arrondi_idempotent() {
    let valeurs = [
        0.1 + 0.2,
        1.0 / 3.0,
        2.0 / 7.0,
        1e-11,
        -1e-11,
        98765.4321,
        3.3 * 3.0,
    ];
    for x in valeurs {
        let r1 = arrondi(x, 10);
        let txt = format_reel(r1);
        let relu: f64 = txt.parse().unwrap_or_else(|_| panic!("relecture {txt:?}"));
        assert_eq!(format_reel(arrondi(relu, 10)), txt, "x={x}");
    }
}

#[test]
fn prop_affichage_minimal_reevalue() {
    for expr in ["1/3", "0.1+0.2", "10/4", "7*6"] {
        let a = eval_std(expr);
        let b = eval_std(&a.principal);
        assert_eq!(a, b, "expr={expr:?}");
    }
}

/* ------------------------ Tri ------------------------ */

#[test]
fn prop_tri_ordre_total() {
    assert_affiche(sort_numbers("10,2,3.5", false), "2,3.5,10", "Sorted", "10,2,3.5");
    assert_affiche(
        sort_numbers("0.5,-1,1e2,3", false),
        "-1,0.5,3,100",
        "Sorted",
        "mixte",
    );
}

#[test]
fn prop_tri_idempotent() {
    for (texte, hex) in [("5,4,3.25,-9,0", false), ("F,a,3,-1", true)] {
        let une = sort_numbers(texte, hex);
        let deux = sort_numbers(&une.principal, hex);
        assert_eq!(une, deux, "texte={texte:?}");
    }
}

/* ------------------------ Easter egg ------------------------ */

#[test]
fn prop_easter_egg_prioritaire() {
    for mode in [Mode::Standard, Mode::Programmer] {
        assert_eq!(evaluate("233", mode), Affichage::new("哈哈哈", ""));
    }
}

/* ------------------------ "=" répété ------------------------ */

#[test]
fn prop_egal_repete_enchaine() {
    let mut s = Session::default();
    for c in "5+3".chars() {
        s.touche(Touche::Car(c));
    }
    let mut vus = Vec::new();
    for _ in 0..4 {
        s.touche(Touche::Egal);
        vus.push(s.principal().to_string());
    }
    assert_eq!(vus, ["8", "11", "14", "17"]);
}

#[test]
fn prop_egal_repete_multiplication() {
    let mut s = Session::default();
    for c in "3*2".chars() {
        s.touche(Touche::Car(c));
    }
    s.touche(Touche::Egal);
    s.touche(Touche::Egal);
    s.touche(Touche::Egal);
    assert_eq!(s.principal(), "24");
}

/* ------------------------ Aperçu ------------------------ */

#[test]
fn prop_apercu() {
    assert_eq!(preview_hex(""), "");
    assert_eq!(preview_hex("12G"), "");
    assert_eq!(preview_hex("+"), "");
    assert_eq!(preview_hex("1A"), "DEC: 26");
}

#[test]
fn prop_apercu_jamais_en_echec() {
    let textes = ["哈哈哈", "Error: Div 0", "0x1A", "1A ", "\u{0}", "ffffffffffffffffffffffff"];
    for t in textes {
        // ne doit pas paniquer ; jamais d’indication sur du non-hexa
        let h = preview_hex(t);
        assert!(h.is_empty() || h.starts_with("DEC: "), "t={t:?}");
    }
}
