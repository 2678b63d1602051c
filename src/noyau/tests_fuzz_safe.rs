//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le noyau et la session sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : l’écran montre soit un nombre relisible, soit un marqueur d’erreur

use std::time::{Duration, Instant};

use super::apercu::preview_hex;
use super::eval::evaluate;
use super::session::{Session, Touche};
use super::tri::sort_numbers;
use super::Mode;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
    fn choix(&mut self, alphabet: &[char]) -> char {
        alphabet[self.pick(alphabet.len() as u32) as usize]
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Invariants d’écran ------------------------ */

fn est_erreur(principal: &str) -> bool {
    principal == "Error" || principal == "Error: Div 0"
}

fn check_standard(expr: &str, principal: &str, secondaire: &str) {
    assert!(secondaire.is_empty(), "expr={expr:?} secondaire={secondaire:?}");
    if est_erreur(principal) {
        return;
    }
    assert!(
        principal.parse::<f64>().is_ok(),
        "expr={expr:?} principal illisible {principal:?}"
    );
    assert!(!principal.ends_with(".0"), "expr={expr:?} principal={principal:?}");
    assert_ne!(principal, "-0", "expr={expr:?}");
}

fn check_programmeur(expr: &str, principal: &str, secondaire: &str) {
    if est_erreur(principal) {
        assert!(secondaire.is_empty(), "expr={expr:?}");
        return;
    }
    let dec: i64 = secondaire
        .strip_prefix("DEC: ")
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| panic!("expr={expr:?} secondaire={secondaire:?}"));
    let relu = i64::from_str_radix(principal, 16)
        .unwrap_or_else(|_| panic!("expr={expr:?} principal={principal:?}"));
    assert_eq!(relu, dec, "expr={expr:?}");
    assert_eq!(principal, principal.to_uppercase(), "expr={expr:?}");
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng, mode: Mode) -> String {
    // petits nombres, zéro inclus (utile pour la division par zéro)
    let n = rng.pick(20);
    match mode {
        Mode::Programmer => format!("{n:X}"),
        Mode::Standard => {
            if rng.coin() {
                format!("{n}.{}", rng.pick(100))
            } else {
                format!("{n}")
            }
        }
    }
}

fn gen_expr(rng: &mut Rng, mode: Mode, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng, mode);
    }

    let a = gen_expr(rng, mode, depth - 1);
    let b = gen_expr(rng, mode, depth - 1);
    match rng.pick(7) {
        0 => gen_nombre(rng, mode),
        1 => format!("({a}+{b})"),
        2 => format!("({a}-{b})"),
        3 => format!("{a}*{b}"),
        4 => format!("({a})/({b})"),
        5 => format!("-({a})"),
        _ => format!("{a}+{b}"),
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for i in 0..300 {
        budget(t0, max);

        let mode = if i % 2 == 0 {
            Mode::Standard
        } else {
            Mode::Programmer
        };
        let expr = gen_expr(&mut rng, mode, 4);
        let a = evaluate(&expr, mode);

        // déterminisme : même entrée => même sortie
        assert_eq!(a, evaluate(&expr, mode), "expr={expr:?}");

        match mode {
            Mode::Standard => check_standard(&expr, &a.principal, &a.secondaire),
            Mode::Programmer => check_programmeur(&expr, &a.principal, &a.secondaire),
        }

        if est_erreur(&a.principal) {
            seen_err += 1;
        } else {
            seen_ok += 1;
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_texte_arbitraire() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    let alphabet = [
        '0', '1', '9', 'A', 'f', 'G', '.', '+', '-', '*', '/', '(', ')', ',', ' ', 'x', '哈',
    ];
    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..400 {
        budget(t0, max);

        let len = rng.pick(12) as usize;
        let texte: String = (0..len).map(|_| rng.choix(&alphabet)).collect();

        // rien ne doit paniquer, et les marqueurs restent ceux prévus
        for mode in [Mode::Standard, Mode::Programmer] {
            let a = evaluate(&texte, mode);
            if texte.is_empty() {
                assert!(a.principal.is_empty());
            }
        }
        let t = sort_numbers(&texte, rng.coin());
        assert!(
            t.secondaire == "Sorted" || t.principal == "Error: Sort",
            "texte={texte:?} tri={t:?}"
        );
        let h = preview_hex(&texte);
        assert!(h.is_empty() || h.starts_with("DEC: "), "texte={texte:?}");
    }
}

#[test]
fn fuzz_safe_session_touches_aleatoires() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    let touches = [
        Touche::Car('1'),
        Touche::Car('5'),
        Touche::Car('0'),
        Touche::Car('A'),
        Touche::Car('.'),
        Touche::Car('+'),
        Touche::Car('-'),
        Touche::Car('*'),
        Touche::Car('/'),
        Touche::Car('('),
        Touche::Car(')'),
        Touche::Car(','),
        Touche::Egal,
        Touche::Egal,
        Touche::Clear,
        Touche::Retour,
        Touche::Trier,
    ];
    let mut rng = Rng::new(0x5EED_u64);
    let mut s = Session::default();

    for i in 0..2000 {
        budget(t0, max);

        if i % 250 == 0 {
            let mode = if rng.coin() {
                Mode::Programmer
            } else {
                Mode::Standard
            };
            s.changer_mode(mode);
        }

        let t = touches[rng.pick(touches.len() as u32) as usize];
        s.touche(t);

        assert!(!s.principal().is_empty(), "écran vide après {t:?}");
        if s.mode() == Mode::Standard {
            assert!(
                !s.principal().contains('A') || s.principal().starts_with("Error"),
                "lettre hexa en mode standard: {:?}",
                s.principal()
            );
        }
    }
}

#[test]
fn fuzz_safe_chaines_profondes_sans_debordement() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    // chaîne gauche, imbrication droite, signes imbriqués : tout finit en paire d’écran
    let n = 100_000;
    let gauche = format!("{}1", "1+".repeat(n - 1));
    let droite = format!("{}1{}", "1+(".repeat(n - 1), ")".repeat(n - 1));
    let signes = format!("{}1{}", "-(".repeat(n), ")".repeat(n));

    for expr in [&gauche, &droite, &signes] {
        for mode in [Mode::Standard, Mode::Programmer] {
            let a = evaluate(expr, mode);
            budget(t0, max);
            assert_eq!(a.principal, "Error", "mode={mode:?} len={}", expr.len());
            assert!(a.secondaire.is_empty());
        }
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    let expr = somme_balancee("1", 800);
    let a = evaluate(&expr, Mode::Standard);
    budget(t0, max);

    // 800*1 = 800
    assert_eq!(a.principal, "800");

    let hex = somme_balancee("2", 800);
    let b = evaluate(&hex, Mode::Programmer);
    assert_eq!((b.principal.as_str(), b.secondaire.as_str()), ("640", "DEC: 1600"));
}
