// src/noyau/tri.rs
//
// Tri d’une liste "a,b,c" (décimale ou hexa), puis re-rendu.
// Ordre numérique (pas lexicographique) : 2.5 < 3 < 10.

use std::cmp::Ordering;

use super::erreur::{ErreurCalc, Resultat};
use super::expr::Nombre;
use super::format::{format_hex, format_reel, Affichage};
use super::MARQUE_TRI;

/// API publique : ne lève jamais, ("Error: Sort", "") si un élément est illisible.
pub fn sort_numbers(texte: &str, is_hex: bool) -> Affichage {
    match trier(texte, is_hex) {
        Ok(liste) => Affichage::new(liste, MARQUE_TRI),
        Err(e) => {
            tracing::debug!(texte, is_hex, erreur = %e, "tri refusé");
            Affichage::erreur(&e)
        }
    }
}

/// Découpe, lit, trie, re-rend. Les segments vides sont ignorés.
pub fn trier(texte: &str, is_hex: bool) -> Resultat<String> {
    let mut valeurs = texte
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| lire_element(s, is_hex))
        .collect::<Resultat<Vec<Nombre>>>()?;

    valeurs.sort_by(comparer);

    let rendu: Vec<String> = valeurs.into_iter().map(|v| rendre(v, is_hex)).collect();
    Ok(rendu.join(","))
}

fn lire_element(s: &str, is_hex: bool) -> Resultat<Nombre> {
    if is_hex {
        return i64::from_str_radix(s, 16)
            .map(Nombre::Entier)
            .map_err(|_| ErreurCalc::Tri(s.to_string()));
    }

    // entier d’abord, réel ensuite
    if let Ok(n) = s.parse::<i64>() {
        return Ok(Nombre::Entier(n));
    }
    match s.parse::<f64>() {
        Ok(r) if r.is_finite() => Ok(Nombre::Reel(r)),
        _ => Err(ErreurCalc::Tri(s.to_string())),
    }
}

/// Ordre total par valeur, entiers et réels mélangés (réels toujours finis).
///
/// Entier contre réel : comparaison exacte, même au-delà de 2^53.
/// -0.0 et 0.0 sont égaux.
fn comparer(a: &Nombre, b: &Nombre) -> Ordering {
    match (*a, *b) {
        (Nombre::Entier(x), Nombre::Entier(y)) => x.cmp(&y),
        (Nombre::Reel(x), Nombre::Reel(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Nombre::Entier(x), Nombre::Reel(y)) => comparer_entier_reel(x, y),
        (Nombre::Reel(x), Nombre::Entier(y)) => comparer_entier_reel(y, x).reverse(),
    }
}

fn comparer_entier_reel(n: i64, r: f64) -> Ordering {
    // l’arrondi i64 -> f64 est monotone : une inégalité stricte est exacte
    match (n as f64).partial_cmp(&r) {
        Some(Ordering::Equal) | None => {}
        Some(o) => return o,
    }
    // égalité apparente : r est entier, on compare sans perte sur 128 bits
    i128::from(n).cmp(&(r as i128))
}

fn rendre(v: Nombre, is_hex: bool) -> String {
    match v {
        Nombre::Entier(n) if is_hex => format_hex(n),
        Nombre::Entier(n) => n.to_string(),
        // lire_element ne produit de réel qu’en décimal
        Nombre::Reel(r) => format_reel(r),
    }
}
