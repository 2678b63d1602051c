//! src/noyau/session.rs
//!
//! Contrôleur de session (sans vue) : une touche à la fois.
//!
//! Rôle : tenir le tampon d’entrée, le mode et l’état de répétition, et
//! router chaque touche vers le bon appel du noyau (évaluation, tri, aperçu).
//!
//! Contrats :
//! - Mode et répétition sont les seuls états qui survivent à un appel.
//! - Aucune touche ne peut faire échouer la session : les erreurs sont des affichages.
//! - Après "Error…" ou l’easter egg, la touche suivante repart de "0".

use super::apercu::preview_hex;
use super::eval::evaluate;
use super::expr::Op;
use super::format::Affichage;
use super::repetition::{extract_repeat_state, Repetition};
use super::tri::sort_numbers;
use super::{Mode, MSG_ERREUR, TEXTE_EASTER_EGG};

/// Affichage de repos.
const ZERO: &str = "0";

/// Séparateur des listes à trier.
const SEPARATEUR_LISTE: char = ',';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// Chiffre, lettre hexa, opérateur, '.', '(', ')', ','.
    Car(char),
    Egal,
    Clear,
    Retour,
    Trier,
}

impl Touche {
    /// Clavier -> touche ('=' compris). None pour tout caractère hors pavé.
    pub fn depuis_char(c: char) -> Option<Touche> {
        match c {
            '=' => Some(Touche::Egal),
            c if c.is_ascii_hexdigit() => Some(Touche::Car(c.to_ascii_uppercase())),
            '+' | '-' | '*' | '/' | '.' | '(' | ')' | ',' => Some(Touche::Car(c)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Session {
    mode: Mode,
    principal: String,
    secondaire: String,
    repetition: Option<Repetition>,
    resultat_affiche: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Mode::Standard)
    }
}

impl Session {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            principal: ZERO.to_string(),
            secondaire: String::new(),
            repetition: None,
            resultat_affiche: false,
        }
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn principal(&self) -> &str {
        &self.principal
    }

    pub fn secondaire(&self) -> &str {
        &self.secondaire
    }

    pub fn repetition(&self) -> Option<&Repetition> {
        self.repetition.as_ref()
    }

    pub fn resultat_affiche(&self) -> bool {
        self.resultat_affiche
    }

    /* ------------------------ Actions ------------------------ */

    /// Changement de mode : écran à zéro, répétition oubliée.
    pub fn changer_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.afficher(ZERO, "");
        self.repetition = None;
        self.resultat_affiche = false;
    }

    /// Traite une touche.
    pub fn touche(&mut self, touche: Touche) {
        if touche != Touche::Egal {
            self.resultat_affiche = false;
        }

        // écran d’erreur : on repart de zéro
        if est_marqueur(&self.principal) {
            self.afficher(ZERO, "");
            if matches!(touche, Touche::Egal | Touche::Clear | Touche::Retour) {
                self.resultat_affiche = false;
                return;
            }
        }

        match touche {
            Touche::Clear => {
                self.afficher(ZERO, "");
                self.repetition = None;
            }
            Touche::Egal => self.egal(),
            Touche::Trier => self.trier(),
            Touche::Retour => self.retour(),
            Touche::Car(c) => self.saisir(c),
        }
    }

    fn egal(&mut self) {
        // "=" répété sur le résultat affiché
        if self.resultat_affiche {
            if let Some(rep) = &self.repetition {
                let expression = rep.expression_depuis(&self.principal);
                tracing::debug!(%expression, "répétition");
                let res = evaluate(&expression, self.mode);
                self.resultat_affiche = !est_marqueur(&res.principal);
                self.poser(res);
                return;
            }
        }

        let expression = self.principal.clone();
        if expression.is_empty() || expression == ZERO {
            return;
        }

        if expression.contains(SEPARATEUR_LISTE) {
            self.trier();
            return;
        }

        let res = evaluate(&expression, self.mode);
        let succes = !est_marqueur(&res.principal);
        self.poser(res);

        if succes {
            self.repetition = extract_repeat_state(&expression);
            self.resultat_affiche = self.repetition.is_some();
        } else {
            self.resultat_affiche = false;
        }
    }

    fn trier(&mut self) {
        let res = sort_numbers(&self.principal, self.mode == Mode::Programmer);
        if res.principal.is_empty() {
            // liste sans élément : écran de repos
            self.afficher(ZERO, "");
        } else {
            self.poser(res);
        }
        self.resultat_affiche = false;
    }

    fn retour(&mut self) {
        self.principal.pop();
        if self.principal.is_empty() {
            self.principal.push_str(ZERO);
        }
        self.secondaire = if self.mode == Mode::Programmer && self.principal != ZERO {
            preview_hex(&self.principal)
        } else {
            String::new()
        };
    }

    fn saisir(&mut self, c: char) {
        let est_op = Op::depuis_char(c).is_some();

        if est_op {
            // pas d’opérateur en tête, pas deux opérateurs de suite
            if self.principal.is_empty() || self.principal == ZERO {
                return;
            }
            if self.principal.ends_with(|d: char| Op::depuis_char(d).is_some()) {
                return;
            }
        }

        let accepte = match self.mode {
            Mode::Standard => !c.is_ascii_alphabetic(),
            Mode::Programmer => c != '.',
        };
        if !accepte || Touche::depuis_char(c) != Some(Touche::Car(c)) {
            return;
        }

        if self.principal == ZERO {
            self.principal = c.to_string();
        } else {
            self.principal.push(c);
        }

        // les opérateurs laissent l’indication en place
        if self.mode == Mode::Programmer && !est_op {
            self.secondaire = preview_hex(&self.principal);
        }
    }

    fn poser(&mut self, a: Affichage) {
        self.principal = a.principal;
        self.secondaire = a.secondaire;
    }

    fn afficher(&mut self, principal: &str, secondaire: &str) {
        self.principal = principal.to_string();
        self.secondaire = secondaire.to_string();
    }
}

/// Écran qui ne peut pas servir de nouvelle entrée (erreur ou easter egg).
fn est_marqueur(texte: &str) -> bool {
    texte.contains(MSG_ERREUR) || texte.contains(TEXTE_EASTER_EGG)
}
