//! Réglages de la calculatrice (politiques du noyau + bornes de l’adaptateur).
//!
//! Valeurs par défaut = comportement historique :
//! - lexique permissif (caractères inconnus ignorés)
//! - évaluation tolérante (opérande gauche manquant => 0)
//! - arithmétique flottante (IEEE-754)
//! - entrée bornée à 19 caractères, résultat à 2 décimales

/// Longueur maximale de l’entrée accumulée.
pub const LONGUEUR_MAX_DEFAUT: usize = 19;

/// Décimales affichées après "=".
pub const DECIMALES_DEFAUT: usize = 2;

/// Garde-fou : on borne les décimales (anti-abus).
pub const DECIMALES_MAX: usize = 20;

/// Traitement des caractères hors alphabet (chiffres, '.', + - * /, parenthèses).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lexique {
    #[default]
    Permissif,
    Strict,
}

/// Politique d’évaluation OPN.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Politique {
    /// Opérande gauche manquant => 0.
    #[default]
    Tolerante,
    /// Équilibre opérandes/opérateurs vérifié avant tout calcul.
    Stricte,
}

/// Domaine numérique de l’évaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Arithmetique {
    #[default]
    Flottante,
    /// Rationnels exacts (division par zéro = erreur).
    Exacte,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub lexique: Lexique,
    pub politique: Politique,
    pub arithmetique: Arithmetique,
    pub longueur_max: usize,
    pub decimales: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            lexique: Lexique::default(),
            politique: Politique::default(),
            arithmetique: Arithmetique::default(),
            longueur_max: LONGUEUR_MAX_DEFAUT,
            decimales: DECIMALES_DEFAUT,
        }
    }
}

impl Reglages {
    /// Borne les décimales (évite un rendu démesuré).
    pub fn avec_decimales(mut self, decimales: usize) -> Self {
        self.decimales = decimales.min(DECIMALES_MAX);
        self
    }
}
