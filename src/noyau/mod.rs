//! Noyau OPN (infixe -> postfixe -> valeur)
//!
//! Organisation interne :
//! - operateurs.rs : table fixe + - * / (précédence, associativité)
//! - jetons.rs     : tokenisation (lexique permissif ou strict)
//! - rpn.rs        : shunting-yard -> OPN (forme typée + forme texte)
//! - scalaire.rs   : domaine numérique (f64 IEEE, rationnel exact)
//! - eval.rs       : évaluation à pile (politique tolérante ou stricte)
//! - format.rs     : rendu "=x.xx"
//! - calcul.rs     : pipeline complet + démarche
//! - erreur.rs     : erreurs du pipeline

pub mod calcul;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod operateurs;
pub mod rpn;
pub mod scalaire;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use calcul::{calculer, calculer_opn, Demarche};
pub use erreur::ErreurCalc;
