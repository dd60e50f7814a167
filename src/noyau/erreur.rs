//! Noyau — erreurs du pipeline (jetons -> OPN -> valeur).
//!
//! Une seule énumération pour toute la chaîne : chaque appel échoue
//! isolément, rien n’est fatal au processus.

use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErreurCalc {
    /// `)` sans `(` correspondante, ou `(` jamais fermée.
    #[error("parenthèses non appariées")]
    MismatchedParenthesis,

    /// Symbole absent de la table des opérateurs.
    #[error("opérateur inconnu: '{0}'")]
    UnknownOperator(String),

    /// La réduction OPN ne laisse pas exactement une valeur.
    #[error("opérandes insuffisants ({restants} valeur(s) restante(s))")]
    InsufficientOperands { restants: usize },

    /// Littéral numérique illisible (ex: "1.2.3").
    #[error("nombre invalide: '{0}'")]
    InvalidNumericLiteral(String),

    /// Caractère non reconnu (mode lexical strict uniquement).
    #[error("caractère inattendu: '{caractere}' (position {position})")]
    LexicalError { caractere: char, position: usize },

    /// Arithmétique exacte seulement : pas d’infini représentable.
    #[error("division par zéro")]
    DivisionByZero,
}
