//! Noyau — pipeline complet
//!
//! tokenize -> compile (shunting-yard) -> evaluate (pile) -> rendu "=x.xx"
//!
//! Chaque appel est indépendant : jetons, piles et OPN sont locaux à l’appel,
//! la seule donnée partagée est la table const des opérateurs.

use num_rational::BigRational;

use super::erreur::ErreurCalc;
use super::eval::evaluate;
use super::format::format_resultat;
use super::jetons::{format_tokens, tokenize_avec, Tok};
use super::rpn::{compile, Postfixe};
use super::scalaire::Scalaire;
use crate::reglages::{Arithmetique, Reglages};

/// Formes intermédiaires, pour l’affichage “démarche”.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub postfixe: String,
}

#[derive(Clone, Debug)]
pub struct Resultat {
    pub valeur: f64,
    /// "=" + valeur arrondie (rendu du domaine d’évaluation, donc exact en mode Exacte).
    pub affichage: String,
    pub demarche: Demarche,
}

/// API publique : évalue une expression infixe selon les réglages.
pub fn calculer(expression: &str, reglages: &Reglages) -> Result<Resultat, ErreurCalc> {
    let jetons = tokenize_avec(expression, reglages.lexique)?;
    let postfixe = compile(&jetons)?;

    let demarche = Demarche {
        jetons: format_tokens(&jetons),
        postfixe: postfixe.to_string(),
    };
    tracing::debug!(jetons = %demarche.jetons, postfixe = %demarche.postfixe, "expression compilée");

    let (valeur, affichage) = match reglages.arithmetique {
        Arithmetique::Flottante => evaluer_dans::<f64>(&postfixe.0, reglages)?,
        Arithmetique::Exacte => evaluer_dans::<BigRational>(&postfixe.0, reglages)?,
    };

    Ok(Resultat {
        valeur,
        affichage,
        demarche,
    })
}

/// Variante OPN : la forme texte ("3 4 2 * 1 5 - / +") est évaluée directement.
/// Renvoie (valeur, affichage).
pub fn calculer_opn(postfixe: &str, reglages: &Reglages) -> Result<(f64, String), ErreurCalc> {
    let p: Postfixe = postfixe.parse()?;
    match reglages.arithmetique {
        Arithmetique::Flottante => evaluer_dans::<f64>(p.jetons(), reglages),
        Arithmetique::Exacte => evaluer_dans::<BigRational>(p.jetons(), reglages),
    }
}

fn evaluer_dans<S: Scalaire>(
    postfixe: &[Tok],
    reglages: &Reglages,
) -> Result<(f64, String), ErreurCalc> {
    let v: S = evaluate(postfixe, reglages.politique)?;
    Ok((v.vers_f64(), format_resultat(&v, reglages.decimales)))
}
