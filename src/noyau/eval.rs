//! Noyau — évaluation d’une OPN (pile d’opérandes).
//!
//! Nombre -> empilé ; opérateur -> dépile droite puis gauche, applique (gauche, droite), rempile.
//! À la fin, il doit rester exactement une valeur.
//!
//! Politiques :
//! - Tolérante : opérande gauche manquant => 0 (journalisé en warn).
//!   S’il reste plusieurs valeurs, les recycler en pseudo-OPN ne réduit rien
//!   (aucun opérateur) : on échoue avec InsufficientOperands.
//! - Stricte : équilibre opérandes/opérateurs vérifié AVANT tout calcul.

use super::erreur::ErreurCalc;
use super::jetons::Tok;
use super::rpn::Postfixe;
use super::scalaire::Scalaire;
use crate::reglages::Politique;

/// API publique : évalue une suite postfixée dans le domaine `S`.
pub fn evaluate<S: Scalaire>(postfixe: &[Tok], politique: Politique) -> Result<S, ErreurCalc> {
    if politique == Politique::Stricte {
        verifier_equilibre(postfixe)?;
    }

    let mut pile = reduire::<S>(postfixe, politique)?;

    match pile.len() {
        1 => pile.pop().ok_or(ErreurCalc::InsufficientOperands { restants: 0 }),
        restants => {
            tracing::debug!(restants, "réduction OPN incomplète");
            Err(ErreurCalc::InsufficientOperands { restants })
        }
    }
}

/// Variante texte : "3 4 2 * 1 5 - / +".
pub fn evaluate_texte<S: Scalaire>(postfixe: &str, politique: Politique) -> Result<S, ErreurCalc> {
    let p: Postfixe = postfixe.parse()?;
    evaluate(p.jetons(), politique)
}

/// Une passe de réduction ; renvoie la pile finale (non vérifiée).
fn reduire<S: Scalaire>(postfixe: &[Tok], politique: Politique) -> Result<Vec<S>, ErreurCalc> {
    let mut pile: Vec<S> = Vec::with_capacity(postfixe.len() / 2 + 1);

    for tok in postfixe {
        match tok {
            Tok::Num(s) => pile.push(S::depuis_litteral(s)?),

            Tok::Op(op) => {
                let droite = pile
                    .pop()
                    .ok_or(ErreurCalc::InsufficientOperands { restants: 0 })?;

                let gauche = match pile.pop() {
                    Some(v) => v,
                    None if politique == Politique::Tolerante => {
                        tracing::warn!(operateur = %op, "opérande gauche manquant, remplacé par 0");
                        S::zero()
                    }
                    None => return Err(ErreurCalc::InsufficientOperands { restants: 1 }),
                };

                pile.push(S::appliquer(*op, gauche, droite)?);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurCalc::UnknownOperator(tok.to_string())),
        }
    }

    Ok(pile)
}

/// Vérifie, sans calculer, que chaque opérateur trouve deux opérandes
/// et qu’il reste exactement une valeur.
fn verifier_equilibre(postfixe: &[Tok]) -> Result<(), ErreurCalc> {
    let mut profondeur: usize = 0;

    for tok in postfixe {
        match tok {
            Tok::Num(_) => profondeur += 1,
            Tok::Op(_) => {
                if profondeur < 2 {
                    return Err(ErreurCalc::InsufficientOperands {
                        restants: profondeur,
                    });
                }
                profondeur -= 1;
            }
            Tok::LPar | Tok::RPar => return Err(ErreurCalc::UnknownOperator(tok.to_string())),
        }
    }

    if profondeur != 1 {
        return Err(ErreurCalc::InsufficientOperands {
            restants: profondeur,
        });
    }
    Ok(())
}
