// src/noyau/rpn.rs
//
// Shunting-yard -> OPN (postfix)
// Objectif:
// - Convertir une suite de Tok infixe en suite postfixée
// - Forme texte : jetons séparés par un seul espace ("3 4 2 * 1 5 - / +")
//
// Règles:
// - Opérateurs binaires uniquement, tous associatifs à gauche (>= dans la comparaison)
// - ')' sans '(' ou '(' jamais fermée => MismatchedParenthesis
// - Le compilateur n’accepte que de l’infixe (recompiler une OPN n’a pas de sens)

use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurCalc;
use super::jetons::{format_tokens, tokenize_avec, Tok};
use super::operateurs::{Associativite, Operateur};
use crate::reglages::Lexique;

/// Suite de jetons en ordre postfixé.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Postfixe(pub Vec<Tok>);

impl Postfixe {
    pub fn jetons(&self) -> &[Tok] {
        &self.0
    }
}

impl fmt::Display for Postfixe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_tokens(&self.0))
    }
}

/// Relit la forme texte d’une OPN (séparateurs : espaces).
/// - mot fait de chiffres/'.' => Num (validé plus tard, à l’évaluation)
/// - symbole de la table => Op
/// - autre chose => UnknownOperator
impl FromStr for Postfixe {
    type Err = ErreurCalc;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut out = Vec::new();

        for mot in s.split_whitespace() {
            if mot.chars().all(|c| c.is_ascii_digit() || c == '.') {
                out.push(Tok::Num(mot.to_string()));
                continue;
            }

            let mut chars = mot.chars();
            let op = match (chars.next(), chars.next()) {
                (Some(c), None) => Operateur::depuis_symbole(c),
                _ => None,
            };
            match op {
                Some(op) => out.push(Tok::Op(op)),
                None => return Err(ErreurCalc::UnknownOperator(mot.to_string())),
            }
        }

        Ok(Postfixe(out))
    }
}

/// `top` doit-il sortir avant d’empiler `op` ?
fn doit_depiler(top: Operateur, op: Operateur) -> bool {
    match op.associativite() {
        Associativite::Gauche => top.precedence() >= op.precedence(),
    }
}

/// Convertit une suite de jetons infixe en OPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [3, +, 4, *, 2, /, (, 1, -, 5, )]
///   opn:    [3, 4, 2, *, 1, 5, -, /, +]
pub fn compile(tokens: &[Tok]) -> Result<Postfixe, ErreurCalc> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Op(op) => {
                // dépile tant que le sommet est un opérateur au moins aussi prioritaire
                while let Some(Tok::Op(top)) = ops.last() {
                    if !doit_depiler(*top, op) {
                        break;
                    }
                    if let Some(t) = ops.pop() {
                        out.push(t);
                    }
                }
                ops.push(Tok::Op(op));
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '(' ; la '(' elle-même est jetée
                let mut ouverte = false;
                while let Some(top) = ops.pop() {
                    if top == Tok::LPar {
                        ouverte = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouverte {
                    return Err(ErreurCalc::MismatchedParenthesis);
                }
            }
        }
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        if top == Tok::LPar {
            return Err(ErreurCalc::MismatchedParenthesis);
        }
        out.push(top);
    }

    Ok(Postfixe(out))
}

/// Chaîne infixe -> OPN (tokenize + compile).
pub fn compile_expression(expr: &str, lexique: Lexique) -> Result<Postfixe, ErreurCalc> {
    let jetons = tokenize_avec(expr, lexique)?;
    compile(&jetons)
}
