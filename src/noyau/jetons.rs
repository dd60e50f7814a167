// src/noyau/jetons.rs

use std::convert::Infallible;
use std::fmt;

use super::erreur::ErreurCalc;
use super::operateurs::Operateur;
use crate::reglages::Lexique;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    // Texte brut du littéral (chiffres + '.'), converti seulement à l’évaluation.
    Num(String),
    Op(Operateur),

    LPar,
    RPar,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(s) => f.write_str(s),
            Tok::Op(op) => write!(f, "{op}"),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Tokenize une chaîne en jetons (lexique permissif : tout caractère
/// non reconnu est ignoré).
///
/// Exemple: "12+3*4" -> [12, +, 3, *, 4]
pub fn tokenize(s: &str) -> Vec<Tok> {
    let mut out = Vec::new();

    let balayage: Result<(), Infallible> = scanner(
        s,
        |c, position| {
            if !c.is_whitespace() {
                tracing::trace!(caractere = %c, position, "caractère ignoré");
            }
            Ok(())
        },
        &mut out,
    );
    match balayage {
        Ok(()) => out,
        Err(jamais) => match jamais {},
    }
}

/// Tokenize selon le lexique choisi.
/// - Permissif : comme `tokenize`
/// - Strict    : espaces ignorés, tout autre caractère inconnu => LexicalError
pub fn tokenize_avec(s: &str, lexique: Lexique) -> Result<Vec<Tok>, ErreurCalc> {
    match lexique {
        Lexique::Permissif => Ok(tokenize(s)),
        Lexique::Strict => {
            let mut out = Vec::new();
            scanner(
                s,
                |c, position| {
                    if c.is_whitespace() {
                        Ok(())
                    } else {
                        Err(ErreurCalc::LexicalError {
                            caractere: c,
                            position,
                        })
                    }
                },
                &mut out,
            )?;
            Ok(out)
        }
    }
}

/// Balayage caractère par caractère.
/// - chiffres et '.' s’accumulent dans un tampon (aucune validation ici : "1.2.3" = un seul jeton)
/// - tout autre caractère vide d’abord le tampon, puis est classé
/// - `inconnu` décide du sort des caractères hors alphabet
fn scanner<E, F>(s: &str, mut inconnu: F, out: &mut Vec<Tok>) -> Result<(), E>
where
    F: FnMut(char, usize) -> Result<(), E>,
{
    let mut nombre = String::new();

    for (position, c) in s.chars().enumerate() {
        if c.is_ascii_digit() || c == '.' {
            nombre.push(c);
            continue;
        }

        if !nombre.is_empty() {
            out.push(Tok::Num(std::mem::take(&mut nombre)));
        }

        if let Some(op) = Operateur::depuis_symbole(c) {
            out.push(Tok::Op(op));
        } else if c == '(' {
            out.push(Tok::LPar);
        } else if c == ')' {
            out.push(Tok::RPar);
        } else {
            inconnu(c, position)?;
        }
    }

    if !nombre.is_empty() {
        out.push(Tok::Num(nombre));
    }

    Ok(())
}

/// Format utilitaire (démarche / CLI) : liste de jetons en texte, séparés par un espace.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
