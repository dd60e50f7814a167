// src/noyau/scalaire.rs
//
// Domaine numérique de l’évaluateur.
// - f64         : IEEE-754 (1/0 = inf, 0/0 = NaN), par défaut
// - BigRational : exact, sans infini => division par zéro = erreur explicite
//
// Un littéral n’est accepté que s’il contient seulement des chiffres
// et au plus un point, avec au moins un chiffre ("1.2.3" et "." refusés).

use std::fmt::Debug;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use super::erreur::ErreurCalc;
use super::operateurs::Operateur;

pub trait Scalaire: Clone + Debug {
    /// Convertit le texte d’un jeton nombre.
    fn depuis_litteral(s: &str) -> Result<Self, ErreurCalc>;

    /// Opérande gauche de repli (politique tolérante).
    fn zero() -> Self;

    /// Applique `op` à (lhs, rhs), dans cet ordre.
    fn appliquer(op: Operateur, lhs: Self, rhs: Self) -> Result<Self, ErreurCalc>;

    fn vers_f64(&self) -> f64;

    /// Rendu décimal avec exactement `decimales` chiffres après le point.
    fn format_decimal(&self, decimales: usize) -> String;
}

/// Découpe un littéral en (partie entière, partie fractionnaire).
fn decouper_litteral(s: &str) -> Result<(&str, &str), ErreurCalc> {
    let invalide = || ErreurCalc::InvalidNumericLiteral(s.to_string());

    if !s.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(invalide());
    }
    if s.matches('.').count() > 1 {
        return Err(invalide());
    }

    let (ent, frac) = s.split_once('.').unwrap_or((s, ""));
    if ent.is_empty() && frac.is_empty() {
        return Err(invalide());
    }
    Ok((ent, frac))
}

/// Retire le signe d’un rendu nul ("-0.00" -> "0.00").
fn sans_zero_negatif(txt: String) -> String {
    match txt.strip_prefix('-') {
        Some(reste) if reste.chars().all(|c| c == '0' || c == '.') => reste.to_string(),
        _ => txt,
    }
}

/* ------------------------ f64 ------------------------ */

impl Scalaire for f64 {
    fn depuis_litteral(s: &str) -> Result<Self, ErreurCalc> {
        decouper_litteral(s)?;
        s.parse::<f64>()
            .map_err(|_| ErreurCalc::InvalidNumericLiteral(s.to_string()))
    }

    fn zero() -> Self {
        0.0
    }

    fn appliquer(op: Operateur, lhs: Self, rhs: Self) -> Result<Self, ErreurCalc> {
        Ok(match op {
            Operateur::Plus => lhs + rhs,
            Operateur::Moins => lhs - rhs,
            Operateur::Fois => lhs * rhs,
            Operateur::Divise => lhs / rhs,
        })
    }

    fn vers_f64(&self) -> f64 {
        *self
    }

    fn format_decimal(&self, decimales: usize) -> String {
        if self.is_nan() {
            return "indéfini".to_string();
        }
        if self.is_infinite() {
            return if self.is_sign_positive() { "∞" } else { "-∞" }.to_string();
        }
        sans_zero_negatif(format!("{:.*}", decimales, self))
    }
}

/* ------------------------ BigRational ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

impl Scalaire for BigRational {
    fn depuis_litteral(s: &str) -> Result<Self, ErreurCalc> {
        let (ent, frac) = decouper_litteral(s)?;

        // "12.34" -> 1234 / 10^2
        let chiffres = format!("{ent}{frac}");
        let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)
            .ok_or_else(|| ErreurCalc::InvalidNumericLiteral(s.to_string()))?;

        Ok(BigRational::new(n, pow10(frac.len())))
    }

    fn zero() -> Self {
        <BigRational as Zero>::zero()
    }

    fn appliquer(op: Operateur, lhs: Self, rhs: Self) -> Result<Self, ErreurCalc> {
        match op {
            Operateur::Plus => Ok(lhs + rhs),
            Operateur::Moins => Ok(lhs - rhs),
            Operateur::Fois => Ok(lhs * rhs),
            Operateur::Divise => {
                if rhs.is_zero() {
                    return Err(ErreurCalc::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
        }
    }

    fn vers_f64(&self) -> f64 {
        // conversion mise à l’échelle par num-rational : pas de inf/inf
        ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
    }

    /// Arrondi au plus proche, moitié loin de zéro.
    fn format_decimal(&self, decimales: usize) -> String {
        let neg = self.is_negative();
        let echelle = pow10(decimales);

        let num = self.numer().abs() * &echelle;
        let den = self.denom();

        let mut q = &num / den;
        let r = &num % den;
        if r * 2 >= *den {
            q += 1u32;
        }

        let ent = &q / &echelle;
        let mut txt = ent.to_str_radix(10);

        if decimales > 0 {
            let mut frac = (&q % &echelle).to_str_radix(10);
            while frac.len() < decimales {
                frac.insert(0, '0');
            }
            txt.push('.');
            txt.push_str(&frac);
        }

        if neg && !q.is_zero() {
            txt.insert(0, '-');
        }
        txt
    }
}
