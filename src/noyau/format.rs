// src/noyau/format.rs
//
// Rendu du résultat pour l’écran : "=" + valeur à N décimales.
// - ∞ / -∞ pour les divisions par zéro flottantes
// - "indéfini" pour NaN (0/0)
// - jamais de "-0.00"

use super::scalaire::Scalaire;

pub fn format_resultat<S: Scalaire>(valeur: &S, decimales: usize) -> String {
    format!("={}", valeur.format_decimal(decimales))
}
