//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée accumulée, écran, erreur, démarche)
//! et offrir les actions du clavier (saisie, =, C, DEL) sans logique d’affichage.
//!
//! Contrats :
//! - L’entrée appartient à l’instance (aucun état global) et est passée au noyau par référence.
//! - Entrée bornée à `reglages.longueur_max` caractères (19 par défaut).
//! - Après un résultat affiché, toute nouvelle saisie repart d’un écran vide.

use crate::noyau::{self, Demarche};
use crate::reglages::Reglages;

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub ecran: String,  // entrée + "=x.xx" après calcul
    pub erreur: String, // message d’erreur du dernier calcul
    pub demarche: Demarche,

    // --- paramètres ---
    pub reglages: Reglages,
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            reglages,
            ..Self::default()
        }
    }

    /// Un résultat (ou une erreur) est-il affiché ?
    pub fn resultat_affiche(&self) -> bool {
        self.ecran.contains('=')
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    /// Chiffre, '.', opérateur ou parenthèse.
    pub fn saisir(&mut self, symbole: char) {
        if self.resultat_affiche() {
            self.effacer();
        }

        if self.entree.chars().count() >= self.reglages.longueur_max {
            tracing::debug!(longueur_max = self.reglages.longueur_max, "entrée pleine, symbole ignoré");
            return;
        }

        self.entree.push(symbole);
        self.ecran.push(symbole);
    }

    /// "=" : évalue l’entrée via le noyau et ajoute le résultat à l’écran.
    pub fn calculer(&mut self) {
        if self.resultat_affiche() {
            return;
        }

        match noyau::calculer(&self.entree, &self.reglages) {
            Ok(r) => {
                tracing::info!(entree = %self.entree, resultat = %r.affichage, "calcul");
                self.erreur.clear();
                self.ecran.push_str(&r.affichage);
                self.demarche = r.demarche;
            }
            Err(e) => {
                tracing::info!(entree = %self.entree, erreur = %e, "calcul échoué");
                self.erreur = e.to_string();
                self.ecran.push_str("=erreur");
                self.demarche = Demarche::default();
            }
        }
    }

    /// C : remise à zéro (entrée + écran + erreur + démarche).
    pub fn effacer(&mut self) {
        self.entree.clear();
        self.ecran.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
    }

    /// DEL : retire le dernier symbole (ou efface tout si un résultat est affiché).
    pub fn retour_arriere(&mut self) {
        if self.resultat_affiche() {
            self.effacer();
            return;
        }
        self.entree.pop();
        self.ecran.pop();
    }
}
