// src/noyau/operateurs.rs
//
// Table des opérateurs (fixe, lecture seule).
// - 4 opérateurs binaires : + - * /
// - tous associatifs à gauche
// - précédence 1 pour + -, 2 pour * /
//
// L’application (lhs, rhs) -> nombre vit dans Scalaire::appliquer,
// pour que la même table serve au flottant et au rationnel exact.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

/// Une entrée de la table.
#[derive(Clone, Copy, Debug)]
pub struct DefOperateur {
    pub op: Operateur,
    pub symbole: char,
    pub precedence: u8,
    pub associativite: Associativite,
}

/// La table complète (const : aucune initialisation, aucun état partagé mutable).
pub const TABLE: [DefOperateur; 4] = [
    DefOperateur {
        op: Operateur::Plus,
        symbole: '+',
        precedence: 1,
        associativite: Associativite::Gauche,
    },
    DefOperateur {
        op: Operateur::Moins,
        symbole: '-',
        precedence: 1,
        associativite: Associativite::Gauche,
    },
    DefOperateur {
        op: Operateur::Fois,
        symbole: '*',
        precedence: 2,
        associativite: Associativite::Gauche,
    },
    DefOperateur {
        op: Operateur::Divise,
        symbole: '/',
        precedence: 2,
        associativite: Associativite::Gauche,
    },
];

impl Operateur {
    /// Recherche par symbole (None si hors table).
    pub fn depuis_symbole(c: char) -> Option<Self> {
        TABLE.iter().find(|d| d.symbole == c).map(|d| d.op)
    }

    pub fn def(self) -> &'static DefOperateur {
        // l’ordre de TABLE suit l’ordre des variantes
        &TABLE[self as usize]
    }

    pub fn symbole(self) -> char {
        self.def().symbole
    }

    pub fn precedence(self) -> u8 {
        self.def().precedence
    }

    pub fn associativite(self) -> Associativite {
        self.def().associativite
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}
