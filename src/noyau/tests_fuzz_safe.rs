//! Tests fuzz safe : aller-retour infixe -> OPN -> valeur + robustesse.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : evaluate(compile(expr)) == évaluation directe de l’arbre généré

use std::time::{Duration, Instant};

use super::calcul::calculer;
use super::erreur::ErreurCalc;
use crate::reglages::{Lexique, Politique, Reglages};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Comparaison flottante ------------------------ */

fn proches(a: f64, b: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

/* ------------------------ Génération (texte, valeur directe) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> (String, f64) {
    let ent = rng.pick(20);
    let txt = if rng.coin() {
        format!("{ent}.{}", rng.pick(10))
    } else {
        format!("{ent}")
    };
    // même conversion que le noyau => feuilles identiques au bit près
    let val = txt.parse::<f64>().unwrap_or_else(|e| panic!("{txt:?}: {e}"));
    (txt, val)
}

fn applique(op: char, a: f64, b: f64) -> f64 {
    match op {
        '+' => a + b,
        '-' => a - b,
        '*' => a * b,
        _ => a / b,
    }
}

/// Arbre entièrement parenthésé.
fn gen_arbre(rng: &mut Rng, depth: usize) -> (String, f64) {
    if depth == 0 || rng.pick(4) == 0 {
        return gen_nombre(rng);
    }
    let op = ['+', '-', '*', '/'][rng.pick(4) as usize];
    let (ta, va) = gen_arbre(rng, depth - 1);
    let (tb, vb) = gen_arbre(rng, depth - 1);
    (format!("({ta}{op}{tb})"), applique(op, va, vb))
}

/// Somme de produits SANS parenthèses : teste précédence + associativité gauche.
/// "a*b/c - d + e*f" => ((a*b)/c - d) + (e*f)
fn gen_somme_de_produits(rng: &mut Rng) -> (String, f64) {
    fn terme(rng: &mut Rng) -> (String, f64) {
        let (mut txt, mut val) = gen_nombre(rng);
        for _ in 0..rng.pick(3) {
            let op = if rng.coin() { '*' } else { '/' };
            let (t, v) = gen_nombre(rng);
            txt = format!("{txt}{op}{t}");
            val = applique(op, val, v);
        }
        (txt, val)
    }

    let (mut txt, mut val) = terme(rng);
    for _ in 0..rng.pick(5) {
        let op = if rng.coin() { '+' } else { '-' };
        let (t, v) = terme(rng);
        txt = format!("{txt}{op}{t}");
        val = applique(op, val, v);
    }
    (txt, val)
}

/// Chaîne brute (alphabet calculatrice + quelques intrus).
fn gen_bruit(rng: &mut Rng) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '3', '7', '9', '.', '+', '-', '*', '/', '(', ')', ' ', 'x', ',',
    ];
    let n = rng.pick(25) as usize;
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_aller_retour_arbres() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let reglages = Reglages::default();

    for _ in 0..300 {
        budget(t0, max);

        let (expr, attendu) = gen_arbre(&mut rng, 5);
        let r = calculer(&expr, &reglages)
            .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        assert!(
            proches(r.valeur, attendu),
            "expr={expr:?} obtenu={} attendu={attendu}",
            r.valeur
        );
    }
}

#[test]
fn fuzz_safe_aller_retour_sans_parentheses() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let reglages = Reglages {
        politique: Politique::Stricte,
        ..Reglages::default()
    };

    for _ in 0..300 {
        budget(t0, max);

        let (expr, attendu) = gen_somme_de_produits(&mut rng);
        let r = calculer(&expr, &reglages)
            .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        assert!(
            proches(r.valeur, attendu),
            "expr={expr:?} obtenu={} attendu={attendu}",
            r.valeur
        );
    }
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0x5EED_u64);

    let tolerant = Reglages::default();
    let strict = Reglages {
        politique: Politique::Stricte,
        ..Reglages::default()
    };
    let lexique_strict = Reglages {
        lexique: Lexique::Strict,
        ..Reglages::default()
    };

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let s = gen_bruit(&mut rng);

        // Stricte réussit => Tolérante réussit, avec la même valeur.
        match calculer(&s, &strict) {
            Ok(r) => {
                let rt = calculer(&s, &tolerant)
                    .unwrap_or_else(|e| panic!("s={s:?}: strict ok, tolérant err={e}"));
                assert!(proches(r.valeur, rt.valeur), "s={s:?}");
                seen_ok += 1;
            }
            Err(_) => seen_err += 1,
        }

        // Lexique strict : soit le même résultat que le permissif, soit une erreur lexicale.
        match calculer(&s, &lexique_strict) {
            Ok(r) => {
                let rp = calculer(&s, &tolerant)
                    .unwrap_or_else(|e| panic!("s={s:?}: lexique strict ok, permissif err={e}"));
                assert!(proches(r.valeur, rp.valeur), "s={s:?}");
            }
            Err(ErreurCalc::LexicalError { caractere, .. }) => {
                assert!(caractere == 'x' || caractere == ',', "s={s:?}");
            }
            Err(_) => {}
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 0, "aucun succès: fuzz trop “bruité”");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(42);
    let mut b = Rng::new(42);
    let reglages = Reglages::default();

    for _ in 0..50 {
        let (ea, _) = gen_arbre(&mut a, 4);
        let (eb, _) = gen_arbre(&mut b, 4);
        assert_eq!(ea, eb);

        let ra = calculer(&ea, &reglages).map(|r| r.affichage);
        let rb = calculer(&eb, &reglages).map(|r| r.affichage);
        assert_eq!(ra, rb);
    }
}
