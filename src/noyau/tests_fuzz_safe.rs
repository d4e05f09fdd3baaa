//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l'évaluateur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur et longueurs bornées
//! - budget temps global
//! - contrat fort : evaluer/valider ne paniquent JAMAIS, quelle que soit
//!   l'entrée ; les seules issues sont Ok(f64) ou une ErreurDomaine typée
//! - même seed => mêmes expressions => mêmes sorties (pureté observable)

use std::time::{Duration, Instant};

use super::echantillon::echantillons_x;
use super::erreur::Resultat;
use super::eval::evaluer;
use super::validation::valider;

/* ------------------------ RNG déterministe minimal ------------------------ */

struct Rng {
    etat: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        Self { etat: seed.max(1) }
    }

    // xorshift64 (déterministe)
    fn next_u32(&mut self) -> u32 {
        let mut e = self.etat;
        e ^= e << 13;
        e ^= e >> 7;
        e ^= e << 17;
        self.etat = e;
        (e >> 32) as u32
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

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_atome(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => format!("{}", rng.pick(100)),
        1 => format!("{}.{}", rng.pick(10), rng.pick(100)),
        2 => "x".to_string(),
        // notation scientifique : signe obligatoire après E
        3 => format!("{}E+{}", 1 + rng.pick(9), rng.pick(4)),
        4 => format!("{}E-{}", 1 + rng.pick(9), rng.pick(4)),
        _ => format!("-{}", 1 + rng.pick(50)),
    }
}

fn gen_expr(rng: &mut Rng, profondeur: usize) -> String {
    if profondeur == 0 {
        return gen_atome(rng);
    }

    match rng.pick(10) {
        0 => gen_atome(rng),
        1 => format!("({}+{})", gen_expr(rng, profondeur - 1), gen_expr(rng, profondeur - 1)),
        2 => format!("({}-{})", gen_expr(rng, profondeur - 1), gen_expr(rng, profondeur - 1)),
        3 => format!("({}*{})", gen_expr(rng, profondeur - 1), gen_expr(rng, profondeur - 1)),
        4 => format!("({}/{})", gen_expr(rng, profondeur - 1), gen_expr(rng, profondeur - 1)),
        5 => format!("({}mod{})", gen_expr(rng, profondeur - 1), gen_atome(rng)),
        6 => format!("({}^{})", gen_atome(rng), rng.pick(4)),
        7 => {
            let f = ["sin", "cos", "tan", "atan", "ln", "log"][rng.pick(6) as usize];
            format!("{}({})", f, gen_expr(rng, profondeur - 1))
        }
        8 => format!("sqrt({})", gen_expr(rng, profondeur - 1)),
        _ => format!("-({})", gen_expr(rng, profondeur - 1)),
    }
}

/// Soupe de caractères : alphabet de la grammaire + intrus, sans structure.
fn gen_soupe(rng: &mut Rng, longueur: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '9', '.', '+', '-', '*', '/', '^', '(', ')', 'x', 'E', 's', 'c', 't', 'a', 'l',
        'm', 'q', '#', ' ', 'é',
    ];

    (0..longueur)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_generees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE);

    let mut vus_ok = 0usize;
    let mut vus_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let x = (rng.pick(41) as f64 - 20.0) / 2.0;

        match evaluer(&expr, x) {
            Ok(_) => vus_ok += 1,
            // erreurs de domaine typées : issues légitimes en fuzz
            Err(_) => vus_err += 1,
        }
    }

    // le fuzz doit balayer les deux issues
    assert!(vus_ok > 50, "trop peu de succès: {vus_ok}");
    assert!(vus_err > 0, "aucune erreur vue: fuzz trop sage");
}

#[test]
fn fuzz_safe_determinisme_meme_seed() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let passe = |seed: u64| -> Vec<Resultat<f64>> {
        let mut rng = Rng::new(seed);
        (0..150)
            .map(|_| {
                let expr = gen_expr(&mut rng, 3);
                let x = rng.pick(17) as f64 - 8.0;
                evaluer(&expr, x)
            })
            .collect()
    };

    let a = passe(0xBADC0DE);
    budget(t0, max);
    let b = passe(0xBADC0DE);

    // NaN != NaN : on compare les représentations binaires
    assert_eq!(a.len(), b.len());
    for (i, (ra, rb)) in a.iter().zip(b.iter()).enumerate() {
        let identiques = match (ra, rb) {
            (Ok(va), Ok(vb)) => va.to_bits() == vb.to_bits(),
            (Err(ea), Err(eb)) => ea == eb,
            _ => false,
        };
        assert!(identiques, "divergence à l'itération {i}: {ra:?} vs {rb:?}");
    }
}

#[test]
fn fuzz_safe_soupe_sans_panic() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xFACADE);

    for _ in 0..400 {
        budget(t0, max);

        let n = 1 + rng.pick(40) as usize;
        let soupe = gen_soupe(&mut rng, n);

        // aucune des deux ne doit paniquer, quoi qu'il arrive
        let _ = valider(&soupe);
        let _ = evaluer(&soupe, 1.5);
    }
}

#[test]
fn fuzz_safe_echantillonnage_termine() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xD0D0);

    for _ in 0..60 {
        budget(t0, max);

        let a = rng.pick(41) as f64 - 20.0;
        let b = rng.pick(41) as f64 - 20.0;
        let (xmin, xmax) = if rng.coin() { (a, b) } else { (0.0, 0.0) };

        let xs = echantillons_x(xmin, xmax);

        // ~1000 points par balayage, jamais plus de marge que l'arrondi
        assert!(xs.len() <= 1100, "xmin={xmin} xmax={xmax} nb={}", xs.len());
        assert!(xs.windows(2).all(|p| p[0] < p[1]));
    }
}
