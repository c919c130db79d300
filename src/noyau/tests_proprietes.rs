//! Tests propriétés : campagne déterministe sur CalculatorBrain.
//!
//! But : marteler le moteur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariants : évaluation idempotente, pile jamais modifiée par evaluate/rendu,
//!   rendu infixe relisible (même valeur après relecture).

use std::time::{Duration, Instant};

use super::cerveau::CalculatorBrain;
use super::registre::symboles::*;

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
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers ------------------------ */

/// Égalité "numérique" : NaN == NaN, sinon écart relatif minuscule.
fn meme_valeur(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) if x.is_nan() && y.is_nan() => true,
        (Some(x), Some(y)) if x.is_infinite() || y.is_infinite() => x == y,
        (Some(x), Some(y)) => (x - y).abs() <= 1e-9 * x.abs().max(1.0),
        _ => false,
    }
}

fn bits(v: Option<f64>) -> Option<u64> {
    v.map(f64::to_bits)
}

/* ------------------------ Relecture infixe (tests seulement) ------------------------ */

/// Relit le rendu d’une expression complète :
///   expr   := terme (('+' | '−') terme)*
///   terme  := facteur (('×' | '÷') facteur)*
///   facteur:= ('√' | '±' | "sin" | "cos") facteur | nombre | '(' expr ')'
struct Lecteur {
    chars: Vec<char>,
    i: usize,
}

impl Lecteur {
    fn lire(texte: &str) -> f64 {
        let mut l = Lecteur {
            chars: texte.chars().collect(),
            i: 0,
        };
        let v = l.expr();
        assert_eq!(l.i, l.chars.len(), "relecture incomplète de {texte:?}");
        v
    }

    fn courant(&self) -> Option<char> {
        self.chars.get(self.i).copied()
    }

    fn mot(&mut self, m: &str) -> bool {
        let n = m.chars().count();
        let fin = (self.i + n).min(self.chars.len());
        let morceau: String = self.chars[self.i..fin].iter().collect();
        if morceau == m {
            self.i += n;
            true
        } else {
            false
        }
    }

    fn expr(&mut self) -> f64 {
        let mut v = self.terme();
        loop {
            match self.courant() {
                Some('+') => {
                    self.i += 1;
                    v += self.terme();
                }
                Some('−') => {
                    self.i += 1;
                    v -= self.terme();
                }
                _ => return v,
            }
        }
    }

    fn terme(&mut self) -> f64 {
        let mut v = self.facteur();
        loop {
            match self.courant() {
                Some('×') => {
                    self.i += 1;
                    v *= self.facteur();
                }
                Some('÷') => {
                    self.i += 1;
                    v /= self.facteur();
                }
                _ => return v,
            }
        }
    }

    fn facteur(&mut self) -> f64 {
        if self.mot("√") {
            return self.facteur().sqrt();
        }
        if self.mot("±") {
            return -self.facteur();
        }
        if self.mot("sin") {
            return self.facteur().sin();
        }
        if self.mot("cos") {
            return self.facteur().cos();
        }
        if self.mot("(") {
            let v = self.expr();
            assert!(self.mot(")"), "')' attendue à {}", self.i);
            return v;
        }

        let debut = self.i;
        while matches!(self.courant(), Some(c) if c.is_ascii_digit()) {
            self.i += 1;
        }
        let texte: String = self.chars[debut..self.i].iter().collect();
        texte
            .parse::<f64>()
            .unwrap_or_else(|_| panic!("nombre attendu à {debut}, trouvé {texte:?}"))
    }
}

/* ------------------------ Génération (bornée) ------------------------ */

/// Pousse une expression complète aléatoire (entiers 1..=99, opérateurs standard).
fn gen_expr(rng: &mut Rng, c: &mut CalculatorBrain, profondeur: u32) {
    if profondeur == 0 || rng.pick(4) == 0 {
        c.push_operand(f64::from(1 + rng.pick(99)));
        return;
    }

    if rng.pick(5) == 0 {
        gen_expr(rng, c, profondeur - 1);
        let op = [RACINE, OPPOSE, SIN, COS][rng.pick(4) as usize];
        c.perform_operator(op);
        return;
    }

    // gauche d’abord (poussée avant), puis droite
    gen_expr(rng, c, profondeur - 1);
    gen_expr(rng, c, profondeur - 1);
    let op = [PLUS, MOINS, FOIS, DIVISE][rng.pick(4) as usize];
    c.perform_operator(op);
}

/* ------------------------ Propriétés ------------------------ */

#[test]
fn prop_relecture_du_rendu() {
    let start = Instant::now();
    let max = Duration::from_secs(5);

    for seed in 1..=300u64 {
        budget(start, max);

        let mut rng = Rng::new(seed);
        let mut c = CalculatorBrain::new();
        gen_expr(&mut rng, &mut c, 5);

        let rendu = c.render_description();
        let valeur = c.evaluate();
        assert!(valeur.is_some(), "seed={seed} rendu={rendu:?}");

        let relu = Lecteur::lire(&rendu);
        assert!(
            meme_valeur(valeur, Some(relu)),
            "seed={seed} rendu={rendu:?} moteur={valeur:?} relu={relu}"
        );
    }
}

#[test]
fn prop_evaluate_idempotent_et_pile_intacte() {
    let start = Instant::now();
    let max = Duration::from_secs(5);

    let variables = ["x", "y", "z", "q", "m"];
    let operateurs = [
        PLUS, MOINS, FOIS, DIVISE, RACINE, OPPOSE, SIN, COS, PI, "%", "-", "",
    ];

    for seed in 1..=50u64 {
        let mut rng = Rng::new(seed);
        let mut c = CalculatorBrain::new();

        for _ in 0..200 {
            budget(start, max);

            let rendu_mutation = match rng.pick(10) {
                0..=2 => c.push_operand(f64::from(rng.pick(20)) - 5.0),
                3 => c.push_variable(variables[rng.pick(5) as usize]),
                4..=6 => c.perform_operator(operateurs[rng.pick(12) as usize]),
                7 => c.pop_last(),
                8 => {
                    let nom = variables[rng.pick(5) as usize];
                    c.define_variable(nom, f64::from(rng.pick(9)));
                    c.evaluate()
                }
                _ => {
                    if rng.pick(10) == 0 {
                        c.clear_stack();
                    }
                    c.evaluate()
                }
            };

            let taille = c.stack().len();
            let a = c.evaluate();
            let b = c.evaluate();
            assert_eq!(bits(a), bits(b), "seed={seed}: evaluate non idempotent");
            assert_eq!(
                bits(rendu_mutation),
                bits(a),
                "seed={seed}: la mutation doit rendre evaluate()"
            );

            let description = c.render_description();
            let sommet = c.describe_top();
            assert!(!description.is_empty());
            assert!(
                description.starts_with(&sommet),
                "seed={seed}: {description:?} devrait commencer par {sommet:?}"
            );
            assert_eq!(c.stack().len(), taille, "seed={seed}: pile modifiée");
        }
    }
}

#[test]
fn prop_operateur_inconnu_ne_touche_pas_la_pile() {
    let mut rng = Rng::new(42);
    let mut c = CalculatorBrain::new();
    gen_expr(&mut rng, &mut c, 3);

    let avant = c.stack().len();
    let valeur = c.evaluate();
    let rendu = c.render_description();

    for s in ["%", "^", "*", "/", "-", "SIN", "pi", " +"] {
        assert_eq!(bits(c.perform_operator(s)), bits(valeur), "symbole {s:?}");
        assert_eq!(c.stack().len(), avant, "symbole {s:?}");
        assert_eq!(c.render_description(), rendu, "symbole {s:?}");
    }
}

#[test]
fn prop_variable_inconnue_propage_none() {
    let start = Instant::now();
    let max = Duration::from_secs(5);

    for seed in 1..=100u64 {
        budget(start, max);

        let mut rng = Rng::new(seed);
        let mut c = CalculatorBrain::sans_variables();

        // inconnue à gauche, expression complète à droite
        c.push_variable("q");
        gen_expr(&mut rng, &mut c, 3);
        let op = [PLUS, MOINS, FOIS, DIVISE][rng.pick(4) as usize];
        assert_eq!(c.perform_operator(op), None, "seed={seed}");

        c.define_variable("q", 4.0);
        assert!(c.evaluate().is_some(), "seed={seed}");

        c.clear_variables();
        assert_eq!(c.evaluate(), None, "seed={seed}");
    }
}

#[test]
fn prop_pops_jusqu_au_vide() {
    let mut rng = Rng::new(7);
    let mut c = CalculatorBrain::new();
    gen_expr(&mut rng, &mut c, 4);

    let n = c.stack().len();
    for _ in 0..n {
        c.pop_last();
    }
    assert!(c.is_empty());
    assert_eq!(c.evaluate(), None);
    assert_eq!(c.render_description(), "?");

    // encore quelques pops : no-op
    for _ in 0..3 {
        assert_eq!(c.pop_last(), None);
    }
}
