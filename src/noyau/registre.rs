// src/noyau/registre.rs
//
// Registre : symbole affiché -> Op.
// - Rempli une fois à la construction (standard), puis seulement enrichi.
// - Dernier enregistrement gagne (pas d’erreur sur doublon).
// - Recherche exacte sur le symbole.
//
// Ordre RPN (IMPORTANT):
// - L’évaluateur appelle f(A, B) avec A = premier dépilé (poussé en dernier).
// - ÷ et − inversent donc leurs arguments : B / A et B − A.
//   "10 2 ÷" => 5, "10 3 −" => 7.

use std::collections::HashMap;

use log::trace;
use num_traits::{Float, FloatConst};

use super::jetons::Op;

/// Symboles standard (ce que l’hôte branche sur ses boutons).
pub mod symboles {
    pub const FOIS: &str = "×";
    pub const DIVISE: &str = "÷";
    pub const PLUS: &str = "+";
    pub const MOINS: &str = "−";
    pub const RACINE: &str = "√";
    pub const OPPOSE: &str = "±";
    pub const SIN: &str = "sin";
    pub const COS: &str = "cos";
    pub const PI: &str = "π";
}

#[derive(Clone, Debug)]
pub struct Registre<T> {
    ops: HashMap<String, Op<T>>,
}

impl<T: Float> Registre<T> {
    /// Registre vide (aucun opérateur connu).
    pub fn vide() -> Self {
        Self {
            ops: HashMap::new(),
        }
    }

    /// Enregistre `op` sous son symbole (écrase l’ancien).
    /// Operand / Variable n’ont pas de clé : ignorés.
    pub fn register(&mut self, op: Op<T>) {
        let Some(cle) = op.cle_registre() else {
            trace!("registre: {op} ignoré (pas de symbole)");
            return;
        };
        let cle = cle.to_string();
        trace!("registre: {cle} appris");
        self.ops.insert(cle, op);
    }

    pub fn lookup(&self, symbole: &str) -> Option<&Op<T>> {
        self.ops.get(symbole)
    }

    pub fn contient(&self, symbole: &str) -> bool {
        self.ops.contains_key(symbole)
    }

    /// Symboles connus (ordre non garanti).
    pub fn symboles(&self) -> impl Iterator<Item = &str> {
        self.ops.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl<T: Float + FloatConst> Registre<T> {
    /// Registre standard : × ÷ + − √ ± sin cos π.
    pub fn standard() -> Self {
        use symboles::*;

        let mut r = Self::vide();
        r.register(Op::Binary(FOIS.into(), 2, |a, b| a * b));
        r.register(Op::Binary(DIVISE.into(), 2, |a, b| b / a));
        r.register(Op::Binary(PLUS.into(), 1, |a, b| a + b));
        r.register(Op::Binary(MOINS.into(), 1, |a, b| b - a));
        r.register(Op::Unary(RACINE.into(), T::sqrt));
        r.register(Op::Unary(OPPOSE.into(), |x| -x));
        r.register(Op::Unary(SIN.into(), T::sin));
        r.register(Op::Unary(COS.into(), T::cos));
        r.register(Op::Constant(PI.into(), T::PI()));
        r
    }
}

impl<T: Float + FloatConst> Default for Registre<T> {
    fn default() -> Self {
        Self::standard()
    }
}
