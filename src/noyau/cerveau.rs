//! src/noyau/cerveau.rs
//!
//! CalculatorBrain : le moteur RPN que l’hôte (UI, CLI...) pilote.
//!
//! Rôle : posséder la pile, le registre et les variables ; chaque mutation de la pile
//! relance une évaluation complète et rend la valeur.
//!
//! Contrats :
//! - Aucune erreur : "pas de valeur" = None (pile vide, opérandes insuffisants, variable inconnue).
//! - Opérateur inconnu => pile inchangée, évaluation relancée quand même.
//! - pop sur pile vide => no-op.
//! - clear_stack ne touche pas aux variables (et inversement).

use log::{debug, trace};
use num_traits::{Float, FloatConst};

use super::eval::evaluer;
use super::format::{decrire, decrire_tout, format_nombre};
use super::jetons::{format_pile, Op};
use super::registre::Registre;
use super::variables::Variables;

#[derive(Clone, Debug)]
pub struct CalculatorBrain<T = f64> {
    // base à l’indice 0, sommet à la fin
    pile: Vec<Op<T>>,
    registre: Registre<T>,
    variables: Variables<T>,
}

impl CalculatorBrain<f64> {
    /// Moteur f64 standard : opérateurs connus + x = 10, y = 5, z = 1.
    pub fn new() -> Self {
        Self::avec(Registre::standard(), Variables::par_defaut())
    }

    /// Moteur f64 sans variables pré-remplies.
    pub fn sans_variables() -> Self {
        Self::avec(Registre::standard(), Variables::new())
    }
}

impl<T: Float + FloatConst> Default for CalculatorBrain<T> {
    fn default() -> Self {
        Self::avec(Registre::standard(), Variables::par_defaut())
    }
}

impl<T: Float> CalculatorBrain<T> {
    /// Moteur à partir d’un registre et d’un magasin fournis par l’hôte.
    pub fn avec(registre: Registre<T>, variables: Variables<T>) -> Self {
        Self {
            pile: Vec::new(),
            registre,
            variables,
        }
    }

    /* ------------------------ Pile ------------------------ */

    pub fn push_operand(&mut self, valeur: T) -> Option<T> {
        self.pile.push(Op::Operand(valeur));
        self.evaluate()
    }

    pub fn push_variable(&mut self, symbole: impl Into<String>) -> Option<T> {
        self.pile.push(Op::Variable(symbole.into()));
        self.evaluate()
    }

    /// Pousse l’opérateur (ou la constante) connu sous `symbole`.
    /// Symbole inconnu : pile inchangée, on réévalue quand même.
    pub fn perform_operator(&mut self, symbole: &str) -> Option<T> {
        match self.registre.lookup(symbole) {
            Some(op) => self.pile.push(op.clone()),
            None => debug!("opérateur inconnu ignoré: {symbole:?}"),
        }
        self.evaluate()
    }

    /// Retire le dernier jeton (no-op sur pile vide).
    pub fn pop_last(&mut self) -> Option<T> {
        if let Some(op) = self.pile.pop() {
            trace!("pop {op}");
        }
        self.evaluate()
    }

    pub fn clear_stack(&mut self) {
        self.pile.clear();
    }

    pub fn stack(&self) -> &[Op<T>] {
        &self.pile
    }

    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    /* ------------------------ Évaluation / rendu ------------------------ */

    /// Valeur de l’expression au sommet de la pile.
    pub fn evaluate(&self) -> Option<T> {
        let (resultat, reste) = evaluer(&self.pile, &self.variables);
        debug!(
            "{} = {:?} avec {} restant",
            format_pile(&self.pile),
            resultat.map(format_nombre),
            format_pile(reste)
        );
        resultat
    }

    /// Toute la pile en infixe, expressions disjointes séparées par ", "
    /// (la plus récente d’abord). Pile vide => "?".
    pub fn render_description(&self) -> String {
        decrire_tout(&self.pile)
    }

    /// Seulement l’expression au sommet.
    pub fn describe_top(&self) -> String {
        decrire(&self.pile).0
    }

    /* ------------------------ Variables ------------------------ */

    pub fn define_variable(&mut self, symbole: impl Into<String>, valeur: T) {
        self.variables.definir(symbole, valeur);
    }

    /// Comme define_variable, mais None est ignoré (la variable garde sa valeur).
    pub fn learn_variable(&mut self, symbole: impl Into<String>, valeur: Option<T>) {
        if let Some(v) = valeur {
            self.define_variable(symbole, v);
        }
    }

    pub fn variable(&self, symbole: &str) -> Option<T> {
        self.variables.get(symbole)
    }

    pub fn clear_variables(&mut self) {
        self.variables.vider();
    }

    /* ------------------------ Registre ------------------------ */

    /// Apprend un opérateur ou une constante (dernier enregistrement gagne).
    pub fn learn_op(&mut self, op: Op<T>) {
        self.registre.register(op);
    }

    pub fn registre(&self) -> &Registre<T> {
        &self.registre
    }
}
