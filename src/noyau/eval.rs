//! Noyau : évaluation de la pile RPN
//!
//! Descente récursive depuis le SOMMET (dernier poussé = premier évalué).
//! On travaille sur une tranche empruntée : la pile de l’appelant n’est jamais modifiée,
//! chaque appel rend (valeur, reste non consommé).
//!
//! "Pas de valeur" (None) n’est pas une erreur : pile vide, opérandes insuffisants,
//! variable inconnue. Il remonte à travers chaque opérateur englobant.

use num_traits::Float;

use super::jetons::Op;
use super::variables::Variables;

/// Évalue l’expression au sommet de `pile`.
/// Retourne la valeur (ou None) et le reste de la pile sous cette expression.
pub fn evaluer<'a, T: Float>(
    pile: &'a [Op<T>],
    variables: &Variables<T>,
) -> (Option<T>, &'a [Op<T>]) {
    let Some((op, reste)) = pile.split_last() else {
        return (None, pile);
    };

    match op {
        Op::Operand(x) | Op::Constant(_, x) => (Some(*x), reste),

        // absente => None, sans rien consommer de plus
        Op::Variable(nom) => (variables.get(nom), reste),

        Op::Unary(_, f) => {
            let (operande, reste) = evaluer(reste, variables);
            (operande.map(*f), reste)
        }

        Op::Binary(_, _, f) => {
            // A = premier dépilé, B = second ; f(A, B)
            let (a, reste) = evaluer(reste, variables);
            let Some(a) = a else {
                return (None, reste);
            };
            let (b, reste) = evaluer(reste, variables);
            (b.map(|b| f(a, b)), reste)
        }
    }
}
