// src/noyau/format.rs

use num_traits::{Float, ToPrimitive};

use super::jetons::{Op, PRECEDENCE_MAX};

/// Rendu d’une opérande absente (pile vide / opérandes insuffisants).
pub const PLACEHOLDER: &str = "?";

/// Séparateur entre expressions disjointes de la pile.
pub const SEPARATEUR_DESCRIPTION: &str = ", ";

/// Chiffres significatifs du format compact (comme %g).
const CHIFFRES_SIGNIFICATIFS: usize = 6;

/* ------------------------ Nombres ------------------------ */

fn sans_zeros_inutiles(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

/// Format général compact (équivalent %g) :
/// 6 chiffres significatifs, pas de zéros inutiles, notation scientifique
/// si l’exposant sort de [-4, 6).
pub fn format_g(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // l’exposant se lit APRÈS arrondi (9.999999 -> 1e+01)
    let sci = format!("{:.*e}", CHIFFRES_SIGNIFICATIFS - 1, v);
    let (mantisse, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= CHIFFRES_SIGNIFICATIFS as i32 {
        let signe = if exp < 0 { '-' } else { '+' };
        format!("{}e{signe}{:02}", sans_zeros_inutiles(mantisse), exp.abs())
    } else {
        let decimales = (CHIFFRES_SIGNIFICATIFS as i32 - 1 - exp).max(0) as usize;
        sans_zeros_inutiles(&format!("{:.*}", decimales, v))
    }
}

pub fn format_nombre<T: Float>(x: T) -> String {
    match x.to_f64() {
        Some(v) => format_g(v),
        None => "nan".to_string(),
    }
}

/* ------------------------ Pile -> infixe ------------------------ */

fn entourer_si(s: String, parentheses: bool) -> String {
    if parentheses {
        format!("({s})")
    } else {
        s
    }
}

/// Rend l’expression au sommet de `pile` en infixe.
/// Retourne (texte, reste, précédence du texte) : la précédence sert à l’appelant
/// pour décider des parenthèses.
///
/// Binaire : B (second dépilé) à gauche, A (premier dépilé) à droite.
/// - B entouré si prec(op) > prec(B)
/// - A entouré si prec(op) >= prec(A) (10−(3−2), 8÷(4÷2) restent lisibles)
pub fn decrire<T: Float>(pile: &[Op<T>]) -> (String, &[Op<T>], i32) {
    let Some((op, reste)) = pile.split_last() else {
        return (PLACEHOLDER.to_string(), pile, PRECEDENCE_MAX);
    };

    match op {
        Op::Operand(x) => (format_nombre(*x), reste, op.precedence()),

        Op::Constant(s, _) | Op::Variable(s) => (s.clone(), reste, op.precedence()),

        Op::Unary(s, _) => {
            let (operande, reste, p) = decrire(reste);
            let operande = entourer_si(operande, op.precedence() > p);
            (format!("{s}{operande}"), reste, op.precedence())
        }

        Op::Binary(s, prec, _) => {
            let (droite, reste, p_droite) = decrire(reste);
            let droite = entourer_si(droite, p_droite < PRECEDENCE_MAX && *prec >= p_droite);

            let (gauche, reste, p_gauche) = decrire(reste);
            let gauche = entourer_si(gauche, *prec > p_gauche);

            (format!("{gauche}{s}{droite}"), reste, *prec)
        }
    }
}

/// Description complète : chaque expression disjointe, la plus récente d’abord.
/// Pile vide => "?".
pub fn decrire_tout<T: Float>(pile: &[Op<T>]) -> String {
    let mut morceaux: Vec<String> = Vec::new();
    let mut reste = pile;

    loop {
        let (courant, r, _) = decrire(reste);
        morceaux.push(courant);
        reste = r;
        if reste.is_empty() {
            break;
        }
    }

    morceaux.join(SEPARATEUR_DESCRIPTION)
}
