// src/noyau/jetons.rs

/// Marqueur de la variable libre dans une expression (ex: "x*x").
pub const MARQUEUR_VARIABLE: char = 'x';

/// Marqueur d'exposant scientifique, toujours suivi d'un signe puis de chiffres.
pub const MARQUEUR_EXPOSANT: char = 'E';

/// Opérations reconnues (ensemble fermé).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mult,
    Div,
    Mod,
    Pow,

    LPar,
    RPar,

    Ln,
    Log,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,

    // '-' en position de valeur (début, après '(' ou après un opérateur)
    MoinsUnaire,
}

/// Arité : combien d'opérandes la réduction consomme.
/// Les parenthèses ne consomment rien (jamais réduites).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arite {
    Nullaire,
    Unaire,
    Binaire,
}

/// Jeton classé : opération + classe de précédence + arité.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Jeton {
    pub op: Op,
    pub precedence: u8,
    pub arite: Arite,
}

impl Jeton {
    pub fn nouveau(op: Op) -> Self {
        Self {
            op,
            precedence: precedence(op),
            arite: arite(op),
        }
    }
}

/// Classes de précédence :
/// 0 = parenthèses, 1 = +/-, 2 = *,/,mod, 3 = ^, 4 = fonctions, 5 = moins unaire.
pub fn precedence(op: Op) -> u8 {
    use Op::*;

    match op {
        LPar | RPar => 0,
        Add | Sub => 1,
        Mult | Div | Mod => 2,
        Pow => 3,
        Ln | Log | Sin | Cos | Tan | Asin | Acos | Atan | Sqrt => 4,
        MoinsUnaire => 5,
    }
}

fn arite(op: Op) -> Arite {
    use Op::*;

    match op {
        LPar | RPar => Arite::Nullaire,
        Add | Sub | Mult | Div | Mod | Pow => Arite::Binaire,
        Ln | Log | Sin | Cos | Tan | Asin | Acos | Atan | Sqrt | MoinsUnaire => Arite::Unaire,
    }
}

/// Classe le caractère en position `i` et retourne (jeton, longueur en caractères).
///
/// Les noms de fonctions sont résolus sur UN caractère de lookahead :
/// - 'l' + 'n' => ln (2), sinon log (3)
/// - 's' + 'i' => sin (3), sinon sqrt (4)
/// - 'a' + {'s','c','t'} => asin / acos / atan (4)
/// - 'm' => mod (3) ; 'c' => cos (3) ; 't' => tan (3)
///
/// `attend_valeur` décide du sens de '-' : moins unaire quand une valeur est
/// attendue (début d'expression, après '(' ou après un opérateur), soustraction
/// sinon.
///
/// Retourne None pour un caractère hors grammaire (l'appelant l'ignore).
pub fn classer(chars: &[char], i: usize, attend_valeur: bool) -> Option<(Jeton, usize)> {
    let (op, longueur) = match chars[i] {
        '+' => (Op::Add, 1),
        '-' if attend_valeur => (Op::MoinsUnaire, 1),
        '-' => (Op::Sub, 1),
        '*' => (Op::Mult, 1),
        '/' => (Op::Div, 1),
        '^' => (Op::Pow, 1),

        '(' => (Op::LPar, 1),
        ')' => (Op::RPar, 1),

        'm' => (Op::Mod, 3),
        'c' => (Op::Cos, 3),
        't' => (Op::Tan, 3),

        'l' => {
            if suivant(chars, i) == Some('n') {
                (Op::Ln, 2)
            } else {
                (Op::Log, 3)
            }
        }

        's' => {
            if suivant(chars, i) == Some('i') {
                (Op::Sin, 3)
            } else {
                (Op::Sqrt, 4)
            }
        }

        'a' => match suivant(chars, i) {
            Some('s') => (Op::Asin, 4),
            Some('c') => (Op::Acos, 4),
            Some('t') => (Op::Atan, 4),
            _ => return None,
        },

        _ => return None,
    };

    Some((Jeton::nouveau(op), longueur))
}

fn suivant(chars: &[char], i: usize) -> Option<char> {
    chars.get(i + 1).copied()
}
