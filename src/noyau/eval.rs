//! Noyau — évaluateur à deux piles (précédence d'opérateurs, réduction gloutonne)
//!
//! Balayage gauche → droite de la chaîne :
//! - chiffre           => lecture littéral (lecture.rs), empile / ajuste la pile
//! - marqueur variable => empile la valeur liée de x
//! - marqueur exposant => sauté (le littéral suivant le gère par lookback),
//!                        ainsi que le signe qui le suit immédiatement
//! - jeton opérateur   => placement sur la pile d'opérateurs, avec réduction
//!                        gloutonne tant que la précédence entrante est ≤ à
//!                        celle du sommet (boucle ITÉRATIVE, pas de récursion :
//!                        une chaîne 1+1+1+… ne doit pas creuser la pile d'appel)
//!
//! Fin d'entrée : on vide la pile d'opérateurs par réductions successives ;
//! l'unique opérande restant est le résultat.
//!
//! Invariant : les deux piles vivent le temps d'UN appel (aucun état partagé).
//! S'il reste autre chose qu'un opérande, une entrée mal formée a traversé la
//! validation : la sortie est du NaN, jamais un panic.

use super::erreur::{ErreurDomaine, Resultat};
use super::jetons::{classer, Arite, Jeton, Op, MARQUEUR_EXPOSANT, MARQUEUR_VARIABLE};
use super::lecture::lire_nombre;

/// Évalue `expr` avec la variable liée à `x`.
///
/// Erreurs de domaine remontées : division par zéro, √ d'un négatif,
/// asin/acos hors [-1, 1]. Les autres sorties hors domaine (ln d'un négatif,
/// etc.) donnent silencieusement une valeur non finie.
pub fn evaluer(expr: &str, x: f64) -> Resultat<f64> {
    let chars: Vec<char> = expr.chars().collect();

    let mut operandes: Vec<f64> = Vec::with_capacity(16);
    let mut operateurs: Vec<Jeton> = Vec::with_capacity(16);

    // "valeur attendue" : vrai en début d'expression, après '(' et après tout
    // opérateur ou fonction. Décide du sens de '-' (moins unaire vs soustraction).
    let mut attend_valeur = true;

    let mut i: usize = 0;
    while i < chars.len() {
        let c = chars[i];

        if c.is_ascii_digit() {
            i += 1 + lire_nombre(&chars, i, &mut operandes);
            attend_valeur = false;
            continue;
        }

        if c == MARQUEUR_VARIABLE {
            operandes.push(x);
            attend_valeur = false;
            i += 1;
            continue;
        }

        // marqueur d'exposant : traité par le littéral suivant (lookback)
        if c == MARQUEUR_EXPOSANT {
            i += 1;
            continue;
        }

        // signe d'exposant : "E" puis '+'/'-' appartiennent au littéral, pas
        // aux opérateurs
        if (c == '+' || c == '-') && i > 0 && chars[i - 1] == MARQUEUR_EXPOSANT {
            i += 1;
            continue;
        }

        let Some((jeton, longueur)) = classer(&chars, i, attend_valeur) else {
            // caractère hors grammaire : ignoré (l'entrée est déjà hors contrat)
            i += 1;
            continue;
        };
        i += longueur;

        match jeton.op {
            Op::RPar => {
                // réduit jusqu'à la '(' appariée, puis la jette
                while let Some(haut) = operateurs.pop() {
                    if matches!(haut.op, Op::LPar) {
                        break;
                    }
                    reduire(haut, &mut operandes)?;
                }
                attend_valeur = false;
            }

            Op::LPar => {
                operateurs.push(jeton);
                attend_valeur = true;
            }

            _ => {
                // réduction gloutonne : tant que la précédence entrante est ≤
                // au sommet, on réduit le sommet puis on re-teste (itératif).
                // Une '(' au sommet (classe 0) bloque toujours : tout jeton
                // réel est de classe ≥ 1.
                while let Some(&haut) = operateurs.last() {
                    if matches!(haut.op, Op::LPar) || jeton.precedence > haut.precedence {
                        break;
                    }
                    operateurs.pop();
                    reduire(haut, &mut operandes)?;
                }
                operateurs.push(jeton);
                attend_valeur = true;
            }
        }
    }

    // vide la pile d'opérateurs
    while let Some(haut) = operateurs.pop() {
        if matches!(haut.op, Op::LPar) {
            // parenthèse orpheline : entrée non validée, on continue le drain
            continue;
        }
        reduire(haut, &mut operandes)?;
    }

    Ok(operandes.pop().unwrap_or(f64::NAN))
}

/// Réduction d'UN jeton : dépile ses opérandes, applique, rempile le résultat.
///
/// Binaire : dépile droite PUIS gauche (la droite a été empilée en dernier).
/// Pile trop courte => opérande NaN (entrée mal formée, sortie non finie).
fn reduire(jeton: Jeton, operandes: &mut Vec<f64>) -> Resultat<()> {
    match jeton.arite {
        Arite::Binaire => {
            let d = operandes.pop().unwrap_or(f64::NAN);
            let g = operandes.pop().unwrap_or(f64::NAN);

            let v = match jeton.op {
                Op::Add => g + d,
                Op::Sub => g - d,
                Op::Mult => g * d,
                Op::Div => {
                    if d == 0.0 {
                        return Err(ErreurDomaine::DivisionParZero);
                    }
                    g / d
                }
                // reste flottant (même signe que g)
                Op::Mod => g % d,
                Op::Pow => g.powf(d),
                _ => f64::NAN,
            };

            operandes.push(v);
        }

        Arite::Unaire => {
            let v = operandes.pop().unwrap_or(f64::NAN);

            let r = match jeton.op {
                Op::Ln => v.ln(),
                Op::Log => v.log10(),
                Op::Sin => v.sin(),
                Op::Cos => v.cos(),
                Op::Tan => v.tan(),
                Op::Atan => v.atan(),

                Op::Asin => {
                    if !(-1.0..=1.0).contains(&v) {
                        return Err(ErreurDomaine::ArcHorsDomaine { fonction: "asin" });
                    }
                    v.asin()
                }
                Op::Acos => {
                    if !(-1.0..=1.0).contains(&v) {
                        return Err(ErreurDomaine::ArcHorsDomaine { fonction: "acos" });
                    }
                    v.acos()
                }

                Op::Sqrt => {
                    if v < 0.0 {
                        return Err(ErreurDomaine::RacineNegative);
                    }
                    v.sqrt()
                }

                Op::MoinsUnaire => -v,
                _ => f64::NAN,
            };

            operandes.push(r);
        }

        // parenthèses : jamais réduites (gérées au placement)
        Arite::Nullaire => {}
    }

    Ok(())
}
