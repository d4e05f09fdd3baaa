// src/noyau/lecture.rs
//
// Lecture d'un littéral numérique depuis la position d'un chiffre.
//
// Cas normal : la plage maximale de chiffres (+ au plus un point décimal)
// est parsée puis empilée comme nouvel opérande.
//
// Cas scientifique (lookback) : si les DEUX caractères juste avant la plage
// sont le marqueur d'exposant puis un signe, la valeur lue est un exposant et
// le sommet de la pile d'opérandes est multiplié en place par 10^(±exposant).
// Rien n'est empilé dans ce cas : "2E+3" module le 2 déjà présent.

use super::jetons::MARQUEUR_EXPOSANT;

/// Lit le littéral qui commence en `debut` (un chiffre) et met à jour la pile
/// d'opérandes. Retourne le nombre de caractères consommés EN PLUS du premier,
/// pour que l'appelant avance sa position de lecture.
pub fn lire_nombre(chars: &[char], debut: usize, operandes: &mut Vec<f64>) -> usize {
    let mut fin = debut;
    let mut point_vu = false;

    while fin < chars.len() {
        let c = chars[fin];
        if c.is_ascii_digit() {
            fin += 1;
            continue;
        }
        if c == '.' && !point_vu {
            point_vu = true;
            fin += 1;
            continue;
        }
        break;
    }

    let texte: String = chars[debut..fin].iter().collect();
    // plage = chiffres + au plus un point => le parse ne peut pas échouer;
    // NaN en filet si l'entrée a contourné la grammaire
    let valeur: f64 = texte.parse().unwrap_or(f64::NAN);

    let exposant_signe = debut >= 2
        && chars[debut - 2] == MARQUEUR_EXPOSANT
        && (chars[debut - 1] == '+' || chars[debut - 1] == '-');

    if exposant_signe {
        let exposant = if chars[debut - 1] == '-' {
            -valeur
        } else {
            valeur
        };
        // pile vide possible si l'expression commence par le marqueur :
        // entrée mal formée, on ne fabrique pas d'opérande
        if let Some(haut) = operandes.last_mut() {
            *haut *= 10f64.powf(exposant);
        }
    } else {
        operandes.push(valeur);
    }

    fin - debut - 1
}
