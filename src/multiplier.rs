//! Janet division: multiplier/nonmultiplier analysis for a set of
//! derivative-order vectors. Grounded on `vec_multipliers` in the source
//! material (Gerdt/Blinkov's Janet-like monomial division).

use std::collections::HashSet;

fn vec_degree(v: usize, m: &[i64]) -> i64 {
    m[v]
}

/// Partition `vars` into multipliers and nonmultipliers for the vector `m`
/// within the complete set `big_m`, under the variable-significance order
/// `vars` (e.g. `[2, 1, 0]` means index 2 is the most significant
/// variable). `vars` is a permutation of `0..m.len()`.
pub fn vec_multipliers(m: &[i64], big_m: &[Vec<i64>], vars: &[usize]) -> (Vec<usize>, Vec<usize>) {
    let d = big_m
        .iter()
        .flat_map(|u| vars.iter().map(move |&v| vec_degree(v, u)))
        .max()
        .unwrap_or(0);

    let mut mult = Vec::new();
    if vec_degree(vars[0], m) == d {
        mult.push(vars[0]);
    }

    for j in 1..vars.len() {
        let v = vars[j];
        let dd: Vec<i64> = vars[..j].iter().map(|&x| vec_degree(x, m)).collect();
        let class: Vec<&Vec<i64>> = big_m
            .iter()
            .filter(|u| {
                let prefix: Vec<i64> = vars[..j].iter().map(|&vv| vec_degree(vv, u)).collect();
                prefix == dd
            })
            .collect();
        let max_in_class = class.iter().map(|u| vec_degree(v, u)).max().unwrap_or(0);
        if vec_degree(v, m) == max_in_class {
            mult.push(v);
        }
    }

    let mult_set: HashSet<usize> = mult.iter().copied().collect();
    let mut nonmult: Vec<usize> = vars.iter().copied().filter(|v| !mult_set.contains(v)).collect();
    nonmult.sort_unstable();
    (mult, nonmult)
}
