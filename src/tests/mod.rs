mod basic;

/// Brute-force recomputation of the maxima sequence from an ascending point
/// list: classify every point against its neighbours, then order the result
/// by value descending, argument ascending.
fn reference_maxima<A, V>(points: &[(A, V)]) -> Vec<(A, V)>
where
    A: Ord + Copy,
    V: Ord + Copy,
{
    let mut out: Vec<(A, V)> = points
        .iter()
        .enumerate()
        .filter(|&(i, &(_, v))| {
            let left_ok = i == 0 || points[i - 1].1 <= v;
            let right_ok = i + 1 == points.len() || points[i + 1].1 <= v;
            left_ok && right_ok
        })
        .map(|(_, p)| *p)
        .collect();
    out.sort_by(|x, y| y.1.cmp(&x.1).then_with(|| x.0.cmp(&y.0)));
    out
}
