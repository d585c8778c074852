/// Levenshtein distance between two strings, counted in chars.
///
/// Insertions, deletions and substitutions all cost 1. Keeps a single
/// rolling row sized by the shorter input.
pub fn levenshtein(lhs: &str, rhs: &str) -> usize {
    let lhs: Vec<char> = lhs.chars().collect();
    let rhs: Vec<char> = rhs.chars().collect();
    let (long, short) = if lhs.len() >= rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };

    if short.is_empty() {
        return long.len();
    }

    let mut previous: Vec<usize> = (0..=short.len()).collect();
    let mut current = vec![0; short.len() + 1];

    for (i, &lc) in long.iter().enumerate() {
        current[0] = i + 1;
        for (j, &sc) in short.iter().enumerate() {
            let substitution = previous[j] + usize::from(lc != sc);
            let insertion = previous[j + 1] + 1;
            let deletion = current[j] + 1;
            current[j + 1] = substitution.min(insertion).min(deletion);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[short.len()]
}
