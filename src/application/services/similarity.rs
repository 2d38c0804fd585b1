/// Minimum similarity between the answer and the expected phrase to pass.
pub const SIMILARITY_THRESHOLD: f64 = 0.8;

/// Case-insensitive Ratcliff/Obershelp ratio `2 * M / T`, where `M` counts the
/// characters in all matching blocks and `T` is the combined length.
///
/// Blocks are found by taking the longest common contiguous run, then
/// recursing into the unmatched text on either side of it.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matched_chars(&a, &b) as f64 / total as f64
}

pub fn passes(response: &str, expected: &str) -> bool {
    similarity(response, expected) >= SIMILARITY_THRESHOLD
}

fn matched_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut queue = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            queue.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            queue.push((i + size, ahi, j + size, bhi));
        }
    }

    matched
}

/// Longest common run of `a[alo..ahi]` and `b[blo..bhi]` as `(i, j, size)`.
/// Ties go to the run starting earliest in `a`, then earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    let width = bhi - blo;

    // run_ending[k + 1]: length of the run ending at a[i], b[blo + k]
    let mut previous = vec![0usize; width + 1];
    let mut current = vec![0usize; width + 1];

    for i in alo..ahi {
        for j in blo..bhi {
            let k = j - blo;
            current[k + 1] = if a[i] == b[j] { previous[k] + 1 } else { 0 };
            let size = current[k + 1];
            if size > best_size {
                best_i = i + 1 - size;
                best_j = j + 1 - size;
                best_size = size;
            }
        }
        std::mem::swap(&mut previous, &mut current);
    }

    (best_i, best_j, best_size)
}
