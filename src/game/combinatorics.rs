//! Exact combinatorics over unordered dice outcomes
//!
//! Rolling k indistinguishable dice produces a multiset of faces, so the
//! reachable outcomes are the combinations-with-repetition of the face
//! domain, and each outcome's exact probability is multinomial. Both
//! enumerations run over *indices* into the face domain; callers map indices
//! to face values.

use statrs::function::factorial::ln_factorial;

/// All non-decreasing index sequences of length `k` over `0..n`
/// (combinations with repetition), in lexicographic order.
pub fn multisets(n: usize, k: usize) -> Vec<Vec<usize>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    if n == 0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut current = vec![0usize; k];
    loop {
        out.push(current.clone());

        // Advance the rightmost digit that can still grow; everything after
        // it resets to the same value to keep the sequence non-decreasing.
        let mut i = k;
        while i > 0 && current[i - 1] == n - 1 {
            i -= 1;
        }
        if i == 0 {
            return out;
        }
        let next = current[i - 1] + 1;
        for digit in &mut current[i - 1..] {
            *digit = next;
        }
    }
}

/// All strictly increasing index sequences of length `k` over `0..n`
/// (combinations without repetition), in lexicographic order.
pub fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    if k > n {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut current: Vec<usize> = (0..k).collect();
    loop {
        out.push(current.clone());

        // Rightmost position that has room to grow: position i may hold at
        // most n - k + i.
        let mut i = k;
        while i > 0 && current[i - 1] == n - k + (i - 1) {
            i -= 1;
        }
        if i == 0 {
            return out;
        }
        current[i - 1] += 1;
        for j in i..k {
            current[j] = current[j - 1] + 1;
        }
    }
}

/// Per-face draw counts for a multiset of face indices.
pub fn face_counts(indices: &[usize], n: usize) -> Vec<u64> {
    let mut counts = vec![0u64; n];
    for &index in indices {
        counts[index] += 1;
    }
    counts
}

/// Exact probability of drawing a specific multiset of independent biased
/// die faces: k! / ∏(countᵢ!) · ∏(biasᵢ^countᵢ).
///
/// Computed in log space with `ln_factorial` so the factorials never
/// overflow; faces with zero draws contribute nothing, and a zero-bias face
/// with a positive count makes the whole outcome impossible.
pub fn multinomial_pmf(counts: &[u64], biases: &[f64]) -> f64 {
    debug_assert_eq!(counts.len(), biases.len());

    let draws: u64 = counts.iter().sum();
    let mut ln_p = ln_factorial(draws);
    for (&count, &bias) in counts.iter().zip(biases) {
        if count == 0 {
            continue;
        }
        if bias <= 0.0 {
            return 0.0;
        }
        ln_p -= ln_factorial(count);
        ln_p += count as f64 * bias.ln();
    }
    ln_p.exp()
}
