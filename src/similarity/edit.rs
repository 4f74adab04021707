//! Weighted edit distance and run normalisation for signatures.

/// Runs longer than this are collapsed before scoring.
pub const MAX_RUN: usize = 3;

const INSERT_COST: u32 = 1;
const DELETE_COST: u32 = 1;
const SUBSTITUTE_COST: u32 = 2;

/// Collapses every run of more than `MAX_RUN` identical bytes to `MAX_RUN`.
pub fn collapse_runs(s: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for (i, &c) in s.iter().enumerate() {
        if i >= MAX_RUN && s[i - MAX_RUN..i].iter().all(|&p| p == c) {
            continue;
        }
        out.push(c);
    }
    out
}

/// Edit distance with insert/delete cost 1 and substitution cost 2.
///
/// Two-row Wagner–Fischer; signatures are at most 64 bytes.
pub fn edit_distance(a: &[u8], b: &[u8]) -> u32 {
    let mut prev: Vec<u32> = (0..=b.len() as u32).map(|j| j * INSERT_COST).collect();
    let mut cur = vec![0u32; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        cur[0] = (i as u32 + 1) * DELETE_COST;
        for (j, &cb) in b.iter().enumerate() {
            let sub = if ca == cb { 0 } else { SUBSTITUTE_COST };
            cur[j + 1] = (prev[j] + sub)
                .min(prev[j + 1] + DELETE_COST)
                .min(cur[j] + INSERT_COST);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}
