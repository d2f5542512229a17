//! Indel distance and the normalized ratio derived from it.
use hashbrown::HashMap;

const WORD_BITS: usize = 64;

/// Bit masks of character positions in a pattern string, one bit per position.
struct PatternMatchVector {
    num_blocks: usize,
    masks: HashMap<char, Vec<u64>>,
}

impl PatternMatchVector {
    fn new(pattern: &[char]) -> Self {
        let num_blocks = (pattern.len() + WORD_BITS - 1) / WORD_BITS;
        let mut masks = HashMap::<char, Vec<u64>>::new();
        for (i, &c) in pattern.iter().enumerate() {
            masks.entry(c).or_insert_with(|| vec![0; num_blocks])[i / WORD_BITS] |=
                1u64 << (i % WORD_BITS);
        }
        Self { num_blocks, masks }
    }

    fn get(&self, c: char) -> Option<&[u64]> {
        self.masks.get(&c).map(|v| v.as_slice())
    }
}

/// Computes the length of the longest common subsequence of two character sequences.
///
/// # Examples
///
/// ```
/// use fuzzy_ratio::indel::lcs_len;
///
/// let a: Vec<char> = "kitten".chars().collect();
/// let b: Vec<char> = "sitting".chars().collect();
/// assert_eq!(lcs_len(&a, &b), 4);
/// ```
pub fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    // The shorter side is packed into bit vectors.
    let (pattern, text) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let pm = PatternMatchVector::new(pattern);

    // Zero bits of `s` mark the positions of a common subsequence.
    let mut s = vec![u64::MAX; pm.num_blocks];
    for &c in text {
        let m = match pm.get(c) {
            Some(m) => m,
            None => continue,
        };
        let mut carry = false;
        for (block, &mask) in s.iter_mut().zip(m.iter()) {
            let v = *block;
            let u = v & mask;
            let (x, c1) = v.overflowing_add(u);
            let (x, c2) = x.overflowing_add(carry as u64);
            carry = c1 || c2;
            *block = x | (v & !mask);
        }
    }

    let mut lcs = 0;
    for (i, &block) in s.iter().enumerate() {
        let bits = (pattern.len() - i * WORD_BITS).min(WORD_BITS);
        let valid = if bits == WORD_BITS {
            u64::MAX
        } else {
            (1u64 << bits) - 1
        };
        lcs += (!block & valid).count_ones() as usize;
    }
    lcs
}

/// Computes the indel distance, i.e., the minimum number of insertions and deletions
/// transforming one sequence into the other.
pub fn indel_distance(a: &[char], b: &[char]) -> usize {
    a.len() + b.len() - 2 * lcs_len(a, b)
}

/// Converts an indel distance into a ratio in [0,100] given the total length of both sides.
///
/// Two empty sides are identical, so the ratio is 100.
#[inline(always)]
pub fn normalized_ratio(distance: usize, total_len: usize) -> f64 {
    if total_len == 0 {
        return 100.;
    }
    100. * (1. - distance as f64 / total_len as f64)
}

/// Computes the indel ratio between two strings in the range of [0,100], counting in characters.
///
/// # Examples
///
/// ```
/// use fuzzy_ratio::ratio;
///
/// let r = ratio("this is a test", "this is a test!");
/// assert!((r - 96.551724).abs() < 1e-4);
/// assert_eq!(ratio("abc", "abc"), 100.);
/// ```
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    normalized_ratio(indel_distance(&a, &b), a.len() + b.len())
}
