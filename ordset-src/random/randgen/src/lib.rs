use std::ops::Range;

use rand::{
    distributions::{Distribution, Uniform},
    seq::index,
    Rng,
};

pub trait Gen {
    type Output;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output;
}

/// `len` distinct values from `bound`, ascending.
pub struct StrictAsc<B> {
    pub bound: B,
    pub len: usize,
}

/// `len` independent draws from `bound`, in draw order. Duplicates are
/// likely when `len` is close to the width of `bound`.
pub struct Scattered<B> {
    pub bound: B,
    pub len: usize,
}

impl Gen for Range<i32> {
    type Output = i32;
    fn generate<R: Rng>(&self, rng: &mut R) -> i32 {
        Uniform::from(self.clone()).sample(rng)
    }
}

impl Gen for StrictAsc<Range<i32>> {
    type Output = Vec<i32>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Vec<i32> {
        let Range { start, end } = self.bound;
        let width = (end - start) as usize;
        let mut res: Vec<_> = index::sample(rng, width, self.len)
            .into_iter()
            .map(|i| start + i as i32)
            .collect();
        res.sort_unstable();
        res
    }
}

impl Gen for Scattered<Range<i32>> {
    type Output = Vec<i32>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Vec<i32> {
        let between = Uniform::from(self.bound.clone());
        (0..self.len).map(|_| between.sample(rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use super::*;

    #[test]
    fn strict_asc_uniformity() {
        let mut rng = ChaCha20Rng::from_seed([0; 32]);
        let n = 10_usize.pow(5);

        let mut map = BTreeMap::new();
        for _ in 0..n {
            let tmp = StrictAsc { bound: 0..5, len: 2 }.generate(&mut rng);
            assert!(tmp.windows(2).all(|w| w[0] < w[1]));
            *map.entry(tmp).or_insert(0) += 1;
        }
        let k = 10;
        assert_eq!(map.len(), k);
        for &v in map.values() {
            assert!(v >= (n / k) * 95 / 100);
            assert!(v <= (n / k) * 105 / 100);
        }
    }

    #[test]
    fn scattered_bounds() {
        let mut rng = ChaCha20Rng::from_seed([1; 32]);
        let xs = Scattered { bound: -3..3, len: 1000 }.generate(&mut rng);
        assert_eq!(xs.len(), 1000);
        assert!(xs.iter().all(|x| (-3..3).contains(x)));
        assert!(xs.windows(2).any(|w| w[0] == w[1]));
        assert!(xs.windows(2).any(|w| w[0] > w[1]));
    }
}
