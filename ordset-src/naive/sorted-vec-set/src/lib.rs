#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SortedVecSet<T>(Vec<T>);

impl<T: Ord + Clone> SortedVecSet<T> {
    pub fn new() -> Self { Self(vec![]) }
    pub fn from_unsorted(mut xs: Vec<T>) -> Self {
        xs.sort();
        xs.dedup();
        Self(xs)
    }
    pub fn insert(&mut self, x: T) -> bool {
        match self.0.binary_search(&x) {
            Ok(_) => false,
            Err(i) => {
                self.0.insert(i, x);
                true
            }
        }
    }
    pub fn remove(&mut self, x: &T) -> bool {
        match self.0.binary_search(x) {
            Ok(i) => {
                self.0.remove(i);
                true
            }
            Err(_) => false,
        }
    }
    pub fn contains(&self, x: &T) -> bool { self.0.binary_search(x).is_ok() }
    pub fn union(&self, other: &Self) -> Self {
        let mut xs: Vec<_> = self.0.iter().chain(&other.0).cloned().collect();
        xs.sort();
        xs.dedup();
        Self(xs)
    }
    pub fn intersection(&self, other: &Self) -> Self {
        Self(self.0.iter().filter(|x| other.contains(x)).cloned().collect())
    }
    pub fn difference(&self, other: &Self) -> Self {
        Self(self.0.iter().filter(|x| !other.contains(x)).cloned().collect())
    }
    pub fn is_subset(&self, other: &Self) -> bool {
        self.0.iter().all(|x| other.contains(x))
    }
    pub fn split(&self, x: &T) -> (Self, bool, Self) {
        let lt = self.0.iter().filter(|y| *y < x).cloned().collect();
        let gt = self.0.iter().filter(|y| *y > x).cloned().collect();
        (Self(lt), self.contains(x), Self(gt))
    }
    pub fn elements(&self) -> &[T] { &self.0 }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

#[test]
fn sanity_check() {
    let mut s = SortedVecSet::from_unsorted(vec![5, 3, 8, 3, 1]);
    assert_eq!(s.elements(), [1, 3, 5, 8]);
    assert!(s.insert(4));
    assert!(!s.insert(4));
    assert!(s.remove(&5));
    assert!(!s.remove(&5));
    assert_eq!(s.elements(), [1, 3, 4, 8]);

    let t = SortedVecSet::from_unsorted(vec![3, 4, 9]);
    assert_eq!(s.union(&t).elements(), [1, 3, 4, 8, 9]);
    assert_eq!(s.intersection(&t).elements(), [3, 4]);
    assert_eq!(s.difference(&t).elements(), [1, 8]);
    assert!(!t.is_subset(&s));
    assert!(s.intersection(&t).is_subset(&t));

    let (l, present, r) = s.split(&4);
    assert_eq!((l.elements(), present, r.elements()), (&[1, 3][..], true, &[8][..]));
}
