//! Primal/dual transform: `A, b, c, d -> -A', -c, -b, -d`, with each dual
//! variable labeled after its primal complement so `dual(dual(d)) == d`
//! (property P2 in `SPEC_FULL.md` §8).

use crate::dictionary::Dictionary;
use crate::linalg::Matrix;
use crate::scalar::Scalar;

impl<T: Scalar> Dictionary<T> {
    pub fn dual(&self) -> Dictionary<T> {
        let m = self.m();
        let n = self.n();

        let basic = self.nonbasic.clone();
        let nonbasic = self.basic.clone();

        let mut a = Matrix::<T>::new(n, m);
        for i in 0..m {
            for j in 0..n {
                a[(j, i)] = -self.a[(i, j)];
            }
        }

        let b: Vec<T> = self.c.iter().map(|&cj| -cj).collect();
        let c: Vec<T> = self.b.iter().map(|&bi| -bi).collect();
        let d = -self.d;

        Dictionary { basic, nonbasic, a, b, c, d }
    }
}
