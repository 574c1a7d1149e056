use num::Num;

/// Dot product of two dense vectors
///
/// # Arguments
/// * `a` - first vector
/// * `b` - second vector, same length as `a`
///
/// # Returns
/// * `f64` - sum of the elementwise products
#[inline]
pub fn dot<A, B>(a: &[A], b: &[B]) -> f64
where
    A: Num + Copy + Into<f64>,
    B: Num + Copy + Into<f64>,
{
    debug_assert_eq!(
        a.len(),
        b.len(),
        "Vectors must be of the same length to compute dot product."
    );
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| x.into() * y.into())
        .sum()
}

/// Squared L2 norm
#[inline]
pub fn norm_sq<N>(v: &[N]) -> f64
where
    N: Num + Copy + Into<f64>,
{
    v.iter()
        .map(|&x| {
            let x: f64 = x.into();
            x * x
        })
        .sum()
}

/// L2 norm
#[inline]
pub fn norm<N>(v: &[N]) -> f64
where
    N: Num + Copy + Into<f64>,
{
    norm_sq(v).sqrt()
}

/// Cosine of the angle between two vectors
/// cosθ = A・B / (|A||B|)
///
/// A zero vector on either side gives `0.0`.
#[inline]
pub fn cosine<A, B>(a: &[A], b: &[B]) -> f64
where
    A: Num + Copy + Into<f64>,
    B: Num + Copy + Into<f64>,
{
    let norm_prod = norm(a) * norm(b);
    if norm_prod == 0.0 {
        return 0.0;
    }
    dot(a, b) / norm_prod
}
