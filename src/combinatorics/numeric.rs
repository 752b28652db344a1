/// Falling factorial x * (x-1) * ... * floor.
///
/// `fact(x, 1)` is x!. Returns `floor` when x is already at or below it.
pub fn fact(x: u64, floor: u64) -> u64 {
    if x <= floor { floor } else { x * fact(x - 1, floor) }
}

/// n choose k, as a float because it only ever divides.
pub fn pick(n: u64, k: u64) -> f32 {
    match k {
        0 => 1.,
        k if k > n => 0.,
        k => fact(n, n - k + 1) as f32 / fact(k, 1) as f32,
    }
}

pub fn sum<T>(values: &[T]) -> f64
where
    T: Copy + Into<f64>,
{
    values.iter().map(|&v| v.into()).sum()
}

pub fn mean<T>(values: &[T]) -> Option<f64>
where
    T: Copy + Into<f64>,
{
    match values.len() {
        0 => None,
        n => Some(sum(values) / n as f64),
    }
}

/// Median of an ascending slice. Even lengths average the middle two.
pub fn median<T>(sorted: &[T]) -> Option<f64>
where
    T: Copy + Into<f64>,
{
    let n = sorted.len();
    match n {
        0 => None,
        n if n % 2 == 1 => Some(sorted[n / 2].into()),
        n => Some((sorted[n / 2 - 1].into() + sorted[n / 2].into()) / 2.),
    }
}
