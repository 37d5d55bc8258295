/// Lazily doubles each element, keeping order and length.
///
/// Overflow wraps instead of panicking, so the function is total over `i32`.
pub fn doubled(numbers: &[i32]) -> impl Iterator<Item = i32> + '_ {
    numbers.iter().map(|n| n.wrapping_mul(2))
}

pub fn double(numbers: &[i32]) -> Vec<i32> {
    doubled(numbers).collect()
}
