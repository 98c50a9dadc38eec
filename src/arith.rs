/// Sum of two integers. Wraps on overflow instead of panicking.
pub fn add(x: i64, y: i64) -> i64 {
    x.wrapping_add(y)
}

pub fn check_positive(num: i64) -> bool {
    num > 0
}
