use super::*;
use std::cmp::Ordering;

parameterized_test! {can_compare_floats, (left, right, expected), {
    assert_eq!(compare_floats(left, right), expected);
}}

can_compare_floats! {
    case01_less: (1., 2., Ordering::Less),
    case02_greater: (2., 1., Ordering::Greater),
    case03_equal: (1., 1., Ordering::Equal),
    case04_nan_left: (f64::NAN, 1., Ordering::Greater),
    case05_nan_right: (1., f64::NAN, Ordering::Less),
    case06_nan_both: (f64::NAN, f64::NAN, Ordering::Equal),
}
