/// Extends `items` on the right with `filler` until it is at least as long as `reference`.
///
/// The longer sequence is never truncated.
///
/// # Examples
///
/// ```
/// use papyeval::pad;
///
/// assert_eq!(vec![0.95, 0.0, 0.0], pad(vec![0.95], &["a", "b", "c"], 0.0));
/// assert_eq!(vec![1, 2, 3], pad(vec![1, 2, 3], &[0], 9));
/// ```
pub fn pad<T, U>(mut items: Vec<T>, reference: &[U], filler: T) -> Vec<T>
where
    T: Clone,
{
    if items.len() < reference.len() {
        log::debug!("Padding {} items to {}", items.len(), reference.len());
        items.resize(reference.len(), filler);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck::TestResult;

    #[test]
    fn test_pad_shorter() {
        let padded = pad(vec!["n-s---mn-".to_string()], &["n-s---mn-", "<unk>"], "_".to_string());

        assert_eq!(vec!["n-s---mn-", "_"], padded);
    }

    #[test]
    fn test_pad_empty() {
        assert_eq!(vec![0.0, 0.0], pad(vec![], &[(), ()], 0.0));
    }

    #[test]
    fn test_pad_equal_length() {
        assert_eq!(vec![1, 2], pad(vec![1, 2], &['a', 'b'], 0));
    }

    #[test]
    fn test_property_pad() {
        fn property_pad_never_shortens(items: Vec<u8>, reference: Vec<u8>, filler: u8) -> TestResult {
            let padded = pad(items.clone(), &reference, filler);
            if padded.len() != items.len().max(reference.len()) {
                return TestResult::failed();
            }
            if padded[..items.len()] != items[..] {
                return TestResult::failed();
            }
            if padded[items.len()..].iter().any(|&x| x != filler) {
                return TestResult::failed();
            }
            TestResult::passed()
        }
        let mut qc = quickcheck::QuickCheck::new().tests(2000);
        qc.quickcheck(property_pad_never_shortens as fn(Vec<u8>, Vec<u8>, u8) -> TestResult)
    }
}
