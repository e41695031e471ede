use crate::wheel::Lock;

/// Counts the positions at which `word` can be dialled on the lock.
///
/// Every run of `word.len()` neighbouring wheels is tried, and a run counts
/// when each letter of the word sits on the wheel under it. All runs are
/// tried, so a word that fits in several places is counted several times.
/// Matching ignores case. Empty words and words longer than the lock count
/// zero.
pub fn alignments(lock: &Lock, word: &str) -> usize {
    let letters: Vec<char> = word.chars().collect();
    let wheels = lock.wheels();

    if letters.is_empty() || letters.len() > wheels.len() {
        return 0;
    }

    wheels
        .windows(letters.len())
        .filter(|window| {
            window
                .iter()
                .zip(letters.iter())
                .all(|(wheel, &letter)| wheel.has(letter))
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::Wheel;
    use proptest::prelude::*;

    fn lock(rows: &[&str]) -> Lock {
        let wheels: Vec<Wheel> = rows.iter().map(|row| row.parse().unwrap()).collect();
        let letters = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        Lock::new(wheels, letters)
    }

    const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

    #[test]
    fn test_every_window_counted() {
        let lock = lock(&["ab", "ab", "ab"]);
        assert_eq!(alignments(&lock, "ab"), 2);
        assert_eq!(alignments(&lock, "ba"), 2);
        assert_eq!(alignments(&lock, "a"), 3);
    }

    #[test]
    fn test_single_window() {
        let lock = lock(&["a", "ab", "a"]);
        assert_eq!(alignments(&lock, "ab"), 1);
        assert_eq!(alignments(&lock, "ba"), 1);
        assert_eq!(alignments(&lock, "bb"), 0);
    }

    #[test]
    fn test_full_alphabet() {
        let lock = lock(&[ALPHABET, ALPHABET, ALPHABET]);
        assert_eq!(alignments(&lock, "z"), 3);
        assert_eq!(alignments(&lock, "qx"), 2);
        assert_eq!(alignments(&lock, "cat"), 1);
    }

    #[test]
    fn test_word_as_long_as_lock() {
        let lock = lock(&["ct", "ao", "tg"]);
        assert_eq!(alignments(&lock, "cat"), 1);
        assert_eq!(alignments(&lock, "tog"), 1);
        assert_eq!(alignments(&lock, "dog"), 0);
    }

    #[test]
    fn test_word_longer_than_lock() {
        let lock = lock(&[ALPHABET, ALPHABET]);
        assert_eq!(alignments(&lock, "cat"), 0);
    }

    #[test]
    fn test_empty_word() {
        let lock = lock(&["a"]);
        assert_eq!(alignments(&lock, ""), 0);
    }

    #[test]
    fn test_non_letters_never_match() {
        let lock = lock(&[ALPHABET, ALPHABET]);
        assert_eq!(alignments(&lock, "a1"), 0);
    }

    fn wheel_rows() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z]{1,6}", 1..12)
    }

    proptest! {
        #[test]
        fn alignments_within_window_count(rows in wheel_rows(), word in "[a-z]{1,12}") {
            let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
            let lock = lock(&rows);
            let count = alignments(&lock, &word);

            if word.len() > lock.wheel_count() {
                prop_assert_eq!(count, 0);
            } else {
                prop_assert!(count <= lock.wheel_count() - word.len() + 1);
            }
            if word.len() == lock.wheel_count() {
                prop_assert!(count <= 1);
            }
        }

        #[test]
        fn alignments_ignore_case(rows in wheel_rows(), word in "[a-z]{1,6}") {
            let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
            let lock = lock(&rows);
            prop_assert_eq!(alignments(&lock, &word), alignments(&lock, &word.to_uppercase()));
        }
    }
}
