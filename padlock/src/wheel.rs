use std::{fmt::Display, str::FromStr};

use crate::config::ALPHABET_LENGTH;

/// Position of an ASCII letter in the alphabet, ignoring case.
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_lowercase() as u8 - b'a') as usize)
    } else {
        None
    }
}

/// The letters printed on one wheel, one bit per letter of the alphabet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Wheel(u32);

impl Wheel {
    pub fn new() -> Self {
        Wheel(0)
    }

    /// Adds a letter to the wheel. Adding a letter twice is a no-op, and
    /// anything outside `a-z`/`A-Z` is ignored.
    pub fn add(&mut self, letter: char) {
        if let Some(idx) = letter_index(letter) {
            self.0 |= 1 << idx;
        }
    }

    pub fn has(&self, letter: char) -> bool {
        match letter_index(letter) {
            Some(idx) => (self.0 & 1 << idx) > 0,
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn letters(&self) -> impl Iterator<Item = char> {
        let value = self.0;
        (0..ALPHABET_LENGTH)
            .filter(move |idx| value & (1 << idx) > 0)
            .map(|idx| (b'a' + idx as u8) as char)
    }
}

impl FromStr for Wheel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut wheel = Wheel::new();
        for c in s.chars() {
            if letter_index(c).is_none() {
                return Err(format!("Unsupported letter {:?}", c));
            }
            wheel.add(c);
        }

        if wheel.is_empty() {
            return Err("A wheel needs at least one letter".to_owned());
        }

        Ok(wheel)
    }
}

impl Display for Wheel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.letters().collect::<String>())
    }
}

/// The wheels of a padlock, in order from left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lock {
    wheels: Vec<Wheel>,
    letters_per_wheel: usize,
}

impl Lock {
    pub fn new(wheels: Vec<Wheel>, letters_per_wheel: usize) -> Self {
        Lock {
            wheels,
            letters_per_wheel,
        }
    }

    pub fn wheel_count(&self) -> usize {
        self.wheels.len()
    }

    /// The number of letters each wheel was declared with. Wheels holding
    /// repeated letters may carry fewer distinct ones.
    pub fn letters_per_wheel(&self) -> usize {
        self.letters_per_wheel
    }

    pub fn wheels(&self) -> &[Wheel] {
        &self.wheels
    }
}
