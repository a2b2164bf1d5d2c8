// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! A growable bit vector with an explicit logical length.

pub type Word = u64;

const WORD_BITS: usize = Word::BITS as usize;

/// A bit vector backed by `u64` words.
///
/// Invariant: every bit at a position at or beyond `len` is zero, so weight
/// and parity queries can run over whole words without masking.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct BitVec {
    words: Vec<Word>,
    len: usize,
}

fn words_for(len: usize) -> usize {
    len.div_ceil(WORD_BITS)
}

impl BitVec {
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self {
            words: vec![0; words_for(len)],
            len,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// # Panics
    ///
    /// Will panic if `index` is out of range.
    #[must_use]
    pub fn index(&self, index: usize) -> bool {
        assert!(index < self.len);
        self.words[index / WORD_BITS] & (1 << (index % WORD_BITS)) != 0
    }

    /// # Panics
    ///
    /// Will panic if `index` is out of range.
    pub fn assign_index(&mut self, index: usize, to: bool) {
        assert!(index < self.len);
        let mask = 1 << (index % WORD_BITS);
        if to {
            self.words[index / WORD_BITS] |= mask;
        } else {
            self.words[index / WORD_BITS] &= !mask;
        }
    }

    /// # Panics
    ///
    /// Will panic if `index` is out of range.
    pub fn negate_index(&mut self, index: usize) {
        assert!(index < self.len);
        self.words[index / WORD_BITS] ^= 1 << (index % WORD_BITS);
    }

    /// # Panics
    ///
    /// Will panic if the lengths differ.
    pub fn bitxor_assign(&mut self, other: &Self) {
        assert_eq!(self.len, other.len);
        for (word, other_word) in self.words.iter_mut().zip(&other.words) {
            *word ^= other_word;
        }
    }

    #[must_use]
    pub fn weight(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Weight of the bitwise AND with `other`, without materializing it.
    ///
    /// # Panics
    ///
    /// Will panic if the lengths differ.
    #[must_use]
    pub fn and_weight(&self, other: &Self) -> usize {
        assert_eq!(self.len, other.len);
        self.words
            .iter()
            .zip(&other.words)
            .map(|(word, other_word)| (word & other_word).count_ones() as usize)
            .sum()
    }

    /// True if any bit is set in `self` but not in `other`.
    ///
    /// # Panics
    ///
    /// Will panic if the lengths differ.
    #[must_use]
    pub fn intersects_complement(&self, other: &Self) -> bool {
        assert_eq!(self.len, other.len);
        self.words
            .iter()
            .zip(&other.words)
            .any(|(word, other_word)| word & !other_word != 0)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|word| *word == 0)
    }

    #[must_use]
    pub fn parity(&self) -> bool {
        self.words.iter().fold(0, |acc, word| acc ^ word).count_ones() & 1 == 1
    }

    /// Ascending iterator over the set bit positions.
    pub fn support(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(word_index, &word)| {
            let base = word_index * WORD_BITS;
            std::iter::successors((word != 0).then_some(word), |remaining| {
                let rest = remaining & (remaining - 1);
                (rest != 0).then_some(rest)
            })
            .map(move |remaining| base + remaining.trailing_zeros() as usize)
        })
    }

    /// Grow with zeros or truncate, clearing any dropped bits.
    pub fn resize(&mut self, new_len: usize) {
        self.words.resize(words_for(new_len), 0);
        self.len = new_len;
        self.clear_tail();
    }

    /// # Panics
    ///
    /// Will panic if either index is out of range.
    pub fn swap(&mut self, a: usize, b: usize) {
        let bit_a = self.index(a);
        let bit_b = self.index(b);
        self.assign_index(a, bit_b);
        self.assign_index(b, bit_a);
    }

    /// Delete bit `index`, shifting every higher bit down by one.
    ///
    /// # Panics
    ///
    /// Will panic if `index` is out of range.
    pub fn remove(&mut self, index: usize) {
        assert!(index < self.len);
        let word_index = index / WORD_BITS;
        let bit = index % WORD_BITS;
        let low_mask = (1 << bit) - 1;
        let word = self.words[word_index];
        self.words[word_index] = (word & low_mask) | ((word >> 1) & !low_mask);
        for next in word_index + 1..self.words.len() {
            let carry = self.words[next] & 1;
            self.words[next - 1] |= carry << (WORD_BITS - 1);
            self.words[next] >>= 1;
        }
        self.len -= 1;
        self.words.truncate(words_for(self.len));
    }

    fn clear_tail(&mut self) {
        let tail = self.len % WORD_BITS;
        if tail != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1 << tail) - 1;
            }
        }
    }
}
