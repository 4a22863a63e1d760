//! Shuffled, exhaustive-before-repeat question pool.

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};

/// Deals items from a fixed set in shuffled cycles. Every item is dealt once
/// per cycle, and an item is never dealt twice in a row unless the pool holds
/// nothing else.
#[derive(Debug, Clone)]
pub struct SamplePool<T, R = ThreadRng> {
    items: Vec<T>,
    index: usize,
    last: Option<T>,
    rng: R,
}

impl<T: Clone + PartialEq> SamplePool<T, ThreadRng> {
    pub fn new(items: &[T]) -> Result<Self> {
        Self::with_rng(items, rand::thread_rng())
    }
}

impl<T: Clone + PartialEq, R: Rng> SamplePool<T, R> {
    pub fn with_rng(items: &[T], rng: R) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptyPool);
        }

        let mut pool = Self {
            items: items.to_vec(),
            index: 0,
            last: None,
            rng,
        };
        pool.shuffle();
        Ok(pool)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The most recently dealt item.
    pub fn last(&self) -> Option<&T> {
        self.last.as_ref()
    }

    fn shuffle(&mut self) {
        self.items.shuffle(&mut self.rng);
        self.index = 0;
    }

    pub fn next_item(&mut self) -> T {
        if self.index >= self.items.len() {
            self.shuffle();
        }

        let mut item = self.items[self.index].clone();
        self.index += 1;

        if self.items.len() > 1 && self.last.as_ref() == Some(&item) {
            self.shuffle();
            self.move_fresh_item_to_front();
            item = self.items[0].clone();
            self.index = 1;
        }

        self.last = Some(item.clone());
        item
    }

    // After a reshuffle the first slot may still hold the previous item. Swap
    // in the first different one; if there is none the repeat stands.
    fn move_fresh_item_to_front(&mut self) {
        let Some(last) = self.last.as_ref() else {
            return;
        };
        if &self.items[0] != last {
            return;
        }
        if let Some(pos) = self.items.iter().position(|item| item != last) {
            self.items.swap(0, pos);
        }
    }
}

impl<T: Clone + PartialEq, R: Rng> Iterator for SamplePool<T, R> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(self.next_item())
    }
}
