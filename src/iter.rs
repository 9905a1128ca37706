//! Iterators over a [`RingQueue`]
//!
//! [`RingQueue`] 的迭代器
//!
//! `Iter` and `IterMut` walk the live range in place, as the two physical runs
//! reported by the ring core. `Drain` and `IntoIter` consume through dequeue.
//!
//! `Iter` 与 `IterMut` 原地遍历存活范围，即环形核心给出的两段物理区间。
//! `Drain` 与 `IntoIter` 通过出队进行消费。

use super::queue::RingQueue;
use std::iter::{Chain, FusedIterator};
use std::slice;

/// Borrowing iterator, front to back
///
/// 借用迭代器，从队首到队尾
///
/// Every slot in the live range is occupied, so each slot yields exactly one
/// element and the length reported by the slices is exact.
///
/// 存活范围内的每个槽位都被占用，因此每个槽位恰好产出一个元素，切片给出的长度是精确的。
pub struct Iter<'a, T> {
    slots: Chain<slice::Iter<'a, Option<T>>, slice::Iter<'a, Option<T>>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(first: &'a [Option<T>], second: &'a [Option<T>]) -> Self {
        Self {
            slots: first.iter().chain(second.iter()),
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().and_then(Option::as_ref)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().and_then(Option::as_ref)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Mutably borrowing iterator, front to back
///
/// 可变借用迭代器，从队首到队尾
pub struct IterMut<'a, T> {
    slots: Chain<slice::IterMut<'a, Option<T>>, slice::IterMut<'a, Option<T>>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(first: &'a mut [Option<T>], second: &'a mut [Option<T>]) -> Self {
        Self {
            slots: first.iter_mut().chain(second.iter_mut()),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().and_then(Option::as_mut)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().and_then(Option::as_mut)
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

/// Draining iterator
///
/// 消费迭代器
///
/// Removes elements front to back. Whatever is left when the iterator is
/// dropped is removed too, so the queue is always empty afterwards.
///
/// 从队首到队尾移除元素。迭代器被 drop 时剩余的元素也会被移除，
/// 因此之后队列总是为空。
pub struct Drain<'a, T> {
    queue: &'a mut RingQueue<T>,
}

impl<'a, T> Drain<'a, T> {
    pub(crate) fn new(queue: &'a mut RingQueue<T>) -> Self {
        Self { queue }
    }
}

impl<'a, T> Iterator for Drain<'a, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<'a, T> ExactSizeIterator for Drain<'a, T> {}

impl<'a, T> FusedIterator for Drain<'a, T> {}

impl<'a, T> Drop for Drain<'a, T> {
    fn drop(&mut self) {
        while self.queue.dequeue().is_ok() {
            // Elements are dropped automatically
        }
    }
}

/// Owning iterator, front to back
///
/// 拥有所有权的迭代器，从队首到队尾
pub struct IntoIter<T> {
    queue: RingQueue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for RingQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

impl<'a, T> IntoIterator for &'a RingQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingQueue<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
