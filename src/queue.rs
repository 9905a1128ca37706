//! Growable FIFO queue on top of the ring core
//!
//! 基于环形核心的可扩容先进先出队列
//!
//! This module provides [`RingQueue`], supporting:
//! - Amortized O(1) enqueue with automatic doubling growth
//! - O(1) dequeue, front / back access and peek
//! - Structural equality and hashing over the FIFO sequence
//! - Conversion to and from the standard library's sequence types
//!
//! 本模块提供 [`RingQueue`]，支持：
//! - 均摊 O(1) 入队，自动倍增扩容
//! - O(1) 出队、首尾访问与窥视
//! - 基于先进先出序列的结构相等与哈希
//! - 与标准库序列类型之间的相互转换

use super::core::RingCore;
use super::error::{Access, QueueError};
use super::iter::{Drain, Iter, IterMut};
use std::collections::VecDeque;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::NonZero;

/// Capacity of a new queue, and the capacity `clear` returns to
///
/// 新队列的容量，也是 `clear` 恢复到的容量
pub const DEFAULT_CAPACITY: usize = 10;

/// Growable first-in/first-out queue backed by a ring buffer
///
/// 由环形缓冲区支撑的可扩容先进先出队列
///
/// # Features
///
/// - **Never full**: the store doubles when only one free slot is left
/// - **Order preserving growth**: live elements are re-linearized, FIFO order is kept
/// - **Non-destructive inspection**: equality, formatting and export walk the
///   live range in place instead of draining the queue
///
/// # 特性
///
/// - **永不满**: 仅剩一个空槽位时存储容量翻倍
/// - **保序扩容**: 存活元素被重新线性化，先进先出顺序保持不变
/// - **无破坏检查**: 相等比较、格式化与导出原地遍历存活范围，而不是清空队列
///
/// # Examples
///
/// ```
/// use ringqueue::RingQueue;
///
/// let mut queue = RingQueue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// queue.enqueue(3);
///
/// assert_eq!(queue.size(), 3);
/// assert_eq!(queue.front(), Ok(&1));
/// assert_eq!(queue.back(), Ok(&3));
/// assert_eq!(queue.dequeue(), Ok(1));
/// assert_eq!(queue.to_string(), "{2, 3}");
/// ```
#[derive(Clone)]
pub struct RingQueue<T> {
    /// Core ring implementation
    ///
    /// 核心环形实现
    core: RingCore<T>,
}

impl<T> RingQueue<T> {
    /// Create an empty queue with [`DEFAULT_CAPACITY`] slots
    ///
    /// 创建拥有 [`DEFAULT_CAPACITY`] 个槽位的空队列
    pub fn new() -> Self {
        Self {
            core: RingCore::new(DEFAULT_CAPACITY),
        }
    }

    /// Create an empty queue starting from `capacity` slots
    ///
    /// 创建从 `capacity` 个槽位开始的空队列
    ///
    /// `clear` returns the queue to this capacity rather than to
    /// [`DEFAULT_CAPACITY`].
    ///
    /// `clear` 会将队列恢复到此容量，而不是 [`DEFAULT_CAPACITY`]。
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    /// use std::num::NonZero;
    ///
    /// let mut queue: RingQueue<u8> = RingQueue::with_initial_capacity(NonZero::new(4).unwrap());
    /// assert_eq!(queue.capacity(), 4);
    ///
    /// for i in 0..4 {
    ///     queue.enqueue(i);
    /// }
    /// assert_eq!(queue.capacity(), 8);
    ///
    /// queue.clear();
    /// assert_eq!(queue.capacity(), 4);
    /// ```
    pub fn with_initial_capacity(capacity: NonZero<usize>) -> Self {
        Self {
            core: RingCore::new(capacity.get()),
        }
    }

    /// Get the current number of slots in the backing store
    ///
    /// 获取底层存储当前的槽位数量
    #[inline]
    pub fn capacity(&self) -> usize {
        self.core.capacity()
    }

    /// Get the number of elements in the queue
    ///
    /// 获取队列中的元素数量
    #[inline]
    pub fn len(&self) -> usize {
        self.core.len()
    }

    /// Same as [`len`](Self::len)
    #[inline]
    pub fn size(&self) -> usize {
        self.core.len()
    }

    /// Check if the queue is empty
    ///
    /// 检查队列是否为空
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    /// Remove every element and shrink back to the initial capacity
    ///
    /// 移除所有元素并收缩回初始容量
    pub fn clear(&mut self) {
        self.core.reset();
    }

    /// Add `value` at the back of the queue
    ///
    /// 在队尾添加 `value`
    ///
    /// Grows the store first when the queue is one element short of full.
    /// Amortized O(1).
    ///
    /// 当队列距离填满只差一个元素时先扩容。均摊 O(1)。
    #[inline]
    pub fn enqueue(&mut self, value: T) {
        self.core.push_back(value);
    }

    /// Remove and return the element at the front of the queue
    ///
    /// 移除并返回队首元素
    ///
    /// # Errors
    ///
    /// Returns `Err(QueueError::Empty { .. })` if the queue is empty; nothing
    /// is modified in that case.
    ///
    /// # 错误
    ///
    /// 如果队列为空则返回 `Err(QueueError::Empty { .. })`，此时不做任何修改。
    #[inline]
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        self.core.pop_front().ok_or(QueueError::Empty {
            access: Access::Dequeue,
        })
    }

    /// Borrow the oldest element
    ///
    /// 借用最旧的元素
    #[inline]
    pub fn front(&self) -> Result<&T, QueueError> {
        self.core.front().ok_or(QueueError::Empty {
            access: Access::Front,
        })
    }

    /// Mutably borrow the oldest element
    ///
    /// 可变借用最旧的元素
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, QueueError> {
        self.core.front_mut().ok_or(QueueError::Empty {
            access: Access::Front,
        })
    }

    /// Borrow the newest element
    ///
    /// 借用最新的元素
    #[inline]
    pub fn back(&self) -> Result<&T, QueueError> {
        self.core.back().ok_or(QueueError::Empty {
            access: Access::Back,
        })
    }

    /// Mutably borrow the newest element
    ///
    /// 可变借用最新的元素
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, QueueError> {
        self.core.back_mut().ok_or(QueueError::Empty {
            access: Access::Back,
        })
    }

    /// Iterate over the elements front to back
    ///
    /// 从队首到队尾遍历元素
    ///
    /// Head, tail and count are left untouched.
    ///
    /// 不修改 head、tail 与 count。
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        let (first, second) = self.core.live_slots();
        Iter::new(first, second)
    }

    /// Iterate mutably over the elements front to back
    ///
    /// 从队首到队尾可变地遍历元素
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (first, second) = self.core.live_slots_mut();
        IterMut::new(first, second)
    }

    /// Create a draining iterator
    ///
    /// 创建一个消费迭代器
    ///
    /// Yields elements front to back via dequeue. Elements not consumed when
    /// the iterator is dropped are removed as well.
    ///
    /// 通过出队从队首到队尾产出元素。迭代器被 drop 时，未消费的元素也会被移除。
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue: RingQueue<i32> = (1..=3).collect();
    /// let items: Vec<i32> = queue.drain().collect();
    /// assert_eq!(items, vec![1, 2, 3]);
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self)
    }

    /// Structural comparison against `other`
    ///
    /// 与 `other` 进行结构比较
    ///
    /// True when both queues hold equal elements in the same FIFO order.
    /// Neither operand is modified; capacity and head position are ignored.
    ///
    /// 当两个队列以相同的先进先出顺序持有相等元素时为真。
    /// 两个操作数都不会被修改；容量与 head 位置不参与比较。
    pub fn equals(&self, other: &RingQueue<T>) -> bool
    where
        T: PartialEq,
    {
        if std::ptr::eq(self, other) {
            return true;
        }
        if self.len() != other.len() {
            return false;
        }

        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Clone> RingQueue<T> {
    /// Return a copy of the front element
    ///
    /// 返回队首元素的副本
    ///
    /// # Errors
    ///
    /// Returns `Err(QueueError::Empty { .. })` if the queue is empty.
    ///
    /// # 错误
    ///
    /// 如果队列为空则返回 `Err(QueueError::Empty { .. })`。
    #[inline]
    pub fn peek(&self) -> Result<T, QueueError> {
        self.core.front().cloned().ok_or(QueueError::Empty {
            access: Access::Peek,
        })
    }

    /// Copy the contents into a `VecDeque`, front to back
    ///
    /// 将内容按从队首到队尾的顺序复制到 `VecDeque`
    pub fn to_vec_deque(&self) -> VecDeque<T> {
        self.iter().cloned().collect()
    }

    /// Copy the contents into a `Vec`, front to back
    ///
    /// 将内容按从队首到队尾的顺序复制到 `Vec`
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for RingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for RingQueue<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Eq> Eq for RingQueue<T> {}

impl<T: Hash> Hash for RingQueue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T> Extend<T> for RingQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for RingQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = RingQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<T> From<Vec<T>> for RingQueue<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<VecDeque<T>> for RingQueue<T> {
    fn from(values: VecDeque<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for RingQueue<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<RingQueue<T>> for VecDeque<T> {
    fn from(queue: RingQueue<T>) -> Self {
        queue.into_iter().collect()
    }
}
