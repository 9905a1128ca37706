//! Core ring mechanics - index arithmetic and growth
//!
//! 核心环形机制 - 索引运算与扩容
//!
//! This module keeps everything that touches raw slot positions:
//! - head / tail / count bookkeeping with modular wraparound
//! - mapping logical positions (0 = oldest) to physical slots
//! - the doubling growth step that re-linearizes live elements
//!
//! 此模块包含所有直接接触槽位位置的逻辑：
//! - 带模运算环绕的 head / tail / count 记录
//! - 逻辑位置（0 = 最旧）到物理槽位的映射
//! - 将存活元素重新线性化的倍增扩容

use super::vec::FixedVec;

/// Core ring storage structure
///
/// 核心环形存储结构
///
/// One slot is always left unused: growth fires once `count` reaches
/// `capacity - 1`, before the write that would fill the store.
///
/// 始终保留一个空槽位：当 `count` 达到 `capacity - 1` 时，在写入使存储
/// 填满之前触发扩容。
#[derive(Debug, Clone)]
pub struct RingCore<T> {
    /// Slot storage, length == capacity
    ///
    /// 槽位存储，长度 == capacity
    buffer: FixedVec<T>,

    /// Capacity restored by `reset`
    ///
    /// `reset` 时恢复的容量
    initial_capacity: usize,

    /// Current capacity
    ///
    /// 当前容量
    capacity: usize,

    /// Physical index of the oldest element
    ///
    /// 最旧元素的物理索引
    head: usize,

    /// Physical index of the next slot to write
    ///
    /// 下一个待写入槽位的物理索引
    tail: usize,

    /// Number of live elements
    ///
    /// 存活元素数量
    count: usize,
}

impl<T> RingCore<T> {
    /// Create an empty core with `initial_capacity` slots
    ///
    /// 创建拥有 `initial_capacity` 个槽位的空核心
    ///
    /// # Parameters
    /// - `initial_capacity`: Starting slot count, must be at least 1
    ///
    /// # 参数
    /// - `initial_capacity`: 初始槽位数量，至少为 1
    pub fn new(initial_capacity: usize) -> Self {
        debug_assert!(initial_capacity > 0);

        Self {
            buffer: FixedVec::with_capacity(initial_capacity),
            initial_capacity,
            capacity: initial_capacity,
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Drop every element and return to a fresh store of the initial capacity
    ///
    /// 释放所有元素并恢复为初始容量的新存储
    pub fn reset(&mut self) {
        self.buffer = FixedVec::with_capacity(self.initial_capacity);
        self.capacity = self.initial_capacity;
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    #[allow(unused)]
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    #[allow(unused)]
    pub fn head(&self) -> usize {
        self.head
    }

    #[inline]
    #[allow(unused)]
    pub fn tail(&self) -> usize {
        self.tail
    }

    /// Check whether the next push has to grow the store first
    ///
    /// 检查下一次推送前是否需要先扩容
    #[inline]
    pub fn needs_growth(&self) -> bool {
        self.count + 1 >= self.capacity
    }

    /// Map a logical position to its physical slot
    ///
    /// 将逻辑位置映射到物理槽位
    #[inline]
    fn physical(&self, logical: usize) -> usize {
        (self.head + logical) % self.capacity
    }

    /// Physical slot of the newest element
    ///
    /// 最新元素的物理槽位
    #[inline]
    fn back_index(&self) -> usize {
        (self.tail + self.capacity - 1) % self.capacity
    }

    /// Append a value at the tail, growing first when needed
    ///
    /// 在尾部追加一个值，必要时先扩容
    pub fn push_back(&mut self, value: T) {
        if self.needs_growth() {
            self.grow();
        }

        self.buffer.put(self.tail, value);
        self.tail = (self.tail + 1) % self.capacity;
        self.count += 1;
    }

    /// Remove the value at the head
    ///
    /// 移除头部的值
    ///
    /// Returns `None` without touching any index when the ring is empty.
    ///
    /// 环形为空时返回 `None`，且不修改任何索引。
    pub fn pop_front(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }

        let value = self.buffer.take(self.head)?;
        self.head = (self.head + 1) % self.capacity;
        self.count -= 1;

        Some(value)
    }

    /// Borrow the element at logical position `index`
    ///
    /// 借用逻辑位置 `index` 处的元素
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.count {
            return None;
        }
        self.buffer.get(self.physical(index))
    }

    /// Mutably borrow the element at logical position `index`
    ///
    /// 可变借用逻辑位置 `index` 处的元素
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.count {
            return None;
        }
        let slot = self.physical(index);
        self.buffer.get_mut(slot)
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.count == 0 {
            return None;
        }
        self.buffer.get(self.back_index())
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.count == 0 {
            return None;
        }
        let slot = self.back_index();
        self.buffer.get_mut(slot)
    }

    /// Split the live range into its two physical runs
    ///
    /// 将存活范围拆分为两段物理连续区间
    ///
    /// The first slice starts at the head; the second is non-empty only when
    /// the live range wraps past the end of the store.
    ///
    /// 第一段从 head 开始；仅当存活范围越过存储末尾时第二段才非空。
    pub fn live_slots(&self) -> (&[Option<T>], &[Option<T>]) {
        let slots = self.buffer.as_slice();
        if self.count == 0 {
            return (&[], &[]);
        }

        if self.head + self.count <= self.capacity {
            (&slots[self.head..self.head + self.count], &[])
        } else {
            let (wrapped, first) = slots.split_at(self.head);
            (first, &wrapped[..self.tail])
        }
    }

    /// Mutable counterpart of [`live_slots`](Self::live_slots)
    ///
    /// [`live_slots`](Self::live_slots) 的可变版本
    pub fn live_slots_mut(&mut self) -> (&mut [Option<T>], &mut [Option<T>]) {
        let (head, count, tail, capacity) = (self.head, self.count, self.tail, self.capacity);
        let slots = self.buffer.as_mut_slice();
        if count == 0 {
            return (&mut [], &mut []);
        }

        if head + count <= capacity {
            (&mut slots[head..head + count], &mut [])
        } else {
            let (wrapped, first) = slots.split_at_mut(head);
            (first, &mut wrapped[..tail])
        }
    }

    /// Double the store and move live elements to the front
    ///
    /// 将存储容量翻倍，并把存活元素移到开头
    ///
    /// Element `i` (logical) lands in slot `i`, so afterwards `head == 0` and
    /// `tail == count`. Count and order are unchanged.
    ///
    /// 逻辑元素 `i` 落在槽位 `i`，因此之后 `head == 0` 且 `tail == count`。
    /// 元素数量与顺序不变。
    pub fn grow(&mut self) {
        let new_capacity = self.capacity * 2;
        let mut old = std::mem::replace(&mut self.buffer, FixedVec::with_capacity(new_capacity));

        for i in 0..self.count {
            let src = (self.head + i) % self.capacity;
            if let Some(value) = old.take(src) {
                self.buffer.put(i, value);
            }
        }

        log::trace!(
            "ring queue grew from {} to {} slots ({} live)",
            self.capacity,
            new_capacity,
            self.count
        );

        self.head = 0;
        self.tail = self.count;
        self.capacity = new_capacity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_basic() {
        let core: RingCore<i32> = RingCore::new(4);
        assert_eq!(core.capacity(), 4);
        assert_eq!(core.initial_capacity(), 4);
        assert!(core.is_empty());
        assert_eq!(core.head(), 0);
        assert_eq!(core.tail(), 0);
    }

    #[test]
    fn test_core_push_pop() {
        let mut core: RingCore<i32> = RingCore::new(4);

        core.push_back(1);
        core.push_back(2);
        assert_eq!(core.len(), 2);
        assert_eq!(core.front(), Some(&1));
        assert_eq!(core.back(), Some(&2));

        assert_eq!(core.pop_front(), Some(1));
        assert_eq!(core.pop_front(), Some(2));
        assert_eq!(core.pop_front(), None);
        assert_eq!(core.head(), core.tail());
    }

    #[test]
    fn test_core_wraparound_indices() {
        let mut core: RingCore<i32> = RingCore::new(4);

        // Advance head to slot 2 without growing
        core.push_back(0);
        core.push_back(1);
        core.pop_front();
        core.pop_front();
        assert_eq!(core.head(), 2);

        core.push_back(10);
        core.push_back(11);
        core.push_back(12);
        assert_eq!(core.capacity(), 4);
        assert_eq!(core.tail(), 1);
        assert_eq!(core.back(), Some(&12));

        let (first, second) = core.live_slots();
        assert_eq!(first, &[Some(10), Some(11)]);
        assert_eq!(second, &[Some(12)]);
    }

    #[test]
    fn test_core_growth_threshold() {
        let mut core: RingCore<i32> = RingCore::new(4);

        for i in 0..3 {
            core.push_back(i);
        }
        // count == capacity - 1 now, nothing grew yet
        assert_eq!(core.capacity(), 4);
        assert!(core.needs_growth());

        core.push_back(3);
        assert_eq!(core.capacity(), 8);
        assert_eq!(core.head(), 0);
        assert_eq!(core.tail(), 4);
    }

    #[test]
    fn test_core_grow_relinearizes_wrapped_range() {
        let mut core: RingCore<i32> = RingCore::new(4);

        core.push_back(0);
        core.push_back(1);
        core.push_back(2);
        core.pop_front();
        core.pop_front();
        core.push_back(3);
        core.push_back(4);
        // Live range is slots 2, 3, 0 holding 2, 3, 4
        assert_eq!(core.head(), 2);

        core.grow();
        assert_eq!(core.capacity(), 8);
        assert_eq!(core.head(), 0);
        assert_eq!(core.tail(), 3);

        let (first, second) = core.live_slots();
        assert_eq!(first, &[Some(2), Some(3), Some(4)]);
        assert!(second.is_empty());
    }

    #[test]
    fn test_core_get_out_of_range() {
        let mut core: RingCore<i32> = RingCore::new(4);
        core.push_back(5);

        assert_eq!(core.get(0), Some(&5));
        assert_eq!(core.get(1), None);
        assert_eq!(core.get_mut(1), None);
    }

    #[test]
    fn test_core_reset() {
        let mut core: RingCore<i32> = RingCore::new(2);
        for i in 0..10 {
            core.push_back(i);
        }
        assert!(core.capacity() > 2);

        core.reset();
        assert_eq!(core.capacity(), 2);
        assert!(core.is_empty());
        assert_eq!(core.front(), None);
        assert_eq!(core.back(), None);
    }

    #[test]
    fn test_core_capacity_one() {
        let mut core: RingCore<i32> = RingCore::new(1);

        core.push_back(7);
        assert_eq!(core.capacity(), 2);
        assert_eq!(core.pop_front(), Some(7));
    }
}
