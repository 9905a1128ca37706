//! Fixed-length slot storage backing the ring
//!
//! 支撑环形队列的固定长度槽位存储
//!
//! This type provides a fixed number of slots, each either vacant or holding one
//! element. Its length never changes after construction; the ring grows by
//! allocating a larger `FixedVec` and moving live elements across.
//!
//! 此类型提供固定数量的槽位，每个槽位为空或持有一个元素。构造后长度不再变化；
//! 环形队列通过分配更大的 `FixedVec` 并迁移存活元素来扩容。

use std::ops::{Index, IndexMut};

/// Fixed-length vector of optional slots
///
/// 由可选槽位组成的固定长度向量
///
/// Vacant slots are `None`. Slots outside the ring's live range are always
/// vacant, so dropping the store drops exactly the live elements.
///
/// 空槽位为 `None`。环形队列存活范围以外的槽位总是空的，因此释放存储时
/// 恰好释放所有存活元素。
#[derive(Debug, Clone)]
pub struct FixedVec<T> {
    /// Slot storage
    ///
    /// 槽位存储
    slots: Box<[Option<T>]>,
}

impl<T> FixedVec<T> {
    /// Create a new FixedVec with `capacity` vacant slots
    ///
    /// 创建拥有 `capacity` 个空槽位的新 FixedVec
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        let slots = std::iter::repeat_with(|| None).take(capacity).collect();
        Self { slots }
    }

    /// Get the number of slots
    ///
    /// 获取槽位数量
    #[inline]
    #[allow(unused)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// View every slot in physical order
    ///
    /// 按物理顺序查看所有槽位
    #[inline]
    pub fn as_slice(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Mutably view every slot in physical order
    ///
    /// 按物理顺序可变地查看所有槽位
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Option<T>] {
        &mut self.slots
    }

    /// Store `value` at `index`, returning whatever the slot held before
    ///
    /// 将 `value` 存入 `index` 处，返回该槽位原有的值
    #[inline]
    pub fn put(&mut self, index: usize, value: T) -> Option<T> {
        self[index].replace(value)
    }

    /// Vacate the slot at `index`
    ///
    /// 清空 `index` 处的槽位
    #[inline]
    pub fn take(&mut self, index: usize) -> Option<T> {
        self[index].take()
    }

    /// Borrow the element at `index`, if the slot is occupied
    ///
    /// 如果槽位被占用，借用 `index` 处的元素
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Mutably borrow the element at `index`, if the slot is occupied
    ///
    /// 如果槽位被占用，可变借用 `index` 处的元素
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }
}

impl<T> Index<usize> for FixedVec<T> {
    type Output = Option<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        assert!(index < self.slots.len(), "index out of bounds");
        &self.slots[index]
    }
}

impl<T> IndexMut<usize> for FixedVec<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        assert!(index < self.slots.len(), "index out of bounds");
        &mut self.slots[index]
    }
}
