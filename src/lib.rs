//! # Growable Ring-Buffer Queue
//!
//! 可扩容环形缓冲区队列
//!
//! `ringqueue` is a first-in/first-out queue stored in a circular buffer.
//! Enqueue and dequeue are O(1) (enqueue amortized); when the buffer is one
//! slot short of full it doubles and re-linearizes its live elements, keeping
//! their order.
//!
//! `ringqueue` 是存储在环形缓冲区中的先进先出队列。入队与出队均为 O(1)
//! （入队为均摊）；当缓冲区只剩一个空槽位时容量翻倍，并在保持顺序的前提下
//! 重新线性化存活元素。
//!
//! ## Features
//!
//! 特性
//!
//! - **Never full** - Capacity grows by doubling, starting from 10 slots
//! - **Typed errors** - Reading an empty queue returns [`QueueError`] instead of panicking
//! - **Non-destructive inspection** - Equality, hashing and formatting never touch the queue's state
//! - **Text form** - `{1, 2, 3}` style rendering and parsing, elements as JSON literals
//! - **Interop** - Iterators, `VecDeque` / `Vec` conversions and `serde` support
//!
//! - **永不满** - 容量从 10 个槽位开始按倍数增长
//! - **类型化错误** - 读取空队列返回 [`QueueError`] 而不是 panic
//! - **无破坏检查** - 相等比较、哈希与格式化从不改变队列状态
//! - **文本形式** - `{1, 2, 3}` 风格的渲染与解析，元素为 JSON 字面量
//! - **互操作** - 迭代器、`VecDeque` / `Vec` 转换以及 `serde` 支持
//!
//! ## Quick Start
//!
//! 快速开始
//!
//! ```rust
//! use ringqueue::RingQueue;
//!
//! let mut queue = RingQueue::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//! queue.enqueue(3);
//!
//! assert_eq!(queue.size(), 3);
//! assert_eq!(queue.front(), Ok(&1));
//! assert_eq!(queue.back(), Ok(&3));
//!
//! assert_eq!(queue.dequeue(), Ok(1));
//! assert_eq!(queue.size(), 2);
//! assert_eq!(queue.front(), Ok(&2));
//! assert_eq!(queue.to_string(), "{2, 3}");
//! ```
//!
//! ## Growth
//!
//! 扩容
//!
//! ```rust
//! use ringqueue::{RingQueue, DEFAULT_CAPACITY};
//!
//! let mut queue = RingQueue::new();
//! assert_eq!(queue.capacity(), DEFAULT_CAPACITY);
//!
//! // Growth fires at count == capacity - 1, before the 10th value lands
//! // 在 count == capacity - 1 时触发扩容，即第 10 个值写入之前
//! for i in 0..10 {
//!     queue.enqueue(i);
//! }
//! assert_eq!(queue.capacity(), 2 * DEFAULT_CAPACITY);
//!
//! let values: Vec<i32> = queue.drain().collect();
//! assert_eq!(values, (0..10).collect::<Vec<_>>());
//! ```
//!
//! ## Errors
//!
//! 错误
//!
//! ```rust
//! use ringqueue::{Access, QueueError, RingQueue};
//!
//! let mut queue: RingQueue<String> = RingQueue::new();
//! assert_eq!(
//!     queue.dequeue(),
//!     Err(QueueError::Empty { access: Access::Dequeue })
//! );
//! ```
//!
//! ## Text Form
//!
//! 文本形式
//!
//! ```rust
//! use ringqueue::RingQueue;
//!
//! let queue: RingQueue<String> = r#"{"alpha", "beta"}"#.parse().unwrap();
//! assert_eq!(queue.front().unwrap(), "alpha");
//! assert_eq!(queue.to_string(), r#"{"alpha", "beta"}"#);
//!
//! let empty: RingQueue<i32> = "{}".parse().unwrap();
//! assert!(empty.is_empty());
//!
//! assert!("{1,2".parse::<RingQueue<i32>>().is_err());
//! ```
//!
//! ## Notes
//!
//! 注意事项
//!
//! - Single-threaded: mutation takes `&mut self`, there is no internal locking
//! - `clear` also shrinks the store back to its initial capacity
//! - One slot is always kept free, so `len() < capacity()` holds at all times
//!
//! - 单线程：修改需要 `&mut self`，内部没有锁
//! - `clear` 同时会把存储收缩回初始容量
//! - 始终保留一个空槽位，因此 `len() < capacity()` 恒成立

pub mod error;
pub mod iter;
pub mod queue;
mod core;
mod serde_impl;
mod text;
mod vec;

pub use error::{Access, ParseError, QueueError};
pub use queue::{RingQueue, DEFAULT_CAPACITY};
