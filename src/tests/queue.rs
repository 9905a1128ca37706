//! Comprehensive tests for the ring queue
//!
//! 环形队列的全面测试

use crate::error::{Access, QueueError};
use crate::queue::{RingQueue, DEFAULT_CAPACITY};
use std::collections::VecDeque;
use std::num::NonZero;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// ============================================================================
// SEGMENT 1: FIFO Ordering and Size Accounting
// 第1段：先进先出顺序与数量统计
// ============================================================================

#[test]
fn test_concrete_scenario() {
    let mut queue = RingQueue::new();
    queue.enqueue(1);
    queue.enqueue(2);
    queue.enqueue(3);

    assert_eq!(queue.size(), 3);
    assert_eq!(queue.front(), Ok(&1));
    assert_eq!(queue.back(), Ok(&3));

    assert_eq!(queue.dequeue(), Ok(1));
    assert_eq!(queue.size(), 2);
    assert_eq!(queue.front(), Ok(&2));
    assert_eq!(queue.to_string(), "{2, 3}");
}

#[test]
fn test_enqueue_dequeue_alternating_pattern() {
    // Alternating enqueue/dequeue walks head and tail around the ring
    // 交替入队/出队使 head 与 tail 绕环移动
    let mut queue = RingQueue::new();

    for i in 0..100 {
        queue.enqueue(i);
        assert_eq!(queue.dequeue().unwrap(), i);
        assert!(queue.is_empty());
    }

    // No growth was ever needed
    assert_eq!(queue.capacity(), DEFAULT_CAPACITY);
}

#[test]
fn test_size_tracks_successful_operations() {
    let mut queue = RingQueue::new();
    let mut expected = 0usize;

    for round in 0..20 {
        for i in 0..round {
            queue.enqueue(i);
            expected += 1;
        }
        for _ in 0..round / 2 {
            queue.dequeue().unwrap();
            expected -= 1;
        }
        assert_eq!(queue.size(), expected);
        assert_eq!(queue.len(), expected);
    }

    // Failed dequeues do not change the count
    queue.clear();
    assert!(queue.dequeue().is_err());
    assert_eq!(queue.size(), 0);
}

#[test]
fn test_refill_after_empty_many_times() {
    let mut queue = RingQueue::new();

    for round in 0..10 {
        for i in 0..16 {
            queue.enqueue(round * 100 + i);
        }
        for i in 0..16 {
            assert_eq!(queue.dequeue().unwrap(), round * 100 + i);
        }
        assert!(queue.is_empty());
    }
}

// ============================================================================
// SEGMENT 2: Growth
// 第2段：扩容
// ============================================================================

#[test]
fn test_single_growth_for_ten_values() {
    let mut queue = RingQueue::new();

    for i in 0..9 {
        queue.enqueue(i);
    }
    // count == capacity - 1: the next enqueue grows first
    assert_eq!(queue.capacity(), DEFAULT_CAPACITY);

    queue.enqueue(9);
    assert_eq!(queue.capacity(), DEFAULT_CAPACITY * 2);

    for i in 0..10 {
        assert_eq!(queue.dequeue().unwrap(), i);
    }
}

#[test]
fn test_growth_doubles_repeatedly() {
    let mut queue = RingQueue::new();
    let mut capacities = vec![queue.capacity()];

    for i in 0..200 {
        queue.enqueue(i);
        if queue.capacity() != *capacities.last().unwrap() {
            capacities.push(queue.capacity());
        }
    }

    assert_eq!(capacities, vec![10, 20, 40, 80, 160, 320]);
    assert_eq!(queue.to_vec(), (0..200).collect::<Vec<_>>());
}

#[test]
fn test_growth_with_wrapped_range_preserves_order() {
    let mut queue = RingQueue::new();

    // Move head to slot 7
    for i in 0..7 {
        queue.enqueue(i);
    }
    for _ in 0..7 {
        queue.dequeue().unwrap();
    }

    // Fill until growth; the live range wraps before it fires
    for i in 0..30 {
        queue.enqueue(i);
    }

    assert!(queue.capacity() > DEFAULT_CAPACITY);
    for i in 0..30 {
        assert_eq!(queue.dequeue().unwrap(), i);
    }
}

#[test]
fn test_len_always_below_capacity() {
    let mut queue = RingQueue::new();
    for i in 0..500 {
        queue.enqueue(i);
        assert!(queue.len() < queue.capacity());
        if i % 3 == 0 {
            queue.dequeue().unwrap();
        }
    }
}

#[test]
fn test_custom_initial_capacity() {
    let mut queue = RingQueue::with_initial_capacity(NonZero::new(3).unwrap());
    assert_eq!(queue.capacity(), 3);

    queue.enqueue('a');
    queue.enqueue('b');
    assert_eq!(queue.capacity(), 3);
    queue.enqueue('c');
    assert_eq!(queue.capacity(), 6);

    queue.clear();
    assert_eq!(queue.capacity(), 3);
    assert!(queue.is_empty());
}

#[test]
fn test_initial_capacity_one() {
    let mut queue = RingQueue::with_initial_capacity(NonZero::new(1).unwrap());
    for i in 0..5 {
        queue.enqueue(i);
    }
    assert_eq!(queue.to_vec(), vec![0, 1, 2, 3, 4]);
}

// ============================================================================
// SEGMENT 3: Access and Empty-Queue Errors
// 第3段：访问与空队列错误
// ============================================================================

#[test]
fn test_fresh_queue_errors() {
    let mut queue: RingQueue<i32> = RingQueue::new();

    assert_eq!(queue.front(), Err(QueueError::Empty { access: Access::Front }));
    assert_eq!(queue.back(), Err(QueueError::Empty { access: Access::Back }));
    assert_eq!(queue.peek(), Err(QueueError::Empty { access: Access::Peek }));
    assert_eq!(queue.dequeue(), Err(QueueError::Empty { access: Access::Dequeue }));
}

#[test]
fn test_cleared_queue_errors() {
    let mut queue: RingQueue<i32> = (0..50).collect();
    queue.clear();

    assert!(queue.front().is_err());
    assert!(queue.back().is_err());
    assert!(queue.peek().is_err());
    assert!(queue.dequeue().is_err());
    assert_eq!(queue.capacity(), DEFAULT_CAPACITY);
}

#[test]
fn test_error_message() {
    let mut queue: RingQueue<i32> = RingQueue::new();
    let err = queue.dequeue().unwrap_err();
    assert_eq!(
        err.to_string(),
        "RingQueue::dequeue: attempting to dequeue from an empty queue"
    );
}

#[test]
fn test_peek_does_not_remove() {
    let mut queue = RingQueue::new();
    queue.enqueue(String::from("first"));
    queue.enqueue(String::from("second"));

    assert_eq!(queue.peek().unwrap(), "first");
    assert_eq!(queue.peek().unwrap(), "first");
    assert_eq!(queue.len(), 2);

    queue.dequeue().unwrap();
    assert_eq!(queue.peek().unwrap(), "second");
}

#[test]
fn test_back_across_wrap() {
    let mut queue = RingQueue::new();
    for i in 0..9 {
        queue.enqueue(i);
    }
    for _ in 0..5 {
        queue.dequeue().unwrap();
    }
    // tail wraps to slot 0, back lives in slot 9
    queue.enqueue(100);
    assert_eq!(queue.back(), Ok(&100));
    queue.enqueue(101);
    assert_eq!(queue.back(), Ok(&101));
    assert_eq!(queue.capacity(), DEFAULT_CAPACITY);
}

#[test]
fn test_mutation_through_front_and_back() {
    let mut queue: RingQueue<Vec<u8>> = RingQueue::new();
    queue.enqueue(vec![1]);
    queue.enqueue(vec![2]);

    queue.front_mut().unwrap().push(10);
    queue.back_mut().unwrap().push(20);

    assert_eq!(queue.dequeue().unwrap(), vec![1, 10]);
    assert_eq!(queue.dequeue().unwrap(), vec![2, 20]);
}

// ============================================================================
// SEGMENT 4: Equality, Copies and Hashing
// 第4段：相等、复制与哈希
// ============================================================================

#[test]
fn test_equality_is_size_consistent() {
    let a: RingQueue<i32> = (0..5).collect();
    let b: RingQueue<i32> = (0..6).collect();
    assert!(!a.equals(&b));
    assert!(!b.equals(&a));
    assert_ne!(a, b);
}

#[test]
fn test_equality_is_symmetric() {
    let a: RingQueue<i32> = [1, 2, 3].into();
    let b: RingQueue<i32> = [1, 2, 3].into();
    let c: RingQueue<i32> = [1, 2, 4].into();

    assert!(a.equals(&b) && b.equals(&a));
    assert!(!a.equals(&c) && !c.equals(&a));
}

#[test]
fn test_equality_ignores_capacity_and_head() {
    let mut grown = RingQueue::new();
    for i in 0..40 {
        grown.enqueue(i);
    }
    for _ in 0..37 {
        grown.dequeue().unwrap();
    }

    let fresh: RingQueue<i32> = [37, 38, 39].into();
    assert_ne!(grown.capacity(), fresh.capacity());
    assert_eq!(grown, fresh);
}

#[test]
fn test_equals_leaves_operands_untouched() {
    let a: RingQueue<i32> = (0..12).collect();
    let b: RingQueue<i32> = (0..12).collect();

    assert!(a.equals(&b));
    assert_eq!(a.len(), 12);
    assert_eq!(b.len(), 12);
    assert_eq!(a.front(), Ok(&0));
    assert_eq!(b.back(), Ok(&11));
}

#[test]
fn test_clone_is_independent() {
    let mut original: RingQueue<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
    let mut copy = original.clone();

    copy.enqueue("c".to_string());
    copy.front_mut().unwrap().push('!');
    original.dequeue().unwrap();

    assert_eq!(original.to_vec(), vec!["b".to_string()]);
    assert_eq!(copy.to_vec(), vec!["a!".to_string(), "b".to_string(), "c".to_string()]);
}

#[test]
fn test_queue_as_hash_set_key() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    set.insert(RingQueue::from([1, 2, 3]));
    set.insert(RingQueue::from([3, 2, 1]));

    let mut shifted = RingQueue::new();
    shifted.enqueue(0);
    shifted.enqueue(1);
    shifted.enqueue(2);
    shifted.enqueue(3);
    shifted.dequeue().unwrap();

    assert!(set.contains(&shifted));
    assert_eq!(set.len(), 2);
}

// ============================================================================
// SEGMENT 5: Interop Conversions
// 第5段：互操作转换
// ============================================================================

#[test]
fn test_to_vec_deque_is_non_destructive() {
    let queue: RingQueue<i32> = (0..15).collect();
    let deque = queue.to_vec_deque();

    assert_eq!(deque, (0..15).collect::<VecDeque<_>>());
    assert_eq!(queue.len(), 15);
}

#[test]
fn test_into_vec_deque() {
    let queue: RingQueue<i32> = (0..4).collect();
    let deque: VecDeque<i32> = queue.into();
    assert_eq!(deque.front(), Some(&0));
    assert_eq!(deque.back(), Some(&3));
}

#[test]
fn test_from_vec_deque_and_vec() {
    let deque: VecDeque<i32> = (1..=3).collect();
    let from_deque = RingQueue::from(deque);
    let from_vec = RingQueue::from(vec![1, 2, 3]);
    assert_eq!(from_deque, from_vec);
}

#[test]
fn test_extend() {
    let mut queue = RingQueue::from([1, 2]);
    queue.extend(3..=20);
    assert_eq!(queue.len(), 20);
    assert_eq!(queue.back(), Ok(&20));
}

#[test]
fn test_debug_format() {
    let queue = RingQueue::from([1, 2, 3]);
    assert_eq!(format!("{queue:?}"), "[1, 2, 3]");
}

// ============================================================================
// SEGMENT 6: Element Lifetimes
// 第6段：元素生命周期
// ============================================================================

#[derive(Debug, Clone)]
struct DropCounter {
    counter: Arc<AtomicUsize>,
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.counter.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_drop_releases_live_elements() {
    let counter = Arc::new(AtomicUsize::new(0));

    {
        let mut queue = RingQueue::new();
        for _ in 0..25 {
            queue.enqueue(DropCounter { counter: counter.clone() });
        }
        for _ in 0..5 {
            drop(queue.dequeue().unwrap());
        }
        assert_eq!(counter.load(Ordering::SeqCst), 5);
    }

    assert_eq!(counter.load(Ordering::SeqCst), 25);
}

#[test]
fn test_clear_drops_elements() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut queue = RingQueue::new();

    for _ in 0..8 {
        queue.enqueue(DropCounter { counter: counter.clone() });
    }
    queue.clear();

    assert_eq!(counter.load(Ordering::SeqCst), 8);
    assert!(queue.is_empty());
}

#[test]
fn test_growth_neither_drops_nor_duplicates() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut queue = RingQueue::new();

    for _ in 0..100 {
        queue.enqueue(DropCounter { counter: counter.clone() });
    }
    // Several growth steps happened, nothing was dropped along the way
    assert_eq!(counter.load(Ordering::SeqCst), 0);

    drop(queue);
    assert_eq!(counter.load(Ordering::SeqCst), 100);
}

#[test]
fn test_drain_drops_unconsumed() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut queue = RingQueue::new();

    for _ in 0..6 {
        queue.enqueue(DropCounter { counter: counter.clone() });
    }
    {
        let mut drain = queue.drain();
        drop(drain.next());
    }

    assert_eq!(counter.load(Ordering::SeqCst), 6);
    assert!(queue.is_empty());
}
