//! `serde` support: a queue is a sequence, front to back

use super::queue::RingQueue;
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

impl<T: Serialize> Serialize for RingQueue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

struct QueueVisitor<T> {
    marker: PhantomData<fn() -> RingQueue<T>>,
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for QueueVisitor<T> {
    type Value = RingQueue<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut queue = RingQueue::new();
        while let Some(value) = seq.next_element()? {
            queue.enqueue(value);
        }
        Ok(queue)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for RingQueue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(QueueVisitor {
            marker: PhantomData,
        })
    }
}
