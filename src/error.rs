//! Queue errors
//!
//! 队列错误

use std::fmt;

/// The access that found the queue empty
///
/// 发现队列为空的访问操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    Front,
    Back,
    Dequeue,
    Peek,
}

impl Access {
    fn action(self) -> &'static str {
        match self {
            Access::Front => "read the front of",
            Access::Back => "read the back of",
            Access::Dequeue => "dequeue from",
            Access::Peek => "peek at",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Access::Front => "front",
            Access::Back => "back",
            Access::Dequeue => "dequeue",
            Access::Peek => "peek",
        };
        f.write_str(name)
    }
}

/// Queue operation error
///
/// 队列操作错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    /// Queue is empty
    ///
    /// 队列为空
    #[error("RingQueue::{access}: attempting to {} an empty queue", .access.action())]
    Empty { access: Access },
}

/// Text parse error
///
/// 文本解析错误
///
/// Offsets are byte offsets into the input handed to the parser.
///
/// 偏移量是相对于传入解析器的输入的字节偏移。
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Input did not start with `{`
    #[error("RingQueue::parse: missing {{ (found {})", describe(.found))]
    MissingOpenBrace { found: Option<char> },

    /// Something other than `,` or `}` followed an element
    #[error("RingQueue::parse: unexpected character {found:?} at offset {offset}")]
    UnexpectedChar { found: char, offset: usize },

    /// Input ran out before the closing `}`
    #[error("RingQueue::parse: unexpected end of input, missing }}")]
    UnexpectedEnd,

    /// An element literal failed to decode
    #[error("RingQueue::parse: bad element at offset {offset}: {source}")]
    Element {
        offset: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Non-whitespace text followed the closing `}`
    #[error("RingQueue::parse: trailing characters at offset {offset}")]
    TrailingCharacters { offset: usize },
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("{c:?}"),
        None => "end of input".to_string(),
    }
}
