//! Brace-delimited text form of a queue
//!
//! 队列的花括号文本形式
//!
//! ```text
//! queue    := '{' [ element (',' element)* ] '}'
//! element  := JSON value literal
//! ```
//!
//! Writing always separates elements with `", "`. Reading tolerates whitespace
//! between tokens. Elements go through `serde_json`, so strings come out quoted
//! and escaped while numbers and booleans keep their natural form.
//!
//! 写出时总是用 `", "` 分隔元素；读取时容忍记号之间的空白。元素经由
//! `serde_json` 编解码，因此字符串会被加引号并转义，数字与布尔值保持自然形式。

use super::error::ParseError;
use super::queue::RingQueue;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

impl<T: Serialize> fmt::Display for RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            let literal = serde_json::to_string(value).map_err(|_| fmt::Error)?;
            f.write_str(&literal)?;
        }
        f.write_str("}")
    }
}

impl<T: DeserializeOwned> RingQueue<T> {
    /// Read one queue from the start of `input`
    ///
    /// 从 `input` 开头读取一个队列
    ///
    /// Once the opening `{` is found the queue is cleared, then filled element
    /// by element. Returns the number of bytes consumed, so text after the
    /// closing `}` is left for the caller.
    ///
    /// 找到开头的 `{` 后先清空队列，再逐个填充元素。返回消耗的字节数，
    /// 闭合 `}` 之后的文本留给调用者处理。
    ///
    /// # Errors
    ///
    /// On failure the queue keeps whatever was read before the error; if the
    /// `{` itself is missing the queue is left untouched.
    ///
    /// # 错误
    ///
    /// 失败时队列保留出错前已读取的内容；若缺少 `{` 本身则队列保持不变。
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue: RingQueue<i32> = RingQueue::new();
    /// let used = queue.read_from("{1, 2, 3} tail").unwrap();
    /// assert_eq!(used, 9);
    /// assert_eq!(queue.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn read_from(&mut self, input: &str) -> Result<usize, ParseError> {
        self.fill_from(input).inspect_err(|err| {
            log::debug!("failed to read queue text: {err}");
        })
    }

    fn fill_from(&mut self, input: &str) -> Result<usize, ParseError> {
        let mut reader = Reader::new(input);

        match reader.next_token() {
            Some((_, '{')) => {}
            found => {
                return Err(ParseError::MissingOpenBrace {
                    found: found.map(|(_, c)| c),
                })
            }
        }

        self.clear();

        if reader.peek_token() == Some('}') {
            reader.next_token();
            return Ok(reader.offset());
        }

        loop {
            let value = reader.element()?;
            self.enqueue(value);

            match reader.next_token() {
                Some((_, '}')) => return Ok(reader.offset()),
                Some((_, ',')) => {}
                Some((offset, found)) => {
                    return Err(ParseError::UnexpectedChar { found, offset })
                }
                None => return Err(ParseError::UnexpectedEnd),
            }
        }
    }
}

impl<T: DeserializeOwned> FromStr for RingQueue<T> {
    type Err = ParseError;

    /// Parse a whole string; only whitespace may follow the closing `}`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut queue = RingQueue::new();
        let consumed = queue.read_from(s)?;

        let rest = &s[consumed..];
        if let Some(skip) = rest.find(|c: char| !c.is_whitespace()) {
            return Err(ParseError::TrailingCharacters {
                offset: consumed + skip,
            });
        }

        Ok(queue)
    }
}

/// Cursor over the input text
struct Reader<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    #[inline]
    fn offset(&self) -> usize {
        self.pos
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        let trimmed = rest.trim_start();
        self.pos += rest.len() - trimmed.len();
    }

    /// Next non-whitespace character, without consuming it
    fn peek_token(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.input[self.pos..].chars().next()
    }

    /// Next non-whitespace character and its offset
    fn next_token(&mut self) -> Option<(usize, char)> {
        self.skip_whitespace();
        let offset = self.pos;
        let c = self.input[offset..].chars().next()?;
        self.pos += c.len_utf8();
        Some((offset, c))
    }

    /// Decode one element literal
    ///
    /// Strings, arrays and objects delimit themselves. Bare scalars (numbers,
    /// `true`, `false`, `null`) run until the first character that cannot be
    /// part of one, so a stray separator is reported by the caller rather than
    /// swallowed into the literal.
    fn element<T: DeserializeOwned>(&mut self) -> Result<T, ParseError> {
        self.skip_whitespace();
        let offset = self.pos;
        let rest = &self.input[offset..];

        let first = rest.chars().next().ok_or(ParseError::UnexpectedEnd)?;
        if matches!(first, '"' | '[' | '{') {
            let mut stream = serde_json::Deserializer::from_str(rest).into_iter::<T>();
            match stream.next() {
                Some(Ok(value)) => {
                    self.pos += stream.byte_offset();
                    Ok(value)
                }
                Some(Err(source)) => Err(ParseError::Element { offset, source }),
                None => Err(ParseError::UnexpectedEnd),
            }
        } else {
            let len = rest
                .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')))
                .unwrap_or(rest.len());
            let value = serde_json::from_str(&rest[..len])
                .map_err(|source| ParseError::Element { offset, source })?;
            self.pos += len;
            Ok(value)
        }
    }
}
