//! Result value shared by every grammar rule.

/// Outcome of applying one rule to the remaining input.
///
/// `consumed` is always a prefix of the rule's input and `rest` is the suffix
/// that follows it, on success and on failure alike. A failed outcome keeps
/// the longest prefix the rule got through before giving up, which is what the
/// error message at the top level points at.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOutcome<'a, T> {
    pub consumed: &'a str,
    pub rest: &'a str,
    pub result: Option<T>,
}

impl<'a, T> ParseOutcome<'a, T> {
    /// Successful outcome consuming the first `len` bytes of `input`.
    pub fn matched(input: &'a str, len: usize, value: T) -> Self {
        let (consumed, rest) = input.split_at(len);
        Self {
            consumed,
            rest,
            result: Some(value),
        }
    }

    /// Failed outcome that got through the first `len` bytes of `input`.
    pub fn failed(input: &'a str, len: usize) -> Self {
        let (consumed, rest) = input.split_at(len);
        Self {
            consumed,
            rest,
            result: None,
        }
    }

    pub fn success(&self) -> bool {
        self.result.is_some()
    }

    /// Transforms the carried value, leaving the cursor untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseOutcome<'a, U> {
        ParseOutcome {
            consumed: self.consumed,
            rest: self.rest,
            result: self.result.map(f),
        }
    }

    /// Re-anchors this outcome, produced on `input[offset..]`, onto `input`.
    ///
    /// Used when a rule calls a sub-rule after matching `offset` bytes itself,
    /// so that both success and failure report the full matched length.
    pub fn rebase(self, input: &'a str, offset: usize) -> Self {
        let len = offset + self.consumed.len();
        let (consumed, rest) = input.split_at(len);
        Self {
            consumed,
            rest,
            result: self.result,
        }
    }

    /// Failure carrying the same cursor, with the value discarded.
    pub fn into_failure<U>(self) -> ParseOutcome<'a, U> {
        ParseOutcome {
            consumed: self.consumed,
            rest: self.rest,
            result: None,
        }
    }
}
