//! Calculator input flow on top of a [`Register`].
//!
//! The register only knows explicit operands. A [`Session`] supplies them the
//! way a keypad front end does: it remembers the left operand and the
//! pending operator, keeps a memory slot, and latches into an error state
//! when the register rejects an operation. While latched, only `C` and `CE`
//! are accepted.
//!
//! Input arrives as [`Action`]s, usually parsed from text tokens:
//!
//! | Token | Action |
//! |-------|--------|
//! | `=` | evaluate the pending operator |
//! | `C`, `CE` | reset, clear entry |
//! | `MC`, `MR`, `MS`, `M+`, `M-` | memory |
//! | `base=hex`, `word=byte` | mode selection |
//! | `+`, `Mod`, `RoL`, `xor`, ... | binary operator |
//! | `Not`, `±`, `√`, `1/x`, ... | unary operator |
//! | anything else | operand in the active radix |
//!
//! Commands win over operands, so hex `C`, `CE` or `ADD` must be typed with
//! a leading zero (`0C`).

use progcalc::{
    BinaryOp, CalcError, ParseError, Radix, Register, RegisterSnapshot, UnaryOp, WordSize,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

/// Text shown while the session is latched after a failure.
pub const ERROR_TEXT: &str = "Error";

/// Failure to perform an [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The register rejected the operation; the session is now latched.
    #[error("{0}")]
    Calc(#[from] CalcError),
    /// An operand could not be read in the active radix.
    #[error("cannot read '{text}': {source}")]
    Parse {
        /// The token as typed.
        text: String,
        /// Why it was rejected.
        #[source]
        source: ParseError,
    },
    /// A mode selection names no known base or word size.
    #[error("{0}")]
    Mode(String),
    /// Input other than `C`/`CE` while latched.
    #[error("calculator is in error state; clear with C or CE")]
    Locked,
}

impl SessionError {
    /// True for failures caused by the input text rather than the arithmetic.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::Mode(_))
    }
}

/// Memory-slot keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryOp {
    /// Clear memory.
    Clear,
    /// Recall memory as the current entry.
    Recall,
    /// Store the current operand.
    Store,
    /// Add the current operand to memory.
    Add,
    /// Subtract the current operand from memory.
    Subtract,
}

/// One unit of user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Operand text, read in the active radix when performed.
    Entry(String),
    /// Select a binary operator.
    Binary(BinaryOp),
    /// Apply a unary operator to the current operand.
    Unary(UnaryOp),
    /// Evaluate the pending operator.
    Equals,
    /// Reset everything but the mode selection and memory.
    Clear,
    /// Clear the current entry.
    ClearEntry,
    /// Memory key.
    Memory(MemoryOp),
    /// Select a display radix.
    Base(Radix),
    /// Select a word size.
    Word(WordSize),
}

impl Action {
    /// Interprets one input token.
    ///
    /// # Errors
    ///
    /// [`SessionError::Mode`] when a `base=` or `word=` selection names an
    /// unknown mode. Anything that is not a command parses as
    /// [`Action::Entry`]; operand text is only validated when performed.
    pub fn parse(token: &str) -> Result<Self, SessionError> {
        let token = token.trim();
        let upper = token.to_ascii_uppercase();
        let action = match upper.as_str() {
            "=" => Self::Equals,
            "C" => Self::Clear,
            "CE" => Self::ClearEntry,
            "MC" => Self::Memory(MemoryOp::Clear),
            "MR" => Self::Memory(MemoryOp::Recall),
            "MS" => Self::Memory(MemoryOp::Store),
            "M+" => Self::Memory(MemoryOp::Add),
            "M-" => Self::Memory(MemoryOp::Subtract),
            _ => {
                if let Some(name) = strip_prefix_ignore_case(token, "base=") {
                    return name
                        .parse()
                        .map(Self::Base)
                        .map_err(|e| SessionError::Mode(format!("{e}")));
                }
                if let Some(name) = strip_prefix_ignore_case(token, "word=") {
                    return name
                        .parse()
                        .map(Self::Word)
                        .map_err(|e| SessionError::Mode(format!("{e}")));
                }
                if let Ok(op) = token.parse::<BinaryOp>() {
                    Self::Binary(op)
                } else if let Ok(op) = token.parse::<UnaryOp>() {
                    Self::Unary(op)
                } else {
                    Self::Entry(token.to_owned())
                }
            }
        };
        Ok(action)
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &s[prefix.len()..])
}

/// Session state as plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// The register behind the display.
    pub register: RegisterSnapshot,
    /// Display text, `Error` while latched.
    pub display: String,
    /// Operator waiting for its right operand.
    pub pending: Option<BinaryOp>,
    /// Memory slot.
    pub memory: i64,
    /// Message of the failure that latched the session.
    pub error: Option<String>,
}

/// Keypad-style calculator session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    register: Register,
    /// Operand typed since the last operator, if any.
    entry: Option<i64>,
    /// Left operand of the pending operator.
    accumulator: i64,
    pending: Option<BinaryOp>,
    memory: i64,
    error: Option<CalcError>,
}

impl Session {
    /// A session over a fresh register with the given modes.
    #[must_use]
    pub fn new(word_size: WordSize, base: Radix) -> Self {
        let mut session = Self::default();
        session.register.set_word_size(word_size);
        session.register.set_base(base);
        session
    }

    /// Parses and performs one token.
    ///
    /// # Errors
    ///
    /// See [`Action::parse`] and [`Session::perform`].
    pub fn feed(&mut self, token: &str) -> Result<(), SessionError> {
        let action = Action::parse(token)?;
        self.perform(action)
    }

    /// Performs one action.
    ///
    /// # Errors
    ///
    /// [`SessionError::Locked`] for anything but `C`/`CE` while latched,
    /// [`SessionError::Parse`] for an unreadable operand, and
    /// [`SessionError::Calc`] when the register rejects the operation (which
    /// latches the session).
    pub fn perform(&mut self, action: Action) -> Result<(), SessionError> {
        debug!(?action, "perform");
        match action {
            Action::Clear => {
                self.clear();
                return Ok(());
            }
            Action::ClearEntry => {
                if self.error.is_some() {
                    self.clear();
                } else {
                    self.entry = Some(0);
                    self.register.set_value(0);
                }
                return Ok(());
            }
            _ if self.error.is_some() => return Err(SessionError::Locked),
            _ => {}
        }

        match action {
            Action::Entry(text) => {
                let value = self
                    .register
                    .base()
                    .parse(&text, self.register.word_size())
                    .map_err(|source| SessionError::Parse { text, source })?;
                self.load_entry(value);
            }
            Action::Binary(op) => {
                if let (Some(pending), Some(rhs)) = (self.pending, self.entry) {
                    self.evaluate(pending, rhs)?;
                } else if self.pending.is_none() {
                    self.accumulator = self.current();
                }
                self.pending = Some(op);
                self.entry = None;
            }
            Action::Unary(op) => {
                let operand = self.current();
                let value = self.guard(|reg| reg.apply_unary(op, operand))?;
                self.entry = Some(value);
            }
            Action::Equals => {
                if let Some(pending) = self.pending {
                    let rhs = self.current();
                    self.evaluate(pending, rhs)?;
                    self.pending = None;
                }
                self.entry = None;
            }
            Action::Memory(op) => self.memory(op),
            Action::Base(base) => self.register.set_base(base),
            Action::Word(word_size) => {
                self.register.set_word_size(word_size);
                let w = self.register.word_size();
                self.accumulator = w.sign_extend(self.accumulator as u64);
                self.memory = w.sign_extend(self.memory as u64);
                if self.entry.is_some() {
                    self.entry = Some(self.register.value());
                }
            }
            Action::Clear | Action::ClearEntry => {}
        }
        Ok(())
    }

    /// Runs a register operation, latching on failure.
    fn guard(
        &mut self,
        op: impl FnOnce(&mut Register) -> Result<i64, CalcError>,
    ) -> Result<i64, SessionError> {
        op(&mut self.register).map_err(|err| {
            info!(%err, "session latched");
            self.error = Some(err);
            self.pending = None;
            self.entry = None;
            SessionError::Calc(err)
        })
    }

    fn evaluate(&mut self, op: BinaryOp, rhs: i64) -> Result<(), SessionError> {
        let lhs = self.accumulator;
        self.accumulator = self.guard(|reg| reg.apply(op, lhs, rhs))?;
        Ok(())
    }

    fn load_entry(&mut self, value: i64) {
        self.register.set_value(value);
        self.entry = Some(self.register.value());
    }

    fn memory(&mut self, op: MemoryOp) {
        let w = self.register.word_size();
        match op {
            MemoryOp::Clear => self.memory = 0,
            MemoryOp::Recall => self.load_entry(self.memory),
            MemoryOp::Store => self.memory = self.current(),
            MemoryOp::Add => {
                self.memory = w.sign_extend((self.memory as u64).wrapping_add(self.current() as u64));
            }
            MemoryOp::Subtract => {
                self.memory = w.sign_extend((self.memory as u64).wrapping_sub(self.current() as u64));
            }
        }
    }

    fn clear(&mut self) {
        let (word_size, base) = (self.register.word_size(), self.register.base());
        let memory = self.memory;
        *self = Self::new(word_size, base);
        self.memory = memory;
    }

    /// The operand an operator would use now: the typed entry, or the value
    /// on display.
    #[must_use]
    pub fn current(&self) -> i64 {
        self.entry.unwrap_or_else(|| self.register.value())
    }

    /// Display text.
    #[must_use]
    pub fn display(&self) -> String {
        if self.error.is_some() {
            ERROR_TEXT.to_owned()
        } else {
            self.register.display()
        }
    }

    /// Bit view of the register.
    #[must_use]
    pub fn bits(&self) -> String {
        self.register.bits()
    }

    /// The register behind the display.
    #[must_use]
    pub fn register(&self) -> &Register {
        &self.register
    }

    /// Memory slot.
    #[must_use]
    pub fn memory_value(&self) -> i64 {
        self.memory
    }

    /// Operator waiting for its right operand.
    #[must_use]
    pub fn pending(&self) -> Option<BinaryOp> {
        self.pending
    }

    /// The failure that latched the session, if any.
    #[must_use]
    pub fn error(&self) -> Option<CalcError> {
        self.error
    }

    /// Session state as plain data.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            register: self.register.snapshot(),
            display: self.display(),
            pending: self.pending,
            memory: self.memory,
            error: self.error.map(|e| e.to_string()),
        }
    }
}
