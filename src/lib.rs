//! Redline diffs for free-form text.
//!
//! Given a baseline and a revised version of a document, [`redline`] returns
//! the baseline with every change marked up inline: unchanged text is copied
//! verbatim, deleted spans and inserted spans are wrapped in their own
//! delimiters. The result can be read back with [`parse_redline`], and the
//! suggested changes accepted or rejected one by one with [`resolve`].
//!
//! The pipeline is made of three pure steps which are also exposed:
//! [`tokenize`] splits text into words, punctuation and whitespace,
//! [`align`] matches the two token sequences, and [`render`] writes the
//! markup.
//!
//! ```
//! use redline_text::{MarkupStyle, RedlineConfig, accept_all, redline_with_config};
//!
//! let config = RedlineConfig::default().with_markup(MarkupStyle::plain());
//! let markup = redline_with_config(
//!     "Managed a team of five.",
//!     "Managed a team of eight engineers.",
//!     &config,
//! )
//! .unwrap();
//!
//! assert_eq!(markup, "Managed a team of [-five-]{+eight engineers+}.");
//! assert_eq!(
//!     accept_all(&markup, &config.markup).unwrap(),
//!     "Managed a team of eight engineers."
//! );
//! ```

mod alignment;
mod config;
mod errors;
mod redline;
mod render;
mod review;
mod tokenizer;
mod types;
mod utils;

pub use alignment::{Algorithm, EditOperation, Tag, align, align_with, try_align_with};
pub use config::{DEFAULT_MAX_COMPARISONS, DEFAULT_MAX_TOKENS, RedlineConfig};
pub use errors::RedlineError;
pub use redline::{redline, redline_with_config};
pub use render::render;
pub use review::{accept_all, changes, parse_redline, reject_all, resolve};
pub use tokenizer::{
    BuiltinTokenizer, Tokenizer,
    token::{Token, TokenKind, join},
    tokenize,
};
pub use types::{
    change::{Change, ChangeKind, Decision},
    markup_style::MarkupStyle,
    segment::Segment,
};

#[cfg(feature = "wasm")]
pub mod wasm;
