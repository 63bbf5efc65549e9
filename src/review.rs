//! Reading redline documents back: listing their changes, and accepting or
//! rejecting them to get a plain document.

use log::debug;

use crate::{
    errors::RedlineError,
    types::{
        change::{Change, ChangeKind, Decision},
        markup_style::MarkupStyle,
        segment::Segment,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delimiter {
    DeleteOpen,
    DeleteClose,
    InsertOpen,
    InsertClose,
}

const DELIMITERS: [Delimiter; 4] = [
    Delimiter::DeleteOpen,
    Delimiter::DeleteClose,
    Delimiter::InsertOpen,
    Delimiter::InsertClose,
];

impl Delimiter {
    fn text(self, style: &MarkupStyle) -> &str { style.delimiters()[self as usize] }
}

/// Finds the earliest delimiter in `markup[from..]`, preferring the longest
/// one when several start at the same byte. Returns its absolute position.
fn next_delimiter(
    markup: &str,
    from: usize,
    style: &MarkupStyle,
) -> Option<(usize, Delimiter, usize)> {
    DELIMITERS
        .iter()
        .zip(style.delimiters())
        .filter_map(|(&delimiter, text)| {
            markup[from..]
                .find(text)
                .map(|offset| (from + offset, delimiter, text.len()))
        })
        .min_by_key(|&(position, _, length)| (position, std::cmp::Reverse(length)))
}

/// Splits a document produced by `render` with the same `style` back into
/// its unchanged, deleted and inserted segments.
///
/// # Errors
///
/// Fails when a delimiter of `style` is empty, or when the delimiters in
/// `markup` aren't properly paired. That happens when `markup` wasn't
/// produced with `style`, or when the original texts already contained one
/// of the delimiters.
pub fn parse_redline(markup: &str, style: &MarkupStyle) -> Result<Vec<Segment>, RedlineError> {
    if style.delimiters().iter().any(|delimiter| delimiter.is_empty()) {
        return Err(RedlineError::EmptyDelimiter);
    }

    let mut segments = Vec::new();
    let mut cursor = 0;

    while let Some((position, delimiter, length)) = next_delimiter(markup, cursor, style) {
        let close = match delimiter {
            Delimiter::DeleteOpen => Delimiter::DeleteClose,
            Delimiter::InsertOpen => Delimiter::InsertClose,
            Delimiter::DeleteClose | Delimiter::InsertClose => {
                return Err(RedlineError::UnexpectedClose { position });
            }
        };

        if position > cursor {
            segments.push(Segment::Unchanged(markup[cursor..position].to_owned()));
        }

        let content_start = position + length;
        let close_text = close.text(style);
        let end = markup[content_start..]
            .find(close_text)
            .map(|offset| content_start + offset)
            .ok_or(RedlineError::UnterminatedMarker { position })?;

        // Content may end in a prefix of the closer, e.g. `[-[-]` deletes "[",
        // so only delimiters lying wholly before the closer are misplaced
        if let Some((inner, found, _)) = next_delimiter(&markup[..end], content_start, style) {
            return Err(match found {
                Delimiter::DeleteOpen | Delimiter::InsertOpen => {
                    RedlineError::NestedMarker { position: inner }
                }
                Delimiter::DeleteClose | Delimiter::InsertClose => {
                    RedlineError::UnexpectedClose { position: inner }
                }
            });
        }

        let content = markup[content_start..end].to_owned();
        segments.push(if close == Delimiter::DeleteClose {
            Segment::Deleted(content)
        } else {
            Segment::Inserted(content)
        });
        cursor = end + close_text.len();
    }

    if cursor < markup.len() {
        segments.push(Segment::Unchanged(markup[cursor..].to_owned()));
    }

    Ok(segments)
}

#[derive(Debug)]
enum Piece {
    Unchanged(String),
    Changed(Change),
}

fn group_changes(segments: Vec<Segment>) -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(segments.len());
    let mut segments = segments.into_iter().peekable();
    let mut next_id = 0;

    while let Some(segment) = segments.next() {
        let (kind, original_text, new_text) = match segment {
            Segment::Unchanged(text) => {
                pieces.push(Piece::Unchanged(text));
                continue;
            }
            Segment::Inserted(text) => (ChangeKind::Addition, String::new(), text),
            Segment::Deleted(text) => {
                match segments.next_if(|next| matches!(next, Segment::Inserted(_))) {
                    Some(Segment::Inserted(new_text)) => (ChangeKind::Replacement, text, new_text),
                    _ => (ChangeKind::Deletion, text, String::new()),
                }
            }
        };

        pieces.push(Piece::Changed(Change {
            id: next_id,
            kind,
            original_text,
            new_text,
        }));
        next_id += 1;
    }

    pieces
}

/// Lists the changes of a redline document in document order. A deletion
/// directly followed by an insertion is reported as a single replacement.
///
/// # Errors
///
/// See [`parse_redline`].
pub fn changes(markup: &str, style: &MarkupStyle) -> Result<Vec<Change>, RedlineError> {
    let pieces = group_changes(parse_redline(markup, style)?);

    Ok(pieces
        .into_iter()
        .filter_map(|piece| match piece {
            Piece::Changed(change) => Some(change),
            Piece::Unchanged(_) => None,
        })
        .collect())
}

/// Turns a redline document into a plain one by applying the `Decision`
/// returned by `decide` to each change. Unchanged text is kept verbatim.
///
/// ```
/// use redline_text::{Decision, MarkupStyle, resolve};
///
/// let markup = "Hello [-brave-]{+bold+} new{+ world+}";
/// let resolved = resolve(markup, &MarkupStyle::plain(), |change| {
///     if change.id == 0 {
///         Decision::Reject
///     } else {
///         Decision::Accept
///     }
/// });
/// assert_eq!(resolved.unwrap(), "Hello brave new world");
/// ```
///
/// # Errors
///
/// See [`parse_redline`].
pub fn resolve(
    markup: &str,
    style: &MarkupStyle,
    decide: impl Fn(&Change) -> Decision,
) -> Result<String, RedlineError> {
    let pieces = group_changes(parse_redline(markup, style)?);
    debug!("Resolving {} pieces of a redline document", pieces.len());

    Ok(pieces
        .into_iter()
        .map(|piece| match piece {
            Piece::Unchanged(text) => text,
            Piece::Changed(change) => change.resolve(&decide(&change)),
        })
        .collect())
}

/// Returns the revised document: deletions are dropped and insertions kept.
///
/// # Errors
///
/// See [`parse_redline`].
pub fn accept_all(markup: &str, style: &MarkupStyle) -> Result<String, RedlineError> {
    resolve(markup, style, |_| Decision::Accept)
}

/// Returns the baseline document: insertions are dropped and deletions kept.
///
/// # Errors
///
/// See [`parse_redline`].
pub fn reject_all(markup: &str, style: &MarkupStyle) -> Result<String, RedlineError> {
    resolve(markup, style, |_| Decision::Reject)
}
