//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a `Spanned` token from a token and its byte range

/// Creates a `Spanned` instance.
///
/// # Arguments
///
/// * `$token` - The Token
/// * `$start` - Byte offset of the first character
/// * `$end` - Byte offset one past the last character
/// * `$file` - `Rc<String>` holding the file name
///
/// # Example
///
/// ```ignore
/// let spanned = MK_TOKEN!(Token::Plus, 4, 5, lexer.file);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($token:expr, $start:expr, $end:expr, $file:expr) => {
        $crate::lexer::tokens::Spanned {
            token: $token,
            span: $crate::Span {
                start: $crate::Position(
                    u32::try_from($start).unwrap_or(u32::MAX),
                    std::rc::Rc::clone(&$file),
                ),
                end: $crate::Position(
                    u32::try_from($end).unwrap_or(u32::MAX),
                    std::rc::Rc::clone(&$file),
                ),
            },
        }
    };
}
