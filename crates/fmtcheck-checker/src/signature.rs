//! Encoded type signatures.
//!
//! Hosts defer some type inference by storing an encoded signature instead
//! of a class name. Four shapes are recognised:
//!
//! ```text
//! #M#C\App\Service.logger|...   method `logger` of `\App\Service`
//! #P#C\App\Service.log|...      property `log` of `\App\Service`
//! #C\app\make_logger|...        return type of function `\app\make_logger`
//! #Ю\A|\Logger\Logger|?         union of already resolved class names
//! ```
//!
//! Anything else is taken to be a canonical type name.

use fmtcheck_ast::TypeUnion;

pub const METHOD_PREFIX: &str = "#M#C";
pub const PROPERTY_PREFIX: &str = "#P#C";
pub const FUNCTION_PREFIX: &str = "#C";
pub const RESOLVED_UNION_PREFIX: &str = "#\u{042E}";

/// A decoded signature, borrowing from the encoded text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeSignature<'a> {
    /// `#M#C` / `#P#C`: the type of member `member` of class `class_fqn`.
    MemberAccess { class_fqn: &'a str, member: &'a str },
    /// `#C`: the return type of a free function.
    FunctionReturn { fqn: &'a str },
    /// `#Ю`: the last non-wildcard entry, if any.
    ResolvedUnion { last: Option<&'a str> },
    /// Already a type name.
    Canonical(&'a str),
    /// A member signature without a `.` separator.
    Malformed,
}

impl<'a> TypeSignature<'a> {
    pub fn decode(signature: &'a str) -> Self {
        if let Some(rest) = signature
            .strip_prefix(METHOD_PREFIX)
            .or_else(|| signature.strip_prefix(PROPERTY_PREFIX))
        {
            return match before_pipe(rest).rsplit_once('.') {
                Some((class_fqn, member)) => Self::MemberAccess { class_fqn, member },
                None => Self::Malformed,
            };
        }

        if let Some(rest) = signature.strip_prefix(RESOLVED_UNION_PREFIX) {
            let last = rest
                .split('|')
                .rev()
                .find(|entry| *entry != TypeUnion::WILDCARD && !entry.is_empty());
            return Self::ResolvedUnion { last };
        }

        // Checked after `#M#C`/`#P#C`, which would otherwise never match.
        if let Some(rest) = signature.strip_prefix(FUNCTION_PREFIX) {
            return Self::FunctionReturn {
                fqn: before_pipe(rest),
            };
        }

        Self::Canonical(signature)
    }
}

fn before_pipe(text: &str) -> &str {
    text.split_once('|').map_or(text, |(head, _)| head)
}
