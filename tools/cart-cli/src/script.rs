//! Session scripts: one cart operation per line.
//!
//! ```text
//! # pick two laptops and a phone
//! adjust laptop +2
//! add laptop
//! update laptop -1
//! remove smartphone
//! ```

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use turbo_cart::cart::{CartUpdate, Change};
use turbo_cart::session::CartSession;
use turbo_cart::ProductId;

/// A single session operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    Adjust { product_id: ProductId, delta: i64 },
    Add { product_id: ProductId },
    Update { product_id: ProductId, delta: i64 },
    Remove { product_id: ProductId },
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Adjust { product_id, delta } => write!(f, "adjust {} {:+}", product_id, delta),
            Op::Add { product_id } => write!(f, "add {}", product_id),
            Op::Update { product_id, delta } => write!(f, "update {} {:+}", product_id, delta),
            Op::Remove { product_id } => write!(f, "remove {}", product_id),
        }
    }
}

/// What an operation did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OpResult {
    Selector(Change),
    Cart(CartUpdate),
}

impl OpResult {
    pub fn change(&self) -> Change {
        match self {
            OpResult::Selector(change) => *change,
            OpResult::Cart(update) => update.change,
        }
    }
}

impl Op {
    /// Apply the operation to a session.
    pub fn apply(&self, session: &mut CartSession) -> OpResult {
        match self {
            Op::Adjust { product_id, delta } => {
                OpResult::Selector(session.adjust_selector(product_id, *delta))
            }
            Op::Add { product_id } => OpResult::Cart(session.add_to_cart(product_id)),
            Op::Update { product_id, delta } => {
                OpResult::Cart(session.update_cart_quantity(product_id, *delta))
            }
            Op::Remove { product_id } => OpResult::Cart(session.remove_from_cart(product_id)),
        }
    }
}

/// Script parse errors, with 1-based line numbers.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown operation '{op}'")]
    UnknownOp { line: usize, op: String },

    #[error("line {line}: '{op}' expects {expected}")]
    WrongArity {
        line: usize,
        op: String,
        expected: &'static str,
    },

    #[error("line {line}: invalid delta '{value}'")]
    InvalidDelta { line: usize, value: String },
}

/// Parse a whole script. Blank lines are skipped, and a token starting
/// with `#` comments out the rest of its line.
pub fn parse(source: &str) -> Result<Vec<Op>, ScriptError> {
    source
        .lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let parts: Vec<&str> = raw
                .split_whitespace()
                .take_while(|token| !token.starts_with('#'))
                .collect();
            (!parts.is_empty()).then(|| parse_line(idx + 1, &parts))
        })
        .collect()
}

fn parse_line(line: usize, parts: &[&str]) -> Result<Op, ScriptError> {
    let op = parts[0].to_lowercase();

    match (op.as_str(), &parts[1..]) {
        ("adjust", [id, delta]) => Ok(Op::Adjust {
            product_id: ProductId::new(*id),
            delta: parse_delta(line, delta)?,
        }),
        ("add", [id]) => Ok(Op::Add {
            product_id: ProductId::new(*id),
        }),
        ("update", [id, delta]) => Ok(Op::Update {
            product_id: ProductId::new(*id),
            delta: parse_delta(line, delta)?,
        }),
        ("remove", [id]) => Ok(Op::Remove {
            product_id: ProductId::new(*id),
        }),
        ("adjust" | "update", _) => Err(ScriptError::WrongArity {
            line,
            op: op.clone(),
            expected: "<product> <delta>",
        }),
        ("add" | "remove", _) => Err(ScriptError::WrongArity {
            line,
            op: op.clone(),
            expected: "<product>",
        }),
        _ => Err(ScriptError::UnknownOp {
            line,
            op: op.clone(),
        }),
    }
}

fn parse_delta(line: usize, value: &str) -> Result<i64, ScriptError> {
    value
        .strip_prefix('+')
        .unwrap_or(value)
        .parse()
        .map_err(|_| ScriptError::InvalidDelta {
            line,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let ops = parse(
            "# demo\n\
             adjust laptop +2\n\
             \n\
             ADD laptop   # trailing comment\n\
             update laptop -1\n\
             remove phone\n",
        )
        .unwrap();

        assert_eq!(
            ops,
            vec![
                Op::Adjust {
                    product_id: ProductId::new("laptop"),
                    delta: 2
                },
                Op::Add {
                    product_id: ProductId::new("laptop")
                },
                Op::Update {
                    product_id: ProductId::new("laptop"),
                    delta: -1
                },
                Op::Remove {
                    product_id: ProductId::new("phone")
                },
            ]
        );
    }

    #[test]
    fn test_hash_inside_id_is_kept() {
        let ops = parse("add gift#2 # second gift box\nupdate size#4 +1 #-1\n").unwrap();
        assert_eq!(
            ops,
            vec![
                Op::Add {
                    product_id: ProductId::new("gift#2")
                },
                Op::Update {
                    product_id: ProductId::new("size#4"),
                    delta: 1
                },
            ]
        );
    }

    #[test]
    fn test_unknown_op_reports_line() {
        let err = parse("add laptop\nbuy laptop\n").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnknownOp {
                line: 2,
                op: "buy".to_string()
            }
        );
    }

    #[test]
    fn test_wrong_arity() {
        let err = parse("adjust laptop").unwrap_err();
        assert!(matches!(err, ScriptError::WrongArity { line: 1, .. }));
        assert_eq!(
            err.to_string(),
            "line 1: 'adjust' expects <product> <delta>"
        );
    }

    #[test]
    fn test_invalid_delta() {
        let err = parse("update laptop lots").unwrap_err();
        assert_eq!(
            err,
            ScriptError::InvalidDelta {
                line: 1,
                value: "lots".to_string()
            }
        );
    }

    #[test]
    fn test_display_round_trips() {
        let op = Op::Adjust {
            product_id: ProductId::new("laptop"),
            delta: 3,
        };
        assert_eq!(op.to_string(), "adjust laptop +3");
        assert_eq!(parse(&op.to_string()).unwrap(), vec![op]);
    }

    #[test]
    fn test_apply_against_demo_store() {
        let mut session = CartSession::new(&turbo_cart::config::StoreConfig::demo()).unwrap();
        for op in parse("adjust laptop 2\nadd laptop\nremove wireless-mouse").unwrap() {
            op.apply(&mut session);
        }
        assert_eq!(session.cart().len(), 2);
        assert!(session.gift_message().is_some());
    }
}
