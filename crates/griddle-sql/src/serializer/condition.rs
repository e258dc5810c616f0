use super::{Comma, Formatter, Ident, Params, ToSql};

use griddle_core::stmt::{Condition, ConditionOp, ConditionTree, Filter, LogicOp, Operand, Value};

impl ToSql for &Filter {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if let Some(ref root) = self.root {
            fmt!(f, " WHERE");
            render_root(root, f);
        }
    }
}

/// Renders the root of a condition tree: the same connector fold as a
/// nested branch, but without surrounding parentheses and with the
/// identity seeds stripped back out of the text afterwards.
pub(super) fn render_root<P: Params>(tree: &ConditionTree, f: &mut Formatter<'_, P>) {
    match tree {
        ConditionTree::Leaf(condition) => fmt!(f, " " condition),
        ConditionTree::Branch { op, children } => {
            // Parameters collect in the live sink while the text goes to a
            // scratch buffer for the textual cleanup pass.
            let mut scratch = String::new();
            scratch.push_str(op.identity());
            {
                let mut nested = Formatter {
                    dst: &mut scratch,
                    params: &mut *f.params,
                };
                for child in children {
                    nested.dst.push(' ');
                    nested.dst.push_str(op.as_sql());
                    child.to_sql(&mut nested);
                }
            }
            f.dst.push_str(&strip_identity_seeds(&scratch, *op));
        }
    }
}

/// Removes the identity seeds from rendered tree text: the leading
/// `1 AND` / `0 OR` of the root fold and every parenthesized
/// `(1 AND ` / `(0 OR ` group opener. The cleanup is textual and applies
/// to quoted content too; that is part of the rendering contract.
fn strip_identity_seeds(rendered: &str, op: LogicOp) -> String {
    let seed = match op {
        LogicOp::And => "1 AND",
        LogicOp::Or => "0 OR",
    };
    let trimmed = rendered.strip_prefix(seed).unwrap_or(rendered);
    let cleaned = trimmed.replace("(1 AND ", "(").replace("(0 OR ", "(");
    if cleaned.starts_with(' ') {
        cleaned
    } else {
        format!(" {cleaned}")
    }
}

impl ToSql for &ConditionTree {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            ConditionTree::Leaf(condition) => fmt!(f, " " condition),
            ConditionTree::Branch { op, children } => {
                f.dst.push_str(" (");
                f.dst.push_str(op.identity());
                for child in children {
                    f.dst.push(' ');
                    f.dst.push_str(op.as_sql());
                    child.to_sql(f);
                }
                f.dst.push(')');
            }
        }
    }
}

impl ToSql for &Condition {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if let Operand::List(values) = &self.operand {
            if matches!(self.op, ConditionOp::In | ConditionOp::NotIn) && values.is_empty() {
                // Legacy behavior: an empty list degenerates to a
                // standing-true literal with zero parameters.
                fmt!(f, "1");
                return;
            }
        }

        fmt!(f, Ident(&self.field.name) " " self.op.as_sql());

        match &self.operand {
            Operand::Value(value) => {
                f.dst.push(' ');
                f.push_value(value);
            }
            Operand::List(values) => match self.op {
                ConditionOp::Between => match values.as_slice() {
                    [low, high] => {
                        f.dst.push(' ');
                        f.push_value(low);
                        fmt!(f, " AND ");
                        f.push_value(high);
                    }
                    _ => unreachable!("condition construction enforces BETWEEN arity"),
                },
                _ => {
                    fmt!(f, " (" Comma(values.iter().map(Param)) ")");
                }
            },
            Operand::Field(other) => {
                fmt!(f, " " Ident(&other.name));
            }
        }
    }
}

struct Param<'a>(&'a Value);

impl ToSql for Param<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.push_value(self.0);
    }
}
