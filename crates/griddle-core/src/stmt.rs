mod assignments;
pub use assignments::Assignments;

mod condition;
pub use condition::{Condition, Operand};

mod condition_op;
pub use condition_op::ConditionOp;

mod condition_tree;
pub use condition_tree::ConditionTree;

mod delete;
pub use delete::Delete;

mod direction;
pub use direction::Direction;

mod field;
pub use field::{is_valid_identifier, Field};

mod filter;
pub use filter::Filter;

mod insert;
pub use insert::Insert;

mod limit;
pub use limit::Limit;

mod logic_op;
pub use logic_op::LogicOp;

mod order_by;
pub use order_by::{OrderBy, OrderByExpr};

mod returning;
pub use returning::Returning;

mod select;
pub use select::Select;

mod statement;
pub use statement::Statement;

mod ty;
pub use ty::Type;

mod typed_value;
pub use typed_value::TypedValue;

mod update;
pub use update::Update;

mod value;
pub use value::Value;
