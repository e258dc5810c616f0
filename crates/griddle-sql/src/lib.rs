mod prepared;
pub use prepared::{ParamTypes, PreparedQuery};

mod query_kind;
pub use query_kind::QueryKind;

mod serializer;
pub use serializer::{InlineLiterals, Params, Placeholder, Serializer};
