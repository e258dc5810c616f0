use super::{Formatter, Params, ToSql};

/// A backtick-quoted column identifier.
///
/// Names reaching the serializer have already passed identifier validation,
/// so no escaping is applied here.
pub(super) struct Ident<T>(pub(super) T);

impl<T> ToSql for Ident<T>
where
    T: AsRef<str>,
{
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push('`');
        f.dst.push_str(self.0.as_ref());
        f.dst.push('`');
    }
}
