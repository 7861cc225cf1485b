/// Builds a [`Record`](crate::Record) from a type, an ID and optional fields.
///
/// Evaluates to `Option<Record>`: `None` when the type or ID is empty after
/// normalization. Fields go through [`Record::set`](crate::Record::set), so
/// keys are normalized and empty values dropped.
///
/// # Examples
///
/// ```rust
/// use reclist::record;
///
/// let mars = record!("planet", "Mars", {
///     "radius" => "0.5320",
///     "Moon Names" => "Phobos Deimos",
/// })
/// .unwrap();
/// assert_eq!(mars.get("moon-names"), "Phobos Deimos");
///
/// assert!(record!("", "Mars").is_none());
/// ```
#[macro_export]
macro_rules! record {
    ($kind:expr, $id:expr $(,)?) => {
        $crate::Record::new($kind, $id)
    };

    ($kind:expr, $id:expr, { $($key:expr => $value:expr),* $(,)? } $(,)?) => {
        $crate::Record::new($kind, $id).map(|mut record| {
            $(
                record.set($key, $value);
            )*
            record
        })
    };
}
