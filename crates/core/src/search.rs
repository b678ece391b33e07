//! Substring search predicates for parts and vehicles.
//!
//! Search is a case-insensitive containment match over a fixed set of
//! columns per entity. The query is always treated literally: `LIKE`
//! metacharacters are escaped before the pattern is built.

/// Part columns scanned by a search.
pub const PART_SEARCH_COLUMNS: &[&str] = &[
    "internal_part_code",
    "oe_part_number",
    "manufacturer_part_number",
    "description",
    "system",
    "notes",
    "oe_description",
];

/// Vehicle columns scanned by a search.
pub const VEHICLE_SEARCH_COLUMNS: &[&str] = &["make", "model", "variant", "body_style", "trim_level"];

/// Escape character used in generated `LIKE` clauses.
pub const LIKE_ESCAPE: char = '\\';

/// Escape `%`, `_` and the escape character itself so `query` matches literally.
pub fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Whether any stored text could contain `query`.
///
/// Postgres `TEXT` cannot hold NUL, so a query containing one matches nothing.
pub fn is_searchable(query: &str) -> bool {
    !query.contains('\0')
}

/// Build a `%query%` pattern for `ILIKE`.
///
/// An empty query yields `%%`, which matches every non-null value.
pub fn contains_pattern(query: &str) -> String {
    format!("%{}%", escape_like(query))
}

/// Build a `WHERE` predicate OR-ing `ILIKE $param` over `columns`.
///
/// ```
/// use catalog_core::search::match_any_clause;
///
/// assert_eq!(
///     match_any_clause(&["make", "model"], 1),
///     "make ILIKE $1 ESCAPE '\\' OR model ILIKE $1 ESCAPE '\\'"
/// );
/// ```
pub fn match_any_clause(columns: &[&str], param: usize) -> String {
    columns
        .iter()
        .map(|col| format!("{col} ILIKE ${param} ESCAPE '{LIKE_ESCAPE}'"))
        .collect::<Vec<_>>()
        .join(" OR ")
}

/// In-memory equivalent of the SQL predicate: does any field contain `query`,
/// ignoring case? `None` fields never match.
pub fn any_field_contains<'a, I>(fields: I, query: &str) -> bool
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let needle = query.to_lowercase();
    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}
