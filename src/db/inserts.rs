// inserts.rs
use crate::domain::NormalizedInsertRow;

pub const SCRIPT_HEADER: &str = "-- Generated inserts from HTML";

const COLUMNS: &str = "owner_id, title, slug, description, parish, town, address, price, currency, \
type, bedrooms, bathrooms, status, is_featured, views, available_date, created_at, updated_at, \
image_urls, phone_number";

/// Single-quoted SQL string literal with embedded quotes doubled.
pub fn sql_literal(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// `NULL` for absent values so "unknown" never turns into `''`.
pub fn sql_opt_literal(s: Option<&str>) -> String {
    s.map(sql_literal).unwrap_or_else(|| "NULL".to_string())
}

fn sql_opt_number<T: ToString>(n: Option<T>) -> String {
    n.map(|v| v.to_string()).unwrap_or_else(|| "NULL".to_string())
}

/// The `INSERT` statement for one row, terminated by `;\n`.
pub fn render_insert(row: &NormalizedInsertRow) -> String {
    let values = [
        sql_literal(&row.owner_id),
        sql_literal(&row.title),
        sql_literal(&row.slug),
        sql_opt_literal(row.description.as_deref()),
        sql_opt_literal(row.parish.as_deref()),
        sql_opt_literal(row.town.as_deref()),
        "NULL".to_string(),
        // price is digits only, emitted as a bare number
        sql_opt_number(row.price.as_deref()),
        sql_literal(&row.currency),
        sql_literal(row.property_type.as_str()),
        sql_opt_number(row.bedrooms),
        sql_opt_number(row.bathrooms),
        sql_literal(row.status.as_str()),
        "false".to_string(),
        "0".to_string(),
        "NULL".to_string(),
        "now()".to_string(),
        "now()".to_string(),
        row.image_url
            .as_deref()
            .map(|url| format!("ARRAY[{}]", sql_literal(url)))
            .unwrap_or_else(|| "NULL".to_string()),
        sql_opt_literal(row.phone_number.as_deref()),
    ];

    format!(
        "INSERT INTO public.properties ({COLUMNS})\nVALUES\n({});\n",
        values.join(", ")
    )
}

/// Header line followed by every statement, in row order.
pub fn render_script(rows: &[NormalizedInsertRow]) -> String {
    let statements: Vec<String> = rows.iter().map(render_insert).collect();
    format!("{SCRIPT_HEADER}\n{}", statements.join("\n"))
}
