// CSV export - registrations in the exact layout spreadsheet consumers expect

use chrono::SecondsFormat;

use crate::models::Registration;

const CSV_HEADER: &str = "ID,Event Name,School Name,Contact Person,Phone,Email,Notes,Timestamp";

/// Render registrations as CSV: the fixed header row, then one row per
/// registration. String fields are double-quoted with embedded quotes
/// doubled; id and timestamp are emitted raw. Rows join with `\n` and there
/// is no trailing newline.
pub fn registrations_to_csv(registrations: &[Registration]) -> String {
    let mut lines = Vec::with_capacity(registrations.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for r in registrations {
        lines.push(format!(
            "{},{},{},{},{},{},{},{}",
            r.id,
            quote(&r.event_name),
            quote(&r.school_name),
            quote(&r.contact_person),
            quote(&r.phone),
            quote(&r.email),
            quote(&r.notes),
            r.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        ));
    }

    lines.join("\n")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
