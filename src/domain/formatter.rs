//! Human-readable rendering of an [`OrganizationRecord`].

use crate::domain::entities::OrganizationRecord;

/// Returned when a page yielded no field at all.
pub const UNRECOGNIZED_MESSAGE: &str =
    "Не удалось распознать данные организации на странице orginfo.uz.";

/// Trailing attribution appended to every non-empty summary.
pub const ATTRIBUTION_LINE: &str = "\nИсточник: orginfo.uz (информация не является официальной).";

/// Renders a record as a card, one line per present field.
///
/// Field order is fixed: name, tax ID, status, registration date, director,
/// address, charter capital.
pub fn format_record(record: &OrganizationRecord) -> String {
    let labelled = [
        ("ИНН", &record.tax_id),
        ("Статус", &record.status),
        ("Дата регистрации", &record.registration_date),
        ("Руководитель", &record.director_name),
        ("Адрес", &record.address),
        ("Уставной фонд", &record.charter_capital),
    ];

    let mut lines: Vec<String> = Vec::with_capacity(labelled.len() + 2);

    if let Some(name) = &record.name {
        lines.push(format!("🏢 {name}"));
    }

    lines.extend(
        labelled
            .iter()
            .filter_map(|(label, value)| value.as_ref().map(|v| format!("{label}: {v}"))),
    );

    if lines.is_empty() {
        return UNRECOGNIZED_MESSAGE.to_string();
    }

    lines.push(ATTRIBUTION_LINE.to_string());
    lines.join("\n")
}
