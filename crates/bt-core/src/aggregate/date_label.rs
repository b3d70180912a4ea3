use chrono::{DateTime, Utc};

const SHORT_DATE_FORMAT: &str = "%b %-d";

/// Human label for a transaction date relative to `now`, by calendar day.
///
/// `Today`, `Yesterday`, `<N> days ago` under a week, `<N> weeks ago` under
/// 30 days, otherwise a short absolute date such as `Mar 4`. Future dates
/// get the absolute form.
pub fn relative_date_label(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now.date_naive() - date.date_naive()).num_days();

    match days {
        0 => String::from("Today"),
        1 => String::from("Yesterday"),
        2..=6 => format!("{days} days ago"),
        7..=29 => format!("{} weeks ago", days / 7),
        _ => date.format(SHORT_DATE_FORMAT).to_string(),
    }
}
