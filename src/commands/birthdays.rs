//! Upcoming birthdays command.

use crate::app::AppContext;
use crate::domain::DISPLAY_DATE_FORMAT;
use crate::error::AssistantResult;

/// `birthdays [days]`; without an argument the configured default window is used.
pub(super) fn upcoming(ctx: &AppContext, days: Option<i64>) -> AssistantResult<String> {
    let days = days.unwrap_or(ctx.config().birthdays_default_days);
    let upcoming = ctx.birthdays().get_upcoming(days)?;

    if upcoming.is_empty() {
        return Ok(format!("No birthdays in the next {} days", days));
    }

    let mut lines = vec![format!("Upcoming birthdays in the next {} days:", days)];
    for entry in &upcoming {
        let when = match entry.days_until {
            0 => "today".to_string(),
            1 => "tomorrow".to_string(),
            n => format!("in {} days", n),
        };
        lines.push(format!(
            "{} | {} ({}) | {} | turns {}",
            entry.contact.name(),
            entry.date.format(DISPLAY_DATE_FORMAT),
            entry.date.format("%A"),
            when,
            entry.turning
        ));
    }
    Ok(lines.join("\n"))
}
