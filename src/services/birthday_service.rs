//! Upcoming birthday lookups over the contact collection.

use crate::error::{AssistantError, AssistantResult};
use crate::models::Contact;
use crate::services::ContactService;
use chrono::{Datelike, Local, NaiveDate};
use tracing::debug;

/// A contact whose birthday falls inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub contact: Contact,
    /// Next anniversary on or after the reference day
    pub date: NaiveDate,
    pub days_until: i64,
    /// Age the contact turns on `date`
    pub turning: i32,
}

/// Read-only view answering "whose birthday is coming up".
pub struct BirthdayService<'a> {
    contacts: &'a dyn ContactService,
    max_days: i64,
}

impl<'a> BirthdayService<'a> {
    pub fn new(contacts: &'a dyn ContactService, max_days: i64) -> Self {
        Self { contacts, max_days }
    }

    /// Birthdays within `days_ahead` days of the local current date.
    pub fn get_upcoming(&self, days_ahead: i64) -> AssistantResult<Vec<UpcomingBirthday>> {
        self.get_upcoming_from(days_ahead, Local::now().date_naive())
    }

    /// Birthdays within `days_ahead` days of `today`, both ends inclusive.
    ///
    /// Results keep collection order. A February 29 birthday is celebrated on
    /// February 28 in non-leap years.
    pub fn get_upcoming_from(
        &self,
        days_ahead: i64,
        today: NaiveDate,
    ) -> AssistantResult<Vec<UpcomingBirthday>> {
        if !(0..=self.max_days).contains(&days_ahead) {
            return Err(AssistantError::InvalidInput(format!(
                "days must be between 0 and {}, got {}",
                self.max_days, days_ahead
            )));
        }

        let upcoming: Vec<UpcomingBirthday> = self
            .contacts
            .get_all()
            .into_iter()
            .filter_map(|contact| {
                let birthday = contact.birthday()?;
                let date = birthday.next_occurrence(today)?;
                let days_until = (date - today).num_days();
                (days_until <= days_ahead).then(|| UpcomingBirthday {
                    turning: date.year() - birthday.date().year(),
                    contact,
                    date,
                    days_until,
                })
            })
            .collect();

        debug!(
            "{} birthdays within {} days of {}",
            upcoming.len(),
            days_ahead,
            today
        );
        Ok(upcoming)
    }
}
