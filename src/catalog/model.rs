use chrono::NaiveDate;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tracing::warn;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for EventId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EventId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EventStatus {
    #[default]
    Upcoming,
    Past,
    /// Anything other than `upcoming`/`past`. Never matched by the status
    /// filter, ordered together with upcoming events.
    Unrecognized(String),
}

impl EventStatus {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "upcoming" => EventStatus::Upcoming,
            "past" => EventStatus::Past,
            other => {
                warn!("Unrecognized event status '{}'", other);
                EventStatus::Unrecognized(other.to_string())
            }
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Past => "past",
            EventStatus::Unrecognized(raw) => raw,
        }
    }

    pub fn is_past(&self) -> bool {
        matches!(self, EventStatus::Past)
    }
}

/// Known categories. Anything else is still a valid event category, it just
/// gets the default badge.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
pub enum Category {
    Technology,
    Cultural,
    Sports,
    Business,
    Academic,
    Other,
}

impl Category {
    pub fn from_label(label: &str) -> Self {
        Category::from_str(label).unwrap_or(Category::Other)
    }

    pub fn is_known(&self) -> bool {
        *self != Category::Other
    }

    pub fn badge_style(&self) -> &'static str {
        match self {
            Category::Technology => "bg-blue-500/20 text-blue-400",
            Category::Cultural => "bg-purple-500/20 text-purple-400",
            Category::Sports => "bg-orange-500/20 text-orange-400",
            Category::Business => "bg-green-500/20 text-green-400",
            Category::Academic => "bg-indigo-500/20 text-indigo-400",
            Category::Other => "bg-gray-500/20 text-gray-400",
        }
    }
}

/// Calendar date as given by the dataset, plus its parsed value when it is a
/// valid `YYYY-MM-DD` (optionally followed by a time part).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDate {
    pub raw: String,
    pub parsed: Option<NaiveDate>,
}

impl EventDate {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let date_part = match trimmed.char_indices().nth(10) {
            Some((idx, 'T')) | Some((idx, ' ')) => &trimmed[..idx],
            _ => trimmed,
        };

        let parsed = NaiveDate::parse_from_str(date_part, DATE_FORMAT)
            .map_err(|err| warn!("Failed to parse date '{}'. Err: {err}", raw))
            .ok();

        Self {
            raw: raw.to_string(),
            parsed,
        }
    }

    /// Unknown dates order as the earliest possible date.
    pub fn sort_key(&self) -> NaiveDate {
        self.parsed.unwrap_or(NaiveDate::MIN)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: EventDate,
    pub time: String,
    pub category: String,
    pub location: String,
    pub organizer: String,
    pub price: String,
    pub status: EventStatus,
    pub attendees: u32,
    pub max_attendees: u32,
    pub image: String,
    pub tags: Vec<String>,
}

impl Event {
    pub fn category_kind(&self) -> Category {
        Category::from_label(&self.category)
    }

    /// e.g. `Mar 1, 2024`, or the raw value when it couldn't be parsed
    pub fn display_date(&self) -> String {
        match self.date.parsed {
            Some(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
            None => self.date.raw.clone(),
        }
    }

    pub fn attendance(&self) -> String {
        format!("{}/{}", self.attendees, self.max_attendees)
    }

    pub fn spots_left(&self) -> u32 {
        self.max_attendees.saturating_sub(self.attendees)
    }

    pub fn is_full(&self) -> bool {
        self.spots_left() == 0
    }
}
