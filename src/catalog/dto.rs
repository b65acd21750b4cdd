use super::model::{Event, EventDate, EventId, EventStatus};
use serde::Deserialize;
use serde_either::SingleOrVec;

// Note: ids are numbers in the bundled dataset but strings once routed, so both are accepted
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl From<&RecordId> for EventId {
    fn from(value: &RecordId) -> Self {
        match value {
            RecordId::Number(id) => EventId::from(*id),
            RecordId::Text(id) => EventId::new(id.as_str()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub time: String,
    pub category: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub organizer: String,
    #[serde(default)]
    pub price: String,
    pub status: String,
    #[serde(default)]
    pub attendees: u32,
    #[serde(default)]
    pub max_attendees: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Option<SingleOrVec<String>>,
}

impl EventRecord {
    #[tracing::instrument(skip(self), fields(self.id = ?self.id))]
    pub fn to_model(&self) -> Event {
        let tags = match self.tags.clone() {
            None => Vec::new(),
            Some(SingleOrVec::Single(tag)) => vec![tag],
            Some(SingleOrVec::Vec(tags)) => tags,
        };

        Event {
            id: EventId::from(&self.id),
            title: self.title.to_string(),
            description: self.description.to_string(),
            date: EventDate::parse(&self.date),
            time: self.time.to_string(),
            category: self.category.to_string(),
            location: self.location.to_string(),
            organizer: self.organizer.to_string(),
            price: self.price.to_string(),
            status: EventStatus::from_raw(&self.status),
            attendees: self.attendees,
            max_attendees: self.max_attendees,
            image: self.image.to_string(),
            tags,
        }
    }
}
