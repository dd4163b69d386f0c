use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::RoomType;
use crate::ids::{FeedbackId, UserId};

// Guest feedback about a stay. Rating and comments stay editable and are not
// range-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    id: FeedbackId,
    guest: UserId,
    rating: i32,
    comments: String,
    submitted_date: NaiveDate,
    category: RoomType,
}

impl Feedback {
    pub fn new(
        id: impl Into<FeedbackId>,
        guest: UserId,
        rating: i32,
        comments: impl Into<String>,
        category: RoomType,
    ) -> Self {
        Self::submitted_on(id, guest, rating, comments, category, Utc::now().date_naive())
    }

    pub fn submitted_on(
        id: impl Into<FeedbackId>,
        guest: UserId,
        rating: i32,
        comments: impl Into<String>,
        category: RoomType,
        submitted_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            guest,
            rating,
            comments: comments.into(),
            submitted_date,
            category,
        }
    }

    pub fn get_id(&self) -> FeedbackId {
        self.id
    }

    pub fn get_guest(&self) -> UserId {
        self.guest
    }

    pub fn get_rating(&self) -> i32 {
        self.rating
    }

    pub fn get_comments(&self) -> &str {
        &self.comments
    }

    pub fn get_submitted_date(&self) -> NaiveDate {
        self.submitted_date
    }

    pub fn get_category(&self) -> RoomType {
        self.category
    }

    pub fn edit_comment(&mut self, new_text: impl Into<String>) {
        self.comments = new_text.into();
    }

    pub fn update_rating(&mut self, new_rating: i32) {
        self.rating = new_rating;
    }
}
