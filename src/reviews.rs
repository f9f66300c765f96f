//! Reviews

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::{ProductId, ReviewId, UserId};

/// Errors raised while building a review.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReviewError {
    /// Ratings are whole stars from one to five.
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
}

/// A star rating from one to five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest rating.
    pub const MIN: Self = Self(1);

    /// Highest rating.
    pub const MAX: Self = Self(5);

    /// Number of stars.
    #[must_use]
    pub fn stars(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = ReviewError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ReviewError::RatingOutOfRange(value))
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// A shopper's review of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Review identifier
    pub id: ReviewId,

    /// When the review was written
    pub created_at: Timestamp,

    /// Reviewer
    pub user_id: UserId,

    /// Product reviewed
    pub product_id: ProductId,

    /// Star rating
    pub rating: Rating,

    /// Optional written comment
    pub comment: Option<String>,

    /// Uploaded photos
    #[serde(default)]
    pub image_urls: Vec<String>,
}

/// Mean star rating across `reviews`, or zero when there are none.
#[must_use]
pub fn average_rating(reviews: &[Review]) -> Decimal {
    if reviews.is_empty() {
        return Decimal::ZERO;
    }

    let total: u64 = reviews
        .iter()
        .map(|review| u64::from(review.rating.stars()))
        .sum();

    Decimal::from(total) / Decimal::from(reviews.len())
}

/// Sorts reviews newest first.
pub fn sort_recent_first(reviews: &mut [Review]) {
    reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
