//! Identifiers
//!
//! Every record from the data store is keyed by a UUID. Each kind gets its own
//! newtype so a review id can never be passed where a product id is expected.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! uuid_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Wraps an existing UUID.
            #[must_use]
            pub const fn new(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Generates a fresh random identifier.
            #[must_use]
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Returns the underlying UUID.
            #[must_use]
            pub const fn uuid(&self) -> Uuid {
                self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

uuid_newtype!(
    /// Product identifier
    ProductId
);

uuid_newtype!(
    /// Shop (vendor) identifier
    ShopId
);

uuid_newtype!(
    /// Deal identifier
    DealId
);

uuid_newtype!(
    /// Shopper account identifier
    UserId
);

uuid_newtype!(
    /// Order identifier
    OrderId
);

uuid_newtype!(
    /// Order line identifier
    OrderItemId
);

uuid_newtype!(
    /// Review identifier
    ReviewId
);

uuid_newtype!(
    /// Saved address identifier
    AddressId
);
