//! Store-assigned entity identifiers.
//!
//! Each entity gets its own newtype so a booking id can never be passed where
//! an item id is expected. Values are generated by the store.

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw store identifier.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Raw store identifier.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id! {
    /// Identifier of a registered user.
    UserId
}

entity_id! {
    /// Identifier of a listed item.
    ItemId
}

entity_id! {
    /// Identifier of a booking.
    BookingId
}

entity_id! {
    /// Identifier of a comment left after a rental.
    CommentId
}

entity_id! {
    /// Identifier of an item request.
    RequestId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prints_raw_value() {
        assert_eq!(BookingId::new(42).to_string(), "42");
    }

    #[test]
    fn ordering_follows_raw_value() {
        assert!(ItemId::new(1) < ItemId::new(2));
        assert_eq!(UserId::from(7).get(), 7);
    }
}
