//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the embedded migrations under
//! `server/migrations` exactly. `diesel print-schema` regenerates them from a
//! live database.

diesel::table! {
    /// Registered users. `email` carries a unique index.
    users (id) {
        id -> Int8,
        name -> Varchar,
        email -> Varchar,
    }
}

diesel::table! {
    /// Requests for items nobody shares yet.
    requests (id) {
        id -> Int8,
        description -> Varchar,
        requestor_id -> Int8,
        created -> Timestamp,
    }
}

diesel::table! {
    /// Shareable items. `request_id` is cleared when its request is deleted.
    items (id) {
        id -> Int8,
        name -> Varchar,
        description -> Varchar,
        available -> Bool,
        owner_id -> Int8,
        request_id -> Nullable<Int8>,
    }
}

diesel::table! {
    /// Bookings of items for a time window.
    bookings (id) {
        id -> Int8,
        start_date -> Timestamp,
        end_date -> Timestamp,
        item_id -> Int8,
        booker_id -> Int8,
        /// One of `WAITING`, `APPROVED`, `REJECTED`.
        status -> Varchar,
    }
}

diesel::table! {
    /// Comments left by bookers after a completed rental.
    comments (id) {
        id -> Int8,
        text -> Varchar,
        item_id -> Int8,
        author_id -> Int8,
        created -> Timestamp,
    }
}

diesel::joinable!(bookings -> items (item_id));
diesel::joinable!(bookings -> users (booker_id));
diesel::joinable!(comments -> items (item_id));
diesel::joinable!(comments -> users (author_id));
diesel::joinable!(items -> requests (request_id));
diesel::joinable!(items -> users (owner_id));
diesel::joinable!(requests -> users (requestor_id));

diesel::allow_tables_to_appear_in_same_query!(bookings, comments, items, requests, users);
