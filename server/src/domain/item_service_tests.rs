//! Tests for item listing, ownership checks and owner views.

use std::sync::Arc;

use chrono::{Duration, NaiveDateTime, TimeZone, Utc};
use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{
    MockBookingRepository, MockCommentRepository, MockItemRepository,
    MockItemRequestRepository, MockUserRepository,
};
use crate::domain::{
    BookingId, BookingStatus, CommentId, ErrorCode, ItemSummary, RequestId, User, UserSummary,
};
use crate::test_support::MutableClock;

const OWNER: i64 = 2;
const OTHER: i64 = 3;
const ITEM: i64 = 10;

type Service = ItemService<
    MockItemRepository,
    MockUserRepository,
    MockBookingRepository,
    MockCommentRepository,
    MockItemRequestRepository,
>;

#[fixture]
fn now() -> NaiveDateTime {
    Utc.with_ymd_and_hms(2026, 6, 1, 10, 0, 0)
        .single()
        .expect("valid fixture timestamp")
        .naive_utc()
}

#[derive(Default)]
struct Repos {
    items: MockItemRepository,
    users: MockUserRepository,
    bookings: MockBookingRepository,
    comments: MockCommentRepository,
    requests: MockItemRequestRepository,
}

impl Repos {
    fn with_owner(mut self) -> Self {
        self.users
            .expect_find_by_id()
            .with(eq(UserId::new(OWNER)))
            .returning(|id| {
                Ok(Some(User {
                    id,
                    name: "Owner".to_owned(),
                    email: "owner@example.com".to_owned(),
                }))
            });
        self
    }

    fn with_item(mut self) -> Self {
        self.items
            .expect_find_by_id()
            .with(eq(ItemId::new(ITEM)))
            .returning(|_| Ok(Some(tent())));
        self
    }

    fn service(self, now: NaiveDateTime) -> Service {
        ItemService::new(
            Arc::new(self.items),
            Arc::new(self.users),
            Arc::new(self.bookings),
            Arc::new(self.comments),
            Arc::new(self.requests),
            Arc::new(MutableClock::new(now.and_utc())),
        )
    }
}

fn tent() -> Item {
    Item {
        id: ItemId::new(ITEM),
        name: "Tent".to_owned(),
        description: "Two person tent".to_owned(),
        available: true,
        owner_id: UserId::new(OWNER),
        request_id: None,
    }
}

fn booking(id: i64, start: NaiveDateTime, status: BookingStatus) -> Booking {
    Booking {
        id: BookingId::new(id),
        start,
        end: start + Duration::hours(6),
        item: ItemSummary {
            id: ItemId::new(ITEM),
            name: "Tent".to_owned(),
            owner_id: UserId::new(OWNER),
        },
        booker: UserSummary {
            id: UserId::new(OTHER),
            name: "Renter".to_owned(),
        },
        status,
    }
}

fn comment(id: i64) -> Comment {
    Comment {
        id: CommentId::new(id),
        text: "Kept us dry".to_owned(),
        item_id: ItemId::new(ITEM),
        author: UserSummary {
            id: UserId::new(OTHER),
            name: "Renter".to_owned(),
        },
        created: Utc
            .with_ymd_and_hms(2026, 5, 1, 8, 0, 0)
            .single()
            .expect("valid timestamp")
            .naive_utc(),
    }
}

fn draft(request_id: Option<RequestId>) -> ItemDraft {
    ItemDraft {
        name: "Tent".to_owned(),
        description: "Two person tent".to_owned(),
        available: true,
        request_id,
    }
}

#[rstest]
#[tokio::test]
async fn owner_sees_booking_neighbours(now: NaiveDateTime) {
    let mut repos = Repos::default().with_item();
    repos
        .comments
        .expect_list_by_items()
        .return_once(|_| Ok(vec![comment(1)]));
    repos.bookings.expect_list_by_items().return_once(move |_| {
        Ok(vec![
            booking(1, now - Duration::days(2), BookingStatus::Approved),
            booking(2, now + Duration::days(1), BookingStatus::Rejected),
            booking(3, now + Duration::days(3), BookingStatus::Waiting),
        ])
    });

    let details = repos
        .service(now)
        .get_item(UserId::new(OWNER), ItemId::new(ITEM))
        .await
        .expect("item details");

    assert_eq!(details.last_booking.map(|b| b.id), Some(BookingId::new(1)));
    assert_eq!(details.next_booking.map(|b| b.id), Some(BookingId::new(3)));
    assert_eq!(details.comments.len(), 1);
}

#[rstest]
#[tokio::test]
async fn other_viewers_see_no_bookings(now: NaiveDateTime) {
    let mut repos = Repos::default().with_item();
    repos
        .comments
        .expect_list_by_items()
        .return_once(|_| Ok(Vec::new()));
    repos.bookings.expect_list_by_items().times(0);

    let details = repos
        .service(now)
        .get_item(UserId::new(OTHER), ItemId::new(ITEM))
        .await
        .expect("item details");

    assert!(details.last_booking.is_none());
    assert!(details.next_booking.is_none());
}

#[rstest]
#[tokio::test]
async fn owner_items_batch_bookings_and_comments(now: NaiveDateTime) {
    let mut repos = Repos::default().with_owner();
    repos
        .items
        .expect_list_by_owner()
        .return_once(|_| Ok(vec![tent()]));
    repos
        .bookings
        .expect_list_by_items()
        .times(1)
        .return_once(move |_| Ok(vec![booking(4, now - Duration::hours(1), BookingStatus::Approved)]));
    repos
        .comments
        .expect_list_by_items()
        .times(1)
        .return_once(|_| Ok(vec![comment(1), comment(2)]));

    let items = repos
        .service(now)
        .get_user_items(UserId::new(OWNER))
        .await
        .expect("owner items");

    assert_eq!(items.len(), 1);
    let first = items.first().expect("one item");
    assert_eq!(first.last_booking.map(|b| b.id), Some(BookingId::new(4)));
    assert_eq!(first.comments.len(), 2);
}

#[rstest]
#[case("")]
#[case("   ")]
#[tokio::test]
async fn blank_search_returns_nothing(now: NaiveDateTime, #[case] text: &str) {
    let mut repos = Repos::default();
    repos.items.expect_search_available().times(0);

    let found = repos
        .service(now)
        .search_items(text.to_owned())
        .await
        .expect("search");

    assert!(found.is_empty());
}

#[rstest]
#[tokio::test]
async fn search_normalises_text(now: NaiveDateTime) {
    let mut repos = Repos::default();
    repos
        .items
        .expect_search_available()
        .withf(|search| search.text() == "tent")
        .return_once(|_| Ok(vec![tent()]));

    let found = repos
        .service(now)
        .search_items(" TeNt ".to_owned())
        .await
        .expect("search");

    assert_eq!(found, vec![tent()]);
}

#[rstest]
#[tokio::test]
async fn add_item_requires_known_request(now: NaiveDateTime) {
    let mut repos = Repos::default().with_owner();
    repos.requests.expect_find_by_id().return_once(|_| Ok(None));
    repos.items.expect_insert().times(0);

    let error = repos
        .service(now)
        .add_item(UserId::new(OWNER), draft(Some(RequestId::new(5))))
        .await
        .expect_err("unknown request");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "Request with id 5 not found");
}

#[rstest]
#[tokio::test]
async fn add_item_stores_owner(now: NaiveDateTime) {
    let mut repos = Repos::default().with_owner();
    repos
        .items
        .expect_insert()
        .withf(|new| new.owner_id == UserId::new(OWNER) && new.request_id.is_none())
        .return_once(|_| Ok(tent()));

    let item = repos
        .service(now)
        .add_item(UserId::new(OWNER), draft(None))
        .await
        .expect("item listed");

    assert_eq!(item.id, ItemId::new(ITEM));
}

#[rstest]
#[tokio::test]
async fn only_owner_may_update(now: NaiveDateTime) {
    let mut repos = Repos::default().with_item();
    repos.users.expect_find_by_id().returning(|id| {
        Ok(Some(User {
            id,
            name: "Other".to_owned(),
            email: "other@example.com".to_owned(),
        }))
    });
    repos.items.expect_update().times(0);

    let error = repos
        .service(now)
        .update_item(UserId::new(OTHER), ItemId::new(ITEM), ItemPatch::default())
        .await
        .expect_err("not the owner");

    assert_eq!(error.code(), ErrorCode::Forbidden);
    assert_eq!(error.message(), "Only the owner can modify item 10");
}

#[rstest]
#[tokio::test]
async fn update_applies_patch(now: NaiveDateTime) {
    let mut repos = Repos::default().with_owner().with_item();
    repos
        .items
        .expect_update()
        .withf(|item| !item.available && item.name == "Tent")
        .return_once(|item| Ok(item.clone()));
    let patch = ItemPatch {
        available: Some(false),
        ..ItemPatch::default()
    };

    let updated = repos
        .service(now)
        .update_item(UserId::new(OWNER), ItemId::new(ITEM), patch)
        .await
        .expect("updated");

    assert!(!updated.available);
}

#[rstest]
#[tokio::test]
async fn delete_returns_removed_item(now: NaiveDateTime) {
    let mut repos = Repos::default().with_owner().with_item();
    repos
        .items
        .expect_delete()
        .with(eq(ItemId::new(ITEM)))
        .return_once(|_| Ok(true));

    let removed = repos
        .service(now)
        .delete_item(UserId::new(OWNER), ItemId::new(ITEM))
        .await
        .expect("deleted");

    assert_eq!(removed, tent());
}
