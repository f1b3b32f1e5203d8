//! In-memory repositories backing the HTTP router in integration tests.
//!
//! Each [`InMemoryStore`] owns its own tables and identifier sequences, so
//! tests never share state. Deletes cascade the way the SQL schema does.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use mockable::Clock;

use crate::domain::ports::{
    BookingRepository, BookingRepositoryError, CommentRepository, CommentRepositoryError,
    ItemRepository, ItemRepositoryError, ItemRequestRepository, ItemRequestRepositoryError,
    UserRepository, UserRepositoryError,
};
use crate::domain::{
    Booking, BookingId, BookingService, BookingStatus, Comment, CommentId, CommentService, Item,
    ItemId, ItemRequest, ItemRequestService, ItemSearch, ItemService, ItemSummary, NewBooking,
    NewComment, NewItem, NewItemRequest, NewUser, RequestId, User, UserId, UserService,
};
use crate::inbound::http::state::{HttpState, HttpStatePorts};

#[derive(Debug, Clone)]
struct StoredBooking {
    item_id: ItemId,
    booker_id: UserId,
    start: NaiveDateTime,
    end: NaiveDateTime,
    status: BookingStatus,
}

#[derive(Debug, Clone)]
struct StoredComment {
    text: String,
    item_id: ItemId,
    author_id: UserId,
    created: NaiveDateTime,
}

#[derive(Debug, Default)]
struct Tables {
    sequence: i64,
    users: BTreeMap<UserId, User>,
    items: BTreeMap<ItemId, Item>,
    bookings: BTreeMap<BookingId, StoredBooking>,
    comments: BTreeMap<CommentId, StoredComment>,
    requests: BTreeMap<RequestId, ItemRequest>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.sequence += 1;
        self.sequence
    }

    fn email_taken(&self, email: &str, except: Option<UserId>) -> bool {
        self.users
            .values()
            .any(|user| user.email == email && Some(user.id) != except)
    }

    fn resolve_booking(&self, id: BookingId, stored: &StoredBooking) -> Option<Booking> {
        let item = self.items.get(&stored.item_id)?;
        let booker = self.users.get(&stored.booker_id)?;
        Some(Booking {
            id,
            start: stored.start,
            end: stored.end,
            item: ItemSummary {
                id: item.id,
                name: item.name.clone(),
                owner_id: item.owner_id,
            },
            booker: booker.summary(),
            status: stored.status,
        })
    }

    fn resolve_bookings<F>(&self, keep: F) -> Vec<Booking>
    where
        F: Fn(&StoredBooking) -> bool,
    {
        self.bookings
            .iter()
            .filter(|(_, stored)| keep(stored))
            .filter_map(|(id, stored)| self.resolve_booking(*id, stored))
            .collect()
    }

    fn resolve_comment(&self, id: CommentId, stored: &StoredComment) -> Option<Comment> {
        let author = self.users.get(&stored.author_id)?;
        Some(Comment {
            id,
            text: stored.text.clone(),
            item_id: stored.item_id,
            author: author.summary(),
            created: stored.created,
        })
    }

    fn remove_item(&mut self, id: ItemId) -> bool {
        self.bookings.retain(|_, booking| booking.item_id != id);
        self.comments.retain(|_, comment| comment.item_id != id);
        self.items.remove(&id).is_some()
    }

    fn remove_user(&mut self, id: UserId) -> bool {
        let owned: Vec<ItemId> = self
            .items
            .values()
            .filter(|item| item.owner_id == id)
            .map(|item| item.id)
            .collect();
        for item_id in owned {
            self.remove_item(item_id);
        }
        self.bookings.retain(|_, booking| booking.booker_id != id);
        self.comments.retain(|_, comment| comment.author_id != id);
        let requests: Vec<RequestId> = self
            .requests
            .values()
            .filter(|request| request.requestor_id == id)
            .map(|request| request.id)
            .collect();
        for request_id in requests {
            self.requests.remove(&request_id);
            for item in self.items.values_mut() {
                if item.request_id == Some(request_id) {
                    item.request_id = None;
                }
            }
        }
        self.users.remove(&id).is_some()
    }
}

/// Shared in-memory tables implementing every repository port.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, String> {
        self.tables
            .lock()
            .map_err(|_| "in-memory store lock poisoned".to_owned())
    }
}

/// Build HTTP state whose services all run against one fresh store.
#[must_use]
pub fn in_memory_http_state(clock: Arc<dyn Clock>) -> (Arc<InMemoryStore>, HttpState) {
    let store = Arc::new(InMemoryStore::new());
    let bookings = Arc::new(BookingService::new(
        store.clone(),
        store.clone(),
        store.clone(),
        clock.clone(),
    ));
    let comments = Arc::new(CommentService::new(store.clone(), store.clone(), clock.clone()));
    let items = Arc::new(ItemService::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        clock.clone(),
    ));
    let users = Arc::new(UserService::new(store.clone()));
    let requests = Arc::new(ItemRequestService::new(
        store.clone(),
        store.clone(),
        store.clone(),
        clock,
    ));
    let state = HttpState::new(HttpStatePorts {
        bookings: bookings.clone(),
        bookings_query: bookings,
        comments,
        items: items.clone(),
        items_query: items,
        users: users.clone(),
        users_query: users,
        requests: requests.clone(),
        requests_query: requests,
    });
    (store, state)
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, user: &NewUser) -> Result<User, UserRepositoryError> {
        let mut tables = self.lock().map_err(UserRepositoryError::query)?;
        if tables.email_taken(user.email(), None) {
            return Err(UserRepositoryError::duplicate_email(user.email()));
        }
        let id = UserId::new(tables.next_id());
        let stored = User {
            id,
            name: user.name().to_owned(),
            email: user.email().to_owned(),
        };
        tables.users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let tables = self.lock().map_err(UserRepositoryError::query)?;
        Ok(tables.users.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        let tables = self.lock().map_err(UserRepositoryError::query)?;
        Ok(tables.users.values().cloned().collect())
    }

    async fn update(&self, user: &User) -> Result<User, UserRepositoryError> {
        let mut tables = self.lock().map_err(UserRepositoryError::query)?;
        if tables.email_taken(&user.email, Some(user.id)) {
            return Err(UserRepositoryError::duplicate_email(user.email.as_str()));
        }
        match tables.users.get_mut(&user.id) {
            Some(stored) => {
                stored.clone_from(user);
                Ok(user.clone())
            }
            None => Err(UserRepositoryError::query(format!("user {} missing", user.id))),
        }
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserRepositoryError> {
        let mut tables = self.lock().map_err(UserRepositoryError::query)?;
        Ok(tables.remove_user(id))
    }
}

#[async_trait]
impl ItemRepository for InMemoryStore {
    async fn insert(&self, item: &NewItem) -> Result<Item, ItemRepositoryError> {
        let mut tables = self.lock().map_err(ItemRepositoryError::query)?;
        let id = ItemId::new(tables.next_id());
        let stored = Item {
            id,
            name: item.name.clone(),
            description: item.description.clone(),
            available: item.available,
            owner_id: item.owner_id,
            request_id: item.request_id,
        };
        tables.items.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, ItemRepositoryError> {
        let tables = self.lock().map_err(ItemRepositoryError::query)?;
        Ok(tables.items.get(&id).cloned())
    }

    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<Item>, ItemRepositoryError> {
        let tables = self.lock().map_err(ItemRepositoryError::query)?;
        Ok(tables
            .items
            .values()
            .filter(|item| item.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn search_available(
        &self,
        search: &ItemSearch,
    ) -> Result<Vec<Item>, ItemRepositoryError> {
        let tables = self.lock().map_err(ItemRepositoryError::query)?;
        Ok(tables
            .items
            .values()
            .filter(|item| search.matches(item))
            .cloned()
            .collect())
    }

    async fn list_by_requests(
        &self,
        request_ids: &[RequestId],
    ) -> Result<Vec<Item>, ItemRepositoryError> {
        let tables = self.lock().map_err(ItemRepositoryError::query)?;
        Ok(tables
            .items
            .values()
            .filter(|item| item.request_id.is_some_and(|id| request_ids.contains(&id)))
            .cloned()
            .collect())
    }

    async fn update(&self, item: &Item) -> Result<Item, ItemRepositoryError> {
        let mut tables = self.lock().map_err(ItemRepositoryError::query)?;
        match tables.items.get_mut(&item.id) {
            Some(stored) => {
                stored.clone_from(item);
                Ok(item.clone())
            }
            None => Err(ItemRepositoryError::query(format!("item {} missing", item.id))),
        }
    }

    async fn delete(&self, id: ItemId) -> Result<bool, ItemRepositoryError> {
        let mut tables = self.lock().map_err(ItemRepositoryError::query)?;
        Ok(tables.remove_item(id))
    }
}

#[async_trait]
impl BookingRepository for InMemoryStore {
    async fn insert(&self, booking: &NewBooking) -> Result<Booking, BookingRepositoryError> {
        let mut tables = self.lock().map_err(BookingRepositoryError::query)?;
        let id = BookingId::new(tables.next_id());
        let stored = StoredBooking {
            item_id: booking.item_id,
            booker_id: booking.booker_id,
            start: booking.start,
            end: booking.end,
            status: booking.status,
        };
        let resolved = tables
            .resolve_booking(id, &stored)
            .ok_or_else(|| BookingRepositoryError::query("booking references missing rows"))?;
        tables.bookings.insert(id, stored);
        Ok(resolved)
    }

    async fn find_by_id(&self, id: BookingId) -> Result<Option<Booking>, BookingRepositoryError> {
        let tables = self.lock().map_err(BookingRepositoryError::query)?;
        Ok(tables
            .bookings
            .get(&id)
            .and_then(|stored| tables.resolve_booking(id, stored)))
    }

    async fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<Booking, BookingRepositoryError> {
        let mut tables = self.lock().map_err(BookingRepositoryError::query)?;
        let stored = tables
            .bookings
            .get_mut(&id)
            .ok_or_else(|| BookingRepositoryError::query(format!("booking {id} missing")))?;
        stored.status = status;
        let snapshot = stored.clone();
        tables
            .resolve_booking(id, &snapshot)
            .ok_or_else(|| BookingRepositoryError::query("booking references missing rows"))
    }

    async fn list_by_booker(
        &self,
        booker_id: UserId,
    ) -> Result<Vec<Booking>, BookingRepositoryError> {
        let tables = self.lock().map_err(BookingRepositoryError::query)?;
        Ok(tables.resolve_bookings(|stored| stored.booker_id == booker_id))
    }

    async fn list_by_items(
        &self,
        item_ids: &[ItemId],
    ) -> Result<Vec<Booking>, BookingRepositoryError> {
        let tables = self.lock().map_err(BookingRepositoryError::query)?;
        Ok(tables.resolve_bookings(|stored| item_ids.contains(&stored.item_id)))
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn insert(&self, comment: &NewComment) -> Result<Comment, CommentRepositoryError> {
        let mut tables = self.lock().map_err(CommentRepositoryError::query)?;
        let id = CommentId::new(tables.next_id());
        let stored = StoredComment {
            text: comment.text.clone(),
            item_id: comment.item_id,
            author_id: comment.author_id,
            created: comment.created,
        };
        let resolved = tables
            .resolve_comment(id, &stored)
            .ok_or_else(|| CommentRepositoryError::query("comment author missing"))?;
        tables.comments.insert(id, stored);
        Ok(resolved)
    }

    async fn list_by_items(
        &self,
        item_ids: &[ItemId],
    ) -> Result<Vec<Comment>, CommentRepositoryError> {
        let tables = self.lock().map_err(CommentRepositoryError::query)?;
        Ok(tables
            .comments
            .iter()
            .filter(|(_, stored)| item_ids.contains(&stored.item_id))
            .filter_map(|(id, stored)| tables.resolve_comment(*id, stored))
            .collect())
    }
}

#[async_trait]
impl ItemRequestRepository for InMemoryStore {
    async fn insert(
        &self,
        request: &NewItemRequest,
    ) -> Result<ItemRequest, ItemRequestRepositoryError> {
        let mut tables = self.lock().map_err(ItemRequestRepositoryError::query)?;
        let id = RequestId::new(tables.next_id());
        let stored = ItemRequest {
            id,
            description: request.description.clone(),
            requestor_id: request.requestor_id,
            created: request.created,
        };
        tables.requests.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(
        &self,
        id: RequestId,
    ) -> Result<Option<ItemRequest>, ItemRequestRepositoryError> {
        let tables = self.lock().map_err(ItemRequestRepositoryError::query)?;
        Ok(tables.requests.get(&id).cloned())
    }

    async fn list_by_requestor(
        &self,
        requestor_id: UserId,
    ) -> Result<Vec<ItemRequest>, ItemRequestRepositoryError> {
        let tables = self.lock().map_err(ItemRequestRepositoryError::query)?;
        let mut requests: Vec<ItemRequest> = tables
            .requests
            .values()
            .filter(|request| request.requestor_id == requestor_id)
            .cloned()
            .collect();
        newest_first(&mut requests);
        Ok(requests)
    }

    async fn list_all(&self) -> Result<Vec<ItemRequest>, ItemRequestRepositoryError> {
        let tables = self.lock().map_err(ItemRequestRepositoryError::query)?;
        let mut requests: Vec<ItemRequest> = tables.requests.values().cloned().collect();
        newest_first(&mut requests);
        Ok(requests)
    }
}

fn newest_first(requests: &mut [ItemRequest]) {
    requests.sort_by(|a, b| b.created.cmp(&a.created).then_with(|| b.id.cmp(&a.id)));
}
