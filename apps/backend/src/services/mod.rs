//! View assemblers, one per archive endpoint.
//!
//! Each service is constructed once at startup with the shared
//! [`HistoryRepo`](crate::repos::HistoryRepo) and turns an identifier from
//! the request path into a populated view or a [`DomainError`](crate::errors::DomainError).

pub mod decks;
pub mod games;
pub mod rounds;
pub mod sessions;
pub mod users;

pub use decks::DeckService;
pub use games::GameService;
pub use rounds::RoundService;
pub use sessions::SessionService;
pub use users::UserService;
