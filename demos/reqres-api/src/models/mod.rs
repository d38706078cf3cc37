//! Response and request models of the reqres API.
//!
//! Each model declares its wire naming once with `rename_all`: reqres uses
//! `snake_case` everywhere except `createdAt`/`updatedAt` in receipts.

mod colors;
pub use self::colors::ColorEntry;

mod envelope;
pub use self::envelope::{PaginatedCollection, SingleResource, SupportInfo};

mod registration;
pub use self::registration::{RegistrationError, RegistrationRequest, RegistrationSuccess};

mod users;
pub use self::users::{UserCreationReceipt, UserCreationRequest, UserRecord, UserUpdateReceipt};

/// `GET /users/{id}` response.
pub type UserEnvelope = SingleResource<UserRecord>;

/// `GET /unknown` response.
pub type ColorCollection = PaginatedCollection<ColorEntry>;
