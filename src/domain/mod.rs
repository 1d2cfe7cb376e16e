//! Domain layer: strong types with validation and invariants (no I/O).

mod contact;
mod custom_field;
mod invoice;
mod list;
mod message;
mod number;
mod params;
mod response;
mod sender_id;
mod template;
mod unsubscriber;
mod user;
mod validation;
mod value;

pub use contact::Contact;
pub use custom_field::{ContactCustomField, CustomField};
pub use invoice::Invoice;
pub use list::List;
pub use message::{
    BulkSession, Chat, ChatMessage, CountryPrice, Message, MessagePrice, NewMessage, Reply,
    Scheduled, Session,
};
pub use number::{AvailableNumbers, Country, Number};
pub use params::{ParamValue, Params};
pub use response::{ApiError, NewResource, Page};
pub use sender_id::{SenderId, Sources};
pub use template::Template;
pub use unsubscriber::Unsubscriber;
pub use user::{Currency, MessagingStat, SpendingStat, Timezone, User};
pub use validation::ValidationError;
pub use value::{ApiKey, Credentials, PhoneNumber, RawPhoneNumber, Username};
