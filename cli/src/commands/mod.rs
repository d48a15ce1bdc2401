mod mac;

pub mod card;
pub mod dukpt;
pub mod pin;
pub mod pinblock;

pub use self::card::CardCommand;
pub use self::dukpt::DukptCommand;
pub use self::mac::MacCommand;
pub use self::pin::PinCommand;
pub use self::pinblock::PinBlockCommand;
