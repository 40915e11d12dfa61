mod saitama;
mod tokyo;

pub use saitama::POSTAL_CODES_SAITAMA;
pub use tokyo::POSTAL_CODES_TOKYO;
