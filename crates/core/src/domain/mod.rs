pub mod beverage;
pub mod pairing;
pub mod request;
pub mod response;
