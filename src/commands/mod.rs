pub mod inspect;
pub mod normalize;
pub mod subscriptions;
